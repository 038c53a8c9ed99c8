use std::sync::Arc;
use tracing::{error, info, warn};

use super::analysis::{build_analysis_prompt, parse_analysis_reply, CommunicationAnalysis};
use super::interface::{ChatMessage, Content, GenAiError, GenerationConfig, GenerativeModel};

pub const GENERATE_PLACEHOLDER: &str = "Unable to generate response.";
pub const CHAT_PLACEHOLDER: &str = "Unable to continue conversation.";

/// Generative-AI client. Every public operation is total: failures turn into
/// fallback values instead of errors.
pub struct GenAiClient {
    model: Arc<dyn GenerativeModel>,
    analysis_config: GenerationConfig,
    generation_temperature: f32,
}

impl GenAiClient {
    pub fn new(
        model: Arc<dyn GenerativeModel>,
        analysis_config: GenerationConfig,
        generation_temperature: f32,
    ) -> Self {
        Self {
            model,
            analysis_config,
            generation_temperature,
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Analyze `text` for emotion, ambiguity and a clearer rewrite
    pub async fn analyze(&self, text: &str, language: &str) -> CommunicationAnalysis {
        let prompt = build_analysis_prompt(text, language);
        let reply = match self
            .model
            .generate_content(&[Content::user(prompt)], Some(&self.analysis_config))
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error analyzing communication: {}", e);
                return CommunicationAnalysis::fallback(text);
            }
        };

        match parse_analysis_reply(&reply) {
            Ok(analysis) => {
                info!("Successfully analyzed text: {}", preview(text, 50));
                analysis
            }
            Err(e) => {
                error!("Failed to parse analysis reply: {}", e);
                warn!("Reply text: {}", reply);
                CommunicationAnalysis::fallback("")
            }
        }
    }

    /// Free-form single-turn generation
    pub async fn generate(&self, prompt: &str, max_tokens: u32) -> String {
        let config = GenerationConfig {
            temperature: Some(self.generation_temperature),
            max_output_tokens: Some(max_tokens),
            ..GenerationConfig::default()
        };
        match self
            .model
            .generate_content(&[Content::user(prompt)], Some(&config))
            .await
        {
            Ok(text) => text,
            Err(e) => {
                error!("Error generating text: {}", e);
                GENERATE_PLACEHOLDER.to_string()
            }
        }
    }

    /// Replay every user message but the last into a session, then send the last one.
    pub async fn chat(&self, messages: &[ChatMessage]) -> String {
        match self.replay_chat(messages).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error in chat: {}", e);
                CHAT_PLACEHOLDER.to_string()
            }
        }
    }

    async fn replay_chat(&self, messages: &[ChatMessage]) -> Result<String, GenAiError> {
        let (last, earlier) = messages.split_last().ok_or(GenAiError::EmptyResponse)?;

        let mut session = ChatSession::new(self.model.as_ref());
        for message in earlier.iter().filter(|m| m.role == "user") {
            session.send_message(&message.content).await?;
        }
        session.send_message(&last.content).await
    }
}

/// Multi-turn session accumulating history the way a hosted chat does
struct ChatSession<'a> {
    model: &'a dyn GenerativeModel,
    history: Vec<Content>,
}

impl<'a> ChatSession<'a> {
    fn new(model: &'a dyn GenerativeModel) -> Self {
        Self {
            model,
            history: Vec::new(),
        }
    }

    async fn send_message(&mut self, text: &str) -> Result<String, GenAiError> {
        self.history.push(Content::user(text));
        match self.model.generate_content(&self.history, None).await {
            Ok(reply) => {
                self.history.push(Content::model(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
