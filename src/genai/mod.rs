pub mod interface;
pub mod gemini;
pub mod analysis;
pub mod client;
pub mod factory;

pub use interface::*;
pub use analysis::CommunicationAnalysis;
pub use client::*;
pub use factory::*;
