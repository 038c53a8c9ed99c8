use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use tracing::debug;

/// Read a configuration file and replace `${VAR_NAME}` with environment values.
/// Unknown variables are left untouched.
pub fn read_config_text(config_path: &str) -> Result<String> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let mut buffer = fs::read(config_path)?;
    // Remove BOM if present
    if buffer.starts_with(&[0xEF, 0xBB, 0xBF]) {
        buffer.drain(0..3);
    }
    let content = String::from_utf8(buffer)?;

    let substituted = substitute_env_vars(&content)?;
    debug!("Read configuration file: {}", config_path);
    Ok(substituted)
}

pub fn substitute_env_vars(content: &str) -> Result<String> {
    substitute_with(content, |name| std::env::var(name).ok())
}

fn substitute_with<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Pick a `config` crate file format from the file extension (YAML otherwise)
pub fn file_format_for(config_path: &str) -> ::config::FileFormat {
    let path_lower = config_path.to_lowercase();
    if path_lower.ends_with(".json") || path_lower.ends_with(".jsonld") {
        ::config::FileFormat::Json
    } else if path_lower.ends_with(".toml") {
        ::config::FileFormat::Toml
    } else {
        ::config::FileFormat::Yaml
    }
}
