use anyhow::{Context, Result, bail};
use client::Client;
use client::config::{ClientConfig, PUBLIC_BASE_URL};
use client::handler::GenerateEventHandler;
use config::{Config, ConfigError, File};
use request::DEFAULT_MODEL;
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_PROMPT: &str = "What is your purpose";
pub const QUESTION_PROMPT: &str = "Question: ";

#[derive(Debug)]
pub struct Settings {
    pub base_url: String,
    pub model: String,
    pub prompt: String,
    pub system: Option<String>,
    pub interactive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: PUBLIC_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            system: None,
            interactive: false,
        }
    }
}

impl Settings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            model_id: self.model.clone(),
            system: self.system.clone(),
        }
    }
}

/// Load settings from an optional config file; missing keys keep their defaults.
pub fn load_settings(name: &str) -> Result<Settings> {
    let settings = Config::builder()
        .add_source(File::with_name(name).required(false))
        .build()?;

    let defaults = Settings::default();

    let base_url = get_or(&settings, "base_url", defaults.base_url);
    let model = get_or(&settings, "model", defaults.model);
    let prompt = get_or(&settings, "prompt", defaults.prompt);
    let system = get_or(&settings, "system", defaults.system);
    let interactive = get_or(&settings, "interactive", defaults.interactive);

    info!(
        "Settings - base_url: {}, model: {}, system: {}, interactive: {}",
        base_url,
        model,
        system.is_some(),
        interactive
    );

    Ok(Settings {
        base_url,
        model,
        prompt,
        system,
        interactive,
    })
}

fn get_or<'de, T: Deserialize<'de>>(settings: &Config, key: &str, default: T) -> T {
    match settings.get(key) {
        Ok(value) => value,
        Err(ConfigError::NotFound(_)) => default,
        Err(e) => {
            warn!("Ignoring setting `{}`, using default: {}", key, e);
            default
        }
    }
}

/// Pick the prompt to send, asking on `input` when interactive.
pub fn resolve_prompt<R, W>(settings: &Settings, mut input: R, mut output: W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    if !settings.interactive {
        return Ok(settings.prompt.clone());
    }

    write!(output, "{QUESTION_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read prompt from standard input")?;
    if read == 0 {
        bail!("No prompt provided on standard input");
    }

    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    Ok(line.to_string())
}

/// Send `prompt` once and report the extracted text through `handler`.
pub async fn run(
    settings: &Settings,
    prompt: &str,
    handler: Arc<dyn GenerateEventHandler>,
) -> Result<Option<String>> {
    let client = Client::new(settings.client_config(), handler);
    client.send(prompt).await
}
