/// `load_config` module: Loads the optional static YAML config and merges it with
/// environment variables into the settings used to reach the RAG processor.
///
/// # Responsibilities
/// - Parse a user-supplied YAML file into type-safe structs
/// - Let `TICKET_RAG_ENDPOINT` provide or override the processor endpoint
/// - Inject secrets (`TICKET_RAG_API_KEY`) from the environment only; the YAML never carries them
///
/// # Errors
/// File and YAML failures use `anyhow::Error` for context-rich diagnostics.
/// A missing endpoint is a [`ProcessorError::Init`], since it stops the processor
/// from being constructed.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use ticket_copilot_core::ProcessorError;
use tracing::{error, info};

use crate::client::ProcessorSettings;

pub const ENDPOINT_ENV: &str = "TICKET_RAG_ENDPOINT";
pub const API_KEY_ENV: &str = "TICKET_RAG_API_KEY";

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub processor: ProcessorSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProcessorSection {
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Loads a static YAML config file (no secrets).
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = fs::read_to_string(path_ref).with_context(|| {
        error!(config_path = ?path_ref, "Failed to read config file");
        format!("Failed to read config file {:?}", path_ref)
    })?;

    let config: CliConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    Ok(config)
}

/// Merge the optional file config with the environment into [`ProcessorSettings`].
pub fn resolve_settings(config: Option<&CliConfig>) -> Result<ProcessorSettings, ProcessorError> {
    let from_env = std::env::var(ENDPOINT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty());
    let from_file = config.and_then(|c| c.processor.endpoint.clone());

    let endpoint = match (from_env, from_file) {
        (Some(env_endpoint), _) => {
            info!(endpoint = %env_endpoint, "Processor endpoint taken from {ENDPOINT_ENV}");
            env_endpoint
        }
        (None, Some(file_endpoint)) => {
            info!(endpoint = %file_endpoint, "Processor endpoint taken from config file");
            file_endpoint
        }
        (None, None) => {
            error!("No processor endpoint configured");
            return Err(ProcessorError::Init(format!(
                "no processor endpoint configured; set {ENDPOINT_ENV} or processor.endpoint in --config"
            )));
        }
    };

    let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
    info!(api_key_set = api_key.is_some(), "Resolved processor settings");

    Ok(ProcessorSettings { endpoint, api_key })
}
