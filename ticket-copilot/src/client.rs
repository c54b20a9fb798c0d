#![doc = "HTTP client for the remote RAG processor, implementing the core `TicketProcessor` trait."]
//
//! # Processor Client (CLI <-> RAG service)
//!
//! This module wires the [`TicketProcessor`] trait from `ticket-copilot-core`
//! to a RAG service reachable over HTTP.
//!
//! - Construct [`RagClient`] from [`ProcessorSettings`], or with
//!   [`connect_rag_client`] (config file plus `TICKET_RAG_ENDPOINT`, `TICKET_RAG_API_KEY`).
//! - One POST per ticket to `<endpoint>/tickets/process`; no retries.
//! - Responses are decoded strictly with [`decode_result`].

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use ticket_copilot_core::decode::decode_result;
use ticket_copilot_core::{
    DecodeError, ProcessorError, TicketProcessor, TicketRequest, TicketResult,
};

use crate::load_config::{resolve_settings, CliConfig};

const PROCESS_PATH: &str = "tickets/process";

/// Where to reach the processor and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
}

pub struct RagClient {
    http: reqwest::Client,
    process_url: Url,
    api_key: Option<String>,
}

impl RagClient {
    pub fn new(settings: ProcessorSettings) -> Result<Self, ProcessorError> {
        let base = settings.endpoint.trim_end_matches('/');
        let process_url = Url::parse(&format!("{base}/{PROCESS_PATH}")).map_err(|e| {
            tracing::error!(error = ?e, endpoint = %settings.endpoint, "Invalid processor endpoint");
            ProcessorError::Init(format!("invalid processor endpoint '{}': {e}", settings.endpoint))
        })?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ProcessorError::Init(format!("failed to build HTTP client: {e}")))?;

        tracing::info!(
            url = %process_url,
            api_key_set = settings.api_key.is_some(),
            "Initialized RagClient"
        );
        Ok(RagClient {
            http,
            process_url,
            api_key: settings.api_key,
        })
    }

    pub fn process_url(&self) -> &Url {
        &self.process_url
    }
}

/// Build a [`RagClient`] from the optional file config plus the environment.
pub fn connect_rag_client(config: Option<&CliConfig>) -> Result<RagClient, ProcessorError> {
    RagClient::new(resolve_settings(config)?)
}

#[async_trait]
impl TicketProcessor for RagClient {
    async fn process_allowed_ticket(
        &self,
        request: TicketRequest,
    ) -> Result<TicketResult, ProcessorError> {
        tracing::info!(
            employee_id = %request.employee_id,
            intent = %request.intent,
            "Submitting ticket to processor"
        );

        let mut builder = self.http.post(self.process_url.clone()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "Processor request failed");
            ProcessorError::Transport(e.to_string())
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProcessorError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            tracing::error!(%status, "Processor answered with an error status");
            return Err(ProcessorError::Transport(format!("HTTP {status}: {body}")));
        }

        let value: Value = serde_json::from_str(&body).map_err(DecodeError::from)?;
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            tracing::warn!(error = %message, "Processor rejected the ticket");
            return Err(ProcessorError::Rejected(message.to_string()));
        }

        let result = decode_result(value)?;
        tracing::info!(status = %result.status, kb_relevance = result.kb_relevance, "Processor returned a result");
        Ok(result)
    }
}
