//! Content generation engine.
//!
//! This module ties the pipeline together: validate the request, build
//! the prompt, call the provider, and shape the response for the
//! request mode. Structured modes (package, calendar) absorb provider
//! failures with fallback content; plain-text modes surface the error.
//!
//! Input and credential problems are never absorbed. Showing fallback
//! content for a bad API key would hide exactly the thing the user
//! needs to fix.

use super::fallback;
use super::normalize;
use super::prompt;
use super::types::{GeneratedContent, GenerationRequest, Mode};
use crate::provider::{InferenceClient, InferenceError, Provider};
use anyhow::Context;
use rand::Rng;
use thiserror::Error;

/// Errors from a generation attempt
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request had no niche or topic to work with
    #[error("Please enter a niche or topic first")]
    InputMissing,

    /// No API key resolved for the selected provider
    #[error("no API key for {provider}; set {env_hint} or run `scoopz auth login`")]
    CredentialMissing { provider: String, env_hint: String },

    /// The provider rejected the API key
    #[error("invalid API key: {0}")]
    InvalidCredential(String),

    /// The provider answered with an error
    #[error("{0}")]
    Provider(String),

    /// The request never reached the provider
    #[error("request failed: {0}")]
    Transport(String),

    /// The response text could not be shaped for the request mode
    #[error("failed to parse AI response")]
    MalformedResponse,
}

impl From<InferenceError> for GenerateError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Api {
                status: 401,
                message,
            } => GenerateError::InvalidCredential(message),
            InferenceError::Api { message, .. } => GenerateError::Provider(message),
            InferenceError::Network(e) => GenerateError::Transport(e.to_string()),
            InferenceError::MissingContent => GenerateError::MalformedResponse,
            InferenceError::UnsupportedProvider(id) => {
                GenerateError::Provider(format!("unsupported provider: {}", id))
            }
        }
    }
}

/// Whether a failure may be absorbed by fallback content.
///
/// Input and credential problems always surface so the user can fix
/// them; everything else is absorbable when the mode has a fallback.
fn absorbable(error: &GenerateError) -> bool {
    !matches!(
        error,
        GenerateError::InputMissing
            | GenerateError::CredentialMissing { .. }
            | GenerateError::InvalidCredential(_)
    )
}

/// Generation pipeline entry point
pub struct ContentEngine {
    client: InferenceClient,
}

impl ContentEngine {
    pub fn new() -> anyhow::Result<Self> {
        let client = InferenceClient::new().context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Run one generation for the request against a provider.
    ///
    /// The random source feeds fallback content selection, so callers
    /// in spawned tasks should bring a `StdRng`.
    pub async fn generate<R: Rng>(
        &self,
        request: &GenerationRequest,
        provider: &Provider,
        model: &str,
        rng: &mut R,
    ) -> Result<GeneratedContent, GenerateError> {
        if request.missing_input() {
            return Err(GenerateError::InputMissing);
        }

        match self.generate_once(request, provider, model).await {
            Ok(content) => Ok(content),
            Err(error) if absorbable(&error) => match fallback::fallback_content(request, rng) {
                Some(content) => {
                    tracing::warn!("Generation failed, using fallback content: {}", error);
                    Ok(content)
                }
                None => Err(error),
            },
            Err(error) => Err(error),
        }
    }

    /// One provider round trip with no fallback
    async fn generate_once(
        &self,
        request: &GenerationRequest,
        provider: &Provider,
        model: &str,
    ) -> Result<GeneratedContent, GenerateError> {
        let api_key = provider
            .key
            .as_deref()
            .ok_or_else(|| GenerateError::CredentialMissing {
                provider: provider.id.clone(),
                env_hint: provider.env_hint().to_string(),
            })?;

        let prompt = prompt::build_prompt(request);
        tracing::debug!(
            "Requesting {} completion from {}/{}",
            request.mode,
            provider.id,
            model
        );

        let raw = self
            .client
            .complete(provider, model, api_key, &prompt)
            .await?;

        normalize_response(request, &raw)
    }
}

/// Shape the raw response text for the request mode
fn normalize_response(
    request: &GenerationRequest,
    raw: &str,
) -> Result<GeneratedContent, GenerateError> {
    match request.mode {
        Mode::Package => normalize::parse_package(raw)
            .map(GeneratedContent::Package)
            .map_err(|_| GenerateError::MalformedResponse),
        Mode::Calendar => normalize::parse_calendar(raw)
            .map(GeneratedContent::Calendar)
            .map_err(|_| GenerateError::MalformedResponse),
        _ => Ok(GeneratedContent::Text(normalize::normalize_text(raw))),
    }
}
