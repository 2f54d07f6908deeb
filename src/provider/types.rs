//! Provider type definitions.
//!
//! This module contains the core type definitions for AI providers,
//! including credential sources and per-provider options.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Provider information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    /// Provider ID (e.g., "anthropic", "google")
    pub id: String,
    /// Display name
    pub name: String,
    /// Source of the provider config
    pub source: ProviderSource,
    /// Environment variables for API key
    pub env: Vec<String>,
    /// API key (if directly configured)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Provider-specific options
    #[serde(default)]
    pub options: HashMap<String, serde_json::Value>,
    /// Model used when none is specified
    pub default_model: String,
    /// Known model IDs
    #[serde(default)]
    pub models: Vec<String>,
}

impl Provider {
    /// Base URL override from the provider options, if configured
    pub fn base_url(&self) -> Option<&str> {
        self.options.get("base_url").and_then(|v| v.as_str())
    }

    /// Environment variable hint shown in credential errors
    pub fn env_hint(&self) -> &str {
        self.env.first().map(|s| s.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSource {
    Env,
    Config,
    Custom,
}
