//! Provider registry for managing available AI providers.
//!
//! This module contains the `ProviderRegistry` which manages provider
//! initialization and credential resolution from config, saved keys, and
//! environment variables.

use super::types::{Provider, ProviderSource};
use crate::config::Config;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Order in which providers are tried when none is configured
pub const PROVIDER_PREFERENCE: [&str; 3] = ["anthropic", "google", "groq"];

/// Split a "provider/model" reference into its parts
pub fn parse_model_ref(model: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = model.splitn(2, '/').collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        Some((parts[0].to_string(), parts[1].to_string()))
    } else {
        None
    }
}

/// Provider registry for managing available providers
pub struct ProviderRegistry {
    providers: RwLock<HashMap<String, Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// Initialize the registry with built-in and configured providers
    pub async fn initialize(&self, config: &Config) -> Result<()> {
        let mut providers = self.providers.write().await;
        providers.clear();

        // Add built-in providers
        Self::add_builtin_providers(&mut providers);

        // Apply config overrides
        Self::apply_config_overrides(&mut providers, config);

        // Load saved API keys from auth storage
        if let Ok(auth) = crate::auth::AuthStorage::load().await {
            for (provider_id, api_key) in &auth.api_keys {
                if let Some(provider) = providers.get_mut(provider_id) {
                    if provider.key.is_none() {
                        provider.key = Some(api_key.clone());
                        provider.source = ProviderSource::Config;
                    }
                }
            }
        }

        // Check for API keys in environment (overrides saved keys)
        for provider in providers.values_mut() {
            for env_var in &provider.env {
                if let Ok(key) = std::env::var(env_var) {
                    provider.key = Some(key);
                    provider.source = ProviderSource::Env;
                    break;
                }
            }
        }

        // Filter disabled providers
        Self::apply_provider_filters(&mut providers, config);

        Ok(())
    }

    /// Add built-in provider definitions
    fn add_builtin_providers(providers: &mut HashMap<String, Provider>) {
        // Anthropic
        providers.insert(
            "anthropic".to_string(),
            Provider {
                id: "anthropic".to_string(),
                name: "Anthropic".to_string(),
                source: ProviderSource::Custom,
                env: vec!["ANTHROPIC_API_KEY".to_string()],
                key: None,
                options: HashMap::new(),
                default_model: "claude-sonnet-4-20250514".to_string(),
                models: vec![
                    "claude-sonnet-4-20250514".to_string(),
                    "claude-3-5-haiku-20241022".to_string(),
                ],
            },
        );

        // Google
        providers.insert(
            "google".to_string(),
            Provider {
                id: "google".to_string(),
                name: "Google".to_string(),
                source: ProviderSource::Custom,
                env: vec!["GOOGLE_API_KEY".to_string(), "GEMINI_API_KEY".to_string()],
                key: None,
                options: HashMap::new(),
                default_model: "gemini-1.5-flash".to_string(),
                models: vec![
                    "gemini-1.5-flash".to_string(),
                    "gemini-1.5-pro".to_string(),
                    "gemini-2.0-flash".to_string(),
                ],
            },
        );

        // Groq
        providers.insert(
            "groq".to_string(),
            Provider {
                id: "groq".to_string(),
                name: "Groq".to_string(),
                source: ProviderSource::Custom,
                env: vec!["GROQ_API_KEY".to_string()],
                key: None,
                options: HashMap::new(),
                default_model: "llama-3.3-70b-versatile".to_string(),
                models: vec![
                    "llama-3.3-70b-versatile".to_string(),
                    "llama-3.1-8b-instant".to_string(),
                ],
            },
        );
    }

    /// Apply per-provider overrides from config
    fn apply_config_overrides(providers: &mut HashMap<String, Provider>, config: &Config) {
        if let Some(provider_config) = &config.provider {
            for (id, cfg) in provider_config {
                if let Some(provider) = providers.get_mut(id) {
                    if let Some(name) = &cfg.name {
                        provider.name = name.clone();
                    }
                    if let Some(env) = &cfg.env {
                        provider.env = env.clone();
                    }
                    if let Some(options) = &cfg.options {
                        provider.options.extend(options.clone());
                    }
                    if let Some(default_model) = &cfg.default_model {
                        provider.default_model = default_model.clone();
                    }
                    if let Some(models) = &cfg.models {
                        provider.models = models.clone();
                    }
                }
            }
        }
    }

    /// Apply disabled/enabled provider filters from config
    fn apply_provider_filters(providers: &mut HashMap<String, Provider>, config: &Config) {
        if let Some(disabled) = &config.disabled_providers {
            for id in disabled {
                providers.remove(id);
            }
        }

        if let Some(enabled) = &config.enabled_providers {
            let enabled_set: std::collections::HashSet<_> = enabled.iter().collect();
            providers.retain(|id, _| enabled_set.contains(id));
        }
    }

    /// Get a provider by ID
    pub async fn get(&self, id: &str) -> Option<Provider> {
        let providers = self.providers.read().await;
        providers.get(id).cloned()
    }

    /// List all providers
    pub async fn list(&self) -> Vec<Provider> {
        let providers = self.providers.read().await;
        providers.values().cloned().collect()
    }

    /// List all providers with a resolved API key
    pub async fn list_available(&self) -> Vec<Provider> {
        let providers = self.providers.read().await;
        providers
            .values()
            .filter(|p| p.key.is_some())
            .cloned()
            .collect()
    }

    /// Get the default provider and model.
    ///
    /// The configured `model` wins; otherwise providers with a key are
    /// tried in preference order so the choice is stable across runs.
    pub async fn default_model(&self, config: &Config) -> Option<(String, String)> {
        if let Some(model) = &config.model {
            if let Some(parts) = parse_model_ref(model) {
                return Some(parts);
            }
        }

        let providers = self.providers.read().await;
        for id in PROVIDER_PREFERENCE {
            if let Some(provider) = providers.get(id) {
                if provider.key.is_some() {
                    return Some((provider.id.clone(), provider.default_model.clone()));
                }
            }
        }

        // Any remaining provider with a key (custom-enabled setups)
        providers
            .values()
            .find(|p| p.key.is_some())
            .map(|p| (p.id.clone(), p.default_model.clone()))
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Global provider registry
static GLOBAL_REGISTRY: std::sync::LazyLock<Arc<ProviderRegistry>> =
    std::sync::LazyLock::new(|| Arc::new(ProviderRegistry::new()));

/// Get the global provider registry
pub fn registry() -> Arc<ProviderRegistry> {
    GLOBAL_REGISTRY.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use pretty_assertions::assert_eq;

    fn builtins() -> HashMap<String, Provider> {
        let mut providers = HashMap::new();
        ProviderRegistry::add_builtin_providers(&mut providers);
        providers
    }

    mod model_refs {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_model_ref() {
            assert_eq!(
                parse_model_ref("anthropic/claude-sonnet-4-20250514"),
                Some((
                    "anthropic".to_string(),
                    "claude-sonnet-4-20250514".to_string()
                ))
            );
        }

        #[test]
        fn test_parse_model_ref_keeps_slashes_in_model() {
            assert_eq!(
                parse_model_ref("groq/meta/llama-3.3"),
                Some(("groq".to_string(), "meta/llama-3.3".to_string()))
            );
        }

        #[test]
        fn test_parse_model_ref_rejects_partial_refs() {
            assert_eq!(parse_model_ref("anthropic"), None);
            assert_eq!(parse_model_ref("anthropic/"), None);
            assert_eq!(parse_model_ref("/model"), None);
        }
    }

    mod builtins_table {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_builtin_providers_present() {
            let providers = builtins();
            assert_eq!(providers.len(), 3);
            for id in PROVIDER_PREFERENCE {
                assert!(providers.contains_key(id), "missing builtin: {}", id);
            }
        }

        #[test]
        fn test_builtin_env_vars() {
            let providers = builtins();
            assert_eq!(providers["anthropic"].env, vec!["ANTHROPIC_API_KEY"]);
            assert_eq!(
                providers["google"].env,
                vec!["GOOGLE_API_KEY", "GEMINI_API_KEY"]
            );
            assert_eq!(providers["groq"].env, vec!["GROQ_API_KEY"]);
        }

        #[test]
        fn test_builtin_default_models() {
            let providers = builtins();
            assert_eq!(
                providers["anthropic"].default_model,
                "claude-sonnet-4-20250514"
            );
            assert_eq!(providers["google"].default_model, "gemini-1.5-flash");
            assert_eq!(providers["groq"].default_model, "llama-3.3-70b-versatile");
        }
    }

    mod overrides {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_config_overrides_default_model_and_options() {
            let mut providers = builtins();
            let config = Config {
                provider: Some(HashMap::from([(
                    "google".to_string(),
                    ProviderConfig {
                        default_model: Some("gemini-2.0-flash".to_string()),
                        options: Some(HashMap::from([(
                            "base_url".to_string(),
                            serde_json::json!("http://localhost:9000"),
                        )])),
                        ..Default::default()
                    },
                )])),
                ..Default::default()
            };

            ProviderRegistry::apply_config_overrides(&mut providers, &config);

            assert_eq!(providers["google"].default_model, "gemini-2.0-flash");
            assert_eq!(
                providers["google"].base_url(),
                Some("http://localhost:9000")
            );
        }

        #[test]
        fn test_unknown_provider_override_is_ignored() {
            let mut providers = builtins();
            let config = Config {
                provider: Some(HashMap::from([(
                    "openai".to_string(),
                    ProviderConfig::default(),
                )])),
                ..Default::default()
            };

            ProviderRegistry::apply_config_overrides(&mut providers, &config);
            assert_eq!(providers.len(), 3);
            assert!(!providers.contains_key("openai"));
        }
    }

    mod filters {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_disabled_providers_removed() {
            let mut providers = builtins();
            let config = Config {
                disabled_providers: Some(vec!["groq".to_string()]),
                ..Default::default()
            };

            ProviderRegistry::apply_provider_filters(&mut providers, &config);
            assert_eq!(providers.len(), 2);
            assert!(!providers.contains_key("groq"));
        }

        #[test]
        fn test_enabled_providers_keep_only_listed() {
            let mut providers = builtins();
            let config = Config {
                enabled_providers: Some(vec!["anthropic".to_string()]),
                ..Default::default()
            };

            ProviderRegistry::apply_provider_filters(&mut providers, &config);
            assert_eq!(providers.len(), 1);
            assert!(providers.contains_key("anthropic"));
        }
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_configured_model_ref_wins() {
            let registry = ProviderRegistry::new();
            let config = Config {
                model: Some("groq/llama-3.1-8b-instant".to_string()),
                ..Default::default()
            };

            assert_eq!(
                registry.default_model(&config).await,
                Some(("groq".to_string(), "llama-3.1-8b-instant".to_string()))
            );
        }

        #[tokio::test]
        async fn test_preference_order_over_keyed_providers() {
            let registry = ProviderRegistry::new();
            {
                let mut providers = registry.providers.write().await;
                ProviderRegistry::add_builtin_providers(&mut providers);
                providers.get_mut("google").unwrap().key = Some("g-key".to_string());
                providers.get_mut("groq").unwrap().key = Some("q-key".to_string());
            }

            // anthropic has no key, so google (earlier in preference) wins
            assert_eq!(
                registry.default_model(&Config::default()).await,
                Some(("google".to_string(), "gemini-1.5-flash".to_string()))
            );
        }

        #[tokio::test]
        async fn test_no_keys_no_default() {
            let registry = ProviderRegistry::new();
            {
                let mut providers = registry.providers.write().await;
                ProviderRegistry::add_builtin_providers(&mut providers);
            }

            assert_eq!(registry.default_model(&Config::default()).await, None);
        }
    }
}
