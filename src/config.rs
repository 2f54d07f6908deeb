//! Configuration management module.
//!
//! This module handles loading and managing configuration from various sources:
//! - Global config file (~/.config/scoopz/scoopz.json)
//! - Project config file (./scoopz.json or ./scoopz.jsonc)
//! - Environment variables
//!
//! Configuration follows a layered approach where project config overrides global config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// JSON schema reference
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Theme name ("dark" or "light")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Default model in provider/model format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Niche pre-filled in the niche input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_niche: Option<String>,

    /// Tone used when none is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tone: Option<String>,

    /// Log level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Disabled providers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_providers: Option<Vec<String>>,

    /// Enabled providers (if set, only these are enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_providers: Option<Vec<String>>,

    /// Provider configurations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<HashMap<String, ProviderConfig>>,

    /// TUI settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tui: Option<TuiConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProviderConfig {
    pub name: Option<String>,
    pub env: Option<Vec<String>>,
    pub options: Option<HashMap<String, serde_json::Value>>,
    pub default_model: Option<String>,
    pub models: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TuiConfig {
    /// Seconds between footer tagline rotations
    pub tagline_rotation_secs: Option<u64>,
}

impl Config {
    /// Load configuration from all sources
    pub async fn load() -> Result<Self> {
        let mut config = Config::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global_config) = Self::load_file(&global_path).await? {
                config = config.merge(global_config);
            }
        }

        // Load project config
        if let Some(project_path) = Self::find_project_config().await? {
            if let Some(project_config) = Self::load_file(&project_path).await? {
                config = config.merge(project_config);
            }
        }

        // Apply environment variable overrides
        config = config.apply_env_overrides();

        Ok(config)
    }

    /// Get the global config directory path
    pub fn global_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scoopz"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|p| p.join("scoopz.json"))
    }

    /// Find project config file in current directory or parent directories
    async fn find_project_config() -> Result<Option<PathBuf>> {
        let mut current = std::env::current_dir()?;

        loop {
            // Check for scoopz.jsonc first, then scoopz.json
            for filename in &["scoopz.jsonc", "scoopz.json"] {
                let config_path = current.join(filename);
                if config_path.exists() {
                    return Ok(Some(config_path));
                }
            }

            // Also check .scoopz directory
            let scoopz_dir = current.join(".scoopz");
            if scoopz_dir.exists() {
                for filename in &["scoopz.jsonc", "scoopz.json"] {
                    let config_path = scoopz_dir.join(filename);
                    if config_path.exists() {
                        return Ok(Some(config_path));
                    }
                }
            }

            // Move to parent directory
            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Load configuration from a file
    async fn load_file(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        // Handle empty or whitespace-only files
        if content.trim().is_empty() {
            return Ok(Some(Config::default()));
        }

        // Handle JSONC (JSON with comments)
        let content = Self::strip_jsonc_comments(&content);

        // Strip trailing commas
        let content = Self::strip_trailing_commas(&content);

        // Handle environment variable substitution
        let content = Self::substitute_env_vars(&content);

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(Some(config))
    }

    /// Strip comments from JSONC content
    fn strip_jsonc_comments(content: &str) -> String {
        let mut result = String::new();
        let mut in_string = false;
        let mut in_line_comment = false;
        let mut in_block_comment = false;
        let mut chars = content.chars().peekable();

        while let Some(c) = chars.next() {
            if in_line_comment {
                if c == '\n' {
                    in_line_comment = false;
                    result.push(c);
                }
                continue;
            }

            if in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    in_block_comment = false;
                }
                continue;
            }

            if c == '"' && !in_string {
                in_string = true;
                result.push(c);
                continue;
            }

            if c == '"' && in_string {
                // Check for escape
                let mut backslash_count = 0;
                for ch in result.chars().rev() {
                    if ch == '\\' {
                        backslash_count += 1;
                    } else {
                        break;
                    }
                }
                if backslash_count % 2 == 0 {
                    in_string = false;
                }
                result.push(c);
                continue;
            }

            if !in_string {
                if c == '/' && chars.peek() == Some(&'/') {
                    chars.next();
                    in_line_comment = true;
                    continue;
                }

                if c == '/' && chars.peek() == Some(&'*') {
                    chars.next();
                    in_block_comment = true;
                    continue;
                }
            }

            result.push(c);
        }

        result
    }

    /// Strip trailing commas from JSON (common in JSONC)
    fn strip_trailing_commas(content: &str) -> String {
        // Remove trailing commas before closing braces or brackets
        let re = regex::Regex::new(r",(\s*[}\]])").unwrap();
        re.replace_all(content, "$1").to_string()
    }

    /// Substitute environment variables in the format {env:VAR_NAME}
    fn substitute_env_vars(content: &str) -> String {
        let re = regex::Regex::new(r"\{env:([^}]+)\}").unwrap();
        re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        })
        .to_string()
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if other.schema.is_some() {
            self.schema = other.schema;
        }
        if other.theme.is_some() {
            self.theme = other.theme;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.default_niche.is_some() {
            self.default_niche = other.default_niche;
        }
        if other.default_tone.is_some() {
            self.default_tone = other.default_tone;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
        if other.disabled_providers.is_some() {
            self.disabled_providers = other.disabled_providers;
        }
        if other.enabled_providers.is_some() {
            self.enabled_providers = other.enabled_providers;
        }

        // Merge maps
        if let Some(other_providers) = other.provider {
            let providers = self.provider.get_or_insert_with(HashMap::new);
            providers.extend(other_providers);
        }

        if other.tui.is_some() {
            self.tui = other.tui;
        }

        self
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("SCOOPZ_MODEL") {
            self.model = Some(model);
        }
        if let Ok(theme) = std::env::var("SCOOPZ_THEME") {
            self.theme = Some(theme);
        }
        if let Ok(log_level) = std::env::var("SCOOPZ_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }
        if let Ok(niche) = std::env::var("SCOOPZ_NICHE") {
            self.default_niche = Some(niche);
        }
        if let Ok(tone) = std::env::var("SCOOPZ_TONE") {
            self.default_tone = Some(tone);
        }
        self
    }

    /// Seconds between footer tagline rotations, with the default applied
    pub fn tagline_rotation_secs(&self) -> u64 {
        self.tui
            .as_ref()
            .and_then(|t| t.tagline_rotation_secs)
            .unwrap_or(8)
    }

    /// Create a default config file if it doesn't exist
    pub async fn init() -> Result<PathBuf> {
        let config_dir = Self::global_config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create config directory if it doesn't exist
        fs::create_dir_all(&config_dir)
            .await
            .context("Failed to create config directory")?;

        let config_path = config_dir.join("scoopz.json");

        if !config_path.exists() {
            // Create default config
            let default_config = Config {
                schema: Some("https://scoopz.app/schema/config.json".to_string()),
                theme: Some("dark".to_string()),
                model: None, // User needs to configure this
                default_niche: None,
                default_tone: Some("casual".to_string()),
                log_level: Some("info".to_string()),
                disabled_providers: None,
                enabled_providers: None,
                provider: Some(HashMap::new()),
                tui: Some(TuiConfig {
                    tagline_rotation_secs: Some(8),
                }),
            };

            let content = serde_json::to_string_pretty(&default_config)?;
            fs::write(&config_path, content)
                .await
                .context("Failed to write default config file")?;
        }

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_jsonc_comments() {
        let input = r#"{
            // This is a comment
            "key": "value", // inline comment
            /* block
               comment */
            "key2": "value2"
        }"#;

        let result = Config::strip_jsonc_comments(input);
        assert!(!result.contains("//"));
        assert!(!result.contains("/*"));
        assert!(result.contains(r#""key": "value""#));
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("TEST_VAR", "test_value");
        let input = r#"{"key": "{env:TEST_VAR}"}"#;
        let result = Config::substitute_env_vars(input);
        assert_eq!(result, r#"{"key": "test_value"}"#);
    }

    #[test]
    fn test_merge_configs() {
        let config1 = Config {
            theme: Some("dark".to_string()),
            model: Some("anthropic/claude-sonnet-4-20250514".to_string()),
            ..Default::default()
        };

        let config2 = Config {
            theme: Some("light".to_string()),
            default_niche: Some("fitness".to_string()),
            ..Default::default()
        };

        let merged = config1.merge(config2);
        assert_eq!(merged.theme, Some("light".to_string()));
        assert_eq!(
            merged.model,
            Some("anthropic/claude-sonnet-4-20250514".to_string())
        );
        assert_eq!(merged.default_niche, Some("fitness".to_string()));
    }

    #[test]
    fn test_strip_trailing_commas() {
        let input = r#"{
            "key": "value",
            "nested": {
                "foo": "bar",
            },
            "array": [1, 2, 3,],
        }"#;

        let result = Config::strip_trailing_commas(input);
        assert!(!result.contains(",}"));
        assert!(!result.contains(",]"));

        // Should be valid JSON after stripping
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(&result);
        assert!(parsed.is_ok());
    }

    #[tokio::test]
    async fn test_load_file_accepts_jsonc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoopz.jsonc");
        fs::write(
            &path,
            r#"{
                // project overrides
                "theme": "light",
                "default_niche": "cooking",
            }"#,
        )
        .await
        .unwrap();

        let config = Config::load_file(&path).await.unwrap().unwrap();
        assert_eq!(config.theme, Some("light".to_string()));
        assert_eq!(config.default_niche, Some("cooking".to_string()));
    }

    #[tokio::test]
    async fn test_load_file_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_file(&dir.path().join("absent.json"))
            .await
            .unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_tagline_rotation_default() {
        let config = Config::default();
        assert_eq!(config.tagline_rotation_secs(), 8);

        let config = Config {
            tui: Some(TuiConfig {
                tagline_rotation_secs: Some(12),
            }),
            ..Default::default()
        };
        assert_eq!(config.tagline_rotation_secs(), 12);
    }

    #[test]
    fn test_provider_config_parses() {
        let input = r#"{
            "provider": {
                "groq": {
                    "default_model": "llama-3.3-70b-versatile",
                    "options": { "base_url": "https://api.groq.com/openai/v1" }
                }
            }
        }"#;

        let config: Config = serde_json::from_str(input).unwrap();
        let groq = &config.provider.unwrap()["groq"];
        assert_eq!(
            groq.default_model.as_deref(),
            Some("llama-3.3-70b-versatile")
        );
        assert!(groq.options.as_ref().unwrap().contains_key("base_url"));
    }
}
