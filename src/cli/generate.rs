//! Generate command - runs a single generation without the TUI.

use crate::config::Config;
use crate::content::{ContentEngine, GeneratedContent, GenerationRequest, Mode, Tone};
use crate::id::{self, IdPrefix};
use crate::provider;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Options for a one-shot generation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub niche: Option<String>,
    pub topic: Option<String>,
    pub tone: Option<Tone>,
    pub mode: Mode,
    pub model: Option<String>,
    pub copy: bool,
    pub json: bool,
}

/// Execute a single generation and print the result
pub async fn execute(options: GenerateOptions) -> Result<()> {
    // Load configuration
    let config = Config::load().await?;

    // Initialize provider registry
    provider::registry().initialize(&config).await?;

    // Resolve model
    let (provider_id, model_id) = resolve_model(options.model.as_deref(), &config).await?;

    let provider_info = provider::registry()
        .get(&provider_id)
        .await
        .ok_or_else(|| anyhow::anyhow!("Provider not found: {}", provider_id))?;

    let request = build_request(&options, &config);

    let generation_id = id::ascending(IdPrefix::Generation);
    tracing::debug!(
        "Starting generation {} ({} via {}/{})",
        generation_id,
        request.mode,
        provider_id,
        model_id
    );

    let engine = ContentEngine::new()?;
    let mut rng = StdRng::from_os_rng();
    let content = engine
        .generate(&request, &provider_info, &model_id, &mut rng)
        .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&to_json(&content))?);
    } else {
        println!("{}", content.to_plain_text());
    }

    if options.copy {
        crate::clipboard::copy_to_clipboard(&content.to_plain_text())?;
        eprintln!("Copied to clipboard");
    }

    Ok(())
}

/// Resolve which model to use based on priority
async fn resolve_model(model: Option<&str>, config: &Config) -> Result<(String, String)> {
    if let Some(m) = model {
        // CLI argument takes highest priority
        return provider::parse_model_ref(m)
            .ok_or_else(|| anyhow::anyhow!("Invalid model format. Use 'provider/model'"));
    }

    // Config model, then first keyed provider in preference order
    provider::registry()
        .default_model(config)
        .await
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No provider is configured. Set an API key \
                 (e.g. ANTHROPIC_API_KEY) or run `scoopz auth login`"
            )
        })
}

/// Build the generation request, filling gaps from config defaults
fn build_request(options: &GenerateOptions, config: &Config) -> GenerationRequest {
    let niche = options
        .niche
        .clone()
        .or_else(|| config.default_niche.clone())
        .unwrap_or_default();

    let tone = options
        .tone
        .or_else(|| config.default_tone.as_deref().and_then(|t| t.parse().ok()))
        .unwrap_or_default();

    GenerationRequest {
        niche,
        topic: options.topic.clone().unwrap_or_default(),
        tone,
        mode: options.mode,
    }
}

/// JSON form of the generated content for --json output
fn to_json(content: &GeneratedContent) -> serde_json::Value {
    match content {
        GeneratedContent::Text(text) => serde_json::json!({ "text": text }),
        GeneratedContent::Package(package) => serde_json::json!({ "package": package }),
        GeneratedContent::Calendar(days) => serde_json::json!({ "days": days }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod requests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_flags_override_config_defaults() {
            let options = GenerateOptions {
                niche: Some("fitness".to_string()),
                tone: Some(Tone::Energetic),
                mode: Mode::Script,
                ..Default::default()
            };
            let config = Config {
                default_niche: Some("cooking".to_string()),
                default_tone: Some("professional".to_string()),
                ..Default::default()
            };

            let request = build_request(&options, &config);
            assert_eq!(request.niche, "fitness");
            assert_eq!(request.tone, Tone::Energetic);
        }

        #[test]
        fn test_config_defaults_fill_gaps() {
            let options = GenerateOptions::default();
            let config = Config {
                default_niche: Some("cooking".to_string()),
                default_tone: Some("humorous".to_string()),
                ..Default::default()
            };

            let request = build_request(&options, &config);
            assert_eq!(request.niche, "cooking");
            assert_eq!(request.tone, Tone::Humorous);
        }

        #[test]
        fn test_bad_config_tone_falls_back_to_default() {
            let options = GenerateOptions::default();
            let config = Config {
                default_tone: Some("sarcastic".to_string()),
                ..Default::default()
            };

            let request = build_request(&options, &config);
            assert_eq!(request.tone, Tone::Casual);
        }
    }

    mod json_output {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_wraps_in_text_key() {
            let value = to_json(&GeneratedContent::Text("ideas".to_string()));
            assert_eq!(value, serde_json::json!({ "text": "ideas" }));
        }

        #[test]
        fn test_calendar_uses_days_envelope() {
            let value = to_json(&GeneratedContent::Calendar(vec![]));
            assert_eq!(value, serde_json::json!({ "days": [] }));
        }
    }
}
