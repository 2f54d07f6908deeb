//! Auth management CLI commands.

use crate::auth;
use crate::config::Config;
use crate::provider::{self, ProviderSource};
use anyhow::Result;

/// List providers and their credential status
pub async fn list() -> Result<()> {
    let config = Config::load().await?;
    provider::registry().initialize(&config).await?;

    let mut providers = provider::registry().list().await;
    providers.sort_by(|a, b| a.id.cmp(&b.id));

    println!("Provider credentials:");
    println!();
    for p in &providers {
        let status = match (&p.key, p.source) {
            (Some(_), ProviderSource::Env) => "set (environment)".to_string(),
            (Some(_), _) => "set (auth file)".to_string(),
            (None, _) => format!("not set (checked {})", p.env.join(", ")),
        };
        println!("  {:<10} {}", p.id, status);
    }

    println!();
    println!("Add a key with: scoopz auth login <provider>");
    if let Some(path) = auth::AuthStorage::storage_path() {
        println!("Saved keys live in plain text at: {}", path.display());
    }

    Ok(())
}

/// Save an API key for a provider
pub async fn login(provider_id: &str, api_key: Option<String>) -> Result<()> {
    let config = Config::load().await?;
    provider::registry().initialize(&config).await?;

    let provider_info = provider::registry()
        .get(provider_id)
        .await
        .ok_or_else(|| anyhow::anyhow!("Unknown provider: {}", provider_id))?;

    let api_key = match api_key {
        Some(key) => key,
        None => prompt_for_key(&provider_info.name)?,
    };

    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(anyhow::anyhow!("API key cannot be empty"));
    }

    auth::save_api_key(provider_id, api_key).await?;

    println!("Saved API key for {}", provider_info.name);
    if let Some(path) = auth::AuthStorage::storage_path() {
        println!("Stored in plain text at: {}", path.display());
    }

    Ok(())
}

/// Remove a saved API key for a provider
pub async fn logout(provider_id: &str) -> Result<()> {
    auth::remove_api_key(provider_id).await?;
    println!("Removed saved API key for {}", provider_id);
    Ok(())
}

/// Read an API key from stdin
fn prompt_for_key(provider_name: &str) -> Result<String> {
    use std::io::{self, Write};

    eprint!("Enter API key for {}: ", provider_name);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
