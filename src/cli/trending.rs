//! Trending command - prints curated trending topics for a niche.

use crate::config::Config;
use crate::content::trending;
use anyhow::Result;

/// Print trending topics for a niche (or the configured default)
pub async fn execute(niche: Option<String>, json: bool) -> Result<()> {
    let config = Config::load().await?;

    let niche = niche
        .or_else(|| config.default_niche.clone())
        .unwrap_or_default();
    let topics = trending::lookup(&niche);

    if json {
        println!("{}", serde_json::to_string_pretty(&topics)?);
        return Ok(());
    }

    let display_niche = if niche.trim().is_empty() {
        "general"
    } else {
        niche.trim()
    };

    println!("Trending topics for {}:", display_niche);
    println!();
    for topic in topics {
        println!("  {} ({} engagement)", topic.topic, topic.engagement);
        println!("      {}", topic.why);
    }

    Ok(())
}
