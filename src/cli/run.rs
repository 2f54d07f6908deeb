//! Run command - starts the TUI.

use anyhow::Result;

/// Execute the run command (starts TUI)
pub async fn execute(niche: Option<String>, model: Option<String>) -> Result<()> {
    // Initialize configuration
    let config = crate::config::Config::load().await?;

    // Initialize provider registry
    crate::provider::registry().initialize(&config).await?;

    // Start TUI
    crate::tui::run(config, niche, model).await
}
