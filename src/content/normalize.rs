//! Response normalization.
//!
//! Providers are instructed to return bare JSON for structured modes, but
//! models routinely wrap it in Markdown code fences anyway. This module
//! strips that noise and parses the result into the expected shape; parse
//! failures are surfaced to the caller, which converts them to fallback
//! content.

use super::types::{CalendarDay, ContentPackage};
use serde::Deserialize;

/// Remove Markdown code-fence markers and surrounding whitespace
pub fn strip_code_fences(text: &str) -> String {
    let re = regex::Regex::new(r"```json|```").unwrap();
    re.replace_all(text, "").trim().to_string()
}

/// Trim a plain-text response
pub fn normalize_text(text: &str) -> String {
    text.trim().to_string()
}

/// Parse a package-mode response body
pub fn parse_package(text: &str) -> Result<ContentPackage, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(text))
}

/// Wire envelope for calendar responses: `{"days": [...]}`
#[derive(Debug, Deserialize)]
struct CalendarEnvelope {
    #[serde(default)]
    days: Vec<CalendarDay>,
}

/// Parse a calendar-mode response body
pub fn parse_calendar(text: &str) -> Result<Vec<CalendarDay>, serde_json::Error> {
    let envelope: CalendarEnvelope = serde_json::from_str(&strip_code_fences(text))?;
    Ok(envelope.days)
}
