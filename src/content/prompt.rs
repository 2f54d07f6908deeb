//! Prompt composition for each generation mode.
//!
//! Each mode maps to a single natural-language instruction string with the
//! user's niche or topic interpolated. Structured modes (package, calendar)
//! describe the exact JSON shape the model must return; no validation of the
//! output is possible before the call.

use super::types::{GenerationRequest, Mode};

/// Build the instruction string for a generation request
pub fn build_prompt(request: &GenerationRequest) -> String {
    let niche = request.niche.trim();

    match request.mode {
        Mode::Ideas => format!(
            "Generate 5 creative TikTok content ideas for the niche: \"{}\". \
             Make them engaging, trendy, and actionable. Format as a numbered list.",
            niche
        ),
        Mode::Script => format!(
            "Write a compelling TikTok script for: \"{}\". Use a {} tone. \
             Include a hook in the first 3 seconds, engaging middle content, \
             and a strong CTA. Keep it under 60 seconds.",
            niche, request.tone
        ),
        Mode::Hashtags => format!(
            "Generate 15 relevant hashtags for TikTok content about: \"{}\". \
             Mix popular and niche-specific tags.",
            niche
        ),
        Mode::Trends => format!(
            "Analyze current TikTok trends relevant to: \"{}\". Suggest 3 \
             trending formats or challenges that could be adapted for this niche.",
            niche
        ),
        Mode::Package => package_prompt(request),
        Mode::Calendar => calendar_prompt(request),
    }
}

/// Package prompt: asks for the complete JSON content package
fn package_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are a TikTok viral content expert. Generate a complete TikTok content package for a {} creator about: "{}"

Return ONLY valid JSON (no markdown, no backticks, no preamble) with this exact structure:
{{
  "hook": "attention-grabbing first 3 seconds",
  "script": "full 30-60 second script with clear sections",
  "caption": "engaging caption with call-to-action",
  "hashtags": ["hashtag1", "hashtag2", "hashtag3", "hashtag4", "hashtag5"],
  "postingTip": "specific timing/strategy advice",
  "whyItWorks": "why this will perform well",
  "formatRecommendation": {{
    "primaryFormat": "one of: talking-head, voiceover, faceless, text-overlay, b-roll",
    "reasoning": "why this format works best for this content",
    "visualSuggestions": "specific visual elements to include",
    "alternativeFormat": "backup format option"
  }}
}}"#,
        request.effective_niche(),
        request.topic.trim()
    )
}

/// Calendar prompt: asks for a 7-day JSON calendar
fn calendar_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Generate a 7-day TikTok content calendar for a {} creator. Each day should have a different content type for variety and maximum engagement.

Return ONLY valid JSON (no markdown, no backticks, no preamble) with this exact structure:
{{
  "days": [
    {{
      "day": "Monday",
      "contentType": "Educational",
      "idea": "specific video idea",
      "hook": "attention-grabbing opening"
    }}
  ]
}}"#,
        request.effective_niche()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::Tone;

    fn request(mode: Mode) -> GenerationRequest {
        GenerationRequest {
            niche: "fitness".to_string(),
            topic: "home workout hacks".to_string(),
            tone: Tone::Casual,
            mode,
        }
    }

    #[test]
    fn test_ideas_prompt_quotes_niche() {
        let prompt = build_prompt(&request(Mode::Ideas));
        assert!(prompt.contains("5 creative TikTok content ideas"));
        assert!(prompt.contains("\"fitness\""));
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn test_script_prompt_interpolates_tone() {
        let mut req = request(Mode::Script);
        req.tone = Tone::Energetic;
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Use a energetic tone"));
        assert!(prompt.contains("hook in the first 3 seconds"));
        assert!(prompt.contains("under 60 seconds"));
    }

    #[test]
    fn test_hashtags_prompt() {
        let prompt = build_prompt(&request(Mode::Hashtags));
        assert!(prompt.contains("15 relevant hashtags"));
        assert!(prompt.contains("niche-specific tags"));
    }

    #[test]
    fn test_trends_prompt() {
        let prompt = build_prompt(&request(Mode::Trends));
        assert!(prompt.contains("Suggest 3"));
        assert!(prompt.contains("trending formats or challenges"));
    }

    #[test]
    fn test_package_prompt_describes_schema() {
        let prompt = build_prompt(&request(Mode::Package));
        assert!(prompt.contains("TikTok viral content expert"));
        assert!(prompt.contains("\"home workout hacks\""));
        assert!(prompt.contains("fitness creator"));
        assert!(prompt.contains("Return ONLY valid JSON"));
        assert!(prompt.contains("\"postingTip\""));
        assert!(prompt.contains("\"formatRecommendation\""));
        assert!(prompt.contains("talking-head, voiceover, faceless, text-overlay, b-roll"));
    }

    #[test]
    fn test_package_prompt_defaults_empty_niche() {
        let mut req = request(Mode::Package);
        req.niche = "   ".to_string();
        let prompt = build_prompt(&req);
        assert!(prompt.contains("general lifestyle creator"));
    }

    #[test]
    fn test_calendar_prompt_describes_days_array() {
        let prompt = build_prompt(&request(Mode::Calendar));
        assert!(prompt.contains("7-day TikTok content calendar"));
        assert!(prompt.contains("\"days\""));
        assert!(prompt.contains("\"contentType\""));
    }
}
