//! Core types for generation requests and results.
//!
//! This module contains the type definitions shared across the generation
//! pipeline: the request entered by the user, the generation modes and
//! script tones, and the structured results (content package, calendar)
//! parsed from provider responses or produced by the fallback generator.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Niche used when the user leaves the niche field empty
pub const DEFAULT_NICHE: &str = "general lifestyle";

/// What kind of content a generation produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Numbered list of content ideas
    #[default]
    Ideas,
    /// Tone-adjustable spoken script
    Script,
    /// Hashtag list
    Hashtags,
    /// Trend analysis
    Trends,
    /// Complete content package (structured JSON)
    Package,
    /// Seven-day content calendar (structured JSON)
    Calendar,
}

impl Mode {
    /// Short identifier used in config and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ideas => "ideas",
            Mode::Script => "script",
            Mode::Hashtags => "hashtags",
            Mode::Trends => "trends",
            Mode::Package => "package",
            Mode::Calendar => "calendar",
        }
    }

    /// Display label shown on tabs and buttons
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Ideas => "Content Ideas",
            Mode::Script => "Script Writer",
            Mode::Hashtags => "Hashtags",
            Mode::Trends => "Trend Analysis",
            Mode::Package => "Content Package",
            Mode::Calendar => "Content Calendar",
        }
    }

    /// Whether this mode expects a structured JSON response.
    ///
    /// Structured modes absorb request failures with fallback content;
    /// plain-text modes surface the error instead.
    pub fn is_structured(&self) -> bool {
        matches!(self, Mode::Package | Mode::Calendar)
    }

    /// All modes, in tab order
    pub fn all() -> [Mode; 6] {
        [
            Mode::Ideas,
            Mode::Script,
            Mode::Hashtags,
            Mode::Trends,
            Mode::Package,
            Mode::Calendar,
        ]
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Voice used when writing scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Casual,
    Energetic,
    Professional,
    Humorous,
    Educational,
}

impl Tone {
    /// Value interpolated into the script prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Energetic => "energetic",
            Tone::Professional => "professional",
            Tone::Humorous => "humorous",
            Tone::Educational => "educational",
        }
    }

    /// Display label for the tone selector
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Casual => "Casual & Friendly",
            Tone::Energetic => "Energetic & Hype",
            Tone::Professional => "Professional",
            Tone::Humorous => "Humorous",
            Tone::Educational => "Educational",
        }
    }

    /// All tones, in selector order
    pub fn all() -> [Tone; 5] {
        [
            Tone::Casual,
            Tone::Energetic,
            Tone::Professional,
            Tone::Humorous,
            Tone::Educational,
        ]
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "casual" => Ok(Tone::Casual),
            "energetic" => Ok(Tone::Energetic),
            "professional" => Ok(Tone::Professional),
            "humorous" => Ok(Tone::Humorous),
            "educational" => Ok(Tone::Educational),
            other => Err(format!("unknown tone: {}", other)),
        }
    }
}

/// A single user-triggered generation
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Creator's content category (e.g. "fitness")
    pub niche: String,
    /// Specific subject for package generation; empty means unset
    pub topic: String,
    /// Script tone
    pub tone: Tone,
    /// Active generation mode
    pub mode: Mode,
}

impl GenerationRequest {
    /// Niche with the default applied when the field is blank
    pub fn effective_niche(&self) -> &str {
        let niche = self.niche.trim();
        if niche.is_empty() {
            DEFAULT_NICHE
        } else {
            niche
        }
    }

    /// The string interpolated into hooks and captions: the topic for
    /// package mode, the niche everywhere else
    pub fn subject(&self) -> &str {
        match self.mode {
            Mode::Package => self.topic.trim(),
            _ => self.niche.trim(),
        }
    }

    /// True when the mode's required input is empty or whitespace.
    ///
    /// Calendar mode has no required input; it falls back to the
    /// default niche instead.
    pub fn missing_input(&self) -> bool {
        match self.mode {
            Mode::Calendar => false,
            Mode::Package => self.topic.trim().is_empty(),
            _ => self.niche.trim().is_empty(),
        }
    }
}

/// Structured content package returned by package-mode generations.
///
/// Every field is optional and independently renderable; providers are
/// instructed to fill all of them but a partial object still displays.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentPackage {
    /// Attention-grabbing first 3 seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,

    /// Full 30-60 second script
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    /// Caption with call-to-action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Suggested hashtags, without the leading '#'
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<String>,

    /// Timing/strategy advice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_tip: Option<String>,

    /// Why this content should perform well
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why_it_works: Option<String>,

    /// Suggested production format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_recommendation: Option<FormatRecommendation>,
}

impl ContentPackage {
    /// Hashtags rendered as a single "#a #b #c" line
    pub fn hashtag_line(&self) -> String {
        self.hashtags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whole package as readable text, used for copy-all and CLI output
    pub fn to_plain_text(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if let Some(hook) = &self.hook {
            sections.push(format!("HOOK\n{}", hook));
        }
        if let Some(script) = &self.script {
            sections.push(format!("SCRIPT\n{}", script));
        }
        if let Some(caption) = &self.caption {
            sections.push(format!("CAPTION\n{}", caption));
        }
        if !self.hashtags.is_empty() {
            sections.push(format!("HASHTAGS\n{}", self.hashtag_line()));
        }
        if let Some(tip) = &self.posting_tip {
            sections.push(format!("POSTING TIP\n{}", tip));
        }
        if let Some(why) = &self.why_it_works {
            sections.push(format!("WHY IT WORKS\n{}", why));
        }
        if let Some(format_rec) = &self.format_recommendation {
            sections.push(format!("FORMAT\n{}", format_rec.to_plain_text()));
        }

        sections.join("\n\n")
    }
}

/// Suggested video production style for a content package
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatRecommendation {
    /// One of: talking-head, voiceover, faceless, text-overlay, b-roll
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_format: Option<String>,

    /// Why this format fits the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,

    /// Visual elements to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_suggestions: Option<String>,

    /// Backup format option
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_format: Option<String>,
}

impl FormatRecommendation {
    /// Readable rendering used by copy-all and CLI output
    pub fn to_plain_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if let Some(primary) = &self.primary_format {
            lines.push(format!("Primary: {}", primary));
        }
        if let Some(reasoning) = &self.reasoning {
            lines.push(format!("Reasoning: {}", reasoning));
        }
        if let Some(visual) = &self.visual_suggestions {
            lines.push(format!("Visuals: {}", visual));
        }
        if let Some(alternative) = &self.alternative_format {
            lines.push(format!("Alternative: {}", alternative));
        }

        lines.join("\n")
    }
}

/// One entry of a seven-day content calendar
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarDay {
    /// Day name ("Monday" .. "Sunday")
    pub day: String,
    /// Content category for the day (Educational, Storytime, ...)
    pub content_type: String,
    /// Specific video idea
    pub idea: String,
    /// Opening line for the video
    pub hook: String,
}

/// Result of a completed generation, shaped by the request mode
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedContent {
    /// Plain-text result (ideas, script, hashtags, trends)
    Text(String),
    /// Structured package result
    Package(ContentPackage),
    /// Seven-day calendar result
    Calendar(Vec<CalendarDay>),
}

impl GeneratedContent {
    /// Whole result as readable text, used for copy-all and CLI output
    pub fn to_plain_text(&self) -> String {
        match self {
            GeneratedContent::Text(text) => text.clone(),
            GeneratedContent::Package(package) => package.to_plain_text(),
            GeneratedContent::Calendar(days) => days
                .iter()
                .map(|day| {
                    format!(
                        "{} — {}\n  Idea: {}\n  Hook: {}",
                        day.day, day.content_type, day.idea, day.hook
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod request {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_input_for_text_modes() {
            let request = GenerationRequest {
                niche: "   ".to_string(),
                mode: Mode::Ideas,
                ..Default::default()
            };
            assert!(request.missing_input());

            let request = GenerationRequest {
                niche: "fitness".to_string(),
                mode: Mode::Ideas,
                ..Default::default()
            };
            assert!(!request.missing_input());
        }

        #[test]
        fn test_missing_input_for_package_checks_topic() {
            let request = GenerationRequest {
                niche: "fitness".to_string(),
                topic: "".to_string(),
                mode: Mode::Package,
                ..Default::default()
            };
            assert!(request.missing_input());

            let request = GenerationRequest {
                niche: "".to_string(),
                topic: "home workout hacks".to_string(),
                mode: Mode::Package,
                ..Default::default()
            };
            assert!(!request.missing_input());
        }

        #[test]
        fn test_calendar_never_requires_input() {
            let request = GenerationRequest {
                mode: Mode::Calendar,
                ..Default::default()
            };
            assert!(!request.missing_input());
        }

        #[test]
        fn test_effective_niche_defaults() {
            let request = GenerationRequest::default();
            assert_eq!(request.effective_niche(), DEFAULT_NICHE);

            let request = GenerationRequest {
                niche: "  fitness  ".to_string(),
                ..Default::default()
            };
            assert_eq!(request.effective_niche(), "fitness");
        }

        #[test]
        fn test_subject_depends_on_mode() {
            let request = GenerationRequest {
                niche: "fitness".to_string(),
                topic: "gym anxiety".to_string(),
                mode: Mode::Package,
                ..Default::default()
            };
            assert_eq!(request.subject(), "gym anxiety");

            let request = GenerationRequest {
                mode: Mode::Script,
                ..request
            };
            assert_eq!(request.subject(), "fitness");
        }
    }

    mod package {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_deserializes_camel_case_fields() {
            let json = r#"{
                "hook": "Stop scrolling",
                "script": "full script",
                "caption": "caption text",
                "hashtags": ["fyp", "viral"],
                "postingTip": "post at 7 PM",
                "whyItWorks": "pattern interrupt",
                "formatRecommendation": {
                    "primaryFormat": "talking-head",
                    "reasoning": "builds trust",
                    "visualSuggestions": "clean background",
                    "alternativeFormat": "voiceover"
                }
            }"#;

            let package: ContentPackage = serde_json::from_str(json).unwrap();
            assert_eq!(package.hook.as_deref(), Some("Stop scrolling"));
            assert_eq!(package.posting_tip.as_deref(), Some("post at 7 PM"));
            assert_eq!(package.why_it_works.as_deref(), Some("pattern interrupt"));
            let format_rec = package.format_recommendation.unwrap();
            assert_eq!(format_rec.primary_format.as_deref(), Some("talking-head"));
            assert_eq!(format_rec.alternative_format.as_deref(), Some("voiceover"));
        }

        #[test]
        fn test_partial_package_still_parses() {
            let package: ContentPackage = serde_json::from_str(r#"{"hook": "just a hook"}"#).unwrap();
            assert_eq!(package.hook.as_deref(), Some("just a hook"));
            assert!(package.script.is_none());
            assert!(package.hashtags.is_empty());
            assert!(package.format_recommendation.is_none());
        }

        #[test]
        fn test_hashtag_line() {
            let package = ContentPackage {
                hashtags: vec!["fyp".to_string(), "viral".to_string()],
                ..Default::default()
            };
            assert_eq!(package.hashtag_line(), "#fyp #viral");
        }

        #[test]
        fn test_plain_text_skips_absent_sections() {
            let package = ContentPackage {
                hook: Some("the hook".to_string()),
                ..Default::default()
            };
            let text = package.to_plain_text();
            assert!(text.contains("HOOK"));
            assert!(!text.contains("SCRIPT"));
            assert!(!text.contains("HASHTAGS"));
        }
    }

    mod calendar {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_day_parses_with_missing_fields() {
            let day: CalendarDay = serde_json::from_str(r#"{"day": "Monday"}"#).unwrap();
            assert_eq!(day.day, "Monday");
            assert_eq!(day.content_type, "");
        }
    }

    mod enums {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_structured_modes() {
            assert!(Mode::Package.is_structured());
            assert!(Mode::Calendar.is_structured());
            assert!(!Mode::Ideas.is_structured());
            assert!(!Mode::Script.is_structured());
        }

        #[test]
        fn test_tone_round_trip() {
            for tone in Tone::all() {
                let parsed: Tone = tone.as_str().parse().unwrap();
                assert_eq!(parsed, tone);
            }
            assert!("sarcastic".parse::<Tone>().is_err());
        }
    }
}
