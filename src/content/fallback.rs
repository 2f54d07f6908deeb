//! Fallback content generation.
//!
//! Whenever a structured generation fails (network error, provider error,
//! unparseable body) the UI must still show something usable, so these
//! functions produce an on-topic placeholder instead of a dead end.
//! Availability of some answer outranks correctness of that answer.
//!
//! The functions are pure over their inputs: callers inject the random
//! source, which keeps the output reproducible in tests.

use super::types::{
    CalendarDay, ContentPackage, FormatRecommendation, GeneratedContent, GenerationRequest, Mode,
};
use rand::Rng;

/// Hook templates; `{topic}` is replaced with the user's topic
const HOOK_TEMPLATES: [&str; 8] = [
    "POV: You just discovered {topic}...",
    "Nobody talks about {topic} like this...",
    "This {topic} hack changed everything for me...",
    "I wish someone told me this about {topic}...",
    "The truth about {topic} that nobody shares...",
    "Stop doing {topic} like this...",
    "I tested {topic} for 30 days and...",
    "Everyone's doing {topic} wrong...",
];

/// Pick one hook template at random and interpolate the topic
pub fn pick_hook<R: Rng>(topic: &str, rng: &mut R) -> String {
    let template = HOOK_TEMPLATES[rng.random_range(0..HOOK_TEMPLATES.len())];
    template.replace("{topic}", topic)
}

/// Substitute package for a failed package generation.
///
/// `niche` is expected to already have the empty-input default applied.
pub fn fallback_package<R: Rng>(topic: &str, niche: &str, rng: &mut R) -> ContentPackage {
    let hook = pick_hook(topic, rng);
    let niche_tag: String = niche.split_whitespace().collect();
    let topic_tag = topic
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();

    let script = format!(
        "HOOK: \"{}\"\n\n\
         [Open with attention-grabbing visual]\n\n\
         Most people approach {} completely wrong. Let me show you what actually works.\n\n\
         [Share key insight #1]\nFirst thing you need to know...\n\n\
         [Key insight #2]\nHere's what most people miss...\n\n\
         [Key insight #3]\nAnd this is the game-changer...\n\n\
         [Call to action]\n\
         Try this approach and watch the difference. Follow for more {} content that actually works.",
        hook, topic, niche
    );

    let caption = format!(
        "The real secret to {} 🔥 This changed everything for me. \
         Drop a 💜 if you're trying this! #{} #contentcreator",
        topic, niche_tag
    );

    ContentPackage {
        hook: Some(hook),
        script: Some(script),
        caption: Some(caption),
        hashtags: vec![
            "fyp".to_string(),
            "viral".to_string(),
            niche_tag,
            topic_tag,
            "tiktoktips".to_string(),
        ],
        posting_tip: Some(
            "Post between 6-9 PM when your audience is most active. \
             Tuesday-Thursday typically see highest engagement for educational content."
                .to_string(),
        ),
        why_it_works: Some(
            "Pattern interrupt hook + relatable problem + solution framework + strong CTA \
             creates engagement and saves"
                .to_string(),
        ),
        format_recommendation: Some(FormatRecommendation {
            primary_format: Some("talking-head".to_string()),
            reasoning: Some(format!(
                "Direct to camera builds trust and authenticity, essential for \
                 educational content about {}",
                topic
            )),
            visual_suggestions: Some(
                "Clean background, good lighting, use hand gestures for emphasis, \
                 maintain eye contact with camera"
                    .to_string(),
            ),
            alternative_format: Some("voiceover with b-roll".to_string()),
        }),
    }
}

/// Substitute calendar for a failed calendar generation: a fixed
/// seven-day rotation of content types
pub fn fallback_calendar() -> Vec<CalendarDay> {
    let days = [
        (
            "Monday",
            "Educational",
            "Myth-busting common misconceptions",
            "Stop believing this lie...",
        ),
        (
            "Tuesday",
            "Storytime",
            "Personal experience or lesson learned",
            "So this just happened...",
        ),
        (
            "Wednesday",
            "Tutorial",
            "Step-by-step how-to guide",
            "Here's exactly how to...",
        ),
        (
            "Thursday",
            "Trend",
            "Jump on a trending sound/format",
            "[Use trending audio]",
        ),
        (
            "Friday",
            "Behind-the-scenes",
            "Show your process or day in the life",
            "You asked what I actually do...",
        ),
        (
            "Saturday",
            "Controversial Take",
            "Hot take that sparks debate",
            "Unpopular opinion but...",
        ),
        (
            "Sunday",
            "Engagement",
            "Ask questions, polls, or challenges",
            "Comment your answer...",
        ),
    ];

    days.into_iter()
        .map(|(day, content_type, idea, hook)| CalendarDay {
            day: day.to_string(),
            content_type: content_type.to_string(),
            idea: idea.to_string(),
            hook: hook.to_string(),
        })
        .collect()
}

/// Fallback for a failed request, shaped by the request mode.
///
/// Returns `None` for plain-text modes, which surface their errors
/// instead of substituting content.
pub fn fallback_content<R: Rng>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Option<GeneratedContent> {
    match request.mode {
        Mode::Package => Some(GeneratedContent::Package(fallback_package(
            request.subject(),
            request.effective_niche(),
            rng,
        ))),
        Mode::Calendar => Some(GeneratedContent::Calendar(fallback_calendar())),
        _ => None,
    }
}
