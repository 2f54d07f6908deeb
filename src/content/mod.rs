//! Content generation domain.
//!
//! This module owns everything between the user's input and displayable
//! content: request types, prompt composition, provider response
//! normalization, fallback content, and the engine that ties them
//! together.

pub mod engine;
pub mod fallback;
pub mod normalize;
pub mod prompt;
pub mod trending;
pub mod types;

pub use engine::{ContentEngine, GenerateError};
pub use prompt::build_prompt;
pub use trending::TrendingTopic;
pub use types::{
    CalendarDay, ContentPackage, FormatRecommendation, GeneratedContent, GenerationRequest, Mode,
    Tone, DEFAULT_NICHE,
};
