//! Provider module for AI model integration.
//!
//! This module handles integration with the supported AI providers
//! (Anthropic, Google, Groq) and provides a unified interface for model
//! selection and completion calls.

mod client;
mod registry;
mod types;

pub use client::*;
pub use registry::*;
pub use types::*;
