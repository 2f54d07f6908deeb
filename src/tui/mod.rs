//! Terminal User Interface module using ratatui.
//!
//! This provides the interactive generation screen: niche/topic inputs,
//! mode tabs, tone selector, and a results pane with clipboard copy.

mod app;
mod components;
mod input;
mod theme;
mod types;
mod ui;

pub use app::{run, App, TAGLINES};
pub use types::*;
