//! Scoopz - AI content assistant for short-video creators

pub mod auth;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod id;
pub mod pricing;
pub mod provider;
pub mod tui;
