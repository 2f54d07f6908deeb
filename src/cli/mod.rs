//! CLI command implementations.

pub mod auth;
pub mod config;
pub mod generate;
pub mod plans;
pub mod run;
pub mod trending;
