//! Type definitions for the TUI application.

use crate::content::GeneratedContent;

/// Which text input currently receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Niche,
    Topic,
}

impl Focus {
    /// The other field, in tab order
    pub fn next(self) -> Self {
        match self {
            Focus::Niche => Focus::Topic,
            Focus::Topic => Focus::Niche,
        }
    }
}

/// Severity of an inline notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Short message shown above the results pane
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.to_string(),
        }
    }

    pub fn warning(text: &str) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.to_string(),
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.to_string(),
        }
    }
}

/// State of the API key entry dialog
#[derive(Debug, Clone)]
pub struct KeyDialog {
    /// Provider the key is for
    pub provider_id: String,
    /// Provider display name
    pub provider_name: String,
    /// First environment variable for the provider, shown as a hint
    pub env_hint: String,
    /// Key text typed so far
    pub input_value: String,
    /// Explanation or error shown above the input
    pub message: Option<String>,
}

impl KeyDialog {
    pub fn new(provider_id: &str, provider_name: &str, env_hint: &str) -> Self {
        Self {
            provider_id: provider_id.to_string(),
            provider_name: provider_name.to_string(),
            env_hint: env_hint.to_string(),
            input_value: String::new(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Key text masked for display, capped so long keys don't overflow the box
    pub fn masked(&self) -> String {
        "*".repeat(self.input_value.chars().count().min(40))
    }
}

/// Application events for the TUI event loop.
///
/// Every generation task is tagged with a token; events carrying a token
/// that no longer matches the app's current one are discarded as stale.
#[derive(Debug)]
pub enum AppEvent {
    GenerationDone {
        token: u64,
        content: GeneratedContent,
    },
    GenerationFailed {
        token: u64,
        message: String,
    },
    KeyRequired {
        token: u64,
        provider_id: String,
        provider_name: String,
        env_hint: String,
        message: String,
    },
}
