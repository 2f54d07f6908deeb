//! ID generation utilities using ULID for time-ordered unique identifiers.
//!
//! Generation runs get an ID so log lines from concurrent attempts can
//! be told apart.

use ulid::Ulid;

/// ID prefix types for different entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPrefix {
    Generation,
}

impl IdPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPrefix::Generation => "gen",
        }
    }
}

/// Generate an ascending (chronologically ordered) ID
pub fn ascending(prefix: IdPrefix) -> String {
    let ulid = Ulid::new();
    format!("{}_{}", prefix.as_str(), ulid.to_string().to_lowercase())
}
