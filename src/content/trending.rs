//! Curated trending topics.
//!
//! A small static catalog keyed by niche. Niches without a dedicated
//! table fall back to the general list, so the lookup always returns
//! something to show.

use serde::Serialize;

/// One trending topic with its engagement level and a one-line rationale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendingTopic {
    pub topic: &'static str,
    pub engagement: &'static str,
    pub why: &'static str,
}

const GENERAL: &[TrendingTopic] = &[
    TrendingTopic {
        topic: "That girl aesthetic",
        engagement: "High",
        why: "Self-improvement content is viral",
    },
    TrendingTopic {
        topic: "Underconsumption core",
        engagement: "Rising",
        why: "Anti-trend minimalism movement",
    },
    TrendingTopic {
        topic: "Career advice for Gen Z",
        engagement: "High",
        why: "Job market anxiety trending",
    },
    TrendingTopic {
        topic: "Storytime format",
        engagement: "High",
        why: "Personal stories always perform",
    },
    TrendingTopic {
        topic: "Controversial hot takes",
        engagement: "Very High",
        why: "Drives comments and shares",
    },
];

const FITNESS: &[TrendingTopic] = &[
    TrendingTopic {
        topic: "Gym anxiety stories",
        engagement: "High",
        why: "Relatable to beginners",
    },
    TrendingTopic {
        topic: "Home workout hacks",
        engagement: "High",
        why: "Accessible to everyone",
    },
    TrendingTopic {
        topic: "Fitness myths debunked",
        engagement: "Very High",
        why: "Educational + controversial",
    },
];

const BUSINESS: &[TrendingTopic] = &[
    TrendingTopic {
        topic: "Side hustle ideas 2025",
        engagement: "Very High",
        why: "Money content always wins",
    },
    TrendingTopic {
        topic: "9-5 vs entrepreneurship",
        engagement: "High",
        why: "Polarizing = engagement",
    },
    TrendingTopic {
        topic: "How I made $X in Y days",
        engagement: "Very High",
        why: "Results-driven content",
    },
];

/// Look up the trending table for a niche, case-insensitively.
/// Unknown and empty niches get the general table.
pub fn lookup(niche: &str) -> &'static [TrendingTopic] {
    match niche.trim().to_lowercase().as_str() {
        "fitness" => FITNESS,
        "business" => BUSINESS,
        _ => GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fitness_has_dedicated_table() {
        let topics = lookup("fitness");
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].topic, "Gym anxiety stories");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("Fitness"), lookup("fitness"));
        assert_eq!(lookup("  BUSINESS  "), lookup("business"));
    }

    #[test]
    fn test_unknown_niche_gets_general_table() {
        let topics = lookup("underwater basket weaving");
        assert_eq!(topics.len(), 5);
        assert_eq!(topics[0].topic, "That girl aesthetic");
    }

    #[test]
    fn test_empty_niche_gets_general_table() {
        assert_eq!(lookup(""), GENERAL);
    }

    #[test]
    fn test_every_entry_is_complete() {
        for table in [GENERAL, FITNESS, BUSINESS] {
            for entry in table {
                assert!(!entry.topic.is_empty());
                assert!(!entry.engagement.is_empty());
                assert!(!entry.why.is_empty());
            }
        }
    }
}
