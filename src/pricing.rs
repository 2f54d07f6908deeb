//! Pricing catalog.
//!
//! Static plan, FAQ, and support data rendered by the plans screen and
//! the `plans` subcommand. Nothing here talks to a billing backend;
//! checkout is handled outside the app.

/// Billing period selected on the pricing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn toggle(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Yearly => "Yearly",
        }
    }
}

/// Yearly billing discount shown next to the period toggle
pub const YEARLY_SAVINGS_LABEL: &str = "Save 17%";

/// A subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    /// Dollars per month
    pub monthly_price: u32,
    /// Dollars per year
    pub yearly_price: u32,
    pub badge: Option<&'static str>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Call-to-action button text
    pub cta: &'static str,
    /// Visually emphasized tier
    pub popular: bool,
    /// Urgency line under the price
    pub highlight: Option<&'static str>,
    /// Tier is announced but cannot be selected yet
    pub disabled: bool,
}

impl Plan {
    /// Price for the selected billing period
    pub fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.yearly_price,
        }
    }

    /// "$14/month" or "$140/year"
    pub fn price_label(&self, period: BillingPeriod) -> String {
        match period {
            BillingPeriod::Monthly => format!("${}/month", self.monthly_price),
            BillingPeriod::Yearly => format!("${}/year", self.yearly_price),
        }
    }

    /// Effective monthly cost shown under yearly prices, e.g.
    /// "$11.67/month when billed yearly". Free tiers have none.
    pub fn yearly_note(&self) -> Option<String> {
        if self.yearly_price == 0 {
            return None;
        }
        Some(format!(
            "${:.2}/month when billed yearly",
            self.yearly_price as f64 / 12.0
        ))
    }
}

const PLANS: [Plan; 3] = [
    Plan {
        id: "free",
        name: "Free",
        monthly_price: 0,
        yearly_price: 0,
        badge: None,
        description: "Perfect for trying out Scoopz",
        features: &[
            "10 content generations per month",
            "All format recommendations",
            "Trending topics access",
            "Content calendar (7 days)",
            "\"Created with Scoopz\" watermark",
        ],
        cta: "Current Plan",
        popular: false,
        highlight: None,
        disabled: false,
    },
    Plan {
        id: "creator",
        name: "Creator",
        monthly_price: 14,
        yearly_price: 140,
        badge: Some("🔥 Founding Member"),
        description: "For serious content creators",
        features: &[
            "✨ Unlimited content generations",
            "No watermarks",
            "Priority generation speed",
            "Content history saved",
            "All future features included",
            "Lock in $14 price forever",
        ],
        cta: "Upgrade to Creator",
        popular: true,
        highlight: Some("Limited Time: First 100 members only!"),
        disabled: false,
    },
    Plan {
        id: "pro",
        name: "Pro",
        monthly_price: 49,
        yearly_price: 490,
        badge: None,
        description: "For established creators & agencies",
        features: &[
            "Everything in Creator, plus:",
            "Performance analytics",
            "Team collaboration (3 seats)",
            "API access",
            "Priority support",
            "Custom integrations",
        ],
        cta: "Coming Soon",
        popular: false,
        highlight: None,
        disabled: true,
    },
];

/// All tiers in display order
pub fn plans() -> &'static [Plan] {
    &PLANS
}

/// Frequently asked question shown under the plans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

const FAQS: [Faq; 4] = [
    Faq {
        question: "Can I cancel anytime?",
        answer: "Yes! Cancel anytime with one click. No questions asked. \
                 Founding members keep their locked-in price if they return.",
    },
    Faq {
        question: "What's the Founding Member price?",
        answer: "Lock in $14/month forever! First 100 members only. \
                 Price increases to $19/month after that.",
    },
    Faq {
        question: "Do you offer refunds?",
        answer: "Absolutely. If you're not happy within 7 days, we'll refund you fully. \
                 No questions asked.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "All major credit cards, debit cards, and digital wallets through Stripe. \
                 Secure and encrypted.",
    },
];

/// All FAQ entries in display order
pub fn faqs() -> &'static [Faq] {
    &FAQS
}

/// Ko-fi support box content
pub mod kofi {
    pub const TITLE: &str = "Love Scoopz?";
    pub const MESSAGE: &str =
        "Buy me a coffee and help keep Scoopz improving! Your support means the world. ☕";
    pub const URL: &str = "https://ko-fi.com/shrondaj";
    pub const BUTTON: &str = "Buy Me a Coffee on Ko-fi";
    pub const FOOTER: &str = "Support indie creators making tools for creators! 🚀";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_tiers_in_order() {
        let plans = plans();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].id, "free");
        assert_eq!(plans[1].id, "creator");
        assert_eq!(plans[2].id, "pro");
    }

    #[test]
    fn test_creator_is_the_emphasized_tier() {
        let creator = &plans()[1];
        assert!(creator.popular);
        assert_eq!(creator.badge, Some("🔥 Founding Member"));
        assert_eq!(
            creator.highlight,
            Some("Limited Time: First 100 members only!")
        );
    }

    #[test]
    fn test_pro_is_announced_but_disabled() {
        let pro = &plans()[2];
        assert!(pro.disabled);
        assert_eq!(pro.cta, "Coming Soon");
    }

    #[test]
    fn test_price_labels_follow_period() {
        let creator = &plans()[1];
        assert_eq!(creator.price_label(BillingPeriod::Monthly), "$14/month");
        assert_eq!(creator.price_label(BillingPeriod::Yearly), "$140/year");
    }

    #[test]
    fn test_yearly_note_rounds_to_cents() {
        let creator = &plans()[1];
        assert_eq!(
            creator.yearly_note(),
            Some("$11.67/month when billed yearly".to_string())
        );

        let free = &plans()[0];
        assert_eq!(free.yearly_note(), None);
    }

    #[test]
    fn test_period_toggle_round_trips() {
        let period = BillingPeriod::Monthly;
        assert_eq!(period.toggle(), BillingPeriod::Yearly);
        assert_eq!(period.toggle().toggle(), BillingPeriod::Monthly);
    }

    #[test]
    fn test_faq_entries_complete() {
        let faqs = faqs();
        assert_eq!(faqs.len(), 4);
        for faq in faqs {
            assert!(!faq.question.is_empty());
            assert!(!faq.answer.is_empty());
        }
    }
}
