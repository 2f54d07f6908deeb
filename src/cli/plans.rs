//! Plans command - prints the pricing catalog.

use crate::pricing::{self, BillingPeriod};
use anyhow::Result;

/// Print all plans, the FAQ, and the support box
pub async fn execute(yearly: bool) -> Result<()> {
    let period = if yearly {
        BillingPeriod::Yearly
    } else {
        BillingPeriod::Monthly
    };

    println!("Scoopz plans ({} billing)", period.label().to_lowercase());
    if period == BillingPeriod::Yearly {
        println!("{}", pricing::YEARLY_SAVINGS_LABEL);
    }

    for plan in pricing::plans() {
        println!();

        let mut header = format!("{} — {}", plan.name, plan.price_label(period));
        if let Some(badge) = plan.badge {
            header = format!("{} [{}]", header, badge);
        }
        println!("{}", header);
        println!("  {}", plan.description);

        if period == BillingPeriod::Yearly {
            if let Some(note) = plan.yearly_note() {
                println!("  {}", note);
            }
        }
        if let Some(highlight) = plan.highlight {
            println!("  {}", highlight);
        }

        for feature in plan.features {
            println!("    - {}", feature);
        }

        if plan.disabled {
            println!("  [{}]", plan.cta);
        } else {
            println!("  {}", plan.cta);
        }
    }

    println!();
    println!("FAQ");
    for faq in pricing::faqs() {
        println!();
        println!("  {}", faq.question);
        println!("    {}", faq.answer);
    }

    println!();
    println!("{}", pricing::kofi::TITLE);
    println!("{}", pricing::kofi::MESSAGE);
    println!("{}: {}", pricing::kofi::BUTTON, pricing::kofi::URL);
    println!("{}", pricing::kofi::FOOTER);

    Ok(())
}
