//! Sponsorship pricing tiers.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

/// One monthly sponsorship level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SponsorshipTier {
    pub title: &'static str,
    /// Whole US dollars per month.
    pub monthly_usd: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub button_text: &'static str,
    pub highlighted: bool,
}

impl SponsorshipTier {
    /// `$1,000`-style label with thousands separators.
    pub fn price_label(&self) -> String {
        let digits = self.monthly_usd.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        out.push('$');
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

pub const SPONSORSHIP_TIERS: &[SponsorshipTier] = &[
    SponsorshipTier {
        title: "Bronze",
        monthly_usd: 100,
        description: "Perfect for individuals and small teams who want to support Darklang.",
        features: &[
            "Name and logo on our website",
            "Early access to beta features",
            "Community recognition",
            "Monthly newsletter",
        ],
        button_text: "Become Bronze Sponsor",
        highlighted: false,
    },
    SponsorshipTier {
        title: "Silver",
        monthly_usd: 500,
        description: "Ideal for growing companies that rely on Darklang for their projects.",
        features: &[
            "Everything in Bronze",
            "Logo in documentation",
            "Priority support",
            "Quarterly strategy call",
            "Sponsor badge for your website",
        ],
        button_text: "Become Silver Sponsor",
        highlighted: true,
    },
    SponsorshipTier {
        title: "Gold",
        monthly_usd: 1000,
        description: "For businesses that want to make a significant impact on Darklang's development.",
        features: &[
            "Everything in Silver",
            "Logo in CLI output",
            "Feature prioritization input",
            "Private Slack channel",
            "Custom workshop session",
            "Co-marketing opportunities",
        ],
        button_text: "Become Gold Sponsor",
        highlighted: false,
    },
];

/// Card for a single tier.
#[component]
pub fn TierCard(tier: SponsorshipTier) -> impl IntoView {
    view! {
        <div class="tier-card" class:tier-card--highlighted=tier.highlighted>
            <div class="tier-card__head">
                <h3 class="tier-card__title">{tier.title}</h3>
                <div class="tier-card__price">
                    <span class="tier-card__amount">{tier.price_label()}</span>
                    <span class="tier-card__period">"/month"</span>
                </div>
                <p class="tier-card__description">{tier.description}</p>
            </div>
            <div class="tier-card__body">
                <ul class="tier-card__features">
                    {tier
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="tier-card__feature">
                                    <span class="tier-card__check">"✓"</span>
                                    <span>{*feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a class="tier-card__cta" href="https://github.com/sponsors/darklang" target="_blank" rel="noopener noreferrer">
                    {tier.button_text}
                </a>
            </div>
        </div>
    }
}

/// Grid of every tier in `SPONSORSHIP_TIERS`.
#[component]
pub fn PricingTiers() -> impl IntoView {
    view! {
        <div class="pricing-tiers">
            {SPONSORSHIP_TIERS.iter().map(|tier| view! { <TierCard tier=*tier/> }).collect_view()}
        </div>
    }
}
