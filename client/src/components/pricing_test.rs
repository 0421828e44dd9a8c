use super::*;

fn tier_with_price(monthly_usd: u32) -> SponsorshipTier {
    SponsorshipTier { monthly_usd, ..SPONSORSHIP_TIERS[0] }
}

#[test]
fn price_label_inserts_thousands_separators() {
    assert_eq!(tier_with_price(0).price_label(), "$0");
    assert_eq!(tier_with_price(100).price_label(), "$100");
    assert_eq!(tier_with_price(1000).price_label(), "$1,000");
    assert_eq!(tier_with_price(25_000).price_label(), "$25,000");
    assert_eq!(tier_with_price(1_234_567).price_label(), "$1,234,567");
}

#[test]
fn tiers_ascend_bronze_silver_gold() {
    let titles: Vec<&str> = SPONSORSHIP_TIERS.iter().map(|t| t.title).collect();
    assert_eq!(titles, ["Bronze", "Silver", "Gold"]);
    assert!(SPONSORSHIP_TIERS.windows(2).all(|w| w[0].monthly_usd < w[1].monthly_usd));
}

#[test]
fn exactly_one_tier_is_highlighted() {
    let highlighted: Vec<&str> = SPONSORSHIP_TIERS.iter().filter(|t| t.highlighted).map(|t| t.title).collect();
    assert_eq!(highlighted, ["Silver"]);
}

#[test]
fn higher_tiers_include_the_previous_one() {
    assert_eq!(SPONSORSHIP_TIERS[1].features[0], "Everything in Bronze");
    assert_eq!(SPONSORSHIP_TIERS[2].features[0], "Everything in Silver");
}
