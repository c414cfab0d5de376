use serde::{Deserialize, Serialize};
use std::fmt;

/// Money in whole cents. Keeps the checkout arithmetic exact so the
/// two-decimal display never drifts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount(u64);

impl Amount {
    pub const fn from_cents(cents: u64) -> Self {
        Amount(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Basic,
    #[default]
    Premium,
    Professional,
}

pub struct TierTerms {
    pub name: &'static str,
    pub base_price: Amount,
    pub included_images: u32,
    pub per_extra_image: Amount,
    pub blurb: &'static str,
    pub features: &'static [&'static str],
}

const BASIC: TierTerms = TierTerms {
    name: "Basic",
    base_price: Amount::from_cents(1299),
    included_images: 20,
    per_extra_image: Amount::from_cents(50),
    blurb: "Perfect for casual photographers",
    features: &[
        "Up to 20 images",
        "Standard quality prints",
        "Basic color correction",
        "5-7 day delivery",
    ],
};

const PREMIUM: TierTerms = TierTerms {
    name: "Premium",
    base_price: Amount::from_cents(2499),
    included_images: 50,
    per_extra_image: Amount::from_cents(75),
    blurb: "Ideal for photography enthusiasts",
    features: &[
        "Up to 50 images",
        "Premium quality prints",
        "Advanced color correction",
        "Choice of paper finish",
        "3-5 day delivery",
    ],
};

const PROFESSIONAL: TierTerms = TierTerms {
    name: "Professional",
    base_price: Amount::from_cents(4999),
    included_images: 100,
    per_extra_image: Amount::from_cents(99),
    blurb: "For professional photographers",
    features: &[
        "Up to 100 images",
        "Museum-grade archival prints",
        "Professional retouching",
        "Custom sizes available",
        "Priority 1-2 day delivery",
    ],
};

impl PackageTier {
    pub const ALL: [PackageTier; 3] = [PackageTier::Basic, PackageTier::Premium, PackageTier::Professional];

    pub fn terms(&self) -> &'static TierTerms {
        match self {
            PackageTier::Basic => &BASIC,
            PackageTier::Premium => &PREMIUM,
            PackageTier::Professional => &PROFESSIONAL,
        }
    }

    /// Value used in `<option value=..>` and query strings.
    pub fn key(&self) -> &'static str {
        match self {
            PackageTier::Basic => "basic",
            PackageTier::Premium => "premium",
            PackageTier::Professional => "professional",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.key() == key)
    }

    /// Falls back to Premium, the tier preselected on the checkout page.
    pub fn from_key_or_default(key: Option<&str>) -> Self {
        key.and_then(Self::from_key).unwrap_or_default()
    }
}

pub fn compute_total(tier: PackageTier, image_count: u32) -> Amount {
    let terms = tier.terms();
    let extra_images = image_count.saturating_sub(terms.included_images) as u64;
    Amount::from_cents(terms.base_price.cents() + extra_images * terms.per_extra_image.cents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_within_threshold_pay_base_price() {
        for tier in PackageTier::ALL {
            let terms = tier.terms();
            for count in [0, 1, terms.included_images] {
                assert_eq!(compute_total(tier, count), terms.base_price);
            }
        }
    }

    #[test]
    fn extra_images_are_charged_per_image() {
        assert_eq!(compute_total(PackageTier::Premium, 60).to_string(), "32.49");
        assert_eq!(compute_total(PackageTier::Basic, 21).to_string(), "13.49");
        assert_eq!(compute_total(PackageTier::Professional, 110).to_string(), "59.89");
    }

    #[test]
    fn large_orders_stay_exact() {
        // 24.99 + 950 * 0.75
        assert_eq!(compute_total(PackageTier::Premium, 1000), Amount::from_cents(73749));
    }

    #[test]
    fn amount_display_pads_cents() {
        assert_eq!(Amount::from_cents(1205).to_string(), "12.05");
        assert_eq!(Amount::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn unknown_tier_key_defaults_to_premium() {
        assert_eq!(PackageTier::from_key_or_default(Some("gold")), PackageTier::Premium);
        assert_eq!(PackageTier::from_key_or_default(None), PackageTier::Premium);
        assert_eq!(PackageTier::from_key_or_default(Some("basic")), PackageTier::Basic);
    }
}
