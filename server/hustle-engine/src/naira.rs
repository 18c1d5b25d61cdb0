//! Naira valuation, affordability tiers, and display formatting.

use crate::types::AffordabilityTier;

/// Naira per hustle point.
const NAIRA_PER_POINT: u64 = 2500;
/// Valuations are rounded to the nearest thousand.
const ROUNDING_UNIT: u64 = 1000;

/// Ordered, contiguous tiers covering `[0, ∞)`.
pub static AFFORDABILITY_TIERS: [AffordabilityTier; 5] = [
  AffordabilityTier {
    label: "Vibes & Data",
    emoji: "📱",
    description: "You don't code at all? Well this is enough for snacks, data bundles, and good vibes only",
    min_value: 0,
    max_value: Some(50_000),
  },
  AffordabilityTier {
    label: "Small Bills",
    emoji: "💸",
    description: "Can settle small bills, maybe a nice meal or two",
    min_value: 50_000,
    max_value: Some(200_000),
  },
  AffordabilityTier {
    label: "Side Hustle Energy",
    emoji: "⚡",
    description: "Serious side hustle energy - gadgets and weekend trips",
    min_value: 200_000,
    max_value: Some(500_000),
  },
  AffordabilityTier {
    label: "Tech Grind Territory",
    emoji: "🚀",
    description: "Tech grind territory - new laptop or phone upgrade",
    min_value: 500_000,
    max_value: Some(1_000_000),
  },
  AffordabilityTier {
    label: "Recruiter Bait",
    emoji: "👑",
    description: "Recruiter-bait level - they're definitely sliding into your DMs",
    min_value: 1_000_000,
    max_value: None,
  },
];

/// Score to Naira, rounded half-up to the nearest 1000.
pub fn score_to_naira(score: u32) -> u64 {
  let raw = score as u64 * NAIRA_PER_POINT;
  (raw + ROUNDING_UNIT / 2) / ROUNDING_UNIT * ROUNDING_UNIT
}

/// First tier whose range contains `amount`; the top tier otherwise.
pub fn affordability_tier(amount: u64) -> &'static AffordabilityTier {
  AFFORDABILITY_TIERS
    .iter()
    .find(|t| t.contains(amount))
    .unwrap_or(&AFFORDABILITY_TIERS[AFFORDABILITY_TIERS.len() - 1])
}

/// "₦2,128,000": no fraction digits, comma thousands separators.
pub fn format_naira(amount: u64) -> String {
  let digits = amount.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
  out.push('₦');
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(c);
  }
  out
}
