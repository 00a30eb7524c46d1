//! Tour pricing rules.
//!
//! Pure functions from collected selections to a yen total with a breakdown
//! line. Specialized tours deliberately charge a single flat unit regardless
//! of the declared hour count; that mirrors the published price sheet and is
//! not a bug to fix here.
use serde::Serialize;

use crate::catalog::{PricingMode, TransportClass};
use crate::numbers::{format_thousands, jpy_to_usd};
use crate::plan::TourType;

/// Fixed site-wide conversion rate; there is no live exchange lookup.
pub const JPY_PER_USD: i64 = 150;

/// A tour duration as it comes out of the length selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourLength {
    Days(u32),
    Hours(u32),
}

impl TourLength {
    /// Parse select-box values like `"3"`, `"3days"`, or `"8hours"`.
    /// A bare number is a day count.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(days) = raw.strip_suffix("days").or_else(|| raw.strip_suffix("day")) {
            return days.trim().parse().ok().map(Self::Days);
        }
        if let Some(hours) = raw.strip_suffix("hours").or_else(|| raw.strip_suffix("hour")) {
            return hours.trim().parse().ok().map(Self::Hours);
        }
        raw.parse().ok().map(Self::Days)
    }

    /// Human label, e.g. `"3 days"` or `"8 hours"`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Days(1) => "1 day".to_string(),
            Self::Days(days) => format!("{days} days"),
            Self::Hours(1) => "1 hour".to_string(),
            Self::Hours(hours) => format!("{hours} hours"),
        }
    }
}

/// Computed price for the summary step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub total_jpy: i64,
    /// Derived at the fixed 150:1 rate, rounded.
    pub total_usd: i64,
    /// E.g. `"¥50,000 per day × 3 days"`. Empty when the total is zero.
    pub breakdown: String,
}

impl PriceQuote {
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_jpy: 0,
            total_usd: 0,
            breakdown: String::new(),
        }
    }
}

/// Days the rate multiplies over. Hour labels collapse to a single unit, and
/// specialized tours always bill one unit.
const fn billable_days(tour_type: TourType, length: Option<TourLength>) -> u32 {
    match tour_type {
        TourType::Specialized => 1,
        TourType::Regional | TourType::Customized => match length {
            Some(TourLength::Days(days)) => {
                if days == 0 {
                    1
                } else {
                    days
                }
            }
            Some(TourLength::Hours(_)) | None => 1,
        },
    }
}

/// Price the current selections.
///
/// Runs after validation but must degrade gracefully if invoked early: a
/// missing transport class or a zero party size on a per-person class yields
/// a zero quote instead of an error.
#[must_use]
pub fn quote(
    tour_type: TourType,
    transport: Option<&TransportClass>,
    length: Option<TourLength>,
    party_size: u32,
) -> PriceQuote {
    let Some(transport) = transport else {
        return PriceQuote::zero();
    };
    let days = billable_days(tour_type, length);
    let rate = format_thousands(transport.rate_jpy);
    let (total_jpy, breakdown) = match transport.pricing {
        PricingMode::FlatPerDay => {
            if tour_type == TourType::Specialized {
                (transport.rate_jpy, format!("¥{rate} per day"))
            } else {
                (
                    transport.rate_jpy * i64::from(days),
                    format!("¥{rate} per day × {}", count(days, "day", "days")),
                )
            }
        }
        PricingMode::PerPersonPerDay => {
            if party_size == 0 {
                return PriceQuote::zero();
            }
            let people = count(party_size, "person", "people");
            if tour_type == TourType::Specialized {
                (
                    transport.rate_jpy * i64::from(party_size),
                    format!("¥{rate} per person × {people}"),
                )
            } else {
                (
                    transport.rate_jpy * i64::from(party_size) * i64::from(days),
                    format!(
                        "¥{rate} per person per day × {people} × {}",
                        count(days, "day", "days")
                    ),
                )
            }
        }
    };
    PriceQuote {
        total_jpy,
        total_usd: jpy_to_usd(total_jpy),
        breakdown,
    }
}

fn count(n: u32, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
