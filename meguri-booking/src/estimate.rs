//! Instant ballpark estimator for the quick-quote modal.
//!
//! Separate from the wizard's pricing engine: this one answers "roughly what
//! would it cost" before any details are collected, from a duration base
//! price and a travel-mode multiplier.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::numbers::{i64_to_f64, jpy_to_usd, round_f64_to_i64};

/// Duration presets offered by the quick-quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateDuration {
    FourHours,
    FullDay,
    ThreeDays,
    SevenDays,
}

impl EstimateDuration {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FourHours => "4h",
            Self::FullDay => "day",
            Self::ThreeDays => "3days",
            Self::SevenDays => "7days",
        }
    }

    /// Base price in yen before the travel-mode multiplier.
    #[must_use]
    pub const fn base_jpy(self) -> i64 {
        match self {
            Self::FourHours => 20_000,
            Self::FullDay => 35_000,
            Self::ThreeDays => 95_000,
            Self::SevenDays => 220_000,
        }
    }
}

impl fmt::Display for EstimateDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimateDuration {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4h" => Ok(Self::FourHours),
            "day" => Ok(Self::FullDay),
            "3days" => Ok(Self::ThreeDays),
            "7days" => Ok(Self::SevenDays),
            _ => Err(()),
        }
    }
}

/// Travel mode chosen on the quick-quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walk,
    Bike,
    Car,
    Van,
    Bus,
}

impl TravelMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Van => "van",
            Self::Bus => "bus",
        }
    }

    /// Multiplier applied to the duration base price.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Walk => 0.8,
            Self::Bike => 0.9,
            Self::Car => 1.2,
            Self::Van => 1.5,
            Self::Bus => 2.0,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walk" => Ok(Self::Walk),
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            "van" => Ok(Self::Van),
            "bus" => Ok(Self::Bus),
            _ => Err(()),
        }
    }
}

/// A rounded ballpark figure in both display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub jpy: i64,
    pub usd: i64,
}

/// Estimate a tour cost from the two quick-quote inputs.
#[must_use]
pub fn estimate(duration: EstimateDuration, mode: TravelMode) -> Estimate {
    let jpy = round_f64_to_i64(i64_to_f64(duration.base_jpy()) * mode.multiplier());
    Estimate {
        jpy,
        usd: jpy_to_usd(jpy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_discounts_the_base_price() {
        let est = estimate(EstimateDuration::FourHours, TravelMode::Walk);
        assert_eq!(est.jpy, 16_000);
        assert_eq!(est.usd, 107);
    }

    #[test]
    fn bus_doubles_the_week_rate() {
        let est = estimate(EstimateDuration::SevenDays, TravelMode::Bus);
        assert_eq!(est.jpy, 440_000);
        assert_eq!(est.usd, 2_933);
    }

    #[test]
    fn odd_multipliers_round_to_whole_yen() {
        let est = estimate(EstimateDuration::ThreeDays, TravelMode::Bike);
        assert_eq!(est.jpy, 85_500);
        assert_eq!(est.usd, 570);
    }

    #[test]
    fn ids_round_trip() {
        for duration in [
            EstimateDuration::FourHours,
            EstimateDuration::FullDay,
            EstimateDuration::ThreeDays,
            EstimateDuration::SevenDays,
        ] {
            assert_eq!(duration.as_str().parse(), Ok(duration));
        }
        for mode in [
            TravelMode::Walk,
            TravelMode::Bike,
            TravelMode::Car,
            TravelMode::Van,
            TravelMode::Bus,
        ] {
            assert_eq!(mode.as_str().parse(), Ok(mode));
        }
    }
}
