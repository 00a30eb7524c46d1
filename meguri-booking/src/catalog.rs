//! Static tour catalog: regions, specialized categories, transport classes.
//!
//! The catalog is embedded JSON parsed once on first use. In a later phase the
//! same shapes are expected to arrive from a backend catalog service.
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_CATALOG: &str = include_str!("../data/catalog.json");

/// Largest party size checked when validating eligibility-band coverage.
const COVERAGE_CHECK_MAX: u32 = 40;

/// A bookable region with its prefecture list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    /// Longest tour offered for this region, in days.
    pub max_days: u8,
    pub prefectures: Vec<String>,
}

impl Region {
    /// Selectable tour lengths, one per day up to the regional maximum.
    #[must_use]
    pub fn length_options(&self) -> Vec<u8> {
        (1..=self.max_days).collect()
    }
}

/// A specialized tour category (cultural, anime, nature, ...).
///
/// `lengths` and `selections` are parallel tables: picking the duration at
/// index `i` allows up to `selections[i]` activity options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializedCategory {
    pub id: String,
    pub name: String,
    pub options: Vec<String>,
    /// Duration choices in hours, in display order.
    pub lengths: Vec<u8>,
    /// Maximum option picks allowed for the matching duration.
    pub selections: Vec<u8>,
    /// Single-destination categories resolve every duration to one pick
    /// instead of offering a selection-count choice.
    #[serde(default)]
    pub auto_length: bool,
}

impl SpecializedCategory {
    /// Maximum number of option picks allowed for the given hour count.
    #[must_use]
    pub fn quota_for_hours(&self, hours: u8) -> Option<u8> {
        let idx = self.lengths.iter().position(|length| *length == hours)?;
        if self.auto_length {
            return Some(1);
        }
        self.selections.get(idx).copied()
    }
}

/// How a transport class is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// One rate per day regardless of head count.
    FlatPerDay,
    /// Rate multiplied by the party size and the day count.
    PerPersonPerDay,
}

/// A vehicle class with its party-size eligibility band.
///
/// An absent bound is unbounded; bands intentionally overlap so the renderer
/// can present all matches as equal-weight buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportClass {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub min_people: Option<u32>,
    #[serde(default)]
    pub max_people: Option<u32>,
    pub rate_jpy: i64,
    pub pricing: PricingMode,
}

impl TransportClass {
    /// Whether this class serves the given party size (bounds inclusive).
    #[must_use]
    pub fn serves(&self, party_size: u32) -> bool {
        party_size >= 1
            && self.min_people.is_none_or(|min| party_size >= min)
            && self.max_people.is_none_or(|max| party_size <= max)
    }
}

/// Catalog load/validation failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("region {0} has no prefectures")]
    EmptyRegion(String),
    #[error("region {0} must offer at least one day")]
    ZeroDays(String),
    #[error("category {0} has no activity options")]
    EmptyCategory(String),
    #[error("category {0} duration and selection tables differ in length")]
    MismatchedDurations(String),
    #[error("no transport class serves a party of {0}")]
    EligibilityGap(u32),
}

/// The complete static catalog backing the booking wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub regions: Vec<Region>,
    pub specialized: Vec<SpecializedCategory>,
    pub transports: Vec<TransportClass>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or an invariant fails.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the structural invariants the wizard relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for region in &self.regions {
            if region.prefectures.is_empty() {
                return Err(CatalogError::EmptyRegion(region.id.clone()));
            }
            if region.max_days == 0 {
                return Err(CatalogError::ZeroDays(region.id.clone()));
            }
        }
        for category in &self.specialized {
            if category.options.is_empty() {
                return Err(CatalogError::EmptyCategory(category.id.clone()));
            }
            if category.lengths.is_empty() || category.lengths.len() != category.selections.len() {
                return Err(CatalogError::MismatchedDurations(category.id.clone()));
            }
        }
        for size in 1..=COVERAGE_CHECK_MAX {
            if !self.transports.iter().any(|class| class.serves(size)) {
                return Err(CatalogError::EligibilityGap(size));
            }
        }
        Ok(())
    }

    /// The embedded default catalog.
    #[must_use]
    pub fn global() -> &'static Self {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| match Self::from_json(DEFAULT_CATALOG) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("embedded catalog failed to load: {err}");
                Self::default()
            }
        })
    }

    #[must_use]
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    #[must_use]
    pub fn specialized(&self, id: &str) -> Option<&SpecializedCategory> {
        self.specialized.iter().find(|category| category.id == id)
    }

    #[must_use]
    pub fn transport(&self, id: &str) -> Option<&TransportClass> {
        self.transports.iter().find(|class| class.id == id)
    }
}
