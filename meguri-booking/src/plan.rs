//! Tour plan variants collected on the tour-details step.
//!
//! The three variants carry unrelated payloads, so the plan is a tagged
//! union; switching variants replaces the whole payload and nothing carries
//! over.
use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::pricing::TourLength;
use crate::select::{QuotaSelect, ToggleOutcome};
use crate::view::DurationChoice;

/// The three bookable tour variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourType {
    Regional,
    Specialized,
    Customized,
}

impl TourType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regional => "regional",
            Self::Specialized => "specialized",
            Self::Customized => "customized",
        }
    }

    /// Summary heading, e.g. `"Regional Tour"`.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Regional => "Regional Tour",
            Self::Specialized => "Specialized Tour",
            Self::Customized => "Customized Tour",
        }
    }
}

impl fmt::Display for TourType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TourType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regional" => Ok(Self::Regional),
            "specialized" => Ok(Self::Specialized),
            "customized" => Ok(Self::Customized),
            _ => Err(()),
        }
    }
}

/// Region + length + prefecture picks + vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionalPlan {
    pub region: Option<String>,
    pub length_days: Option<u8>,
    pub prefectures: QuotaSelect,
    pub transport: Option<String>,
}

impl RegionalPlan {
    /// Choose a region: rebuilds the prefecture set and resets the length.
    /// Picks stay locked (quota 0) until a length is chosen.
    pub fn set_region(&mut self, catalog: &Catalog, region_id: &str) -> bool {
        let Some(region) = catalog.region(region_id) else {
            log::warn!("unknown region id {region_id:?}");
            return false;
        };
        self.region = Some(region.id.clone());
        self.length_days = None;
        self.prefectures = QuotaSelect::new(region.prefectures.clone(), 0);
        self.transport = None;
        true
    }

    /// Choose a length: the prefecture quota becomes the day count.
    pub fn set_length(&mut self, catalog: &Catalog, days: u8) -> bool {
        let Some(region) = self.region.as_deref().and_then(|id| catalog.region(id)) else {
            log::warn!("tour length chosen before a region");
            return false;
        };
        if days == 0 || days > region.max_days {
            log::warn!(
                "length {days} outside 1..={} for region {}",
                region.max_days,
                region.id
            );
            return false;
        }
        self.length_days = Some(days);
        self.prefectures.set_quota(usize::from(days));
        self.transport = None;
        true
    }

    /// Length select options for the chosen region, e.g. `"3"` / `"3 days"`.
    #[must_use]
    pub fn length_choices(&self, catalog: &Catalog) -> Vec<DurationChoice> {
        let Some(region) = self.region.as_deref().and_then(|id| catalog.region(id)) else {
            return Vec::new();
        };
        region
            .length_options()
            .into_iter()
            .map(|days| DurationChoice {
                value: days.to_string(),
                label: TourLength::Days(u32::from(days)).label(),
            })
            .collect()
    }
}

/// Category + duration + option picks + transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecializedPlan {
    pub category: Option<String>,
    pub hours: Option<u8>,
    pub options: QuotaSelect,
    pub transport: Option<String>,
}

impl SpecializedPlan {
    /// Choose a category: rebuilds the option set and resets the duration.
    pub fn set_category(&mut self, catalog: &Catalog, category_id: &str) -> bool {
        let Some(category) = catalog.specialized(category_id) else {
            log::warn!("unknown specialized category id {category_id:?}");
            return false;
        };
        self.category = Some(category.id.clone());
        self.hours = None;
        self.options = QuotaSelect::new(category.options.clone(), 0);
        self.transport = None;
        true
    }

    /// Choose a duration: the option quota comes from the category's
    /// duration table.
    pub fn set_hours(&mut self, catalog: &Catalog, hours: u8) -> bool {
        let Some(category) = self
            .category
            .as_deref()
            .and_then(|id| catalog.specialized(id))
        else {
            log::warn!("duration chosen before a specialized category");
            return false;
        };
        let Some(quota) = category.quota_for_hours(hours) else {
            log::warn!("{hours} hours is not offered by category {}", category.id);
            return false;
        };
        self.hours = Some(hours);
        self.options.set_quota(usize::from(quota));
        self.transport = None;
        true
    }

    /// Duration select options, e.g. value `"4hours"`, label
    /// `"4 hours (2 selections)"`. Auto-length categories omit the selection
    /// count since it is always one.
    #[must_use]
    pub fn duration_choices(&self, catalog: &Catalog) -> Vec<DurationChoice> {
        let Some(category) = self
            .category
            .as_deref()
            .and_then(|id| catalog.specialized(id))
        else {
            return Vec::new();
        };
        category
            .lengths
            .iter()
            .zip(&category.selections)
            .map(|(&hours, &picks)| {
                let value = format!("{hours}hours");
                let label = if category.auto_length {
                    format!("{hours} hours")
                } else if picks == 1 {
                    format!("{hours} hours ({picks} selection)")
                } else {
                    format!("{hours} hours ({picks} selections)")
                };
                DurationChoice { value, label }
            })
            .collect()
    }
}

/// Free-form length + interest text + transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomizedPlan {
    /// Raw select value; may be a day count (`"3days"`) or an hour label.
    pub length_raw: String,
    pub interest: String,
    pub transport: Option<String>,
}

impl CustomizedPlan {
    pub fn set_length(&mut self, raw: &str) {
        self.length_raw = raw.trim().to_string();
        self.transport = None;
    }

    #[must_use]
    pub fn length(&self) -> Option<TourLength> {
        if self.length_raw.is_empty() {
            return None;
        }
        TourLength::parse(&self.length_raw)
    }
}

/// The active tour plan, keyed by tour type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourPlan {
    Regional(RegionalPlan),
    Specialized(SpecializedPlan),
    Customized(CustomizedPlan),
}

impl TourPlan {
    /// Fresh payload for the given variant.
    #[must_use]
    pub fn new(tour_type: TourType) -> Self {
        match tour_type {
            TourType::Regional => Self::Regional(RegionalPlan::default()),
            TourType::Specialized => Self::Specialized(SpecializedPlan::default()),
            TourType::Customized => Self::Customized(CustomizedPlan::default()),
        }
    }

    #[must_use]
    pub const fn tour_type(&self) -> TourType {
        match self {
            Self::Regional(_) => TourType::Regional,
            Self::Specialized(_) => TourType::Specialized,
            Self::Customized(_) => TourType::Customized,
        }
    }

    #[must_use]
    pub fn transport_id(&self) -> Option<&str> {
        match self {
            Self::Regional(plan) => plan.transport.as_deref(),
            Self::Specialized(plan) => plan.transport.as_deref(),
            Self::Customized(plan) => plan.transport.as_deref(),
        }
    }

    pub(crate) fn set_transport(&mut self, transport_id: &str) {
        let slot = match self {
            Self::Regional(plan) => &mut plan.transport,
            Self::Specialized(plan) => &mut plan.transport,
            Self::Customized(plan) => &mut plan.transport,
        };
        *slot = Some(transport_id.to_string());
    }

    /// Drop the vehicle choice; used when an eligibility input changes.
    pub fn clear_transport(&mut self) {
        match self {
            Self::Regional(plan) => plan.transport = None,
            Self::Specialized(plan) => plan.transport = None,
            Self::Customized(plan) => plan.transport = None,
        }
    }

    /// The duration in pricing terms, whatever the variant.
    #[must_use]
    pub fn length(&self) -> Option<TourLength> {
        match self {
            Self::Regional(plan) => plan
                .length_days
                .map(|days| TourLength::Days(u32::from(days))),
            Self::Specialized(plan) => plan.hours.map(|hours| TourLength::Hours(u32::from(hours))),
            Self::Customized(plan) => plan.length(),
        }
    }

    /// Toggle a multi-select item on whichever variant owns one.
    pub fn toggle_pick(&mut self, label: &str) -> ToggleOutcome {
        match self {
            Self::Regional(plan) => plan.prefectures.toggle(label),
            Self::Specialized(plan) => plan.options.toggle(label),
            Self::Customized(_) => {
                log::warn!("customized plans have no multi-select");
                ToggleOutcome::UnknownItem
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn choosing_a_region_locks_picks_until_a_length_exists() {
        let catalog = Catalog::global();
        let mut plan = RegionalPlan::default();
        assert!(plan.set_region(catalog, "kanto"));
        assert_eq!(plan.prefectures.items().len(), 7);
        assert_eq!(plan.prefectures.toggle("Tokyo"), ToggleOutcome::QuotaFull);

        assert!(plan.set_length(catalog, 3));
        assert_eq!(plan.prefectures.toggle("Tokyo"), ToggleOutcome::Selected);
    }

    #[test]
    fn changing_region_resets_length_and_picks() {
        let catalog = Catalog::global();
        let mut plan = RegionalPlan::default();
        plan.set_region(catalog, "kanto");
        plan.set_length(catalog, 2);
        plan.prefectures.toggle("Tokyo");
        plan.transport = Some("car-sedan".into());

        assert!(plan.set_region(catalog, "kansai"));
        assert_eq!(plan.length_days, None);
        assert_eq!(plan.prefectures.selected_count(), 0);
        assert_eq!(plan.transport, None);
        assert_eq!(plan.prefectures.items()[0], "Osaka");
    }

    #[test]
    fn region_length_respects_the_regional_maximum() {
        let catalog = Catalog::global();
        let mut plan = RegionalPlan::default();
        plan.set_region(catalog, "hokkaido");
        assert!(!plan.set_length(catalog, 4));
        assert!(!plan.set_length(catalog, 0));
        assert!(plan.set_length(catalog, 3));
        assert_eq!(plan.length_choices(catalog).len(), 3);
    }

    #[test]
    fn unknown_region_aborts_without_mutation() {
        let catalog = Catalog::global();
        let mut plan = RegionalPlan::default();
        plan.set_region(catalog, "kanto");
        assert!(!plan.set_region(catalog, "atlantis"));
        assert_eq!(plan.region.as_deref(), Some("kanto"));
    }

    #[test]
    fn specialized_duration_drives_the_option_quota() {
        let catalog = Catalog::global();
        let mut plan = SpecializedPlan::default();
        assert!(plan.set_category(catalog, "cultural"));
        assert!(plan.set_hours(catalog, 6));
        assert_eq!(plan.options.quota(), 3);
        assert!(!plan.set_hours(catalog, 5));
        assert_eq!(plan.hours, Some(6));
    }

    #[test]
    fn auto_length_categories_resolve_quota_one() {
        let catalog = Catalog::global();
        let mut plan = SpecializedPlan::default();
        plan.set_category(catalog, "nature");
        assert!(plan.set_hours(catalog, 8));
        assert_eq!(plan.options.quota(), 1);
        let labels: Vec<_> = plan
            .duration_choices(catalog)
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["6 hours", "8 hours"]);
    }

    #[test]
    fn duration_labels_include_the_selection_count() {
        let catalog = Catalog::global();
        let mut plan = SpecializedPlan::default();
        plan.set_category(catalog, "cultural");
        let choices = plan.duration_choices(catalog);
        assert_eq!(choices[0].value, "4hours");
        assert_eq!(choices[0].label, "4 hours (2 selections)");
        assert_eq!(choices[3].label, "10 hours (5 selections)");
    }

    #[test]
    fn customized_length_parses_lazily() {
        let mut plan = CustomizedPlan::default();
        assert_eq!(plan.length(), None);
        plan.set_length("3days");
        assert_eq!(plan.length(), Some(TourLength::Days(3)));
        plan.set_length("8hours");
        assert_eq!(plan.length(), Some(TourLength::Hours(8)));
    }

    #[test]
    fn switching_variants_replaces_the_payload() {
        let catalog = Catalog::global();
        let mut plan = TourPlan::new(TourType::Regional);
        if let TourPlan::Regional(regional) = &mut plan {
            regional.set_region(catalog, "kanto");
        }
        plan = TourPlan::new(TourType::Specialized);
        assert_eq!(plan.tour_type(), TourType::Specialized);
        assert_eq!(plan.transport_id(), None);
        assert_eq!(plan.length(), None);
    }
}
