//! Wizard session state machine.
//!
//! One `WizardSession` owns everything a single booking attempt collects.
//! It is created when the wizard opens, mutated synchronously by input
//! events, and discarded (or reset) when the modal closes. There are no
//! ambient globals and no deferred timers: every derived widget is re-read
//! from state, so "regeneration" is just calling the accessor again.
use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::calendar::{CalendarState, DayStatus, MonthView};
use crate::catalog::Catalog;
use crate::plan::{TourPlan, TourType};
use crate::select::ToggleOutcome;
use crate::summary::{BookingSummary, build_summary};
use crate::transport::{TransportWidget, eligible_transports, transport_widget};
use crate::validate::{FieldId, ValidationReport};
use crate::view::{ButtonView, DurationChoice, TransferFieldsView};

/// How the wizard was opened. The calendar-first contact page gets an extra
/// date-picker step before personal info; the modal does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Modal,
    CalendarFirst,
}

/// Wizard steps in order. `Calendar` only exists for calendar-first sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Calendar,
    Contact,
    TourDetails,
    Logistics,
    Summary,
}

impl Step {
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Calendar => 0,
            Self::Contact => 1,
            Self::TourDetails => 2,
            Self::Logistics => 3,
            Self::Summary => 4,
        }
    }
}

/// Party size as selected, with the `"11+"` sentinel kept distinct so the
/// custom head-count field can be validated separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartySize {
    #[default]
    Unset,
    Exact(u32),
    /// `"11+"` chosen; the payload is the custom head count once entered.
    ElevenPlus(Option<u32>),
}

impl PartySize {
    /// Parse the select value; anything non-numeric other than the sentinel
    /// is treated as no selection.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "11+" {
            return Self::ElevenPlus(None);
        }
        raw.parse()
            .ok()
            .filter(|n| *n >= 1)
            .map_or(Self::Unset, Self::Exact)
    }

    /// Head count used for eligibility and pricing. `"11+"` with the custom
    /// field still blank counts as 11 so the transport widget can populate.
    #[must_use]
    pub const fn effective(self) -> u32 {
        match self {
            Self::Unset => 0,
            Self::Exact(n) => n,
            Self::ElevenPlus(Some(n)) => n,
            Self::ElevenPlus(None) => 11,
        }
    }

    #[must_use]
    pub const fn needs_custom(self) -> bool {
        matches!(self, Self::ElevenPlus(_))
    }
}

/// Personal info collected on the first form step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub party: PartySize,
}

/// Where a transfer happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Hotel,
    Station,
    Airport,
}

impl TransferKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Station => "station",
            Self::Airport => "airport",
        }
    }

    /// Summary label, e.g. `"Hotel"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::Station => "Station",
            Self::Airport => "Airport",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hotel" => Ok(Self::Hotel),
            "station" => Ok(Self::Station),
            "airport" => Ok(Self::Airport),
            _ => Err(()),
        }
    }
}

/// One pickup or dropoff descriptor. `details` holds hotel/station free text
/// or the chosen airport, depending on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransferStop {
    pub kind: Option<TransferKind>,
    pub details: String,
}

impl TransferStop {
    /// Changing the kind invalidates whatever detail text went with the old
    /// one.
    pub fn set_kind(&mut self, kind: Option<TransferKind>) {
        if self.kind != kind {
            self.details.clear();
        }
        self.kind = kind;
    }

    /// Which detail fields the renderer should show for this stop.
    #[must_use]
    pub fn fields_view(&self) -> TransferFieldsView {
        match self.kind {
            None => TransferFieldsView::HIDDEN,
            Some(TransferKind::Hotel) => TransferFieldsView {
                group_visible: true,
                free_text_visible: true,
                airport_visible: false,
                label: "Hotel Details",
            },
            Some(TransferKind::Station) => TransferFieldsView {
                group_visible: true,
                free_text_visible: true,
                airport_visible: false,
                label: "Station Name",
            },
            Some(TransferKind::Airport) => TransferFieldsView {
                group_visible: true,
                free_text_visible: false,
                airport_visible: true,
                label: "",
            },
        }
    }
}

/// Logistics step fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Logistics {
    pub pickup: TransferStop,
    pub dropoff: TransferStop,
    pub extra_info: String,
    pub terms_accepted: bool,
}

/// Pre-selection carried by a "Book this tour" button. Applied when the
/// tour-details step is first shown, replacing the old timer-chain prefill
/// with direct sequencing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefill {
    pub tour_type: TourType,
    pub region: Option<String>,
    pub category: Option<String>,
}

/// Result of an `advance` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    Blocked(ValidationReport),
    /// Already on the summary step; `submit` is the only way forward.
    AtEnd,
}

/// The whole wizard state for one booking attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    entry: EntryPoint,
    step: Step,
    today: NaiveDate,
    calendar: CalendarState,
    contact: ContactInfo,
    plan: Option<TourPlan>,
    logistics: Logistics,
    summary: Option<BookingSummary>,
    prefill: Option<Prefill>,
    catalog: &'static Catalog,
}

impl WizardSession {
    /// Open a session against the system clock.
    #[must_use]
    pub fn open(entry: EntryPoint) -> Self {
        Self::new(entry, Local::now().date_naive())
    }

    /// Open a session with an explicit "today", which anchors every calendar
    /// classification for the session's lifetime.
    #[must_use]
    pub fn new(entry: EntryPoint, today: NaiveDate) -> Self {
        let step = match entry {
            EntryPoint::Modal => Step::Contact,
            EntryPoint::CalendarFirst => Step::Calendar,
        };
        Self {
            entry,
            step,
            today,
            calendar: CalendarState::new(today),
            contact: ContactInfo::default(),
            plan: None,
            logistics: Logistics::default(),
            summary: None,
            prefill: None,
            catalog: Catalog::global(),
        }
    }

    #[must_use]
    pub const fn entry(&self) -> EntryPoint {
        self.entry
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    #[must_use]
    pub const fn plan(&self) -> Option<&TourPlan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub const fn logistics(&self) -> &Logistics {
        &self.logistics
    }

    #[must_use]
    pub const fn summary(&self) -> Option<&BookingSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        self.catalog
    }

    // ----- calendar step -----

    /// Try to select a date; refused for past/booked days.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<DayStatus> {
        self.calendar.select(date, self.today)
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.calendar.selected()
    }

    /// Whether a date has been picked; the calendar-first Next button stays
    /// disabled until this is true.
    #[must_use]
    pub fn date_chosen(&self) -> bool {
        self.calendar.selected().is_some()
    }

    #[must_use]
    pub fn calendar_view(&self) -> MonthView {
        self.calendar.month_view(self.today)
    }

    pub fn calendar_prev_month(&mut self) {
        self.calendar.prev_month();
    }

    pub fn calendar_next_month(&mut self) {
        self.calendar.next_month();
    }

    // ----- contact step -----

    pub fn set_name(&mut self, value: &str) {
        self.contact.name = value.to_string();
    }

    pub fn set_email(&mut self, value: &str) {
        self.contact.email = value.to_string();
    }

    pub fn set_contact(&mut self, value: &str) {
        self.contact.contact = value.to_string();
    }

    /// Apply the party-size select. An effective head-count change abandons
    /// the current vehicle choice, since eligibility may have shifted.
    pub fn set_party(&mut self, raw: &str) {
        let party = PartySize::parse(raw);
        let changed = party.effective() != self.contact.party.effective();
        self.contact.party = party;
        if changed {
            self.clear_transport();
        }
    }

    /// Apply the custom head-count field shown for `"11+"`.
    pub fn set_party_custom(&mut self, raw: &str) {
        if !self.contact.party.needs_custom() {
            log::warn!("custom head count entered without the 11+ sentinel");
            return;
        }
        let value = raw.trim().parse().ok();
        let party = PartySize::ElevenPlus(value);
        let changed = party.effective() != self.contact.party.effective();
        self.contact.party = party;
        if changed {
            self.clear_transport();
        }
    }

    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.contact.party.effective()
    }

    #[must_use]
    pub const fn custom_party_visible(&self) -> bool {
        self.contact.party.needs_custom()
    }

    // ----- tour details step -----

    /// Pick a tour-type variant. Switching replaces the whole payload, so
    /// every sub-selection of the previous variant is gone.
    pub fn choose_tour_type(&mut self, tour_type: TourType) {
        if self.plan.as_ref().map(TourPlan::tour_type) == Some(tour_type) {
            return;
        }
        self.plan = Some(TourPlan::new(tour_type));
    }

    #[must_use]
    pub fn active_tour_type(&self) -> Option<TourType> {
        self.plan.as_ref().map(TourPlan::tour_type)
    }

    /// Whether the given variant's field group should be visible.
    #[must_use]
    pub fn tour_fields_visible(&self, tour_type: TourType) -> bool {
        self.active_tour_type() == Some(tour_type)
    }

    pub fn set_region(&mut self, region_id: &str) -> bool {
        let catalog = self.catalog;
        match &mut self.plan {
            Some(TourPlan::Regional(plan)) => plan.set_region(catalog, region_id),
            _ => {
                log::warn!("region change without an active regional plan");
                false
            }
        }
    }

    pub fn set_region_length(&mut self, days: u8) -> bool {
        let catalog = self.catalog;
        match &mut self.plan {
            Some(TourPlan::Regional(plan)) => plan.set_length(catalog, days),
            _ => {
                log::warn!("length change without an active regional plan");
                false
            }
        }
    }

    pub fn toggle_prefecture(&mut self, label: &str) -> ToggleOutcome {
        match &mut self.plan {
            Some(TourPlan::Regional(plan)) => plan.prefectures.toggle(label),
            _ => {
                log::warn!("prefecture toggle without an active regional plan");
                ToggleOutcome::UnknownItem
            }
        }
    }

    pub fn set_category(&mut self, category_id: &str) -> bool {
        let catalog = self.catalog;
        match &mut self.plan {
            Some(TourPlan::Specialized(plan)) => plan.set_category(catalog, category_id),
            _ => {
                log::warn!("category change without an active specialized plan");
                false
            }
        }
    }

    pub fn set_category_hours(&mut self, hours: u8) -> bool {
        let catalog = self.catalog;
        match &mut self.plan {
            Some(TourPlan::Specialized(plan)) => plan.set_hours(catalog, hours),
            _ => {
                log::warn!("duration change without an active specialized plan");
                false
            }
        }
    }

    pub fn toggle_option(&mut self, label: &str) -> ToggleOutcome {
        match &mut self.plan {
            Some(TourPlan::Specialized(plan)) => plan.options.toggle(label),
            _ => {
                log::warn!("option toggle without an active specialized plan");
                ToggleOutcome::UnknownItem
            }
        }
    }

    pub fn set_custom_length(&mut self, raw: &str) {
        match &mut self.plan {
            Some(TourPlan::Customized(plan)) => plan.set_length(raw),
            _ => log::warn!("length change without an active customized plan"),
        }
    }

    pub fn set_interest(&mut self, text: &str) {
        match &mut self.plan {
            Some(TourPlan::Customized(plan)) => plan.interest = text.to_string(),
            _ => log::warn!("interest change without an active customized plan"),
        }
    }

    /// Pick a vehicle. The id must be eligible for the current party size.
    pub fn select_transport(&mut self, transport_id: &str) -> bool {
        let party = self.party_size();
        let eligible = eligible_transports(self.catalog, party)
            .iter()
            .any(|class| class.id == transport_id);
        if !eligible {
            log::warn!("transport {transport_id:?} is not eligible for a party of {party}");
            return false;
        }
        match &mut self.plan {
            Some(plan) => {
                plan.set_transport(transport_id);
                true
            }
            None => {
                log::warn!("transport chosen before a tour type");
                false
            }
        }
    }

    fn clear_transport(&mut self) {
        if let Some(plan) = &mut self.plan {
            plan.clear_transport();
        }
    }

    /// The transport picker, derived fresh from current state. Call it again
    /// after any change; there is no cached widget to invalidate.
    #[must_use]
    pub fn transport_widget(&self) -> TransportWidget {
        transport_widget(
            self.catalog,
            self.party_size(),
            self.plan.as_ref().and_then(TourPlan::transport_id),
        )
    }

    #[must_use]
    pub fn prefecture_buttons(&self) -> Vec<ButtonView> {
        match &self.plan {
            Some(TourPlan::Regional(plan)) => plan.prefectures.buttons(),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn option_buttons(&self) -> Vec<ButtonView> {
        match &self.plan {
            Some(TourPlan::Specialized(plan)) => plan.options.buttons(),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn region_length_choices(&self) -> Vec<DurationChoice> {
        match &self.plan {
            Some(TourPlan::Regional(plan)) => plan.length_choices(self.catalog),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn specialized_duration_choices(&self) -> Vec<DurationChoice> {
        match &self.plan {
            Some(TourPlan::Specialized(plan)) => plan.duration_choices(self.catalog),
            _ => Vec::new(),
        }
    }

    /// Helper line under the prefecture picker once a quota exists.
    #[must_use]
    pub fn prefecture_hint(&self) -> Option<String> {
        match &self.plan {
            Some(TourPlan::Regional(plan)) => {
                let quota = plan.prefectures.quota();
                (quota > 0).then(|| {
                    if quota == 1 {
                        "Select up to 1 prefecture".to_string()
                    } else {
                        format!("Select up to {quota} prefectures")
                    }
                })
            }
            _ => None,
        }
    }

    /// Helper line under the specialized option picker once a quota exists.
    #[must_use]
    pub fn option_hint(&self) -> Option<String> {
        match &self.plan {
            Some(TourPlan::Specialized(plan)) => {
                let quota = plan.options.quota();
                (quota > 0).then(|| {
                    if quota == 1 {
                        "Select up to 1 option".to_string()
                    } else {
                        format!("Select up to {quota} options")
                    }
                })
            }
            _ => None,
        }
    }

    // ----- logistics step -----

    pub fn set_pickup_kind(&mut self, kind: Option<TransferKind>) {
        self.logistics.pickup.set_kind(kind);
    }

    pub fn set_pickup_details(&mut self, details: &str) {
        self.logistics.pickup.details = details.to_string();
    }

    pub fn set_dropoff_kind(&mut self, kind: Option<TransferKind>) {
        self.logistics.dropoff.set_kind(kind);
    }

    pub fn set_dropoff_details(&mut self, details: &str) {
        self.logistics.dropoff.details = details.to_string();
    }

    pub fn set_extra_info(&mut self, text: &str) {
        self.logistics.extra_info = text.to_string();
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.logistics.terms_accepted = accepted;
    }

    // ----- prefill -----

    /// Store a pre-selection to apply when the tour-details step is shown.
    pub fn set_prefill(&mut self, prefill: Prefill) {
        self.prefill = Some(prefill);
    }

    fn apply_prefill(&mut self) {
        let Some(prefill) = self.prefill.take() else {
            return;
        };
        self.choose_tour_type(prefill.tour_type);
        match prefill.tour_type {
            TourType::Regional => {
                let Some(region_id) = prefill.region else {
                    return;
                };
                if !self.set_region(&region_id) {
                    return;
                }
                self.set_region_length(1);
                let first = self
                    .catalog
                    .region(&region_id)
                    .and_then(|region| region.prefectures.first())
                    .cloned();
                if let Some(label) = first {
                    self.toggle_prefecture(&label);
                }
            }
            TourType::Specialized => {
                let Some(category_id) = prefill.category else {
                    return;
                };
                if !self.set_category(&category_id) {
                    return;
                }
                let category = self.catalog.specialized(&category_id);
                if let Some(hours) = category.and_then(|c| c.lengths.first().copied()) {
                    self.set_category_hours(hours);
                }
                let first = category.and_then(|c| c.options.first()).cloned();
                if let Some(label) = first {
                    self.toggle_option(&label);
                }
            }
            TourType::Customized => {}
        }
    }

    // ----- state machine -----

    /// Attempt to move forward one step. The calendar pre-step never gates;
    /// form steps validate first; leaving logistics generates the summary.
    pub fn advance(&mut self) -> Advance {
        match self.step {
            Step::Calendar => {
                self.enter(Step::Contact);
                Advance::Moved(Step::Contact)
            }
            Step::Contact | Step::TourDetails | Step::Logistics => {
                let report = self.validate(self.step);
                if !report.is_valid() {
                    return Advance::Blocked(report);
                }
                let next = if self.step == Step::Contact {
                    Step::TourDetails
                } else if self.step == Step::TourDetails {
                    Step::Logistics
                } else {
                    self.summary = Some(build_summary(self));
                    Step::Summary
                };
                self.enter(next);
                Advance::Moved(next)
            }
            Step::Summary => Advance::AtEnd,
        }
    }

    fn enter(&mut self, step: Step) {
        self.step = step;
        if step == Step::TourDetails {
            self.apply_prefill();
        }
    }

    /// Move backward one step. Contact only retreats to the calendar when
    /// this session has one.
    pub fn retreat(&mut self) -> Option<Step> {
        let target = match self.step {
            Step::Calendar => None,
            Step::Contact => match self.entry {
                EntryPoint::CalendarFirst => Some(Step::Calendar),
                EntryPoint::Modal => None,
            },
            Step::TourDetails => Some(Step::Contact),
            Step::Logistics => Some(Step::TourDetails),
            Step::Summary => Some(Step::Logistics),
        }?;
        self.step = target;
        Some(target)
    }

    /// Validate one step's fields without moving.
    #[must_use]
    pub fn validate(&self, step: Step) -> ValidationReport {
        match step {
            Step::Calendar | Step::Summary => ValidationReport::new(),
            Step::Contact => self.validate_contact(),
            Step::TourDetails => self.validate_tour_details(),
            Step::Logistics => self.validate_logistics(),
        }
    }

    fn validate_contact(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.contact.name.trim().is_empty() {
            report.push(FieldId::Name, "Please enter your name");
        }
        let email = self.contact.email.trim();
        if email.is_empty() || !email.contains('@') {
            report.push(FieldId::Email, "Please enter a valid email address");
        }
        if self.contact.contact.trim().is_empty() {
            report.push(FieldId::Contact, "Please enter a contact number");
        }
        match self.contact.party {
            PartySize::Unset => {
                report.push(FieldId::PartySize, "Please select the number of people");
            }
            PartySize::Exact(_) => {}
            PartySize::ElevenPlus(custom) => {
                if custom.is_none_or(|n| n < 11) {
                    report.push(FieldId::PartyCustom, "Please enter a group size of at least 11");
                }
            }
        }
        report
    }

    fn validate_tour_details(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let Some(plan) = &self.plan else {
            // Blocking notice; variant fields are never inspected.
            report.block("Please select a tour type");
            return report;
        };
        match plan {
            TourPlan::Regional(plan) => {
                if plan.region.is_none() {
                    report.push(FieldId::Region, "Please select a region");
                }
                if plan.length_days.is_none() {
                    report.push(FieldId::RegionLength, "Please select a tour length");
                }
                if !plan.prefectures.is_satisfied() {
                    report.push(FieldId::Prefectures, "Please select at least one prefecture");
                }
                if plan.transport.is_none() {
                    report.push(FieldId::Transport, "Please select a vehicle");
                }
            }
            TourPlan::Specialized(plan) => {
                if plan.category.is_none() {
                    report.push(FieldId::SpecializedCategory, "Please select a tour category");
                }
                if plan.hours.is_none() {
                    report.push(FieldId::SpecializedLength, "Please select a tour length");
                }
                if !plan.options.is_satisfied() {
                    report.push(FieldId::SpecializedOptions, "Please select at least one option");
                }
                if plan.transport.is_none() {
                    report.push(FieldId::Transport, "Please select transportation");
                }
            }
            TourPlan::Customized(plan) => {
                if plan.length_raw.is_empty() {
                    report.push(FieldId::CustomLength, "Please select a tour length");
                }
                if plan.interest.trim().is_empty() {
                    report.push(FieldId::Interest, "Please tell us your interests");
                }
                if plan.transport.is_none() {
                    report.push(FieldId::Transport, "Please select transportation");
                }
            }
        }
        report
    }

    fn validate_logistics(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let stops = [
            (
                &self.logistics.pickup,
                FieldId::PickupKind,
                FieldId::PickupDetails,
                "Please select a pickup location",
                "Please provide pickup details",
            ),
            (
                &self.logistics.dropoff,
                FieldId::DropoffKind,
                FieldId::DropoffDetails,
                "Please select a dropoff location",
                "Please provide dropoff details",
            ),
        ];
        for (stop, kind_field, details_field, kind_message, details_message) in stops {
            match stop.kind {
                // The detail fields are hidden until a kind is chosen, so
                // they are exempt from the required check.
                None => report.push(kind_field, kind_message),
                Some(_) => {
                    if stop.details.trim().is_empty() {
                        report.push(details_field, details_message);
                    }
                }
            }
        }
        if !self.logistics.terms_accepted {
            report.push(FieldId::Terms, "Please accept the terms to continue");
        }
        report
    }

    /// Submit from the summary step: hand the summary back and reset the
    /// session. There is no network submission behind this.
    pub fn submit(&mut self) -> Option<BookingSummary> {
        if self.step != Step::Summary {
            log::warn!("submit outside the summary step");
            return None;
        }
        let summary = self.summary.take();
        self.reset();
        summary
    }

    /// Back to a pristine session, as when the modal closes.
    pub fn reset(&mut self) {
        *self = Self::new(self.entry, self.today);
    }
}
