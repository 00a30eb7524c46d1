//! Meguri Booking Engine
//!
//! Platform-agnostic core logic for the Meguri Tours booking wizard.
//! This crate provides the wizard state machine, catalog, pricing, and
//! calendar models without UI or platform-specific dependencies.

pub mod calendar;
pub mod catalog;
pub mod estimate;
pub mod numbers;
pub mod plan;
pub mod pricing;
pub mod select;
pub mod session;
pub mod summary;
pub mod transport;
pub mod validate;
pub mod view;

// Re-export commonly used types
pub use calendar::{
    AvailabilityFixtures, CalendarState, DayCell, DayStatus, MonthView,
};
pub use catalog::{
    Catalog, CatalogError, PricingMode, Region, SpecializedCategory, TransportClass,
};
pub use estimate::{Estimate, EstimateDuration, TravelMode, estimate};
pub use plan::{CustomizedPlan, RegionalPlan, SpecializedPlan, TourPlan, TourType};
pub use pricing::{JPY_PER_USD, PriceQuote, TourLength, quote};
pub use select::{QuotaSelect, ToggleOutcome};
pub use session::{
    Advance, ContactInfo, EntryPoint, Logistics, PartySize, Prefill, Step, TransferKind,
    TransferStop, WizardSession,
};
pub use summary::{BookingSummary, SummaryRow, build_summary};
pub use transport::{TransportWidget, eligible_transports, transport_widget};
pub use validate::{FieldError, FieldId, ValidationReport};
pub use view::{ButtonView, DurationChoice, TransferFieldsView};
