//! Step validation reporting.
//!
//! Field errors mark individual inputs and nominate a focus target; a
//! blocking notice (no tour type chosen) short-circuits validation entirely
//! instead of accumulating with field errors.
use serde::Serialize;

/// Every field the wizard can mark invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Email,
    Contact,
    PartySize,
    PartyCustom,
    Region,
    RegionLength,
    Prefectures,
    SpecializedCategory,
    SpecializedLength,
    SpecializedOptions,
    CustomLength,
    Interest,
    Transport,
    PickupKind,
    PickupDetails,
    DropoffKind,
    DropoffDetails,
    Terms,
}

/// One marked field with its helper message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: &'static str,
}

/// Outcome of validating one step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
    /// A notice that pre-empts field-level checks entirely.
    pub blocking: Option<&'static str>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FieldId, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn block(&mut self, message: &'static str) {
        self.blocking = Some(message);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.blocking.is_none()
    }

    /// The field the renderer should scroll to and focus: the first one
    /// marked, in on-page order.
    #[must_use]
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.errors.first().map(|error| error.field)
    }

    #[must_use]
    pub fn has_error(&self, field: FieldId) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}
