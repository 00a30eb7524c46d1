//! View-model types handed to the rendering layer.
//!
//! The core never touches the DOM; it emits these shapes and the page layer
//! renders them.
use serde::Serialize;

/// One selectable button in a generated widget (transport, prefecture,
/// specialized option).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub value: String,
    pub label: String,
    pub selected: bool,
    /// Rendered but inert; clicks on a disabled button are no-ops.
    pub disabled: bool,
}

/// A duration choice for a select box, e.g. value `"4hours"` with label
/// `"4 hours (2 selections)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationChoice {
    pub value: String,
    pub label: String,
}

/// Visibility of the pickup/dropoff detail fields for one transfer stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferFieldsView {
    /// Whether the detail group is shown at all (a kind has been chosen).
    pub group_visible: bool,
    /// Free-text field for hotel details or station name.
    pub free_text_visible: bool,
    /// Airport select shown instead of free text.
    pub airport_visible: bool,
    /// Label above the free-text field; empty when it is hidden.
    pub label: &'static str,
}

impl TransferFieldsView {
    pub(crate) const HIDDEN: Self = Self {
        group_visible: false,
        free_text_visible: false,
        airport_visible: false,
        label: "",
    };
}
