//! Quota-bounded multi-select widget state.
//!
//! Backs the prefecture picker and the specialized-option picker. The quota
//! comes from the chosen tour length, so changing the length resets the
//! selection rather than carrying picks across quotas.
use smallvec::SmallVec;

use crate::view::ButtonView;

/// Selected indices stored inline; quotas never exceed a handful of picks.
type SelectedSet = SmallVec<[usize; 8]>;

/// Result of a toggle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Adding was refused because the quota is already met. Silent no-op.
    QuotaFull,
    /// The label is not in the candidate set. Logged, state untouched.
    UnknownItem,
}

/// A "select up to N" widget over an ordered candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuotaSelect {
    items: Vec<String>,
    quota: usize,
    selected: SelectedSet,
}

impl QuotaSelect {
    #[must_use]
    pub fn new(items: Vec<String>, quota: usize) -> Self {
        Self {
            items,
            quota,
            selected: SelectedSet::new(),
        }
    }

    /// Replace the candidate set; any existing picks are discarded.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected.clear();
    }

    /// Change the quota. Selections never survive a quota change.
    pub fn set_quota(&mut self, quota: usize) {
        self.quota = quota;
        self.selected.clear();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn quota(&self) -> usize {
        self.quota
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Flip one item. Removal always succeeds; adding is refused once the
    /// quota is met.
    pub fn toggle(&mut self, label: &str) -> ToggleOutcome {
        let Some(idx) = self.items.iter().position(|item| item == label) else {
            log::warn!("toggle on unknown item {label:?}");
            return ToggleOutcome::UnknownItem;
        };
        if let Some(pos) = self.selected.iter().position(|sel| *sel == idx) {
            self.selected.remove(pos);
            return ToggleOutcome::Deselected;
        }
        if self.selected.len() >= self.quota {
            return ToggleOutcome::QuotaFull;
        }
        self.selected.push(idx);
        ToggleOutcome::Selected
    }

    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.items
            .iter()
            .position(|item| item == label)
            .is_some_and(|idx| self.selected.contains(&idx))
    }

    /// Whether the item should render as inert: quota met and not selected.
    #[must_use]
    pub fn is_disabled(&self, label: &str) -> bool {
        self.selected.len() >= self.quota && !self.is_selected(label)
    }

    /// Selected labels in candidate-set order.
    #[must_use]
    pub fn selected(&self) -> Vec<&str> {
        self.items
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.selected.contains(idx))
            .map(|(_, item)| item.as_str())
            .collect()
    }

    /// At least one pick made; gates step advance.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Renderable button list in candidate-set order.
    #[must_use]
    pub fn buttons(&self) -> Vec<ButtonView> {
        let full = self.selected.len() >= self.quota;
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let selected = self.selected.contains(&idx);
                ButtonView {
                    value: item.clone(),
                    label: item.clone(),
                    selected,
                    disabled: full && !selected,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quota: usize) -> QuotaSelect {
        QuotaSelect::new(
            vec!["Tokyo".into(), "Chiba".into(), "Kanagawa".into()],
            quota,
        )
    }

    #[test]
    fn selection_never_exceeds_quota() {
        let mut select = widget(2);
        assert_eq!(select.toggle("Tokyo"), ToggleOutcome::Selected);
        assert_eq!(select.toggle("Chiba"), ToggleOutcome::Selected);
        assert_eq!(select.toggle("Kanagawa"), ToggleOutcome::QuotaFull);
        assert_eq!(select.selected_count(), 2);
        assert!(select.is_disabled("Kanagawa"));
        assert!(!select.is_disabled("Tokyo"));
    }

    #[test]
    fn deselecting_always_succeeds() {
        let mut select = widget(1);
        select.toggle("Tokyo");
        assert_eq!(select.toggle("Tokyo"), ToggleOutcome::Deselected);
        assert_eq!(select.selected_count(), 0);
        assert!(!select.is_disabled("Chiba"));
    }

    #[test]
    fn quota_change_clears_picks_and_disabled_markers() {
        let mut select = widget(1);
        select.toggle("Tokyo");
        assert!(select.is_disabled("Chiba"));
        select.set_quota(3);
        assert_eq!(select.selected_count(), 0);
        assert!(!select.is_disabled("Chiba"));
        assert!(!select.is_satisfied());
    }

    #[test]
    fn unknown_items_leave_state_untouched() {
        let mut select = widget(2);
        select.toggle("Tokyo");
        assert_eq!(select.toggle("Osaka"), ToggleOutcome::UnknownItem);
        assert_eq!(select.selected(), vec!["Tokyo"]);
    }

    #[test]
    fn selected_labels_come_back_in_candidate_order() {
        let mut select = widget(3);
        select.toggle("Kanagawa");
        select.toggle("Tokyo");
        assert_eq!(select.selected(), vec!["Tokyo", "Kanagawa"]);
    }

    #[test]
    fn zero_quota_rejects_every_add() {
        let mut select = widget(0);
        assert_eq!(select.toggle("Tokyo"), ToggleOutcome::QuotaFull);
        assert!(!select.is_satisfied());
    }

    #[test]
    fn buttons_reflect_selection_and_disabled_state() {
        let mut select = widget(1);
        select.toggle("Chiba");
        let buttons = select.buttons();
        assert_eq!(buttons.len(), 3);
        assert!(buttons[1].selected);
        assert!(buttons[0].disabled);
        assert!(!buttons[1].disabled);
    }
}
