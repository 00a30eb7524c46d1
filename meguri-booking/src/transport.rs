//! Transport eligibility keyed by party size.
use crate::catalog::{Catalog, TransportClass};
use crate::view::ButtonView;

/// Transport classes usable by a party of the given size, in catalog
/// declaration order. Size 0 yields nothing; the caller must prompt for a
/// party size instead of rendering an empty list.
#[must_use]
pub fn eligible_transports(catalog: &Catalog, party_size: u32) -> Vec<&TransportClass> {
    if party_size == 0 {
        return Vec::new();
    }
    catalog
        .transports
        .iter()
        .filter(|class| class.serves(party_size))
        .collect()
}

/// Renderable state of a transport picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportWidget {
    /// Party size not chosen yet; render a prompt, never a silent empty list.
    NeedPartySize,
    /// No class covers the party size. Unreachable with the default catalog,
    /// which is validated for band coverage.
    NoneAvailable,
    Options(Vec<ButtonView>),
}

/// Derive the transport picker for the given party size and current choice.
/// Pure re-derivation: calling it again after any state change is the whole
/// regeneration story.
#[must_use]
pub fn transport_widget(
    catalog: &Catalog,
    party_size: u32,
    selected: Option<&str>,
) -> TransportWidget {
    if party_size == 0 {
        return TransportWidget::NeedPartySize;
    }
    let eligible = eligible_transports(catalog, party_size);
    if eligible.is_empty() {
        return TransportWidget::NoneAvailable;
    }
    TransportWidget::Options(
        eligible
            .into_iter()
            .map(|class| ButtonView {
                value: class.id.clone(),
                label: class.label.clone(),
                selected: selected == Some(class.id.as_str()),
                disabled: false,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(catalog: &Catalog, party_size: u32) -> Vec<&str> {
        eligible_transports(catalog, party_size)
            .into_iter()
            .map(|class| class.id.as_str())
            .collect()
    }

    #[test]
    fn party_of_zero_gets_nothing() {
        assert!(ids(Catalog::global(), 0).is_empty());
        assert_eq!(
            transport_widget(Catalog::global(), 0, None),
            TransportWidget::NeedPartySize
        );
    }

    #[test]
    fn small_parties_get_sedan_and_alphard_exactly() {
        let catalog = Catalog::global();
        for size in 1..=3 {
            assert_eq!(ids(catalog, size), vec!["car-sedan", "van-alphard"]);
        }
    }

    #[test]
    fn overlapping_bands_offer_both_vans() {
        let catalog = Catalog::global();
        for size in 4..=7 {
            assert_eq!(ids(catalog, size), vec!["van-alphard", "van-hiace"]);
        }
    }

    #[test]
    fn eight_to_ten_get_hiace_and_minibus() {
        let catalog = Catalog::global();
        for size in 8..=10 {
            assert_eq!(ids(catalog, size), vec!["van-hiace", "minibus"]);
        }
    }

    #[test]
    fn eleven_and_up_include_the_bus() {
        let catalog = Catalog::global();
        for size in [11, 12, 20, 35] {
            assert_eq!(ids(catalog, size), vec!["minibus", "bus"]);
        }
    }

    #[test]
    fn widget_marks_the_current_choice() {
        let widget = transport_widget(Catalog::global(), 5, Some("van-hiace"));
        let TransportWidget::Options(buttons) = widget else {
            panic!("expected options");
        };
        assert_eq!(buttons.len(), 2);
        assert!(!buttons[0].selected);
        assert!(buttons[1].selected);
        assert!(buttons.iter().all(|b| !b.disabled));
    }
}
