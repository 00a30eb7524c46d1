use meguri_booking::{Catalog, PricingMode, eligible_transports};

fn catalog() -> &'static Catalog {
    Catalog::global()
}

#[test]
fn embedded_catalog_parses_and_validates() {
    let raw = include_str!("../data/catalog.json");
    let parsed = Catalog::from_json(raw).expect("embedded catalog must be valid");
    assert_eq!(&parsed, catalog());
}

#[test]
fn every_region_offers_one_length_per_day() {
    for region in &catalog().regions {
        assert!(!region.prefectures.is_empty(), "region {} is empty", region.id);
        assert!(region.max_days >= 1);
        let options = region.length_options();
        assert_eq!(options.len(), usize::from(region.max_days));
        assert_eq!(options.first(), Some(&1));
        assert_eq!(options.last(), Some(&region.max_days));
    }
}

#[test]
fn specialized_duration_tables_stay_parallel() {
    for category in &catalog().specialized {
        assert_eq!(
            category.lengths.len(),
            category.selections.len(),
            "category {} has mismatched duration tables",
            category.id
        );
        assert!(!category.options.is_empty());
        for &hours in &category.lengths {
            let quota = category
                .quota_for_hours(hours)
                .expect("every listed duration resolves a quota");
            assert!(quota >= 1);
            if category.auto_length {
                assert_eq!(quota, 1);
            }
        }
        assert_eq!(category.quota_for_hours(0), None);
    }
}

#[test]
fn transport_bands_cover_every_party_size() {
    for party in 1..=40 {
        let eligible = eligible_transports(catalog(), party);
        assert!(
            !eligible.is_empty(),
            "no transport serves a party of {party}"
        );
    }
    assert!(eligible_transports(catalog(), 0).is_empty());
}

#[test]
fn transport_bands_match_the_published_fleet() {
    let ids = |party: u32| -> Vec<&str> {
        eligible_transports(catalog(), party)
            .iter()
            .map(|class| class.id.as_str())
            .collect()
    };
    assert_eq!(ids(1), vec!["car-sedan", "van-alphard"]);
    assert_eq!(ids(3), vec!["car-sedan", "van-alphard"]);
    assert_eq!(ids(4), vec!["van-alphard", "van-hiace"]);
    assert_eq!(ids(8), vec!["van-hiace", "minibus"]);
    assert_eq!(ids(10), vec!["van-hiace", "minibus"]);
    assert_eq!(ids(11), vec!["minibus", "bus"]);
    assert_eq!(ids(40), vec!["minibus", "bus"]);
}

#[test]
fn per_person_classes_sit_at_the_large_party_end() {
    for class in &catalog().transports {
        assert!(class.rate_jpy > 0, "class {} has no rate", class.id);
        if class.pricing == PricingMode::PerPersonPerDay {
            assert!(
                class.min_people.is_some_and(|min| min >= 8),
                "per-person class {} should only serve large parties",
                class.id
            );
        }
    }
}

#[test]
fn catalog_rejects_an_eligibility_gap() {
    let raw = r#"{
        "regions": [
            {"id": "kanto", "name": "Kanto", "max_days": 2, "prefectures": ["Tokyo"]}
        ],
        "specialized": [
            {"id": "food", "name": "Food", "options": ["Tokyo Food Tour"],
             "lengths": [4], "selections": [2]}
        ],
        "transports": [
            {"id": "bus", "label": "Bus", "min_people": 11,
             "rate_jpy": 15000, "pricing": "per_person_per_day"}
        ]
    }"#;
    let err = Catalog::from_json(raw).expect_err("small parties are unserved");
    assert!(err.to_string().contains("serves a party of"));
}
