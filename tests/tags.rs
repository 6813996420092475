use recipebook::{dataset, TagError, TagRegistry};

#[test]
fn seeded_registry_counts_dataset_tags() {
    let registry = TagRegistry::seeded(dataset::recipes());
    let rows = registry.list();

    let listing: Vec<(&str, u64)> = rows.iter().map(|r| (r.name.as_str(), r.count)).collect();
    assert_eq!(
        listing,
        vec![
            ("noodles", 1),
            ("salad", 1),
            ("seafood", 1),
            ("weeknight", 1),
        ]
    );
}

#[test]
fn add_then_list_holds_exactly_one_normalized_row() {
    let mut registry = TagRegistry::seeded(dataset::recipes());
    registry.add_or_update("  Comfort Food ", Some(3)).unwrap();

    let rows = registry.list();
    let matching: Vec<_> = rows.iter().filter(|r| r.name == "comfort food").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].count, 3);
}

#[test]
fn zero_count_updates_never_clobber() {
    let mut registry = TagRegistry::new();
    registry.add_or_update("weeknight", Some(5)).unwrap();

    for _ in 0..2 {
        let row = registry.add_or_update("Weeknight", Some(0)).unwrap();
        assert_eq!(row.count, 5);
    }
    assert_eq!(registry.list()[0].count, 5);
}

#[test]
fn delete_removes_and_missing_is_not_found() {
    let mut registry = TagRegistry::seeded(dataset::recipes());

    registry.delete(" Salad ").unwrap();
    assert!(registry.list().iter().all(|r| r.name != "salad"));

    assert_eq!(
        registry.delete("salad"),
        Err(TagError::NotFound("salad".to_string()))
    );
}

#[test]
fn listing_stays_sorted_after_mutation() {
    let mut registry = TagRegistry::new();
    for name in ["zucchini", "apple", "miso"] {
        registry.add_or_update(name, None).unwrap();
    }
    let rows = registry.list();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["apple", "miso", "zucchini"]);
}
