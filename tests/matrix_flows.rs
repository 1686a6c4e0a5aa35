use aikya_matrix::{project, MatrixData, MatrixError, Selection};

#[test]
fn test_default_projection_is_fintech_hustle() {
    let data = MatrixData::builtin();
    let selection = Selection::default_for(&data).unwrap();
    assert_eq!(selection.sector(), "fintech");
    assert_eq!(selection.tier(), "hustle");

    let projection = selection.project(&data).unwrap();
    assert_eq!(projection.sector.name, "FinTech");
    assert_eq!(projection.sector.icon, "💰");
    assert_eq!(projection.tier.name, "AIKYA HUSTLE");
    assert_eq!(projection.tier.price, "KSh 25,000/mo");
    assert_eq!(projection.tier.focus, "Foundation & Registration");
}

#[test]
fn test_every_pair_projects_authored_records() {
    let data = MatrixData::builtin();
    let sector_keys: Vec<String> = data.sectors().keys().map(String::from).collect();
    let tier_keys: Vec<String> = data.tiers().keys().map(String::from).collect();

    let mut selection = Selection::default_for(&data).unwrap();
    for sector_key in &sector_keys {
        for tier_key in &tier_keys {
            selection.select_sector(&data, sector_key).unwrap();
            selection.select_tier(&data, tier_key).unwrap();
            let projection = selection.project(&data).unwrap();
            assert_eq!(projection.sector, data.sectors().get(sector_key).unwrap());
            assert_eq!(projection.tier, data.tiers().get(tier_key).unwrap());
        }
    }
}

#[test]
fn test_healthtech_lead_example_scenario() {
    let data = MatrixData::builtin();
    let mut selection = Selection::default_for(&data).unwrap();
    selection.select_sector(&data, "healthtech").unwrap();
    selection.select_tier(&data, "lead").unwrap();

    let projection = selection.project(&data).unwrap();
    assert_eq!(projection.sector.name, "HealthTech");
    assert_eq!(
        projection.sector.regulators,
        vec!["PPB", "KMPDC", "NCK", "ODPC"]
    );
    assert_eq!(projection.tier.name, "AIKYA LEAD");
    assert_eq!(projection.tier.price, "KSh 150,000/mo");
}

#[test]
fn test_selecting_twice_equals_selecting_once() {
    let data = MatrixData::builtin();
    let mut once = Selection::default_for(&data).unwrap();
    once.select_sector(&data, "agritech").unwrap();

    let mut twice = Selection::default_for(&data).unwrap();
    twice.select_sector(&data, "agritech").unwrap();
    twice.select_sector(&data, "agritech").unwrap();

    assert_eq!(once, twice);
    let p1 = once.project(&data).unwrap();
    let p2 = twice.project(&data).unwrap();
    assert_eq!(p1.sector, p2.sector);
    assert_eq!(p1.tier, p2.tier);
}

#[test]
fn test_invalid_selection_is_reported_and_contained() {
    let data = MatrixData::builtin();
    let mut selection = Selection::default_for(&data).unwrap();

    let err = selection.select_sector(&data, "not-a-real-key").unwrap_err();
    assert!(matches!(err, MatrixError::InvalidKey { .. }));
    // prior valid selection retained, view still projectable
    assert_eq!(selection.sector(), "fintech");
    assert!(selection.project(&data).is_ok());
}

#[test]
fn test_direct_projection_with_unknown_key_fails() {
    let data = MatrixData::builtin();
    assert!(project(&data, "fintech", "hustle").is_ok());
    assert!(project(&data, "fintech", "nope").is_err());
    assert!(project(&data, "nope", "hustle").is_err());
}

#[test]
fn test_picker_surface_is_complete_ordered_and_unique() {
    let data = MatrixData::builtin();
    let sector_keys: Vec<&str> = data.sectors().keys().collect();
    assert_eq!(
        sector_keys,
        vec!["fintech", "healthtech", "edtech", "agritech", "retail", "energy"]
    );
    let tier_keys: Vec<&str> = data.tiers().keys().collect();
    assert_eq!(tier_keys, vec!["hustle", "grow", "lead"]);

    let mut deduped = sector_keys.clone();
    deduped.dedup();
    assert_eq!(deduped, sector_keys);
}
