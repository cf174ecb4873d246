use super::*;

fn plant(
    light: Option<&str>,
    water: Option<&str>,
    max_height: Option<f64>,
    availability: Option<&str>,
    appeal: Option<&str>,
) -> PlantRecord {
    PlantRecord {
        light: light.map(String::from),
        water: water.map(String::from),
        max_height,
        availability: availability.map(String::from),
        appeal: appeal.map(String::from),
        ..PlantRecord::default()
    }
}

/// 2行のサンプルテーブル
fn sample_table() -> Vec<PlantRecord> {
    vec![
        plant(
            Some("Full Sun"),
            Some("Rare"),
            Some(2.0),
            Some("Rare"),
            Some("Flower"),
        ),
        plant(
            Some("Strong Light"),
            Some("Rare"),
            Some(0.5),
            Some("Regular"),
            Some("Foliage"),
        ),
    ]
}

#[test]
fn test_no_preferences_returns_full_table() {
    let table = sample_table();
    let result = filter_plants(&table, &PreferenceSet::new());
    assert_eq!(result, table);
}

#[test]
fn test_empty_table_returns_empty() {
    let result = filter_plants(&[], &PreferenceSet::new().with_sunlight("Full Sun"));
    assert!(result.is_empty());
}

#[test]
fn test_sunlight_preference_selects_matching_row() {
    let table = sample_table();
    let result = filter_plants(&table, &PreferenceSet::new().with_sunlight("Full Sun"));
    assert_eq!(result, vec![table[0].clone()]);
}

#[test]
fn test_size_small_selects_short_plant() {
    let table = sample_table();
    let result = filter_plants(&table, &PreferenceSet::new().with_size("small"));
    // 高さ2.0の行はsmallの上限を超える
    assert_eq!(result, vec![table[1].clone()]);
}

#[test]
fn test_substring_match_is_case_insensitive() {
    let table = vec![plant(Some("FULL SUN"), None, None, None, None)];
    let result = filter_plants(&table, &PreferenceSet::new().with_sunlight("full sun"));
    assert_eq!(result.len(), 1);
}

#[test]
fn test_substring_match_is_unanchored() {
    let table = vec![plant(
        Some("Prefers full sun exposure"),
        None,
        None,
        None,
        None,
    )];
    let result = filter_plants(&table, &PreferenceSet::new().with_sunlight("Full Sun"));
    assert_eq!(result.len(), 1);
}

#[test]
fn test_null_column_never_matches_active_preference() {
    let table = vec![plant(None, Some("Rare"), None, None, None)];
    let result = filter_plants(&table, &PreferenceSet::new().with_sunlight("Full Sun"));
    assert!(result.is_empty());
}

#[test]
fn test_empty_string_preference_is_inactive() {
    let table = sample_table();
    let result = filter_plants(&table, &PreferenceSet::new().with_sunlight(""));
    assert_eq!(result, table);
}

#[test]
fn test_size_boundary_one_meter_is_medium_not_small() {
    let table = vec![plant(None, None, Some(1.0), None, None)];

    let medium = filter_plants(&table, &PreferenceSet::new().with_size("medium"));
    assert_eq!(medium.len(), 1);

    let small = filter_plants(&table, &PreferenceSet::new().with_size("small"));
    assert!(small.is_empty());
}

#[test]
fn test_size_boundary_five_meters_is_medium_not_large() {
    let table = vec![plant(None, None, Some(5.0), None, None)];

    let medium = filter_plants(&table, &PreferenceSet::new().with_size("medium"));
    assert_eq!(medium.len(), 1);

    let large = filter_plants(&table, &PreferenceSet::new().with_size("large"));
    assert!(large.is_empty());
}

#[test]
fn test_size_just_above_five_meters_is_large() {
    let table = vec![plant(None, None, Some(5.01), None, None)];
    let result = filter_plants(&table, &PreferenceSet::new().with_size("large"));
    assert_eq!(result.len(), 1);
}

#[test]
fn test_size_preference_excludes_null_heights() {
    // 他の条件が全て合致していても高さ欠損で落ちる
    let table = vec![plant(
        Some("Full Sun"),
        Some("Rare"),
        None,
        Some("Rare"),
        Some("Flower"),
    )];
    let prefs = PreferenceSet::new()
        .with_sunlight("Full Sun")
        .with_size("medium");
    assert!(filter_plants(&table, &prefs).is_empty());
}

#[test]
fn test_unrecognized_size_only_drops_null_heights() {
    let table = vec![
        plant(None, None, Some(0.2), None, None),
        plant(None, None, None, None, None),
        plant(None, None, Some(9.0), None, None),
    ];

    // 未知のサイズ値でも高さ欠損行の除外だけは起きる
    let result = filter_plants(&table, &PreferenceSet::new().with_size("huge"));
    assert_eq!(result, vec![table[0].clone(), table[2].clone()]);
}

#[test]
fn test_all_active_predicates_must_pass() {
    let table = sample_table();
    let prefs = PreferenceSet::new()
        .with_sunlight("Full Sun")
        .with_appeal("Foliage");
    // どの行も両方の条件は満たさない
    assert!(filter_plants(&table, &prefs).is_empty());
}

#[test]
fn test_result_preserves_input_order() {
    let table = vec![
        plant(Some("Full Sun"), None, None, None, None),
        plant(Some("Shade"), None, None, None, None),
        plant(Some("Full Sun and more"), None, None, None, None),
    ];
    let result = filter_plants(&table, &PreferenceSet::new().with_sunlight("Full Sun"));
    assert_eq!(result, vec![table[0].clone(), table[2].clone()]);
}

#[test]
fn test_filter_is_idempotent() {
    let table = sample_table();
    let prefs = PreferenceSet::new().with_watering("Rare");

    let once = filter_plants(&table, &prefs);
    let twice = filter_plants(&once, &prefs);
    assert_eq!(twice, once);
}

#[test]
fn test_input_is_not_mutated() {
    let table = sample_table();
    let before = table.clone();
    let _ = filter_plants(&table, &PreferenceSet::new().with_sunlight("Full Sun"));
    assert_eq!(table, before);
}
