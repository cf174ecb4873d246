use super::*;
use proptest::prelude::*;

/// カラム値に現れる文字列（欠損を含む）
fn column_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z ]{0,12}")
}

/// 樹高（欠損を含む）
fn height_strategy() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(0.0f64..12.0)
}

fn record_strategy() -> impl Strategy<Value = PlantRecord> {
    (
        column_strategy(),
        column_strategy(),
        height_strategy(),
        column_strategy(),
        column_strategy(),
    )
        .prop_map(
            |(light, water, max_height, availability, appeal)| PlantRecord {
                light,
                water,
                max_height,
                availability,
                appeal,
                ..PlantRecord::default()
            },
        )
}

fn table_strategy() -> impl Strategy<Value = Vec<PlantRecord>> {
    proptest::collection::vec(record_strategy(), 0..20)
}

/// 希望条件（sizeは既知の区分と未知の値の両方を出す）
fn prefs_strategy() -> impl Strategy<Value = PreferenceSet> {
    let size = prop_oneof![
        Just("small".to_string()),
        Just("medium".to_string()),
        Just("large".to_string()),
        Just("huge".to_string()),
    ];

    (
        proptest::option::of("[A-Za-z ]{0,6}"),
        proptest::option::of("[A-Za-z ]{0,6}"),
        proptest::option::of(size),
        proptest::option::of("[A-Za-z ]{0,6}"),
        proptest::option::of("[A-Za-z ]{0,6}"),
    )
        .prop_map(|(sunlight, watering, size, rarity, appeal)| PreferenceSet {
            sunlight,
            watering,
            size,
            rarity,
            appeal,
        })
}

proptest! {
    /// 全条件未設定なら入力がそのまま返る
    #[test]
    fn prop_no_preferences_is_identity(table in table_strategy()) {
        let result = filter_plants(&table, &PreferenceSet::new());
        prop_assert_eq!(result, table);
    }

    /// 結果は入力の部分列（相対順序を保存する）
    #[test]
    fn prop_result_is_subsequence(table in table_strategy(), prefs in prefs_strategy()) {
        let result = filter_plants(&table, &prefs);

        let mut remaining = table.iter();
        for kept in &result {
            prop_assert!(remaining.any(|record| record == kept));
        }
    }

    /// 同じ条件で二度かけても結果は変わらない
    #[test]
    fn prop_filter_is_idempotent(table in table_strategy(), prefs in prefs_strategy()) {
        let once = filter_plants(&table, &prefs);
        let twice = filter_plants(&once, &prefs);
        prop_assert_eq!(twice, once);
    }

    /// サイズ条件が設定されていれば高さ欠損の行は残らない
    #[test]
    fn prop_size_preference_drops_null_heights(table in table_strategy(), prefs in prefs_strategy()) {
        prop_assume!(matches!(prefs.size.as_deref(), Some(s) if !s.is_empty()));

        let result = filter_plants(&table, &prefs);
        for kept in &result {
            prop_assert!(kept.max_height.is_some());
        }
    }
}
