use super::*;

#[test]
fn test_preference_set_builder() {
    let prefs = PreferenceSet::new()
        .with_sunlight("Full Sun")
        .with_rarity("Rare");

    assert_eq!(prefs.sunlight.as_deref(), Some("Full Sun"));
    assert_eq!(prefs.rarity.as_deref(), Some("Rare"));
    assert_eq!(prefs.watering, None);
    assert_eq!(prefs.size, None);
    assert_eq!(prefs.appeal, None);
}

#[test]
fn test_new_preference_set_is_unconstrained() {
    assert!(PreferenceSet::new().is_unconstrained());
}

#[test]
fn test_empty_strings_count_as_unset() {
    let prefs = PreferenceSet::new().with_sunlight("").with_watering("");
    assert!(prefs.is_unconstrained());
}

#[test]
fn test_any_set_field_constrains() {
    let prefs = PreferenceSet::new().with_appeal("Foliage");
    assert!(!prefs.is_unconstrained());
}

#[test]
fn test_size_class_parse_accepts_lowercase_literals() {
    assert_eq!(SizeClass::parse("small"), Some(SizeClass::Small));
    assert_eq!(SizeClass::parse("medium"), Some(SizeClass::Medium));
    assert_eq!(SizeClass::parse("large"), Some(SizeClass::Large));
}

#[test]
fn test_size_class_parse_rejects_other_values() {
    assert_eq!(SizeClass::parse("Small"), None);
    assert_eq!(SizeClass::parse("huge"), None);
    assert_eq!(SizeClass::parse(""), None);
}

#[test]
fn test_size_class_roundtrip_through_as_str() {
    for class in SizeClass::all() {
        assert_eq!(SizeClass::parse(class.as_str()), Some(*class));
    }
}

#[test]
fn test_height_ranges() {
    assert!(SizeClass::Small.contains_height(0.99));
    assert!(!SizeClass::Small.contains_height(1.0));

    // 中間区分は両端を含む
    assert!(SizeClass::Medium.contains_height(1.0));
    assert!(SizeClass::Medium.contains_height(5.0));
    assert!(!SizeClass::Medium.contains_height(0.99));
    assert!(!SizeClass::Medium.contains_height(5.01));

    assert!(SizeClass::Large.contains_height(5.01));
    assert!(!SizeClass::Large.contains_height(5.0));
}

#[test]
fn test_form_choice_literals() {
    assert_eq!(SUNLIGHT_CHOICES.len(), 2);
    assert_eq!(WATERING_CHOICES.len(), 4);
    assert_eq!(RARITY_CHOICES.len(), 5);
    assert_eq!(APPEAL_CHOICES.len(), 7);
    assert!(WATERING_CHOICES.contains(&"Water When Half Dry"));
    assert!(RARITY_CHOICES.contains(&"More or Less Rare"));
}
