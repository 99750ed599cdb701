//! End-to-end tests for the public classification API.
//!
//! These tests exercise the bit layout, the combination algebra, and the
//! rendered label format through the crate's public surface only.

use data_classifier::Classification;

const FLAGS: [(Classification, &str); 7] = [
    (Classification::NO_VALUE, "no-value"),
    (Classification::PERSIST, "persist"),
    (Classification::USER_GENERATED_CONTENT, "user-generated-content"),
    (
        Classification::PERSONAL_IDENTIFIABLE_INFORMATION,
        "personal-identifiable-information",
    ),
    (Classification::SENSITIVE, "sensitive"),
    (Classification::HIGH_CARDINALITY, "high-cardinality"),
    (Classification::SERVICE_LEVEL_OBJECTIVE, "service-level-objective"),
];

#[test]
fn test_no_mask_overlaps() {
    let mut expected = 0_i64;
    for (index, (flag, label)) in FLAGS.into_iter().enumerate() {
        assert_eq!(flag.bits(), expected, "{label} must sit at its bit");
        let raw = Classification::from_bits(expected);
        assert_eq!(flag.remove(raw), Classification::NO_VALUE);
        assert_eq!(raw.to_string(), flag.to_string());
        assert_eq!(flag.to_string(), label);
        expected = 1 << index;
    }
}

#[test]
fn test_contains_scenarios() {
    assert!(Classification::NO_VALUE.contains(Classification::NO_VALUE));
    assert!(!Classification::HIGH_CARDINALITY.contains(Classification::NO_VALUE));
    assert!(Classification::combine([
        Classification::SENSITIVE,
        Classification::HIGH_CARDINALITY,
        Classification::UGC,
    ])
    .contains(Classification::UGC));
    assert!(!Classification::SENSITIVE.contains(Classification::HIGH_CARDINALITY));
}

#[test]
fn test_pii_and_ugc_record() {
    let record = Classification::combine([Classification::PII, Classification::UGC]);

    assert!(record.contains(Classification::PII));
    assert!(!record.contains(Classification::SENSITIVE));
    assert_eq!(
        record.to_string(),
        "user-generated-content,personal-identifiable-information"
    );
    assert_eq!(record.remove(record), Classification::NO_VALUE);
}

#[test]
fn test_rendering_lists_exactly_the_combined_subset() {
    // Every subset of the six real flags, checked against the label table.
    for mask in 0_u32..(1 << 6) {
        let subset: Vec<(Classification, &str)> = FLAGS[1..]
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, entry)| *entry)
            .collect();
        let value = Classification::combine(subset.iter().map(|(flag, _)| *flag));

        let expected = if subset.is_empty() {
            "no-value".to_string()
        } else {
            subset
                .iter()
                .map(|(_, label)| *label)
                .collect::<Vec<_>>()
                .join(",")
        };
        assert_eq!(value.to_string(), expected);
        assert!(!value.to_string().ends_with(','));
        assert_eq!(value.flags().count(), subset.len());
    }
}

#[test]
fn test_operator_forms_agree_with_combine() {
    let mut running = Classification::default();
    running |= Classification::PERSIST;
    running |= Classification::PD;

    assert_eq!(
        running,
        Classification::combine([Classification::PERSIST, Classification::PII])
    );
    assert_eq!(
        running,
        Classification::PERSIST | Classification::PERSONAL_IDENTIFIABLE_INFORMATION
    );
    assert_eq!(running, Classification::PERSIST.union(Classification::PII));
}

#[test]
fn test_remove_of_absent_flag_adds_it() {
    let value = Classification::PERSIST;
    let toggled = value.remove(Classification::SENSITIVE);
    assert!(toggled.contains(Classification::SENSITIVE));
    assert_eq!(toggled.remove(Classification::SENSITIVE), value);
}

#[test]
fn test_const_evaluation() {
    const AUDIT: Classification =
        Classification::PERSIST.union(Classification::SERVICE_LEVEL_OBJECTIVE);
    const HAS_SLO: bool = AUDIT.contains(Classification::SERVICE_LEVEL_OBJECTIVE);

    assert!(HAS_SLO);
    assert_eq!(AUDIT.to_string(), "persist,service-level-objective");
}

#[test]
fn test_values_cross_threads() {
    let shared = Classification::PII | Classification::HIGH_CARDINALITY;
    let handles: Vec<_> = FLAGS
        .into_iter()
        .map(|(flag, _)| std::thread::spawn(move || shared.contains(flag)))
        .collect();
    let results: Vec<bool> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(results, [false, false, false, true, false, true, false]);
}
