use garage_intake::{find_vehicle, InputNormalizer};
use proptest::prelude::*;

fn complaint_words() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("frt".to_string()),
        Just("BRK".to_string()),
        Just("a/c".to_string()),
        Just("w/".to_string()),
        Just("w/o".to_string()),
        Just("&".to_string()),
        Just("doesnt".to_string()),
        Just("gaadi".to_string()),
        "[a-zA-Z0-9/&]{1,8}",
    ];
    prop::collection::vec(word, 0..12).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn normalizing_twice_changes_nothing(text in complaint_words()) {
        let normalizer = InputNormalizer::new();
        let once = normalizer.normalize(&text);
        let twice = normalizer.normalize(&once.normalized);
        prop_assert_eq!(&twice.normalized, &once.normalized);
        prop_assert_eq!(twice.changes_made(), 0);
    }

    #[test]
    fn normalized_text_has_no_stray_whitespace(text in "\\PC{0,60}") {
        let out = InputNormalizer::new().normalize(&text);
        prop_assert_eq!(out.normalized.trim(), out.normalized.as_str());
        prop_assert!(!out.normalized.contains("  "));
    }

    #[test]
    fn found_vehicles_have_compact_ids(text in "\\PC{0,60}") {
        if let Some(info) = find_vehicle(&text) {
            prop_assert!(info.vin.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }
}
