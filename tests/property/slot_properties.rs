use proptest::prelude::*;
use week_grid::services::slots::generate_slots;

fn is_hh_mm(label: &str) -> bool {
    let bytes = label.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}

fn window() -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (0..=23u32, 0..4u32, 0..=24u32, 0..4u32).prop_map(|(sh, sm, eh, em)| {
        let em = if eh == 24 { 0 } else { em * 15 };
        (sh, sm * 15, eh, em)
    })
}

proptest! {
    /// Property: slot count is floor((end - start) / 15) + 1 for forward windows
    #[test]
    fn prop_slot_count_matches_formula((sh, sm, eh, em) in window()) {
        let start = sh * 60 + sm;
        let end = eh * 60 + em;
        prop_assume!(end >= start);

        let slots = generate_slots(sh, sm, eh, em);
        prop_assert_eq!(slots.len(), ((end - start) / 15) as usize + 1);
    }

    /// Property: every label is HH:MM and labels are distinct consecutive steps
    #[test]
    fn prop_labels_are_well_formed((sh, sm, eh, em) in window()) {
        let slots = generate_slots(sh, sm, eh, em);
        for label in &slots {
            prop_assert!(is_hh_mm(label), "malformed label {}", label);
        }
        for pair in slots.windows(2) {
            let minutes = |l: &str| {
                l[0..2].parse::<u32>().unwrap() * 60 + l[3..5].parse::<u32>().unwrap()
            };
            prop_assert_eq!((minutes(&pair[0]) + 15) % (24 * 60), minutes(&pair[1]));
        }
    }

    /// Property: inverted windows never produce slots
    #[test]
    fn prop_inverted_window_is_empty((sh, sm, eh, em) in window()) {
        prop_assume!(eh * 60 + em < sh * 60 + sm);
        prop_assert!(generate_slots(sh, sm, eh, em).is_empty());
    }
}
