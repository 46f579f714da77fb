use leitner_core::{apply_outcome, next_interval_days, CardRecord};

#[test]
fn interval_table() {
    let got: Vec<i64> = (1..=5).map(next_interval_days).collect();
    assert_eq!(got, vec![1, 2, 4, 7, 14]);
}

#[test]
fn interval_clamps_out_of_range_boxes() {
    assert_eq!(next_interval_days(0), 1);
    assert_eq!(next_interval_days(6), 14);
    assert_eq!(next_interval_days(u8::MAX), 14);
}

#[test]
fn correct_promotes_one_box() {
    let r = apply_outcome(CardRecord::new(), true, 0);
    assert_eq!(r.leitner_box, 2);
    assert_eq!(r.next_due_day, 2);
    assert_eq!(r.times_seen, 1);
    assert_eq!(r.times_correct, 1);
    assert_eq!(r.times_wrong, 0);
}

#[test]
fn box_three_wrong_resets_to_one() {
    let mut card = CardRecord::new();
    card.leitner_box = 3;
    let r = apply_outcome(card, false, 40);
    assert_eq!(r.leitner_box, 1);
    assert_eq!(r.next_due_day, 41);
    assert_eq!(r.times_wrong, 1);
}

#[test]
fn box_caps_at_five() {
    let mut r = CardRecord::new();
    for day in 0..8 {
        r = apply_outcome(r, true, day);
    }
    assert_eq!(r.leitner_box, 5);
    assert_eq!(r.next_due_day, 7 + 14);
}

#[test]
fn counters_stay_consistent() {
    let outcomes = [true, false, true, true, false, false, true, true, true, true, false];
    let mut r = CardRecord::new();
    for (day, ok) in outcomes.iter().enumerate() {
        r = apply_outcome(r, *ok, day as i64);
        assert_eq!(r.times_seen, r.times_correct + r.times_wrong);
        assert!((1..=5).contains(&r.leitner_box));
    }
    assert_eq!(r.times_seen, outcomes.len() as u32);
}

#[test]
fn applying_twice_double_counts() {
    // exactly-once is the caller's job; the function itself does not dedupe
    let once = apply_outcome(CardRecord::new(), true, 0);
    let twice = apply_outcome(once, true, 0);
    assert_eq!(twice.times_seen, 2);
    assert_eq!(twice.leitner_box, 3);
}

#[test]
fn saturated_card_keeps_counters_balanced() {
    let mut card = CardRecord::new();
    card.times_seen = u32::MAX;
    card.times_wrong = u32::MAX;
    let r = apply_outcome(card, true, 0);
    assert!(r.is_consistent());
    assert_eq!(r.times_correct, 0);
    assert_eq!(r.leitner_box, 2);
}
