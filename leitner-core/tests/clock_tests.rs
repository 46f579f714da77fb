use leitner_core::{
    day_index_from_millis, due_set, Clock, FixedClock, FlashcardCursor, MemoryBackend,
    ProgressStore, Question, SystemClock, MILLIS_PER_DAY,
};

#[test]
fn day_boundaries() {
    assert_eq!(day_index_from_millis(0), 0);
    assert_eq!(day_index_from_millis(86_399_999), 0);
    assert_eq!(day_index_from_millis(86_400_000), 1);
    assert_eq!(day_index_from_millis(3 * MILLIS_PER_DAY + 5), 3);
}

#[test]
fn negative_millis_floor() {
    assert_eq!(day_index_from_millis(-1), -1);
    assert_eq!(day_index_from_millis(-MILLIS_PER_DAY), -1);
    assert_eq!(day_index_from_millis(-MILLIS_PER_DAY - 1), -2);
}

#[test]
fn fixed_clock_returns_its_day() {
    assert_eq!(FixedClock(0).today(), 0);
    assert_eq!(FixedClock(19_800).today(), 19_800);
    assert_eq!(FixedClock(-4).today(), -4);
}

#[test]
fn system_clock_is_past_2020() {
    // 2020-01-01 is day 18262
    assert!(SystemClock.today() > 18_262);
}

#[test]
fn cards_come_due_as_the_clock_moves() {
    let qs = vec![Question::new("one", "1"), Question::new("two", "2")];
    let mut store = ProgressStore::load(&qs, MemoryBackend::new());

    let monday = FixedClock(100);
    let mut cursor = FlashcardCursor::new(due_set(&qs, &store, monday.today(), true));
    cursor.mark(true, &mut store, monday.today()).unwrap();
    cursor.mark(false, &mut store, monday.today()).unwrap();
    assert!(due_set(&qs, &store, monday.today(), true).is_empty());

    // "two" was missed: back after one day, "one" after two
    let tuesday = FixedClock(101);
    let due: Vec<_> = due_set(&qs, &store, tuesday.today(), true)
        .into_iter()
        .map(|q| q.text)
        .collect();
    assert_eq!(due, vec!["two"]);

    let wednesday = FixedClock(102);
    assert_eq!(due_set(&qs, &store, wednesday.today(), true).len(), 2);
}
