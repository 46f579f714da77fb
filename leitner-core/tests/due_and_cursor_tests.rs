use leitner_core::{
    due_filter, due_set, CardRecord, FlashcardCursor, MemoryBackend, ProgressStore, Question,
};

fn corpus() -> Vec<Question> {
    vec![
        Question::new("one", "1"),
        Question::new("two", "2"),
        Question::new("three", "3"),
    ]
}

#[test]
fn due_only_excludes_future_cards() {
    let qs = corpus();
    let mut store = ProgressStore::load(&qs, MemoryBackend::new());
    let mut later = CardRecord::new();
    later.next_due_day = 11;
    store.update("two", later).unwrap();

    let due = due_set(&qs, &store, 10, true);
    let texts: Vec<_> = due.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "three"]);
    assert!(!due_filter(&qs[1], &store, 10, true));
    assert!(due_filter(&qs[1], &store, 11, true));
}

#[test]
fn without_flag_everything_in_order() {
    let qs = corpus();
    let mut store = ProgressStore::load(&qs, MemoryBackend::new());
    let mut later = CardRecord::new();
    later.next_due_day = 500;
    store.update("one", later).unwrap();
    assert_eq!(due_set(&qs, &store, 0, false), qs);
}

#[test]
fn nothing_due_is_empty_not_error() {
    let qs = corpus();
    let mut store = ProgressStore::load(&qs, MemoryBackend::new());
    for q in &qs {
        store.record_answer(&q.text, true, 0).unwrap();
    }
    assert!(due_set(&qs, &store, 0, true).is_empty());
}

#[test]
fn cursor_wraps_around() {
    let mut c = FlashcardCursor::new(corpus());
    for _ in 0..4 {
        c.advance();
    }
    assert_eq!(c.current().unwrap().text, "two");
}

#[test]
fn empty_cursor_has_no_card_and_mark_is_noop() {
    let backend = MemoryBackend::new();
    let mut store = ProgressStore::load(&[], backend.clone());
    let mut c = FlashcardCursor::new(Vec::new());
    assert!(c.current().is_none());
    assert_eq!(c.mark(true, &mut store, 0).unwrap(), None);
    assert_eq!(backend.save_count(), 0);
}

#[test]
fn reveal_is_idempotent_and_advance_hides() {
    let mut c = FlashcardCursor::new(corpus());
    c.reveal();
    c.reveal();
    assert!(c.is_revealed());
    assert_eq!(c.index(), 0);
    c.advance();
    assert!(!c.is_revealed());
}

#[test]
fn back_stops_at_zero() {
    let mut c = FlashcardCursor::new(corpus());
    c.back();
    assert_eq!(c.index(), 0);
    c.advance();
    c.advance();
    c.back();
    assert_eq!(c.current().unwrap().text, "two");
}

#[test]
fn three_correct_cards_walkthrough() {
    let qs = corpus();
    let backend = MemoryBackend::new();
    let mut store = ProgressStore::load(&qs, backend.clone());
    let due = due_set(&qs, &store, 0, true);
    assert_eq!(due.len(), 3);

    let mut c = FlashcardCursor::new(due);
    for _ in 0..3 {
        c.reveal();
        c.mark(true, &mut store, 0).unwrap();
    }

    for q in &qs {
        let r = store.get(&q.text).unwrap();
        assert_eq!(r.leitner_box, 2);
        assert_eq!(r.next_due_day, 2);
        assert_eq!(r.times_seen, 1);
        assert_eq!(r.times_correct, 1);
    }
    assert_eq!(backend.save_count(), 3);
}

#[test]
fn refresh_shrinks_due_session() {
    let qs = corpus();
    let mut store = ProgressStore::load(&qs, MemoryBackend::new());
    let mut c = FlashcardCursor::new(due_set(&qs, &store, 0, true));
    c.mark(true, &mut store, 0).unwrap();
    c.refresh(due_set(&qs, &store, 0, true));
    assert_eq!(c.pool().len(), 2);
    assert_eq!(c.current().unwrap().text, "three");
}
