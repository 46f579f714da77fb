use leitner_core::{
    parse_snapshot_str, CoreError, MemoryBackend, Question, StudyState,
};
use serde_json::json;

fn corpus() -> Vec<Question> {
    vec![
        Question::new("capital", "city").with_distractors(["town", "village"]),
        Question::new("river", "water"),
    ]
}

#[test]
fn export_import_round_trip() {
    let mut state = StudyState::open(corpus(), MemoryBackend::new());
    state.store_mut().record_answer("capital", true, 3).unwrap();
    state.add_question(Question::new("custom", "mine")).unwrap();
    let snap = state.export_snapshot();
    let text = serde_json::to_string(&snap).unwrap();

    let mut other = StudyState::open(vec![Question::new("zzz", "y")], MemoryBackend::new());
    other
        .apply_imported_snapshot(serde_json::from_str(&text).unwrap())
        .unwrap();

    assert_eq!(other.corpus(), state.corpus());
    assert_eq!(other.store().deck(), state.store().deck());
}

#[test]
fn legacy_custom_key_and_field_names() {
    let payload = r#"{
        "deck": { "river": { "box": 3, "next": 20, "seen": 4, "correct": 3, "wrong": 1 } },
        "custom": [ { "q": "river", "a": "water", "choices": ["water", "sand"] } ]
    }"#;
    let imported = parse_snapshot_str(payload).unwrap();
    let corpus = imported.corpus.unwrap();
    assert_eq!(corpus[0].distractors, vec!["water", "sand"]);
    assert_eq!(imported.deck.unwrap()["river"].leitner_box, 3);
}

#[test]
fn invalid_payload_leaves_state_untouched() {
    let backend = MemoryBackend::new();
    let mut state = StudyState::open(corpus(), backend.clone());
    state.store_mut().record_answer("river", false, 0).unwrap();
    let before = state.export_snapshot();

    let bad = [
        json!([1, 2, 3]),
        json!({ "deck": "nope" }),
        json!({ "deck": { "river": { "box": "high" } } }),
        json!({ "corpus": [ { "a": "missing text" } ] }),
        json!({ "corpus": [ { "q": "x", "a": "1" }, { "q": "x", "a": "2" } ] }),
    ];
    for value in bad {
        let err = state.apply_imported_snapshot(value).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSnapshot(_)));
    }
    assert_eq!(state.export_snapshot(), before);
    assert_eq!(backend.save_count(), 1);
}

#[test]
fn corpus_only_import_registers_new_questions() {
    let mut state = StudyState::open(corpus(), MemoryBackend::new());
    state.store_mut().record_answer("river", true, 0).unwrap();
    state
        .apply_imported_snapshot(json!({ "corpus": [ { "q": "lake", "a": "still" } ] }))
        .unwrap();
    assert_eq!(state.corpus().len(), 1);
    assert_eq!(state.store().get("lake").unwrap().times_seen, 0);
    // old progress is kept when no deck was supplied
    assert_eq!(state.store().get("river").unwrap().times_seen, 1);
}

#[test]
fn non_array_corpus_is_ignored() {
    let mut state = StudyState::open(corpus(), MemoryBackend::new());
    state
        .apply_imported_snapshot(json!({ "corpus": "whatever" }))
        .unwrap();
    assert_eq!(state.corpus(), corpus().as_slice());
}

#[test]
fn add_question_rejects_duplicates() {
    let mut state = StudyState::open(corpus(), MemoryBackend::new());
    let err = state
        .add_question(Question::new("river", "other"))
        .unwrap_err();
    assert!(matches!(err, CoreError::DuplicateQuestion(_)));
    assert_eq!(state.corpus().len(), 2);
}

#[test]
fn open_drops_repeated_text() {
    let mut qs = corpus();
    qs.push(Question::new("capital", "again"));
    let state = StudyState::open(qs, MemoryBackend::new());
    assert_eq!(state.corpus().len(), 2);
    assert_eq!(state.corpus()[0].answer, "city");
}

#[test]
fn summary_counts_boxes_and_accuracy() {
    let mut state = StudyState::open(corpus(), MemoryBackend::new());
    state.store_mut().record_answer("capital", true, 0).unwrap();
    state.store_mut().record_answer("river", false, 0).unwrap();
    state.store_mut().record_answer("river", true, 1).unwrap();

    let s = state.summary(1);
    assert_eq!(s.total_questions, 2);
    assert_eq!(s.seen, 3);
    assert_eq!(s.correct, 2);
    assert_eq!(s.accuracy_percent(), 67);
    assert_eq!(s.box_counts, [0, 2, 0, 0, 0]);
    assert_eq!(s.due_today, 0);
    assert_eq!(state.summary(3).due_today, 2);
}

#[test]
fn unbalanced_counters_are_rejected() {
    let backend = MemoryBackend::new();
    let mut state = StudyState::open(corpus(), backend.clone());
    let before = state.export_snapshot();

    let payload = json!({
        "deck": { "river": { "box": 2, "next": 0, "seen": 0, "correct": 7, "wrong": 0 } }
    });
    let err = state.apply_imported_snapshot(payload).unwrap_err();
    assert!(matches!(err, CoreError::InvalidSnapshot(_)));

    // correct + wrong would overflow u32
    let payload = json!({
        "deck": { "river": { "seen": u32::MAX, "correct": u32::MAX, "wrong": 1 } }
    });
    assert!(state.apply_imported_snapshot(payload).is_err());

    assert_eq!(state.export_snapshot(), before);
    assert_eq!(backend.save_count(), 0);
}

#[test]
fn counters_at_the_limit_do_not_overflow() {
    let mut state = StudyState::open(corpus(), MemoryBackend::new());
    let payload = json!({
        "deck": { "river": { "box": 3, "next": 0, "seen": u32::MAX, "correct": u32::MAX, "wrong": 0 } }
    });
    state.apply_imported_snapshot(payload).unwrap();

    let r = state.store_mut().record_answer("river", true, 0).unwrap();
    assert_eq!(r.times_seen, u32::MAX);
    assert_eq!(r.times_seen, r.times_correct + r.times_wrong);
    assert_eq!(r.leitner_box, 4);

    let r = state.store_mut().record_answer("river", false, 0).unwrap();
    assert!(r.is_consistent());
    assert_eq!(r.leitner_box, 1);

    state.store_mut().record_answer("capital", true, 0).unwrap();
    let s = state.summary(0);
    assert_eq!(s.seen, u32::MAX);
    assert_eq!(s.correct, u32::MAX);
}
