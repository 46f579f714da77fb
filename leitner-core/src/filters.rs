use crate::{DayIndex, Persistence, ProgressStore, Question};

pub fn due_filter<P: Persistence>(
    question: &Question,
    store: &ProgressStore<P>,
    today: DayIndex,
    due_only: bool,
) -> bool {
    if !due_only {
        return true;
    }
    // An unregistered question is treated as brand new, hence due.
    store
        .get(&question.text)
        .map(|r| r.is_due(today))
        .unwrap_or(true)
}

/// Corpus order is preserved. An empty result means nothing to study.
pub fn due_set<P: Persistence>(
    corpus: &[Question],
    store: &ProgressStore<P>,
    today: DayIndex,
    due_only: bool,
) -> Vec<Question> {
    corpus
        .iter()
        .filter(|q| due_filter(q, store, today, due_only))
        .cloned()
        .collect()
}

pub fn count_due<P: Persistence>(
    corpus: &[Question],
    store: &ProgressStore<P>,
    today: DayIndex,
) -> usize {
    corpus
        .iter()
        .filter(|q| due_filter(q, store, today, true))
        .count()
}
