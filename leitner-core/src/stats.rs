use crate::filters::count_due;
use crate::{DayIndex, Persistence, ProgressStore, Question, BOX_MAX};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total_questions: usize,
    pub due_today: usize,
    pub seen: u32,
    pub correct: u32,
    pub wrong: u32,
    /// Records per box, index 0 is box 1.
    pub box_counts: [usize; BOX_MAX as usize],
}

impl ProgressSummary {
    pub fn accuracy(&self) -> f32 {
        if self.seen == 0 {
            0.0
        } else {
            self.correct as f32 / self.seen as f32
        }
    }

    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }
}

pub fn summarize<P: Persistence>(
    corpus: &[Question],
    store: &ProgressStore<P>,
    today: DayIndex,
) -> ProgressSummary {
    let mut summary = ProgressSummary {
        total_questions: corpus.len(),
        due_today: count_due(corpus, store, today),
        ..Default::default()
    };
    for r in store.deck().values() {
        summary.seen = summary.seen.saturating_add(r.times_seen);
        summary.correct = summary.correct.saturating_add(r.times_correct);
        summary.wrong = summary.wrong.saturating_add(r.times_wrong);
        let b = r.normalized().leitner_box as usize;
        summary.box_counts[b - 1] += 1;
    }
    summary
}
