use crate::{CardRecord, DayIndex, BOX_MAX, BOX_MIN};

const INTERVALS: [DayIndex; 5] = [1, 2, 4, 7, 14];

pub fn next_interval_days(leitner_box: u8) -> DayIndex {
    let b = leitner_box.clamp(BOX_MIN, BOX_MAX);
    INTERVALS[(b - BOX_MIN) as usize]
}

/// Applies one answer to a record. Must run exactly once per answer event.
pub fn apply_outcome(mut record: CardRecord, correct: bool, today: DayIndex) -> CardRecord {
    // counters stop moving once seen hits u32::MAX
    let counted = record.times_seen < u32::MAX;
    if counted {
        record.times_seen += 1;
    }
    if correct {
        if counted {
            record.times_correct = record.times_correct.saturating_add(1);
        }
        record.leitner_box = record.leitner_box.saturating_add(1).clamp(BOX_MIN, BOX_MAX);
    } else {
        if counted {
            record.times_wrong = record.times_wrong.saturating_add(1);
        }
        record.leitner_box = BOX_MIN;
    }
    record.next_due_day = today.saturating_add(next_interval_days(record.leitner_box));
    record
}
