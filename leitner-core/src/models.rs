use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Days since the Unix epoch.
pub type DayIndex = i64;

/// Persisted progress, keyed by question text.
pub type Deck = BTreeMap<String, CardRecord>;

pub const BOX_MIN: u8 = 1;
pub const BOX_MAX: u8 = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "q")]
    pub text: String,
    #[serde(rename = "a")]
    pub answer: String,
    #[serde(rename = "choices", default)]
    pub distractors: Vec<String>,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            distractors: Vec::new(),
        }
    }

    pub fn with_distractors<I, S>(mut self, distractors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.distractors = distractors.into_iter().map(Into::into).collect();
        self
    }

    /// Distinct wrong options, in the order they were written.
    pub fn wrong_options(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for d in &self.distractors {
            let d = d.as_str();
            if d != self.answer && !out.contains(&d) {
                out.push(d);
            }
        }
        out
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CardRecord {
    #[serde(rename = "box")]
    pub leitner_box: u8,
    #[serde(rename = "next")]
    pub next_due_day: DayIndex,
    #[serde(rename = "seen")]
    pub times_seen: u32,
    #[serde(rename = "correct")]
    pub times_correct: u32,
    #[serde(rename = "wrong")]
    pub times_wrong: u32,
}

impl Default for CardRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRecord {
    pub const fn new() -> Self {
        Self {
            leitner_box: BOX_MIN,
            next_due_day: 0,
            times_seen: 0,
            times_correct: 0,
            times_wrong: 0,
        }
    }

    pub fn is_due(&self, today: DayIndex) -> bool {
        self.next_due_day <= today
    }

    /// `seen == correct + wrong`, without overflowing.
    pub fn is_consistent(&self) -> bool {
        self.times_correct
            .checked_add(self.times_wrong)
            .is_some_and(|total| total == self.times_seen)
    }

    /// Pulls a record read from outside back into the box range.
    pub fn normalized(mut self) -> Self {
        self.leitner_box = self.leitner_box.clamp(BOX_MIN, BOX_MAX);
        self
    }
}
