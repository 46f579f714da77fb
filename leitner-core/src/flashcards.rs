use crate::{CardRecord, CoreError, DayIndex, Persistence, ProgressStore, Question};

/// Endless cursor over a review pool: the index wraps around the pool.
#[derive(Clone, Debug, Default)]
pub struct FlashcardCursor {
    pool: Vec<Question>,
    index: usize,
    revealed: bool,
}

impl FlashcardCursor {
    pub fn new(pool: Vec<Question>) -> Self {
        Self {
            pool,
            index: 0,
            revealed: false,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        if self.pool.is_empty() {
            None
        } else {
            self.pool.get(self.index % self.pool.len())
        }
    }

    pub fn pool(&self) -> &[Question] {
        &self.pool
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn advance(&mut self) {
        self.index += 1;
        self.revealed = false;
    }

    pub fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.revealed = false;
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Swaps the pool (e.g. a recomputed due set) and keeps the index.
    pub fn refresh(&mut self, pool: Vec<Question>) {
        self.pool = pool;
    }

    /// Records the outcome for the current card and moves on. `Ok(None)` when
    /// the pool is empty.
    pub fn mark<P: Persistence>(
        &mut self,
        correct: bool,
        store: &mut ProgressStore<P>,
        today: DayIndex,
    ) -> Result<Option<CardRecord>, CoreError> {
        let Some(text) = self.current().map(|q| q.text.clone()) else {
            return Ok(None);
        };
        let result = store.record_answer(&text, correct, today);
        self.advance();
        result.map(Some)
    }
}
