use crate::scheduler::apply_outcome;
use crate::{CardRecord, CoreError, DayIndex, Deck, Persistence, Question};

/// Per-question learning records plus the backend they are written through.
pub struct ProgressStore<P: Persistence> {
    deck: Deck,
    backend: P,
}

impl<P: Persistence> ProgressStore<P> {
    /// Reads whatever the backend holds and registers a fresh record for every
    /// corpus question that has none. Existing records are kept as they are.
    pub fn load(corpus: &[Question], backend: P) -> Self {
        let mut deck = match backend.load() {
            Ok(Some(deck)) => deck,
            Ok(None) => Deck::new(),
            Err(e) => {
                tracing::warn!("starting from empty progress: {e}");
                Deck::new()
            }
        };
        for (text, record) in deck.iter_mut() {
            if !record.is_consistent() {
                tracing::warn!(question = %text, "resetting record with unbalanced counters");
                *record = CardRecord::new();
            }
            *record = record.normalized();
        }
        let mut store = Self { deck, backend };
        store.merge_corpus(corpus);
        store
    }

    pub(crate) fn merge_corpus(&mut self, corpus: &[Question]) {
        for q in corpus {
            self.deck.entry(q.text.clone()).or_default();
        }
    }

    pub fn get(&self, text: &str) -> Result<&CardRecord, CoreError> {
        self.deck
            .get(text)
            .ok_or_else(|| CoreError::NotFound(text.to_string()))
    }

    pub fn contains(&self, text: &str) -> bool {
        self.deck.contains_key(text)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Replaces (or inserts) one record and writes the whole deck. The
    /// in-memory deck is updated even when the write fails.
    pub fn update(&mut self, text: &str, record: CardRecord) -> Result<(), CoreError> {
        self.deck.insert(text.to_string(), record.normalized());
        self.persist()
    }

    /// Adds a fresh record unless one exists. Returns whether it was added.
    pub fn register(&mut self, text: &str) -> Result<bool, CoreError> {
        if self.deck.contains_key(text) {
            return Ok(false);
        }
        self.deck.insert(text.to_string(), CardRecord::new());
        self.persist()?;
        Ok(true)
    }

    /// Scores one answer for `text` and persists. The single place answers
    /// reach the scheduler.
    pub fn record_answer(
        &mut self,
        text: &str,
        correct: bool,
        today: DayIndex,
    ) -> Result<CardRecord, CoreError> {
        let current = self.deck.get(text).copied().unwrap_or_default();
        let next = apply_outcome(current, correct, today);
        self.update(text, next)?;
        Ok(next)
    }

    pub fn reset_all(&mut self) -> Result<(), CoreError> {
        for record in self.deck.values_mut() {
            *record = CardRecord::new();
        }
        self.persist()
    }

    /// Swaps in a whole deck (import).
    pub fn replace_all(&mut self, deck: Deck) -> Result<(), CoreError> {
        self.deck = deck
            .into_iter()
            .map(|(k, v)| (k, v.normalized()))
            .collect();
        self.persist()
    }

    fn persist(&mut self) -> Result<(), CoreError> {
        tracing::debug!(records = self.deck.len(), "persisting progress");
        self.backend.save(&self.deck)
    }
}
