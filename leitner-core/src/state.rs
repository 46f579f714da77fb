use crate::filters::due_set;
use crate::snapshot::{parse_snapshot, ImportedSnapshot, Snapshot};
use crate::stats::{summarize, ProgressSummary};
use crate::{CoreError, DayIndex, Persistence, ProgressStore, Question};
use std::collections::HashSet;

/// The active corpus together with its progress store.
pub struct StudyState<P: Persistence> {
    corpus: Vec<Question>,
    store: ProgressStore<P>,
}

impl<P: Persistence> StudyState<P> {
    pub fn open(corpus: Vec<Question>, backend: P) -> Self {
        let corpus = dedup_corpus(corpus);
        let store = ProgressStore::load(&corpus, backend);
        Self { corpus, store }
    }

    pub fn corpus(&self) -> &[Question] {
        &self.corpus
    }

    pub fn store(&self) -> &ProgressStore<P> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProgressStore<P> {
        &mut self.store
    }

    pub fn due_set(&self, today: DayIndex, due_only: bool) -> Vec<Question> {
        due_set(&self.corpus, &self.store, today, due_only)
    }

    pub fn summary(&self, today: DayIndex) -> ProgressSummary {
        summarize(&self.corpus, &self.store, today)
    }

    /// Appends a custom question and registers a fresh record for it.
    pub fn add_question(&mut self, question: Question) -> Result<(), CoreError> {
        if self.corpus.iter().any(|q| q.text == question.text) {
            return Err(CoreError::DuplicateQuestion(question.text));
        }
        let text = question.text.clone();
        self.corpus.push(question);
        self.store.register(&text)?;
        Ok(())
    }

    pub fn reset_all(&mut self) -> Result<(), CoreError> {
        self.store.reset_all()
    }

    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            deck: self.store.deck().clone(),
            corpus: self.corpus.clone(),
        }
    }

    /// Validates the whole payload before touching anything, then replaces
    /// the deck and/or corpus. Every corpus question ends up with a record.
    pub fn apply_imported_snapshot(
        &mut self,
        value: serde_json::Value,
    ) -> Result<ImportedSnapshot, CoreError> {
        let imported = parse_snapshot(value)?;
        if let Some(corpus) = &imported.corpus {
            let mut seen = HashSet::new();
            if let Some(dup) = corpus.iter().find(|q| !seen.insert(q.text.as_str())) {
                return Err(CoreError::InvalidSnapshot(format!(
                    "corpus repeats question: {}",
                    dup.text
                )));
            }
        }

        if let Some(corpus) = &imported.corpus {
            self.corpus = corpus.clone();
        }
        let mut deck = imported
            .deck
            .clone()
            .unwrap_or_else(|| self.store.deck().clone());
        for q in &self.corpus {
            deck.entry(q.text.clone()).or_default();
        }
        tracing::info!(
            records = deck.len(),
            questions = self.corpus.len(),
            "applied imported snapshot"
        );
        self.store.replace_all(deck)?;
        Ok(imported)
    }
}

fn dedup_corpus(corpus: Vec<Question>) -> Vec<Question> {
    let mut seen = HashSet::new();
    corpus
        .into_iter()
        .filter(|q| {
            let fresh = seen.insert(q.text.clone());
            if !fresh {
                tracing::warn!(question = %q.text, "dropping duplicate question");
            }
            fresh
        })
        .collect()
}
