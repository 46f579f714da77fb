use crate::{CoreError, Deck, Persistence};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct Slot {
    deck: Option<Deck>,
    saves: usize,
    unreadable: bool,
    fail_writes: bool,
}

/// In-memory backend. Clones share the same slot, so a test can keep a handle
/// and inspect what the store wrote.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Slot>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deck(deck: Deck) -> Self {
        let b = Self::default();
        b.slot.lock().deck = Some(deck);
        b
    }

    /// A backend whose stored state cannot be read back.
    pub fn unreadable() -> Self {
        let b = Self::default();
        b.slot.lock().unreadable = true;
        b
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.slot.lock().fail_writes = fail;
    }

    pub fn stored(&self) -> Option<Deck> {
        self.slot.lock().deck.clone()
    }

    pub fn save_count(&self) -> usize {
        self.slot.lock().saves
    }
}

impl Persistence for MemoryBackend {
    fn load(&self) -> Result<Option<Deck>, CoreError> {
        let s = self.slot.lock();
        if s.unreadable {
            return Err(CoreError::PersistenceRead("memory slot marked unreadable".into()));
        }
        Ok(s.deck.clone())
    }

    fn save(&mut self, deck: &Deck) -> Result<(), CoreError> {
        let mut s = self.slot.lock();
        if s.fail_writes {
            return Err(CoreError::Storage("memory slot rejects writes".into()));
        }
        s.deck = Some(deck.clone());
        s.saves += 1;
        Ok(())
    }
}
