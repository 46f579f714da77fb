use crate::{CoreError, Deck};

pub mod memory;

/// Key-value home of the deck. Each `save` receives the whole deck.
pub trait Persistence {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Deck>, CoreError>;
    fn save(&mut self, deck: &Deck) -> Result<(), CoreError>;
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&self) -> Result<Option<Deck>, CoreError> {
        (**self).load()
    }

    fn save(&mut self, deck: &Deck) -> Result<(), CoreError> {
        (**self).save(deck)
    }
}
