pub mod clock;
pub mod errors;
pub mod filters;
pub mod flashcards;
pub mod models;
pub mod progress;
pub mod quiz;
pub mod repo;
pub mod scheduler;
pub mod snapshot;
pub mod state;
pub mod stats;

pub use clock::*;
pub use errors::*;
pub use filters::*;
pub use flashcards::*;
pub use models::*;
pub use progress::*;
pub use quiz::*;
pub use repo::memory::MemoryBackend;
pub use repo::*;
pub use scheduler::*;
pub use snapshot::*;
pub use state::*;
pub use stats::*;
