//! Record store abstraction: players keyed by id with a case-insensitive unique nickname index.

mod memory;

use crate::models::Player;
use thiserror::Error;

pub use memory::MemoryStore;

/// Failures raised by a store.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum StoreError {
    /// Another record already owns this nickname (case-insensitive unique constraint).
    #[error("A player with nickname '{nickname}' already exists")]
    Conflict { nickname: String },
    /// The backing storage could not be reached or refused the operation.
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Storage the player service runs on.
///
/// All nickname arguments are compared case-insensitively. Implementations must
/// reject a `save` that would give two records the same nickname.
pub trait PlayerStore {
    fn find_by_nickname_ignore_case(&self, nickname: &str) -> Result<Option<Player>, StoreError>;

    /// Infallible: an existence check answers `false` rather than failing.
    fn exists_by_nickname_ignore_case(&self, nickname: &str) -> bool;

    /// Persist a record. Unsaved records (no id) get a fresh id; saved ones are updated in place.
    fn save(&mut self, player: Player) -> Result<Player, StoreError>;

    /// Remove the matching record. No-op when absent.
    fn delete_by_nickname_ignore_case(&mut self, nickname: &str) -> Result<(), StoreError>;

    /// Every stored record, in no particular order.
    fn find_all(&self) -> Result<Vec<Player>, StoreError>;

    /// Number of stored records.
    fn count(&self) -> usize;
}
