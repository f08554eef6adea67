//! Errors returned by the player service.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during player operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PlayerError {
    /// No record matches the nickname (case-insensitive).
    #[error("Player with nickname '{0}' not found")]
    PlayerNotFound(String),
    /// The store rejected a write; passed through untouched.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
