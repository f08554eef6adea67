//! Player record and the response shapes built from it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned by the store on first save.
pub type PlayerId = Uuid;

/// Message returned when an upsert creates a new record.
pub const PLAYER_CREATED_MESSAGE: &str = "Player created successfully";
/// Message returned when an upsert changes the score of an existing record.
pub const SCORE_UPDATED_MESSAGE: &str = "Score updated successfully";

/// Normalised key used for every nickname comparison (lookup, exists, delete, uniqueness).
///
/// Full Unicode case folding: "ΟΔΟΣ", "οδος" and "οδοσ" share one key, as do "STRASSE" and "straße".
pub fn nickname_key(nickname: &str) -> String {
    caseless::default_case_fold_str(nickname)
}

/// A stored player: nickname and score.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// None until the store persists the record; never changes afterwards.
    pub id: Option<PlayerId>,
    pub nickname: String,
    pub score: i32,
}

impl Player {
    /// Create an unsaved player with score 0.
    pub fn new(nickname: impl Into<String>) -> Self {
        Self::with_score(nickname, 0)
    }

    /// Create an unsaved player with the given score.
    pub fn with_score(nickname: impl Into<String>, score: i32) -> Self {
        Self {
            id: None,
            nickname: nickname.into(),
            score,
        }
    }

    /// Score view of this player (for API responses).
    pub fn to_score(&self) -> PlayerScoreResponse {
        PlayerScoreResponse {
            nickname: self.nickname.clone(),
            score: self.score,
            message: None,
        }
    }
}

/// `{nickname, score, message?}` as served by the score endpoints.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerScoreResponse {
    pub nickname: String,
    pub score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PlayerScoreResponse {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}
