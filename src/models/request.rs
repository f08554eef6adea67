//! Incoming score request and its validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NICKNAME_MIN_LEN: usize = 3;
pub const NICKNAME_MAX_LEN: usize = 50;

/// Reasons a score request is rejected before it reaches the service.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("Nickname cannot be blank")]
    BlankNickname,
    #[error("Nickname must be between 3 and 50 characters")]
    NicknameLength { len: usize },
    #[error("Score cannot be null")]
    MissingScore,
}

/// Body of `POST /api/players/score`. Fields are optional so that missing
/// values surface as validation errors instead of deserialization failures.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerScoreRequest {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub score: Option<i32>,
}

/// A request that passed validation: trimmed nickname and a score.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidScoreRequest {
    pub nickname: String,
    pub score: i32,
}

impl PlayerScoreRequest {
    pub fn new(nickname: impl Into<String>, score: i32) -> Self {
        Self {
            nickname: Some(nickname.into()),
            score: Some(score),
        }
    }

    /// Check the nickname (non-blank, 3-50 characters after trimming) and that a score is present.
    pub fn validate(&self) -> Result<ValidScoreRequest, ValidationError> {
        // Narrower than a plain length check: surrounding whitespace never counts and is never stored.
        let nickname = self.nickname.as_deref().unwrap_or_default().trim();
        if nickname.is_empty() {
            return Err(ValidationError::BlankNickname);
        }
        let len = nickname.chars().count();
        if !(NICKNAME_MIN_LEN..=NICKNAME_MAX_LEN).contains(&len) {
            return Err(ValidationError::NicknameLength { len });
        }
        let score = self.score.ok_or(ValidationError::MissingScore)?;
        Ok(ValidScoreRequest {
            nickname: nickname.to_string(),
            score,
        })
    }
}
