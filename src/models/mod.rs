//! Data structures for the score backend: player record, requests, responses, errors.

mod error;
mod player;
mod request;

pub use error::PlayerError;
pub use player::{
    nickname_key, DeleteResponse, ExistsResponse, Player, PlayerId, PlayerScoreResponse,
    PLAYER_CREATED_MESSAGE, SCORE_UPDATED_MESSAGE,
};
pub use request::{
    PlayerScoreRequest, ValidScoreRequest, ValidationError, NICKNAME_MAX_LEN, NICKNAME_MIN_LEN,
};
