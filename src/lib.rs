//! Player score backend for the phishing-awareness game: models, store, service and REST API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::ServerConfig;
pub use logic::PlayerService;
pub use models::{
    DeleteResponse, ExistsResponse, Player, PlayerError, PlayerId, PlayerScoreRequest,
    PlayerScoreResponse, ValidScoreRequest, ValidationError, PLAYER_CREATED_MESSAGE,
    SCORE_UPDATED_MESSAGE,
};
pub use store::{MemoryStore, PlayerStore, StoreError};
