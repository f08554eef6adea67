//! Score reconciliation: get, upsert, delete and exists on top of a [`PlayerStore`].

use crate::models::{
    nickname_key, DeleteResponse, ExistsResponse, Player, PlayerError, PlayerScoreResponse,
    PLAYER_CREATED_MESSAGE, SCORE_UPDATED_MESSAGE,
};
use crate::store::PlayerStore;

/// Business rules for turning a nickname into exactly one player record.
///
/// Operations are not internally synchronised: `upsert_score` and `delete` read
/// then write, so callers sharing a service must run each call under exclusive
/// access (the web layer holds it behind a `RwLock` and takes the write lock for
/// both). The store's unique nickname constraint is the fallback; its
/// [`StoreError::Conflict`](crate::store::StoreError::Conflict) is returned as-is,
/// like every other store failure.
#[derive(Debug)]
pub struct PlayerService<S> {
    store: S,
}

impl<S: PlayerStore> PlayerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Score of the player, with the nickname as it was stored (not the caller's casing).
    pub fn get_score(&self, nickname: &str) -> Result<PlayerScoreResponse, PlayerError> {
        log::debug!("Looking up score for '{}'", nickname);
        self.store
            .find_by_nickname_ignore_case(nickname)?
            .map(|p| p.to_score())
            .ok_or_else(|| PlayerError::PlayerNotFound(nickname.to_string()))
    }

    /// Set the score of an existing player, or create the player if the nickname is unknown.
    ///
    /// An existing record keeps its nickname and id; only the score changes.
    pub fn upsert_score(
        &mut self,
        nickname: &str,
        score: i32,
    ) -> Result<PlayerScoreResponse, PlayerError> {
        let (player, message) = match self.store.find_by_nickname_ignore_case(nickname)? {
            Some(mut existing) => {
                existing.score = score;
                (existing, SCORE_UPDATED_MESSAGE)
            }
            None => (Player::with_score(nickname, score), PLAYER_CREATED_MESSAGE),
        };
        let saved = self.store.save(player)?;
        log::info!("{} ('{}' -> {})", message, saved.nickname, saved.score);
        Ok(saved.to_score().with_message(message))
    }

    /// Remove the player. Fails without touching the store when the nickname is unknown.
    pub fn delete(&mut self, nickname: &str) -> Result<DeleteResponse, PlayerError> {
        if !self.store.exists_by_nickname_ignore_case(nickname) {
            return Err(PlayerError::PlayerNotFound(nickname.to_string()));
        }
        self.store.delete_by_nickname_ignore_case(nickname)?;
        log::info!("Deleted player '{}'", nickname);
        Ok(DeleteResponse {
            message: format!("Player '{}' deleted successfully", nickname),
        })
    }

    pub fn exists(&self, nickname: &str) -> ExistsResponse {
        ExistsResponse {
            exists: self.store.exists_by_nickname_ignore_case(nickname),
        }
    }

    /// All players, highest score first; ties ordered by nickname (case-insensitive).
    pub fn list_players(&self) -> Result<Vec<PlayerScoreResponse>, PlayerError> {
        let mut players = self.store.find_all()?;
        players.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| nickname_key(&a.nickname).cmp(&nickname_key(&b.nickname)))
        });
        Ok(players.iter().map(Player::to_score).collect())
    }
}
