//! In-memory store: records by id plus a case-folded nickname index.

use crate::models::{nickname_key, Player, PlayerId};
use crate::store::{PlayerStore, StoreError};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<PlayerId, Player>,
    /// Case-folded nickname -> id. Holds exactly one entry per record.
    by_nickname: HashMap<String, PlayerId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn id_for(&self, nickname: &str) -> Option<PlayerId> {
        self.by_nickname.get(&nickname_key(nickname)).copied()
    }
}

impl PlayerStore for MemoryStore {
    fn find_by_nickname_ignore_case(&self, nickname: &str) -> Result<Option<Player>, StoreError> {
        Ok(self
            .id_for(nickname)
            .and_then(|id| self.records.get(&id))
            .cloned())
    }

    fn exists_by_nickname_ignore_case(&self, nickname: &str) -> bool {
        self.id_for(nickname).is_some()
    }

    fn save(&mut self, mut player: Player) -> Result<Player, StoreError> {
        let key = nickname_key(&player.nickname);
        let owner = self.by_nickname.get(&key).copied();
        let id = match player.id {
            Some(id) => id,
            None => Uuid::new_v4(),
        };
        if owner.is_some_and(|owner| owner != id) {
            return Err(StoreError::Conflict {
                nickname: player.nickname,
            });
        }

        // A saved record may have been renamed; drop its old index entry.
        if let Some(previous) = self.records.get(&id) {
            let old_key = nickname_key(&previous.nickname);
            if old_key != key {
                self.by_nickname.remove(&old_key);
            }
        }

        player.id = Some(id);
        self.by_nickname.insert(key, id);
        self.records.insert(id, player.clone());
        Ok(player)
    }

    fn delete_by_nickname_ignore_case(&mut self, nickname: &str) -> Result<(), StoreError> {
        if let Some(id) = self.by_nickname.remove(&nickname_key(nickname)) {
            self.records.remove(&id);
        }
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.records.values().cloned().collect())
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}
