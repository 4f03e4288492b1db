//! Shared game state store.
//!
//! Games live under `bg-game:<id>` keys in a key/value store shared by all
//! players and bots. Writers coordinate through `conditional_update`, an
//! optimistic read-check-write loop keyed on the record's `last_update`
//! revision.

pub mod memory;
pub mod update;

use thiserror::Error;

use crate::game::GameRecord;

pub use memory::MemoryStore;
pub use update::{
    conditional_update, create_game, list_games, CONFLICT_BACKOFF, DEFAULT_MAX_RETRIES,
};

/// Key prefix shared by all game records.
pub const GAME_KEY_PREFIX: &str = "bg-game:";

/// Store key of game `id`.
#[must_use]
pub fn game_key(id: &str) -> String {
    format!("{GAME_KEY_PREFIX}{id}")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode or decode record: {0}")]
    Codec(#[from] bincode::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Keyed byte storage.
///
/// Implementations synchronize internally; all methods take `&self`.
pub trait GameStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Keys starting with `prefix`, in ascending order.
    fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Remove `key`. Returns whether it existed.
    fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Read and decode the game stored under `key`.
    fn load_game(&self, key: &str) -> Result<Option<GameRecord>, StoreError> {
        match self.get(key)? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encode and write `record` under `key`, unconditionally.
    fn save_game(&self, key: &str, record: &GameRecord) -> Result<(), StoreError> {
        self.set(key, bincode::serialize(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_key() {
        assert_eq!(game_key("abc"), "bg-game:abc");
    }
}
