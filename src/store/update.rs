//! Optimistic conditional updates on stored games.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::game::GameRecord;

use super::{game_key, GameStore, StoreError, GAME_KEY_PREFIX};

/// Attempts made by `conditional_update` callers that have no opinion.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Pause between attempts after a conflict.
pub const CONFLICT_BACKOFF: Duration = Duration::from_millis(50);

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Update the game under `key` if nobody else wrote it meanwhile.
///
/// Each attempt reads the record, notes its `last_update`, and hands it to
/// `updater`. `None` from the updater aborts. Otherwise the result is
/// stamped with a newer revision, the record is read again, and the write
/// only happens if the revision is unchanged. On conflict the attempt is
/// repeated after `CONFLICT_BACKOFF`.
///
/// Returns `Ok(false)` when the key is missing, the updater aborted, or
/// every attempt conflicted. The check and the write are separate store
/// calls, so this narrows races rather than excluding them.
pub fn conditional_update<S, F>(
    store: &S,
    key: &str,
    max_retries: u32,
    mut updater: F,
) -> Result<bool, StoreError>
where
    S: GameStore + ?Sized,
    F: FnMut(GameRecord) -> Option<GameRecord>,
{
    for attempt in 1..=max_retries {
        let Some(current) = store.load_game(key)? else {
            return Ok(false);
        };
        let seen = current.last_update;

        let Some(mut next) = updater(current) else {
            return Ok(false);
        };
        next.last_update = now_ms().max(seen + 1);

        let latest = store.load_game(key)?.map(|r| r.last_update);
        if latest != Some(seen) {
            log::debug!(
                target: "backgammon",
                "conflict on {key} (attempt {attempt}/{max_retries}): revision {seen} is now {latest:?}"
            );
            thread::sleep(CONFLICT_BACKOFF);
            continue;
        }

        store.save_game(key, &next)?;
        return Ok(true);
    }

    log::debug!(target: "backgammon", "gave up on {key} after {max_retries} attempts");
    Ok(false)
}

/// Store a new game under its key and return the key.
pub fn create_game<S>(store: &S, mut record: GameRecord) -> Result<String, StoreError>
where
    S: GameStore + ?Sized,
{
    let key = game_key(&record.id);
    record.last_update = now_ms();
    store.save_game(&key, &record)?;
    Ok(key)
}

/// All stored games with their keys, in key order.
pub fn list_games<S>(store: &S) -> Result<Vec<(String, GameRecord)>, StoreError>
where
    S: GameStore + ?Sized,
{
    let mut games = Vec::new();
    for key in store.list(GAME_KEY_PREFIX)? {
        // Deleted between list and get.
        if let Some(record) = store.load_game(&key)? {
            games.push((key, record));
        }
    }
    Ok(games)
}
