//! Bot identity and cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ai::{AiConfig, Personality};
use crate::game::PlayerInfo;

/// Who a bot is and how it plays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotProfile {
    pub id: String,
    pub name: String,
    pub skill: f64,
    pub personality: Personality,
}

impl BotProfile {
    /// Profile for `id`, named after the id's last four characters.
    pub fn new(id: impl Into<String>, skill: f64, personality: Personality) -> Self {
        let id = id.into();
        let tail = id.len().saturating_sub(4);
        let name = format!("Bot {}", id.get(tail..).unwrap_or(&id));
        Self {
            id,
            name,
            skill: skill.clamp(0.0, 1.0),
            personality,
        }
    }

    /// The seat this bot takes in a game.
    pub fn player_info(&self) -> PlayerInfo {
        PlayerInfo::new(self.id.clone(), self.name.clone())
    }

    /// AI settings for this bot.
    pub fn ai_config(&self, seed: u64) -> AiConfig {
        AiConfig::default()
            .with_skill(self.skill)
            .with_personality(self.personality)
            .with_seed(seed)
    }
}

/// Shared stop flag for one bot.
///
/// Clones observe the same flag; cancelling any clone stops the bot at the
/// next poll.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_name_and_skill() {
        let profile = BotProfile::new("bot-0-a1b2", 1.7, Personality::Defensive);
        assert_eq!(profile.name, "Bot a1b2");
        assert_eq!(profile.skill, 1.0);
        assert_eq!(profile.player_info().id, "bot-0-a1b2");

        let config = profile.ai_config(9);
        assert_eq!(config.personality, Personality::Defensive);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(BotProfile::new("b", 0.5, Personality::Balanced).name, "Bot b");
    }

    #[test]
    fn test_cancel_is_shared() {
        let handle = CancelHandle::new();
        let clone = handle.clone();
        assert!(!clone.is_cancelled());
        handle.cancel();
        assert!(clone.is_cancelled());
    }
}
