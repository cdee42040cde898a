/// Domain module containing the progression engine and its data types
///
/// This module defines the core entities (Quest, PlayerStats, GuildState) and
/// the pure rules that drive progression: streak calculation, the reward
/// formula, the level and rank state machines, and the achievement evaluator.

pub mod achievements;
pub mod engine;
pub mod progression;
pub mod quest;
pub mod reward;
pub mod stats;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use achievements::{AchievementDef, AchievementStatus, Metric, Tier, CATALOG};
pub use engine::{CompletionOutcome, GuildEvent, GuildState};
pub use quest::Quest;
pub use reward::{BonusSource, FixedBonus, RandomBonus, Reward};
pub use stats::PlayerStats;
pub use types::{QuestId, QuestKind, Rank, TimeOfDay};

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid quest name: {0}")]
    InvalidQuestName(String),

    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Quest not found: {quest_id}")]
    QuestNotFound { quest_id: String },

    #[error("Quest {quest_id} was already completed on {date}")]
    DuplicateCompletion { quest_id: String, date: NaiveDate },
}
