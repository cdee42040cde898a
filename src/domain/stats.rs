/// PlayerStats entity - the hunter's progression record
///
/// This module defines the singleton record holding level, XP, mana, streaks,
/// rank and titles. It is initialized once at first use and mutated only
/// through the completion orchestrator, or reset by explicit user action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Rank;

/// Mana pool a fresh hunter starts with
pub const STARTING_MANA: u32 = 100;

/// XP needed to go from level 1 to level 2
pub const STARTING_XP_THRESHOLD: u64 = 100;

/// The hunter's progression record, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Current level, starts at 1
    pub level: u32,
    /// Progress within the current level, 0 <= xp < xp_to_next_level
    /// (except transiently after a carry-over, which is not re-checked)
    pub xp: u64,
    /// XP threshold for the next level-up
    pub xp_to_next_level: u64,
    /// Lifetime XP, monotonically non-decreasing
    pub total_xp: u64,
    /// Count of completion events, not distinct quests
    pub completed_quests: u32,
    /// Length of the current global streak in days
    pub current_streak: u32,
    /// Best global streak ever achieved; never decreases
    pub longest_streak: u32,
    /// Ids of unlocked achievements, refreshed after every completion
    pub achievements: Vec<String>,
    /// Titles earned through rank promotions
    pub unlocked_titles: Vec<String>,
    /// Title currently displayed
    pub current_title: String,
    /// Hunter rank, monotonically non-decreasing, driven by level
    pub hunter_rank: Rank,
    /// When the hunter joined the guild
    pub join_date: DateTime<Utc>,
    /// Current mana, 0 <= mana_points <= max_mana
    pub mana_points: u32,
    /// Mana cap
    pub max_mana: u32,
}

impl PlayerStats {
    /// Fresh hunter record: level 1, rank E, full mana
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            xp_to_next_level: STARTING_XP_THRESHOLD,
            total_xp: 0,
            completed_quests: 0,
            current_streak: 0,
            longest_streak: 0,
            achievements: Vec::new(),
            unlocked_titles: vec![Rank::E.title().to_string()],
            current_title: Rank::E.title().to_string(),
            hunter_rank: Rank::E,
            join_date: Utc::now(),
            mana_points: STARTING_MANA,
            max_mana: STARTING_MANA,
        }
    }

    /// Unlock a title and make it current
    ///
    /// Titles are never unlocked twice.
    pub fn award_title(&mut self, title: &str) {
        if !self.unlocked_titles.iter().any(|t| t == title) {
            self.unlocked_titles.push(title.to_string());
        }
        self.current_title = title.to_string();
    }

    /// Fraction of the way to the next level, for display
    pub fn level_progress(&self) -> f64 {
        if self.xp_to_next_level == 0 {
            return 0.0;
        }
        (self.xp as f64 / self.xp_to_next_level as f64).min(1.0)
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}
