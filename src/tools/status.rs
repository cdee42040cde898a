/// Tool for checking the hunter's progression status
///
/// This module implements the hunter_status MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, GuildState};

/// Parameters for checking hunter status (none)
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct HunterStatusParams {}

/// Response from checking hunter status
#[derive(Debug, Serialize)]
pub struct HunterStatusResponse {
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub total_xp: u64,
    pub hunter_rank: String,
    pub current_title: String,
    pub mana_points: u32,
    pub max_mana: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completed_quests: u32,
    pub active_quests: u32,
    pub message: String,
}

/// Report the hunter's current progression snapshot
pub fn hunter_status(
    state: &GuildState,
    _params: HunterStatusParams,
) -> Result<HunterStatusResponse, DomainError> {
    let stats = &state.stats;
    let active_quests = state.active_quests().count() as u32;

    let message = format!(
        "🏹 {} - Level {} ({}-rank)\n\
         ⭐ XP: {}/{} ({:.0}% to next level) | Lifetime: {}\n\
         💧 Mana: {}/{}\n\
         🔥 Streak: {} day{} (best: {})\n\
         ✅ {} quest clears | {} active quest{}",
        stats.current_title,
        stats.level,
        stats.hunter_rank,
        stats.xp,
        stats.xp_to_next_level,
        stats.level_progress() * 100.0,
        stats.total_xp,
        stats.mana_points,
        stats.max_mana,
        stats.current_streak,
        if stats.current_streak == 1 { "" } else { "s" },
        stats.longest_streak,
        stats.completed_quests,
        active_quests,
        if active_quests == 1 { "" } else { "s" },
    );

    Ok(HunterStatusResponse {
        level: stats.level,
        xp: stats.xp,
        xp_to_next_level: stats.xp_to_next_level,
        total_xp: stats.total_xp,
        hunter_rank: stats.hunter_rank.to_string(),
        current_title: stats.current_title.clone(),
        mana_points: stats.mana_points,
        max_mana: stats.max_mana,
        current_streak: stats.current_streak,
        longest_streak: stats.longest_streak,
        completed_quests: stats.completed_quests,
        active_quests,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_hunter_status() {
        let state = GuildState::new();

        let response = hunter_status(&state, HunterStatusParams {}).unwrap();

        assert_eq!(response.level, 1);
        assert_eq!(response.hunter_rank, "E");
        assert_eq!(response.mana_points, 100);
        assert!(response.message.contains("Novice Hunter"));
        assert!(response.message.contains("Level 1"));
    }
}
