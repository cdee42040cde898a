/// Tool for listing achievements
///
/// This module implements the hunter_achievements MCP tool, a thin rendering
/// over the stateless achievement evaluator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{achievements, DomainError, GuildState};

/// Parameters for listing achievements (none)
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct AchievementsParams {}

/// One achievement in the response
#[derive(Debug, Serialize)]
pub struct AchievementSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: String,
    pub unlocked: bool,
    pub progress: u64,
    pub requirement: u64,
    pub xp_reward: u64,
}

/// Response from listing achievements
#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub achievements: Vec<AchievementSummary>,
    pub unlocked_count: u32,
    pub total_count: u32,
    pub message: String,
}

/// Evaluate and render every achievement, unlocked first
pub fn hunter_achievements(
    state: &GuildState,
    _params: AchievementsParams,
) -> Result<AchievementsResponse, DomainError> {
    let statuses = achievements::evaluate(&state.stats, &state.quests);
    let unlocked_count = statuses.iter().filter(|status| status.unlocked).count() as u32;
    let total_count = statuses.len() as u32;

    let summaries: Vec<AchievementSummary> = statuses
        .iter()
        .map(|status| AchievementSummary {
            id: status.def.id.to_string(),
            name: status.def.name.to_string(),
            description: status.def.description.to_string(),
            tier: format!("{:?}", status.def.tier).to_lowercase(),
            unlocked: status.unlocked,
            progress: status.progress,
            requirement: status.def.requirement,
            xp_reward: status.def.xp_reward,
        })
        .collect();

    let lines = summaries
        .iter()
        .map(|achievement| {
            format!(
                "{} {} - {} ({}/{})",
                if achievement.unlocked { "🏆" } else { "🔒" },
                achievement.name,
                achievement.description,
                achievement.progress,
                achievement.requirement,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let message = format!(
        "🏆 Achievements: {} of {} unlocked\n\n{}",
        unlocked_count, total_count, lines
    );

    Ok(AchievementsResponse {
        achievements: summaries,
        unlocked_count,
        total_count,
        message,
    })
}
