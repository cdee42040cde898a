/// Tool for listing quests
///
/// This module implements the quest_list MCP tool.

use chrono::Local;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{streak, DomainError, GuildState};

/// Parameters for listing quests
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListQuestsParams {
    /// Show only active quests (default: true)
    pub active_only: Option<bool>,
    /// Sort by: "name", "rank", "streak" or "created_at" (default)
    pub sort_by: Option<String>,
}

/// Information about a quest in the list
#[derive(Debug, Serialize)]
pub struct QuestSummary {
    pub quest_id: String,
    pub name: String,
    pub rank: String,
    pub xp_reward: u64,
    pub kind: String,
    pub current_streak: u32,
    pub total_completions: u32,
    pub is_completed: bool,
    pub category: Option<String>,
}

/// Summary counters for the whole quest log
#[derive(Debug, Serialize)]
pub struct QuestListSummary {
    pub total_quests: u32,
    pub active_quests: u32,
    pub completed_quests: u32,
}

/// Response from listing quests
#[derive(Debug, Serialize)]
pub struct ListQuestsResponse {
    pub quests: Vec<QuestSummary>,
    pub summary: QuestListSummary,
    pub message: String,
}

/// List quests from the guild state
pub fn list_quests(
    state: &GuildState,
    params: ListQuestsParams,
) -> Result<ListQuestsResponse, DomainError> {
    let today = Local::now().date_naive();
    let active_only = params.active_only.unwrap_or(true);

    let mut summaries: Vec<QuestSummary> = state
        .quests
        .iter()
        .filter(|quest| !active_only || quest.is_active())
        .map(|quest| QuestSummary {
            quest_id: quest.id.to_string(),
            name: quest.name.clone(),
            rank: quest.rank.to_string(),
            xp_reward: quest.xp_reward,
            kind: match quest.kind {
                crate::domain::QuestKind::Daily => "daily".to_string(),
                crate::domain::QuestKind::OneShot => "one_shot".to_string(),
            },
            current_streak: streak::streak_ending_at(&quest.completions, today),
            total_completions: quest.completions.len() as u32,
            is_completed: quest.is_completed,
            category: quest.category.clone(),
        })
        .collect();

    match params.sort_by.as_deref() {
        Some("name") => summaries.sort_by(|a, b| a.name.cmp(&b.name)),
        Some("rank") => summaries.sort_by(|a, b| b.xp_reward.cmp(&a.xp_reward)),
        Some("streak") => summaries.sort_by(|a, b| b.current_streak.cmp(&a.current_streak)),
        // created_at order is insertion order, nothing to do
        _ => {}
    }

    let total_quests = state.quests.len() as u32;
    let active_quests = state.active_quests().count() as u32;
    let completed_quests = total_quests - active_quests;

    let message = if summaries.is_empty() {
        "Your quest log is empty, Hunter. Accept a new quest to begin!".to_string()
    } else {
        let lines = summaries
            .iter()
            .map(|quest| {
                format!(
                    "🎯 [{}] {} ({} XP){}{}",
                    quest.rank,
                    quest.name,
                    quest.xp_reward,
                    if quest.current_streak > 0 {
                        format!(" | 🔥 {}-day streak", quest.current_streak)
                    } else {
                        String::new()
                    },
                    if quest.is_completed { " ✅" } else { "" },
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "📜 Quest Log ({} active, {} completed)\n\n{}",
            active_quests, completed_quests, lines
        )
    };

    Ok(ListQuestsResponse {
        quests: summaries,
        summary: QuestListSummary {
            total_quests,
            active_quests,
            completed_quests,
        },
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedBonus, Quest, QuestKind, Rank};

    #[test]
    fn test_active_only_hides_completed_one_shots() {
        let mut state = GuildState::new();
        state.add_quest(Quest::new("Daily".to_string(), Rank::E, QuestKind::Daily).unwrap());
        let one_shot = Quest::new("Boss".to_string(), Rank::S, QuestKind::OneShot).unwrap();
        let id = one_shot.id.clone();
        state.add_quest(one_shot);
        state
            .complete_quest(&id, Local::now().date_naive(), &mut FixedBonus(10))
            .unwrap();

        let response = list_quests(
            &state,
            ListQuestsParams {
                active_only: None,
                sort_by: None,
            },
        )
        .unwrap();

        assert_eq!(response.quests.len(), 1);
        assert_eq!(response.summary.total_quests, 2);
        assert_eq!(response.summary.completed_quests, 1);
    }

    #[test]
    fn test_sort_by_rank_puts_hardest_first() {
        let mut state = GuildState::new();
        state.add_quest(Quest::new("Easy".to_string(), Rank::E, QuestKind::Daily).unwrap());
        state.add_quest(Quest::new("Hard".to_string(), Rank::S, QuestKind::Daily).unwrap());

        let response = list_quests(
            &state,
            ListQuestsParams {
                active_only: Some(false),
                sort_by: Some("rank".to_string()),
            },
        )
        .unwrap();

        assert_eq!(response.quests[0].name, "Hard");
    }

    #[test]
    fn test_empty_log_message() {
        let state = GuildState::new();
        let response = list_quests(
            &state,
            ListQuestsParams {
                active_only: None,
                sort_by: None,
            },
        )
        .unwrap();

        assert!(response.message.contains("quest log is empty"));
    }
}
