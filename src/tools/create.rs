/// Tool for accepting new quests
///
/// This module implements the quest_create MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, GuildState, Quest, QuestKind, Rank, TimeOfDay};

/// Parameters for creating a new quest
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateQuestParams {
    /// Objective description, e.g. "Morning Run"
    pub name: String,
    /// Difficulty rank: e, d, c, b, a or s - fixes the XP reward
    pub rank: String,
    /// "daily" (recurring, default) or "one_shot"
    pub kind: Option<String>,
    /// Free-form category label, display only
    pub category: Option<String>,
    /// Preferred time of day: morning, afternoon, evening or any
    pub time_of_day: Option<String>,
    /// Estimated minutes to complete, display only
    pub estimated_time: Option<u32>,
}

/// Response from creating a quest
#[derive(Debug, Serialize)]
pub struct CreateQuestResponse {
    pub success: bool,
    pub quest_id: Option<String>,
    pub message: String,
}

/// Create a new quest and add it to the guild state
///
/// All validation happens before any state mutation; an invalid rank or
/// name rejects the whole request.
pub fn create_quest(
    state: &mut GuildState,
    params: CreateQuestParams,
) -> Result<CreateQuestResponse, DomainError> {
    let rank = Rank::parse(&params.rank)?;
    let kind = match params.kind.as_deref() {
        Some(kind) => QuestKind::parse(kind)?,
        None => QuestKind::Daily,
    };
    let time_of_day = params
        .time_of_day
        .as_deref()
        .map(TimeOfDay::parse)
        .transpose()?;

    let mut quest = Quest::new(params.name.clone(), rank, kind)?;
    quest.category = params.category;
    quest.time_of_day = time_of_day;
    quest.estimated_time = params.estimated_time;

    let quest_id = quest.id.to_string();
    let xp = quest.xp_reward;
    state.add_quest(quest);

    Ok(CreateQuestResponse {
        success: true,
        quest_id: Some(quest_id),
        message: format!(
            "⚔️ Accepted {}-rank quest '{}'! Worth {} XP per clear.",
            rank, params.name, xp
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_quest_adds_to_state() {
        let mut state = GuildState::new();

        let response = create_quest(
            &mut state,
            CreateQuestParams {
                name: "Morning Run".to_string(),
                rank: "c".to_string(),
                kind: None,
                category: Some("health".to_string()),
                time_of_day: Some("morning".to_string()),
                estimated_time: Some(30),
            },
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(state.quests.len(), 1);
        assert_eq!(state.quests[0].xp_reward, 35);
        assert_eq!(state.quests[0].kind, QuestKind::Daily);
    }

    #[test]
    fn test_invalid_rank_rejected_before_mutation() {
        let mut state = GuildState::new();

        let result = create_quest(
            &mut state,
            CreateQuestParams {
                name: "Bad".to_string(),
                rank: "x".to_string(),
                kind: None,
                category: None,
                time_of_day: None,
                estimated_time: None,
            },
        );

        assert!(matches!(result, Err(DomainError::InvalidRank(_))));
        assert!(state.quests.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut state = GuildState::new();

        let result = create_quest(
            &mut state,
            CreateQuestParams {
                name: "  ".to_string(),
                rank: "e".to_string(),
                kind: None,
                category: None,
                time_of_day: None,
                estimated_time: None,
            },
        );

        assert!(result.is_err());
        assert!(state.quests.is_empty());
    }
}
