/// Tools for abandoning quests and clearing the completed bucket
///
/// This module implements the quest_delete and quest_clear_completed MCP
/// tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, GuildState, QuestId};

/// Parameters for deleting a quest
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteQuestParams {
    /// ID of the quest to abandon
    pub quest_id: String,
}

/// Response from deleting a quest
#[derive(Debug, Serialize)]
pub struct DeleteQuestResponse {
    pub success: bool,
    pub message: String,
}

/// Delete a quest by id
///
/// Referencing a quest that does not exist fails without mutating anything.
pub fn delete_quest(
    state: &mut GuildState,
    params: DeleteQuestParams,
) -> Result<DeleteQuestResponse, DomainError> {
    let quest_id = QuestId::from_string(&params.quest_id).map_err(|_| {
        DomainError::QuestNotFound {
            quest_id: params.quest_id.clone(),
        }
    })?;

    let removed = state.delete_quest(&quest_id)?;

    Ok(DeleteQuestResponse {
        success: true,
        message: format!("🗑️ Abandoned quest '{}'.", removed.name),
    })
}

/// Parameters for clearing completed quests (none)
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ClearCompletedParams {}

/// Response from clearing completed quests
#[derive(Debug, Serialize)]
pub struct ClearCompletedResponse {
    pub success: bool,
    pub cleared: u32,
    pub message: String,
}

/// Drop every completed one-shot quest from the log
pub fn clear_completed(
    state: &mut GuildState,
    _params: ClearCompletedParams,
) -> Result<ClearCompletedResponse, DomainError> {
    let cleared = state.clear_completed() as u32;

    Ok(ClearCompletedResponse {
        success: true,
        cleared,
        message: match cleared {
            0 => "No completed quests to clear.".to_string(),
            1 => "🧹 Cleared 1 completed quest.".to_string(),
            n => format!("🧹 Cleared {} completed quests.", n),
        },
    })
}
