/// Tool for completing quests
///
/// This module implements the quest_complete MCP tool - the single entry
/// point for "complete quest X now". It runs the whole progression pipeline
/// and reports every resulting event.

use chrono::{Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{BonusSource, DomainError, GuildEvent, GuildState, QuestId};

/// Parameters for completing a quest
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CompleteQuestParams {
    /// ID of the quest to complete
    pub quest_id: String,
    /// Completion day (YYYY-MM-DD, optional - defaults to today)
    pub date: Option<String>,
}

/// Response from completing a quest
#[derive(Debug, Serialize)]
pub struct CompleteQuestResponse {
    pub success: bool,
    pub message: String,
    pub xp_gained: u64,
    pub mana_gained: u32,
    pub global_streak: u32,
    pub new_level: Option<u32>,
    pub new_rank: Option<String>,
}

/// Complete a quest using the provided state and bonus source
pub fn complete_quest(
    state: &mut GuildState,
    bonus: &mut dyn BonusSource,
    params: CompleteQuestParams,
) -> Result<CompleteQuestResponse, DomainError> {
    let quest_id = QuestId::from_string(&params.quest_id).map_err(|_| {
        DomainError::QuestNotFound {
            quest_id: params.quest_id.clone(),
        }
    })?;

    let today = Local::now().date_naive();
    let date = match params.date {
        Some(date_str) => {
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
                DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", date_str))
            })?;
            if date > today {
                return Err(DomainError::InvalidDate(
                    "Cannot log completions for future dates".to_string(),
                ));
            }
            date
        }
        None => today,
    };

    let outcome = state.complete_quest(&quest_id, date, bonus)?;

    let new_level = outcome.events.iter().find_map(|event| match event {
        GuildEvent::LevelUp { new_level } => Some(*new_level),
        _ => None,
    });
    let new_rank = outcome.events.iter().find_map(|event| match event {
        GuildEvent::RankUp { new_rank } => Some(new_rank.to_string()),
        _ => None,
    });

    let mut message = format!(
        "🗡️ Quest '{}' cleared! +{} XP (daily bonus +{}), +{} MP. Streak: {} day{}.",
        outcome.quest_name,
        outcome.reward.xp,
        outcome.reward.daily_bonus,
        outcome.reward.mana,
        outcome.global_streak,
        if outcome.global_streak == 1 { "" } else { "s" },
    );
    if let Some(level) = new_level {
        message.push_str(&format!("\n✨ LEVEL UP! You reached level {}.", level));
    }
    if let Some(ref rank) = new_rank {
        message.push_str(&format!("\n🏅 RANK UP! You are now a {}-rank hunter.", rank));
    }

    Ok(CompleteQuestResponse {
        success: true,
        message,
        xp_gained: outcome.reward.xp,
        mana_gained: outcome.reward.mana,
        global_streak: outcome.global_streak,
        new_level,
        new_rank,
    })
}
