/// Guild state container and completion orchestrator
///
/// GuildState owns the quest collection and the hunter's stats and is the
/// only writer of both. Completing a quest is a single logical transaction:
/// either every step applies or, on a validation error, nothing does.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    achievements, progression, reward, streak, BonusSource, DomainError, PlayerStats, Quest,
    QuestId, Reward,
};

/// Event surfaced to the presentation layer after a completion
///
/// Events are ordered: XP and mana always come first, then the optional
/// level-up and rank-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuildEvent {
    XpGained { amount: u64 },
    ManaGained { amount: u32 },
    LevelUp { new_level: u32 },
    RankUp { new_rank: crate::domain::Rank },
}

/// Everything a completion produced, for rendering and logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub quest_name: String,
    pub reward: Reward,
    pub global_streak: u32,
    pub events: Vec<GuildEvent>,
}

/// The whole mutable world: quests plus the hunter's record
///
/// Loaded from a snapshot at session start, mutated here, persisted after
/// every change. This replaces the module-level store of the original
/// client with an explicit container passed by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildState {
    pub quests: Vec<Quest>,
    pub stats: PlayerStats,
}

impl GuildState {
    pub fn new() -> Self {
        Self {
            quests: Vec::new(),
            stats: PlayerStats::new(),
        }
    }

    /// Add a freshly created quest to the collection
    pub fn add_quest(&mut self, quest: Quest) {
        tracing::debug!(quest = %quest.name, rank = %quest.rank, "accepted new quest");
        self.quests.push(quest);
    }

    /// Find a quest by id
    pub fn quest(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.iter().find(|quest| &quest.id == id)
    }

    /// Remove a quest by id
    pub fn delete_quest(&mut self, id: &QuestId) -> Result<Quest, DomainError> {
        let index = self
            .quests
            .iter()
            .position(|quest| &quest.id == id)
            .ok_or_else(|| DomainError::QuestNotFound {
                quest_id: id.to_string(),
            })?;
        Ok(self.quests.remove(index))
    }

    /// Drop every completed one-shot quest, returning how many were cleared
    pub fn clear_completed(&mut self) -> usize {
        let before = self.quests.len();
        self.quests.retain(|quest| quest.is_active());
        before - self.quests.len()
    }

    /// Quests still in the active bucket
    pub fn active_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|quest| quest.is_active())
    }

    /// One-shot quests already completed
    pub fn completed_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|quest| !quest.is_active())
    }

    /// Reset everything: fresh stats, empty quest log
    ///
    /// Only reachable through an explicit user action.
    pub fn reset(&mut self) {
        tracing::info!("guild state reset by user action");
        *self = Self::new();
    }

    /// Complete a quest and run the full progression pipeline
    ///
    /// Steps, applied as one transaction: record the completion day on the
    /// quest, recompute the global streak over the updated collection, roll
    /// the reward, feed XP through the level machine and the level through
    /// the rank machine, then fold streaks, counters, mana and achievement
    /// ids back into the stats. Errors (unknown id, same-day re-completion)
    /// leave the state untouched.
    pub fn complete_quest(
        &mut self,
        id: &QuestId,
        today: NaiveDate,
        bonus: &mut dyn BonusSource,
    ) -> Result<CompletionOutcome, DomainError> {
        let quest = self
            .quests
            .iter_mut()
            .find(|quest| &quest.id == id)
            .ok_or_else(|| DomainError::QuestNotFound {
                quest_id: id.to_string(),
            })?;

        quest.record_completion(today)?;
        let quest_name = quest.name.clone();
        let base_xp = quest.xp_reward;

        // Streak over the updated collection, so today's completion counts.
        let global_streak = streak::global_streak(&self.quests, today);
        let reward = reward::compute_reward(base_xp, global_streak, bonus);

        let leveled_up = progression::apply_xp(&mut self.stats, reward.xp);
        let new_rank = progression::apply_rank_check(self.stats.level, self.stats.hunter_rank);
        let ranked_up = if new_rank != self.stats.hunter_rank {
            self.stats.hunter_rank = new_rank;
            self.stats.award_title(new_rank.title());
            Some(new_rank)
        } else {
            None
        };

        self.stats.current_streak = global_streak;
        self.stats.longest_streak = self.stats.longest_streak.max(global_streak);
        self.stats.completed_quests += 1;
        self.stats.mana_points = self
            .stats
            .mana_points
            .saturating_add(reward.mana)
            .min(self.stats.max_mana);
        let unlocked = achievements::unlocked_ids(&self.stats, &self.quests);
        self.stats.achievements = unlocked;

        let mut events = vec![
            GuildEvent::XpGained { amount: reward.xp },
            GuildEvent::ManaGained {
                amount: reward.mana,
            },
        ];
        if let Some(new_level) = leveled_up {
            events.push(GuildEvent::LevelUp { new_level });
        }
        if let Some(new_rank) = ranked_up {
            events.push(GuildEvent::RankUp { new_rank });
        }

        tracing::debug!(
            quest = %quest_name,
            xp = reward.xp,
            mana = reward.mana,
            streak = global_streak,
            "quest completed"
        );

        Ok(CompletionOutcome {
            quest_name,
            reward,
            global_streak,
            events,
        })
    }
}
