/// Quest entity and related functionality
///
/// This module defines the core Quest struct that represents an objective the
/// hunter wants to work toward, along with validation and helpers for its
/// completion history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{DomainError, QuestId, QuestKind, Rank, TimeOfDay};

/// A quest is a trackable objective, recurring or one-shot
///
/// Each quest has a name, a difficulty rank that fixes its base XP reward,
/// and a set of calendar days on which it was completed. One-shot quests
/// additionally carry a completion marker that moves them to the completed
/// bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique identifier for this quest
    pub id: QuestId,
    /// Objective description (e.g., "Morning Run", "Read 20 pages")
    pub name: String,
    /// When this quest was accepted
    pub created_at: DateTime<Utc>,
    /// Difficulty tier, fixed at creation
    pub rank: Rank,
    /// Base XP granted per completion; always the table value for `rank`
    pub xp_reward: u64,
    /// Calendar days this quest was completed on, unique and sorted
    pub completions: BTreeSet<NaiveDate>,
    /// Recurring daily quest or one-shot quest
    pub kind: QuestKind,
    /// One-shot completion marker
    #[serde(default)]
    pub is_completed: bool,
    /// When the one-shot completion happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Display metadata, never consumed by the progression engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    /// Estimated minutes to complete, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_note: Option<String>,
}

impl Quest {
    /// Create a new quest with validation
    ///
    /// The XP reward is derived from the rank here and nowhere else.
    pub fn new(name: String, rank: Rank, kind: QuestKind) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id: QuestId::new(),
            name,
            created_at: Utc::now(),
            rank,
            xp_reward: rank.xp_reward(),
            completions: BTreeSet::new(),
            kind,
            is_completed: false,
            completed_at: None,
            category: None,
            time_of_day: None,
            estimated_time: None,
            photo: None,
            voice_note: None,
        })
    }

    /// Whether this quest still shows up in active quest lists
    pub fn is_active(&self) -> bool {
        !self.is_completed
    }

    /// Whether this quest was completed on the given day
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completions.contains(&date)
    }

    /// Record a completion for the given day
    ///
    /// Same-day re-completion is rejected rather than double-counted; the
    /// caller sees no state change on error. For one-shot quests the
    /// completion marker is set and the quest leaves the active bucket.
    pub fn record_completion(&mut self, date: NaiveDate) -> Result<(), DomainError> {
        if self.is_completed || self.completions.contains(&date) {
            return Err(DomainError::DuplicateCompletion {
                quest_id: self.id.to_string(),
                date,
            });
        }

        self.completions.insert(date);
        if self.kind == QuestKind::OneShot {
            self.is_completed = true;
            self.completed_at = Some(Utc::now());
        }
        Ok(())
    }

    /// Validate quest name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidQuestName(
                "Quest name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidQuestName(
                "Quest name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_create_valid_quest() {
        let quest = Quest::new("Morning Run".to_string(), Rank::C, QuestKind::Daily);

        assert!(quest.is_ok());
        let quest = quest.unwrap();
        assert_eq!(quest.name, "Morning Run");
        assert_eq!(quest.rank, Rank::C);
        assert_eq!(quest.xp_reward, 35);
        assert!(quest.completions.is_empty());
        assert!(quest.is_active());
    }

    #[test]
    fn test_invalid_quest_name() {
        assert!(Quest::new("".to_string(), Rank::E, QuestKind::Daily).is_err());
        assert!(Quest::new("   ".to_string(), Rank::E, QuestKind::Daily).is_err());
        assert!(Quest::new("x".repeat(101), Rank::E, QuestKind::Daily).is_err());
    }

    #[test]
    fn test_daily_quest_stays_active() {
        let mut quest = Quest::new("Meditate".to_string(), Rank::E, QuestKind::Daily).unwrap();

        quest.record_completion(day("2026-08-05")).unwrap();
        quest.record_completion(day("2026-08-06")).unwrap();

        assert!(quest.is_active());
        assert_eq!(quest.completions.len(), 2);
        assert!(quest.completed_at.is_none());
    }

    #[test]
    fn test_one_shot_quest_completes_once() {
        let mut quest = Quest::new("Clear the dungeon".to_string(), Rank::S, QuestKind::OneShot)
            .unwrap();

        quest.record_completion(day("2026-08-06")).unwrap();

        assert!(!quest.is_active());
        assert!(quest.is_completed);
        assert!(quest.completed_at.is_some());

        // A completed one-shot quest rejects any further completion.
        let err = quest.record_completion(day("2026-08-07"));
        assert!(matches!(err, Err(DomainError::DuplicateCompletion { .. })));
    }

    #[test]
    fn test_same_day_recompletion_rejected() {
        let mut quest = Quest::new("Read".to_string(), Rank::D, QuestKind::Daily).unwrap();

        quest.record_completion(day("2026-08-06")).unwrap();
        let err = quest.record_completion(day("2026-08-06"));

        assert!(matches!(err, Err(DomainError::DuplicateCompletion { .. })));
        assert_eq!(quest.completions.len(), 1);
    }

    #[test]
    fn test_completions_serialize_as_iso_dates() {
        let mut quest = Quest::new("Journal".to_string(), Rank::E, QuestKind::Daily).unwrap();
        quest.record_completion(day("2026-08-05")).unwrap();
        quest.record_completion(day("2026-08-06")).unwrap();

        let json = serde_json::to_value(&quest).unwrap();
        assert_eq!(
            json["completions"],
            serde_json::json!(["2026-08-05", "2026-08-06"])
        );

        let back: Quest = serde_json::from_value(json).unwrap();
        assert_eq!(back, quest);
    }
}
