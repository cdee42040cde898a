/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like QuestId, Rank, and QuestKind
/// that are used by Quest, PlayerStats, and other domain entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a quest
///
/// This is a wrapper around UUID to provide type safety - a quest id can't be
/// mixed up with any other string floating through the tool layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub Uuid);

impl QuestId {
    /// Generate a new random quest ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a quest ID from a string (useful when parsing tool arguments)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Difficulty tier of a quest and overall tier of the hunter
///
/// Ranks are strictly ordered E < D < C < B < A < S. A quest's rank is fixed
/// at creation and fully determines its base XP reward; the hunter's rank is
/// driven by level thresholds and only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rank {
    /// Base XP granted per completion of a quest of this rank
    pub fn xp_reward(self) -> u64 {
        match self {
            Rank::E => 10,
            Rank::D => 20,
            Rank::C => 35,
            Rank::B => 50,
            Rank::A => 80,
            Rank::S => 120,
        }
    }

    /// The next rank up, if any
    pub fn next(self) -> Option<Rank> {
        match self {
            Rank::E => Some(Rank::D),
            Rank::D => Some(Rank::C),
            Rank::C => Some(Rank::B),
            Rank::B => Some(Rank::A),
            Rank::A => Some(Rank::S),
            Rank::S => None,
        }
    }

    /// Minimum hunter level required to hold this rank
    pub fn promotion_floor(self) -> u32 {
        match self {
            Rank::E => 1,
            Rank::D => 10,
            Rank::C => 20,
            Rank::B => 30,
            Rank::A => 40,
            Rank::S => 50,
        }
    }

    /// Hunter title that comes with this rank
    pub fn title(self) -> &'static str {
        match self {
            Rank::E => "Novice Hunter",
            Rank::D => "Apprentice Hunter",
            Rank::C => "Adept Hunter",
            Rank::B => "Elite Hunter",
            Rank::A => "Master Hunter",
            Rank::S => "Shadow Monarch",
        }
    }

    /// Parse a rank from a tool argument string (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, crate::domain::DomainError> {
        match s.trim().to_uppercase().as_str() {
            "E" => Ok(Rank::E),
            "D" => Ok(Rank::D),
            "C" => Ok(Rank::C),
            "B" => Ok(Rank::B),
            "A" => Ok(Rank::A),
            "S" => Ok(Rank::S),
            other => Err(crate::domain::DomainError::InvalidRank(other.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        };
        f.write_str(s)
    }
}

/// Whether a quest repeats or completes once
///
/// The daily variant accumulates one completion per calendar day; the
/// one-shot variant moves to the completed bucket after a single completion
/// and is excluded from active quest lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestKind {
    Daily,
    OneShot,
}

impl QuestKind {
    /// Parse a kind from a tool argument string
    pub fn parse(s: &str) -> Result<Self, crate::domain::DomainError> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(QuestKind::Daily),
            "one_shot" | "oneshot" | "one-shot" => Ok(QuestKind::OneShot),
            other => Err(crate::domain::DomainError::Validation {
                message: format!("Invalid quest kind '{}'. Valid options: daily, one_shot", other),
            }),
        }
    }
}

/// Preferred time of day for a quest - display metadata only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Any,
}

impl TimeOfDay {
    /// Parse a time of day from a tool argument string
    pub fn parse(s: &str) -> Result<Self, crate::domain::DomainError> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            "any" => Ok(TimeOfDay::Any),
            other => Err(crate::domain::DomainError::Validation {
                message: format!(
                    "Invalid time of day '{}'. Valid options: morning, afternoon, evening, any",
                    other
                ),
            }),
        }
    }
}
