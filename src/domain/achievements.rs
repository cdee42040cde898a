/// Achievement catalog and evaluator
///
/// Achievements are a closed catalog, each keyed by exactly one progression
/// metric. Unlock state is a pure function of the current snapshot - the
/// evaluator never mutates anything and recomputes everything on each call.

use serde::Serialize;

use crate::domain::{PlayerStats, Quest};

/// The one metric an achievement measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Lifetime completion events
    Completions,
    /// Best global streak
    LongestStreak,
    /// Hunter level
    Level,
    /// Number of quests ever created and still tracked
    QuestCount,
    /// Lifetime XP
    TotalXp,
}

/// Display tier of an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Legendary,
}

/// One achievement definition in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub metric: Metric,
    pub requirement: u64,
    pub xp_reward: u64,
    pub tier: Tier,
}

/// The full catalog, in definition order
pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "first_streak",
        name: "First Steps",
        description: "Complete your first quest",
        metric: Metric::Completions,
        requirement: 1,
        xp_reward: 50,
        tier: Tier::Bronze,
    },
    AchievementDef {
        id: "week_warrior",
        name: "Week Warrior",
        description: "Maintain a 7-day streak",
        metric: Metric::LongestStreak,
        requirement: 7,
        xp_reward: 100,
        tier: Tier::Bronze,
    },
    AchievementDef {
        id: "month_master",
        name: "Month Master",
        description: "Maintain a 30-day streak",
        metric: Metric::LongestStreak,
        requirement: 30,
        xp_reward: 300,
        tier: Tier::Silver,
    },
    AchievementDef {
        id: "legend_streak",
        name: "Legendary Streak",
        description: "Maintain a 100-day streak",
        metric: Metric::LongestStreak,
        requirement: 100,
        xp_reward: 1000,
        tier: Tier::Legendary,
    },
    AchievementDef {
        id: "century_club",
        name: "Century Club",
        description: "Complete 100 quests",
        metric: Metric::Completions,
        requirement: 100,
        xp_reward: 500,
        tier: Tier::Silver,
    },
    AchievementDef {
        id: "thousand_hero",
        name: "Thousand Hero",
        description: "Complete 1000 quests",
        metric: Metric::Completions,
        requirement: 1000,
        xp_reward: 2000,
        tier: Tier::Legendary,
    },
    AchievementDef {
        id: "level_up",
        name: "Rising Star",
        description: "Reach level 5",
        metric: Metric::Level,
        requirement: 5,
        xp_reward: 200,
        tier: Tier::Bronze,
    },
    AchievementDef {
        id: "veteran",
        name: "Veteran Hero",
        description: "Reach level 20",
        metric: Metric::Level,
        requirement: 20,
        xp_reward: 800,
        tier: Tier::Gold,
    },
    AchievementDef {
        id: "grandmaster",
        name: "Grandmaster",
        description: "Reach level 50",
        metric: Metric::Level,
        requirement: 50,
        xp_reward: 2500,
        tier: Tier::Legendary,
    },
    AchievementDef {
        id: "quest_collector",
        name: "Quest Collector",
        description: "Create 5 different quests",
        metric: Metric::QuestCount,
        requirement: 5,
        xp_reward: 150,
        tier: Tier::Bronze,
    },
    AchievementDef {
        id: "quest_master",
        name: "Quest Master",
        description: "Create 10 different quests",
        metric: Metric::QuestCount,
        requirement: 10,
        xp_reward: 400,
        tier: Tier::Silver,
    },
    AchievementDef {
        id: "xp_novice",
        name: "XP Novice",
        description: "Earn 1,000 total XP",
        metric: Metric::TotalXp,
        requirement: 1000,
        xp_reward: 100,
        tier: Tier::Bronze,
    },
    AchievementDef {
        id: "xp_champion",
        name: "XP Champion",
        description: "Earn 10,000 total XP",
        metric: Metric::TotalXp,
        requirement: 10_000,
        xp_reward: 1000,
        tier: Tier::Gold,
    },
];

/// Unlock state and progress of one achievement for the current snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementStatus {
    pub def: &'static AchievementDef,
    pub unlocked: bool,
    /// Current metric value clamped to the requirement
    pub progress: u64,
}

fn metric_value(metric: Metric, stats: &PlayerStats, quests: &[Quest]) -> u64 {
    match metric {
        Metric::Completions => stats.completed_quests as u64,
        Metric::LongestStreak => stats.longest_streak as u64,
        Metric::Level => stats.level as u64,
        Metric::QuestCount => quests.len() as u64,
        Metric::TotalXp => stats.total_xp,
    }
}

/// Evaluate every achievement against the current snapshot
///
/// Stateless and idempotent. The result is stable-sorted with unlocked
/// achievements first; within each group the catalog order is preserved.
pub fn evaluate(stats: &PlayerStats, quests: &[Quest]) -> Vec<AchievementStatus> {
    let mut statuses: Vec<AchievementStatus> = CATALOG
        .iter()
        .map(|def| {
            let value = metric_value(def.metric, stats, quests);
            AchievementStatus {
                def,
                unlocked: value >= def.requirement,
                progress: value.min(def.requirement),
            }
        })
        .collect();

    statuses.sort_by_key(|status| !status.unlocked);
    statuses
}

/// Ids of the achievements unlocked by the current snapshot
pub fn unlocked_ids(stats: &PlayerStats, quests: &[Quest]) -> Vec<String> {
    evaluate(stats, quests)
        .into_iter()
        .filter(|status| status.unlocked)
        .map(|status| status.def.id.to_string())
        .collect()
}
