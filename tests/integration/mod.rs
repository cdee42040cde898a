/// Integration tests for the quest tracker server: snapshot persistence,
/// corrupt-state recovery, and the full completion pipeline.
use chrono::NaiveDate;
use quest_tracker_mcp::*;
use tempfile::tempdir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_server_basic_workflow() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut server = QuestTrackerServer::new(dir.path().join("guild.json"))
            .await
            .expect("Failed to create server");

        let quest = Quest::new("Morning Run".to_string(), Rank::C, QuestKind::Daily).unwrap();
        let id = quest.id.clone();
        server.state_mut().add_quest(quest);

        let (state, bonus) = server.parts_mut();
        let outcome = state
            .complete_quest(&id, day("2026-08-06"), bonus)
            .expect("completion should succeed");

        // Base 35 plus a daily bonus in [10, 29].
        assert!(outcome.reward.xp >= 45 && outcome.reward.xp <= 64);
        assert_eq!(server.state().stats.completed_quests, 1);
        assert_eq!(server.state().stats.current_streak, 1);
    }

    #[tokio::test]
    async fn test_snapshot_persistence_across_sessions() {
        let dir = tempdir().expect("Failed to create temp dir");
        let snapshot_path = dir.path().join("guild.json");

        {
            let mut server = QuestTrackerServer::with_bonus_source(
                snapshot_path.clone(),
                Box::new(FixedBonus(12)),
            )
            .await
            .expect("Failed to create first server");

            let quest = Quest::new("Read".to_string(), Rank::B, QuestKind::Daily).unwrap();
            let id = quest.id.clone();
            server.state_mut().add_quest(quest);
            let (state, bonus) = server.parts_mut();
            state.complete_quest(&id, day("2026-08-06"), bonus).unwrap();
            server.persist();
        }

        // A second server over the same snapshot sees the same world.
        let server2 = QuestTrackerServer::new(snapshot_path)
            .await
            .expect("Failed to create second server");

        assert_eq!(server2.state().quests.len(), 1);
        assert_eq!(server2.state().stats.completed_quests, 1);
        assert_eq!(server2.state().stats.total_xp, 50 + 12);
        assert_eq!(server2.state().quests[0].completions.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_recovers_to_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let snapshot_path = dir.path().join("guild.json");
        std::fs::write(&snapshot_path, "this is not a snapshot").unwrap();

        let server = QuestTrackerServer::new(snapshot_path)
            .await
            .expect("corrupt snapshot must not fail the session");

        assert_eq!(server.state().stats.level, 1);
        assert_eq!(server.state().stats.hunter_rank, Rank::E);
        assert!(server.state().quests.is_empty());
    }

    #[tokio::test]
    async fn test_week_long_run_reaches_streak_tier() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut server = QuestTrackerServer::with_bonus_source(
            dir.path().join("guild.json"),
            Box::new(FixedBonus(10)),
        )
        .await
        .expect("Failed to create server");

        let quest = Quest::new("Train".to_string(), Rank::E, QuestKind::Daily).unwrap();
        let id = quest.id.clone();
        server.state_mut().add_quest(quest);

        let (state, bonus) = server.parts_mut();
        for day_of_month in 1..=7 {
            let date = NaiveDate::from_ymd_opt(2026, 8, day_of_month).unwrap();
            state.complete_quest(&id, date, bonus).unwrap();
        }

        let stats = &server.state().stats;
        assert_eq!(stats.current_streak, 7);
        assert_eq!(stats.longest_streak, 7);
        assert_eq!(stats.completed_quests, 7);
        // Six days of base 10 + bonus 10, then the seventh adds the +25 tier.
        assert_eq!(stats.total_xp, 6 * 20 + 45);
        // The week-warrior achievement is unlocked by the streak.
        assert!(stats.achievements.contains(&"week_warrior".to_string()));
    }

    #[tokio::test]
    async fn test_storage_interface() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = JsonSnapshotStore::new(dir.path().join("guild.json"))
            .expect("Failed to create store");

        // The store implements the StateStore trait.
        let _: &dyn StateStore = &store;
        assert!(store.load().unwrap().is_none());
    }
}
