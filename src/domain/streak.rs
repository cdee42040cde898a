/// Streak calculation
///
/// A streak is the number of consecutive calendar days, ending at a reference
/// date, on which at least one qualifying completion exists. The same walk is
/// used per-quest (one quest's completion days) and globally (the union of
/// completion days across all quests).

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use crate::domain::Quest;

/// Length of the contiguous daily streak ending at `reference`
///
/// Walks backward one calendar day at a time and counts consecutive days
/// present in `dates`, stopping at the first gap. Returns 0 when `reference`
/// itself is absent. Dates are calendar days; time of day never enters into
/// it.
pub fn streak_ending_at(dates: &BTreeSet<NaiveDate>, reference: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = reference;

    while dates.contains(&cursor) {
        streak += 1;
        cursor = cursor - Duration::days(1);
    }

    streak
}

/// Union of completion days across all quests
///
/// The global streak counts a day once no matter how many quests were
/// completed on it.
pub fn global_completion_days(quests: &[Quest]) -> BTreeSet<NaiveDate> {
    quests
        .iter()
        .flat_map(|quest| quest.completions.iter().copied())
        .collect()
}

/// Global streak across all quests, ending at `reference`
pub fn global_streak(quests: &[Quest], reference: NaiveDate) -> u32 {
    streak_ending_at(&global_completion_days(quests), reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QuestKind, Rank};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn days(strs: &[&str]) -> BTreeSet<NaiveDate> {
        strs.iter().map(|s| day(s)).collect()
    }

    #[test]
    fn test_empty_set_has_no_streak() {
        assert_eq!(streak_ending_at(&BTreeSet::new(), day("2026-08-06")), 0);
    }

    #[test]
    fn test_zero_iff_reference_absent() {
        let dates = days(&["2026-08-04", "2026-08-05"]);

        // Reference day missing: streak is 0 even though earlier days exist.
        assert_eq!(streak_ending_at(&dates, day("2026-08-06")), 0);
        // Reference day present: counts back from there.
        assert_eq!(streak_ending_at(&dates, day("2026-08-05")), 2);
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        let dates = days(&["2026-08-01", "2026-08-02", "2026-08-04", "2026-08-05", "2026-08-06"]);

        assert_eq!(streak_ending_at(&dates, day("2026-08-06")), 3);
    }

    #[test]
    fn test_removing_day_before_streak_start_never_increases() {
        let with = days(&["2026-08-02", "2026-08-04", "2026-08-05", "2026-08-06"]);
        let without = days(&["2026-08-04", "2026-08-05", "2026-08-06"]);

        let reference = day("2026-08-06");
        assert!(streak_ending_at(&without, reference) <= streak_ending_at(&with, reference));
        assert_eq!(streak_ending_at(&without, reference), 3);
    }

    #[test]
    fn test_global_streak_is_a_union_not_a_sum() {
        let mut run = Quest::new("Run".to_string(), Rank::C, QuestKind::Daily).unwrap();
        let mut read = Quest::new("Read".to_string(), Rank::E, QuestKind::Daily).unwrap();

        // Both quests done on the same two days; alternating coverage after.
        run.completions = days(&["2026-08-04", "2026-08-05"]);
        read.completions = days(&["2026-08-04", "2026-08-05", "2026-08-06"]);

        let quests = vec![run, read];
        assert_eq!(global_streak(&quests, day("2026-08-06")), 3);

        // One quest alone only covers its own days.
        assert_eq!(global_streak(&quests[..1], day("2026-08-05")), 2);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let dates = days(&["2026-07-30", "2026-07-31", "2026-08-01"]);

        assert_eq!(streak_ending_at(&dates, day("2026-08-01")), 3);
    }
}
