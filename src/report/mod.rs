//! Text rendering for everything the session shows the user.
//!
//! Each function turns core data into the exact message text. Empty stores are
//! passed in as `None` and render as their empty-state message.

use crate::constants::{
    CONSISTENT_JOURNALER_MIN_ENTRIES, ENTRY_TIMESTAMP_FORMAT, GOAL_DATE_FORMAT, GRAPH_MARKER,
    POSITIVE_STREAK_MIN_POSITIVE, SEPARATOR_WIDTH,
};
use crate::diary_core::badges::{Badge, BadgeSet};
use crate::diary_core::stats::aggregate_mood_counts;
use crate::diary_core::suggestions::suggestions_for;
use crate::diary_core::{AddedEntry, Entry, Goal};

pub const NO_ENTRIES_MESSAGE: &str = "No entries to analyze.";
pub const NO_GOALS_MESSAGE: &str = "No goals set.";
pub const NO_BADGES_MESSAGE: &str = "No badges earned yet.";
pub const NO_MOOD_DATA_MESSAGE: &str = "No mood data to display.";
pub const GOAL_ADDED_MESSAGE: &str = "Goal added.";
pub const REMINDER_MESSAGE: &str =
    "Reminder: You haven't added a diary entry today. Don't forget to journal!";

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Confirmation shown right after an entry is added.
pub fn entry_added(added: &AddedEntry) -> String {
    format!(
        "Entry added. Today's mood: {}\nSuggestion: {}",
        added.entry.mood(),
        added.suggestions.join(", ")
    )
}

/// One-time notification for a newly earned badge.
pub fn badge_earned(badge: Badge) -> String {
    let reason = match badge {
        Badge::ConsistentJournaler => {
            format!("journaling for {} days", CONSISTENT_JOURNALER_MIN_ENTRIES)
        }
        Badge::PositiveStreak => format!(
            "having {} positive mood entries",
            POSITIVE_STREAK_MIN_POSITIVE
        ),
    };
    format!("You've earned the '{}' badge for {}!", badge, reason)
}

/// Per-entry date, sentiment and suggestions.
pub fn analysis(entries: Option<&[Entry]>) -> String {
    let Some(entries) = entries else {
        return NO_ENTRIES_MESSAGE.to_string();
    };

    entries
        .iter()
        .map(|entry| {
            format!(
                "Date: {}\nSentiment: {}\nSuggestion: {}\n{}\n",
                entry.timestamp().format(ENTRY_TIMESTAMP_FORMAT),
                entry.mood(),
                suggestions_for(entry.mood()).join(", "),
                separator()
            )
        })
        .collect()
}

pub fn goals(goals: Option<&[Goal]>) -> String {
    let Some(goals) = goals else {
        return NO_GOALS_MESSAGE.to_string();
    };

    goals
        .iter()
        .map(|goal| {
            format!(
                "Date: {}\nGoal: {}\n{}\n",
                goal.date().format(GOAL_DATE_FORMAT),
                goal.text(),
                separator()
            )
        })
        .collect()
}

/// Comma-joined badge names.
pub fn badges(badges: &BadgeSet) -> String {
    if badges.is_empty() {
        return NO_BADGES_MESSAGE.to_string();
    }
    badges
        .iter()
        .map(Badge::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bar chart with one marker per entry, one line per mood.
pub fn mood_graph(entries: Option<&[Entry]>) -> String {
    let Some(entries) = entries else {
        return NO_MOOD_DATA_MESSAGE.to_string();
    };

    let mut text = String::from("Mood Graph:\n");
    for (mood, count) in aggregate_mood_counts(entries).iter() {
        let bar: String = std::iter::repeat(GRAPH_MARKER).take(count).collect();
        text.push_str(&format!("{}: {}\n", mood, bar));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary_core::DiaryState;
    use chrono::{NaiveDate, NaiveDateTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 20)
            .unwrap()
            .and_hms_opt(18, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_entry_added_message() {
        let mut diary = DiaryState::new();
        let added = diary.add_entry("I feel happy and great", now());
        assert_eq!(
            entry_added(&added),
            "Entry added. Today's mood: Positive\nSuggestion: Keep up the good work!, Continue with your current activities."
        );
    }

    #[test]
    fn test_badge_earned_messages() {
        assert_eq!(
            badge_earned(Badge::ConsistentJournaler),
            "You've earned the 'Consistent Journaler' badge for journaling for 7 days!"
        );
        assert_eq!(
            badge_earned(Badge::PositiveStreak),
            "You've earned the 'Positive Streak' badge for having 5 positive mood entries!"
        );
    }

    #[test]
    fn test_badge_messages_follow_thresholds() {
        assert!(badge_earned(Badge::ConsistentJournaler)
            .contains(&format!("for {} days", CONSISTENT_JOURNALER_MIN_ENTRIES)));
        assert!(badge_earned(Badge::PositiveStreak)
            .contains(&format!("having {} positive", POSITIVE_STREAK_MIN_POSITIVE)));
    }

    #[test]
    fn test_analysis_lists_each_entry() {
        let mut diary = DiaryState::new();
        diary.add_entry("I went to the store", now());

        let expected = format!(
            "Date: 2024-04-20 18:05:09\nSentiment: Neutral\nSuggestion: Try something new or different today., Reflect on what you are grateful for.\n{}\n",
            "-".repeat(40)
        );
        assert_eq!(analysis(diary.list_entries()), expected);
    }

    #[test]
    fn test_empty_state_messages() {
        let diary = DiaryState::new();
        assert_eq!(analysis(diary.list_entries()), "No entries to analyze.");
        assert_eq!(goals(diary.list_goals()), "No goals set.");
        assert_eq!(badges(diary.badges()), "No badges earned yet.");
        assert_eq!(mood_graph(diary.list_entries()), "No mood data to display.");
    }

    #[test]
    fn test_goals_listing() {
        let mut diary = DiaryState::new();
        diary.add_goal("Run a 5k", now().date());
        diary.add_goal("Learn to cook", now().date());

        let text = goals(diary.list_goals());
        assert!(text.starts_with("Date: 2024-04-20\nGoal: Run a 5k\n"));
        assert!(text.contains("Goal: Learn to cook\n"));
        assert_eq!(text.matches(&"-".repeat(40)).count(), 2);
    }

    #[test]
    fn test_badges_are_comma_joined() {
        let mut diary = DiaryState::new();
        for _ in 0..7 {
            diary.add_entry("good", now());
        }
        assert_eq!(badges(diary.badges()), "Consistent Journaler, Positive Streak");
    }

    #[test]
    fn test_mood_graph_bars() {
        let mut diary = DiaryState::new();
        diary.add_entry("happy", now());
        diary.add_entry("joy", now());
        diary.add_entry("angry", now());

        assert_eq!(
            mood_graph(diary.list_entries()),
            "Mood Graph:\nPositive: **\nNeutral: \nNegative: *\n"
        );
    }
}
