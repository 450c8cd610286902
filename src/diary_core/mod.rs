//! Core diary functionality without I/O operations.
//!
//! This module owns the in-memory diary: the append-only entry and goal stores
//! and the badge set, bundled into a single [`DiaryState`]. Nothing here reads
//! the clock or touches a terminal; callers pass the current time in and render
//! the returned values themselves.

pub mod badges;
pub mod reminder;
pub mod stats;
pub mod suggestions;

use crate::sentiment::{self, Mood};
use badges::{Badge, BadgeSet};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

/// A single diary entry.
///
/// Entries are created by [`DiaryState::add_entry`] and never change afterwards;
/// the mood is computed once from the text at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    timestamp: NaiveDateTime,
    text: String,
    mood: Mood,
}

impl Entry {
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }
}

/// A personal growth goal. Goals carry no completion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    date: NaiveDate,
    text: String,
}

impl Goal {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Outcome of adding an entry: the entry itself, the suggestions for its mood,
/// and any badges this addition unlocked.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedEntry {
    pub entry: Entry,
    pub suggestions: &'static [&'static str],
    pub new_badges: Vec<Badge>,
}

/// All diary state for one session.
///
/// # Examples
///
/// ```
/// use mooddiary::diary_core::DiaryState;
/// use mooddiary::sentiment::Mood;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .unwrap()
///     .and_hms_opt(21, 15, 0)
///     .unwrap();
///
/// let mut diary = DiaryState::new();
/// assert!(diary.list_entries().is_none());
///
/// let added = diary.add_entry("A good day with great friends", now);
/// assert_eq!(added.entry.mood(), Mood::Positive);
/// assert_eq!(diary.list_entries().map(|e| e.len()), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct DiaryState {
    entries: Vec<Entry>,
    goals: Vec<Goal>,
    badges: BadgeSet,
}

impl DiaryState {
    /// Creates an empty diary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new entry stamped with `now`, then runs badge evaluation.
    pub fn add_entry(&mut self, text: &str, now: NaiveDateTime) -> AddedEntry {
        let mood = sentiment::classify(text);
        let entry = Entry {
            timestamp: now,
            text: text.to_string(),
            mood,
        };
        self.entries.push(entry.clone());
        info!(mood = %mood, total_entries = self.entries.len(), "Entry added");

        let new_badges = badges::evaluate(&self.entries, &mut self.badges);
        for badge in &new_badges {
            info!(badge = %badge, "Badge awarded");
        }

        AddedEntry {
            entry,
            suggestions: suggestions::suggestions_for(mood),
            new_badges,
        }
    }

    /// Entries in insertion order, or `None` if nothing has been written yet.
    pub fn list_entries(&self) -> Option<&[Entry]> {
        if self.entries.is_empty() {
            debug!("Entry store is empty");
            None
        } else {
            Some(&self.entries)
        }
    }

    /// Records a new goal dated `today`.
    pub fn add_goal(&mut self, text: &str, today: NaiveDate) -> &Goal {
        self.goals.push(Goal {
            date: today,
            text: text.to_string(),
        });
        info!(total_goals = self.goals.len(), "Goal added");
        &self.goals[self.goals.len() - 1]
    }

    /// Goals in insertion order, or `None` if no goal has been set.
    pub fn list_goals(&self) -> Option<&[Goal]> {
        if self.goals.is_empty() {
            debug!("Goal store is empty");
            None
        } else {
            Some(&self.goals)
        }
    }

    pub fn badges(&self) -> &BadgeSet {
        &self.badges
    }

    /// Whether the startup reminder should be shown for `today`.
    pub fn needs_reminder(&self, today: NaiveDate) -> bool {
        reminder::needs_reminder(&self.entries, today)
    }
}

#[cfg(test)]
mod tests;
