//! Achievement badges.
//!
//! Badges are awarded by a fixed, ordered list of rules. Each rule is a plain
//! predicate over the entry history; the evaluator skips rules whose badge is
//! already held, so a badge is reported exactly once and never taken back.

use super::Entry;
use crate::constants::{CONSISTENT_JOURNALER_MIN_ENTRIES, POSITIVE_STREAK_MIN_POSITIVE};
use crate::sentiment::Mood;
use std::collections::BTreeSet;
use std::fmt;

/// The fixed set of achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Badge {
    ConsistentJournaler,
    PositiveStreak,
}

impl Badge {
    pub fn name(self) -> &'static str {
        match self {
            Badge::ConsistentJournaler => "Consistent Journaler",
            Badge::PositiveStreak => "Positive Streak",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A badge together with the condition that earns it.
pub struct BadgeRule {
    pub badge: Badge,
    pub earned: fn(&[Entry], &BadgeSet) -> bool,
}

/// Rules in evaluation order.
pub const BADGE_RULES: &[BadgeRule] = &[
    BadgeRule {
        badge: Badge::ConsistentJournaler,
        earned: journaled_enough,
    },
    BadgeRule {
        badge: Badge::PositiveStreak,
        earned: positive_enough,
    },
];

fn journaled_enough(entries: &[Entry], _: &BadgeSet) -> bool {
    entries.len() >= CONSISTENT_JOURNALER_MIN_ENTRIES
}

fn positive_enough(entries: &[Entry], _: &BadgeSet) -> bool {
    let positive = entries
        .iter()
        .filter(|e| e.mood() == Mood::Positive)
        .count();
    positive >= POSITIVE_STREAK_MIN_POSITIVE
}

/// Badges earned so far. Only ever grows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BadgeSet {
    earned: BTreeSet<Badge>,
}

impl BadgeSet {
    pub fn contains(&self, badge: Badge) -> bool {
        self.earned.contains(&badge)
    }

    pub fn is_empty(&self) -> bool {
        self.earned.is_empty()
    }

    pub fn len(&self) -> usize {
        self.earned.len()
    }

    /// Earned badges in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Badge> + '_ {
        self.earned.iter().copied()
    }

    fn award(&mut self, badge: Badge) -> bool {
        self.earned.insert(badge)
    }
}

/// Runs every rule against `entries` and adds newly earned badges to `badges`.
///
/// Returns the badges awarded by this call, in rule order.
pub fn evaluate(entries: &[Entry], badges: &mut BadgeSet) -> Vec<Badge> {
    let mut awarded = Vec::new();
    for rule in BADGE_RULES {
        if badges.contains(rule.badge) {
            continue;
        }
        if (rule.earned)(entries, badges) && badges.award(rule.badge) {
            awarded.push(rule.badge);
        }
    }
    awarded
}
