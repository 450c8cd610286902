//! Mood aggregation for the mood graph.

use super::Entry;
use crate::sentiment::Mood;

/// Number of entries per mood, always covering all three moods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodCounts {
    counts: [usize; 3],
}

impl MoodCounts {
    pub fn get(&self, mood: Mood) -> usize {
        self.counts[mood.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(mood, count)` pairs in display order: Positive, Neutral, Negative.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        Mood::ALL.into_iter().map(move |mood| (mood, self.get(mood)))
    }
}

/// Counts entries per mood. Moods without entries count as zero.
///
/// # Examples
///
/// ```
/// use mooddiary::diary_core::stats::aggregate_mood_counts;
/// use mooddiary::sentiment::Mood;
///
/// let counts = aggregate_mood_counts(&[]);
/// assert_eq!(counts.get(Mood::Neutral), 0);
/// assert_eq!(counts.total(), 0);
/// ```
pub fn aggregate_mood_counts(entries: &[Entry]) -> MoodCounts {
    let mut counts = MoodCounts::default();
    for entry in entries {
        counts.counts[entry.mood().index()] += 1;
    }
    counts
}
