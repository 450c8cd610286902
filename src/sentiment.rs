//! Keyword-count mood classification.
//!
//! Text is lowercased, split on whitespace and each token is checked against two
//! fixed keyword sets. Whichever set has more hits decides the mood; a tie
//! (including no hits at all) is `Neutral`. Tokens match exactly, so `happy,`
//! with a trailing comma does not count as `happy`.

use std::fmt;

/// Words counted towards a positive mood.
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "joy",
    "love",
    "great",
    "fantastic",
    "good",
    "excited",
];

/// Words counted towards a negative mood.
pub const NEGATIVE_WORDS: &[&str] = &["sad", "angry", "hate", "terrible", "bad", "depressed"];

/// Coarse mood label attached to every diary entry.
///
/// Variants are declared in display order, which is also the order used by
/// [`Mood::ALL`] and the mood graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

impl Mood {
    /// All moods in display order.
    pub const ALL: [Mood; 3] = [Mood::Positive, Mood::Neutral, Mood::Negative];

    /// Position of this mood within [`Mood::ALL`].
    pub fn index(self) -> usize {
        match self {
            Mood::Positive => 0,
            Mood::Neutral => 1,
            Mood::Negative => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Positive => "Positive",
            Mood::Neutral => "Neutral",
            Mood::Negative => "Negative",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies free text into a [`Mood`].
///
/// # Examples
///
/// ```
/// use mooddiary::sentiment::{classify, Mood};
///
/// assert_eq!(classify("I feel happy and great"), Mood::Positive);
/// assert_eq!(classify("I feel sad and terrible"), Mood::Negative);
/// assert_eq!(classify("I went to the store"), Mood::Neutral);
/// assert_eq!(classify(""), Mood::Neutral);
/// ```
pub fn classify(text: &str) -> Mood {
    let lowered = text.to_lowercase();

    let mut positive = 0usize;
    let mut negative = 0usize;
    for token in lowered.split_whitespace() {
        if POSITIVE_WORDS.contains(&token) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&token) {
            negative += 1;
        }
    }

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Mood::Positive,
        std::cmp::Ordering::Less => Mood::Negative,
        std::cmp::Ordering::Equal => Mood::Neutral,
    }
}
