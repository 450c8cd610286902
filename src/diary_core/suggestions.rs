//! Fixed suggestion table and mood-boosting tips.

use crate::sentiment::Mood;
use rand::seq::SliceRandom;
use rand::Rng;

/// Suggestions shown when no table row matches a mood.
pub const FALLBACK_SUGGESTIONS: &[&str] = &["No suggestions available"];

/// Suggestions keyed by mood.
pub const SUGGESTIONS: &[(Mood, &[&str])] = &[
    (
        Mood::Positive,
        &[
            "Keep up the good work!",
            "Continue with your current activities.",
        ],
    ),
    (
        Mood::Negative,
        &[
            "Try going for a walk.",
            "Consider talking to a friend or family member.",
            "Engage in a hobby you enjoy.",
        ],
    ),
    (
        Mood::Neutral,
        &[
            "Try something new or different today.",
            "Reflect on what you are grateful for.",
        ],
    ),
];

/// Mood-boosting tips, one of which is picked at random on request.
pub const MOOD_BOOSTING_TIPS: &[&str] = &[
    "Take a short walk outside.",
    "Listen to your favorite music.",
    "Try meditation or deep breathing exercises.",
    "Write down three things you're grateful for.",
    "Reach out to a friend or loved one.",
];

/// Looks up the suggestions for `mood`, falling back to [`FALLBACK_SUGGESTIONS`].
pub fn suggestions_for(mood: Mood) -> &'static [&'static str] {
    lookup(SUGGESTIONS, mood)
}

fn lookup(table: &[(Mood, &'static [&'static str])], mood: Mood) -> &'static [&'static str] {
    table
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, s)| *s)
        .unwrap_or(FALLBACK_SUGGESTIONS)
}

/// Picks one tip from [`MOOD_BOOSTING_TIPS`].
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOOD_BOOSTING_TIPS
        .choose(rng)
        .copied()
        .unwrap_or(MOOD_BOOSTING_TIPS[0])
}
