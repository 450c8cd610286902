//! Daily journaling reminder.

use super::Entry;
use chrono::NaiveDate;
use tracing::debug;

/// Returns true when the latest entry was written on a day other than `today`.
///
/// With no entries at all there is nothing to be reminded about, so this
/// returns false.
pub fn needs_reminder(entries: &[Entry], today: NaiveDate) -> bool {
    let Some(last) = entries.last() else {
        debug!("No entries yet, skipping reminder");
        return false;
    };

    let last_date = last.timestamp().date();
    let stale = last_date != today;
    debug!(%last_date, %today, stale, "Checked daily reminder");
    stale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary_core::DiaryState;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    #[test]
    fn test_no_entries_no_reminder() {
        assert!(!needs_reminder(&[], day(1)));
    }

    #[test]
    fn test_entry_today_no_reminder() {
        let mut diary = DiaryState::new();
        diary.add_entry("morning pages", day(3).and_hms_opt(0, 0, 1).unwrap());
        assert!(!diary.needs_reminder(day(3)));
    }

    #[test]
    fn test_stale_entry_triggers_reminder() {
        let mut diary = DiaryState::new();
        diary.add_entry("late night", day(2).and_hms_opt(23, 59, 59).unwrap());
        assert!(diary.needs_reminder(day(3)));
    }

    #[test]
    fn test_only_most_recent_entry_counts() {
        let mut diary = DiaryState::new();
        diary.add_entry("today", day(5).and_hms_opt(8, 0, 0).unwrap());
        diary.add_entry("backdated", day(1).and_hms_opt(8, 0, 0).unwrap());
        assert!(diary.needs_reminder(day(5)));
    }
}
