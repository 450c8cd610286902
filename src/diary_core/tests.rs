use super::*;
use chrono::NaiveDate;

fn stamp(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(hour, 30, 0)
        .unwrap()
}

#[test]
fn test_new_diary_is_empty() {
    let diary = DiaryState::new();
    assert!(diary.list_entries().is_none());
    assert!(diary.list_goals().is_none());
    assert!(diary.badges().is_empty());
}

#[test]
fn test_add_entry_records_timestamp_text_and_mood() {
    let mut diary = DiaryState::new();
    let added = diary.add_entry("I feel sad and terrible", stamp(1, 8));

    assert_eq!(added.entry.timestamp(), stamp(1, 8));
    assert_eq!(added.entry.text(), "I feel sad and terrible");
    assert_eq!(added.entry.mood(), Mood::Negative);
    assert_eq!(added.suggestions, suggestions::suggestions_for(Mood::Negative));
    assert!(added.new_badges.is_empty());
}

#[test]
fn test_add_entry_appends_in_order() {
    let mut diary = DiaryState::new();
    let texts = ["first good day", "second", "third bad day"];

    for (i, text) in texts.iter().enumerate() {
        let before = diary.list_entries().map_or(0, |e| e.len());
        diary.add_entry(text, stamp(i as u32 + 1, 9));
        let after = diary.list_entries().unwrap();
        assert_eq!(after.len(), before + 1);
    }

    let stored: Vec<&str> = diary
        .list_entries()
        .unwrap()
        .iter()
        .map(|e| e.text())
        .collect();
    assert_eq!(stored, texts);
}

#[test]
fn test_empty_entry_is_recorded_as_neutral() {
    let mut diary = DiaryState::new();
    let added = diary.add_entry("", stamp(2, 10));
    assert_eq!(added.entry.mood(), Mood::Neutral);
    assert_eq!(diary.list_entries().unwrap().len(), 1);
}

#[test]
fn test_add_goal_and_list_goals() {
    let mut diary = DiaryState::new();
    let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

    let goal = diary.add_goal("Read more books", today);
    assert_eq!(goal.date(), today);
    assert_eq!(goal.text(), "Read more books");

    diary.add_goal("Sleep before midnight", today);
    let goals: Vec<&str> = diary
        .list_goals()
        .unwrap()
        .iter()
        .map(|g| g.text())
        .collect();
    assert_eq!(goals, vec!["Read more books", "Sleep before midnight"]);
}

#[test]
fn test_goals_do_not_affect_entries_or_badges() {
    let mut diary = DiaryState::new();
    let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    for _ in 0..10 {
        diary.add_goal("be happy", today);
    }
    assert!(diary.list_entries().is_none());
    assert!(diary.badges().is_empty());
}
