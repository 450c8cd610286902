//! Interactive command loop.
//!
//! A session owns one [`DiaryState`] for its whole lifetime. It reads one
//! command per line, runs it to completion, writes the result and only then
//! reads the next line. Input and output are generic so tests can drive a
//! session from an in-memory buffer.

use crate::constants::COMMAND_PROMPT;
use crate::diary_core::suggestions::random_tip;
use crate::diary_core::DiaryState;
use crate::errors::AppResult;
use crate::report;
use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const MENU: &str = "\
Personal Diary
  1. add [text]   Add Entry
  2. analyze      Analyze Entries
  3. goal [text]  Add Goal
  4. goals        View Goals
  5. badges       View Achievement Badges
  6. tip          Get Mood-Boosting Tip
  7. graph        View Mood Graph
  8. exit         Exit";

const UNKNOWN_COMMAND_HINT: &str = "Type 'help' to see the available commands.";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add an entry, with the text given inline if present.
    AddEntry(Option<String>),
    Analyze,
    /// Add a goal, with the text given inline if present.
    AddGoal(Option<String>),
    ViewGoals,
    ViewBadges,
    Tip,
    Graph,
    Help,
    Exit,
    Unknown(String),
}

impl SessionCommand {
    /// Parses a command line. Returns `None` for blank lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use mooddiary::session::SessionCommand;
    ///
    /// assert_eq!(
    ///     SessionCommand::parse("add a good day"),
    ///     Some(SessionCommand::AddEntry(Some("a good day".to_string())))
    /// );
    /// assert_eq!(SessionCommand::parse("7"), Some(SessionCommand::Graph));
    /// assert_eq!(SessionCommand::parse("   "), None);
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim().to_string())),
            None => (line, None),
        };

        let command = match word.to_lowercase().as_str() {
            "1" | "add" | "entry" => SessionCommand::AddEntry(rest),
            "2" | "analyze" => SessionCommand::Analyze,
            "3" | "goal" => SessionCommand::AddGoal(rest),
            "4" | "goals" => SessionCommand::ViewGoals,
            "5" | "badges" => SessionCommand::ViewBadges,
            "6" | "tip" => SessionCommand::Tip,
            "7" | "graph" => SessionCommand::Graph,
            "8" | "exit" | "quit" => SessionCommand::Exit,
            "?" | "help" => SessionCommand::Help,
            other => SessionCommand::Unknown(other.to_string()),
        };
        Some(command)
    }

    /// Short name used in logs. Never includes user text.
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::AddEntry(_) => "add_entry",
            SessionCommand::Analyze => "analyze",
            SessionCommand::AddGoal(_) => "add_goal",
            SessionCommand::ViewGoals => "view_goals",
            SessionCommand::ViewBadges => "view_badges",
            SessionCommand::Tip => "tip",
            SessionCommand::Graph => "graph",
            SessionCommand::Help => "help",
            SessionCommand::Exit => "exit",
            SessionCommand::Unknown(_) => "unknown",
        }
    }
}

/// An interactive diary session over a line-based input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    diary: DiaryState,
    rng: StdRng,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty diary and the local wall clock.
    pub fn new(input: R, output: W, rng: StdRng) -> Self {
        Session {
            input,
            output,
            diary: DiaryState::new(),
            rng,
            clock: local_now,
        }
    }

    /// Replaces the clock used to stamp entries and goals.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Starts the session from an existing diary instead of an empty one.
    pub fn with_diary(mut self, diary: DiaryState) -> Self {
        self.diary = diary;
        self
    }

    pub fn diary(&self) -> &DiaryState {
        &self.diary
    }

    /// Runs the startup reminder check, then handles commands until `exit` or
    /// end of input.
    pub fn run(&mut self) -> AppResult<()> {
        self.say(MENU)?;

        let today = (self.clock)().date();
        if self.diary.needs_reminder(today) {
            info!("Showing daily reminder");
            self.say(report::REMINDER_MESSAGE)?;
        }

        loop {
            write!(self.output, "{}", COMMAND_PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("End of input, closing session");
                break;
            };
            let Some(command) = SessionCommand::parse(&line) else {
                continue;
            };

            debug!(command = command.name(), "Handling command");
            if command == SessionCommand::Exit {
                break;
            }
            self.handle(command)?;
        }

        info!(
            entries = self.diary.list_entries().map_or(0, |e| e.len()),
            goals = self.diary.list_goals().map_or(0, |g| g.len()),
            "Session ended"
        );
        Ok(())
    }

    /// Executes a single command against the diary.
    pub fn handle(&mut self, command: SessionCommand) -> AppResult<()> {
        match command {
            SessionCommand::AddEntry(text) => {
                let Some(text) = self.text_or_prompt(text, "Enter diary entry:")? else {
                    debug!("Entry cancelled");
                    return Ok(());
                };
                let added = self.diary.add_entry(&text, (self.clock)());
                // Badge notices come before the entry confirmation.
                for badge in &added.new_badges {
                    self.say(&report::badge_earned(*badge))?;
                }
                self.say(&report::entry_added(&added))?;
            }
            SessionCommand::Analyze => {
                let text = report::analysis(self.diary.list_entries());
                self.say(&text)?;
            }
            SessionCommand::AddGoal(text) => {
                let Some(text) = self.text_or_prompt(text, "Enter personal growth goal:")? else {
                    debug!("Goal cancelled");
                    return Ok(());
                };
                let today = (self.clock)().date();
                self.diary.add_goal(&text, today);
                self.say(report::GOAL_ADDED_MESSAGE)?;
            }
            SessionCommand::ViewGoals => {
                let text = report::goals(self.diary.list_goals());
                self.say(&text)?;
            }
            SessionCommand::ViewBadges => {
                let text = report::badges(self.diary.badges());
                self.say(&text)?;
            }
            SessionCommand::Tip => {
                let tip = random_tip(&mut self.rng);
                self.say(tip)?;
            }
            SessionCommand::Graph => {
                let text = report::mood_graph(self.diary.list_entries());
                self.say(&text)?;
            }
            SessionCommand::Help => self.say(MENU)?,
            SessionCommand::Exit => {}
            SessionCommand::Unknown(word) => {
                warn!(command = %word, "Unknown session command");
                self.say(&format!("Unknown command '{}'. {}", word, UNKNOWN_COMMAND_HINT))?;
            }
        }
        Ok(())
    }

    /// Uses inline text when given, otherwise prompts for it.
    ///
    /// Returns `None` when the prompt hits end of input, which counts as a
    /// cancellation. An empty line is valid text.
    fn text_or_prompt(&mut self, inline: Option<String>, prompt: &str) -> AppResult<Option<String>> {
        if inline.is_some() {
            return Ok(inline);
        }
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) -> AppResult<()> {
        if text.ends_with('\n') {
            write!(self.output, "{}", text)?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }
}
