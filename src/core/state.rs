//! # Application State
//!
//! Core dashboard state. Domain logic only; presentation state (scroll
//! offsets, spinner frames) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── idiom: Idiom                         // current selection
//! ├── content: Content                     // Empty | Combined | Race | Failed
//! ├── is_loading: bool                     // fetch in flight
//! ├── generation: u64                      // bumped on every selection
//! ├── status_message: String               // status line text
//! ├── last_elapsed: Option<Duration>       // how long the last fetch took
//! └── last_fetched_at: Option<DateTime>    // when it completed
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::core::idiom::Idiom;
use crate::feed::{CombinedResult, Outcome, RaceResult};

/// What the results area is showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    /// Nothing fetched yet (or cleared for a new fetch).
    #[default]
    Empty,
    Combined(CombinedResult),
    Race(RaceResult),
    /// Last fetch failed with this message.
    Failed(String),
}

impl From<Outcome> for Content {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Combined(c) => Content::Combined(c),
            Outcome::Race(r) => Content::Race(r),
        }
    }
}

/// Shell lifecycle, derived from `App`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

pub struct App {
    pub idiom: Idiom,
    pub content: Content,
    pub is_loading: bool,
    /// Identifies the most recent selection. Completions from older
    /// generations are discarded.
    pub generation: u64,
    pub status_message: String,
    pub last_elapsed: Option<Duration>,
    pub last_fetched_at: Option<DateTime<Local>>,
}

impl App {
    pub fn new(idiom: Idiom) -> Self {
        Self {
            idiom,
            content: Content::Empty,
            is_loading: false,
            generation: 0,
            status_message: String::from("Select an async pattern (1-9)"),
            last_elapsed: None,
            last_fetched_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            return Phase::Loading;
        }
        match self.content {
            Content::Empty => Phase::Idle,
            Content::Failed(_) => Phase::Error,
            Content::Combined(_) | Content::Race(_) => Phase::Success,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.content {
            Content::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
