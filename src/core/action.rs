//! # Actions
//!
//! Everything that can happen in the dashboard becomes an `Action`.
//! User presses `3`? That's `Action::Select(Idiom::PromiseChain)`.
//! Fetch task finishes? That's `Action::FetchCompleted { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the caller should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Duration;

use chrono::Local;
use log::{debug, info};

use crate::core::idiom::Idiom;
use crate::core::state::{App, Content};
use crate::feed::{FetchError, Outcome};

#[derive(Debug)]
pub enum Action {
    /// User picked an idiom. Clears everything and starts a fetch.
    Select(Idiom),
    /// Re-run the currently selected idiom.
    Rerun,
    /// A fetch spawned for `generation` finished.
    FetchCompleted {
        generation: u64,
        result: Result<Outcome, FetchError>,
        elapsed: Duration,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a fetch for `idiom`, tagging its completion with `generation`.
    SpawnFetch { idiom: Idiom, generation: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Select(idiom) => begin_fetch(app, idiom),
        Action::Rerun => {
            let idiom = app.idiom;
            begin_fetch(app, idiom)
        }
        Action::FetchCompleted {
            generation,
            result,
            elapsed,
        } => {
            if generation != app.generation {
                debug!(
                    "Ignoring stale completion (generation {} != current {})",
                    generation, app.generation
                );
                return Effect::None;
            }
            app.is_loading = false;
            app.last_elapsed = Some(elapsed);
            app.last_fetched_at = Some(Local::now());
            match result {
                Ok(outcome) => {
                    app.content = Content::from(outcome);
                    app.status_message =
                        format!("{} finished in {}ms", app.idiom.key(), elapsed.as_millis());
                }
                Err(e) => {
                    app.content = Content::Failed(e.to_string());
                    app.status_message = format!("{} failed", app.idiom.key());
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn begin_fetch(app: &mut App, idiom: Idiom) -> Effect {
    info!("========== Fetching with {} ==========", idiom.key().to_uppercase());
    // Prior result and error go before anything else can render
    app.content = Content::Empty;
    app.idiom = idiom;
    app.is_loading = true;
    app.generation += 1;
    app.last_elapsed = None;
    app.status_message = format!("Fetching with {}...", idiom.label());
    Effect::SpawnFetch {
        idiom,
        generation: app.generation,
    }
}
