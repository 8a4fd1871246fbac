//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop is synchronous: it polls crossterm, applies actions through
//! `core::action::update`, and performs the returned `Effect`. Fetches run
//! as tokio tasks and report back as `Action::FetchCompleted` over an
//! `std::sync::mpsc` channel, so `App` is only ever touched on this thread.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or completions.

mod component;
pub mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::idiom::Idiom;
use crate::core::state::App;
use crate::feed::orchestrator;
use crate::feed::{FeedSource, FetchError, Outcome};
use crate::tui::component::EventHandler;
use crate::tui::components::{ControlEvent, Controls, RacePanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub race_panel: RacePanelState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            race_panel: RacePanelState::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Everything the loop needs to turn an `Effect` into I/O.
struct Dispatcher {
    source: Arc<dyn FeedSource>,
    tx: mpsc::Sender<Action>,
}

impl Dispatcher {
    fn dispatch(&self, app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
        debug!("Dispatching: {:?}", action);
        let effect = update(app, action);
        if let Effect::SpawnFetch { idiom, generation } = effect {
            tui.race_panel.reset();
            spawn_fetch(self.source.clone(), idiom, generation, self.tx.clone());
        }
        effect
    }
}

pub fn run(config: &ResolvedConfig, source: Arc<dyn FeedSource>) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, config, source));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    config: &ResolvedConfig,
    source: Arc<dyn FeedSource>,
) -> io::Result<()> {
    let mut app = App::new(config.idiom);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let dispatcher = Dispatcher { source, tx };

    if config.fetch_on_start {
        dispatcher.dispatch(&mut app, &mut tui, Action::Select(config.idiom));
    }

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll while the spinner runs, long when idle
        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut pending = poll_event_timeout(timeout)?;
        while let Some(event) = pending.take() {
            needs_redraw = true;
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if dispatcher.dispatch(&mut app, &mut tui, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.race_panel.handle_event(&event);
                }
                TuiEvent::InputChar(_) => {
                    let mut controls = Controls::new(app.idiom, app.is_loading);
                    match controls.handle_event(&event) {
                        Some(ControlEvent::Select(idiom)) => {
                            dispatcher.dispatch(&mut app, &mut tui, Action::Select(idiom));
                        }
                        Some(ControlEvent::Rerun) => {
                            dispatcher.dispatch(&mut app, &mut tui, Action::Rerun);
                        }
                        None => {}
                    }
                }
            }
            if should_quit {
                break;
            }
            pending = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }

        // Handle background task completions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            dispatcher.dispatch(&mut app, &mut tui, action);
        }
    }

    info!("Event loop exiting");
    Ok(())
}

/// Runs one fetch for `idiom` on the tokio runtime and reports back
/// through `tx`. The callback idiom hands its result to a continuation;
/// every other idiom awaits the strategy directly.
fn spawn_fetch(
    source: Arc<dyn FeedSource>,
    idiom: Idiom,
    generation: u64,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning fetch: idiom={}, strategy={}, generation={}",
        idiom.key(),
        idiom.strategy().label(),
        generation
    );

    tokio::spawn(async move {
        let started = Instant::now();
        let report = move |result: Result<Outcome, FetchError>| {
            let action = Action::FetchCompleted {
                generation,
                result,
                elapsed: started.elapsed(),
            };
            if tx.send(action).is_err() {
                warn!(
                    "Failed to send fetch result for generation {}: receiver dropped",
                    generation
                );
            }
        };

        if idiom.is_callback() {
            orchestrator::with_callback(source.as_ref(), |result| {
                report(result.map(Outcome::Combined))
            })
            .await;
        } else {
            let result = orchestrator::fetch(source.as_ref(), idiom.strategy()).await;
            report(result);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Content;
    use crate::test_support::{StubSource, test_app};

    fn dispatcher(source: StubSource) -> (Dispatcher, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (
            Dispatcher {
                source: Arc::new(source),
                tx,
            },
            rx,
        )
    }

    async fn next_action(rx: &mpsc::Receiver<Action>) -> Action {
        loop {
            if let Ok(action) = rx.try_recv() {
                return action;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_spawns_fetch_and_reports_completion() {
        let (dispatcher, rx) = dispatcher(StubSource::new());
        let mut app = test_app();
        let mut tui = TuiState::new();

        let effect = dispatcher.dispatch(&mut app, &mut tui, Action::Select(Idiom::PromiseAll));
        assert!(matches!(effect, Effect::SpawnFetch { generation: 1, .. }));

        let action = next_action(&rx).await;
        assert!(matches!(action, Action::FetchCompleted { generation: 1, .. }));

        dispatcher.dispatch(&mut app, &mut tui, action);
        assert!(matches!(app.content, Content::Combined(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_idiom_reports_through_continuation() {
        let (dispatcher, rx) = dispatcher(StubSource::new());
        let mut app = test_app();
        let mut tui = TuiState::new();

        dispatcher.dispatch(&mut app, &mut tui, Action::Select(Idiom::Callback));
        let action = next_action(&rx).await;
        dispatcher.dispatch(&mut app, &mut tui, action);

        assert!(matches!(app.content, Content::Combined(_)));
        assert!(rx.try_recv().is_err(), "exactly one completion");
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_fetch_never_renders() {
        let source = StubSource::new()
            .weather_after(Duration::from_millis(10))
            .news_after(Duration::from_millis(10));
        let (dispatcher, rx) = dispatcher(source);
        let mut app = test_app();
        let mut tui = TuiState::new();

        dispatcher.dispatch(&mut app, &mut tui, Action::Select(Idiom::PromiseAll));
        dispatcher.dispatch(&mut app, &mut tui, Action::Select(Idiom::PromiseRace));

        let mut seen = Vec::new();
        while seen.len() < 2 {
            let action = next_action(&rx).await;
            if let Action::FetchCompleted { generation, .. } = &action {
                seen.push(*generation);
            }
            dispatcher.dispatch(&mut app, &mut tui, action);
            if app.generation == 2 && !app.is_loading {
                assert!(matches!(app.content, Content::Race(_)));
            }
        }

        assert!(seen.contains(&1) && seen.contains(&2));
        assert_eq!(app.idiom, Idiom::PromiseRace);
        assert!(matches!(app.content, Content::Race(_)));
    }
}
