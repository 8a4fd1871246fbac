//! # TUI Components
//!
//! All UI components for the dashboard.
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top line with dashboard name and status message
//! - `Controls`: Idiom buttons grouped by style; also maps hotkeys
//! - `StatusPanel`: Current pattern, loading spinner, error line
//! - `WeatherPanel`, `NewsPanel`: The combined result
//!
//! ## Stateful Components
//!
//! - `RacePanel`: Race winner payload in a scroll view; offset lives in
//!   `RacePanelState`
//!
//! Components receive external data as props, never by reaching into
//! `App`, so each can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── controls.rs
//! ├── status_panel.rs
//! ├── weather_panel.rs
//! ├── news_panel.rs
//! └── race_panel.rs
//! ```

pub mod controls;
pub mod news_panel;
pub mod race_panel;
pub mod status_panel;
mod title_bar;
pub mod weather_panel;

pub use controls::{ControlEvent, Controls};
pub use news_panel::NewsPanel;
pub use race_panel::{RacePanel, RacePanelState};
pub use status_panel::StatusPanel;
pub use title_bar::TitleBar;
pub use weather_panel::WeatherPanel;
