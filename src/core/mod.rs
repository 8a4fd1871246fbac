//! # Core Application Logic
//!
//! The dashboard's state machine and view model.
//! It knows nothing about any specific UI technology and performs no I/O
//! beyond reading its config file.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view (projection)    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  one-shot  │
//!     │  Adapter   │                          │  (stdout)  │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all dashboard state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`idiom`]: The selectable fetch idioms and their strategies
//! - [`view`]: What the results area shows, derived from `App`
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod idiom;
pub mod state;
pub mod view;
