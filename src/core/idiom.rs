//! # Fetch Idioms
//!
//! The nine ways the dashboard can be asked to fetch. They differ only in
//! name and grouping; each maps onto one [`Strategy`]. The callback idiom is
//! special-cased by the caller so its result goes through a continuation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::feed::Strategy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Idiom {
    #[default]
    Callback,
    Promise,
    PromiseChain,
    PromiseAll,
    PromiseRace,
    Async,
    AsyncSequential,
    AsyncParallel,
    AsyncRace,
}

/// Button groups, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdiomGroup {
    Callbacks,
    Promises,
    AsyncAwait,
}

impl IdiomGroup {
    pub const ALL: [IdiomGroup; 3] = [IdiomGroup::Callbacks, IdiomGroup::Promises, IdiomGroup::AsyncAwait];

    pub fn title(&self) -> &'static str {
        match self {
            IdiomGroup::Callbacks => "Callbacks",
            IdiomGroup::Promises => "Promises",
            IdiomGroup::AsyncAwait => "Async/Await",
        }
    }

    pub fn idioms(self) -> impl Iterator<Item = Idiom> {
        Idiom::ALL.into_iter().filter(move |i| i.group() == self)
    }
}

impl Idiom {
    /// All idioms; position + 1 is the key binding.
    pub const ALL: [Idiom; 9] = [
        Idiom::Callback,
        Idiom::Promise,
        Idiom::PromiseChain,
        Idiom::PromiseAll,
        Idiom::PromiseRace,
        Idiom::Async,
        Idiom::AsyncSequential,
        Idiom::AsyncParallel,
        Idiom::AsyncRace,
    ];

    pub fn strategy(&self) -> Strategy {
        match self {
            Idiom::Callback | Idiom::PromiseChain | Idiom::AsyncSequential => Strategy::Sequential,
            // The plain variants build both requests before waiting on either
            Idiom::Promise | Idiom::PromiseAll | Idiom::Async | Idiom::AsyncParallel => {
                Strategy::ConcurrentAll
            }
            Idiom::PromiseRace | Idiom::AsyncRace => Strategy::Race,
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self, Idiom::Callback)
    }

    pub fn group(&self) -> IdiomGroup {
        match self {
            Idiom::Callback => IdiomGroup::Callbacks,
            Idiom::Promise | Idiom::PromiseChain | Idiom::PromiseAll | Idiom::PromiseRace => {
                IdiomGroup::Promises
            }
            Idiom::Async | Idiom::AsyncSequential | Idiom::AsyncParallel | Idiom::AsyncRace => {
                IdiomGroup::AsyncAwait
            }
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Idiom::Callback => "Callback Version",
            Idiom::Promise => "Promise",
            Idiom::PromiseChain => "Promise Chain",
            Idiom::PromiseAll => "Promise.all()",
            Idiom::PromiseRace => "Promise.race()",
            Idiom::Async => "Async",
            Idiom::AsyncSequential => "Sequential",
            Idiom::AsyncParallel => "Parallel",
            Idiom::AsyncRace => "Race",
        }
    }

    /// Short identifier shown as "Current Pattern".
    pub fn key(&self) -> &'static str {
        match self {
            Idiom::Callback => "callback",
            Idiom::Promise => "promise",
            Idiom::PromiseChain => "promiseChain",
            Idiom::PromiseAll => "promiseAll",
            Idiom::PromiseRace => "promiseRace",
            Idiom::Async => "async",
            Idiom::AsyncSequential => "asyncSequential",
            Idiom::AsyncParallel => "asyncParallel",
            Idiom::AsyncRace => "asyncRace",
        }
    }

    /// Key binding digit ('1'..='9').
    pub fn hotkey(&self) -> char {
        let index = Self::ALL.iter().position(|i| i == self).unwrap_or(0);
        char::from(b'1' + index as u8)
    }

    pub fn from_hotkey(c: char) -> Option<Idiom> {
        let digit = c.to_digit(10)? as usize;
        digit
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }
}
