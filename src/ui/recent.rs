use std::time::{Duration, Instant};

use crate::catalog::ScriptEntry;

/// Display lifecycle of a recently shown card. Purely presentational:
/// nothing here feeds back into the drill state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Current,
    Previous,
    Removing,
}

#[derive(Clone, Copy, Debug)]
pub struct RecentItem {
    pub entry: ScriptEntry,
    pub status: Status,
    /// How the item was answered when it was demoted from Current.
    /// `None` for the current item and for skipped items.
    pub correct: Option<bool>,
    since: Instant,
}

/// Short-lived list of cards still on screen. On every advance the
/// current card becomes Previous and older cards become Removing;
/// Removing cards are dropped once their exit delay elapses.
pub struct RecentList {
    items: Vec<RecentItem>,
    exit_delay: Duration,
}

pub const EXIT_DELAY: Duration = Duration::from_millis(900);

impl RecentList {
    pub fn new() -> Self {
        Self::with_exit_delay(EXIT_DELAY)
    }

    pub fn with_exit_delay(exit_delay: Duration) -> Self {
        Self {
            items: Vec::new(),
            exit_delay,
        }
    }

    pub fn items(&self) -> &[RecentItem] {
        &self.items
    }

    /// Replace the list with a single Current card, or empty it when the
    /// session has nothing to show.
    pub fn start(&mut self, entry: Option<ScriptEntry>) {
        self.items.clear();
        if let Some(entry) = entry {
            self.items.push(RecentItem {
                entry,
                status: Status::Current,
                correct: None,
                since: Instant::now(),
            });
        }
    }

    /// Demote the current card with its outcome and show `next` as the
    /// new Current. Cards already demoted move to Removing.
    pub fn advance(&mut self, outcome: Option<bool>, next: Option<ScriptEntry>) {
        let now = Instant::now();
        for item in &mut self.items {
            match item.status {
                Status::Current => {
                    item.status = Status::Previous;
                    item.correct = outcome;
                    item.since = now;
                }
                Status::Previous | Status::Removing => {
                    item.status = Status::Removing;
                }
            }
        }
        if let Some(entry) = next {
            self.items.push(RecentItem {
                entry,
                status: Status::Current,
                correct: None,
                since: now,
            });
        }
    }

    /// Drop Removing cards whose exit delay has elapsed. Called from the
    /// event tick; the drill state machine is correct without it.
    pub fn prune(&mut self, now: Instant) {
        let exit_delay = self.exit_delay;
        self.items.retain(|item| {
            item.status != Status::Removing || now.duration_since(item.since) < exit_delay
        });
    }
}
