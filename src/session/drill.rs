use rand::Rng;

use crate::catalog::{self, ScriptEntry};

/// Evaluation policy for the session.
///
/// Normal judges on Enter; Quick judges every keystroke as soon as the
/// buffer length reaches the target romaji length, so Enter is never
/// needed for a full answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Quick,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Quick => "quick",
        }
    }
}

/// Mutable session state for one drill run.
///
/// `pool` holds the entries not yet answered correctly; `current` indexes
/// into it and is re-randomized after every pool mutation. The session is
/// Complete exactly when the pool is empty, and only `reset` leaves that
/// state.
pub struct DrillState {
    catalog: Vec<ScriptEntry>,
    pub pool: Vec<ScriptEntry>,
    pub current: Option<usize>,
    pub input: String,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub mode: Mode,
}

impl DrillState {
    /// Start a session over `catalog` with a caller-supplied starting
    /// index. An out-of-range index degrades to "no current item".
    pub fn new(catalog: Vec<ScriptEntry>, start: Option<usize>, mode: Mode) -> Self {
        let pool = catalog.clone();
        let current = start.filter(|&i| i < pool.len());
        Self {
            catalog,
            pool,
            current,
            input: String::new(),
            correct_count: 0,
            wrong_count: 0,
            mode,
        }
    }

    pub fn with_random_start(catalog: Vec<ScriptEntry>, mode: Mode, rng: &mut impl Rng) -> Self {
        let start = catalog::random_index(&catalog, rng);
        Self::new(catalog, start, mode)
    }

    pub fn current(&self) -> Option<&ScriptEntry> {
        catalog::get(self.current, &self.pool)
    }

    pub fn is_complete(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn answered(&self) -> usize {
        self.catalog.len() - self.pool.len()
    }

    /// Fraction of the catalog already answered correctly.
    pub fn progress(&self) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        self.answered() as f64 / self.catalog.len() as f64
    }

    /// Restore the full catalog, zero both counters, and pick a fresh
    /// random current item. The one transition out of Complete.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.pool = self.catalog.clone();
        self.current = catalog::random_index(&self.pool, rng);
        self.input.clear();
        self.correct_count = 0;
        self.wrong_count = 0;
    }
}
