use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub history_limit: usize,
}

impl SessionConfig {
    pub const DEFAULT_HISTORY_LIMIT: usize = 64;
    pub const MAX_HISTORY_LIMIT: usize = 4096;

    pub const fn new_unchecked(history_limit: usize) -> Self {
        Self { history_limit }
    }

    pub fn new(history_limit: usize) -> Self {
        if history_limit > Self::MAX_HISTORY_LIMIT {
            log::warn!(
                "History limit {} is too large, using {}",
                history_limit,
                Self::MAX_HISTORY_LIMIT
            );
        }
        Self::new_unchecked(history_limit.min(Self::MAX_HISTORY_LIMIT))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_HISTORY_LIMIT)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct HistoryEntry {
    grid: Grid,
    clicks: u32,
}

/// Caller-owned game state: the current snapshot plus a bounded undo history.
///
/// The engine itself is stateless, this is just the bookkeeping a front end
/// would otherwise do by hand.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSession {
    config: SessionConfig,
    grid: Grid,
    history: VecDeque<HistoryEntry>,
    clicks: u32,
}

impl GridSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            grid: create_grid(),
            history: VecDeque::new(),
            clicks: 0,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> GridStats {
        self.grid.stats()
    }

    /// Accepted clicks since creation or the last reset.
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn click(&mut self, row: Coord, col: Coord) -> Result<ClickOutcome> {
        let Transition { grid, outcome, .. } = self.grid.click((row, col))?;

        if outcome.has_update() {
            let previous = core::mem::replace(&mut self.grid, grid);
            self.remember(previous, self.clicks);
            self.clicks = self.clicks.saturating_add(1);
        }

        Ok(outcome)
    }

    pub fn reset(&mut self) {
        if self.grid.is_pristine() {
            return;
        }

        let previous = core::mem::replace(&mut self.grid, reset_grid());
        self.remember(previous, self.clicks);
        self.clicks = 0;
        log::debug!("Session reset");
    }

    /// Restores the previous snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(HistoryEntry { grid, clicks }) => {
                self.grid = grid;
                self.clicks = clicks;
                true
            }
            None => false,
        }
    }

    fn remember(&mut self, grid: Grid, clicks: u32) {
        if self.config.history_limit == 0 {
            return;
        }

        if self.history.len() >= self.config.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry { grid, clicks });
    }
}

impl Default for GridSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
