//! Engine module - ties grid, pieces, randomness and scoring together
//!
//! Every command runs to completion and answers with a plain success flag.
//! A blocked fall triggers the lock cycle: commit the piece, clear the full
//! rows it touched, score them, check the win threshold, then spawn the next
//! piece. `Won` and `Lost` are terminal; afterwards only queries respond.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::{Grid, VISIBLE_TOP};
use crate::piece::ActivePiece;
use crate::pieces::Catalog;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{line_clear_score, reaches_threshold};
use crate::snapshot::{GameSnapshot, PieceView};
use crate::types::{GameAction, GameStatus, PieceKind};

/// Outcome of the most recent lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cleared rows as visible-area indices (grid row minus hidden rows), ascending
    pub cleared_rows: ArrayVec<usize, 4>,
    /// Points awarded for the clear
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct Engine<S = SimpleRng> {
    config: GameConfig,
    catalog: Catalog,
    grid: Grid,
    current: Option<ActivePiece>,
    next: Option<ActivePiece>,
    source: S,
    score: u32,
    /// Pieces that have become current (1 right after bootstrap)
    pieces_generated: u32,
    status: GameStatus,
    started: bool,
    last_event: Option<LockEvent>,
}

impl Engine<SimpleRng> {
    /// Create an engine drawing pieces from a seeded [`SimpleRng`]
    pub fn with_seed(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<S: PieceSource> Engine<S> {
    /// Create an engine with the standard catalog and an empty grid
    pub fn new(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        Self::with_catalog(config, Catalog::standard()?, source)
    }

    pub fn with_catalog(
        config: GameConfig,
        catalog: Catalog,
        source: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows as usize, config.cols as usize);
        Self::assemble(config, catalog, grid, source)
    }

    /// Create an engine over a pre-filled grid
    ///
    /// The grid's dimensions replace those in `config`.
    pub fn from_grid(mut config: GameConfig, grid: Grid, source: S) -> Result<Self, ConfigError> {
        config.rows = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
        config.cols = u16::try_from(grid.cols()).unwrap_or(u16::MAX);
        config.validate()?;
        Self::assemble(config, Catalog::standard()?, grid, source)
    }

    fn assemble(
        config: GameConfig,
        catalog: Catalog,
        grid: Grid,
        source: S,
    ) -> Result<Self, ConfigError> {
        for def in catalog.iter() {
            if let Some(bad) = def.spawn.iter().find(|&&c| !grid.in_bounds(c)) {
                return Err(ConfigError::SpawnOutOfBounds {
                    kind: def.kind,
                    row: bad.row,
                    col: bad.col,
                });
            }
        }

        Ok(Self {
            config,
            catalog,
            grid,
            current: None,
            next: None,
            source,
            score: 0,
            pieces_generated: 0,
            status: GameStatus::Playing,
            started: false,
            last_event: None,
        })
    }

    /// Bootstrap the session
    ///
    /// Spawns twice: the first call only fills `next`, the second promotes it
    /// to current and draws a fresh `next`. Later calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_next();
        self.spawn_next();
    }

    /// Promote `next` to current and draw a new `next`
    ///
    /// Fails and ends the game as `Lost` if the spawn row is occupied or the
    /// incoming piece would overlap a locked cell.
    pub fn spawn_next(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        if self.grid.is_spawn_blocked() {
            self.finish(GameStatus::Lost);
            return false;
        }

        if let Some(ref piece) = self.next {
            if !piece.is_valid(&self.grid) {
                self.finish(GameStatus::Lost);
                return false;
            }
        }

        self.current = self.next.take();
        if self.current.is_some() {
            self.pieces_generated += 1;
        }

        let kind = self.source.next_kind();
        self.next = Some(ActivePiece::new(*self.catalog.get(kind)));

        trace!(
            current = ?self.current.map(|p| p.kind()),
            next = ?kind,
            pieces_generated = self.pieces_generated,
            "spawned"
        );
        true
    }

    /// Move the current piece down one row, locking it if blocked
    ///
    /// Returns `true` if the piece moved. `false` means either that it locked
    /// (see [`Engine::take_last_event`]) or that no command is accepted.
    pub fn try_fall(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };

        if piece.fall(&self.grid) {
            return true;
        }

        self.lock_in();
        false
    }

    pub fn try_left(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.move_left(&self.grid),
            None => false,
        }
    }

    pub fn try_right(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.move_right(&self.grid),
            None => false,
        }
    }

    /// Rotate the current piece; a rejected rotation leaves it unchanged
    pub fn try_rotate(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.rotate(&self.grid),
            None => false,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_left(),
            GameAction::MoveRight => self.try_right(),
            GameAction::SoftDrop | GameAction::Tick => self.try_fall(),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Commit the current piece, clear and score rows, then spawn
    fn lock_in(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        self.grid.commit(piece.cells(), piece.kind());

        let (min_row, max_row) = piece.row_span();
        let full = self
            .grid
            .full_rows_in_range(min_row.max(0) as usize, max_row.max(0) as usize);
        self.grid.clear_rows(&full);

        let points = line_clear_score(full.len());
        self.score = self.score.saturating_add(points);

        debug!(
            kind = ?piece.kind(),
            rows_cleared = full.len(),
            points,
            score = self.score,
            "piece locked"
        );

        self.last_event = Some(LockEvent {
            kind: piece.kind(),
            cleared_rows: full.iter().map(|&row| row - VISIBLE_TOP).collect(),
            points,
        });

        if reaches_threshold(self.score, self.config.score_threshold) {
            self.finish(GameStatus::Won);
            return;
        }

        self.spawn_next();
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        info!(
            status = status.as_str(),
            score = self.score,
            pieces_generated = self.pieces_generated,
            "game over"
        );
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn threshold(&self) -> u32 {
        self.config.score_threshold
    }

    pub fn pieces_generated(&self) -> u32 {
        self.pieces_generated
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> Option<&ActivePiece> {
        self.current.as_ref()
    }

    pub fn next(&self) -> Option<&ActivePiece> {
        self.next.as_ref()
    }

    /// End-of-game text for the driver to show, once terminal
    pub fn final_message(&self) -> Option<String> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won => Some(format!("Victory! Final score was {}.", self.score)),
            GameStatus::Lost => Some(format!("Defeat. Final score was {}.", self.score)),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend(
            self.grid
                .cells()
                .iter()
                .map(|cell| cell.map(|kind| self.catalog.color(kind))),
        );
        out.current = self.current.as_ref().map(PieceView::current);
        out.next = self.next.as_ref().map(PieceView::preview);
        out.score = self.score;
        out.threshold = self.config.score_threshold;
        out.status = self.status;
        out.pieces_generated = self.pieces_generated;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
