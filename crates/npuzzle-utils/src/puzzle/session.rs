use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::atlas::{self, Region};
use super::board::{Board, BoardError};
use super::moves::{self, Direction, MoveOutcome};
use super::shuffle;

/// Lifecycle of one puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Constructed, no board yet.
    Idle,
    /// Board exists, shuffle in progress. Moves are not accepted and the
    /// move counter stays untouched.
    Shuffling,
    /// Accepting player moves.
    Playing,
    /// Terminal: the solved notification has fired and all further input
    /// is ignored until a restart.
    Solved,
}

/// Session configuration. The image identifier is resolved to pixel
/// dimensions by the host before the session is built; the core only ever
/// sees numbers.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default = "defaults::rows")]
    pub rows: usize,
    #[serde(default = "defaults::cols")]
    pub cols: usize,
    /// Random-walk length. 10..=1000 is the sensible range; anything
    /// producing a still-solved board is fixed up by a corrective walk.
    #[serde(default = "defaults::shuffle_moves")]
    pub shuffle_moves: usize,
    pub image_width: u32,
    pub image_height: u32,
}

mod defaults {
    pub fn rows() -> usize {
        3
    }
    pub fn cols() -> usize {
        3
    }
    pub fn shuffle_moves() -> usize {
        200
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: defaults::rows(),
            cols: defaults::cols(),
            shuffle_moves: defaults::shuffle_moves(),
            image_width: 512,
            image_height: 512,
        }
    }
}

/// Notification surface for the external collaborators (renderer, HUD).
/// The core hands out indices and pixel regions, never renderable objects.
/// Every method defaults to a no-op so implementers pick what they need.
pub trait SessionObserver {
    /// A fresh board exists. `regions[i]` is the image slice for the tile
    /// whose home index is `i`; the cell at the last index starts empty.
    fn board_created(&mut self, regions: &[Region]) {
        let _ = regions;
    }

    /// Two cells exchanged contents, during the shuffle as well as on
    /// accepted player moves, so a renderer can track every reorder.
    fn cells_swapped(&mut self, a: usize, b: usize) {
        let _ = (a, b);
    }

    /// The move counter changed.
    fn move_count(&mut self, count: u32) {
        let _ = count;
    }

    /// Fires exactly once per session. The previously-empty cell at
    /// `empty_index` can now display its home slice.
    fn solved(&mut self, empty_index: usize, region: Region) {
        let _ = (empty_index, region);
    }
}

/// What came of one forwarded move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    pub move_count: u32,
    /// True only on the report that transitioned the session to `Solved`.
    pub solved_now: bool,
}

/// Owns the board across `Idle → Shuffling → Playing → Solved` and gates
/// which collaborator may mutate it: the shuffler during `Shuffling`, the
/// move engine during `Playing`, nobody afterwards.
pub struct PuzzleSession {
    config: SessionConfig,
    rng: StdRng,
    phase: SessionPhase,
    board: Option<Board>,
    regions: Vec<Region>,
    move_count: u32,
}

impl PuzzleSession {
    /// Build an idle session with entropy-seeded randomness. Configuration
    /// is validated here so a malformed setup never produces a
    /// half-initialized session.
    pub fn new(config: SessionConfig) -> Result<Self, BoardError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic variant for reproducible sessions and tests.
    pub fn with_seed(config: SessionConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SessionConfig, rng: StdRng) -> Result<Self, BoardError> {
        let regions = atlas::slice(
            config.image_width,
            config.image_height,
            config.cols as u32,
            config.rows as u32,
        )?;
        Ok(Self {
            config,
            rng,
            phase: SessionPhase::Idle,
            board: None,
            regions,
            move_count: 0,
        })
    }

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// `Idle → Shuffling → Playing`: build the board, announce it, shuffle,
    /// and zero the move counter. The shuffle itself never counts moves and
    /// never triggers solved notifications.
    pub fn start(&mut self, observer: &mut dyn SessionObserver) -> Result<(), BoardError> {
        self.phase = SessionPhase::Shuffling;
        let mut board = Board::new(self.config.cols, self.config.rows)?;
        observer.board_created(&self.regions);
        for record in shuffle::shuffle(&mut board, self.config.shuffle_moves, &mut self.rng) {
            observer.cells_swapped(record.from, record.to);
        }
        self.board = Some(board);
        self.move_count = 0;
        self.phase = SessionPhase::Playing;
        Ok(())
    }

    /// Forward one directional move request. Outside `Playing` this is a
    /// `NoMove` with no mutation: the move engine simply never runs while
    /// shuffling or after the solve.
    pub fn handle_move(
        &mut self,
        source: usize,
        direction: Direction,
        observer: &mut dyn SessionObserver,
    ) -> MoveReport {
        let rejected = MoveReport {
            outcome: MoveOutcome::NoMove,
            move_count: self.move_count,
            solved_now: false,
        };
        if self.phase != SessionPhase::Playing {
            return rejected;
        }
        let Some(board) = self.board.as_mut() else {
            return rejected;
        };

        let outcome = moves::try_move(board, source, direction);
        let mut solved_now = false;
        if let MoveOutcome::Moved(record) = outcome {
            self.move_count += 1;
            observer.move_count(self.move_count);
            observer.cells_swapped(record.from, record.to);
            if board.is_solved() {
                // one-shot by construction: the phase flips before any
                // further move can reach the engine
                self.phase = SessionPhase::Solved;
                solved_now = true;
                let empty = board.empty_index();
                observer.solved(empty, self.regions[empty]);
            }
        }
        MoveReport {
            outcome,
            move_count: self.move_count,
            solved_now,
        }
    }

    /// Tear down the board and run `start` again: fresh shuffle, counter
    /// back to zero. Valid from any phase, including mid-`Solved`.
    pub fn restart(&mut self, observer: &mut dyn SessionObserver) -> Result<(), BoardError> {
        self.board = None;
        self.move_count = 0;
        self.phase = SessionPhase::Idle;
        self.start(observer)
    }
}
