use serde::{Deserialize, Serialize};

use super::board::Board;

/// A direction to slide a tile in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Resolve a raw gesture displacement to a direction by its dominant
    /// axis: horizontal when `|dx| > |dy|`, vertical otherwise. `dy > 0` is
    /// a visual up-swipe, which moves toward row 0 (the top row).
    pub fn from_vector(dx: f32, dy: f32) -> Direction {
        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Column/row delta of one step. Row 0 is the top row, so `Up` is -1.
    #[inline]
    pub(crate) fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Report of one accepted move: `to` held the empty marker before the move
/// and `from` holds it afterwards. Not stored anywhere; the board keeps no
/// move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: usize,
    pub to: usize,
}

impl MoveRecord {
    /// Where the empty marker sits after this move.
    #[inline]
    pub fn new_empty_index(&self) -> usize {
        self.from
    }
}

/// Outcome of a single directional move request. Rejections are ordinary
/// values: illegal swipes are expected, frequent input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The tile slid into the empty cell.
    Moved(MoveRecord),
    /// The target cell is occupied; nothing changed.
    Blocked,
    /// The move fell off the grid, or there was no tile to move.
    NoMove,
}

impl MoveOutcome {
    #[inline]
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// Validate and apply one directional move: slide the tile at `source` one
/// step in `direction` if that step lands on the empty cell.
///
/// Pure function of (board, move) with no session-state awareness; gating
/// by lifecycle phase is the caller's job.
pub fn try_move(board: &mut Board, source: usize, direction: Direction) -> MoveOutcome {
    if source >= board.cell_count() || board.cell_at(source).is_none() {
        return MoveOutcome::NoMove;
    }
    let Some(target) = board.step(source, direction) else {
        return MoveOutcome::NoMove;
    };
    if board.cell_at(target).is_some() {
        return MoveOutcome::Blocked;
    }
    if board.swap(source, target).is_err() {
        return MoveOutcome::NoMove;
    }
    MoveOutcome::Moved(MoveRecord { from: source, to: target })
}
