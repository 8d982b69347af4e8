use serde::{Deserialize, Serialize};

use super::moves::Direction;

/// Identity of a tile, independent of where it currently sits.
///
/// Tile `i`'s home index is `i`: boards are created with every tile at its
/// home position, so the identity doubles as the immutable home assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// The index this tile must occupy for the board to count as solved.
    #[inline]
    pub fn home_index(self) -> usize {
        self.0 as usize
    }
}

/// A grid cell: a tile, or `None` for the single empty cell.
pub type Cell = Option<TileId>;

/// Failures from board construction and the swap primitive. Everything the
/// player can trigger mid-game is a result value elsewhere, never an error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid dimensions {width}x{height}: a board needs at least 2 cells")]
    InvalidDimensions { width: usize, height: usize },
    #[error("swap requested with identical indices ({0})")]
    SameIndex(usize),
    #[error("index {index} out of bounds for board of {len} cells")]
    OutOfBounds { index: usize, len: usize },
}

/// Rectangular sliding-puzzle board with exactly one empty cell.
///
/// Indices are row-major with row 0 at the top. The empty index is cached
/// but only ever written inside [`Board::swap`], the sole mutation
/// primitive, so it cannot drift from the cell contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    empty: usize,
}

impl Board {
    /// Build a solved board: tile `i` at index `i`, empty marker at the
    /// last index. Fails with `InvalidDimensions` for fewer than 2 cells.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let len = width * height;
        if len < 2 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let mut cells: Vec<Cell> = (0..len - 1).map(|i| Some(TileId(i as u16))).collect();
        cells.push(None);
        Ok(Self { width, height, cells, empty: len - 1 })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn index_of(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    #[inline]
    pub fn in_bounds(&self, col: isize, row: isize) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    /// Contents of a cell. Panics if `index` is out of range; callers that
    /// take indices from outside the crate bounds-check first.
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// The single index currently holding the empty marker.
    #[inline]
    pub fn empty_index(&self) -> usize {
        self.empty
    }

    /// Current position of a tile, or `None` for an id this board never had.
    pub fn position_of(&self, tile: TileId) -> Option<usize> {
        self.cells.iter().position(|&c| c == Some(tile))
    }

    /// Neighboring index one step in `direction`, or `None` at the border.
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        let (col, row) = self.coords_of(index);
        let (dc, dr) = direction.delta();
        let (nc, nr) = (col as isize + dc, row as isize + dr);
        self.in_bounds(nc, nr)
            .then(|| self.index_of(nc as usize, nr as usize))
    }

    /// Grid-adjacent indices of a cell: 2 for a corner, 3 for an edge cell,
    /// 4 for an interior cell.
    pub fn neighbors_of(&self, index: usize) -> Neighbors {
        let mut slots = [None; 4];
        for (slot, direction) in slots.iter_mut().zip(Direction::ALL) {
            *slot = self.step(index, direction);
        }
        Neighbors { slots, at: 0 }
    }

    /// Exchange the contents of two cells, keeping the cached empty index
    /// in sync in the same operation. Adjacency is the caller's concern.
    /// A same-index request is signaled, not silently ignored.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), BoardError> {
        let len = self.cells.len();
        if a >= len {
            return Err(BoardError::OutOfBounds { index: a, len });
        }
        if b >= len {
            return Err(BoardError::OutOfBounds { index: b, len });
        }
        if a == b {
            return Err(BoardError::SameIndex(a));
        }
        self.cells.swap(a, b);
        if self.empty == a {
            self.empty = b;
        } else if self.empty == b {
            self.empty = a;
        }
        debug_assert!(self.cells[self.empty].is_none());
        debug_assert_eq!(self.cells.iter().filter(|c| c.is_none()).count(), 1);
        Ok(())
    }

    /// True iff every non-empty cell sits at its home index. Where the
    /// empty cell ended up is irrelevant.
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, cell)| cell.map_or(true, |tile| tile.home_index() == i))
    }
}

/// Iterator over a cell's grid-adjacent indices. See [`Board::neighbors_of`].
pub struct Neighbors {
    slots: [Option<usize>; 4],
    at: usize,
}

impl Iterator for Neighbors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.at < self.slots.len() {
            let slot = self.slots[self.at];
            self.at += 1;
            if slot.is_some() {
                return slot;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_solved_with_empty_in_corner() {
        let board = Board::new(3, 3).unwrap();
        assert!(board.is_solved());
        assert_eq!(board.empty_index(), 8);
        assert_eq!(board.cell_at(0), Some(TileId(0)));
        assert_eq!(board.cell_at(7), Some(TileId(7)));
        assert_eq!(board.cell_at(8), None);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(
            Board::new(1, 1),
            Err(BoardError::InvalidDimensions { width: 1, height: 1 })
        );
        assert_eq!(
            Board::new(0, 5),
            Err(BoardError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(Board::new(2, 1).is_ok());
    }

    #[test]
    fn neighbor_counts_by_position() {
        let board = Board::new(3, 3).unwrap();
        // corners
        for corner in [0, 2, 6, 8] {
            assert_eq!(board.neighbors_of(corner).count(), 2, "corner {corner}");
        }
        // edges
        for edge in [1, 3, 5, 7] {
            assert_eq!(board.neighbors_of(edge).count(), 3, "edge {edge}");
        }
        // interior
        assert_eq!(board.neighbors_of(4).count(), 4);
        let mid: Vec<usize> = board.neighbors_of(4).collect();
        assert_eq!(mid, vec![1, 7, 3, 5]);
    }

    #[test]
    fn step_respects_borders() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(board.step(0, Direction::Up), None);
        assert_eq!(board.step(0, Direction::Left), None);
        assert_eq!(board.step(0, Direction::Down), Some(3));
        assert_eq!(board.step(0, Direction::Right), Some(1));
        assert_eq!(board.step(8, Direction::Down), None);
        assert_eq!(board.step(5, Direction::Right), None);
    }

    #[test]
    fn swap_moves_the_empty_marker_with_the_contents() {
        let mut board = Board::new(3, 3).unwrap();
        board.swap(7, 8).unwrap();
        assert_eq!(board.empty_index(), 7);
        assert_eq!(board.cell_at(8), Some(TileId(7)));
        // double application restores the original arrangement
        board.swap(7, 8).unwrap();
        assert_eq!(board, Board::new(3, 3).unwrap());
        assert!(board.is_solved());
    }

    #[test]
    fn swap_signals_same_index_and_out_of_bounds() {
        let mut board = Board::new(3, 3).unwrap();
        assert_eq!(board.swap(4, 4), Err(BoardError::SameIndex(4)));
        assert_eq!(
            board.swap(0, 9),
            Err(BoardError::OutOfBounds { index: 9, len: 9 })
        );
        // failed swaps leave the board untouched
        assert_eq!(board, Board::new(3, 3).unwrap());
    }

    #[test]
    fn any_displaced_tile_unsolves() {
        let mut board = Board::new(2, 2).unwrap();
        board.swap(3, 1).unwrap();
        assert!(!board.is_solved());
        board.swap(1, 3).unwrap();
        assert!(board.is_solved());
    }

    #[test]
    fn position_lookup_tracks_swaps() {
        let mut board = Board::new(3, 3).unwrap();
        assert_eq!(board.position_of(TileId(5)), Some(5));
        board.swap(5, 8).unwrap();
        assert_eq!(board.position_of(TileId(5)), Some(8));
        assert_eq!(board.position_of(TileId(42)), None);
    }

    #[test]
    fn board_round_trips_through_serde() {
        let mut board = Board::new(3, 3).unwrap();
        board.swap(7, 8).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert_eq!(back.empty_index(), 7);
    }
}
