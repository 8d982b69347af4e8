use rand::Rng;

use super::board::Board;
use super::moves::MoveRecord;

/// Finite random walk of legal single moves: each step swaps one of the
/// empty cell's neighbors into it, chosen uniformly. Because every step is
/// a legal move, the end configuration is reachable from the solved state
/// and therefore always solvable, unlike a fully random permutation.
///
/// The walk is a non-restartable iterator so a host with a render loop can
/// interleave one step per tick; draining it synchronously is equivalent.
/// Each step is a single atomic swap, so dropping the walk at any point
/// leaves the board consistent.
pub struct ShuffleWalk<'a, R: Rng + ?Sized> {
    board: &'a mut Board,
    rng: &'a mut R,
    remaining: usize,
}

impl<'a, R: Rng + ?Sized> ShuffleWalk<'a, R> {
    pub fn new(board: &'a mut Board, steps: usize, rng: &'a mut R) -> Self {
        Self { board, rng, remaining: steps }
    }
}

impl<R: Rng + ?Sized> Iterator for ShuffleWalk<'_, R> {
    type Item = MoveRecord;

    fn next(&mut self) -> Option<MoveRecord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let empty = self.board.empty_index();
        let neighbors: Vec<usize> = self.board.neighbors_of(empty).collect();
        let source = neighbors[self.rng.gen_range(0..neighbors.len())];
        self.board.swap(source, empty).ok()?;
        Some(MoveRecord { from: source, to: empty })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Shuffle a board in place with a `moves`-step random walk, then keep
/// walking while it still looks solved (possible for small walks or small
/// boards). Returns the full move log so callers can replay it against a
/// fresh board.
///
/// Never touches any move counter and emits no notifications; that is the
/// session's business once play starts.
pub fn shuffle<R: Rng + ?Sized>(board: &mut Board, moves: usize, rng: &mut R) -> Vec<MoveRecord> {
    let mut log: Vec<MoveRecord> = Vec::with_capacity(moves);
    log.extend(ShuffleWalk::new(board, moves, rng));
    while board.is_solved() {
        // Odd length: on a two-cell board every even-length walk ends back
        // at the solved arrangement.
        let corrective = (20.max(board.cell_count())) | 1;
        log.extend(ShuffleWalk::new(board, corrective, rng));
    }
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffled_board_is_never_solved() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new(3, 3).unwrap();
            shuffle(&mut board, 200, &mut rng);
            assert!(!board.is_solved(), "seed {seed}");
        }
    }

    #[test]
    fn replaying_the_log_reproduces_the_shuffle() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(4, 3).unwrap();
        let log = shuffle(&mut board, 150, &mut rng);

        let mut replay = Board::new(4, 3).unwrap();
        for record in &log {
            assert_eq!(replay.empty_index(), record.to);
            replay.swap(record.from, record.to).unwrap();
        }
        assert_eq!(replay, board);
    }

    #[test]
    fn zero_move_shuffle_triggers_the_corrective_walk() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(3, 3).unwrap();
        let log = shuffle(&mut board, 0, &mut rng);
        assert!(!board.is_solved());
        assert!(log.len() >= 20, "corrective walk ran {} moves", log.len());
    }

    #[test]
    fn two_cell_board_shuffle_terminates_unsolved() {
        // the smallest legal board flips between exactly two arrangements
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(2, 1).unwrap();
        shuffle(&mut board, 10, &mut rng);
        assert!(!board.is_solved());
        assert_eq!(board.empty_index(), 0);
    }

    #[test]
    fn walk_steps_are_single_legal_swaps() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = Board::new(3, 3).unwrap();
        let mut last_empty = board.empty_index();
        for record in ShuffleWalk::new(&mut board, 50, &mut rng) {
            assert_eq!(record.to, last_empty);
            last_empty = record.from;
        }
        assert_eq!(board.empty_index(), last_empty);
    }

    #[test]
    fn abandoned_walk_leaves_a_consistent_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::new(3, 3).unwrap();
        let mut walk = ShuffleWalk::new(&mut board, 100, &mut rng);
        for _ in 0..7 {
            walk.next();
        }
        drop(walk);
        // exactly one empty cell, every tile accounted for
        let empties = (0..board.cell_count())
            .filter(|&i| board.cell_at(i).is_none())
            .count();
        assert_eq!(empties, 1);
        for id in 0..8 {
            assert!(board.position_of(crate::puzzle::TileId(id)).is_some());
        }
    }
}
