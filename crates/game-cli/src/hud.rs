use npuzzle_utils::puzzle::{Region, SessionObserver};

/// Terminal HUD and renderer shim: prints the move counter after every
/// accepted move and the solved banner once; swap notifications go to the
/// debug log, where a graphical frontend would reorder its sprites.
#[derive(Debug, Default)]
pub struct TerminalHud;

impl SessionObserver for TerminalHud {
    fn board_created(&mut self, regions: &[Region]) {
        log::info!("board ready, {} tile slices", regions.len());
        if let Some(first) = regions.first() {
            log::debug!("tile slice size: {}x{} px", first.width, first.height);
        }
    }

    fn cells_swapped(&mut self, a: usize, b: usize) {
        log::debug!("cells swapped: {a} <-> {b}");
    }

    fn move_count(&mut self, count: u32) {
        println!("moves: {count}");
    }

    fn solved(&mut self, empty_index: usize, region: Region) {
        log::debug!(
            "revealing cell {empty_index}: region {}x{} at ({}, {})",
            region.width,
            region.height,
            region.x,
            region.y
        );
        println!("Solved!");
    }
}
