use npuzzle_utils::puzzle::Board;

/// ASCII view of the board: 1-based tile numbers, `.` for the empty cell.
pub fn draw(board: &Board) -> String {
    let digits = board.cell_count().to_string().len();
    let mut out = String::new();
    for row in 0..board.height() {
        for col in 0..board.width() {
            if col > 0 {
                out.push(' ');
            }
            let index = board.index_of(col, row);
            match board.cell_at(index) {
                Some(tile) => out.push_str(&format!("{:>digits$}", tile.0 + 1)),
                None => out.push_str(&format!("{:>digits$}", ".")),
            }
        }
        out.push('\n');
    }
    out
}
