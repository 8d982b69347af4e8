//! Turns typed commands into the gesture shape the core expects: a source
//! tile plus a displacement vector, resolved downstream by the
//! dominant-axis rule.

/// Displacement synthesized for keyword swipes. Comfortably above the
/// default 40-unit threshold, like a decisive finger swipe.
const SWIPE_UNITS: f32 = 48.0;

/// Which tile a gesture starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A named tile, as displayed (1-based).
    Tile(u16),
    /// Whichever tile can actually slide the requested way: the one on the
    /// opposite side of the empty cell.
    AdjacentToEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Swipe { source: Source, dx: f32, dy: f32 },
    Restart,
    Quit,
}

fn keyword_vector(word: &str) -> Option<(f32, f32)> {
    // dy > 0 is a visual up-swipe
    match word {
        "u" | "up" => Some((0.0, SWIPE_UNITS)),
        "d" | "down" => Some((0.0, -SWIPE_UNITS)),
        "l" | "left" => Some((-SWIPE_UNITS, 0.0)),
        "r" | "right" => Some((SWIPE_UNITS, 0.0)),
        _ => None,
    }
}

/// Parse one input line. `None` means the line wasn't understood.
///
/// Forms: `u`/`d`/`l`/`r` (slide into the empty cell), `<tile> <dir>`
/// (swipe a displayed tile), `swipe <tile> <dx> <dy>` (raw gesture),
/// `restart`, `quit`.
pub fn parse(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["q"] | ["exit"] => Some(Command::Quit),
        ["restart"] | ["new"] => Some(Command::Restart),
        [word] => keyword_vector(&word.to_ascii_lowercase()).map(|(dx, dy)| Command::Swipe {
            source: Source::AdjacentToEmpty,
            dx,
            dy,
        }),
        [tile, word] => {
            let tile: u16 = tile.parse().ok().filter(|&n| n > 0)?;
            let (dx, dy) = keyword_vector(&word.to_ascii_lowercase())?;
            Some(Command::Swipe { source: Source::Tile(tile), dx, dy })
        }
        ["swipe", tile, dx, dy] => {
            let tile: u16 = tile.parse().ok().filter(|&n| n > 0)?;
            let dx: f32 = dx.parse().ok()?;
            let dy: f32 = dy.parse().ok()?;
            Some(Command::Swipe { source: Source::Tile(tile), dx, dy })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_directions_slide_into_the_empty_cell() {
        assert_eq!(
            parse("u"),
            Some(Command::Swipe { source: Source::AdjacentToEmpty, dx: 0.0, dy: SWIPE_UNITS })
        );
        assert_eq!(
            parse("LEFT"),
            Some(Command::Swipe { source: Source::AdjacentToEmpty, dx: -SWIPE_UNITS, dy: 0.0 })
        );
    }

    #[test]
    fn named_tile_swipes() {
        assert_eq!(
            parse("5 right"),
            Some(Command::Swipe { source: Source::Tile(5), dx: SWIPE_UNITS, dy: 0.0 })
        );
        assert_eq!(parse("0 right"), None);
        assert_eq!(parse("five right"), None);
    }

    #[test]
    fn raw_gestures_pass_the_vector_through() {
        assert_eq!(
            parse("swipe 3 41 -7"),
            Some(Command::Swipe { source: Source::Tile(3), dx: 41.0, dy: -7.0 })
        );
    }

    #[test]
    fn control_words_and_noise() {
        assert_eq!(parse("quit"), Some(Command::Quit));
        assert_eq!(parse("restart"), Some(Command::Restart));
        assert_eq!(parse(""), None);
        assert_eq!(parse("sideways"), None);
    }
}
