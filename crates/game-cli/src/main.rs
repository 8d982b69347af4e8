mod config;
mod hud;
mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use config::Config;
use hud::TerminalHud;
use input::{Command, Source};
use npuzzle_utils::puzzle::{Direction, MoveOutcome, PuzzleSession, SessionPhase, TileId};

#[derive(Parser, Debug)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// Seed the shuffle for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_toml(path)?,
        None => Config::default(),
    };
    let session_config = config.resolve()?;
    let session = match args.seed {
        Some(seed) => PuzzleSession::with_seed(session_config, seed),
        None => PuzzleSession::new(session_config),
    }
    .context("could not create the puzzle session")?;
    run(session, config.swipe_threshold)
}

fn run(mut session: PuzzleSession, swipe_threshold: f32) -> Result<()> {
    let mut hud = TerminalHud;
    session.start(&mut hud)?;
    redraw(&session);
    println!("commands: u/d/l/r, <tile> <dir>, swipe <tile> <dx> <dy>, restart, quit");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        match input::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                session.restart(&mut hud)?;
                redraw(&session);
            }
            Some(Command::Swipe { source, dx, dy }) => {
                handle_swipe(&mut session, &mut hud, source, dx, dy, swipe_threshold);
            }
            None => {
                if !line.trim().is_empty() {
                    println!("commands: u/d/l/r, <tile> <dir>, swipe <tile> <dx> <dy>, restart, quit");
                }
            }
        }
        prompt()?;
    }
    Ok(())
}

fn handle_swipe(
    session: &mut PuzzleSession,
    hud: &mut TerminalHud,
    source: Source,
    dx: f32,
    dy: f32,
    swipe_threshold: f32,
) {
    if session.phase() == SessionPhase::Solved {
        println!("already solved; `restart` starts a new round");
        return;
    }
    if (dx * dx + dy * dy).sqrt() < swipe_threshold {
        log::debug!("gesture ({dx}, {dy}) below the {swipe_threshold}-unit threshold, ignored");
        return;
    }
    let direction = Direction::from_vector(dx, dy);
    let Some(index) = resolve_source(session, source, direction) else {
        println!("no tile can move that way");
        return;
    };
    let report = session.handle_move(index, direction, hud);
    match report.outcome {
        MoveOutcome::Moved(_) => redraw(session),
        MoveOutcome::Blocked => println!("that tile is blocked"),
        MoveOutcome::NoMove => println!("no tile can move that way"),
    }
    if report.solved_now {
        println!("finished in {} moves; `restart` for another round", report.move_count);
    }
}

/// Pick the board index a swipe starts on. A bare direction means "slide
/// whatever can slide that way": the tile on the opposite side of the
/// empty cell.
fn resolve_source(session: &PuzzleSession, source: Source, direction: Direction) -> Option<usize> {
    let board = session.board()?;
    match source {
        Source::Tile(display) => board.position_of(TileId(display - 1)),
        Source::AdjacentToEmpty => board.step(board.empty_index(), direction.opposite()),
    }
}

fn redraw(session: &PuzzleSession) {
    if let Some(board) = session.board() {
        print!("{}", render::draw(board));
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}
