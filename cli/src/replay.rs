use std::io::{self, Write};

use clap::Args;
use snake_core::{Direction, GameEngine};

use crate::config::RoundArgs;
use crate::render;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub round: RoundArgs,

    /// Comma separated directions, one per tick (left, right, up, down or l, r, u, d)
    #[arg(long, value_delimiter = ',', required = true)]
    pub moves: Vec<Direction>,

    /// Print the board as text instead of JSON
    #[arg(long)]
    pub board: bool,
}

pub fn run(args: &ReplayArgs) -> anyhow::Result<()> {
    let config = args.round.game_config()?;
    let seed = args.round.seed();
    log::info!("Replaying {} moves with seed {seed}", args.moves.len());

    let mut engine = GameEngine::with_seed(config, seed)?;
    let mut out = io::stdout().lock();
    emit(&mut out, args.board, &engine)?;

    for &direction in &args.moves {
        let outcome = engine.tick(Some(direction))?;
        emit(&mut out, args.board, &engine)?;
        if outcome.is_finished() {
            log::info!("Round ended {outcome:?} after {} ticks", engine.state().ticks());
            break;
        }
    }
    Ok(())
}

fn emit(out: &mut impl Write, board: bool, engine: &GameEngine) -> anyhow::Result<()> {
    let snapshot = engine.snapshot();
    if board {
        writeln!(out, "{}", render::status_line(&snapshot))?;
        write!(out, "{}", render::board_text(&snapshot))?;
    } else {
        serde_json::to_writer(&mut *out, &snapshot)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::{GameConfig, GameSnapshot};

    #[test]
    fn json_lines_parse_back() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 5).unwrap();
        engine.tick(Some(Direction::Up)).unwrap();

        let mut out = Vec::new();
        emit(&mut out, false, &engine).unwrap();
        let line = String::from_utf8(out).unwrap();
        let snapshot: GameSnapshot = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(snapshot, engine.snapshot());
        assert_eq!(snapshot.ticks, 1);
    }

    #[test]
    fn board_output_has_status_then_rows() {
        let engine = GameEngine::with_seed(GameConfig::new(4).unwrap(), 5).unwrap();
        let mut out = Vec::new();
        emit(&mut out, true, &engine).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("length 1"));
    }
}
