use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{OffLevel, Verbosity};
use simplelog::{Config, WriteLogger};

mod config;
mod play;
mod render;
mod replay;

#[derive(Parser, Debug)]
#[command(version, about = "Grid snake for the terminal", long_about = None)]
struct Cli {
    /// What log level to use, nothing is logged without -v
    #[command(flatten)]
    verbose: Verbosity<OffLevel>,

    /// File that receives log output when -v is given, the terminal is busy
    /// with the board
    #[arg(long, global = true, default_value = "snake.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a round with the arrow keys (or WASD), q or Ctrl-C to quit
    Play(play::PlayArgs),
    /// Run a fixed list of moves headlessly and print one JSON snapshot per tick
    Replay(replay::ReplayArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_level) = cli.verbose.log_level() {
        let file = File::create(&cli.log_file)
            .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
        WriteLogger::init(log_level.to_level_filter(), Config::default(), file)
            .context("initializing logger")?;
    }
    log::debug!("{:?}", cli.command);

    match cli.command {
        Command::Play(args) => play::run(&args),
        Command::Replay(args) => replay::run(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_replay_moves() {
        let cli = Cli::try_parse_from([
            "snake", "replay", "--seed", "3", "--moves", "up,left,l,Down",
        ])
        .unwrap();
        let Command::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.moves.len(), 4);
        assert_eq!(args.round.seed, Some(3));
    }

    #[test]
    fn logging_is_off_unless_asked_for() {
        let quiet = Cli::try_parse_from(["snake", "replay", "--moves", "up"]).unwrap();
        assert_eq!(quiet.verbose.log_level(), None);

        let verbose = Cli::try_parse_from(["snake", "-vv", "replay", "--moves", "up"]).unwrap();
        assert_eq!(verbose.verbose.log_level(), Some(log::Level::Warn));
    }
}
