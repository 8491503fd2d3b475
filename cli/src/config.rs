use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use snake_core::{Coord, GameConfig};

/// Round settings shared by every subcommand. Flags win over the config file.
#[derive(Args, Debug, Default)]
pub struct RoundArgs {
    /// TOML file with `size`, `initial_direction` and `tick_interval_ms`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Side length of the square grid
    #[arg(long)]
    pub size: Option<Coord>,

    /// Milliseconds between ticks
    #[arg(long)]
    pub tick_ms: Option<u32>,

    /// Force a seed for food placement instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl RoundArgs {
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_config(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn parse_config(text: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = toml::from_str(text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::{Direction, GameError};

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config("size = 16\ninitial_direction = \"Up\"\n").unwrap();
        assert_eq!(config.size, 16);
        assert_eq!(config.initial_direction, Direction::Up);
        assert_eq!(config.tick_interval_ms, 800);
    }

    #[test]
    fn flags_override_defaults() {
        let args = RoundArgs {
            size: Some(12),
            tick_ms: Some(150),
            ..RoundArgs::default()
        };
        let config = args.game_config().unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.tick_interval_ms, 150);
    }

    #[test]
    fn tiny_grid_is_rejected() {
        let args = RoundArgs {
            size: Some(1),
            ..RoundArgs::default()
        };
        let err = args.game_config().unwrap_err();
        assert_eq!(err.downcast_ref::<GameError>(), Some(&GameError::InvalidSize));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let args = RoundArgs {
            tick_ms: Some(0),
            ..RoundArgs::default()
        };
        let err = args.game_config().unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::InvalidTickInterval)
        );
    }

    #[test]
    fn fixed_seed_is_kept() {
        let args = RoundArgs {
            seed: Some(77),
            ..RoundArgs::default()
        };
        assert_eq!(args.seed(), 77);
    }
}
