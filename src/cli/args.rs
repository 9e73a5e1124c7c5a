use clap::Parser;

use crate::config::{GalaxyPolicy, GameConfig};
use crate::ui::tiles::Tileset;

#[derive(Parser, Debug)]
#[command(name = "space_battle")]
#[command(about = "Turn-based space exploration on a 40x25 character screen")]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Glyph set for the sector display
    #[arg(long, value_enum, default_value_t = Tileset::Graphics)]
    pub tileset: Tileset,

    /// Draw sector tiles without color
    #[arg(long)]
    pub mono: bool,

    /// Keep the first galaxy instead of generating a new one every turn
    #[arg(long)]
    pub persist_galaxy: bool,

    /// Print frames to stdout instead of taking over the terminal
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to print in headless mode
    #[arg(long, default_value = "1", requires = "headless")]
    pub turns: usize,
}

impl Args {
    pub fn config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            tileset: self.tileset,
            monochrome: self.mono,
            galaxy_policy: if self.persist_galaxy {
                GalaxyPolicy::Persistent
            } else {
                GalaxyPolicy::RegenerateEachTurn
            },
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
