use std::path::PathBuf;

use clap::Parser;
use galaxy_config::GalaxyConfig;

/// Galaxy: an animated spiral-galaxy point cloud with live-tunable parameters.
#[derive(Parser, Debug, Default)]
#[command(name = "galaxy", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `galaxy=debug`). Overrides `logging.level`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Fixed RNG seed. Overrides `generator.seed`.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of points. Overrides `galaxy.count`.
    #[arg(long)]
    pub count: Option<u32>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Do not reload the config file when it changes.
    #[arg(long)]
    pub no_watch: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Command-line values that take precedence over the config file,
/// including after a live reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub count: Option<u32>,
}

impl Overrides {
    pub fn from_args(args: &Args) -> Self {
        Self {
            seed: args.seed,
            count: args.count,
        }
    }

    pub fn apply(&self, config: &mut GalaxyConfig) {
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if let Some(count) = self.count {
            config.galaxy.count = count;
        }
    }
}
