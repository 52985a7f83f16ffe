//! Command-line definitions for srp
//!
//! Kept in the library so `xtask` can render man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::player::AxisMapping;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("SRP_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SRP_BUILD_DATE"), ")");

/// Shavit Replay Player - decode bhop timer replays and play them back
#[derive(Parser, Debug)]
#[command(name = "srp", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show header information for one or more replay files
    Info {
        /// Replay files to inspect
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        /// Print headers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump decoded frames
    Frames {
        /// Replay file
        file: PathBuf,

        /// First frame to print (inclusive)
        #[arg(long, value_name = "N")]
        from: Option<usize>,

        /// Last frame to print (exclusive)
        #[arg(long, value_name = "N")]
        to: Option<usize>,

        /// Print frames as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the playback pose at a point in time
    Pose {
        /// Replay file
        file: PathBuf,

        /// Seconds from the start of playback
        #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
        at: f64,

        /// World axis mapping (defaults to the configured one)
        #[arg(long, value_enum)]
        axis: Option<AxisMapping>,

        /// Print the pose as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a replay in the terminal
    Play {
        /// Replay file
        file: PathBuf,

        /// Print poses as JSON lines instead of drawing a UI
        #[arg(long)]
        headless: bool,

        /// With --headless, do not wait between samples
        #[arg(long, requires = "headless")]
        fast: bool,

        /// World axis mapping (defaults to the configured one)
        #[arg(long, value_enum)]
        axis: Option<AxisMapping>,
    },

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
