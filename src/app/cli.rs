//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stimulus Rater - headless tools for approach-speed rating experiments
#[derive(Parser, Debug)]
#[command(name = "stim-rate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one trajectory headlessly and print or dump its poses
    Simulate {
        /// Speed in pixels per tick
        #[arg(short, long, default_value = "40")]
        speed: i32,

        /// RNG seed for the jitter draws (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Write poses as JSON to this file instead of printing them
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a shuffled rating schedule for the given stimuli
    Schedule {
        /// Stimulus identifiers (e.g. image names)
        #[arg(required = true)]
        stimuli: Vec<String>,

        /// RNG seed for the shuffle (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Summarize saved session logs
    Inspect {
        /// Show per-trial records
        #[arg(short, long)]
        detailed: bool,
    },

    /// Initialize configuration and data directories
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g. "motion.crossover_y")
        key: String,
    },

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Directory session logs are read from
    pub fn sessions_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".stimulus_rater").join("sessions"))
            .unwrap_or_else(|| PathBuf::from("sessions"))
    }
}
