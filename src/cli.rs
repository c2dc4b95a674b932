// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "peerwork-settings")]
#[command(about = "Peer-assessment settings form CLI", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to peerwork.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a settings form submission
    Validate {
        /// Submission JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Validate a submission and produce the record to persist
    Normalize {
        /// Submission JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Write the record to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the values the settings form starts with
    Defaults {
        /// Stored record being edited
        #[arg(short, long)]
        record: Option<PathBuf>,
    },

    /// Show a stored settings record
    Show {
        /// Stored record
        #[arg(short, long)]
        record: PathBuf,
    },
}
