//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vetta - AI-assisted interviews from the terminal
#[derive(Parser, Debug)]
#[command(name = "vetta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a resume and print the generated interview questions
    Upload {
        /// Candidate full name
        #[arg(short, long)]
        name: String,

        /// Candidate email address
        #[arg(short, long)]
        email: String,

        /// Path to the resume file (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Show the evaluation for a candidate
    Results {
        /// Candidate ID (defaults to the last completed interview)
        candidate_id: Option<String>,
    },

    /// List all candidates and their final scores
    Candidates,

    /// Show one candidate's full record
    Candidate {
        /// Candidate ID
        candidate_id: String,
    },

    /// Launch the interactive TUI (upload, interview, results, dashboard)
    Tui,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
