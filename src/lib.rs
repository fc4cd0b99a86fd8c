//! vetta - A terminal client for AI-assisted interviews
//!
//! A candidate uploads a resume, records one audio answer per generated
//! question, and views AI-produced scoring. A dashboard lists all candidates.
//! Question generation and evaluation happen behind a remote HTTP API.

pub mod api;
pub mod cli;
pub mod config;
pub mod flow;
pub mod recorder;
pub mod score;
pub mod session;
pub mod tui;

use thiserror::Error;

/// Main error type for vetta
#[derive(Error, Debug)]
pub enum VettaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, VettaError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "vetta";
