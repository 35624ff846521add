//! Error types for cistring

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting, reading or reporting on inputs
#[derive(Error, Debug)]
pub enum CiStringError {
    #[error("Input path does not exist: {path}")]
    MissingPath { path: PathBuf },

    #[error("Failed to read input file: {path}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to decode {encoding} input: {path}")]
    TranscodeError {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("Failed to write output")]
    OutputError {
        #[source]
        source: std::io::Error,
    },
}
