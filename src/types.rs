//! Core types and errors for the sourcemap publisher.

use clap::ValueEnum;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while publishing sourcemaps.
#[derive(Error, Debug)]
pub enum MapshipError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Directory traversal error: {0}")]
    GlobError(#[from] glob::GlobError),
}

pub type Result<T> = std::result::Result<T, MapshipError>;

/// How uploads are scheduled against the APM server.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    /// One request at a time, in discovery order.
    Serial,
    /// All requests in flight at once.
    Parallel,
}

/// Terminal status of a single upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// Not yet attempted.
    Pending,
    /// Server answered 2xx.
    SentOk,
    /// Request errored or server answered non-2xx. Never retried.
    SentFailed,
}

/// One sourcemap file queued for upload.
#[derive(Debug, Clone)]
pub struct UploadTask {
    /// Absolute path to the `.map` file, as yielded by the glob scan.
    pub source_map_path: PathBuf,
    /// Public URL of the bundle this map belongs to.
    pub bundle_filepath: String,
    /// Outcome of the single attempt.
    pub status: UploadStatus,
}

impl UploadTask {
    pub fn new(source_map_path: PathBuf, bundle_filepath: String) -> Self {
        Self {
            source_map_path,
            bundle_filepath,
            status: UploadStatus::Pending,
        }
    }
}
