use crate::scheduler::Cylinder;
use std::{io, num::ParseIntError, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid disk size: max_cylinder must be at least 1, got {0}")]
    InvalidDiskSize(Cylinder),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Request file not found: {path}")]
    RequestFileNotFound { path: PathBuf },

    #[error("Invalid cylinder request at line {line}: {value}")]
    InvalidRequest {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid request line {line}: expected 1 value, got {got}")]
    InvalidRequestRow { line: usize, got: usize },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl SchedulerError {
    /// True for errors caused by the contents of a request file rather than its absence.
    pub fn is_invalid_data(&self) -> bool {
        matches!(
            self,
            SchedulerError::InvalidRequest { .. }
                | SchedulerError::InvalidRequestRow { .. }
                | SchedulerError::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
