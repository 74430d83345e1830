use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a run. Anything that only concerns one file is a
/// [`DecodeError`] instead and never leaves the scan command.
#[derive(Error, Debug)]
pub enum TagCheckError {
    #[error("Malformed tag identity: {0:?} (expected \"(GGGG,EEEE)\")")]
    MalformedIdentity(String),

    #[error("The directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("Cannot write report to '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TagCheckError {
    /// Process exit status for this condition. Usage errors (2) are left to clap.
    pub fn exit_code(&self) -> i32 {
        match self {
            TagCheckError::RootNotFound(_) => 3,
            TagCheckError::MalformedIdentity(_) | TagCheckError::Config { .. } => 4,
            TagCheckError::Output { .. } | TagCheckError::Io(_) => 5,
        }
    }
}

/// Per-file decode failures.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("'{}' does not appear to be a DICOM file ({reason})", path.display())]
    NotDicom { path: PathBuf, reason: String },

    #[error("Missing dataset in DICOM file '{}'", path.display())]
    MissingDataset { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TagCheckError>;
