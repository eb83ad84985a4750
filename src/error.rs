//! Error taxonomy for the generation pipeline.
//!
//! Every fatal condition maps to exactly one variant, and every variant maps
//! to a distinct non-zero process exit code so automated callers can tell the
//! failure kinds apart.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The environment did not yield a usable configuration.
    #[error("{0}")]
    Configuration(String),

    /// The scan produced zero corpus sections.
    #[error("no files matching the requested extensions were found under {}", root.display())]
    Discovery { root: PathBuf },

    /// The prompt template could not be read from its fixed location.
    #[error("prompt template not found at {}", path.display())]
    TemplateMissing { path: PathBuf },

    /// The remote completion call failed: network, auth, quota, or a
    /// response with no generated text.
    #[error("completion request failed: {0}")]
    Transport(String),

    /// The artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Process exit code for this failure kind. Codes are stable: scripts may
    /// match on them.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Configuration(_) => 2,
            Error::Discovery { .. } => 3,
            Error::TemplateMissing { .. } => 4,
            Error::Transport(_) => 5,
            Error::Persistence { .. } => 6,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
