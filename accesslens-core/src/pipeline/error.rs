use std::path::PathBuf;
use thiserror::Error;

/// File-level failures. Anything that goes wrong with a single line or record
/// is handled in place and never shows up here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to open input file {path}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input at line {line}")]
    ReadInput {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize records")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output file {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn open_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenInput {
            path: path.into(),
            source,
        }
    }

    pub fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
