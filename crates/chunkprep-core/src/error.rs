use std::path::PathBuf;

use thiserror::Error;

use crate::corpus::SourceRole;

/// Errors that can occur while converting a chunking corpus.
#[derive(Debug, Error)]
pub enum ChunkprepError {
    /// The configured source folder does not exist or is not a directory.
    #[error("source folder not found: {}", path.display())]
    SourceFolderMissing {
        /// The folder that was looked up.
        path: PathBuf,
    },

    /// The file configured for a source role is absent from the source folder.
    #[error("{role} source file not found: {}", path.display())]
    SourceFileMissing {
        /// Which role the file was expected to fill.
        role: SourceRole,
        /// The full path that was looked up.
        path: PathBuf,
    },

    /// Reading, writing or creating something on disk failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line did not yield exactly one token and one label.
    #[error("malformed line {line} in {}: {content:?}", path.display())]
    MalformedLine {
        /// The file containing the line.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The offending line, verbatim.
        content: String,
    },

    /// The train/validation ratio is outside `[0, 1]` or not finite.
    #[error("invalid train ratio {0}: expected a value between 0 and 1")]
    InvalidTrainRatio(f64),
}

impl ChunkprepError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChunkprepError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for chunkprep operations.
pub type Result<T> = std::result::Result<T, ChunkprepError>;
