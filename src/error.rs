use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single filing produced no output. None of these stop a batch.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not find Item 1A section")]
    SectionNotFound,
    #[error("no sentences extracted")]
    EmptyExtraction,
    #[error("failed to read {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
