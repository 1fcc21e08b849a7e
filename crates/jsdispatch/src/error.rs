use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors of the read loop.
///
/// Unknown group/id combinations are not errors: they are dropped by the
/// decoder and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// The input device could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The stream ended before a full record was read.
    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },
    /// The stream failed while reading.
    #[error("read error: {0}")]
    Read(#[from] io::Error),
    /// The listener thread could not be started.
    #[error("failed to spawn listener thread: {0}")]
    Spawn(#[source] io::Error),
}

/// Convenient result alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, Error>;
