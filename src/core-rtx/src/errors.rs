use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the core outside of composition itself, which never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// The generated document could not be saved.
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
