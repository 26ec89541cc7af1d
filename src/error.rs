//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from converting a document.
///
/// `Usage` and `MissingFile` are pre-flight failures reported before any
/// output is touched; their messages are the exact text the command line
/// prints.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Usage: ./markdown2html.py README.md README.html")]
    Usage,

    #[error("Fichier manquant {}", path.display())]
    MissingFile { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the error was raised before conversion started.
    pub fn is_preflight(&self) -> bool {
        matches!(self, Self::Usage | Self::MissingFile { .. })
    }
}
