use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to list a directory during a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("directory not found - {}", path.display())]
    NotFound { path: PathBuf },
    #[error("access denied - {}", path.display())]
    AccessDenied { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path },
            _ => Self::Io { path, source: err },
        }
    }
}
