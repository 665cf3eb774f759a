mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::path::Path;

use crate::error::WalkError;
use crate::models::FsEntry;

/// Lists the immediate children of a directory, in no particular order.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>, WalkError>;
}
