use async_trait::async_trait;
use std::fs::FileType;
use std::io;
use std::path::Path;
use tokio::task;

use crate::error::WalkError;
use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>, WalkError> {
        let owned = dir.to_path_buf();
        let listing = task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&owned)?.filter_map(|e| e.ok()) {
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                let path = entry.path();

                // Symlinks take the kind of their target.
                let kind = if file_type.is_symlink() {
                    std::fs::metadata(&path)
                        .map(|metadata| entry_kind(metadata.file_type()))
                        .unwrap_or(EntryKind::Other)
                } else {
                    entry_kind(file_type)
                };

                entries.push(FsEntry {
                    path,
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok::<_, io::Error>(entries)
        })
        .await
        .map_err(|err| WalkError::from_io(dir, io::Error::other(err)))?;

        listing.map_err(|err| WalkError::from_io(dir, err))
    }
}

fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
