mod entry;
mod stats;

pub use entry::{EntryKind, FsEntry};
pub use stats::RenderStats;
