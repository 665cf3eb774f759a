use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::filter::FilterConfig;
use crate::core::render::{self, Connector};
use crate::error::WalkError;
use crate::fs::FileSystem;
use crate::models::{FsEntry, RenderStats};

/// An open directory: its remaining visible entries, in print order.
struct Frame {
    entries: VecDeque<FsEntry>,
    depth: usize,
    /// Connector of the entry that opened this directory; `None` for the root.
    opened_by: Option<Connector>,
}

/// Mutable state of a single render.
struct Walk<'w, W, E> {
    out: &'w mut W,
    diagnostics: &'w mut E,
    stack: Vec<Frame>,
    stats: RenderStats,
}

fn ancestors(stack: &[Frame]) -> impl Iterator<Item = Connector> + '_ {
    stack.iter().filter_map(|frame| frame.opened_by)
}

/// Depth-first tree printer.
///
/// Walks with an explicit stack of open directories rather than recursion, so
/// the depth of the tree never limits the walk. Each line's indentation is
/// rebuilt from the connectors of the frames on the stack.
pub struct TreeRenderer<'a, F: FileSystem> {
    fs: &'a F,
    config: &'a FilterConfig,
}

impl<'a, F: FileSystem> TreeRenderer<'a, F> {
    pub fn new(fs: &'a F, config: &'a FilterConfig) -> Self {
        Self { fs, config }
    }

    /// Print every visible descendant of `root` to `out`, one line each.
    ///
    /// The root line itself is the caller's. Missing directories are reported
    /// on `diagnostics`; unreadable ones get a placeholder line on `out`. Any
    /// other listing failure, or a failed write, ends the render with an error.
    pub async fn render<W: Write, E: Write>(
        &self,
        root: &Path,
        out: &mut W,
        diagnostics: &mut E,
    ) -> anyhow::Result<RenderStats> {
        let mut walk = Walk {
            out,
            diagnostics,
            stack: Vec::new(),
            stats: RenderStats::default(),
        };

        let root_name = crate::base_name(root);
        if let Some(frame) = self.open(&mut walk, root, &root_name, 0, None).await? {
            walk.stack.push(frame);
        }

        while let Some(frame) = walk.stack.last_mut() {
            let Some(entry) = frame.entries.pop_front() else {
                walk.stack.pop();
                continue;
            };
            let connector = Connector::for_position(frame.entries.is_empty());
            let depth = frame.depth;

            render::write_entry(&mut *walk.out, ancestors(&walk.stack), connector, &entry)?;

            if !entry.kind.is_dir() {
                walk.stats.files += 1;
                continue;
            }

            walk.stats.directories += 1;
            if let Some(child) = self
                .open(&mut walk, &entry.path, &entry.name, depth + 1, Some(connector))
                .await?
            {
                walk.stack.push(child);
            }
        }

        debug!(
            directories = walk.stats.directories,
            files = walk.stats.files,
            access_denied = walk.stats.access_denied,
            not_found = walk.stats.not_found,
            "rendered {}",
            root.display()
        );
        Ok(walk.stats)
    }

    /// List `dir` and turn it into a frame, or `None` when there is nothing
    /// to descend into.
    async fn open<W: Write, E: Write>(
        &self,
        walk: &mut Walk<'_, W, E>,
        dir: &Path,
        name: &str,
        depth: usize,
        opened_by: Option<Connector>,
    ) -> anyhow::Result<Option<Frame>> {
        if !self.config.allows_depth(depth) {
            debug!(depth, "depth limit reached at {}", dir.display());
            return Ok(None);
        }

        let entries = match self.fs.read_dir(dir).await {
            Ok(entries) => entries,
            Err(WalkError::AccessDenied { path }) => {
                warn!("access denied: {}", path.display());
                walk.stats.access_denied += 1;
                let prefix = ancestors(&walk.stack).chain(opened_by);
                render::write_access_denied(&mut *walk.out, prefix, name)?;
                return Ok(None);
            }
            Err(err @ WalkError::NotFound { .. }) => {
                warn!("{err}");
                walk.stats.not_found += 1;
                writeln!(walk.diagnostics, "Error: {err}")?;
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let total = entries.len();
        let entries = self.config.apply(entries);
        debug!(
            depth,
            kept = entries.len(),
            total,
            "listed {}",
            dir.display()
        );

        Ok(Some(Frame {
            entries: entries.into(),
            depth,
            opened_by,
        }))
    }
}
