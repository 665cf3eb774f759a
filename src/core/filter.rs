use std::collections::HashSet;

use anyhow::Context;
use regex::RegexSet;

use crate::models::{EntryKind, FsEntry};

/// Names skipped on every walk, in addition to any `-I` names.
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    "__pycache__",
    ".vscode",
    ".idea",
    "node_modules",
    "build",
    "dist",
];

/// `--exclude` globs, compiled into one `RegexSet`.
/// `*` matches any run of characters and `?` exactly one; everything else is literal.
#[derive(Debug, Default)]
pub struct ExcludeGlobs {
    set: Option<RegexSet>,
}

impl ExcludeGlobs {
    pub fn new<S: AsRef<str>>(globs: &[S]) -> anyhow::Result<Self> {
        if globs.is_empty() {
            return Ok(Self::default());
        }

        let patterns: Vec<String> = globs.iter().map(|glob| glob_to_regex(glob.as_ref())).collect();
        let set = RegexSet::new(&patterns)
            .with_context(|| format!("Invalid exclude pattern: {patterns:?}"))?;

        Ok(Self { set: Some(set) })
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.set.as_ref().is_some_and(|set| set.is_match(name))
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_none()
    }
}

/// Anchor a glob to the whole name.
fn glob_to_regex(glob: &str) -> String {
    let mut regex_pattern = String::with_capacity(glob.len() * 2 + 2);
    regex_pattern.push('^');

    let mut buf = [0u8; 4];
    for c in glob.chars() {
        match c {
            '*' => regex_pattern.push_str(".*"),
            '?' => regex_pattern.push('.'),
            _ => regex_pattern.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }

    regex_pattern.push('$');
    regex_pattern
}

/// Everything that decides which entries a walk prints.
///
/// Built once before the walk and only ever borrowed afterwards.
#[derive(Debug)]
pub struct FilterConfig {
    /// Exact names to skip, defaults included.
    pub ignore: HashSet<String>,
    /// Glob patterns to skip.
    pub exclude: ExcludeGlobs,
    /// Show entries whose name starts with '.'
    pub show_hidden: bool,
    /// Show plain files
    pub include_files: bool,
    /// Show directories only
    pub only_dirs: bool,
    /// Deepest level that is listed; `None` is unlimited.
    pub max_depth: Option<usize>,
    /// Move directories ahead of other entries after sorting by name
    pub dirs_first: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORES.iter().map(|name| (*name).to_owned()).collect(),
            exclude: ExcludeGlobs::default(),
            show_hidden: false,
            include_files: true,
            only_dirs: false,
            max_depth: None,
            dirs_first: false,
        }
    }
}

impl FilterConfig {
    /// Add user-supplied names to the ignore set.
    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    /// Map a `-L` value to a depth limit; negative values mean unlimited.
    pub fn depth_limit(level: i64) -> Option<usize> {
        usize::try_from(level).ok()
    }

    /// Whether a directory at `depth` (root = 0) may still be listed.
    pub fn allows_depth(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(max) => depth < max,
            None => true,
        }
    }

    /// Whether `entry` survives the filter pipeline.
    pub fn keeps(&self, entry: &FsEntry) -> bool {
        if self.ignore.contains(&entry.name) {
            return false;
        }

        if self.exclude.matches(&entry.name) {
            return false;
        }

        if !self.show_hidden && entry.is_hidden() {
            return false;
        }

        if self.only_dirs && !entry.kind.is_dir() {
            return false;
        }

        if !self.include_files && entry.kind == EntryKind::File {
            return false;
        }

        true
    }

    /// Sort a listing by name, then drop everything `keeps` rejects.
    pub fn apply(&self, mut entries: Vec<FsEntry>) -> Vec<FsEntry> {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries.retain(|entry| self.keeps(entry));

        if self.dirs_first {
            // sort_by_key is stable, so name order survives within each group
            entries.sort_by_key(|entry| !entry.kind.is_dir());
        }

        entries
    }
}
