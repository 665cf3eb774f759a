/// Totals gathered while rendering one tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RenderStats {
    pub directories: usize,
    pub files: usize,
    pub access_denied: usize,
    pub not_found: usize,
}

impl RenderStats {
    /// Number of entry lines written, placeholders excluded.
    pub fn lines(&self) -> usize {
        self.directories + self.files
    }
}
