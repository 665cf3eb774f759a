pub mod filter;
pub mod render;
pub mod walk;

pub use filter::{ExcludeGlobs, FilterConfig};
pub use walk::TreeRenderer;
