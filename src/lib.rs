pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use std::io;
use std::path::{Component, Path, PathBuf};

/// Last component of `path`, or the whole path when it has none (`/`).
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned())
}

/// Make `path` absolute and fold away `.` and `..` by text alone.
/// Symlinks are left as they are, so a linked root keeps its own name.
pub fn resolve_root(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// First line of the tree for an already-resolved root directory.
pub fn root_line(root_path: &Path) -> String {
    let name = base_name(root_path);
    if name.ends_with(std::path::MAIN_SEPARATOR) {
        name
    } else {
        format!("{name}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_line_appends_separator() {
        assert_eq!(root_line(Path::new("/home/user/project")), "project/");
        assert_eq!(root_line(Path::new("relative/dir")), "dir/");
    }

    #[cfg(unix)]
    #[test]
    fn filesystem_root_prints_as_itself() {
        assert_eq!(root_line(Path::new("/")), "/");
    }

    #[cfg(unix)]
    #[test]
    fn resolve_root_folds_dots_without_touching_links() {
        let resolved = resolve_root(Path::new("/srv/./data/../rootlink/")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/rootlink"));

        assert_eq!(resolve_root(Path::new("/..")).unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn resolve_root_of_relative_path_is_under_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_root(Path::new("sub/../x")).unwrap(), cwd.join("x"));
        assert_eq!(resolve_root(Path::new(".")).unwrap(), cwd);
    }

    #[test]
    fn base_name_of_plain_name() {
        assert_eq!(base_name(Path::new("notes.txt")), "notes.txt");
    }
}
