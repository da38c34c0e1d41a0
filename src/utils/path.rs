//! Path utilities: expand `~`, derive companion file names, compare paths.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// `~/x` → `$HOME/x`, `~` → `$HOME`; anything else is returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Append `suffix` to the whole file name: `data.csv` + `.log` → `data.csv.log`.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Best-effort canonical form of a path that may not exist yet: the parent
/// directory is canonicalized and the file name re-attached.
pub fn resolve(path: &Path) -> PathBuf {
    if let Ok(p) = path.canonicalize() {
        return p;
    }
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) else {
        return absolute.clone();
    };
    match parent.canonicalize() {
        Ok(p) => p.join(name),
        Err(_) => absolute.clone(),
    }
}
