use crate::errors::{AppError, AppResult};
use crate::store::log::log_file_for;
use crate::store::roster::tmp_file_for;
use crate::ui::messages::warning;
use crate::utils::path::resolve;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// May `path` be (over)written?
///
/// A missing file or `force` always passes. An existing file needs a `y`
/// answer on an interactive terminal; piped input never overwrites.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory",
            path.display()
        )));
    }

    let refused = || {
        AppError::Export(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        ))
    };

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(refused());
    }

    warning(format!("'{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    stdin.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(refused()),
    }
}

/// Refuse a destination that resolves to the data file, its save temp file
/// or its operation log.
pub(crate) fn ensure_not_data_file(dest: &Path, data_file: &Path) -> AppResult<()> {
    let target = resolve(dest);
    let protected = [
        data_file.to_path_buf(),
        tmp_file_for(data_file),
        log_file_for(data_file),
    ];

    if protected.iter().any(|p| resolve(p) == target) {
        return Err(AppError::Export(format!(
            "'{}' is the data file or one of its companion files; choose another destination",
            dest.display()
        )));
    }
    Ok(())
}
