pub mod add;
pub mod backup;
pub mod config;
pub mod edit;
pub mod log;
pub mod pay;

use crate::store::log::hrlog;
use crate::ui::messages::warning;
use std::path::Path;

/// Record an operation in the log beside `data_file`.
/// A failed write is reported and otherwise ignored.
pub(crate) fn audit(data_file: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = hrlog(data_file, operation, target, message) {
        warning(format!("Failed to write operation log: {}", e));
    }
}
