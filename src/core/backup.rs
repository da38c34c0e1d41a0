use crate::core::audit;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_not_data_file, ensure_writable};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest_file`, optionally zipped.
    /// Returns the path actually written.
    pub fn backup(
        data_file: &Path,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if !dest.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Backup file path must be absolute: {dest_file}"
            ))));
        }

        // 1️⃣ Check data file exists
        if !data_file.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data file not found: {}", data_file.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Never write over the data file, then ask before overwriting
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_not_data_file(&final_target, data_file)?;
        ensure_writable(&final_target, force)?;

        // 4️⃣ Copy, or zip straight from the data file
        let final_path = if compress {
            compress_into(data_file, &final_target)?
        } else {
            fs::copy(data_file, dest)?;
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));

        // 5️⃣ Log
        audit(
            data_file,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Write `src` as the single entry of a deflated zip at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = match src.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => {
            warning("Data file has no file name, using 'employee.data.csv'");
            "employee.data.csv".to_string()
        }
    };

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}
