//! HTML report export.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{debug, warn};

use crate::config::{
    MAX_REPORT_SUFFIX, REPORT_FILE_EXTENSION, REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT,
};
use crate::error_handling::ExportError;
use crate::lookup::LookupResult;
use crate::render::render_html;

/// Builds the report filename for `timestamp`.
///
/// `suffix == 0` gives `ip_report_<YYYYMMDD_HHMMSS>.html`; any other value
/// gives `ip_report_<YYYYMMDD_HHMMSS>_<suffix>.html`.
pub fn report_file_name(timestamp: &DateTime<Local>, suffix: u32) -> String {
    let stamp = timestamp.format(REPORT_TIMESTAMP_FORMAT);
    if suffix == 0 {
        format!("{}{}.{}", REPORT_FILE_PREFIX, stamp, REPORT_FILE_EXTENSION)
    } else {
        format!(
            "{}{}_{}.{}",
            REPORT_FILE_PREFIX, stamp, suffix, REPORT_FILE_EXTENSION
        )
    }
}

/// Writes `result` as an HTML report into `output_dir`.
///
/// The filename uses the local time at the moment of the call. Existing files are
/// never overwritten: if the name is taken (two exports in the same second), a
/// numeric suffix is appended.
///
/// # Returns
///
/// The path of the report that was written.
///
/// # Errors
///
/// Returns `ExportError::FileWrite` if the file cannot be created or written
/// (missing directory, permission denied, every suffix taken).
pub fn export_to_html(result: &LookupResult, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let now = Local::now();
    let document = render_html(result, &now);
    write_report(output_dir, &now, |file| {
        file.write_all(document.as_bytes())?;
        file.flush()
    })
}

/// Creates a fresh report file in `output_dir` and fills it with `write`.
///
/// A file that fails mid-write is removed so no truncated report is left behind.
fn write_report<F>(
    output_dir: &Path,
    timestamp: &DateTime<Local>,
    write: F,
) -> Result<PathBuf, ExportError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    for suffix in 0..=MAX_REPORT_SUFFIX {
        let path = output_dir.join(report_file_name(timestamp, suffix));
        // create_new fails with AlreadyExists instead of truncating
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("Report {} already exists, trying next suffix", path.display());
                continue;
            }
            Err(source) => return Err(ExportError::FileWrite { path, source }),
        };

        if let Err(source) = write(&mut file) {
            drop(file);
            if let Err(e) = fs::remove_file(&path) {
                warn!("Failed to remove partial report {}: {}", path.display(), e);
            }
            return Err(ExportError::FileWrite { path, source });
        }
        debug!("Wrote report {}", path.display());
        return Ok(path);
    }

    Err(ExportError::FileWrite {
        path: output_dir.join(report_file_name(timestamp, 0)),
        source: std::io::Error::new(
            ErrorKind::AlreadyExists,
            "every report filename for this second is taken",
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("Unambiguous local test time")
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name(&fixed_time(), 0),
            "ip_report_20240309_140507.html"
        );
        assert_eq!(
            report_file_name(&fixed_time(), 2),
            "ip_report_20240309_140507_2.html"
        );
    }

    #[test]
    fn test_same_second_does_not_clobber() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let first = write_report(dir.path(), &fixed_time(), |f| f.write_all(b"first")).unwrap();
        let second =
            write_report(dir.path(), &fixed_time(), |f| f.write_all(b"second")).unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read(&first).unwrap(), b"first");
        assert_eq!(std::fs::read(&second).unwrap(), b"second");
        assert!(second.ends_with("ip_report_20240309_140507_1.html"));
    }

    #[test]
    fn test_failed_write_removes_partial_report() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let err = write_report(dir.path(), &fixed_time(), |f| {
            f.write_all(b"<!DOCTYPE html>\n<ht")?;
            Err(io::Error::new(ErrorKind::WriteZero, "disk full"))
        })
        .unwrap_err();

        match err {
            ExportError::FileWrite { path, source } => {
                assert!(path.ends_with("ip_report_20240309_140507.html"));
                assert_eq!(source.kind(), ErrorKind::WriteZero);
                assert!(!path.exists(), "Partial report should be removed");
            }
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

        // The freed name is reused by the next export in the same second
        let retry = write_report(dir.path(), &fixed_time(), |f| f.write_all(b"full")).unwrap();
        assert!(retry.ends_with("ip_report_20240309_140507.html"));
        assert_eq!(fs::read(&retry).unwrap(), b"full");
    }

    #[test]
    fn test_missing_directory_is_file_write_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let missing = dir.path().join("does").join("not").join("exist");
        let err = export_to_html(&LookupResult::default(), &missing).unwrap_err();
        match err {
            ExportError::FileWrite { path, .. } => assert!(path.starts_with(&missing)),
        }
    }

    #[test]
    fn test_export_writes_report() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let result = LookupResult {
            ip: Some("9.9.9.9".to_string()),
            ..Default::default()
        };
        let path = export_to_html(&result, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("ip_report_"));
        assert!(name.ends_with(".html"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<td>9.9.9.9</td>"));
    }
}
