//! Locating dated table files on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{CaseError, DateKey};

/// Filename prefix of the daily table files, as published upstream.
pub const TABLE_FILE_PREFIX: &str = "geographic_distribution_";

const TABLE_FILE_EXT: &str = ".csv";

/// Scan `dir` for files named `geographic_distribution_{YYYY_MM_DD}.csv`.
///
/// Files not matching the naming scheme are skipped. A file that matches
/// the scheme but carries an unparseable date label fails the scan, since
/// it usually means a mistyped filename rather than an unrelated file.
///
/// Returns the matches sorted by date.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`CaseError::ScanDir`] | `dir` cannot be listed |
/// | [`CaseError::InvalidDateLabel`] | A matching filename holds a bad date label |
/// | [`CaseError::NoCaseTables`] | No filenames match the scheme |
#[instrument(fields(dir = %dir.display()))]
pub fn discover_tables(dir: &Path) -> Result<Vec<(DateKey, PathBuf)>, CaseError> {
    let scan_fault = |source: std::io::Error| CaseError::ScanDir {
        dir: dir.to_path_buf(),
        source,
    };

    // 1. List the directory.
    let entries = std::fs::read_dir(dir).map_err(scan_fault)?;

    // 2. Keep the filenames that match the table naming scheme.
    let mut found = Vec::new();
    for entry in entries {
        let path = entry.map_err(scan_fault)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(label) = name
            .strip_prefix(TABLE_FILE_PREFIX)
            .and_then(|stem| stem.strip_suffix(TABLE_FILE_EXT))
        else {
            debug!(file = name, "skipping non-table file");
            continue;
        };
        let date = DateKey::parse(label)?;
        found.push((date, path));
    }

    // 3. Require at least one table.
    if found.is_empty() {
        return Err(CaseError::NoCaseTables {
            dir: dir.to_path_buf(),
        });
    }

    found.sort_by_key(|&(date, _)| date);
    info!(n_tables = found.len(), "table files discovered");
    Ok(found)
}
