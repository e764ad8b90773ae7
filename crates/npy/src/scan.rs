// crate modules
use crate::array::read_npy;
use crate::error::{Error, Result};

// standard library
use std::path::{Path, PathBuf};

// external crates
use log::{error, info, warn};
use serde::Serialize;

/// Outcome for one array that loaded successfully
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArraySummary {
    /// File name within the folder
    pub file: String,
    /// Element type, e.g. `<f8`
    pub dtype: String,
    /// Array shape
    pub shape: Vec<usize>,
    /// Number of distinct values
    pub distinct: usize,
    /// First element, only kept for degenerate arrays
    pub value: Option<String>,
}

/// A file that could not be loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanFailure {
    /// File name within the folder
    pub file: String,
    /// Reason the load failed
    pub reason: String,
}

/// Classification of every `.npy` file in a folder
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanReport {
    /// Folder that was scanned
    pub folder: PathBuf,
    /// Arrays with more than one distinct value
    pub informative: Vec<ArraySummary>,
    /// Constant or empty arrays
    pub degenerate: Vec<ArraySummary>,
    /// Files that could not be loaded
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    /// Names of the informative arrays
    pub fn informative_files(&self) -> Vec<&str> {
        self.informative.iter().map(|a| a.file.as_str()).collect()
    }

    /// Total number of files looked at
    pub fn file_count(&self) -> usize {
        self.informative.len() + self.degenerate.len() + self.failures.len()
    }
}

/// Load every `.npy` file in a folder and sort out the informative ones
///
/// Files are visited in name order. A file that fails to load is logged and
/// recorded in [ScanReport::failures] without stopping the scan.
///
/// ```rust, no_run
/// # use seistools_npy::scan_folder;
/// let report = scan_folder("path/to/attributes").unwrap();
/// for name in report.informative_files() {
///     println!("{name}");
/// }
/// ```
pub fn scan_folder<P: AsRef<Path>>(folder: P) -> Result<ScanReport> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
        return Err(Error::FolderNotFound(folder.to_path_buf()));
    }

    let files = list_npy_files(folder)?;
    let mut report = ScanReport {
        folder: folder.to_path_buf(),
        ..Default::default()
    };

    if files.is_empty() {
        warn!("No .npy files found in {}", folder.display());
        return Ok(report);
    }

    info!("Found {} .npy files", files.len());

    for path in files {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let array = match read_npy(&path) {
            Ok(array) => array,
            Err(e) => {
                error!("Error loading {file}: {e}");
                report.failures.push(ScanFailure {
                    file,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let distinct = array.count_distinct();
        let mut summary = ArraySummary {
            file,
            dtype: array.dtype.to_string(),
            shape: array.shape.clone(),
            distinct,
            value: None,
        };

        if distinct > 1 {
            info!("  + {}: {distinct} unique values", summary.file);
            report.informative.push(summary);
        } else {
            summary.value = array.data.display_at(0);
            match &summary.value {
                Some(v) => info!("  - {}: only 1 unique value ({v})", summary.file),
                None => info!("  - {}: empty array", summary.file),
            }
            report.degenerate.push(summary);
        }
    }

    info!(
        "Found {} arrays with multiple unique values",
        report.informative.len()
    );

    Ok(report)
}

/// Sorted paths of the `.npy` files directly inside `folder`
fn list_npy_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "npy") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
