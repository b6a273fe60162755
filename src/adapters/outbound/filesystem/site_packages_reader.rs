use super::metadata_parser::parse_metadata;
use crate::license_audit::domain::{normalize_package_name, AttachedFile, PackageRecord};
use crate::ports::outbound::InstalledPackageSource;
use crate::shared::error::LicenseAuditError;
use crate::shared::security::read_bounded_text;
use crate::shared::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of a `.dist-info` directory holding license files (PEP 639)
const LICENSES_SUBDIR: &str = "licenses";

/// File name prefixes recognized as license files when metadata lists none
const LICENSE_FILE_PREFIXES: &[&str] = &["LICENSE", "LICENCE", "COPYING"];

/// File name prefix of notice files
const NOTICE_FILE_PREFIX: &str = "NOTICE";

/// Where one distribution's metadata lives
struct DistributionEntry {
    /// `METADATA` or `PKG-INFO` file
    metadata_path: PathBuf,
    /// Directory shipping license and notice files, if any
    files_dir: Option<PathBuf>,
}

/// SitePackagesReader adapter for enumerating installed distributions
///
/// This adapter implements the InstalledPackageSource port by scanning
/// site-packages directories for `*.dist-info` and `*.egg-info` entries.
/// Directories are scanned in the given order; when the same `name:version`
/// shows up more than once, the first occurrence wins.
pub struct SitePackagesReader {
    directories: Vec<PathBuf>,
}

impl SitePackagesReader {
    /// Creates a reader for explicitly requested directories
    ///
    /// # Errors
    /// Returns an error if any directory does not exist
    pub fn from_directories(directories: Vec<PathBuf>) -> Result<Self> {
        for directory in &directories {
            if !directory.is_dir() {
                return Err(LicenseAuditError::PackageDiscovery {
                    reason: format!("{} is not a directory", directory.display()),
                    suggestion: "Pass the environment's site-packages directory to --site-packages"
                        .to_string(),
                }
                .into());
            }
        }
        Ok(Self { directories })
    }

    /// Creates a reader for an interpreter search path
    ///
    /// Entries that are not directories (zip archives, missing paths) are
    /// skipped silently.
    pub fn from_search_path(paths: Vec<PathBuf>) -> Self {
        Self {
            directories: paths.into_iter().filter(|p| p.is_dir()).collect(),
        }
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Lists distribution entries of one directory, sorted by file name
    fn distribution_entries(directory: &Path) -> Vec<DistributionEntry> {
        let Ok(read_dir) = fs::read_dir(directory) else {
            return Vec::new();
        };

        let mut paths: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        paths.sort();

        paths
            .into_iter()
            .filter_map(|path| {
                let file_name = path.file_name()?.to_str()?;
                if file_name.ends_with(".dist-info") && path.is_dir() {
                    Some(DistributionEntry {
                        metadata_path: path.join("METADATA"),
                        files_dir: Some(path),
                    })
                } else if file_name.ends_with(".egg-info") {
                    if path.is_dir() {
                        Some(DistributionEntry {
                            metadata_path: path.join("PKG-INFO"),
                            files_dir: Some(path),
                        })
                    } else {
                        Some(DistributionEntry {
                            metadata_path: path,
                            files_dir: None,
                        })
                    }
                } else {
                    None
                }
            })
            .collect()
    }

    /// Reads one distribution, attaching license files if requested
    fn read_distribution(entry: &DistributionEntry, include_files: bool) -> Result<PackageRecord> {
        let content = read_bounded_text(&entry.metadata_path, "metadata").map_err(|e| {
            LicenseAuditError::MetadataReadError {
                path: entry.metadata_path.clone(),
                details: e.to_string(),
            }
        })?;

        let metadata = parse_metadata(&content);
        let declared_files = metadata.license_files.clone();
        let mut record = metadata
            .into_record()
            .map_err(|e| LicenseAuditError::MetadataReadError {
                path: entry.metadata_path.clone(),
                details: e.to_string(),
            })?;

        if include_files {
            if let Some(files_dir) = &entry.files_dir {
                let (licenses, notices) = collect_attached_files(files_dir, &declared_files);
                for file in licenses {
                    record = record.with_license_file(file);
                }
                for file in notices {
                    record = record.with_notice_file(file);
                }
            }
        }

        Ok(record)
    }
}

impl InstalledPackageSource for SitePackagesReader {
    fn read_packages(&self, include_files: bool) -> Result<Vec<PackageRecord>> {
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for directory in &self.directories {
            for entry in Self::distribution_entries(directory) {
                match Self::read_distribution(&entry, include_files) {
                    Ok(record) => {
                        let key = (
                            normalize_package_name(record.name()),
                            record.version().to_string(),
                        );
                        if seen.insert(key) {
                            records.push(record);
                        }
                    }
                    Err(e) => {
                        eprintln!(
                            "⚠️  Warning: Skipping {}: {}",
                            entry.metadata_path.display(),
                            e
                        );
                    }
                }
            }
        }

        Ok(records)
    }
}

/// Finds license and notice files of a distribution
///
/// Declared `License-File` entries are looked up under `licenses/` first,
/// then directly in the metadata directory. Without declarations, files are
/// matched by their conventional name prefixes.
fn collect_attached_files(
    files_dir: &Path,
    declared: &[String],
) -> (Vec<AttachedFile>, Vec<AttachedFile>) {
    let candidates: Vec<PathBuf> = if declared.is_empty() {
        conventional_files(files_dir)
    } else {
        declared
            .iter()
            .filter_map(|name| {
                [files_dir.join(LICENSES_SUBDIR).join(name), files_dir.join(name)]
                    .into_iter()
                    .find(|path| path.is_file())
            })
            .collect()
    };

    let mut licenses = Vec::new();
    let mut notices = Vec::new();
    for path in candidates {
        let is_notice = base_name_upper(&path).starts_with(NOTICE_FILE_PREFIX);
        let text = read_bounded_text(&path, "license file").ok();
        let file = AttachedFile::new(path, text);
        if is_notice {
            notices.push(file);
        } else {
            licenses.push(file);
        }
    }

    if !declared.is_empty() && notices.is_empty() {
        notices = conventional_files(files_dir)
            .into_iter()
            .filter(|path| base_name_upper(path).starts_with(NOTICE_FILE_PREFIX))
            .map(|path| {
                let text = read_bounded_text(&path, "notice file").ok();
                AttachedFile::new(path, text)
            })
            .collect();
    }

    (licenses, notices)
}

/// Files whose names look like license or notice files, sorted
fn conventional_files(files_dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in [files_dir.to_path_buf(), files_dir.join(LICENSES_SUBDIR)] {
        let Ok(read_dir) = fs::read_dir(&dir) else {
            continue;
        };
        files.extend(
            read_dir
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_file())
                .filter(|path| {
                    let name = base_name_upper(path);
                    LICENSE_FILE_PREFIXES
                        .iter()
                        .chain(std::iter::once(&NOTICE_FILE_PREFIX))
                        .any(|prefix| name.starts_with(prefix))
                }),
        );
    }
    files.sort();
    files
}

fn base_name_upper(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}
