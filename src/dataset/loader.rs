//! Dataset discovery and loading.
//!
//! The seed dataset (reference tables plus formulary) is embedded in the
//! binary at compile time and used by default. A directory of YAML files
//! can be supplied instead; every `*.yml`/`*.yaml` file in it contributes
//! sections which are concatenated in file-name order.

use crate::dataset::schema::Dataset;
use crate::error::{AbxError, Result};
use include_dir::{include_dir, Dir};
use std::fs;
use std::path::Path;

/// Embedded seed dataset directory.
static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data");

/// Load the built-in embedded dataset.
pub fn load_builtin() -> Result<Dataset> {
    let mut dataset = Dataset::default();

    let mut files: Vec<_> = DATA_DIR
        .files()
        .filter(|f| is_yaml(f.path()))
        .collect();
    files.sort_by_key(|f| f.path().to_path_buf());

    for file in files {
        let content = file
            .contents_utf8()
            .ok_or_else(|| AbxError::DatasetParseError {
                path: file.path().to_path_buf(),
                message: "Invalid UTF-8".to_string(),
            })?;
        dataset.extend(parse_dataset(content, file.path())?);
    }

    Ok(dataset)
}

/// Load a dataset from a directory of YAML files.
///
/// # Errors
///
/// Returns `DatasetNotFound` if the directory does not exist or contains
/// no YAML files. Returns `DatasetParseError` if any file is invalid.
pub fn load_dir(dir: &Path) -> Result<Dataset> {
    if !dir.is_dir() {
        return Err(AbxError::DatasetNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_yaml(p))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(AbxError::DatasetNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut dataset = Dataset::default();
    for path in paths {
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AbxError::DatasetNotFound { path: path.clone() }
            } else {
                AbxError::Io(e)
            }
        })?;
        dataset.extend(parse_dataset(&content, &path)?);
    }

    Ok(dataset)
}

/// Load the dataset with an optional directory override.
///
/// With no override, the embedded seed dataset is used.
pub fn load_dataset(dataset_override: Option<&Path>) -> Result<Dataset> {
    match dataset_override {
        Some(dir) => load_dir(dir),
        None => load_builtin(),
    }
}

/// Parse YAML content into a partial [`Dataset`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_dataset(content: &str, source_path: &Path) -> Result<Dataset> {
    serde_yaml::from_str(content).map_err(|e| AbxError::DatasetParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_dataset_loads() {
        let ds = load_builtin().unwrap();
        assert!(!ds.pathogens.is_empty());
        assert!(!ds.crcl_ranges.is_empty());
        assert!(!ds.antibiotics.is_empty());
    }

    #[test]
    fn builtin_dataset_has_seed_tables() {
        let ds = load_builtin().unwrap();
        assert_eq!(ds.crcl_ranges.len(), 12);
        assert!(ds.pathogens.iter().any(|p| p.code == "MRSA"));
        assert!(ds.penetration_sites.iter().any(|s| s.code == "BBB"));
    }

    #[test]
    fn load_dir_concatenates_files() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("a.yml"),
            "pathogens: [{code: A, name: a, pathogen_type: spectrum}]",
        )
        .unwrap();
        fs::write(
            temp.path().join("b.yml"),
            "pathogens: [{code: B, name: b, pathogen_type: resistance}]",
        )
        .unwrap();

        let ds = load_dir(temp.path()).unwrap();
        assert_eq!(ds.pathogens.len(), 2);
        // File-name order is deterministic
        assert_eq!(ds.pathogens[0].code, "A");
        assert_eq!(ds.pathogens[1].code, "B");
    }

    #[test]
    fn load_dir_ignores_non_yaml_files() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("data.yml"),
            "pathogens: [{code: A, name: a, pathogen_type: spectrum}]",
        )
        .unwrap();
        fs::write(temp.path().join("README.md"), "not yaml").unwrap();

        let ds = load_dir(temp.path()).unwrap();
        assert_eq!(ds.pathogens.len(), 1);
    }

    #[test]
    fn load_dir_missing_returns_not_found() {
        let result = load_dir(Path::new("/nonexistent/dataset"));
        assert!(matches!(result, Err(AbxError::DatasetNotFound { .. })));
    }

    #[test]
    fn load_dir_empty_returns_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_dir(temp.path());
        assert!(matches!(result, Err(AbxError::DatasetNotFound { .. })));
    }

    #[test]
    fn parse_dataset_reports_parse_error() {
        let content = "antibiotics: [{name: Bad, category: [";
        let result = parse_dataset(content, Path::new("bad.yml"));
        assert!(matches!(result, Err(AbxError::DatasetParseError { .. })));
    }

    #[test]
    fn load_dataset_with_override_uses_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("only.yml"),
            "pathogens: [{code: X, name: x, pathogen_type: spectrum}]",
        )
        .unwrap();

        let ds = load_dataset(Some(temp.path())).unwrap();
        assert_eq!(ds.pathogens.len(), 1);
        assert!(ds.antibiotics.is_empty());
    }

    #[test]
    fn load_dataset_without_override_uses_builtin() {
        let ds = load_dataset(None).unwrap();
        assert!(!ds.antibiotics.is_empty());
    }
}
