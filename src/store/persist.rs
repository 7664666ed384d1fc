//! On-disk layout of the per-user properties file.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use directories_next::ProjectDirs;

use crate::errors::SettingsError;
use crate::store::Value;

/// Where and under what name the properties file lives.
///
/// `folder` overrides the platform application-data directory entirely;
/// it is what tests point at a temp dir, and what portable installs use.
#[derive(Clone, Debug)]
pub struct StorageOptions {
    pub application_name: String,
    pub filename_suffix: String,
    pub folder: Option<PathBuf>,
}

impl StorageOptions {
    pub fn new(application_name: &str) -> Self {
        Self {
            application_name: application_name.to_string(),
            filename_suffix: "settings".to_string(),
            folder: None,
        }
    }

    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Full path of the properties file, or an error when no per-user
    /// config directory can be resolved on this system.
    pub fn file_path(&self) -> Result<PathBuf, SettingsError> {
        let dir = match &self.folder {
            Some(folder) => folder.clone(),
            None => ProjectDirs::from("", "", &self.application_name)
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| SettingsError::NoConfigDir {
                    app_name: self.application_name.clone(),
                })?,
        };
        Ok(dir.join(format!(
            "{}.{}",
            self.application_name, self.filename_suffix
        )))
    }
}

/// Read the properties file. Missing or corrupt files read as empty;
/// both cases are logged and neither is surfaced as an error.
pub fn read_values(options: &StorageOptions) -> BTreeMap<String, Value> {
    let path = match options.file_path() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("settings unavailable: {e}");
            return BTreeMap::new();
        }
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => {
            // First run, most likely.
            tracing::debug!("no settings file at {}", path.display());
            return BTreeMap::new();
        }
    };

    match toml::from_str(&content) {
        Ok(values) => values,
        Err(e) => {
            tracing::error!(
                "ignoring corrupt settings file {}: {e}",
                path.display()
            );
            BTreeMap::new()
        }
    }
}

/// Write the properties file, creating parent directories as needed.
pub fn write_values(
    options: &StorageOptions,
    values: &BTreeMap<String, Value>,
) -> Result<(), SettingsError> {
    let path = options.file_path()?;
    let persist_err = |source: std::io::Error| SettingsError::Persist {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(persist_err)?;
    }
    let content = toml::to_string_pretty(values)?;
    fs::write(&path, content).map_err(persist_err)?;
    tracing::debug!("settings written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn round_trips_through_a_temp_dir() {
        let dir = TempDir::new().expect("tempdir");
        let options = StorageOptions::new("cadenza-test").with_folder(dir.path());

        let mut values = BTreeMap::new();
        values.insert("FontSize".to_string(), Value::Int(14));
        values.insert(
            "Colours_Editor - Caret".to_string(),
            Value::Text("fff39636".to_string()),
        );
        write_values(&options, &values).expect("write");

        let read = read_values(&options);
        assert_eq!(read, values);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = TempDir::new().expect("tempdir");
        let options = StorageOptions::new("cadenza-test").with_folder(dir.path());
        let path = options.file_path().expect("path");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not = [valid").unwrap();

        assert!(read_values(&options).is_empty());
    }

    #[test]
    fn write_failure_reports_path_and_io_source() {
        let dir = TempDir::new().expect("tempdir");
        // A plain file where the settings directory should go.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let options = StorageOptions::new("cadenza-test").with_folder(&blocker);

        let err = write_values(&options, &BTreeMap::new()).expect_err("write must fail");
        match err {
            SettingsError::Persist { path, source } => {
                assert!(path.starts_with(&blocker));
                assert!(!source.to_string().is_empty());
            }
            other => panic!("unexpected error shape: {other}"),
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().expect("tempdir");
        let options = StorageOptions::new("cadenza-test").with_folder(dir.path());
        assert!(read_values(&options).is_empty());
    }
}
