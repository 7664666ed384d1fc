use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the settings persistence layer.
///
/// Lookup-style operations never error; missing keys, malformed colours and
/// corrupt recent-file strings all degrade to defaults. Only real I/O and
/// encoding failures on load/flush surface here.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The properties file could not be serialized.
    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    /// The properties file (or its directory) could not be written.
    #[error("failed to persist settings to `{path}`")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No usable per-user configuration directory could be resolved.
    #[error("no configuration directory available for `{app_name}`")]
    NoConfigDir { app_name: String },
}
