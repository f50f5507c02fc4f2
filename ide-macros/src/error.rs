//! Error types for `ide-macros`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `ide-macros` pipeline.
///
/// Per-class and per-entry problems (a class missing from the manifest,
/// an unintrospectable callable, an unrenderable default value) are
/// contained where they occur and never reach this enum; only
/// configuration, manifest, and artifact-write failures abort a run.
#[derive(Debug, Error)]
pub enum IdeMacrosError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path of the config file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file was not valid TOML.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        /// Path of the config file.
        path: Utf8PathBuf,
        /// Underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// The macro manifest could not be read.
    #[error("failed to read macro manifest {path}: {source}")]
    ManifestRead {
        /// Path of the manifest.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The macro manifest was not valid JSON.
    #[error("failed to parse macro manifest {path}: {source}")]
    ManifestJson {
        /// Path of the manifest.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An artifact could not be created or written.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path of the artifact or directory.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
