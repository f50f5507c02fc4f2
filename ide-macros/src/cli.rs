//! Command-line interface definitions for `ide-macros`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `ide-macros`.
#[derive(Debug, Parser)]
#[command(name = "ide-macros")]
#[command(about = "Generate IDE helper stub files for runtime-registered class macros")]
#[command(version)]
pub struct Args {
    /// Macro manifest JSON dumped by the host runtime.
    #[arg(long, value_name = "path")]
    pub manifest: Utf8PathBuf,
    /// Target file for the static-variant stubs.
    #[arg(long, value_name = "path")]
    pub filename: Option<String>,
    /// Target file for the instantiated-variant stubs; defaults to the
    /// static filename with `_instance` before the extension.
    #[arg(long = "filename-instance", value_name = "path")]
    pub filename_instance: Option<String>,
    /// Emit only the static-variant artifact.
    #[arg(long = "static-only")]
    pub static_only: bool,
    /// Extra class to probe (repeat for multiple); appended after the
    /// built-in class list.
    #[arg(long = "class", value_name = "FQCN")]
    pub classes: Vec<String>,
    /// Macro-table property name to probe (repeat for multiple);
    /// overrides the default `macros`, `globalMacros` order.
    #[arg(long = "variable-name", value_name = "name")]
    pub variable_names: Vec<String>,
    /// TOML configuration file.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
}
