//! Generator settings: built-in defaults, TOML config file, CLI flags.
//!
//! Precedence follows the usual layering order: CLI flags override the
//! config file, which overrides built-in defaults. The built-in class
//! list is the Laravel "Macroable" roster; caller-supplied classes are
//! appended after it, duplicates permitted and harmless.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::cli::Args;
use crate::error::IdeMacrosError;
use crate::fs_helpers;
use crate::model::ClassIdentifier;
use crate::stub::{ArtifactPlan, StubVariant};

/// Default target file for the static-variant stubs.
pub const DEFAULT_STUB_FILENAME: &str = "_ide_macros.php";

/// Macro-table property names probed on each class, in order.
pub const DEFAULT_VARIABLE_NAMES: [&str; 2] = ["macros", "globalMacros"];

/// Framework classes known to carry macro support.
pub const DEFAULT_CLASSES: [&str; 31] = [
    "Illuminate\\Database\\Schema\\Blueprint",
    "Illuminate\\Support\\Arr",
    "Illuminate\\Support\\Carbon",
    "Carbon\\Carbon",
    "Carbon\\CarbonImmutable",
    "Carbon\\CarbonInterval",
    "Carbon\\CarbonPeriod",
    "Illuminate\\Support\\Collection",
    "Illuminate\\Console\\Scheduling\\Event",
    "Illuminate\\Database\\Eloquent\\FactoryBuilder",
    "Illuminate\\Filesystem\\Filesystem",
    "Illuminate\\Mail\\Mailer",
    "Illuminate\\Foundation\\Console\\PresetCommand",
    "Illuminate\\Routing\\Redirector",
    "Illuminate\\Database\\Eloquent\\Relations\\Relation",
    "Illuminate\\Cache\\Repository",
    "Illuminate\\Routing\\ResponseFactory",
    "Illuminate\\Routing\\Route",
    "Illuminate\\Routing\\Router",
    "Illuminate\\Validation\\Rule",
    "Illuminate\\Support\\Str",
    "Illuminate\\Foundation\\Testing\\TestResponse",
    "Illuminate\\Translation\\Translator",
    "Illuminate\\Routing\\UrlGenerator",
    "Illuminate\\Database\\Query\\Builder",
    "Illuminate\\Http\\JsonResponse",
    "Illuminate\\Http\\RedirectResponse",
    "Illuminate\\Auth\\RequestGuard",
    "Illuminate\\Http\\Response",
    "Illuminate\\Auth\\SessionGuard",
    "Illuminate\\Http\\UploadedFile",
];

/// Optional TOML configuration file contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Target file for the static-variant stubs.
    pub filename: Option<String>,
    /// Target file for the instantiated-variant stubs.
    pub filename_instance: Option<String>,
    /// Extra classes appended after the built-in list.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Macro-table property names probed on each class, in order.
    pub variable_names: Option<Vec<String>>,
}

/// Fully resolved settings for one generation run.
#[derive(Debug)]
pub struct Settings {
    /// Macro manifest path.
    pub manifest: Utf8PathBuf,
    /// Classes to probe, in output order.
    pub classes: Vec<ClassIdentifier>,
    /// Macro-table property names probed on each class, in order.
    pub variable_names: Vec<String>,
    /// Artifacts to produce, in order.
    pub artifacts: Vec<ArtifactPlan>,
}

/// Resolves settings from CLI arguments, an optional config file, and
/// built-in defaults.
///
/// # Errors
///
/// Returns [`IdeMacrosError::ConfigRead`] or
/// [`IdeMacrosError::ConfigParse`] when a requested config file cannot
/// be loaded.
pub fn resolve(args: &Args) -> Result<Settings, IdeMacrosError> {
    let file = match &args.config {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };

    let filename = args
        .filename
        .clone()
        .or(file.filename)
        .unwrap_or_else(|| DEFAULT_STUB_FILENAME.to_owned());
    let filename_instance = args
        .filename_instance
        .clone()
        .or(file.filename_instance)
        .unwrap_or_else(|| derive_instance_filename(&filename));

    let variable_names = if args.variable_names.is_empty() {
        file.variable_names
            .unwrap_or_else(|| DEFAULT_VARIABLE_NAMES.map(str::to_owned).to_vec())
    } else {
        args.variable_names.clone()
    };

    let mut class_names: Vec<String> = DEFAULT_CLASSES.map(str::to_owned).to_vec();
    class_names.extend(file.classes);
    class_names.extend(args.classes.iter().cloned());
    let classes = class_names
        .iter()
        .map(|name| ClassIdentifier::parse(name))
        .collect();

    let mut artifacts = vec![ArtifactPlan {
        path: Utf8PathBuf::from(filename),
        variant: StubVariant::Static,
    }];
    if !args.static_only {
        artifacts.push(ArtifactPlan {
            path: Utf8PathBuf::from(filename_instance),
            variant: StubVariant::Instantiated,
        });
    }

    Ok(Settings {
        manifest: args.manifest.clone(),
        classes,
        variable_names,
        artifacts,
    })
}

fn load_config_file(path: &Utf8Path) -> Result<ConfigFile, IdeMacrosError> {
    let content = fs_helpers::read_file(path).map_err(|io_err| IdeMacrosError::ConfigRead {
        path: path.to_path_buf(),
        source: io_err,
    })?;
    toml::from_str(&content).map_err(|toml_err| IdeMacrosError::ConfigParse {
        path: path.to_path_buf(),
        source: Box::new(toml_err),
    })
}

/// Derives the instantiated-variant filename from the static one by
/// inserting `_instance` before the extension.
///
/// # Examples
///
/// ```
/// use ide_macros::config::derive_instance_filename;
///
/// assert_eq!(derive_instance_filename("_ide_macros.php"), "_ide_macros_instance.php");
/// assert_eq!(derive_instance_filename("stubs"), "stubs_instance");
/// ```
#[must_use]
pub fn derive_instance_filename(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, extension))
            if !stem.is_empty() && !stem.ends_with('/') && !extension.contains('/') =>
        {
            format!("{stem}_instance.{extension}")
        }
        _ => format!("{filename}_instance"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn args() -> Args {
        Args {
            manifest: Utf8PathBuf::from("macros.json"),
            filename: None,
            filename_instance: None,
            static_only: false,
            classes: vec![],
            variable_names: vec![],
            config: None,
        }
    }

    #[rstest]
    #[case("_ide_macros.php", "_ide_macros_instance.php")]
    #[case("out/stubs.php", "out/stubs_instance.php")]
    #[case("archive.tar.php", "archive.tar_instance.php")]
    #[case("stubs", "stubs_instance")]
    #[case("out.d/stubs", "out.d/stubs_instance")]
    fn instance_filename_inserts_suffix_before_extension(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(derive_instance_filename(input), expected);
    }

    #[rstest]
    fn defaults_produce_two_artifacts() -> Result<(), IdeMacrosError> {
        let settings = resolve(&args())?;
        let paths: Vec<&str> = settings
            .artifacts
            .iter()
            .map(|plan| plan.path.as_str())
            .collect();
        assert_eq!(paths, ["_ide_macros.php", "_ide_macros_instance.php"]);
        assert_eq!(settings.artifacts.first().map(|p| p.variant), Some(StubVariant::Static));
        assert_eq!(
            settings.artifacts.get(1).map(|p| p.variant),
            Some(StubVariant::Instantiated)
        );
        Ok(())
    }

    #[rstest]
    fn static_only_drops_the_instance_artifact() -> Result<(), IdeMacrosError> {
        let mut static_args = args();
        static_args.static_only = true;
        let settings = resolve(&static_args)?;
        assert_eq!(settings.artifacts.len(), 1);
        Ok(())
    }

    #[rstest]
    fn extension_classes_append_after_defaults() -> Result<(), IdeMacrosError> {
        let mut extended = args();
        extended.classes = vec!["\\App\\Support\\Widget".to_owned()];
        let settings = resolve(&extended)?;
        assert_eq!(settings.classes.len(), DEFAULT_CLASSES.len() + 1);
        let last = settings.classes.last().map(ClassIdentifier::fqcn);
        assert_eq!(last.as_deref(), Some("App\\Support\\Widget"));
        Ok(())
    }

    #[rstest]
    fn cli_variable_names_override_defaults() -> Result<(), IdeMacrosError> {
        let mut overridden = args();
        overridden.variable_names = vec!["customMacros".to_owned()];
        let settings = resolve(&overridden)?;
        assert_eq!(settings.variable_names, ["customMacros"]);
        Ok(())
    }

    #[rstest]
    fn default_variable_names_probe_macros_first() -> Result<(), IdeMacrosError> {
        let settings = resolve(&args())?;
        assert_eq!(settings.variable_names, ["macros", "globalMacros"]);
        Ok(())
    }
}
