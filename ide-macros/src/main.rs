//! CLI entrypoint for `ide-macros`.

#![allow(
    clippy::print_stdout,
    reason = "command confirms generated artefacts on stdout"
)]

use clap::Parser;

use ide_macros::cli::Args;
use ide_macros::config;
use ide_macros::error::IdeMacrosError;
use ide_macros::manifest::{self, ManifestProvider};
use ide_macros::stub;

fn main() -> Result<(), IdeMacrosError> {
    run()
}

fn run() -> Result<(), IdeMacrosError> {
    let args = Args::parse();
    let settings = config::resolve(&args)?;
    let macro_manifest = manifest::load(&settings.manifest)?;
    let provider = ManifestProvider::new(&macro_manifest, &settings.variable_names);

    let output = stub::generate(&settings.classes, &provider, &settings.artifacts)?;
    for path in output.files() {
        println!("{path} has been successfully generated.");
    }

    Ok(())
}
