//! Configuration and output types for the stub emitter.

use camino::Utf8PathBuf;

/// Which declaration style an artifact renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubVariant {
    /// No-receiver declarations (`public static function ...`).
    Static,
    /// Receiver-bound declarations (`public function ...`).
    Instantiated,
}

impl StubVariant {
    /// Whether declarations in this variant carry the `static` keyword.
    #[must_use]
    pub const fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }
}

/// One planned output artifact: a target path plus its variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPlan {
    /// Target file path.
    pub path: Utf8PathBuf,
    /// Variant rendered into the file.
    pub variant: StubVariant,
}

/// Paths of the artifacts a generation run produced.
#[derive(Debug, Default)]
pub struct StubOutput {
    files: Vec<Utf8PathBuf>,
}

impl StubOutput {
    /// Creates an empty output record.
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Records a written artifact.
    pub fn add_file(&mut self, path: Utf8PathBuf) {
        self.files.push(path);
    }

    /// Written artifact paths, in generation order.
    #[must_use]
    pub fn files(&self) -> &[Utf8PathBuf] {
        &self.files
    }
}
