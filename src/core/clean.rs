//! Production output cleanup
//!
//! Before a production build every previously emitted stylesheet and
//! script is removed, so renamed or removed collections leave nothing
//! behind. Matching is by extension in the top level of each output
//! directory; it does not know which collection produced a file.

use std::path::PathBuf;

use crate::core::collection::AssetKind;
use crate::core::engine::OutputLayout;
use crate::core::report::Reporter;
use crate::error::FilesystemError;
use crate::infra::filesystem::FileStore;

/// Result of a tidy pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TidyResult {
    /// Deleted stylesheets
    pub styles: Vec<PathBuf>,
    /// Deleted scripts
    pub scripts: Vec<PathBuf>,
}

impl TidyResult {
    /// Deleted files of a kind
    pub fn removed(&self, kind: AssetKind) -> &[PathBuf] {
        match kind {
            AssetKind::Style => &self.styles,
            AssetKind::Script => &self.scripts,
        }
    }

    /// Total number of deleted files
    pub fn total(&self) -> usize {
        self.styles.len() + self.scripts.len()
    }
}

/// Delete every built file of one kind
///
/// A missing directory or no matches is not an error.
pub fn tidy_kind(
    files: &dyn FileStore,
    layout: &OutputLayout,
    kind: AssetKind,
) -> Result<Vec<PathBuf>, FilesystemError> {
    let pattern = layout.output_glob(kind);
    let matches = files.match_glob(&pattern)?;
    tracing::debug!("{} file(s) match {pattern}", matches.len());

    for path in &matches {
        files.delete(path)?;
        tracing::info!("Removed {}", path.display());
    }

    Ok(matches)
}

/// Remove all previously built stylesheets and scripts
pub fn tidy_production_files(
    files: &dyn FileStore,
    layout: &OutputLayout,
    reporter: &mut dyn Reporter,
) -> Result<TidyResult, FilesystemError> {
    let mut result = TidyResult::default();

    reporter.blank();
    for kind in AssetKind::ALL {
        let removed = tidy_kind(files, layout, kind)?;
        reporter.info(&format!("{} tidied up.", kind.label()));
        match kind {
            AssetKind::Style => result.styles = removed,
            AssetKind::Script => result.scripts = removed,
        }
    }
    reporter.blank();

    Ok(result)
}
