//! Bundle orchestration: read the assets, run the pipeline, write the page
//!
//! Nothing is written until every asset has been read and transformed, so a
//! missing or unreadable input leaves any previous output untouched.

use std::path::{Path, PathBuf};

use crate::assets::{AssetKind, Assets};
use crate::error::{Result, output};
use crate::transform::{self, InlineCounts};

/// Fixed file name of the bundled page, relative to the asset directory
pub const OUTPUT_FILE: &str = "file-transfer.html";

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub output_path: PathBuf,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub inlined: InlineCounts,
}

/// Bundles the assets found in one directory
#[derive(Debug, Clone)]
pub struct Bundler {
    dir: PathBuf,
}

impl Bundler {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.join(OUTPUT_FILE)
    }

    /// Read, transform and write, stopping at the first error
    pub fn run(&self) -> Result<BundleSummary> {
        let assets = Assets::load(&self.dir)?;
        let input_bytes = assets.total_len();

        let (page, inlined) = transform::bundle(&assets);
        warn_missing_placeholders(inlined);

        let output_path = self.output_path();
        write_output(&output_path, &page)?;

        Ok(BundleSummary {
            output_path,
            input_bytes,
            output_bytes: page.len(),
            inlined,
        })
    }
}

fn warn_missing_placeholders(inlined: InlineCounts) {
    for (kind, count) in [
        (AssetKind::Style, inlined.styles),
        (AssetKind::Script, inlined.scripts),
    ] {
        if count == 0 {
            log::warn!(
                "No {} placeholder found in {}; {} was not inlined",
                kind,
                AssetKind::Markup.file_name(),
                kind.file_name()
            );
        } else {
            log::debug!("Inlined {} {} time(s)", kind.file_name(), count);
        }
    }
}

fn write_output(path: &Path, page: &str) -> Result<()> {
    log::debug!("Writing {}", path.display());
    std::fs::write(path, page).map_err(|e| output::write_failed(path, &e))
}
