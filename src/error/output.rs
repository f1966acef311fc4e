//! Output write errors

use std::io;
use std::path::Path;

use super::BundleError;

/// Creates a write error for the bundled page
pub fn write_failed(path: &Path, err: &io::Error) -> BundleError {
    BundleError::OutputWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
