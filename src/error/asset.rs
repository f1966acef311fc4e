//! Asset read errors

use std::io;
use std::path::Path;
use std::string::FromUtf8Error;

use super::BundleError;

/// Maps an I/O failure while reading `path` to the matching asset error
pub fn read_failed(path: &Path, err: &io::Error) -> BundleError {
    if err.kind() == io::ErrorKind::NotFound {
        BundleError::AssetNotFound {
            path: path.display().to_string(),
        }
    } else {
        BundleError::AssetReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Creates an encoding error for an asset whose bytes are not UTF-8
pub fn invalid_encoding(path: &Path, err: &FromUtf8Error) -> BundleError {
    BundleError::InvalidEncoding {
        path: path.display().to_string(),
        reason: err.utf8_error().to_string(),
    }
}
