//! Error types and handling for portal-bundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by where the failure happens:
//! - [`asset`]: reading the input assets
//! - [`output`]: writing the bundled page

pub mod asset;
pub mod output;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundling operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundleError {
    // Asset errors
    #[error("Asset not found: {path}")]
    #[diagnostic(
        code(portal_bundle::asset::not_found),
        help("Run portal-bundle from the directory holding index.html, index.css and index.js, or pass --dir")
    )]
    AssetNotFound { path: String },

    #[error("Failed to read asset: {path}: {reason}")]
    #[diagnostic(code(portal_bundle::asset::read_failed))]
    AssetReadFailed { path: String, reason: String },

    #[error("Asset is not valid UTF-8 text: {path}: {reason}")]
    #[diagnostic(
        code(portal_bundle::asset::encoding),
        help("Save the file with UTF-8 encoding")
    )]
    InvalidEncoding { path: String, reason: String },

    // Output errors
    #[error("Failed to write bundle: {path}: {reason}")]
    #[diagnostic(
        code(portal_bundle::output::write_failed),
        help("Check that the directory exists and is writable")
    )]
    OutputWriteFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundleError>;
