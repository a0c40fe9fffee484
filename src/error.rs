//! Error types and handling for vinv
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for vinv operations
#[derive(Error, Diagnostic, Debug)]
pub enum VinvError {
    // Context errors
    #[error("No datacenter context available: {reason}")]
    #[diagnostic(
        code(vinv::context::unavailable),
        help("Select a datacenter with --dc or the VINV_DATACENTER environment variable")
    )]
    ContextUnavailable { reason: String },

    // Resolution errors
    #[error("Failed to resolve inventory path '{pattern}': {reason}")]
    #[diagnostic(
        code(vinv::resolve::failed),
        help("Check the path against 'vinv ls' output from the parent node")
    )]
    ResolutionFailed { pattern: String, reason: String },

    #[error("Invalid path pattern: {pattern}")]
    #[diagnostic(
        code(vinv::resolve::invalid_pattern),
        help("Patterns are /-separated inventory paths; components may use glob syntax")
    )]
    InvalidPattern { pattern: String, reason: String },

    // Output errors
    #[error("Failed to write results: {reason}")]
    #[diagnostic(code(vinv::output::emission_failed))]
    EmissionFailed { reason: String },

    // Inventory snapshot errors
    #[error("No inventory configured")]
    #[diagnostic(
        code(vinv::inventory::not_configured),
        help("Pass --inventory or set the VINV_INVENTORY environment variable")
    )]
    InventoryNotConfigured,

    #[error("Failed to read inventory '{path}': {reason}")]
    #[diagnostic(
        code(vinv::inventory::read_failed),
        help("Point --inventory (or VINV_INVENTORY) at an inventory snapshot file")
    )]
    InventoryReadFailed { path: String, reason: String },

    #[error("Failed to parse inventory '{path}': {reason}")]
    #[diagnostic(code(vinv::inventory::parse_failed))]
    InventoryParseFailed { path: String, reason: String },
}

/// Result type alias using `VinvError`
pub type Result<T> = std::result::Result<T, VinvError>;

impl From<std::io::Error> for VinvError {
    fn from(err: std::io::Error) -> Self {
        VinvError::EmissionFailed {
            reason: err.to_string(),
        }
    }
}
