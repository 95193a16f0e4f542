//! Error handling for CabinetKit
//!
//! Provides the error taxonomy shared by every crate in the workspace:
//! - Catalog errors (unknown template or drill-pattern ids)
//! - Dimension errors (values outside the enumerated standard sets)
//! - Configuration errors (panel geometry that would be zero or negative)
//!
//! All error types use `thiserror`. Generation is all-or-nothing, so any
//! error aborts the whole cabinet rather than producing a partial result.

use thiserror::Error;

/// Cabinet generation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CabinetError {
    /// Requested id does not exist in a static catalog
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The kind of record that was looked up ("template", "drill pattern").
        kind: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// A width/height/depth outside the standard set, or a non-positive value
    #[error("Invalid {name} {value}: {reason}")]
    InvalidDimension {
        /// The dimension name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// Counts combined with dimensions would produce non-positive panels
    #[error("Degenerate configuration: {0}")]
    DegenerateConfiguration(String),

    /// Drawing scale with a non-positive or non-finite pixel density
    #[error("Invalid scale '{name}': {pixels_per_inch} px/in")]
    InvalidScale {
        /// The scale name.
        name: String,
        /// The rejected pixel density.
        pixels_per_inch: f64,
    },
}

impl CabinetError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn invalid_dimension(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            name,
            value,
            reason: reason.into(),
        }
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateConfiguration(msg.into())
    }

    /// Check if this is a catalog lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Main error type for CabinetKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Cabinet generation error
    #[error(transparent)]
    Cabinet(#[from] CabinetError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a cabinet generation error
    pub fn is_cabinet_error(&self) -> bool {
        matches!(self, Error::Cabinet(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for the pure generation core
pub type CabinetResult<T> = std::result::Result<T, CabinetError>;
