//! Error types for lattice construction.
//!
//! Every failure is detected before any output is handed back: the pipeline
//! either returns a complete network or one of these errors.

use thiserror::Error;

/// Errors that can occur while assembling, populating, or pruning a lattice.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The request itself is invalid.
    ///
    /// Covers non-positive tiling sizes, scales, spacings or cell dims, point
    /// ids that are not dense, and connections naming points the cell does
    /// not have.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A connection cannot be placed in the lattice.
    ///
    /// Occurs when a crossing vector leaves the lattice by more than one
    /// replica along some axis, or a resolved connection refers to a point
    /// that was never placed.
    #[error("invalid geometry: {0}")]
    Geometry(String),
}

impl Error {
    /// Creates a [`Configuration`](Error::Configuration) error.
    pub fn configuration(details: impl Into<String>) -> Self {
        Self::Configuration(details.into())
    }

    /// Creates a [`Configuration`](Error::Configuration) error for a
    /// connection that names a missing point.
    ///
    /// # Arguments
    ///
    /// * `connection` — Position of the connection in the cell's list
    /// * `point` — The point id that could not be found
    pub fn unknown_point(connection: usize, point: usize) -> Self {
        Self::Configuration(format!(
            "connection #{connection} references point {point}, which is not in the cell"
        ))
    }

    /// Creates a [`Geometry`](Error::Geometry) error.
    pub fn geometry(details: impl Into<String>) -> Self {
        Self::Geometry(details.into())
    }

    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    #[inline]
    pub fn is_geometry(&self) -> bool {
        matches!(self, Self::Geometry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_point_is_configuration_error() {
        let err = Error::unknown_point(2, 9);
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "invalid configuration: connection #2 references point 9, which is not in the cell"
        );
    }

    #[test]
    fn geometry_helper_formats_message() {
        let err = Error::geometry("too far");
        assert!(err.is_geometry());
        assert_eq!(err.to_string(), "invalid geometry: too far");
    }
}
