//! # Mesh Errors
//!
//! Error types for curve conversion and mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Degenerate geometry (non-positive sizes, too few points)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Ear clipping could not triangulate a profile
    #[error("Triangulation failed: {message}")]
    Triangulation { message: String },

    /// Unsupported curve or mesh operation
    #[error("Unsupported: {message}")]
    Unsupported { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a triangulation error.
    pub fn triangulation(message: impl Into<String>) -> Self {
        Self::Triangulation {
            message: message.into(),
        }
    }

    /// Creates an unsupported operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("box size must be positive");
        assert_eq!(err.to_string(), "Degenerate geometry: box size must be positive");
    }

    #[test]
    fn test_unsupported_display() {
        let err = MeshError::unsupported("bevel");
        assert!(err.to_string().starts_with("Unsupported"));
    }
}
