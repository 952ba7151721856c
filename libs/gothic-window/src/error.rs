//! # Window Errors
//!
//! Error types for building gothic windows.

use crate::scene::SceneError;
use thiserror::Error;
use window_mesh::MeshError;

/// Errors that can occur while building a window.
///
/// Every variant is fatal to the build that raised it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindowError {
    /// A supplied or derived dimension cannot produce geometry
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Geometry generation failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// The host scene rejected an operation
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

impl WindowError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }

    /// True for the `InvalidParameter` variant.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Returns `value` if it is finite and strictly positive.
///
/// # Example
///
/// ```rust
/// use gothic_window::error::require_positive;
///
/// assert_eq!(require_positive("width", 2.0).unwrap(), 2.0);
/// assert!(require_positive("width", 0.0).is_err());
/// ```
pub fn require_positive(name: &'static str, value: f64) -> Result<f64, WindowError> {
    if !value.is_finite() {
        return Err(WindowError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(WindowError::invalid(name, value, "must be positive"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WindowError::invalid("width", -1.0, "must be positive");
        assert_eq!(err.to_string(), "Invalid parameter width = -1: must be positive");
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_require_positive_rejects_nan() {
        let err = require_positive("depth", f64::NAN).unwrap_err();
        assert!(matches!(err, WindowError::InvalidParameter { name: "depth", .. }));
    }

    #[test]
    fn test_mesh_error_converts() {
        let err: WindowError = MeshError::degenerate("flat").into();
        assert!(!err.is_invalid_parameter());
        assert!(err.to_string().contains("flat"));
    }
}
