//! # Parameters
//!
//! User-facing dimensions for a window and for a single arch solid.

use crate::error::{require_positive, WindowError};
use crate::mullion::layout;
use crate::panel::PanelDimensions;
use config::constants::{shoulder_height, WindowDefaults};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Dimensions of one pointed-arch solid.
///
/// The arch spans `[-width/2, width/2]` in X, `[0, height]` in Z and
/// `[-depth/2, depth/2]` in Y around `location`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchParameters {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub location: DVec3,
}

impl ArchParameters {
    /// Arch at the origin.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
            location: DVec3::ZERO,
        }
    }

    pub fn with_location(mut self, location: DVec3) -> Self {
        self.location = location;
        self
    }

    /// Rejects non-positive or non-finite dimensions and locations.
    pub fn validate(&self) -> Result<(), WindowError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("depth", self.depth)?;
        if !self.location.is_finite() {
            return Err(WindowError::invalid(
                "location",
                self.location.length(),
                "must be finite",
            ));
        }
        Ok(())
    }

    /// Height at which the jambs end and the arch curves inward.
    pub fn shoulder_height(&self) -> f64 {
        shoulder_height(self.height)
    }
}

/// Parameters for a complete window.
///
/// # Examples
/// ```
/// use gothic_window::WindowParameters;
///
/// let params = WindowParameters::default();
/// assert_eq!(params.width, 2.4);
/// assert!(params.clear_existing_meshes);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowParameters {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub frame_thickness: f64,
    /// Delete every mesh object in the scene before building
    pub clear_existing_meshes: bool,
}

impl Default for WindowParameters {
    fn default() -> Self {
        WindowDefaults::default().into()
    }
}

impl From<WindowDefaults> for WindowParameters {
    fn from(defaults: WindowDefaults) -> Self {
        Self {
            width: defaults.width,
            height: defaults.height,
            depth: defaults.depth,
            frame_thickness: defaults.frame_thickness,
            clear_existing_meshes: defaults.clear_existing,
        }
    }
}

impl WindowParameters {
    /// Window with default clearing behaviour.
    pub fn new(width: f64, height: f64, depth: f64, frame_thickness: f64) -> Self {
        Self {
            width,
            height,
            depth,
            frame_thickness,
            ..Self::default()
        }
    }

    pub fn with_clear_existing(mut self, clear: bool) -> Self {
        self.clear_existing_meshes = clear;
        self
    }

    /// Checks the supplied dimensions and everything derived from them.
    ///
    /// Nothing is added to a scene unless this passes.
    pub fn validate(&self) -> Result<(), WindowError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("depth", self.depth)?;
        require_positive("frame_thickness", self.frame_thickness)?;
        PanelDimensions::derive(self.width, self.height, self.depth, self.frame_thickness)?;
        layout(self.width, self.height, self.depth, self.frame_thickness)?;
        Ok(())
    }

    /// Parameters of the outer frame arch.
    pub fn frame_arch(&self) -> ArchParameters {
        ArchParameters::new(self.width, self.height, self.depth)
    }
}
