//! # Glass Panel
//!
//! Inset arch filling the frame opening.

use crate::arch::build_arch;
use crate::error::{require_positive, WindowError};
use crate::params::ArchParameters;
use crate::scene::{ObjectId, Scene};
use config::constants::{PANEL_DEPTH_RATIO, PANEL_HEIGHT_INSET, PANEL_LIFT, PANEL_WIDTH_INSET};
use glam::DVec3;
use serde::Serialize;
use tracing::instrument;

/// Panel dimensions derived from the frame.
///
/// # Examples
/// ```
/// use gothic_window::panel::PanelDimensions;
///
/// let panel = PanelDimensions::derive(2.0, 3.0, 0.2, 0.15).unwrap();
/// assert!((panel.width - 1.73).abs() < 1e-12);
/// assert!((panel.height - 2.76).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub location: DVec3,
}

impl PanelDimensions {
    /// Shrinks the frame dimensions by the frame thickness.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive input, or when the thickness
    /// leaves no room for the panel.
    pub fn derive(width: f64, height: f64, depth: f64, frame_thickness: f64) -> Result<Self, WindowError> {
        require_positive("width", width)?;
        require_positive("height", height)?;
        require_positive("depth", depth)?;
        require_positive("frame_thickness", frame_thickness)?;

        let width = width - PANEL_WIDTH_INSET * frame_thickness;
        if width <= 0.0 {
            return Err(WindowError::invalid(
                "panel_width",
                width,
                "frame_thickness leaves no room for the panel",
            ));
        }
        let height = height - PANEL_HEIGHT_INSET * frame_thickness;
        if height <= 0.0 {
            return Err(WindowError::invalid(
                "panel_height",
                height,
                "frame_thickness leaves no room for the panel",
            ));
        }

        Ok(Self {
            width,
            height,
            depth: PANEL_DEPTH_RATIO * depth,
            location: DVec3::new(0.0, 0.0, PANEL_LIFT * frame_thickness),
        })
    }

    pub fn arch_parameters(&self) -> ArchParameters {
        ArchParameters::new(self.width, self.height, self.depth).with_location(self.location)
    }
}

/// Builds the glass panel arch.
#[instrument(skip(scene))]
pub fn build_panel<S: Scene>(
    scene: &mut S,
    width: f64,
    height: f64,
    depth: f64,
    frame_thickness: f64,
) -> Result<ObjectId, WindowError> {
    let dimensions = PanelDimensions::derive(width, height, depth, frame_thickness)?;
    build_arch(scene, &dimensions.arch_parameters())
}
