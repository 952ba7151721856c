//! # Mullions
//!
//! Layout of the vertical bars and the fan of tracery bars, and their
//! instantiation as box meshes.
//!
//! A box primitive has half-extent 1, so a `MullionSpec::scale` is the half-extent
//! of the resulting bar along each axis.

use crate::error::{require_positive, WindowError};
use crate::scene::{ObjectId, Scene, Transform};
use config::constants::{
    shoulder_height, MULLION_DEPTH_RATIO, MULLION_WIDTH_RATIO, TRACERY_ANGLES_DEG, TRACERY_CENTER_RATIO,
    TRACERY_LENGTH_RATIO, TRACERY_PREFIX, TRACERY_START_RATIO, TRACERY_WIDTH_RATIO, VERTICAL_MULLION_HALF_HEIGHT,
    VERTICAL_MULLION_OFFSETS, VERTICAL_PREFIX,
};
use glam::DVec3;
use serde::Serialize;
use tracing::{debug, instrument};

/// Which family a bar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MullionRole {
    Vertical,
    Tracery,
}

impl MullionRole {
    pub fn prefix(self) -> &'static str {
        match self {
            MullionRole::Vertical => VERTICAL_PREFIX,
            MullionRole::Tracery => TRACERY_PREFIX,
        }
    }
}

/// Placement of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MullionSpec {
    pub role: MullionRole,
    /// 1-based position within its role
    pub index: usize,
    pub position: DVec3,
    pub scale: DVec3,
    /// Radians about the depth (Y) axis
    pub rotation: f64,
}

impl MullionSpec {
    /// Object name, e.g. `Tracery_2`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.role.prefix(), self.index)
    }

    pub fn transform(&self) -> Transform {
        Transform {
            location: self.position,
            rotation: DVec3::new(0.0, self.rotation, 0.0),
            scale: self.scale,
        }
    }

    fn validate(&self) -> Result<(), WindowError> {
        for value in self.scale.to_array() {
            require_positive("mullion_scale", value)?;
        }
        if !self.position.is_finite() {
            return Err(WindowError::invalid(
                "mullion_position",
                self.position.length(),
                "must be finite",
            ));
        }
        if !self.rotation.is_finite() {
            return Err(WindowError::invalid("mullion_rotation", self.rotation, "must be finite"));
        }
        Ok(())
    }
}

/// Computes the three vertical bars followed by the three tracery bars.
///
/// # Examples
/// ```
/// use gothic_window::mullion::{layout, MullionRole};
///
/// let specs = layout(2.0, 3.0, 0.2, 0.15).unwrap();
/// assert_eq!(specs.len(), 6);
/// assert_eq!(specs[0].role, MullionRole::Vertical);
/// assert_eq!(specs[5].name(), "Tracery_3");
/// ```
pub fn layout(width: f64, height: f64, depth: f64, frame_thickness: f64) -> Result<Vec<MullionSpec>, WindowError> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    require_positive("depth", depth)?;
    require_positive("frame_thickness", frame_thickness)?;

    let mullion_width = MULLION_WIDTH_RATIO * frame_thickness;
    let half_depth = MULLION_DEPTH_RATIO * depth / 2.0;
    let shoulder_h = shoulder_height(height);
    let half_height = VERTICAL_MULLION_HALF_HEIGHT * shoulder_h;

    let verticals = VERTICAL_MULLION_OFFSETS.iter().enumerate().map(|(i, offset)| MullionSpec {
        role: MullionRole::Vertical,
        index: i + 1,
        position: DVec3::new(offset * width, 0.0, half_height),
        scale: DVec3::new(mullion_width, half_depth, half_height),
        rotation: 0.0,
    });

    let start_h = shoulder_h + TRACERY_START_RATIO * (height - shoulder_h);
    let bar_length = TRACERY_LENGTH_RATIO * (height - start_h);
    let center_h = start_h + TRACERY_CENTER_RATIO * bar_length;

    let tracery = TRACERY_ANGLES_DEG.iter().enumerate().map(|(i, angle)| MullionSpec {
        role: MullionRole::Tracery,
        index: i + 1,
        position: DVec3::new(0.0, 0.0, center_h),
        scale: DVec3::new(TRACERY_WIDTH_RATIO * mullion_width, half_depth, bar_length / 2.0),
        rotation: angle.to_radians(),
    });

    Ok(verticals.chain(tracery).collect())
}

/// Adds one box per `MullionSpec`, named and transformed from it.
///
/// All specs are checked before the first box is added.
#[instrument(skip(scene, specs), fields(count = specs.len()))]
pub fn instantiate<S: Scene>(scene: &mut S, specs: &[MullionSpec]) -> Result<Vec<ObjectId>, WindowError> {
    for spec in specs {
        spec.validate()?;
    }

    let mut ids = Vec::with_capacity(specs.len());
    for spec in specs {
        let id = scene.add_box(&spec.name(), spec.position);
        scene.get_mut(id)?.transform = spec.transform();
        debug!(name = %spec.name(), "added mullion");
        ids.push(id);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::InMemoryScene;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_layout_order_and_rotations() {
        let specs = layout(2.0, 3.0, 0.2, 0.15).unwrap();
        let roles: Vec<_> = specs.iter().map(|s| s.role).collect();
        assert_eq!(roles[..3], [MullionRole::Vertical; 3]);
        assert_eq!(roles[3..], [MullionRole::Tracery; 3]);

        for spec in &specs[..3] {
            assert_eq!(spec.rotation, 0.0);
        }
        assert_abs_diff_eq!(specs[3].rotation, (-24.0f64).to_radians(), epsilon = 1e-15);
        assert_eq!(specs[4].rotation, 0.0);
        assert_abs_diff_eq!(specs[5].rotation, 24.0f64.to_radians(), epsilon = 1e-15);
    }

    #[test]
    fn test_vertical_positions() {
        let specs = layout(2.0, 3.0, 0.2, 0.15).unwrap();
        let xs: Vec<f64> = specs[..3].iter().map(|s| s.position.x).collect();
        assert_abs_diff_eq!(xs[0], -0.4, epsilon = 1e-12);
        assert_eq!(xs[1], 0.0);
        assert_abs_diff_eq!(xs[2], 0.4, epsilon = 1e-12);

        let bar = specs[0];
        assert_abs_diff_eq!(bar.position.z, 0.837, epsilon = 1e-12);
        assert_abs_diff_eq!(bar.scale.x, 0.042, epsilon = 1e-12);
        assert_abs_diff_eq!(bar.scale.y, 0.055, epsilon = 1e-12);
        assert_abs_diff_eq!(bar.scale.z, 0.837, epsilon = 1e-12);
    }

    #[test]
    fn test_tracery_dimensions() {
        let specs = layout(2.0, 3.0, 0.2, 0.15).unwrap();
        let bar = specs[4];
        // start 2.031, length 0.92055
        assert_abs_diff_eq!(bar.position.z, 2.031 + 0.4 * 0.92055, epsilon = 1e-9);
        assert_abs_diff_eq!(bar.scale.z * 2.0, 0.92055, epsilon = 1e-9);
        assert_abs_diff_eq!(bar.scale.x, 0.8 * 0.042, epsilon = 1e-12);
    }

    #[test]
    fn test_layout_rejects_zero_thickness() {
        let err = layout(2.0, 3.0, 0.2, 0.0).unwrap_err();
        assert!(matches!(err, WindowError::InvalidParameter { name: "frame_thickness", .. }));
    }

    #[test]
    fn test_instantiate_names_and_bounds() {
        let mut scene = InMemoryScene::new();
        let specs = layout(2.0, 3.0, 0.2, 0.15).unwrap();
        let ids = instantiate(&mut scene, &specs).unwrap();

        let names: Vec<String> = ids.iter().map(|id| scene.get(*id).unwrap().name.clone()).collect();
        assert_eq!(
            names,
            ["Vertical_1", "Vertical_2", "Vertical_3", "Tracery_1", "Tracery_2", "Tracery_3"]
        );

        let (min, max) = scene.get(ids[1]).unwrap().world_bounds().unwrap();
        assert_abs_diff_eq!(min.z, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(max.z, 0.9 * 1.86, epsilon = 1e-12);

        let (min, max) = scene.get(ids[4]).unwrap().world_bounds().unwrap();
        assert_abs_diff_eq!(max.z - min.z, 0.92055, epsilon = 1e-9);
    }

    #[test]
    fn test_instantiate_checks_before_adding() {
        let mut scene = InMemoryScene::new();
        let mut specs = layout(2.0, 3.0, 0.2, 0.15).unwrap();
        specs[5].scale.x = 0.0;
        assert!(instantiate(&mut scene, &specs).is_err());
        assert_eq!(scene.object_count(), 0);
    }
}
