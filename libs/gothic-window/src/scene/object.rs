//! Scene objects: identity, data payload and object transform.

use crate::material::MaterialId;
use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::Serialize;
use std::fmt;
use window_mesh::{CurveData, Mesh};

/// Stable handle for an object inside a scene.
///
/// Ids are never reused, so a handle to a deleted object stays invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Object type, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectKind {
    Mesh,
    Curve,
    Empty,
    Camera,
    Light,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Mesh => "mesh",
            ObjectKind::Curve => "curve",
            ObjectKind::Empty => "empty",
            ObjectKind::Camera => "camera",
            ObjectKind::Light => "light",
        };
        f.write_str(name)
    }
}

/// Data carried by an object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    Mesh(Mesh),
    Curve(CurveData),
    Empty,
    Camera,
    Light,
}

impl ObjectData {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectData::Mesh(_) => ObjectKind::Mesh,
            ObjectData::Curve(_) => ObjectKind::Curve,
            ObjectData::Empty => ObjectKind::Empty,
            ObjectData::Camera => ObjectKind::Camera,
            ObjectData::Light => ObjectKind::Light,
        }
    }
}

/// Object transform: location, XYZ Euler rotation in radians, scale.
///
/// The rotation is extrinsic: X is applied first, then Y, then Z.
///
/// # Examples
/// ```
/// use gothic_window::scene::Transform;
/// use glam::DVec3;
///
/// let t = Transform::from_location(DVec3::new(1.0, 2.0, 3.0));
/// assert_eq!(t.matrix().transform_point3(DVec3::ZERO), DVec3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub location: DVec3,
    pub rotation: DVec3,
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

impl Transform {
    /// Identity transform moved to `location`.
    pub fn from_location(location: DVec3) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// Rotation as a quaternion.
    pub fn quaternion(&self) -> DQuat {
        DQuat::from_euler(EulerRot::ZYX, self.rotation.z, self.rotation.y, self.rotation.x)
    }

    /// Rotation and scale without the translation.
    pub fn rotation_scale_matrix(&self) -> DMat4 {
        DMat4::from_quat(self.quaternion()) * DMat4::from_scale(self.scale)
    }

    /// Full local-to-world matrix.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(self.location) * self.rotation_scale_matrix()
    }

    /// True if rotation is zero and scale is one.
    pub fn has_identity_basis(&self) -> bool {
        self.rotation == DVec3::ZERO && self.scale == DVec3::ONE
    }

    /// World-space bounding box of `mesh` placed with this transform.
    ///
    /// Returns two zero vectors for an empty mesh.
    pub fn bounds_of(&self, mesh: &Mesh) -> (DVec3, DVec3) {
        let matrix = self.matrix();
        let mut points = mesh.vertices().iter().map(|v| matrix.transform_point3(*v));
        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }
}

/// A named object in a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub data: ObjectData,
    pub transform: Transform,
    /// Material slots; a triangle's material index points into this list
    pub materials: Vec<MaterialId>,
    pub selected: bool,
}

impl SceneObject {
    /// Creates an unselected object with an identity transform.
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            data,
            transform: Transform::default(),
            materials: Vec::new(),
            selected: false,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.data.kind()
    }

    /// Mesh payload, if this is a mesh object.
    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// World-space bounds of a mesh object.
    pub fn world_bounds(&self) -> Option<(DVec3, DVec3)> {
        self.mesh().map(|mesh| self.transform.bounds_of(mesh))
    }
}
