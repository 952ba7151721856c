//! # Scene
//!
//! Host scene abstraction the window builder talks to.
//!
//! The builder never owns geometry directly: it links objects into a
//! [`Scene`], edits their transforms and asks the scene to convert, bake and
//! join them, the way a script drives a DCC application. Implementations only
//! supply object storage, naming and the active object; every editing
//! operation has a provided implementation on top of those.
//!
//! [`InMemoryScene`] is the reference host used by tests and the CLI.

mod memory;
mod object;


pub use memory::InMemoryScene;
pub use object::{ObjectData, ObjectId, ObjectKind, SceneObject, Transform};

use crate::material::MaterialId;
use glam::DVec3;
use thiserror::Error;
use window_mesh::primitives::unit_box;
use window_mesh::MeshError;

/// Error raised when a scene operation fails.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SceneError {
    /// No object with this id exists.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// The operation needs a different object type.
    #[error("object '{name}' is a {found}, expected a {expected}")]
    WrongKind {
        name: String,
        expected: ObjectKind,
        found: ObjectKind,
    },

    /// The operation needs an active object.
    #[error("no active object")]
    NoActiveObject,

    /// A join found no other selected mesh.
    #[error("no selected meshes to join into '{0}'")]
    NothingToJoin(String),

    /// An object ran out of material slots.
    #[error("too many material slots on '{0}'")]
    TooManyMaterials(String),

    /// Curve to mesh conversion failed.
    #[error("conversion failed: {0}")]
    Mesh(#[from] MeshError),
}

impl SceneError {
    pub(crate) fn wrong_kind(object: &SceneObject, expected: ObjectKind) -> Self {
        SceneError::WrongKind {
            name: object.name.clone(),
            expected,
            found: object.kind(),
        }
    }
}

/// A host scene holding named objects.
///
/// # Examples
/// ```
/// use gothic_window::scene::{InMemoryScene, ObjectKind, Scene};
/// use glam::DVec3;
///
/// let mut scene = InMemoryScene::new();
/// let a = scene.add_box("Cube", DVec3::ZERO);
/// let b = scene.add_box("Cube", DVec3::X * 3.0);
/// assert_eq!(scene.get(b).unwrap().name, "Cube.001");
///
/// scene.select(a, true).unwrap();
/// scene.select(b, true).unwrap();
/// scene.set_active(a).unwrap();
/// scene.join_selected().unwrap();
/// assert_eq!(scene.objects_of_kind(ObjectKind::Mesh), vec![a]);
/// ```
pub trait Scene {
    /// Adds an object, returning its id. The name is made unique.
    fn link(&mut self, name: &str, data: ObjectData) -> ObjectId;

    fn object(&self, id: ObjectId) -> Option<&SceneObject>;

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject>;

    /// All object ids in creation order.
    fn object_ids(&self) -> Vec<ObjectId>;

    /// Removes an object and hands it back.
    fn remove(&mut self, id: ObjectId) -> Option<SceneObject>;

    /// Renames an object, returning the name it actually received.
    fn rename(&mut self, id: ObjectId, name: &str) -> Result<String, SceneError>;

    fn active(&self) -> Option<ObjectId>;

    fn set_active(&mut self, id: ObjectId) -> Result<(), SceneError>;

    fn get(&self, id: ObjectId) -> Result<&SceneObject, SceneError> {
        self.object(id).ok_or(SceneError::ObjectNotFound(id))
    }

    fn get_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, SceneError> {
        self.object_mut(id).ok_or(SceneError::ObjectNotFound(id))
    }

    fn object_count(&self) -> usize {
        self.object_ids().len()
    }

    fn objects_of_kind(&self, kind: ObjectKind) -> Vec<ObjectId> {
        self.object_ids()
            .into_iter()
            .filter(|id| self.object(*id).is_some_and(|o| o.kind() == kind))
            .collect()
    }

    /// First object with exactly this name.
    fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.object_ids()
            .into_iter()
            .find(|id| self.object(*id).is_some_and(|o| o.name == name))
    }

    fn select(&mut self, id: ObjectId, selected: bool) -> Result<(), SceneError> {
        self.get_mut(id)?.selected = selected;
        Ok(())
    }

    fn deselect_all(&mut self) {
        for id in self.object_ids() {
            if let Some(object) = self.object_mut(id) {
                object.selected = false;
            }
        }
    }

    fn selected(&self) -> Vec<ObjectId> {
        self.object_ids()
            .into_iter()
            .filter(|id| self.object(*id).is_some_and(|o| o.selected))
            .collect()
    }

    /// Deletes every selected object, returning how many were removed.
    fn delete_selected(&mut self) -> usize {
        self.selected()
            .into_iter()
            .filter_map(|id| self.remove(id))
            .count()
    }

    /// Adds a 2 x 2 x 2 box mesh centred on `location`.
    fn add_box(&mut self, name: &str, location: DVec3) -> ObjectId {
        let id = self.link(name, ObjectData::Mesh(unit_box()));
        if let Some(object) = self.object_mut(id) {
            object.transform.location = location;
        }
        id
    }

    /// Replaces a curve object's data with its mesh conversion.
    ///
    /// Mesh objects are left untouched.
    fn convert_to_mesh(&mut self, id: ObjectId) -> Result<(), SceneError> {
        let object = self.get_mut(id)?;
        let mesh = match &object.data {
            ObjectData::Curve(curve) => curve.to_mesh()?,
            ObjectData::Mesh(_) => return Ok(()),
            _ => return Err(SceneError::wrong_kind(object, ObjectKind::Curve)),
        };
        object.data = ObjectData::Mesh(mesh);
        Ok(())
    }

    /// Bakes rotation and scale into the mesh data.
    ///
    /// Afterwards the object has zero rotation and unit scale; world-space
    /// geometry is unchanged.
    fn apply_rotation_scale(&mut self, id: ObjectId) -> Result<(), SceneError> {
        let object = self.get_mut(id)?;
        if object.kind() != ObjectKind::Mesh {
            return Err(SceneError::wrong_kind(object, ObjectKind::Mesh));
        }
        let basis = object.transform.rotation_scale_matrix();
        if let Some(mesh) = object.mesh_mut() {
            mesh.transform(&basis);
        }
        object.transform.rotation = DVec3::ZERO;
        object.transform.scale = DVec3::ONE;
        Ok(())
    }

    /// Puts `material` in the first slot, adding a slot if there is none.
    fn assign_material(&mut self, id: ObjectId, material: MaterialId) -> Result<(), SceneError> {
        let object = self.get_mut(id)?;
        if object.materials.is_empty() {
            object.materials.push(material);
        } else {
            object.materials[0] = material;
        }
        Ok(())
    }

    /// Joins every other selected mesh into the active mesh.
    ///
    /// Joined objects are removed. Their geometry is moved into the active
    /// object's local space so world positions are preserved, and their
    /// material slots are merged into the active object's slot list.
    ///
    /// # Errors
    ///
    /// - `NoActiveObject` if nothing is active
    /// - `WrongKind` if the active object is not a mesh
    /// - `NothingToJoin` if no other selected object is a mesh
    fn join_selected(&mut self) -> Result<ObjectId, SceneError> {
        let target = self.active().ok_or(SceneError::NoActiveObject)?;
        let target_object = self.get(target)?;
        if target_object.kind() != ObjectKind::Mesh {
            return Err(SceneError::wrong_kind(target_object, ObjectKind::Mesh));
        }
        let to_local = target_object.transform.matrix().inverse();
        let target_name = target_object.name.clone();

        let sources: Vec<ObjectId> = self
            .selected()
            .into_iter()
            .filter(|id| *id != target)
            .filter(|id| self.object(*id).is_some_and(|o| o.kind() == ObjectKind::Mesh))
            .collect();
        if sources.is_empty() {
            return Err(SceneError::NothingToJoin(target_name));
        }

        for id in sources {
            // Slots are resolved before the source leaves the scene
            let source_materials = self.get(id)?.materials.clone();
            let mut target_materials = self.get(target)?.materials.clone();
            let slots = source_materials
                .iter()
                .map(|material| slot_for(&mut target_materials, *material))
                .collect::<Option<Vec<u16>>>()
                .ok_or_else(|| SceneError::TooManyMaterials(target_name.clone()))?;

            let source = self.remove(id).ok_or(SceneError::ObjectNotFound(id))?;
            let ObjectData::Mesh(mut mesh) = source.data else {
                continue;
            };
            mesh.transform(&(to_local * source.transform.matrix()));

            let target_object = self.get_mut(target)?;
            target_object.materials = target_materials;
            if let Some(target_mesh) = target_object.mesh_mut() {
                target_mesh.merge_with_slots(&mesh, |slot| {
                    slots.get(usize::from(slot)).copied().unwrap_or(0)
                });
            }
        }

        Ok(target)
    }
}

/// Slot index of `material`, appending it when missing.
fn slot_for(materials: &mut Vec<MaterialId>, material: MaterialId) -> Option<u16> {
    let index = match materials.iter().position(|m| *m == material) {
        Some(index) => index,
        None => {
            materials.push(material);
            materials.len() - 1
        }
    };
    u16::try_from(index).ok()
}
