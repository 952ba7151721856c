//! In-memory scene host.

use super::{ObjectData, ObjectId, Scene, SceneError, SceneObject};
use config::constants::MAX_NAME_SUFFIX;
use std::collections::BTreeMap;
use window_mesh::primitives::unit_box;

/// Scene stored in process memory.
///
/// Names follow the usual DCC convention: a clash gets the lowest free
/// `.NNN` suffix.
///
/// # Examples
/// ```
/// use gothic_window::scene::{InMemoryScene, ObjectData, Scene};
///
/// let mut scene = InMemoryScene::new();
/// let a = scene.link("Lamp", ObjectData::Light);
/// let b = scene.link("Lamp", ObjectData::Light);
/// assert_eq!(scene.get(a).unwrap().name, "Lamp");
/// assert_eq!(scene.get(b).unwrap().name, "Lamp.001");
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryScene {
    objects: BTreeMap<ObjectId, SceneObject>,
    next_id: u64,
    active: Option<ObjectId>,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene holding the usual startup content: a cube, a camera and a light.
    pub fn with_startup_objects() -> Self {
        let mut scene = Self::new();
        let cube = scene.link("Cube", ObjectData::Mesh(unit_box()));
        scene.link("Camera", ObjectData::Camera);
        scene.link("Light", ObjectData::Light);
        scene.active = Some(cube);
        scene
    }

    fn is_taken(&self, name: &str, exclude: Option<ObjectId>) -> bool {
        self.objects
            .iter()
            .any(|(id, object)| Some(*id) != exclude && object.name == name)
    }

    fn unique_name(&self, name: &str, exclude: Option<ObjectId>) -> String {
        if !self.is_taken(name, exclude) {
            return name.to_string();
        }

        let stem = strip_numeric_suffix(name);
        (1..=MAX_NAME_SUFFIX)
            .map(|n| format!("{stem}.{n:03}"))
            .find(|candidate| !self.is_taken(candidate, exclude))
            .unwrap_or_else(|| format!("{stem}.{}", self.next_id))
    }
}

/// "Frame.004" -> "Frame"; names without a three digit suffix are kept.
fn strip_numeric_suffix(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, digits))
            if !stem.is_empty() && digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            stem
        }
        _ => name,
    }
}

impl Scene for InMemoryScene {
    fn link(&mut self, name: &str, data: ObjectData) -> ObjectId {
        let id = ObjectId(self.next_id);
        let name = self.unique_name(name, None);
        self.next_id += 1;
        self.objects.insert(id, SceneObject::new(name, data));
        id
    }

    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    fn object_ids(&self) -> Vec<ObjectId> {
        self.objects.keys().copied().collect()
    }

    fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        if self.active == Some(id) {
            self.active = None;
        }
        self.objects.remove(&id)
    }

    fn rename(&mut self, id: ObjectId, name: &str) -> Result<String, SceneError> {
        if !self.objects.contains_key(&id) {
            return Err(SceneError::ObjectNotFound(id));
        }
        let name = self.unique_name(name, Some(id));
        let object = self.get_mut(id)?;
        object.name.clone_from(&name);
        Ok(name)
    }

    fn active(&self) -> Option<ObjectId> {
        self.active
    }

    fn set_active(&mut self, id: ObjectId) -> Result<(), SceneError> {
        if !self.objects.contains_key(&id) {
            return Err(SceneError::ObjectNotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }
}
