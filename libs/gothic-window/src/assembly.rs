//! # Assembly
//!
//! Sequences the arch, panel and mullion builders, applies materials and
//! merges the stone parts into a single frame object.

use crate::arch::build_arch;
use crate::error::WindowError;
use crate::material::{MaterialCache, MaterialId, MaterialSpec};
use crate::mullion::{instantiate, layout};
use crate::panel::build_panel;
use crate::params::WindowParameters;
use crate::scene::{ObjectId, ObjectKind, Scene, SceneError, Transform};
use config::constants::{FRAME_OBJECT_NAME, MERGED_FRAME_NAME, PANEL_OBJECT_NAME};
use glam::DVec3;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use window_mesh::Mesh;

/// Value copy of a mesh object at the moment it was captured.
///
/// Snapshots stay readable after the object is joined or deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshSnapshot {
    pub id: ObjectId,
    pub name: String,
    pub transform: Transform,
    pub materials: Vec<MaterialId>,
    pub mesh: Mesh,
    /// Object this one was joined into, if any
    pub merged_into: Option<ObjectId>,
}

impl MeshSnapshot {
    /// Copies a mesh object out of the scene.
    pub fn capture<S: Scene + ?Sized>(scene: &S, id: ObjectId) -> Result<Self, SceneError> {
        let object = scene.get(id)?;
        let mesh = object
            .mesh()
            .ok_or_else(|| SceneError::wrong_kind(object, ObjectKind::Mesh))?;
        Ok(Self {
            id,
            name: object.name.clone(),
            transform: object.transform,
            materials: object.materials.clone(),
            mesh: mesh.clone(),
            merged_into: None,
        })
    }

    /// World-space bounding box.
    pub fn world_bounds(&self) -> (DVec3, DVec3) {
        self.transform.bounds_of(&self.mesh)
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    fn joined_into(mut self, target: ObjectId) -> Self {
        self.merged_into = Some(target);
        self
    }
}

/// The three logical outputs of a build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowAssembly {
    /// Frame arch joined with every mullion
    pub frame: MeshSnapshot,
    pub panel: MeshSnapshot,
    /// Mullions as they were just before the join
    pub mullions: Vec<MeshSnapshot>,
}

/// Deletes every mesh object, leaving other object types alone.
pub fn clear_meshes<S: Scene>(scene: &mut S) -> usize {
    scene.deselect_all();
    for id in scene.objects_of_kind(ObjectKind::Mesh) {
        if let Some(object) = scene.object_mut(id) {
            object.selected = true;
        }
    }
    scene.delete_selected()
}

/// Builds a complete gothic window in `scene`.
///
/// Materials are looked up or created in `materials` and persist across
/// builds. All dimensions, including derived ones, are validated before the
/// scene is touched.
///
/// # Errors
///
/// - `InvalidParameter` for unusable dimensions; the scene is unchanged
/// - `Mesh` or `Scene` for failures while building; the scene may hold
///   partial output
///
/// # Examples
/// ```
/// use gothic_window::{build_gothic_window, InMemoryScene, MaterialCache, WindowParameters};
///
/// let mut scene = InMemoryScene::new();
/// let mut materials = MaterialCache::new();
/// let window = build_gothic_window(&mut scene, &mut materials, &WindowParameters::default()).unwrap();
/// assert_eq!(window.frame.name, "GothicWindowFrame");
/// assert_eq!(window.mullions.len(), 6);
/// ```
#[instrument(skip(scene, materials))]
pub fn build_gothic_window<S: Scene>(
    scene: &mut S,
    materials: &mut MaterialCache,
    params: &WindowParameters,
) -> Result<WindowAssembly, WindowError> {
    params.validate()?;
    let WindowParameters {
        width,
        height,
        depth,
        frame_thickness,
        clear_existing_meshes,
    } = *params;

    if clear_existing_meshes {
        let removed = clear_meshes(scene);
        if removed > 0 {
            warn!(removed, "deleted existing mesh objects");
        }
    }

    let frame = build_arch(scene, &params.frame_arch())?;
    scene.rename(frame, FRAME_OBJECT_NAME)?;

    let panel = build_panel(scene, width, height, depth, frame_thickness)?;
    scene.rename(panel, PANEL_OBJECT_NAME)?;

    let specs = layout(width, height, depth, frame_thickness)?;
    let mullions = instantiate(scene, &specs)?;

    let stone = materials.ensure(&MaterialSpec::stone());
    let glass = materials.ensure(&MaterialSpec::glass());
    scene.assign_material(frame, stone)?;
    for id in &mullions {
        scene.assign_material(*id, stone)?;
    }
    scene.assign_material(panel, glass)?;

    let mut mullion_snapshots = Vec::with_capacity(mullions.len());
    for id in &mullions {
        mullion_snapshots.push(MeshSnapshot::capture(scene, *id)?.joined_into(frame));
    }

    scene.deselect_all();
    scene.select(frame, true)?;
    for id in &mullions {
        scene.select(*id, true)?;
    }
    scene.set_active(frame)?;
    let merged = scene.join_selected()?;
    let name = scene.rename(merged, MERGED_FRAME_NAME)?;
    debug!(%name, joined = mullions.len(), "merged frame");

    let assembly = WindowAssembly {
        frame: MeshSnapshot::capture(scene, merged)?,
        panel: MeshSnapshot::capture(scene, panel)?,
        mullions: mullion_snapshots,
    };

    info!(
        frame = %assembly.frame.name,
        panel = %assembly.panel.name,
        frame_triangles = assembly.frame.triangle_count(),
        mullions = assembly.mullions.len(),
        "built gothic window"
    );
    Ok(assembly)
}
