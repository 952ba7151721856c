//! # Materials
//!
//! Named surface materials and the lookup-or-create cache that owns them.
//!
//! Materials are shared by name: asking for "Stone" twice yields the same
//! [`MaterialId`], and the most recent request's values overwrite the stored
//! ones.

use config::constants::{
    DEFAULT_COLOR, DEFAULT_IOR, DEFAULT_ROUGHNESS, GLASS_COLOR, GLASS_IOR, GLASS_MATERIAL,
    GLASS_ROUGHNESS, GLASS_TRANSMISSION, STONE_COLOR, STONE_MATERIAL, STONE_ROUGHNESS,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Handle to a material inside a [`MaterialCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MaterialId(pub u32);

/// How a material's alpha and transmission are composited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlendMode {
    Opaque,
    Blend,
}

/// Principled surface shader values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrincipledBsdf {
    pub base_color: [f32; 4],
    pub roughness: f32,
    pub transmission: f32,
    pub ior: f32,
}

impl Default for PrincipledBsdf {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_COLOR,
            roughness: DEFAULT_ROUGHNESS,
            transmission: 0.0,
            ior: DEFAULT_IOR,
        }
    }
}

/// A stored material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub blend_mode: BlendMode,
    pub bsdf: PrincipledBsdf,
}

/// Requested material values.
///
/// `None` fields leave whatever the stored material already has.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSpec {
    pub name: String,
    pub base_color: [f32; 4],
    pub roughness: f32,
    pub transmission: Option<f32>,
    pub ior: Option<f32>,
    pub blend_mode: Option<BlendMode>,
}

impl MaterialSpec {
    /// Base color and roughness only.
    pub fn new(name: impl Into<String>, base_color: [f32; 4], roughness: f32) -> Self {
        Self {
            name: name.into(),
            base_color,
            roughness,
            transmission: None,
            ior: None,
            blend_mode: None,
        }
    }

    /// Warm grey opaque stone used for the frame and mullions.
    pub fn stone() -> Self {
        Self {
            blend_mode: Some(BlendMode::Opaque),
            ..Self::new(STONE_MATERIAL, STONE_COLOR, STONE_ROUGHNESS)
        }
    }

    /// Pale blue, highly transmissive glass.
    pub fn glass() -> Self {
        Self {
            transmission: Some(GLASS_TRANSMISSION),
            ior: Some(GLASS_IOR),
            blend_mode: Some(BlendMode::Blend),
            ..Self::new(GLASS_MATERIAL, GLASS_COLOR, GLASS_ROUGHNESS)
        }
    }
}

/// Name-keyed material store.
///
/// # Examples
/// ```
/// use gothic_window::material::{MaterialCache, MaterialSpec};
///
/// let mut cache = MaterialCache::new();
/// let first = cache.ensure(&MaterialSpec::stone());
/// let again = cache.ensure(&MaterialSpec::stone());
/// assert_eq!(first, again);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MaterialCache {
    materials: Vec<Material>,
    by_name: HashMap<String, MaterialId>,
}

impl MaterialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the material named `spec.name`, creating it if needed, and
    /// overwrites its values with the requested ones.
    pub fn ensure(&mut self, spec: &MaterialSpec) -> MaterialId {
        let id = match self.by_name.get(&spec.name) {
            Some(id) => {
                debug!(name = %spec.name, "reusing material");
                *id
            }
            None => {
                let id = MaterialId(self.materials.len() as u32);
                self.materials.push(Material {
                    id,
                    name: spec.name.clone(),
                    blend_mode: BlendMode::Opaque,
                    bsdf: PrincipledBsdf::default(),
                });
                self.by_name.insert(spec.name.clone(), id);
                debug!(name = %spec.name, "created material");
                id
            }
        };

        let material = &mut self.materials[id.0 as usize];
        material.bsdf.base_color = spec.base_color;
        material.bsdf.roughness = spec.roughness;
        if let Some(transmission) = spec.transmission {
            material.bsdf.transmission = transmission;
        }
        if let Some(ior) = spec.ior {
            material.bsdf.ior = ior;
        }
        if let Some(blend_mode) = spec.blend_mode {
            material.blend_mode = blend_mode;
        }
        id
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    pub fn find(&self, name: &str) -> Option<&Material> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}
