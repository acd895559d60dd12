//! Material registry
//!
//! A material is a named bundle of lighting-response properties, independent
//! of any texture. Materials are defined once from authored configuration
//! during scene preparation and looked up by tag for every draw that
//! specifies one.

/// Phong-style material properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub tag: String,
    /// RGB diffuse reflectance, components in [0, 1].
    pub diffuse: [f32; 3],
    /// RGB specular reflectance, components in [0, 1].
    pub specular: [f32; 3],
    /// Specular exponent; clamped to be non-negative.
    pub shininess: f32,
}

impl Material {
    pub fn new(tag: &str, diffuse: [f32; 3], specular: [f32; 3], shininess: f32) -> Self {
        Self {
            tag: tag.to_string(),
            diffuse,
            specular,
            shininess: shininess.max(0.0),
        }
    }
}

/// Ordered table of named materials.
///
/// Storage is an ordered list rather than a map so that duplicate tags keep
/// the first-registered-wins lookup semantics.
#[derive(Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
        }
    }

    /// Appends a material. Duplicate tags are permitted; lookups resolve to
    /// the earliest entry.
    pub fn define(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// First-match linear scan by tag.
    ///
    /// On a miss the caller must leave shader material state untouched; no
    /// default material is silently applied.
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
