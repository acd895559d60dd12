//! Scene preparation and rendering
//!
//! A scene is explicit configuration data (texture sources, material
//! definitions, lighting) plus an ordered script of per-object draw
//! instructions. Preparation populates the registries, binds textures,
//! configures lights, and loads each primitive mesh kind once; it must
//! complete fully before rendering, because draw-time lookups assume
//! populated registries. Rendering replays the whole script in order on
//! every call with no caching or retained per-object state.

pub mod script;

use std::collections::HashSet;

use anyhow::Context;
use cgmath::Vector3;

use crate::gfx::device::TextureDevice;
use crate::gfx::lighting::{self, LightingConfig};
use crate::gfx::mesh::{MeshRenderer, Shape};
use crate::gfx::pipeline::DrawPipeline;
use crate::gfx::resources::{Material, MaterialRegistry, TextureRegistry};
use crate::gfx::shader::ShaderUniforms;

/// One texture to load during preparation.
#[derive(Debug, Clone)]
pub struct TextureSource {
    pub path: String,
    pub tag: String,
}

impl TextureSource {
    pub fn new(path: &str, tag: &str) -> Self {
        Self {
            path: path.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// The surface of one scripted object: a registered texture or a flat
/// color, never both. Every draw carries exactly one, so no draw inherits
/// the previous object's surface selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Texture(String),
    Color([f32; 4]),
}

/// One scripted draw instruction.
///
/// Constructed builder-style; defaults are unit scale, no rotation, the
/// origin, a 1x1 UV scale, no material, and lit shading.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub scale: Vector3<f32>,
    pub rotation_degrees: Vector3<f32>,
    pub position: Vector3<f32>,
    pub surface: Surface,
    pub material: Option<String>,
    pub uv_scale: [f32; 2],
    pub lit: bool,
    pub shape: Shape,
}

impl SceneObject {
    fn with_surface(shape: Shape, surface: Surface) -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation_degrees: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
            surface,
            material: None,
            uv_scale: [1.0, 1.0],
            lit: true,
            shape,
        }
    }

    /// A shape surfaced with the texture registered under `tag`.
    pub fn textured(shape: Shape, tag: &str) -> Self {
        Self::with_surface(shape, Surface::Texture(tag.to_string()))
    }

    /// A shape surfaced with a flat RGBA color.
    pub fn colored(shape: Shape, color: [f32; 4]) -> Self {
        Self::with_surface(shape, Surface::Color(color))
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vector3::new(x, y, z);
        self
    }

    /// Per-axis rotation in degrees, applied X then Y then Z.
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation_degrees = Vector3::new(x, y, z);
        self
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    pub fn material(mut self, tag: &str) -> Self {
        self.material = Some(tag.to_string());
        self
    }

    pub fn uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = [u, v];
        self
    }

    /// Renders the object without lighting, for self-lit geometry.
    pub fn unlit(mut self) -> Self {
        self.lit = false;
        self
    }
}

/// Everything the scene needs loaded or configured before the first draw.
#[derive(Debug, Clone, Default)]
pub struct SceneConfig {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<Material>,
    pub lighting: LightingConfig,
}

/// A prepared scene, ready to render.
///
/// Owns the resource registries, and through them the GPU texture handles;
/// [`Scene::release`] is the only teardown path.
pub struct Scene {
    textures: TextureRegistry,
    materials: MaterialRegistry,
    script: Vec<SceneObject>,
    lighting_enabled: bool,
}

impl Scene {
    /// Prepares the scene: registers and binds textures, defines
    /// materials, configures lights, and loads each primitive kind used by
    /// the script exactly once.
    ///
    /// A texture that fails to load is reported and skipped; preparation
    /// continues and later lookups of its tag miss. A lighting
    /// configuration over the compile-time ceiling is an error.
    pub fn prepare(
        config: SceneConfig,
        script: Vec<SceneObject>,
        device: &mut dyn TextureDevice,
        shader: &mut dyn ShaderUniforms,
        renderer: &mut dyn MeshRenderer,
    ) -> anyhow::Result<Self> {
        let mut textures = TextureRegistry::new();
        for source in &config.textures {
            if let Err(error) = textures.register(device, &source.path, &source.tag) {
                log::warn!("skipping texture `{}`: {error}", source.tag);
            }
        }
        textures.bind_all(device);

        let mut materials = MaterialRegistry::new();
        for material in config.materials {
            materials.define(material);
        }

        lighting::configure(shader, &config.lighting)
            .context("invalid scene lighting configuration")?;

        let mut loaded = HashSet::new();
        for object in &script {
            if loaded.insert(object.shape.kind()) {
                renderer.load(object.shape.kind());
            }
        }

        Ok(Self {
            textures,
            materials,
            script,
            lighting_enabled: config.lighting.enabled,
        })
    }

    /// Renders the scene by replaying the full script in order.
    ///
    /// For each object the pipeline pushes, in strict order: transform,
    /// texture or color, UV scale, material (if any), lighting flag, draw.
    pub fn render(&self, shader: &mut dyn ShaderUniforms, renderer: &mut dyn MeshRenderer) {
        let mut pipeline = DrawPipeline::new(shader, &self.textures, &self.materials);

        for object in &self.script {
            pipeline.set_transform(object.scale, object.rotation_degrees, object.position);

            match &object.surface {
                Surface::Texture(tag) => pipeline.set_texture(tag),
                Surface::Color(color) => pipeline.set_color(*color),
            }

            pipeline.set_uv_scale(object.uv_scale[0], object.uv_scale[1]);

            if let Some(tag) = &object.material {
                pipeline.set_material(tag);
            }

            pipeline.set_lighting(self.lighting_enabled && object.lit);

            pipeline.draw(object.shape, renderer);
        }
    }

    /// Releases all GPU texture storage. Teardown only; rendering after
    /// this call is invalid.
    pub fn release(&mut self, device: &mut dyn TextureDevice) {
        self.textures.release_all(device);
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn object_count(&self) -> usize {
        self.script.len()
    }
}
