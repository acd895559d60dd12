//! Per-draw state pipeline
//!
//! The declarative sequence pushed to the shader before each mesh draw:
//! transform, then texture selection or flat color, then UV tiling scale,
//! then material, then the draw call itself. State set here has no
//! persistence beyond the draw; the next object's sequence overwrites it.
//!
//! Texture selection and flat color are mutually exclusive per draw:
//! selecting a texture always sets the shader's use-texture flag true,
//! selecting a color always sets it false. A texture or material lookup
//! miss is reported and leaves the shader state from the previous draw
//! completely untouched; in particular a texture miss never uploads a
//! sampler index or flips the flag.

use cgmath::Vector3;

use crate::gfx::mesh::{MeshRenderer, Shape};
use crate::gfx::resources::{MaterialRegistry, TextureRegistry};
use crate::gfx::shader::{uniform, ShaderUniforms};
use crate::gfx::transform;

/// Issues the ordered per-draw state sequence against borrowed registries.
///
/// The pipeline holds no state of its own; it is a thin ordering layer over
/// the shader, resolving tags through the registries at call time.
pub struct DrawPipeline<'a> {
    shader: &'a mut dyn ShaderUniforms,
    textures: &'a TextureRegistry,
    materials: &'a MaterialRegistry,
}

impl<'a> DrawPipeline<'a> {
    pub fn new(
        shader: &'a mut dyn ShaderUniforms,
        textures: &'a TextureRegistry,
        materials: &'a MaterialRegistry,
    ) -> Self {
        Self {
            shader,
            textures,
            materials,
        }
    }

    /// Composes the model matrix and uploads it.
    pub fn set_transform(
        &mut self,
        scale: Vector3<f32>,
        rotation_degrees: Vector3<f32>,
        position: Vector3<f32>,
    ) {
        let model = transform::compose(scale, rotation_degrees, position);
        self.shader.set_mat4(uniform::MODEL, model);
    }

    /// Selects the texture registered under `tag` for the next draw.
    ///
    /// On a miss the shader state is left untouched and a warning is
    /// logged; the draw proceeds with whatever surface state the previous
    /// draw established.
    pub fn set_texture(&mut self, tag: &str) {
        match self.textures.find_unit(tag) {
            Some(unit) => {
                self.shader.set_bool(uniform::USE_TEXTURE, true);
                self.shader.set_sampler(uniform::OBJECT_TEXTURE, unit);
            }
            None => {
                log::warn!("texture tag `{tag}` is not registered, keeping previous surface state");
            }
        }
    }

    /// Selects a flat RGBA color for the next draw, disabling texturing.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.shader.set_bool(uniform::USE_TEXTURE, false);
        self.shader.set_vec4(uniform::OBJECT_COLOR, color);
    }

    /// Sets the UV tiling multiplier. The scene default is 1x1.
    pub fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.shader.set_vec2(uniform::UV_SCALE, [u, v]);
    }

    /// Uploads the material registered under `tag`.
    ///
    /// On a miss the previous draw's material state persists; no default
    /// material is applied.
    pub fn set_material(&mut self, tag: &str) {
        match self.materials.find(tag) {
            Some(material) => {
                self.shader.set_vec3(uniform::MATERIAL_DIFFUSE, material.diffuse);
                self.shader.set_vec3(uniform::MATERIAL_SPECULAR, material.specular);
                self.shader.set_float(uniform::MATERIAL_SHININESS, material.shininess);
            }
            None => {
                log::warn!("material tag `{tag}` is not defined, keeping previous material state");
            }
        }
    }

    /// Per-draw lighting toggle, for self-lit objects such as light bulbs.
    pub fn set_lighting(&mut self, enabled: bool) {
        self.shader.set_bool(uniform::USE_LIGHTING, enabled);
    }

    /// Hands the draw off to the mesh collaborator.
    pub fn draw(&mut self, shape: Shape, renderer: &mut dyn MeshRenderer) {
        match shape {
            Shape::Plane => renderer.draw_plane(),
            Shape::Box(faces) => renderer.draw_box(faces),
            Shape::Cylinder { top, bottom, sides } => renderer.draw_cylinder(top, bottom, sides),
            Shape::Cone => renderer.draw_cone(),
            Shape::Sphere => renderer.draw_sphere(),
        }
    }
}
