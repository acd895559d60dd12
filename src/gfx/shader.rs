//! Shader uniform interface
//!
//! The shader program itself lives outside this crate; the core only needs
//! named-uniform setters. [`ShaderUniforms`] is the seam, and the [`uniform`]
//! module pins down the names the scene pipeline writes so that the shader
//! side and the scene side cannot drift apart silently.

use cgmath::Matrix4;

/// Uniform names used by the per-draw state pipeline.
///
/// Light sources and materials are addressed with dotted struct-field names
/// (`pointLights[0].position`, `material.diffuseColor`), matching the GLSL
/// uniform layout the scene shader exposes.
pub mod uniform {
    /// 4x4 model matrix.
    pub const MODEL: &str = "model";
    /// Flat RGBA object color, used when texturing is off.
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler index of the active object texture.
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Selects between texture sampling and the flat color.
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Global lighting toggle.
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// 2D texture coordinate tiling multiplier.
    pub const UV_SCALE: &str = "UVscale";

    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// Dotted field name for the indexed point-light array.
    pub fn point_light(index: usize, field: &str) -> String {
        format!("pointLights[{index}].{field}")
    }

    /// Dotted field name for the single directional light.
    pub fn directional_light(field: &str) -> String {
        format!("directionalLight.{field}")
    }
}

/// Named-uniform setters exposed by the external shader program.
///
/// Implementations are expected to upload the value to the currently active
/// program immediately; the pipeline relies on set-then-draw ordering and
/// never reads uniforms back.
pub trait ShaderUniforms {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: [f32; 2]);
    fn set_vec3(&mut self, name: &str, value: [f32; 3]);
    fn set_vec4(&mut self, name: &str, value: [f32; 4]);
    /// Binds a sampler uniform to a texture unit index.
    fn set_sampler(&mut self, name: &str, unit: u32);
}

#[cfg(test)]
mod tests {
    use super::uniform;

    #[test]
    fn test_light_uniform_names() {
        assert_eq!(uniform::point_light(0, "position"), "pointLights[0].position");
        assert_eq!(uniform::point_light(1, "bActive"), "pointLights[1].bActive");
        assert_eq!(
            uniform::directional_light("direction"),
            "directionalLight.direction"
        );
    }
}
