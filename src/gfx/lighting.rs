//! Light configuration
//!
//! Pushes a fixed set of light-source parameters to the shader by
//! index-qualified uniform names, plus the single global lighting flag.
//! Lights are configured once during scene preparation from explicit
//! configuration data and are not animated.

use cgmath::Vector3;
use thiserror::Error;

use crate::gfx::shader::{uniform, ShaderUniforms};

/// Compile-time ceiling on simultaneous point lights. The shader declares a
/// fixed-size `pointLights` array, so this must not be raised without also
/// changing the shader.
pub const MAX_POINT_LIGHTS: usize = 2;

#[derive(Debug, Error)]
pub enum LightError {
    #[error("at most {max} point lights are supported, {given} configured")]
    TooManyPointLights { given: usize, max: usize },
}

/// One light source's parameter set.
///
/// `vector` is a position for point lights and a direction for the
/// directional light; which one it means is determined by where the light
/// sits in [`LightingConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub vector: Vector3<f32>,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub enabled: bool,
}

/// The scene's full lighting setup.
///
/// `enabled` is the global flag; enabling it with zero enabled lights is
/// legal and simply yields an unlit-looking scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightingConfig {
    pub point: Vec<Light>,
    pub directional: Option<Light>,
    pub enabled: bool,
}

/// Uploads the complete lighting configuration to the shader.
///
/// Fails only when the configuration exceeds the compile-time point-light
/// ceiling; that is a scene configuration error, not a runtime condition.
pub fn configure(
    shader: &mut dyn ShaderUniforms,
    config: &LightingConfig,
) -> Result<(), LightError> {
    if config.point.len() > MAX_POINT_LIGHTS {
        return Err(LightError::TooManyPointLights {
            given: config.point.len(),
            max: MAX_POINT_LIGHTS,
        });
    }

    shader.set_bool(uniform::USE_LIGHTING, config.enabled);

    for (index, light) in config.point.iter().enumerate() {
        shader.set_vec3(&uniform::point_light(index, "position"), light.vector.into());
        shader.set_vec3(&uniform::point_light(index, "ambient"), light.ambient);
        shader.set_vec3(&uniform::point_light(index, "diffuse"), light.diffuse);
        shader.set_vec3(&uniform::point_light(index, "specular"), light.specular);
        shader.set_bool(&uniform::point_light(index, "bActive"), light.enabled);
    }

    if let Some(light) = &config.directional {
        shader.set_vec3(&uniform::directional_light("direction"), light.vector.into());
        shader.set_vec3(&uniform::directional_light("ambient"), light.ambient);
        shader.set_vec3(&uniform::directional_light("diffuse"), light.diffuse);
        shader.set_vec3(&uniform::directional_light("specular"), light.specular);
        shader.set_bool(&uniform::directional_light("bActive"), light.enabled);
    }

    Ok(())
}
