//! Poolside scene script
//!
//! The authored backyard-pool scene: a paved ground plane, a sunken pool
//! with a surrounding wall, a raised hot tub with a spillover waterfall,
//! back walls, a light fixture, and a torch. This module is data, not
//! logic; the ordered object list drives the per-draw pipeline as-is.

use cgmath::Vector3;

use crate::gfx::lighting::{Light, LightingConfig};
use crate::gfx::mesh::Shape;
use crate::gfx::resources::Material;
use crate::scene::{SceneConfig, SceneObject, TextureSource};

const CYLINDER_WATER_SURFACE: Shape = Shape::Cylinder {
    top: true,
    bottom: true,
    sides: false,
};
const CYLINDER_WALL: Shape = Shape::Cylinder {
    top: false,
    bottom: true,
    sides: true,
};
const CYLINDER_SIDES_ONLY: Shape = Shape::Cylinder {
    top: false,
    bottom: false,
    sides: true,
};

/// The poolside scene configuration: textures, materials, and lights.
pub fn poolside_config() -> SceneConfig {
    SceneConfig {
        textures: vec![
            TextureSource::new("textures/PavingStones138_1K-JPG_Color.jpg", "moss"),
            TextureSource::new("textures/PavingStones142_1K-JPG_Color.jpg", "paver"),
            TextureSource::new("textures/Asphalt031_1K-JPG_Color.jpg", "stonetop"),
            TextureSource::new("textures/Rocks011_1K-JPG_Color.jpg", "rock"),
            TextureSource::new("textures/water.jpg", "water"),
            TextureSource::new("textures/stone.jpg", "stone"),
        ],
        materials: vec![
            Material::new("stone", [0.2, 0.3, 0.3], [0.5, 0.5, 0.5], 10.0),
            Material::new("water", [0.5, 0.5, 0.8], [0.5, 0.5, 0.6], 50.0),
            Material::new("glass", [0.7, 0.7, 0.7], [0.9, 0.9, 0.9], 80.0),
            Material::new("metal", [0.7, 0.7, 0.7], [0.9, 0.9, 0.9], 80.0),
        ],
        lighting: LightingConfig {
            point: vec![
                // Warm light over the pool deck.
                Light {
                    vector: Vector3::new(5.0, 5.0, 0.0),
                    ambient: [0.3, 0.3, 0.3],
                    diffuse: [0.6, 0.6, 0.5],
                    specular: [0.5, 0.3, 0.0],
                    enabled: true,
                },
                // Inside the fixture on the back wall.
                Light {
                    vector: Vector3::new(4.0, 4.0, -6.0),
                    ambient: [0.1, 0.1, 0.1],
                    diffuse: [0.8, 0.8, 0.6],
                    specular: [0.5, 0.5, 0.4],
                    enabled: true,
                },
            ],
            directional: Some(Light {
                vector: Vector3::new(-1.0, -2.0, 2.0),
                ambient: [0.5, 0.5, 0.5],
                diffuse: [0.7, 0.7, 0.7],
                specular: [0.3, 0.3, 0.3],
                enabled: true,
            }),
            enabled: true,
        },
    }
}

/// The ordered draw list for the poolside scene.
pub fn poolside_script() -> Vec<SceneObject> {
    vec![
        // Paved ground plane.
        SceneObject::textured(Shape::Plane, "paver")
            .scaled(20.0, 1.0, 10.0)
            .uv_scale(5.0, 5.0)
            .material("stone"),
        // Pool water surface.
        SceneObject::textured(Shape::full_box(), "water")
            .scaled(16.0, 0.5, 8.0)
            .at(-5.0, 0.1, 0.0)
            .material("water"),
        // Pool wall.
        SceneObject::textured(Shape::full_box(), "stone")
            .scaled(20.0, 0.4, 10.0)
            .at(-5.5, 0.1, 0.0)
            .uv_scale(2.0, 4.0)
            .material("stone"),
        // Hot tub water.
        SceneObject::textured(CYLINDER_WATER_SURFACE, "water")
            .scaled(3.5, 1.8, 3.5)
            .at(5.0, 0.0, 0.0)
            .uv_scale(0.1, 0.1)
            .material("water"),
        // Hot tub wall.
        SceneObject::textured(CYLINDER_WALL, "stone")
            .scaled(3.5, 1.8, 3.5)
            .rotated(0.0, 30.0, 0.0)
            .at(5.0, 0.0, 0.0)
            .uv_scale(2.0, 4.0)
            .material("stone"),
        // Hot tub ledge, inner and outer rings.
        SceneObject::textured(CYLINDER_SIDES_ONLY, "stonetop")
            .scaled(3.5, 0.3, 3.5)
            .rotated(0.0, 0.0, 180.0)
            .at(5.0, 2.1, 0.0)
            .material("stone"),
        SceneObject::textured(CYLINDER_SIDES_ONLY, "stonetop")
            .scaled(3.51, 0.3, 3.51)
            .rotated(0.0, 0.0, 180.0)
            .at(5.0, 2.1, 0.0)
            .material("stone"),
        // Spillover spout.
        SceneObject::textured(Shape::full_box(), "water")
            .scaled(0.1, 0.5, 2.0)
            .rotated(0.0, 25.0, 0.0)
            .at(2.0, 1.5, 1.7)
            .uv_scale(0.1, 0.1)
            .material("water"),
        // Waterfall sheet below the spout.
        SceneObject::textured(Shape::full_box(), "water")
            .scaled(0.1, 1.5, 1.8)
            .rotated(0.0, 25.0, 0.0)
            .at(2.0, 0.5, 1.7)
            .uv_scale(0.1, 0.01)
            .material("water"),
        // Low back wall behind the pool.
        SceneObject::textured(Shape::full_box(), "paver")
            .scaled(17.0, 1.5, 1.0)
            .at(-5.0, 1.1, -6.0)
            .uv_scale(4.0, 2.0)
            .material("stone"),
        // Tall back wall section.
        SceneObject::textured(Shape::full_box(), "paver")
            .scaled(8.0, 4.0, 1.0)
            .at(7.0, 1.1, -6.0)
            .uv_scale(4.0, 2.0)
            .material("stone"),
        // Side wall behind the spa.
        SceneObject::textured(Shape::full_box(), "paver")
            .scaled(12.0, 4.0, 1.0)
            .rotated(0.0, 90.0, 0.0)
            .at(11.0, 1.1, -0.5)
            .uv_scale(4.0, 2.0)
            .material("stone"),
        // Hot tub platform, rotated to line the paver pattern up with the
        // background.
        SceneObject::textured(Shape::full_box(), "paver")
            .scaled(10.0, 1.0, 6.0)
            .rotated(0.0, 90.0, 0.0)
            .at(7.5, 0.1, 0.0)
            .uv_scale(2.0, 1.0)
            .material("stone"),
        // Light bulb inside the fixture; self-lit.
        SceneObject::colored(Shape::Sphere, [0.8, 0.8, 0.7, 0.7])
            .scaled(0.4, 0.4, 0.4)
            .at(4.0, 4.0, -6.0)
            .material("glass")
            .unlit(),
        // Fixture post.
        SceneObject::colored(CYLINDER_SIDES_ONLY, [0.3, 0.3, 0.3, 1.0])
            .scaled(0.2, 1.7, 0.2)
            .at(4.0, 2.0, -6.0)
            .material("metal"),
        // Fixture housing; translucent, self-lit.
        SceneObject::colored(Shape::full_box(), [0.75, 0.75, 0.6, 0.5])
            .scaled(1.0, 1.5, 1.0)
            .at(4.0, 4.0, -6.0)
            .material("glass")
            .unlit(),
        // Torch post.
        SceneObject::colored(CYLINDER_SIDES_ONLY, [0.1, 0.1, 0.1, 1.0])
            .scaled(0.13, 6.0, 0.13)
            .at(10.0, 0.1, -5.0)
            .material("metal"),
        // Torch head, an upended cone above the post.
        SceneObject::colored(Shape::Cone, [0.3, 0.3, 0.3, 1.0])
            .scaled(0.6, 0.6, 0.6)
            .rotated(180.0, 0.0, 0.0)
            .at(10.0, 6.2, -5.0)
            .material("metal"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Surface;

    #[test]
    fn test_config_names_are_consistent() {
        let config = poolside_config();
        let script = poolside_script();

        let texture_tags: Vec<&str> = config.textures.iter().map(|t| t.tag.as_str()).collect();
        let material_tags: Vec<&str> = config.materials.iter().map(|m| m.tag.as_str()).collect();

        for object in &script {
            if let Surface::Texture(tag) = &object.surface {
                assert!(
                    texture_tags.contains(&tag.as_str()),
                    "script references unregistered texture `{tag}`"
                );
            }
            if let Some(tag) = &object.material {
                assert!(
                    material_tags.contains(&tag.as_str()),
                    "script references undefined material `{tag}`"
                );
            }
        }
    }

    #[test]
    fn test_lighting_fits_the_ceiling() {
        use crate::gfx::lighting::MAX_POINT_LIGHTS;

        let config = poolside_config();
        assert!(config.lighting.point.len() <= MAX_POINT_LIGHTS);
        assert!(config.lighting.directional.is_some());
        assert!(config.lighting.enabled);
    }

    #[test]
    fn test_script_is_nonempty_and_ordered_data() {
        let script = poolside_script();
        assert_eq!(script.len(), 18);
        // First object is the ground plane, last the torch head.
        assert_eq!(script[0].shape, Shape::Plane);
        assert_eq!(script[script.len() - 1].shape, Shape::Cone);
    }
}
