//! Convenience re-exports of the types most callers need.
//!
//! ```rust
//! use lochan::prelude::*;
//! ```

pub use crate::gfx::device::{
    FilterMode, PixelFormat, TextureDevice, TextureHandle, TextureUpload, WrapMode,
};
pub use crate::gfx::lighting::{Light, LightingConfig, MAX_POINT_LIGHTS};
pub use crate::gfx::mesh::{BoxFaces, MeshRenderer, Shape, ShapeKind};
pub use crate::gfx::pipeline::DrawPipeline;
pub use crate::gfx::resources::{
    Material, MaterialRegistry, ResourceError, TextureRegistry, MAX_TEXTURE_UNITS,
};
pub use crate::gfx::shader::{uniform, ShaderUniforms};
pub use crate::gfx::transform::compose;
pub use crate::scene::{Scene, SceneConfig, SceneObject, Surface, TextureSource};

// Common math types from the crate's math backend.
pub use cgmath::{Deg, Matrix4, Vector3};
