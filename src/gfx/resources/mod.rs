//! Scene resource registries
//!
//! Lookup tables populated during scene preparation and queried by tag at
//! draw time: textures bound to fixed GPU texture units, and named material
//! property sets.

pub mod material;
pub mod texture;

pub use material::{Material, MaterialRegistry};
pub use texture::{ResourceError, TextureRegistry, MAX_TEXTURE_UNITS};
