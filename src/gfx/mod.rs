//! Graphics components
//!
//! The building blocks of scene preparation and rendering: the resource
//! registries ([`resources`]), light configuration ([`lighting`]), the
//! transform composer ([`transform`]), and the per-draw state pipeline
//! ([`pipeline`]). The graphics API, shader program, and mesh geometry are
//! external collaborators reached through the trait seams in [`device`],
//! [`shader`], and [`mesh`].

pub mod device;
pub mod lighting;
pub mod mesh;
pub mod pipeline;
pub mod resources;
pub mod shader;
pub mod transform;
