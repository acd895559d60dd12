//! Lochan
//!
//! Scene resource registries and a declarative per-draw state pipeline for
//! static 3D scenes built from primitive meshes.
//!
//! The crate prepares and renders a fixed, hand-authored scene: textures
//! and materials are loaded once, tagged by name, and resolved at draw
//! time; each scripted object pushes its transform, surface selection, UV
//! scale, and material to the shader in a fixed order before the mesh draw
//! call. The graphics API, shader program, image decoding backend, and
//! mesh geometry are external collaborators reached through trait seams,
//! which keeps the core synchronous, single-threaded, and testable with
//! recording fakes.
//!
//! ```no_run
//! use lochan::prelude::*;
//! use lochan::scene::script;
//!
//! fn run(
//!     device: &mut dyn TextureDevice,
//!     shader: &mut dyn ShaderUniforms,
//!     renderer: &mut dyn MeshRenderer,
//! ) -> anyhow::Result<()> {
//!     let mut scene = Scene::prepare(
//!         script::poolside_config(),
//!         script::poolside_script(),
//!         device,
//!         shader,
//!         renderer,
//!     )?;
//!     scene.render(shader, renderer);
//!     scene.release(device);
//!     Ok(())
//! }
//! ```

pub mod gfx;
pub mod prelude;
pub mod scene;
