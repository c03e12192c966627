//! GPU rendering using wgpu.
//!
//! Provides headless offscreen rendering of the morphing scene: one
//! depth-tested instanced pass for the ornament categories and one
//! additive billboard pass for the ambient particle field.

pub mod camera;
pub mod context;
pub mod mesh;
pub mod scene_renderer;

pub use camera::Camera;
pub use context::{GpuContext, GpuError};
pub use mesh::{cube, uv_sphere, Mesh, MeshVertex};
pub use scene_renderer::{SceneRenderConfig, SceneRenderer};
