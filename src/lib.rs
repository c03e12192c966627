//! Treemorph Core
//!
//! GPU-accelerated morphing particle scene renderer.
//!
//! Thousands of particles and ornaments ease between two spatial
//! arrangements — a scattered spherical cloud and a conical tree —
//! driven by a single toggled state.
//!
//! # Features
//!
//! - One-time dual-position dataset generation per visual category
//! - Exponential per-category morph easing with smooth mid-flight reversal
//! - Per-frame instance transform updates into GPU instance buffers
//! - WGSL vertex-stage morphing for the high-count ambient particle field
//! - Headless offscreen rendering via wgpu with PNG frame output

pub mod gpu;
pub mod pipeline;
pub mod scene;

// Re-export commonly used types
pub use gpu::{Camera, GpuContext, GpuError, SceneRenderConfig, SceneRenderer};
pub use pipeline::{
    parse_hex_color, render_sequence, save_png_frames, save_png_frames_blocking, PipelineError,
    SequenceConfig,
};
pub use scene::{
    Instance, MorphAnimator, MorphState, OrnamentRecord, ParticleRecord, SceneData, SceneParams,
};
