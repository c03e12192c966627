//! Morphing scene model.
//!
//! Everything on screen belongs to one of five visual categories:
//! - Ambient particles: the dense point cloud (morph evaluated on the GPU)
//! - Balls: metallic sphere ornaments
//! - Gifts: tumbling boxes, larger toward the base of the tree
//! - Stars: small twinkling emissive spheres
//! - Lights: a flashing strip spiralling down the foliage
//!
//! Each element carries two fixed positions (scattered cloud and tree
//! arrangement) generated once at build time; per frame only a morph
//! progress scalar and the clock change.

pub mod dataset;
pub mod instances;
pub mod morph;
pub mod position;

pub use dataset::{
    build_balls, build_gifts, build_lights, build_particles, build_stars, gift_height_multiplier,
    OrnamentRecord, ParticleRecord, SceneData,
};
pub use instances::{
    ball_instance, fill_balls, fill_gifts, fill_lights, fill_stars, gift_instance, light_instance,
    star_instance, Instance,
};
pub use morph::{MorphAnimator, ORNAMENT_MORPH_RATE, PARTICLE_MORPH_RATE};

use serde::{Deserialize, Serialize};

/// The single external input: which arrangement the scene is easing toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MorphState {
    /// Dispersed sphere-distributed resting state.
    #[default]
    Scattered,
    /// Conical tree arrangement.
    TreeShape,
}

impl MorphState {
    /// Flip to the other arrangement.
    pub fn toggle(self) -> Self {
        match self {
            Self::Scattered => Self::TreeShape,
            Self::TreeShape => Self::Scattered,
        }
    }

    /// Morph target for this state (1 = tree, 0 = scattered).
    pub fn target(self) -> f32 {
        match self {
            Self::Scattered => 0.0,
            Self::TreeShape => 1.0,
        }
    }
}

/// Element counts and scene geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneParams {
    pub particle_count: usize,
    pub ball_count: usize,
    pub gift_count: usize,
    pub star_count: usize,
    pub light_count: usize,
    /// Height of the tree cone.
    pub tree_height: f32,
    /// Base radius of the tree cone.
    pub tree_radius: f32,
    /// Radius of the scattered cloud.
    pub scatter_radius: f32,
    /// Fixed RNG seed for reproducible datasets. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: 8000,
            ball_count: 150,
            gift_count: 60,
            star_count: 400,
            light_count: 800,
            tree_height: 12.0,
            tree_radius: 5.0,
            scatter_radius: 15.0,
            seed: None,
        }
    }
}

/// Fixed scene palette (sRGB floats).
pub mod colors {
    pub const EMERALD: [f32; 3] = [0.016, 0.224, 0.153];
    pub const GOLD: [f32; 3] = [0.831, 0.686, 0.216];
    pub const SOFT_GOLD: [f32; 3] = [1.0, 0.843, 0.0];
    pub const DEEP_GREEN: [f32; 3] = [0.004, 0.196, 0.125];
    pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 3] = [0.008, 0.031, 0.020];

    /// Gift wrap colors, cycled by index.
    pub const GIFT_PALETTE: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],     // red
        [1.0, 0.843, 0.0],   // gold
        [0.627, 0.125, 0.941], // purple
        [0.0, 1.0, 0.0],     // green
        [1.0, 0.549, 0.0],   // orange
        [1.0, 0.078, 0.576], // pink
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morph_state_toggle_round_trips() {
        assert_eq!(MorphState::Scattered.toggle(), MorphState::TreeShape);
        assert_eq!(MorphState::TreeShape.toggle(), MorphState::Scattered);
        assert_eq!(MorphState::Scattered.toggle().toggle(), MorphState::Scattered);
    }

    #[test]
    fn test_morph_state_targets() {
        assert_eq!(MorphState::Scattered.target(), 0.0);
        assert_eq!(MorphState::TreeShape.target(), 1.0);
    }

    #[test]
    fn test_scene_params_default_counts() {
        let params = SceneParams::default();
        assert_eq!(params.particle_count, 8000);
        assert_eq!(params.ball_count, 150);
        assert_eq!(params.gift_count, 60);
        assert_eq!(params.star_count, 400);
        assert_eq!(params.light_count, 800);
    }

    #[test]
    fn test_scene_params_serde_round_trip() {
        let params = SceneParams {
            seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: SceneParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(7));
        assert_eq!(back.particle_count, params.particle_count);
    }
}
