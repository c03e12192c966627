//! Per-category element datasets.
//!
//! Builders run exactly once per session; the resulting records are
//! immutable. Per frame only the morph progress and the clock vary.

use super::colors;
use super::position::{scatter_position, spiral_position, tree_position};
use super::SceneParams;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Number of full turns the light strip makes around the tree.
pub const LIGHT_STRIP_TURNS: f32 = 8.0;

/// One ambient particle. Color is computed in the shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRecord {
    pub scatter_pos: Vec3,
    pub tree_pos: Vec3,
    pub size: f32,
    pub phase: f32,
}

/// One ornament instance (ball, gift, star or light).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrnamentRecord {
    pub scatter_pos: Vec3,
    pub tree_pos: Vec3,
    pub scale: f32,
    pub phase: f32,
    pub color: [f32; 3],
}

/// Scale multiplier for a gift at the given tree height: 1.2 at the base
/// of the cone, 0.4 at the apex, linear in between.
pub fn gift_height_multiplier(tree_y: f32, tree_height: f32) -> f32 {
    let normalized = (tree_y + tree_height / 2.0) / tree_height;
    1.2 + (0.4 - 1.2) * normalized
}

pub fn build_particles(params: &SceneParams, rng: &mut impl Rng) -> Vec<ParticleRecord> {
    (0..params.particle_count)
        .map(|i| ParticleRecord {
            scatter_pos: scatter_position(rng, params.scatter_radius),
            tree_pos: tree_position(
                rng,
                i,
                params.particle_count,
                params.tree_height,
                params.tree_radius,
            ),
            size: 0.05 + rng.gen::<f32>() * 0.15,
            phase: rng.gen::<f32>() * TAU,
        })
        .collect()
}

pub fn build_balls(params: &SceneParams, rng: &mut impl Rng) -> Vec<OrnamentRecord> {
    (0..params.ball_count)
        .map(|i| OrnamentRecord {
            scatter_pos: scatter_position(rng, params.scatter_radius),
            tree_pos: tree_position(
                rng,
                i,
                params.ball_count,
                params.tree_height,
                params.tree_radius,
            ),
            scale: 0.15 + rng.gen::<f32>() * 0.1,
            phase: rng.gen::<f32>() * TAU,
            color: if i % 2 == 0 {
                colors::GOLD
            } else {
                colors::SOFT_GOLD
            },
        })
        .collect()
}

pub fn build_gifts(params: &SceneParams, rng: &mut impl Rng) -> Vec<OrnamentRecord> {
    (0..params.gift_count)
        .map(|i| {
            let tree_pos = tree_position(
                rng,
                i,
                params.gift_count,
                params.tree_height,
                params.tree_radius,
            );
            let height_scale = gift_height_multiplier(tree_pos.y, params.tree_height);
            OrnamentRecord {
                scatter_pos: scatter_position(rng, params.scatter_radius),
                tree_pos,
                scale: (0.4 + rng.gen::<f32>() * 0.3) * height_scale,
                phase: rng.gen::<f32>() * TAU,
                color: colors::GIFT_PALETTE[i % colors::GIFT_PALETTE.len()],
            }
        })
        .collect()
}

pub fn build_stars(params: &SceneParams, rng: &mut impl Rng) -> Vec<OrnamentRecord> {
    (0..params.star_count)
        .map(|i| OrnamentRecord {
            scatter_pos: scatter_position(rng, params.scatter_radius),
            tree_pos: tree_position(
                rng,
                i,
                params.star_count,
                params.tree_height,
                params.tree_radius,
            ),
            scale: 0.05 + rng.gen::<f32>() * 0.05,
            phase: rng.gen::<f32>() * TAU,
            color: colors::SOFT_GOLD,
        })
        .collect()
}

/// Lights take their tree positions from the deterministic spiral instead
/// of the generic cone sampler.
pub fn build_lights(params: &SceneParams, rng: &mut impl Rng) -> Vec<OrnamentRecord> {
    (0..params.light_count)
        .map(|i| OrnamentRecord {
            scatter_pos: scatter_position(rng, params.scatter_radius),
            tree_pos: spiral_position(
                i,
                params.light_count,
                params.tree_height,
                params.tree_radius,
                LIGHT_STRIP_TURNS,
            ),
            scale: 0.06 + rng.gen::<f32>() * 0.04,
            phase: rng.gen::<f32>() * TAU,
            color: if i % 2 == 0 {
                colors::SOFT_GOLD
            } else {
                colors::WHITE
            },
        })
        .collect()
}

/// All five category datasets, built once and owned for the session.
#[derive(Debug, Clone)]
pub struct SceneData {
    pub particles: Vec<ParticleRecord>,
    pub balls: Vec<OrnamentRecord>,
    pub gifts: Vec<OrnamentRecord>,
    pub stars: Vec<OrnamentRecord>,
    pub lights: Vec<OrnamentRecord>,
}

impl SceneData {
    pub fn build(params: &SceneParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            particles: build_particles(params, &mut rng),
            balls: build_balls(params, &mut rng),
            gifts: build_gifts(params, &mut rng),
            stars: build_stars(params, &mut rng),
            lights: build_lights(params, &mut rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> SceneParams {
        SceneParams {
            particle_count: 64,
            ball_count: 10,
            gift_count: 6,
            star_count: 8,
            light_count: 16,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_produces_requested_counts() {
        let data = SceneData::build(&small_params());
        assert_eq!(data.particles.len(), 64);
        assert_eq!(data.balls.len(), 10);
        assert_eq!(data.gifts.len(), 6);
        assert_eq!(data.stars.len(), 8);
        assert_eq!(data.lights.len(), 16);
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let params = small_params();
        let a = SceneData::build(&params);
        let b = SceneData::build(&params);
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.balls, b.balls);
        assert_eq!(a.gifts, b.gifts);
        assert_eq!(a.stars, b.stars);
        assert_eq!(a.lights, b.lights);
    }

    #[test]
    fn test_ball_colors_alternate_by_parity() {
        let data = SceneData::build(&small_params());
        for (i, ball) in data.balls.iter().enumerate() {
            let expected = if i % 2 == 0 {
                colors::GOLD
            } else {
                colors::SOFT_GOLD
            };
            assert_eq!(ball.color, expected);
        }
    }

    #[test]
    fn test_gift_colors_cycle_through_palette() {
        let data = SceneData::build(&small_params());
        for (i, gift) in data.gifts.iter().enumerate() {
            assert_eq!(gift.color, colors::GIFT_PALETTE[i % 6]);
        }
    }

    #[test]
    fn test_gift_height_multiplier_endpoints() {
        let h = 12.0;
        assert!((gift_height_multiplier(-h / 2.0, h) - 1.2).abs() < 1e-6);
        assert!((gift_height_multiplier(h / 2.0, h) - 0.4).abs() < 1e-6);
        // Linear at the midpoint.
        assert!((gift_height_multiplier(0.0, h) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_particle_sizes_in_range() {
        let data = SceneData::build(&small_params());
        for p in &data.particles {
            assert!(p.size >= 0.05 && p.size <= 0.20);
            assert!(p.phase >= 0.0 && p.phase < TAU + 1e-6);
        }
    }

    #[test]
    fn test_light_tree_positions_follow_spiral() {
        let params = small_params();
        let data = SceneData::build(&params);
        for (i, light) in data.lights.iter().enumerate() {
            let expected = spiral_position(
                i,
                params.light_count,
                params.tree_height,
                params.tree_radius,
                LIGHT_STRIP_TURNS,
            );
            assert_eq!(light.tree_pos, expected);
        }
    }
}
