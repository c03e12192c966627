//! Position generators for the two spatial arrangements.
//!
//! All generators are pure given their RNG; positions are sampled exactly
//! once per element at dataset-build time and never recomputed.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Sample a point inside a sphere of the given radius.
///
/// Direction is uniform on the sphere; the radius uses a sqrt transform,
/// which leaves the cloud denser near the center. That bias is the intended
/// look, not a uniform-volume sample.
pub fn scatter_position(rng: &mut impl Rng, radius: f32) -> Vec3 {
    let r = radius * rng.gen::<f32>().sqrt();
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Sample a point inside a cone of the given height and base radius,
/// centered vertically on the origin.
///
/// Radius shrinks linearly toward the apex, with a sqrt in-radius jitter
/// for volumetric fill. `_index`/`_total` are slots for a deterministic
/// spiral layout that never materialized; placement is fully randomized.
pub fn tree_position(
    rng: &mut impl Rng,
    _index: usize,
    _total: usize,
    height: f32,
    base_radius: f32,
) -> Vec3 {
    let y = rng.gen::<f32>() * height;
    let ratio = (height - y) / height;
    let radius = ratio * base_radius * rng.gen::<f32>().sqrt();
    let theta = rng.gen::<f32>() * TAU;
    Vec3::new(radius * theta.cos(), y - height / 2.0, radius * theta.sin())
}

/// Deterministic point on a descending spiral wrapped around the tree.
///
/// `index / total` walks from the base to the apex over the given number of
/// full turns; the radius sits slightly outside the foliage so the strip
/// reads as wrapped around the tree rather than buried in it.
pub fn spiral_position(index: usize, total: usize, height: f32, radius: f32, turns: f32) -> Vec3 {
    let t = index as f32 / total as f32;
    let angle = t * 2.0 * PI * turns;
    let radius_at_height = (1.0 - t) * radius * 1.05;
    Vec3::new(
        radius_at_height * angle.cos(),
        t * height - height / 2.0,
        radius_at_height * angle.sin(),
    )
}
