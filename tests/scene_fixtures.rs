//! Shared test fixtures for scene tests.

use treemorph::scene::{SceneData, SceneParams};

/// Small, seeded parameters so integration tests are fast and reproducible.
pub fn small_params() -> SceneParams {
    SceneParams {
        particle_count: 200,
        ball_count: 20,
        gift_count: 12,
        star_count: 30,
        light_count: 40,
        seed: Some(1234),
        ..Default::default()
    }
}

/// Full-size seeded parameters for statistical tests.
pub fn statistical_params() -> SceneParams {
    SceneParams {
        particle_count: 12_000,
        seed: Some(99),
        ..Default::default()
    }
}

/// Build a seeded dataset from the small parameters.
pub fn small_data() -> SceneData {
    SceneData::build(&small_params())
}
