//! Benchmarks for dataset construction and the per-frame instance updater.

use bytemuck::Zeroable;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use treemorph::gpu::{SceneRenderConfig, SceneRenderer};
use treemorph::scene::{
    fill_balls, fill_gifts, fill_lights, fill_stars, Instance, MorphState, SceneData, SceneParams,
};

fn bench_dataset_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dataset Build");

    for particle_count in [2000usize, 8000, 32000] {
        let params = SceneParams {
            particle_count,
            seed: Some(1),
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::new("build", particle_count),
            &params,
            |b, params| {
                b.iter(|| black_box(SceneData::build(params)));
            },
        );
    }

    group.finish();
}

fn bench_instance_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("Instance Update");

    let params = SceneParams {
        seed: Some(1),
        ..Default::default()
    };
    let data = SceneData::build(&params);

    let mut balls = vec![Instance::zeroed(); data.balls.len()];
    let mut gifts = vec![Instance::zeroed(); data.gifts.len()];
    let mut stars = vec![Instance::zeroed(); data.stars.len()];
    let mut lights = vec![Instance::zeroed(); data.lights.len()];

    group.bench_function("ornament_frame", |b| {
        let mut time = 0.0f32;
        b.iter(|| {
            time += 1.0 / 60.0;
            fill_balls(&data.balls, 0.5, time, &mut balls);
            fill_gifts(&data.gifts, 0.5, time, &mut gifts);
            fill_stars(&data.stars, 0.5, time, &mut stars);
            fill_lights(&data.lights, 0.5, time, &mut lights);
            black_box(&balls);
        });
    });

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("GPU Rendering");

    let config = SceneRenderConfig {
        width: 1280,
        height: 720,
        params: SceneParams {
            seed: Some(1),
            ..Default::default()
        },
        ..Default::default()
    };

    let mut renderer = match pollster::block_on(SceneRenderer::new(config)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Skipping GPU benchmarks: {}", e);
            return;
        }
    };

    group.bench_function("render_frame_720p", |b| {
        let mut time = 0.0f32;
        b.iter(|| {
            time += 1.0 / 60.0;
            black_box(renderer.render_frame(time, MorphState::TreeShape));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dataset_build,
    bench_instance_update,
    bench_render_frame
);
criterion_main!(benches);
