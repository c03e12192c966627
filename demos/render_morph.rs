//! Example: Render a short morph sequence to PNG frames.
//!
//! The scene starts scattered, gathers into the tree one second in, and
//! disperses again near the end.
//!
//! Run with:
//!     cargo run --example render_morph --features tokio

use treemorph::{save_png_frames, SceneParams, SequenceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Treemorph - Morph Sequence Example");
    println!("==================================\n");

    let config = SequenceConfig {
        width: 640,
        height: 360,
        fps: 30,
        duration_secs: 8.0,
        toggle_times: vec![1.0, 6.0],
        params: SceneParams {
            // Trimmed counts keep the example quick on modest GPUs.
            particle_count: 2000,
            ball_count: 80,
            gift_count: 40,
            star_count: 200,
            light_count: 400,
            ..Default::default()
        },
        ..Default::default()
    };

    println!("Resolution: {}x{}", config.width, config.height);
    println!("FPS: {}", config.fps);
    println!("Duration: {}s", config.duration_secs);
    println!("Toggles at: {:?}", config.toggle_times);
    println!("Frames: {}\n", config.total_frames());

    let out_dir = "morph_frames";
    println!("Writing frames to: {}/", out_dir);

    save_png_frames(&config, out_dir).await?;

    println!("\nDone! Assemble with e.g.:");
    println!("  ffmpeg -framerate 30 -i {}/frame_%04d.png morph.mp4", out_dir);

    Ok(())
}
