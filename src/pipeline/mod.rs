//! Frame-sequence driver combining the scene and the GPU renderer.
//!
//! Steps wall-clock time at a fixed fps, derives the morph state from a
//! toggle schedule (the times at which a UI would flip the arrangement),
//! and hands each rendered frame to the caller.

use crate::gpu::{GpuError, SceneRenderConfig, SceneRenderer};
use crate::scene::{MorphState, SceneParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for rendering a morph sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub duration_secs: f32,
    /// Times (seconds) at which the morph state toggles. The sequence
    /// starts scattered; an odd number of elapsed toggles means tree.
    pub toggle_times: Vec<f32>,
    /// Background color as a hex string, e.g. "#020805".
    pub background: String,
    pub params: SceneParams,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: 60,
            duration_secs: 6.0,
            toggle_times: vec![1.0],
            background: "#020805".to_string(),
            params: SceneParams::default(),
        }
    }
}

impl SequenceConfig {
    /// Load a sequence configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Morph state at the given time: parity of elapsed toggles.
    pub fn state_at(&self, time: f32) -> MorphState {
        let toggles = self.toggle_times.iter().filter(|&&t| t <= time).count();
        if toggles % 2 == 0 {
            MorphState::Scattered
        } else {
            MorphState::TreeShape
        }
    }

    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    fn to_render_config(&self) -> Result<SceneRenderConfig, PipelineError> {
        let background = parse_hex_color(&self.background)
            .ok_or_else(|| PipelineError::InvalidColor(self.background.clone()))?;
        Ok(SceneRenderConfig {
            width: self.width,
            height: self.height,
            background,
            params: self.params.clone(),
        })
    }
}

/// Errors that can occur during sequence rendering.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Parse hex color to RGB floats (accepts 6-char RGB or 8-char RGBA, alpha is ignored).
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
    Some([r, g, b])
}

/// Render every frame of the sequence, handing `(frame_index, time, pixels)`
/// to the sink. Pixels are tightly packed RGBA8.
pub async fn render_sequence<F>(config: &SequenceConfig, mut sink: F) -> Result<(), PipelineError>
where
    F: FnMut(usize, f32, &[u8]),
{
    let mut renderer = SceneRenderer::new(config.to_render_config()?).await?;
    let total_frames = config.total_frames();
    log::info!(
        "rendering {} frames at {}x{} / {} fps",
        total_frames,
        config.width,
        config.height,
        config.fps
    );

    for frame_idx in 0..total_frames {
        let time = frame_idx as f32 / config.fps as f32;
        let state = config.state_at(time);
        let pixels = renderer.render_frame(time, state);
        sink(frame_idx, time, &pixels);

        if frame_idx % config.fps.max(1) as usize == 0 {
            log::info!("frame {}/{}", frame_idx + 1, total_frames);
        }
    }

    Ok(())
}

/// Render the sequence and write each frame as `frame_NNNN.png` into `dir`.
pub async fn save_png_frames<P: AsRef<Path>>(
    config: &SequenceConfig,
    dir: P,
) -> Result<(), PipelineError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut result = Ok(());
    render_sequence(config, |frame_idx, _, pixels| {
        if result.is_err() {
            return;
        }
        let path = dir.join(format!("frame_{:04}.png", frame_idx));
        result = image::save_buffer(
            &path,
            pixels,
            config.width,
            config.height,
            image::ColorType::Rgba8,
        );
    })
    .await?;

    result.map_err(PipelineError::from)
}

/// Blocking variant of [`save_png_frames`] for callers without an async
/// runtime.
pub fn save_png_frames_blocking<P: AsRef<Path>>(
    config: &SequenceConfig,
    dir: P,
) -> Result<(), PipelineError> {
    pollster::block_on(save_png_frames(config, dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#00ff88"), Some([0.0, 1.0, 136.0 / 255.0]));
        assert_eq!(parse_hex_color("ffffff"), Some([1.0, 1.0, 1.0]));
        assert_eq!(parse_hex_color("000000"), Some([0.0, 0.0, 0.0]));
        assert_eq!(parse_hex_color("#00000000"), Some([0.0, 0.0, 0.0]));
        assert_eq!(parse_hex_color("invalid"), None);
    }

    #[test]
    fn test_state_follows_toggle_schedule() {
        let config = SequenceConfig {
            toggle_times: vec![1.0, 4.0],
            ..Default::default()
        };
        assert_eq!(config.state_at(0.0), MorphState::Scattered);
        assert_eq!(config.state_at(0.99), MorphState::Scattered);
        assert_eq!(config.state_at(1.0), MorphState::TreeShape);
        assert_eq!(config.state_at(3.5), MorphState::TreeShape);
        assert_eq!(config.state_at(4.0), MorphState::Scattered);
        assert_eq!(config.state_at(100.0), MorphState::Scattered);
    }

    #[test]
    fn test_no_toggles_stays_scattered() {
        let config = SequenceConfig {
            toggle_times: vec![],
            ..Default::default()
        };
        assert_eq!(config.state_at(99.0), MorphState::Scattered);
    }

    #[test]
    fn test_total_frames_rounds_up() {
        let config = SequenceConfig {
            fps: 30,
            duration_secs: 1.05,
            ..Default::default()
        };
        assert_eq!(config.total_frames(), 32);
    }

    #[test]
    fn test_config_loads_from_json_file() {
        let config = SequenceConfig {
            fps: 24,
            toggle_times: vec![0.5, 2.5],
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = SequenceConfig::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.fps, 24);
        assert_eq!(loaded.toggle_times, vec![0.5, 2.5]);
    }

    #[test]
    fn test_invalid_background_rejected() {
        let config = SequenceConfig {
            background: "not-a-color".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.to_render_config(),
            Err(PipelineError::InvalidColor(_))
        ));
    }
}
