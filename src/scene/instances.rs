//! Per-frame instance transform computation.
//!
//! Every function here is pure in `(record, progress, time)`: interpolate
//! between the element's two fixed positions, add the category's secondary
//! motion, and pack the result into a GPU instance slot. Calling twice with
//! the same inputs yields bit-identical output.

use super::dataset::OrnamentRecord;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Emissive strength for the lit (non-glowing) ornament categories.
const EMISSIVE_NONE: f32 = 0.0;
/// Emissive strength for the twinkling stars.
const EMISSIVE_STAR: f32 = 2.0;
/// Emissive strength for the light strip.
const EMISSIVE_LIGHT: f32 = 5.0;

/// One slot of a per-category instance buffer: a column-major model matrix
/// plus the base color. The color's fourth component carries the emissive
/// strength rather than alpha.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Instance {
    fn new(translation: Vec3, rotation: Quat, scale: f32, color: [f32; 3], emissive: f32) -> Self {
        let model = Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, translation);
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], emissive],
        }
    }
}

#[inline]
fn morph_position(record: &OrnamentRecord, progress: f32) -> Vec3 {
    record.scatter_pos.lerp(record.tree_pos, progress)
}

/// Ball: vertical bob plus a slow continuous self-rotation.
pub fn ball_instance(record: &OrnamentRecord, progress: f32, time: f32) -> Instance {
    let mut pos = morph_position(record, progress);
    pos.y += (time + record.phase).sin() * 0.1;
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        time * 0.2 + record.phase,
        time * 0.1,
        0.0,
    );
    Instance::new(pos, rotation, record.scale, record.color, EMISSIVE_NONE)
}

/// Gift: slower bob with a fixed tilt and a tumble around the Y axis.
pub fn gift_instance(record: &OrnamentRecord, progress: f32, time: f32) -> Instance {
    let mut pos = morph_position(record, progress);
    pos.y += (time * 0.8 + record.phase).cos() * 0.15;
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        record.phase * 0.5,
        time * 0.3 + record.phase,
        record.phase * 0.2,
    );
    Instance::new(pos, rotation, record.scale, record.color, EMISSIVE_NONE)
}

/// Star: no positional offset, pulsing scale multiplier.
pub fn star_instance(record: &OrnamentRecord, progress: f32, time: f32) -> Instance {
    let pos = morph_position(record, progress);
    let twinkle = 0.5 + 0.5 * (time * 3.0 + record.phase).sin();
    let scale = record.scale * (0.8 + twinkle * 0.4);
    Instance::new(pos, Quat::IDENTITY, scale, record.color, EMISSIVE_STAR)
}

/// Light: index-phased flash so brightness appears to chase along the strip.
pub fn light_instance(record: &OrnamentRecord, index: usize, progress: f32, time: f32) -> Instance {
    let pos = morph_position(record, progress);
    let flash = 0.5 + 0.5 * (time * 5.0 - index as f32 * 0.05).sin();
    let scale = record.scale * (0.5 + flash * 1.5);
    Instance::new(pos, Quat::IDENTITY, scale, record.color, EMISSIVE_LIGHT)
}

/// Write a whole category into its instance slice. The slice must have been
/// allocated to the dataset's length; a mismatch is a contract violation.
pub fn fill_balls(records: &[OrnamentRecord], progress: f32, time: f32, out: &mut [Instance]) {
    assert!(records.len() == out.len(), "instance buffer length mismatch");
    for (record, slot) in records.iter().zip(out.iter_mut()) {
        *slot = ball_instance(record, progress, time);
    }
}

pub fn fill_gifts(records: &[OrnamentRecord], progress: f32, time: f32, out: &mut [Instance]) {
    assert!(records.len() == out.len(), "instance buffer length mismatch");
    for (record, slot) in records.iter().zip(out.iter_mut()) {
        *slot = gift_instance(record, progress, time);
    }
}

pub fn fill_stars(records: &[OrnamentRecord], progress: f32, time: f32, out: &mut [Instance]) {
    assert!(records.len() == out.len(), "instance buffer length mismatch");
    for (record, slot) in records.iter().zip(out.iter_mut()) {
        *slot = star_instance(record, progress, time);
    }
}

pub fn fill_lights(records: &[OrnamentRecord], progress: f32, time: f32, out: &mut [Instance]) {
    assert!(records.len() == out.len(), "instance buffer length mismatch");
    for (i, (record, slot)) in records.iter().zip(out.iter_mut()).enumerate() {
        *slot = light_instance(record, i, progress, time);
    }
}
