//! Morph progress easing.
//!
//! Each category owns one progress scalar that exponentially approaches
//! the target arrangement every frame. There is no fixed-duration tween:
//! toggling mid-transition just redirects the target, so progress reverses
//! smoothly from wherever it currently sits.

use super::MorphState;

/// Per-frame smoothing rate for the instanced ornament categories.
pub const ORNAMENT_MORPH_RATE: f32 = 0.03;

/// Per-frame smoothing rate for the shader-driven particle field. The
/// particle cloud converges a little faster than the ornaments.
pub const PARTICLE_MORPH_RATE: f32 = 0.05;

/// Exponential smoother for one category's morph progress.
#[derive(Debug, Clone, Copy)]
pub struct MorphAnimator {
    progress: f32,
    rate: f32,
}

impl MorphAnimator {
    pub fn new(rate: f32) -> Self {
        Self {
            progress: 0.0,
            rate,
        }
    }

    /// Step one frame toward the state's target and return the new progress.
    pub fn advance(&mut self, state: MorphState) -> f32 {
        let target = state.target();
        self.progress += (target - self.progress) * self.rate;
        self.progress
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_monotone_toward_held_target() {
        let mut animator = MorphAnimator::new(ORNAMENT_MORPH_RATE);
        let mut last = animator.progress();
        for _ in 0..200 {
            let p = animator.advance(MorphState::TreeShape);
            assert!(p >= last);
            assert!(p <= 1.0);
            last = p;
        }

        for _ in 0..200 {
            let p = animator.advance(MorphState::Scattered);
            assert!(p <= last);
            assert!(p >= 0.0);
            last = p;
        }
    }

    #[test]
    fn test_hundred_frames_at_ornament_rate() {
        let mut animator = MorphAnimator::new(0.03);
        let mut p = 0.0;
        for _ in 0..100 {
            p = animator.advance(MorphState::TreeShape);
        }
        // 1 - 0.97^100
        assert!((p - 0.952_123).abs() < 1e-3, "progress was {}", p);
    }

    #[test]
    fn test_convergence_within_exponential_bound() {
        let rate = PARTICLE_MORPH_RATE;
        let epsilon = 0.01_f32;
        let frames = (epsilon.ln() / (1.0 - rate).ln()).ceil() as usize;

        let mut animator = MorphAnimator::new(rate);
        for _ in 0..frames {
            animator.advance(MorphState::TreeShape);
        }
        assert!((1.0 - animator.progress()).abs() < epsilon);
    }

    #[test]
    fn test_reversal_is_continuous() {
        let mut animator = MorphAnimator::new(ORNAMENT_MORPH_RATE);
        while animator.progress() < 0.9 {
            animator.advance(MorphState::TreeShape);
        }
        let at_reversal = animator.progress();

        // First frame after retargeting moves by at most rate * distance.
        let p = animator.advance(MorphState::Scattered);
        assert!(p < at_reversal);
        assert!((at_reversal - p) <= ORNAMENT_MORPH_RATE * at_reversal + 1e-6);

        let mut last = p;
        for _ in 0..50 {
            let next = animator.advance(MorphState::Scattered);
            assert!(next <= last);
            assert!((last - next) <= ORNAMENT_MORPH_RATE * last + 1e-6);
            last = next;
        }
    }
}
