//! Animation utilities: the RAF loop and the fade/slide animators built on it

pub mod raf;
pub mod tween;

pub use raf::{AnimationHandle, AnimationState, FrameAction, FrameTiming, LoopOptions};
pub use tween::{DEFAULT_DURATION_MS, fade_in, slide_up};

/// Delay before the item at `index` in a staggered sequence starts
///
/// Saturates instead of overflowing for very long lists.
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_linear() {
        assert_eq!(stagger_delay(0, 200), 0);
        assert_eq!(stagger_delay(1, 200), 200);
        assert_eq!(stagger_delay(4, 150), 600);
    }

    #[test]
    fn test_stagger_delay_saturates() {
        assert_eq!(stagger_delay(usize::MAX, 200), u32::MAX);
        assert_eq!(stagger_delay(30_000_000, 200), u32::MAX);
    }
}
