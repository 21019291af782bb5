//! Frame-by-frame fade and slide animators
//!
//! Frame values are pure functions of elapsed time; `fade_in` and `slide_up`
//! apply them to an element from a RAF loop.

use web_sys::HtmlElement;

use super::raf::{AnimationHandle, FrameAction, LoopOptions, start_animation_loop};
use crate::dom;
use crate::error::Result;

/// Default animation length in milliseconds
pub const DEFAULT_DURATION_MS: f64 = 600.0;

/// Starting vertical offset for [`slide_up`], in pixels
pub const SLIDE_DISTANCE_PX: f64 = 30.0;

/// Fraction of the animation completed, clamped to `[0, 1]`
///
/// A non-positive or non-finite duration completes immediately.
#[must_use]
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Whether an animation of `duration` is over after `elapsed`
#[must_use]
pub fn is_finished(elapsed: f64, duration: f64) -> bool {
    progress(elapsed, duration) >= 1.0
}

/// Opacity for a fade-in frame
#[must_use]
pub fn fade_opacity(elapsed: f64, duration: f64) -> f64 {
    progress(elapsed, duration)
}

/// Vertical offset in pixels for a slide-up frame
#[must_use]
pub fn slide_offset(elapsed: f64, duration: f64) -> f64 {
    (SLIDE_DISTANCE_PX - progress(elapsed, duration) * SLIDE_DISTANCE_PX).max(0.0)
}

/// CSS `transform` value for a vertical translation
#[must_use]
pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Fade an element in from transparent
///
/// The element is made `display: block` before the first frame.
///
/// # Errors
///
/// Returns an error if the initial styles cannot be set or the frame loop
/// cannot start.
pub fn fade_in(element: &HtmlElement, duration: f64) -> Result<AnimationHandle> {
    dom::set_style(element, "opacity", "0")?;
    dom::set_style(element, "display", "block")?;

    let element = element.clone();
    start_animation_loop(LoopOptions::default(), move |timing| {
        let opacity = fade_opacity(timing.elapsed, duration);
        if let Err(e) = dom::set_style(&element, "opacity", &opacity.to_string()) {
            log::warn!("fade_in: {e}");
            return FrameAction::Finish;
        }
        frame_action(timing.elapsed, duration)
    })
}

/// Slide an element up into place while fading it in
///
/// # Errors
///
/// Returns an error if the initial styles cannot be set or the frame loop
/// cannot start.
pub fn slide_up(element: &HtmlElement, duration: f64) -> Result<AnimationHandle> {
    dom::set_style(element, "transform", &translate_y(SLIDE_DISTANCE_PX))?;
    dom::set_style(element, "opacity", "0")?;

    let element = element.clone();
    start_animation_loop(LoopOptions::default(), move |timing| {
        let offset = slide_offset(timing.elapsed, duration);
        let opacity = fade_opacity(timing.elapsed, duration);

        let applied = dom::set_style(&element, "transform", &translate_y(offset))
            .and_then(|()| dom::set_style(&element, "opacity", &opacity.to_string()));
        if let Err(e) = applied {
            log::warn!("slide_up: {e}");
            return FrameAction::Finish;
        }
        frame_action(timing.elapsed, duration)
    })
}

fn frame_action(elapsed: f64, duration: f64) -> FrameAction {
    if is_finished(elapsed, duration) {
        FrameAction::Finish
    } else {
        FrameAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_progress_is_clamped() {
        assert!(approx(progress(0.0, 600.0), 0.0));
        assert!(approx(progress(300.0, 600.0), 0.5));
        assert!(approx(progress(900.0, 600.0), 1.0));
        assert!(approx(progress(-10.0, 600.0), 0.0));
    }

    #[test]
    fn test_degenerate_duration_completes_immediately() {
        for duration in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(approx(progress(0.0, duration), 1.0), "duration {duration}");
            assert!(is_finished(0.0, duration));
        }
    }

    #[test]
    fn test_fade_reaches_full_opacity() {
        assert!(approx(fade_opacity(150.0, 600.0), 0.25));
        assert!(approx(fade_opacity(600.0, 600.0), 1.0));
        assert!(is_finished(600.0, 600.0));
        assert!(!is_finished(599.0, 600.0));
    }

    #[test]
    fn test_slide_offset_descends_to_zero() {
        assert!(approx(slide_offset(0.0, 600.0), 30.0));
        assert!(approx(slide_offset(300.0, 600.0), 15.0));
        assert!(approx(slide_offset(600.0, 600.0), 0.0));
        assert!(approx(slide_offset(10_000.0, 600.0), 0.0));
    }

    #[test]
    fn test_translate_y_formatting() {
        assert_eq!(translate_y(30.0), "translateY(30px)");
        assert_eq!(translate_y(12.5), "translateY(12.5px)");
        assert_eq!(translate_y(0.0), "translateY(0px)");
    }

    #[test]
    fn test_frame_action_stops_at_duration() {
        assert_eq!(frame_action(100.0, 600.0), FrameAction::Continue);
        assert_eq!(frame_action(600.0, 600.0), FrameAction::Finish);
    }
}
