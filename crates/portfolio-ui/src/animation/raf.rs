//! RequestAnimationFrame-based animation loop
//!
//! Each loop owns its own frame chain and its own start timestamp. The render
//! function decides per frame whether the loop continues.

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::dom;
use crate::error::{PortfolioError, Result};

/// Type alias for RAF closure to reduce complexity
type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// RAF animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation is paused (e.g., tab hidden)
    Paused,
    /// Animation finished or was stopped
    Stopped,
}

/// What the render function wants after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    Continue,
    Finish,
}

/// Frame timing information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Current timestamp from RAF (milliseconds)
    pub timestamp: f64,
    /// Time since this loop's first frame (milliseconds)
    pub elapsed: f64,
    /// Delta time since last frame (milliseconds)
    pub delta: f64,
}

impl FrameTiming {
    /// Timing for a loop's first frame
    #[must_use]
    pub const fn initial(timestamp: f64) -> Self {
        Self {
            timestamp,
            elapsed: 0.0,
            delta: 0.0,
        }
    }

    /// Timing for the frame after `self`
    #[must_use]
    pub fn next(self, timestamp: f64) -> Self {
        let delta = (timestamp - self.timestamp).max(0.0);
        Self {
            timestamp,
            elapsed: self.elapsed + delta,
            delta,
        }
    }
}

/// Loop options
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Skip rendering while the document is hidden
    pub pause_when_hidden: bool,
}

/// RAF animation handle for cleanup
#[derive(Clone)]
pub struct AnimationHandle {
    window: Window,
    request_id: Rc<RefCell<Option<i32>>>,
    state_signal: RwSignal<AnimationState>,
}

impl AnimationHandle {
    /// Stop the animation loop
    ///
    /// Stopping an already stopped loop is a no-op.
    ///
    /// # Errors
    ///
    /// Returns error if cancellation fails
    pub fn stop(&self) -> Result<()> {
        self.state_signal.set(AnimationState::Stopped);

        if let Some(id) = self.request_id.borrow_mut().take() {
            self.window
                .cancel_animation_frame(id)
                .map_err(|e| PortfolioError::dom("cancel animation frame", &e))?;
        }

        Ok(())
    }

    /// Pause the animation loop
    pub fn pause(&self) {
        if self.state() == AnimationState::Running {
            self.state_signal.set(AnimationState::Paused);
        }
    }

    /// Resume the animation loop
    pub fn resume(&self) {
        if self.state() == AnimationState::Paused {
            self.state_signal.set(AnimationState::Running);
        }
    }

    /// Get current animation state
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state_signal.get_untracked()
    }
}

/// Start a `requestAnimationFrame` loop
///
/// `render_fn` runs once per frame until it returns [`FrameAction::Finish`]
/// or the handle is stopped. While paused, frames keep being scheduled but
/// nothing is rendered, so resuming needs no re-arming.
///
/// # Errors
///
/// Returns error if:
/// - Window or document are not available
/// - RAF scheduling fails
/// - The visibility listener cannot be attached
///
/// # Example
///
/// ```no_run
/// use portfolio_ui::animation::raf::{start_animation_loop, FrameAction, LoopOptions};
///
/// let handle = start_animation_loop(LoopOptions::default(), move |timing| {
///     log::trace!("elapsed {}ms", timing.elapsed);
///     if timing.elapsed < 1000.0 { FrameAction::Continue } else { FrameAction::Finish }
/// })?;
///
/// handle.stop()?;
/// # Ok::<(), portfolio_ui::error::PortfolioError>(())
/// ```
pub fn start_animation_loop<F>(options: LoopOptions, render_fn: F) -> Result<AnimationHandle>
where
    F: FnMut(FrameTiming) -> FrameAction + 'static,
{
    let window = dom::window()?;

    let state_signal = RwSignal::new(AnimationState::Running);
    let request_id = Rc::new(RefCell::new(None::<i32>));
    let timing = Rc::new(RefCell::new(None::<FrameTiming>));

    let closure: RafClosure = Rc::new(RefCell::new(None));
    let closure_clone = Rc::clone(&closure);
    let request_id_clone = Rc::clone(&request_id);
    let window_clone = window.clone();
    let mut render_fn = render_fn;

    *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        request_id_clone.borrow_mut().take();

        let state = state_signal.get_untracked();
        if state == AnimationState::Stopped {
            return;
        }

        if state == AnimationState::Running {
            let current = timing
                .borrow()
                .map_or_else(|| FrameTiming::initial(timestamp), |t| t.next(timestamp));
            *timing.borrow_mut() = Some(current);

            if render_fn(current) == FrameAction::Finish {
                state_signal.set(AnimationState::Stopped);
                return;
            }
        } else if let Some(previous) = timing.borrow_mut().as_mut() {
            // Paused time does not count towards elapsed
            previous.timestamp = timestamp;
        }

        match schedule_next_frame(&window_clone, &closure_clone) {
            Ok(id) => *request_id_clone.borrow_mut() = Some(id),
            Err(e) => log::warn!("animation loop ended: {e}"),
        }
    }) as Box<dyn FnMut(f64)>));

    let first_id = schedule_next_frame(&window, &closure)?;
    *request_id.borrow_mut() = Some(first_id);

    let handle = AnimationHandle {
        window,
        request_id,
        state_signal,
    };

    if options.pause_when_hidden {
        setup_visibility_listener(handle.clone())?;
    }

    Ok(handle)
}

/// Schedule next RAF frame
fn schedule_next_frame(window: &Window, closure: &RafClosure) -> Result<i32> {
    closure
        .borrow()
        .as_ref()
        .ok_or_else(|| PortfolioError::Dom("animation frame callback missing".to_string()))
        .and_then(|cb| {
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| PortfolioError::dom("request animation frame", &e))
        })
}

/// Pause while the tab is hidden, resume when it is visible again
fn setup_visibility_listener(handle: AnimationHandle) -> Result<()> {
    let document = dom::document()?;

    dom::listen(&document, "visibilitychange", move |_| {
        let Ok(document) = dom::document() else {
            return;
        };

        if document.hidden() {
            handle.pause();
        } else {
            handle.resume();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timing_initial() {
        let timing = FrameTiming::initial(1000.0);
        assert!((timing.timestamp - 1000.0).abs() < f64::EPSILON);
        assert!(timing.elapsed.abs() < f64::EPSILON);
        assert!(timing.delta.abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_timing_accumulates_elapsed() {
        let timing = FrameTiming::initial(1000.0).next(1016.0).next(1032.5);

        assert!((timing.timestamp - 1032.5).abs() < f64::EPSILON);
        assert!((timing.delta - 16.5).abs() < 1e-9);
        assert!((timing.elapsed - 32.5).abs() < 1e-9);
    }

    #[test]
    fn test_frame_timing_ignores_backwards_clock() {
        let timing = FrameTiming::initial(1000.0).next(990.0);
        assert!(timing.delta.abs() < f64::EPSILON);
        assert!(timing.elapsed.abs() < f64::EPSILON);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_animation_handle_stop() {
        let handle =
            start_animation_loop(LoopOptions::default(), |_timing| FrameAction::Continue).unwrap();

        handle.stop().unwrap();
        assert_eq!(handle.state(), AnimationState::Stopped);

        handle.stop().unwrap();
    }

    #[wasm_bindgen_test]
    fn test_animation_handle_pause_resume() {
        let handle =
            start_animation_loop(LoopOptions::default(), |_timing| FrameAction::Continue).unwrap();

        assert_eq!(handle.state(), AnimationState::Running);
        handle.pause();
        assert_eq!(handle.state(), AnimationState::Paused);
        handle.resume();
        assert_eq!(handle.state(), AnimationState::Running);

        handle.stop().unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_loop_finishes_when_render_says_so() {
        let frames = Rc::new(RefCell::new(0_u32));
        let counter = Rc::clone(&frames);

        let handle = start_animation_loop(LoopOptions::default(), move |_timing| {
            let next = counter.borrow().saturating_add(1);
            *counter.borrow_mut() = next;
            if *counter.borrow() >= 3 {
                FrameAction::Finish
            } else {
                FrameAction::Continue
            }
        })
        .unwrap();

        gloo_timers::future::TimeoutFuture::new(300).await;

        assert_eq!(*frames.borrow(), 3);
        assert_eq!(handle.state(), AnimationState::Stopped);
    }
}
