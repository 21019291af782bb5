//! Decorative drifting-particle background
//!
//! A fixed full-viewport canvas behind the page. Off unless enabled in the
//! configuration or started through the JS export.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use web_sys::{CanvasRenderingContext2d, Document};

use crate::animation::raf::{AnimationHandle, FrameAction, LoopOptions, start_animation_loop};
use crate::canvas::{CanvasConfig, create_canvas, get_2d_context, get_window_size, on_window_resize};
use crate::config::{ParticleConfig, PortfolioConfig};
use crate::dom;
use crate::error::{PortfolioError, Result};

pub const CANVAS_ID: &str = "particle-background";

/// Maximum speed per axis, in pixels per frame
const MAX_SPEED: f64 = 0.25;

/// One drifting dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
}

impl Particle {
    /// Place a particle using `random`, which yields values in `[0, 1)`
    pub fn random<R>(width: f64, height: f64, random: &mut R) -> Self
    where
        R: FnMut() -> f64,
    {
        Self {
            x: random() * width,
            y: random() * height,
            vx: (random() - 0.5) * 2.0 * MAX_SPEED,
            vy: (random() - 0.5) * 2.0 * MAX_SPEED,
            size: random() * 2.0 + 1.0,
        }
    }

    /// Move one frame, bouncing off the edges of `width × height`
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// Spawn `count` particles over the given area
pub fn spawn<R>(count: usize, width: f64, height: f64, mut random: R) -> Vec<Particle>
where
    R: FnMut() -> f64,
{
    (0..count)
        .map(|_| Particle::random(width, height, &mut random))
        .collect()
}

fn draw(ctx: &CanvasRenderingContext2d, particles: &[Particle], color: &str) -> Result<()> {
    ctx.set_fill_style_str(color);
    particles.iter().try_for_each(|p| {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, TAU)
            .map_err(|e| PortfolioError::Canvas(format!("particle arc: {e:?}")))?;
        ctx.fill();
        Ok(())
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fit_to_window(canvas: &web_sys::HtmlCanvasElement) -> Result<()> {
    let (width, height) = get_window_size()?;
    canvas.set_width(width.max(1.0) as u32);
    canvas.set_height(height.max(1.0) as u32);
    Ok(())
}

/// Create the background canvas and start animating it
///
/// # Errors
///
/// Returns an error if the canvas cannot be created or styled, or the frame
/// loop cannot start.
pub fn init_particle_background(document: &Document, config: &ParticleConfig) -> Result<AnimationHandle> {
    let body = dom::body(document)?;
    let canvas = create_canvas(
        document,
        &body,
        &CanvasConfig {
            id: CANVAS_ID.to_string(),
            class_name: CANVAS_ID.to_string(),
            aria_label: None,
        },
    )?;

    let opacity = config.opacity.to_string();
    let styles = [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", "-1"),
        ("pointer-events", "none"),
        ("opacity", opacity.as_str()),
    ];
    styles
        .iter()
        .try_for_each(|(property, value)| dom::set_style(&canvas, property, value))?;

    fit_to_window(&canvas)?;
    let resize_canvas = canvas.clone();
    on_window_resize(0, move || {
        if let Err(e) = fit_to_window(&resize_canvas) {
            log::warn!("particles resize: {e}");
        }
    })?
    .forget();

    let ctx = get_2d_context(&canvas)?;
    let particles = Rc::new(RefCell::new(spawn(
        config.count,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
        js_sys::Math::random,
    )));
    let color = config.color.clone();

    log::debug!("particles: animating {}", config.count);
    start_animation_loop(LoopOptions { pause_when_hidden: true }, move |_timing| {
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        ctx.clear_rect(0.0, 0.0, width, height);

        let mut particles = particles.borrow_mut();
        particles.iter_mut().for_each(|p| p.step(width, height));

        match draw(&ctx, &particles, &color) {
            Ok(()) => FrameAction::Continue,
            Err(e) => {
                log::warn!("particles: {e}");
                FrameAction::Finish
            }
        }
    })
}

/// Boot entry point; only runs when enabled in the configuration
///
/// # Errors
///
/// See [`init_particle_background`].
pub fn init(document: &Document, config: &PortfolioConfig) -> Result<()> {
    if config.particles.enabled {
        init_particle_background(document, &config.particles)?;
    }
    Ok(())
}
