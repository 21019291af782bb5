//! Skills doughnut chart drawn on a canvas inside `#skills-chart`
//!
//! ## Module Structure
//! - `data`: the skill dataset and tooltip text
//! - `geometry`: slice angles, layout and hit-testing (pure)
//! - `render`: canvas painting

pub mod data;
pub mod geometry;
pub mod render;

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent};

use self::data::tooltip;
use self::geometry::{ChartLayout, SliceArc, hit_test, slice_arcs};
use self::render::{ChartFrame, draw_chart};
use crate::canvas::resize::ResizeConfig;
use crate::canvas::{
    CanvasConfig, calculate_canvas_size, create_canvas, get_2d_context, on_window_resize,
    setup_dpi_aware_canvas,
};
use crate::config::{ChartConfig, PortfolioConfig};
use crate::dom;
use crate::error::{PortfolioError, Result};

/// Container element the chart is drawn into
pub const CONTAINER_ID: &str = "skills-chart";

/// Id given to the generated canvas
pub const CANVAS_ID: &str = "skills-chart-canvas";

/// Live chart: canvas, dataset and hover state
pub struct SkillsChart {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    config: ChartConfig,
    arcs: Vec<SliceArc>,
    layout: Cell<Option<ChartLayout>>,
    hovered: Cell<Option<usize>>,
}

impl SkillsChart {
    /// Create the canvas inside `container`
    ///
    /// Nothing is drawn until [`SkillsChart::fit`] succeeds, so a container
    /// that has no width yet can still be mounted.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas or its context cannot be created.
    pub fn mount(document: &Document, container: HtmlElement, config: &ChartConfig) -> Result<Self> {
        let canvas = create_canvas(
            document,
            &container,
            &CanvasConfig {
                id: CANVAS_ID.to_string(),
                class_name: CANVAS_ID.to_string(),
                aria_label: Some(format!("{} chart", config.series_name)),
            },
        )?;
        dom::set_style(&canvas, "display", "block")?;
        let ctx = get_2d_context(&canvas)?;

        let chart = Self {
            container,
            canvas,
            ctx,
            arcs: slice_arcs(&config.slices),
            config: config.clone(),
            layout: Cell::new(None),
            hovered: Cell::new(None),
        };
        Ok(chart)
    }

    /// Resize the canvas to the container and redraw
    ///
    /// # Errors
    ///
    /// Returns an error if sizing, scaling or drawing fails.
    pub fn fit(&self) -> Result<()> {
        let (available_width, available_height) = self.measure_container()?;
        let (width, height) = calculate_canvas_size(
            available_width,
            available_height,
            &ResizeConfig::default(),
        )?;
        setup_dpi_aware_canvas(&self.canvas, &self.ctx, width, height)?;

        self.layout.set(Some(geometry::layout(
            f64::from(width),
            f64::from(height),
            self.config.inner_radius,
            self.config.outer_radius,
        )?));
        self.redraw()
    }

    /// Size of the container without the canvas in it
    ///
    /// The canvas is taken out of flow while measuring; otherwise an
    /// auto-height container reports the previous canvas height and the
    /// chart could never shrink. Such a container measures 0 high, which
    /// selects the aspect-ratio fallback.
    fn measure_container(&self) -> Result<(f64, f64)> {
        dom::set_style(&self.canvas, "display", "none")?;
        let size = (
            f64::from(self.container.client_width()),
            f64::from(self.container.client_height()),
        );
        dom::set_style(&self.canvas, "display", "block")?;
        Ok(size)
    }

    /// Repaint with the current layout and hover state
    ///
    /// # Errors
    ///
    /// Returns `Canvas` if drawing fails.
    pub fn redraw(&self) -> Result<()> {
        let Some(layout) = self.layout.get() else {
            return Ok(());
        };

        draw_chart(
            &self.ctx,
            &ChartFrame {
                layout: &layout,
                slices: &self.config.slices,
                arcs: &self.arcs,
                config: &self.config,
                highlighted: self.hovered.get(),
            },
        )
    }

    /// Update emphasis and tooltip for a pointer at canvas offset `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the tooltip attribute or redraw fails.
    pub fn hover(&self, x: f64, y: f64) -> Result<()> {
        let hit = self
            .layout
            .get()
            .and_then(|layout| hit_test(&layout, &self.arcs, x, y));
        self.set_hovered(hit)
    }

    /// Slice currently emphasised
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered.get()
    }

    fn set_hovered(&self, hit: Option<usize>) -> Result<()> {
        if hit == self.hovered.get() {
            return Ok(());
        }
        self.hovered.set(hit);

        match hit.and_then(|i| self.config.slices.get(i)) {
            Some(slice) => self
                .canvas
                .set_attribute("title", &tooltip(&self.config.series_name, slice))
                .map_err(|e| PortfolioError::dom("set chart tooltip", &e))?,
            None => self
                .canvas
                .remove_attribute("title")
                .map_err(|e| PortfolioError::dom("clear chart tooltip", &e))?,
        }

        self.redraw()
    }
}

/// Draw the chart into `#skills-chart` and keep it responsive
///
/// Does nothing when the container is absent.
///
/// # Errors
///
/// Returns an error if the chart cannot be mounted or its listeners cannot
/// be attached.
pub fn init_skills_chart(document: &Document, config: &ChartConfig) -> Result<()> {
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        log::debug!("chart: #{CONTAINER_ID} not found, skipping");
        return Ok(());
    };

    let chart = Rc::new(SkillsChart::mount(document, dom::as_html(container)?, config)?);

    let hover_chart = Rc::clone(&chart);
    dom::listen(&chart.canvas, "mousemove", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Err(e) = hover_chart.hover(f64::from(mouse.offset_x()), f64::from(mouse.offset_y())) {
            log::warn!("chart hover: {e}");
        }
    })?;

    let leave_chart = Rc::clone(&chart);
    dom::listen(&chart.canvas, "mouseleave", move |_| {
        if let Err(e) = leave_chart.set_hovered(None) {
            log::warn!("chart hover: {e}");
        }
    })?;

    let resize_chart = Rc::clone(&chart);
    on_window_resize(config.resize_debounce_ms, move || {
        if let Err(e) = resize_chart.fit() {
            log::warn!("chart resize: {e}");
        }
    })?
    .forget();

    // A container laid out later is picked up by the resize listener
    match chart.fit() {
        Ok(()) => log::debug!("chart: drawn {} slices", config.slices.len()),
        Err(e) => log::debug!("chart: waiting for a sized container ({e})"),
    }
    Ok(())
}

/// Boot entry point
///
/// # Errors
///
/// See [`init_skills_chart`].
pub fn init(document: &Document, config: &PortfolioConfig) -> Result<()> {
    init_skills_chart(document, &config.chart)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container(style: &str) -> HtmlElement {
        let document = dom::document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_attribute("style", style).unwrap();
        dom::body(&document).unwrap().append_child(&element).unwrap();
        dom::as_html(element).unwrap()
    }

    fn canvas_size(chart: &SkillsChart) -> (String, String) {
        let style = chart.canvas.style();
        (
            style.get_property_value("width").unwrap(),
            style.get_property_value("height").unwrap(),
        )
    }

    #[wasm_bindgen_test]
    fn test_auto_height_chart_follows_width_both_ways() {
        let host = container("width: 400px");
        let chart =
            SkillsChart::mount(&dom::document().unwrap(), host.clone(), &ChartConfig::default())
                .unwrap();

        chart.fit().unwrap();
        assert_eq!(canvas_size(&chart), ("400px".to_string(), "300px".to_string()));

        dom::set_style(&host, "width", "200px").unwrap();
        chart.fit().unwrap();
        assert_eq!(canvas_size(&chart), ("200px".to_string(), "150px".to_string()));
        host.remove();
    }

    #[wasm_bindgen_test]
    fn test_explicit_height_is_kept() {
        let host = container("width: 400px; height: 200px");
        let chart =
            SkillsChart::mount(&dom::document().unwrap(), host.clone(), &ChartConfig::default())
                .unwrap();

        chart.fit().unwrap();
        chart.fit().unwrap();

        assert_eq!(canvas_size(&chart), ("400px".to_string(), "200px".to_string()));
        host.remove();
    }

    #[wasm_bindgen_test]
    fn test_zero_width_container_recovers_once_sized() {
        let host = container("width: 0");
        let chart =
            SkillsChart::mount(&dom::document().unwrap(), host.clone(), &ChartConfig::default())
                .unwrap();

        assert!(chart.fit().is_err());
        assert_eq!(chart.canvas.style().get_property_value("display").unwrap(), "block");

        dom::set_style(&host, "width", "300px").unwrap();
        chart.fit().unwrap();
        assert_eq!(canvas_size(&chart).0, "300px");
        host.remove();
    }
}
