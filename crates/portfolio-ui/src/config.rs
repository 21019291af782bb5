//! Page configuration
//!
//! All tunables live in [`PortfolioConfig`]. Defaults reproduce the stock
//! portfolio page exactly. A page may override any subset by embedding
//!
//! ```html
//! <script id="portfolio-config" type="application/json">
//!   { "typewriter": { "type_speed_ms": 40 }, "particles": { "enabled": true } }
//! </script>
//! ```
//!
//! Unknown keys are ignored and missing keys keep their defaults.

use serde::Deserialize;
use web_sys::Document;

use crate::components::chart::data::{SkillSlice, default_skills};
use crate::error::{PortfolioError, Result};

/// Element id of the optional JSON configuration island
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Console log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Top-level configuration for every page feature
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub log_level: LogLevel,
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
    pub skill_bars: SkillBarConfig,
    pub chart: ChartConfig,
    pub navigation: NavigationConfig,
    pub certifications: CertificationConfig,
    pub download: DownloadConfig,
    pub notification: NotificationConfig,
    pub particles: ParticleConfig,
}

/// Typewriter effect settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub strings: Vec<String>,
    /// Delay per typed character
    pub type_speed_ms: u32,
    /// Delay per erased character
    pub back_speed_ms: u32,
    /// Pause once a string is fully typed
    pub back_delay_ms: u32,
    /// Pause before the first character
    pub start_delay_ms: u32,
    #[serde(rename = "loop")]
    pub loop_forever: bool,
    pub show_cursor: bool,
    pub cursor_char: String,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            strings: [
                "Computer Engineering Fresher",
                "MERN Stack Devloper",
                "Aspiring Software Engineer",
                "API and Database Enthusiast",
                "Building Real-World Projects",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            type_speed_ms: 50,
            back_speed_ms: 30,
            back_delay_ms: 2000,
            start_delay_ms: 1000,
            loop_forever: true,
            show_cursor: true,
            cursor_char: "|".to_string(),
        }
    }
}

/// Scroll reveal settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub revealed_class: String,
    /// Delay between successive timeline items being observed
    pub timeline_stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            revealed_class: "revealed".to_string(),
            timeline_stagger_ms: 200,
        }
    }
}

/// Skill bar settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillBarConfig {
    pub threshold: f64,
    /// Delay between visibility and the width change
    pub delay_ms: u32,
}

impl Default for SkillBarConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            delay_ms: 500,
        }
    }
}

/// Skills chart settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Series name shown in the tooltip
    pub series_name: String,
    pub slices: Vec<SkillSlice>,
    /// Inner radius as a fraction of half the shorter side
    pub inner_radius: f64,
    /// Outer radius as a fraction of half the shorter side
    pub outer_radius: f64,
    pub border_color: String,
    pub border_width: f64,
    pub legend_color: String,
    pub resize_debounce_ms: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series_name: "Skills".to_string(),
            slices: default_skills(),
            inner_radius: 0.4,
            outer_radius: 0.7,
            border_color: "#fff".to_string(),
            border_width: 2.0,
            legend_color: "#374151".to_string(),
            resize_debounce_ms: 100,
        }
    }
}

/// Navigation highlight settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Added to `scrollY` before matching sections
    pub scroll_offset: f64,
    /// `scrollY` beyond which the navbar gets its scrolled styling
    pub scrolled_threshold: f64,
    pub active_classes: Vec<String>,
    pub scrolled_classes: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_offset: 100.0,
            scrolled_threshold: 50.0,
            active_classes: vec!["text-navy".to_string(), "font-semibold".to_string()],
            scrolled_classes: vec!["bg-white/98".to_string(), "shadow-md".to_string()],
        }
    }
}

/// Certification card settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CertificationConfig {
    pub stagger_ms: u32,
}

impl Default for CertificationConfig {
    fn default() -> Self {
        Self { stagger_ms: 150 }
    }
}

/// Download button settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub resume_path: String,
    pub target: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            resume_path: "resume.html".to_string(),
            target: "_blank".to_string(),
        }
    }
}

/// Notification settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 5000 }
    }
}

/// Decorative particle background settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub enabled: bool,
    pub count: usize,
    pub color: String,
    pub opacity: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            count: 50,
            color: "#1e3a8a".to_string(),
            opacity: 0.1,
        }
    }
}

impl PortfolioConfig {
    /// Parse a configuration document
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::Config` if the text is not valid JSON for
    /// this schema.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| PortfolioError::Config(e.to_string()))
    }

    /// Load configuration from the page, falling back to defaults
    ///
    /// A malformed configuration island is logged and ignored.
    #[must_use]
    pub fn load(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        Self::from_json(&text).unwrap_or_else(|e| {
            log::warn!("{e}; using default configuration");
            Self::default()
        })
    }
}
