//! Typewriter text effect
//!
//! [`Typewriter`] is a pure step machine: each call to
//! [`Typewriter::advance`] yields the text to show and how long to wait
//! before the next call. The DOM driver only writes text and sleeps.
//!
//! For strings `["ab", "c"]` with default timings the sequence is
//!
//! ```text
//! ""    1000ms   start delay
//! "a"     50ms   typing
//! "ab"  2000ms   hold before erasing
//! "a"     30ms   erasing
//! ""      30ms
//! "c"   2000ms
//! ""      30ms   then "a" again when looping
//! ```

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::config::{PortfolioConfig, TypewriterConfig};
use crate::error::{PortfolioError, Result};

/// Element whose text is typed
pub const TARGET_ID: &str = "typed-summary";

/// Class of the cursor span inserted after the target
pub const CURSOR_CLASS: &str = "typed-cursor";

/// One rendered frame of the effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Typing,
    Erasing,
    Done,
}

/// Step machine cycling through a list of strings
#[derive(Debug, Clone)]
pub struct Typewriter {
    strings: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: Phase,
    type_speed_ms: u32,
    back_speed_ms: u32,
    back_delay_ms: u32,
    start_delay_ms: u32,
    loop_forever: bool,
}

impl Typewriter {
    /// Build a machine from configuration
    ///
    /// Returns `None` when there is nothing to type.
    #[must_use]
    pub fn new(config: &TypewriterConfig) -> Option<Self> {
        if config.strings.is_empty() {
            return None;
        }

        Some(Self {
            strings: config.strings.iter().map(|s| s.chars().collect()).collect(),
            index: 0,
            shown: 0,
            phase: Phase::Start,
            type_speed_ms: config.type_speed_ms,
            back_speed_ms: config.back_speed_ms,
            back_delay_ms: config.back_delay_ms,
            start_delay_ms: config.start_delay_ms,
            loop_forever: config.loop_forever,
        })
    }

    /// Produce the next frame, or `None` once a non-looping run is over
    pub fn advance(&mut self) -> Option<TypewriterStep> {
        match self.phase {
            Phase::Start => {
                self.phase = Phase::Typing;
                Some(self.step(self.start_delay_ms))
            }
            Phase::Typing => {
                let len = self.current().len();
                if self.shown < len {
                    self.shown = self.shown.saturating_add(1);
                }

                if self.shown < len {
                    return Some(self.step(self.type_speed_ms));
                }

                if self.is_last() && !self.loop_forever {
                    self.phase = Phase::Done;
                    return Some(self.step(0));
                }

                self.phase = Phase::Erasing;
                Some(self.step(self.back_delay_ms))
            }
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                let step = self.step(self.back_speed_ms);

                if self.shown == 0 {
                    self.index = self
                        .index
                        .saturating_add(1)
                        .checked_rem(self.strings.len())
                        .unwrap_or(0);
                    self.phase = Phase::Typing;
                }
                Some(step)
            }
            Phase::Done => None,
        }
    }

    /// Index of the string currently being typed or erased
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    fn current(&self) -> &[char] {
        self.strings.get(self.index).map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_last(&self) -> bool {
        self.index.saturating_add(1) >= self.strings.len()
    }

    fn step(&self, delay_ms: u32) -> TypewriterStep {
        TypewriterStep {
            text: self.current().iter().take(self.shown).collect(),
            delay_ms,
        }
    }
}

/// Insert the blinking cursor span right after `target`
///
/// # Errors
///
/// Returns `Dom` if the span cannot be created or inserted.
pub fn insert_cursor(document: &Document, target: &Element, cursor_char: &str) -> Result<Element> {
    let cursor = document
        .create_element("span")
        .map_err(|e| PortfolioError::dom("create cursor", &e))?;
    cursor.set_class_name(CURSOR_CLASS);
    cursor.set_text_content(Some(cursor_char));
    cursor
        .set_attribute("aria-hidden", "true")
        .map_err(|e| PortfolioError::dom("set cursor aria-hidden", &e))?;

    target
        .after_with_node_1(&cursor)
        .map_err(|e| PortfolioError::dom("insert cursor", &e))?;

    Ok(cursor)
}

/// Start typing into `#typed-summary`
///
/// Does nothing when the element is absent or the string list is empty.
///
/// # Errors
///
/// Returns an error if the cursor cannot be inserted.
pub fn init_typewriter(document: &Document, config: &TypewriterConfig) -> Result<()> {
    let Some(target) = document.get_element_by_id(TARGET_ID) else {
        log::debug!("typewriter: #{TARGET_ID} not found, skipping");
        return Ok(());
    };
    let Some(machine) = Typewriter::new(config) else {
        log::debug!("typewriter: no strings configured, skipping");
        return Ok(());
    };

    if config.show_cursor {
        insert_cursor(document, &target, &config.cursor_char)?;
    }

    start_typing(target, machine);
    Ok(())
}

/// Drive `machine` into `target` on the UI task queue
///
/// Every frame awaits a timer, zero-length ones included, so a config with
/// all delays at 0 still yields to the browser between frames.
pub fn start_typing(target: Element, mut machine: Typewriter) {
    spawn_local(async move {
        while let Some(step) = machine.advance() {
            target.set_text_content(Some(&step.text));
            TimeoutFuture::new(step.delay_ms).await;
        }
        log::debug!("typewriter finished");
    });
}

/// Boot entry point
///
/// # Errors
///
/// See [`init_typewriter`].
pub fn init(document: &Document, config: &PortfolioConfig) -> Result<()> {
    init_typewriter(document, &config.typewriter)
}
