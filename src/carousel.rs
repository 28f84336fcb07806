//! Carousel controller: one active slide, wrap-around navigation, autoplay.
//!
//! Positions are 1-based. The controller keeps only its index; slides and
//! indicators are looked up in the [`Document`] on every update, so elements
//! added or removed between calls are picked up without any bookkeeping.
//!
//! Nothing here fails. Out-of-range indices wrap, missing elements are
//! skipped, and an empty carousel simply shows nothing.

use std::time::Duration;

use crate::config::Config;
use crate::constants::*;
use crate::document::Document;
use crate::state::AutoplayState;
use crate::timer::Interval;

#[derive(Debug, Clone)]
pub struct Carousel {
    index: i64,
    slide_selector: String,
    indicator_selector: String,
    active_class: String,
    autoplay: Option<Interval>,
    restart_on_interaction: bool,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    pub fn new() -> Self {
        Self::with_selectors(SLIDE_SELECTOR, INDICATOR_SELECTOR, ACTIVE_CLASS)
    }

    pub fn with_selectors(slide_selector: &str, indicator_selector: &str, active_class: &str) -> Self {
        Self {
            index: 1,
            slide_selector: slide_selector.to_string(),
            indicator_selector: indicator_selector.to_string(),
            active_class: active_class.to_string(),
            autoplay: None,
            restart_on_interaction: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut carousel = Self::with_selectors(
            &config.slide_selector,
            &config.indicator_selector,
            &config.active_class,
        );
        carousel.restart_on_interaction = config.restart_on_interaction;
        carousel
    }

    /// Restart the autoplay countdown whenever [`Carousel::note_interaction`] is called.
    pub fn restart_on_interaction(mut self, enabled: bool) -> Self {
        self.restart_on_interaction = enabled;
        self
    }

    /// The held 1-based index. After any update this is in `1..=N`,
    /// or `0`/`1` for an empty carousel.
    pub fn current_index(&self) -> i64 {
        self.index
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    pub fn slide_selector(&self) -> &str {
        &self.slide_selector
    }

    pub fn indicator_selector(&self) -> &str {
        &self.indicator_selector
    }

    // --- Navigation ---

    /// Shows whatever slide the held index points at.
    pub fn initialize<D: Document>(&mut self, doc: &mut D) {
        log::debug!("carousel initialized at index {}", self.index);
        self.apply_display_update(doc);
    }

    pub fn advance_next<D: Document>(&mut self, doc: &mut D) {
        self.index = self.index.saturating_add(1);
        log::debug!("carousel next -> {}", self.index);
        self.apply_display_update(doc);
    }

    pub fn advance_previous<D: Document>(&mut self, doc: &mut D) {
        self.index = self.index.saturating_sub(1);
        log::debug!("carousel previous -> {}", self.index);
        self.apply_display_update(doc);
    }

    /// Jumps to the 1-based position `n`. Values past either end wrap.
    pub fn jump_to<D: Document>(&mut self, n: i64, doc: &mut D) {
        self.index = n; // Range-checked by the update, not here
        log::debug!("carousel jump -> {}", self.index);
        self.apply_display_update(doc);
    }

    fn apply_display_update<D: Document>(&mut self, doc: &mut D) {
        // --- Fresh lookup, nothing is cached between calls ---
        let slides = doc.query_selector_all(&self.slide_selector);
        let indicators = doc.query_selector_all(&self.indicator_selector);

        // The slide count alone decides wrapping, indicators follow along.
        let count = i64::try_from(slides.len()).unwrap_or(i64::MAX);
        if self.index > count {
            log::trace!("index {} past {} slides, wrapping to 1", self.index, count);
            self.index = 1;
        } else if self.index < 1 {
            log::trace!("index {} before first slide, wrapping to {}", self.index, count);
            self.index = count;
        }

        // --- Clear every mark, then set the one at index - 1 ---
        for &node in slides.iter().chain(indicators.iter()) {
            doc.remove_class(node, &self.active_class);
        }

        let position = usize::try_from(self.index - 1).ok();
        match position.and_then(|i| slides.get(i)) {
            Some(&slide) => doc.add_class(slide, &self.active_class),
            None => log::trace!("no slide at index {}", self.index),
        }
        // Fewer indicators than slides is tolerated
        match position.and_then(|i| indicators.get(i)) {
            Some(&indicator) => doc.add_class(indicator, &self.active_class),
            None => log::trace!("no indicator at index {}", self.index),
        }
    }

    // --- Autoplay ---

    pub fn autoplay_state(&self) -> AutoplayState {
        match &self.autoplay {
            None => AutoplayState::Stopped,
            Some(interval) if interval.is_paused() => AutoplayState::Paused,
            Some(_) => AutoplayState::Running,
        }
    }

    /// Registers the repeating advance. Calling it again replaces the
    /// previous timer with a fresh one. A zero period stops autoplay.
    pub fn start_autoplay(&mut self, period: Duration) {
        if period.is_zero() {
            log::warn!("autoplay period of zero ignored");
            self.stop_autoplay();
            return;
        }
        log::info!("autoplay every {} ms", period.as_millis());
        self.autoplay = Some(Interval::new(period));
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay.take().is_some() {
            log::info!("autoplay stopped");
        }
    }

    pub fn pause_autoplay(&mut self) {
        if let Some(interval) = self.autoplay.as_mut() {
            interval.pause();
            log::debug!("autoplay paused");
        }
    }

    pub fn resume_autoplay(&mut self) {
        if let Some(interval) = self.autoplay.as_mut() {
            interval.resume();
            log::debug!("autoplay resumed");
        }
    }

    /// Flips between paused and running. No effect when stopped.
    pub fn toggle_autoplay(&mut self) {
        match self.autoplay_state() {
            AutoplayState::Running => self.pause_autoplay(),
            AutoplayState::Paused => self.resume_autoplay(),
            AutoplayState::Stopped => {}
        }
    }

    /// Called after user-driven navigation.
    pub fn note_interaction(&mut self) {
        if !self.restart_on_interaction {
            return;
        }
        if let Some(interval) = self.autoplay.as_mut() {
            interval.restart();
        }
    }

    /// Feeds frame time to the autoplay timer. Advances at most once per
    /// call, however long the frame was. Returns whether it advanced.
    pub fn tick<D: Document>(&mut self, dt: Duration, doc: &mut D) -> bool {
        let fired = self
            .autoplay
            .as_mut()
            .is_some_and(|interval| interval.tick(dt));
        if fired {
            self.advance_next(doc);
        }
        fired
    }
}
