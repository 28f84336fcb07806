//! raylib front end: a window showing the active slide and a row of
//! indicator dots, driven by a [`Carousel`] over a [`MemoryDocument`].

use std::path::PathBuf;
use std::time::Duration;

use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::document::{Document, MemoryDocument, NodeId, parse_class_selector};
use crate::slide::Slide;
use crate::state::AutoplayState;
use crate::texture_loader::load_texture_with_exif_rotation;

/// What a frame's input asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    JumpTo(i64),
    ToggleAutoplay,
}

/// Classes an element needs to match a compound class selector. Empty for
/// selectors the document cannot match; config validation rejects those.
pub fn selector_classes(selector: &str) -> Vec<&str> {
    parse_class_selector(selector.trim()).unwrap_or_default()
}

/// Centers of `count` indicator dots laid out in a row near the bottom edge.
pub fn indicator_centers(count: usize, screen_width: f32, screen_height: f32) -> Vec<Vector2> {
    let middle = (count as f32 - 1.0) * 0.5;
    (0..count)
        .map(|i| {
            Vector2::new(
                screen_width * 0.5 + (i as f32 - middle) * INDICATOR_SPACING,
                screen_height - INDICATOR_MARGIN,
            )
        })
        .collect()
}

/// Maps a click to a command: a dot jumps to its position, the outer
/// thirds of the window step backwards or forwards.
pub fn click_command(click: Vector2, dot_count: usize, screen_width: f32, screen_height: f32) -> Option<Command> {
    let hit = INDICATOR_RADIUS + 4.0;
    let dots = indicator_centers(dot_count, screen_width, screen_height);
    if let Some(i) = dots.iter().position(|c| (c.x - click.x).hypot(c.y - click.y) <= hit) {
        return Some(Command::JumpTo(i as i64 + 1));
    }
    if click.x < screen_width / 3.0 {
        Some(Command::Previous)
    } else if click.x > screen_width * 2.0 / 3.0 {
        Some(Command::Next)
    } else {
        None
    }
}

fn key_command(key: KeyboardKey) -> Option<Command> {
    let digit = match key {
        KeyboardKey::KEY_RIGHT => return Some(Command::Next),
        KeyboardKey::KEY_LEFT => return Some(Command::Previous),
        KeyboardKey::KEY_SPACE => return Some(Command::ToggleAutoplay),
        KeyboardKey::KEY_ONE => 1,
        KeyboardKey::KEY_TWO => 2,
        KeyboardKey::KEY_THREE => 3,
        KeyboardKey::KEY_FOUR => 4,
        KeyboardKey::KEY_FIVE => 5,
        KeyboardKey::KEY_SIX => 6,
        KeyboardKey::KEY_SEVEN => 7,
        KeyboardKey::KEY_EIGHT => 8,
        KeyboardKey::KEY_NINE => 9,
        _ => return None,
    };
    Some(Command::JumpTo(digit))
}

pub struct Viewer {
    carousel: Carousel,
    document: MemoryDocument,
    slides: Vec<(NodeId, Slide)>,
    shown: Option<NodeId>,
}

impl Viewer {
    pub fn new(carousel: Carousel) -> Self {
        Self {
            carousel,
            document: MemoryDocument::new(),
            slides: Vec::new(),
            shown: None,
        }
    }

    /// Loads every image as a slide with a matching indicator, then shows
    /// the first one. Returns false when nothing could be loaded.
    pub fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> bool {
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(image) => {
                    let node = self.document.append(selector_classes(self.carousel.slide_selector()));
                    self.slides.push((node, Slide::new(image)));
                }
                Err(e) => log::warn!("skipping {}: {:#}", path.display(), e),
            }
        }
        // One dot per slide that actually loaded
        for _ in 0..self.slides.len() {
            self.document.append(selector_classes(self.carousel.indicator_selector()));
        }

        self.carousel.initialize(&mut self.document);

        // A selector the document cannot match would leave an empty window
        let matched = self.document.query_selector_all(self.carousel.slide_selector()).len();
        if matched != self.slides.len() {
            log::error!(
                "slide selector {:?} matched {} of {} slides",
                self.carousel.slide_selector(),
                matched,
                self.slides.len()
            );
            return false;
        }
        !self.slides.is_empty()
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    fn apply(&mut self, command: Command) {
        // Only navigation counts as interaction, pausing does not
        match command {
            Command::Next => self.carousel.advance_next(&mut self.document),
            Command::Previous => self.carousel.advance_previous(&mut self.document),
            Command::JumpTo(n) => self.carousel.jump_to(n, &mut self.document),
            Command::ToggleAutoplay => {
                self.carousel.toggle_autoplay();
                return;
            }
        }
        self.carousel.note_interaction();
    }

    fn indicators(&self) -> Vec<NodeId> {
        self.document.query_selector_all(self.carousel.indicator_selector())
    }

    /// Handles input and the autoplay timer for one frame.
    pub fn update(&mut self, rl: &mut RaylibHandle, dt: f32) {
        // --- Keyboard ---
        while let Some(key) = rl.get_key_pressed() {
            if let Some(command) = key_command(key) {
                self.apply(command);
            }
        }

        // --- Mouse: dots first, then window edges ---
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let click = rl.get_mouse_position();
            let (sw, sh) = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            if let Some(command) = click_command(click, self.indicators().len(), sw, sh) {
                self.apply(command);
            }
        }

        // --- Autoplay, after input so a click this frame wins ---
        self.carousel.tick(Duration::from_secs_f32(dt.max(0.0)), &mut self.document);

        // Start the fade when the active element changed, whoever changed it

        let active = self.active_slide();
        if active != self.shown {
            if let Some(slide) = self.slides.iter_mut().find(|(node, _)| Some(*node) == active) {
                slide.1.start_fade();
            }
            self.shown = active;
        }
        for (_, slide) in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    fn active_slide(&self) -> Option<NodeId> {
        let class = self.carousel.active_class();
        self.slides
            .iter()
            .map(|(node, _)| *node)
            .find(|node| self.document.has_class(*node, class))
    }

    pub fn render_frame(&self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        // --- Active slide ---
        if let Some((_, slide)) = self.slides.iter().find(|(node, _)| Some(*node) == self.shown) {
            slide.draw(&mut d, sw, sh);
        }

        // --- Indicator dots, re-queried like the carousel does ---
        let indicators = self.indicators();
        let class = self.carousel.active_class();
        for (node, center) in indicators.iter().zip(indicator_centers(indicators.len(), sw, sh)) {
            if self.document.has_class(*node, class) {
                d.draw_circle_v(center, INDICATOR_RADIUS, Color::WHITE);
            } else {
                d.draw_circle_v(center, INDICATOR_RADIUS, Color::new(255, 255, 255, 90));
            }
        }

        if self.carousel.autoplay_state() == AutoplayState::Paused {
            d.draw_text("paused", 12, 12, 20, Color::LIGHTGRAY);
        }
    }
}
