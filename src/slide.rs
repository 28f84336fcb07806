use raylib::prelude::*;
use crate::constants::*;

/// Scale that fits a `width`×`height` picture into 90% of the screen
/// without enlarging it.
pub fn fit_scale(width: f32, height: f32, screen_width: f32, screen_height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    let max_width = screen_width * 0.9;
    let max_height = screen_height * 0.9;
    (max_width / width).min(max_height / height).min(1.0)
}

/// Opacity of a slide `timer` seconds into its fade-in.
pub fn fade_alpha(timer: f32) -> f32 {
    let t = (timer / FADE_DURATION).clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3) // easeOutCubic
}

/// A texture shown by the viewer while its element is active.
pub struct Slide {
    image: Texture2D,
    fade_timer: f32,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            fade_timer: FADE_DURATION,
        }
    }

    pub fn start_fade(&mut self) {
        self.fade_timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if self.fade_timer < FADE_DURATION {
            self.fade_timer = (self.fade_timer + dt).min(FADE_DURATION);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32, screen_height: f32) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, screen_width, screen_height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;
        let alpha = (fade_alpha(self.fade_timer) * 255.0) as u8;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}
