pub const DEFAULT_WINDOW_WIDTH: i32 = 960;     // Initial window width
pub const DEFAULT_WINDOW_HEIGHT: i32 = 540;    // Initial window height
pub const FPS: u32 = 60;                       // Frames per second

pub const AUTOPLAY_INTERVAL_MS: u64 = 6000;    // Time between automatic advances
pub const MIN_INTERVAL_MS: u64 = 100;          // Shortest interval the config accepts
pub const FADE_DURATION: f32 = 0.4;            // Fade-in of a newly active slide (seconds)

pub const SLIDE_SELECTOR: &str = ".carousel-item";
pub const INDICATOR_SELECTOR: &str = ".indicator";
pub const ACTIVE_CLASS: &str = "active";

pub const INDICATOR_RADIUS: f32 = 7.0;         // Radius of an indicator dot (pixels)
pub const INDICATOR_SPACING: f32 = 26.0;       // Distance between dot centers (pixels)
pub const INDICATOR_MARGIN: f32 = 28.0;        // Distance of the dot row from the bottom edge
