pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const GALLERY_INTERVAL_MS: u64 = 5000;     // Delay between automatic advances (gallery)
pub const TESTIMONIAL_INTERVAL_MS: u64 = 6000; // Delay between automatic advances (testimonials)

pub const SLIDE_DURATION: f32 = 0.5;          // Offset easing towards/away from the centre (seconds)
pub const FADE_DURATION: f32 = 0.2;           // Opacity fade in/out (seconds)
pub const TESTIMONIAL_SLIDE_DISTANCE: f32 = 300.0; // Pixels travelled by a testimonial card

pub const STAGE_MARGIN: f32 = 0.08;           // Fraction of the render area kept around the stage
pub const ARROW_SIZE: f32 = 56.0;             // Side of the square arrow buttons
pub const DOT_SIZE: f32 = 14.0;               // Diameter of an inactive dot
pub const DOT_ACTIVE_WIDTH: f32 = 28.0;       // Width of the pill drawn for the current dot
pub const DOT_GAP: f32 = 10.0;                // Space between dots
