//! raylib host for carousels: cards, slide animations and on-screen controls.

pub mod card;
pub mod engine;
pub mod hud;
pub mod slide;

pub use card::{Card, ImageCard, TestimonialCard};
pub use engine::{CarouselEngine, FrameInput};
pub use hud::{HudAction, HudLayout};
