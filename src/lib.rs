//! Auto-advancing carousels for the salon site's gallery and testimonials.
//!
//! [`Carousel`] is the controller: a cursor over a fixed list of items, a
//! direction flag and a pausable auto-advance timer. The [`viewer`] module
//! hosts carousels in a raylib window.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod item;
pub mod state;
pub mod testimonials;
pub mod texture_loader;
pub mod timer;
pub mod transition;
pub mod viewer;

pub use carousel::{Carousel, Cause, Transition};
pub use config::{AspectRatio, CarouselConfig, ControlsPlacement};
pub use error::CarouselError;
pub use item::{ImageItem, Testimonial};
pub use state::Direction;
