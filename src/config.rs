//! Construction parameters for a carousel and its presentation presets.

use std::time::Duration;

use crate::constants::*;
use crate::error::{CarouselError, Result};
use crate::transition::{SlideDistance, TransitionStyle};

/// Shape of the stage a gallery is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    #[default]
    Square,
    Video,
    Wide,
    /// Fills the area it is given unless an explicit height is set
    Custom,
}

impl AspectRatio {
    /// Width divided by height, `None` for [`AspectRatio::Custom`].
    pub fn ratio(self) -> Option<f32> {
        match self {
            AspectRatio::Square => Some(1.0),
            AspectRatio::Video | AspectRatio::Wide => Some(16.0 / 9.0),
            AspectRatio::Custom => None,
        }
    }
}

/// Where the previous/next/dot affordances are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsPlacement {
    /// Drawn on top of the stage (arrows on the sides, dots at the bottom)
    Overlay,
    /// Drawn in a strip under the stage
    Below,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub auto_play: bool,
    pub interval: Duration,
    pub show_dots: bool,
    pub show_arrows: bool,
    /// Hide arrows and dots when there is nothing to navigate to
    pub hide_controls_when_single: bool,
    pub placement: ControlsPlacement,
    pub aspect_ratio: AspectRatio,
    /// Explicit stage height in render pixels, overrides `aspect_ratio`
    pub height: Option<f32>,
    pub transition: TransitionStyle,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::gallery()
    }
}

impl CarouselConfig {
    /// Image gallery: full-width slides, overlaid controls always shown.
    pub fn gallery() -> Self {
        Self {
            auto_play: true,
            interval: Duration::from_millis(GALLERY_INTERVAL_MS),
            show_dots: true,
            show_arrows: true,
            hide_controls_when_single: false,
            placement: ControlsPlacement::Overlay,
            aspect_ratio: AspectRatio::Square,
            height: None,
            transition: TransitionStyle {
                distance: SlideDistance::StageWidth(1.0),
                slide_duration: SLIDE_DURATION,
                fade_duration: FADE_DURATION,
            },
        }
    }

    /// Testimonial cards: short slide distance, controls below the card.
    pub fn testimonials() -> Self {
        Self {
            interval: Duration::from_millis(TESTIMONIAL_INTERVAL_MS),
            hide_controls_when_single: true,
            placement: ControlsPlacement::Below,
            aspect_ratio: AspectRatio::Custom,
            transition: TransitionStyle {
                distance: SlideDistance::Pixels(TESTIMONIAL_SLIDE_DISTANCE),
                slide_duration: SLIDE_DURATION,
                fade_duration: FADE_DURATION,
            },
            ..Self::gallery()
        }
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_dots(mut self, show_dots: bool) -> Self {
        self.show_dots = show_dots;
        self
    }

    pub fn with_arrows(mut self, show_arrows: bool) -> Self {
        self.show_arrows = show_arrows;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_height(mut self, height: Option<f32>) -> Self {
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(())
    }

    /// Whether arrows should be drawn for a carousel of `len` items.
    pub fn arrows_visible(&self, len: usize) -> bool {
        self.show_arrows && self.controls_allowed(len)
    }

    /// Whether dots should be drawn for a carousel of `len` items.
    pub fn dots_visible(&self, len: usize) -> bool {
        self.show_dots && self.controls_allowed(len)
    }

    fn controls_allowed(&self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        !(self.hide_controls_when_single && len < 2)
    }
}
