//! Stage geometry and the previous/next/dot affordances.

use raylib::prelude::*;

use crate::config::{CarouselConfig, ControlsPlacement};
use crate::constants::*;

const OVERLAY_INSET: f32 = 24.0; // Distance of overlaid controls from the stage edge
const STRIP_GAP: f32 = 24.0;     // Vertical spacing inside the strip under the stage
const DOT_HIT_SLOP: f32 = 6.0;   // Extra clickable margin around the small dots

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAction {
    Previous,
    Next,
    Dot(usize),
}

#[derive(Debug, Clone)]
pub struct HudLayout {
    /// Hover surface: the stage plus any controls drawn outside it
    pub container: Rectangle,
    pub stage: Rectangle,
    pub previous: Option<Rectangle>,
    pub next: Option<Rectangle>,
    pub dots: Vec<Rectangle>,
    pub current: Option<usize>,
}

impl HudLayout {
    pub fn compute(area: Rectangle, config: &CarouselConfig, len: usize, current: Option<usize>) -> Self {
        let arrows = config.arrows_visible(len);
        let dots = config.dots_visible(len);

        let strip_height = match config.placement {
            ControlsPlacement::Below => {
                let mut h = 0.0;
                if arrows {
                    h += STRIP_GAP + ARROW_SIZE;
                }
                if dots {
                    h += STRIP_GAP + DOT_SIZE;
                }
                h
            }
            ControlsPlacement::Overlay => 0.0,
        };

        let available = Rectangle::new(area.x, area.y, area.width, (area.height - strip_height).max(0.0));
        let stage = stage_bounds(available, config);

        let (previous, next, dots_row_y) = match config.placement {
            ControlsPlacement::Overlay => {
                let arrow_y = stage.y + (stage.height - ARROW_SIZE) * 0.5;
                let previous = Rectangle::new(stage.x + OVERLAY_INSET, arrow_y, ARROW_SIZE, ARROW_SIZE);
                let next = Rectangle::new(
                    stage.x + stage.width - OVERLAY_INSET - ARROW_SIZE,
                    arrow_y,
                    ARROW_SIZE,
                    ARROW_SIZE,
                );
                (previous, next, stage.y + stage.height - OVERLAY_INSET - DOT_SIZE)
            }
            ControlsPlacement::Below => {
                let center_x = stage.x + stage.width * 0.5;
                let arrow_y = stage.y + stage.height + STRIP_GAP;
                let previous = Rectangle::new(center_x - STRIP_GAP * 0.5 - ARROW_SIZE, arrow_y, ARROW_SIZE, ARROW_SIZE);
                let next = Rectangle::new(center_x + STRIP_GAP * 0.5, arrow_y, ARROW_SIZE, ARROW_SIZE);
                let dots_y = if arrows { arrow_y + ARROW_SIZE + STRIP_GAP } else { arrow_y };
                (previous, next, dots_y)
            }
        };

        let dot_rects = if dots {
            layout_dots(stage.x + stage.width * 0.5, dots_row_y, len, current)
        } else {
            Vec::new()
        };

        let mut container = stage;
        if config.placement == ControlsPlacement::Below && strip_height > 0.0 {
            container.height += strip_height;
        }

        Self {
            container,
            stage,
            previous: arrows.then_some(previous),
            next: arrows.then_some(next),
            dots: dot_rects,
            current,
        }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        contains(&self.container, point)
    }

    pub fn hit_test(&self, point: Vector2) -> Option<HudAction> {
        if self.previous.is_some_and(|r| contains(&r, point)) {
            return Some(HudAction::Previous);
        }
        if self.next.is_some_and(|r| contains(&r, point)) {
            return Some(HudAction::Next);
        }
        self.dots
            .iter()
            .position(|r| contains(&inflate(r, DOT_HIT_SLOP), point))
            .map(HudAction::Dot)
    }
}

/// Largest rectangle of the configured shape centred in `available`.
pub fn stage_bounds(available: Rectangle, config: &CarouselConfig) -> Rectangle {
    let (width, height) = match (config.height, config.aspect_ratio.ratio()) {
        (Some(height), _) => (available.width, height.min(available.height)),
        (None, Some(ratio)) => {
            if available.width / ratio <= available.height {
                (available.width, available.width / ratio)
            } else {
                (available.height * ratio, available.height)
            }
        }
        (None, None) => (available.width, available.height),
    };
    Rectangle::new(
        available.x + (available.width - width) * 0.5,
        available.y + (available.height - height) * 0.5,
        width,
        height,
    )
}

fn layout_dots(center_x: f32, y: f32, len: usize, current: Option<usize>) -> Vec<Rectangle> {
    let width_of = |i: usize| if Some(i) == current { DOT_ACTIVE_WIDTH } else { DOT_SIZE };
    let total: f32 = (0..len).map(width_of).sum::<f32>() + DOT_GAP * len.saturating_sub(1) as f32;

    let mut x = center_x - total * 0.5;
    let mut dots = Vec::with_capacity(len);
    for i in 0..len {
        let w = width_of(i);
        dots.push(Rectangle::new(x, y, w, DOT_SIZE));
        x += w + DOT_GAP;
    }
    dots
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

fn inflate(rect: &Rectangle, by: f32) -> Rectangle {
    Rectangle::new(rect.x - by, rect.y - by, rect.width + by * 2.0, rect.height + by * 2.0)
}

pub fn center_of(rect: &Rectangle) -> Vector2 {
    Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
}
