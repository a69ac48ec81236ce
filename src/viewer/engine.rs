use std::time::Duration;

use raylib::prelude::*;
use tracing::debug;

use crate::carousel::{Carousel, Transition};
use crate::viewer::card::{Card, PINK, PINK_LIGHT, fade};
use crate::viewer::hud::{HudAction, HudLayout, center_of};
use crate::viewer::slide::Slide;

/// Input gathered by the host for one frame, in render-texture coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub pointer: Vector2,
    pub clicked: bool,
    pub previous_key: bool,
    pub next_key: bool,
    pub toggle_auto_play: bool,
}

impl FrameInput {
    pub fn idle(pointer: Vector2) -> Self {
        Self {
            pointer,
            clicked: false,
            previous_key: false,
            next_key: false,
            toggle_auto_play: false,
        }
    }
}

/// Hosts a carousel on screen: turns pointer and keyboard input into
/// controller operations and animates every change of the current item.
pub struct CarouselEngine<C: Card> {
    carousel: Carousel<C>,
    area: Rectangle,
    hud: HudLayout,
    hovered: bool,

    incoming: Option<Slide>,
    outgoing: Vec<Slide>,
}

impl<C: Card> CarouselEngine<C> {
    pub fn new(carousel: Carousel<C>, area: Rectangle) -> Self {
        let hud = HudLayout::compute(area, carousel.config(), carousel.len(), carousel.current_index());
        let incoming = carousel.current_index().map(Slide::centered);
        Self {
            carousel,
            area,
            hud,
            hovered: false,
            incoming,
            outgoing: Vec::new(),
        }
    }

    pub fn carousel(&self) -> &Carousel<C> {
        &self.carousel
    }

    pub fn into_carousel(self) -> Carousel<C> {
        self.carousel
    }

    pub fn hud(&self) -> &HudLayout {
        &self.hud
    }

    pub fn incoming(&self) -> Option<&Slide> {
        self.incoming.as_ref()
    }

    pub fn outgoing(&self) -> &[Slide] {
        &self.outgoing
    }

    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        let mut transitions: Vec<Transition> = Vec::new();

        // `dt` elapsed before this frame's input: charge it to the current
        // countdown. Capped at one interval so a stalled window advances
        // once instead of replaying every missed advance.
        let elapsed = Duration::from_secs_f32(dt.max(0.0)).min(self.carousel.interval());
        transitions.extend(self.carousel.tick(elapsed));

        // Pointer enter/leave over the container drives pause/resume
        let inside = self.hud.contains(input.pointer);
        if inside != self.hovered {
            self.hovered = inside;
            if inside {
                self.carousel.pause();
            } else {
                self.carousel.resume();
            }
        }

        if input.clicked {
            let action = self.hud.hit_test(input.pointer);
            if let Some(t) = action.and_then(|action| self.apply(action)) {
                transitions.push(t);
            }
        }
        if input.previous_key {
            transitions.extend(self.carousel.advance_backward());
        }
        if input.next_key {
            transitions.extend(self.carousel.advance_forward());
        }
        if input.toggle_auto_play {
            let auto_play = !self.carousel.auto_play();
            debug!(auto_play, "toggled auto-play");
            self.carousel.set_auto_play(auto_play);
        }
        if let Some(slide) = self.incoming.as_mut() {
            slide.update(dt);
        }
        for slide in self.outgoing.iter_mut() {
            slide.update(dt);
        }
        self.outgoing.retain(Slide::is_visible);

        // New slides start animating on the next frame
        for transition in &transitions {
            self.begin_transition(transition);
        }

        if !transitions.is_empty() {
            self.hud = HudLayout::compute(
                self.area,
                self.carousel.config(),
                self.carousel.len(),
                self.carousel.current_index(),
            );
        }
    }

    fn apply(&mut self, action: HudAction) -> Option<Transition> {
        match action {
            HudAction::Previous => self.carousel.advance_backward(),
            HudAction::Next => self.carousel.advance_forward(),
            HudAction::Dot(index) => self.carousel.jump_to(index),
        }
    }

    fn begin_transition(&mut self, transition: &Transition) {
        let style = self.carousel.config().transition;
        let width = self.hud.stage.width;

        if let Some(mut previous) = self.incoming.take() {
            previous.exit(style.exit_offset(transition.direction, width), &style);
            self.outgoing.push(previous);
        }
        self.incoming = Some(Slide::entering(
            transition.to,
            style.enter_offset(transition.direction, width),
            &style,
        ));
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D) {
        if self.carousel.is_empty() {
            return;
        }
        let stage = self.hud.stage;
        let items = self.carousel.items();

        {
            // Slides never paint outside the stage
            let mut clip = d.begin_scissor_mode(
                stage.x as i32,
                stage.y as i32,
                stage.width as i32,
                stage.height as i32,
            );
            for slide in self.outgoing.iter().chain(self.incoming.iter()) {
                if let Some(card) = items.get(slide.index) {
                    slide.draw(card, &mut clip, stage);
                }
            }
        }

        self.draw_controls(d);
    }

    fn draw_controls<D: RaylibDraw>(&self, d: &mut D) {
        if let Some(rect) = self.hud.previous {
            draw_arrow(d, rect, false);
        }
        if let Some(rect) = self.hud.next {
            draw_arrow(d, rect, true);
        }
        for (i, rect) in self.hud.dots.iter().enumerate() {
            let color = if Some(i) == self.hud.current { PINK } else { PINK_LIGHT };
            d.draw_rectangle_rounded(*rect, 1.0, 8, color);
        }
    }
}

fn draw_arrow<D: RaylibDraw>(d: &mut D, rect: Rectangle, pointing_right: bool) {
    let center = center_of(&rect);
    let radius = rect.width * 0.5;
    d.draw_circle_v(center, radius, fade(Color::WHITE, 0.85));

    let s = radius * 0.35;
    // Counter-clockwise on screen
    let (a, b, c) = if pointing_right {
        (
            Vector2::new(center.x + s, center.y),
            Vector2::new(center.x - s * 0.6, center.y - s),
            Vector2::new(center.x - s * 0.6, center.y + s),
        )
    } else {
        (
            Vector2::new(center.x - s, center.y),
            Vector2::new(center.x + s * 0.6, center.y + s),
            Vector2::new(center.x + s * 0.6, center.y - s),
        )
    };
    d.draw_triangle(a, b, c, PINK);
}
