use raylib::prelude::*;

use crate::state::SlidePhase;
use crate::transition::TransitionStyle;
use crate::viewer::card::Card;

/// One item's animated presence on the stage.
pub struct Slide {
    pub index: usize,
    pub phase: SlidePhase,

    offset_x: f32,
    alpha: f32,

    animation_timer: f32,
    duration: f32,

    tween_offset: Option<ease::Tween>,
    tween_alpha: Option<ease::Tween>,
}

impl Slide {
    /// A slide already resting in the middle of the stage.
    pub fn centered(index: usize) -> Self {
        Self {
            index,
            phase: SlidePhase::Centered,
            offset_x: 0.0,
            alpha: 1.0,
            animation_timer: 0.0,
            duration: 0.0,
            tween_offset: None,
            tween_alpha: None,
        }
    }

    /// A slide coming in from `from_offset`.
    pub fn entering(index: usize, from_offset: f32, style: &TransitionStyle) -> Self {
        let mut slide = Self {
            phase: SlidePhase::Entering,
            offset_x: from_offset,
            alpha: 0.0,
            ..Self::centered(index)
        };
        slide.animate_to(0.0, 1.0, style);
        slide
    }

    /// Sends the slide towards `to_offset`, starting from wherever it is now.
    pub fn exit(&mut self, to_offset: f32, style: &TransitionStyle) {
        self.phase = SlidePhase::Exiting;
        self.animate_to(to_offset, 0.0, style);
    }

    fn animate_to(&mut self, offset: f32, alpha: f32, style: &TransitionStyle) {
        self.animation_timer = 0.0;
        self.duration = style.slide_duration.max(style.fade_duration);
        self.tween_offset = Some(ease::Tween::new(ease::cubic_out, self.offset_x, offset, style.slide_duration));
        self.tween_alpha = Some(ease::Tween::new(ease::linear_none, self.alpha, alpha, style.fade_duration));
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, SlidePhase::Entering | SlidePhase::Exiting)
    }

    pub fn is_visible(&self) -> bool {
        self.phase != SlidePhase::Gone
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating() {
            return;
        }

        if let Some(tween) = self.tween_offset.as_mut() {
            self.offset_x = tween.apply(dt);
        }
        if let Some(tween) = self.tween_alpha.as_mut() {
            self.alpha = tween.apply(dt);
        }

        self.animation_timer += dt;
        if self.animation_timer >= self.duration {
            self.tween_offset = None;
            self.tween_alpha = None;
            match self.phase {
                SlidePhase::Entering => {
                    self.phase = SlidePhase::Centered;
                    self.offset_x = 0.0;
                    self.alpha = 1.0;
                }
                SlidePhase::Exiting => {
                    self.phase = SlidePhase::Gone;
                    self.alpha = 0.0;
                }
                _ => {}
            }
        }
    }

    pub fn draw<C: Card, D: RaylibDraw>(&self, card: &C, d: &mut D, stage: Rectangle) {
        if !self.is_visible() || self.alpha <= 0.0 {
            return;
        }
        let bounds = Rectangle::new(stage.x + self.offset_x, stage.y, stage.width, stage.height);
        card.draw(d, bounds, self.alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::SlideDistance;

    const STYLE: TransitionStyle = TransitionStyle {
        distance: SlideDistance::Pixels(300.0),
        slide_duration: 0.5,
        fade_duration: 0.2,
    };

    fn run(slide: &mut Slide, seconds: f32) {
        let frames = (seconds * 60.0).round() as usize;
        for _ in 0..frames {
            slide.update(1.0 / 60.0);
        }
    }

    #[test]
    fn entering_slide_settles_in_the_centre() {
        let mut slide = Slide::entering(2, 300.0, &STYLE);
        assert_eq!(slide.phase, SlidePhase::Entering);
        assert_eq!(slide.alpha(), 0.0);

        run(&mut slide, 0.1);
        assert!(slide.offset_x() < 300.0 && slide.offset_x() > 0.0);
        assert!(slide.alpha() > 0.0);

        run(&mut slide, 0.5);
        assert_eq!(slide.phase, SlidePhase::Centered);
        assert_eq!((slide.offset_x(), slide.alpha()), (0.0, 1.0));
    }

    #[test]
    fn exiting_slide_disappears() {
        let mut slide = Slide::centered(0);
        slide.exit(-300.0, &STYLE);
        assert!(slide.is_animating());
        run(&mut slide, 0.6);
        assert_eq!(slide.phase, SlidePhase::Gone);
        assert!(!slide.is_visible());
    }

    #[test]
    fn interrupted_entry_exits_from_where_it_is() {
        let mut slide = Slide::entering(1, 300.0, &STYLE);
        run(&mut slide, 0.05);
        let midway = slide.offset_x();
        slide.exit(-300.0, &STYLE);
        slide.update(0.0);
        assert!((slide.offset_x() - midway).abs() < 1e-3);
    }

    #[test]
    fn resting_slide_ignores_updates() {
        let mut slide = Slide::centered(4);
        run(&mut slide, 1.0);
        assert_eq!(slide.phase, SlidePhase::Centered);
        assert_eq!(slide.index, 4);
    }
}
