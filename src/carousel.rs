//! Auto-advancing carousel controller.
//!
//! A [`Carousel`] owns a fixed list of items and a cursor into it. It knows
//! nothing about how items are drawn; hosts call the navigation operations
//! from their input handlers and feed the frame delta into [`Carousel::tick`].

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::state::Direction;
use crate::timer::{AutoAdvanceTimer, Countdown};

/// What caused the cursor to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Auto,
    Manual,
}

/// A change of the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub cause: Cause,
}

type Listener = Box<dyn FnMut(&Transition)>;

pub struct Carousel<T> {
    items: Vec<T>,
    config: CarouselConfig,

    current_index: Option<usize>,
    direction: Direction,
    is_paused: bool,

    timer: Option<AutoAdvanceTimer>,
    generation: u64,

    listeners: Vec<Listener>,
}

impl<T> Carousel<T> {
    /// Mounts a carousel over `items`. An empty list is allowed: nothing is
    /// current and every operation is a no-op.
    pub fn new(items: Vec<T>, config: CarouselConfig) -> Result<Self> {
        config.validate()?;

        let current_index = if items.is_empty() { None } else { Some(0) };
        let mut carousel = Self {
            items,
            config,
            current_index,
            direction: Direction::Forward,
            is_paused: false,
            timer: None,
            generation: 0,
            listeners: Vec::new(),
        };
        carousel.sync_timer();
        debug!(items = carousel.items.len(), "carousel mounted");
        Ok(carousel)
    }

    /// Registers a callback run after every change of the current item.
    pub fn on_change(&mut self, listener: impl FnMut(&Transition) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current(&self) -> Option<&T> {
        self.current_index.and_then(|i| self.items.get(i))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn auto_play(&self) -> bool {
        self.config.auto_play
    }

    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Time left before the next automatic advance, if one is pending.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.timer.as_ref().map(AutoAdvanceTimer::remaining)
    }

    pub fn advance_forward(&mut self) -> Option<Transition> {
        self.step(Direction::Forward, Cause::Manual)
    }

    pub fn advance_backward(&mut self) -> Option<Transition> {
        self.step(Direction::Backward, Cause::Manual)
    }

    /// Moves straight to `target`. Out-of-range targets are ignored.
    pub fn jump_to(&mut self, target: usize) -> Option<Transition> {
        let from = self.current_index?;
        if target >= self.items.len() {
            debug!(target, len = self.items.len(), "ignoring out-of-range jump");
            return None;
        }
        self.direction = if target > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.move_to(from, target, Cause::Manual)
    }

    /// Pointer entered the display surface.
    pub fn pause(&mut self) {
        if self.is_paused {
            return;
        }
        self.is_paused = true;
        self.sync_timer();
    }

    /// Pointer left the display surface.
    pub fn resume(&mut self) {
        if !self.is_paused {
            return;
        }
        self.is_paused = false;
        self.sync_timer();
    }

    pub fn set_auto_play(&mut self, auto_play: bool) {
        if self.config.auto_play == auto_play {
            return;
        }
        self.config.auto_play = auto_play;
        self.sync_timer();
    }

    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        if self.config.interval != interval {
            self.config.interval = interval;
            self.sync_timer();
        }
        Ok(())
    }

    /// Feeds elapsed host time into the auto-advance timer.
    ///
    /// Time past a deadline counts towards the next countdown, so one large
    /// `dt` may advance several times, each one reported to the listeners.
    /// Returns the last transition made. Hosts that only animate one change
    /// per frame cap `dt` at [`Carousel::interval`].
    pub fn tick(&mut self, dt: Duration) -> Option<Transition> {
        let mut budget = dt;
        let mut last = None;

        while let Some(timer) = self.timer.as_mut() {
            match timer.consume(budget) {
                Countdown::Pending => break,
                Countdown::Fired { leftover } => {
                    budget = leftover;
                    if let Some(transition) = self.step(Direction::Forward, Cause::Auto) {
                        last = Some(transition);
                    }
                }
            }
        }

        last
    }

    /// Tears the carousel down. The pending timer and every listener are
    /// released before this returns.
    pub fn unmount(self) {
        drop(self);
    }

    fn step(&mut self, direction: Direction, cause: Cause) -> Option<Transition> {
        let from = self.current_index?;
        let len = self.items.len();
        let to = match direction {
            Direction::Forward => (from + 1) % len,
            Direction::Backward => (from + len - 1) % len,
        };
        self.direction = direction;
        self.move_to(from, to, cause)
    }

    fn move_to(&mut self, from: usize, to: usize, cause: Cause) -> Option<Transition> {
        if from == to {
            return None;
        }
        self.current_index = Some(to);

        let transition = Transition {
            from,
            to,
            direction: self.direction,
            cause,
        };
        debug!(from, to, direction = ?self.direction, cause = ?cause, "carousel moved");

        // The countdown restarts whenever the current item changes
        self.sync_timer();

        for listener in self.listeners.iter_mut() {
            listener(&transition);
        }
        Some(transition)
    }

    fn should_run(&self) -> bool {
        self.config.auto_play && !self.is_paused && !self.items.is_empty()
    }

    fn sync_timer(&mut self) {
        // Release first: two countdowns must never be pending at once
        drop(self.timer.take());

        if self.should_run() {
            self.generation += 1;
            self.timer = Some(AutoAdvanceTimer::arm(self.generation, self.config.interval));
        }
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        drop(self.timer.take());
        self.listeners.clear();
        debug!("carousel unmounted");
    }
}

impl<T> fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.items.len())
            .field("current_index", &self.current_index)
            .field("direction", &self.direction)
            .field("is_paused", &self.is_paused)
            .field("timer", &self.timer)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn carousel(len: usize, interval_ms: u64) -> Carousel<usize> {
        let config = CarouselConfig::gallery().with_interval(ms(interval_ms));
        Carousel::new((0..len).collect(), config).unwrap()
    }

    fn manual(len: usize) -> Carousel<usize> {
        let config = CarouselConfig::gallery().with_auto_play(false);
        Carousel::new((0..len).collect(), config).unwrap()
    }

    #[test]
    fn index_stays_in_range_for_random_navigation() {
        let mut rng = StdRng::seed_from_u64(0x5a10);
        for _ in 0..50 {
            let len = rng.random_range(1..=9);
            let mut c = manual(len);
            for _ in 0..200 {
                if rng.random_bool(0.5) {
                    c.advance_forward();
                } else {
                    c.advance_backward();
                }
                let index = c.current_index().unwrap();
                assert!(index < len);
                assert_eq!(c.current(), Some(&index));
            }
        }
    }

    #[test]
    fn forward_then_backward_restores_index() {
        for len in 1..6 {
            for start in 0..len {
                let mut c = manual(len);
                c.jump_to(start);
                c.advance_forward();
                c.advance_backward();
                assert_eq!(c.current_index(), Some(start), "len {len} start {start}");
            }
        }
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut c = manual(3);
        let t = c.advance_backward().unwrap();
        assert_eq!((t.from, t.to, t.direction), (0, 2, Direction::Backward));
        let t = c.advance_forward().unwrap();
        assert_eq!((t.from, t.to, t.direction), (2, 0, Direction::Forward));
    }

    #[test]
    fn jump_sets_exact_index_and_direction() {
        let mut c = manual(5);
        let t = c.jump_to(3).unwrap();
        assert_eq!(c.current_index(), Some(3));
        assert_eq!(t.direction, Direction::Forward);
        assert_eq!(t.cause, Cause::Manual);

        c.jump_to(1);
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn jump_to_current_index_changes_nothing_but_direction() {
        let mut c = manual(4);
        c.jump_to(2);
        assert_eq!(c.jump_to(2), None);
        assert_eq!(c.current_index(), Some(2));
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut c = manual(4);
        c.advance_forward();
        assert_eq!(c.jump_to(4), None);
        assert_eq!(c.jump_to(usize::MAX), None);
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = carousel(0, 1000);
        assert!(c.is_empty());
        assert!(!c.is_timer_armed());
        assert_eq!(c.advance_forward(), None);
        assert_eq!(c.advance_backward(), None);
        assert_eq!(c.jump_to(0), None);
        assert_eq!(c.tick(ms(10_000)), None);
        c.pause();
        c.resume();
        assert!(!c.is_timer_armed());
        assert_eq!(c.current_index(), None);
        assert_eq!(c.current(), None);
    }

    #[test]
    fn single_item_timer_fires_without_moving() {
        let mut c = carousel(1, 1000);
        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        c.on_change(move |_| *seen.borrow_mut() += 1);

        assert!(c.is_timer_armed());
        assert_eq!(c.tick(ms(3500)), None);
        assert_eq!(c.advance_forward(), None);
        assert_eq!(c.advance_backward(), None);
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.time_until_advance(), Some(ms(500)));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn auto_advance_follows_interval_and_stops_while_paused() {
        let mut c = carousel(5, 1000);
        assert_eq!(c.current_index(), Some(0));

        let t = c.tick(ms(1000)).unwrap();
        assert_eq!(t.cause, Cause::Auto);
        assert_eq!(c.current_index(), Some(1));

        c.tick(ms(1000));
        c.tick(ms(1000));
        assert_eq!(c.current_index(), Some(3));

        c.pause();
        assert!(!c.is_timer_armed());
        for _ in 0..50 {
            c.tick(ms(100));
        }
        assert_eq!(c.current_index(), Some(3));
    }

    #[test]
    fn large_delta_advances_several_times() {
        let mut c = carousel(5, 1000);
        let t = c.tick(ms(3500)).unwrap();
        assert_eq!((t.from, t.to), (2, 3));
        assert_eq!(c.current_index(), Some(3));
        assert_eq!(c.time_until_advance(), Some(ms(500)));
    }

    #[test]
    fn manual_jump_restarts_the_countdown() {
        let mut c = carousel(5, 1000);
        c.tick(ms(600));
        c.jump_to(3);
        assert_eq!(c.time_until_advance(), Some(ms(1000)));

        // The pre-jump schedule would have fired here
        c.tick(ms(400));
        assert_eq!(c.current_index(), Some(3));
        c.tick(ms(599));
        assert_eq!(c.current_index(), Some(3));
        c.tick(ms(1));
        assert_eq!(c.current_index(), Some(4));
    }

    #[test]
    fn arrows_restart_the_countdown() {
        let mut c = carousel(5, 1000);
        c.tick(ms(900));
        c.advance_backward();
        assert_eq!(c.current_index(), Some(4));
        c.tick(ms(900));
        assert_eq!(c.current_index(), Some(4));
        c.tick(ms(100));
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn resume_arms_a_fresh_countdown() {
        let mut c = carousel(3, 1000);
        c.tick(ms(700));
        c.pause();
        c.pause();
        assert!(c.is_paused());
        c.resume();
        assert!(!c.is_paused());
        assert_eq!(c.time_until_advance(), Some(ms(1000)));
        c.tick(ms(700));
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn manual_navigation_works_while_paused() {
        let mut c = carousel(3, 1000);
        c.pause();
        c.advance_forward();
        assert_eq!(c.current_index(), Some(1));
        assert!(!c.is_timer_armed());
    }

    #[test]
    fn auto_play_toggle_arms_and_cancels() {
        let mut c = manual(3);
        assert!(!c.is_timer_armed());
        c.tick(ms(60_000));
        assert_eq!(c.current_index(), Some(0));

        c.set_auto_play(true);
        assert!(c.auto_play());
        assert!(c.is_timer_armed());
        c.tick(ms(5000));
        assert_eq!(c.current_index(), Some(1));

        c.set_auto_play(false);
        assert!(!c.is_timer_armed());
    }

    #[test]
    fn interval_change_rearms() {
        let mut c = carousel(3, 1000);
        c.tick(ms(800));
        c.set_interval(ms(2000)).unwrap();
        assert_eq!(c.interval(), ms(2000));
        assert_eq!(c.time_until_advance(), Some(ms(2000)));

        assert!(matches!(c.set_interval(Duration::ZERO), Err(CarouselError::ZeroInterval)));
        assert_eq!(c.interval(), ms(2000));
    }

    #[test]
    fn zero_interval_config_fails_to_mount() {
        let config = CarouselConfig::testimonials().with_interval(Duration::ZERO);
        assert!(Carousel::new(vec![1, 2], config).is_err());
    }

    #[test]
    fn listeners_see_every_move() {
        let mut c = carousel(4, 1000);
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        c.on_change(move |t| sink.borrow_mut().push((t.to, t.cause)));

        c.tick(ms(1000));
        c.jump_to(3);
        c.advance_forward();

        assert_eq!(
            *log.borrow(),
            vec![(1, Cause::Auto), (3, Cause::Manual), (0, Cause::Manual)]
        );
    }

    #[test]
    fn unmount_releases_timer_and_listeners() {
        let mut c = carousel(5, 1000);
        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        c.on_change(move |_| *seen.borrow_mut() += 1);

        c.tick(ms(500));
        assert!(c.is_timer_armed());
        c.unmount();

        assert_eq!(Rc::strong_count(&calls), 1);
        assert_eq!(*calls.borrow(), 0);
    }
}
