//! Gesture and animation state machine for one carousel.
//!
//! ```text
//! Idle ─drag_start─▶ Dragging ─drag_end─▶ BouncingBack ─▶ Idle
//!                                    └──▶ Drifting ─────▶ Idle
//!                                              └(past max)▶ BouncingBack
//! Idle ─shift─▶ Shifting ─▶ Idle
//! ```
//!
//! The controller never touches the page. Callers feed it pointer coordinates,
//! timer ticks and frame timestamps, and write [`Controller::rendered_offset`]
//! back to the list. At most one tween is ever in flight; `drag_start` cancels
//! it from any phase, and `shift` is dropped unless the controller is idle.

use crate::axis::Axis;
use crate::geometry::{ButtonState, Geometry, Measurements, Step};
use crate::options::Options;
use crate::sampler::{PointerSpeed, SpeedSampler};
use crate::tween::Tween;

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Dragging { start_coord: f64 },
    Shifting(Tween),
    Drifting(Tween),
    BouncingBack(Tween),
}

impl Phase {
    pub fn tween(&self) -> Option<&Tween> {
        match self {
            Phase::Shifting(t) | Phase::Drifting(t) | Phase::BouncingBack(t) => Some(t),
            Phase::Idle | Phase::Dragging { .. } => None,
        }
    }
}

/// Result of advancing an animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub offset: f64,
    /// Another frame is needed.
    pub animating: bool,
}

pub struct Controller {
    options: Options,
    axis: Axis,
    geometry: Geometry,
    phase: Phase,
    sampler: Option<SpeedSampler>,
    /// Offset currently shown on the page; differs from the committed
    /// offset while dragging or animating.
    rendered: f64,
}

impl Controller {
    /// Build a controller for freshly measured content. Options are
    /// sanitized here as well, since callers may construct them directly.
    pub fn new(options: Options, measurements: &Measurements) -> Self {
        let options = options.sanitized();
        let axis = options.axis();
        let geometry = Geometry::measure(&axis, measurements);
        let rendered = geometry.current_offset;
        log::debug!(
            "Measured carousel: container {} content {} min offset {}",
            geometry.container_measure,
            geometry.content_measure,
            geometry.min_offset
        );
        Self {
            options,
            axis,
            geometry,
            phase: Phase::Idle,
            sampler: None,
            rendered,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn rendered_offset(&self) -> f64 {
        self.rendered
    }

    pub fn current_offset(&self) -> f64 {
        self.geometry.current_offset
    }

    /// Content fits the container; the widget takes no input.
    pub fn is_static(&self) -> bool {
        self.geometry.fits()
    }

    pub fn is_animating(&self) -> bool {
        self.phase.tween().is_some()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn buttons(&self) -> ButtonState {
        self.geometry.buttons()
    }

    /// Re-read extents after a resize. An offset the new bounds no longer
    /// allow is clamped, as is the target of a running animation; a drag in
    /// progress is settled by `drag_end`. Returns true when the offset to
    /// draw moved. Repeated calls with unchanged geometry are no-ops.
    pub fn remeasure(&mut self, measurements: &Measurements) -> bool {
        self.geometry.remeasure(&self.axis, measurements);
        match &mut self.phase {
            Phase::Idle => {
                let clamped = self.geometry.clamp(self.geometry.current_offset);
                if clamped == self.geometry.current_offset {
                    return false;
                }
                log::debug!("Resize moved offset {} to {}", self.geometry.current_offset, clamped);
                self.geometry.current_offset = clamped;
                self.rendered = clamped;
                true
            }
            Phase::Shifting(t) | Phase::Drifting(t) | Phase::BouncingBack(t) => {
                t.to = self.geometry.clamp(t.to);
                false
            }
            Phase::Dragging { .. } => false,
        }
    }

    /// Step one container-width toward `step`. Returns false when dropped
    /// because another gesture or animation owns the list.
    pub fn shift(&mut self, step: Step, now_ms: f64) -> bool {
        if self.is_static() {
            return false;
        }
        if self.phase != Phase::Idle {
            log::debug!("Shift {:?} ignored while {:?}", step, self.phase);
            return false;
        }
        let target = self.geometry.shift_target(step);
        self.phase = Phase::Shifting(Tween::new(
            self.rendered,
            target,
            now_ms,
            self.options.speed,
            self.options.shift_easing(),
        ));
        true
    }

    /// Pointer went down at `coord`. Any running animation stops where it
    /// was last drawn.
    pub fn drag_start(&mut self, coord: f64) {
        if self.is_static() {
            return;
        }
        if self.is_animating() {
            log::debug!("Drag cancels {:?}", self.phase);
        }
        self.geometry.current_offset = self.rendered;
        self.phase = Phase::Dragging { start_coord: coord };
        self.sampler = Some(SpeedSampler::new(self.options.timer_interval, coord));
    }

    /// Pointer moved to `coord`; returns the offset to draw. The list tracks
    /// the pointer 1:1 and may overscroll by up to `pull_amount`.
    pub fn drag_move(&mut self, coord: f64) -> f64 {
        let Phase::Dragging { start_coord } = self.phase else {
            return self.rendered;
        };
        if let Some(sampler) = self.sampler.as_mut() {
            sampler.record(coord);
        }
        let moved = (coord - start_coord + self.geometry.current_offset).ceil();
        self.rendered = self.geometry.clamp_drag(moved, self.options.pull_amount);
        self.rendered
    }

    /// Fixed-interval timer tick during a drag.
    pub fn sample_tick(&mut self) {
        if let Some(sampler) = self.sampler.as_mut() {
            sampler.tick();
        }
    }

    /// Pointer released: bounce back if overscrolled, otherwise drift.
    pub fn drag_end(&mut self, now_ms: f64) {
        if !self.is_dragging() {
            return;
        }
        let speed = self
            .sampler
            .take()
            .map(|s| s.speed())
            .unwrap_or(PointerSpeed { speed: 0.0, direction: 1.0 });
        self.geometry.current_offset = self.rendered;
        self.phase = Phase::Idle;

        if self.geometry.is_out_of_bounds(self.rendered) {
            self.bounce_back(self.rendered < self.geometry.min_offset, now_ms);
        } else if speed.speed == 0.0 {
            log::debug!("Released at rest, offset {}", self.rendered);
        } else {
            let distance = speed.velocity() * self.options.drift_factor;
            let target = self.geometry.clamp(self.geometry.current_offset + distance);
            self.phase = Phase::Drifting(Tween::new(
                self.rendered,
                target,
                now_ms,
                self.options.drift_duration,
                self.options.drift_easing,
            ));
        }
    }

    fn bounce_back(&mut self, past_min: bool, now_ms: f64) {
        let end = if past_min {
            self.geometry.min_offset
        } else {
            self.geometry.max_offset
        };
        self.phase = Phase::BouncingBack(Tween::new(
            self.rendered,
            end,
            now_ms,
            self.options.bounce_duration,
            self.options.bounce_easing,
        ));
    }

    /// Advance the running animation to `now_ms`. Completion commits the
    /// offset and may chain a bounce after a drift.
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        let Some(tween) = self.phase.tween().copied() else {
            return Frame { offset: self.rendered, animating: false };
        };
        self.rendered = tween.sample(now_ms);
        if tween.is_finished(now_ms) {
            self.complete(now_ms);
        }
        Frame { offset: self.rendered, animating: self.is_animating() }
    }

    fn complete(&mut self, now_ms: f64) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Drifting(_) if self.rendered > self.geometry.max_offset => {
                self.bounce_back(false, now_ms);
            }
            Phase::Shifting(t) | Phase::BouncingBack(t) => {
                self.geometry.current_offset = t.to;
            }
            _ => {
                self.geometry.current_offset = self.rendered;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ItemBox;
    use crate::options::Direction;

    const FRAME_MS: f64 = 16.0;

    fn row(container: f64, widths: &[f64]) -> Measurements {
        let mut position = 0.0;
        let items = widths
            .iter()
            .map(|&w| {
                let item = ItemBox { position, outer_extent: w };
                position += w;
                item
            })
            .collect();
        Measurements { container, items }
    }

    /// Step frames until the controller settles; returns the final timestamp.
    fn settle(c: &mut Controller, mut now: f64) -> f64 {
        for _ in 0..10_000 {
            if !c.frame(now).animating {
                return now;
            }
            now += FRAME_MS;
        }
        panic!("animation never settled");
    }

    fn assert_in_bounds(c: &Controller) {
        let g = c.geometry();
        assert!(
            g.min_offset <= g.current_offset && g.current_offset <= g.max_offset,
            "offset {} outside [{}, {}]",
            g.current_offset,
            g.min_offset,
            g.max_offset
        );
        assert_eq!(c.rendered_offset(), g.current_offset);
    }

    #[test]
    fn test_next_button_reaches_min_offset() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[200.0, 200.0]));
        assert_eq!(c.buttons(), ButtonState { prev: false, next: true });

        assert!(c.shift(Step::Next, 0.0));
        assert!(matches!(c.phase(), Phase::Shifting(_)));
        settle(&mut c, 0.0);

        assert_eq!(c.current_offset(), -100.0);
        assert_eq!(c.phase(), &Phase::Idle);
        assert_eq!(c.buttons(), ButtonState { prev: true, next: false });
        assert_in_bounds(&c);

        assert!(c.shift(Step::Prev, 1000.0));
        settle(&mut c, 1000.0);
        assert_eq!(c.current_offset(), 0.0);
        assert_eq!(c.buttons(), ButtonState { prev: false, next: true });
    }

    #[test]
    fn test_shift_is_dropped_while_animating() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0; 10]));
        assert!(c.shift(Step::Next, 0.0));
        assert!(!c.shift(Step::Next, 50.0));
        settle(&mut c, 50.0);
        assert_eq!(c.current_offset(), -300.0);
    }

    #[test]
    fn test_shift_is_dropped_while_dragging() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0; 10]));
        c.drag_start(500.0);
        assert!(!c.shift(Step::Next, 0.0));
    }

    #[test]
    fn test_pull_past_max_then_bounce() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[200.0, 200.0]));
        c.drag_start(100.0);
        assert_eq!(c.drag_move(150.0), 50.0);
        assert_eq!(c.drag_move(900.0), 200.0);
        assert_eq!(c.drag_move(150.0), 50.0);
        c.sample_tick();

        c.drag_end(0.0);
        assert!(matches!(c.phase(), Phase::BouncingBack(t) if t.to == 0.0));
        settle(&mut c, 0.0);
        assert_eq!(c.current_offset(), 0.0);
        assert_in_bounds(&c);
    }

    #[test]
    fn test_pull_past_min_bounces_to_min() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[200.0, 200.0]));
        c.drag_start(500.0);
        assert_eq!(c.drag_move(320.0), -180.0);
        c.drag_end(0.0);
        assert!(matches!(c.phase(), Phase::BouncingBack(t) if t.to == -100.0));
        settle(&mut c, 0.0);
        assert_eq!(c.current_offset(), -100.0);
    }

    #[test]
    fn test_release_at_rest_does_not_drift() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0; 10]));
        c.drag_start(500.0);
        c.drag_move(400.0);
        c.sample_tick();
        c.sample_tick();
        c.drag_end(0.0);
        assert_eq!(c.phase(), &Phase::Idle);
        assert_eq!(c.current_offset(), -100.0);
        assert_eq!(c.buttons(), ButtonState { prev: true, next: true });
    }

    #[test]
    fn test_flick_drifts_and_clamps() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0; 10]));
        c.drag_start(500.0);
        c.drag_move(400.0);
        c.sample_tick();
        c.drag_end(0.0);
        // 100px in 50ms → 2 px/ms × 500 = 1000px, limited by min offset.
        let Phase::Drifting(tween) = c.phase().clone() else {
            panic!("expected drift, got {:?}", c.phase());
        };
        assert_eq!(tween.to, -700.0);
        assert_eq!(tween.duration_ms, 1750.0);

        let end = settle(&mut c, 0.0);
        assert!(end >= 1750.0);
        assert_eq!(c.current_offset(), -700.0);
        assert_eq!(c.buttons(), ButtonState { prev: true, next: false });
    }

    #[test]
    fn test_small_flick_drifts_short() {
        let options = Options { drift_factor: 10.0, ..Options::default() };
        let mut c = Controller::new(options, &row(300.0, &[100.0; 10]));
        c.drag_start(500.0);
        c.drag_move(490.0);
        c.sample_tick();
        c.drag_end(0.0);
        // 10px / 50ms = 0.2 px/ms × 10 = 2px further along.
        settle(&mut c, 0.0);
        assert_eq!(c.current_offset(), -12.0);
    }

    #[test]
    fn test_drag_cancels_shift() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0; 10]));
        c.shift(Step::Next, 0.0);
        let mid = c.frame(100.0).offset;
        assert!(mid < 0.0 && mid > -300.0);

        c.drag_start(0.0);
        assert!(c.is_dragging());
        assert_eq!(c.current_offset(), mid);
        assert_eq!(c.frame(150.0), Frame { offset: mid, animating: false });

        c.drag_end(200.0);
        assert_eq!(c.phase(), &Phase::Idle);
        assert!(c.shift(Step::Next, 300.0));
    }

    #[test]
    fn test_moves_outside_a_drag_are_ignored() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0; 10]));
        assert_eq!(c.drag_move(999.0), 0.0);
        c.drag_end(0.0);
        assert_eq!(c.phase(), &Phase::Idle);
    }

    #[test]
    fn test_static_when_content_fits() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0, 150.0]));
        assert!(c.is_static());
        assert!(!c.shift(Step::Next, 0.0));
        c.drag_start(0.0);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_remeasure_is_idempotent() {
        let m = row(300.0, &[100.0; 10]);
        let mut c = Controller::new(Options::default(), &m);
        c.shift(Step::Next, 0.0);
        settle(&mut c, 0.0);
        let offset = c.current_offset();
        let buttons = c.buttons();
        for _ in 0..3 {
            c.remeasure(&m);
            assert_eq!(c.current_offset(), offset);
            assert_eq!(c.buttons(), buttons);
        }
    }

    #[test]
    fn test_remeasure_wider_container() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0; 10]));
        c.remeasure(&row(600.0, &[100.0; 10]));
        assert_eq!(c.geometry().min_offset, -400.0);
    }

    #[test]
    fn test_growing_container_pulls_offset_back() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[200.0, 200.0]));
        c.shift(Step::Next, 0.0);
        settle(&mut c, 0.0);
        assert_eq!(c.current_offset(), -100.0);

        assert!(c.remeasure(&row(500.0, &[200.0, 200.0])));
        assert!(c.is_static());
        assert_eq!(c.geometry().min_offset, 0.0);
        assert_eq!(c.current_offset(), 0.0);
        assert_eq!(c.buttons(), ButtonState { prev: false, next: false });
        assert_in_bounds(&c);
        assert!(!c.remeasure(&row(500.0, &[200.0, 200.0])));
    }

    #[test]
    fn test_resize_during_shift_retargets() {
        let mut c = Controller::new(Options::default(), &row(300.0, &[100.0; 10]));
        c.shift(Step::Next, 0.0);
        c.frame(50.0);
        assert!(!c.remeasure(&row(900.0, &[100.0; 10])));
        settle(&mut c, 50.0);
        assert_eq!(c.current_offset(), -100.0);
        assert_in_bounds(&c);
    }

    #[test]
    fn test_options_are_sanitized() {
        let options = Options { pull_amount: -300.0, timer_interval: f64::NAN, ..Options::default() };
        let mut c = Controller::new(options, &row(300.0, &[200.0, 200.0]));
        assert_eq!(c.options().pull_amount, 200.0);
        assert_eq!(c.options().timer_interval, 50.0);

        c.drag_start(0.0);
        assert_eq!(c.drag_move(10.0), 10.0);
        assert_eq!(c.drag_move(900.0), 200.0);
        c.drag_end(0.0);
        settle(&mut c, 0.0);
        assert_in_bounds(&c);
    }

    #[test]
    fn test_vertical_carousel() {
        let options = Options { direction: Direction::Vertical, ..Options::default() };
        let items = (0..6)
            .map(|i| ItemBox { position: i as f64 * 80.0, outer_extent: 80.0 })
            .collect();
        let mut c = Controller::new(options, &Measurements { container: 200.0, items });
        assert_eq!(c.geometry().content_measure, 480.0);
        assert_eq!(c.geometry().min_offset, -280.0);
        c.shift(Step::Next, 0.0);
        settle(&mut c, 0.0);
        assert_eq!(c.current_offset(), -160.0);
    }

    #[test]
    fn test_offset_in_bounds_after_every_gesture() {
        // Deterministic pseudo-random drags over both orientations.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move |range: f64| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed % 10_000) as f64 / 10_000.0 * range
        };
        for direction in [Direction::Horizontal, Direction::Vertical] {
            let options = Options { direction, ..Options::default() };
            let items: Vec<ItemBox> = (0..8)
                .map(|i| ItemBox { position: i as f64 * 90.0, outer_extent: 90.0 })
                .collect();
            let mut c = Controller::new(options, &Measurements { container: 250.0, items });
            let mut now = 0.0;
            for _ in 0..200 {
                let start = next(1000.0);
                c.drag_start(start);
                let mut coord = start;
                for _ in 0..(next(6.0) as usize + 1) {
                    coord += next(600.0) - 300.0;
                    c.drag_move(coord);
                    c.sample_tick();
                }
                c.drag_end(now);
                now = settle(&mut c, now) + FRAME_MS;
                assert_in_bounds(&c);

                if next(1.0) < 0.5 {
                    let step = if next(1.0) < 0.5 { Step::Prev } else { Step::Next };
                    c.shift(step, now);
                    now = settle(&mut c, now) + FRAME_MS;
                    assert_in_bounds(&c);
                }
            }
        }
    }
}
