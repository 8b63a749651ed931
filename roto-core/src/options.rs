//! Per-widget configuration.
//!
//! Options arrive as a JSON object whose keys match the classic plugin
//! (`btnPrev`, `btnNext`, `direction`, `speed`, `drift_factor`, ...). Every
//! key is optional; anything missing takes the default below.

use serde::{Deserialize, Serialize};
use crate::axis::Axis;
use crate::easing::Easing;

/// How long links inside the list stay click-inert after a mouse drag ends.
pub const LINK_RESTORE_DELAY_MS: i32 = 250;

/// Scroll orientation of a carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::Horizontal => Axis::HORIZONTAL,
            Direction::Vertical => Axis::VERTICAL,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Selector for the "previous" control, searched inside the container.
    /// `null` disables the control.
    #[serde(rename = "btnPrev")]
    pub btn_prev: Option<String>,
    /// Selector for the "next" control. `null` disables the control.
    #[serde(rename = "btnNext")]
    pub btn_next: Option<String>,
    pub direction: Direction,
    /// Duration of a button shift, ms.
    pub speed: f64,
    /// Easing for button shifts; `None` means `swing`.
    pub shift_easing: Option<Easing>,
    pub drift_easing: Easing,
    pub bounce_easing: Easing,
    /// Multiplier from pointer speed (px/ms) to drift distance (px).
    pub drift_factor: f64,
    /// Duration of inertial drift, ms.
    pub drift_duration: f64,
    /// Distance the list may be pulled beyond either bound, px.
    pub pull_amount: f64,
    /// Duration of the bounce back after an overscroll, ms.
    pub bounce_duration: f64,
    /// Sampling interval for pointer speed, ms. Only the last interval of a
    /// gesture counts toward drift.
    pub timer_interval: f64,
}

pub const DEFAULT_BTN_PREV: &str = ".prev";
pub const DEFAULT_BTN_NEXT: &str = ".next";

impl Default for Options {
    fn default() -> Self {
        Self {
            btn_prev: Some(DEFAULT_BTN_PREV.to_string()),
            btn_next: Some(DEFAULT_BTN_NEXT.to_string()),
            direction: Direction::Horizontal,
            speed: 200.0,
            shift_easing: None,
            drift_easing: Easing::EaseOutCubic,
            bounce_easing: Easing::EaseOutElastic,
            drift_factor: 500.0,
            drift_duration: 1750.0,
            pull_amount: 200.0,
            bounce_duration: 1800.0,
            timer_interval: 50.0,
        }
    }
}

impl Options {
    /// Parse options from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Options, serde_json::Error> {
        let options: Options = serde_json::from_str(json)?;
        Ok(options.sanitized())
    }

    pub fn axis(&self) -> Axis {
        self.direction.axis()
    }

    pub fn shift_easing(&self) -> Easing {
        self.shift_easing.unwrap_or(Easing::Swing)
    }

    /// Replace negative or non-finite numbers with their defaults. A zero
    /// timer interval would make every speed sample divide by zero.
    pub fn sanitized(mut self) -> Options {
        let defaults = Options::default();
        let fix = |value: &mut f64, default: f64| {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Invalid option value {}, using {}", value, default);
                *value = default;
            }
        };
        fix(&mut self.speed, defaults.speed);
        fix(&mut self.drift_factor, defaults.drift_factor);
        fix(&mut self.drift_duration, defaults.drift_duration);
        fix(&mut self.pull_amount, defaults.pull_amount);
        fix(&mut self.bounce_duration, defaults.bounce_duration);
        fix(&mut self.timer_interval, defaults.timer_interval);
        if self.timer_interval == 0.0 {
            self.timer_interval = defaults.timer_interval;
        }
        self
    }

    /// True when `btn_prev` is still the stock selector, which enables the
    /// `#{id}-prev` / `#{id}-next` lookup fallback.
    pub fn uses_default_prev(&self) -> bool {
        self.btn_prev.as_deref() == Some(DEFAULT_BTN_PREV)
    }

    pub fn uses_default_next(&self) -> bool {
        self.btn_next.as_deref() == Some(DEFAULT_BTN_NEXT)
    }
}
