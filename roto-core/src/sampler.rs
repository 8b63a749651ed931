//! Pointer speed estimation for flick gestures.
//!
//! A fixed-interval timer calls [`SpeedSampler::tick`]; only the delta across
//! the most recent complete interval is kept. Earlier movement, including a
//! slow start or a pause mid-gesture, never contributes to the release speed.

/// Speed at release: magnitude in px/ms plus the sign of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSpeed {
    pub speed: f64,
    /// `-1.0` when the last interval moved toward smaller coordinates,
    /// otherwise `1.0`.
    pub direction: f64,
}

impl PointerSpeed {
    pub fn velocity(&self) -> f64 {
        self.speed * self.direction
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedSampler {
    interval_ms: f64,
    current: f64,
    interval_start: f64,
    last_interval: (f64, f64),
}

impl SpeedSampler {
    /// Begin sampling at the gesture's starting coordinate.
    pub fn new(interval_ms: f64, coord: f64) -> Self {
        Self {
            interval_ms,
            current: coord,
            interval_start: coord,
            last_interval: (coord, coord),
        }
    }

    /// Latest pointer coordinate along the axis.
    pub fn record(&mut self, coord: f64) {
        self.current = coord;
    }

    /// Close the current interval and open the next one.
    pub fn tick(&mut self) {
        self.last_interval = (self.interval_start, self.current);
        self.interval_start = self.current;
    }

    pub fn speed(&self) -> PointerSpeed {
        let (start, end) = self.last_interval;
        let translation = end - start;
        let speed = if self.interval_ms > 0.0 {
            translation.abs() / self.interval_ms
        } else {
            0.0
        };
        PointerSpeed {
            speed,
            direction: if translation < 0.0 { -1.0 } else { 1.0 },
        }
    }
}
