use crate::easing::Easing;

/// A single eased transition of the list offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self { from, to, start_ms, duration_ms, easing }
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }

    /// Offset at `now_ms`. Returns `to` exactly once finished.
    pub fn sample(&self, now_ms: f64) -> f64 {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let fraction = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.transform(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_midpoint() {
        let t = Tween::new(0.0, -100.0, 1000.0, 200.0, Easing::Linear);
        assert_eq!(t.sample(1000.0), 0.0);
        assert_eq!(t.sample(1100.0), -50.0);
        assert!(!t.is_finished(1199.0));
        assert!(t.is_finished(1200.0));
        assert_eq!(t.sample(5000.0), -100.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let t = Tween::new(10.0, 20.0, 0.0, 0.0, Easing::Swing);
        assert!(t.is_finished(0.0));
        assert_eq!(t.sample(0.0), 20.0);
    }

    #[test]
    fn test_sample_before_start_is_origin() {
        let t = Tween::new(5.0, 50.0, 100.0, 100.0, Easing::EaseOutCubic);
        assert_eq!(t.sample(0.0), 5.0);
    }
}
