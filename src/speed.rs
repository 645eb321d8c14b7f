use std::time::Duration;

/// User-facing simulation speed, from 0 (slowest) to 100 (unthrottled)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const INITIAL: Self = Self(50);

    /// Step applied by a single speed up/down key press
    const INCREMENT: u8 = 5;

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn faster(self) -> Self {
        Self::new(self.0.saturating_add(Self::INCREMENT))
    }

    pub fn slower(self) -> Self {
        Self(self.0.saturating_sub(Self::INCREMENT).max(Self::MIN))
    }

    /// Time to wait between generations
    ///
    /// Falls off steeply from one second down to 10ms at speed 80, then
    /// linearly down to 1ms at speed 99.
    pub fn delay(self) -> Duration {
        let speed = self.0 as f64;
        let secs = match self.0 {
            0 => 1.0,
            1..=80 => ((80.0 - speed) / 80.0).powf(1.5) + 0.01,
            81..=99 => 0.01 * (99.0 - speed) / 19.0 + 0.001,
            _ => 0.0,
        };
        Duration::from_secs_f64(secs)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(speed: u8) -> f64 {
        Speed::new(speed).delay().as_secs_f64() * 1000.0
    }

    #[test]
    fn delay_endpoints() {
        assert_eq!(Speed::new(0).delay(), Duration::from_secs(1));
        assert_eq!(Speed::new(100).delay(), Duration::ZERO);
        assert!((millis(80) - 10.0).abs() < 1e-3);
        assert!((millis(99) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn delay_decreases_within_each_band() {
        for s in (0..80).chain(81..Speed::MAX) {
            assert!(millis(s) >= millis(s + 1), "speed {s} faster than {}", s + 1);
        }
    }

    #[test]
    fn clamps_adjustments() {
        assert_eq!(Speed::new(250).value(), 100);
        assert_eq!(Speed::new(98).faster().value(), 100);
        assert_eq!(Speed::new(3).slower().value(), 0);
        assert_eq!(Speed::default().faster().value(), 55);
    }
}
