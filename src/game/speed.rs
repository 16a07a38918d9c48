use crate::consts;
use std::time::Duration;

/// The linear speed ramp: the time between ticks starts at `initial` and
/// shrinks by `step` each time the snake eats, but never below `floor`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SpeedRamp {
    pub(crate) initial: Duration,
    pub(crate) step: Duration,
    pub(crate) floor: Duration,
}

impl Default for SpeedRamp {
    fn default() -> SpeedRamp {
        SpeedRamp {
            initial: consts::INITIAL_TICK_PERIOD,
            step: consts::TICK_PERIOD_STEP,
            floor: consts::MIN_TICK_PERIOD,
        }
    }
}

/// The current tick interval of a game session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Speed {
    ramp: SpeedRamp,
    interval: Duration,
}

impl Speed {
    pub(crate) fn new(ramp: SpeedRamp) -> Speed {
        Speed {
            ramp,
            interval: ramp.initial,
        }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Shorten the interval by one step, clamped to the floor.  An interval
    /// that somehow started out below the floor is left alone.
    pub(crate) fn speed_up(&mut self) {
        let next = self
            .interval
            .saturating_sub(self.ramp.step)
            .max(self.ramp.floor);
        self.interval = self.interval.min(next);
    }

    pub(crate) fn reset(&mut self) {
        self.interval = self.ramp.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_down_to_floor() {
        let mut speed = Speed::new(SpeedRamp::default());
        assert_eq!(speed.interval(), Duration::from_millis(200));
        speed.speed_up();
        assert_eq!(speed.interval(), Duration::from_millis(195));
        let mut prev = speed.interval();
        for _ in 0..100 {
            speed.speed_up();
            assert!(speed.interval() <= prev);
            prev = speed.interval();
        }
        assert_eq!(speed.interval(), Duration::from_millis(50));
        speed.reset();
        assert_eq!(speed.interval(), Duration::from_millis(200));
    }

    #[test]
    fn step_overshooting_floor() {
        let mut speed = Speed::new(SpeedRamp {
            initial: Duration::from_millis(100),
            step: Duration::from_millis(30),
            floor: Duration::from_millis(50),
        });
        speed.speed_up();
        assert_eq!(speed.interval(), Duration::from_millis(70));
        speed.speed_up();
        assert_eq!(speed.interval(), Duration::from_millis(50));
        speed.speed_up();
        assert_eq!(speed.interval(), Duration::from_millis(50));
    }

    #[test]
    fn initial_below_floor() {
        let mut speed = Speed::new(SpeedRamp {
            initial: Duration::from_millis(40),
            step: Duration::from_millis(5),
            floor: Duration::from_millis(50),
        });
        speed.speed_up();
        assert_eq!(speed.interval(), Duration::from_millis(40));
    }
}
