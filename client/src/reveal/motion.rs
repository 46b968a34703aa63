//! Shake detection from device motion samples.
//!
//! A sample is the acceleration including gravity, the same reading a browser hands out with
//! `devicemotion`. The impulse between two samples is the change in the summed axes divided by the
//! elapsed milliseconds, scaled by [`IMPULSE_SCALE`].
//!
//! Devices without a motion sensor get [`NoMotion`], which swallows samples. The engine never
//! checks for the capability again after picking its channel.
use std::time::Duration;

use tracing::debug;

use crate::config::RevealConfig;

pub const IMPULSE_SCALE: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Acceleration {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn combined(&self) -> f64 {
        self.x + self.y + self.z
    }
}

/// Result of feature detection, done once at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionCapability {
    Available,
    Unavailable,
}

/// A motion sample that made it past the sampling gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shake {
    pub impulse: f64,
    /// Whether the sample was strong enough and outside the cooldown.
    pub counted: bool,
}

pub trait MotionChannel: Send {
    /// Feeds one sample taken `now` after the engine started listening.
    fn sample(&mut self, acceleration: Acceleration, now: Duration) -> Option<Shake>;

    fn reset(&mut self);
}

pub fn channel_for(capability: MotionCapability, config: &RevealConfig) -> Box<dyn MotionChannel> {
    match capability {
        MotionCapability::Available => Box::new(ShakeDetector::new(config)),
        MotionCapability::Unavailable => {
            debug!("Motion sensing unavailable, shake channel disabled");
            Box::new(NoMotion)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShakeDetector {
    impulse_threshold: f64,
    sample_gate: Duration,
    shake_cooldown: Duration,
    last: Acceleration,
    last_update: Duration,
    last_shake: Option<Duration>,
}

impl ShakeDetector {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            impulse_threshold: config.impulse_threshold,
            sample_gate: config.sample_gate,
            shake_cooldown: config.shake_cooldown,
            last: Acceleration::default(),
            last_update: Duration::ZERO,
            last_shake: None,
        }
    }
}

impl MotionChannel for ShakeDetector {
    fn sample(&mut self, acceleration: Acceleration, now: Duration) -> Option<Shake> {
        let elapsed = now.checked_sub(self.last_update)?;

        if elapsed.is_zero() || elapsed < self.sample_gate {
            return None;
        }

        let impulse = (acceleration.combined() - self.last.combined()).abs()
            / (elapsed.as_secs_f64() * 1000.0)
            * IMPULSE_SCALE;

        self.last = acceleration;
        self.last_update = now;

        let cooled = self
            .last_shake
            .is_none_or(|last_shake| now.saturating_sub(last_shake) >= self.shake_cooldown);
        let counted = impulse.is_finite() && impulse > self.impulse_threshold && cooled;

        if counted {
            self.last_shake = Some(now);
        }

        Some(Shake { impulse, counted })
    }

    fn reset(&mut self) {
        self.last_shake = None;
    }
}

pub struct NoMotion;

impl MotionChannel for NoMotion {
    fn sample(&mut self, _acceleration: Acceleration, _now: Duration) -> Option<Shake> {
        None
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn detector() -> ShakeDetector {
        ShakeDetector::new(&RevealConfig::default())
    }

    #[test]
    fn test_impulse_from_zero_baseline() {
        let mut detector = detector();

        let shake = detector.sample(Acceleration::new(1.0, 1.0, 1.0), ms(1000)).unwrap();

        assert_eq!(shake.impulse, 3.0 / 1000.0 * IMPULSE_SCALE);
        assert!(shake.counted);
    }

    #[test]
    fn test_gated_samples_are_ignored() {
        let mut detector = detector();

        assert!(detector.sample(Acceleration::new(5.0, 0.0, 0.0), ms(500)).is_some());
        assert!(detector.sample(Acceleration::new(-5.0, 0.0, 0.0), ms(600)).is_none());

        // baseline still the 500ms sample
        let shake = detector.sample(Acceleration::new(5.0, 0.0, 0.0), ms(1000)).unwrap();
        assert_eq!(shake.impulse, 0.0);
    }

    #[test]
    fn test_weak_samples_not_counted() {
        let mut detector = detector();

        let shake = detector.sample(Acceleration::new(0.001, 0.0, 0.0), ms(1000)).unwrap();

        assert!(!shake.counted);
    }

    #[test]
    fn test_cooldown_blocks_second_shake() {
        let mut detector = detector();

        assert!(detector.sample(Acceleration::new(5.0, 5.0, 5.0), ms(500)).unwrap().counted);

        let inside = detector.sample(Acceleration::default(), ms(750)).unwrap();
        assert!(inside.impulse > 25.0);
        assert!(!inside.counted);

        assert!(detector.sample(Acceleration::new(5.0, 5.0, 5.0), ms(1000)).unwrap().counted);
    }

    #[test]
    fn test_time_going_backwards() {
        let mut detector = detector();

        assert!(detector.sample(Acceleration::new(5.0, 5.0, 5.0), ms(1000)).is_some());
        assert!(detector.sample(Acceleration::default(), ms(400)).is_none());
    }

    #[test]
    fn test_no_motion_channel() {
        let mut channel = channel_for(MotionCapability::Unavailable, &RevealConfig::default());

        assert!(channel.sample(Acceleration::new(50.0, 50.0, 50.0), ms(1000)).is_none());
    }
}
