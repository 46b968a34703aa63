use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::info;

use crate::error::ClientError;

/// Largest accepted `grid_size`, a million cells.
pub const MAX_GRID_SIZE: usize = 1000;

/// Knobs for the reveal engine. Every threshold is configuration, the card page
/// shipped both 10x10 at 70% and 5x5 at 50%.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Cells per side of the scratch surface.
    pub grid_size: usize,
    /// Percent of cells that must be scratched.
    pub scratch_threshold: f64,
    /// Counted shakes needed to reveal.
    pub required_shakes: u32,
    /// Impulse a motion sample must exceed to count as a shake.
    pub impulse_threshold: f64,
    /// Minimum spacing between motion samples that are looked at at all.
    pub sample_gate: Duration,
    /// Minimum spacing between two counted shakes.
    pub shake_cooldown: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            scratch_threshold: 70.0,
            required_shakes: 5,
            impulse_threshold: 25.0,
            sample_gate: Duration::from_millis(250),
            shake_cooldown: Duration::from_millis(500),
        }
    }
}

impl RevealConfig {
    /// The smaller card variant.
    pub fn compact() -> Self {
        Self {
            grid_size: 5,
            scratch_threshold: 50.0,
            ..Self::default()
        }
    }

    pub fn load() -> Result<Self, ClientError> {
        let defaults = Self::default();

        let config = Self {
            grid_size: try_load("REVEAL_GRID_SIZE", defaults.grid_size)?,
            scratch_threshold: try_load("REVEAL_SCRATCH_THRESHOLD", defaults.scratch_threshold)?,
            required_shakes: try_load("REVEAL_REQUIRED_SHAKES", defaults.required_shakes)?,
            impulse_threshold: try_load("REVEAL_IMPULSE_THRESHOLD", defaults.impulse_threshold)?,
            sample_gate: Duration::from_millis(try_load(
                "REVEAL_SAMPLE_GATE_MS",
                defaults.sample_gate.as_millis() as u64,
            )?),
            shake_cooldown: Duration::from_millis(try_load(
                "REVEAL_SHAKE_COOLDOWN_MS",
                defaults.shake_cooldown.as_millis() as u64,
            )?),
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.grid_size == 0 {
            return Err(invalid("REVEAL_GRID_SIZE", "grid must have at least one cell"));
        }

        if self.grid_size > MAX_GRID_SIZE {
            return Err(invalid("REVEAL_GRID_SIZE", "grid is larger than 1000 cells per side"));
        }

        if !(self.scratch_threshold > 0.0 && self.scratch_threshold <= 100.0) {
            return Err(invalid(
                "REVEAL_SCRATCH_THRESHOLD",
                "threshold must be within (0, 100]",
            ));
        }

        if self.required_shakes == 0 {
            return Err(invalid("REVEAL_REQUIRED_SHAKES", "at least one shake is required"));
        }

        if !self.impulse_threshold.is_finite() || self.impulse_threshold < 0.0 {
            return Err(invalid(
                "REVEAL_IMPULSE_THRESHOLD",
                "threshold must be a non-negative number",
            ));
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> ClientError {
    ClientError::Config {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn try_load<T>(key: &str, default: T) -> Result<T, ClientError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(value) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    value.trim().parse().map_err(|e: T::Err| invalid(key, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RevealConfig::default().validate().is_ok());
        assert!(RevealConfig::compact().validate().is_ok());
    }

    #[test]
    fn test_missing_key_uses_default() {
        let size: usize = try_load("REVEAL_TEST_UNSET_KEY", 7).unwrap();

        assert_eq!(size, 7);
    }

    #[test]
    fn test_rejects_bad_thresholds() {
        let zero_grid = RevealConfig {
            grid_size: 0,
            ..RevealConfig::default()
        };
        assert!(matches!(
            zero_grid.validate(),
            Err(ClientError::Config { key, .. }) if key == "REVEAL_GRID_SIZE"
        ));

        let huge_grid = RevealConfig {
            grid_size: usize::MAX,
            ..RevealConfig::default()
        };
        assert!(matches!(
            huge_grid.validate(),
            Err(ClientError::Config { key, .. }) if key == "REVEAL_GRID_SIZE"
        ));

        let largest = RevealConfig {
            grid_size: MAX_GRID_SIZE,
            ..RevealConfig::default()
        };
        assert!(largest.validate().is_ok());

        let over = RevealConfig {
            scratch_threshold: 120.0,
            ..RevealConfig::default()
        };
        assert!(over.validate().is_err());

        let no_shakes = RevealConfig {
            required_shakes: 0,
            ..RevealConfig::default()
        };
        assert!(no_shakes.validate().is_err());
    }
}
