//! # Reveal Engine
//!
//! Decides when the punchline of the card on screen may be shown.
//!
//! Two channels feed it and either one can reveal on its own.
//! - Scratch: pointer drags mark cells of an N x N grid laid over the punchline. Once the scratched
//!   share of cells reaches the threshold, the card flips.
//! - Shake: motion samples strong enough to count, spaced by the cooldown, add up to the required shakes.
//!
//! Revealing is one way. The only road back to hidden is [`RevealEngine::reset`], which the shell calls
//! whenever a different joke is shown.
//!
//! The shake counter goes back to zero once it hits the required count. The card stays revealed anyway,
//! and a fresh count means shaking again after a reset starts from nothing.
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

pub mod motion;
pub mod scratch;

use crate::config::RevealConfig;
use motion::{Acceleration, MotionCapability, MotionChannel, Shake, channel_for};
use scratch::ScratchGrid;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevealState {
    pub scratch_progress: f64,
    pub shake_count: u32,
    pub revealed: bool,
}

pub struct RevealEngine {
    config: RevealConfig,
    grid: ScratchGrid,
    motion: Box<dyn MotionChannel>,
    scratching: bool,
    shake_count: u32,
    revealed: bool,
}

impl RevealEngine {
    pub fn new(config: RevealConfig, capability: MotionCapability) -> Self {
        let grid = ScratchGrid::new(config.grid_size.max(1));
        let motion = channel_for(capability, &config);

        Self {
            config,
            grid,
            motion,
            scratching: false,
            shake_count: 0,
            revealed: false,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn start_scratch(&mut self) {
        self.scratching = true;
    }

    pub fn end_scratch(&mut self) {
        self.scratching = false;
    }

    pub fn is_scratching(&self) -> bool {
        self.scratching
    }

    /// Marks the cell under the pointer while a drag is active. Returns whether a new cell was marked.
    pub fn record_pointer_move(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        if !self.scratching {
            return false;
        }

        let Some((column, row)) = self.grid.cell_at(x, y, width, height) else {
            return false;
        };

        if !self.grid.mark(column, row) {
            return false;
        }

        if !self.revealed && self.scratch_progress() >= self.config.scratch_threshold {
            debug!("Scratched {:.0}%, revealing", self.scratch_progress());
            self.revealed = true;
        }

        true
    }

    /// Feeds a motion sample. `None` when motion sensing is unavailable or the sample was gated.
    pub fn record_motion_sample(
        &mut self,
        acceleration: Acceleration,
        now: Duration,
    ) -> Option<Shake> {
        let shake = self.motion.sample(acceleration, now)?;

        if shake.counted {
            self.shake_count += 1;
            debug!("Shake {}/{}", self.shake_count, self.config.required_shakes);

            if self.shake_count >= self.config.required_shakes {
                if !self.revealed {
                    debug!("Shaken {} times, revealing", self.shake_count);
                }

                self.revealed = true;
                self.shake_count = 0;
            }
        }

        Some(shake)
    }

    pub fn scratch_progress(&self) -> f64 {
        self.grid.coverage()
    }

    pub fn shake_count(&self) -> u32 {
        self.shake_count
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The "show punchline" button.
    pub fn force_reveal(&mut self) {
        self.revealed = true;
    }

    /// Progress toward revealing for the progress bar, in `[0, 100]`.
    pub fn combined_progress(&self) -> f64 {
        if self.revealed {
            return 100.0;
        }

        let scratch = self.scratch_progress() / self.config.scratch_threshold;
        let shakes = f64::from(self.shake_count) / f64::from(self.config.required_shakes);

        (scratch.max(shakes) * 100.0).clamp(0.0, 100.0)
    }

    pub fn state(&self) -> RevealState {
        RevealState {
            scratch_progress: self.scratch_progress(),
            shake_count: self.shake_count,
            revealed: self.revealed,
        }
    }

    pub fn reset(&mut self) {
        self.grid.clear();
        self.motion.reset();
        self.scratching = false;
        self.shake_count = 0;
        self.revealed = false;
    }
}
