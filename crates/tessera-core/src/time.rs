//! Frame timing for the viewer loop
//!
//! Tracks delta time per frame and drives fixed-period events such as model swaps.

use serde::{Deserialize, Serialize};

/// Configuration for frame timing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Multiplier applied to the raw frame delta
    pub time_scale: f32,
    /// Upper bound on a single frame delta, in seconds
    pub max_delta_time: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
        }
    }
}

/// Per-frame time tracking
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Configuration
    pub config: ClockConfig,
    /// Time since the clock started in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether time is frozen
    pub paused: bool,
}

impl FrameClock {
    /// Create a new clock with custom config
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance the clock by the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = raw_delta.clamp(0.0, self.config.max_delta_time) * self.config.time_scale;
        self.total_time += self.delta_time as f64;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }
}

/// Fires once every `period` seconds of accumulated time.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: f32,
    accumulator: f32,
}

impl Interval {
    /// Create an interval; a non-positive period never fires.
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulator: 0.0,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Accumulate `delta` seconds and report whether the period elapsed.
    ///
    /// At most one firing is reported per call; surplus time carries over.
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.period <= 0.0 {
            return false;
        }

        self.accumulator += delta.max(0.0);
        if self.accumulator >= self.period {
            self.accumulator -= self.period;
            // Drop whole extra periods so a long stall does not fire repeatedly.
            self.accumulator %= self.period;
            true
        } else {
            false
        }
    }

    /// Restart the period from zero
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
