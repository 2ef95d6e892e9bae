//! Scalar motion primitives
//!
//! Every animated property is a [`Channel`]: a single value driven toward a
//! target either by a damped spring or by a fixed-duration linear ramp.
//! Channels are stepped with a fixed dt and report when they have come to
//! rest.

use serde::{Deserialize, Serialize};

use crate::{lerp, saturate};

/// Damped spring parameters (unit mass)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
}

impl SpringConfig {
    pub const DEFAULT: SpringConfig = SpringConfig::new(170.0, 26.0);
    pub const ENTRANCE: SpringConfig = SpringConfig::new(100.0, 10.0);
    pub const REROLL: SpringConfig = SpringConfig::new(500.0, 30.0);
    pub const WOBBLY: SpringConfig = SpringConfig::new(180.0, 12.0);
    pub const STAMP: SpringConfig = SpringConfig::new(340.0, 10.0);

    pub const fn new(tension: f32, friction: f32) -> Self {
        Self { tension, friction }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a channel travels to its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    Spring(SpringConfig),
    /// Linear ramp over `duration` seconds
    Timed { duration: f32 },
}

/// Rest threshold for channels that live in [0, 1]
pub const UNIT_PRECISION: f32 = 0.001;

/// One animated scalar
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    value: f32,
    velocity: f32,
    origin: f32,
    target: f32,
    elapsed: f32,
    motion: Motion,
    precision: f32,
    settled: bool,
}

impl Channel {
    /// A channel resting at `value`
    pub fn at_rest(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            origin: value,
            target: value,
            elapsed: 0.0,
            motion: Motion::Spring(SpringConfig::DEFAULT),
            precision: UNIT_PRECISION,
            settled: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Start moving toward `target` from the current value
    ///
    /// Springs keep their current velocity so retargeting mid-flight is smooth.
    pub fn animate_to(&mut self, target: f32, motion: Motion) {
        self.origin = self.value;
        self.target = target;
        self.elapsed = 0.0;
        self.motion = motion;
        self.settled = false;
    }

    /// Jump straight to `value` with no motion
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.origin = value;
        self.target = value;
        self.velocity = 0.0;
        self.elapsed = 0.0;
        self.settled = true;
    }

    /// Advance by `dt` seconds; returns true once the channel is at rest
    pub fn step(&mut self, dt: f32) -> bool {
        if self.settled {
            return true;
        }

        match self.motion {
            Motion::Spring(SpringConfig { tension, friction }) => {
                // Semi-implicit Euler
                let displacement = self.value - self.target;
                let accel = -tension * displacement - friction * self.velocity;
                self.velocity += accel * dt;
                self.value += self.velocity * dt;

                let resting = (self.value - self.target).abs() < self.precision
                    && self.velocity.abs() < self.precision * 10.0;
                if resting {
                    self.snap(self.target);
                }
            }
            Motion::Timed { duration } => {
                self.elapsed += dt;
                let t = if duration > 0.0 {
                    saturate(self.elapsed / duration)
                } else {
                    1.0
                };
                let previous = self.value;
                self.value = lerp(self.origin, self.target, t);
                self.velocity = if dt > 0.0 { (self.value - previous) / dt } else { 0.0 };

                if t >= 1.0 {
                    // Hand the final velocity to whatever motion follows
                    let velocity = self.velocity;
                    self.snap(self.target);
                    self.velocity = velocity;
                }
            }
        }

        self.settled
    }
}
