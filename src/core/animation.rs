use std::f32::consts::TAU;

use crate::error::{Error, Result};

pub const DEFAULT_ROTATION_STEP: f32 = 0.005;
pub const DEFAULT_PULSE_RATE: f32 = 0.01;
pub const DEFAULT_PULSE_AMPLITUDE: f32 = 0.25;

/// Fixed per-frame animation rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Radians added to the rotation angle every frame
    pub rotation_step: f32,
    /// Multiplier of the rotation step; the pulsation phase advances by
    /// `rotation_step * pulse_rate` per frame
    pub pulse_rate: f32,
    /// Scale oscillates in `[1 - amplitude, 1 + amplitude]`
    pub pulse_amplitude: f32,
}

impl AnimationConfig {
    pub fn new(rotation_step: f32, pulse_rate: f32, pulse_amplitude: f32) -> Result<Self> {
        let config = Self {
            rotation_step,
            pulse_rate,
            pulse_amplitude,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("rotation step", self.rotation_step),
            ("pulse rate", self.pulse_rate),
            ("pulse amplitude", self.pulse_amplitude),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
            if value < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must not be negative, got {value}")));
            }
        }
        if !(0.0..1.0).contains(&self.pulse_amplitude) {
            return Err(Error::InvalidConfig(format!(
                "pulse amplitude must be in [0, 1), got {}",
                self.pulse_amplitude
            )));
        }
        Ok(())
    }

    fn pulse_step(&self) -> f32 {
        self.rotation_step * self.pulse_rate
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_step: DEFAULT_ROTATION_STEP,
            pulse_rate: DEFAULT_PULSE_RATE,
            pulse_amplitude: DEFAULT_PULSE_AMPLITUDE,
        }
    }
}

/// Animation state threaded through every frame update
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Frames advanced so far
    pub frame: u64,
    /// Rotation angle in `[0, TAU)`
    pub angle: f32,
    /// Pulsation phase in `[0, TAU)`
    pub pulse_phase: f32,
}

impl AnimationState {
    /// State after one more frame
    pub fn advance(self, config: &AnimationConfig) -> Self {
        Self {
            frame: self.frame + 1,
            angle: wrap_angle(self.angle + config.rotation_step),
            pulse_phase: wrap_angle(self.pulse_phase + config.pulse_step()),
        }
    }

    /// Geometry scale factor for this state
    pub fn pulse(&self, config: &AnimationConfig) -> f32 {
        1.0 + config.pulse_amplitude * self.pulse_phase.sin()
    }
}

/// Wrap into `[0, TAU)`
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
