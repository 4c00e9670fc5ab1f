//! Horizontal movement and the jump state machine for the controllable shape.
//!
//! A jump rises along half a sine wave for `jump_duration` seconds. When the
//! duration elapses the offset snaps to zero and the phase passes through
//! `Falling`, which steps the offset down by `fall_step` per tick until it
//! reaches the ground. Starting from a snapped offset of zero the fall lands
//! on its first tick.

use std::f32::consts::PI;

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Horizontal distance per fixed step while a direction key is held.
    pub move_step: f32,
    /// Seconds of simulated time the rising arc lasts.
    pub jump_duration: f64,
    pub jump_amplitude: f32,
    /// Offset removed per fixed step while falling.
    pub fall_step: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_step: 0.01,
            jump_duration: 1.0,
            jump_amplitude: 0.5,
            fall_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpPhase {
    Grounded,
    Rising { start: f64, offset: f32 },
    Falling { offset: f32 },
}

impl JumpPhase {
    /// Height above the base position. Never negative.
    pub fn offset(&self) -> f32 {
        match *self {
            Self::Grounded => 0.0,
            Self::Rising { offset, .. } | Self::Falling { offset } => offset,
        }
    }

    pub fn is_rising(&self) -> bool {
        matches!(self, Self::Rising { .. })
    }

    pub fn is_falling(&self) -> bool {
        matches!(self, Self::Falling { .. })
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }
}

/// Per-step intent sampled from the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionInput {
    /// -1 for left, +1 for right, 0 for neither or both.
    pub move_x: f32,
    pub jump_pressed: bool,
}

pub fn start_jump(phase: JumpPhase, now: f64) -> JumpPhase {
    if phase.is_rising() {
        return phase;
    }
    JumpPhase::Rising { start: now, offset: 0.0 }
}

/// Advances a rising phase to `now`. Other phases pass through unchanged.
pub fn advance_rise(phase: JumpPhase, now: f64, config: &MotionConfig) -> JumpPhase {
    let JumpPhase::Rising { start, .. } = phase else {
        return phase;
    };

    let progress = if config.jump_duration > 0.0 {
        (now - start) / config.jump_duration
    } else {
        1.0
    };

    if progress < 1.0 {
        let offset = ((progress as f32) * PI).sin() * config.jump_amplitude;
        JumpPhase::Rising {
            start,
            offset: offset.max(0.0),
        }
    } else {
        JumpPhase::Falling { offset: 0.0 }
    }
}

/// Steps a falling phase one tick toward the ground.
pub fn advance_fall(phase: JumpPhase, config: &MotionConfig) -> JumpPhase {
    let JumpPhase::Falling { offset } = phase else {
        return phase;
    };

    let next = offset - config.fall_step;
    if next <= 0.0 {
        JumpPhase::Grounded
    } else {
        JumpPhase::Falling { offset: next }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MotionState {
    pub x: f32,
    pub base_y: f32,
    pub phase: JumpPhase,
    pub config: MotionConfig,
}

impl MotionState {
    pub fn new(x: f32, base_y: f32) -> Self {
        Self::with_config(x, base_y, MotionConfig::default())
    }

    pub fn with_config(x: f32, base_y: f32, config: MotionConfig) -> Self {
        Self {
            x,
            base_y,
            phase: JumpPhase::Grounded,
            config,
        }
    }

    /// One fixed step at simulated time `now`.
    pub fn step(&mut self, input: MotionInput, now: f64) {
        self.x += input.move_x * self.config.move_step;

        let before = self.phase;
        let mut phase = before;
        if input.jump_pressed && !phase.is_rising() {
            phase = start_jump(phase, now);
            log::debug!("Jump started at t={now:.3}");
        }
        phase = advance_rise(phase, now, &self.config);
        phase = advance_fall(phase, &self.config);

        if phase.is_grounded() && !before.is_grounded() {
            log::debug!("Landed at t={now:.3}");
        }
        self.phase = phase;
    }

    pub fn offset(&self) -> f32 {
        self.phase.offset()
    }

    /// Where the shape is drawn: base position raised by the jump offset.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.base_y + self.offset())
    }
}
