//! Gamepad support
//!
//! Native: first connected controller via gilrs
//! WASM: no gamepad, every query reports idle

use macroquad::prelude::Vec2;

/// Radial deadzone applied to the left stick
pub const STICK_DEADZONE: f32 = 0.15;

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Gilrs, Button, Axis};

    pub struct Gamepad {
        gilrs: Gilrs,
        deadzone: f32,
        start_was_down: bool,
        start_pressed: bool,
    }

    impl Gamepad {
        /// Returns None when the platform gamepad backend cannot start.
        pub fn new() -> Option<Self> {
            match Gilrs::new() {
                Ok(gilrs) => Some(Self {
                    gilrs,
                    deadzone: STICK_DEADZONE,
                    start_was_down: false,
                    start_pressed: false,
                }),
                Err(e) => {
                    log::warn!("Gamepad input disabled: {}", e);
                    None
                }
            }
        }

        /// Drain pending events and latch this frame's Start edge.
        pub fn poll(&mut self) {
            while self.gilrs.next_event().is_some() {}

            let start_down = self.active().is_some_and(|gp| gp.is_pressed(Button::Start));
            self.start_pressed = start_down && !self.start_was_down;
            self.start_was_down = start_down;
        }

        pub fn has_gamepad(&self) -> bool {
            self.active().is_some()
        }

        fn active(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.gamepads().next().map(|(_, gp)| gp)
        }

        /// Left stick in screen orientation (down is +Y).
        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY);
            apply_deadzone(x, y, self.deadzone)
        }

        pub fn start_pressed(&self) -> bool {
            self.start_pressed
        }
    }
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Option<Self> {
            None
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }

        pub fn start_pressed(&self) -> bool {
            false
        }
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Apply radial deadzone with linear rescaling
pub fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

pub use platform::Gamepad;
