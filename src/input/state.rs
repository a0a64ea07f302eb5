//! Input state management
//!
//! Polls the keyboard (macroquad) and gamepad, combining them into one
//! movement axis.

use macroquad::prelude::*;
use super::Gamepad;

/// Movement axis from four direction flags, in screen orientation.
///
/// Not normalised: diagonals have length sqrt(2). Opposite keys cancel.
pub fn movement_axis(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    let mut axis = Vec2::ZERO;
    if up { axis.y -= 1.0; }
    if down { axis.y += 1.0; }
    if left { axis.x -= 1.0; }
    if right { axis.x += 1.0; }
    axis
}

/// Prefer whichever source is pushed further.
pub fn combine_axes(keyboard: Vec2, stick: Vec2) -> Vec2 {
    if stick.length() > keyboard.length() {
        stick
    } else {
        keyboard
    }
}

/// Unified input state for keyboard and gamepad
pub struct InputState {
    gamepad: Option<Gamepad>,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame before reading input
    pub fn poll(&mut self) {
        if let Some(gp) = self.gamepad.as_mut() {
            gp.poll();
        }
    }

    /// WASD / arrow keys, or the left stick if it is pushed further
    pub fn movement(&self) -> Vec2 {
        let keyboard = movement_axis(
            is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        );
        let stick = self.gamepad.as_ref().map(Gamepad::left_stick).unwrap_or(Vec2::ZERO);
        combine_axes(keyboard, stick)
    }

    /// Escape released this frame, or gamepad Start pressed
    pub fn quit_requested(&self) -> bool {
        is_key_released(KeyCode::Escape)
            || self.gamepad.as_ref().is_some_and(Gamepad::start_pressed)
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.as_ref().is_some_and(Gamepad::has_gamepad)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
