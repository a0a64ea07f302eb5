//! Input handling with gamepad support
//!
//! Produces one movement axis per frame from the keyboard and the first
//! connected gamepad, plus a quit request.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard only

mod gamepad;
mod state;

pub use gamepad::Gamepad;
pub use state::*;
