//! Input boundary: the state the frontend samples once per frame

use crate::components::Side;

/// Held keys, pointer and quit request for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Pointer y in playfield coordinates, if the pointer is available
    pub pointer_y: Option<f32>,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1 for up, 1 for down, 0 when both or neither are held
    pub fn vertical(&self, side: Side) -> f32 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        (down as i8 - up as i8) as f32
    }
}
