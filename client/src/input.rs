use game_core::{GameMap, InputSource, InputState};
use macroquad::prelude as mq;

use crate::renderer::Viewport;

/// Samples the keyboard and mouse each frame
///
/// Player 1 uses W/S, player 2 the arrow keys. Escape or a close request
/// quits.
pub struct KeyboardInput {
    map: GameMap,
    viewport: Viewport,
}

impl KeyboardInput {
    pub fn new(map: GameMap, viewport: Viewport) -> Self {
        Self { map, viewport }
    }

    /// Track the letterboxing so the pointer maps into the playfield
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn pointer_y(&self) -> Option<f32> {
        let (mx, my) = mq::mouse_position();
        let (_, y) = self.viewport.to_field(mx, my);
        y.is_finite().then(|| self.map.clamp_y(y))
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> InputState {
        InputState {
            left_up: mq::is_key_down(mq::KeyCode::W),
            left_down: mq::is_key_down(mq::KeyCode::S),
            right_up: mq::is_key_down(mq::KeyCode::Up),
            right_down: mq::is_key_down(mq::KeyCode::Down),
            pointer_y: self.pointer_y(),
            quit: mq::is_key_down(mq::KeyCode::Escape) || mq::is_quit_requested(),
        }
    }
}
