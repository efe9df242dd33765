//! Sprite generation for a frame
//!
//! Produces textured quads in camera space (canvas centred on the origin,
//! camera following the player horizontally), back to front.

use super::Frame;
use crate::consts::*;
use crate::platform::TextureSlot;
use crate::sim::player::WING_FRAMES;
use crate::sim::{Obstacle, Quad};

/// One textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Texture to sample; `None` draws a flat white quad
    pub slot: Option<TextureSlot>,
    /// Camera-space rectangle
    pub quad: Quad,
    /// Texture coordinates mapped onto `quad` (`bottom`/`top` are v at the
    /// quad's bottom and top edges, so flipped images have bottom > top)
    pub uv: Quad,
    /// Rotation about the quad centre (degrees, counter-clockwise)
    pub rotation_degrees: f32,
    pub alpha: f32,
}

impl Sprite {
    fn textured(slot: TextureSlot, quad: Quad, uv: Quad) -> Self {
        Self {
            slot: Some(slot),
            quad,
            uv,
            rotation_degrees: 0.0,
            alpha: 1.0,
        }
    }
}

/// Image drawn upright (v = 1 at the bottom edge)
const UV_UPRIGHT: Quad = Quad::new(0.0, 1.0, 1.0, 0.0);
/// Image drawn upside down
const UV_FLIPPED: Quad = Quad::new(0.0, 1.0, 0.0, 1.0);

/// Build the draw list for a frame
pub fn build_sprites(frame: &Frame) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(frame.obstacles.len() * 2 + 4);

    let canvas = Quad::new(
        -CANVAS_HALF_WIDTH,
        CANVAS_HALF_WIDTH,
        -CANVAS_HALF_HEIGHT,
        CANVAS_HALF_HEIGHT,
    );
    sprites.push(Sprite::textured(TextureSlot::Background, canvas, UV_UPRIGHT));

    for hole in &frame.obstacles {
        pipe_sprites(hole, frame.camera_x(), &mut sprites);
    }

    sprites.push(bird_sprite(frame));

    let ground = Quad::new(
        -CANVAS_HALF_WIDTH,
        CANVAS_HALF_WIDTH,
        -CANVAS_HALF_HEIGHT,
        GROUND_HEIGHT - CANVAS_HALF_HEIGHT,
    );
    sprites.push(Sprite::textured(TextureSlot::Base, ground, UV_UPRIGHT));

    if let Some(alpha) = frame.blink_alpha {
        sprites.push(Sprite {
            slot: None,
            quad: canvas,
            uv: UV_UPRIGHT,
            rotation_degrees: 0.0,
            alpha,
        });
    }

    sprites
}

/// Both barriers of an obstacle; the pipe cap faces the gap in each
fn pipe_sprites(hole: &Obstacle, camera_x: f32, out: &mut Vec<Sprite>) {
    let (upper, lower) = hole.barriers();
    let to_camera = |q: Quad| {
        let q = q.translated_x(-camera_x);
        Quad::new(q.left, q.right, q.bottom - CANVAS_HALF_HEIGHT, q.top - CANVAS_HALF_HEIGHT)
    };

    out.push(Sprite::textured(TextureSlot::Pipe, to_camera(upper), UV_FLIPPED));
    out.push(Sprite::textured(TextureSlot::Pipe, to_camera(lower), UV_UPRIGHT));
}

fn bird_sprite(frame: &Frame) -> Sprite {
    let player = &frame.player;
    let strip = 1.0 / WING_FRAMES as f32;
    let u = frame.wing_frame as f32 * strip;

    Sprite {
        slot: Some(TextureSlot::Bird),
        quad: Quad::new(
            -player.width / 2.0,
            player.width / 2.0,
            player.y - player.height / 2.0 - CANVAS_HALF_HEIGHT,
            player.y + player.height / 2.0 - CANVAS_HALF_HEIGHT,
        ),
        uv: Quad::new(u, u + strip, 1.0, 0.0),
        rotation_degrees: frame.tilt_degrees,
        alpha: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    fn frame_with_obstacles(count: usize) -> Frame {
        let mut state = GameState::new(11);
        for i in 0..count {
            state
                .obstacles
                .push(Obstacle::new(state.player.x + 5.0 + i as f32 * OBSTACLE_SPACING, 15.0));
        }
        Frame::capture(&state)
    }

    #[test]
    fn test_draw_order_and_count() {
        let frame = frame_with_obstacles(3);
        let sprites = build_sprites(&frame);

        assert_eq!(sprites.len(), 1 + 3 * 2 + 1 + 1);
        assert_eq!(sprites[0].slot, Some(TextureSlot::Background));
        assert_eq!(sprites[7].slot, Some(TextureSlot::Bird));
        assert_eq!(sprites[8].slot, Some(TextureSlot::Base));
    }

    #[test]
    fn test_pipes_are_camera_relative() {
        let frame = frame_with_obstacles(1);
        let sprites = build_sprites(&frame);
        let upper = sprites[1].quad;
        let lower = sprites[2].quad;

        // Obstacle 5 units ahead of the player
        assert!((upper.center().x - 5.0).abs() < 1e-4);
        assert!((upper.bottom - (15.0 + GAP_HEIGHT / 2.0 - CANVAS_HALF_HEIGHT)).abs() < 1e-4);
        assert!((lower.top - (15.0 - GAP_HEIGHT / 2.0 - CANVAS_HALF_HEIGHT)).abs() < 1e-4);
        assert_eq!(sprites[1].uv, UV_FLIPPED);
    }

    #[test]
    fn test_bird_centred_horizontally() {
        let frame = frame_with_obstacles(0);
        let bird = build_sprites(&frame)[1];
        assert_eq!(bird.slot, Some(TextureSlot::Bird));
        assert!(bird.quad.center().x.abs() < 1e-6);
        assert!((bird.quad.center().y - (PLAYER_SPAWN_Y - CANVAS_HALF_HEIGHT)).abs() < 1e-5);
        assert_eq!(bird.rotation_degrees, frame.tilt_degrees);
    }

    #[test]
    fn test_blink_adds_overlay() {
        let mut state = GameState::new(11);
        state.start_blink();
        let sprites = build_sprites(&Frame::capture(&state));
        let overlay = sprites.last().copied().unwrap();
        assert_eq!(overlay.slot, None);
        assert_eq!(overlay.alpha, 1.0);
    }
}
