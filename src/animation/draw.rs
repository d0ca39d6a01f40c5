//! Drawing helpers for texture-backed animations

use macroquad::prelude::*;

use super::controller::AnimationController;
use super::sequence::FrameSequence;

/// Blit one frame at (x, y), scaled, optionally mirrored horizontally
pub fn draw_frame(texture: &Texture2D, x: f32, y: f32, scale: f32, flip_x: bool) {
    let size = vec2(texture.width() * scale, texture.height() * scale);
    draw_texture_ex(
        texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(size),
            flip_x,
            ..Default::default()
        },
    );
}

impl FrameSequence<Texture2D> {
    /// Draw the current frame; nothing happens for an empty sequence
    pub fn draw(&self, x: f32, y: f32, scale: f32, flip_x: bool) {
        if let Some(texture) = self.current_frame() {
            draw_frame(texture, x, y, scale, flip_x);
        }
    }
}

impl AnimationController<Texture2D> {
    /// Draw the active state's current frame, if any
    pub fn draw(&self, x: f32, y: f32, scale: f32, flip_x: bool) {
        if let Some(sequence) = self.active() {
            sequence.draw(x, y, scale, flip_x);
        }
    }
}
