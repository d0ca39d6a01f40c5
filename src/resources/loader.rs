//! GPU texture loader
//!
//! Decodes image files with the `image` crate and uploads them as macroquad
//! textures. Needs a live macroquad context, so it only runs inside the game.

use std::path::Path;

use macroquad::prelude::*;

use super::{FrameLoader, ResourceError};

/// Side length of the placeholder square
const PLACEHOLDER_SIZE: u16 = 64;

/// Loads frames as `Texture2D` with nearest filtering (pixel art)
#[derive(Default)]
pub struct TextureLoader {
    /// Built on first use, then shared by every failed frame
    placeholder: Option<Texture2D>,
}

impl TextureLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Magenta square with a black 2px border
fn placeholder_pixels(size: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let border = x < 2 || y < 2 || x >= size - 2 || y >= size - 2;
            if border {
                pixels.extend_from_slice(&[0, 0, 0, 255]);
            } else {
                pixels.extend_from_slice(&[255, 0, 255, 255]);
            }
        }
    }
    pixels
}

impl FrameLoader for TextureLoader {
    type Frame = Texture2D;

    fn load(&mut self, path: &Path) -> Result<Texture2D, ResourceError> {
        if !path.is_file() {
            return Err(ResourceError::NotFound(path.to_path_buf()));
        }

        let img = ::image::open(path).map_err(|e| ResourceError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(ResourceError::Decode {
                path: path.to_path_buf(),
                message: format!("{}x{} exceeds texture limits", width, height),
            });
        }

        let texture = Texture2D::from_rgba8(width as u16, height as u16, rgba.as_raw());
        texture.set_filter(FilterMode::Nearest);
        Ok(texture)
    }

    fn placeholder(&mut self) -> Texture2D {
        self.placeholder
            .get_or_insert_with(|| {
                let size = PLACEHOLDER_SIZE as usize;
                let texture = Texture2D::from_rgba8(
                    PLACEHOLDER_SIZE,
                    PLACEHOLDER_SIZE,
                    &placeholder_pixels(size),
                );
                texture.set_filter(FilterMode::Nearest);
                texture
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_pixels() {
        let pixels = placeholder_pixels(8);
        assert_eq!(pixels.len(), 8 * 8 * 4);
        // Corner is border, center is magenta
        assert_eq!(&pixels[0..4], &[0, 0, 0, 255]);
        let center = (4 * 8 + 4) * 4;
        assert_eq!(&pixels[center..center + 4], &[255, 0, 255, 255]);
    }
}
