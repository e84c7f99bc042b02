use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{IllustrationError, IllustrationResult};

#[derive(Clone, PartialEq, Eq)]
/// One named texture as produced by a container decoder.
pub struct RawTexture {
    name: String,
    width: u32,
    height: u32,
    /// RGBA8, row-major, top-to-bottom, tightly packed.
    pixels: Vec<u8>,
}

impl RawTexture {
    /// Wrap decoded pixels, checking the name and buffer layout.
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> IllustrationResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(IllustrationError::invalid_texture(
                "texture name must be non-empty",
            ));
        }
        let expected = rgba8_len(width, height).ok_or_else(|| {
            IllustrationError::invalid_texture(format!(
                "texture '{name}' dimensions {width}x{height} overflow"
            ))
        })?;
        if pixels.len() != expected {
            return Err(IllustrationError::invalid_texture(format!(
                "texture '{name}' is {width}x{height} but carries {} bytes (expected {expected})",
                pixels.len()
            )));
        }
        Ok(Self {
            name,
            width,
            height,
            pixels,
        })
    }

    /// Build a texture from an already decoded `image` buffer.
    pub fn from_rgba_image(
        name: impl Into<String>,
        img: image::RgbaImage,
    ) -> IllustrationResult<Self> {
        let (width, height) = img.dimensions();
        Self::new(name, width, height, img.into_raw())
    }

    /// Texture name as stored in the container.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the texture, returning its pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

impl std::fmt::Debug for RawTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawTexture")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels_len", &self.pixels.len())
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Final straight-alpha RGBA8 illustration.
pub struct CompositeImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Straight (non-premultiplied) RGBA8, row-major, top-to-bottom.
    pub pixels: Vec<u8>,
}

impl CompositeImage {
    /// RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert into an `image` buffer without copying.
    pub fn into_rgba_image(self) -> IllustrationResult<image::RgbaImage> {
        let (w, h) = (self.width, self.height);
        image::RgbaImage::from_raw(w, h, self.pixels).ok_or_else(|| {
            IllustrationError::invalid_texture(format!(
                "composite buffer does not match {w}x{h} rgba8"
            ))
        })
    }

    /// Copy into an `image` buffer.
    pub fn to_rgba_image(&self) -> IllustrationResult<image::RgbaImage> {
        self.clone().into_rgba_image()
    }

    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> IllustrationResult<Vec<u8>> {
        let img = self.to_rgba_image()?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode composite illustration as png")?;
        Ok(buf)
    }
}

impl std::fmt::Debug for CompositeImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels_len", &self.pixels.len())
            .finish()
    }
}

pub(crate) fn rgba8_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/texture.rs"]
mod tests;
