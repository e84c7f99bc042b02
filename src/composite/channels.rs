use crate::{
    assets::texture::{CompositeImage, RawTexture},
    foundation::error::{IllustrationError, IllustrationResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which value of an alpha-layer pixel encodes opacity.
pub enum AlphaChannel {
    /// Rec. 601 luma of the mask's RGB.
    #[default]
    Luminance,
    /// Red channel only.
    Red,
    /// The mask texture's own alpha channel.
    Alpha,
}

impl AlphaChannel {
    /// Opacity encoded by one RGBA8 mask pixel.
    #[inline]
    pub fn sample(self, px: [u8; 4]) -> u8 {
        match self {
            Self::Luminance => luma601(px[0], px[1], px[2]),
            Self::Red => px[0],
            Self::Alpha => px[3],
        }
    }
}

/// Composite `color` and `alpha` layers using the luminance mask convention.
///
/// See [`composite_with`].
pub fn composite(
    color: Option<RawTexture>,
    alpha: Option<RawTexture>,
) -> IllustrationResult<CompositeImage> {
    composite_with(color, alpha, AlphaChannel::default())
}

/// Composite `color` and `alpha` layers into one straight-alpha RGBA8 image.
///
/// - both: RGB from `color`, A sampled from `alpha` via `channel`; sizes must match
/// - color only: `color` with A forced to 255
/// - alpha only: [`IllustrationError::IncompleteIllustration`]
/// - neither: [`IllustrationError::IllustrationNotFound`]
pub fn composite_with(
    color: Option<RawTexture>,
    alpha: Option<RawTexture>,
    channel: AlphaChannel,
) -> IllustrationResult<CompositeImage> {
    match (color, alpha) {
        (Some(color), Some(alpha)) => {
            if color.dimensions() != alpha.dimensions() {
                return Err(IllustrationError::DimensionMismatch {
                    color: color.dimensions(),
                    alpha: alpha.dimensions(),
                });
            }
            let (width, height) = color.dimensions();
            let mut pixels = color.into_pixels();
            apply_mask_in_place(&mut pixels, alpha.pixels(), channel)?;
            Ok(CompositeImage {
                width,
                height,
                pixels,
            })
        }
        (Some(color), None) => {
            let (width, height) = color.dimensions();
            let mut pixels = color.into_pixels();
            force_opaque_in_place(&mut pixels);
            Ok(CompositeImage {
                width,
                height,
                pixels,
            })
        }
        (None, Some(alpha)) => Err(IllustrationError::incomplete(format!(
            "alpha layer '{}' has no matching color layer",
            alpha.name()
        ))),
        (None, None) => Err(IllustrationError::not_found(
            "no color or alpha layer matched the request",
        )),
    }
}

/// Replace the alpha byte of every pixel in `dst` with the mask value from `mask`.
pub fn apply_mask_in_place(
    dst: &mut [u8],
    mask: &[u8],
    channel: AlphaChannel,
) -> IllustrationResult<()> {
    if dst.len() != mask.len() || !dst.len().is_multiple_of(4) {
        return Err(IllustrationError::invalid_texture(
            "apply_mask_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, m) in dst.chunks_exact_mut(4).zip(mask.chunks_exact(4)) {
        d[3] = channel.sample([m[0], m[1], m[2], m[3]]);
    }
    Ok(())
}

fn force_opaque_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        px[3] = 255;
    }
}

fn luma601(r: u8, g: u8, b: u8) -> u8 {
    ((299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b) + 500) / 1000) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/composite/channels.rs"]
mod tests;
