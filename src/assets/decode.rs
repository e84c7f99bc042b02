use crate::{
    assets::texture::RawTexture,
    foundation::error::{IllustrationError, IllustrationResult},
};

/// Turns an in-memory container blob into its named textures.
///
/// Implementations must enumerate textures in a stable order: when several textures
/// compete for the same layer, the later one wins.
///
/// Any `Fn(&[u8]) -> anyhow::Result<Vec<RawTexture>>` closure is a decoder.
pub trait ContainerDecoder: Send + Sync {
    /// Decode every texture in `bytes`.
    fn decode(&self, bytes: &[u8]) -> anyhow::Result<Vec<RawTexture>>;
}

impl<F> ContainerDecoder for F
where
    F: Fn(&[u8]) -> anyhow::Result<Vec<RawTexture>> + Send + Sync,
{
    fn decode(&self, bytes: &[u8]) -> anyhow::Result<Vec<RawTexture>> {
        self(bytes)
    }
}

/// Run `decoder` over `bytes`, mapping any failure to [`IllustrationError::Decode`].
pub fn decode_container(
    decoder: &dyn ContainerDecoder,
    bytes: &[u8],
) -> IllustrationResult<Vec<RawTexture>> {
    let textures = decoder.decode(bytes).map_err(IllustrationError::decode)?;
    tracing::debug!(bytes = bytes.len(), textures = textures.len(), "decoded container");
    Ok(textures)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
