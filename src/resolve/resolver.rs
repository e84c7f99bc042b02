use crate::{
    assets::{
        decode::{ContainerDecoder, decode_container},
        texture::CompositeImage,
    },
    composite::channels::composite_with,
    foundation::{core::IllustrationRequest, error::IllustrationResult},
    matching::variant::match_layers,
    resolve::settings::ResolverSettings,
};

/// Turns container bytes plus a request into a composited illustration.
///
/// Pipeline:
/// 1. [`ContainerDecoder::decode`] lists the container's textures
/// 2. [`match_layers`](crate::match_layers) picks the color and alpha layers
/// 3. [`composite_with`](crate::composite_with) merges them into straight RGBA8
///
/// The resolver holds no per-request state; one instance can serve many threads.
#[derive(Clone, Debug)]
pub struct IllustrationResolver<D> {
    decoder: D,
    settings: ResolverSettings,
}

impl<D: ContainerDecoder> IllustrationResolver<D> {
    /// Resolver with default settings.
    pub fn new(decoder: D) -> Self {
        Self::with_settings(decoder, ResolverSettings::default())
    }

    /// Resolver with explicit settings.
    pub fn with_settings(decoder: D, settings: ResolverSettings) -> Self {
        Self { decoder, settings }
    }

    /// Active settings.
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Decode `container`, select the layers for `request` and composite them.
    ///
    /// Decoder failures surface as [`IllustrationError::Decode`](crate::IllustrationError::Decode);
    /// matcher and compositor errors are returned unchanged.
    #[tracing::instrument(
        skip_all,
        fields(codename = request.image_codename(), variant = %request.variant_kind()),
        err
    )]
    pub fn resolve(
        &self,
        container: &[u8],
        request: &IllustrationRequest,
    ) -> IllustrationResult<CompositeImage> {
        let textures = decode_container(&self.decoder, container)?;
        let slots = match_layers(textures, request);
        let image = composite_with(slots.color, slots.alpha, self.settings.alpha_channel)?;
        tracing::debug!(width = image.width, height = image.height, "resolved illustration");
        Ok(image)
    }

    /// Like [`resolve`](Self::resolve), encoded as PNG.
    pub fn resolve_png(
        &self,
        container: &[u8],
        request: &IllustrationRequest,
    ) -> IllustrationResult<Vec<u8>> {
        self.resolve(container, request)?.encode_png()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/resolver.rs"]
mod tests;
