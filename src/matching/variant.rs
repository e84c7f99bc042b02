use crate::{
    assets::texture::RawTexture,
    foundation::core::IllustrationRequest,
    matching::pattern::{NamePattern, NameVerdict, has_alpha_marker},
};

/// Textures must be strictly larger than this on both edges to be illustration layers.
///
/// Smaller textures are thumbnails and previews packed next to the artwork.
pub const MIN_LAYER_EDGE: u32 = 512;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A matched texture tagged with the role it plays in the illustration.
pub enum ClassifiedLayer {
    /// Visible color data; its alpha is ignored.
    Color(RawTexture),
    /// Grayscale opacity mask.
    Alpha(RawTexture),
}

impl ClassifiedLayer {
    /// Tag `texture` by the `[alpha]` marker in its name.
    pub fn classify(texture: RawTexture) -> Self {
        if has_alpha_marker(texture.name()) {
            Self::Alpha(texture)
        } else {
            Self::Color(texture)
        }
    }

    /// Underlying texture.
    pub fn texture(&self) -> &RawTexture {
        match self {
            Self::Color(t) | Self::Alpha(t) => t,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// At most one color and one alpha layer selected for a request.
pub struct LayerSlots {
    /// Selected color layer.
    pub color: Option<RawTexture>,
    /// Selected alpha layer.
    pub alpha: Option<RawTexture>,
}

impl LayerSlots {
    /// Put `layer` in its slot, returning the texture it displaced.
    pub fn place(&mut self, layer: ClassifiedLayer) -> Option<RawTexture> {
        match layer {
            ClassifiedLayer::Color(t) => self.color.replace(t),
            ClassifiedLayer::Alpha(t) => self.alpha.replace(t),
        }
    }

    /// Whether neither slot is filled.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.alpha.is_none()
    }
}

/// Whether `texture` is large enough to be an illustration layer.
pub fn is_layer_sized(texture: &RawTexture) -> bool {
    texture.width() > MIN_LAYER_EDGE && texture.height() > MIN_LAYER_EDGE
}

/// Select the color and alpha layers for `request` from decoded `textures`.
///
/// Textures are visited in decode order. Undersized textures and names that do not
/// match the request are dropped; of several candidates for one slot the last wins.
/// Empty slots are a valid outcome.
pub fn match_layers(textures: Vec<RawTexture>, request: &IllustrationRequest) -> LayerSlots {
    let pattern = NamePattern::for_request(request);
    let mut slots = LayerSlots::default();

    for texture in textures {
        if !is_layer_sized(&texture) {
            tracing::trace!(
                name = texture.name(),
                width = texture.width(),
                height = texture.height(),
                "skip undersized texture"
            );
            continue;
        }
        match pattern.verdict(texture.name()) {
            NameVerdict::Match => {}
            NameVerdict::Miss => {
                tracing::trace!(name = texture.name(), "skip unrelated texture");
                continue;
            }
            NameVerdict::Backup => {
                tracing::debug!(name = texture.name(), "skip backup texture");
                continue;
            }
        }

        let layer = ClassifiedLayer::classify(texture);
        let name = layer.texture().name().to_string();
        if let Some(previous) = slots.place(layer) {
            tracing::debug!(
                kept = %name,
                dropped = previous.name(),
                "later texture replaces earlier candidate"
            );
        }
    }

    tracing::debug!(
        request = %request,
        color = slots.color.as_ref().map(RawTexture::name),
        alpha = slots.alpha.as_ref().map(RawTexture::name),
        "matched illustration layers"
    );
    slots
}

#[cfg(test)]
#[path = "../../tests/unit/matching/variant.rs"]
mod tests;
