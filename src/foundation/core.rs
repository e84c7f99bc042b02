use std::fmt;

use crate::foundation::error::{IllustrationError, IllustrationResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Category of illustration requested for a character.
pub enum VariantKind {
    /// Default illustration.
    #[default]
    Base,
    /// First elite promotion stage.
    Elite1,
    /// Second elite promotion stage.
    Elite2,
    /// Promotion artwork.
    Promotion,
    /// Purchasable or event outfit.
    Skin,
}

impl VariantKind {
    /// Whether this variant uses skin naming rules (`#<n>` suffixes, skin bundles).
    pub fn is_skin(self) -> bool {
        matches!(self, Self::Skin)
    }

    /// Stable lowercase label used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Elite1 => "elite1",
            Self::Elite2 => "elite2",
            Self::Promotion => "promotion",
            Self::Skin => "skin",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawRequest")]
/// Immutable description of one illustration to resolve.
///
/// Requests round-trip through Serde so they can be carried in JSON metadata:
///
/// ```json
/// { "image_codename": "amiya_winter", "variant_kind": "Skin", "raw_variant_suffix": "1" }
/// ```
pub struct IllustrationRequest {
    image_codename: String,
    variant_kind: VariantKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    raw_variant_suffix: Option<String>,
}

#[derive(serde::Deserialize)]
struct RawRequest {
    image_codename: String,
    #[serde(default)]
    variant_kind: VariantKind,
    #[serde(default)]
    raw_variant_suffix: Option<String>,
}

impl TryFrom<RawRequest> for IllustrationRequest {
    type Error = IllustrationError;

    fn try_from(raw: RawRequest) -> IllustrationResult<Self> {
        let req = Self::new(raw.image_codename, raw.variant_kind)?;
        match raw.raw_variant_suffix {
            Some(suffix) => req.with_variant_suffix(suffix),
            None => Ok(req),
        }
    }
}

impl IllustrationRequest {
    /// Build a request for `image_codename` (for example `"amiya"` or `"amiya_winter"`).
    pub fn new(
        image_codename: impl Into<String>,
        variant_kind: VariantKind,
    ) -> IllustrationResult<Self> {
        let image_codename = image_codename.into();
        if image_codename.trim().is_empty() {
            return Err(IllustrationError::validation(
                "image codename must be non-empty",
            ));
        }
        Ok(Self {
            image_codename,
            variant_kind,
            raw_variant_suffix: None,
        })
    }

    /// Attach an explicit variant suffix.
    ///
    /// For skins this pins the number after `#`; for other variants it is appended to the
    /// codename when matching texture names.
    pub fn with_variant_suffix(mut self, suffix: impl Into<String>) -> IllustrationResult<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(IllustrationError::validation(
                "variant suffix must be non-empty when set",
            ));
        }
        if self.variant_kind.is_skin() && !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IllustrationError::validation(format!(
                "skin variant suffix must be numeric, got '{suffix}'"
            )));
        }
        self.raw_variant_suffix = Some(suffix);
        Ok(self)
    }

    /// Codename embedded in texture names.
    pub fn image_codename(&self) -> &str {
        &self.image_codename
    }

    /// Requested variant category.
    pub fn variant_kind(&self) -> VariantKind {
        self.variant_kind
    }

    /// Optional explicit variant suffix.
    pub fn raw_variant_suffix(&self) -> Option<&str> {
        self.raw_variant_suffix.as_deref()
    }
}

impl fmt::Display for IllustrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.image_codename, self.variant_kind)?;
        if let Some(suffix) = &self.raw_variant_suffix {
            write!(f, " suffix '{suffix}'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
