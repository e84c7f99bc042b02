//! charart resolves character illustration requests into ready-to-display RGBA images.
//!
//! Illustrations ship inside packed containers as two textures: a color texture and a
//! separate grayscale alpha mask named with an `[alpha]` marker. Resolving a request
//! picks the right pair among many similarly named textures and merges them.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: `&[u8] -> Vec<RawTexture>` via a caller-supplied [`ContainerDecoder`]
//! 2. **Match**: `Vec<RawTexture> + IllustrationRequest -> LayerSlots` ([`match_layers`])
//! 3. **Composite**: `LayerSlots -> CompositeImage` ([`composite_with`])
//!
//! [`IllustrationResolver`] runs the three steps on bytes already in memory.
//! [`IllustrationLibrary`] adds an [`AssetStore`] so requests can be resolved by key,
//! one at a time or as a batch on a rayon pool.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Request-scoped**: no caches and no shared mutable state; resolvers are `Sync`.
//! - **Straight alpha**: output RGB is the color texture's RGB, untouched.
//! - **No container format**: parsing the container is the decoder's job.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composite;
mod foundation;
mod matching;
mod resolve;

pub use assets::decode::{ContainerDecoder, decode_container};
pub use assets::store::{
    AssetStore, BUNDLE_PREFIX, DirAssetStore, MemoryAssetStore, SKIN_BUNDLE_PREFIX, bundle_key,
    normalize_asset_key,
};
pub use assets::texture::{CompositeImage, RawTexture};
pub use composite::channels::{AlphaChannel, apply_mask_in_place, composite, composite_with};
pub use foundation::core::{IllustrationRequest, VariantKind};
pub use foundation::error::{IllustrationError, IllustrationResult};
pub use matching::variant::{
    ClassifiedLayer, LayerSlots, MIN_LAYER_EDGE, is_layer_sized, match_layers,
};
pub use resolve::library::IllustrationLibrary;
pub use resolve::resolver::IllustrationResolver;
pub use resolve::settings::{BatchThreading, ResolverSettings};
