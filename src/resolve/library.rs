use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    assets::{
        decode::ContainerDecoder,
        store::{AssetStore, bundle_key},
        texture::CompositeImage,
    },
    foundation::{core::IllustrationRequest, error::IllustrationResult},
    resolve::{
        resolver::IllustrationResolver,
        settings::{BatchThreading, build_thread_pool},
    },
};

/// An [`IllustrationResolver`] paired with the [`AssetStore`] holding its containers.
///
/// Requests are mapped to containers with [`bundle_key`].
#[derive(Clone, Debug)]
pub struct IllustrationLibrary<D, S> {
    resolver: IllustrationResolver<D>,
    store: S,
}

impl<D: ContainerDecoder, S: AssetStore> IllustrationLibrary<D, S> {
    /// Library serving containers from `store`.
    pub fn new(resolver: IllustrationResolver<D>, store: S) -> Self {
        Self { resolver, store }
    }

    /// Underlying resolver.
    pub fn resolver(&self) -> &IllustrationResolver<D> {
        &self.resolver
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Raw container bytes holding the textures for `request`.
    pub fn bundle(&self, request: &IllustrationRequest) -> IllustrationResult<Arc<[u8]>> {
        self.store.load(&bundle_key(request))
    }

    /// Load the container for `request` and resolve it.
    #[tracing::instrument(
        skip_all,
        fields(codename = request.image_codename(), variant = %request.variant_kind()),
        err
    )]
    pub fn illustration(
        &self,
        request: &IllustrationRequest,
    ) -> IllustrationResult<CompositeImage> {
        let bundle = self.bundle(request)?;
        self.resolver.resolve(&bundle, request)
    }

    /// Like [`illustration`](Self::illustration), encoded as PNG.
    pub fn illustration_png(&self, request: &IllustrationRequest) -> IllustrationResult<Vec<u8>> {
        self.illustration(request)?.encode_png()
    }

    /// Resolve every request independently, in input order.
    ///
    /// A failing request does not affect the others. The outer error only reports an
    /// unusable `threading` configuration.
    pub fn illustrations(
        &self,
        requests: &[IllustrationRequest],
        threading: &BatchThreading,
    ) -> IllustrationResult<Vec<IllustrationResult<CompositeImage>>> {
        if !threading.parallel {
            return Ok(requests.iter().map(|r| self.illustration(r)).collect());
        }

        let pool = build_thread_pool(threading.threads)?;
        tracing::debug!(
            requests = requests.len(),
            threads = pool.current_num_threads(),
            "resolving illustration batch"
        );
        Ok(pool.install(|| {
            requests
                .par_iter()
                .map(|r| self.illustration(r))
                .collect::<Vec<_>>()
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/library.rs"]
mod tests;
