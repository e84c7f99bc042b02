use crate::{
    composite::channels::AlphaChannel,
    foundation::error::{IllustrationError, IllustrationResult},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Tunables for [`IllustrationResolver`](crate::IllustrationResolver).
pub struct ResolverSettings {
    /// Mask convention of alpha-layer textures.
    pub alpha_channel: AlphaChannel,
}

impl ResolverSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> IllustrationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| IllustrationError::serde(format!("invalid resolver settings: {e}")))
    }
}

#[derive(Clone, Debug, Default)]
/// How [`IllustrationLibrary::illustrations`](crate::IllustrationLibrary::illustrations)
/// spreads a batch over threads.
pub struct BatchThreading {
    /// Resolve on a dedicated rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count for the pool. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> IllustrationResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(IllustrationError::validation(
            "batch threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        IllustrationError::validation(format!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/settings.rs"]
mod tests;
