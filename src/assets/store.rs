use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::foundation::{
    core::IllustrationRequest,
    error::{IllustrationError, IllustrationResult},
};

/// Key prefix for regular (non-skin) illustration containers.
pub const BUNDLE_PREFIX: &str = "operator_image_";
/// Key prefix for skin illustration containers.
pub const SKIN_BUNDLE_PREFIX: &str = "operator_image_skin_";

/// Key of the container that holds the textures for `request`.
///
/// The key uses the codename stem: everything before the first `_`, then before the
/// first `#`. `amiya_winter#1` as a skin maps to `operator_image_skin_amiya`.
pub fn bundle_key(request: &IllustrationRequest) -> String {
    let codename = request.image_codename();
    let stem = codename.split('_').next().unwrap_or(codename);
    let stem = stem.split('#').next().unwrap_or(stem);
    if request.variant_kind().is_skin() {
        format!("{SKIN_BUNDLE_PREFIX}{stem}")
    } else {
        format!("{BUNDLE_PREFIX}{stem}")
    }
}

/// Explicit key to blob mapping that supplies container bytes.
pub trait AssetStore: Send + Sync {
    /// Load the blob stored under `key`.
    ///
    /// Returns [`IllustrationError::AssetNotFound`] when nothing is stored under `key`.
    fn load(&self, key: &str) -> IllustrationResult<Arc<[u8]>>;

    /// Whether a blob is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.load(key).is_ok()
    }
}

#[derive(Clone, Debug, Default)]
/// In-memory [`AssetStore`].
pub struct MemoryAssetStore {
    blobs: HashMap<String, Arc<[u8]>>,
}

impl MemoryAssetStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` under `key`, replacing any previous blob.
    pub fn insert(&mut self, key: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.blobs.insert(key.into(), bytes.into());
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store holds no blobs.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryAssetStore
where
    K: Into<String>,
    V: Into<Arc<[u8]>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (k, v) in iter {
            store.insert(k, v);
        }
        store
    }
}

impl AssetStore for MemoryAssetStore {
    fn load(&self, key: &str) -> IllustrationResult<Arc<[u8]>> {
        self.blobs
            .get(key)
            .cloned()
            .ok_or_else(|| IllustrationError::asset_not_found(key))
    }

    fn contains(&self, key: &str) -> bool {
        self.blobs.contains_key(key)
    }
}

#[derive(Clone, Debug)]
/// [`AssetStore`] backed by one file per key below a root directory.
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    /// Store rooted at `root`. The directory is not touched until a key is loaded.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> IllustrationResult<PathBuf> {
        let norm = normalize_asset_key(key)?;
        Ok(self.root.join(Path::new(&norm)))
    }
}

impl AssetStore for DirAssetStore {
    fn load(&self, key: &str) -> IllustrationResult<Arc<[u8]>> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(IllustrationError::asset_not_found(key))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("read asset bytes from '{}'", path.display()))
                .into()),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.path_for(key).is_ok_and(|p| p.is_file())
    }
}

/// Normalize a store key into a relative `/`-separated path.
///
/// Rejects empty keys, absolute paths and `..` components.
pub fn normalize_asset_key(key: &str) -> IllustrationResult<String> {
    let s = key.replace('\\', "/");
    if s.starts_with('/') {
        return Err(IllustrationError::validation("asset keys must be relative"));
    }
    if s.is_empty() {
        return Err(IllustrationError::validation("asset key must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(IllustrationError::validation(
                "asset keys must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(IllustrationError::validation(
            "asset key must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
