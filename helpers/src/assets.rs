use {
    glshell::assets::{AssetError, AssetSource},
    std::{collections::HashMap, ffi::c_void, ptr},
};

/// An in-memory asset store.
///
/// The tag stands in for a native handle so tests can check
/// it reaches the collaborator unmodified.
#[derive(Default)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
    tag: usize,
}

impl MemoryAssets {
    pub fn new(tag: usize) -> Self {
        Self {
            files: HashMap::new(),
            tag,
        }
    }

    pub fn with<N, D>(mut self, name: N, data: D) -> Self
    where
        N: Into<String>,
        D: Into<Vec<u8>>,
    {
        self.files.insert(name.into(), data.into());
        self
    }
}

impl AssetSource for MemoryAssets {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_owned()))
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn raw(&self) -> *mut c_void {
        ptr::without_provenance_mut(self.tag)
    }
}
