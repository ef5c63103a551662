use {
    glshell_winit::glshell::assets::{AssetError, AssetSource},
    ndk::asset::AssetManager,
    std::{
        ffi::{CString, c_void},
        io::Read,
    },
};

/// Assets packaged in the APK `assets/` folder.
pub struct ApkAssets {
    manager: AssetManager,
}

impl ApkAssets {
    pub fn new(manager: AssetManager) -> Self {
        Self { manager }
    }
}

impl AssetSource for ApkAssets {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = CString::new(name).map_err(|_| AssetError::InvalidName(name.to_owned()))?;
        let mut asset = self
            .manager
            .open(&path)
            .ok_or_else(|| AssetError::NotFound(name.to_owned()))?;

        let mut buf = Vec::new();
        asset.read_to_end(&mut buf).map_err(AssetError::Io)?;
        Ok(buf)
    }

    fn exists(&self, name: &str) -> bool {
        CString::new(name).is_ok_and(|path| self.manager.open(&path).is_some())
    }

    /// The `AAssetManager` pointer.
    fn raw(&self) -> *mut c_void {
        self.manager.ptr().as_ptr().cast()
    }
}
