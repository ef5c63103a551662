//! Read-only asset stores handed to the collaborator.

use std::{
    error,
    ffi::c_void,
    fmt, fs, io,
    path::{Component, Path, PathBuf},
    ptr,
};

/// A read-only key-value store of bundled assets.
pub trait AssetSource {
    /// Reads the whole asset.
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError>;

    fn exists(&self, name: &str) -> bool;

    /// The native handle passed across the FFI boundary.
    ///
    /// The pointer is borrowed for the lifetime of the store.
    /// Stores without a native form return null.
    fn raw(&self) -> *mut c_void {
        ptr::null_mut()
    }

    fn read_to_string(&self, name: &str) -> Result<String, AssetError> {
        let bytes = self.read(name)?;
        String::from_utf8(bytes).map_err(|e| {
            let e = io::Error::new(io::ErrorKind::InvalidData, e);
            AssetError::Io(e)
        })
    }
}

impl<A> AssetSource for &A
where
    A: AssetSource + ?Sized,
{
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        (**self).read(name)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn raw(&self) -> *mut c_void {
        (**self).raw()
    }
}

impl<A> AssetSource for Box<A>
where
    A: AssetSource + ?Sized,
{
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        (**self).read(name)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn raw(&self) -> *mut c_void {
        (**self).raw()
    }
}

/// Assets stored under a directory.
#[derive(Clone, Debug)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new<P>(root: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> Result<PathBuf, AssetError> {
        let rel = Path::new(name);
        let valid = !name.is_empty()
            && rel
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

        if valid {
            Ok(self.root.join(rel))
        } else {
            Err(AssetError::InvalidName(name.to_owned()))
        }
    }
}

impl AssetSource for DirAssets {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.path(name)?;
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(name.to_owned()),
            _ => AssetError::Io(e),
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.path(name).is_ok_and(|path| path.is_file())
    }
}

/// An empty store for hosts that bundle no assets.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        Err(AssetError::NotFound(name.to_owned()))
    }

    fn exists(&self, _: &str) -> bool {
        false
    }
}

#[derive(Debug)]
pub enum AssetError {
    NotFound(String),
    InvalidName(String),
    Io(io::Error),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "asset {name:?} not found"),
            Self::InvalidName(name) => write!(f, "invalid asset name {name:?}"),
            Self::Io(e) => e.fmt(f),
        }
    }
}

impl error::Error for AssetError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::NotFound(_) | Self::InvalidName(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::env};

    fn scratch(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("glshell-{name}-{}", std::process::id()));
        fs::create_dir_all(dir.join("shaders")).expect("create scratch dir");
        dir
    }

    #[test]
    fn read_dir_assets() -> Result<(), AssetError> {
        let root = scratch("read");
        fs::write(root.join("shaders/shader.vert"), "void main() {}").map_err(AssetError::Io)?;

        let assets = DirAssets::new(root.clone());
        assert!(assets.exists("shaders/shader.vert"), "file exists");
        assert!(!assets.exists("shaders"), "directories are not assets");
        assert_eq!(
            assets.read_to_string("./shaders/shader.vert")?,
            "void main() {}",
            "content",
        );

        assert!(assets.raw().is_null(), "no native handle");
        fs::remove_dir_all(root).map_err(AssetError::Io)?;
        Ok(())
    }

    #[test]
    fn reject_escaping_names() {
        let assets = DirAssets::new(scratch("escape"));
        for name in ["../secret", "/etc/passwd", "shaders/../../x", ""] {
            assert!(
                matches!(assets.read(name), Err(AssetError::InvalidName(_))),
                "{name:?} must be rejected",
            );
        }
    }

    #[test]
    fn missing_asset() {
        let assets = DirAssets::new(scratch("missing"));
        assert!(
            matches!(assets.read("nope.frag"), Err(AssetError::NotFound(name)) if name == "nope.frag"),
            "not found",
        );

        assert!(matches!(NoAssets.read("any"), Err(AssetError::NotFound(_))), "empty store");
    }
}
