//! The native collaborator loaded from a shared library.

use {
    crate::{assets::AssetSource, collaborator::Collaborator},
    std::{
        error,
        ffi::{CStr, OsStr, c_char, c_void},
        fmt,
    },
};

/// The library name without platform prefix and suffix.
pub const DEFAULT_NAME: &str = "native-lib";

type Setup = unsafe extern "C" fn(*mut c_void);
type Notify = unsafe extern "C" fn();
type Resize = unsafe extern "C" fn(i32, i32);
type Text = unsafe extern "C" fn() -> *const c_char;

/// A collaborator whose calls go to C ABI symbols of a shared library.
///
/// The library must export:
///
/// ```c
/// void on_initial_setup(void *assets);
/// void on_surface_created(void);
/// void on_surface_changed(int32_t width, int32_t height);
/// void on_draw_frame(void);
/// const char *query_display_string(void);
/// ```
///
/// The string returned by `query_display_string` stays owned by the library
/// and is copied before the call returns.
pub struct Library {
    on_initial_setup: Setup,
    on_surface_created: Notify,
    on_surface_changed: Resize,
    on_draw_frame: Notify,
    query_display_string: Text,

    // keeps the symbols above valid
    _lib: libloading::Library,
}

impl Library {
    /// Loads the library and resolves every symbol up front.
    ///
    /// # Errors
    /// Returns [`LoadError`] if the library can't be opened
    /// or one of the symbols is missing.
    ///
    /// # Safety
    /// Loading runs the library's initializers, and the exported symbols
    /// must have exactly the signatures listed on [`Library`].
    pub unsafe fn load<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<OsStr>,
    {
        let path = path.as_ref();
        log::debug!("load native library {path:?}");

        // SAFETY: the caller upholds the initializer contract
        let lib = unsafe { libloading::Library::new(path).map_err(LoadError::Open)? };

        // SAFETY: the caller guarantees the symbol signatures
        unsafe {
            Ok(Self {
                on_initial_setup: resolve(&lib, c"on_initial_setup")?,
                on_surface_created: resolve(&lib, c"on_surface_created")?,
                on_surface_changed: resolve(&lib, c"on_surface_changed")?,
                on_draw_frame: resolve(&lib, c"on_draw_frame")?,
                query_display_string: resolve(&lib, c"query_display_string")?,
                _lib: lib,
            })
        }
    }
}

unsafe fn resolve<T>(lib: &libloading::Library, name: &'static CStr) -> Result<T, LoadError>
where
    T: Copy,
{
    // SAFETY: forwarded to the caller
    match unsafe { lib.get::<T>(name.to_bytes_with_nul()) } {
        Ok(symbol) => Ok(*symbol),
        Err(source) => Err(LoadError::Symbol { name, source }),
    }
}

/// Loads the collaborator under its default name from the library search path.
///
/// # Errors
/// See [`Library::load`].
///
/// # Safety
/// See [`Library::load`].
pub unsafe fn load_native_collaborator() -> Result<Library, LoadError> {
    let name = libloading::library_filename(DEFAULT_NAME);

    // SAFETY: forwarded to the caller
    unsafe { Library::load(name) }
}

impl Collaborator for Library {
    fn on_initial_setup(&mut self, assets: &dyn AssetSource) {
        let raw = assets.raw();
        log::trace!("native on_initial_setup({raw:?})");

        // SAFETY: the symbol was resolved with this signature in `load`
        unsafe { (self.on_initial_setup)(raw) }
    }

    fn on_surface_created(&mut self) {
        log::trace!("native on_surface_created");

        // SAFETY: the symbol was resolved with this signature in `load`
        unsafe { (self.on_surface_created)() }
    }

    fn on_surface_changed(&mut self, width: i32, height: i32) {
        log::trace!("native on_surface_changed({width}, {height})");

        // SAFETY: the symbol was resolved with this signature in `load`
        unsafe { (self.on_surface_changed)(width, height) }
    }

    fn on_draw_frame(&mut self) {
        log::trace!("native on_draw_frame");

        // SAFETY: the symbol was resolved with this signature in `load`
        unsafe { (self.on_draw_frame)() }
    }

    fn query_display_string(&mut self) -> String {
        log::trace!("native query_display_string");

        // SAFETY: the symbol was resolved with this signature in `load`
        let ptr = unsafe { (self.query_display_string)() };
        if ptr.is_null() {
            log::warn!("native query_display_string returned null");
            return String::new();
        }

        // SAFETY: the library returns a nul-terminated string it owns
        let text = unsafe { CStr::from_ptr(ptr) };
        text.to_string_lossy().into_owned()
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum LoadError {
    Open(libloading::Error),
    Symbol {
        name: &'static CStr,
        source: libloading::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(e) => write!(f, "failed to open native library: {e}"),
            Self::Symbol { name, source } => {
                write!(f, "native library has no symbol {name:?}: {source}")
            }
        }
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Open(e) | Self::Symbol { source: e, .. } => Some(e),
        }
    }
}
