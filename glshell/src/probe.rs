use std::fmt;

/// A graphics API version in the platform's integer encoding.
///
/// The major version sits in the upper 16 bits and the minor version
/// in the lower 16 bits, so OpenGL ES 3.2 is `0x0003_0002`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u32);

impl Version {
    /// The minimum reported value that selects the GPU surface.
    ///
    /// The value sits below the encoding of any major version, so every
    /// [`Version::new`] with `major >= 1` passes, ES 1.x included. Only
    /// unset or malformed reports fall short of it.
    pub const THRESHOLD: Self = Self(0x2000);

    #[inline]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self((major as u32) << 16 | minor as u32)
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn major(self) -> u16 {
        (self.0 >> 16) as u16
    }

    #[inline]
    pub const fn minor(self) -> u16 {
        self.0 as u16
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// The presentation path chosen at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    GpuSurface,
    FallbackText,
}

impl Selection {
    #[inline]
    pub fn is_gpu(self) -> bool {
        matches!(self, Self::GpuSurface)
    }
}

/// Inputs of the capability probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    pub reported: Version,

    /// Treats the device as capable whatever it reports.
    /// Meant for environments that under-report, such as emulators.
    pub assume_capable: bool,
}

impl Probe {
    #[inline]
    pub fn select(self) -> Selection {
        select(self.reported, self.assume_capable)
    }
}

/// Decides the presentation path.
#[inline]
pub fn select(reported: Version, assume_capable: bool) -> Selection {
    if reported >= Version::THRESHOLD || assume_capable {
        Selection::GpuSurface
    } else {
        Selection::FallbackText
    }
}

/// Queries the graphics API version the device reports.
///
/// Reads the `ro.opengles.version` system property, the value
/// behind `ConfigurationInfo.reqGlEsVersion`.
#[cfg(target_os = "android")]
pub fn device_version() -> Option<Version> {
    use std::ffi::{CStr, c_char};

    const NAME: &CStr = c"ro.opengles.version";

    let mut value = [0 as c_char; libc::PROP_VALUE_MAX as usize];

    // SAFETY: the buffer holds `PROP_VALUE_MAX` bytes as the call requires
    let len = unsafe { libc::__system_property_get(NAME.as_ptr(), value.as_mut_ptr()) };
    if len <= 0 {
        log::warn!("system property {NAME:?} is not set");
        return None;
    }

    // SAFETY: on success the value is nul-terminated within the buffer
    let value = unsafe { CStr::from_ptr(value.as_ptr()) };
    let parsed = value.to_str().ok().and_then(parse_property);
    if parsed.is_none() {
        log::warn!("failed to parse {NAME:?}: {value:?}");
    }

    parsed
}

/// Desktop EGL hosts are expected to provide an ES 2 context.
#[cfg(not(target_os = "android"))]
pub fn device_version() -> Option<Version> {
    Some(Version::new(2, 0))
}

#[cfg_attr(not(any(test, target_os = "android")), expect(dead_code))]
fn parse_property(value: &str) -> Option<Version> {
    value.trim().parse().ok().map(Version::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding() {
        let v = Version::new(3, 2);
        assert_eq!(v.raw(), 0x0003_0002, "major goes to the upper half");
        assert_eq!(v.major(), 3, "major");
        assert_eq!(v.minor(), 2, "minor");
        assert_eq!(v.to_string(), "3.2", "display");
    }

    #[test]
    fn property() {
        assert_eq!(parse_property("196610"), Some(Version::new(3, 2)), "es 3.2");
        assert_eq!(parse_property(" 131072\n"), Some(Version::new(2, 0)), "es 2.0");
        assert_eq!(parse_property("0x20000"), None, "hex is not accepted");
        assert_eq!(parse_property(""), None, "empty");
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(select(Version::THRESHOLD, false).is_gpu(), "threshold itself");
        assert!(!select(Version::from_raw(0x1fff), false).is_gpu(), "below");
    }

    #[test]
    fn every_major_version_passes() {
        assert!(Version::new(1, 0) > Version::THRESHOLD, "es 1.0 encodes above");
        assert!(select(Version::new(1, 1), false).is_gpu(), "es 1.1");
        assert!(!select(Version::new(0, 1), false).is_gpu(), "minor only");
    }
}
