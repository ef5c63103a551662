use {
    crate::probe::{self, Probe, Version},
    std::borrow::Cow,
};

/// Startup configuration of the shell.
#[derive(Clone, Debug)]
pub struct Config {
    title: Cow<'static, str>,
    reported_version: Option<Version>,
    assume_capable: bool,
    egl: Option<EglRequest>,
}

impl Config {
    #[inline]
    pub fn with_title<S>(mut self, title: S) -> Self
    where
        S: Into<String>,
    {
        self.title = Cow::Owned(title.into());
        self
    }

    /// Overrides the version the device reports.
    #[inline]
    pub fn with_reported_version<V>(mut self, version: V) -> Self
    where
        V: Into<Option<Version>>,
    {
        self.reported_version = version.into();
        self
    }

    /// Treats the environment as capable regardless of the reported version.
    ///
    /// Nothing sets this automatically. Decide per build or per product
    /// which environments under-report, an emulator being the usual case.
    #[inline]
    pub fn with_assume_capable(mut self, assume_capable: bool) -> Self {
        self.assume_capable = assume_capable;
        self
    }

    #[inline]
    pub fn with_egl(mut self, egl: EglRequest) -> Self {
        self.egl = Some(egl);
        self
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn assume_capable(&self) -> bool {
        self.assume_capable
    }

    /// The EGL configuration to request.
    ///
    /// An explicit request wins. Otherwise an assumed capable
    /// environment gets [`EglRequest::EMULATOR`].
    #[inline]
    pub fn egl(&self) -> EglRequest {
        match self.egl {
            Some(egl) => egl,
            None if self.assume_capable => EglRequest::EMULATOR,
            None => EglRequest::default(),
        }
    }

    /// Resolves the probe inputs, asking the device when no version is set.
    pub fn probe(&self) -> Probe {
        let reported = self
            .reported_version
            .or_else(probe::device_version)
            .unwrap_or_default();

        Probe {
            reported,
            assume_capable: self.assume_capable,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: Cow::Borrowed("glshell"),
            reported_version: None,
            assume_capable: false,
            egl: None,
        }
    }
}

/// Channel sizes of the requested EGL configuration.
///
/// `None` leaves the choice to the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EglRequest {
    pub color: Option<Rgba>,
    pub depth: Option<u8>,
    pub stencil: Option<u8>,
}

impl EglRequest {
    /// RGBA 8888 with a 16 bit depth buffer and no stencil.
    pub const EMULATOR: Self = Self {
        color: Some(Rgba {
            r: 8,
            g: 8,
            b: 8,
            a: 8,
        }),
        depth: Some(16),
        stencil: Some(0),
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}
