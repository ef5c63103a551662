use {
    crate::{
        assets::AssetSource,
        collaborator::Collaborator,
        config::Config,
        host::{Host, Lifecycle, Surface},
        probe::Selection,
    },
    std::convert::Infallible,
};

/// The presentation chosen at startup.
pub enum Presentation<C, S> {
    Gpu(Host<C, S>),
    Fallback(Fallback<C>),
}

impl<C, S> Presentation<C, S> {
    #[inline]
    pub fn selection(&self) -> Selection {
        match self {
            Self::Gpu(_) => Selection::GpuSurface,
            Self::Fallback(_) => Selection::FallbackText,
        }
    }

    #[inline]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Gpu(_) => None,
            Self::Fallback(fallback) => Some(fallback.text()),
        }
    }

    pub fn collaborator(&self) -> &C {
        match self {
            Self::Gpu(host) => host.collaborator(),
            Self::Fallback(fallback) => &fallback.collaborator,
        }
    }

    pub fn into_collaborator(self) -> C {
        match self {
            Self::Gpu(host) => host.into_parts().0,
            Self::Fallback(fallback) => fallback.collaborator,
        }
    }
}

/// The static text shown instead of a surface.
pub struct Fallback<C> {
    text: String,
    collaborator: C,
}

impl<C> Fallback<C> {
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Probes the device once and sets up the selected presentation.
///
/// The GPU path builds the surface with `make_surface` and installs it
/// into a [`Host`]. The fallback path asks the collaborator for its
/// display string once. Both paths then forward the initial setup.
pub fn start<C, S, F>(
    config: &Config,
    collaborator: C,
    assets: &dyn AssetSource,
    make_surface: F,
) -> Presentation<C, S>
where
    C: Collaborator,
    S: Surface,
    F: FnOnce() -> S,
{
    let res = try_start(config, collaborator, assets, || {
        Ok::<_, Infallible>(make_surface())
    });

    match res {
        Ok(presentation) => presentation,
        Err(never) => match never {},
    }
}

/// Like [`start`], but the surface construction may fail.
///
/// # Errors
/// Returns the error of `make_surface`. Nothing is forwarded
/// to the collaborator in that case.
pub fn try_start<C, S, F, E>(
    config: &Config,
    mut collaborator: C,
    assets: &dyn AssetSource,
    make_surface: F,
) -> Result<Presentation<C, S>, E>
where
    C: Collaborator,
    S: Surface,
    F: FnOnce() -> Result<S, E>,
{
    let probe = config.probe();
    let selection = probe.select();
    log::info!(
        "reported version {reported} ({raw:#x}), assume capable: {assume}, selected {selection:?}",
        reported = probe.reported,
        raw = probe.reported.raw(),
        assume = probe.assume_capable,
    );

    let presentation = match selection {
        Selection::GpuSurface => {
            let surface = make_surface()?;
            let mut host = Host::new(collaborator);
            host.install(surface);
            host.initial_setup(assets);
            Presentation::Gpu(host)
        }
        Selection::FallbackText => {
            let text = collaborator.query_display_string();
            log::info!("fallback text: {text}");
            collaborator.on_initial_setup(assets);
            Presentation::Fallback(Fallback { text, collaborator })
        }
    };

    Ok(presentation)
}
