use crate::{assets::AssetSource, collaborator::Collaborator};

/// The platform object behind the rendering surface.
pub trait Surface {
    fn pause(&mut self);
    fn resume(&mut self);
}

impl<S> Surface for &mut S
where
    S: Surface + ?Sized,
{
    fn pause(&mut self) {
        (**self).pause();
    }

    fn resume(&mut self) {
        (**self).resume();
    }
}

/// Handlers for lifecycle transitions driven by the platform.
pub trait Lifecycle {
    fn initial_setup(&mut self, assets: &dyn AssetSource);
    fn surface_created(&mut self);
    fn surface_changed(&mut self, width: i32, height: i32);
    fn draw_frame(&mut self);
    fn paused(&mut self);
    fn resumed(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    SurfaceActive,
    Paused,
}

/// Owns the rendering surface and forwards its lifecycle to a collaborator.
pub struct Host<C, S> {
    collaborator: C,
    surface: Option<S>,
    state: State,
    setup_done: bool,
}

impl<C, S> Host<C, S> {
    pub fn new(collaborator: C) -> Self {
        Self {
            collaborator,
            surface: None,
            state: State::Uninitialized,
            setup_done: false,
        }
    }

    /// Installs the platform surface.
    ///
    /// Pause and resume reach the surface only after this.
    pub fn install(&mut self, surface: S) {
        if self.surface.is_some() {
            log::warn!("replace installed surface");
        }

        self.surface = Some(surface);
    }

    #[inline]
    pub fn is_installed(&self) -> bool {
        self.surface.is_some()
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    #[inline]
    pub fn collaborator_mut(&mut self) -> &mut C {
        &mut self.collaborator
    }

    #[inline]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    #[inline]
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn into_parts(self) -> (C, Option<S>) {
        (self.collaborator, self.surface)
    }
}

impl<C, S> Lifecycle for Host<C, S>
where
    C: Collaborator,
    S: Surface,
{
    fn initial_setup(&mut self, assets: &dyn AssetSource) {
        if self.setup_done {
            log::warn!("initial setup already done");
            return;
        }

        log::debug!("initial setup");
        self.setup_done = true;
        self.collaborator.on_initial_setup(assets);
    }

    fn surface_created(&mut self) {
        log::debug!("surface created");
        self.state = State::SurfaceActive;
        self.collaborator.on_surface_created();
    }

    fn surface_changed(&mut self, width: i32, height: i32) {
        if let State::Uninitialized = self.state {
            log::warn!("surface changed {width} {height} before it was created");
            return;
        }

        log::debug!("surface changed {width} {height}");
        self.collaborator.on_surface_changed(width, height);
    }

    fn draw_frame(&mut self) {
        if let State::Uninitialized = self.state {
            log::warn!("draw frame before the surface was created");
            return;
        }

        self.collaborator.on_draw_frame();
    }

    fn paused(&mut self) {
        let Some(surface) = &mut self.surface else {
            log::debug!("paused (no surface)");
            return;
        };

        log::debug!("paused");
        surface.pause();
        if let State::SurfaceActive = self.state {
            self.state = State::Paused;
        }
    }

    fn resumed(&mut self) {
        let Some(surface) = &mut self.surface else {
            log::debug!("resumed (no surface)");
            return;
        };

        log::debug!("resumed");
        surface.resume();
        if let State::Paused = self.state {
            self.state = State::SurfaceActive;
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::assets::NoAssets};

    #[derive(Default)]
    struct Count {
        created: u32,
        changed: Vec<(i32, i32)>,
        drawn: u32,
    }

    impl Collaborator for Count {
        fn on_initial_setup(&mut self, _: &dyn AssetSource) {}

        fn on_surface_created(&mut self) {
            self.created += 1;
        }

        fn on_surface_changed(&mut self, width: i32, height: i32) {
            self.changed.push((width, height));
        }

        fn on_draw_frame(&mut self) {
            self.drawn += 1;
        }

        fn query_display_string(&mut self) -> String {
            String::new()
        }
    }

    struct Nothing;

    impl Surface for Nothing {
        fn pause(&mut self) {}
        fn resume(&mut self) {}
    }

    #[test]
    fn states() {
        let mut host = Host::<_, Nothing>::new(Count::default());
        host.initial_setup(&NoAssets);
        assert_eq!(host.state(), State::Uninitialized, "initial");

        // not installed, stays uninitialized
        host.resumed();
        assert_eq!(host.state(), State::Uninitialized, "no surface");

        host.install(Nothing);
        host.surface_created();
        assert_eq!(host.state(), State::SurfaceActive, "created");

        host.paused();
        assert_eq!(host.state(), State::Paused, "paused");

        host.paused();
        assert_eq!(host.state(), State::Paused, "paused twice");

        host.resumed();
        assert_eq!(host.state(), State::SurfaceActive, "resumed");
    }

    #[test]
    fn drop_events_before_creation() {
        let mut host = Host::<_, Nothing>::new(Count::default());
        host.surface_changed(1, 1);
        host.draw_frame();
        host.surface_created();
        host.surface_changed(2, 3);
        host.draw_frame();

        let count = host.collaborator();
        assert_eq!(count.created, 1, "created once");
        assert_eq!(count.changed, [(2, 3)], "early resize is dropped");
        assert_eq!(count.drawn, 1, "early draw is dropped");
    }
}
