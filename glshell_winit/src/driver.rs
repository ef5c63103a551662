use {
    crate::{surface::Drawable, text::ShowText},
    glshell::{Collaborator, Host, Lifecycle, Presentation},
};

/// Translates event loop callbacks into lifecycle calls.
pub(crate) struct Driver<C, S, T> {
    presentation: Option<Presentation<C, S>>,
    text: T,
}

impl<C, S, T> Driver<C, S, T>
where
    C: Collaborator,
    S: Drawable,
    T: ShowText,
{
    pub(crate) fn new(text: T) -> Self {
        Self {
            presentation: None,
            text,
        }
    }

    #[inline]
    pub(crate) fn presentation(&self) -> Option<&Presentation<C, S>> {
        self.presentation.as_ref()
    }

    #[inline]
    pub(crate) fn is_started(&self) -> bool {
        self.presentation.is_some()
    }

    pub(crate) fn start(&mut self, presentation: Presentation<C, S>) {
        if self.is_started() {
            log::warn!("replace running presentation");
        }

        self.presentation = Some(presentation);
    }

    fn host(&mut self) -> Option<&mut Host<C, S>> {
        match &mut self.presentation {
            Some(Presentation::Gpu(host)) => Some(host),
            _ => None,
        }
    }

    pub(crate) fn resumed(&mut self) {
        let host = match &mut self.presentation {
            Some(Presentation::Gpu(host)) => host,
            Some(Presentation::Fallback(fallback)) => {
                self.text.show_text(fallback.text());
                return;
            }
            None => return,
        };

        host.resumed();
        let (fresh, (width, height)) = match host.surface_mut() {
            Some(surface) if surface.is_current() => (surface.take_fresh(), surface.size()),
            _ => return,
        };

        if fresh {
            host.surface_created();
        }

        resize(host, width, height);
        if let Some(surface) = host.surface() {
            surface.request_redraw();
        }
    }

    pub(crate) fn suspended(&mut self) {
        if let Some(host) = self.host() {
            host.paused();
        }
    }

    pub(crate) fn resized(&mut self, width: u32, height: u32) {
        if let Some(host) = self.host() {
            resize(host, width, height);
        }
    }

    pub(crate) fn redraw(&mut self) {
        let Some(host) = self.host() else {
            return;
        };

        if !host.surface().is_some_and(S::is_current) {
            log::debug!("redraw requested (inactive)");
            return;
        }

        host.draw_frame();
        if let Some(surface) = host.surface() {
            surface.swap_buffers();
            surface.request_redraw();
        }
    }
}

fn resize<C, S>(host: &mut Host<C, S>, width: u32, height: u32)
where
    C: Collaborator,
    S: Drawable,
{
    let Some(surface) = host.surface() else {
        return;
    };

    if !surface.is_current() {
        return;
    }

    if width == 0 || height == 0 {
        log::debug!("skip empty size {width} {height}");
        return;
    }

    surface.resize(width, height);
    host.surface_changed(clamp(width), clamp(height));
}

fn clamp(size: u32) -> i32 {
    i32::try_from(size).unwrap_or(i32::MAX)
}
