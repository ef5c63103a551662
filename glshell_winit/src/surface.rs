use {
    crate::error::Error,
    glshell::EglRequest,
    glutin::{
        config::{Api, ColorBufferType, Config, ConfigTemplateBuilder},
        context::{ContextApi, ContextAttributesBuilder, NotCurrentContext, PossiblyCurrentContext},
        display::{Display, DisplayApiPreference, GetGlDisplay},
        prelude::*,
        surface::{self, SwapInterval, WindowSurface},
    },
    glutin_winit::GlWindow,
    raw_window_handle::{HasDisplayHandle, HasWindowHandle},
    std::{mem, num::NonZeroU32},
    winit::{event_loop::ActiveEventLoop, window},
};

enum Context {
    Lost,
    Idle(NotCurrentContext),
    Current {
        context: PossiblyCurrentContext,
        surface: surface::Surface<WindowSurface>,
    },
}

/// A window with a GLES 2 context on top of EGL.
///
/// Pausing drops the window surface and releases the context,
/// resuming builds a new surface and makes the context current again.
pub(crate) struct EglWindow {
    window: window::Window,
    config: Config,
    context: Context,
    fresh: bool,
}

/// A window surface the event loop draws into.
pub(crate) trait Drawable: glshell::Surface {
    fn size(&self) -> (u32, u32);
    fn is_current(&self) -> bool;

    /// Returns `true` once after a new context became current.
    fn take_fresh(&mut self) -> bool;

    fn resize(&self, width: u32, height: u32);
    fn swap_buffers(&self);
    fn request_redraw(&self);
}

impl EglWindow {
    pub(crate) fn new(
        el: &ActiveEventLoop,
        attr: window::WindowAttributes,
        egl: EglRequest,
    ) -> Result<Self, Error> {
        let window = el.create_window(attr).map_err(Error::Os)?;
        let handle = el.display_handle().map_err(Error::Handle)?.as_raw();

        // SAFETY: the handle belongs to the running event loop
        let display = unsafe { Display::new(handle, DisplayApiPreference::Egl) }.map_err(Error::Gl)?;

        // SAFETY: the template doesn't reference a native window
        let configs = unsafe { display.find_configs(template(egl).build()) }.map_err(Error::Gl)?;
        let config = pick(egl, configs, Channels::of).ok_or(Error::NoConfig)?;

        log::debug!(
            "egl config: {channels:?}, samples {samples}",
            channels = Channels::of(&config),
            samples = config.num_samples(),
        );

        Ok(Self {
            window,
            config,
            context: Context::Lost,
            fresh: false,
        })
    }

    fn make_context(&self) -> Result<NotCurrentContext, Error> {
        let handle = self
            .window
            .window_handle()
            .map_err(Error::Handle)?
            .as_raw();

        let attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(glutin::context::Version::new(2, 0))))
            .build(Some(handle));

        // SAFETY: the handle belongs to the window the surface lives in
        unsafe { self.config.display().create_context(&self.config, &attr) }.map_err(Error::Gl)
    }

    fn make_window_surface(&self) -> Result<surface::Surface<WindowSurface>, Error> {
        let attr = self
            .window
            .build_surface_attributes(surface::SurfaceAttributesBuilder::default())
            .map_err(Error::Handle)?;

        // SAFETY: the attributes come from a live window
        unsafe { self.config.display().create_window_surface(&self.config, &attr) }
            .map_err(Error::Gl)
    }
}

impl Drawable for EglWindow {
    #[inline]
    fn size(&self) -> (u32, u32) {
        self.window.inner_size().into()
    }

    #[inline]
    fn is_current(&self) -> bool {
        matches!(self.context, Context::Current { .. })
    }

    #[inline]
    fn take_fresh(&mut self) -> bool {
        mem::take(&mut self.fresh)
    }

    fn resize(&self, width: u32, height: u32) {
        let Context::Current { context, surface } = &self.context else {
            return;
        };

        if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            surface.resize(context, width, height);
        }
    }

    fn swap_buffers(&self) {
        let Context::Current { context, surface } = &self.context else {
            return;
        };

        if let Err(e) = surface.swap_buffers(context) {
            log::warn!("swap buffers: {e}");
        }
    }

    #[inline]
    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

impl glshell::Surface for EglWindow {
    fn pause(&mut self) {
        match mem::replace(&mut self.context, Context::Lost) {
            Context::Current { context, surface } => {
                match context.make_not_current() {
                    Ok(context) => self.context = Context::Idle(context),
                    Err(e) => log::error!("failed to release the context: {e}"),
                }

                drop(surface);
            }
            other => self.context = other,
        }
    }

    fn resume(&mut self) {
        let context = match mem::replace(&mut self.context, Context::Lost) {
            current @ Context::Current { .. } => {
                self.context = current;
                return;
            }
            Context::Idle(context) => context,
            Context::Lost => match self.make_context() {
                Ok(context) => {
                    log::debug!("gles context created");
                    self.fresh = true;
                    context
                }
                Err(e) => {
                    log::error!("failed to create the context: {e}");
                    return;
                }
            },
        };

        let surface = match self.make_window_surface() {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("failed to create the window surface: {e}");
                self.context = Context::Idle(context);
                return;
            }
        };

        let context = match context.make_current(&surface) {
            Ok(context) => context,
            Err(e) => {
                log::error!("failed to make the context current: {e}");
                self.fresh = false;
                return;
            }
        };

        if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            log::warn!("failed to enable vsync: {e}");
        }

        self.context = Context::Current { context, surface };
    }
}

fn template(egl: EglRequest) -> ConfigTemplateBuilder {
    let mut template = ConfigTemplateBuilder::new().with_api(Api::GLES2);
    if let Some(color) = egl.color {
        template = template
            .with_buffer_type(ColorBufferType::Rgb {
                r_size: color.r,
                g_size: color.g,
                b_size: color.b,
            })
            .with_alpha_size(color.a);
    }

    if let Some(depth) = egl.depth {
        template = template.with_depth_size(depth);
    }

    if let Some(stencil) = egl.stencil {
        template = template.with_stencil_size(stencil);
    }

    template
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Channels {
    rgb: Option<(u8, u8, u8)>,
    alpha: u8,
    depth: u8,
    stencil: u8,
}

impl Channels {
    fn of(config: &Config) -> Self {
        let rgb = match config.color_buffer_type() {
            Some(ColorBufferType::Rgb {
                r_size,
                g_size,
                b_size,
            }) => Some((r_size, g_size, b_size)),
            _ => None,
        };

        Self {
            rgb,
            alpha: config.alpha_size(),
            depth: config.depth_size(),
            stencil: config.stencil_size(),
        }
    }
}

/// Picks the item whose channels match the request best.
///
/// Returns `None` when the display offers nothing.
fn pick<I, F>(egl: EglRequest, items: I, channels: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> Channels,
{
    items
        .into_iter()
        .max_by_key(|item| score(egl, channels(item)))
}

/// Counts the channels matching the request exactly.
///
/// EGL treats requested sizes as minimums, so the driver may offer
/// deeper configs first.
fn score(egl: EglRequest, channels: Channels) -> u32 {
    let mut score = 0;
    if let Some(color) = egl.color {
        score += u32::from(channels.rgb == Some((color.r, color.g, color.b)));
        score += u32::from(channels.alpha == color.a);
    }

    score += u32::from(egl.depth == Some(channels.depth));
    score += u32::from(egl.stencil == Some(channels.stencil));
    score
}
