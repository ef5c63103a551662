use {
    crate::{
        driver::Driver,
        error::Error,
        surface::EglWindow,
        text::{LogText, ShowText},
    },
    glshell::{Collaborator, Config, Presentation, Selection, assets::AssetSource},
    winit::{
        application::ApplicationHandler,
        event,
        event_loop::{self, ActiveEventLoop, EventLoop},
        window,
    },
};

/// What the shell presented before the event loop ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// `None` if the application was never resumed.
    pub selection: Option<Selection>,

    /// The fallback text, if it was shown.
    pub text: Option<String>,
}

/// Runs the shell on a new event loop until it exits.
///
/// The fallback text goes to the window title and the log.
///
/// # Errors
/// Returns [`Error`] if the event loop can't be created or the
/// selected window can't be built.
pub fn run<C, A>(config: Config, collaborator: C, assets: A) -> Result<Outcome, Error>
where
    C: Collaborator,
    A: AssetSource,
{
    let el = EventLoop::new().map_err(Error::EventLoop)?;
    run_on(el, config, collaborator, assets, LogText)
}

/// Runs the shell on the given event loop until it exits.
///
/// On Android the event loop has to be built with the `AndroidApp`.
/// The `text` shows the fallback text each time the application resumes.
///
/// # Errors
/// See [`run`].
pub fn run_on<C, A, T>(
    el: EventLoop<()>,
    config: Config,
    collaborator: C,
    assets: A,
    text: T,
) -> Result<Outcome, Error>
where
    C: Collaborator,
    A: AssetSource,
    T: ShowText,
{
    el.set_control_flow(event_loop::ControlFlow::Wait);

    let mut app = App {
        config,
        assets,
        pending: Some(collaborator),
        driver: Driver::new(text),
        text_window: None,
        error: None,
    };

    el.run_app(&mut app).map_err(Error::EventLoop)?;
    app.finish()
}

struct App<C, A, T> {
    config: Config,
    assets: A,
    pending: Option<C>,
    driver: Driver<C, EglWindow, T>,
    #[expect(dead_code, reason = "keeps the fallback window open")]
    text_window: Option<window::Window>,
    error: Option<Error>,
}

impl<C, A, T> App<C, A, T>
where
    C: Collaborator,
    A: AssetSource,
    T: ShowText,
{
    fn start(&mut self, el: &ActiveEventLoop, collaborator: C) -> Result<(), Error> {
        let attr = window::Window::default_attributes().with_title(self.config.title());
        let egl = self.config.egl();
        let presentation = glshell::try_start(&self.config, collaborator, &self.assets, || {
            EglWindow::new(el, attr.clone(), egl)
        })?;

        if let Presentation::Fallback(fallback) = &presentation {
            let attr = attr.with_title(fallback.text());
            self.text_window = Some(el.create_window(attr).map_err(Error::Os)?);
        }

        self.driver.start(presentation);
        Ok(())
    }

    fn finish(self) -> Result<Outcome, Error> {
        if let Some(e) = self.error {
            return Err(e);
        }

        let presentation = self.driver.presentation();
        Ok(Outcome {
            selection: presentation.map(Presentation::selection),
            text: presentation.and_then(Presentation::text).map(str::to_owned),
        })
    }
}

impl<C, A, T> ApplicationHandler for App<C, A, T>
where
    C: Collaborator,
    A: AssetSource,
    T: ShowText,
{
    fn resumed(&mut self, el: &ActiveEventLoop) {
        log::debug!("resumed");
        if let Some(collaborator) = self.pending.take() {
            if let Err(e) = self.start(el, collaborator) {
                log::error!("failed to start: {e}");
                self.error = Some(e);
                el.exit();
                return;
            }
        }

        self.driver.resumed();
    }

    fn suspended(&mut self, _: &ActiveEventLoop) {
        log::debug!("suspended");
        self.driver.suspended();
    }

    fn window_event(&mut self, el: &ActiveEventLoop, id: window::WindowId, event: event::WindowEvent) {
        match event {
            event::WindowEvent::Resized(size) => {
                log::debug!("resized {id:?}: {} {}", size.width, size.height);
                self.driver.resized(size.width, size.height);
            }
            event::WindowEvent::RedrawRequested => self.driver.redraw(),
            event::WindowEvent::CloseRequested => {
                log::debug!("close requested {id:?}");
                el.exit();
            }
            _ => {}
        }
    }
}
