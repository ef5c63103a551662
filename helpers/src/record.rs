use {
    glshell::{Collaborator, Surface, assets::AssetSource},
    std::{cell::RefCell, rc::Rc},
};

/// A call observed by a recording fake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    InitialSetup { raw: usize },
    SurfaceCreated,
    SurfaceChanged(i32, i32),
    DrawFrame,
    QueryDisplayString,
    SurfacePause,
    SurfaceResume,
}

/// An ordered log shared between fakes.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Call>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.0.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// A collaborator recording every call.
pub struct Recorder {
    log: Log,
    text: String,
}

impl Recorder {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            text: String::from("OpenGL ES 2 Rendering not supported!"),
        }
    }

    pub fn with_text<S>(mut self, text: S) -> Self
    where
        S: Into<String>,
    {
        self.text = text.into();
        self
    }
}

impl Collaborator for Recorder {
    fn on_initial_setup(&mut self, assets: &dyn AssetSource) {
        let raw = assets.raw().addr();
        self.log.push(Call::InitialSetup { raw });
    }

    fn on_surface_created(&mut self) {
        self.log.push(Call::SurfaceCreated);
    }

    fn on_surface_changed(&mut self, width: i32, height: i32) {
        self.log.push(Call::SurfaceChanged(width, height));
    }

    fn on_draw_frame(&mut self) {
        self.log.push(Call::DrawFrame);
    }

    fn query_display_string(&mut self) -> String {
        self.log.push(Call::QueryDisplayString);
        self.text.clone()
    }
}

/// A platform surface recording pause and resume.
pub struct RecordingSurface {
    log: Log,
}

impl RecordingSurface {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl Surface for RecordingSurface {
    fn pause(&mut self) {
        self.log.push(Call::SurfacePause);
    }

    fn resume(&mut self) {
        self.log.push(Call::SurfaceResume);
    }
}
