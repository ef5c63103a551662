use {
    raw_window_handle::HandleError,
    std::{error, fmt},
    winit::error::{EventLoopError, OsError},
};

#[derive(Debug)]
pub enum Error {
    EventLoop(EventLoopError),
    Os(OsError),
    Handle(HandleError),
    NoConfig,
    Gl(glutin::error::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(e) => e.fmt(f),
            Self::Os(e) => e.fmt(f),
            Self::Handle(e) => e.fmt(f),
            Self::NoConfig => write!(f, "the display has no matching egl config"),
            Self::Gl(e) => e.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::EventLoop(e) => Some(e),
            Self::Os(e) => Some(e),
            Self::Handle(e) => Some(e),
            Self::NoConfig => None,
            Self::Gl(e) => Some(e),
        }
    }
}
