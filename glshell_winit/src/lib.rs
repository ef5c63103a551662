//! Runs the glshell surface host on a winit event loop.
//!
//! The GPU path owns one window with a GLES 2 context on top of EGL.
//! Window events are translated into lifecycle calls:
//!
//! | winit             | host                                              |
//! |-------------------|---------------------------------------------------|
//! | first `resumed`   | probe, initial setup                              |
//! | `resumed`         | resumed, surface created on a new context,        |
//! |                   | surface changed                                   |
//! | `suspended`       | paused                                            |
//! | `Resized`         | surface changed                                   |
//! | `RedrawRequested` | draw frame, swap buffers                          |
//!
//! A zero size is never forwarded. On the fallback path every `resumed`
//! hands the text to the [`ShowText`] given to [`run_on`].

mod app;
mod driver;
mod error;
mod surface;
mod text;

pub use {
    crate::{
        app::{Outcome, run, run_on},
        error::Error,
        text::{LogText, ShowText},
    },
    glshell, winit,
};
