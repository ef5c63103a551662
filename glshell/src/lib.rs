pub mod assets;
mod collaborator;
mod config;
pub mod host;
pub mod native;
pub mod probe;
mod shell;

pub use crate::{
    collaborator::Collaborator,
    config::{Config, EglRequest, Rgba},
    host::{Host, Lifecycle, State, Surface},
    probe::{Probe, Selection, Version},
    shell::{Fallback, Presentation, start, try_start},
};
