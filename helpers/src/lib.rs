mod assets;
mod record;

pub use crate::{assets::*, record::*};
