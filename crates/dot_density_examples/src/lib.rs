#![forbid(unsafe_code)]

mod rendering;
mod synthetic;

pub use rendering::{init_tracing, render_dots_to_png, RenderConfig};
pub use synthetic::{blob, SyntheticRegion};
