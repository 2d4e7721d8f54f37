pub mod format;
pub mod interpret;
pub mod render;
pub mod text;
pub mod viewer;

pub use format::{format_bytes, format_size};
pub use interpret::interpret;
pub use render::render;
pub use viewer::{LoadOutcome, Trigger, TreeViewer, ViewState, ViewerContext};
