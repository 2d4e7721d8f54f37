pub mod cli;
pub mod core;
pub mod dom;
pub mod error;
pub mod models;
pub mod source;

pub use crate::core::{LoadOutcome, TreeViewer, ViewerContext};
pub use crate::error::{InvalidSizeError, LoadError};
