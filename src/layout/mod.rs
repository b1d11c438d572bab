//! Layout engine: geometry for positioned trees

mod config;
mod engine;
mod error;
mod types;

pub use config::LayoutConfig;
pub use engine::compute;
pub use error::LayoutError;
pub use types::{Connector, LayoutTree, PositionedElement};
