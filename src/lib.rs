//! Off-screen view coordination for hosted web contents.
//!
//! Sits between a native window and the render views of a web page, sending
//! painted frames to a callback instead of a window surface. See
//! [`coordinator::ViewCoordinator`] for the entry point.

pub mod config;
pub mod coordinator;
pub mod drag;
pub mod errors;
pub mod host;
pub mod render;

pub use config::ViewConfig;
pub use coordinator::{ViewCoordinator, WebContentsView};
pub use errors::{ConfigError, ViewError};
