//! Data models
//!
//! Shared between the public directory and the back office. Shapes mirror
//! the storage rows; parsing is tolerant because the rows predate this
//! crate and older import paths wrote slightly different variants.

pub mod branch;
pub mod message;
pub mod schedule;
pub mod settings;

// Re-exports
pub use branch::*;
pub use message::*;
pub use schedule::*;
pub use settings::*;
