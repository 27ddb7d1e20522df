//! Domain types for finished Color Confusion sessions.

pub mod mode;
pub mod record;

pub use mode::{GameMode, ParseModeError};
pub use record::SessionRecord;
