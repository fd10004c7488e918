//! Core module containing the map's fundamental types

pub mod error;
pub mod link;
pub mod room;

pub use error::{MicromuseError, Result};
pub use link::Link;
pub use room::RoomId;
