//! # Micromuse
//!
//! Building blocks for a MUD-style navigable map.
//!
//! ## Features
//!
//! - **Directed Links**: An immutable edge from one room to another, labelled by an exit
//! - **Non-owning Room Handles**: Links refer to rooms through [`RoomId`](crate::core::RoomId) keys
//! - **Serde Support**: Links and room ids serialize to JSON/YAML
//! - **Tracing**: Diagnostics through `tracing`, configured with `RUST_LOG`
//!
//! ## Quick Start
//!
//! ```rust
//! use micromuse::prelude::*;
//!
//! let hall = RoomId::new();
//! let kitchen = RoomId::new();
//!
//! let link = Link::new(hall, "north", kitchen);
//!
//! assert_eq!(link.from(), hall);
//! assert_eq!(link.exit(), "north");
//! assert_eq!(link.to(), kitchen);
//! ```

pub mod core;
pub mod telemetry;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::core::{
        error::MicromuseError,
        link::Link,
        room::RoomId,
    };

    pub use crate::telemetry;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
