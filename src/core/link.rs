//! Directed links between rooms

use crate::core::room::RoomId;
use serde::{Deserialize, Serialize};

/// A directed, immutable edge from one room to another
///
/// The exit is the label a player uses to traverse the link (e.g. "north",
/// "climb ladder"). It is opaque text: nothing here checks that it is
/// non-empty or that the rooms exist. That is left to whoever builds the map.
///
/// Rooms are referenced by [`RoomId`] only, so a link never owns the rooms
/// it connects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    from: RoomId,
    exit: String,
    to: RoomId,
}

impl Link {
    /// Create a new link
    pub fn new(from: RoomId, exit: impl Into<String>, to: RoomId) -> Self {
        Self {
            from,
            exit: exit.into(),
            to,
        }
    }

    /// The room this link leaves from
    pub fn from(&self) -> RoomId {
        self.from
    }

    /// The exit label
    pub fn exit(&self) -> &str {
        &self.exit
    }

    /// The room this link arrives at
    pub fn to(&self) -> RoomId {
        self.to
    }

    /// Whether the link leads back into the room it leaves from
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    pub fn into_parts(self) -> (RoomId, String, RoomId) {
        (self.from, self.exit, self.to)
    }
}
