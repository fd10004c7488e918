//! Error types for micromuse
//!
//! Building and reading a [`Link`](crate::core::Link) cannot fail. The
//! variants here cover the crate's remaining fallible surfaces.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MicromuseError {
    /// A room id string was not a valid UUID
    #[error("Invalid room id '{input}': {source}")]
    InvalidRoomId {
        input: String,
        #[source]
        source: uuid::Error,
    },

    /// The global tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, MicromuseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_room_id_display() {
        let source = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
        let err = MicromuseError::InvalidRoomId {
            input: "not-a-uuid".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("Invalid room id 'not-a-uuid'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_telemetry_display() {
        let err = MicromuseError::Telemetry("already set".to_string());
        assert_eq!(err.to_string(), "Telemetry error: already set");
        assert!(err.source().is_none());
    }
}
