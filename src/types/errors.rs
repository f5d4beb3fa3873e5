//! Application error types.
//!
//! The event path itself cannot fail: serialization of a well-formed
//! event is total. Errors only arise at the wire (JSON encoding for the
//! host boundary) and when decoding host-supplied configuration, so the
//! enum stays small. All errors use `thiserror` for automatic Error
//! trait derivation.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the event bridge.
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization/deserialization errors (wire encoding, config decoding).
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_json_errors_convert() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = err.into();
        assert!(err.to_string().starts_with("serialization error:"));
    }
}
