use thiserror::Error;

/// Errors that can occur while loading the ingredient registry
///
/// Marker payloads and display names act as identifiers, so duplicates are
/// rejected here instead of being resolved by first-match at lookup time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two entries are keyed by the same marker payload
    #[error("Marker payload {marker_payload:?} is used by both {first} and {second}")]
    DuplicateMarkerPayload {
        marker_payload: String,
        first: String,
        second: String,
    },

    /// Two entries share the same display name
    #[error("Display name {display_name:?} is configured more than once")]
    DuplicateDisplayName { display_name: String },

    /// An entry has an empty marker payload, which no decoded marker can match
    #[error("Ingredient {display_name:?} has an empty marker payload")]
    EmptyMarkerPayload { display_name: String },

    /// An entry has an empty display name, which no step can reference
    #[error("Ingredient with marker payload {marker_payload:?} has an empty display name")]
    EmptyDisplayName { marker_payload: String },
}
