//! Error Module - Refslot Error Types
//!
//! Defines all error types used by the accessor layer.
//!
//! The failure surface is deliberately narrow: only *resolution* can
//! fail. Once a [`SlotLocation`](crate::SlotLocation) has been handed
//! out, every ordered or atomic operation on it is total — mismatch in
//! a compare operation is reported through the return value, never
//! through an error channel. Operating on a location whose container
//! has been dropped is a caller contract violation, not a reported
//! error.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for slot resolution and layout construction
#[derive(Debug, Error)]
pub enum SlotError {
    /// Class has not been registered with the static-storage registry
    ///
    /// **When returned:** Resolving a class-level field before
    /// [`register_class`](crate::object::statics::register_class) ran
    /// for that class name.
    #[error("Unknown class: {class}")]
    UnknownClass { class: String },

    /// Field is not declared on the class layout
    ///
    /// **When returned:** Field name lookup failed on the layout's
    /// instance or static field table.
    #[error("Unknown field: {class}.{field}")]
    UnknownField { class: String, field: String },

    /// Field exists but is not a reference slot
    ///
    /// **When returned:** The field is declared as a primitive word;
    /// this layer only hands out reference-typed locations.
    #[error("Field {class}.{field} is not a reference slot")]
    NotAReference { class: String, field: String },

    /// Field declared twice on one layout
    ///
    /// **When returned:** The layout builder saw the same field name
    /// twice (instance and static tables are checked independently).
    #[error("Duplicate field: {class}.{field}")]
    DuplicateField { class: String, field: String },

    /// Array index outside `0..length`
    ///
    /// **When returned:** Resolving an element location with a
    /// malformed index. Bounds are checked at resolution time only;
    /// offsets computed through
    /// [`ArrayAddressing`](crate::object::array::ArrayAddressing) are
    /// unchecked by design.
    #[error("Index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Invalid layout geometry
    #[error("Layout configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Result type alias for refslot operations
pub type Result<T> = std::result::Result<T, SlotError>;
