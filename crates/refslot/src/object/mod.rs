//! Object Module - Container Model
//!
//! The concrete containers slot locations are resolved against:
//! class layouts, heap instances, per-class static blocks, and
//! reference arrays.

pub mod array;
pub mod instance;
pub mod layout;
pub mod statics;

mod block;

pub use array::{ArrayAddressing, RefArray};
pub use instance::ObjectInstance;
pub use layout::{ClassLayout, ClassLayoutBuilder, FieldKind, REF_SHIFT, REF_SIZE};
pub use statics::{lookup_class, register_class, StaticStorage};
