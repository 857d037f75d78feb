//! # Refslot - Ordered and Atomic Access to Reference Slots
//!
//! Refslot is a low-level accessor layer for a single reference-typed
//! storage slot: an object's instance field, a class-level (static)
//! field, or one element of a reference array. Three physically
//! different addressing schemes are unified into one
//! [`SlotLocation`] — a `(base, offset)` pair — and every read, write,
//! and atomic update then operates uniformly on that pair under an
//! explicit consistency level.
//!
//! ## Overview
//!
//! - **Location resolution**: [`SlotLocation::instance_field`],
//!   [`SlotLocation::static_field`], and
//!   [`SlotLocation::array_element`] compute the `(base, offset)` pair
//!   for the three container kinds. Resolution is the only fallible
//!   surface ([`SlotError`]).
//! - **Ordered access**: [`access::get`] / [`access::put`] under five
//!   [`AccessMode`]s — plain, opaque, acquire, release, volatile —
//!   plus named per-mode wrappers.
//! - **Atomic update**: strong and weak compare-and-swap,
//!   compare-and-exchange returning the previous word, and atomic
//!   swap, all lock-free on the slot word itself.
//!
//! Slot values are reference *words* (`usize`), identity-compared,
//! with [`NULL_REF`] as the null reference. The layer stores no
//! metadata beyond the raw word.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use refslot::{access, ClassLayout, ObjectInstance, SlotLocation, NULL_REF};
//!
//! fn main() -> Result<(), refslot::SlotError> {
//!     // Describe the type once...
//!     let layout = Arc::new(ClassLayout::builder("Holder").ref_field("value").build()?);
//!
//!     // ...allocate an instance and resolve its field once...
//!     let object = ObjectInstance::new(layout);
//!     let slot = SlotLocation::instance_field(&object, "value")?;
//!
//!     // ...then access the slot under the ordering you need.
//!     static SENTINEL: u8 = 1;
//!     let word = &SENTINEL as *const u8 as usize;
//!     unsafe {
//!         assert_eq!(access::get_volatile(slot), NULL_REF);
//!         access::put_release(slot, word);
//!         assert_eq!(access::get_acquire(slot), word);
//!         assert!(access::compare_and_swap(slot, word, NULL_REF));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Safety
//!
//! Resolution is safe and fallible; access is `unsafe` and total. Once
//! a location is resolved, no operation on it reports an error —
//! compare operations signal mismatch through their return value. The
//! caller's side of the contract is lifetime only: a location must not
//! outlive the container it was resolved against, and is never valid
//! for any other container.
//!
//! ## Concurrency
//!
//! All operations are non-blocking and complete synchronously; atomic
//! updates are indivisible via the hardware compare-exchange/swap on
//! the slot word. Plain and opaque establish no cross-thread
//! visibility; acquire/release form one-directional happens-before
//! edges; volatile and the atomic-update family are globally ordered
//! with respect to each other. No locks are involved on the access
//! path.
//!
//! ## Modules
//!
//! - [`access`]: ordered get/put and atomic updates
//! - [`config`]: layout geometry parameters
//! - [`error`]: error types
//! - [`location`]: the `(base, offset)` abstraction and resolvers
//! - [`object`]: container model (layouts, instances, statics, arrays)

pub mod access;
pub mod config;
pub mod error;
pub mod location;
pub mod object;

pub use access::AccessMode;
pub use config::LayoutConfig;
pub use error::{Result, SlotError};
pub use location::SlotLocation;
pub use object::{
    register_class, ArrayAddressing, ClassLayout, ObjectInstance, RefArray, StaticStorage,
};

/// The null reference word
pub const NULL_REF: usize = 0;

/// Refslot version string from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
