//! Ordered Accessor - Get and Put Under a Chosen Consistency Level
//!
//! Reads and writes on a resolved [`SlotLocation`], parameterized by
//! [`AccessMode`]. Each operation acts on the single reference word at
//! `base + offset` and never fails: bounds and field validity were the
//! resolver's responsibility, and a stale location is a caller contract
//! violation, not a handled error.

use crate::access::mode::AccessMode;
use crate::access::slot;
use crate::location::SlotLocation;

/// Read the slot's current reference word under `mode`
///
/// Returns the stored word, possibly [`NULL_REF`](crate::NULL_REF).
///
/// # Safety
///
/// - `loc` must have been resolved against a container that is still
///   alive and unmoved
/// - the container outlives this call
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use refslot::{access, AccessMode, ClassLayout, ObjectInstance, SlotLocation, NULL_REF};
///
/// let layout = Arc::new(ClassLayout::builder("Holder").ref_field("v").build()?);
/// let object = ObjectInstance::new(layout);
/// let slot = SlotLocation::instance_field(&object, "v")?;
///
/// unsafe {
///     assert_eq!(access::get(slot, AccessMode::Plain), NULL_REF);
/// }
/// # Ok::<(), refslot::SlotError>(())
/// ```
#[inline]
pub unsafe fn get(loc: SlotLocation, mode: AccessMode) -> usize {
    slot(loc).load(mode.load_ordering())
}

/// Replace the slot's reference word unconditionally under `mode`
///
/// # Safety
///
/// Same contract as [`get`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use refslot::{access, AccessMode, ClassLayout, ObjectInstance, SlotLocation};
///
/// let layout = Arc::new(ClassLayout::builder("Holder").ref_field("v").build()?);
/// let object = ObjectInstance::new(layout);
/// let slot = SlotLocation::instance_field(&object, "v")?;
///
/// static SENTINEL: u8 = 1;
/// let value = &SENTINEL as *const u8 as usize;
/// unsafe {
///     access::put(slot, AccessMode::Volatile, value);
///     assert_eq!(access::get(slot, AccessMode::Volatile), value);
/// }
/// # Ok::<(), refslot::SlotError>(())
/// ```
#[inline]
pub unsafe fn put(loc: SlotLocation, mode: AccessMode, value: usize) {
    slot(loc).store(value, mode.store_ordering());
}

/// Plain read: no ordering guarantee
///
/// # Safety
///
/// Same contract as [`get`].
#[inline]
pub unsafe fn get_plain(loc: SlotLocation) -> usize {
    get(loc, AccessMode::Plain)
}

/// Opaque read: coherent per location, no cross-thread guarantee
///
/// # Safety
///
/// Same contract as [`get`].
#[inline]
pub unsafe fn get_opaque(loc: SlotLocation) -> usize {
    get(loc, AccessMode::Opaque)
}

/// Acquire read: pairs with [`put_release`] to consume a published value
///
/// # Safety
///
/// Same contract as [`get`].
#[inline]
pub unsafe fn get_acquire(loc: SlotLocation) -> usize {
    get(loc, AccessMode::Acquire)
}

/// Volatile read: globally ordered with all volatile/atomic operations
///
/// # Safety
///
/// Same contract as [`get`].
#[inline]
pub unsafe fn get_volatile(loc: SlotLocation) -> usize {
    get(loc, AccessMode::Volatile)
}

/// Plain write: no ordering guarantee
///
/// # Safety
///
/// Same contract as [`get`].
#[inline]
pub unsafe fn put_plain(loc: SlotLocation, value: usize) {
    put(loc, AccessMode::Plain, value);
}

/// Opaque write: coherent per location, no cross-thread guarantee
///
/// # Safety
///
/// Same contract as [`get`].
#[inline]
pub unsafe fn put_opaque(loc: SlotLocation, value: usize) {
    put(loc, AccessMode::Opaque, value);
}

/// Release write: pairs with [`get_acquire`] to publish a value
///
/// # Safety
///
/// Same contract as [`get`].
#[inline]
pub unsafe fn put_release(loc: SlotLocation, value: usize) {
    put(loc, AccessMode::Release, value);
}

/// Volatile write: globally ordered, immediately visible to volatile reads
///
/// # Safety
///
/// Same contract as [`get`].
#[inline]
pub unsafe fn put_volatile(loc: SlotLocation, value: usize) {
    put(loc, AccessMode::Volatile, value);
}
