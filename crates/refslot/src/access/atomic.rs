//! Atomic Updater - Indivisible Read-Modify-Write on a Slot
//!
//! Every operation here is a single atomic transition of the slot word
//! with a return value describing the transition: a success flag or the
//! previous value. Comparison is identity comparison of reference
//! words; mismatch is reported through the return value, never as an
//! error. No locks anywhere — indivisibility comes from the hardware
//! compare-exchange and swap on the slot word itself.

use crate::access::mode::AccessMode;
use crate::access::slot;
use crate::location::SlotLocation;

/// Strong compare-and-swap with full ordering
///
/// If the current word is identity-equal to `expected`, replaces it
/// with `new` and returns `true`; otherwise leaves the slot unchanged
/// and returns `false`. Never spuriously fails.
///
/// # Safety
///
/// `loc` must have been resolved against a container that is still
/// alive and unmoved, and the container must outlive this call.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use refslot::{access, ClassLayout, ObjectInstance, SlotLocation, NULL_REF};
///
/// let layout = Arc::new(ClassLayout::builder("Holder").ref_field("v").build()?);
/// let object = ObjectInstance::new(layout);
/// let slot = SlotLocation::instance_field(&object, "v")?;
///
/// static X: u8 = 1;
/// let x = &X as *const u8 as usize;
/// unsafe {
///     assert!(access::compare_and_swap(slot, NULL_REF, x));
///     // The slot already advanced; the same call now fails.
///     assert!(!access::compare_and_swap(slot, NULL_REF, x));
/// }
/// # Ok::<(), refslot::SlotError>(())
/// ```
#[inline]
pub unsafe fn compare_and_swap(loc: SlotLocation, expected: usize, new: usize) -> bool {
    let (success, failure) = AccessMode::Volatile.exchange_orderings();
    slot(loc)
        .compare_exchange(expected, new, success, failure)
        .is_ok()
}

/// Compare-and-exchange: returns the previous word regardless of outcome
///
/// The slot becomes `new` iff the previous word was identity-equal to
/// `expected`. Callers distinguish success by comparing the returned
/// word against `expected`. `mode` selects the ordering family applied
/// around the operation.
///
/// # Safety
///
/// Same contract as [`compare_and_swap`].
#[inline]
pub unsafe fn compare_and_exchange(
    loc: SlotLocation,
    mode: AccessMode,
    expected: usize,
    new: usize,
) -> usize {
    let (success, failure) = mode.exchange_orderings();
    match slot(loc).compare_exchange(expected, new, success, failure) {
        Ok(previous) => previous,
        Err(previous) => previous,
    }
}

/// [`compare_and_exchange`] with full ordering
///
/// # Safety
///
/// Same contract as [`compare_and_swap`].
#[inline]
pub unsafe fn compare_and_exchange_volatile(
    loc: SlotLocation,
    expected: usize,
    new: usize,
) -> usize {
    compare_and_exchange(loc, AccessMode::Volatile, expected, new)
}

/// [`compare_and_exchange`] with acquire ordering
///
/// # Safety
///
/// Same contract as [`compare_and_swap`].
#[inline]
pub unsafe fn compare_and_exchange_acquire(
    loc: SlotLocation,
    expected: usize,
    new: usize,
) -> usize {
    compare_and_exchange(loc, AccessMode::Acquire, expected, new)
}

/// [`compare_and_exchange`] with release ordering
///
/// # Safety
///
/// Same contract as [`compare_and_swap`].
#[inline]
pub unsafe fn compare_and_exchange_release(
    loc: SlotLocation,
    expected: usize,
    new: usize,
) -> usize {
    compare_and_exchange(loc, AccessMode::Release, expected, new)
}

/// Weak compare-and-swap: may spuriously fail
///
/// Equivalent to [`compare_and_swap`] on success and on genuine
/// mismatch, but permitted to return `false` even when the current
/// word equals `expected` (e.g. on LL/SC targets). It never returns
/// `true` on mismatch. Callers needing a definite answer retry in a
/// loop:
///
/// ```rust
/// use std::sync::Arc;
/// use refslot::{access, AccessMode, ClassLayout, ObjectInstance, SlotLocation, NULL_REF};
///
/// let layout = Arc::new(ClassLayout::builder("Holder").ref_field("v").build()?);
/// let object = ObjectInstance::new(layout);
/// let slot = SlotLocation::instance_field(&object, "v")?;
///
/// static X: u8 = 1;
/// let x = &X as *const u8 as usize;
/// unsafe {
///     while !access::weak_compare_and_swap(slot, AccessMode::Volatile, NULL_REF, x) {
///         assert_eq!(access::get_plain(slot), NULL_REF); // only spurious failure
///     }
///     assert_eq!(access::get_plain(slot), x);
/// }
/// # Ok::<(), refslot::SlotError>(())
/// ```
///
/// # Safety
///
/// Same contract as [`compare_and_swap`].
#[inline]
pub unsafe fn weak_compare_and_swap(
    loc: SlotLocation,
    mode: AccessMode,
    expected: usize,
    new: usize,
) -> bool {
    let (success, failure) = mode.exchange_orderings();
    slot(loc)
        .compare_exchange_weak(expected, new, success, failure)
        .is_ok()
}

/// Atomic swap with full ordering
///
/// Unconditionally replaces the slot word with `new` and returns the
/// immediately prior word, atomically with respect to every other
/// atomic/volatile operation on the same location.
///
/// # Safety
///
/// Same contract as [`compare_and_swap`].
#[inline]
pub unsafe fn get_and_set(loc: SlotLocation, new: usize) -> usize {
    slot(loc).swap(new, AccessMode::Volatile.store_ordering())
}
