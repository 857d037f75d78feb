//! Access Module - Ordered and Atomic Slot Operations
//!
//! Once the resolver has produced a [`SlotLocation`], everything in
//! this module operates uniformly on the word at `base + offset`,
//! regardless of which of the three container kinds it came from.

pub mod atomic;
pub mod mode;
pub mod ordered;

pub use atomic::{
    compare_and_exchange, compare_and_exchange_acquire, compare_and_exchange_release,
    compare_and_exchange_volatile, compare_and_swap, get_and_set, weak_compare_and_swap,
};
pub use mode::AccessMode;
pub use ordered::{
    get, get_acquire, get_opaque, get_plain, get_volatile, put, put_opaque, put_plain,
    put_release, put_volatile,
};

use crate::location::SlotLocation;
use std::sync::atomic::AtomicUsize;

/// View the slot word as an atomic
///
/// Sound because container blocks are word-aligned, slot offsets are
/// word multiples, and slot words are only ever accessed atomically.
/// Validity of the address itself is the caller's contract.
#[inline]
pub(crate) unsafe fn slot(loc: SlotLocation) -> &'static AtomicUsize {
    &*(loc.addr() as *const AtomicUsize)
}
