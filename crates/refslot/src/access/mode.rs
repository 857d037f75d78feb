//! Access Mode - Consistency Levels for Slot Operations
//!
//! One enumerated ordering parameter drives the generic get/put and
//! compare primitives instead of six duplicated code paths. Each mode
//! maps onto the `std::sync::atomic::Ordering` that carries its
//! contract:
//!
//! | Mode     | load    | store   | guarantee |
//! |----------|---------|---------|-----------|
//! | Plain    | Relaxed | Relaxed | none beyond same-location atomicity |
//! | Opaque   | Relaxed | Relaxed | not elided/duplicated, coherent per location |
//! | Acquire  | Acquire | Release | consume side of publish/consume |
//! | Release  | Acquire | Release | publish side of publish/consume |
//! | Volatile | SeqCst  | SeqCst  | single global order across all locations |
//!
//! Rust defines no "plain" access to memory that other threads may
//! mutate, so Plain maps to the weakest defined ordering; Relaxed
//! compiles to an ordinary load/store on every supported target and
//! preserves the no-guarantee contract. Plain and Opaque share a
//! mapping for the same reason: the distinction they draw (compiler
//! elision) is already forbidden for any atomic access.
//!
//! Acquire and Release are one-directional by nature. When a mode is
//! used on its "wrong" side (an Acquire store, a Release load), the
//! mapping strengthens to the paired ordering rather than weakening,
//! keeping every mode usable with every primitive.

use std::sync::atomic::Ordering;

/// Memory-ordering family for a slot operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// No ordering guarantee; single-threaded or externally synchronized use
    Plain,
    /// Per-location coherence without cross-location or timeliness guarantees
    Opaque,
    /// Nothing after the read (program order) is observed before it
    Acquire,
    /// Nothing before the write (program order) is observed after it
    Release,
    /// Full sequential-consistency-level ordering
    Volatile,
}

impl AccessMode {
    /// Ordering applied to a load in this mode
    #[inline]
    pub fn load_ordering(self) -> Ordering {
        match self {
            AccessMode::Plain | AccessMode::Opaque => Ordering::Relaxed,
            AccessMode::Acquire | AccessMode::Release => Ordering::Acquire,
            AccessMode::Volatile => Ordering::SeqCst,
        }
    }

    /// Ordering applied to a store in this mode
    #[inline]
    pub fn store_ordering(self) -> Ordering {
        match self {
            AccessMode::Plain | AccessMode::Opaque => Ordering::Relaxed,
            AccessMode::Acquire | AccessMode::Release => Ordering::Release,
            AccessMode::Volatile => Ordering::SeqCst,
        }
    }

    /// `(success, failure)` ordering pair for a compare-exchange in this mode
    ///
    /// The failure ordering is a load ordering, so Release lowers to
    /// Relaxed on failure per the std contract.
    #[inline]
    pub fn exchange_orderings(self) -> (Ordering, Ordering) {
        match self {
            AccessMode::Plain | AccessMode::Opaque => (Ordering::Relaxed, Ordering::Relaxed),
            AccessMode::Acquire => (Ordering::Acquire, Ordering::Acquire),
            AccessMode::Release => (Ordering::Release, Ordering::Relaxed),
            AccessMode::Volatile => (Ordering::SeqCst, Ordering::SeqCst),
        }
    }
}
