//! Slot Location - One Address Scheme for Three Container Kinds
//!
//! Instance fields, class-level fields, and array elements are
//! physically different addressing schemes. The resolver collapses all
//! three into a single `(base, offset)` pair so the ordered and atomic
//! accessors can operate uniformly.
//!
//! Resolution is side-effect free and idempotent: resolving the same
//! field on the same container always yields the same pair, and the
//! result may be cached by the caller. A location is never valid for
//! any container other than the one it was resolved against.

use crate::error::Result;
use crate::object::instance::ObjectInstance;
use crate::object::{statics, RefArray};

/// Address of one mutable reference-typed slot
///
/// `base` is the container's storage address (for class-level fields,
/// an implementation-defined static-block handle); `offset` is a byte
/// offset valid only relative to that specific base.
///
/// The pair stays valid exactly as long as the container it was
/// resolved against. Using it after the container is dropped is
/// undefined behavior, not a reported error.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use refslot::{ClassLayout, ObjectInstance, SlotLocation};
///
/// let layout = Arc::new(ClassLayout::builder("Holder").ref_field("v").build()?);
/// let object = ObjectInstance::new(layout);
///
/// let slot = SlotLocation::instance_field(&object, "v")?;
/// assert_eq!(slot.base(), object.base_address());
/// # Ok::<(), refslot::SlotError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotLocation {
    base: usize,
    offset: usize,
}

impl SlotLocation {
    /// Build a location from a raw `(base, offset)` pair
    ///
    /// For callers that computed the pair themselves (e.g. through
    /// [`ArrayAddressing`](crate::ArrayAddressing)). No validation is
    /// performed.
    #[inline]
    pub fn new(base: usize, offset: usize) -> Self {
        SlotLocation { base, offset }
    }

    /// Resolve an instance reference field on a live object
    ///
    /// The offset is stable per layout; the base is this instance's
    /// storage address. Fails if the field is undeclared or not a
    /// reference slot.
    pub fn instance_field(object: &ObjectInstance, field: &str) -> Result<Self> {
        let offset = object.layout().field_offset(field)?;
        log::trace!(
            "resolved {}.{} -> base {:#x} offset {}",
            object.layout().name(),
            field,
            object.base_address(),
            offset
        );
        Ok(SlotLocation {
            base: object.base_address(),
            offset,
        })
    }

    /// Resolve a class-level reference field
    ///
    /// The class must have been registered through
    /// [`register_class`](crate::object::statics::register_class); the
    /// base is the class's static-block handle.
    pub fn static_field(class: &str, field: &str) -> Result<Self> {
        let (layout, storage) = statics::lookup_class(class)?;
        let offset = layout.static_field_offset(field)?;
        log::trace!(
            "resolved static {}.{} -> base {:#x} offset {}",
            class,
            field,
            storage.base_address(),
            offset
        );
        Ok(SlotLocation {
            base: storage.base_address(),
            offset,
        })
    }

    /// Resolve one element of a reference array, bounds-checked
    ///
    /// The per-index offset is computed from the array's fixed
    /// addressing parameters at resolution time; nothing is cached per
    /// element.
    pub fn array_element(array: &RefArray, index: usize) -> Result<Self> {
        array.check_index(index)?;
        Ok(SlotLocation {
            base: array.base_address(),
            offset: array.addressing().offset_of(index),
        })
    }

    /// Container base address
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Byte offset of the slot within its container
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Absolute address of the slot word
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        self.base + self.offset
    }
}
