//! Object Instance - Heap Storage for One Object
//!
//! An [`ObjectInstance`] pairs a shared [`ClassLayout`] with a private
//! zeroed storage block. Distinct instances of the same layout share
//! field offsets but never storage: a location resolved against one
//! instance says nothing about any other.

use std::sync::Arc;

use crate::object::block::RawBlock;
use crate::object::layout::ClassLayout;

/// One live object: a layout plus its own storage block
///
/// All reference fields start as the null reference. The base address
/// is stable until the instance is dropped; every slot location
/// resolved against it becomes invalid at that point (caller
/// contract).
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use refslot::{ClassLayout, ObjectInstance};
///
/// let layout = Arc::new(ClassLayout::builder("Holder").ref_field("v").build()?);
/// let a = ObjectInstance::new(Arc::clone(&layout));
/// let b = ObjectInstance::new(layout);
/// assert_ne!(a.base_address(), b.base_address());
/// # Ok::<(), refslot::SlotError>(())
/// ```
#[derive(Debug)]
pub struct ObjectInstance {
    layout: Arc<ClassLayout>,
    storage: RawBlock,
}

impl ObjectInstance {
    /// Allocate a zeroed instance of the given layout
    pub fn new(layout: Arc<ClassLayout>) -> Self {
        let storage = RawBlock::new_zeroed(layout.instance_size(), layout.config().alignment);
        ObjectInstance { layout, storage }
    }

    /// Layout this instance was allocated from
    pub fn layout(&self) -> &ClassLayout {
        &self.layout
    }

    /// Base address of the instance's storage block
    #[inline]
    pub fn base_address(&self) -> usize {
        self.storage.addr()
    }
}
