//! Raw Block - Owned Zeroed Storage for Containers
//!
//! All three container kinds (instances, static blocks, arrays) sit on
//! top of one primitive: an aligned, zero-initialized heap block that
//! lives exactly as long as its owner. Slot words inside the block are
//! only ever touched through the atomic accessors, which is what makes
//! sharing a block address across threads sound.

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::ptr::NonNull;

/// Aligned, zeroed storage block
///
/// The block address is stable for the lifetime of the value; resolved
/// slot locations borrow that stability.
#[derive(Debug)]
pub(crate) struct RawBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl RawBlock {
    /// Allocate a zeroed block of at least `size` bytes
    ///
    /// A zero `size` is rounded up to one word so the block always has
    /// a unique, dereferenceable address.
    pub(crate) fn new_zeroed(size: usize, align: usize) -> Self {
        let size = size.max(align);
        let layout = Layout::from_size_align(size, align)
            .unwrap_or_else(|_| panic!("invalid block geometry: size={size} align={align}"));

        // Zeroed memory means every slot starts as the null reference.
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = match NonNull::new(raw) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        };

        RawBlock { ptr, layout }
    }

    /// Base address of the block
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        unsafe {
            dealloc(self.ptr.as_ptr(), self.layout);
        }
    }
}

// Slot words are only mutated through atomic operations on the block's
// memory, so the raw pointer may cross threads.
unsafe impl Send for RawBlock {}
unsafe impl Sync for RawBlock {}
