//! Reference Array - Contiguous Reference Slots
//!
//! A [`RefArray`] is a zeroed block holding `len` reference words after
//! a fixed header. Element addressing is the classic base-plus-shift
//! form:
//!
//! ```text
//! offset(i) = base_offset + (i << shift)
//! ```
//!
//! where `shift` is the power-of-two exponent of the element stride.
//! The addressing pair is fixed per array kind; only the index varies,
//! so the per-element offset is computed at access time rather than
//! cached per element.

use crate::config::LayoutConfig;
use crate::error::{Result, SlotError};
use crate::object::block::RawBlock;
use crate::object::layout::{REF_SHIFT, REF_SIZE};

/// Fixed addressing parameters for reference arrays
///
/// Resolved once per array kind; valid for any index of any array
/// sharing the same geometry. [`offset_of`](ArrayAddressing::offset_of)
/// performs no bounds check — pair it with a length check, or use
/// [`SlotLocation::array_element`](crate::SlotLocation::array_element)
/// which does both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayAddressing {
    /// Byte offset of element 0 from the array base
    pub base_offset: usize,
    /// Power-of-two exponent of the element stride
    pub shift: u32,
}

impl ArrayAddressing {
    /// Byte offset of element `index` from the array base
    #[inline]
    pub fn offset_of(&self, index: usize) -> usize {
        self.base_offset + (index << self.shift)
    }
}

/// Array of reference slots, all starting as the null reference
///
/// # Examples
///
/// ```rust
/// use refslot::RefArray;
///
/// let array = RefArray::new(10);
/// assert_eq!(array.len(), 10);
///
/// let addressing = array.addressing();
/// assert_eq!(
///     addressing.offset_of(5),
///     addressing.base_offset + 5 * std::mem::size_of::<usize>()
/// );
/// ```
#[derive(Debug)]
pub struct RefArray {
    len: usize,
    base_offset: usize,
    storage: RawBlock,
}

impl RefArray {
    /// Allocate a zeroed reference array of `len` elements
    pub fn new(len: usize) -> Self {
        Self::with_config(len, LayoutConfig::default())
    }

    /// Allocate with custom geometry
    ///
    /// Geometry must already be validated; an invalid header size is a
    /// programming error here, matching the layout builder's checks.
    pub fn with_config(len: usize, config: LayoutConfig) -> Self {
        debug_assert!(config.validate().is_ok());

        let base_offset = config.header_size;
        let storage = RawBlock::new_zeroed(base_offset + len * REF_SIZE, config.alignment);

        // Record the length in the first header word, when there is one.
        if base_offset >= REF_SIZE {
            unsafe {
                std::ptr::write(storage.addr() as *mut usize, len);
            }
        }

        RefArray {
            len,
            base_offset,
            storage,
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base address of the array's storage block
    #[inline]
    pub fn base_address(&self) -> usize {
        self.storage.addr()
    }

    /// Fixed addressing parameters for this array's element kind
    #[inline]
    pub fn addressing(&self) -> ArrayAddressing {
        ArrayAddressing {
            base_offset: self.base_offset,
            shift: REF_SHIFT,
        }
    }

    /// Bounds-check an index against this array
    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(SlotError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_formula() {
        let array = RefArray::new(10);
        let addressing = array.addressing();

        assert_eq!(addressing.offset_of(0), addressing.base_offset);
        for i in 0..10 {
            assert_eq!(
                addressing.offset_of(i),
                addressing.base_offset + i * REF_SIZE
            );
        }
    }

    #[test]
    fn test_header_records_length() {
        let array = RefArray::new(7);
        let header = unsafe { std::ptr::read(array.base_address() as *const usize) };
        assert_eq!(header, 7);
    }

    #[test]
    fn test_elements_start_null() {
        let array = RefArray::new(4);
        let addressing = array.addressing();
        for i in 0..4 {
            let addr = array.base_address() + addressing.offset_of(i);
            assert_eq!(unsafe { std::ptr::read(addr as *const usize) }, 0);
        }
    }

    #[test]
    fn test_empty_array() {
        let array = RefArray::new(0);
        assert!(array.is_empty());
        assert!(array.check_index(0).is_err());
    }

    #[test]
    fn test_check_index_bounds() {
        let array = RefArray::new(3);
        assert!(array.check_index(2).is_ok());
        assert!(matches!(
            array.check_index(3),
            Err(SlotError::IndexOutOfBounds { index: 3, length: 3 })
        ));
    }
}
