use std::ops::{Deref, DerefMut};

use crate::error::{validation_error, Result};
use crate::simd::support::MAX_LANES;
use crate::simd::SortElement;

/// A 64-byte aligned buffer of 64 elements.
///
/// A block is large and aligned enough for a whole-register load and store
/// of any kernel, so [`sort_block`](crate::sort_block) can use aligned
/// full-register access without touching memory it does not own. Elements
/// past the sorted prefix are read and written back unchanged.
///
/// # Memory Layout
///
/// - `#[repr(C, align(64))]`: the first element sits on a cache line and
///   on a `__m512i` boundary
/// - Always holds 64 elements regardless of the kernel size
///
/// # Example
///
/// ```rust
/// use simdnet::network::Minimum9;
/// use simdnet::Block;
///
/// let mut block = Block::from_slice(&[9u8, 8, 7, 6, 5, 4, 3, 2, 1]).unwrap();
/// simdnet::sort_block::<Minimum9, u8>(&mut block).unwrap();
/// assert_eq!(&block[..9], &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(64))]
pub struct Block<T>(pub [T; MAX_LANES]);

impl<T: SortElement> Block<T> {
    /// A block with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Block([value; MAX_LANES])
    }

    /// Copies `values` to the front of a block; the rest holds `T::MAX`.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() > MAX_LANES {
            return Err(validation_error(format!(
                "a block holds {MAX_LANES} elements, got {}",
                values.len()
            )));
        }
        let mut block = Self::default();
        block.0[..values.len()].copy_from_slice(values);
        Ok(block)
    }

    pub fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }
}

impl<T: SortElement> Default for Block<T> {
    fn default() -> Self {
        Self::filled(T::max_value())
    }
}

impl<T> Deref for Block<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> DerefMut for Block<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_alignment() {
        let block = Block::<u8>::default();
        assert_eq!(block.as_ptr() as usize % 64, 0);
        assert_eq!(std::mem::align_of::<Block<u64>>(), 64);
        assert_eq!(std::mem::size_of::<Block<u64>>(), 512);
    }

    #[test]
    fn test_from_slice_pads_with_max() {
        let block = Block::from_slice(&[-1i16, 2]).unwrap();
        assert_eq!(&block[..3], &[-1, 2, i16::MAX]);
        assert!(block[2..].iter().all(|&v| v == i16::MAX));
    }

    #[test]
    fn test_from_slice_rejects_oversized_input() {
        let values = [0u32; 65];
        assert!(Block::from_slice(&values).is_err());
    }
}
