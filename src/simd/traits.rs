use std::fmt;
use std::marker::PhantomData;

use num::{Bounded, PrimInt};

use crate::simd::access::Access;
use crate::simd::support::Lanes;

/// Integer types a kernel can sort.
///
/// Registers are untyped, so every operation that needs to know how lanes
/// are laid out or compared asks the element type. Bit patterns travel as
/// zero-extended `u64` so the portable backend and the tests can handle
/// every width the same way.
pub trait SortElement:
    PrimInt + Bounded + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Size of one lane in bytes.
    const BYTES: usize;
    /// Whether lanes compare as two's complement.
    const SIGNED: bool;
    /// Rust name of the type, used in kernel descriptions.
    const TYPE_NAME: &'static str;
    /// Bit pattern of `Self::max_value()`.
    const MAX_BITS: u64;

    /// Raw bits, zero-extended.
    fn to_bits(self) -> u64;

    /// Inverse of [`SortElement::to_bits`]; higher bits are ignored.
    fn from_bits(bits: u64) -> Self;

    /// Maps the value to an unsigned key with the same ordering.
    ///
    /// Signed types get their sign bit flipped, which is the bias the 64-bit
    /// compare emulation applies before a signed greater-than.
    #[inline(always)]
    fn to_ordered_bits(self) -> u64 {
        if Self::SIGNED {
            self.to_bits() ^ (1u64 << (Self::BYTES * 8 - 1))
        } else {
            self.to_bits()
        }
    }
}

macro_rules! sort_element {
    ($t:ty, $u:ty, $signed:expr) => {
        impl SortElement for $t {
            const BYTES: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;
            const TYPE_NAME: &'static str = stringify!($t);
            const MAX_BITS: u64 = <$t>::MAX as $u as u64;

            #[inline(always)]
            fn to_bits(self) -> u64 {
                self as $u as u64
            }

            #[inline(always)]
            fn from_bits(bits: u64) -> Self {
                bits as $u as $t
            }
        }
    };
}

sort_element!(i8, u8, true);
sort_element!(u8, u8, false);
sort_element!(i16, u16, true);
sort_element!(u16, u16, false);
sort_element!(i32, u32, true);
sort_element!(u32, u32, false);
sort_element!(i64, u64, true);
sort_element!(u64, u64, false);

/// A compile-time lane permutation: result lane `i` is input lane `INDEX[i]`.
///
/// Entries past the register's lane count are ignored, as are entries that
/// point past it (those lanes keep their own value).
pub trait Permutation {
    const INDEX: Lanes;
}

/// A compile-time lane mask: bit `i` selects lane `i`.
pub trait LaneSelect {
    const BITS: u64;
}

/// Number of valid elements at the start of a buffer.
pub trait Extent {
    const N: usize;
}

/// An [`Extent`] given directly as a number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count<const N: usize>;

impl<const N: usize> Extent for Count<N> {
    const N: usize = N;
}

/// A [`LaneSelect`] given directly as a bit pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mask<const BITS: u64>;

impl<const BITS: u64> LaneSelect for Mask<BITS> {
    const BITS: u64 = BITS;
}

/// Selects the first `E::N` lanes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowLanes<E>(PhantomData<E>);

impl<E: Extent> LaneSelect for LowLanes<E> {
    const BITS: u64 = crate::simd::support::lane_mask(E::N);
}

/// One native register class and the primitives kernels are built from.
///
/// Every method is generic over the element type so a single backend serves
/// all eight integer types; the branches on `T::BYTES` and `T::SIGNED`
/// inside the implementations are resolved at compile time.
pub trait Backend {
    /// The register value threaded through the stages.
    type Reg: Copy;

    /// Register size in bytes.
    const BYTES: usize;

    /// Name of the register type, as printed in kernel descriptions.
    const REGISTER: &'static str;

    /// Lanes of `T` that fit in the register.
    #[inline(always)]
    fn lanes<T: SortElement>() -> usize {
        Self::BYTES / T::BYTES
    }

    /// Broadcasts `value` to every lane.
    ///
    /// # Safety
    ///
    /// The backend's instruction set must be available.
    unsafe fn splat<T: SortElement>(value: T) -> Self::Reg;

    /// Loads a whole register.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `Self::BYTES` bytes.
    unsafe fn load_full<T: SortElement>(ptr: *const T) -> Self::Reg;

    /// Loads a whole register from aligned memory.
    ///
    /// # Safety
    ///
    /// As [`Backend::load_full`], and `ptr` must be aligned to `Self::BYTES`.
    unsafe fn load_aligned<T: SortElement>(ptr: *const T) -> Self::Reg;

    /// Loads `E::N` elements and fills the remaining lanes with `T::MAX`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `E::N` elements, or up to the next
    /// multiple of 4 bytes when `A` is [`WordPadded`](crate::simd::WordPadded).
    unsafe fn load_partial<T: SortElement, A: Access, E: Extent>(ptr: *const T) -> Self::Reg;

    /// Stores a whole register.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `Self::BYTES` bytes.
    unsafe fn store_full<T: SortElement>(ptr: *mut T, v: Self::Reg);

    /// Stores a whole register to aligned memory.
    ///
    /// # Safety
    ///
    /// As [`Backend::store_full`], and `ptr` must be aligned to `Self::BYTES`.
    unsafe fn store_aligned<T: SortElement>(ptr: *mut T, v: Self::Reg);

    /// Stores the first `E::N` lanes and nothing else.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `E::N` elements.
    unsafe fn store_partial<T: SortElement, E: Extent>(ptr: *mut T, v: Self::Reg);

    /// Lane-wise minimum.
    ///
    /// # Safety
    ///
    /// The backend's instruction set must be available.
    unsafe fn min<T: SortElement>(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// Lane-wise maximum.
    ///
    /// # Safety
    ///
    /// The backend's instruction set must be available.
    unsafe fn max<T: SortElement>(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// Takes lane `i` from `if_set` when bit `i` of `M::BITS` is set, else
    /// from `if_clear`.
    ///
    /// # Safety
    ///
    /// The backend's instruction set must be available.
    unsafe fn blend<T: SortElement, M: LaneSelect>(if_clear: Self::Reg, if_set: Self::Reg)
        -> Self::Reg;

    /// Reorders lanes according to `P::INDEX`.
    ///
    /// # Safety
    ///
    /// The backend's instruction set must be available.
    unsafe fn permute<T: SortElement, P: Permutation>(v: Self::Reg) -> Self::Reg;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip_keeps_value() {
        assert_eq!(i8::from_bits((-5i8).to_bits()), -5);
        assert_eq!((-1i16).to_bits(), 0xffff);
        assert_eq!(u64::from_bits(u64::MAX.to_bits()), u64::MAX);
        assert_eq!(i32::from_bits(0x1_8000_0000), i32::MIN);
    }

    #[test]
    fn test_ordered_bits_preserve_order() {
        let values = [i8::MIN, -100, -1, 0, 1, 100, i8::MAX];
        for pair in values.windows(2) {
            assert!(pair[0].to_ordered_bits() < pair[1].to_ordered_bits());
        }

        let values = [i64::MIN, -1, 0, i64::MAX];
        for pair in values.windows(2) {
            assert!(pair[0].to_ordered_bits() < pair[1].to_ordered_bits());
        }

        assert_eq!(200u8.to_ordered_bits(), 200);
    }

    #[test]
    fn test_max_bits() {
        assert_eq!(i8::MAX_BITS, 0x7f);
        assert_eq!(u16::MAX_BITS, 0xffff);
        assert_eq!(i64::MAX_BITS, 0x7fff_ffff_ffff_ffff);
        assert_eq!(u32::BYTES, 4);
        assert!(i32::SIGNED && !u32::SIGNED);
    }

    #[test]
    fn test_low_lanes_mask() {
        assert_eq!(<LowLanes<Count<3>> as LaneSelect>::BITS, 0b111);
        assert_eq!(<LowLanes<Count<64>> as LaneSelect>::BITS, u64::MAX);
        assert_eq!(<LowLanes<Count<0>> as LaneSelect>::BITS, 0);
    }
}
