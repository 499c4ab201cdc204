//! Lane-by-lane backend written in plain Rust.
//!
//! Serves register widths the build has no instructions for, and is the
//! reference the native backends are checked against: every primitive is
//! the textbook definition, one lane at a time.

use std::ptr;

use crate::simd::access::Access;
use crate::simd::support::{self, BlendPlan, FillPlan, PermutePlan, MAX_LANES};
use crate::simd::traits::{Backend, Extent, LaneSelect, Permutation, SortElement};

/// Raw lane bits, zero-extended to 64 bits. Only the first
/// `BYTES / T::BYTES` entries are meaningful.
pub type PortableReg = [u64; MAX_LANES];

/// A `BYTES`-byte register emulated lane by lane.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable<const BYTES: usize>;

impl<const BYTES: usize> Portable<BYTES> {
    #[inline(always)]
    fn count<T: SortElement>() -> usize {
        support::lane_count(BYTES, T::BYTES)
    }

    #[inline(always)]
    fn lanewise<T: SortElement>(
        a: PortableReg,
        b: PortableReg,
        pick: impl Fn(T, T) -> T,
    ) -> PortableReg {
        let mut out = [0u64; MAX_LANES];
        for i in 0..Self::count::<T>() {
            out[i] = pick(T::from_bits(a[i]), T::from_bits(b[i])).to_bits();
        }
        out
    }
}

impl<const BYTES: usize> Backend for Portable<BYTES> {
    type Reg = PortableReg;

    const BYTES: usize = BYTES;
    const REGISTER: &'static str = "portable";

    #[inline(always)]
    unsafe fn splat<T: SortElement>(value: T) -> PortableReg {
        let mut out = [0u64; MAX_LANES];
        out[..Self::count::<T>()].fill(value.to_bits());
        out
    }

    #[inline(always)]
    unsafe fn load_full<T: SortElement>(src: *const T) -> PortableReg {
        let mut out = [0u64; MAX_LANES];
        for (i, lane) in out.iter_mut().enumerate().take(Self::count::<T>()) {
            *lane = ptr::read_unaligned(src.add(i)).to_bits();
        }
        out
    }

    #[inline(always)]
    unsafe fn load_aligned<T: SortElement>(src: *const T) -> PortableReg {
        debug_assert_eq!(src as usize % BYTES, 0, "unaligned register load");
        Self::load_full(src)
    }

    #[inline(always)]
    unsafe fn load_partial<T: SortElement, A: Access, E: Extent>(src: *const T) -> PortableReg {
        let n = FillPlan::<T, E, BYTES>::N;
        let mut out = Self::splat(T::max_value());
        for (i, lane) in out.iter_mut().enumerate().take(n) {
            *lane = ptr::read_unaligned(src.add(i)).to_bits();
        }
        out
    }

    #[inline(always)]
    unsafe fn store_full<T: SortElement>(dst: *mut T, v: PortableReg) {
        for (i, &bits) in v.iter().enumerate().take(Self::count::<T>()) {
            ptr::write_unaligned(dst.add(i), T::from_bits(bits));
        }
    }

    #[inline(always)]
    unsafe fn store_aligned<T: SortElement>(dst: *mut T, v: PortableReg) {
        debug_assert_eq!(dst as usize % BYTES, 0, "unaligned register store");
        Self::store_full(dst, v)
    }

    #[inline(always)]
    unsafe fn store_partial<T: SortElement, E: Extent>(dst: *mut T, v: PortableReg) {
        let n = FillPlan::<T, E, BYTES>::N;
        for (i, &bits) in v.iter().enumerate().take(n) {
            ptr::write_unaligned(dst.add(i), T::from_bits(bits));
        }
    }

    #[inline(always)]
    unsafe fn min<T: SortElement>(a: PortableReg, b: PortableReg) -> PortableReg {
        Self::lanewise::<T>(a, b, |x, y| x.min(y))
    }

    #[inline(always)]
    unsafe fn max<T: SortElement>(a: PortableReg, b: PortableReg) -> PortableReg {
        Self::lanewise::<T>(a, b, |x, y| x.max(y))
    }

    #[inline(always)]
    unsafe fn blend<T: SortElement, M: LaneSelect>(
        if_clear: PortableReg,
        if_set: PortableReg,
    ) -> PortableReg {
        let bits = BlendPlan::<T, M, BYTES>::BITS;
        let mut out = if_clear;
        for (i, lane) in out.iter_mut().enumerate().take(Self::count::<T>()) {
            if bits & (1u64 << i) != 0 {
                *lane = if_set[i];
            }
        }
        out
    }

    #[inline(always)]
    unsafe fn permute<T: SortElement, P: Permutation>(v: PortableReg) -> PortableReg {
        let index = PermutePlan::<T, P, BYTES>::INDEX;
        let mut out = v;
        for (i, lane) in out.iter_mut().enumerate().take(Self::count::<T>()) {
            *lane = v[index[i] as usize];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::access::Exact;
    use crate::simd::support::{identity, Lanes};
    use crate::simd::traits::{Count, Mask};

    type P16 = Portable<16>;

    struct Rotate;
    impl Permutation for Rotate {
        const INDEX: Lanes = {
            let mut out = identity();
            out[0] = 1;
            out[1] = 2;
            out[2] = 3;
            out[3] = 0;
            out
        };
    }

    #[test]
    fn test_partial_load_fills_with_max() {
        let data = [-3i32, 7];
        let v = unsafe { P16::load_partial::<i32, Exact, Count<2>>(data.as_ptr()) };
        assert_eq!(i32::from_bits(v[0]), -3);
        assert_eq!(i32::from_bits(v[1]), 7);
        assert_eq!(i32::from_bits(v[2]), i32::MAX);
        assert_eq!(i32::from_bits(v[3]), i32::MAX);
    }

    #[test]
    fn test_partial_store_leaves_tail() {
        let src = [1u16, 2, 3, 4, 5, 6, 7, 8];
        let mut dst = [0u16; 8];
        unsafe {
            let v = P16::load_full(src.as_ptr());
            P16::store_partial::<u16, Count<3>>(dst.as_mut_ptr(), v);
        }
        assert_eq!(dst, [1, 2, 3, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_signed_min_max() {
        let a = [-1i8; 16];
        let b = [1i8; 16];
        unsafe {
            let (va, vb) = (P16::load_full(a.as_ptr()), P16::load_full(b.as_ptr()));
            let lo = P16::min::<i8>(va, vb);
            let hi = P16::max::<i8>(va, vb);
            assert_eq!(i8::from_bits(lo[5]), -1);
            assert_eq!(i8::from_bits(hi[5]), 1);
        }
    }

    #[test]
    fn test_blend_and_permute() {
        let a = [10u32, 11, 12, 13];
        let b = [20u32, 21, 22, 23];
        let mut out = [0u32; 4];
        unsafe {
            let (va, vb) = (P16::load_full(a.as_ptr()), P16::load_full(b.as_ptr()));
            let mixed = P16::blend::<u32, Mask<0b0101>>(va, vb);
            P16::store_full(out.as_mut_ptr(), P16::permute::<u32, Rotate>(mixed));
        }
        assert_eq!(out, [11, 22, 13, 20]);
    }
}
