//! Permutes through `core::simd` swizzles (nightly toolchains only).
//!
//! The register is reinterpreted as a byte vector and shuffled with the
//! plan's byte index. The compiler picks the instruction sequence, which is
//! sometimes better than the hand-written cross-lane emulation.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::marker::PhantomData;
use std::simd::{Simd, Swizzle};

use crate::simd::support::{Lanes, PermutePlan};
use crate::simd::traits::{Permutation, SortElement};

struct Route<T, P, const REG: usize>(PhantomData<(T, P)>);

const fn widen<const N: usize>(bytes: &Lanes) -> [usize; N] {
    let mut out = [0usize; N];
    let mut i = 0;
    while i < N {
        out[i] = bytes[i] as usize % N;
        i += 1;
    }
    out
}

impl<T: SortElement, P: Permutation> Swizzle<16> for Route<T, P, 16> {
    const INDEX: [usize; 16] = widen::<16>(&PermutePlan::<T, P, 16>::BYTES);
}

impl<T: SortElement, P: Permutation> Swizzle<32> for Route<T, P, 32> {
    const INDEX: [usize; 32] = widen::<32>(&PermutePlan::<T, P, 32>::BYTES);
}

impl<T: SortElement, P: Permutation> Swizzle<64> for Route<T, P, 64> {
    const INDEX: [usize; 64] = widen::<64>(&PermutePlan::<T, P, 64>::BYTES);
}

#[inline(always)]
pub(crate) unsafe fn swizzle128<T: SortElement, P: Permutation>(v: __m128i) -> __m128i {
    let bytes = Simd::<u8, 16>::from(v);
    <Route<T, P, 16> as Swizzle<16>>::swizzle(bytes).into()
}

#[cfg(avx2)]
#[inline(always)]
pub(crate) unsafe fn swizzle256<T: SortElement, P: Permutation>(v: __m256i) -> __m256i {
    let bytes = Simd::<u8, 32>::from(v);
    <Route<T, P, 32> as Swizzle<32>>::swizzle(bytes).into()
}

#[cfg(avx512)]
#[inline(always)]
pub(crate) unsafe fn swizzle512<T: SortElement, P: Permutation>(v: __m512i) -> __m512i {
    let bytes = Simd::<u8, 64>::from(v);
    <Route<T, P, 64> as Swizzle<64>>::swizzle(bytes).into()
}
