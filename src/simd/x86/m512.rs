//! 512-bit backend (AVX-512F + AVX-512BW).
//!
//! Every lane width has native min, max and masked moves here, so loads,
//! stores and blends are always single masked instructions. Only byte
//! permutes without VBMI need more than one instruction.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::marker::PhantomData;

use super::imm::m512 as imm;
#[cfg(rustc_channel = "nightly")]
use crate::simd::caps::Builtin;
use crate::simd::access::Access;
use crate::simd::caps;
use crate::simd::policy::{Auto, Policy};
use crate::simd::support::{BlendPlan, FillPlan, Lanes, PermutePlan};
use crate::simd::traits::{Backend, Extent, LaneSelect, Permutation, SortElement};

const REG: usize = 64;

type Fill<T, E> = FillPlan<T, E, REG>;
type Blend<T, M> = BlendPlan<T, M, REG>;
type Perm<T, Q> = PermutePlan<T, Q, REG>;

/// `__m512i` register backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct M512<P = Auto>(PhantomData<P>);

#[inline(always)]
unsafe fn vector(bytes: &Lanes) -> __m512i {
    _mm512_loadu_si512(bytes.as_ptr().cast())
}

impl<P: Policy> M512<P> {
    const VBMI: bool = P::BYTE_PERMUTE && caps::AVX512VBMI;

    /// Byte permute built from four in-lane shuffles, one per source lane,
    /// each writing only the bytes that read from that lane.
    #[inline(always)]
    unsafe fn gather_lanes<T: SortElement, Q: Permutation>(v: __m512i) -> __m512i {
        let control = vector(&Perm::<T, Q>::LOCAL);
        let sources = Perm::<T, Q>::SOURCE_LANES;

        let mut out = _mm512_setzero_si512();
        if sources[0] != 0 {
            let lane = _mm512_shuffle_i32x4::<0x00>(v, v);
            out = _mm512_mask_shuffle_epi8(out, sources[0], lane, control);
        }
        if sources[1] != 0 {
            let lane = _mm512_shuffle_i32x4::<0x55>(v, v);
            out = _mm512_mask_shuffle_epi8(out, sources[1], lane, control);
        }
        if sources[2] != 0 {
            let lane = _mm512_shuffle_i32x4::<0xaa>(v, v);
            out = _mm512_mask_shuffle_epi8(out, sources[2], lane, control);
        }
        if sources[3] != 0 {
            let lane = _mm512_shuffle_i32x4::<0xff>(v, v);
            out = _mm512_mask_shuffle_epi8(out, sources[3], lane, control);
        }
        out
    }

    #[inline(always)]
    unsafe fn permute_bytes<T: SortElement, Q: Permutation>(v: __m512i) -> __m512i {
        if Self::VBMI {
            return _mm512_permutexvar_epi8(vector(&Perm::<T, Q>::WIDE), v);
        }
        if Perm::<T, Q>::IN_LANE {
            return _mm512_shuffle_epi8(v, vector(&Perm::<T, Q>::LOCAL));
        }

        #[cfg(rustc_channel = "nightly")]
        {
            if !matches!(P::BUILTIN, Builtin::Never) {
                return super::builtin::swizzle512::<T, Q>(v);
            }
        }

        Self::gather_lanes::<T, Q>(v)
    }
}

impl<P: Policy> Backend for M512<P> {
    type Reg = __m512i;

    const BYTES: usize = REG;
    const REGISTER: &'static str = "__m512i";

    #[inline(always)]
    unsafe fn splat<T: SortElement>(value: T) -> __m512i {
        let bits = value.to_bits();
        match T::BYTES {
            1 => _mm512_set1_epi8(bits as i8),
            2 => _mm512_set1_epi16(bits as i16),
            4 => _mm512_set1_epi32(bits as i32),
            _ => _mm512_set1_epi64(bits as i64),
        }
    }

    #[inline(always)]
    unsafe fn load_full<T: SortElement>(ptr: *const T) -> __m512i {
        _mm512_loadu_si512(ptr.cast())
    }

    #[inline(always)]
    unsafe fn load_aligned<T: SortElement>(ptr: *const T) -> __m512i {
        debug_assert_eq!(ptr as usize % REG, 0, "unaligned register load");
        _mm512_load_si512(ptr.cast())
    }

    #[inline(always)]
    unsafe fn load_partial<T: SortElement, A: Access, E: Extent>(ptr: *const T) -> __m512i {
        if Fill::<T, E>::FULL {
            return Self::load_full(ptr);
        }

        let fill = Self::splat(T::max_value());
        let k = Fill::<T, E>::LOW;
        match T::BYTES {
            1 => _mm512_mask_loadu_epi8(fill, k as __mmask64, ptr.cast()),
            2 => _mm512_mask_loadu_epi16(fill, k as __mmask32, ptr.cast()),
            4 => _mm512_mask_loadu_epi32(fill, k as __mmask16, ptr.cast()),
            _ => _mm512_mask_loadu_epi64(fill, k as __mmask8, ptr.cast()),
        }
    }

    #[inline(always)]
    unsafe fn store_full<T: SortElement>(ptr: *mut T, v: __m512i) {
        _mm512_storeu_si512(ptr.cast(), v)
    }

    #[inline(always)]
    unsafe fn store_aligned<T: SortElement>(ptr: *mut T, v: __m512i) {
        debug_assert_eq!(ptr as usize % REG, 0, "unaligned register store");
        _mm512_store_si512(ptr.cast(), v)
    }

    #[inline(always)]
    unsafe fn store_partial<T: SortElement, E: Extent>(ptr: *mut T, v: __m512i) {
        if Fill::<T, E>::FULL {
            return Self::store_full(ptr, v);
        }

        let k = Fill::<T, E>::LOW;
        match T::BYTES {
            1 => _mm512_mask_storeu_epi8(ptr.cast(), k as __mmask64, v),
            2 => _mm512_mask_storeu_epi16(ptr.cast(), k as __mmask32, v),
            4 => _mm512_mask_storeu_epi32(ptr.cast(), k as __mmask16, v),
            _ => _mm512_mask_storeu_epi64(ptr.cast(), k as __mmask8, v),
        }
    }

    #[inline(always)]
    unsafe fn min<T: SortElement>(a: __m512i, b: __m512i) -> __m512i {
        match (T::BYTES, T::SIGNED) {
            (1, true) => _mm512_min_epi8(a, b),
            (1, false) => _mm512_min_epu8(a, b),
            (2, true) => _mm512_min_epi16(a, b),
            (2, false) => _mm512_min_epu16(a, b),
            (4, true) => _mm512_min_epi32(a, b),
            (4, false) => _mm512_min_epu32(a, b),
            (_, true) => _mm512_min_epi64(a, b),
            (_, false) => _mm512_min_epu64(a, b),
        }
    }

    #[inline(always)]
    unsafe fn max<T: SortElement>(a: __m512i, b: __m512i) -> __m512i {
        match (T::BYTES, T::SIGNED) {
            (1, true) => _mm512_max_epi8(a, b),
            (1, false) => _mm512_max_epu8(a, b),
            (2, true) => _mm512_max_epi16(a, b),
            (2, false) => _mm512_max_epu16(a, b),
            (4, true) => _mm512_max_epi32(a, b),
            (4, false) => _mm512_max_epu32(a, b),
            (_, true) => _mm512_max_epi64(a, b),
            (_, false) => _mm512_max_epu64(a, b),
        }
    }

    #[inline(always)]
    unsafe fn blend<T: SortElement, M: LaneSelect>(if_clear: __m512i, if_set: __m512i) -> __m512i {
        let bits = Blend::<T, M>::BITS;
        if bits == 0 {
            return if_clear;
        }
        if bits == Blend::<T, M>::ALL {
            return if_set;
        }

        match T::BYTES {
            1 => _mm512_mask_mov_epi8(if_clear, bits as __mmask64, if_set),
            2 => _mm512_mask_mov_epi16(if_clear, bits as __mmask32, if_set),
            4 => _mm512_mask_mov_epi32(if_clear, bits as __mmask16, if_set),
            _ => _mm512_mask_mov_epi64(if_clear, bits as __mmask8, if_set),
        }
    }

    #[inline(always)]
    unsafe fn permute<T: SortElement, Q: Permutation>(v: __m512i) -> __m512i {
        if Perm::<T, Q>::IDENTITY {
            return v;
        }

        #[cfg(rustc_channel = "nightly")]
        {
            if matches!(P::BUILTIN, Builtin::First) {
                return super::builtin::swizzle512::<T, Q>(v);
            }
        }

        match T::BYTES {
            1 => Self::permute_bytes::<T, Q>(v),
            2 if Perm::<T, Q>::SHUFFLE16_OK => {
                let low = imm::shufflelo_epi16(v, Perm::<T, Q>::SHUFFLE_LO);
                imm::shufflehi_epi16(low, Perm::<T, Q>::SHUFFLE_HI)
            }
            2 => _mm512_permutexvar_epi16(vector(&Perm::<T, Q>::WIDE), v),
            4 if Perm::<T, Q>::REPEATS => imm::shuffle_epi32(v, Perm::<T, Q>::SHUFFLE32),
            4 => _mm512_permutexvar_epi32(vector(&Perm::<T, Q>::WIDE), v),
            _ if Perm::<T, Q>::REPEATS => imm::shuffle_epi32(v, Perm::<T, Q>::SHUFFLE32),
            _ if Perm::<T, Q>::PERMUTEX_OK => imm::permutex_epi64(v, Perm::<T, Q>::PERMUTE4X64),
            _ => _mm512_permutexvar_epi64(vector(&Perm::<T, Q>::WIDE), v),
        }
    }
}
