//! 128-bit backend.
//!
//! The baseline is SSSE3 byte shuffles plus SSE4.1/4.2 min, max, blend and
//! 64-bit compares. AVX2 adds 32-bit immediate blends and group-masked
//! loads; AVX-512VL/BW add masked moves, masked loads and native 64-bit
//! min/max. The `P` policy can switch the AVX-512 paths off.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::marker::PhantomData;
use std::ptr;

use super::imm::m128 as imm;
use crate::simd::access::{Access, AccessMode};
use crate::simd::caps;
use crate::simd::policy::{Auto, Policy};
use crate::simd::support::{self, BlendPlan, FillPlan, Lanes, PermutePlan};
use crate::simd::traits::{Backend, Extent, LaneSelect, Permutation, SortElement};

const REG: usize = 16;

type Fill<T, E> = FillPlan<T, E, REG>;
type Blend<T, M> = BlendPlan<T, M, REG>;
type Perm<T, Q> = PermutePlan<T, Q, REG>;

/// `__m128i` register backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct M128<P = Auto>(PhantomData<P>);

#[inline(always)]
unsafe fn vector(bytes: &Lanes) -> __m128i {
    _mm_loadu_si128(bytes.as_ptr().cast())
}

impl<P: Policy> M128<P> {
    const BW_VL: bool = P::LANE_MASKING && caps::AVX512BW && caps::AVX512VL;
    const VL: bool = P::LANE_MASKING && caps::AVX512F && caps::AVX512VL;

    #[inline(always)]
    fn masked_io<T: SortElement>() -> bool {
        if T::BYTES <= 2 {
            Self::BW_VL
        } else {
            Self::VL
        }
    }

    // all-ones where a > b, on 64-bit lanes
    #[inline(always)]
    unsafe fn greater_epi64<T: SortElement>(a: __m128i, b: __m128i) -> __m128i {
        if T::SIGNED {
            _mm_cmpgt_epi64(a, b)
        } else {
            let bias = _mm_set1_epi64x(i64::MIN);
            _mm_cmpgt_epi64(_mm_xor_si128(a, bias), _mm_xor_si128(b, bias))
        }
    }
}

impl<P: Policy> Backend for M128<P> {
    type Reg = __m128i;

    const BYTES: usize = REG;
    const REGISTER: &'static str = "__m128i";

    #[inline(always)]
    unsafe fn splat<T: SortElement>(value: T) -> __m128i {
        let bits = value.to_bits();
        match T::BYTES {
            1 => _mm_set1_epi8(bits as i8),
            2 => _mm_set1_epi16(bits as i16),
            4 => _mm_set1_epi32(bits as i32),
            _ => _mm_set1_epi64x(bits as i64),
        }
    }

    #[inline(always)]
    unsafe fn load_full<T: SortElement>(ptr: *const T) -> __m128i {
        _mm_loadu_si128(ptr.cast())
    }

    #[inline(always)]
    unsafe fn load_aligned<T: SortElement>(ptr: *const T) -> __m128i {
        debug_assert_eq!(ptr as usize % REG, 0, "unaligned register load");
        _mm_load_si128(ptr.cast())
    }

    #[inline(always)]
    unsafe fn load_partial<T: SortElement, A: Access, E: Extent>(ptr: *const T) -> __m128i {
        if Fill::<T, E>::FULL {
            return Self::load_full(ptr);
        }

        if Self::masked_io::<T>() {
            let fill = Self::splat(T::max_value());
            let k = Fill::<T, E>::LOW;
            return match T::BYTES {
                1 => _mm_mask_loadu_epi8(fill, k as __mmask16, ptr.cast()),
                2 => _mm_mask_loadu_epi16(fill, k as __mmask8, ptr.cast()),
                4 => _mm_mask_loadu_epi32(fill, k as __mmask8, ptr.cast()),
                _ => _mm_mask_loadu_epi64(fill, k as __mmask8, ptr.cast()),
            };
        }

        if caps::AVX2 {
            let padded = matches!(A::MODE, AccessMode::WordPadded);
            let groups = if padded {
                vector(&Fill::<T, E>::PADDED_GROUPS)
            } else {
                vector(&Fill::<T, E>::EXACT_GROUPS)
            };

            let mut v = _mm_maskload_epi32(ptr.cast(), groups);
            if !padded && Fill::<T, E>::TAIL_BYTES != 0 {
                let tail = ptr.cast::<u8>().add(Fill::<T, E>::TAIL_GROUP * 4);
                let word = support::read_tail(tail, Fill::<T, E>::TAIL_BYTES);
                v = imm::insert_epi32(v, word, Fill::<T, E>::TAIL_GROUP);
            }

            v = _mm_or_si128(v, vector(&Fill::<T, E>::OR));
            if T::SIGNED {
                v = _mm_xor_si128(v, vector(&Fill::<T, E>::XOR));
            }
            return v;
        }

        let staged = support::stage_in(ptr, Fill::<T, E>::N);
        Self::load_full(staged.as_ptr())
    }

    #[inline(always)]
    unsafe fn store_full<T: SortElement>(ptr: *mut T, v: __m128i) {
        _mm_storeu_si128(ptr.cast(), v)
    }

    #[inline(always)]
    unsafe fn store_aligned<T: SortElement>(ptr: *mut T, v: __m128i) {
        debug_assert_eq!(ptr as usize % REG, 0, "unaligned register store");
        _mm_store_si128(ptr.cast(), v)
    }

    #[inline(always)]
    unsafe fn store_partial<T: SortElement, E: Extent>(ptr: *mut T, v: __m128i) {
        if Fill::<T, E>::FULL {
            return Self::store_full(ptr, v);
        }

        if Self::masked_io::<T>() {
            let k = Fill::<T, E>::LOW;
            match T::BYTES {
                1 => _mm_mask_storeu_epi8(ptr.cast(), k as __mmask16, v),
                2 => _mm_mask_storeu_epi16(ptr.cast(), k as __mmask8, v),
                4 => _mm_mask_storeu_epi32(ptr.cast(), k as __mmask8, v),
                _ => _mm_mask_storeu_epi64(ptr.cast(), k as __mmask8, v),
            }
            return;
        }

        if caps::AVX2 {
            _mm_maskstore_epi32(ptr.cast(), vector(&Fill::<T, E>::EXACT_GROUPS), v);
            if Fill::<T, E>::TAIL_BYTES != 0 {
                let word = imm::extract_epi32(v, Fill::<T, E>::TAIL_GROUP);
                let tail = ptr.cast::<u8>().add(Fill::<T, E>::TAIL_GROUP * 4);
                support::write_tail(tail, word, Fill::<T, E>::TAIL_BYTES);
            }
            return;
        }

        let mut staged = [T::max_value(); support::MAX_LANES];
        Self::store_full(staged.as_mut_ptr(), v);
        ptr::copy_nonoverlapping(staged.as_ptr(), ptr, Fill::<T, E>::N);
    }

    #[inline(always)]
    unsafe fn min<T: SortElement>(a: __m128i, b: __m128i) -> __m128i {
        match (T::BYTES, T::SIGNED) {
            (1, true) => _mm_min_epi8(a, b),
            (1, false) => _mm_min_epu8(a, b),
            (2, true) => _mm_min_epi16(a, b),
            (2, false) => _mm_min_epu16(a, b),
            (4, true) => _mm_min_epi32(a, b),
            (4, false) => _mm_min_epu32(a, b),
            (_, true) if Self::VL => _mm_min_epi64(a, b),
            (_, false) if Self::VL => _mm_min_epu64(a, b),
            _ => _mm_blendv_epi8(a, b, Self::greater_epi64::<T>(a, b)),
        }
    }

    #[inline(always)]
    unsafe fn max<T: SortElement>(a: __m128i, b: __m128i) -> __m128i {
        match (T::BYTES, T::SIGNED) {
            (1, true) => _mm_max_epi8(a, b),
            (1, false) => _mm_max_epu8(a, b),
            (2, true) => _mm_max_epi16(a, b),
            (2, false) => _mm_max_epu16(a, b),
            (4, true) => _mm_max_epi32(a, b),
            (4, false) => _mm_max_epu32(a, b),
            (_, true) if Self::VL => _mm_max_epi64(a, b),
            (_, false) if Self::VL => _mm_max_epu64(a, b),
            _ => _mm_blendv_epi8(b, a, Self::greater_epi64::<T>(a, b)),
        }
    }

    #[inline(always)]
    unsafe fn blend<T: SortElement, M: LaneSelect>(if_clear: __m128i, if_set: __m128i) -> __m128i {
        if Blend::<T, M>::BITS == 0 {
            return if_clear;
        }
        if Blend::<T, M>::BITS == Blend::<T, M>::ALL {
            return if_set;
        }

        let bits = Blend::<T, M>::BITS;
        let words = Blend::<T, M>::WORDS as i32;
        let dwords = Blend::<T, M>::DWORDS as i32;
        match T::BYTES {
            1 if Self::BW_VL => _mm_mask_mov_epi8(if_clear, bits as __mmask16, if_set),
            1 => _mm_blendv_epi8(if_clear, if_set, vector(&Blend::<T, M>::BYTES)),
            2 => imm::blend_epi16(if_clear, if_set, words),
            4 if caps::AVX2 => imm::blend_epi32(if_clear, if_set, dwords),
            4 => imm::blend_epi16(if_clear, if_set, words),
            _ if Self::VL => _mm_mask_mov_epi64(if_clear, bits as __mmask8, if_set),
            _ if caps::AVX2 => imm::blend_epi32(if_clear, if_set, dwords),
            _ => imm::blend_epi16(if_clear, if_set, words),
        }
    }

    #[inline(always)]
    unsafe fn permute<T: SortElement, Q: Permutation>(v: __m128i) -> __m128i {
        if Perm::<T, Q>::IDENTITY {
            return v;
        }

        #[cfg(rustc_channel = "nightly")]
        {
            if matches!(P::BUILTIN, caps::Builtin::First) {
                return super::builtin::swizzle128::<T, Q>(v);
            }
        }

        match T::BYTES {
            1 => _mm_shuffle_epi8(v, vector(&Perm::<T, Q>::LOCAL)),
            2 if Perm::<T, Q>::SHUFFLE16_OK => {
                let low = imm::shufflelo_epi16(v, Perm::<T, Q>::SHUFFLE_LO);
                imm::shufflehi_epi16(low, Perm::<T, Q>::SHUFFLE_HI)
            }
            2 => _mm_shuffle_epi8(v, vector(&Perm::<T, Q>::LOCAL)),
            // 64-bit lanes move as dword pairs
            _ => imm::shuffle_epi32(v, Perm::<T, Q>::SHUFFLE32),
        }
    }
}
