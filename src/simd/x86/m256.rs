//! 256-bit backend (AVX2).
//!
//! Byte and word permutes that cross the two 128-bit lanes are the
//! expensive case: AVX-512VBMI/BW provide a single `permutexvar`, without
//! them the register is shuffled twice (once as-is, once lane-swapped) and
//! the halves combined.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::marker::PhantomData;

use super::imm::m256 as imm;
use crate::simd::access::{Access, AccessMode};
use crate::simd::caps;
use crate::simd::policy::{Auto, Policy};
use crate::simd::support::{self, BlendPlan, FillPlan, Lanes, PermutePlan};
use crate::simd::traits::{Backend, Extent, LaneSelect, Permutation, SortElement};

const REG: usize = 32;

type Fill<T, E> = FillPlan<T, E, REG>;
type Blend<T, M> = BlendPlan<T, M, REG>;
type Perm<T, Q> = PermutePlan<T, Q, REG>;

/// `__m256i` register backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct M256<P = Auto>(PhantomData<P>);

#[inline(always)]
unsafe fn vector(bytes: &Lanes) -> __m256i {
    _mm256_loadu_si256(bytes.as_ptr().cast())
}

impl<P: Policy> M256<P> {
    const BW_VL: bool = P::LANE_MASKING && caps::AVX512BW && caps::AVX512VL;
    const VL: bool = P::LANE_MASKING && caps::AVX512F && caps::AVX512VL;
    const VBMI_VL: bool =
        P::LANE_MASKING && P::BYTE_PERMUTE && caps::AVX512VBMI && caps::AVX512VL;

    #[inline(always)]
    fn masked_io<T: SortElement>() -> bool {
        if T::BYTES <= 2 {
            Self::BW_VL
        } else {
            Self::VL
        }
    }

    #[inline(always)]
    unsafe fn greater_epi64<T: SortElement>(a: __m256i, b: __m256i) -> __m256i {
        if T::SIGNED {
            _mm256_cmpgt_epi64(a, b)
        } else {
            let bias = _mm256_set1_epi64x(i64::MIN);
            _mm256_cmpgt_epi64(_mm256_xor_si256(a, bias), _mm256_xor_si256(b, bias))
        }
    }

    /// Byte permute across both 128-bit lanes with in-lane shuffles only.
    #[inline(always)]
    unsafe fn cross_lane_bytes<T: SortElement, Q: Permutation>(v: __m256i) -> __m256i {
        let swapped = imm::permute4x64_epi64(v, 0x4e);
        let own = _mm256_shuffle_epi8(v, vector(&Perm::<T, Q>::SAME_LANE));
        let other = _mm256_shuffle_epi8(swapped, vector(&Perm::<T, Q>::OTHER_LANE));
        _mm256_or_si256(own, other)
    }

    #[inline(always)]
    unsafe fn permute_narrow<T: SortElement, Q: Permutation>(v: __m256i) -> __m256i {
        if T::BYTES == 2 && Perm::<T, Q>::SHUFFLE16_OK {
            let low = imm::shufflelo_epi16(v, Perm::<T, Q>::SHUFFLE_LO);
            return imm::shufflehi_epi16(low, Perm::<T, Q>::SHUFFLE_HI);
        }
        if Perm::<T, Q>::IN_LANE {
            return _mm256_shuffle_epi8(v, vector(&Perm::<T, Q>::LOCAL));
        }
        if T::BYTES == 1 && Self::VBMI_VL {
            return _mm256_permutexvar_epi8(vector(&Perm::<T, Q>::WIDE), v);
        }
        if T::BYTES == 2 && Self::BW_VL {
            return _mm256_permutexvar_epi16(vector(&Perm::<T, Q>::WIDE), v);
        }

        #[cfg(rustc_channel = "nightly")]
        {
            if !matches!(P::BUILTIN, caps::Builtin::Never) {
                return super::builtin::swizzle256::<T, Q>(v);
            }
        }

        Self::cross_lane_bytes::<T, Q>(v)
    }
}

impl<P: Policy> Backend for M256<P> {
    type Reg = __m256i;

    const BYTES: usize = REG;
    const REGISTER: &'static str = "__m256i";

    #[inline(always)]
    unsafe fn splat<T: SortElement>(value: T) -> __m256i {
        let bits = value.to_bits();
        match T::BYTES {
            1 => _mm256_set1_epi8(bits as i8),
            2 => _mm256_set1_epi16(bits as i16),
            4 => _mm256_set1_epi32(bits as i32),
            _ => _mm256_set1_epi64x(bits as i64),
        }
    }

    #[inline(always)]
    unsafe fn load_full<T: SortElement>(ptr: *const T) -> __m256i {
        _mm256_loadu_si256(ptr.cast())
    }

    #[inline(always)]
    unsafe fn load_aligned<T: SortElement>(ptr: *const T) -> __m256i {
        debug_assert_eq!(ptr as usize % REG, 0, "unaligned register load");
        _mm256_load_si256(ptr.cast())
    }

    #[inline(always)]
    unsafe fn load_partial<T: SortElement, A: Access, E: Extent>(ptr: *const T) -> __m256i {
        if Fill::<T, E>::FULL {
            return Self::load_full(ptr);
        }

        if Self::masked_io::<T>() {
            let fill = Self::splat(T::max_value());
            let k = Fill::<T, E>::LOW;
            return match T::BYTES {
                1 => _mm256_mask_loadu_epi8(fill, k as __mmask32, ptr.cast()),
                2 => _mm256_mask_loadu_epi16(fill, k as __mmask16, ptr.cast()),
                4 => _mm256_mask_loadu_epi32(fill, k as __mmask8, ptr.cast()),
                _ => _mm256_mask_loadu_epi64(fill, k as __mmask8, ptr.cast()),
            };
        }

        let padded = matches!(A::MODE, AccessMode::WordPadded);
        let groups = if padded {
            vector(&Fill::<T, E>::PADDED_GROUPS)
        } else {
            vector(&Fill::<T, E>::EXACT_GROUPS)
        };

        let mut v = _mm256_maskload_epi32(ptr.cast(), groups);
        if !padded && Fill::<T, E>::TAIL_BYTES != 0 {
            let tail = ptr.cast::<u8>().add(Fill::<T, E>::TAIL_GROUP * 4);
            let word = support::read_tail(tail, Fill::<T, E>::TAIL_BYTES);
            v = imm::insert_epi32(v, word, Fill::<T, E>::TAIL_GROUP);
        }

        v = _mm256_or_si256(v, vector(&Fill::<T, E>::OR));
        if T::SIGNED {
            v = _mm256_xor_si256(v, vector(&Fill::<T, E>::XOR));
        }
        v
    }

    #[inline(always)]
    unsafe fn store_full<T: SortElement>(ptr: *mut T, v: __m256i) {
        _mm256_storeu_si256(ptr.cast(), v)
    }

    #[inline(always)]
    unsafe fn store_aligned<T: SortElement>(ptr: *mut T, v: __m256i) {
        debug_assert_eq!(ptr as usize % REG, 0, "unaligned register store");
        _mm256_store_si256(ptr.cast(), v)
    }

    #[inline(always)]
    unsafe fn store_partial<T: SortElement, E: Extent>(ptr: *mut T, v: __m256i) {
        if Fill::<T, E>::FULL {
            return Self::store_full(ptr, v);
        }

        if Self::masked_io::<T>() {
            let k = Fill::<T, E>::LOW;
            match T::BYTES {
                1 => _mm256_mask_storeu_epi8(ptr.cast(), k as __mmask32, v),
                2 => _mm256_mask_storeu_epi16(ptr.cast(), k as __mmask16, v),
                4 => _mm256_mask_storeu_epi32(ptr.cast(), k as __mmask8, v),
                _ => _mm256_mask_storeu_epi64(ptr.cast(), k as __mmask8, v),
            }
            return;
        }

        _mm256_maskstore_epi32(ptr.cast(), vector(&Fill::<T, E>::EXACT_GROUPS), v);
        if Fill::<T, E>::TAIL_BYTES != 0 {
            let word = imm::extract_epi32(v, Fill::<T, E>::TAIL_GROUP);
            let tail = ptr.cast::<u8>().add(Fill::<T, E>::TAIL_GROUP * 4);
            support::write_tail(tail, word, Fill::<T, E>::TAIL_BYTES);
        }
    }

    #[inline(always)]
    unsafe fn min<T: SortElement>(a: __m256i, b: __m256i) -> __m256i {
        match (T::BYTES, T::SIGNED) {
            (1, true) => _mm256_min_epi8(a, b),
            (1, false) => _mm256_min_epu8(a, b),
            (2, true) => _mm256_min_epi16(a, b),
            (2, false) => _mm256_min_epu16(a, b),
            (4, true) => _mm256_min_epi32(a, b),
            (4, false) => _mm256_min_epu32(a, b),
            (_, true) if Self::VL => _mm256_min_epi64(a, b),
            (_, false) if Self::VL => _mm256_min_epu64(a, b),
            _ => _mm256_blendv_epi8(a, b, Self::greater_epi64::<T>(a, b)),
        }
    }

    #[inline(always)]
    unsafe fn max<T: SortElement>(a: __m256i, b: __m256i) -> __m256i {
        match (T::BYTES, T::SIGNED) {
            (1, true) => _mm256_max_epi8(a, b),
            (1, false) => _mm256_max_epu8(a, b),
            (2, true) => _mm256_max_epi16(a, b),
            (2, false) => _mm256_max_epu16(a, b),
            (4, true) => _mm256_max_epi32(a, b),
            (4, false) => _mm256_max_epu32(a, b),
            (_, true) if Self::VL => _mm256_max_epi64(a, b),
            (_, false) if Self::VL => _mm256_max_epu64(a, b),
            _ => _mm256_blendv_epi8(b, a, Self::greater_epi64::<T>(a, b)),
        }
    }

    #[inline(always)]
    unsafe fn blend<T: SortElement, M: LaneSelect>(if_clear: __m256i, if_set: __m256i) -> __m256i {
        if Blend::<T, M>::BITS == 0 {
            return if_clear;
        }
        if Blend::<T, M>::BITS == Blend::<T, M>::ALL {
            return if_set;
        }

        let bits = Blend::<T, M>::BITS;
        let dwords = Blend::<T, M>::DWORDS as i32;
        match T::BYTES {
            1 if Self::BW_VL => _mm256_mask_mov_epi8(if_clear, bits as __mmask32, if_set),
            // vpblendw applies one 8-bit immediate to both 128-bit lanes
            2 if Blend::<T, M>::WORDS_MIRRORED => {
                imm::blend_epi16(if_clear, if_set, (Blend::<T, M>::WORDS & 0xff) as i32)
            }
            2 if Self::BW_VL => _mm256_mask_mov_epi16(if_clear, bits as __mmask16, if_set),
            1 | 2 => _mm256_blendv_epi8(if_clear, if_set, vector(&Blend::<T, M>::BYTES)),
            4 => imm::blend_epi32(if_clear, if_set, dwords),
            _ if Self::VL => _mm256_mask_mov_epi64(if_clear, bits as __mmask8, if_set),
            _ => imm::blend_epi32(if_clear, if_set, dwords),
        }
    }

    #[inline(always)]
    unsafe fn permute<T: SortElement, Q: Permutation>(v: __m256i) -> __m256i {
        if Perm::<T, Q>::IDENTITY {
            return v;
        }

        #[cfg(rustc_channel = "nightly")]
        {
            if matches!(P::BUILTIN, caps::Builtin::First) {
                return super::builtin::swizzle256::<T, Q>(v);
            }
        }

        match T::BYTES {
            1 | 2 => Self::permute_narrow::<T, Q>(v),
            4 if Perm::<T, Q>::REPEATS => imm::shuffle_epi32(v, Perm::<T, Q>::SHUFFLE32),
            4 => _mm256_permutevar8x32_epi32(v, vector(&Perm::<T, Q>::WIDE)),
            _ => imm::permute4x64_epi64(v, Perm::<T, Q>::PERMUTE4X64),
        }
    }
}
