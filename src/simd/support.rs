//! Compile-time plans behind the native primitives.
//!
//! A permutation or a blend mask arrives as plain lane data. Before any
//! instruction can use it, it has to be turned into shuffle control bytes,
//! instruction immediates, predicate vectors or fill patterns, and checked
//! against the shapes the cheaper instructions accept (does every byte stay
//! in its 128-bit lane, does the pattern repeat, ...). All of that happens
//! here in `const fn`s, surfaced as associated constants of the plan types,
//! so a kernel's instruction choice is settled during compilation.
//!
//! The functions never panic: a backend is instantiated for every register
//! width even when a width cannot hold the network, and those plans must
//! still evaluate.

use std::marker::PhantomData;
use std::ptr;

use crate::simd::traits::{Extent, LaneSelect, Permutation, SortElement};

/// Per-lane data for the widest register: 64 one-byte lanes.
pub type Lanes = [u8; 64];

/// Lane count of the widest register.
pub const MAX_LANES: usize = 64;

/// Byte value that makes `pshufb` write zero.
const ZERO_LANE: u8 = 0x80;

pub const fn identity() -> Lanes {
    let mut out = [0u8; MAX_LANES];
    let mut i = 0;
    while i < MAX_LANES {
        out[i] = i as u8;
        i += 1;
    }
    out
}

/// Bits `0..n`.
pub const fn lane_mask(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

pub const fn lane_count(reg: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let lanes = reg / width;
    if lanes > MAX_LANES {
        MAX_LANES
    } else {
        lanes
    }
}

/// Restricts `index` to `lanes` lanes; out-of-range entries keep their lane.
pub const fn clip(index: &Lanes, lanes: usize) -> Lanes {
    let mut out = identity();
    let mut i = 0;
    while i < lanes {
        let src = index[i] as usize;
        if src < lanes {
            out[i] = src as u8;
        }
        i += 1;
    }
    out
}

pub const fn is_identity(index: &Lanes, lanes: usize) -> bool {
    let mut i = 0;
    while i < lanes {
        if index[i] as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

/// Expands a lane index into a byte index: byte `b` of the result reads
/// byte `out[b]` of the source.
pub const fn byte_index(index: &Lanes, width: usize, lanes: usize) -> Lanes {
    let mut out = identity();
    let mut i = 0;
    while i < lanes {
        let src = index[i] as usize;
        let mut j = 0;
        while j < width {
            out[i * width + j] = (src * width + j) as u8;
            j += 1;
        }
        i += 1;
    }
    out
}

/// Every byte of a `reg`-byte register reads from its own 128-bit lane.
pub const fn in_lane(bytes: &Lanes, reg: usize) -> bool {
    let mut b = 0;
    while b < reg {
        if bytes[b] as usize / 16 != b / 16 {
            return false;
        }
        b += 1;
    }
    true
}

/// In-lane, and every 128-bit lane uses the same relative pattern.
pub const fn repeats(bytes: &Lanes, reg: usize) -> bool {
    if !in_lane(bytes, reg) {
        return false;
    }
    let mut b = 16;
    while b < reg {
        if bytes[b] % 16 != bytes[b % 16] % 16 {
            return false;
        }
        b += 1;
    }
    true
}

/// `pshufb` control bytes: each byte's source offset inside its lane.
pub const fn local(bytes: &Lanes) -> Lanes {
    let mut out = [0u8; MAX_LANES];
    let mut b = 0;
    while b < MAX_LANES {
        out[b] = bytes[b] % 16;
        b += 1;
    }
    out
}

/// Control bytes for the two halves of a cross-lane 256-bit shuffle.
///
/// With `same` the bytes sourced from their own lane keep their offset and
/// the rest are zeroed; otherwise the reverse, for use on the lane-swapped
/// copy of the register.
pub const fn split_by_lane(bytes: &Lanes, reg: usize, same: bool) -> Lanes {
    let mut out = [ZERO_LANE; MAX_LANES];
    let mut b = 0;
    while b < reg {
        let own = bytes[b] as usize / 16 == b / 16;
        if own == same {
            out[b] = bytes[b] % 16;
        }
        b += 1;
    }
    out
}

/// For each 128-bit source lane, the destination bytes reading from it.
pub const fn source_lanes(bytes: &Lanes, reg: usize) -> [u64; 4] {
    let mut out = [0u64; 4];
    let mut b = 0;
    while b < reg && b < MAX_LANES {
        let lane = (bytes[b] as usize / 16) % 4;
        out[lane] |= 1u64 << b;
        b += 1;
    }
    out
}

/// `shuffle_epi32` immediate for the first 128-bit lane.
pub const fn shuffle32_imm(bytes: &Lanes) -> i32 {
    let mut imm = 0;
    let mut d = 0;
    while d < 4 {
        let src = (bytes[4 * d] as i32 / 4) % 4;
        imm |= src << (2 * d);
        d += 1;
    }
    imm
}

/// A 16-bit permute that `shufflelo_epi16` followed by `shufflehi_epi16`
/// can express: in-lane, repeating, words 0-3 and 4-7 stay in their half.
pub const fn shuffle16_ok(bytes: &Lanes, reg: usize) -> bool {
    if !repeats(bytes, reg) {
        return false;
    }
    let mut w = 0;
    while w < 8 {
        let src = bytes[2 * w] as usize / 2;
        if (w < 4) != (src < 4) || bytes[2 * w] % 2 != 0 {
            return false;
        }
        w += 1;
    }
    true
}

/// `shufflelo_epi16` (or with `high`, `shufflehi_epi16`) immediate.
pub const fn shuffle16_imm(bytes: &Lanes, high: bool) -> i32 {
    let base = if high { 4 } else { 0 };
    let mut imm = 0;
    let mut w = 0;
    while w < 4 {
        let src = (bytes[2 * (base + w)] as i32 / 2) % 4;
        imm |= src << (2 * w);
        w += 1;
    }
    imm
}

/// `permute4x64_epi64` immediate for a 4-lane index.
pub const fn permute4x64_imm(index: &Lanes) -> i32 {
    let mut imm = 0;
    let mut i = 0;
    while i < 4 {
        imm |= (index[i] as i32 & 3) << (2 * i);
        i += 1;
    }
    imm
}

/// An 8-lane 64-bit index `permutex_epi64` can express: both 256-bit
/// halves apply the same in-half pattern.
pub const fn permutex_ok(index: &Lanes) -> bool {
    let mut i = 0;
    while i < 4 {
        if index[i] >= 4 || index[i + 4] < 4 || index[i + 4] - 4 != index[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// The index as a little-endian vector of `width`-byte integers, the
/// operand layout of `permutexvar` and `permutevar8x32`.
pub const fn wide(index: &Lanes, width: usize, lanes: usize) -> Lanes {
    let mut out = [0u8; MAX_LANES];
    let mut i = 0;
    while i < lanes && i * width < MAX_LANES {
        out[i * width] = index[i];
        i += 1;
    }
    out
}

/// Repeats every lane bit `per` times, giving a mask over narrower units.
pub const fn expand_bits(bits: u64, per: usize, lanes: usize) -> u64 {
    if per == 0 {
        return 0;
    }
    let mut out = 0u64;
    let mut i = 0;
    while i < lanes {
        if bits & (1u64 << i) != 0 {
            let mut k = 0;
            while k < per && i * per + k < 64 {
                out |= 1u64 << (i * per + k);
                k += 1;
            }
        }
        i += 1;
    }
    out
}

/// Byte predicate vector for `blendv_epi8`.
pub const fn byte_select(bits: u64, width: usize, lanes: usize) -> Lanes {
    let mut out = [0u8; MAX_LANES];
    let mut i = 0;
    while i < lanes {
        if bits & (1u64 << i) != 0 {
            let mut j = 0;
            while j < width && i * width + j < MAX_LANES {
                out[i * width + j] = 0xff;
                j += 1;
            }
        }
        i += 1;
    }
    out
}

/// All-ones bytes over the lanes at and past `n`.
pub const fn fill_or(width: usize, n: usize, reg: usize) -> Lanes {
    let mut out = [0u8; MAX_LANES];
    let mut b = n * width;
    while b < reg && b < MAX_LANES {
        out[b] = 0xff;
        b += 1;
    }
    out
}

/// Sign bits of the lanes at and past `n`, turning an all-ones fill into
/// the signed maximum.
pub const fn fill_xor(width: usize, n: usize, reg: usize, signed: bool) -> Lanes {
    let mut out = [0u8; MAX_LANES];
    if !signed || width == 0 {
        return out;
    }
    let mut b = n * width;
    while b < reg && b < MAX_LANES {
        if b % width == width - 1 {
            out[b] = 0x80;
        }
        b += 1;
    }
    out
}

/// `maskload_epi32` mask over the first `n` elements.
///
/// Without `padded` only 32-bit groups wholly inside the elements are
/// selected; with it, any group holding at least one element is.
pub const fn group_select(width: usize, n: usize, reg: usize, padded: bool) -> Lanes {
    let mut out = [0u8; MAX_LANES];
    let end = n * width;
    let mut d = 0;
    while d < reg / 4 && d < MAX_LANES / 4 {
        let selected = if padded { 4 * d < end } else { 4 * d + 4 <= end };
        if selected {
            let mut j = 0;
            while j < 4 {
                out[4 * d + j] = 0xff;
                j += 1;
            }
        }
        d += 1;
    }
    out
}

/// Everything the backends need to permute `T` lanes by `P` in a
/// `REG`-byte register.
pub struct PermutePlan<T, P, const REG: usize>(PhantomData<(T, P)>);

impl<T: SortElement, P: Permutation, const REG: usize> PermutePlan<T, P, REG> {
    pub const LANES: usize = lane_count(REG, T::BYTES);
    pub const INDEX: Lanes = clip(&P::INDEX, Self::LANES);
    pub const IDENTITY: bool = is_identity(&Self::INDEX, Self::LANES);
    pub const BYTES: Lanes = byte_index(&Self::INDEX, T::BYTES, Self::LANES);
    pub const IN_LANE: bool = in_lane(&Self::BYTES, REG);
    pub const REPEATS: bool = repeats(&Self::BYTES, REG);
    pub const LOCAL: Lanes = local(&Self::BYTES);
    pub const SAME_LANE: Lanes = split_by_lane(&Self::BYTES, REG, true);
    pub const OTHER_LANE: Lanes = split_by_lane(&Self::BYTES, REG, false);
    pub const SOURCE_LANES: [u64; 4] = source_lanes(&Self::BYTES, REG);
    pub const SHUFFLE32: i32 = shuffle32_imm(&Self::BYTES);
    pub const SHUFFLE16_OK: bool = shuffle16_ok(&Self::BYTES, REG);
    pub const SHUFFLE_LO: i32 = shuffle16_imm(&Self::BYTES, false);
    pub const SHUFFLE_HI: i32 = shuffle16_imm(&Self::BYTES, true);
    pub const PERMUTE4X64: i32 = permute4x64_imm(&Self::INDEX);
    pub const PERMUTEX_OK: bool = permutex_ok(&Self::INDEX);
    pub const WIDE: Lanes = wide(&Self::INDEX, T::BYTES, Self::LANES);
}

/// Blend data for mask `M` over `T` lanes in a `REG`-byte register.
pub struct BlendPlan<T, M, const REG: usize>(PhantomData<(T, M)>);

impl<T: SortElement, M: LaneSelect, const REG: usize> BlendPlan<T, M, REG> {
    pub const LANES: usize = lane_count(REG, T::BYTES);
    pub const ALL: u64 = lane_mask(Self::LANES);
    pub const BITS: u64 = M::BITS & Self::ALL;
    pub const BYTES: Lanes = byte_select(Self::BITS, T::BYTES, Self::LANES);
    pub const WORDS: u64 = expand_bits(Self::BITS, T::BYTES / 2, Self::LANES);
    pub const DWORDS: u64 = expand_bits(Self::BITS, T::BYTES / 4, Self::LANES);
    pub const WORDS_MIRRORED: bool = Self::WORDS & 0xff == (Self::WORDS >> 8) & 0xff;
}

/// Partial load and store data for the first `E::N` lanes of `T`.
pub struct FillPlan<T, E, const REG: usize>(PhantomData<(T, E)>);

impl<T: SortElement, E: Extent, const REG: usize> FillPlan<T, E, REG> {
    pub const LANES: usize = lane_count(REG, T::BYTES);
    pub const FULL: bool = E::N >= Self::LANES;
    pub const N: usize = if Self::FULL { Self::LANES } else { E::N };
    pub const LOW: u64 = lane_mask(Self::N);
    pub const OR: Lanes = fill_or(T::BYTES, Self::N, REG);
    pub const XOR: Lanes = fill_xor(T::BYTES, Self::N, REG, T::SIGNED);
    pub const EXACT_GROUPS: Lanes = group_select(T::BYTES, Self::N, REG, false);
    pub const PADDED_GROUPS: Lanes = group_select(T::BYTES, Self::N, REG, true);
    pub const TAIL_GROUP: usize = Self::N * T::BYTES / 4;
    pub const TAIL_BYTES: usize = Self::N * T::BYTES % 4;
}

/// Copies `n` elements into a buffer whose other slots hold `T::MAX`.
///
/// # Safety
///
/// `src` must be valid for reads of `n` elements, `n <= 64`.
#[inline(always)]
pub(crate) unsafe fn stage_in<T: SortElement>(src: *const T, n: usize) -> [T; MAX_LANES] {
    let mut buf = [T::max_value(); MAX_LANES];
    ptr::copy_nonoverlapping(src, buf.as_mut_ptr(), n);
    buf
}

/// Reads `len < 4` bytes into the low end of a 32-bit word.
///
/// # Safety
///
/// `src` must be valid for reads of `len` bytes.
#[inline(always)]
#[allow(dead_code)]
pub(crate) unsafe fn read_tail(src: *const u8, len: usize) -> i32 {
    let mut word = [0u8; 4];
    ptr::copy_nonoverlapping(src, word.as_mut_ptr(), len);
    i32::from_le_bytes(word)
}

/// Writes the low `len < 4` bytes of `word`.
///
/// # Safety
///
/// `dst` must be valid for writes of `len` bytes.
#[inline(always)]
#[allow(dead_code)]
pub(crate) unsafe fn write_tail(dst: *mut u8, word: i32, len: usize) {
    let bytes = word.to_le_bytes();
    ptr::copy_nonoverlapping(bytes.as_ptr(), dst, len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::traits::{Count, Mask};

    const fn lanes_from(prefix: &[u8]) -> Lanes {
        let mut out = identity();
        let mut i = 0;
        while i < prefix.len() {
            out[i] = prefix[i];
            i += 1;
        }
        out
    }

    struct Swap01;
    impl Permutation for Swap01 {
        const INDEX: Lanes = lanes_from(&[1, 0]);
    }

    struct Reverse4;
    impl Permutation for Reverse4 {
        const INDEX: Lanes = lanes_from(&[3, 2, 1, 0]);
    }

    struct Reverse32;
    impl Permutation for Reverse32 {
        const INDEX: Lanes = {
            let mut out = identity();
            let mut i = 0;
            while i < 32 {
                out[i] = (31 - i) as u8;
                i += 1;
            }
            out
        };
    }

    #[test]
    fn test_lane_mask_edges() {
        assert_eq!(lane_mask(0), 0);
        assert_eq!(lane_mask(5), 0b11111);
        assert_eq!(lane_mask(63), u64::MAX >> 1);
        assert_eq!(lane_mask(64), u64::MAX);
        assert_eq!(lane_mask(100), u64::MAX);
    }

    #[test]
    fn test_clip_ignores_out_of_range() {
        let index = lanes_from(&[9, 0, 1, 2]);
        let clipped = clip(&index, 4);
        assert_eq!(&clipped[..4], &[0, 0, 1, 2]);
        assert_eq!(clipped[4], 4);
    }

    #[test]
    fn test_byte_index_widens_lanes() {
        let bytes = byte_index(&Swap01::INDEX, 4, 4);
        assert_eq!(&bytes[..8], &[4, 5, 6, 7, 0, 1, 2, 3]);
        assert_eq!(&bytes[8..16], &[8, 9, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_shuffle32_immediates() {
        type Plan = PermutePlan<u32, Reverse4, 16>;
        assert_eq!(Plan::SHUFFLE32, 0x1b);
        assert!(Plan::IN_LANE && Plan::REPEATS);
        assert!(!Plan::IDENTITY);

        // 64-bit lanes swap whole dword pairs
        type Wide = PermutePlan<u64, Swap01, 16>;
        assert_eq!(Wide::SHUFFLE32, 0x4e);
    }

    #[test]
    fn test_cross_lane_detection() {
        type Plan = PermutePlan<u8, Reverse32, 32>;
        assert!(!Plan::IN_LANE);
        assert_eq!(Plan::SAME_LANE[0], ZERO_LANE);
        assert_eq!(Plan::OTHER_LANE[0], 15);
        assert_eq!(Plan::OTHER_LANE[31], 0);
        assert_eq!(Plan::SOURCE_LANES[1], 0xffff);
        assert_eq!(Plan::SOURCE_LANES[0], 0xffff_0000);
    }

    #[test]
    fn test_repeat_needs_equal_lanes() {
        // swapping lanes 0 and 1 only touches the low half of a 256-bit register
        type Plan = PermutePlan<u32, Swap01, 32>;
        assert!(Plan::IN_LANE);
        assert!(!Plan::REPEATS);
        assert_eq!(&Plan::WIDE[..8], &[1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_shuffle16_split() {
        type Plan = PermutePlan<u16, Reverse4, 16>;
        assert!(Plan::SHUFFLE16_OK);
        assert_eq!(Plan::SHUFFLE_LO, 0x1b);
        assert_eq!(Plan::SHUFFLE_HI, 0xe4);

        struct AcrossHalves;
        impl Permutation for AcrossHalves {
            const INDEX: Lanes = lanes_from(&[4, 1, 2, 3, 0]);
        }
        assert!(!PermutePlan::<u16, AcrossHalves, 16>::SHUFFLE16_OK);
    }

    #[test]
    fn test_permute4x64_and_permutex() {
        assert_eq!(PermutePlan::<u64, Reverse4, 32>::PERMUTE4X64, 0x1b);
        assert!(!PermutePlan::<u64, Reverse4, 64>::PERMUTEX_OK);

        struct BothHalves;
        impl Permutation for BothHalves {
            const INDEX: Lanes = lanes_from(&[1, 0, 3, 2, 5, 4, 7, 6]);
        }
        assert!(PermutePlan::<u64, BothHalves, 64>::PERMUTEX_OK);
    }

    #[test]
    fn test_blend_plan_masks() {
        type Words = BlendPlan<u16, Mask<0b0000_0001_0000_0001>, 32>;
        assert!(Words::WORDS_MIRRORED);
        assert_eq!(Words::WORDS, 0x0101);

        type Quads = BlendPlan<u64, Mask<0b10>, 32>;
        assert_eq!(Quads::DWORDS, 0b1100);
        assert_eq!(Quads::WORDS, 0b1111_0000);
        assert_eq!(&Quads::BYTES[..16], &[0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255]);

        type Clipped = BlendPlan<u32, Mask<{ u64::MAX }>, 16>;
        assert_eq!(Clipped::BITS, 0xf);
    }

    #[test]
    fn test_fill_plan_signed_fill() {
        type Plan = FillPlan<i16, Count<5>, 16>;
        assert!(!Plan::FULL);
        assert_eq!(Plan::LOW, 0b11111);
        assert_eq!(&Plan::OR[8..12], &[0, 0, 0xff, 0xff]);
        assert_eq!(&Plan::XOR[10..12], &[0, 0x80]);
        assert_eq!(Plan::TAIL_GROUP, 2);
        assert_eq!(Plan::TAIL_BYTES, 2);
        assert_eq!(&Plan::EXACT_GROUPS[..12], &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0, 0, 0, 0]);
        assert_eq!(Plan::PADDED_GROUPS[8], 0xff);

        // the unsigned fill is plain all-ones
        type Unsigned = FillPlan<u8, Count<3>, 16>;
        assert!(Unsigned::XOR.iter().all(|&b| b == 0));
        assert_eq!(Unsigned::TAIL_BYTES, 3);

        type Full = FillPlan<u32, Count<9>, 32>;
        assert!(Full::FULL);
        assert_eq!(Full::N, 8);
    }

    #[test]
    fn test_tail_words() {
        let bytes = [0x11u8, 0x22, 0x33];
        let word = unsafe { read_tail(bytes.as_ptr(), 3) };
        assert_eq!(word, 0x0033_2211);

        let mut out = [0u8; 4];
        unsafe { write_tail(out.as_mut_ptr(), 0x4433_2211, 2) };
        assert_eq!(out, [0x11, 0x22, 0, 0]);
    }
}
