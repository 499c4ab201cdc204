//! Running kernels on memory.
//!
//! A kernel call loads the buffer into the narrowest register that holds
//! the network, applies the stages and stores the result. The raw entry
//! points take a pointer and trust the caller; the safe wrappers check
//! lengths and widths first and report violations as [`SimdnetError`]s.
//!
//! [`SimdnetError`]: crate::error::SimdnetError

use std::fmt;

use rayon::prelude::*;

use crate::error::{self, Result};
use crate::network::*;
use crate::simd::caps::{Capabilities, BUILTIN_DEFAULT};
use crate::simd::{
    Access, AccessMode, Backend, Exact, LowLanes, RegisterAligned, RegisterPadded, SortElement,
    Xmm, Ymm, Zmm,
};
use crate::utils::Block;

/// Widest register any kernel can use, in bytes.
pub const MAX_REGISTER_BYTES: usize = 64;

/// Bytes of lane data kernel `K` occupies for `T`.
#[inline(always)]
pub const fn network_bytes<K: Network, T: SortElement>() -> usize {
    let lanes = if K::LANES > K::N { K::LANES } else { K::N };
    lanes * T::BYTES
}

/// Size of the register `K` runs in for `T`: 16, 32 or 64 bytes.
#[inline(always)]
pub const fn register_bytes<K: Network, T: SortElement>() -> usize {
    let bytes = network_bytes::<K, T>();
    if bytes <= 16 {
        16
    } else if bytes <= 32 {
        32
    } else {
        64
    }
}

/// Elements of `T` in the register `K` runs in.
#[inline(always)]
pub const fn register_lanes<K: Network, T: SortElement>() -> usize {
    register_bytes::<K, T>() / T::BYTES
}

fn check_width<K: Network, T: SortElement>() -> Result<()> {
    if K::N > K::CAPACITY {
        log::debug!("{} sorts {} elements, not {}", K::NAME, K::CAPACITY, K::N);
        return Err(error::validation_error(format!(
            "{} sorts at most {} elements, asked for {}",
            K::NAME,
            K::CAPACITY,
            K::N
        )));
    }
    if network_bytes::<K, T>() > MAX_REGISTER_BYTES {
        log::debug!(
            "{} does not fit a register for {}: {} lanes",
            K::NAME,
            T::TYPE_NAME,
            K::LANES
        );
        return Err(error::unsupported_width(K::LANES, T::BYTES));
    }
    Ok(())
}

/// Sorts the `K::N` elements at `ptr` on backend `B` with access mode `A`.
///
/// # Safety
///
/// - `B`'s instruction set must be available
/// - `ptr` must be valid for `A`: `K::N` elements for
///   [`Exact`], rounded up to 4 bytes for
///   [`WordPadded`](crate::simd::WordPadded), a whole `B` register for the
///   register modes (aligned for [`RegisterAligned`])
#[inline(always)]
pub unsafe fn sort_raw_on<K, T, A, B>(ptr: *mut T)
where
    K: Network,
    T: SortElement,
    A: Access,
    B: Backend,
{
    debug_assert!(network_bytes::<K, T>() <= B::BYTES, "{} exceeds {}", K::NAME, B::REGISTER);
    debug_assert!(K::N <= K::CAPACITY, "{} sorts at most {}", K::NAME, K::CAPACITY);

    if A::MODE.is_full() {
        let raw = match A::MODE {
            AccessMode::RegisterAligned => B::load_aligned(ptr),
            _ => B::load_full(ptr),
        };
        // padding lanes sort to the end as T::MAX and get their bytes back
        let padded = B::blend::<T, LowLanes<K>>(B::splat(T::max_value()), raw);
        let sorted = K::apply::<B, T>(padded);
        let merged = B::blend::<T, LowLanes<K>>(raw, sorted);
        match A::MODE {
            AccessMode::RegisterAligned => B::store_aligned(ptr, merged),
            _ => B::store_full(ptr, merged),
        }
    } else {
        let v = B::load_partial::<T, A, K>(ptr);
        B::store_partial::<T, K>(ptr, K::apply::<B, T>(v));
    }
}

/// Sorts the `K::N` elements at `ptr` with access mode `A`, in the
/// narrowest register that holds the network.
///
/// # Safety
///
/// `ptr` must be valid as described for [`sort_raw_on`], for the register
/// [`register_bytes`] selects, and `K` must fit in 64 bytes of `T`.
#[inline(always)]
pub unsafe fn sort_raw_with<K: Network, T: SortElement, A: Access>(ptr: *mut T) {
    debug_assert!(network_bytes::<K, T>() <= MAX_REGISTER_BYTES);
    match register_bytes::<K, T>() {
        16 => sort_raw_on::<K, T, A, Xmm>(ptr),
        32 => sort_raw_on::<K, T, A, Ymm>(ptr),
        _ => sort_raw_on::<K, T, A, Zmm>(ptr),
    }
}

/// Sorts the `K::N` elements at `ptr`, touching no other memory.
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `K::N` elements, and `K`
/// must fit in 64 bytes of `T`.
#[inline(always)]
pub unsafe fn sort_raw<K: Network, T: SortElement>(ptr: *mut T) {
    sort_raw_with::<K, T, Exact>(ptr)
}

/// Sorts `data`, which must hold exactly `K::N` elements.
pub fn sort<K: Network, T: SortElement>(data: &mut [T]) -> Result<()> {
    check_width::<K, T>()?;
    if data.len() != K::N {
        log::debug!("{} rejected a slice of {} elements", K::NAME, data.len());
        return Err(error::length_mismatch(K::N, data.len()));
    }
    // SAFETY: exactly K::N elements, width checked
    unsafe { sort_raw::<K, T>(data.as_mut_ptr()) };
    Ok(())
}

/// Sorts the first `K::N` elements of `data` with whole-register loads and
/// stores.
///
/// `data` must be at least [`register_lanes`] long; the elements between
/// `K::N` and the end of the register are rewritten with their own values.
pub fn sort_padded<K: Network, T: SortElement>(data: &mut [T]) -> Result<()> {
    check_width::<K, T>()?;
    let required = register_lanes::<K, T>();
    if data.len() < required {
        log::debug!(
            "{} needs {} elements of padded memory, got {}",
            K::NAME,
            required,
            data.len()
        );
        return Err(error::buffer_too_short(required, data.len()));
    }
    // SAFETY: a whole register of valid elements, width checked
    unsafe { sort_raw_with::<K, T, RegisterPadded>(data.as_mut_ptr()) };
    Ok(())
}

/// Sorts the first `K::N` elements of an aligned block.
pub fn sort_block<K: Network, T: SortElement>(block: &mut Block<T>) -> Result<()> {
    check_width::<K, T>()?;
    // SAFETY: a block is 64-byte aligned and holds 64 elements
    unsafe { sort_raw_with::<K, T, RegisterAligned>(block.as_mut_ptr()) };
    Ok(())
}

/// Sorts 2 or 3 elements with scalar compare-swaps; shorter and longer
/// slices are left alone.
pub fn small_sort<T: Ord + Copy>(data: &mut [T]) {
    #[inline(always)]
    fn swap_if_greater<T: Ord + Copy>(data: &mut [T], a: usize, b: usize) {
        if data[a] > data[b] {
            data.swap(a, b);
        }
    }

    match data.len() {
        2 => swap_if_greater(data, 0, 1),
        3 => {
            swap_if_greater(data, 1, 2);
            swap_if_greater(data, 0, 2);
            swap_if_greater(data, 0, 1);
        }
        _ => {}
    }
}

macro_rules! sort_by_length {
    ($data:expr, $t:ty; $( $($n:literal)|+ => $kernel:ty ),* $(,)?) => {
        match $data.len() {
            $( $( $n => sort::<Prefix<$kernel, $n>, $t>($data), )+ )*
            len => Err(error::validation_error(format!(
                "no bundled network sorts {len} elements"
            ))),
        }
    };
}

/// Sorts up to 64 elements with the bundled network best suited to the
/// length.
///
/// Lengths below 4 use [`small_sort`]. Fails with
/// [`UnsupportedWidth`](crate::error::SimdnetError::UnsupportedWidth) when
/// the elements do not fit a 512-bit register.
pub fn sort_any<T: SortElement>(data: &mut [T]) -> Result<()> {
    match data.len() {
        0 | 1 => Ok(()),
        2 | 3 => {
            small_sort(data);
            Ok(())
        }
        _ => sort_by_length!(data, T;
            4 => Batcher4,
            5 => Batcher5,
            6 => Batcher6,
            7 => Bitonic7,
            8 => Bitonic8,
            9 => Minimum9,
            10 => Best10,
            11 => Minimum11,
            12 | 13 => Minimum13,
            14 => Minimum14,
            15 => Minimum15,
            16 => Minimum16,
            17 => Minimum17,
            18 => Minimum18,
            19 => Minimum19,
            20 | 21 => Minimum21,
            22 => Minimum22,
            23 => Minimum23,
            24 | 25 => Minimum25,
            26 => Minimum26,
            27 => Minimum27,
            28 => Minimum28,
            29 => Minimum29,
            30 | 31 => Minimum31,
            32 => Bitonic32,
            33 | 34 | 35 | 36 | 37 | 38 | 39 | 40 | 41 | 42 | 43 | 44 | 45 | 46 | 47
                | 48 | 49 | 50 | 51 | 52 | 53 | 54 | 55 | 56 | 57 | 58 | 59 | 60 | 61 => Oddeven61,
            62 | 63 | 64 => Bitonic64,
        ),
    }
}

/// Sorts every consecutive `K::N` chunk of `data` in parallel.
///
/// `data.len()` must be a multiple of `K::N`.
pub fn par_sort_chunks<K: Network, T: SortElement>(data: &mut [T]) -> Result<()> {
    check_width::<K, T>()?;
    if K::N == 0 || data.len() % K::N != 0 {
        return Err(error::validation_error(format!(
            "{} elements do not split into chunks of {}",
            data.len(),
            K::N
        )));
    }

    log::trace!(
        "{}: sorting {} chunks of {}",
        K::NAME,
        data.len() / K::N,
        T::TYPE_NAME
    );
    data.par_chunks_exact_mut(K::N).for_each(|chunk| {
        // SAFETY: each chunk holds exactly K::N elements, width checked
        unsafe { sort_raw::<K, T>(chunk.as_mut_ptr()) }
    });
    Ok(())
}

/// Network sorting as a method on slices.
pub trait NetworkSort<T: SortElement> {
    /// See [`sort`].
    fn network_sort<K: Network>(&mut self) -> Result<()>;

    /// See [`par_sort_chunks`].
    fn par_network_sort<K: Network>(&mut self) -> Result<()>;
}

impl<T: SortElement> NetworkSort<T> for [T] {
    fn network_sort<K: Network>(&mut self) -> Result<()> {
        sort::<K, T>(self)
    }

    fn par_network_sort<K: Network>(&mut self) -> Result<()> {
        par_sort_chunks::<K, T>(self)
    }
}

/// How a kernel runs for one element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelInfo {
    pub name: &'static str,
    pub size: usize,
    pub element: &'static str,
    pub algorithm: Algorithm,
    pub depth: usize,
    pub comparators: usize,
    pub register: &'static str,
    pub register_bytes: usize,
    pub instruction_sets: String,
    /// Extensions the host offers that this build leaves out.
    pub excluded: Vec<&'static str>,
    pub access: AccessMode,
}

/// Describes kernel `K` sorting `T` with [`Exact`] access.
pub fn describe<K: Network, T: SortElement>() -> Result<KernelInfo> {
    describe_with::<K, T, Exact>()
}

/// Describes kernel `K` sorting `T` with access mode `A`.
pub fn describe_with<K: Network, T: SortElement, A: Access>() -> Result<KernelInfo> {
    check_width::<K, T>()?;
    let register_bytes = register_bytes::<K, T>();
    let register = match register_bytes {
        16 => Xmm::REGISTER,
        32 => Ymm::REGISTER,
        _ => Zmm::REGISTER,
    };

    let compiled = Capabilities::compiled();
    Ok(KernelInfo {
        name: K::NAME,
        size: K::N,
        element: T::TYPE_NAME,
        algorithm: K::ALGORITHM,
        depth: K::DEPTH,
        comparators: K::STAGES.iter().map(|stage| stage.len()).sum(),
        register,
        register_bytes,
        instruction_sets: compiled.to_string(),
        excluded: Capabilities::host().missing_from(&compiled),
        access: A::MODE,
    })
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

impl fmt::Display for KernelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sorting Network Information:")?;
        writeln!(f, "\tSort Size                        : {}", self.size)?;
        writeln!(f, "\tUnderlying Sort Type             : {}", self.element)?;
        writeln!(f, "\tNetwork Generation Algorithm     : {}", self.algorithm)?;
        writeln!(f, "\tNetwork Depth                    : {}", self.depth)?;
        writeln!(f, "\tComparators                      : {}", self.comparators)?;
        writeln!(f, "\tSIMD Type                        : {}", self.register)?;
        writeln!(f, "\tSIMD Instruction Set(s) Used     : {}", self.instruction_sets)?;
        if self.excluded.is_empty() {
            writeln!(f, "\tSIMD Instruction Set(s) Excluded : None")?;
        } else {
            writeln!(f, "\tSIMD Instruction Set(s) Excluded : {}", self.excluded.join(", "))?;
        }
        writeln!(f, "\tBuiltin Shuffle Policy           : {:?}", BUILTIN_DEFAULT)?;
        writeln!(
            f,
            "\tAligned Load & Store             : {}",
            yes_no(self.access == AccessMode::RegisterAligned)
        )?;
        writeln!(
            f,
            "\tInteger Aligned Load & Store     : {}",
            yes_no(self.access != AccessMode::Exact)
        )?;
        write!(
            f,
            "\tFull Load & Store                : {}",
            yes_no(self.access.is_full())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimdnetError;
    use crate::simd::WordPadded;

    #[test]
    fn test_register_selection() {
        assert_eq!(register_bytes::<Batcher4, u32>(), 16);
        assert_eq!(register_bytes::<Batcher5, u32>(), 32);
        assert_eq!(register_bytes::<Minimum16, u32>(), 64);
        assert_eq!(register_bytes::<Bosenelson31, i8>(), 32);
        assert_eq!(register_lanes::<Batcher5, u16>(), 8);
        // the padding lane of best_7 counts
        assert_eq!(network_bytes::<Best7, u64>(), 64);
    }

    #[test]
    fn test_small_sort() {
        let mut two = [2, 1];
        small_sort(&mut two);
        assert_eq!(two, [1, 2]);

        let mut three = [3, 1, 2];
        small_sort(&mut three);
        assert_eq!(three, [1, 2, 3]);

        let mut four = [4, 3, 2, 1];
        small_sort(&mut four);
        assert_eq!(four, [4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_rejects_wrong_length() {
        let mut data = [1u32, 2, 3];
        assert_eq!(
            sort::<Batcher4, u32>(&mut data),
            Err(SimdnetError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_sort_rejects_oversized_network() {
        let mut data = [0u64; 9];
        assert_eq!(
            sort::<Minimum9, u64>(&mut data),
            Err(SimdnetError::UnsupportedWidth {
                lanes: 9,
                element_bytes: 8
            })
        );
    }

    #[test]
    fn test_describe_header() {
        let info = describe_with::<Bitonic18, u16, WordPadded>().unwrap();
        assert_eq!(info.register, Zmm::REGISTER);
        assert_eq!(info.comparators, Bitonic18::STAGES.iter().map(|s| s.len()).sum::<usize>());

        let text = info.to_string();
        assert!(text.starts_with("Sorting Network Information:\n"));
        assert!(text.contains("\tSort Size                        : 18\n"));
        assert!(text.contains("Underlying Sort Type             : u16"));
        assert!(text.contains("Network Generation Algorithm     : bitonic"));
        assert!(text.contains("Integer Aligned Load & Store     : True"));
        assert!(text.contains("\tSIMD Instruction Set(s) Excluded : "));

        let mut restricted = info.clone();
        restricted.excluded = vec!["AVX512VBMI"];
        assert!(restricted
            .to_string()
            .contains("SIMD Instruction Set(s) Excluded : AVX512VBMI\n"));
        restricted.excluded.clear();
        assert!(restricted.to_string().contains("SIMD Instruction Set(s) Excluded : None\n"));
        assert!(text.ends_with("Full Load & Store                : False"));
    }

    #[test]
    fn test_prefix_longer_than_network_is_rejected() {
        let mut data: Vec<u8> = (0..20).rev().collect();
        let before = data.clone();
        assert!(matches!(
            sort::<Prefix<Minimum16, 20>, u8>(&mut data),
            Err(SimdnetError::ValidationError { .. })
        ));
        assert_eq!(data, before);

        let mut padded = [0u32; 64];
        assert!(sort_padded::<Prefix<Batcher4, 5>, u32>(&mut padded).is_err());
        assert!(describe::<Prefix<Bitonic8, 9>, u16>().is_err());

        let mut exact: Vec<u8> = (0..16).rev().collect();
        sort::<Prefix<Minimum16, 16>, u8>(&mut exact).unwrap();
        assert!(exact.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_par_sort_chunks_rejects_ragged_input() {
        let mut data = [0u8; 10];
        assert!(matches!(
            par_sort_chunks::<Batcher4, u8>(&mut data),
            Err(SimdnetError::ValidationError { .. })
        ));
    }
}
