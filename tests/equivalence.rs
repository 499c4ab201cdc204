//! Native backends against the portable reference.
//!
//! Every primitive is run on random registers through each backend the
//! build provides, under each instruction policy, and must produce the
//! same lanes as `Portable` of the same width. The permutations and masks
//! are fixed at compile time, as in the kernels, and include patterns that
//! stay inside 128-bit lanes, repeat per lane, or cross lanes.

use std::marker::PhantomData;

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdnet::simd::support::{identity, Lanes};
use simdnet::simd::{
    Backend, Count, Exact, Extent, LaneSelect, Mask, Permutation, Portable, SortElement,
    WordPadded, Xmm, Ymm, Zmm,
};
use simdnet::Block;

const ROUNDS: usize = 10_000;

/// Fisher-Yates over the first `lanes` lanes, driven by xorshift.
const fn shuffled(seed: u64, lanes: usize) -> Lanes {
    let mut out = identity();
    let mut state = seed | 1;
    let mut i = lanes;
    while i > 1 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = (state % i as u64) as usize;
        let tmp = out[i - 1];
        out[i - 1] = out[j];
        out[j] = tmp;
        i -= 1;
    }
    out
}

struct Shuffled<const SEED: u64, const LANES: usize>;
impl<const SEED: u64, const LANES: usize> Permutation for Shuffled<SEED, LANES> {
    const INDEX: Lanes = shuffled(SEED, LANES);
}

struct Reverse<const LANES: usize>;
impl<const LANES: usize> Permutation for Reverse<LANES> {
    const INDEX: Lanes = {
        let mut out = identity();
        let mut i = 0;
        while i < LANES {
            out[i] = (LANES - 1 - i) as u8;
            i += 1;
        }
        out
    };
}

/// Swaps neighbours: in-lane and repeating at every width.
struct SwapPairs;
impl Permutation for SwapPairs {
    const INDEX: Lanes = {
        let mut out = identity();
        let mut i = 0;
        while i < 64 {
            out[i] = (i ^ 1) as u8;
            i += 1;
        }
        out
    };
}

/// Exchanges the two halves of the register.
struct SwapHalves<const LANES: usize>;
impl<const LANES: usize> Permutation for SwapHalves<LANES> {
    const INDEX: Lanes = {
        let mut out = identity();
        let mut i = 0;
        while i < LANES {
            out[i] = ((i + LANES / 2) % LANES) as u8;
            i += 1;
        }
        out
    };
}

/// Broadcasts lane 0, a non-bijective gather.
struct Broadcast;
impl Permutation for Broadcast {
    const INDEX: Lanes = [0; 64];
}

/// A primitive applied to two registers.
trait Primitive {
    const NAME: &'static str;
    unsafe fn run<B: Backend, T: SortElement>(a: B::Reg, b: B::Reg) -> B::Reg;
}

struct Min;
impl Primitive for Min {
    const NAME: &'static str = "min";
    unsafe fn run<B: Backend, T: SortElement>(a: B::Reg, b: B::Reg) -> B::Reg {
        B::min::<T>(a, b)
    }
}

struct Max;
impl Primitive for Max {
    const NAME: &'static str = "max";
    unsafe fn run<B: Backend, T: SortElement>(a: B::Reg, b: B::Reg) -> B::Reg {
        B::max::<T>(a, b)
    }
}

struct Blend<M>(PhantomData<M>);
impl<M: LaneSelect> Primitive for Blend<M> {
    const NAME: &'static str = "blend";
    unsafe fn run<B: Backend, T: SortElement>(a: B::Reg, b: B::Reg) -> B::Reg {
        B::blend::<T, M>(a, b)
    }
}

struct Permute<P>(PhantomData<P>);
impl<P: Permutation> Primitive for Permute<P> {
    const NAME: &'static str = "permute";
    unsafe fn run<B: Backend, T: SortElement>(a: B::Reg, _: B::Reg) -> B::Reg {
        B::permute::<T, P>(a)
    }
}

/// Many duplicates and extremes, otherwise full-range values.
fn random_block<T: SortElement>(rng: &mut StdRng) -> Block<T>
where
    StandardUniform: Distribution<T>,
{
    let pool = [T::min_value(), T::max_value(), T::zero()];
    let mut block = Block::default();
    for v in block.iter_mut() {
        *v = if rng.random_ratio(1, 8) {
            pool[rng.random_range(0..pool.len())]
        } else {
            rng.random()
        };
    }
    block
}

fn check<O: Primitive, B: Backend, R: Backend, T: SortElement>(rng: &mut StdRng)
where
    StandardUniform: Distribution<T>,
{
    assert_eq!(B::BYTES, R::BYTES);
    let lanes = B::BYTES / T::BYTES;
    for _ in 0..ROUNDS {
        let (a, b) = (random_block::<T>(rng), random_block::<T>(rng));
        let mut actual = Block::<T>::default();
        let mut expected = Block::<T>::default();
        unsafe {
            let v = O::run::<B, T>(B::load_full(a.as_ptr()), B::load_full(b.as_ptr()));
            B::store_full(actual.as_mut_ptr(), v);
            let v = O::run::<R, T>(R::load_full(a.as_ptr()), R::load_full(b.as_ptr()));
            R::store_full(expected.as_mut_ptr(), v);
        }
        assert_eq!(
            &actual[..lanes],
            &expected[..lanes],
            "{} on {} ({} vs {})",
            O::NAME,
            T::TYPE_NAME,
            B::REGISTER,
            R::REGISTER
        );
    }
}

/// Partial loads fill with `T::MAX`, partial stores leave the tail alone.
fn check_partial<E: Extent, B: Backend, R: Backend, T: SortElement>(rng: &mut StdRng)
where
    StandardUniform: Distribution<T>,
{
    let lanes = B::BYTES / T::BYTES;
    for _ in 0..ROUNDS / 20 {
        let source = random_block::<T>(rng);
        let background = random_block::<T>(rng);

        let mut loaded = [Block::<T>::default(), Block::default(), Block::default()];
        let mut stored = [background, background];
        unsafe {
            let v = B::load_partial::<T, Exact, E>(source.as_ptr());
            B::store_full(loaded[0].as_mut_ptr(), v);
            let v = B::load_partial::<T, WordPadded, E>(source.as_ptr());
            B::store_full(loaded[1].as_mut_ptr(), v);
            let v = R::load_partial::<T, Exact, E>(source.as_ptr());
            R::store_full(loaded[2].as_mut_ptr(), v);

            B::store_partial::<T, E>(stored[0].as_mut_ptr(), B::load_full(source.as_ptr()));
            R::store_partial::<T, E>(stored[1].as_mut_ptr(), R::load_full(source.as_ptr()));
        }

        assert_eq!(&loaded[0][..lanes], &loaded[2][..lanes], "load {} N={}", T::TYPE_NAME, E::N);
        assert_eq!(&loaded[1][..lanes], &loaded[2][..lanes], "padded load {}", T::TYPE_NAME);
        assert_eq!(&stored[0][..], &stored[1][..], "store {} N={}", T::TYPE_NAME, E::N);

        let n = E::N.min(lanes);
        assert_eq!(&stored[0][..n], &source[..n]);
        assert!(loaded[2][n..lanes].iter().all(|&v| v == T::max_value()));
    }
}

fn suite<B: Backend, R: Backend, T: SortElement, const LANES: usize>(rng: &mut StdRng)
where
    StandardUniform: Distribution<T>,
{
    check::<Min, B, R, T>(rng);
    check::<Max, B, R, T>(rng);

    check::<Blend<Mask<0x5555_5555_5555_5555>>, B, R, T>(rng);
    check::<Blend<Mask<0x0f0f_00ff_f0f0_ff00>>, B, R, T>(rng);
    check::<Blend<Mask<0x9b3e_41c2_d805_7a61>>, B, R, T>(rng);
    check::<Blend<Mask<0x0000_0000_0000_0001>>, B, R, T>(rng);

    check::<Permute<SwapPairs>, B, R, T>(rng);
    check::<Permute<Reverse<LANES>>, B, R, T>(rng);
    check::<Permute<SwapHalves<LANES>>, B, R, T>(rng);
    check::<Permute<Broadcast>, B, R, T>(rng);
    check::<Permute<Shuffled<0x2545_f491_4f6c_dd1d, LANES>>, B, R, T>(rng);
    check::<Permute<Shuffled<0x9e37_79b9_7f4a_7c15, LANES>>, B, R, T>(rng);
    check::<Permute<Shuffled<0xd1b5_4a32_d192_ed03, LANES>>, B, R, T>(rng);

    check_partial::<Count<1>, B, R, T>(rng);
    check_partial::<Count<3>, B, R, T>(rng);
    check_partial::<Count<5>, B, R, T>(rng);
    check_partial::<Count<11>, B, R, T>(rng);
    check_partial::<Count<15>, B, R, T>(rng);
    check_partial::<Count<31>, B, R, T>(rng);
    check_partial::<Count<63>, B, R, T>(rng);
}

macro_rules! equivalence {
    ($test:ident, $backend:ty, $bytes:literal) => {
        #[test]
        fn $test() {
            type Reference = Portable<$bytes>;
            let mut rng = StdRng::seed_from_u64($bytes);
            suite::<$backend, Reference, i8, { $bytes }>(&mut rng);
            suite::<$backend, Reference, u8, { $bytes }>(&mut rng);
            suite::<$backend, Reference, i16, { $bytes / 2 }>(&mut rng);
            suite::<$backend, Reference, u16, { $bytes / 2 }>(&mut rng);
            suite::<$backend, Reference, i32, { $bytes / 4 }>(&mut rng);
            suite::<$backend, Reference, u32, { $bytes / 4 }>(&mut rng);
            suite::<$backend, Reference, i64, { $bytes / 8 }>(&mut rng);
            suite::<$backend, Reference, u64, { $bytes / 8 }>(&mut rng);
        }
    };
}

equivalence!(test_xmm_matches_portable, Xmm, 16);
equivalence!(test_ymm_matches_portable, Ymm, 32);
equivalence!(test_zmm_matches_portable, Zmm, 64);

#[cfg(sse)]
mod policies_128 {
    use super::*;
    use simdnet::simd::x86::M128;
    use simdnet::simd::{Emulated, Intrinsics};

    equivalence!(test_intrinsics_128, M128<Intrinsics>, 16);
    equivalence!(test_emulated_128, M128<Emulated>, 16);
}

#[cfg(avx2)]
mod policies_256 {
    use super::*;
    use simdnet::simd::x86::M256;
    use simdnet::simd::{Emulated, Intrinsics};

    equivalence!(test_intrinsics_256, M256<Intrinsics>, 32);
    equivalence!(test_emulated_256, M256<Emulated>, 32);
}

#[cfg(avx512)]
mod policies_512 {
    use super::*;
    use simdnet::simd::x86::M512;
    use simdnet::simd::{Emulated, Intrinsics};

    equivalence!(test_intrinsics_512, M512<Intrinsics>, 64);
    equivalence!(test_emulated_512, M512<Emulated>, 64);

    /// Cross-lane byte permutes under `Emulated` take the lane gather even
    /// when the build has VBMI.
    #[test]
    fn test_emulated_512_byte_gather() {
        type Reference = Portable<64>;
        let mut rng = StdRng::seed_from_u64(0x512);
        check::<Permute<Reverse<64>>, M512<Emulated>, Reference, u8>(&mut rng);
        check::<Permute<Reverse<64>>, M512<Emulated>, Reference, i8>(&mut rng);
        check::<Permute<SwapHalves<64>>, M512<Emulated>, Reference, u8>(&mut rng);
        check::<Permute<Broadcast>, M512<Emulated>, Reference, i8>(&mut rng);
        check::<Permute<Shuffled<0x5851_f42d_4c95_7f2d, 64>>, M512<Emulated>, Reference, u8>(
            &mut rng,
        );
    }
}

#[cfg(all(rustc_channel = "nightly", sse))]
mod builtin_shuffle {
    use super::*;
    use simdnet::simd::x86::M128;
    use simdnet::simd::BuiltinFirst;

    equivalence!(test_builtin_128, M128<BuiltinFirst>, 16);

    #[cfg(avx2)]
    equivalence!(test_builtin_256, simdnet::simd::x86::M256<BuiltinFirst>, 32);

    #[cfg(avx512)]
    equivalence!(test_builtin_512, simdnet::simd::x86::M512<BuiltinFirst>, 64);
}

/// Whole kernels on forced backends and policies against the scalar network.
mod kernels {
    use super::*;
    use simdnet::network::{Bitonic32, Bosenelson13, Descriptor, Minimum9, Network, Oddeven61};
    use simdnet::sort::{network_bytes, register_bytes};
    use simdnet::sort_raw_on;

    fn check_kernel<K: Network, B: Backend, T: SortElement>(rng: &mut StdRng)
    where
        StandardUniform: Distribution<T>,
    {
        if network_bytes::<K, T>() > 64 || register_bytes::<K, T>() != B::BYTES {
            return;
        }
        let descriptor = Descriptor::of::<K>();
        for _ in 0..ROUNDS / 20 {
            let mut block = random_block::<T>(rng);
            let mut expected = block;
            descriptor.apply_scalar(&mut expected[..K::N]);
            // SAFETY: a block holds any register, widths checked above
            unsafe { sort_raw_on::<K, T, Exact, B>(block.as_mut_ptr()) };
            assert_eq!(&block[..], &expected[..], "{} on {}", K::NAME, B::REGISTER);
        }
    }

    fn check_all<B: Backend>(rng: &mut StdRng) {
        macro_rules! each {
            ($($k:ty),*) => {
                $(
                    check_kernel::<$k, B, i8>(rng);
                    check_kernel::<$k, B, u8>(rng);
                    check_kernel::<$k, B, i16>(rng);
                    check_kernel::<$k, B, u16>(rng);
                    check_kernel::<$k, B, i32>(rng);
                    check_kernel::<$k, B, u32>(rng);
                    check_kernel::<$k, B, i64>(rng);
                    check_kernel::<$k, B, u64>(rng);
                )*
            };
        }
        each!(Minimum9, Bosenelson13, Bitonic32, Oddeven61);
    }

    #[test]
    fn test_kernels_on_default_backends() {
        let mut rng = StdRng::seed_from_u64(7);
        check_all::<Xmm>(&mut rng);
        check_all::<Ymm>(&mut rng);
        check_all::<Zmm>(&mut rng);
        check_all::<Portable<16>>(&mut rng);
        check_all::<Portable<32>>(&mut rng);
        check_all::<Portable<64>>(&mut rng);
    }

    #[cfg(sse)]
    #[test]
    fn test_kernels_on_emulated_backends() {
        use simdnet::simd::Emulated;

        let mut rng = StdRng::seed_from_u64(8);
        check_all::<simdnet::simd::x86::M128<Emulated>>(&mut rng);
        #[cfg(avx2)]
        check_all::<simdnet::simd::x86::M256<Emulated>>(&mut rng);
    }
}
