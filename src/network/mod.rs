//! Sorting networks as compile-time data.
//!
//! A network is a list of stages; a stage is a set of disjoint comparators
//! `(a, b)` with `a < b`, after which lane `a` holds the smaller and lane `b`
//! the larger of the two values. Inside a register a stage becomes one
//! compare-exchange: permute every lane to its partner, take the lane-wise
//! min and max, and blend the minima into the lower lanes.
//!
//! The kernels in [`kernels`] are declared with the `network!` macro, which
//! unrolls the stages into straight-line code. The permutation and blend
//! mask of each stage are derived from the comparator pairs by [`Stage`].

use std::fmt;
use std::marker::PhantomData;

use crate::simd::support::{identity, Lanes, MAX_LANES};
use crate::simd::{Backend, Extent, LaneSelect, Permutation, SortElement};

/// Declares network kernels from their stage lists.
///
/// ```ignore
/// network! {
///     /// Doc comment.
///     pub struct Batcher4 {
///         name: "batcher_4",
///         algorithm: Batcher,
///         size: 4,
///         lanes: 4,
///         stages: [
///             0 => [(0, 2), (1, 3)],
///             1 => [(0, 1), (2, 3)],
///             2 => [(1, 2)],
///         ],
///     }
/// }
/// ```
macro_rules! network {
    ($(
        $(#[$meta:meta])*
        pub struct $kernel:ident {
            name: $name:literal,
            algorithm: $algorithm:ident,
            size: $size:literal,
            lanes: $lanes:literal,
            stages: [
                $( $stage:literal => [ $( ($a:literal, $b:literal) ),* $(,)? ] ),* $(,)?
            ],
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $kernel;

            impl $crate::simd::Extent for $kernel {
                const N: usize = $size;
            }

            impl $crate::network::Network for $kernel {
                const NAME: &'static str = $name;
                const ALGORITHM: $crate::network::Algorithm =
                    $crate::network::Algorithm::$algorithm;
                const LANES: usize = $lanes;
                const STAGES: &'static [&'static [(u8, u8)]] = &[
                    $( &[ $( ($a, $b) ),* ] ),*
                ];

                #[inline(always)]
                unsafe fn apply<B: $crate::simd::Backend, T: $crate::simd::SortElement>(
                    v: B::Reg,
                ) -> B::Reg {
                    $(
                        let v = $crate::network::compare_exchange::<
                            B,
                            T,
                            $crate::network::Stage<Self, $stage>,
                        >(v);
                    )*
                    v
                }
            }
        )*
    };
}

pub mod kernels;

pub use kernels::*;

/// Construction method a network came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Batcher,
    Bitonic,
    BoseNelson,
    Minimum,
    OddEven,
    /// Best known network for the size, whatever its construction.
    Best,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Batcher => "batcher",
            Algorithm::Bitonic => "bitonic",
            Algorithm::BoseNelson => "bosenelson",
            Algorithm::Minimum => "minimum",
            Algorithm::OddEven => "oddeven",
            Algorithm::Best => "best",
        };
        f.write_str(name)
    }
}

/// A sorting network for `N` elements.
pub trait Network: Extent {
    /// Kernel name, `<algorithm>_<size>`.
    const NAME: &'static str;
    const ALGORITHM: Algorithm;
    /// Lanes the stages touch; at least `N`.
    const LANES: usize;
    /// Comparator pairs of every stage.
    const STAGES: &'static [&'static [(u8, u8)]];
    const DEPTH: usize = Self::STAGES.len();
    /// Most elements the stages sort; above `N` only for a [`Prefix`].
    const CAPACITY: usize = Self::N;

    /// Runs every stage on a register holding the elements in its low lanes.
    ///
    /// # Safety
    ///
    /// The backend's instruction set must be available.
    unsafe fn apply<B: Backend, T: SortElement>(v: B::Reg) -> B::Reg;
}

/// Stage `I` of network `K`, as a permutation and blend mask.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stage<K, const I: usize>(PhantomData<K>);

/// Every lane of a comparator points at the other end.
pub const fn partners(pairs: &[(u8, u8)]) -> Lanes {
    let mut out = identity();
    let mut i = 0;
    while i < pairs.len() {
        let (a, b) = pairs[i];
        let (a, b) = (a as usize % MAX_LANES, b as usize % MAX_LANES);
        out[a] = b as u8;
        out[b] = a as u8;
        i += 1;
    }
    out
}

/// Bits of the lanes receiving the minimum.
pub const fn lower_lanes(pairs: &[(u8, u8)]) -> u64 {
    let mut bits = 0u64;
    let mut i = 0;
    while i < pairs.len() {
        bits |= 1u64 << (pairs[i].0 as u32 % 64);
        i += 1;
    }
    bits
}

impl<K: Network, const I: usize> Permutation for Stage<K, I> {
    const INDEX: Lanes = partners(K::STAGES[I]);
}

impl<K: Network, const I: usize> LaneSelect for Stage<K, I> {
    const BITS: u64 = lower_lanes(K::STAGES[I]);
}

/// One compare-exchange stage.
///
/// # Safety
///
/// The backend's instruction set must be available.
#[inline(always)]
pub unsafe fn compare_exchange<B, T, S>(v: B::Reg) -> B::Reg
where
    B: Backend,
    T: SortElement,
    S: Permutation + LaneSelect,
{
    let partner = B::permute::<T, S>(v);
    let low = B::min::<T>(v, partner);
    let high = B::max::<T>(v, partner);
    B::blend::<T, S>(high, low)
}

/// Network `K` applied to its first `N` elements.
///
/// The remaining lanes are loaded as `T::MAX`, sort to the end and are never
/// stored, so a network for `K::N` elements sorts any shorter buffer. `N`
/// must not exceed `K::N`; the checked entry points reject a longer prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefix<K, const N: usize>(PhantomData<K>);

impl<K: Network, const N: usize> Extent for Prefix<K, N> {
    const N: usize = N;
}

impl<K: Network, const N: usize> Network for Prefix<K, N> {
    const NAME: &'static str = K::NAME;
    const ALGORITHM: Algorithm = K::ALGORITHM;
    const LANES: usize = K::LANES;
    const STAGES: &'static [&'static [(u8, u8)]] = K::STAGES;
    const CAPACITY: usize = K::CAPACITY;

    #[inline(always)]
    unsafe fn apply<B: Backend, T: SortElement>(v: B::Reg) -> B::Reg {
        K::apply::<B, T>(v)
    }
}

/// Type-erased view of a kernel.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub name: &'static str,
    pub algorithm: Algorithm,
    pub size: usize,
    pub lanes: usize,
    pub stages: &'static [&'static [(u8, u8)]],
}

impl Descriptor {
    pub const fn of<K: Network>() -> Self {
        Descriptor {
            name: K::NAME,
            algorithm: K::ALGORITHM,
            size: K::N,
            lanes: K::LANES,
            stages: K::STAGES,
        }
    }

    pub const fn depth(&self) -> usize {
        self.stages.len()
    }

    pub fn comparators(&self) -> usize {
        self.stages.iter().map(|stage| stage.len()).sum()
    }

    /// Applies the comparators to `data` one at a time.
    pub fn apply_scalar<T: Ord>(&self, data: &mut [T]) {
        for stage in self.stages {
            for &(a, b) in stage.iter() {
                let (a, b) = (a as usize, b as usize);
                if b < data.len() && data[a] > data[b] {
                    data.swap(a, b);
                }
            }
        }
    }
}

/// Looks a kernel up by name, e.g. `"minimum_16"`.
pub fn find(name: &str) -> Option<&'static Descriptor> {
    CATALOG.iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_derivation() {
        type First = Stage<Batcher4, 0>;
        assert_eq!(&<First as Permutation>::INDEX[..4], &[2, 3, 0, 1]);
        assert_eq!(<First as LaneSelect>::BITS, 0b0011);

        type Last = Stage<Batcher4, 2>;
        assert_eq!(&<Last as Permutation>::INDEX[..4], &[0, 2, 1, 3]);
        assert_eq!(<Last as LaneSelect>::BITS, 0b0010);
    }

    #[test]
    fn test_stage_data_is_well_formed() {
        for kernel in CATALOG {
            assert!(kernel.lanes >= kernel.size, "{}", kernel.name);
            assert!(kernel.lanes <= MAX_LANES, "{}", kernel.name);
            for stage in kernel.stages {
                let mut seen = 0u64;
                for &(a, b) in stage.iter() {
                    assert!(a < b, "{}: ({a}, {b})", kernel.name);
                    assert!((b as usize) < kernel.lanes, "{}: ({a}, {b})", kernel.name);
                    let pair = (1u64 << a) | (1u64 << b);
                    assert_eq!(seen & pair, 0, "{}: lane reused in a stage", kernel.name);
                    seen |= pair;
                }
            }
        }
    }

    #[test]
    fn test_catalog_sorts_zero_one_inputs() {
        // a network sorts everything iff it sorts every 0-1 input
        for kernel in CATALOG.iter().filter(|k| k.size <= 16) {
            for bits in 0u32..(1 << kernel.size) {
                let mut data: Vec<u8> = (0..kernel.size).map(|i| (bits >> i & 1) as u8).collect();
                kernel.apply_scalar(&mut data);
                assert!(data.windows(2).all(|w| w[0] <= w[1]), "{} on {bits:b}", kernel.name);
            }
        }
    }

    #[test]
    fn test_depth_and_names() {
        assert_eq!(Batcher4::DEPTH, 3);
        assert_eq!(Batcher4::NAME, "batcher_4");
        assert_eq!(Prefix::<Minimum16, 12>::N, 12);
        assert_eq!(Prefix::<Minimum16, 12>::DEPTH, Minimum16::DEPTH);
        assert_eq!(Prefix::<Minimum16, 12>::CAPACITY, 16);
        assert_eq!(Minimum16::CAPACITY, Minimum16::N);
        assert_eq!(Algorithm::BoseNelson.to_string(), "bosenelson");

        let found = find("bosenelson_31").unwrap();
        assert_eq!(found.size, 31);
        assert!(find("batcher_3").is_none());
    }

    #[test]
    fn test_catalog_covers_batcher_and_bitonic_headers() {
        assert_eq!(CATALOG.len(), 110);
        let names = ["batcher_7", "batcher_10", "batcher_32", "bitonic_4", "bitonic_6", "bitonic_31"];
        for name in names {
            let kernel = find(name).unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(kernel.lanes, kernel.size, "{name}");
        }
        assert_eq!(Batcher10::N, 10);
        assert_eq!(Bitonic21::ALGORITHM, Algorithm::Bitonic);
    }
}
