//! Every bundled kernel against `slice::sort`.
//!
//! Each kernel is run for every element type whose lanes fit a 512-bit
//! register, on descending, ascending, constant and random inputs. The
//! random inputs mix full-range values with a small pool of extremes so
//! duplicates and the padding value `T::MAX` both show up.

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdnet::network::*;
use simdnet::sort::network_bytes;
use simdnet::{sort, SortElement};

const RANDOM_ROUNDS: usize = 1_000;

fn value<T: SortElement>(i: usize) -> T {
    num::cast(i).unwrap()
}

fn random_input<T: SortElement>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: Distribution<T>,
{
    let pool = [T::min_value(), T::max_value(), T::zero(), T::one()];
    (0..n)
        .map(|_| {
            if rng.random_ratio(1, 4) {
                pool[rng.random_range(0..pool.len())]
            } else {
                rng.random()
            }
        })
        .collect()
}

fn assert_sorts<K: Network, T: SortElement>(input: &[T]) {
    let mut actual = input.to_vec();
    let mut expected = input.to_vec();
    expected.sort_unstable();

    sort::<K, T>(&mut actual).unwrap();
    assert_eq!(
        actual,
        expected,
        "{} on {} input {:?}",
        K::NAME,
        T::TYPE_NAME,
        input
    );
}

fn check_kernel_for<K: Network, T: SortElement>(rng: &mut StdRng)
where
    StandardUniform: Distribution<T>,
{
    if network_bytes::<K, T>() > 64 {
        return;
    }

    let descending: Vec<T> = (0..K::N).rev().map(value).collect();
    assert_sorts::<K, T>(&descending);

    let ascending: Vec<T> = (0..K::N).map(value).collect();
    assert_sorts::<K, T>(&ascending);

    assert_sorts::<K, T>(&vec![T::max_value(); K::N]);
    assert_sorts::<K, T>(&vec![T::min_value(); K::N]);

    for _ in 0..RANDOM_ROUNDS {
        let input = random_input::<T>(rng, K::N);
        assert_sorts::<K, T>(&input);
    }
}

fn check_kernel<K: Network>(rng: &mut StdRng) {
    check_kernel_for::<K, i8>(rng);
    check_kernel_for::<K, u8>(rng);
    check_kernel_for::<K, i16>(rng);
    check_kernel_for::<K, u16>(rng);
    check_kernel_for::<K, i32>(rng);
    check_kernel_for::<K, u32>(rng);
    check_kernel_for::<K, i64>(rng);
    check_kernel_for::<K, u64>(rng);
}

macro_rules! kernel_family {
    ($test:ident, $seed:literal: $($kernel:ident),* $(,)?) => {
        #[test]
        fn $test() {
            let mut rng = StdRng::seed_from_u64($seed);
            $( check_kernel::<$kernel>(&mut rng); )*
        }
    };
}

kernel_family!(test_batcher_kernels, 0xba7c:
    Batcher4, Batcher5, Batcher6, Batcher7, Batcher8, Batcher9, Batcher10, Batcher11, Batcher12,
    Batcher13, Batcher14, Batcher16, Batcher17, Batcher18, Batcher19, Batcher20, Batcher21,
    Batcher22, Batcher23, Batcher24, Batcher25, Batcher26, Batcher27, Batcher30, Batcher32,
);

kernel_family!(test_bitonic_kernels, 0xb170:
    Bitonic4, Bitonic5, Bitonic6, Bitonic7, Bitonic8, Bitonic9, Bitonic10, Bitonic11, Bitonic12,
    Bitonic13, Bitonic14, Bitonic15, Bitonic16, Bitonic17, Bitonic18, Bitonic19, Bitonic20,
    Bitonic21, Bitonic22, Bitonic23, Bitonic24, Bitonic25, Bitonic26, Bitonic27, Bitonic28,
    Bitonic29, Bitonic30, Bitonic31, Bitonic32, Bitonic64,
);

kernel_family!(test_bosenelson_kernels, 0xb05e:
    Bosenelson4, Bosenelson7, Bosenelson8, Bosenelson9, Bosenelson10, Bosenelson11,
    Bosenelson12, Bosenelson13, Bosenelson14, Bosenelson15, Bosenelson16, Bosenelson17,
    Bosenelson18, Bosenelson22, Bosenelson24, Bosenelson26, Bosenelson27, Bosenelson28,
    Bosenelson31,
);

kernel_family!(test_minimum_kernels, 0x1111:
    Minimum4, Minimum7, Minimum8, Minimum9, Minimum11, Minimum13, Minimum14, Minimum15,
    Minimum16, Minimum17, Minimum18, Minimum19, Minimum21, Minimum22, Minimum23, Minimum25,
    Minimum26, Minimum27, Minimum28, Minimum29, Minimum31,
);

kernel_family!(test_oddeven_kernels, 0x0dde:
    Oddeven6, Oddeven9, Oddeven14, Oddeven15, Oddeven16, Oddeven17, Oddeven20, Oddeven29,
    Oddeven61,
);

kernel_family!(test_best_kernels, 0xbe57:
    Best7, Best10, Best11, Best21, Best30, Best61,
);

#[test]
fn test_batcher_4_example() {
    let mut data = [3u32, 1, 4, 1];
    sort::<Batcher4, u32>(&mut data).unwrap();
    assert_eq!(data, [1, 1, 3, 4]);
}

#[test]
fn test_bosenelson_31_reverses_descending_bytes() {
    let mut data: Vec<i8> = (0..31).rev().collect();
    sort::<Bosenelson31, i8>(&mut data).unwrap();
    let expected: Vec<i8> = (0..31).collect();
    assert_eq!(data, expected);
}

#[test]
fn test_signed_extremes_order() {
    let mut data = [i64::MAX, i64::MIN, -1, 0, 1, i64::MIN + 1, i64::MAX - 1, 7];
    sort::<Bitonic8, i64>(&mut data).unwrap();
    assert_eq!(data, [i64::MIN, i64::MIN + 1, -1, 0, 1, 7, i64::MAX - 1, i64::MAX]);

    // unsigned 64-bit lanes must not compare as signed
    let mut data = [u64::MAX, 0, 1 << 63, 1];
    sort::<Batcher4, u64>(&mut data).unwrap();
    assert_eq!(data, [0, 1, 1 << 63, u64::MAX]);
}

#[test]
fn test_prefix_sorts_shorter_buffers() {
    let mut rng = StdRng::seed_from_u64(0x9e3779b9);
    for _ in 0..RANDOM_ROUNDS {
        let input = random_input::<u16>(&mut rng, 10);
        assert_sorts::<Prefix<Minimum16, 10>, u16>(&input);

        let input = random_input::<i32>(&mut rng, 5);
        assert_sorts::<Prefix<Best7, 5>, i32>(&input);
    }
}

#[test]
fn test_sorting_preserves_multiset() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..RANDOM_ROUNDS {
        let input: Vec<u8> = (0..61).map(|_| rng.random_range(0..8)).collect();
        let mut output = input.clone();
        sort::<Oddeven61, u8>(&mut output).unwrap();

        let mut counts = [0usize; 8];
        for &v in &input {
            counts[v as usize] += 1;
        }
        for &v in &output {
            counts[v as usize] -= 1;
        }
        assert!(counts.iter().all(|&c| c == 0), "{input:?} -> {output:?}");
    }
}
