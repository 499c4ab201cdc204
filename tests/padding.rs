//! Memory around the sorted elements.
//!
//! `Exact` access must leave every byte past `N` alone, the register modes
//! must write back exactly what they read past `N`, and none of the modes
//! may let the contents of that memory leak into the result.

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdnet::network::*;
use simdnet::simd::{Exact, WordPadded};
use simdnet::sort::{network_bytes, register_lanes};
use simdnet::{sort, sort_block, sort_padded, sort_raw_with, Block, SortElement};

const ROUNDS: usize = 200;

fn random_vec<T: SortElement>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: Distribution<T>,
{
    (0..n).map(|_| rng.random()).collect()
}

fn sorted<T: SortElement>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out
}

/// Sorts the first `K::N` elements of a longer buffer through a slice of
/// exactly `K::N`; the sentinel tail must survive.
fn check_exact<K: Network, T: SortElement>(rng: &mut StdRng)
where
    StandardUniform: Distribution<T>,
{
    if network_bytes::<K, T>() > 64 {
        return;
    }
    for _ in 0..ROUNDS {
        let mut buffer = random_vec::<T>(rng, K::N + 64);
        let tail = buffer[K::N..].to_vec();
        let expected = sorted(&buffer[..K::N]);

        sort::<K, T>(&mut buffer[..K::N]).unwrap();

        assert_eq!(&buffer[..K::N], &expected[..], "{} {}", K::NAME, T::TYPE_NAME);
        assert_eq!(&buffer[K::N..], &tail[..], "{} {} wrote past N", K::NAME, T::TYPE_NAME);
    }
}

/// Whole-register access: the tail is arbitrary data, including values
/// smaller than everything sorted.
fn check_register_padded<K: Network, T: SortElement>(rng: &mut StdRng)
where
    StandardUniform: Distribution<T>,
{
    if network_bytes::<K, T>() > 64 {
        return;
    }
    let lanes = register_lanes::<K, T>();
    for _ in 0..ROUNDS {
        let mut buffer = random_vec::<T>(rng, lanes + 8);
        for v in buffer[K::N..].iter_mut().step_by(2) {
            *v = T::min_value();
        }
        let tail = buffer[K::N..].to_vec();
        let expected = sorted(&buffer[..K::N]);

        sort_padded::<K, T>(&mut buffer[..lanes]).unwrap();

        assert_eq!(&buffer[..K::N], &expected[..], "{} {}", K::NAME, T::TYPE_NAME);
        assert_eq!(&buffer[K::N..], &tail[..], "{} {} lost padding", K::NAME, T::TYPE_NAME);
    }
}

/// Reads may cover the rest of the last 32-bit word, writes may not.
fn check_word_padded<K: Network, T: SortElement>(rng: &mut StdRng)
where
    StandardUniform: Distribution<T>,
{
    if network_bytes::<K, T>() > 64 {
        return;
    }
    for _ in 0..ROUNDS {
        let mut buffer = random_vec::<T>(rng, K::N + 16);
        let tail = buffer[K::N..].to_vec();
        let expected = sorted(&buffer[..K::N]);

        // SAFETY: the buffer extends well past the next 4-byte boundary
        unsafe { sort_raw_with::<K, T, WordPadded>(buffer.as_mut_ptr()) };

        assert_eq!(&buffer[..K::N], &expected[..], "{} {}", K::NAME, T::TYPE_NAME);
        assert_eq!(&buffer[K::N..], &tail[..], "{} {} wrote past N", K::NAME, T::TYPE_NAME);
    }
}

fn check_all_modes<K: Network>(rng: &mut StdRng) {
    macro_rules! each_type {
        ($($t:ty),*) => {
            $(
                check_exact::<K, $t>(rng);
                check_register_padded::<K, $t>(rng);
                check_word_padded::<K, $t>(rng);
            )*
        };
    }
    each_type!(i8, u8, i16, u16, i32, u32, i64, u64);
}

#[test]
fn test_padding_small_networks() {
    let mut rng = StdRng::seed_from_u64(1);
    check_all_modes::<Batcher5>(&mut rng);
    check_all_modes::<Oddeven6>(&mut rng);
    check_all_modes::<Best7>(&mut rng);
    check_all_modes::<Bosenelson11>(&mut rng);
    check_all_modes::<Bitonic15>(&mut rng);
}

#[test]
fn test_padding_wide_networks() {
    let mut rng = StdRng::seed_from_u64(2);
    check_all_modes::<Minimum17>(&mut rng);
    check_all_modes::<Bitonic25>(&mut rng);
    check_all_modes::<Bosenelson31>(&mut rng);
    check_all_modes::<Oddeven61>(&mut rng);
}

#[test]
fn test_exact_mode_with_sentinels() {
    let mut buffer = [9u8, 7, 5, 3, 1, 0xaa, 0xbb, 0xcc];
    // SAFETY: five valid elements
    unsafe { sort_raw_with::<Batcher5, u8, Exact>(buffer.as_mut_ptr()) };
    assert_eq!(buffer, [1, 3, 5, 7, 9, 0xaa, 0xbb, 0xcc]);
}

#[test]
fn test_sort_padded_requires_a_full_register() {
    let mut data = vec![0u32; 7];
    let lanes = register_lanes::<Batcher5, u32>();
    assert_eq!(lanes, 8);
    assert!(sort_padded::<Batcher5, u32>(&mut data).is_err());
}

#[test]
fn test_sort_block_keeps_the_rest_of_the_block() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let mut block = Block::<i16>::filled(0);
        for v in block.iter_mut() {
            *v = rng.random();
        }
        let original = block;
        let expected = sorted(&block[..23]);

        sort_block::<Minimum23, i16>(&mut block).unwrap();

        assert_eq!(&block[..23], &expected[..]);
        assert_eq!(&block[23..], &original[23..]);
    }
}
