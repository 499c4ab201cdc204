//! `sort_any` for every length it accepts.

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdnet::{sort_any, SimdnetError, SortElement};

const ROUNDS: usize = 100;

fn check_every_length<T: SortElement>(rng: &mut StdRng)
where
    StandardUniform: Distribution<T>,
{
    let fits = 64 / T::BYTES;
    for len in 0..=fits {
        for _ in 0..ROUNDS {
            let mut data: Vec<T> = (0..len).map(|_| rng.random()).collect();
            let mut expected = data.clone();
            expected.sort_unstable();

            sort_any(&mut data).unwrap_or_else(|e| panic!("{} x {len}: {e}", T::TYPE_NAME));
            assert_eq!(data, expected, "{} x {len}", T::TYPE_NAME);
        }
    }
}

#[test]
fn test_sort_any_bytes() {
    let mut rng = StdRng::seed_from_u64(8);
    check_every_length::<i8>(&mut rng);
    check_every_length::<u8>(&mut rng);
}

#[test]
fn test_sort_any_words() {
    let mut rng = StdRng::seed_from_u64(16);
    check_every_length::<i16>(&mut rng);
    check_every_length::<u16>(&mut rng);
}

#[test]
fn test_sort_any_dwords_and_qwords() {
    let mut rng = StdRng::seed_from_u64(32);
    check_every_length::<i32>(&mut rng);
    check_every_length::<u32>(&mut rng);
    check_every_length::<i64>(&mut rng);
    check_every_length::<u64>(&mut rng);
}

#[test]
fn test_sort_any_rejects_what_does_not_fit() {
    let mut too_long = vec![0u8; 65];
    assert!(matches!(
        sort_any(&mut too_long),
        Err(SimdnetError::ValidationError { .. })
    ));

    let mut too_wide = vec![0u64; 9];
    assert!(matches!(
        sort_any(&mut too_wide),
        Err(SimdnetError::UnsupportedWidth { .. })
    ));
}

#[test]
fn test_sort_any_small_inputs() {
    let mut empty: [u32; 0] = [];
    sort_any(&mut empty).unwrap();

    let mut one = [5i16];
    sort_any(&mut one).unwrap();
    assert_eq!(one, [5]);

    let mut three = [3u8, 1, 2];
    sort_any(&mut three).unwrap();
    assert_eq!(three, [1, 2, 3]);
}
