use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdnet::network::{Batcher4, Minimum16, Oddeven61};
use simdnet::{par_sort_chunks, NetworkSort, SimdnetError};

#[test]
fn test_par_sort_chunks_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut data: Vec<u32> = (0..16 * 10_000).map(|_| rng.random()).collect();
    let mut expected = data.clone();
    for chunk in expected.chunks_exact_mut(16) {
        chunk.sort_unstable();
    }

    par_sort_chunks::<Minimum16, u32>(&mut data).unwrap();
    assert_eq!(data, expected);
}

#[test]
fn test_par_network_sort_on_slices() {
    let mut rng = StdRng::seed_from_u64(61);
    let mut data: Vec<i8> = (0..61 * 1_000).map(|_| rng.random()).collect();
    let mut expected = data.clone();
    for chunk in expected.chunks_exact_mut(61) {
        chunk.sort_unstable();
    }

    data.par_network_sort::<Oddeven61>().unwrap();
    assert_eq!(data, expected);
}

#[test]
fn test_network_sort_method() {
    let mut data = vec![4u64, 3, 2, 1];
    data.network_sort::<Batcher4>().unwrap();
    assert_eq!(data, [1, 2, 3, 4]);

    let mut wrong = vec![1u64, 2, 3];
    assert_eq!(
        wrong.network_sort::<Batcher4>(),
        Err(SimdnetError::LengthMismatch {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn test_par_sort_chunks_rejects_partial_chunks() {
    let mut data = vec![0i32; 33];
    assert!(matches!(
        par_sort_chunks::<Minimum16, i32>(&mut data),
        Err(SimdnetError::ValidationError { .. })
    ));

    let mut empty: Vec<i32> = Vec::new();
    par_sort_chunks::<Minimum16, i32>(&mut empty).unwrap();
}
