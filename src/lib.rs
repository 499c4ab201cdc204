//! Fixed-size SIMD sorting networks for short arrays of small integers.
//!
//! A kernel is a sorting network (a fixed list of compare-exchange stages)
//! run entirely inside one vector register. Each stage is a permute, a
//! min, a max and a blend; which instruction implements each of those is
//! decided at compile time from the element type, the register width and
//! the instruction sets the crate is built for.
//!
//! ```
//! use simdnet::network::Batcher4;
//!
//! let mut data = [3u32, 1, 4, 1];
//! simdnet::sort::<Batcher4, u32>(&mut data).unwrap();
//! assert_eq!(data, [1, 1, 3, 4]);
//! ```
#![cfg_attr(rustc_channel = "nightly", feature(portable_simd))]

pub mod error;
pub mod network;
pub mod simd;
pub mod sort;
pub mod utils;

pub use error::{Result, SimdnetError};
pub use network::{Algorithm, Network, Prefix};
pub use simd::{Access, Exact, RegisterAligned, RegisterPadded, SortElement, WordPadded};
pub use sort::{
    describe, describe_with, par_sort_chunks, register_bytes, register_lanes, small_sort, sort,
    sort_any, sort_block, sort_padded, sort_raw, sort_raw_on, sort_raw_with, KernelInfo,
    NetworkSort,
};
pub use utils::Block;
