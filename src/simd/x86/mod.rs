//! Native x86 backends.
//!
//! Each register class is only compiled when the build enables the
//! extensions it needs (the `sse`, `avx2` and `avx512` cfgs set by the
//! build script). Optional extensions within a class are picked up through
//! the constants in [`caps`](crate::simd::caps).

#[cfg(sse)]
mod imm;

#[cfg(all(sse, rustc_channel = "nightly"))]
mod builtin;

#[cfg(sse)]
mod m128;

#[cfg(avx2)]
mod m256;

#[cfg(avx512)]
mod m512;

#[cfg(sse)]
pub use m128::M128;

#[cfg(avx2)]
pub use m256::M256;

#[cfg(avx512)]
pub use m512::M512;
