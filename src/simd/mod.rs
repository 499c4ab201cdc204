//! Vector primitives the sorting kernels are built from.
//!
//! A [`Backend`] is one register class (`__m128i`, `__m256i`, `__m512i`, or
//! the lane-by-lane [`Portable`] emulation) with load, store, min, max,
//! blend and permute over every integer element type. [`Xmm`], [`Ymm`] and
//! [`Zmm`] name the best backend of each width the build supports; widths
//! the instruction set lacks resolve to [`Portable`].

pub mod access;
pub mod caps;
pub mod policy;
pub mod portable;
pub mod support;
pub mod traits;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x86;

pub use access::{Access, AccessMode, Exact, RegisterAligned, RegisterPadded, WordPadded};
pub use policy::{Auto, BuiltinFirst, Emulated, Intrinsics, Policy};
pub use portable::Portable;
pub use support::Lanes;
pub use traits::{Backend, Count, Extent, LaneSelect, LowLanes, Mask, Permutation, SortElement};

/// 128-bit backend.
#[cfg(sse)]
pub type Xmm = x86::M128;
/// 128-bit backend.
#[cfg(not(sse))]
pub type Xmm = Portable<16>;

/// 256-bit backend.
#[cfg(avx2)]
pub type Ymm = x86::M256;
/// 256-bit backend.
#[cfg(not(avx2))]
pub type Ymm = Portable<32>;

/// 512-bit backend.
#[cfg(avx512)]
pub type Zmm = x86::M512;
/// 512-bit backend.
#[cfg(not(avx512))]
pub type Zmm = Portable<64>;
