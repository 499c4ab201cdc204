//! Instruction selection policies for the native backends.
//!
//! Normally a backend takes the cheapest instruction the build allows
//! ([`Auto`]). The other policies switch specific paths off so that every
//! implementation of a primitive can be exercised and compared on the same
//! machine.

use crate::simd::caps::{self, Builtin};

/// Compile-time switches consulted by the native backends.
pub trait Policy {
    /// When the builtin shuffle may stand in for a native permute.
    const BUILTIN: Builtin;
    /// Whether AVX-512 instructions may operate on 128 and 256-bit registers
    /// (masked moves and loads, 64-bit min/max, `permutexvar`).
    const LANE_MASKING: bool;
    /// Whether AVX-512VBMI `permutexvar_epi8` may stand in for the
    /// multi-shuffle byte permutes.
    const BYTE_PERMUTE: bool;
}

/// Best available instruction for every primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Auto;

/// Native intrinsics only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intrinsics;

/// Pre-AVX-512 sequences on 128 and 256-bit registers: two-shuffle
/// cross-lane permutes, compare-and-blend 64-bit min/max, byte-vector
/// blends, group-masked loads, and byte permutes without VBMI.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emulated;

/// Builtin shuffle ahead of every native permute.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFirst;

impl Policy for Auto {
    const BUILTIN: Builtin = caps::BUILTIN_DEFAULT;
    const LANE_MASKING: bool = true;
    const BYTE_PERMUTE: bool = true;
}

impl Policy for Intrinsics {
    const BUILTIN: Builtin = Builtin::Never;
    const LANE_MASKING: bool = true;
    const BYTE_PERMUTE: bool = true;
}

impl Policy for Emulated {
    const BUILTIN: Builtin = Builtin::Never;
    const LANE_MASKING: bool = false;
    const BYTE_PERMUTE: bool = false;
}

impl Policy for BuiltinFirst {
    const BUILTIN: Builtin = Builtin::First;
    const LANE_MASKING: bool = true;
    const BYTE_PERMUTE: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_emulated_disables_native_paths() {
        assert!(Auto::LANE_MASKING && Auto::BYTE_PERMUTE);
        assert!(Intrinsics::BYTE_PERMUTE && BuiltinFirst::BYTE_PERMUTE);
        assert!(!Emulated::LANE_MASKING && !Emulated::BYTE_PERMUTE);
        assert_eq!(Emulated::BUILTIN, Builtin::Never);
        assert_eq!(Intrinsics::BUILTIN, Builtin::Never);
    }
}
