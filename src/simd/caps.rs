//! Instruction-set capabilities the crate is compiled for.
//!
//! Every flag is a compile-time constant taken from the target features
//! rustc builds with. Code paths that need an extension branch on these
//! constants, so the unused branches vanish and no CPU check happens at
//! runtime. [`Capabilities::host`] exists only to report extensions the
//! build leaves on the table.

use std::fmt;

pub const SSE2: bool = cfg!(target_feature = "sse2");
pub const SSE3: bool = cfg!(target_feature = "sse3");
pub const SSSE3: bool = cfg!(target_feature = "ssse3");
pub const SSE41: bool = cfg!(target_feature = "sse4.1");
pub const SSE42: bool = cfg!(target_feature = "sse4.2");
pub const AVX: bool = cfg!(target_feature = "avx");
pub const AVX2: bool = cfg!(target_feature = "avx2");
pub const AVX512F: bool = cfg!(target_feature = "avx512f");
pub const AVX512VL: bool = cfg!(target_feature = "avx512vl");
pub const AVX512BW: bool = cfg!(target_feature = "avx512bw");
pub const AVX512VBMI: bool = cfg!(target_feature = "avx512vbmi");

/// `core::simd` swizzles are available (nightly toolchains).
pub const BUILTIN_SHUFFLE: bool = cfg!(rustc_channel = "nightly");

/// Coarse instruction-set tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Sse4,
    Avx2,
    Avx512,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Sse4 => "SSE4",
            Tier::Avx2 => "AVX2",
            Tier::Avx512 => "AVX512",
        };
        f.write_str(name)
    }
}

/// Any AVX-512 extension promotes the build to the AVX-512 tier.
pub const TIER: Tier = if AVX512F || AVX512VL || AVX512BW || AVX512VBMI {
    Tier::Avx512
} else if AVX2 {
    Tier::Avx2
} else {
    Tier::Sse4
};

/// When a permute may use the builtin shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Before any native instruction.
    First,
    /// Only where the alternative is a multi-instruction emulation.
    Fallback,
    /// Never.
    Never,
}

/// Default builtin policy; the `builtin-first` feature flips it.
pub const BUILTIN_DEFAULT: Builtin = if cfg!(feature = "builtin-first") {
    Builtin::First
} else {
    Builtin::Fallback
};

/// A snapshot of every capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub sse2: bool,
    pub sse3: bool,
    pub ssse3: bool,
    pub sse41: bool,
    pub sse42: bool,
    pub avx: bool,
    pub avx2: bool,
    pub avx512f: bool,
    pub avx512vl: bool,
    pub avx512bw: bool,
    pub avx512vbmi: bool,
}

impl Capabilities {
    /// What this build was compiled for.
    pub const fn compiled() -> Self {
        Capabilities {
            sse2: SSE2,
            sse3: SSE3,
            ssse3: SSSE3,
            sse41: SSE41,
            sse42: SSE42,
            avx: AVX,
            avx2: AVX2,
            avx512f: AVX512F,
            avx512vl: AVX512VL,
            avx512bw: AVX512BW,
            avx512vbmi: AVX512VBMI,
        }
    }

    /// What the running CPU supports.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub fn host() -> Self {
        Capabilities {
            sse2: is_x86_feature_detected!("sse2"),
            sse3: is_x86_feature_detected!("sse3"),
            ssse3: is_x86_feature_detected!("ssse3"),
            sse41: is_x86_feature_detected!("sse4.1"),
            sse42: is_x86_feature_detected!("sse4.2"),
            avx: is_x86_feature_detected!("avx"),
            avx2: is_x86_feature_detected!("avx2"),
            avx512f: is_x86_feature_detected!("avx512f"),
            avx512vl: is_x86_feature_detected!("avx512vl"),
            avx512bw: is_x86_feature_detected!("avx512bw"),
            avx512vbmi: is_x86_feature_detected!("avx512vbmi"),
        }
    }

    /// What the running CPU supports.
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    pub fn host() -> Self {
        Capabilities::default()
    }

    fn flags(&self) -> [(&'static str, bool); 11] {
        [
            ("SSE2", self.sse2),
            ("SSE3", self.sse3),
            ("SSSE3", self.ssse3),
            ("SSE4.1", self.sse41),
            ("SSE4.2", self.sse42),
            ("AVX", self.avx),
            ("AVX2", self.avx2),
            ("AVX512F", self.avx512f),
            ("AVX512VL", self.avx512vl),
            ("AVX512BW", self.avx512bw),
            ("AVX512VBMI", self.avx512vbmi),
        ]
    }

    /// Names of the extensions set in `self` but not in `other`.
    pub fn missing_from(&self, other: &Capabilities) -> Vec<&'static str> {
        self.flags()
            .iter()
            .zip(other.flags().iter())
            .filter(|((_, mine), (_, theirs))| *mine && !*theirs)
            .map(|((name, _), _)| *name)
            .collect()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .flags()
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(name, _)| *name)
            .collect();

        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(", "))
        }
    }
}

/// Logs the compiled capabilities and warns about unused host extensions.
///
/// Returns the extensions the host has but the build does not use.
pub fn report() -> Vec<&'static str> {
    let compiled = Capabilities::compiled();
    let host = Capabilities::host();

    log::debug!("compiled instruction sets: {compiled}");
    log::debug!(
        "tier: {TIER}, builtin shuffle: {BUILTIN_SHUFFLE}, builtin policy: {BUILTIN_DEFAULT:?}"
    );

    let unused = host.missing_from(&compiled);
    if !unused.is_empty() {
        log::warn!(
            "host supports {} but this build does not use them",
            unused.join(", ")
        );
    }
    unused
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_follows_flags() {
        if AVX512F {
            assert_eq!(TIER, Tier::Avx512);
        } else if AVX2 {
            assert_eq!(TIER, Tier::Avx2);
        }
        assert!(Tier::Avx512 > Tier::Avx2 && Tier::Avx2 > Tier::Sse4);
    }

    #[test]
    fn test_missing_from() {
        let mut host = Capabilities::default();
        host.avx2 = true;
        host.avx512bw = true;

        let mut compiled = Capabilities::default();
        compiled.avx2 = true;

        assert_eq!(host.missing_from(&compiled), vec!["AVX512BW"]);
        assert!(compiled.missing_from(&host).is_empty());
    }

    #[test]
    fn test_display_lists_enabled_sets() {
        let mut caps = Capabilities::default();
        assert_eq!(caps.to_string(), "none");

        caps.sse42 = true;
        caps.avx2 = true;
        assert_eq!(caps.to_string(), "SSE4.2, AVX2");
    }

    #[test]
    fn test_compiled_never_exceeds_host() {
        // the test binary runs on the machine it targets
        let unused_by_host = Capabilities::compiled().missing_from(&Capabilities::host());
        if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
            assert!(unused_by_host.is_empty(), "{unused_by_host:?}");
        }
    }
}
