//! Memory access modes for loading and storing a kernel's buffer.
//!
//! A network of `N` elements rarely fills its register exactly. The mode
//! decides how much memory around the `N` elements a kernel may touch:
//!
//! - [`Exact`] touches only the `N` elements.
//! - [`WordPadded`] may read up to the next multiple of 4 bytes.
//! - [`RegisterPadded`] reads and rewrites the whole register; bytes past
//!   `N` are written back unchanged.
//! - [`RegisterAligned`] is `RegisterPadded` with aligned instructions.
//!
//! The padded modes trade the caller's guarantee of valid memory for fewer
//! instructions. Violating that guarantee is undefined behavior.

/// Identifies an access mode at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Exact,
    WordPadded,
    RegisterPadded,
    RegisterAligned,
}

impl AccessMode {
    /// Whether loads and stores cover the whole register.
    pub const fn is_full(self) -> bool {
        matches!(self, AccessMode::RegisterPadded | AccessMode::RegisterAligned)
    }
}

/// Marker trait implemented by the access mode types.
pub trait Access {
    const MODE: AccessMode;
}

/// Never touches memory outside the sorted elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

/// Reads may run up to the next 4-byte boundary past the last element.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordPadded;

/// Reads and writes a whole register starting at the buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterPadded;

/// As [`RegisterPadded`], for buffers aligned to the register size.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterAligned;

impl Access for Exact {
    const MODE: AccessMode = AccessMode::Exact;
}

impl Access for WordPadded {
    const MODE: AccessMode = AccessMode::WordPadded;
}

impl Access for RegisterPadded {
    const MODE: AccessMode = AccessMode::RegisterPadded;
}

impl Access for RegisterAligned {
    const MODE: AccessMode = AccessMode::RegisterAligned;
}
