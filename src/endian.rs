//! Byte-order model and native byte-order detection.
//!
//! [`Endianness::Native`] is a "do not reorder" tag, not a third order.  The
//! detector only ever reports [`Endianness::Little`] or [`Endianness::Big`].

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::native::{NativeCodec, StdNativeCodec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Whatever the host codec produces; never reordered.
    #[serde(alias = "ne")]
    Native,
    /// Least-significant byte first.
    #[serde(alias = "le")]
    Little,
    /// Most-significant byte first (network byte order).
    #[default]
    #[serde(alias = "be", alias = "network")]
    Big,
}

impl Endianness {
    pub fn name(self) -> &'static str {
        match self {
            Endianness::Native => "native",
            Endianness::Little => "little",
            Endianness::Big    => "big",
        }
    }

    /// Parse from a CLI string.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "native" | "ne"             => Some(Endianness::Native),
            "little" | "le"             => Some(Endianness::Little),
            "big" | "be" | "network"    => Some(Endianness::Big),
            _                           => None,
        }
    }

    /// Resolve `Native` to the concrete order `native`; concrete orders are
    /// returned unchanged.
    #[inline]
    pub fn resolve(self, native: Endianness) -> Endianness {
        match self {
            Endianness::Native => native,
            concrete           => concrete,
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endianness {
    type Err = EndianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endianness::from_name(s).ok_or_else(|| EndianError::UnknownName(s.to_string()))
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndianError {
    /// The codec's encoding of 1 starts with neither 0 nor 1.  The codec
    /// itself is broken; nothing built on it can be trusted.
    #[error("native byte-order detection failed: encoding of 1 starts with byte {byte:#04x}")]
    DetectionFailure { byte: u8 },
    #[error("unknown endianness '{0}' (expected native, little or big)")]
    UnknownName(String),
}

// ── Detection ────────────────────────────────────────────────────────────────

static NATIVE_ORDER: OnceLock<Endianness> = OnceLock::new();

/// Detect the byte order `codec` produces by encoding the i32 value 1 and
/// inspecting its first byte.  Not cached.
pub fn detect_with<C: NativeCodec + ?Sized>(codec: &C) -> Result<Endianness, EndianError> {
    let probe = codec.encode_i32(1);
    match probe[0] {
        0    => Ok(Endianness::Big),
        1    => Ok(Endianness::Little),
        byte => Err(EndianError::DetectionFailure { byte }),
    }
}

/// Native byte order of the host, detected once through [`StdNativeCodec`]
/// and cached for the process.
///
/// Racing first callers may each run the probe; it is pure, so whichever
/// value lands in the cell is identical.
pub fn detect() -> Result<Endianness, EndianError> {
    if let Some(order) = NATIVE_ORDER.get() {
        return Ok(*order);
    }
    let order = detect_with(&StdNativeCodec)?;
    tracing::debug!(order = %order, "detected native byte order");
    Ok(*NATIVE_ORDER.get_or_init(|| order))
}
