//! Scalar codec facade: typed pack/unpack with caller-chosen byte order.
//!
//! # Pipeline
//! pack:   value → [`NativeCodec`] (native-order bytes) → [`to_output_order`]
//! unpack: buffer → width check → [`from_input_order`] → [`NativeCodec`]
//!
//! # Widths
//! | Kind     | Rust type | Width |
//! |----------|-----------|-------|
//! | `Int32`  | `i32`     | 4     |
//! | `Int64`  | `i64`     | 8     |
//! | `Float`  | `f32`     | 4     |
//! | `Double` | `f64`     | 8     |
//!
//! Unpacking a buffer of any other length fails with
//! [`PackError::SizeMismatch`]; nothing is partially decoded.
//!
//! # Default order
//! Big-endian (network order) via `Endianness::default()`.  Integer range is
//! enforced by the Rust types themselves.

use std::fmt;
use std::io;
use thiserror::Error;

use crate::endian::{detect, detect_with, EndianError, Endianness};
use crate::native::{NativeCodec, StdNativeCodec};
use crate::reorder::{from_input_order, to_output_order};

// ── Kinds ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int32,
    Int64,
    Float,
    Double,
}

impl ScalarKind {
    /// Fixed encoded width in bytes.
    #[inline]
    pub fn width(self) -> usize {
        match self {
            ScalarKind::Int32 | ScalarKind::Float  => 4,
            ScalarKind::Int64 | ScalarKind::Double => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Int32  => "int32",
            ScalarKind::Int64  => "int64",
            ScalarKind::Float  => "float",
            ScalarKind::Double => "double",
        }
    }

    /// Parse from a CLI string.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "int32" | "i32"           => Some(ScalarKind::Int32),
            "int64" | "i64"           => Some(ScalarKind::Int64),
            "float" | "f32"           => Some(ScalarKind::Float),
            "double" | "f64"          => Some(ScalarKind::Double),
            _                         => None,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum PackError {
    #[error("{kind} needs exactly {expected} bytes, got {actual}")]
    SizeMismatch { kind: ScalarKind, expected: usize, actual: usize },
    #[error(transparent)]
    Detection(#[from] EndianError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn fixed<const N: usize>(buf: &[u8], kind: ScalarKind) -> Result<[u8; N], PackError> {
    <[u8; N]>::try_from(buf).map_err(|_| PackError::SizeMismatch {
        kind,
        expected: N,
        actual:   buf.len(),
    })
}

// ── Packer ───────────────────────────────────────────────────────────────────

/// A native codec paired with the byte order it was detected to produce.
#[derive(Debug, Clone, Copy)]
pub struct Packer<C: NativeCodec = StdNativeCodec> {
    pub(crate) codec:  C,
    pub(crate) native: Endianness,
}

impl Packer<StdNativeCodec> {
    /// Host codec with the process-cached native order.
    pub fn standard() -> Result<Self, PackError> {
        Ok(Self { codec: StdNativeCodec, native: detect()? })
    }
}

impl<C: NativeCodec> Packer<C> {
    /// Wrap `codec`, probing its native order.  Fails if the probe yields a
    /// pattern that is neither big- nor little-endian.
    pub fn new(codec: C) -> Result<Self, PackError> {
        let native = detect_with(&codec)?;
        Ok(Self { codec, native })
    }

    pub fn native_order(&self) -> Endianness { self.native }

    pub fn codec(&self) -> &C { &self.codec }

    #[inline]
    pub(crate) fn emit<const N: usize>(&self, native_bytes: [u8; N], endianness: Endianness) -> [u8; N] {
        to_output_order(native_bytes, endianness, self.native)
    }

    #[inline]
    fn absorb<const N: usize>(
        &self,
        buf:        &[u8],
        kind:       ScalarKind,
        endianness: Endianness,
    ) -> Result<[u8; N], PackError> {
        let wire = fixed::<N>(buf, kind)?;
        Ok(from_input_order(&wire, endianness, self.native))
    }

    pub fn pack_int32(&self, value: i32, endianness: Endianness) -> [u8; 4] {
        self.emit(self.codec.encode_i32(value), endianness)
    }

    pub fn unpack_int32(&self, buf: &[u8], endianness: Endianness) -> Result<i32, PackError> {
        let native = self.absorb::<4>(buf, ScalarKind::Int32, endianness)?;
        Ok(self.codec.decode_i32(native))
    }

    pub fn pack_int64(&self, value: i64, endianness: Endianness) -> [u8; 8] {
        self.emit(self.codec.encode_i64(value), endianness)
    }

    pub fn unpack_int64(&self, buf: &[u8], endianness: Endianness) -> Result<i64, PackError> {
        let native = self.absorb::<8>(buf, ScalarKind::Int64, endianness)?;
        Ok(self.codec.decode_i64(native))
    }

    pub fn pack_float(&self, value: f32, endianness: Endianness) -> [u8; 4] {
        self.emit(self.codec.encode_f32(value), endianness)
    }

    pub fn unpack_float(&self, buf: &[u8], endianness: Endianness) -> Result<f32, PackError> {
        let native = self.absorb::<4>(buf, ScalarKind::Float, endianness)?;
        Ok(self.codec.decode_f32(native))
    }

    pub fn pack_double(&self, value: f64, endianness: Endianness) -> [u8; 8] {
        self.emit(self.codec.encode_f64(value), endianness)
    }

    pub fn unpack_double(&self, buf: &[u8], endianness: Endianness) -> Result<f64, PackError> {
        let native = self.absorb::<8>(buf, ScalarKind::Double, endianness)?;
        Ok(self.codec.decode_f64(native))
    }
}

// ── Free functions over the host codec ───────────────────────────────────────

pub fn pack_int32(value: i32, endianness: Endianness) -> Result<[u8; 4], PackError> {
    Ok(Packer::standard()?.pack_int32(value, endianness))
}

pub fn unpack_int32(buf: &[u8], endianness: Endianness) -> Result<i32, PackError> {
    Packer::standard()?.unpack_int32(buf, endianness)
}

pub fn pack_int64(value: i64, endianness: Endianness) -> Result<[u8; 8], PackError> {
    Ok(Packer::standard()?.pack_int64(value, endianness))
}

pub fn unpack_int64(buf: &[u8], endianness: Endianness) -> Result<i64, PackError> {
    Packer::standard()?.unpack_int64(buf, endianness)
}

pub fn pack_float(value: f32, endianness: Endianness) -> Result<[u8; 4], PackError> {
    Ok(Packer::standard()?.pack_float(value, endianness))
}

pub fn unpack_float(buf: &[u8], endianness: Endianness) -> Result<f32, PackError> {
    Packer::standard()?.unpack_float(buf, endianness)
}

pub fn pack_double(value: f64, endianness: Endianness) -> Result<[u8; 8], PackError> {
    Ok(Packer::standard()?.pack_double(value, endianness))
}

pub fn unpack_double(buf: &[u8], endianness: Endianness) -> Result<f64, PackError> {
    Packer::standard()?.unpack_double(buf, endianness)
}
