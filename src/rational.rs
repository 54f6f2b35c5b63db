//! Exact rational → fixed-width float packing.
//!
//! The conversion is lossy by nature.  The native codec rounds to the nearest
//! representable value (ties to even) and no error is raised for lost
//! precision.  A zero denominator is a caller precondition; see
//! [`crate::native`] for what the host codec does with it.

use std::fmt;

use crate::endian::Endianness;
use crate::native::NativeCodec;
use crate::scalar::{PackError, Packer};

/// `numerator / denominator`, not necessarily in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator:   i64,
    pub denominator: i64,
}

impl Rational {
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self { numerator, denominator }
    }

    pub fn pack_float(self, endianness: Endianness) -> Result<[u8; 4], PackError> {
        pack_float_rat(self.numerator, self.denominator, endianness)
    }

    pub fn pack_double(self, endianness: Endianness) -> Result<[u8; 8], PackError> {
        pack_double_rat(self.numerator, self.denominator, endianness)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::new(value, 1)
    }
}

impl From<(i64, i64)> for Rational {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<C: NativeCodec> Packer<C> {
    pub fn pack_float_rat(&self, numerator: i64, denominator: i64, endianness: Endianness) -> [u8; 4] {
        self.emit(self.codec.encode_f32_from_ratio(numerator, denominator), endianness)
    }

    pub fn pack_double_rat(&self, numerator: i64, denominator: i64, endianness: Endianness) -> [u8; 8] {
        self.emit(self.codec.encode_f64_from_ratio(numerator, denominator), endianness)
    }
}

pub fn pack_float_rat(numerator: i64, denominator: i64, endianness: Endianness) -> Result<[u8; 4], PackError> {
    Ok(Packer::standard()?.pack_float_rat(numerator, denominator, endianness))
}

pub fn pack_double_rat(numerator: i64, denominator: i64, endianness: Endianness) -> Result<[u8; 8], PackError> {
    Ok(Packer::standard()?.pack_double_rat(numerator, denominator, endianness))
}
