//! Native numeric codec: the bit-level layer beneath the byte-order engine.
//!
//! # Contract
//! A [`NativeCodec`] turns a scalar into exactly 4 or 8 bytes laid out in the
//! running machine's native order, and back.  It never reorders; that is the
//! job of [`crate::reorder`].  The packer consumes it as an opaque capability,
//! so tests and exotic hosts can substitute their own implementation.
//!
//! # Rational rounding
//! `encode_f32_from_ratio` / `encode_f64_from_ratio` convert an exact
//! `numerator / denominator` straight to the target width, rounding to the
//! nearest representable value with ties going to the even mantissa.  The f32
//! path does NOT go through f64 first (no double rounding).  Precision loss is
//! never reported.
//!
//! # Zero denominator
//! [`StdNativeCodec`] follows IEEE-754 division: `n/0` is `+inf` for `n > 0`,
//! `-inf` for `n < 0`, and `NaN` for `0/0`.  Other implementations must
//! document their own behaviour.

use byteorder::{ByteOrder, NativeEndian};
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use malachite::Rational;

// ── Codec trait ──────────────────────────────────────────────────────────────

pub trait NativeCodec: Send + Sync {
    fn encode_i32(&self, value: i32) -> [u8; 4];
    fn decode_i32(&self, bytes: [u8; 4]) -> i32;
    fn encode_i64(&self, value: i64) -> [u8; 8];
    fn decode_i64(&self, bytes: [u8; 8]) -> i64;
    fn encode_f32(&self, value: f32) -> [u8; 4];
    fn decode_f32(&self, bytes: [u8; 4]) -> f32;
    fn encode_f64(&self, value: f64) -> [u8; 8];
    fn decode_f64(&self, bytes: [u8; 8]) -> f64;
    /// Round `numerator / denominator` to the nearest f32 (ties to even).
    fn encode_f32_from_ratio(&self, numerator: i64, denominator: i64) -> [u8; 4];
    /// Round `numerator / denominator` to the nearest f64 (ties to even).
    fn encode_f64_from_ratio(&self, numerator: i64, denominator: i64) -> [u8; 8];
}

// ── Standard implementation ──────────────────────────────────────────────────

/// Host codec: `byteorder::NativeEndian` for the bit layout, `malachite`
/// exact rationals for the rounding step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdNativeCodec;

impl NativeCodec for StdNativeCodec {
    #[inline]
    fn encode_i32(&self, value: i32) -> [u8; 4] {
        let mut buf = [0u8; 4];
        NativeEndian::write_i32(&mut buf, value);
        buf
    }
    #[inline]
    fn decode_i32(&self, bytes: [u8; 4]) -> i32 { NativeEndian::read_i32(&bytes) }

    #[inline]
    fn encode_i64(&self, value: i64) -> [u8; 8] {
        let mut buf = [0u8; 8];
        NativeEndian::write_i64(&mut buf, value);
        buf
    }
    #[inline]
    fn decode_i64(&self, bytes: [u8; 8]) -> i64 { NativeEndian::read_i64(&bytes) }

    #[inline]
    fn encode_f32(&self, value: f32) -> [u8; 4] {
        let mut buf = [0u8; 4];
        NativeEndian::write_f32(&mut buf, value);
        buf
    }
    #[inline]
    fn decode_f32(&self, bytes: [u8; 4]) -> f32 { NativeEndian::read_f32(&bytes) }

    #[inline]
    fn encode_f64(&self, value: f64) -> [u8; 8] {
        let mut buf = [0u8; 8];
        NativeEndian::write_f64(&mut buf, value);
        buf
    }
    #[inline]
    fn decode_f64(&self, bytes: [u8; 8]) -> f64 { NativeEndian::read_f64(&bytes) }

    fn encode_f32_from_ratio(&self, numerator: i64, denominator: i64) -> [u8; 4] {
        let value = match exact_ratio(numerator, denominator) {
            Some(r) => f32::rounding_from(&r, RoundingMode::Nearest).0,
            None    => numerator as f32 / 0.0,
        };
        self.encode_f32(value)
    }

    fn encode_f64_from_ratio(&self, numerator: i64, denominator: i64) -> [u8; 8] {
        let value = match exact_ratio(numerator, denominator) {
            Some(r) => f64::rounding_from(&r, RoundingMode::Nearest).0,
            None    => numerator as f64 / 0.0,
        };
        self.encode_f64(value)
    }
}

/// `None` when the denominator is zero.
fn exact_ratio(numerator: i64, denominator: i64) -> Option<Rational> {
    if denominator == 0 {
        return None;
    }
    Some(Rational::from(numerator) / Rational::from(denominator))
}
