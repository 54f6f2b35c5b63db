//! Read/Write extensions for fixed-width scalars.
//!
//! Mirrors `byteorder::{ReadBytesExt, WriteBytesExt}`, except the byte order
//! is a runtime [`Endianness`] rather than a type parameter, so a record
//! layout loaded from config can drive it.  Every call moves exactly the
//! kind's width; a short read is an `UnexpectedEof` IO error.

use std::io::{Read, Write};

use crate::endian::Endianness;
use crate::scalar::{PackError, Packer};

// ── Writer ───────────────────────────────────────────────────────────────────

pub trait WriteScalarExt: Write {
    fn write_int32(&mut self, value: i32, endianness: Endianness) -> Result<(), PackError> {
        self.write_all(&Packer::standard()?.pack_int32(value, endianness))?;
        Ok(())
    }

    fn write_int64(&mut self, value: i64, endianness: Endianness) -> Result<(), PackError> {
        self.write_all(&Packer::standard()?.pack_int64(value, endianness))?;
        Ok(())
    }

    fn write_float(&mut self, value: f32, endianness: Endianness) -> Result<(), PackError> {
        self.write_all(&Packer::standard()?.pack_float(value, endianness))?;
        Ok(())
    }

    fn write_double(&mut self, value: f64, endianness: Endianness) -> Result<(), PackError> {
        self.write_all(&Packer::standard()?.pack_double(value, endianness))?;
        Ok(())
    }

    fn write_float_rat(&mut self, numerator: i64, denominator: i64, endianness: Endianness) -> Result<(), PackError> {
        self.write_all(&Packer::standard()?.pack_float_rat(numerator, denominator, endianness))?;
        Ok(())
    }

    fn write_double_rat(&mut self, numerator: i64, denominator: i64, endianness: Endianness) -> Result<(), PackError> {
        self.write_all(&Packer::standard()?.pack_double_rat(numerator, denominator, endianness))?;
        Ok(())
    }
}

impl<W: Write + ?Sized> WriteScalarExt for W {}

// ── Reader ───────────────────────────────────────────────────────────────────

pub trait ReadScalarExt: Read {
    fn read_int32(&mut self, endianness: Endianness) -> Result<i32, PackError> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Packer::standard()?.unpack_int32(&buf, endianness)
    }

    fn read_int64(&mut self, endianness: Endianness) -> Result<i64, PackError> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Packer::standard()?.unpack_int64(&buf, endianness)
    }

    fn read_float(&mut self, endianness: Endianness) -> Result<f32, PackError> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Packer::standard()?.unpack_float(&buf, endianness)
    }

    fn read_double(&mut self, endianness: Endianness) -> Result<f64, PackError> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Packer::standard()?.unpack_double(&buf, endianness)
    }
}

impl<R: Read + ?Sized> ReadScalarExt for R {}
