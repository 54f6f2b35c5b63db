pub mod native;
pub mod endian;
pub mod reorder;
pub mod scalar;
pub mod rational;
pub mod io_stream;
pub mod config;

pub use endian::{Endianness, EndianError, detect, detect_with};
pub use native::{NativeCodec, StdNativeCodec};
pub use scalar::{
    PackError, Packer, ScalarKind,
    pack_int32, unpack_int32, pack_int64, unpack_int64,
    pack_float, unpack_float, pack_double, unpack_double,
};
pub use rational::{Rational, pack_float_rat, pack_double_rat};
pub use io_stream::{ReadScalarExt, WriteScalarExt};
pub use config::{PackConfig, ConfigError};
