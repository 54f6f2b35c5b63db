use endpack::{
    detect, pack_double_rat, pack_float_rat, pack_int32, pack_int64, unpack_double,
    unpack_float, unpack_int32, unpack_int64, EndianError, Endianness, NativeCodec,
    PackConfig, PackError, Packer, StdNativeCodec,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Codec whose integer encodings are garbage; detection must refuse it.
struct BrokenCodec;

impl NativeCodec for BrokenCodec {
    fn encode_i32(&self, _: i32) -> [u8; 4] { [0x7f, 0, 0, 0] }
    fn decode_i32(&self, _: [u8; 4]) -> i32 { 0 }
    fn encode_i64(&self, _: i64) -> [u8; 8] { [0; 8] }
    fn decode_i64(&self, _: [u8; 8]) -> i64 { 0 }
    fn encode_f32(&self, _: f32) -> [u8; 4] { [0; 4] }
    fn decode_f32(&self, _: [u8; 4]) -> f32 { 0.0 }
    fn encode_f64(&self, _: f64) -> [u8; 8] { [0; 8] }
    fn decode_f64(&self, _: [u8; 8]) -> f64 { 0.0 }
    fn encode_f32_from_ratio(&self, _: i64, _: i64) -> [u8; 4] { [0; 4] }
    fn encode_f64_from_ratio(&self, _: i64, _: i64) -> [u8; 8] { [0; 8] }
}

#[test]
fn test_concrete_scenario_eleven() {
    let be = pack_int32(11, Endianness::Big).unwrap();
    let le = pack_int32(11, Endianness::Little).unwrap();
    assert_eq!(be, [0, 0, 0, 11]);
    assert_eq!(le, [11, 0, 0, 0]);
    assert_eq!(unpack_int32(&be, Endianness::Big).unwrap(), 11);
    assert_eq!(unpack_int32(&le, Endianness::Little).unwrap(), 11);
}

#[test]
fn test_native_matches_raw_codec() {
    for v in [0, 1, -1, i32::MIN, i32::MAX, 0x1234_5678] {
        assert_eq!(
            pack_int32(v, Endianness::Native).unwrap(),
            StdNativeCodec.encode_i32(v)
        );
    }
    assert_eq!(
        pack_int64(-42, Endianness::Native).unwrap(),
        StdNativeCodec.encode_i64(-42)
    );
}

#[test]
fn test_native_is_one_of_the_concrete_orders() {
    let native = detect().unwrap();
    assert_eq!(
        pack_int64(0x0102_0304_0506_0708, Endianness::Native).unwrap(),
        pack_int64(0x0102_0304_0506_0708, native).unwrap()
    );
}

#[test]
fn test_size_enforcement() {
    assert!(matches!(
        unpack_int32(&[1, 2, 3], Endianness::Big),
        Err(PackError::SizeMismatch { expected: 4, actual: 3, .. })
    ));
    assert!(matches!(
        unpack_int32(&[1, 2, 3, 4, 5], Endianness::Big),
        Err(PackError::SizeMismatch { expected: 4, actual: 5, .. })
    ));
    assert!(matches!(
        unpack_double(&[0; 7], Endianness::Big),
        Err(PackError::SizeMismatch { expected: 8, actual: 7, .. })
    ));
    assert!(matches!(
        unpack_int64(&[], Endianness::Little),
        Err(PackError::SizeMismatch { expected: 8, actual: 0, .. })
    ));
}

#[test]
fn test_rational_precision_contract() {
    let f = unpack_float(&pack_float_rat(1, 3, Endianness::Big).unwrap(), Endianness::Big).unwrap();
    assert!((f.to_bits() as i64 - 0.333_333_343_267_440_8f32.to_bits() as i64).abs() <= 1);

    let d = unpack_double(&pack_double_rat(1, 3, Endianness::Big).unwrap(), Endianness::Big).unwrap();
    assert!((d.to_bits() as i128 - 0.333_333_333_333_333_3f64.to_bits() as i128).abs() <= 1);
}

#[test]
fn test_broken_codec_fails_detection() {
    match Packer::new(BrokenCodec) {
        Err(PackError::Detection(EndianError::DetectionFailure { byte })) => assert_eq!(byte, 0x7f),
        other => panic!("expected DetectionFailure, got {:?}", other.map(|p| p.native_order())),
    }
}

#[test]
fn test_config_file_drives_endianness() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"endianness": "little"}"#).unwrap();
    let cfg = PackConfig::from_json_file(file.path()).unwrap();
    assert_eq!(pack_int32(11, cfg.endianness).unwrap(), [11, 0, 0, 0]);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        PackConfig::from_json_file(dir.path().join("absent.json")),
        Err(endpack::ConfigError::Io(_))
    ));
}
