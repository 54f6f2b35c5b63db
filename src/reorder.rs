//! Byte reordering between native order and a caller-requested order.
//!
//! Reordering is always identity or a full reversal of the fixed-width
//! array.  There is no partial (word-swapped, "middle-endian") layout.

use crate::endian::Endianness;

/// True when bytes laid out in `native` must be reversed to honour
/// `endianness`.  `Native` never reverses.
#[inline]
pub fn needs_reversal(endianness: Endianness, native: Endianness) -> bool {
    endianness != Endianness::Native && endianness != native
}

/// Native-order bytes → bytes in `endianness` order.
#[inline]
pub fn to_output_order<const N: usize>(
    native_bytes: [u8; N],
    endianness:   Endianness,
    native:       Endianness,
) -> [u8; N] {
    let mut out = native_bytes;
    if needs_reversal(endianness, native) {
        out.reverse();
    }
    out
}

/// Bytes in `endianness` order → native-order bytes.  Input byte `k` lands at
/// `N - 1 - k` when the orders differ.
#[inline]
pub fn from_input_order<const N: usize>(
    buf:        &[u8; N],
    endianness: Endianness,
    native:     Endianness,
) -> [u8; N] {
    let mut out = [0u8; N];
    if needs_reversal(endianness, native) {
        for (k, byte) in buf.iter().enumerate() {
            out[N - 1 - k] = *byte;
        }
    } else {
        out.copy_from_slice(buf);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::Endianness::{Big, Little, Native};

    const BYTES: [u8; 4] = [1, 2, 3, 4];

    #[test]
    fn native_tag_is_identity_on_any_host() {
        assert_eq!(to_output_order(BYTES, Native, Little), BYTES);
        assert_eq!(to_output_order(BYTES, Native, Big), BYTES);
        assert_eq!(from_input_order(&BYTES, Native, Big), BYTES);
    }

    #[test]
    fn matching_order_is_identity() {
        assert_eq!(to_output_order(BYTES, Little, Little), BYTES);
        assert_eq!(from_input_order(&BYTES, Big, Big), BYTES);
    }

    #[test]
    fn foreign_order_reverses() {
        assert_eq!(to_output_order(BYTES, Big, Little), [4, 3, 2, 1]);
        assert_eq!(from_input_order(&BYTES, Little, Big), [4, 3, 2, 1]);
        let eight = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(to_output_order(eight, Little, Big), [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn input_undoes_output() {
        for native in [Little, Big] {
            for e in [Native, Little, Big] {
                let wire = to_output_order(BYTES, e, native);
                assert_eq!(from_input_order(&wire, e, native), BYTES);
            }
        }
    }

    #[test]
    fn needs_reversal_table() {
        assert!(!needs_reversal(Native, Little));
        assert!(!needs_reversal(Native, Big));
        assert!(!needs_reversal(Little, Little));
        assert!(needs_reversal(Big, Little));
        assert!(needs_reversal(Little, Big));
    }
}
