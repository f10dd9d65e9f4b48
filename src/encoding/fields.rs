//! Field writers shared by all record layouts

use bytes::BufMut;

/// Write `value` as packed decimal (BCD) into exactly `width` bytes.
///
/// The decimal digits are left-padded with zeros to `2 * width` digits. Values
/// with more digits keep only the least significant `2 * width` of them, so
/// encoding `v` equals encoding `v % 10^(2 * width)`. Digits are packed two per
/// byte, high nibble first, most significant byte first.
///
/// ```
/// use scale_config::encoding::put_packed_decimal;
///
/// let mut buf = Vec::new();
/// put_packed_decimal(&mut buf, 123, 2);
/// assert_eq!(buf, [0x01, 0x23]);
/// ```
pub fn put_packed_decimal<B: BufMut>(buf: &mut B, value: u64, width: usize) {
    let digit_count = width * 2;
    let digits = format!("{value:0>digit_count$}");
    let digits = &digits.as_bytes()[digits.len() - digit_count..];

    for pair in digits.chunks_exact(2) {
        buf.put_u8(((pair[0] - b'0') << 4) | (pair[1] - b'0'));
    }
}

/// Write `value` into a zero-filled field of exactly `len` bytes.
///
/// The first `len` characters are copied one byte each; anything past `len` is
/// dropped and unused bytes stay `0x00`. Characters outside 7-bit ASCII are
/// written as `?`.
pub fn put_fixed_ascii<B: BufMut>(buf: &mut B, value: &str, len: usize) {
    let mut written = 0;
    for ch in value.chars().take(len) {
        buf.put_u8(if ch.is_ascii() { ch as u8 } else { b'?' });
        written += 1;
    }
    buf.put_bytes(0, len - written);
}
