//! Packed binary-coded-decimal codec used by the DS1307 registers.

/// Decode a packed BCD byte: high nibble is the tens digit, low nibble the
/// ones digit.
///
/// Nibbles above 9 are not rejected; `0xFF` decodes to 165.  Callers that
/// care about calendar ranges validate the result.
pub const fn decode(byte: u8) -> u8 {
    (byte >> 4) * 10 + (byte & 0x0F)
}

/// Encode `value` (0–99) as packed BCD.  Returns `None` above 99.
pub const fn encode(value: u8) -> Option<u8> {
    if value > 99 {
        return None;
    }
    Some(((value / 10) << 4) | (value % 10))
}
