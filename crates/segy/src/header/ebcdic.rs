//! EBCDIC (code page 037) to ASCII for textual headers
//!
//! Only the printable characters that appear in card-image headers are
//! mapped. Anything else becomes a space.

/// Map a single EBCDIC byte to an ASCII character
pub(crate) fn to_ascii(byte: u8) -> char {
    match byte {
        0x40 => ' ',
        0x4b => '.',
        0x4c => '<',
        0x4d => '(',
        0x4e => '+',
        0x4f => '|',
        0x50 => '&',
        0x5a => '!',
        0x5b => '$',
        0x5c => '*',
        0x5d => ')',
        0x5e => ';',
        0x60 => '-',
        0x61 => '/',
        0x6b => ',',
        0x6c => '%',
        0x6d => '_',
        0x6e => '>',
        0x6f => '?',
        0x7a => ':',
        0x7b => '#',
        0x7c => '@',
        0x7d => '\'',
        0x7e => '=',
        0x7f => '"',
        0x81..=0x89 => char::from(b'a' + (byte - 0x81)),
        0x91..=0x99 => char::from(b'j' + (byte - 0x91)),
        0xa2..=0xa9 => char::from(b's' + (byte - 0xa2)),
        0xc1..=0xc9 => char::from(b'A' + (byte - 0xc1)),
        0xd1..=0xd9 => char::from(b'J' + (byte - 0xd1)),
        0xe2..=0xe9 => char::from(b'S' + (byte - 0xe2)),
        0xf0..=0xf9 => char::from(b'0' + (byte - 0xf0)),
        _ => ' ',
    }
}

/// Guess whether a textual header is EBCDIC rather than ASCII
///
/// Card images start with `C` (0xC3 in EBCDIC). Failing that, EBCDIC text is
/// dominated by bytes above 0x7F where ASCII has none.
pub(crate) fn is_ebcdic(bytes: &[u8]) -> bool {
    if bytes.first() == Some(&0xc3) {
        return true;
    }

    let high = bytes.iter().filter(|b| **b > 0x7f).count();
    let ascii = bytes
        .iter()
        .filter(|b| b.is_ascii_alphanumeric())
        .count();

    high > ascii
}
