//! Text encoding for the standard Type1 fonts.
//!
//! Fonts are declared with `/WinAnsiEncoding`, so every string drawn with `Tj` is
//! a single-byte WinAnsi (CP1252) sequence produced by lopdf's own encoding table.

use lopdf::Document;

/// Encoding name shared with the font resource dictionaries.
pub const WIN_ANSI: &str = "WinAnsiEncoding";

/// Byte written for characters the encoding cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// The one code assigned to the bullet. lopdf's table also fills the unused slots
/// with bullets and its reverse lookup returns the first of them (0x81).
const BULLET: u8 = 0x95;

/// Encodes `text` as WinAnsi bytes, replacing unsupported characters with `?`.
///
/// lopdf silently drops characters missing from its table, so each character is
/// encoded on its own and an empty result becomes the replacement byte.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut buf = [0u8; 4];
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        if c == '•' {
            out.push(BULLET);
            continue;
        }
        let encoded = Document::encode_text(Some(WIN_ANSI), c.encode_utf8(&mut buf));
        if encoded.is_empty() {
            out.push(REPLACEMENT);
        } else {
            out.extend_from_slice(&encoded);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode_win_ansi("Rust 1.75"), b"Rust 1.75".to_vec());
    }

    #[test]
    fn test_resume_punctuation_maps_to_win_ansi() {
        assert_eq!(encode_win_ansi("• – — ’"), vec![0x95, b' ', 0x96, b' ', 0x97, b' ', 0x92]);
    }

    #[test]
    fn test_latin1_is_direct() {
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
    }

    #[test]
    fn test_full_cp1252_upper_range_is_covered() {
        assert_eq!(
            encode_win_ansi("Šimon Œ ‰ †"),
            vec![138, 105, 109, 111, 110, 32, 140, 32, 137, 32, 134]
        );
        assert_eq!(encode_win_ansi("ž Ÿ ƒ"), vec![0x9E, b' ', 0x9F, b' ', 0x83]);
    }

    #[test]
    fn test_unsupported_characters_are_replaced() {
        assert_eq!(encode_win_ansi("日本"), vec![REPLACEMENT, REPLACEMENT]);
        assert_eq!(encode_win_ansi("\u{85}"), vec![REPLACEMENT]);
        assert_eq!(encode_win_ansi("a😀b"), vec![b'a', REPLACEMENT, b'b']);
    }
}
