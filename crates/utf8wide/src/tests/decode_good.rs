use alloc::{vec, vec::Vec};

use crate::{decode, decode_into};

#[test]
fn ascii_passthrough() {
    assert_eq!(decode(b"Hello"), Ok(vec![72, 101, 108, 108, 111]));
}

#[test]
fn known_cjk_fixture() {
    // U+4F60 '你'
    assert_eq!(decode(&[0xE4, 0xBD, 0xA0]), Ok(vec![0x4F60]));
}

#[test]
fn four_byte_form() {
    // U+1F600 '😀'
    assert_eq!(decode(&[0xF0, 0x9F, 0x98, 0x80]), Ok(vec![0x1F600]));
}

#[test]
fn mixed_widths_in_one_buffer() {
    let bytes = "a€😀".as_bytes();
    assert_eq!(decode(bytes), Ok(vec![0x61, 0x20AC, 0x1F600]));
}

#[test]
fn matches_std_char_decomposition() {
    let text = "Grüße, 世界! 🦀";
    let expected: Vec<u32> = text.chars().map(u32::from).collect();
    assert_eq!(decode(text.as_bytes()), Ok(expected));
}

#[test]
fn bare_continuation_byte_is_raw() {
    // A byte in 0x80..0xC0 with no lead in front decodes as itself.
    assert_eq!(decode(&[0x80]), Ok(vec![0x80]));
    assert_eq!(decode(&[0xBF, 0x41]), Ok(vec![0xBF, 0x41]));
}

#[test]
fn overlong_form_accepted() {
    // Two-byte encoding of NUL; a strict decoder would reject it.
    assert_eq!(decode(&[0xC0, 0x80]), Ok(vec![0]));
    // Three-byte encoding of '/'.
    assert_eq!(decode(&[0xE0, 0x80, 0xAF]), Ok(vec![0x2F]));
}

#[test]
fn continuation_high_bits_not_checked() {
    // 0x28 lacks the 10 prefix; its low six bits still count.
    assert_eq!(decode(&[0xC3, 0x28]), Ok(vec![0xE8]));
}

#[test]
fn decode_into_overwrites_previous_content() {
    let mut out = vec![0xDEAD, 0xBEEF];
    decode_into(b"Hi", &mut out).unwrap();
    assert_eq!(out, vec![72, 105]);

    decode_into(&[], &mut out).unwrap();
    assert_eq!(out, Vec::<u32>::new());
}
