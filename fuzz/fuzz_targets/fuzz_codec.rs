#![no_main]
use libfuzzer_sys::fuzz_target;
use utf8wide::{decode, encode};

fn codec(data: &[u8]) {
    // Decoding arbitrary bytes must never panic, and any successful decode
    // must be stable under a further encode -> decode trip. Decoded scalars
    // never exceed 2^31 - 1 (the six-byte lead keeps one payload bit), so
    // the round-trip law applies to all of them.
    if let Ok(scalars) = decode(data) {
        let reencoded = encode(&scalars);
        assert_eq!(decode(&reencoded), Ok(scalars));
    }

    // Drive the encoder with arbitrary 31-bit scalars as well; these must
    // round-trip exactly.
    let scalars: Vec<u32> = data
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()) & 0x7FFF_FFFF)
        .collect();
    assert_eq!(decode(&encode(&scalars)), Ok(scalars));
}

fuzz_target!(|data: &[u8]| codec(data));
