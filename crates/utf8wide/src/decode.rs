//! UTF-8 bytes → code points.
//!
//! The decoder walks the buffer with a cursor. Each lead byte announces
//! its sequence length through [`sequence_len`]; the lead's masked
//! payload and the low six bits of each continuation byte are then folded
//! into the scalar most-significant-first. Continuation bytes are taken
//! on faith: their high bits are never checked, so overlong forms and
//! malformed interiors decode to *something* deterministic rather than
//! erroring. The single failure mode is a trailing lead byte whose
//! continuation bytes run past the end of the input; that aborts the
//! whole decode.

use alloc::vec::Vec;

use crate::{
    error::DecodeError,
    forms::{CONT_MASK, lead_mask, sequence_len},
};

/// Decode `utf8` into a fresh code-point buffer.
///
/// Accepts the full historical 1–6 byte scheme. Bytes below `0xC0` pass
/// through unmasked, one scalar each.
///
/// # Errors
///
/// [`DecodeError::TruncatedSequence`] if a lead byte's continuation bytes
/// extend past the end of `utf8`. No partial output is returned.
pub fn decode(utf8: &[u8]) -> Result<Vec<u32>, DecodeError> {
    let mut out = Vec::new();
    decode_into(utf8, &mut out)?;
    Ok(out)
}

/// Decode `utf8` into `out`, clearing `out` first.
///
/// On success `out` holds exactly this call's result, never content
/// accumulated from earlier calls. On error the contents of `out` are
/// unspecified and must be discarded.
///
/// # Errors
///
/// [`DecodeError::TruncatedSequence`], as for [`decode`].
pub fn decode_into(utf8: &[u8], out: &mut Vec<u32>) -> Result<(), DecodeError> {
    out.clear();
    let mut cursor = 0;
    while cursor < utf8.len() {
        let lead = utf8[cursor];
        let len = sequence_len(lead);
        if len == 1 {
            out.push(u32::from(lead));
            cursor += 1;
            continue;
        }
        let tail = len - 1;
        // Strict bound: every continuation byte must lie inside the buffer.
        if cursor + tail >= utf8.len() {
            return Err(DecodeError::TruncatedSequence {
                lead,
                offset: cursor,
                needed: tail,
                available: utf8.len() - cursor - 1,
            });
        }
        let mut scalar = u32::from(lead & lead_mask(len)) << (6 * tail);
        for (i, &byte) in utf8[cursor + 1..cursor + len].iter().enumerate() {
            scalar |= u32::from(byte & CONT_MASK) << (6 * (tail - 1 - i));
        }
        out.push(scalar);
        cursor += len;
    }
    Ok(())
}
