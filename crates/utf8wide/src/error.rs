use thiserror::Error;

/// Error returned by [`decode`](crate::decode) and
/// [`decode_into`](crate::decode_into).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A multi-byte lead byte promised more continuation bytes than remain
    /// in the buffer.
    #[error(
        "truncated sequence: lead byte {lead:#04x} at offset {offset} needs {needed} continuation bytes, {available} remain"
    )]
    TruncatedSequence {
        /// The lead byte that opened the incomplete sequence.
        lead: u8,
        /// Byte offset of that lead byte within the input.
        offset: usize,
        /// Continuation bytes the lead byte calls for.
        needed: usize,
        /// Continuation bytes actually left before the buffer ends.
        available: usize,
    },
}
