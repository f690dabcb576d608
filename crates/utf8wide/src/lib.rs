//! Codec between the historical 1–6 byte UTF-8 encoding and raw 32-bit
//! Unicode code points.
//!
//! This crate implements the original UTF-8 scheme, in which lead-byte
//! prefixes run up to `0xFC` and sequences up to six bytes long carry
//! scalars up to `2^31 - 1`, not the RFC 3629 subset that stops at four
//! bytes and `U+10FFFF`. The wider scheme is kept on purpose: buffers
//! written by pre-RFC-3629 software still decode byte-for-byte.
//!
//! The codec is deliberately permissive. Continuation bytes contribute
//! their low six bits no matter what their high bits say, overlong forms
//! are accepted, and no scalar-range or surrogate checks are applied on
//! either path. The one failure mode is a lead byte whose continuation
//! bytes run past the end of the input ([`DecodeError::TruncatedSequence`]).
//!
//! For any scalar sequence `c` with all values below `2^31`,
//! `decode(&encode(&c))` returns `Ok(c)`:
//!
//! ```rust
//! let scalars = [0x48, 0x4F60, 0x1F600, 0x7FFF_FFFF];
//! let bytes = utf8wide::encode(&scalars);
//! assert_eq!(utf8wide::decode(&bytes), Ok(scalars.to_vec()));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod encode;
mod error;
mod forms;

#[cfg(test)]
mod tests;

pub use decode::{decode, decode_into};
pub use encode::{encode, encode_into};
pub use error::DecodeError;
pub use forms::{encoded_len, sequence_len};
