//! Base58 encoding and decoding with fixed-width arithmetic.
//!
//! Leading zero bytes are preserved as leading zero symbols, so
//! `[0x00, 0x01, 0x09]` encodes to `"15a"` with the Bitcoin alphabet.

pub mod alphabet;
pub mod base58;
pub mod trivial;

pub use alphabet::{Alphabet, Error as AlphabetError, BITCOIN, FLICKR};
pub use base58::decode::Error as DecodeError;
pub use base58::{decode, decode_into, decode_with_alphabet, encode, encode_into, encode_with_alphabet, Decoder, Encoder};
