pub mod decode;
pub mod encode;

pub use crate::alphabet::{Alphabet, BITCOIN};
pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, max_encoded_len, Encoder};

pub fn encode_with_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet) -> String {
    Encoder::new(alphabet).encode(input)
}

pub fn decode_with_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet) -> Result<Vec<u8>, decode::Error> {
    Decoder::new(alphabet).decode(input)
}
