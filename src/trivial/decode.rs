use crate::alphabet::{Alphabet, BITCOIN};
use num_bigint::BigUint;
use num_traits::Zero;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    IllegalDigit { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IllegalDigit { character, index } => write!(f, "Illegal base58 digit {:#02x} at index {}", character, index),
        }
    }
}

pub fn decode_with_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let mut value = BigUint::zero();
    for (index, &character) in input.iter().enumerate() {
        let digit = alphabet
            .decode_digit(character)
            .ok_or(Error::IllegalDigit { character, index })?;
        value = value * 58u32 + digit as u32;
    }

    let zeros = input.iter().take_while(|&&character| character == alphabet.zero()).count();
    let mut output = vec![0u8; zeros];
    if !value.is_zero() {
        output.extend(value.to_bytes_be());
    }
    Ok(output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    decode_with_alphabet(input, &BITCOIN)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("111"), Ok(vec![0x00, 0x00, 0x00]));
        assert_eq!(super::decode("15a"), Ok(vec![0x00, 0x01, 0x09]));
        assert_eq!(super::decode("7YXq9G"), Ok(vec![0xff, 0xff, 0xff, 0xff]));
        assert_eq!(super::decode("1I"), Err(Error::IllegalDigit { character: b'I', index: 1 }));
    }
}
