use crate::alphabet::{Alphabet, BITCOIN};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    EmptyInput,
    InvalidDigit { character: u8, index: usize },
    /// The accumulator outgrew the size derived from the input length.
    NumericOverflow,
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "Zero length string"),
            Error::InvalidDigit { character, index } if *character >= 128 => {
                write!(f, "Non-ascii character {:#02x} at index {}", character, index)
            }
            Error::InvalidDigit { character, index } => write!(f, "Invalid base58 digit '{}' at index {}", *character as char, index),
            Error::NumericOverflow => write!(f, "Output number too big"),
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Multiplies the big-endian accumulator by 58 and adds `digit`.
    fn accumulate(words: &mut [u32], digit: u8, mask: u32) -> Result<(), Error> {
        let mut carry = digit as u64;
        for word in words.iter_mut().rev() {
            let value = (*word as u64) * 58 + carry;
            *word = value as u32;
            carry = value >> 32;
        }
        if carry > 0 {
            return Err(Error::NumericOverflow);
        }
        match words.first() {
            Some(&word) if word & mask != 0 => Err(Error::NumericOverflow),
            _ => Ok(()),
        }
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let zero = self.alphabet.zero();
        let zeros = input.iter().take_while(|&&value| value == zero).count();

        // 58^n < 256^n, so n digits always fit in n bytes. The first word
        // only carries the bytes left over once the rest fill whole words.
        let leading = match input.len() % 4 {
            0 => 4,
            bytes => bytes,
        };
        let mask = u32::MAX.checked_shl(leading as u32 * 8).unwrap_or(0);
        let mut words = vec![0u32; (input.len() + 3) / 4];

        for (index, &character) in input.iter().enumerate() {
            let digit = self
                .alphabet
                .decode_digit(character)
                .ok_or(Error::InvalidDigit { character, index })?;
            Self::accumulate(&mut words, digit, mask)?;
        }

        let mut output = Vec::with_capacity(input.len());
        let mut width = leading;
        for word in &words {
            output.extend_from_slice(&word.to_be_bytes()[4 - width..]);
            width = 4;
        }

        // Keep exactly `zeros` zero bytes ahead of the first payload byte.
        let start = match output.iter().position(|&value| value != 0) {
            Some(first) => first.saturating_sub(zeros),
            None => output.len().saturating_sub(zeros),
        };
        output.drain(..start);
        Ok(output)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let decoded = self.decode(input)?;
        let output = output.as_mut();
        output
            .get_mut(..decoded.len())
            .ok_or(Error::BufferTooSmall)?
            .copy_from_slice(&decoded);
        Ok(decoded.len())
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&BITCOIN);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}
