use crate::alphabet::{Alphabet, BITCOIN};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoding.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Upper bound on the number of base58 digits needed for `len` bytes.
/// log(256) / log(58) is about 1.365, so 1.38 never undersizes.
pub const fn max_encoded_len(len: usize) -> usize {
    len * 138 / 100 + 1
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Returns the leading zero byte count and the base58 digits of the
    /// remaining value, most significant first, without leading zero digits.
    fn digits(input: &[u8]) -> (usize, Vec<u8>) {
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        let size = max_encoded_len(input.len() - zeros);
        let mut buffer = vec![0u8; size];

        // Cells in buffer[high..] may be nonzero, the rest are still zero.
        let mut high = size;
        for &value in &input[zeros..] {
            let mut carry = value as u32;
            let mut position = size;
            // The size bound guarantees the carry is exhausted before position 0.
            while position > high || carry != 0 {
                position -= 1;
                carry += (buffer[position] as u32) << 8;
                buffer[position] = (carry % 58) as u8;
                carry /= 58;
            }
            high = position;
        }

        let start = buffer.iter().take_while(|&&digit| digit == 0).count();
        buffer.drain(..start);
        (zeros, buffer)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let (zeros, digits) = Self::digits(input.as_ref());
        let len = zeros + digits.len();
        let output = output.get_mut(..len).ok_or(Error::BufferTooSmall)?;
        let (prefix, rest) = output.split_at_mut(zeros);
        prefix.fill(self.alphabet.zero());
        for (value, &digit) in rest.iter_mut().zip(&digits) {
            *value = self.alphabet.encode_symbol(digit as usize);
        }
        Ok(len)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let (zeros, digits) = Self::digits(input.as_ref());
        let mut output = String::with_capacity(zeros + digits.len());
        output.extend(std::iter::repeat(self.alphabet.zero() as char).take(zeros));
        output.extend(digits.iter().map(|&digit| self.alphabet.encode_symbol(digit as usize) as char));
        output
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&BITCOIN);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}
