use serde::{Deserialize, Serialize};
use std::{error, fmt};

pub const SIZE: usize = 58;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    NonAsciiCharacter { character: u8, index: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(f, "Alphabet must be {} characters long (got {})", SIZE, length),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
        }
    }
}

/// An ordered set of 58 distinct ASCII symbols. The symbol at position `i`
/// encodes the digit value `i`; position 0 is the zero symbol used for each
/// leading zero byte.
#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    encode: [u8; SIZE],
    decode: [Option<u8>; 128],
}

impl Alphabet {
    pub const fn new(characters: &[u8; SIZE]) -> Result<Self, Error> {
        let mut encode = [0u8; SIZE];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < SIZE {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Panics if `digit` is not below 58.
    pub fn encode_symbol(&self, digit: usize) -> u8 {
        self.encode[digit]
    }

    pub fn decode_digit(&self, character: u8) -> Option<u8> {
        self.decode.get(character as usize).copied().flatten()
    }

    pub fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub fn symbols(&self) -> &[u8; SIZE] {
        &self.encode
    }
}

impl TryFrom<&[u8]> for Alphabet {
    type Error = Error;

    fn try_from(characters: &[u8]) -> Result<Self, Self::Error> {
        let characters: &[u8; SIZE] = characters
            .try_into()
            .map_err(|_| Error::InvalidLength { length: characters.len() })?;
        Self::new(characters)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = Error;

    fn try_from(characters: &str) -> Result<Self, Self::Error> {
        Self::try_from(characters.as_bytes())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = Error;

    fn try_from(characters: String) -> Result<Self, Self::Error> {
        Self::try_from(characters.as_bytes())
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &character in &self.encode {
            write!(f, "{}", character as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet(\"{}\")", self)
    }
}

pub const BITCOIN: Alphabet = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const FLICKR: Alphabet = match Alphabet::new(b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

#[cfg(test)]
mod tests {
    use super::{Alphabet, Error, BITCOIN, FLICKR};

    const BITCOIN_SYMBOLS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[test]
    fn lookup() {
        assert_eq!(BITCOIN.zero(), b'1');
        assert_eq!(BITCOIN.encode_symbol(57), b'z');
        assert_eq!(BITCOIN.decode_digit(b'A'), Some(9));
        assert_eq!(FLICKR.decode_digit(b'A'), Some(34));
        assert_eq!(BITCOIN.decode_digit(b'0'), None);
        assert_eq!(BITCOIN.decode_digit(b'O'), None);
        assert_eq!(BITCOIN.decode_digit(b'I'), None);
        assert_eq!(BITCOIN.decode_digit(b'l'), None);
        assert_eq!(BITCOIN.decode_digit(0xc3), None);
        for digit in 0..58 {
            assert_eq!(FLICKR.decode_digit(FLICKR.encode_symbol(digit)), Some(digit as u8));
        }
    }

    #[test]
    fn try_from() {
        assert_eq!(Alphabet::try_from(BITCOIN_SYMBOLS), Ok(BITCOIN));
        assert_eq!(
            Alphabet::try_from(&BITCOIN_SYMBOLS[..57]),
            Err(Error::InvalidLength { length: 57 })
        );
        assert_eq!(
            Alphabet::try_from(format!("{}0", BITCOIN_SYMBOLS)),
            Err(Error::InvalidLength { length: 59 })
        );
        assert_eq!(
            Alphabet::try_from(format!("{}1", &BITCOIN_SYMBOLS[..57])),
            Err(Error::DuplicateCharacter {
                character: '1',
                first: 0,
                second: 57
            })
        );
        let mut symbols = BITCOIN_SYMBOLS.as_bytes().to_vec();
        symbols[3] = 0xff;
        assert_eq!(
            Alphabet::try_from(&symbols[..]),
            Err(Error::NonAsciiCharacter { character: 0xff, index: 3 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(BITCOIN.to_string(), BITCOIN_SYMBOLS);
        assert_eq!(format!("{:?}", FLICKR), "Alphabet(\"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ\")");
        assert_eq!(
            Error::DuplicateCharacter {
                character: '1',
                first: 0,
                second: 57
            }
            .to_string(),
            "Duplicate character '1' at indexes 0 and 57"
        );
    }

    #[test]
    fn serde() {
        let json = serde_json::to_string(&FLICKR).unwrap();
        assert_eq!(json, "\"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ\"");
        assert_eq!(serde_json::from_str::<Alphabet>(&json).unwrap(), FLICKR);
        let error = serde_json::from_str::<Alphabet>("\"123\"").unwrap_err();
        assert!(error.to_string().contains("Alphabet must be 58 characters long (got 3)"));
    }
}
