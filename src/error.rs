use std::{error, fmt, io};

#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(format!("write output err: {}", error))
    }
}

impl From<fast_base58::DecodeError> for Error {
    fn from(error: fast_base58::DecodeError) -> Self {
        Self::new(format!("decode input err: {}", error))
    }
}

impl From<fast_base58::AlphabetError> for Error {
    fn from(error: fast_base58::AlphabetError) -> Self {
        Self::new(format!("Invalid alphabet: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use fast_base58::{Alphabet, DecodeError};
    use std::io;

    #[test]
    fn from() {
        let error = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        assert_eq!(error.message(), "write output err: broken pipe");

        let error = Error::from(DecodeError::InvalidDigit { character: b'0', index: 4 });
        assert_eq!(error.message(), "decode input err: Invalid base58 digit '0' at index 4");

        let error = Error::from(Alphabet::try_from("abc").unwrap_err());
        assert_eq!(error.to_string(), "Invalid alphabet: Alphabet must be 58 characters long (got 3)");
    }
}
