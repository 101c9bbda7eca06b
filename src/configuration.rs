use crate::error::Error;
use clap::Parser;
use fast_base58::{Alphabet, AlphabetError, BITCOIN, FLICKR};
use std::{env, error};

#[derive(Parser, Debug)]
#[command(name = "base58")]
#[command(about = "Encode or decode base58 data")]
struct Arguments {
    /// Decode input
    #[arg(short, long)]
    decode: bool,
    /// Break encoded string into lines of this many characters, 0 disables line wrapping [env: BASE58_LINE_WIDTH, default: 76]
    #[arg(short = 'b', long = "break", value_name = "WIDTH")]
    line_width: Option<usize>,
    /// Input file, "-" for stdin
    #[arg(short, long, default_value = "-")]
    input: String,
    /// Output file, "-" for stdout
    #[arg(short, long, default_value = "-")]
    output: String,
    /// "bitcoin", "flickr" or 58 literal symbols [env: BASE58_ALPHABET, default: bitcoin]
    #[arg(short, long)]
    alphabet: Option<String>,
    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Configuration {
    decode: bool,
    line_width: usize,
    input: String,
    output: String,
    alphabet: Alphabet,
    verbose: bool,
}

fn var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|_| format!("Missing {}", key))
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

fn parse_alphabet(value: &str) -> Result<Alphabet, AlphabetError> {
    match value {
        "bitcoin" => Ok(BITCOIN),
        "flickr" => Ok(FLICKR),
        _ => Alphabet::try_from(value),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_arguments(Arguments::parse())
    }

    fn from_arguments(arguments: Arguments) -> Result<Self, Error> {
        let line_width = match arguments.line_width {
            Some(line_width) => line_width,
            None => var_map("BASE58_LINE_WIDTH", |width| width.parse(), Some(76)).map_err(Error::new)?,
        };
        let alphabet = match arguments.alphabet {
            Some(alphabet) => parse_alphabet(&alphabet)?,
            None => var_map("BASE58_ALPHABET", parse_alphabet, Some(BITCOIN)).map_err(Error::new)?,
        };
        Ok(Self {
            decode: arguments.decode,
            line_width,
            input: arguments.input,
            output: arguments.output,
            alphabet,
            verbose: arguments.verbose,
        })
    }

    pub fn decode(&self) -> bool {
        self.decode
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Input path, `-` for stdin.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Output path, `-` for stdout.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
