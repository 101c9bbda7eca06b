mod chronometer;
mod configuration;
mod error;
mod logger;
mod output;

use self::{configuration::Configuration, error::Error, logger::Logger};
use fast_base58::{decode_with_alphabet, encode_with_alphabet};
use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    process,
};

fn read_input(path: &str) -> Result<Vec<u8>, Error> {
    let mut input = Vec::new();
    let result = if path == "-" {
        io::stdin().lock().read_to_end(&mut input)
    } else {
        File::open(path)
            .map_err(|error| Error::new(format!("input file err: {}", error)))?
            .read_to_end(&mut input)
    };
    result.map_err(|error| Error::new(format!("read input err: {}", error)))?;
    Ok(input)
}

fn open_output(path: &str) -> Result<Box<dyn Write>, Error> {
    if path == "-" {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file = File::create(path).map_err(|error| Error::new(format!("output file err: {}", error)))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn run(configuration: &Configuration, logger: &Logger) -> Result<(), Error> {
    let input = read_input(configuration.input())?;
    logger.log(format!("Read {} bytes from {}", input.len(), configuration.input()));

    let mut output = open_output(configuration.output())?;
    if configuration.decode() {
        let text: Vec<u8> = input.into_iter().filter(|value| !value.is_ascii_whitespace()).collect();
        let decoded = decode_with_alphabet(&text, configuration.alphabet())?;
        logger.log(format!("Decoded {} symbols into {} bytes", text.len(), decoded.len()));
        output.write_all(&decoded)?;
    } else {
        let encoded = encode_with_alphabet(&input, configuration.alphabet());
        logger.log(format!("Encoded {} bytes into {} symbols", input.len(), encoded.len()));
        output::write_lines(&mut output, &encoded, configuration.line_width())?;
    }

    Ok(output.flush()?)
}

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("{}", error.message());
            process::exit(1);
        }
    };

    let logger = Logger::new(configuration.verbose());

    if let Err(error) = run(&configuration, &logger) {
        eprintln!("{}", error.message());
        process::exit(1);
    }

    logger.log("Done");
}
