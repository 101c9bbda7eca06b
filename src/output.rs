use std::io::{self, Write};

/// Writes `text` as lines of at most `width` characters, each ending in a
/// newline. A width of 0 writes the whole text on one line.
pub fn write_lines(writer: &mut impl Write, text: &str, width: usize) -> io::Result<()> {
    if width == 0 || text.is_empty() {
        return writeln!(writer, "{}", text);
    }
    for line in text.as_bytes().chunks(width) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    fn lines(text: &str, width: usize) -> String {
        let mut output = Vec::new();
        super::write_lines(&mut output, text, width).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn write_lines() {
        assert_eq!(lines("", 76), "\n");
        assert_eq!(lines("abcdef", 0), "abcdef\n");
        assert_eq!(lines("abcdef", 4), "abcd\nef\n");
        assert_eq!(lines("abcdef", 3), "abc\ndef\n");
        assert_eq!(lines("abcdef", 76), "abcdef\n");
    }
}
