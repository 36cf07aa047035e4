//! Reader for whitespace-delimited XYZ text.
//!
//! Every non-blank line must hold exactly three numeric tokens. Blank lines
//! are skipped. The first bad line aborts the read; no partial sample list
//! is returned.

use tracing::debug;
use crate::heightmap::common::error::{Result, ConversionError};
use crate::heightmap::xyz::reader::SampleReader;
use crate::heightmap::xyz::types::Sample;

/// Number of tokens expected on every non-blank line.
const TOKENS_PER_LINE: usize = 3;

pub struct XyzTextReader;

impl XyzTextReader {
    /// Parses already-decoded text. Line numbers in errors are 1-based.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Sample>> {
        let mut samples = Vec::new();
        let text = text.replace("\r\n", "\n");

        for (index, line) in text.split(['\n', '\r']).enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            samples.push(parse_line(trimmed, line_number)?);
        }

        debug!("Parsed {} samples", samples.len());
        Ok(samples)
    }
}

impl SampleReader for XyzTextReader {
    fn read_samples(&self, data: &[u8]) -> Result<Vec<Sample>> {
        debug!("Reading XYZ text, {} bytes", data.len());

        let text = std::str::from_utf8(data)
            .map_err(|e| ConversionError::InvalidEncoding(e.to_string()))?;

        self.parse_str(text)
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<Sample> {
    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
    if tokens.len() != TOKENS_PER_LINE {
        return Err(ConversionError::MalformedLine {
            line: line_number,
            reason: format!("expected {} values, found {}", TOKENS_PER_LINE, tokens.len()),
        });
    }

    let x = parse_value(tokens[0], line_number)?;
    let y = parse_value(tokens[1], line_number)?;
    let z = parse_value(tokens[2], line_number)?;

    Ok(Sample::new(x, y, z))
}

fn parse_value(token: &str, line_number: usize) -> Result<f64> {
    let value: f64 = token.parse().map_err(|_| ConversionError::MalformedLine {
        line: line_number,
        reason: format!("'{}' is not a number", token),
    })?;

    if !value.is_finite() {
        return Err(ConversionError::MalformedLine {
            line: line_number,
            reason: format!("'{}' is not a finite number", token),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Vec<Sample>> {
        XyzTextReader.read_samples(text.as_bytes())
    }

    #[test]
    fn test_reads_samples_in_order() {
        let samples = read("0 0 10\n1 0 20\n0 1 30\n").unwrap();
        assert_eq!(
            samples,
            vec![
                Sample::new(0.0, 0.0, 10.0),
                Sample::new(1.0, 0.0, 20.0),
                Sample::new(0.0, 1.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_skips_blank_and_whitespace_only_lines() {
        let samples = read("\n  \n1 2 3\n\t\n4 5 6\n\n").unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1], Sample::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_accepts_tabs_crlf_and_exponents() {
        let samples = read("413000.5\t5654000.0\t1.2e2\r\n-1  -2   -3.5\r\n").unwrap();
        assert_eq!(samples[0], Sample::new(413000.5, 5654000.0, 120.0));
        assert_eq!(samples[1], Sample::new(-1.0, -2.0, -3.5));
    }

    #[test]
    fn test_accepts_carriage_return_line_endings() {
        let samples = read("0 0 1\r1 0 2\r").unwrap();
        assert_eq!(samples, vec![Sample::new(0.0, 0.0, 1.0), Sample::new(1.0, 0.0, 2.0)]);
    }

    #[test]
    fn test_line_numbers_survive_mixed_line_endings() {
        let err = read("0 0 1\r\n1 0 2\r1 2\n").unwrap_err();
        assert!(matches!(err, ConversionError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn test_two_tokens_is_malformed() {
        let err = read("0 0 1\n1 2\n").unwrap_err();
        match err {
            ConversionError::MalformedLine { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_four_tokens_is_malformed() {
        let err = read("1 2 3 4").unwrap_err();
        assert!(matches!(err, ConversionError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_non_numeric_token_is_malformed() {
        let err = read("a b c").unwrap_err();
        match err {
            ConversionError::MalformedLine { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("'a'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        assert!(matches!(read("nan 0 0"), Err(ConversionError::MalformedLine { .. })));
        assert!(matches!(read("0 0 inf"), Err(ConversionError::MalformedLine { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = XyzTextReader.read_samples(&[0x31, 0x20, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidEncoding(_)));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_empty_input_yields_no_samples() {
        assert!(read("").unwrap().is_empty());
        assert!(read("\n\n   \n").unwrap().is_empty());
    }
}
