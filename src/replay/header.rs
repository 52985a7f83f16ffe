//! Header line parsing: `<version>:{SHAVITREPLAYFORMAT}{FINAL}`.

use super::error::DecodeError;
use super::reader::ByteReader;
use super::FORMAT_TAG;

/// Read the header line and return the format version it declares.
pub fn read_header_line(reader: &mut ByteReader<'_>) -> Result<u32, DecodeError> {
    let line = reader.read_line();
    parse_header_line(&line)
}

/// Split a header line on its first `:` and validate both halves.
///
/// The tag is checked before the version so a foreign file is always
/// reported as a format mismatch, whatever its first token looks like.
pub fn parse_header_line(line: &str) -> Result<u32, DecodeError> {
    let Some((version_token, tag)) = line.split_once(':') else {
        return Err(DecodeError::Format {
            found: line.to_string(),
        });
    };

    if tag != FORMAT_TAG {
        return Err(DecodeError::Format {
            found: tag.to_string(),
        });
    }

    match version_token.trim().parse::<u32>() {
        Ok(version) if version >= 1 => Ok(version),
        _ => Err(DecodeError::Version {
            token: version_token.to_string(),
        }),
    }
}
