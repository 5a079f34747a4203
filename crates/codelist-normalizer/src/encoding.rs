//! Source-file decoding with encoding detection.
//!
//! Code-list distributions arrive in a mix of encodings. Detection is
//! delegated to `encoding_rs`: a byte-order mark wins, otherwise the bytes
//! are tried as strict UTF-8, otherwise decoded as windows-1252 (which maps
//! every byte, so plain Latin text always decodes).

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, WINDOWS_1252};

use crate::types::{NormalizeError, NormalizeResult};

/// Reads a file and decodes it to a `String` using encoding detection.
///
/// # Errors
/// Returns an error if the file cannot be read, or if a BOM declares an
/// encoding the bytes then fail to decode under.
pub fn decode_file<P: AsRef<Path>>(path: P) -> NormalizeResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    decode_bytes(&bytes).map_err(|encoding| NormalizeError::Decode {
        path: path.display().to_string(),
        encoding,
    })
}

/// Decodes raw bytes, returning the offending encoding name on failure.
fn decode_bytes(bytes: &[u8]) -> Result<String, String> {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        // decode() strips the BOM for the detected encoding
        let (text, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            return Err(encoding.name().to_string());
        }
        return Ok(text.into_owned());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_owned());
    }

    // windows-1252 assigns a character to every byte value
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_bytes(b"M54.5 Low back pain").unwrap(), "M54.5 Low back pain");
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("A0021 Ambulance service".as_bytes());
        assert_eq!(decode_bytes(&bytes).unwrap(), "A0021 Ambulance service");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0xE9 is é in windows-1252 and invalid as a UTF-8 start byte
        let bytes = b"J0100 M\xE9ni\xE8re disease drug";
        assert_eq!(decode_bytes(bytes).unwrap(), "J0100 Ménière disease drug");
    }

    #[test]
    fn test_decode_utf16le_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "A12 code list".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_bytes(&bytes).unwrap(), "A12 code list");
    }

    #[test]
    fn test_decode_file_missing() {
        let err = decode_file("no_such_code_list.txt").unwrap_err();
        assert!(matches!(err, NormalizeError::Io(_)));
    }

    #[test]
    fn test_decode_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("M54.5   Low back pain, unspecified\n".as_bytes())
            .unwrap();

        let text = decode_file(file.path()).unwrap();
        assert_eq!(text, "M54.5   Low back pain, unspecified\n");
    }
}
