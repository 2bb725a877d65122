use encoding::all::WINDOWS_1252;
use encoding::label::encoding_from_whatwg_label;
use encoding::{DecoderTrap, EncodingRef};

const BOM: char = '\u{feff}';

/// Decodes file bytes as UTF-8, falling back to charset detection when
/// `autodetect` is set. Errors carry a human readable reason.
pub(crate) fn decode_text(bytes: Vec<u8>, autodetect: bool) -> Result<String, String> {
    let bytes = match String::from_utf8(bytes) {
        Ok(text) => return Ok(strip_bom(text)),
        Err(err) if !autodetect => {
            return Err(format!(
                "not valid UTF-8 ({}); enable encoding autodetection to load it",
                err.utf8_error()
            ))
        }
        Err(err) => err.into_bytes(),
    };

    let (charset, confidence, _language) = chardet::detect(&bytes);
    let label = chardet::charset2encoding(&charset);
    let decoder: EncodingRef = match encoding_from_whatwg_label(label) {
        Some(decoder) => decoder,
        None => {
            tracing::warn!(charset = %charset, "no decoder for detected charset; using windows-1252");
            WINDOWS_1252
        }
    };
    tracing::debug!(charset = %charset, confidence, "detected text encoding");

    decoder
        .decode(&bytes, DecoderTrap::Replace)
        .map(strip_bom)
        .map_err(|err| format!("decoding as {charset} failed: {err}"))
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through_without_bom() {
        let decoded = decode_text("\u{feff}héllo".as_bytes().to_vec(), false).unwrap();
        assert_eq!(decoded, "héllo");
    }

    #[test]
    fn invalid_utf8_is_rejected_without_autodetect() {
        let reason = decode_text(vec![0x66, 0x6f, 0xff, 0x6f], false).unwrap_err();
        assert!(reason.contains("not valid UTF-8"));
    }

    #[test]
    fn utf16_with_bom_is_detected() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "hello world, hello again".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        let decoded = decode_text(bytes, true).unwrap();
        assert!(decoded.contains("hello"));
    }
}
