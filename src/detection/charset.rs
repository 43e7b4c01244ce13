use crate::types::constants::{BINARY_PERCENT, CHARSET_GUESS_SIZE};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// UTF-8 BOM bytes
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// UTF-16 LE BOM bytes
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];

/// UTF-16 BE BOM bytes
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Allow guessing UTF-8 encoding
const ALLOW_UTF8: bool = true;

/// Detect the character encoding of uploaded bytes.
/// Returns a normalized encoding name.
pub fn detect_charset(data: &[u8]) -> String {
    match data {
        d if d.starts_with(UTF8_BOM) => return "utf8".to_string(),
        d if d.starts_with(UTF16_LE_BOM) => return "utf16le".to_string(),
        d if d.starts_with(UTF16_BE_BOM) => return "utf16be".to_string(),
        _ => {}
    }

    // Valid UTF-8 short-circuits the detector for small inputs
    if data.len() <= CHARSET_GUESS_SIZE && std::str::from_utf8(data).is_ok() {
        return "utf8".to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    let encoding = detector.guess(None, ALLOW_UTF8);

    normalize_encoding(encoding.name())
}

fn normalize_encoding(name: &str) -> String {
    let name_lower = name.to_lowercase();
    match name_lower.as_str() {
        "utf-8" | "utf8" => "utf8".to_string(),
        "iso-8859-1" | "iso8859-1" | "latin1" => "iso88591".to_string(),
        "windows-1252" | "cp1252" => "cp1252".to_string(),
        _ => name_lower.replace(['-', '_'], ""),
    }
}

/// Decode bytes in the given charset to a UTF-8 string.
///
/// UTF-16 BOMs are consumed by the decoder. A UTF-8 BOM is kept as the
/// U+FEFF character; the tokenizer strips it.
pub fn convert_to_utf8(data: &[u8], charset: &str) -> Result<String, String> {
    let encoding = match charset.to_lowercase().as_str() {
        "utf8" | "utf-8" => {
            return String::from_utf8(data.to_vec()).map_err(|e| format!("Invalid UTF-8: {}", e));
        }
        "utf16le" | "utf-16le" => encoding_rs::UTF_16LE,
        "utf16be" | "utf-16be" => encoding_rs::UTF_16BE,
        "iso88591" | "iso-8859-1" | "latin1" => encoding_rs::WINDOWS_1252, // Superset
        "cp1252" | "windows-1252" | "windows1252" => encoding_rs::WINDOWS_1252,
        other => Encoding::for_label(other.as_bytes())
            .ok_or_else(|| format!("Unsupported charset: {}", charset))?,
    };

    // Replacement characters are accepted; the table is still usable.
    let (decoded, _) = encoding.decode_with_bom_removal(data);
    Ok(decoded.into_owned())
}

/// Check if the first line of the data looks binary
pub fn is_binary_data(data: &[u8]) -> bool {
    let first_line_end = memchr::memchr(b'\n', data)
        .unwrap_or(data.len())
        .min(1024);

    let sample = &data[..first_line_end];

    // UTF-16 text is full of NUL bytes, so skip it along with BOMs
    if sample.starts_with(UTF16_LE_BOM) || sample.starts_with(UTF16_BE_BOM) {
        return false;
    }
    let sample = sample.strip_prefix(UTF8_BOM).unwrap_or(sample);

    if sample.is_empty() {
        return false;
    }

    let unprintable_count = sample
        .iter()
        .filter(|&&b| b < 0x20 && !matches!(b, b'\t' | b'\r'))
        .count();

    (unprintable_count * 100) / sample.len() >= BINARY_PERCENT
}
