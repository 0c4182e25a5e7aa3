use encoding_rs::{UTF_8, WINDOWS_1252};

/// Decode raw bytes with a prioritized list of text encodings.
///
/// UTF-8 is tried first, then Windows-1252 (which per the WHATWG encoding
/// standard subsumes Latin-1). The first encoding that decodes without error
/// wins; as a last resort the bytes are decoded as UTF-8 with replacement
/// characters, so this function never fails.
pub fn decode_text(bytes: &[u8]) -> String {
    for encoding in [UTF_8, WINDOWS_1252] {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return text.into_owned();
        }
    }

    String::from_utf8_lossy(bytes).into_owned()
}
