//! Large-payload codec.
//!
//! Text payloads above a fixed size are carried as base64 of their UTF-8
//! bytes, with an explicit encoded flag alongside, so oversized script or
//! document bodies survive the transport boundary without truncation or
//! escaping damage. Small payloads pass through untouched.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::BridgeError;

/// Payloads longer than this many characters are encoded for transport.
pub const ENCODE_THRESHOLD_CHARS: usize = 10_000;

/// Encode `text` for transport if it exceeds the threshold.
///
/// Returns the payload and whether it was encoded. `decode` reverses this
/// exactly for every input, including empty and non-ASCII strings.
pub fn encode_if_large(text: &str) -> (String, bool) {
    if text.chars().count() > ENCODE_THRESHOLD_CHARS {
        (BASE64.encode(text.as_bytes()), true)
    } else {
        (text.to_string(), false)
    }
}

/// Reverse `encode_if_large` given the payload and its encoded flag.
pub fn decode(payload: &str, is_encoded: bool) -> Result<String, BridgeError> {
    if !is_encoded {
        return Ok(payload.to_string());
    }
    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|e| BridgeError::Unknown(format!("invalid base64 payload: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| BridgeError::Unknown(format!("payload is not valid UTF-8: {e}")))
}
