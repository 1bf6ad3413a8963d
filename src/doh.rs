//! Helpers for carrying messages over HTTPS, according to
//! [RFC 8484](https://tools.ietf.org/rfc/rfc8484).
//!
//! Only the `application/dns-message` representation is supported.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Media type of wire-format request and response bodies.
pub const CONTENT_TYPE: &str = "application/dns-message";

/// Name of the query parameter carrying a GET request's message.
pub const QUERY_PARAM: &str = "dns";

/// Encodes a query as base64url without padding, for use in a GET request.
pub fn encode_get_param(query: &[u8]) -> String {
  URL_SAFE_NO_PAD.encode(query)
}

/// Decodes a GET request's `dns` parameter back into a message.
pub fn decode_get_param(param: &str) -> Result<Vec<u8>, base64::DecodeError> {
  URL_SAFE_NO_PAD.decode(param)
}

/// Appends the encoded `query` to `endpoint` as the `dns` parameter.
pub fn get_url(endpoint: &str, query: &[u8]) -> String {
  let separator = if endpoint.contains('?') { '&' } else { '?' };
  format!("{}{}{}={}", endpoint, separator, QUERY_PARAM, encode_get_param(query))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_encode_get_param_alphabet() {
    assert_eq!(encode_get_param(&[0xfb, 0xff]), "-_8");
    assert_eq!(decode_get_param("-_8").unwrap(), [0xfb, 0xff]);
  }

  #[test]
  fn test_get_url() {
    // Query for "www.example.com" from RFC 8484 Section 4.1.1.
    let query = [
      0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
      3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
      0, 1, 0, 1,
    ];

    assert_eq!(
      get_url("https://dnsserver.example.net/dns-query", &query),
      "https://dnsserver.example.net/dns-query?dns=AAABAAABAAAAAAAAA3d3dwdleGFtcGxlA2NvbQAAAQAB",
    );
    assert!(get_url("https://doh.example/q?ct", &query).starts_with("https://doh.example/q?ct&dns="));
  }
}
