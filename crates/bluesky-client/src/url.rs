//! URL percent-encoding and query-string assembly.

/// Percent-encode a string for use in a query component.
///
/// Unreserved characters (`A-Za-z0-9`, `-`, `_`, `.`, `~`) pass through,
/// space becomes `+`, and every other byte becomes `%XX` with uppercase
/// hex digits.
pub fn url_encode(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(s.len());

    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0F) as usize] as char);
            }
        }
    }

    out
}

/// Decode a string produced by [`url_encode`].
///
/// `+` becomes a space and `%XX` sequences become the byte they name.
/// Malformed escapes are passed through untouched.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (hex_val(bytes.get(i + 1)), hex_val(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: Option<&u8>) -> Option<u8> {
    match *b? {
        b @ b'0'..=b'9' => Some(b - b'0'),
        b @ b'A'..=b'F' => Some(b - b'A' + 10),
        b @ b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

/// Build a `key=value&key=value` query string with both sides encoded.
///
/// Returns an empty string for an empty parameter list.
pub fn build_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unreserved_passthrough() {
        assert_eq!(url_encode("AZaz09-_.~"), "AZaz09-_.~");
    }

    #[test]
    fn test_encode_space_is_plus() {
        assert_eq!(url_encode("a b"), "a+b");
    }

    #[test]
    fn test_encode_reserved_uppercase_hex() {
        assert_eq!(url_encode("at://x"), "at%3A%2F%2Fx");
        assert_eq!(url_encode("a=b&c"), "a%3Db%26c");
    }

    #[test]
    fn test_encode_non_ascii_bytes() {
        assert_eq!(url_encode("caf\u{E9}"), "caf%C3%A9");
    }

    #[test]
    fn test_decode_roundtrip() {
        let original = "at://did:plc:abc/app.bsky.feed.generator/whats-hot";
        assert_eq!(url_decode(&url_encode(original)), original);
    }

    #[test]
    fn test_decode_plus_is_space() {
        assert_eq!(url_decode("a+b"), "a b");
    }

    #[test]
    fn test_decode_malformed_escape_passthrough() {
        assert_eq!(url_decode("100%"), "100%");
        assert_eq!(url_decode("%zz"), "%zz");
    }

    #[test]
    fn test_build_query_pairs() {
        let params = [
            ("feed", "at://x".to_string()),
            ("limit", "3".to_string()),
        ];
        assert_eq!(build_query(&params), "feed=at%3A%2F%2Fx&limit=3");
    }

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_query(&[]), "");
    }

    #[test]
    fn test_build_query_roundtrip() {
        let params = [
            ("feed", "at://x".to_string()),
            ("limit", "3".to_string()),
        ];
        let query = build_query(&params);

        let decoded: Vec<(String, String)> = query
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap();
                (url_decode(k), url_decode(v))
            })
            .collect();

        assert_eq!(
            decoded,
            vec![
                ("feed".to_string(), "at://x".to_string()),
                ("limit".to_string(), "3".to_string()),
            ]
        );
    }
}
