//! Textual pre-pass that makes Jupiter payloads acceptable to the protobuf
//! JSON mapping.
//!
//! The upstream API emits bare enum labels (`"high"`, `"ExactIn"`) and JSON
//! `null`, while the message types only accept fully-qualified enum constant
//! names and reject `null` for plain string fields. Rewriting happens on the
//! raw bytes, before any parsing.
//!
//! The replacement is a substring replace, not a structural walk: a string
//! value that happens to contain one of the patterns is rewritten as well.

/// Ordered `(pattern, replacement)` pairs applied by [`normalize`].
const REPLACEMENTS: &[(&[u8], &[u8])] = &[
    // Price API confidence level
    (
        br#""confidenceLevel":"high""#,
        br#""confidenceLevel":"CONFIDENCE_LEVEL_HIGH""#,
    ),
    (
        br#""confidenceLevel":"medium""#,
        br#""confidenceLevel":"CONFIDENCE_LEVEL_MEDIUM""#,
    ),
    (
        br#""confidenceLevel":"low""#,
        br#""confidenceLevel":"CONFIDENCE_LEVEL_LOW""#,
    ),
    // Swap API mode
    (
        br#""swapMode":"ExactIn""#,
        br#""swapMode":"SWAP_MODE_EXACTIN""#,
    ),
    (
        br#""swapMode":"ExactOut""#,
        br#""swapMode":"SWAP_MODE_EXACTOUT""#,
    ),
    // Nulls, whatever field they follow
    (b":null", br#":"""#),
];

/// Returns a normalized copy of `raw`. The input is never modified.
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    REPLACEMENTS
        .iter()
        .fold(raw.to_vec(), |acc, (from, to)| replace_all(&acc, from, to))
}

/// Byte-level `str::replace`, so payloads that are not valid UTF-8 pass through.
fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(pos) = find(rest, from) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
    }
    out.extend_from_slice(rest);

    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        find(haystack, needle).is_some()
    }

    #[test]
    fn test_confidence_level_rewritten() {
        let raw = br#"{"extraInfo":{"confidenceLevel":"high","depth":{}}}"#;
        let out = normalize(raw);

        assert!(contains(&out, br#""confidenceLevel":"CONFIDENCE_LEVEL_HIGH""#));
        assert!(!contains(&out, br#""confidenceLevel":"high""#));
    }

    #[test]
    fn test_every_confidence_level() {
        for (label, name) in [
            ("high", "CONFIDENCE_LEVEL_HIGH"),
            ("medium", "CONFIDENCE_LEVEL_MEDIUM"),
            ("low", "CONFIDENCE_LEVEL_LOW"),
        ] {
            let raw = format!(r#"{{"a":{{"confidenceLevel":"{label}"}},"b":{{"confidenceLevel":"{label}"}}}}"#);
            let expected = format!(r#"{{"a":{{"confidenceLevel":"{name}"}},"b":{{"confidenceLevel":"{name}"}}}}"#);
            assert_eq!(normalize(raw.as_bytes()), expected.into_bytes());
        }
    }

    #[test]
    fn test_null_becomes_empty_string() {
        assert_eq!(normalize(br#"{"a":null,"b":1}"#), br#"{"a":"","b":1}"#.to_vec());
    }

    #[test]
    fn test_swap_mode() {
        assert_eq!(
            normalize(br#"{"swapMode":"ExactIn"}"#),
            br#"{"swapMode":"SWAP_MODE_EXACTIN"}"#.to_vec()
        );
        assert_eq!(
            normalize(br#"{"swapMode":"ExactOut"}"#),
            br#"{"swapMode":"SWAP_MODE_EXACTOUT"}"#.to_vec()
        );
    }

    #[test]
    fn test_idempotent() {
        let raw = br#"{"data":{"x":{"extraInfo":{"confidenceLevel":"medium","lastSwappedPrice":null}}},"swapMode":"ExactOut","platformFee":null}"#;
        let once = normalize(raw);
        let twice = normalize(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_untouched_when_nothing_matches() {
        let inputs: [&[u8]; 5] = [
            b"",
            br#"{"price":"150.00","type":"derivedPrice"}"#,
            br#"{"confidenceLevel":"HIGH"}"#,
            br#"{"swapMode": "ExactIn"}"#,
            &[0xff, 0xfe, b'n', b'u', b'l', b'l'],
        ];
        for raw in inputs {
            assert_eq!(normalize(raw), raw.to_vec());
        }
    }

    #[test]
    fn test_rewrites_inside_string_values() {
        // Purely textual: a matching substring inside a string is rewritten too.
        let out = normalize(br#"{"note":"x:null"}"#);
        assert_eq!(out, br#"{"note":"x:"""}"#.to_vec());
        // The rewrite can leave a string value unbalanced.
        assert!(serde_json::from_slice::<serde_json::Value>(&out).is_err());
    }

    #[test]
    fn test_input_not_mutated() {
        let raw = br#"{"a":null}"#.to_vec();
        let copy = raw.clone();
        let _ = normalize(&raw);

        assert_eq!(raw, copy);
    }
}
