//! Normalize-then-decode for Jupiter payloads.

use crate::normalize::normalize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A payload that still failed to decode after normalization.
///
/// `raw` holds the untouched body parsed as untyped JSON, when it parses at
/// all, so callers can show what the upstream actually sent.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct DecodeError {
    pub source: serde_json::Error,
    pub raw: Option<Value>,
}

/// Normalizes `raw` and decodes it into `M`.
pub fn decode_normalized<M: DeserializeOwned>(raw: &[u8]) -> Result<M, DecodeError> {
    let normalized = normalize(raw);

    serde_json::from_slice::<M>(&normalized).map_err(|source| DecodeError {
        source,
        raw: serde_json::from_slice::<Value>(raw).ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::price::{ConfidenceLevel, PriceResponse};
    use crate::proto::swap::{QuoteResponse, SwapMode};
    use serde_json::json;

    #[test]
    fn test_upstream_labels_decode() {
        let raw = br#"{"data":{"SOL":{"price":"150.00","type":"derivedPrice","extraInfo":{"confidenceLevel":"medium","lastSwappedPrice":null}}},"timeTaken":0.002}"#;
        let resp: PriceResponse = decode_normalized(raw).unwrap();

        let sol = &resp.data["SOL"];
        assert_eq!(sol.price, "150.00");
        let extra = sol.extra_info.as_ref().unwrap();
        assert_eq!(extra.confidence_level(), ConfidenceLevel::Medium);
        assert!(extra.last_swapped_price.is_none());
    }

    #[test]
    fn test_upstream_swap_mode_decodes() {
        let raw = br#"{"inAmount":"1000","outAmount":"7","swapMode":"ExactOut","platformFee":null,"routePlan":[]}"#;
        let quote: QuoteResponse = decode_normalized(raw).unwrap();

        assert_eq!(quote.swap_mode(), SwapMode::Exactout);
        assert!(quote.platform_fee.is_none());
        assert!(quote.route_plan.is_empty());
    }

    #[test]
    fn test_failure_carries_raw_dump() {
        // A price entry of `null` becomes `""`, which is not a message.
        let raw = br#"{"data":{"invalid-token-address":null},"timeTaken":1}"#;
        let err = decode_normalized::<PriceResponse>(raw).unwrap_err();

        assert_eq!(
            err.raw,
            Some(json!({"data": {"invalid-token-address": null}, "timeTaken": 1}))
        );
    }

    #[test]
    fn test_failure_without_json_has_no_dump() {
        let err = decode_normalized::<PriceResponse>(b"<html>bad gateway</html>").unwrap_err();
        assert!(err.raw.is_none());
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_unknown_confidence_is_an_error() {
        let raw = br#"{"data":{"SOL":{"extraInfo":{"confidenceLevel":"extreme"}}}}"#;
        assert!(decode_normalized::<PriceResponse>(raw).is_err());
    }
}
