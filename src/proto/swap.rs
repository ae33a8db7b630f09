//! Swap API v6 quote messages.

use crate::utils::serialization::{de_enum, de_number, de_opt_message};
use serde::{Deserialize, Deserializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SwapMode {
    Unspecified = 0,
    Exactin = 1,
    Exactout = 2,
}

impl SwapMode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "SWAP_MODE_UNSPECIFIED",
            Self::Exactin => "SWAP_MODE_EXACTIN",
            Self::Exactout => "SWAP_MODE_EXACTOUT",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "SWAP_MODE_UNSPECIFIED" => Some(Self::Unspecified),
            "SWAP_MODE_EXACTIN" => Some(Self::Exactin),
            "SWAP_MODE_EXACTOUT" => Some(Self::Exactout),
            _ => None,
        }
    }
}

fn de_swap_mode<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    de_enum(deserializer, SwapMode::from_str_name)
}

/// Body of a successful `GET /quote`. Amounts are raw token units as decimal strings.
#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteResponse {
    #[prost(string, tag = "1")]
    #[serde(alias = "input_mint")]
    pub input_mint: String,
    #[prost(string, tag = "2")]
    #[serde(alias = "in_amount")]
    pub in_amount: String,
    #[prost(string, tag = "3")]
    #[serde(alias = "output_mint")]
    pub output_mint: String,
    #[prost(string, tag = "4")]
    #[serde(alias = "out_amount")]
    pub out_amount: String,
    #[prost(string, tag = "5")]
    #[serde(alias = "other_amount_threshold")]
    pub other_amount_threshold: String,
    #[prost(enumeration = "SwapMode", tag = "6")]
    #[serde(alias = "swap_mode", deserialize_with = "de_swap_mode")]
    pub swap_mode: i32,
    #[prost(int32, tag = "7")]
    #[serde(alias = "slippage_bps")]
    pub slippage_bps: i32,
    #[prost(message, optional, tag = "8")]
    #[serde(alias = "platform_fee", deserialize_with = "de_opt_message")]
    pub platform_fee: Option<PlatformFee>,
    #[prost(string, tag = "9")]
    #[serde(alias = "price_impact_pct")]
    pub price_impact_pct: String,
    #[prost(message, repeated, tag = "10")]
    #[serde(alias = "route_plan")]
    pub route_plan: Vec<RoutePlanStep>,
    #[prost(uint64, tag = "11")]
    #[serde(alias = "context_slot", deserialize_with = "de_number")]
    pub context_slot: u64,
    #[prost(double, tag = "12")]
    #[serde(alias = "time_taken", deserialize_with = "de_number")]
    pub time_taken: f64,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformFee {
    #[prost(string, tag = "1")]
    pub amount: String,
    #[prost(int32, tag = "2")]
    #[serde(alias = "fee_bps")]
    pub fee_bps: i32,
}

/// One hop of the route plan.
#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutePlanStep {
    #[prost(message, optional, tag = "1")]
    #[serde(alias = "swap_info", deserialize_with = "de_opt_message")]
    pub swap_info: Option<SwapInfo>,
    /// Share of the input routed through this step.
    #[prost(int32, tag = "2")]
    pub percent: i32,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwapInfo {
    #[prost(string, tag = "1")]
    #[serde(alias = "amm_key")]
    pub amm_key: String,
    /// DEX name, e.g. "Whirlpool".
    #[prost(string, tag = "2")]
    pub label: String,
    #[prost(string, tag = "3")]
    #[serde(alias = "input_mint")]
    pub input_mint: String,
    #[prost(string, tag = "4")]
    #[serde(alias = "output_mint")]
    pub output_mint: String,
    #[prost(string, tag = "5")]
    #[serde(alias = "in_amount")]
    pub in_amount: String,
    #[prost(string, tag = "6")]
    #[serde(alias = "out_amount")]
    pub out_amount: String,
    #[prost(string, tag = "7")]
    #[serde(alias = "fee_amount")]
    pub fee_amount: String,
    #[prost(string, tag = "8")]
    #[serde(alias = "fee_mint")]
    pub fee_mint: String,
}

pub mod services {
    //! Request/response envelopes for `GET /quote`.

    use super::QuoteResponse;

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct QuoteGetRequest {
        #[prost(string, tag = "1")]
        pub input_mint: String,
        #[prost(string, tag = "2")]
        pub output_mint: String,
        /// Raw input amount, e.g. lamports for SOL.
        #[prost(uint64, tag = "3")]
        pub amount: u64,
        #[prost(int32, tag = "4")]
        pub slippage_bps: i32,
        /// Upstream spelling (`ExactIn` / `ExactOut`), not the enum constant.
        #[prost(string, tag = "5")]
        pub swap_mode: String,
        #[prost(string, repeated, tag = "6")]
        pub dexes: Vec<String>,
        #[prost(bool, tag = "7")]
        pub only_direct_routes: bool,
        #[prost(int32, tag = "8")]
        pub platform_fee_bps: i32,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct QuoteGetResponse {
        #[prost(oneof = "quote_get_response::Response", tags = "1")]
        pub response: Option<quote_get_response::Response>,
    }

    impl QuoteGetResponse {
        pub fn quote_response_200(&self) -> Option<&QuoteResponse> {
            match &self.response {
                Some(quote_get_response::Response::QuoteResponse200(quote)) => Some(quote),
                None => None,
            }
        }
    }

    pub mod quote_get_response {
        use super::QuoteResponse;

        #[derive(Clone, PartialEq, prost::Oneof)]
        pub enum Response {
            #[prost(message, tag = "1")]
            QuoteResponse200(QuoteResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUOTE: &str = r#"{
        "inputMint": "So11111111111111111111111111111111111111112",
        "inAmount": "1000000000",
        "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
        "outAmount": "147210000",
        "otherAmountThreshold": "146473950",
        "swapMode": "SWAP_MODE_EXACTIN",
        "slippageBps": 50,
        "platformFee": "",
        "priceImpactPct": "0.0001",
        "routePlan": [
            {
                "swapInfo": {
                    "ammKey": "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj",
                    "label": "Raydium CLMM",
                    "inputMint": "So11111111111111111111111111111111111111112",
                    "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                    "inAmount": "1000000000",
                    "outAmount": "147210000",
                    "feeAmount": "40000",
                    "feeMint": "So11111111111111111111111111111111111111112"
                },
                "percent": 100
            }
        ],
        "contextSlot": 290000000,
        "timeTaken": 0.012
    }"#;

    #[test]
    fn test_decode_quote() {
        let quote: QuoteResponse = serde_json::from_str(QUOTE).unwrap();

        assert_eq!(quote.in_amount, "1000000000");
        assert_eq!(quote.out_amount, "147210000");
        assert_eq!(quote.swap_mode(), SwapMode::Exactin);
        assert_eq!(quote.slippage_bps, 50);
        assert!(quote.platform_fee.is_none());
        assert_eq!(quote.context_slot, 290_000_000);
        assert_eq!(quote.route_plan.len(), 1);
        assert_eq!(quote.route_plan[0].percent, 100);
        assert_eq!(
            quote.route_plan[0].swap_info.as_ref().unwrap().label,
            "Raydium CLMM"
        );
    }

    #[test]
    fn test_platform_fee_present() {
        let raw = r#"{"platformFee":{"amount":"1200","feeBps":20}}"#;
        let quote: QuoteResponse = serde_json::from_str(raw).unwrap();

        let fee = quote.platform_fee.unwrap();
        assert_eq!(fee.amount, "1200");
        assert_eq!(fee.fee_bps, 20);
    }

    #[test]
    fn test_upstream_swap_mode_rejected() {
        assert!(serde_json::from_str::<QuoteResponse>(r#"{"swapMode":"ExactIn"}"#).is_err());
    }

    #[test]
    fn test_context_slot_as_string() {
        let quote: QuoteResponse = serde_json::from_str(r#"{"contextSlot":"42"}"#).unwrap();
        assert_eq!(quote.context_slot, 42);
    }
}
