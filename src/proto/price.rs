//! Price API v2 messages.

use crate::utils::serialization::{de_enum, de_number, de_opt_message};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ConfidenceLevel {
    Unspecified = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl ConfidenceLevel {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CONFIDENCE_LEVEL_UNSPECIFIED",
            Self::High => "CONFIDENCE_LEVEL_HIGH",
            Self::Medium => "CONFIDENCE_LEVEL_MEDIUM",
            Self::Low => "CONFIDENCE_LEVEL_LOW",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "CONFIDENCE_LEVEL_UNSPECIFIED" => Some(Self::Unspecified),
            "CONFIDENCE_LEVEL_HIGH" => Some(Self::High),
            "CONFIDENCE_LEVEL_MEDIUM" => Some(Self::Medium),
            "CONFIDENCE_LEVEL_LOW" => Some(Self::Low),
            _ => None,
        }
    }
}

fn de_confidence_level<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    de_enum(deserializer, ConfidenceLevel::from_str_name)
}

/// Body of a successful `GET /price/v2`.
#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceResponse {
    /// Price entries keyed by the requested token id.
    #[prost(map = "string, message", tag = "1")]
    pub data: HashMap<String, PriceData>,
    /// Seconds the upstream spent answering.
    #[prost(double, tag = "2")]
    #[serde(alias = "time_taken", deserialize_with = "de_number")]
    pub time_taken: f64,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceData {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(rename = "type")]
    pub r#type: String,
    #[prost(string, tag = "3")]
    pub price: String,
    #[prost(message, optional, tag = "4")]
    #[serde(alias = "extra_info", deserialize_with = "de_opt_message")]
    pub extra_info: Option<ExtraInfo>,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtraInfo {
    #[prost(message, optional, tag = "1")]
    #[serde(alias = "last_swapped_price", deserialize_with = "de_opt_message")]
    pub last_swapped_price: Option<LastSwappedPrice>,
    #[prost(message, optional, tag = "2")]
    #[serde(alias = "quoted_price", deserialize_with = "de_opt_message")]
    pub quoted_price: Option<QuotedPrice>,
    #[prost(enumeration = "ConfidenceLevel", tag = "3")]
    #[serde(alias = "confidence_level", deserialize_with = "de_confidence_level")]
    pub confidence_level: i32,
    #[prost(message, optional, tag = "4")]
    #[serde(deserialize_with = "de_opt_message")]
    pub depth: Option<Depth>,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LastSwappedPrice {
    #[prost(int64, tag = "1")]
    #[serde(alias = "last_jupiter_sell_at", deserialize_with = "de_number")]
    pub last_jupiter_sell_at: i64,
    #[prost(string, tag = "2")]
    #[serde(alias = "last_jupiter_sell_price")]
    pub last_jupiter_sell_price: String,
    #[prost(int64, tag = "3")]
    #[serde(alias = "last_jupiter_buy_at", deserialize_with = "de_number")]
    pub last_jupiter_buy_at: i64,
    #[prost(string, tag = "4")]
    #[serde(alias = "last_jupiter_buy_price")]
    pub last_jupiter_buy_price: String,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuotedPrice {
    #[prost(string, tag = "1")]
    #[serde(alias = "buy_price")]
    pub buy_price: String,
    #[prost(int64, tag = "2")]
    #[serde(alias = "buy_at", deserialize_with = "de_number")]
    pub buy_at: i64,
    #[prost(string, tag = "3")]
    #[serde(alias = "sell_price")]
    pub sell_price: String,
    #[prost(int64, tag = "4")]
    #[serde(alias = "sell_at", deserialize_with = "de_number")]
    pub sell_at: i64,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Depth {
    #[prost(message, optional, tag = "1")]
    #[serde(alias = "buy_price_impact_ratio", deserialize_with = "de_opt_message")]
    pub buy_price_impact_ratio: Option<PriceImpactRatio>,
    #[prost(message, optional, tag = "2")]
    #[serde(alias = "sell_price_impact_ratio", deserialize_with = "de_opt_message")]
    pub sell_price_impact_ratio: Option<PriceImpactRatio>,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceImpactRatio {
    /// Impact ratio keyed by trade size ("10", "100", "1000").
    #[prost(map = "string, double", tag = "1")]
    pub depth: HashMap<String, f64>,
    #[prost(int64, tag = "2")]
    #[serde(deserialize_with = "de_number")]
    pub timestamp: i64,
}

pub mod services {
    //! Request/response envelopes for `GET /price/v2`.

    use super::PriceResponse;
    use crate::proto::Empty;

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct RootGetRequest {
        /// Comma-separated token ids (mint addresses).
        #[prost(string, tag = "1")]
        pub ids: String,
        #[prost(string, tag = "2")]
        pub vs_token: String,
        /// Sent verbatim, the API expects `"true"`.
        #[prost(string, tag = "3")]
        pub show_extra_info: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct RootGetResponse {
        #[prost(oneof = "root_get_response::Response", tags = "1, 2")]
        pub response: Option<root_get_response::Response>,
    }

    impl RootGetResponse {
        pub fn price_response_200(&self) -> Option<&PriceResponse> {
            match &self.response {
                Some(root_get_response::Response::PriceResponse200(price)) => Some(price),
                _ => None,
            }
        }

        pub fn empty_400(&self) -> Option<&Empty> {
            match &self.response {
                Some(root_get_response::Response::Empty400(empty)) => Some(empty),
                _ => None,
            }
        }
    }

    pub mod root_get_response {
        use super::PriceResponse;
        use crate::proto::Empty;

        #[derive(Clone, PartialEq, prost::Oneof)]
        pub enum Response {
            #[prost(message, tag = "1")]
            PriceResponse200(PriceResponse),
            #[prost(message, tag = "2")]
            Empty400(Empty),
        }
    }
}
