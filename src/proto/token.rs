//! Token API metadata messages.

use crate::utils::serialization::de_number;
use serde::Deserialize;

/// Body of a successful `GET /token/{address}`.
///
/// Authority fields come back as `null` for most tokens; after normalization
/// they decode as empty strings.
#[derive(Clone, PartialEq, prost::Message, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenInfo {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub symbol: String,
    #[prost(int32, tag = "4")]
    pub decimals: i32,
    #[prost(string, tag = "5")]
    #[serde(rename = "logoURI", alias = "logoUri", alias = "logo_uri")]
    pub logo_uri: String,
    #[prost(string, repeated, tag = "6")]
    pub tags: Vec<String>,
    #[prost(double, tag = "7")]
    #[serde(alias = "daily_volume", deserialize_with = "de_number")]
    pub daily_volume: f64,
    #[prost(string, tag = "8")]
    #[serde(alias = "created_at")]
    pub created_at: String,
    #[prost(string, tag = "9")]
    #[serde(alias = "freeze_authority")]
    pub freeze_authority: String,
    #[prost(string, tag = "10")]
    #[serde(alias = "mint_authority")]
    pub mint_authority: String,
    #[prost(string, tag = "11")]
    #[serde(alias = "permanent_delegate")]
    pub permanent_delegate: String,
    #[prost(string, tag = "12")]
    #[serde(alias = "minted_at")]
    pub minted_at: String,
}

pub mod services {
    //! Request/response envelopes for `GET /token/{address}`.

    use super::TokenInfo;
    use crate::proto::Empty;

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct TokenAddressGetRequest {
        /// Mint address of the token.
        #[prost(string, tag = "1")]
        pub address: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct TokenAddressGetResponse {
        #[prost(oneof = "token_address_get_response::Response", tags = "1, 2")]
        pub response: Option<token_address_get_response::Response>,
    }

    impl TokenAddressGetResponse {
        pub fn token_info_200(&self) -> Option<&TokenInfo> {
            match &self.response {
                Some(token_address_get_response::Response::TokenInfo200(info)) => Some(info),
                _ => None,
            }
        }

        pub fn empty_404(&self) -> Option<&Empty> {
            match &self.response {
                Some(token_address_get_response::Response::Empty404(empty)) => Some(empty),
                _ => None,
            }
        }
    }

    pub mod token_address_get_response {
        use super::TokenInfo;
        use crate::proto::Empty;

        #[derive(Clone, PartialEq, prost::Oneof)]
        pub enum Response {
            #[prost(message, tag = "1")]
            TokenInfo200(TokenInfo),
            #[prost(message, tag = "2")]
            Empty404(Empty),
        }
    }
}
