//! HTTP client for the Jupiter price, quote and token endpoints.
//!
//! Every successful body goes through [`decode_normalized`] before it becomes
//! a message. Calls are independent: nothing is cached or retried.

use crate::config::ClientConfig;
use crate::decode::decode_normalized;
use crate::error::ClientError;
use crate::proto::price::services::{root_get_response, RootGetRequest, RootGetResponse};
use crate::proto::price::PriceResponse;
use crate::proto::swap::services::{quote_get_response, QuoteGetRequest, QuoteGetResponse};
use crate::proto::swap::QuoteResponse;
use crate::proto::token::services::{
    token_address_get_response, TokenAddressGetRequest, TokenAddressGetResponse,
};
use crate::proto::token::TokenInfo;
use crate::proto::Empty;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

const PRICE_ENDPOINT: &str = "price";
const QUOTE_ENDPOINT: &str = "quote";
const TOKEN_ENDPOINT: &str = "token";

/// Jupiter REST client. Holds a single connection pool and the configured base URLs.
#[derive(Debug, Clone)]
pub struct JupiterClient {
    client: Client,
    config: ClientConfig,
}

impl JupiterClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder().timeout(config.timeout);
        if config.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Request {
                endpoint: "client",
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// `GET /price/v2`. A non-success status is the `Empty400` variant, not an error.
    pub async fn get_price(&self, req: &RootGetRequest) -> Result<RootGetResponse, ClientError> {
        let url = price_url(&self.config.price_api_base, req)?;
        let (status, body) = self.fetch(PRICE_ENDPOINT, url).await?;

        let response = if status.is_success() {
            let price = decode_normalized::<PriceResponse>(&body).map_err(|source| {
                ClientError::Decode {
                    endpoint: PRICE_ENDPOINT,
                    source,
                }
            })?;
            root_get_response::Response::PriceResponse200(price)
        } else {
            debug!("price: status {}, returning empty response", status);
            root_get_response::Response::Empty400(Empty {})
        };

        Ok(RootGetResponse {
            response: Some(response),
        })
    }

    /// `GET /quote`. A non-success status leaves the response unset.
    pub async fn get_quote(&self, req: &QuoteGetRequest) -> Result<QuoteGetResponse, ClientError> {
        let url = quote_url(&self.config.swap_api_base, req)?;
        let (status, body) = self.fetch(QUOTE_ENDPOINT, url).await?;

        if !status.is_success() {
            warn!("quote: status {}, no quote returned", status);
            return Ok(QuoteGetResponse { response: None });
        }

        let quote = decode_normalized::<QuoteResponse>(&body).map_err(|source| {
            ClientError::Decode {
                endpoint: QUOTE_ENDPOINT,
                source,
            }
        })?;

        Ok(QuoteGetResponse {
            response: Some(quote_get_response::Response::QuoteResponse200(quote)),
        })
    }

    /// `GET /token/{address}`. A non-success status is the `Empty404` variant.
    pub async fn get_token_info(
        &self,
        req: &TokenAddressGetRequest,
    ) -> Result<TokenAddressGetResponse, ClientError> {
        let url = token_url(&self.config.token_api_base, &req.address)?;
        let (status, body) = self.fetch(TOKEN_ENDPOINT, url).await?;

        let response = if status.is_success() {
            let info = decode_normalized::<TokenInfo>(&body).map_err(|source| {
                ClientError::Decode {
                    endpoint: TOKEN_ENDPOINT,
                    source,
                }
            })?;
            token_address_get_response::Response::TokenInfo200(info)
        } else {
            debug!("token: status {}, returning empty response", status);
            token_address_get_response::Response::Empty404(Empty {})
        };

        Ok(TokenAddressGetResponse {
            response: Some(response),
        })
    }

    /// Issues the GET and reads the whole body, whatever the status.
    async fn fetch(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<(StatusCode, Vec<u8>), ClientError> {
        debug!("{}: GET {}", endpoint, url);

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ClientError::Transport { endpoint, source })?;

        let status = resp.status();

        let body = resp
            .bytes()
            .await
            .map_err(|source| ClientError::Body { endpoint, source })?
            .to_vec();

        debug!("{}: status {}, {} bytes", endpoint, status, body.len());

        Ok((status, body))
    }
}

fn parse_base(endpoint: &'static str, base: &str) -> Result<Url, ClientError> {
    Url::parse(base.trim().trim_end_matches('/')).map_err(|e| ClientError::Request {
        endpoint,
        reason: format!("invalid base URL {base:?}: {e}"),
    })
}

/// Appends path segments, percent-encoding each one.
fn join_segments(
    endpoint: &'static str,
    mut url: Url,
    segments: &[&str],
) -> Result<Url, ClientError> {
    url.path_segments_mut()
        .map_err(|_| ClientError::Request {
            endpoint,
            reason: "base URL cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

fn with_query(mut url: Url, pairs: &[(&str, String)]) -> Url {
    if !pairs.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (key, value) in pairs {
            qp.append_pair(key, value);
        }
    }
    url
}

pub(crate) fn price_url(base: &str, req: &RootGetRequest) -> Result<Url, ClientError> {
    let url = parse_base(PRICE_ENDPOINT, base)?;

    let mut pairs = Vec::new();
    if !req.ids.is_empty() {
        pairs.push(("ids", req.ids.clone()));
    }
    if !req.vs_token.is_empty() {
        pairs.push(("vsToken", req.vs_token.clone()));
    }
    if !req.show_extra_info.is_empty() {
        pairs.push(("showExtraInfo", req.show_extra_info.clone()));
    }

    Ok(with_query(url, &pairs))
}

pub(crate) fn quote_url(base: &str, req: &QuoteGetRequest) -> Result<Url, ClientError> {
    let url = join_segments(QUOTE_ENDPOINT, parse_base(QUOTE_ENDPOINT, base)?, &["quote"])?;

    let mut pairs = vec![
        ("inputMint", req.input_mint.clone()),
        ("outputMint", req.output_mint.clone()),
        ("amount", req.amount.to_string()),
    ];
    if req.slippage_bps > 0 {
        pairs.push(("slippageBps", req.slippage_bps.to_string()));
    }
    if !req.swap_mode.is_empty() {
        pairs.push(("swapMode", req.swap_mode.clone()));
    }
    for dex in &req.dexes {
        pairs.push(("dexes", dex.clone()));
    }
    if req.only_direct_routes {
        pairs.push(("onlyDirectRoutes", "true".to_string()));
    }
    if req.platform_fee_bps > 0 {
        pairs.push(("platformFeeBps", req.platform_fee_bps.to_string()));
    }

    Ok(with_query(url, &pairs))
}

pub(crate) fn token_url(base: &str, address: &str) -> Result<Url, ClientError> {
    join_segments(
        TOKEN_ENDPOINT,
        parse_base(TOKEN_ENDPOINT, base)?,
        &["token", address],
    )
}
