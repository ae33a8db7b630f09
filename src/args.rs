use crate::config::{
    NO_PROXY_ENV_VAR, PRICE_API_BASE_ENV_VAR, SWAP_API_BASE_ENV_VAR, TIMEOUT_ENV_VAR,
    TOKEN_API_BASE_ENV_VAR,
};
use clap::{Args, Parser, ValueHint};
use std::path::PathBuf;

/// Jupiter proto client demo
///
/// Calls the Jupiter price, quote and token APIs, decodes the responses into
/// protobuf message types and prints a summary of each.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub client: ClientArgs,
}

#[derive(Args, Debug)]
pub struct ClientArgs {
    /// Path to environment file (default: ./.env). Can also use APP_ENV_FILE.
    #[arg(
        long,
        value_hint = ValueHint::FilePath,
        default_value = ".env",
        env = "APP_ENV_FILE"
    )]
    pub env_file: PathBuf,

    /// Price API endpoint (default: https://api.jup.ag/price/v2)
    #[arg(long, env = PRICE_API_BASE_ENV_VAR, value_hint = ValueHint::Url)]
    pub price_api_base: Option<String>,

    /// Swap API root (default: https://quote-api.jup.ag/v6)
    #[arg(long, env = SWAP_API_BASE_ENV_VAR, value_hint = ValueHint::Url)]
    pub swap_api_base: Option<String>,

    /// Token API root (default: https://tokens.jup.ag)
    #[arg(long, env = TOKEN_API_BASE_ENV_VAR, value_hint = ValueHint::Url)]
    pub token_api_base: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[arg(long, env = TIMEOUT_ENV_VAR)]
    pub timeout: Option<u64>,

    /// Do not use the system proxy settings
    #[arg(long, env = NO_PROXY_ENV_VAR, default_value = "false")]
    pub no_proxy: bool,
}
