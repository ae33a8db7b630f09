use crate::args::ClientArgs;
use anyhow::{bail, Context, Result};
use derive_builder::Builder;
use dialoguer::console::style;
use reqwest::Url;
use std::env;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_PRICE_API_BASE: &str = "https://api.jup.ag/price/v2";
pub const DEFAULT_SWAP_API_BASE: &str = "https://quote-api.jup.ag/v6";
pub const DEFAULT_TOKEN_API_BASE: &str = "https://tokens.jup.ag";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const PRICE_API_BASE_ENV_VAR: &str = "JUPITER_PRICE_API_BASE";
pub const SWAP_API_BASE_ENV_VAR: &str = "JUPITER_SWAP_API_BASE";
pub const TOKEN_API_BASE_ENV_VAR: &str = "JUPITER_TOKEN_API_BASE";
pub const TIMEOUT_ENV_VAR: &str = "JUPITER_TIMEOUT_SECS";
pub const NO_PROXY_ENV_VAR: &str = "JUPITER_NO_PROXY";

#[derive(Builder, Clone, Debug)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ClientConfig {
    /// Price API endpoint, queried as-is
    #[builder(setter(into), default = "DEFAULT_PRICE_API_BASE.to_string()")]
    pub price_api_base: String,
    /// Swap API root, `/quote` is appended
    #[builder(setter(into), default = "DEFAULT_SWAP_API_BASE.to_string()")]
    pub swap_api_base: String,
    /// Token API root, `/token/{address}` is appended
    #[builder(setter(into), default = "DEFAULT_TOKEN_API_BASE.to_string()")]
    pub token_api_base: String,
    /// Deadline applied by the HTTP client to every request
    #[builder(default = "Duration::from_secs(DEFAULT_TIMEOUT_SECS)")]
    pub timeout: Duration,
    /// Ignore the system proxy settings (`HTTP_PROXY` and friends)
    #[builder(default)]
    pub no_proxy: bool,
}

impl ClientConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        for base in [
            &self.price_api_base,
            &self.swap_api_base,
            &self.token_api_base,
        ]
        .into_iter()
        .flatten()
        {
            validate_base_url(base).map_err(|e| e.to_string())?;
        }

        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err("timeout must be greater than zero".to_string());
            }
        }

        Ok(())
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Resolves the configuration: CLI flag, then environment (including the
    /// `.env` file), then the built-in default.
    pub fn setup(args: ClientArgs) -> Result<ClientConfig> {
        let _ = dotenvy::from_filename(&args.env_file);

        let mut builder = Self::builder();

        if let Some(base) = args.price_api_base.or_else(|| env_value(PRICE_API_BASE_ENV_VAR)) {
            builder.price_api_base(base);
        }
        if let Some(base) = args.swap_api_base.or_else(|| env_value(SWAP_API_BASE_ENV_VAR)) {
            builder.swap_api_base(base);
        }
        if let Some(base) = args.token_api_base.or_else(|| env_value(TOKEN_API_BASE_ENV_VAR)) {
            builder.token_api_base(base);
        }

        let timeout_secs = match args.timeout {
            Some(secs) => Some(secs),
            None => env_value(TIMEOUT_ENV_VAR)
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .with_context(|| format!("{TIMEOUT_ENV_VAR} must be a number of seconds"))
                })
                .transpose()?,
        };
        if let Some(secs) = timeout_secs {
            builder.timeout(Duration::from_secs(secs));
        }

        // clap saw the environment before the `.env` file was loaded.
        builder.no_proxy(resolve_no_proxy(args.no_proxy, env_value(NO_PROXY_ENV_VAR)));

        let config = builder
            .build()
            .context("Failed to build client configuration")?;

        config.print_summary();

        Ok(config)
    }

    fn print_summary(&self) {
        let kv = |k: &str, v: &str| {
            format!(
                "{} {} {}",
                style("✔").green().bold(),
                style(k).bold(),
                style(format!("· {}", v)).dim()
            )
        };

        info!(target: "plain", "{}", kv("Price API", &self.price_api_base));
        info!(target: "plain", "{}", kv("Swap API", &self.swap_api_base));
        info!(target: "plain", "{}", kv("Token API", &self.token_api_base));
        info!(target: "plain", "{}", kv("Timeout", &format!("{}s", self.timeout.as_secs())));
        if self.no_proxy {
            info!(target: "plain", "{}", kv("System proxy", "ignored"));
        }
    }
}

fn env_value(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn resolve_no_proxy(flag: bool, env: Option<String>) -> bool {
    flag || env.is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
}

/// Base URLs must be absolute http(s) URLs without query or fragment.
pub fn validate_base_url(input: &str) -> Result<()> {
    let s = input.trim();

    if s.is_empty() {
        bail!("API base URL cannot be empty.");
    }

    let url = Url::parse(s).with_context(|| format!("Invalid API base URL: {s}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("API base URL must use http:// or https://, got {s}");
    }
    if url.query().is_some() || url.fragment().is_some() {
        bail!("API base URL must not carry a query or fragment: {s}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::builder().build().unwrap();

        assert_eq!(config.price_api_base, DEFAULT_PRICE_API_BASE);
        assert_eq!(config.swap_api_base, DEFAULT_SWAP_API_BASE);
        assert_eq!(config.token_api_base, DEFAULT_TOKEN_API_BASE);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.no_proxy);
    }

    #[test]
    fn test_builder_rejects_bad_urls() {
        assert!(ClientConfig::builder()
            .price_api_base("api.jup.ag/price/v2")
            .build()
            .is_err());
        assert!(ClientConfig::builder()
            .swap_api_base("ftp://quote-api.jup.ag")
            .build()
            .is_err());
        assert!(ClientConfig::builder()
            .token_api_base("https://tokens.jup.ag?x=1")
            .build()
            .is_err());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        assert!(ClientConfig::builder()
            .timeout(Duration::ZERO)
            .build()
            .is_err());
    }

    #[test]
    fn test_local_base_accepted() {
        let config = ClientConfig::builder()
            .price_api_base("http://127.0.0.1:8080/price/v2")
            .build()
            .unwrap();
        assert_eq!(config.price_api_base, "http://127.0.0.1:8080/price/v2");
    }

    #[test]
    fn test_resolve_no_proxy() {
        assert!(resolve_no_proxy(true, None));
        assert!(resolve_no_proxy(false, Some("true".to_string())));
        assert!(resolve_no_proxy(false, Some(" TRUE ".to_string())));
        assert!(resolve_no_proxy(false, Some("1".to_string())));
        assert!(!resolve_no_proxy(false, Some("false".to_string())));
        assert!(!resolve_no_proxy(false, None));
    }

    #[test]
    fn test_setup_reads_no_proxy_from_env_file() {
        let env_file =
            std::env::temp_dir().join(format!("jupiter-demo-{}.env", std::process::id()));
        std::fs::write(&env_file, format!("{NO_PROXY_ENV_VAR}=true\n")).unwrap();

        let args = ClientArgs {
            env_file: env_file.clone(),
            price_api_base: Some("http://127.0.0.1:1/price".to_string()),
            swap_api_base: None,
            token_api_base: None,
            timeout: None,
            no_proxy: false,
        };
        let config = ClientConfig::setup(args);
        let _ = std::fs::remove_file(&env_file);

        let config = config.unwrap();
        assert!(config.no_proxy);
        assert_eq!(config.price_api_base, "http://127.0.0.1:1/price");
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("https://quote-api.jup.ag/v6").is_ok());
        assert!(validate_base_url("  ").is_err());
        assert!(validate_base_url("https://x.invalid/#frag").is_err());
    }
}
