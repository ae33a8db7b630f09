//! The example calls run by the `jupiter-demo` binary.
//!
//! Each example is independent: a failure is logged and the next one runs.

use crate::client::JupiterClient;
use crate::error::ClientError;
use crate::proto::price::services::RootGetRequest;
use crate::proto::price::PriceResponse;
use crate::proto::swap::services::QuoteGetRequest;
use crate::proto::swap::QuoteResponse;
use crate::proto::token::services::TokenAddressGetRequest;
use crate::proto::token::TokenInfo;
use dialoguer::console::style;
use tracing::{error, info};

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// 1 SOL in lamports.
const QUOTE_AMOUNT: u64 = 1_000_000_000;
/// 0.5% slippage.
const QUOTE_SLIPPAGE_BPS: i32 = 50;

pub async fn run_demo(client: &JupiterClient) {
    let sep = style("◆").blue().bold();
    let title = style("Jupiter Proto Client Demo").bold();
    info!(target: "plain", "\n{sep} {title} {sep}");

    info!(target: "plain", "\n📊 Getting SOL price...");
    if let Err(e) = sol_price(client).await {
        report("Error getting price", &e);
    }

    info!(target: "plain", "\n📈 Getting SOL price with extra info...");
    if let Err(e) = sol_price_extra_info(client).await {
        report("Error getting price with extra info", &e);
    }

    info!(target: "plain", "\n🔄 Getting swap quote (SOL → USDC)...");
    if let Err(e) = sol_usdc_quote(client).await {
        report("Error getting quote", &e);
    }

    info!(target: "plain", "\n🪙 Getting token information for USDC...");
    if let Err(e) = usdc_token_info(client).await {
        report("Error getting token info", &e);
    }

    info!(target: "plain", "\n❌ Testing error handling with invalid token...");
    invalid_token_price(client).await;

    info!(target: "plain", "\n🎉 Demo completed!");
    info!(target: "plain", "\nThis demonstrates how to:");
    for line in [
        "Use protobuf message types for type-safe API calls",
        "Make HTTP requests to Jupiter's REST APIs",
        "Handle different response types and error cases",
        "Parse JSON responses into protobuf structures",
        "Normalize enum values for proper protobuf parsing",
    ] {
        info!(target: "plain", "• {line}");
    }
}

async fn sol_price(client: &JupiterClient) -> Result<(), ClientError> {
    let req = RootGetRequest {
        ids: SOL_MINT.to_string(),
        ..Default::default()
    };

    let resp = client.get_price(&req).await?;
    match resp.price_response_200() {
        Some(price) => info!(target: "plain", "{}", format_price(price, false)),
        None => info!(target: "plain", "⚠️  Price API returned no data"),
    }

    Ok(())
}

async fn sol_price_extra_info(client: &JupiterClient) -> Result<(), ClientError> {
    let req = RootGetRequest {
        ids: SOL_MINT.to_string(),
        show_extra_info: "true".to_string(),
        ..Default::default()
    };

    let resp = client.get_price(&req).await?;
    match resp.price_response_200() {
        Some(price) => info!(target: "plain", "{}", format_price(price, true)),
        None => info!(target: "plain", "⚠️  Price API returned no data"),
    }

    Ok(())
}

async fn sol_usdc_quote(client: &JupiterClient) -> Result<(), ClientError> {
    let req = QuoteGetRequest {
        input_mint: SOL_MINT.to_string(),
        output_mint: USDC_MINT.to_string(),
        amount: QUOTE_AMOUNT,
        slippage_bps: QUOTE_SLIPPAGE_BPS,
        swap_mode: "ExactIn".to_string(),
        ..Default::default()
    };

    let resp = client.get_quote(&req).await?;
    match resp.quote_response_200() {
        Some(quote) => info!(target: "plain", "{}", format_quote(quote)),
        None => info!(target: "plain", "⚠️  Swap API returned no quote"),
    }

    Ok(())
}

async fn usdc_token_info(client: &JupiterClient) -> Result<(), ClientError> {
    let req = TokenAddressGetRequest {
        address: USDC_MINT.to_string(),
    };

    let resp = client.get_token_info(&req).await?;
    if let Some(info) = resp.token_info_200() {
        info!(target: "plain", "{}", format_token(info));
    } else if resp.empty_404().is_some() {
        info!(target: "plain", "⚠️  Token not found");
    }

    Ok(())
}

async fn invalid_token_price(client: &JupiterClient) {
    let req = RootGetRequest {
        ids: "invalid-token-address".to_string(),
        ..Default::default()
    };

    match client.get_price(&req).await {
        Err(e) => info!(target: "plain", "✅ Properly handled error: {e}"),
        Ok(resp) if resp.empty_400().is_some() => {
            info!(target: "plain", "✅ Properly handled 400 error response")
        }
        Ok(_) => info!(target: "plain", "⚠️  Invalid token unexpectedly returned price data"),
    }
}

fn report(what: &str, e: &ClientError) {
    error!("{what}: {e}");
    if let Some(raw) = e.raw_payload() {
        info!(target: "plain", "Raw JSON response: {raw}");
    }
}

/// Price summary, entries ordered by token id.
pub fn format_price(price: &PriceResponse, extra_info: bool) -> String {
    let mut lines = Vec::new();
    if extra_info {
        lines.push("✅ Price data with extra info received".to_string());
    } else {
        lines.push(format!(
            "✅ Price data received (time taken: {:.3}s)",
            price.time_taken
        ));
    }

    let mut entries: Vec<_> = price.data.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (token_id, data) in entries {
        lines.push(format!("   Token: {token_id}"));
        lines.push(format!("   Price: ${}", data.price));

        if !extra_info {
            lines.push(format!("   Type: {}", data.r#type));
            continue;
        }

        if let Some(extra) = &data.extra_info {
            lines.push(format!(
                "   Confidence: {}",
                extra.confidence_level().as_str_name()
            ));
            if let Some(quoted) = extra
                .quoted_price
                .as_ref()
                .filter(|q| !q.buy_price.is_empty())
            {
                lines.push(format!("   Buy Price: ${}", quoted.buy_price));
                lines.push(format!("   Sell Price: ${}", quoted.sell_price));
            }
        }
    }

    lines.join("\n")
}

pub fn format_quote(quote: &QuoteResponse) -> String {
    let mut lines = vec![
        "✅ Quote received".to_string(),
        format!("   Input Amount: {}", quote.in_amount),
        format!("   Output Amount: {}", quote.out_amount),
        format!("   Swap Mode: {}", quote.swap_mode().as_str_name()),
        format!("   Price Impact: {}%", quote.price_impact_pct),
        format!("   Route Plan Steps: {}", quote.route_plan.len()),
    ];

    if let Some(swap_info) = quote.route_plan.first().and_then(|s| s.swap_info.as_ref()) {
        lines.push(format!("   First DEX: {}", swap_info.label));
    }

    lines.join("\n")
}

pub fn format_token(info: &TokenInfo) -> String {
    [
        "✅ Token info received:".to_string(),
        format!("   Name: {}", info.name),
        format!("   Symbol: {}", info.symbol),
        format!("   Decimals: {}", info.decimals),
        format!("   Daily Volume: ${:.2}", info.daily_volume),
    ]
    .join("\n")
}
