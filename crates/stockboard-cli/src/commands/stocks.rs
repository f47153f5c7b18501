//! 종목 목록/검색 명령.

use anyhow::{Context, Result};
use stockboard_analytics::format::format_number;
use stockboard_core::{search_stocks, Stock};
use stockboard_data::MarketDataSource;
use tracing::info;

use super::output::{separator, to_json, truncate, OutputFormat};

pub async fn run_stocks(
    source: &dyn MarketDataSource,
    search: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let stocks = source
        .fetch_stock_list()
        .await
        .context("Failed to fetch stock list")?;
    let matched = search_stocks(search.unwrap_or(""), &stocks);
    info!(total = stocks.len(), matched = matched.len(), "종목 검색");

    match format {
        OutputFormat::Table => Ok(format_table(&matched)),
        OutputFormat::Json => to_json(&matched),
    }
}

fn format_table(stocks: &[&Stock]) -> String {
    let mut output = format!(
        "{:<8} {:<24} {:<8} {:<16} {:>12}\n",
        "CODE", "NAME", "MARKET", "SECTOR", "PRICE"
    );
    output.push_str(&separator(72));

    for stock in stocks {
        let price = stock
            .current_price
            .map(|p| format_number(p.round() as i64))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<8} {:<24} {:<8} {:<16} {:>12}\n",
            stock.stock_code,
            truncate(&stock.stock_name, 24),
            stock.market.as_deref().unwrap_or("-"),
            truncate(stock.sector.as_deref().unwrap_or("-"), 16),
            price,
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} stocks", stocks.len()));
    output
}
