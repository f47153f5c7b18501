//! 거래대금 상위 명령 (연속조회 지원).

use anyhow::{Context, Result};
use serde::Serialize;
use stockboard_analytics::format::{
    format_number_str, format_rate, format_trading_amount, RankChange,
};
use stockboard_core::types::lenient::parse_signed_int;
use stockboard_core::{MarketType, TradePriceRankItem, TradeRankQuery, Venue};
use stockboard_data::MarketDataSource;
use tracing::{debug, info};

use super::output::{separator, to_json, truncate, OutputFormat};

/// 거래대금 상위 명령 인자.
#[derive(Debug)]
pub struct RanksArgs {
    pub market: String,
    pub include_managed: bool,
    pub venue: String,
    /// 최대 조회 페이지 수 (최소 1)
    pub pages: usize,
    pub format: OutputFormat,
}

impl RanksArgs {
    pub fn to_query(&self) -> Result<TradeRankQuery> {
        let market: MarketType = self
            .market
            .parse()
            .with_context(|| format!("Invalid market: {}. Use: 000, 001, 101", self.market))?;
        let venue: Venue = self
            .venue
            .parse()
            .with_context(|| format!("Invalid venue: {}. Use: 1, 2, 3", self.venue))?;
        Ok(TradeRankQuery {
            market,
            include_managed: self.include_managed,
            venue,
            ..Default::default()
        })
    }
}

/// 여러 페이지를 이어 받은 결과.
#[derive(Debug, Clone, Serialize)]
pub struct RankListing {
    pub items: Vec<TradePriceRankItem>,
    pub pages: usize,
    /// 더 받을 페이지가 남아 있는지
    pub has_more: bool,
}

/// `cont_yn`/`next_key`를 따라 최대 `max_pages`까지 조회합니다.
pub async fn fetch_pages(
    source: &dyn MarketDataSource,
    query: TradeRankQuery,
    max_pages: usize,
) -> Result<RankListing> {
    let max_pages = max_pages.max(1);
    let mut items = Vec::new();
    let mut pages = 0;
    let mut next = Some(query);
    let mut has_more = false;

    while let Some(query) = next.take() {
        let page = source
            .fetch_trade_price_rank(&query)
            .await
            .with_context(|| format!("Failed to fetch trade-price ranks (page {})", pages + 1))?;
        pages += 1;
        debug!(page = pages, count = page.items.len(), "거래대금 상위 페이지 수신");

        let following = query.next_page(&page);
        items.extend(page.items);
        has_more = following.is_some();
        if pages < max_pages {
            next = following;
        }
    }

    info!(pages, count = items.len(), has_more, "거래대금 상위 조회 완료");
    Ok(RankListing {
        items,
        pages,
        has_more,
    })
}

pub async fn run_ranks(source: &dyn MarketDataSource, args: &RanksArgs) -> Result<String> {
    let query = args.to_query()?;
    let listing = fetch_pages(source, query, args.pages).await?;
    match args.format {
        OutputFormat::Table => Ok(format_table(&listing)),
        OutputFormat::Json => to_json(&listing),
    }
}

fn format_table(listing: &RankListing) -> String {
    let mut output = format!(
        "{:<5} {:<6} {:<8} {:<20} {:>10} {:>9} {:>14} {:>12}\n",
        "RANK", "CHG", "CODE", "NAME", "PRICE", "RATE", "VOLUME", "VALUE"
    );
    output.push_str(&separator(91));

    for item in &listing.items {
        let value = parse_signed_int(&item.trading_value)
            .map(format_trading_amount)
            .unwrap_or_else(|| item.trading_value.clone());
        output.push_str(&format!(
            "{:<5} {:<6} {:<8} {:<20} {:>10} {:>9} {:>14} {:>12}\n",
            item.current_rank,
            RankChange::between(&item.current_rank, &item.previous_rank).symbol(),
            item.stock_code,
            truncate(&item.stock_name, 20),
            format_number_str(&item.current_price),
            format_rate(&item.change_rate),
            format_number_str(&item.volume),
            value,
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Total: {} stocks ({} pages)",
        listing.items.len(),
        listing.pages
    ));
    if listing.has_more {
        output.push_str(", --pages를 늘리면 더 볼 수 있습니다");
    }
    output
}
