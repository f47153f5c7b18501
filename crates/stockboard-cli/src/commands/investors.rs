//! 투자자별 매매 상위 명령.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use stockboard_analytics::format::{
    format_flow_amount, format_number, format_number_str, format_rate, PriceDirection,
};
use stockboard_analytics::InvestorFlowMerger;
use stockboard_core::{
    InvestorClass, InvestorFlowQuery, MarketSegment, MergedFlowRecord, TradeDirection, Venue,
};
use stockboard_data::MarketDataSource;
use tracing::info;

use super::output::{separator, to_json, truncate, OutputFormat};
use super::resolve_range;

/// 투자자별 매매 기본 조회 기간 (당일).
pub const INVESTOR_WINDOW_DAYS: i64 = 0;

/// 투자자별 매매 명령 인자.
#[derive(Debug)]
pub struct InvestorsArgs {
    pub investor: String,
    pub direction: String,
    pub segment: String,
    pub venue: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub top_n: usize,
    pub format: OutputFormat,
}

impl InvestorsArgs {
    pub fn to_query(&self, today: NaiveDate) -> Result<InvestorFlowQuery> {
        let (start, end) = resolve_range(
            self.start.as_deref(),
            self.end.as_deref(),
            today,
            INVESTOR_WINDOW_DAYS,
        )?;
        let investor: InvestorClass = self.investor.parse().with_context(|| {
            format!(
                "Invalid investor: {}. Use: foreign, institution, individual",
                self.investor
            )
        })?;
        let direction: TradeDirection = self
            .direction
            .parse()
            .with_context(|| format!("Invalid direction: {}. Use: buy, sell", self.direction))?;
        let segment: MarketSegment = self
            .segment
            .parse()
            .with_context(|| format!("Invalid segment: {}. Use: kospi, kosdaq", self.segment))?;
        let venue: Venue = self
            .venue
            .parse()
            .with_context(|| format!("Invalid venue: {}. Use: 1, 2, 3", self.venue))?;

        Ok(InvestorFlowQuery {
            start,
            end,
            direction,
            segment,
            investor,
            venue,
        })
    }
}

pub async fn run_investors(
    source: &dyn MarketDataSource,
    args: &InvestorsArgs,
    today: NaiveDate,
) -> Result<String> {
    let query = args.to_query(today)?;
    let records = source
        .fetch_investor_flow(&query)
        .await
        .context("Failed to fetch investor trades")?;
    info!(count = records.len(), investor = ?query.investor, "투자자별 매매 수신");

    let merged =
        InvestorFlowMerger::with_top_n(args.top_n).merge_for(query.direction, &[records]);
    match args.format {
        OutputFormat::Table => Ok(format_table(&query, &merged)),
        OutputFormat::Json => to_json(&merged),
    }
}

fn format_table(query: &InvestorFlowQuery, records: &[MergedFlowRecord]) -> String {
    let mut output = format!(
        "{} {} · {} · {} ~ {}\n\n",
        query.investor.display_name(),
        query.direction.display_name(),
        query.venue,
        query.start,
        query.end
    );
    output.push_str(&format!(
        "{:<4} {:<8} {:<20} {:>12} {:>14} {:>10} {:>10} {:>9}\n",
        "#", "CODE", "NAME", "NET_AMOUNT", "NET_QTY", "AVG_PRICE", "PRICE", "RATE"
    ));
    output.push_str(&separator(94));

    for (i, record) in records.iter().enumerate() {
        let marker = match PriceDirection::from_sign_code(&record.price_sign) {
            PriceDirection::Up => "▲",
            PriceDirection::Down => "▼",
            PriceDirection::Flat => " ",
        };
        output.push_str(&format!(
            "{:<4} {:<8} {:<20} {:>12} {:>14} {:>10} {:>10} {}{:>8}\n",
            i + 1,
            record.stock_code,
            truncate(&record.stock_name, 20),
            format_flow_amount(record.net_amount),
            format_number(record.net_quantity),
            format_number_str(&record.avg_acquisition_price),
            format_number_str(&record.current_price),
            marker,
            format_rate(&record.change_rate),
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} stocks", records.len()));
    output
}
