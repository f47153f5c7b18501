//! 기간 리포트 명령.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use stockboard_analytics::format::{
    format_flow_amount, format_number, format_number_str, format_rate, format_trading_amount,
};
use stockboard_core::{AggregatedStock, MergedFlowRecord, ReportMarket};
use stockboard_data::{DailyReport, ReportCoordinator, ReportRequest, ReportSection};
use tracing::info;

use super::output::{separator, to_json, truncate, OutputFormat};
use super::{resolve_range, REPORT_WINDOW_DAYS};

/// 리포트 명령 인자.
#[derive(Debug)]
pub struct ReportArgs {
    pub start: Option<String>,
    pub end: Option<String>,
    pub market: String,
    pub format: OutputFormat,
}

impl ReportArgs {
    /// 조회 조건으로 변환합니다.
    pub fn to_request(&self, today: NaiveDate) -> Result<ReportRequest> {
        let (start, end) = resolve_range(
            self.start.as_deref(),
            self.end.as_deref(),
            today,
            REPORT_WINDOW_DAYS,
        )?;
        let market: ReportMarket = self
            .market
            .parse()
            .with_context(|| format!("Invalid market: {}. Use: all, kospi, kosdaq", self.market))?;
        Ok(ReportRequest { start, end, market })
    }
}

/// 리포트를 조립해 출력 문자열을 만듭니다.
pub async fn run_report(
    coordinator: &ReportCoordinator,
    args: &ReportArgs,
    today: NaiveDate,
) -> Result<String> {
    let request = args.to_request(today)?;
    let report = coordinator
        .build(request)
        .await
        .context("Failed to build report")?;

    info!(
        fetched_days = report.fetched_days(),
        business_days = report.business_days.len(),
        "리포트 생성"
    );

    match args.format {
        OutputFormat::Table => Ok(format_report(&report)),
        OutputFormat::Json => to_json(&report),
    }
}

/// 리포트 전체를 표로 출력합니다.
pub fn format_report(report: &DailyReport) -> String {
    let mut output = String::new();
    let market = match report.request.market {
        ReportMarket::All => "전체",
        ReportMarket::Kospi => "코스피",
        ReportMarket::Kosdaq => "코스닥",
    };
    output.push_str(&format!(
        "기간: {} ~ {} ({})\n",
        report.request.start, report.request.end, market
    ));
    output.push_str(&format!(
        "거래일: {}/{}일 조회\n\n",
        report.fetched_days(),
        report.business_days.len()
    ));

    output.push_str("[거래대금 상위]\n");
    output.push_str(&format_trading_section(&report.trading));
    output.push_str("\n[외국인 순매수 상위]\n");
    output.push_str(&format_flow_section(&report.foreign));
    output.push_str("\n[기관 순매수 상위]\n");
    output.push_str(&format_flow_section(&report.institution));
    output
}

fn section_status<T>(section: &ReportSection<T>) -> Option<&'static str> {
    if section.is_failed() {
        Some("데이터를 불러오지 못했습니다.\n")
    } else if section.items.is_empty() {
        Some("데이터가 없습니다.\n")
    } else {
        None
    }
}

fn format_trading_section(section: &ReportSection<AggregatedStock>) -> String {
    if let Some(status) = section_status(section) {
        return status.to_string();
    }

    let mut output = format!(
        "{:<4} {:<8} {:<20} {:>12} {:>6} {:>10} {:>9}\n",
        "#", "CODE", "NAME", "AMOUNT", "DAYS", "PRICE", "RATE"
    );
    output.push_str(&separator(75));
    for (i, stock) in section.items.iter().enumerate() {
        output.push_str(&format!(
            "{:<4} {:<8} {:<20} {:>12} {:>6} {:>10} {:>9}\n",
            i + 1,
            stock.stock_code,
            truncate(&stock.stock_name, 20),
            format_trading_amount(stock.total_amount),
            stock.days_count,
            format_number_str(&stock.latest_price),
            format_rate(&stock.latest_change_rate),
        ));
    }
    if section.failed > 0 {
        output.push_str(&format!("(조회 실패 {}건 제외)\n", section.failed));
    }
    output
}

fn format_flow_section(section: &ReportSection<MergedFlowRecord>) -> String {
    if let Some(status) = section_status(section) {
        return status.to_string();
    }

    let mut output = format!(
        "{:<4} {:<8} {:<20} {:>12} {:>14} {:>10} {:>9}\n",
        "#", "CODE", "NAME", "NET_AMOUNT", "NET_QTY", "PRICE", "RATE"
    );
    output.push_str(&separator(83));
    for (i, record) in section.items.iter().enumerate() {
        output.push_str(&format!(
            "{:<4} {:<8} {:<20} {:>12} {:>14} {:>10} {:>9}\n",
            i + 1,
            record.stock_code,
            truncate(&record.stock_name, 20),
            format_flow_amount(record.net_amount),
            format_number(record.net_quantity),
            format_number_str(&record.current_price),
            format_rate(&record.change_rate),
        ));
    }
    if section.failed > 0 {
        output.push_str(&format!("(시장 {}곳 조회 실패)\n", section.failed));
    }
    output
}
