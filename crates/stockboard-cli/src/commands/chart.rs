//! 일봉 캔들차트 명령.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use stockboard_analytics::format::format_number;
use stockboard_analytics::{map_series, CandlestickChart, ChartLayout};
use stockboard_core::{ChartConfig, ChartPoint, Period};
use stockboard_data::MarketDataSource;
use tracing::info;

/// 차트 명령 인자.
#[derive(Debug)]
pub struct ChartArgs {
    pub code: String,
    pub period: String,
    /// 호버 표시할 캔들 인덱스
    pub hover: Option<usize>,
}

/// 렌더링 결과.
#[derive(Debug, Clone)]
pub struct ChartOutput {
    pub svg: String,
    /// 터미널에 출력할 요약
    pub summary: String,
}

pub async fn run_chart(
    source: &dyn MarketDataSource,
    args: &ChartArgs,
    chart_config: &ChartConfig,
    today: NaiveDate,
) -> Result<ChartOutput> {
    let period: Period = args
        .period
        .parse()
        .with_context(|| format!("Invalid period: {}. Use: 1W, 1M, 3M, 6M, 1Y", args.period))?;
    let (start, end) = period.date_range(today);

    let records = source
        .fetch_daily_chart(&args.code, start, end)
        .await
        .with_context(|| format!("Failed to fetch daily chart: {}", args.code))?;
    let series = map_series(&records, period).context("Invalid chart data")?;
    info!(code = %args.code, %period, points = series.len(), "일봉 수신");

    render(&args.code, series.into(), args.hover, chart_config)
}

/// 시리즈를 SVG로 렌더링합니다.
pub fn render(
    code: &str,
    series: Arc<[ChartPoint]>,
    hover: Option<usize>,
    chart_config: &ChartConfig,
) -> Result<ChartOutput> {
    let layout = ChartLayout::with_size(chart_config.width, chart_config.height)
        .context("Invalid chart size in config")?;
    let mut chart = CandlestickChart::with_layout(series, layout);
    if let Some(index) = hover {
        if index >= chart.series().len() {
            bail!(
                "--hover {}: 캔들 인덱스 범위를 벗어났습니다 (0..{})",
                index,
                chart.series().len()
            );
        }
        chart.hover_index(index);
    }

    let Some(geometry) = chart.geometry() else {
        bail!("차트 데이터가 부족합니다 (최소 2개 필요): {}", code);
    };
    let svg = chart.render_svg().context("Failed to render chart")?;

    let mut summary = format!(
        "{}: {}개 캔들, 가격 범위 {} ~ {}",
        code,
        geometry.candles.len(),
        format_number(geometry.price_min),
        format_number(geometry.price_max)
    );
    if let Some(hovered) = &geometry.summary {
        summary.push('\n');
        summary.push_str(&hovered.text());
    }

    Ok(ChartOutput { svg, summary })
}
