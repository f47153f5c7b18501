//! 섹터 조회/생성 명령.

use anyhow::{bail, Context, Result};
use stockboard_core::{Sector, SectorCreate, SectorFilter};
use stockboard_data::MarketDataSource;
use tracing::info;

use super::output::{separator, to_json, truncate, OutputFormat};

pub async fn run_list(
    source: &dyn MarketDataSource,
    filter: &SectorFilter,
    format: OutputFormat,
) -> Result<String> {
    let sectors = source
        .fetch_sector_list(filter)
        .await
        .context("Failed to fetch sector list")?;
    info!(count = sectors.len(), "섹터 목록 조회");

    match format {
        OutputFormat::Table => Ok(format_table(&sectors)),
        OutputFormat::Json => to_json(&sectors),
    }
}

pub async fn run_show(
    source: &dyn MarketDataSource,
    code: &str,
    format: OutputFormat,
) -> Result<String> {
    let Some(sector) = source
        .fetch_sector_detail(code)
        .await
        .with_context(|| format!("Failed to fetch sector: {}", code))?
    else {
        bail!("섹터를 찾을 수 없습니다: {}", code);
    };

    match format {
        OutputFormat::Table => Ok(format_detail(&sector)),
        OutputFormat::Json => to_json(&sector),
    }
}

pub async fn run_create(
    source: &dyn MarketDataSource,
    request: &SectorCreate,
    format: OutputFormat,
) -> Result<String> {
    let sector = source
        .create_sector(request)
        .await
        .context("Failed to create sector")?;
    info!(id = sector.id, code = %sector.code, "섹터 생성");

    match format {
        OutputFormat::Table => Ok(format!("섹터 생성 완료\n\n{}", format_detail(&sector))),
        OutputFormat::Json => to_json(&sector),
    }
}

fn format_table(sectors: &[Sector]) -> String {
    let mut output = format!(
        "{:<5} {:<8} {:<16} {:<8} {:<10} {:>6} {:>7} {:<6}\n",
        "ID", "CODE", "NAME", "MARKET", "CATEGORY", "LEVEL", "STOCKS", "ACTIVE"
    );
    output.push_str(&separator(74));

    for sector in sectors {
        output.push_str(&format!(
            "{:<5} {:<8} {:<16} {:<8} {:<10} {:>6} {:>7} {:<6}\n",
            sector.id,
            sector.code,
            truncate(&sector.name, 16),
            sector.market.as_deref().unwrap_or("-"),
            truncate(sector.category.as_deref().unwrap_or("-"), 10),
            sector.level,
            sector
                .stock_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            if sector.is_active { "✓" } else { "✗" }
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} sectors", sectors.len()));
    output
}

fn format_detail(sector: &Sector) -> String {
    let optional = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    [
        ("ID", sector.id.to_string()),
        ("코드", sector.code.clone()),
        ("이름", sector.name.clone()),
        ("시장", optional(sector.market.clone())),
        ("분류", optional(sector.category.clone())),
        ("레벨", sector.level.to_string()),
        ("상위 섹터", optional(sector.parent_id.map(|id| id.to_string()))),
        ("종목 수", optional(sector.stock_count.map(|n| n.to_string()))),
        ("활성", if sector.is_active { "예" } else { "아니오" }.to_string()),
        ("생성일", optional(sector.created_at.clone())),
    ]
    .iter()
    .map(|(label, value)| format!("{:<10} {}", label, value))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockboard_data::MockDataSource;

    #[tokio::test]
    async fn test_list_with_filter() {
        let source = MockDataSource::new();
        let filter = SectorFilter {
            market: Some("KOSDAQ".into()),
            ..Default::default()
        };
        let text = run_list(&source, &filter, OutputFormat::Table).await.unwrap();
        assert!(text.contains("BIO"));
        assert!(text.contains("GAME"));
        assert!(!text.contains("SEMI"));
        assert!(text.contains("Total: 2 sectors"));
    }

    #[tokio::test]
    async fn test_show_missing_sector() {
        let source = MockDataSource::new();
        assert!(run_show(&source, "SEMI", OutputFormat::Json).await.is_ok());
        assert!(run_show(&source, "NONE", OutputFormat::Table).await.is_err());
    }

    #[tokio::test]
    async fn test_create_then_show() {
        let source = MockDataSource::new();
        let text = run_create(&source, &SectorCreate::new("SHIP", "조선"), OutputFormat::Table)
            .await
            .unwrap();
        assert!(text.contains("섹터 생성 완료"));

        let shown = run_show(&source, "SHIP", OutputFormat::Table).await.unwrap();
        assert!(shown.contains("조선"));

        let duplicate =
            run_create(&source, &SectorCreate::new("SHIP", "조선"), OutputFormat::Table).await;
        assert!(duplicate.is_err());
    }
}
