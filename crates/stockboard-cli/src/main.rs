//! stockboard CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 최근 7일 리포트 (전체 시장)
//! stockboard report
//!
//! # 코스닥 리포트를 JSON으로 저장
//! stockboard report --start 2024-03-04 --end 2024-03-08 --market kosdaq -f json -o report.json
//!
//! # 거래대금 상위 3페이지
//! stockboard ranks --market 001 --pages 3
//!
//! # 삼성전자 3개월 캔들차트
//! stockboard chart 005930 --period 3M -o samsung.svg --hover 10
//!
//! # 섹터 생성
//! stockboard sectors create --code SHIP --name 조선 --market KOSPI
//! ```

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use stockboard_cli::commands::chart::{run_chart, ChartArgs};
use stockboard_cli::commands::investors::{run_investors, InvestorsArgs};
use stockboard_cli::commands::output::{write_output, OutputFormat};
use stockboard_cli::commands::ranks::{run_ranks, RanksArgs};
use stockboard_cli::commands::report::{run_report, ReportArgs};
use stockboard_cli::commands::{sectors, stocks};
use stockboard_core::{init_logging, AppConfig, LogConfig, SectorCreate, SectorFilter};
use stockboard_data::{source_from_config, ReportCoordinator};
use tracing::info;

#[derive(Parser)]
#[command(name = "stockboard")]
#[command(about = "국내 주식 시세 대시보드 CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = "config/default.toml")]
    config: String,

    /// 출력 형식 (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    format: String,

    /// 출력 파일 경로 (지정하지 않으면 stdout)
    #[arg(short, long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 기간 리포트 (거래대금 누적, 외국인/기관 순매수)
    Report {
        /// 시작 날짜 (YYYY-MM-DD, 기본: 종료일 7일 전)
        #[arg(long)]
        start: Option<String>,

        /// 종료 날짜 (YYYY-MM-DD, 기본: 오늘)
        #[arg(long)]
        end: Option<String>,

        /// 시장 (all, kospi, kosdaq)
        #[arg(short, long, default_value = "all")]
        market: String,
    },

    /// 거래대금 상위
    Ranks {
        /// 시장 구분 (000: 전체, 001: 코스피, 101: 코스닥)
        #[arg(short, long, default_value = "000")]
        market: String,

        /// 관리종목 포함
        #[arg(long)]
        include_managed: bool,

        /// 거래소 (1: KRX, 2: NXT, 3: 통합)
        #[arg(long, default_value = "1")]
        venue: String,

        /// 최대 조회 페이지 수
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// 투자자별 매매 상위
    Investors {
        /// 투자자 (foreign, institution, individual)
        #[arg(short, long, default_value = "foreign")]
        investor: String,

        /// 매매 구분 (buy, sell)
        #[arg(short, long, default_value = "buy")]
        direction: String,

        /// 시장 (kospi, kosdaq)
        #[arg(short, long, default_value = "kospi")]
        segment: String,

        /// 거래소 (1: KRX, 2: NXT, 3: 통합)
        #[arg(long, default_value = "1")]
        venue: String,

        /// 시작 날짜 (YYYY-MM-DD, 기본: 종료일)
        #[arg(long)]
        start: Option<String>,

        /// 종료 날짜 (YYYY-MM-DD, 기본: 오늘)
        #[arg(long)]
        end: Option<String>,
    },

    /// 일봉 캔들차트 (SVG)
    Chart {
        /// 종목 코드 (예: 005930)
        code: String,

        /// 기간 (1W, 1M, 3M, 6M, 1Y)
        #[arg(short, long, default_value = "3M")]
        period: String,

        /// 호버 표시할 캔들 인덱스
        #[arg(long)]
        hover: Option<usize>,
    },

    /// 종목 목록/검색
    Stocks {
        /// 검색어 (종목코드 또는 종목명)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// 섹터 관리
    Sectors {
        #[command(subcommand)]
        action: SectorAction,
    },
}

#[derive(Subcommand)]
enum SectorAction {
    /// 섹터 목록
    List {
        #[arg(short, long)]
        market: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        skip: Option<usize>,

        /// 최대 결과 수 (0 = 무제한)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// 섹터 상세
    Show {
        /// 섹터 코드
        code: String,
    },

    /// 섹터 생성
    Create {
        #[arg(long)]
        code: String,

        #[arg(long)]
        name: String,

        #[arg(short, long)]
        market: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// 섹터 레벨 (기본: 1)
        #[arg(long, default_value = "1")]
        level: u32,

        #[arg(long)]
        parent_id: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config))?;
    init_logging(LogConfig::from_settings(&config.logging))
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let format = OutputFormat::parse(&cli.format)?;
    let output = cli.output.as_deref();
    let source = source_from_config(&config.api).context("Failed to create data source")?;
    let today = Local::now().date_naive();
    info!(source = source.source_name(), %today, "stockboard 시작");

    match cli.command {
        Commands::Report { start, end, market } => {
            let coordinator = ReportCoordinator::with_config(Arc::clone(&source), &config.report);
            let args = ReportArgs {
                start,
                end,
                market,
                format,
            };
            let content = run_report(&coordinator, &args, today).await?;
            write_output(&content, output)?;
        }

        Commands::Ranks {
            market,
            include_managed,
            venue,
            pages,
        } => {
            let args = RanksArgs {
                market,
                include_managed,
                venue,
                pages,
                format,
            };
            let content = run_ranks(source.as_ref(), &args).await?;
            write_output(&content, output)?;
        }

        Commands::Investors {
            investor,
            direction,
            segment,
            venue,
            start,
            end,
        } => {
            let args = InvestorsArgs {
                investor,
                direction,
                segment,
                venue,
                start,
                end,
                top_n: config.report.top_n,
                format,
            };
            let content = run_investors(source.as_ref(), &args, today).await?;
            write_output(&content, output)?;
        }

        Commands::Chart {
            code,
            period,
            hover,
        } => {
            let args = ChartArgs {
                code,
                period,
                hover,
            };
            let chart = run_chart(source.as_ref(), &args, &config.chart, today).await?;
            match output {
                Some(path) => {
                    write_output(&chart.svg, Some(path))?;
                    println!("{}", chart.summary);
                    println!("저장 위치: {}", path);
                }
                None => write_output(&chart.svg, None)?,
            }
        }

        Commands::Stocks { search } => {
            let content = stocks::run_stocks(source.as_ref(), search.as_deref(), format).await?;
            write_output(&content, output)?;
        }

        Commands::Sectors { action } => {
            let content = match action {
                SectorAction::List {
                    market,
                    category,
                    skip,
                    limit,
                } => {
                    let filter = SectorFilter {
                        market,
                        category,
                        skip,
                        limit,
                    };
                    sectors::run_list(source.as_ref(), &filter, format).await?
                }
                SectorAction::Show { code } => {
                    sectors::run_show(source.as_ref(), &code, format).await?
                }
                SectorAction::Create {
                    code,
                    name,
                    market,
                    category,
                    level,
                    parent_id,
                } => {
                    let request = SectorCreate {
                        market,
                        category,
                        level,
                        parent_id,
                        ..SectorCreate::new(code, name)
                    };
                    sectors::run_create(source.as_ref(), &request, format).await?
                }
            };
            write_output(&content, output)?;
        }
    }

    Ok(())
}
