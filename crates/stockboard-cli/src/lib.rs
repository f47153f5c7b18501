//! stockboard CLI.
//!
//! - 기간 리포트 (거래대금/외국인/기관)
//! - 거래대금 상위, 투자자별 매매 조회
//! - 일봉 캔들차트 SVG 출력
//! - 종목 검색, 섹터 조회/생성

pub mod commands;
