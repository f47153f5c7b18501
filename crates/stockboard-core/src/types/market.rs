//! 조회 파라미터 코드.
//!
//! 원격 API는 시장/거래소/매매구분/투자자 구분을 숫자 코드 문자열로 받습니다.
//! 각 enum의 `code()`가 쿼리 파라미터 값이며, `FromStr`은 코드와
//! 사람이 읽는 이름(영문/한글)을 모두 허용합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// 거래대금 순위 조회용 시장 구분 (`mrkt_tp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarketType {
    /// 전체
    #[default]
    All,
    /// 코스피
    Kospi,
    /// 코스닥
    Kosdaq,
}

impl MarketType {
    pub fn code(&self) -> &'static str {
        match self {
            MarketType::All => "000",
            MarketType::Kospi => "001",
            MarketType::Kosdaq => "101",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MarketType::All => "전체",
            MarketType::Kospi => "코스피",
            MarketType::Kosdaq => "코스닥",
        }
    }
}

impl FromStr for MarketType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "000" | "all" | "전체" => Ok(MarketType::All),
            "001" | "kospi" | "코스피" => Ok(MarketType::Kospi),
            "101" | "kosdaq" | "코스닥" => Ok(MarketType::Kosdaq),
            other => Err(BoardError::Parse(format!(
                "Invalid market: {}. Supported: 000 (all), 001 (kospi), 101 (kosdaq)",
                other
            ))),
        }
    }
}

/// 투자자별 매매 조회용 시장 구분 (`mrkt_tp`). 전체 조회는 지원되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarketSegment {
    /// 코스피
    #[default]
    Kospi,
    /// 코스닥
    Kosdaq,
}

impl MarketSegment {
    pub fn code(&self) -> &'static str {
        match self {
            MarketSegment::Kospi => "001",
            MarketSegment::Kosdaq => "101",
        }
    }
}

impl fmt::Display for MarketSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketSegment::Kospi => write!(f, "KOSPI"),
            MarketSegment::Kosdaq => write!(f, "KOSDAQ"),
        }
    }
}

impl FromStr for MarketSegment {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "001" | "kospi" | "코스피" => Ok(MarketSegment::Kospi),
            "101" | "kosdaq" | "코스닥" => Ok(MarketSegment::Kosdaq),
            other => Err(BoardError::Parse(format!(
                "Invalid market segment: {}. Supported: 001 (kospi), 101 (kosdaq)",
                other
            ))),
        }
    }
}

/// 리포트 화면의 시장 선택. 선택에 따라 조회할 시장 구분 목록이 정해집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMarket {
    #[default]
    All,
    Kospi,
    Kosdaq,
}

impl ReportMarket {
    /// 순매수 조회를 나눠 보낼 시장 구분 목록.
    pub fn segments(&self) -> Vec<MarketSegment> {
        match self {
            ReportMarket::All => vec![MarketSegment::Kospi, MarketSegment::Kosdaq],
            ReportMarket::Kospi => vec![MarketSegment::Kospi],
            ReportMarket::Kosdaq => vec![MarketSegment::Kosdaq],
        }
    }
}

impl FromStr for ReportMarket {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "전체" => Ok(ReportMarket::All),
            "kospi" | "코스피" => Ok(ReportMarket::Kospi),
            "kosdaq" | "코스닥" => Ok(ReportMarket::Kosdaq),
            other => Err(BoardError::Parse(format!(
                "Invalid report market: {}. Supported: all, kospi, kosdaq",
                other
            ))),
        }
    }
}

/// 거래소 구분 (`stex_tp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Venue {
    /// 한국거래소
    #[default]
    Krx,
    /// 넥스트레이드
    Nxt,
    /// 통합
    Integrated,
}

impl Venue {
    pub fn code(&self) -> &'static str {
        match self {
            Venue::Krx => "1",
            Venue::Nxt => "2",
            Venue::Integrated => "3",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Venue::Krx => write!(f, "KRX"),
            Venue::Nxt => write!(f, "NXT"),
            Venue::Integrated => write!(f, "통합"),
        }
    }
}

impl FromStr for Venue {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "krx" => Ok(Venue::Krx),
            "2" | "nxt" => Ok(Venue::Nxt),
            "3" | "integrated" | "all" | "통합" => Ok(Venue::Integrated),
            other => Err(BoardError::Parse(format!(
                "Invalid venue: {}. Supported: 1 (KRX), 2 (NXT), 3 (integrated)",
                other
            ))),
        }
    }
}

/// 매매 구분 (`trde_tp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TradeDirection {
    /// 순매도
    NetSell,
    /// 순매수
    #[default]
    NetBuy,
}

impl TradeDirection {
    pub fn code(&self) -> &'static str {
        match self {
            TradeDirection::NetSell => "1",
            TradeDirection::NetBuy => "2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TradeDirection::NetSell => "순매도",
            TradeDirection::NetBuy => "순매수",
        }
    }
}

impl FromStr for TradeDirection {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "sell" | "net-sell" | "순매도" => Ok(TradeDirection::NetSell),
            "2" | "buy" | "net-buy" | "순매수" => Ok(TradeDirection::NetBuy),
            other => Err(BoardError::Parse(format!(
                "Invalid trade direction: {}. Supported: buy, sell",
                other
            ))),
        }
    }
}

/// 투자자 구분 (`invsr_tp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InvestorClass {
    /// 외국인
    #[default]
    Foreign,
    /// 기관계
    Institution,
    /// 개인
    Individual,
}

impl InvestorClass {
    pub fn code(&self) -> &'static str {
        match self {
            InvestorClass::Foreign => "9000",
            InvestorClass::Institution => "1000",
            InvestorClass::Individual => "8000",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvestorClass::Foreign => "외국인",
            InvestorClass::Institution => "기관",
            InvestorClass::Individual => "개인",
        }
    }
}

impl FromStr for InvestorClass {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "9000" | "foreign" | "외국인" => Ok(InvestorClass::Foreign),
            "1000" | "institution" | "기관" => Ok(InvestorClass::Institution),
            "8000" | "individual" | "개인" => Ok(InvestorClass::Individual),
            other => Err(BoardError::Parse(format!(
                "Invalid investor class: {}. Supported: foreign, institution, individual",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for market in [MarketType::All, MarketType::Kospi, MarketType::Kosdaq] {
            assert_eq!(market.code().parse::<MarketType>().unwrap(), market);
        }
        for venue in [Venue::Krx, Venue::Nxt, Venue::Integrated] {
            assert_eq!(venue.code().parse::<Venue>().unwrap(), venue);
        }
        for class in [
            InvestorClass::Foreign,
            InvestorClass::Institution,
            InvestorClass::Individual,
        ] {
            assert_eq!(class.code().parse::<InvestorClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_names_are_accepted() {
        assert_eq!("코스닥".parse::<MarketSegment>().unwrap(), MarketSegment::Kosdaq);
        assert_eq!("buy".parse::<TradeDirection>().unwrap(), TradeDirection::NetBuy);
        assert_eq!("Foreign".parse::<InvestorClass>().unwrap(), InvestorClass::Foreign);
        assert!("000".parse::<MarketSegment>().is_err());
    }

    #[test]
    fn test_report_market_segments() {
        assert_eq!(
            ReportMarket::All.segments(),
            vec![MarketSegment::Kospi, MarketSegment::Kosdaq]
        );
        assert_eq!(ReportMarket::Kosdaq.segments(), vec![MarketSegment::Kosdaq]);
    }
}
