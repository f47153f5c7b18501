//! 캔들차트 좌표 계산.
//!
//! # 좌표계
//!
//! - 가격 범위: `[모든 저가의 최소, 모든 고가의 최대]`, 범위가 0이면 분모 1 사용
//! - `y(p) = pad.top + plot_h - (p - min) / range * plot_h` (가격이 높을수록 위쪽)
//! - 슬롯 폭 `plot_w / n`, 중심 `pad.left + (i + 0.5) * slot`
//! - 몸통 폭 `max(1, slot * 0.6)`, 몸통 높이 `max(1, |y(open) - y(close)|)`

use serde::{Deserialize, Serialize};
use stockboard_core::ChartPoint;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::format::format_number;

/// 상승 캔들 색상.
pub const UP_COLOR: &str = "#ef4444";
/// 하락 캔들 색상.
pub const DOWN_COLOR: &str = "#3b82f6";
/// 격자선 색상.
pub const GRID_COLOR: &str = "#e5e7eb";
/// 축 라벨 및 십자선 색상.
pub const AXIS_COLOR: &str = "#9ca3af";

const BODY_RATIO: f64 = 0.6;
const WICK_RATIO: f64 = 0.15;
const OUTLINE_RATIO: f64 = 0.12;
const MIN_STROKE: f64 = 0.8;

/// 차트 여백.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 16.0,
            bottom: 32.0,
            left: 60.0,
        }
    }
}

/// 차트 캔버스 크기와 여백.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 300.0,
            padding: Padding::default(),
        }
    }
}

impl ChartLayout {
    /// 기본 여백으로 크기만 지정합니다.
    ///
    /// 플롯 영역이 남지 않는 크기(여백 합 이하, 유한하지 않은 값)는 거부합니다.
    pub fn with_size(width: f64, height: f64) -> AnalyticsResult<Self> {
        let layout = Self {
            width,
            height,
            padding: Padding::default(),
        };
        let plot_ok = |extent: f64| extent.is_finite() && extent > 0.0;
        if !plot_ok(layout.plot_width()) || !plot_ok(layout.plot_height()) {
            return Err(AnalyticsError::InvalidLayout(format!("{}x{}", width, height)));
        }
        Ok(layout)
    }

    /// 플롯 영역 폭.
    pub fn plot_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    /// 플롯 영역 높이.
    pub fn plot_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    /// 슬롯 폭 (`plot_width / count`).
    pub fn slot_width(&self, count: usize) -> f64 {
        self.plot_width() / count as f64
    }

    /// i번째 슬롯의 중심 x좌표.
    pub fn center_x(&self, index: usize, count: usize) -> f64 {
        self.padding.left + (index as f64 + 0.5) * self.slot_width(count)
    }

    /// 좌표가 속한 슬롯 인덱스 (플롯 영역 밖이면 `None`).
    pub fn slot_at(&self, x: f64, y: f64, count: usize) -> Option<usize> {
        if count == 0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let top = self.padding.top;
        let bottom = top + self.plot_height();
        if y < top || y > bottom {
            return None;
        }
        let offset = x - self.padding.left;
        if offset < 0.0 || offset >= self.plot_width() {
            return None;
        }
        let index = (offset / self.slot_width(count)).floor() as usize;
        Some(index.min(count - 1))
    }
}

/// 캔들 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleDirection {
    /// 종가 ≥ 시가 (채운 몸통)
    Up,
    /// 종가 < 시가 (테두리만)
    Down,
}

impl CandleDirection {
    pub fn color(&self) -> &'static str {
        match self {
            CandleDirection::Up => UP_COLOR,
            CandleDirection::Down => DOWN_COLOR,
        }
    }
}

/// 캔들 하나의 도형.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleShape {
    pub index: usize,
    pub direction: CandleDirection,
    pub center_x: f64,
    /// 몸통 왼쪽 x
    pub body_x: f64,
    /// 몸통 위쪽 y
    pub body_y: f64,
    pub body_width: f64,
    pub body_height: f64,
    /// 몸통 테두리 두께 (상승 캔들은 0)
    pub body_stroke_width: f64,
    /// 고가 y
    pub wick_top: f64,
    /// 저가 y
    pub wick_bottom: f64,
    pub wick_width: f64,
}

impl CandleShape {
    /// 몸통을 채울지 여부.
    pub fn is_filled(&self) -> bool {
        self.direction == CandleDirection::Up
    }
}

/// 가격 격자선 및 라벨.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTick {
    pub price: f64,
    pub y: f64,
    pub label: String,
}

/// 텍스트 정렬 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// 날짜 라벨.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTick {
    pub index: usize,
    pub x: f64,
    pub label: String,
    pub anchor: TextAnchor,
}

/// 마우스 오버 감지 영역.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverSlot {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 호버 중인 캔들의 세로 십자선.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crosshair {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// 호버 중인 캔들 요약 (날짜, 시/고/저/종).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverSummary {
    pub index: usize,
    pub date_label: String,
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub close: i64,
}

impl HoverSummary {
    fn from_point(index: usize, point: &ChartPoint) -> Self {
        Self {
            index,
            date_label: point.date_label.clone(),
            open: point.open,
            high: point.high,
            low: point.low,
            close: point.close,
        }
    }

    /// 툴팁 문자열 (`1/15 시71,000 고72,000 저70,500 종71,500`).
    pub fn text(&self) -> String {
        format!(
            "{} 시{} 고{} 저{} 종{}",
            self.date_label,
            format_number(self.open),
            format_number(self.high),
            format_number(self.low),
            format_number(self.close)
        )
    }
}

/// 차트 한 장의 전체 도형.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub layout: ChartLayout,
    pub price_min: i64,
    pub price_max: i64,
    /// 가격 분모 (범위가 0이면 1)
    pub price_range: f64,
    pub slot_width: f64,
    pub candles: Vec<CandleShape>,
    pub price_ticks: Vec<PriceTick>,
    pub date_ticks: Vec<DateTick>,
    pub hover_slots: Vec<HoverSlot>,
    pub crosshair: Option<Crosshair>,
    pub summary: Option<HoverSummary>,
}

/// 가격 → y좌표 변환기.
#[derive(Debug, Clone, Copy)]
struct PriceScale {
    min: f64,
    range: f64,
    top: f64,
    height: f64,
}

impl PriceScale {
    fn y(&self, price: f64) -> f64 {
        self.top + self.height - (price - self.min) / self.range * self.height
    }
}

/// 날짜 라벨 인덱스: `0, ⌊n·0.33⌋, ⌊n·0.66⌋, n-1`.
pub fn date_tick_indices(count: usize) -> [usize; 4] {
    let n = count as f64;
    let last = count.saturating_sub(1);
    [
        0,
        ((n * 0.33).floor() as usize).min(last),
        ((n * 0.66).floor() as usize).min(last),
        last,
    ]
}

/// 포인트가 2개 미만이면 `None`.
pub(crate) fn compute(
    series: &[ChartPoint],
    layout: &ChartLayout,
    hovered: Option<usize>,
) -> Option<ChartGeometry> {
    let count = series.len();
    if count < 2 {
        return None;
    }

    let price_min = series.iter().map(|p| p.low).min()?;
    let price_max = series.iter().map(|p| p.high).max()?;
    let price_range = match i128::from(price_max) - i128::from(price_min) {
        0 => 1.0,
        diff => diff as f64,
    };

    let scale = PriceScale {
        min: price_min as f64,
        range: price_range,
        top: layout.padding.top,
        height: layout.plot_height(),
    };
    let slot_width = layout.slot_width(count);
    let body_width = (slot_width * BODY_RATIO).max(1.0);
    let wick_width = (body_width * WICK_RATIO).max(MIN_STROKE);
    let outline_width = (body_width * OUTLINE_RATIO).max(MIN_STROKE);

    let candles = series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let direction = if point.is_up() {
                CandleDirection::Up
            } else {
                CandleDirection::Down
            };
            let center_x = layout.center_x(index, count);
            let body_top = scale.y(point.open.max(point.close) as f64);
            let body_bottom = scale.y(point.open.min(point.close) as f64);

            CandleShape {
                index,
                direction,
                center_x,
                body_x: center_x - body_width / 2.0,
                body_y: body_top,
                body_width,
                body_height: (body_bottom - body_top).max(1.0),
                body_stroke_width: match direction {
                    CandleDirection::Up => 0.0,
                    CandleDirection::Down => outline_width,
                },
                wick_top: scale.y(point.high as f64),
                wick_bottom: scale.y(point.low as f64),
                wick_width,
            }
        })
        .collect();

    let price_ticks = [
        price_min as f64,
        price_min as f64 + price_range / 2.0,
        price_max as f64,
    ]
    .into_iter()
    .map(|price| PriceTick {
        price,
        y: scale.y(price),
        label: format_number(price.round() as i64),
    })
    .collect();

    let last = count - 1;
    let date_ticks = date_tick_indices(count)
        .into_iter()
        .map(|index| DateTick {
            index,
            x: layout.center_x(index, count),
            label: series[index].date_label.clone(),
            anchor: if index == 0 {
                TextAnchor::Start
            } else if index == last {
                TextAnchor::End
            } else {
                TextAnchor::Middle
            },
        })
        .collect();

    let hover_slots = (0..count)
        .map(|index| HoverSlot {
            index,
            x: layout.padding.left + index as f64 * slot_width,
            y: layout.padding.top,
            width: slot_width,
            height: layout.plot_height(),
        })
        .collect();

    let hovered = hovered.filter(|&i| i < count);
    let crosshair = hovered.map(|index| Crosshair {
        x: layout.center_x(index, count),
        y_top: layout.padding.top,
        y_bottom: layout.padding.top + layout.plot_height(),
    });
    let summary = hovered.map(|index| HoverSummary::from_point(index, &series[index]));

    Some(ChartGeometry {
        layout: *layout,
        price_min,
        price_max,
        price_range,
        slot_width,
        candles,
        price_ticks,
        date_ticks,
        hover_slots,
        crosshair,
        summary,
    })
}
