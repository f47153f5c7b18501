//! 인터랙티브 캔들차트.
//!
//! `CandlestickChart`는 차트 한 개 분량의 시리즈와 호버 상태를 소유하며,
//! 호출할 때마다 현재 상태를 반영한 도형(`ChartGeometry`)이나 SVG를 만듭니다.
//!
//! # 예시
//!
//! ```rust,ignore
//! let mut chart = CandlestickChart::new(Arc::from(points));
//! chart.handle(PointerEvent::Enter { x: 300.0, y: 120.0 });
//! if let Some(svg) = chart.render_svg() {
//!     std::fs::write("chart.svg", svg)?;
//! }
//! ```

mod geometry;
mod hover;
mod svg;

use std::sync::Arc;

use stockboard_core::ChartPoint;
use tracing::debug;

pub use geometry::{
    date_tick_indices, CandleDirection, CandleShape, ChartGeometry, ChartLayout, Crosshair,
    DateTick, HoverSlot, HoverSummary, Padding, PriceTick, TextAnchor, AXIS_COLOR, DOWN_COLOR,
    GRID_COLOR, UP_COLOR,
};
pub use hover::{HoverState, PointerEvent};

/// 캔들차트 컴포넌트.
///
/// 호버 상태는 인스턴스마다 독립적이며 다른 차트와 공유하지 않습니다.
#[derive(Debug, Clone)]
pub struct CandlestickChart {
    series: Arc<[ChartPoint]>,
    layout: ChartLayout,
    hover: HoverState,
}

impl CandlestickChart {
    /// 기본 레이아웃(800×300)으로 생성합니다.
    pub fn new(series: Arc<[ChartPoint]>) -> Self {
        Self::with_layout(series, ChartLayout::default())
    }

    pub fn with_layout(series: Arc<[ChartPoint]>, layout: ChartLayout) -> Self {
        Self {
            series,
            layout,
            hover: HoverState::Idle,
        }
    }

    pub fn series(&self) -> &Arc<[ChartPoint]> {
        &self.series
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    /// 렌더링 가능한 시리즈인지 (포인트 2개 이상).
    pub fn is_renderable(&self) -> bool {
        self.series.len() >= 2
    }

    /// 시리즈를 교체합니다.
    ///
    /// 다른 시리즈가 들어오면 같은 인덱스가 유효하더라도 호버 상태를 초기화합니다.
    pub fn set_series(&mut self, series: Arc<[ChartPoint]>) {
        if !Arc::ptr_eq(&self.series, &series) {
            debug!(len = series.len(), "차트 시리즈 교체, 호버 초기화");
            self.hover = HoverState::Idle;
        }
        self.series = series;
    }

    /// 포인터 이벤트를 처리하고 새 상태를 돌려줍니다.
    pub fn handle(&mut self, event: PointerEvent) -> HoverState {
        let count = self.series.len();
        if count < 2 {
            self.hover = HoverState::Idle;
            return self.hover;
        }
        let layout = self.layout;
        self.hover = hover::transition(self.hover, event, |x, y| layout.slot_at(x, y, count));
        self.hover
    }

    /// i번째 캔들 위로 포인터를 옮깁니다 (슬롯 중심 좌표로 진입 이벤트 발생).
    pub fn hover_index(&mut self, index: usize) -> HoverState {
        let count = self.series.len();
        if index >= count {
            return self.hover;
        }
        let x = self.layout.center_x(index, count);
        let y = self.layout.padding.top + self.layout.plot_height() / 2.0;
        self.handle(PointerEvent::Enter { x, y })
    }

    /// 현재 상태의 도형. 포인트가 2개 미만이면 `None`.
    pub fn geometry(&self) -> Option<ChartGeometry> {
        geometry::compute(&self.series, &self.layout, self.hover.index())
    }

    /// 현재 상태의 SVG 문서. 포인트가 2개 미만이면 `None`.
    pub fn render_svg(&self) -> Option<String> {
        self.geometry().map(|g| svg::render(&g))
    }
}
