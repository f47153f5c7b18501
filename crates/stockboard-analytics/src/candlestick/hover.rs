//! 호버 상태 머신.

use serde::{Deserialize, Serialize};

/// 차트 한 개가 소유하는 호버 상태.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "lowercase")]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(usize),
}

impl HoverState {
    /// 호버 중인 인덱스.
    pub fn index(&self) -> Option<usize> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(i) => Some(*i),
        }
    }
}

/// 차트 영역의 포인터 입력.
///
/// 좌표는 차트 캔버스 기준 (viewBox 좌표계)입니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// 마우스 진입/이동
    Enter { x: f64, y: f64 },
    /// 터치 시작 또는 버튼 누름
    Down { x: f64, y: f64 },
    /// 차트 영역 이탈
    Leave,
    /// 버튼 뗌
    Up,
    /// 터치 종료
    TouchEnd,
}

/// 상태 전이.
///
/// `slot_at`은 좌표가 속한 슬롯을 찾아주며, 어느 슬롯에도 속하지 않는
/// 진입/누름 이벤트는 상태를 바꾸지 않습니다.
pub(crate) fn transition<F>(state: HoverState, event: PointerEvent, slot_at: F) -> HoverState
where
    F: Fn(f64, f64) -> Option<usize>,
{
    match event {
        PointerEvent::Enter { x, y } | PointerEvent::Down { x, y } => {
            slot_at(x, y).map(HoverState::Hovering).unwrap_or(state)
        }
        PointerEvent::Leave | PointerEvent::Up | PointerEvent::TouchEnd => HoverState::Idle,
    }
}
