//! 차트 도형을 SVG 문서로 직렬화합니다.

use super::geometry::{ChartGeometry, AXIS_COLOR, GRID_COLOR};

const FONT_SIZE: u32 = 9;

/// SVG 속성용 좌표 표기 (소수점 둘째 자리, 불필요한 0 제거).
fn num(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// SVG 문서를 생성합니다.
///
/// 그리는 순서: 격자선, 캔들, 가격 라벨, 날짜 라벨, 호버 영역, 십자선, 요약.
pub fn render(geometry: &ChartGeometry) -> String {
    let layout = &geometry.layout;
    let plot_right = layout.padding.left + layout.plot_width();
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\">\n",
        num(layout.width),
        num(layout.height),
        num(layout.width),
        num(layout.height)
    ));

    for tick in &geometry.price_ticks {
        svg.push_str(&format!(
            "  <line class=\"grid\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"0.5\" stroke-dasharray=\"3 3\"/>\n",
            num(layout.padding.left),
            num(tick.y),
            num(plot_right),
            num(tick.y),
            GRID_COLOR
        ));
    }

    for candle in &geometry.candles {
        let color = candle.direction.color();
        let fill = if candle.is_filled() { color } else { "none" };
        svg.push_str(&format!("  <g class=\"candle\" data-index=\"{}\">\n", candle.index));
        svg.push_str(&format!(
            "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            num(candle.center_x),
            num(candle.wick_top),
            num(candle.center_x),
            num(candle.wick_bottom),
            color,
            num(candle.wick_width)
        ));
        svg.push_str(&format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            num(candle.body_x),
            num(candle.body_y),
            num(candle.body_width),
            num(candle.body_height),
            fill,
            color,
            num(candle.body_stroke_width)
        ));
        svg.push_str("  </g>\n");
    }

    for tick in &geometry.price_ticks {
        svg.push_str(&format!(
            "  <text class=\"price-label\" x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            num(layout.padding.left - 4.0),
            num(tick.y + 4.0),
            FONT_SIZE,
            AXIS_COLOR,
            escape(&tick.label)
        ));
    }

    for tick in &geometry.date_ticks {
        svg.push_str(&format!(
            "  <text class=\"date-label\" x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            num(tick.x),
            num(layout.height - 4.0),
            tick.anchor.as_str(),
            FONT_SIZE,
            AXIS_COLOR,
            escape(&tick.label)
        ));
    }

    for slot in &geometry.hover_slots {
        svg.push_str(&format!(
            "  <rect class=\"hover-slot\" data-index=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"transparent\"/>\n",
            slot.index,
            num(slot.x),
            num(slot.y),
            num(slot.width),
            num(slot.height)
        ));
    }

    if let Some(crosshair) = &geometry.crosshair {
        svg.push_str(&format!(
            "  <line class=\"crosshair\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"0.8\" stroke-dasharray=\"3 2\"/>\n",
            num(crosshair.x),
            num(crosshair.y_top),
            num(crosshair.x),
            num(crosshair.y_bottom),
            AXIS_COLOR
        ));
    }

    if let Some(summary) = &geometry.summary {
        svg.push_str(&format!(
            "  <text class=\"summary\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            num(layout.width / 2.0),
            num(layout.padding.top - 6.0),
            FONT_SIZE + 2,
            AXIS_COLOR,
            escape(&summary.text())
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
