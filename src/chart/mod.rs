//! 차트 좌표 매퍼
//!
//! 숫자 시계열을 고정 크기 논리 캔버스 위의 좌표로 바꾼다.
//! 두 매퍼 모두 순수 함수이며 I/O나 상태가 없다.

pub mod candlestick;
pub mod sparkline;

pub use candlestick::map_candles;
pub use sparkline::map_series;

use serde::{Deserialize, Serialize};

/// 캔버스 위의 한 점
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// SVG polyline의 points 속성 문자열로 변환
pub fn to_svg_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<String>>()
        .join(" ")
}
