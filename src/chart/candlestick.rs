//! 캔들스틱 차트 매퍼
//!
//! 기술적 분석 응답의 OHLC 시계열과 세 기준 가격(진입가, 목표가,
//! 손절가)을 고정 캔버스 좌표로 변환한다. 기준선이 잘리지 않도록
//! 값 범위는 캔들 고가/저가와 세 기준 가격을 모두 포함한다.

use serde::{Deserialize, Serialize};

use crate::models::insight::PriceSample;

/// 논리 캔버스 크기
pub const WIDTH: f64 = 500.0;
pub const HEIGHT: f64 = 250.0;

// 축 라벨을 위한 패딩 (우측: 가격, 하단: 날짜)
const PAD_TOP: f64 = 20.0;
const PAD_RIGHT: f64 = 60.0;
const PAD_BOTTOM: f64 = 30.0;
const PAD_LEFT: f64 = 10.0;

/// 캔들 하나의 렌더링 좌표
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleGeometry {
    /// 심지(고가-저가 선)의 x 좌표
    pub x: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    /// 몸통(시가-종가 박스) 좌상단
    pub body_left: f64,
    pub body_top: f64,
    pub body_width: f64,
    pub body_height: f64,
    /// 종가 >= 시가. 색상 선택은 표시 계층의 몫.
    pub bullish: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceKind {
    Entry,
    Target,
    StopLoss,
}

/// 기준 가격 수평선
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceLine {
    pub kind: ReferenceKind,
    /// 통화 문자열에서 추출한 숫자 가격
    pub price: f64,
    /// 원본 표기 (라벨용)
    pub label: String,
    pub y: f64,
}

/// 가격 눈금 수평선
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLine {
    pub price: f64,
    pub y: f64,
}

/// x축 날짜 라벨 (첫/중간/마지막 캔들)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub x: f64,
    pub text: String,
}

/// 캔들스틱 차트 전체 좌표
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleChart {
    pub width: f64,
    pub height: f64,
    pub candles: Vec<CandleGeometry>,
    pub reference_lines: Vec<ReferenceLine>,
    pub grid_lines: Vec<GridLine>,
    pub axis_labels: Vec<AxisLabel>,
}

/// 자유 형식 통화 문자열에서 숫자 가격을 추출한다.
/// 숫자와 소수점 외의 문자를 전부 제거한 뒤 파싱한다.
pub fn parse_price_level(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    cleaned.parse::<f64>().ok()
}

/// OHLC 시계열과 세 기준 가격을 차트 좌표로 변환한다.
///
/// 샘플이 없거나 기준 가격을 숫자로 해석할 수 없으면 None.
/// 값 범위가 0이면 (모든 값이 동일) 모든 가격을 플롯 밴드의 세로
/// 중앙선에 놓는다. 스파크라인의 평탄 시계열 처리와 같은 정책이다.
pub fn map_candles(
    samples: &[PriceSample],
    entry_price: &str,
    target_price: &str,
    stop_loss_price: &str,
) -> Option<CandleChart> {
    if samples.is_empty() {
        return None;
    }

    let entry = parse_price_level(entry_price)?;
    let target = parse_price_level(target_price)?;
    let stop_loss = parse_price_level(stop_loss_price)?;

    let mut min_price = f64::INFINITY;
    let mut max_price = f64::NEG_INFINITY;
    for sample in samples {
        min_price = min_price.min(sample.low);
        max_price = max_price.max(sample.high);
    }
    for level in [entry, target, stop_loss] {
        min_price = min_price.min(level);
        max_price = max_price.max(level);
    }

    let range = max_price - min_price;
    let chart_width = WIDTH - PAD_LEFT - PAD_RIGHT;
    let chart_height = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let bar_width = chart_width / (samples.len() as f64 * 1.5);

    let x_at = |index: usize| -> f64 {
        if samples.len() == 1 {
            PAD_LEFT + chart_width / 2.0
        } else {
            PAD_LEFT + index as f64 * (chart_width / (samples.len() - 1) as f64)
        }
    };
    let y_at = |price: f64| -> f64 {
        if range == 0.0 {
            PAD_TOP + chart_height / 2.0
        } else {
            PAD_TOP + chart_height - (price - min_price) / range * chart_height
        }
    };

    let candles = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let x = x_at(i);
            let y_open = y_at(sample.open);
            let y_close = y_at(sample.close);
            let bullish = sample.close >= sample.open;

            CandleGeometry {
                x,
                wick_top: y_at(sample.high),
                wick_bottom: y_at(sample.low),
                body_left: x - bar_width / 2.0,
                body_top: if bullish { y_close } else { y_open },
                body_width: bar_width,
                body_height: (y_open - y_close).abs(),
                bullish,
            }
        })
        .collect();

    let reference_lines = vec![
        ReferenceLine {
            kind: ReferenceKind::Target,
            price: target,
            label: target_price.to_string(),
            y: y_at(target),
        },
        ReferenceLine {
            kind: ReferenceKind::Entry,
            price: entry,
            label: entry_price.to_string(),
            y: y_at(entry),
        },
        ReferenceLine {
            kind: ReferenceKind::StopLoss,
            price: stop_loss,
            label: stop_loss_price.to_string(),
            y: y_at(stop_loss),
        },
    ];

    let grid_lines = (0..5)
        .map(|i| {
            let price = min_price + range / 4.0 * i as f64;
            GridLine { price, y: y_at(price) }
        })
        .collect();

    let mut label_indices = vec![0, samples.len() / 2, samples.len() - 1];
    label_indices.dedup();
    let axis_labels = label_indices
        .into_iter()
        .map(|i| AxisLabel {
            x: x_at(i),
            // "YYYY-MM-DD" -> "MM-DD"
            text: samples[i].date.get(5..).unwrap_or(&samples[i].date).to_string(),
        })
        .collect();

    Some(CandleChart {
        width: WIDTH,
        height: HEIGHT,
        candles,
        reference_lines,
        grid_lines,
        axis_labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(date: &str, open: f64, high: f64, low: f64, close: f64) -> PriceSample {
        PriceSample {
            date: date.to_string(),
            open,
            high,
            low,
            close,
        }
    }

    #[test]
    fn test_parse_price_level_strips_currency_noise() {
        assert_eq!(parse_price_level("₩75,000원"), Some(75000.0));
        assert_eq!(parse_price_level("$123.45"), Some(123.45));
        assert_eq!(parse_price_level("가격 미정"), None);
        assert_eq!(parse_price_level(""), None);
    }

    #[test]
    fn test_empty_samples_yield_nothing() {
        assert!(map_candles(&[], "100", "120", "80").is_none());
    }

    #[test]
    fn test_unparsable_reference_yields_nothing() {
        let samples = vec![sample("2024-01-05", 100.0, 110.0, 95.0, 105.0)];

        assert!(map_candles(&samples, "미정", "120", "80").is_none());
    }

    #[test]
    fn test_tie_close_equals_open_is_bullish() {
        let samples = vec![
            sample("2024-01-05", 100.0, 110.0, 95.0, 100.0),
            sample("2024-01-12", 100.0, 112.0, 97.0, 108.0),
        ];

        let chart = map_candles(&samples, "100", "120", "80").unwrap();

        assert!(chart.candles[0].bullish);
        assert_eq!(chart.candles[0].body_height, 0.0);
    }

    #[test]
    fn test_bearish_candle_classification() {
        let samples = vec![
            sample("2024-01-05", 110.0, 115.0, 95.0, 100.0),
            sample("2024-01-12", 100.0, 112.0, 97.0, 108.0),
        ];

        let chart = map_candles(&samples, "100", "120", "80").unwrap();

        assert!(!chart.candles[0].bullish);
        assert!(chart.candles[1].bullish);
    }

    // 캔들 고가/저가가 기준선 안쪽에 있어도 범위는 세 기준 가격을 포함한다
    #[test]
    fn test_range_covers_all_reference_levels() {
        let samples = vec![
            sample("2024-01-05", 100.0, 105.0, 99.0, 103.0),
            sample("2024-01-12", 103.0, 106.0, 100.0, 104.0),
        ];

        let chart = map_candles(&samples, "90", "120", "80").unwrap();

        // 눈금 최솟값/최댓값이 손절가와 목표가에 걸쳐 있어야 한다
        assert_eq!(chart.grid_lines[0].price, 80.0);
        assert_eq!(chart.grid_lines[4].price, 120.0);

        // 기준선이 플롯 밴드 안에 있다
        for line in &chart.reference_lines {
            assert!(line.y >= PAD_TOP);
            assert!(line.y <= HEIGHT - PAD_BOTTOM);
        }
    }

    #[test]
    fn test_entry_level_extends_range() {
        // 진입가만 모든 값보다 낮은 경우에도 범위에 포함되어야 한다
        let samples = vec![
            sample("2024-01-05", 100.0, 105.0, 99.0, 103.0),
            sample("2024-01-12", 103.0, 106.0, 100.0, 104.0),
        ];

        let chart = map_candles(&samples, "70", "106", "99").unwrap();

        assert_eq!(chart.grid_lines[0].price, 70.0);
    }

    #[test]
    fn test_degenerate_range_maps_to_mid_line() {
        let samples = vec![
            sample("2024-01-05", 100.0, 100.0, 100.0, 100.0),
            sample("2024-01-12", 100.0, 100.0, 100.0, 100.0),
        ];

        let chart = map_candles(&samples, "100", "100", "100").unwrap();

        let mid = PAD_TOP + (HEIGHT - PAD_TOP - PAD_BOTTOM) / 2.0;
        for candle in &chart.candles {
            assert_eq!(candle.wick_top, mid);
            assert_eq!(candle.wick_bottom, mid);
        }
        for line in &chart.reference_lines {
            assert_eq!(line.y, mid);
        }
    }

    #[test]
    fn test_horizontal_layout_is_index_proportional() {
        let samples: Vec<PriceSample> = (0..5)
            .map(|i| sample("2024-01-05", 100.0, 110.0 + i as f64, 95.0, 105.0))
            .collect();

        let chart = map_candles(&samples, "100", "120", "80").unwrap();

        let chart_width = WIDTH - PAD_LEFT - PAD_RIGHT;
        assert_eq!(chart.candles[0].x, PAD_LEFT);
        assert_eq!(chart.candles[4].x, PAD_LEFT + chart_width);
        assert_eq!(chart.candles[2].x, PAD_LEFT + chart_width / 2.0);
    }

    #[test]
    fn test_axis_labels_drop_year_prefix() {
        let samples = vec![
            sample("2024-01-05", 100.0, 110.0, 95.0, 105.0),
            sample("2024-01-12", 105.0, 112.0, 100.0, 108.0),
            sample("2024-01-19", 108.0, 115.0, 103.0, 110.0),
        ];

        let chart = map_candles(&samples, "100", "120", "80").unwrap();

        let texts: Vec<&str> = chart.axis_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["01-05", "01-12", "01-19"]);
    }

    #[test]
    fn test_single_candle_is_centered() {
        let samples = vec![sample("2024-01-05", 100.0, 110.0, 95.0, 105.0)];

        let chart = map_candles(&samples, "100", "120", "80").unwrap();

        let chart_width = WIDTH - PAD_LEFT - PAD_RIGHT;
        assert_eq!(chart.candles[0].x, PAD_LEFT + chart_width / 2.0);
        assert_eq!(chart.axis_labels.len(), 1);
    }
}
