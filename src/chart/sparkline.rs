//! 스칼라 시계열 스파크라인 매퍼

use crate::chart::Point;

/// 논리 캔버스 크기
pub const WIDTH: f64 = 100.0;
pub const HEIGHT: f64 = 30.0;

// 상하 패딩
const V_PADDING: f64 = 2.0;

/// 스칼라 시계열을 스파크라인 좌표로 변환한다.
///
/// 샘플이 2개 미만이면 그릴 것이 없으므로 None. 모든 값이 같으면
/// (범위 0) 전부 세로 중앙선에 놓인다. 그 외에는 min~max를 패딩을 뺀
/// 세로 밴드에 선형 매핑하고, 가로는 인덱스 비례로 고르게 배치한다.
pub fn map_series(samples: &[f64]) -> Option<Vec<Point>> {
    if samples.len() < 2 {
        return None;
    }

    let max_val = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_val = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let range = max_val - min_val;

    let band = HEIGHT - 2.0 * V_PADDING;
    let step = WIDTH / (samples.len() - 1) as f64;

    let points = samples
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let y = if range == 0.0 {
                HEIGHT / 2.0
            } else {
                (HEIGHT - V_PADDING) - (value - min_val) / range * band
            };
            Point {
                x: i as f64 * step,
                y,
            }
        })
        .collect();

    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::to_svg_points;

    #[test]
    fn test_too_few_samples_yield_nothing() {
        assert!(map_series(&[]).is_none());
        assert!(map_series(&[42.0]).is_none());
    }

    #[test]
    fn test_flat_series_maps_to_mid_line() {
        let points = map_series(&[5.0, 5.0, 5.0]).unwrap();

        assert_eq!(points.len(), 3);
        for point in &points {
            assert_eq!(point.y, HEIGHT / 2.0);
        }
    }

    #[test]
    fn test_extremes_sit_at_padding_bounds() {
        let points = map_series(&[0.0, 10.0]).unwrap();

        // 최소값은 아래 패딩 경계, 최대값은 위 패딩 경계
        assert_eq!(points[0].y, HEIGHT - 2.0);
        assert_eq!(points[1].y, 2.0);
    }

    #[test]
    fn test_horizontal_spacing_is_even() {
        let points = map_series(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[2].x, WIDTH / 2.0);
        assert_eq!(points[4].x, WIDTH);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let samples = [10.0, 45.0, 90.0];

        assert_eq!(map_series(&samples), map_series(&samples));
    }

    #[test]
    fn test_svg_points_format() {
        let points = map_series(&[0.0, 10.0]).unwrap();
        let svg = to_svg_points(&points);

        assert_eq!(svg, "0,28 100,2");
    }
}
