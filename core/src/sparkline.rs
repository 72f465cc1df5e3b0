//! Sparkline projection
//!
//! Maps a numeric trend series onto a fixed viewport so KPI cards can draw a
//! miniature line without axes. The x axis spreads points evenly; the y axis
//! is scaled against the series maximum with zero at the bottom edge.

use impact_types::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Projected points, in viewport units (origin top-left).
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub viewport: Viewport,
    pub points: Vec<Point>,
}

impl Sparkline {
    /// SVG path data: `M x,y L x,y ...`
    pub fn svg_path(&self) -> String {
        let mut path = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            path.push_str(&format!("{} {:.2},{:.2}", cmd, p.x, p.y));
        }
        path
    }

    /// SVG `points` attribute for a `<polyline>`
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// SVG `viewBox` matching the projection viewport
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.viewport.width, self.viewport.height)
    }
}

/// Project `series` onto `viewport`.
///
/// Degenerate input never divides by zero: a single value is placed at
/// `x = 0`, and a series whose maximum is not positive is drawn flat along
/// the bottom edge. Non-finite values count as zero.
pub fn project(series: &[f64], viewport: Viewport) -> Sparkline {
    let Viewport { width, height } = viewport;
    let values: Vec<f64> = series
        .iter()
        .map(|v| if v.is_finite() { *v } else { 0.0 })
        .collect();

    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let x_step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = if max_value > 0.0 {
                (height - (v / max_value) * height).clamp(0.0, height)
            } else {
                height
            };
            Point {
                x: i as f64 * x_step,
                y,
            }
        })
        .collect();

    Sparkline { viewport, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::default()
    }

    #[test]
    fn test_basic_projection() {
        let line = project(&[0.0, 5.0, 10.0], vp());
        assert_eq!(
            line.points,
            vec![
                Point { x: 0.0, y: 20.0 },
                Point { x: 50.0, y: 10.0 },
                Point { x: 100.0, y: 0.0 },
            ]
        );
        assert_eq!(line.svg_path(), "M 0.00,20.00 L 50.00,10.00 L 100.00,0.00");
        assert_eq!(line.polyline(), "0.00,20.00 50.00,10.00 100.00,0.00");
        assert_eq!(line.view_box(), "0 0 100 20");
    }

    #[test]
    fn test_single_point() {
        let line = project(&[5.0], vp());
        assert_eq!(line.points, vec![Point { x: 0.0, y: 0.0 }]);
    }

    #[test]
    fn test_all_zero_is_flat_on_bottom_edge() {
        let line = project(&[0.0, 0.0, 0.0], vp());
        assert_eq!(line.points.len(), 3);
        assert!(line.points.iter().all(|p| p.y == 20.0));
        assert_eq!(line.points[2].x, 100.0);
    }

    #[test]
    fn test_empty_and_non_finite() {
        assert!(project(&[], vp()).points.is_empty());

        let line = project(&[f64::NAN, 10.0], vp());
        assert_eq!(line.points[0].y, 20.0);
        assert_eq!(line.points[1].y, 0.0);
    }

    #[test]
    fn test_negative_values_stay_inside_viewport() {
        let line = project(&[-5.0, 10.0], vp());
        assert_eq!(line.points[0].y, 20.0);

        let all_negative = project(&[-3.0, -1.0], vp());
        assert!(all_negative.points.iter().all(|p| p.y == 20.0));
    }

    #[test]
    fn test_deterministic() {
        let series = [82.0, 84.0, 85.0, 87.0, 86.0, 87.0];
        assert_eq!(project(&series, vp()), project(&series, vp()));
    }
}
