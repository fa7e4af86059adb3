use std::fmt::Write as _;

use kurbo::{Point, Rect};

use crate::foundation::error::{WipeError, WipeResult};

const EPS: f64 = 1e-9;

/// Visible region of a panel as a four-point polygon.
///
/// Corner coordinates are fractions of the panel's own box, `(0, 0)` at the top-left
/// and `(1, 1)` at the bottom-right. Geometry is recomputed on every progress change
/// and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipGeometry {
    /// Top-left corner.
    pub top_left: Point,
    /// Top-right corner.
    pub top_right: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
    /// Bottom-left corner.
    pub bottom_left: Point,
}

impl ClipGeometry {
    /// Whole panel visible.
    pub const FULL_OPEN: Self = Self::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    );

    /// Zero-height band on the top edge (hidden, ready to wipe in downward).
    pub const COLLAPSED_TOP: Self = Self::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 0.0),
    );

    /// Zero-height band on the bottom edge (hidden after wiping up and out).
    pub const COLLAPSED_BOTTOM: Self = Self::new(
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    );

    /// Corners in clockwise order starting at the top-left.
    pub const fn new(
        top_left: Point,
        top_right: Point,
        bottom_right: Point,
        bottom_left: Point,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Corner-wise linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            top_left: self.top_left.lerp(other.top_left, t),
            top_right: self.top_right.lerp(other.top_right, t),
            bottom_right: self.bottom_right.lerp(other.bottom_right, t),
            bottom_left: self.bottom_left.lerp(other.bottom_left, t),
        }
    }

    /// Axis-aligned bounds of the polygon in unit-box coordinates.
    pub fn visible_rect(&self) -> Rect {
        let [a, b, c, d] = self.corners();
        Rect::from_points(a, b).union_pt(c).union_pt(d)
    }

    /// Visible fraction of the panel's area.
    pub fn visible_fraction(&self) -> f64 {
        self.visible_rect().area()
    }

    /// True when the polygon encloses the whole unit box.
    pub fn is_fully_open(&self) -> bool {
        self.approx_eq(&Self::FULL_OPEN)
    }

    /// True when nothing of the panel is visible.
    pub fn is_collapsed(&self) -> bool {
        let r = self.visible_rect();
        r.width() <= EPS || r.height() <= EPS
    }

    /// Corner-wise equality within a small tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.corners()
            .iter()
            .zip(other.corners().iter())
            .all(|(a, b)| (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS)
    }

    /// CSS `clip-path` value, e.g. `polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)`.
    pub fn to_css_polygon(&self) -> String {
        let mut out = String::from("polygon(");
        for (i, p) in self.corners().iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{} {}", fmt_pct(p.x), fmt_pct(p.y));
        }
        out.push(')');
        out
    }

    /// Parse the form produced by [`ClipGeometry::to_css_polygon`].
    pub fn from_css_polygon(s: &str) -> WipeResult<Self> {
        let body = s
            .trim()
            .strip_prefix("polygon(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| WipeError::validation(format!("not a polygon(...) value: '{s}'")))?;

        let points = body
            .split(',')
            .map(parse_point)
            .collect::<WipeResult<Vec<_>>>()?;
        let [top_left, top_right, bottom_right, bottom_left]: [Point; 4] =
            points.try_into().map_err(|v: Vec<Point>| {
                WipeError::validation(format!("clip polygon needs 4 points, got {}", v.len()))
            })?;

        Ok(Self::new(top_left, top_right, bottom_right, bottom_left))
    }
}

fn parse_point(s: &str) -> WipeResult<Point> {
    let mut parts = s.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(WipeError::validation(format!(
            "clip point must be 'X% Y%', got '{}'",
            s.trim()
        )));
    };
    Ok(Point::new(parse_pct(x)?, parse_pct(y)?))
}

fn parse_pct(s: &str) -> WipeResult<f64> {
    let v = s
        .strip_suffix('%')
        .ok_or_else(|| WipeError::validation(format!("expected percentage, got '{s}'")))?
        .parse::<f64>()
        .map_err(|_| WipeError::validation(format!("invalid percentage '{s}'")))?;
    if !v.is_finite() {
        return Err(WipeError::validation(format!(
            "percentage must be finite, got '{s}'"
        )));
    }
    Ok(v / 100.0)
}

fn fmt_pct(fraction: f64) -> String {
    let pct = (fraction * 100.0 * 10_000.0).round() / 10_000.0;
    if pct == 0.0 {
        // Avoid "-0%".
        return "0%".to_string();
    }
    format!("{pct}%")
}

#[cfg(test)]
#[path = "../../tests/unit/clip/geometry.rs"]
mod tests;
