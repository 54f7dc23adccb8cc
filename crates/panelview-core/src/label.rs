use crate::geom::{Point, panel_xy, point};
use crate::text::TextBounds;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub label: String,
    /// Point on the axis just outside the outer ring.
    pub anchor: Point,
    pub align: TextAlign,
    /// Text draw origin: the anchor shifted so the glyph box is vertically centered on it.
    pub baseline: Point,
    pub bounds: TextBounds,
}

/// Whole compass degrees of `angle`, rotated by a quarter turn and normalised to `0..360`.
///
/// The fractional part is truncated toward zero before normalising, so e.g. `-0.5°` maps
/// to `0`, not `359`.
pub fn compass_degrees(angle: f64) -> i32 {
    let deg = (angle - FRAC_PI_2).to_degrees() as i32;
    (deg + 360).rem_euclid(360)
}

/// `[0, 45]` and `[315, 360]` lean left-aligned (right side of the chart), `[135, 225]`
/// right-aligned (left side), everything else centered (top and bottom).
pub fn align_for_degrees(deg: i32) -> TextAlign {
    if (0..=45).contains(&deg) || (315..=360).contains(&deg) {
        TextAlign::Left
    } else if (135..=225).contains(&deg) {
        TextAlign::Right
    } else {
        TextAlign::Center
    }
}

pub fn place_label(
    label: &str,
    angle: f64,
    center: Point,
    outer_radius: f64,
    bounds: TextBounds,
) -> LabelPlacement {
    let height = bounds.height();
    let anchor = panel_xy(center, outer_radius + height, angle);
    let baseline = point(anchor.x, anchor.y + height / 2.0 - bounds.max.y);
    LabelPlacement {
        label: label.to_string(),
        anchor,
        align: align_for_degrees(compass_degrees(angle)),
        baseline,
        bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Box2;
    use std::f64::consts::PI;

    #[test]
    fn cardinal_axes_align_away_from_the_chart() {
        // angles of a four-axis chart: top, right, bottom, left
        assert_eq!(compass_degrees(PI), 90);
        assert_eq!(align_for_degrees(compass_degrees(PI)), TextAlign::Center);
        assert_eq!(align_for_degrees(compass_degrees(FRAC_PI_2)), TextAlign::Left);
        assert_eq!(align_for_degrees(compass_degrees(0.0)), TextAlign::Center);
        assert_eq!(align_for_degrees(compass_degrees(-FRAC_PI_2)), TextAlign::Right);
    }

    #[test]
    fn truncation_happens_before_normalising() {
        assert_eq!(compass_degrees(FRAC_PI_2 - 0.5_f64.to_radians()), 0);
        assert_eq!(compass_degrees(FRAC_PI_2 - 1.5_f64.to_radians()), 359);
    }

    #[test]
    fn label_sits_outside_the_ring_by_its_height() {
        let bounds = Box2::new(point(0.0, -8.0), point(30.0, 2.0));
        let placed = place_label("Speed", PI, point(100.0, 100.0), 50.0, bounds);
        assert!((placed.anchor.x - 100.0).abs() < 1e-9);
        assert!((placed.anchor.y - 40.0).abs() < 1e-9);
        assert!((placed.baseline.y - 43.0).abs() < 1e-9);
        assert_eq!(placed.align, TextAlign::Center);
    }
}
