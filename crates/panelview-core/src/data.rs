use crate::geom::{Point, Polygon, panel_xy};
use crate::model::Item;
use crate::rings::AngleTable;
use serde::{Deserialize, Serialize};

/// The value-driven ring and its stroke outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPolygon {
    pub fill: Polygon,
    /// Same vertices pulled in by half the stroke width, so the stroke stays inside the fill.
    pub stroke: Polygon,
}

/// Builds the data polygon for already-validated items.
///
/// Item `i` sits at `outer_radius * ratio(i)`. Ratios are not clamped: over 1 lands outside
/// the outer ring, negative lands across the center. The stroke inset applies even at ratio
/// zero, which puts that stroke vertex on the far side of the center.
pub fn compute_data_polygon(
    items: &[Item],
    angles: &AngleTable,
    center: Point,
    outer_radius: f64,
    stroke_width: f64,
) -> DataPolygon {
    let inset = stroke_width / 2.0;
    let (fill, stroke) = items
        .iter()
        .zip(angles.iter())
        .map(|(item, angle)| {
            let r = outer_radius * item.ratio();
            (
                panel_xy(center, r, angle),
                panel_xy(center, r - inset, angle),
            )
        })
        .unzip::<_, _, Vec<_>, Vec<_>>();
    DataPolygon {
        fill: Polygon::new(fill),
        stroke: Polygon::new(stroke),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;
    use crate::rings::compute_angle_table;

    #[test]
    fn overshoot_lands_outside_the_outer_radius() {
        let items = vec![Item::new("a", 10.0, 20.0)];
        let angles = compute_angle_table(1);
        let poly = compute_data_polygon(&items, &angles, point(0.0, 0.0), 50.0, 0.0);
        assert!((poly.fill.points()[0].y + 100.0).abs() < 1e-9);
    }

    #[test]
    fn negative_ratio_flips_across_center() {
        let items = vec![Item::new("a", 10.0, -5.0)];
        let angles = compute_angle_table(1);
        let poly = compute_data_polygon(&items, &angles, point(0.0, 0.0), 40.0, 2.0);
        assert!((poly.fill.points()[0].y - 20.0).abs() < 1e-9);
        assert!((poly.stroke.points()[0].y - 21.0).abs() < 1e-9);
    }
}
