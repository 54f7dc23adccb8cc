use crate::geom::{Point, Polygon, Segment, panel_xy};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// The inner background ring sits at three quarters of the outer radius.
pub const INNER_RING_RATIO: f64 = 0.75;

/// Per-axis angles in radians, index-aligned with the item list.
///
/// Index 0 points up and indices advance clockwise on screen, so every layer (rings, data
/// polygon, spokes, labels) lines up by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleTable(Vec<f64>);

impl AngleTable {
    pub fn angles(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// `angle(i) = (2π / n) * (n - i) - π`. Empty for `n == 0`.
pub fn compute_angle_table(n: usize) -> AngleTable {
    if n == 0 {
        return AngleTable::default();
    }
    let step = TAU / n as f64;
    AngleTable((0..n).map(|i| step * (n - i) as f64 - PI).collect())
}

pub fn compute_ring(center: Point, radius: f64, angles: &AngleTable) -> Polygon {
    Polygon::new(
        angles
            .iter()
            .map(|angle| panel_xy(center, radius, angle))
            .collect(),
    )
}

/// One segment per axis, from `center` to the vertex at `radius`.
pub fn compute_spokes(center: Point, radius: f64, angles: &AngleTable) -> Vec<Segment> {
    angles
        .iter()
        .map(|angle| Segment {
            from: center,
            to: panel_xy(center, radius, angle),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn four_axes_run_clockwise_from_top() {
        let angles = compute_angle_table(4);
        let ring = compute_ring(point(0.0, 0.0), 10.0, &angles);
        let expected = [
            point(0.0, -10.0),
            point(10.0, 0.0),
            point(0.0, 10.0),
            point(-10.0, 0.0),
        ];
        for (got, want) in ring.points().iter().zip(expected) {
            assert!((*got - want).length() < 1e-9, "{got:?} != {want:?}");
        }
    }

    #[test]
    fn single_axis_points_up() {
        let angles = compute_angle_table(1);
        assert_eq!(angles.angles(), &[PI]);
    }

    #[test]
    fn zero_axes_produce_nothing() {
        let angles = compute_angle_table(0);
        assert!(angles.is_empty());
        assert!(compute_ring(point(1.0, 1.0), 5.0, &angles).is_empty());
        assert!(compute_spokes(point(1.0, 1.0), 5.0, &angles).is_empty());
    }

    #[test]
    fn spokes_end_on_ring_vertices() {
        let center = point(30.0, 40.0);
        let angles = compute_angle_table(5);
        let ring = compute_ring(center, 25.0, &angles);
        let spokes = compute_spokes(center, 25.0, &angles);
        for (spoke, vertex) in spokes.iter().zip(ring.points()) {
            assert_eq!(spoke.from, center);
            assert_eq!(spoke.to, *vertex);
        }
    }
}
