#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Box2 = euclid::Box2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// Vertex on a circle of `radius` around `center`, using the panel's rotated convention:
/// `sin` drives x and `cos` drives y, so angle `π` points up in screen space.
pub fn panel_xy(center: Point, radius: f64, angle: f64) -> Point {
    point(
        center.x + radius * angle.sin(),
        center.y + radius * angle.cos(),
    )
}

/// A closed polygon. The edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every edge including the closing one. A single-vertex polygon yields one
    /// degenerate edge; an empty polygon yields none.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| Segment {
            from: self.0[i],
            to: self.0[(i + 1) % n],
        })
    }

    /// `x,y x,y ...` with the given number formatter, as used by SVG `points`.
    pub fn to_svg_points(&self, fmt: impl Fn(f64) -> String) -> String {
        let mut out = String::new();
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(&mut out, "{},{}", fmt(p.x), fmt(p.y));
        }
        out
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        (self.to - self.from).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_xy_points_up_at_pi() {
        let p = panel_xy(point(50.0, 50.0), 10.0, std::f64::consts::PI);
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn edges_include_closing_segment() {
        let poly = Polygon::new(vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)]);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].from, point(1.0, 1.0));
        assert_eq!(edges[2].to, point(0.0, 0.0));
        assert_eq!(Polygon::default().edges().count(), 0);
    }

    #[test]
    fn svg_points_are_space_separated_pairs() {
        let poly = Polygon::new(vec![point(0.0, 1.5), point(-2.0, 3.0)]);
        assert_eq!(poly.to_svg_points(|v| v.to_string()), "0,1.5 -2,3");
    }
}
