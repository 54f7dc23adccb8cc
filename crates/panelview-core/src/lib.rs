#![forbid(unsafe_code)]

//! Geometry engine for radial "panel" (radar/spider) charts.
//!
//! Given an ordered list of [`Item`]s, a [`ChartConfig`] and the measured [`SurfaceSize`],
//! [`layout`] returns every primitive needed to draw the chart: two background rings, the
//! value-driven data polygon with its inset stroke, one spoke per axis and one label
//! placement per axis. Drawing is left to the host.

pub mod data;
pub mod engine;
pub mod geom;
pub mod label;
pub mod model;
pub mod rings;
pub mod text;

pub use data::{DataPolygon, compute_data_polygon};
pub use engine::{ChartGeometry, LayoutResult, layout};
pub use geom::{Point, Polygon, Segment};
pub use label::{LabelPlacement, TextAlign, align_for_degrees, compass_degrees, place_label};
pub use model::{CenterPolicy, ChartConfig, Item, SurfaceSize, items_from_value, validate_items};
pub use rings::{AngleTable, INNER_RING_RATIO, compute_angle_table, compute_ring, compute_spokes};
pub use text::{DeterministicTextMeasurer, TextBounds, TextMeasurer, TextMetricsCache, TextStyle};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("item {index} ({label:?}) has invalid maxValue {max_value}; it must be finite and greater than zero")]
    InvalidMaxValue {
        index: usize,
        label: String,
        max_value: f64,
    },
    #[error("item {index} ({label:?}) has non-finite value {value}")]
    InvalidValue {
        index: usize,
        label: String,
        value: f64,
    },
    #[error("invalid chart config: {message}")]
    InvalidConfig { message: String },
    #[error("chart JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
