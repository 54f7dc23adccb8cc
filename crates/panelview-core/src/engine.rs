use crate::Result;
use crate::data::{DataPolygon, compute_data_polygon};
use crate::geom::{Point, Polygon, Segment};
use crate::label::{LabelPlacement, place_label};
use crate::model::{ChartConfig, Item, SurfaceSize, validate_items};
use crate::rings::{
    AngleTable, INNER_RING_RATIO, compute_angle_table, compute_ring, compute_spokes,
};
use crate::text::{TextMeasurer, TextMetricsCache, TextStyle};
use serde::{Deserialize, Serialize};

/// Every primitive a host needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub center: Point,
    pub outer_ring: Polygon,
    pub inner_ring: Polygon,
    pub data_fill: Polygon,
    pub data_stroke: Polygon,
    pub spokes: Vec<Segment>,
    pub labels: Vec<LabelPlacement>,
}

impl LayoutResult {
    fn empty(center: Point) -> Self {
        Self {
            center,
            outer_ring: Polygon::default(),
            inner_ring: Polygon::default(),
            data_fill: Polygon::default(),
            data_stroke: Polygon::default(),
            spokes: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outer_ring.is_empty()
    }
}

/// Layout engine holding the derived values worth keeping between passes: the angle table
/// (rebuilt when the item count changes) and the label metrics.
#[derive(Debug, Clone, Default)]
pub struct ChartGeometry {
    angles: AngleTable,
    metrics: TextMetricsCache,
}

impl ChartGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle_table(&self) -> &AngleTable {
        &self.angles
    }

    pub fn metrics(&self) -> &TextMetricsCache {
        &self.metrics
    }

    /// Validates the inputs, then computes every layer in one pass.
    ///
    /// An empty item list is not an error; it yields an empty result. Labels are measured
    /// with the measurer's default font; use [`Self::layout_with_font`] when the labels will
    /// be drawn in a specific family.
    pub fn layout(
        &mut self,
        items: &[Item],
        config: &ChartConfig,
        surface: SurfaceSize,
        measurer: &dyn TextMeasurer,
    ) -> Result<LayoutResult> {
        self.layout_with_font(items, config, None, surface, measurer)
    }

    /// Like [`Self::layout`], measuring labels in `font_family`. A family change
    /// re-measures every label.
    pub fn layout_with_font(
        &mut self,
        items: &[Item],
        config: &ChartConfig,
        font_family: Option<&str>,
        surface: SurfaceSize,
        measurer: &dyn TextMeasurer,
    ) -> Result<LayoutResult> {
        config.validate()?;
        surface.validate()?;
        validate_items(items)?;

        let center = surface.center(config.center);
        if items.is_empty() {
            tracing::debug!("no items; skipping layout");
            return Ok(LayoutResult::empty(center));
        }

        if self.angles.len() != items.len() {
            tracing::debug!(axes = items.len(), "rebuilding angle table");
            self.angles = compute_angle_table(items.len());
        }
        let angles = &self.angles;

        let radius = config.outer_radius;
        let outer_ring = compute_ring(center, radius, angles);
        let inner_ring = compute_ring(center, radius * INNER_RING_RATIO, angles);
        let spokes = compute_spokes(center, radius, angles);
        let DataPolygon { fill, stroke } =
            compute_data_polygon(items, angles, center, radius, config.stroke_width);

        let style = TextStyle {
            font_family: font_family.map(str::to_string),
            font_size: config.text_size,
        };
        let bounds = self.metrics.bounds_for(items, &style, measurer);
        let labels = items
            .iter()
            .zip(angles.iter())
            .zip(bounds)
            .map(|((item, angle), b)| place_label(&item.label, angle, center, radius, *b))
            .collect();

        Ok(LayoutResult {
            center,
            outer_ring,
            inner_ring,
            data_fill: fill,
            data_stroke: stroke,
            spokes,
            labels,
        })
    }
}

/// One-shot layout with fresh caches. Hosts that redraw often should keep a
/// [`ChartGeometry`] instead so label metrics survive between passes.
pub fn layout(
    items: &[Item],
    config: &ChartConfig,
    surface: SurfaceSize,
    measurer: &dyn TextMeasurer,
) -> Result<LayoutResult> {
    ChartGeometry::new().layout(items, config, surface, measurer)
}
