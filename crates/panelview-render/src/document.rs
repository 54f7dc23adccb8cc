use crate::Result;
use crate::scene::build_draw_list;
use crate::style::ChartStyle;
use crate::svg::{SvgRenderOptions, render_svg};
use panelview_core::{ChartConfig, ChartGeometry, Item, SurfaceSize, TextMeasurer};
use serde::{Deserialize, Serialize};

/// Everything needed to render one chart, as the host would hand it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub items: Vec<Item>,
    #[serde(default)]
    pub config: ChartConfig,
    #[serde(default)]
    pub style: ChartStyle,
    pub surface: SurfaceSize,
}

impl ChartDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Lays out and renders `doc` using `geometry`'s caches.
///
/// Labels are measured in `options.font_family`, the family the SVG text is drawn with.
pub fn render_document_svg_with(
    geometry: &mut ChartGeometry,
    doc: &ChartDocument,
    measurer: &dyn TextMeasurer,
    options: &SvgRenderOptions,
) -> Result<String> {
    doc.style.validate()?;
    let layout = geometry.layout_with_font(
        &doc.items,
        &doc.config,
        options.font_family.as_deref(),
        doc.surface,
        measurer,
    )?;
    let commands = build_draw_list(&layout, &doc.config, &doc.style);
    tracing::debug!(commands = commands.len(), "rendering chart svg");
    Ok(render_svg(&commands, doc.surface, options))
}

pub fn render_document_svg(
    doc: &ChartDocument,
    measurer: &dyn TextMeasurer,
    options: &SvgRenderOptions,
) -> Result<String> {
    render_document_svg_with(&mut ChartGeometry::new(), doc, measurer, options)
}
