use crate::style::{ChartStyle, Paint, TextPaint};
use panelview_core::{ChartConfig, LayoutResult, Point, Polygon, Segment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawCommand {
    Polygon {
        points: Polygon,
        paint: Paint,
    },
    Line {
        segment: Segment,
        paint: Paint,
    },
    Text {
        text: String,
        origin: Point,
        paint: TextPaint,
    },
}

/// Turns a layout into draw commands in paint order: outer ring, inner ring, spokes, data
/// fill, data stroke, labels.
///
/// An empty layout yields no commands.
pub fn build_draw_list(
    layout: &LayoutResult,
    config: &ChartConfig,
    style: &ChartStyle,
) -> Vec<DrawCommand> {
    if layout.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(4 + layout.spokes.len() + layout.labels.len());
    out.push(DrawCommand::Polygon {
        points: layout.outer_ring.clone(),
        paint: Paint::fill(&style.outer_ring_fill),
    });
    out.push(DrawCommand::Polygon {
        points: layout.inner_ring.clone(),
        paint: Paint::fill(&style.inner_ring_fill),
    });

    let spoke_width = style.dp(style.spoke_width_dp);
    let dash = style.spoke_dash();
    for spoke in &layout.spokes {
        out.push(DrawCommand::Line {
            segment: *spoke,
            paint: Paint::dashed(&style.spoke_color, spoke_width, dash),
        });
    }

    out.push(DrawCommand::Polygon {
        points: layout.data_fill.clone(),
        paint: Paint::fill(&style.data_fill),
    });
    out.push(DrawCommand::Polygon {
        points: layout.data_stroke.clone(),
        paint: Paint::stroke(&style.data_stroke, config.stroke_width),
    });

    for label in &layout.labels {
        out.push(DrawCommand::Text {
            text: label.label.clone(),
            origin: label.baseline,
            paint: TextPaint {
                color: style.text_color.clone(),
                size: config.text_size,
                align: label.align,
            },
        });
    }
    out
}
