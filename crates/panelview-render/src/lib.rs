#![forbid(unsafe_code)]

//! Drawing side of `panelview`: style descriptors, draw lists and SVG output for a
//! [`panelview_core::LayoutResult`].

pub mod document;
pub mod scene;
pub mod style;
pub mod svg;

pub use document::{ChartDocument, render_document_svg, render_document_svg_with};
pub use scene::{DrawCommand, build_draw_list};
pub use style::{ChartStyle, Paint, SPOKE_DASH_DP, TextPaint};
pub use svg::{SvgRenderOptions, render_svg};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Layout(#[from] panelview_core::Error),
    #[error("invalid chart style: {message}")]
    InvalidStyle { message: String },
    #[error("chart document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
