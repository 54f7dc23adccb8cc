#![forbid(unsafe_code)]

//! `panelview` lays out radial panel (radar/spider) charts without a GUI toolkit.
//!
//! The host supplies the items, a [`ChartConfig`] and the measured surface size; the engine
//! returns rings, the data polygon, spokes and label placements ready to draw.
//!
//! # Features
//!
//! - `render`: enable draw lists + SVG output (`panelview::render`)

pub use panelview_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use panelview_render::{
        ChartDocument, ChartStyle, DrawCommand, Paint, SPOKE_DASH_DP, SvgRenderOptions,
        TextPaint, build_draw_list, render_document_svg, render_document_svg_with,
    };

    use panelview_core::{ChartConfig, ChartGeometry, Item, SurfaceSize, TextMeasurer};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Layout(#[from] panelview_core::Error),
        #[error(transparent)]
        Render(#[from] panelview_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Lays out and renders one chart to SVG.
    pub fn render_svg(
        items: &[Item],
        config: &ChartConfig,
        style: &ChartStyle,
        surface: SurfaceSize,
        measurer: &dyn TextMeasurer,
        options: &SvgRenderOptions,
    ) -> Result<String> {
        style.validate()?;
        let layout = ChartGeometry::new().layout_with_font(
            items,
            config,
            options.font_family.as_deref(),
            surface,
            measurer,
        )?;
        let commands = build_draw_list(&layout, config, style);
        Ok(panelview_render::render_svg(&commands, surface, options))
    }

    /// Renders a JSON chart document (`items`, `config`, `style`, `surface`).
    pub fn render_json_svg(
        text: &str,
        measurer: &dyn TextMeasurer,
        options: &SvgRenderOptions,
    ) -> Result<String> {
        let doc = ChartDocument::from_json(text)?;
        Ok(render_document_svg(&doc, measurer, options)?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use panelview_core::DeterministicTextMeasurer;

        #[test]
        fn zero_max_value_is_a_layout_error() {
            let err = render_svg(
                &[Item::new("a", 0.0, 1.0)],
                &ChartConfig::default(),
                &ChartStyle::default(),
                SurfaceSize::new(100.0, 100.0),
                &DeterministicTextMeasurer::default(),
                &SvgRenderOptions::default(),
            )
            .unwrap_err();
            assert!(matches!(err, HeadlessError::Layout(_)));
        }

        #[test]
        fn json_document_renders() {
            let svg = render_json_svg(
                r#"{"items":[{"label":"a","maxValue":2,"value":1},{"label":"b","maxValue":2,"value":2},{"label":"c","maxValue":2,"value":0.5}],"surface":{"width":240,"height":240}}"#,
                &DeterministicTextMeasurer::default(),
                &SvgRenderOptions::default(),
            )
            .unwrap();
            assert_eq!(svg.matches("<text").count(), 3);
            assert!(matches!(
                render_json_svg(
                    "[]",
                    &DeterministicTextMeasurer::default(),
                    &SvgRenderOptions::default()
                ),
                Err(HeadlessError::Render(_))
            ));
        }
    }
}
