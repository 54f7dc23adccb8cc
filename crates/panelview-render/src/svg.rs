use crate::scene::DrawCommand;
use crate::style::Paint;
use panelview_core::{SurfaceSize, TextAlign};
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `<svg id="...">`.
    pub diagram_id: Option<String>,
    /// Optional background color painted behind the chart.
    pub background: Option<String>,
    /// `font-family` for label text. The document render path also measures labels in it.
    pub font_family: Option<String>,
}

pub fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn write_paint_attrs(out: &mut String, paint: &Paint) {
    match paint {
        Paint::Fill { color } => {
            let _ = write!(out, r#" fill="{}" stroke="none""#, escape_xml(color));
        }
        Paint::Stroke { color, width, dash } => {
            let _ = write!(
                out,
                r#" fill="none" stroke="{}" stroke-width="{}""#,
                escape_xml(color),
                fmt_number(*width)
            );
            if let Some([on, off]) = dash {
                let _ = write!(
                    out,
                    r#" stroke-dasharray="{},{}""#,
                    fmt_number(*on),
                    fmt_number(*off)
                );
            }
        }
    }
}

/// Serializes draw commands into a standalone SVG document sized to the surface.
pub fn render_svg(
    commands: &[DrawCommand],
    surface: SurfaceSize,
    options: &SvgRenderOptions,
) -> String {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("panel");
    let w = fmt_number(surface.width);
    let h = fmt_number(surface.height);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="graphics-document document" aria-roledescription="panel">"#,
        id = escape_xml(diagram_id),
    );

    if let Some(bg) = options.background.as_deref() {
        let _ = write!(
            &mut out,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            escape_xml(bg)
        );
    }

    for cmd in commands {
        match cmd {
            DrawCommand::Polygon { points, paint } => {
                if points.is_empty() {
                    continue;
                }
                let _ = write!(
                    &mut out,
                    r#"<polygon points="{}""#,
                    escape_xml(&points.to_svg_points(fmt_number))
                );
                write_paint_attrs(&mut out, paint);
                out.push_str("/>");
            }
            DrawCommand::Line { segment, paint } => {
                let _ = write!(
                    &mut out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    fmt_number(segment.from.x),
                    fmt_number(segment.from.y),
                    fmt_number(segment.to.x),
                    fmt_number(segment.to.y)
                );
                write_paint_attrs(&mut out, paint);
                out.push_str("/>");
            }
            DrawCommand::Text {
                text,
                origin,
                paint,
            } => {
                let _ = write!(
                    &mut out,
                    r#"<text x="{}" y="{}" fill="{}" font-size="{}" text-anchor="{}""#,
                    fmt_number(origin.x),
                    fmt_number(origin.y),
                    escape_xml(&paint.color),
                    fmt_number(paint.size),
                    text_anchor(paint.align)
                );
                if let Some(family) = options.font_family.as_deref() {
                    let _ = write!(&mut out, r#" font-family="{}""#, escape_xml(family));
                }
                let _ = write!(&mut out, ">{}</text>", escape_xml(text));
            }
        }
    }

    out.push_str("</svg>\n");
    out
}
