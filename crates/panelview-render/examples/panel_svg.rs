use panelview_core::DeterministicTextMeasurer;
use panelview_render::svg::SvgRenderOptions;
use panelview_render::{ChartDocument, render_document_svg};
use std::io::Read;

fn main() {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("read stdin");

    let doc = ChartDocument::from_json(&input).expect("chart document");
    let options = SvgRenderOptions {
        background: Some("white".to_string()),
        ..SvgRenderOptions::default()
    };
    let svg = render_document_svg(&doc, &DeterministicTextMeasurer::default(), &options)
        .expect("render ok");
    print!("{svg}");
}
