//! SVG text encoding for [`VectorDocument`].

use super::document::{Rectangle, VectorDocument};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, Event},
};
use std::io::{self, Cursor};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serialises the document as a standalone SVG file.
///
/// Lengths are written as plain numbers, which SVG interprets as pixels.
pub fn encode_svg(document: &VectorDocument) -> io::Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let root_attrs = [
        ("xmlns", SVG_NAMESPACE.to_string()),
        ("version", "1.1".to_string()),
        ("x", number(0.0)),
        ("y", number(0.0)),
        ("width", number(document.width())),
        ("height", number(document.height())),
    ];
    let root = BytesStart::new("svg")
        .with_attributes(root_attrs.iter().map(|(key, value)| (*key, value.as_str())));
    writer.write_event(Event::Start(root))?;

    for shape in document.shapes() {
        let attrs = rect_attributes(shape);
        let rect = BytesStart::new("rect")
            .with_attributes(attrs.iter().map(|(key, value)| (*key, value.as_str())));
        writer.write_event(Event::Empty(rect))?;
    }

    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn rect_attributes(shape: &Rectangle) -> Vec<(&'static str, String)> {
    let mut attrs = vec![
        ("x", number(shape.x)),
        ("y", number(shape.y)),
        ("width", number(shape.width)),
        ("height", number(shape.height)),
    ];

    if let Some(radius) = shape.corner_radius {
        attrs.push(("rx", number(radius.rx)));
        attrs.push(("ry", number(radius.ry)));
    }

    // SVG fills with black unless told otherwise.
    match shape.fill {
        Some(fill) => {
            attrs.push(("fill", fill.hex()));
            if !fill.is_opaque() {
                attrs.push(("fill-opacity", number(fill.opacity())));
            }
        }
        None => attrs.push(("fill", "none".to_string())),
    }

    if let Some(stroke) = shape.stroke {
        attrs.push(("stroke", stroke.color.hex()));
        attrs.push(("stroke-width", number(stroke.width)));
        if !stroke.color.is_opaque() {
            attrs.push(("stroke-opacity", number(stroke.color.opacity())));
        }
    }

    attrs
}

fn number(value: f64) -> String {
    // Normalise -0 so it prints as "0".
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::Rgba8;
    use crate::draw::document::{CornerRadius, Size, StrokeStyle};

    #[test]
    fn filled_rectangle_encodes_canvas_and_fill() {
        let mut rect = Rectangle::at_origin(Size::new(100.0, 50.0));
        rect.fill = Some(Rgba8::new(255, 0, 0, 255));
        let doc = VectorDocument::new(Size::new(100.0, 50.0), rect);

        let svg = encode_svg(&doc).expect("encode");
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="100" height="50""#));
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(!svg.contains("fill-opacity"));
        assert!(!svg.contains("stroke"));
        assert_eq!(svg.matches("<rect").count(), 1);
    }

    #[test]
    fn stroke_only_rectangle_disables_fill() {
        let mut rect = Rectangle::at_origin(Size::new(10.0, 10.0));
        rect.x = 1.0;
        rect.y = 1.0;
        rect.stroke = Some(StrokeStyle {
            color: Rgba8::new(0, 0, 255, 128),
            width: 2.0,
        });
        rect.corner_radius = Some(CornerRadius::uniform(4.5));
        let doc = VectorDocument::new(Size::new(12.0, 12.0), rect);

        let svg = encode_svg(&doc).expect("encode");
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#0000ff""##));
        assert!(svg.contains(r#"stroke-width="2""#));
        assert!(svg.contains("stroke-opacity"));
        assert!(svg.contains(r#"rx="4.5" ry="4.5""#));
        assert!(svg.contains(r#"x="1" y="1""#));
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(1.5), "1.5");
    }
}
