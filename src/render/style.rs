//! Style Applicator: writes fill, stroke and corner radius onto a rectangle.
//!
//! The fill and stroke steps each report whether they changed the shape. A
//! shape is only worth emitting when at least one of them did; corner radius
//! never counts towards that.
//!
//! Stroke inflation needs to grow the owning canvas. Instead of reaching back
//! into the document, [`stroke_with`] takes the current canvas size and returns
//! the grown one, and the caller assembles the document afterwards.

use crate::draw::{Color, CornerRadius, Rectangle, Size, StrokeStyle};
use crate::tree::Paint;

/// Applies the first paint in `fills` as the rectangle's fill.
///
/// No-op when `fills` is empty or the first paint carries no solid color
/// (image fills, gradients, unknown paint types).
pub fn apply_fill(shape: &mut Rectangle, fills: &[Paint]) -> bool {
    let Some(first) = fills.first() else {
        return false;
    };
    fill_with(shape, first.solid_color())
}

/// Applies the first paint in `strokes` as the rectangle's stroke.
///
/// Returns the inflated canvas size when a stroke was written, `None` when the
/// step was a no-op.
pub fn apply_stroke(
    shape: &mut Rectangle,
    canvas: Size,
    strokes: &[Paint],
    weight: f64,
) -> Option<Size> {
    let first = strokes.first()?;
    stroke_with(shape, canvas, first.solid_color(), weight)
}

/// Sets the fill to `color` converted to 8 bits per channel.
pub fn fill_with(shape: &mut Rectangle, color: Option<Color>) -> bool {
    match color {
        Some(color) => {
            shape.fill = Some(color.to_rgba8());
            true
        }
        None => false,
    }
}

/// Sets the stroke and inflates the canvas so the stroke is not clipped.
///
/// The rectangle moves by `weight / 2` on both axes and the canvas grows by the
/// full `weight` in each dimension. Negative or NaN weights count as zero, so
/// the canvas only ever grows.
pub fn stroke_with(
    shape: &mut Rectangle,
    canvas: Size,
    color: Option<Color>,
    weight: f64,
) -> Option<Size> {
    let color = color?;
    let weight = weight.max(0.0);

    shape.stroke = Some(StrokeStyle {
        color: color.to_rgba8(),
        width: weight,
    });
    shape.x += weight / 2.0;
    shape.y += weight / 2.0;

    Some(canvas.grown_by(weight))
}

/// Rounds all four corners with the same radius on both axes.
pub fn apply_corner_radius(shape: &mut Rectangle, radius: f64) {
    shape.corner_radius = Some(CornerRadius::uniform(radius));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Rgba8;
    use crate::tree::PaintKind;

    fn solid(r: f64, g: f64, b: f64, a: f64) -> Paint {
        Paint::solid(Color::new(r, g, b, a))
    }

    #[test]
    fn empty_fills_leave_shape_untouched() {
        let mut rect = Rectangle::at_origin(Size::new(10.0, 10.0));
        assert!(!apply_fill(&mut rect, &[]));
        assert_eq!(rect.fill, None);
    }

    #[test]
    fn only_first_fill_is_used() {
        let mut rect = Rectangle::at_origin(Size::new(10.0, 10.0));
        let fills = [solid(1.0, 0.0, 0.0, 1.0), solid(0.0, 1.0, 0.0, 1.0)];
        assert!(apply_fill(&mut rect, &fills));
        assert_eq!(rect.fill, Some(Rgba8::new(255, 0, 0, 255)));
    }

    #[test]
    fn image_fill_is_a_no_op() {
        let mut rect = Rectangle::at_origin(Size::new(10.0, 10.0));
        let fills = [Paint::new(PaintKind::Image, None), solid(1.0, 0.0, 0.0, 1.0)];
        assert!(!apply_fill(&mut rect, &fills));
        assert_eq!(rect.fill, None);
    }

    #[test]
    fn unknown_paint_type_applies_no_color() {
        let mut rect = Rectangle::at_origin(Size::new(10.0, 10.0));
        let fills = [Paint::new(
            PaintKind::Other("GRADIENT_LINEAR".into()),
            Some(Color::new(1.0, 1.0, 1.0, 1.0)),
        )];
        assert!(!apply_fill(&mut rect, &fills));
    }

    #[test]
    fn stroke_inflates_canvas_by_full_weight() {
        let bounds = crate::util::Rect::new(0.0, 0.0, 10.0, 10.0);
        let (canvas, mut rect) = crate::render::build_shape(&bounds);
        let grown = apply_stroke(&mut rect, canvas, &[solid(0.0, 0.0, 1.0, 1.0)], 2.0)
            .expect("stroke applied");

        assert_eq!(grown, Size::new(12.0, 12.0));
        assert_eq!((rect.x, rect.y), (1.0, 1.0));
        assert_eq!((rect.width, rect.height), (10.0, 10.0));
        assert_eq!(
            rect.stroke,
            Some(StrokeStyle {
                color: Rgba8::new(0, 0, 255, 255),
                width: 2.0,
            })
        );
    }

    #[test]
    fn empty_strokes_do_not_inflate() {
        let mut rect = Rectangle::at_origin(Size::new(10.0, 10.0));
        assert!(apply_stroke(&mut rect, Size::new(10.0, 10.0), &[], 4.0).is_none());
        assert_eq!((rect.x, rect.y), (0.0, 0.0));
        assert_eq!(rect.stroke, None);
    }

    #[test]
    fn negative_weight_never_shrinks_canvas() {
        let mut rect = Rectangle::at_origin(Size::new(10.0, 10.0));
        let grown = stroke_with(
            &mut rect,
            Size::new(10.0, 10.0),
            Some(Color::new(0.0, 0.0, 0.0, 1.0)),
            -3.0,
        )
        .expect("stroke applied");
        assert_eq!(grown, Size::new(10.0, 10.0));
        assert_eq!((rect.x, rect.y), (0.0, 0.0));
    }

    #[test]
    fn corner_radius_is_isotropic() {
        let mut rect = Rectangle::at_origin(Size::new(10.0, 10.0));
        apply_corner_radius(&mut rect, 6.0);
        assert_eq!(rect.corner_radius, Some(CornerRadius { rx: 6.0, ry: 6.0 }));
        assert!(!rect.is_painted());
    }
}
