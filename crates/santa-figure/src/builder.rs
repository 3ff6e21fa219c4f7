//! The seated Santa composition.
//!
//! Everything except the suit color and the beard width is fixed. Coordinates
//! are data units on a `[-5, 5]` square canvas, y up.

use santa_core::Color;

use crate::figure::{Bounds, Figure, RenderParameters};
use crate::shape::{Layer, Part, Shape};

pub const FIGURE_TITLE: &str = "Santa Claus";
pub const CANVAS_HALF_EXTENT: f32 = 5.0;

pub const SKIN: Color = Color::rgb(0xff, 0xdb, 0xac);
pub const TRIM_WHITE: Color = Color::WHITE;
pub const BOOT_BLACK: Color = Color::BLACK;
pub const EYE_BLACK: Color = Color::BLACK;
pub const NOSE_BROWN: Color = Color::rgb(0xa5, 0x2a, 0x2a);

pub const BEARD_CENTER: [f32; 2] = [0.0, 0.0];
pub const BEARD_HEIGHT: f32 = 2.0;

/// Build the figure for `params`. Pure: no validation, no hidden state.
///
/// Out-of-range widths are accepted and simply distort the beard.
pub fn build_santa(params: &RenderParameters) -> Figure {
    let suit = params.suit_color;
    let mut fig = Figure::new(FIGURE_TITLE, Bounds::square(CANVAS_HALF_EXTENT));

    // Boots and legs.
    for x in [-1.0, 0.1] {
        fig.push(Shape::rectangle(Part::Boot, [x, -4.5], [0.9, 0.5], 0.0, BOOT_BLACK, Layer::GROUND));
    }
    for x in [-0.8, 0.2] {
        fig.push(Shape::rectangle(Part::Leg, [x, -4.0], [0.6, 1.5], 0.0, suit, Layer::GROUND));
    }

    // Body, then the beard over it.
    fig.push(Shape::ellipse(Part::Body, [0.0, -2.0], 3.0, 4.0, suit, Layer::TORSO));
    fig.push(Shape::ellipse(
        Part::Beard,
        BEARD_CENTER,
        params.beard_width,
        BEARD_HEIGHT,
        TRIM_WHITE,
        Layer::TORSO,
    ));

    // Arms tilt outwards from the shoulders.
    fig.push(Shape::rectangle(Part::Arm, [-1.7, -1.5], [1.5, 0.7], -20.0, suit, Layer::LIMBS));
    fig.push(Shape::rectangle(Part::Arm, [0.2, -1.5], [1.5, 0.7], 20.0, suit, Layer::LIMBS));

    fig.push(Shape::rectangle(Part::HatBase, [-0.8, 1.5], [1.6, 0.5], 0.0, suit, Layer::LIMBS));
    fig.push(Shape::polygon(
        Part::HatCone,
        vec![[0.8, 2.0], [0.2, 3.5], [-0.8, 2.0]],
        suit,
        Layer::LIMBS,
    ));

    for x in [-2.5, 2.5] {
        fig.push(Shape::circle(Part::Hand, [x, -2.0], 0.3, SKIN, Layer::LIMBS));
    }

    fig.push(Shape::ellipse(Part::HatTrim, [0.0, 1.5], 2.2, 0.4, TRIM_WHITE, Layer::TRIM));

    fig.push(Shape::circle(Part::Pompom, [0.2, 3.5], 0.3, TRIM_WHITE, Layer::FACE));
    fig.push(Shape::circle(Part::Head, [0.0, 1.0], 0.8, SKIN, Layer::FACE));
    for x in [-0.3, 0.3] {
        fig.push(Shape::circle(Part::Eye, [x, 1.2], 0.1, EYE_BLACK, Layer::FACE));
    }
    fig.push(Shape::circle(Part::Nose, [0.0, 0.8], 0.15, NOSE_BROWN, Layer::FACE));

    fig
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Geometry, ShapeKind};

    fn params(hex: &str, w: f32) -> RenderParameters {
        RenderParameters::new(Color::parse(hex).unwrap(), w)
    }

    #[test]
    fn canvas_metadata_is_fixed() {
        let fig = build_santa(&RenderParameters::default());
        assert_eq!(fig.title(), "Santa Claus");
        assert!(!fig.axes_visible());
        assert_eq!(fig.bounds(), Bounds::square(5.0));
        assert_eq!(fig.shapes().len(), 18);
    }

    #[test]
    fn beard_is_the_only_input_sized_shape() {
        let narrow = build_santa(&params("#FF0000", 1.5));
        let wide = build_santa(&params("#FF0000", 4.0));
        for (a, b) in narrow.shapes().iter().zip(wide.shapes()) {
            if a.part() == Part::Beard {
                assert_ne!(a.geometry(), b.geometry());
            } else {
                assert_eq!(a.geometry(), b.geometry());
            }
        }
    }

    #[test]
    fn hat_cone_is_the_only_polygon() {
        let fig = build_santa(&RenderParameters::default());
        let polys: Vec<_> = fig.shapes().iter().filter(|s| s.kind() == ShapeKind::Polygon).collect();
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0].part(), Part::HatCone);
        match polys[0].geometry() {
            Geometry::Polygon { points } => assert_eq!(points.len(), 3),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn arms_are_mirrored_in_angle() {
        let fig = build_santa(&RenderParameters::default());
        let angles: Vec<f32> = fig
            .shapes_of(Part::Arm)
            .map(|s| match s.geometry() {
                Geometry::Rectangle { angle, .. } => *angle,
                other => panic!("unexpected geometry {other:?}"),
            })
            .collect();
        assert_eq!(angles, vec![-20.0, 20.0]);
    }
}
