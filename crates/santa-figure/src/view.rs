//! Projection of a [`Figure`] onto a pixel frame.

use santa_core::{Brush, Color, Painter, Path, Rect, Stroke, TextProvider, TextRun, Transform2D};

use crate::figure::{Bounds, Figure};
use crate::shape::Geometry;

const AXIS_COLOR: Color = Color::rgb(0x33, 0x33, 0x33);

/// Maps data space (y up) onto a square pixel frame (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureView {
    frame: Rect,
    bounds: Bounds,
    scale: f32,
}

impl FigureView {
    /// Fit `bounds` into `frame`, preserving aspect ratio and centering the result.
    pub fn fit(bounds: Bounds, frame: Rect) -> Self {
        let sx = frame.w / bounds.width().max(f32::EPSILON);
        let sy = frame.h / bounds.height().max(f32::EPSILON);
        let scale = sx.min(sy);
        let w = bounds.width() * scale;
        let h = bounds.height() * scale;
        let frame = Rect::new(frame.x + (frame.w - w) * 0.5, frame.y + (frame.h - h) * 0.5, w, h);
        Self { frame, bounds, scale }
    }

    /// Pixel frame actually covered by the canvas.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Pixels per data unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_px(&self, p: [f32; 2]) -> [f32; 2] {
        [
            self.frame.x + (p[0] - self.bounds.min[0]) * self.scale,
            self.frame.y + (self.bounds.max[1] - p[1]) * self.scale,
        ]
    }

    /// Emit one command per shape with `z = z_base + layer`, plus title and optional axes.
    pub fn paint(&self, figure: &Figure, painter: &mut Painter, z_base: i32, title: Option<TitleStyle<'_>>) {
        for shape in figure.shapes() {
            let z = z_base + shape.layer().0;
            let fill = shape.fill().to_lin_premul();
            let brush = Brush::Solid(fill);
            match shape.geometry() {
                Geometry::Circle { center, radius } => {
                    painter.circle(self.to_px(*center), radius * self.scale, brush, z);
                }
                Geometry::Ellipse {
                    center,
                    width,
                    height,
                    angle,
                } => {
                    let radii = [width * 0.5 * self.scale, height * 0.5 * self.scale];
                    if *angle == 0.0 {
                        painter.ellipse(self.to_px(*center), radii, brush, z);
                    } else {
                        let c = self.to_px(*center);
                        painter.push_transform(self.rotation_about(c, *angle));
                        painter.ellipse([0.0, 0.0], radii, brush, z);
                        painter.pop_transform();
                    }
                }
                Geometry::Rectangle {
                    anchor,
                    width,
                    height,
                    angle,
                } => {
                    // The anchor is the lower-left corner, so the rect extends upwards (negative y) in pixels.
                    let a = self.to_px(*anchor);
                    let local = Rect::new(0.0, -height * self.scale, width * self.scale, height * self.scale);
                    painter.push_transform(self.rotation_about(a, *angle));
                    painter.rect(local, brush, z);
                    painter.pop_transform();
                }
                Geometry::Polygon { points } => {
                    let px: Vec<[f32; 2]> = points.iter().map(|p| self.to_px(*p)).collect();
                    painter.fill_path(Path::polygon(&px), fill, z);
                }
            }
        }

        let top_z = z_base + figure.shapes().iter().map(|s| s.layer().0).max().unwrap_or(0) + 1;
        if figure.axes_visible() {
            painter.stroke_rect(
                self.frame,
                Stroke { width: 1.0 },
                Brush::Solid(AXIS_COLOR.to_lin_premul()),
                top_z,
            );
        }
        if let Some(style) = title {
            self.paint_title(figure.title(), painter, top_z, style);
        }
    }

    fn rotation_about(&self, origin: [f32; 2], degrees_ccw: f32) -> Transform2D {
        // Counter-clockwise in y-up data space is a negative turn in y-down pixels.
        Transform2D::translate(origin[0], origin[1]).concat(Transform2D::rotate(-degrees_ccw.to_radians()))
    }

    fn paint_title(&self, title: &str, painter: &mut Painter, z: i32, style: TitleStyle<'_>) {
        let width = style
            .measure
            .map(|m| m.measure(title, style.size))
            .unwrap_or(title.chars().count() as f32 * style.size * 0.5);
        let x = self.frame.x + (self.frame.w - width) * 0.5;
        let y = self.frame.y - style.gap;
        painter.text(
            TextRun {
                text: title.to_string(),
                pos: [x, y],
                size: style.size,
                color: style.color.to_lin_premul(),
            },
            z,
        );
    }
}

/// How the figure title is laid out above the frame.
#[derive(Clone, Copy)]
pub struct TitleStyle<'a> {
    pub size: f32,
    pub color: Color,
    /// Distance between the frame top and the title baseline.
    pub gap: f32,
    /// Used to center the title; without it the width is estimated.
    pub measure: Option<&'a dyn TextProvider>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_santa;
    use crate::figure::RenderParameters;
    use crate::shape::{Layer, Part, Shape};
    use santa_core::{Command, Viewport};

    fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-3 && (a[1] - b[1]).abs() < 1e-3
    }

    #[test]
    fn fit_centers_square_canvas_in_wide_frame() {
        let view = FigureView::fit(Bounds::square(5.0), Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(view.frame(), Rect::new(50.0, 0.0, 100.0, 100.0));
        assert_eq!(view.scale(), 10.0);
        assert!(approx(view.to_px([0.0, 0.0]), [100.0, 50.0]));
        assert!(approx(view.to_px([-5.0, 5.0]), [50.0, 0.0]));
        assert!(approx(view.to_px([5.0, -5.0]), [150.0, 100.0]));
    }

    #[test]
    fn layers_become_z_values_on_top_of_base() {
        let fig = build_santa(&RenderParameters::default());
        let view = FigureView::fit(fig.bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut painter = Painter::begin_frame(Viewport { width: 100, height: 100 });
        view.paint(&fig, &mut painter, 10, None);
        let dl = painter.finish();

        assert_eq!(dl.commands.len(), fig.shapes().len());
        for (cmd, shape) in dl.commands.iter().zip(fig.shapes()) {
            assert_eq!(cmd.z(), 10 + shape.layer().0);
        }
    }

    #[test]
    fn rotated_rectangle_pivots_on_its_anchor() {
        let mut fig = Figure::new("t", Bounds::square(5.0));
        fig.push(Shape::rectangle(Part::Arm, [0.0, 0.0], [1.0, 1.0], 90.0, Color::BLACK, Layer::LIMBS));
        let view = FigureView::fit(fig.bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut painter = Painter::begin_frame(Viewport { width: 100, height: 100 });
        view.paint(&fig, &mut painter, 0, None);

        match &painter.finish().commands[0] {
            Command::DrawRect { rect, transform, .. } => {
                // The anchor stays put.
                assert!(approx(transform.apply([rect.x, rect.y + rect.h]), [50.0, 50.0]));
                // The data-space +x edge now points to data +y, i.e. up on screen.
                assert!(approx(transform.apply([rect.w, rect.y + rect.h]), [50.0, 40.0]));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn axes_and_title_are_drawn_above_the_shapes() {
        let fig = build_santa(&RenderParameters::default()).with_axes(true);
        let view = FigureView::fit(fig.bounds(), Rect::new(0.0, 40.0, 100.0, 100.0));
        let mut painter = Painter::begin_frame(Viewport { width: 100, height: 140 });
        let style = TitleStyle {
            size: 16.0,
            color: Color::BLACK,
            gap: 8.0,
            measure: None,
        };
        view.paint(&fig, &mut painter, 0, Some(style));
        let dl = painter.finish();

        let max_shape_z = fig.shapes().iter().map(|s| s.layer().0).max().unwrap();
        let extra: Vec<&Command> = dl.commands.iter().skip(fig.shapes().len()).collect();
        assert_eq!(extra.len(), 2);
        assert!(matches!(extra[0], Command::StrokeRect { .. }));
        match extra[1] {
            Command::DrawText { run, z, .. } => {
                assert_eq!(run.text, "Santa Claus");
                assert_eq!(run.pos[1], 32.0);
                assert!(*z > max_shape_z);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
