//! CPU rasterization of a [`DisplayList`] into a `tiny-skia` pixmap.

use thiserror::Error;
use tiny_skia::{
    FillRule as SkFillRule, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8,
    Transform,
};

use crate::color::Color;
use crate::display_list::{Command, DisplayList};
use crate::scene::*;
use crate::text::TextProvider;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("cannot allocate a {width}x{height} pixmap")]
    InvalidViewport { width: u32, height: u32 },
}

fn to_sk_transform(t: &Transform2D) -> Transform {
    let [a, b, c, d, e, f] = t.m;
    Transform::from_row(a, b, c, d, e, f)
}

fn solid_paint(color: &ColorLinPremul) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn brush_paint(brush: &Brush) -> Paint<'static> {
    match brush {
        Brush::Solid(c) => solid_paint(c),
    }
}

fn build_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for cmd in &path.cmds {
        match cmd {
            PathCmd::MoveTo(p) => pb.move_to(p[0], p[1]),
            PathCmd::LineTo(p) => pb.line_to(p[0], p[1]),
            PathCmd::Close => pb.close(),
        }
    }
    pb.finish()
}

/// Paints display lists with an optional text provider.
///
/// Commands are painted in ascending z; within one z they keep submission order.
/// Text runs are skipped when no provider is attached.
pub struct Rasterizer<'a> {
    text: Option<&'a dyn TextProvider>,
    background: Color,
}

impl<'a> Rasterizer<'a> {
    pub fn new(background: Color) -> Self {
        Self {
            text: None,
            background,
        }
    }

    pub fn with_text_provider(mut self, provider: &'a dyn TextProvider) -> Self {
        self.text = Some(provider);
        self
    }

    pub fn rasterize(&self, list: &DisplayList) -> Result<Pixmap, RasterError> {
        let (width, height) = (list.viewport.width, list.viewport.height);
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidViewport { width, height })?;
        let bg = self.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

        for cmd in list.sorted_by_z() {
            self.paint_command(&mut pixmap, cmd);
        }
        Ok(pixmap)
    }

    fn paint_command(&self, pixmap: &mut Pixmap, cmd: &Command) {
        match cmd {
            Command::DrawRect {
                rect,
                brush,
                transform,
                ..
            } => {
                if let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
                    let path = PathBuilder::from_rect(r);
                    pixmap.fill_path(
                        &path,
                        &brush_paint(brush),
                        SkFillRule::Winding,
                        to_sk_transform(transform),
                        None,
                    );
                }
            }
            Command::StrokeRect {
                rect,
                stroke,
                brush,
                transform,
                ..
            } => {
                if let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
                    let path = PathBuilder::from_rect(r);
                    let sk_stroke = tiny_skia::Stroke {
                        width: stroke.width,
                        ..tiny_skia::Stroke::default()
                    };
                    pixmap.stroke_path(
                        &path,
                        &brush_paint(brush),
                        &sk_stroke,
                        to_sk_transform(transform),
                        None,
                    );
                }
            }
            Command::DrawEllipse {
                center,
                radii,
                brush,
                transform,
                ..
            } => {
                let oval = tiny_skia::Rect::from_xywh(
                    center[0] - radii[0],
                    center[1] - radii[1],
                    radii[0] * 2.0,
                    radii[1] * 2.0,
                );
                if let Some(path) = oval.and_then(PathBuilder::from_oval) {
                    pixmap.fill_path(
                        &path,
                        &brush_paint(brush),
                        SkFillRule::Winding,
                        to_sk_transform(transform),
                        None,
                    );
                }
            }
            Command::FillPath {
                path,
                color,
                transform,
                ..
            } => {
                if let Some(sk_path) = build_path(path) {
                    pixmap.fill_path(
                        &sk_path,
                        &solid_paint(color),
                        SkFillRule::Winding,
                        to_sk_transform(transform),
                        None,
                    );
                }
            }
            Command::DrawText { run, transform, .. } => {
                if let Some(provider) = self.text {
                    draw_text(pixmap, provider, run, transform);
                }
            }
            Command::HitRegionRect { .. } => {}
        }
    }
}

fn draw_text(pixmap: &mut Pixmap, provider: &dyn TextProvider, run: &TextRun, transform: &Transform2D) {
    // Glyph masks are not resampled: the origin goes through the transform and the
    // size picks up its uniform scale. Rotation and skew are ignored for text.
    let origin = transform.apply(run.pos);
    let [a_m, b_m, ..] = transform.m;
    let scale = (a_m * a_m + b_m * b_m).sqrt();
    let scaled = TextRun {
        size: run.size * scale,
        ..run.clone()
    };
    let [r, g, b, a] = run.color.to_srgba_u8();

    for glyph in provider.rasterize_run(&scaled) {
        let Some(mut mask) = Pixmap::new(glyph.width, glyph.height) else {
            continue;
        };
        for (dst, cov) in mask.pixels_mut().iter_mut().zip(glyph.coverage.iter()) {
            let alpha = (*cov as u16 * a as u16 / 255) as u8;
            let premul = |c: u8| (c as u16 * alpha as u16 / 255) as u8;
            if let Some(px) = PremultipliedColorU8::from_rgba(premul(r), premul(g), premul(b), alpha) {
                *dst = px;
            }
        }
        let x = (origin[0] + glyph.offset[0]).round() as i32;
        let y = (origin[1] + glyph.offset[1]).round() as i32;
        pixmap.draw_pixmap(
            x,
            y,
            mask.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}
