use santa_core::Color;

use crate::shape::{Part, Shape};

/// Default suit color of a fresh session.
pub const DEFAULT_SUIT_COLOR: Color = Color::rgb(0xff, 0x00, 0x00);
/// Default beard width of a fresh session, in data units.
pub const DEFAULT_BEARD_WIDTH: f32 = 2.5;
pub const MIN_BEARD_WIDTH: f32 = 1.5;
pub const MAX_BEARD_WIDTH: f32 = 4.0;
pub const BEARD_WIDTH_STEP: f32 = 0.1;

/// The two externally supplied values that vary a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParameters {
    pub suit_color: Color,
    pub beard_width: f32,
}

impl RenderParameters {
    pub fn new(suit_color: Color, beard_width: f32) -> Self {
        Self {
            suit_color,
            beard_width,
        }
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self::new(DEFAULT_SUIT_COLOR, DEFAULT_BEARD_WIDTH)
    }
}

/// Axis-aligned data-space extent of a figure's canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Bounds {
    /// Square extent `[-half, half]` on both axes.
    pub fn square(half: f32) -> Self {
        Self {
            min: [-half, -half],
            max: [half, half],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }
}

/// An ordered set of shapes plus display metadata, produced by one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    shapes: Vec<Shape>,
    bounds: Bounds,
    title: String,
    axes_visible: bool,
}

impl Figure {
    pub fn new(title: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            shapes: Vec::new(),
            bounds,
            title: title.into(),
            axes_visible: false,
        }
    }

    pub fn with_axes(mut self, visible: bool) -> Self {
        self.axes_visible = visible;
        self
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shapes in paint order: ascending layer, insertion order within a layer.
    pub fn draw_order(&self) -> Vec<&Shape> {
        let mut out: Vec<&Shape> = self.shapes.iter().collect();
        out.sort_by_key(|s| s.layer());
        out
    }

    pub fn shapes_of(&self, part: Part) -> impl Iterator<Item = &Shape> + '_ {
        self.shapes.iter().filter(move |s| s.part() == part)
    }

    pub fn count(&self, part: Part) -> usize {
        self.shapes_of(part).count()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn axes_visible(&self) -> bool {
        self.axes_visible
    }
}
