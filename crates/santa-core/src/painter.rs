use crate::display_list::{Command, DisplayList, Viewport};
use crate::scene::*;

pub struct Painter {
    list: DisplayList,
    transform_stack: Vec<Transform2D>,
}

impl Painter {
    pub fn begin_frame(viewport: Viewport) -> Self {
        Self {
            list: DisplayList {
                viewport,
                commands: Vec::new(),
            },
            transform_stack: vec![Transform2D::identity()],
        }
    }

    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    pub fn push_transform(&mut self, t: Transform2D) {
        // Compose with current transform so nested pushes multiply.
        let composed = self.current_transform().concat(t);
        self.transform_stack.push(composed);
    }

    pub fn pop_transform(&mut self) {
        // The root identity is never popped.
        if self.transform_stack.len() > 1 {
            let _ = self.transform_stack.pop();
        }
    }

    pub fn rect(&mut self, rect: Rect, brush: Brush, z: i32) {
        let t = self.current_transform();
        self.list.commands.push(Command::DrawRect {
            rect,
            brush,
            z,
            transform: t,
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, stroke: Stroke, brush: Brush, z: i32) {
        let t = self.current_transform();
        self.list.commands.push(Command::StrokeRect {
            rect,
            stroke,
            brush,
            z,
            transform: t,
        });
    }

    pub fn text(&mut self, run: TextRun, z: i32) {
        let t = self.current_transform();
        self.list.commands.push(Command::DrawText {
            run,
            z,
            transform: t,
        });
    }

    pub fn ellipse(&mut self, center: [f32; 2], radii: [f32; 2], brush: Brush, z: i32) {
        let t = self.current_transform();
        self.list.commands.push(Command::DrawEllipse {
            center,
            radii,
            brush,
            z,
            transform: t,
        });
    }

    pub fn circle(&mut self, center: [f32; 2], radius: f32, brush: Brush, z: i32) {
        self.ellipse(center, [radius, radius], brush, z);
    }

    /// Fill a path with a solid color. For now we only support solid color fills for paths.
    pub fn fill_path(&mut self, path: Path, color: ColorLinPremul, z: i32) {
        let t = self.current_transform();
        self.list.commands.push(Command::FillPath {
            path,
            color,
            z,
            transform: t,
        });
    }

    // --- Hit-only regions (do not render) ---
    pub fn hit_region_rect(&mut self, id: u32, rect: Rect, z: i32) {
        let t = self.current_transform();
        self.list.commands.push(Command::HitRegionRect {
            id,
            rect,
            z,
            transform: t,
        });
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}
