use crate::scene::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    DrawRect { rect: Rect, brush: Brush, z: i32, transform: Transform2D },
    StrokeRect { rect: Rect, stroke: Stroke, brush: Brush, z: i32, transform: Transform2D },
    DrawText { run: TextRun, z: i32, transform: Transform2D },
    DrawEllipse { center: [f32; 2], radii: [f32; 2], brush: Brush, z: i32, transform: Transform2D },
    /// Filled path (solid color only for now)
    FillPath { path: Path, color: ColorLinPremul, z: i32, transform: Transform2D },
    /// Hit-only regions that do not render.
    HitRegionRect { id: u32, rect: Rect, z: i32, transform: Transform2D },
}

impl Command {
    pub fn z(&self) -> i32 {
        match self {
            Command::DrawRect { z, .. }
            | Command::StrokeRect { z, .. }
            | Command::DrawText { z, .. }
            | Command::DrawEllipse { z, .. }
            | Command::FillPath { z, .. }
            | Command::HitRegionRect { z, .. } => *z,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    pub viewport: Viewport,
    pub commands: Vec<Command>,
}

impl DisplayList {
    /// Commands in paint order: ascending z, ties kept in submission order.
    pub fn sorted_by_z(&self) -> Vec<&Command> {
        let mut out: Vec<&Command> = self.commands.iter().collect();
        out.sort_by_key(|c| c.z());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(z: i32, x: f32) -> Command {
        Command::DrawRect {
            rect: Rect::new(x, 0.0, 1.0, 1.0),
            brush: Brush::Solid(ColorLinPremul::rgba(0, 0, 0, 255)),
            z,
            transform: Transform2D::identity(),
        }
    }

    #[test]
    fn sort_is_stable_within_a_layer() {
        let dl = DisplayList {
            viewport: Viewport { width: 10, height: 10 },
            commands: vec![rect(2, 0.0), rect(0, 1.0), rect(2, 2.0), rect(1, 3.0)],
        };
        let order: Vec<(i32, f32)> = dl
            .sorted_by_z()
            .into_iter()
            .map(|c| match c {
                Command::DrawRect { rect, z, .. } => (*z, rect.x),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(order, vec![(0, 1.0), (1, 3.0), (2, 0.0), (2, 2.0)]);
    }
}
