#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    // Affine 2D: [a, b, c, d, e, f] for matrix [[a c e],[b d f],[0 0 1]]
    pub m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub fn identity() -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Compose two transforms: self ∘ other (apply `other`, then `self`).
    pub fn concat(self, other: Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.m;
        let [a2, b2, c2, d2, e2, f2] = other.m;
        let a = a1 * a2 + c1 * b2;
        let b = b1 * a2 + d1 * b2;
        let c = a1 * c2 + c1 * d2;
        let d = b1 * c2 + d1 * d2;
        let e = a1 * e2 + c1 * f2 + e1;
        let f = b1 * e2 + d1 * f2 + f1;
        Self {
            m: [a, b, c, d, e, f],
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, tx, ty],
        }
    }

    /// Rotation by `radians` in y-down pixel space (positive turns clockwise on screen).
    pub fn rotate(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            m: [c, s, -s, c, 0.0, 0.0],
        }
    }

    pub fn apply(&self, p: [f32; 2]) -> [f32; 2] {
        let [a, b, c, d, e, f] = self.m;
        [a * p[0] + c * p[1] + e, b * p[0] + d * p[1] + f]
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn invert(&self) -> Option<Self> {
        let [a, b, c, d, e, f] = self.m;
        let det = a * d - b * c;
        if det.abs() < f32::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        let ia = d * inv;
        let ib = -b * inv;
        let ic = -c * inv;
        let id = a * inv;
        let ie = -(ia * e + ic * f);
        let i_f = -(ib * e + id * f);
        Some(Self {
            m: [ia, ib, ic, id, ie, i_f],
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorLinPremul {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

// Constructors for ColorLinPremul are defined in color.rs to keep scene.rs focused

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(ColorLinPremul),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: [f32; 2]) -> bool {
        p[0] >= self.x && p[0] <= self.x + self.w && p[1] >= self.y && p[1] <= self.y + self.h
    }

    pub fn center(&self) -> [f32; 2] {
        [self.x + self.w * 0.5, self.y + self.h * 0.5]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: [f32; 2],
    pub size: f32,
    pub color: ColorLinPremul,
}

// --- Path geometry ---

#[derive(Clone, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo([f32; 2]),
    LineTo([f32; 2]),
    Close,
}

/// Straight-edged outline, filled with the non-zero winding rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
}

impl Path {
    /// Closed polygon through `points`, in order.
    pub fn polygon(points: &[[f32; 2]]) -> Self {
        let mut cmds = Vec::with_capacity(points.len() + 1);
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                cmds.push(PathCmd::MoveTo(*p));
            } else {
                cmds.push(PathCmd::LineTo(*p));
            }
        }
        if !points.is_empty() {
            cmds.push(PathCmd::Close);
        }
        Self { cmds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-4 && (a[1] - b[1]).abs() < 1e-4
    }

    #[test]
    fn concat_applies_right_then_left() {
        let t = Transform2D::translate(10.0, 5.0).concat(Transform2D::scale(2.0, 3.0));
        assert!(approx(t.apply([1.0, 1.0]), [12.0, 8.0]));
    }

    #[test]
    fn rotate_quarter_turn_is_clockwise_on_screen() {
        let t = Transform2D::rotate(std::f32::consts::FRAC_PI_2);
        assert!(approx(t.apply([1.0, 0.0]), [0.0, 1.0]));
    }

    #[test]
    fn invert_round_trips_points() {
        let t = Transform2D::translate(4.0, -2.0)
            .concat(Transform2D::rotate(0.3))
            .concat(Transform2D::scale(2.0, 2.0));
        let inv = t.invert().unwrap();
        let p = [3.5, -1.25];
        assert!(approx(inv.apply(t.apply(p)), p));
        assert!(Transform2D::scale(0.0, 1.0).invert().is_none());
    }

    #[test]
    fn polygon_is_closed() {
        let p = Path::polygon(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(p.cmds.len(), 4);
        assert_eq!(p.cmds.last(), Some(&PathCmd::Close));
    }
}
