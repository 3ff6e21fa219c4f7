use santa_core::Color;

/// Draw precedence; higher layers paint over lower ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Layer(pub i32);

impl Layer {
    /// Boots and legs.
    pub const GROUND: Layer = Layer(0);
    /// Body and beard.
    pub const TORSO: Layer = Layer(1);
    /// Arms, hands and the hat body.
    pub const LIMBS: Layer = Layer(2);
    /// Hat trim.
    pub const TRIM: Layer = Layer(3);
    /// Head, face details and pompom.
    pub const FACE: Layer = Layer(4);
}

/// Which piece of the figure a shape depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Boot,
    Leg,
    Body,
    Beard,
    Arm,
    HatBase,
    HatCone,
    Hand,
    HatTrim,
    Pompom,
    Head,
    Eye,
    Nose,
}

impl Part {
    pub const ALL: [Part; 13] = [
        Part::Boot,
        Part::Leg,
        Part::Body,
        Part::Beard,
        Part::Arm,
        Part::HatBase,
        Part::HatCone,
        Part::Hand,
        Part::HatTrim,
        Part::Pompom,
        Part::Head,
        Part::Eye,
        Part::Nose,
    ];

    /// Parts filled with the suit color.
    pub fn is_suit(self) -> bool {
        matches!(
            self,
            Part::Leg | Part::Body | Part::Arm | Part::HatBase | Part::HatCone
        )
    }

    pub fn is_face(self) -> bool {
        matches!(self, Part::Head | Part::Eye | Part::Nose)
    }

    pub fn is_footing(self) -> bool {
        matches!(self, Part::Boot | Part::Leg)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Ellipse,
    Circle,
    Rectangle,
    Polygon,
}

/// Shape geometry in data space (y up).
///
/// Sizes are full extents. Angles are degrees, counter-clockwise.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Ellipse {
        center: [f32; 2],
        width: f32,
        height: f32,
        angle: f32,
    },
    Circle {
        center: [f32; 2],
        radius: f32,
    },
    /// Anchored at its lower-left corner and rotated about it.
    Rectangle {
        anchor: [f32; 2],
        width: f32,
        height: f32,
        angle: f32,
    },
    Polygon {
        points: Vec<[f32; 2]>,
    },
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Ellipse { .. } => ShapeKind::Ellipse,
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Polygon { .. } => ShapeKind::Polygon,
        }
    }
}

/// One filled primitive of a figure. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    part: Part,
    geometry: Geometry,
    fill: Color,
    layer: Layer,
}

impl Shape {
    pub fn new(part: Part, geometry: Geometry, fill: Color, layer: Layer) -> Self {
        Self {
            part,
            geometry,
            fill,
            layer,
        }
    }

    pub fn ellipse(part: Part, center: [f32; 2], width: f32, height: f32, fill: Color, layer: Layer) -> Self {
        Self::new(
            part,
            Geometry::Ellipse {
                center,
                width,
                height,
                angle: 0.0,
            },
            fill,
            layer,
        )
    }

    pub fn circle(part: Part, center: [f32; 2], radius: f32, fill: Color, layer: Layer) -> Self {
        Self::new(part, Geometry::Circle { center, radius }, fill, layer)
    }

    pub fn rectangle(
        part: Part,
        anchor: [f32; 2],
        size: [f32; 2],
        angle: f32,
        fill: Color,
        layer: Layer,
    ) -> Self {
        Self::new(
            part,
            Geometry::Rectangle {
                anchor,
                width: size[0],
                height: size[1],
                angle,
            },
            fill,
            layer,
        )
    }

    pub fn polygon(part: Part, points: Vec<[f32; 2]>, fill: Color, layer: Layer) -> Self {
        Self::new(part, Geometry::Polygon { points }, fill, layer)
    }

    pub fn part(&self) -> Part {
        self.part
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }
}
