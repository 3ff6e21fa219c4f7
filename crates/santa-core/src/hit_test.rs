use crate::display_list::{Command, DisplayList};
use crate::scene::*;

/// Result of a hit test for a single topmost region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitResult {
    /// The user-specified region id.
    pub region_id: u32,
    /// Z layering value; larger is visually on top.
    pub z: i32,
    /// Geometry of the region in its local space.
    pub rect: Rect,
    /// Normalized coordinates within the region ([0,1] range).
    pub local_uv: [f32; 2],
}

#[derive(Clone, Debug)]
struct HitItem {
    order: usize,
    id: u32,
    z: i32,
    rect: Rect,
    inverse: Option<Transform2D>,
}

/// Spatial index over the hit regions of a display list.
#[derive(Clone, Debug, Default)]
pub struct HitIndex {
    items: Vec<HitItem>,
}

impl HitIndex {
    pub fn build(list: &DisplayList) -> Self {
        let items = list
            .commands
            .iter()
            .enumerate()
            .filter_map(|(order, cmd)| match cmd {
                Command::HitRegionRect { id, rect, z, transform } => Some(HitItem {
                    order,
                    id: *id,
                    z: *z,
                    rect: *rect,
                    inverse: transform.invert(),
                }),
                _ => None,
            })
            .collect();
        Self { items }
    }

    /// Topmost region under `pos`: highest z, later submission breaking ties.
    pub fn topmost_at(&self, pos: [f32; 2]) -> Option<HitResult> {
        self.items
            .iter()
            .filter_map(|item| {
                let local = item.inverse?.apply(pos);
                item.rect.contains(local).then(|| {
                    let u = if item.rect.w > 0.0 { (local[0] - item.rect.x) / item.rect.w } else { 0.0 };
                    let v = if item.rect.h > 0.0 { (local[1] - item.rect.y) / item.rect.h } else { 0.0 };
                    (item, [u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)])
                })
            })
            .max_by_key(|(item, _)| (item.z, item.order))
            .map(|(item, local_uv)| HitResult {
                region_id: item.id,
                z: item.z,
                rect: item.rect,
                local_uv,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::Viewport;
    use crate::painter::Painter;

    #[test]
    fn picks_topmost_region_and_reports_uv() {
        let mut p = Painter::begin_frame(Viewport { width: 100, height: 100 });
        p.hit_region_rect(1, Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        p.hit_region_rect(2, Rect::new(10.0, 10.0, 20.0, 10.0), 3);
        let index = HitIndex::build(&p.finish());

        let hit = index.topmost_at([20.0, 15.0]).unwrap();
        assert_eq!(hit.region_id, 2);
        assert_eq!(hit.local_uv, [0.5, 0.5]);

        assert_eq!(index.topmost_at([80.0, 80.0]).unwrap().region_id, 1);
        assert!(index.topmost_at([150.0, 10.0]).is_none());
    }

    #[test]
    fn regions_follow_their_transform() {
        let mut p = Painter::begin_frame(Viewport { width: 100, height: 100 });
        p.push_transform(Transform2D::translate(50.0, 50.0));
        p.hit_region_rect(7, Rect::new(0.0, 0.0, 10.0, 10.0), 0);
        let index = HitIndex::build(&p.finish());
        assert!(index.topmost_at([5.0, 5.0]).is_none());
        assert_eq!(index.topmost_at([55.0, 55.0]).unwrap().region_id, 7);
    }
}
