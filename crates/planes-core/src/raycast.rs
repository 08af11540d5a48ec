use crate::image::{ImageId, ImageRecord};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneHit {
    pub distance: f32,
    pub uv: Vec2,
}

/// Intersects a ray with the front face of a z-aligned rectangle.
///
/// `uv` is (0, 0) at the bottom-left corner and (1, 1) at the top-right.
pub fn intersect_plane(ray: &Ray, center: Vec3, size: Vec2) -> Option<PlaneHit> {
    if ray.direction.z >= -1e-6 || size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    let t = (center.z - ray.origin.z) / ray.direction.z;
    if t < 0.0 {
        return None;
    }
    let p = ray.origin + ray.direction * t;
    let u = (p.x - center.x) / size.x + 0.5;
    let v = (p.y - center.y) / size.y + 0.5;
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return None;
    }
    Some(PlaneHit {
        distance: t,
        uv: Vec2::new(u, v),
    })
}

/// Nearest plane along the ray. Equal distances resolve to the earlier plane.
pub fn nearest_hit<I>(ray: &Ray, planes: I) -> Option<(usize, PlaneHit)>
where
    I: IntoIterator<Item = (Vec3, Vec2)>,
{
    let mut hits: SmallVec<[(usize, PlaneHit); 4]> = planes
        .into_iter()
        .enumerate()
        .filter_map(|(i, (center, size))| intersect_plane(ray, center, size).map(|h| (i, h)))
        .collect();
    hits.sort_by(|a, b| a.1.distance.total_cmp(&b.1.distance));
    hits.first().copied()
}

/// Writes the hit uv into the nearest mesh's pointer uniform. Meshes that are
/// not hit keep their previous value; no hit means no write.
pub fn update_pointer_uv<H>(records: &mut [ImageRecord<H>], ray: &Ray) -> Option<ImageId> {
    let (index, hit) = nearest_hit(ray, records.iter().map(|r| (r.center(), r.size())))?;
    let record = &mut records[index];
    record.material.set_pointer_uv(hit.uv);
    Some(record.id)
}
