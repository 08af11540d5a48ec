use crate::geometry::PlaneGeometry;
use crate::material::PlaneMaterial;
use glam::{Vec2, Vec3};

/// Document-order index of a tracked image. Stable across rebuilds as long
/// as the set of images in the document does not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub usize);

/// Layout box of an image in document pixels (top-left origin, +y down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// Anything that can stand in for a DOM image when building planes.
pub trait ImageSource {
    fn bounding_box(&self) -> BoundingBox;
    /// Intrinsic `width` attribute, if present and usable.
    fn width_attribute(&self) -> Option<f32>;
}

/// A fixed box, for frontends that snapshot layout up front and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaticImage {
    pub bbox: BoundingBox,
    pub width_attr: Option<f32>,
}

impl ImageSource for StaticImage {
    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    fn width_attribute(&self) -> Option<f32> {
        self.width_attr
    }
}

/// Parses a raw `width` attribute. Missing, non-numeric, non-finite and
/// non-positive values all count as absent.
pub fn parse_width_attribute(raw: Option<&str>) -> Option<f32> {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|w| w.is_finite() && *w > 0.0)
}

#[inline]
pub fn effective_width(bbox: &BoundingBox, width_attr: Option<f32>) -> f32 {
    width_attr.unwrap_or(bbox.width)
}

/// One tracked image: captured layout, CPU-side material state, current mesh
/// transform and the backend handle owning its GPU resources.
#[derive(Debug)]
pub struct ImageRecord<H> {
    pub id: ImageId,
    pub bbox: BoundingBox,
    pub width_attr: Option<f32>,
    pub geometry: PlaneGeometry,
    pub material: PlaneMaterial,
    pub position: Vec2,
    pub handle: H,
}

impl<H> ImageRecord<H> {
    #[inline]
    pub fn effective_width(&self) -> f32 {
        effective_width(&self.bbox, self.width_attr)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.geometry.width, self.geometry.height)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.position.extend(0.0)
    }
}
