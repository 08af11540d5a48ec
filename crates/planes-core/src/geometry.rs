use crate::constants::PLANE_SEGMENTS;
use crate::error::PlanesError;
use crate::image::{effective_width, BoundingBox, ImageId};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Subdivided plane centred on the origin in the XY plane, facing +z.
///
/// Rows are emitted top to bottom. `u` grows left to right and `v` is 1 on the
/// top edge, 0 on the bottom edge, so a hit's uv reads like a GL texture
/// coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub segments: u32,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_segments(width, height, PLANE_SEGMENTS)
    }

    pub fn with_segments(width: f32, height: f32, segments: u32) -> Self {
        Self {
            width,
            height,
            segments: segments.max(1),
        }
    }

    /// Plane sized for an image: the width attribute when present, else the
    /// laid-out box width; always the box height.
    pub fn for_image(
        id: ImageId,
        bbox: &BoundingBox,
        width_attr: Option<f32>,
    ) -> Result<Self, PlanesError> {
        let width = effective_width(bbox, width_attr);
        let height = bbox.height;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(PlanesError::DegenerateImage { id, width, height });
        }
        Ok(Self::new(width, height))
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        let n = self.segments as usize + 1;
        n * n
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        let s = self.segments as usize;
        s * s * 6
    }

    pub fn vertices(&self) -> Vec<PlaneVertex> {
        let grid = self.segments;
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let seg_w = self.width / grid as f32;
        let seg_h = self.height / grid as f32;
        let mut out = Vec::with_capacity(self.vertex_count());
        for iy in 0..=grid {
            let y = iy as f32 * seg_h - half_h;
            for ix in 0..=grid {
                let x = ix as f32 * seg_w - half_w;
                out.push(PlaneVertex {
                    position: [x, -y, 0.0],
                    uv: [ix as f32 / grid as f32, 1.0 - iy as f32 / grid as f32],
                });
            }
        }
        out
    }

    /// Two counter-clockwise triangles per cell.
    pub fn indices(&self) -> Vec<u16> {
        let grid = self.segments as u16;
        let row = grid + 1;
        let mut out = Vec::with_capacity(self.index_count());
        for iy in 0..grid {
            for ix in 0..grid {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = ix + 1 + row * (iy + 1);
                let d = ix + 1 + row * iy;
                out.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        out
    }
}
