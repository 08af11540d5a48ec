use crate::image::ImageId;

#[derive(Debug, thiserror::Error)]
pub enum PlanesError {
    /// The image has no area to map a plane onto (hidden, or not laid out yet).
    #[error("image {id:?} has a degenerate size {width}x{height}")]
    DegenerateImage { id: ImageId, width: f32, height: f32 },

    /// The rendering backend could not allocate the mesh resources.
    #[error("failed to create mesh for image {id:?}: {reason}")]
    MeshCreation { id: ImageId, reason: String },
}
