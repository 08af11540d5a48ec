//! Owns one mesh per tracked image and rebuilds the whole set on demand.

use crate::error::PlanesError;
use crate::geometry::PlaneGeometry;
use crate::image::{ImageId, ImageRecord, ImageSource};
use crate::material::{MaterialTemplate, PlaneMaterial};
use glam::Vec2;

/// Releases backend resources owned by a mesh handle.
pub trait MeshRelease {
    type Handle;

    fn release_mesh(&mut self, handle: Self::Handle);
}

/// Allocates the backend side of a mesh (buffers, texture, bind group).
pub trait MeshFactory<S: ImageSource>: MeshRelease {
    fn create_mesh(
        &mut self,
        id: ImageId,
        source: &S,
        geometry: &PlaneGeometry,
        material: &PlaneMaterial,
    ) -> Result<Self::Handle, PlanesError>;
}

#[derive(Debug)]
pub struct ImageRegistry<H> {
    records: Vec<ImageRecord<H>>,
    template: MaterialTemplate,
    generation: u64,
}

impl<H> Default for ImageRegistry<H> {
    fn default() -> Self {
        Self::new(MaterialTemplate::default())
    }
}

impl<H> ImageRegistry<H> {
    pub fn new(template: MaterialTemplate) -> Self {
        Self {
            records: Vec::new(),
            template,
            generation: 0,
        }
    }

    /// Creates one record per source in document order and returns how many
    /// meshes were built. Sources that cannot become a mesh are skipped.
    pub fn build_all<S, F>(&mut self, sources: &[S], factory: &mut F) -> usize
    where
        S: ImageSource,
        F: MeshFactory<S, Handle = H>,
    {
        if !self.records.is_empty() {
            log::warn!(
                "build_all called with {} live meshes; disposing them first",
                self.records.len()
            );
            self.dispose_all(factory);
        }

        self.records.reserve(sources.len());
        for (index, source) in sources.iter().enumerate() {
            let id = ImageId(index);
            let bbox = source.bounding_box();
            let width_attr = source.width_attribute();
            let geometry = match PlaneGeometry::for_image(id, &bbox, width_attr) {
                Ok(g) => g,
                Err(e) => {
                    log::warn!("skipping image: {e}");
                    continue;
                }
            };
            let material = self.template.instantiate();
            let handle = match factory.create_mesh(id, source, &geometry, &material) {
                Ok(h) => h,
                Err(e) => {
                    log::warn!("skipping image: {e}");
                    continue;
                }
            };
            self.records.push(ImageRecord {
                id,
                bbox,
                width_attr,
                geometry,
                material,
                position: Vec2::ZERO,
                handle,
            });
        }
        self.generation += 1;
        log::debug!(
            "built {} of {} image meshes (generation {})",
            self.records.len(),
            sources.len(),
            self.generation
        );
        self.records.len()
    }

    /// Releases every mesh and empties the set. Returns the number released.
    pub fn dispose_all<F>(&mut self, factory: &mut F) -> usize
    where
        F: MeshRelease<Handle = H> + ?Sized,
    {
        let count = self.records.len();
        for record in self.records.drain(..) {
            factory.release_mesh(record.handle);
        }
        count
    }

    /// Dispose-then-build in one step.
    pub fn refresh<S, F>(&mut self, sources: &[S], factory: &mut F) -> usize
    where
        S: ImageSource,
        F: MeshFactory<S, Handle = H>,
    {
        self.dispose_all(factory);
        self.build_all(sources, factory)
    }

    #[inline]
    pub fn records(&self) -> &[ImageRecord<H>] {
        &self.records
    }

    #[inline]
    pub fn records_mut(&mut self) -> &mut [ImageRecord<H>] {
        &mut self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records stay sorted by id, skipped images leave gaps.
    pub fn get_mut(&mut self, id: ImageId) -> Option<&mut ImageRecord<H>> {
        let index = self.records.binary_search_by_key(&id, |r| r.id).ok()?;
        self.records.get_mut(index)
    }

    /// Bumped on every build; lets frontends notice that handles changed.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
