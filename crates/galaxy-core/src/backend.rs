//! The boundary between the scene session and a rendering engine.

use galaxy_common::GalaxyError;

use crate::generator::PointCloud;

/// Rendering-engine operations the scene session relies on.
///
/// A [`Self::Handle`] names one uploaded point cloud (its geometry plus its
/// material). Handles are not `Clone`: [`RenderBackend::release`] consumes
/// the handle, so each upload is disposed exactly once.
pub trait RenderBackend {
    type Handle;

    /// Create GPU-side geometry and material for `cloud`.
    fn upload(&mut self, cloud: &PointCloud, point_size: f32) -> Result<Self::Handle, GalaxyError>;

    /// Add the points to the drawn scene.
    fn attach(&mut self, handle: &Self::Handle);

    /// Remove the points from the drawn scene without freeing them.
    fn detach(&mut self, handle: &Self::Handle);

    /// Dispose of the geometry and material behind `handle`.
    fn release(&mut self, handle: Self::Handle);

    /// Set the rotation of the points about the vertical axis.
    fn set_rotation_y(&mut self, handle: &Self::Handle, radians: f32);
}
