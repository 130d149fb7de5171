use galaxy_common::GalaxyError;
use galaxy_core::{PointCloud, RenderBackend};

use crate::points::PointsHandle;

use super::state::RenderState;

impl RenderBackend for RenderState {
    type Handle = PointsHandle;

    fn upload(&mut self, cloud: &PointCloud, point_size: f32) -> Result<PointsHandle, GalaxyError> {
        let count = u32::try_from(cloud.len()).map_err(|_| {
            GalaxyError::Renderer(format!("{} points exceed the instance limit", cloud.len()))
        })?;

        let mesh = self.points.create_mesh(&self.gpu.device, cloud, point_size);
        let id = self.next_id;
        self.next_id += 1;
        self.meshes.insert(id, mesh);

        tracing::debug!(id, points = count, point_size, "uploaded point cloud");
        Ok(PointsHandle(id))
    }

    fn attach(&mut self, handle: &PointsHandle) {
        if self.meshes.contains_key(&handle.0) && !self.scene.contains(&handle.0) {
            self.scene.push(handle.0);
        }
    }

    fn detach(&mut self, handle: &PointsHandle) {
        self.scene.retain(|id| *id != handle.0);
    }

    fn release(&mut self, handle: PointsHandle) {
        self.scene.retain(|id| *id != handle.0);
        match self.meshes.remove(&handle.0) {
            Some(mesh) => {
                mesh.dispose();
                tracing::debug!(id = handle.0, "released point cloud");
            }
            None => tracing::warn!(id = handle.0, "release of unknown point cloud"),
        }
    }

    fn set_rotation_y(&mut self, handle: &PointsHandle, radians: f32) {
        if let Some(mesh) = self.meshes.get_mut(&handle.0) {
            mesh.rotation_y = radians;
        }
    }
}
