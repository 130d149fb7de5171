//! GPU resources for one uploaded point cloud.

use super::types::PointsUniforms;

/// Instance buffer plus the uniform buffer and bind group that place it.
pub struct PointsMesh {
    pub instances: wgpu::Buffer,
    pub instance_count: u32,
    pub uniforms: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub point_size: f32,
    pub rotation_y: f32,
}

impl PointsMesh {
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &PointsUniforms) {
        queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(uniforms));
    }

    /// Free the GPU memory behind this cloud.
    pub fn dispose(self) {
        self.instances.destroy();
        self.uniforms.destroy();
    }
}
