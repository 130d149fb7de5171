//! Per-point instance data and per-cloud uniforms.

use galaxy_core::PointCloud;

/// One galaxy point, drawn as an instanced screen-facing quad.
///
/// Layout: position(vec3) + color(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl PointInstance {
    /// wgpu vertex buffer layout for `PointInstance`, stepped per instance.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // color: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

/// Vertices per point quad (two triangles).
pub const QUAD_VERTICES: u32 = 6;

/// Uniforms for one point cloud, rewritten every frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointsUniforms {
    /// View × model (column-major).
    pub model_view: [f32; 16],
    pub projection: [f32; 16],
    /// Point diameter in world units at unit view distance.
    pub point_size: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Smallest drawn diameter in NDC units (one device pixel).
    pub min_diameter: f32,
    pub _pad: f32,
}

/// Decode one sRGB-encoded channel to linear light.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Interleave a cloud into instance data.
///
/// With `linear_colors` the sRGB colors are decoded so that an sRGB surface
/// re-encodes them to the authored values.
pub fn build_instances(cloud: &PointCloud, linear_colors: bool) -> Vec<PointInstance> {
    cloud
        .iter()
        .map(|(position, color)| {
            let color = if linear_colors {
                color.map(srgb_to_linear)
            } else {
                *color
            };
            PointInstance {
                position: *position,
                color,
            }
        })
        .collect()
}

/// Smallest on-screen diameter, in NDC units, for a viewport `logical_height`
/// points tall rendered at `pixel_ratio` device pixels per point.
pub fn min_diameter(logical_height: f32, pixel_ratio: f32) -> f32 {
    let pixels = (logical_height * pixel_ratio).max(1.0);
    2.0 / pixels
}
