use std::collections::HashMap;
use std::sync::Arc;

use galaxy_common::Color;
use galaxy_config::schema::RendererConfig;
use winit::window::Window;

use crate::camera::OrbitCamera;
use crate::gpu::{present_mode, GpuContext, RendererError};
use crate::matrix;
use crate::points::{min_diameter, PointsMesh, PointsPipeline, PointsUniforms};

use super::helpers::{clear_color_for, effective_pixel_ratio, log_first_frame};

/// GPU context, the point pipeline, and every uploaded point cloud.
///
/// Uploaded clouds live in `meshes` until released; only those listed in
/// `scene` are drawn.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) points: PointsPipeline,
    pub(super) meshes: HashMap<u64, PointsMesh>,
    pub(super) scene: Vec<u64>,
    pub(super) next_id: u64,
    clear_color: wgpu::Color,
    max_pixel_ratio: f64,
}

impl RenderState {
    /// Create a fully initialized render state for a window.
    pub async fn new(window: Arc<Window>, config: &RendererConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.vsync).await?;
        let points = PointsPipeline::new(&gpu.device, gpu.format());
        let clear_color = clear_color_for(config.clear_color, gpu.format());

        Ok(Self {
            gpu,
            points,
            meshes: HashMap::new(),
            scene: Vec::new(),
            next_id: 1,
            clear_color,
            max_pixel_ratio: config.max_pixel_ratio,
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.gpu.scale_factor = scale_factor;
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = clear_color_for(color, self.gpu.format());
    }

    /// Apply a reloaded `[renderer]` section.
    pub fn apply_config(&mut self, config: &RendererConfig) {
        self.set_clear_color(config.clear_color);
        self.max_pixel_ratio = config.max_pixel_ratio;

        let mode = present_mode(config.vsync);
        if self.gpu.surface_config.present_mode != mode {
            self.gpu.surface_config.present_mode = mode;
            self.gpu.reconfigure();
        }
    }

    /// Total points across attached clouds.
    pub fn attached_points(&self) -> u64 {
        self.scene
            .iter()
            .filter_map(|id| self.meshes.get(id))
            .map(|mesh| mesh.instance_count as u64)
            .sum()
    }

    /// Draw every attached cloud from `camera`.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render(&mut self, camera: &OrbitCamera) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera_view = camera.view();
        let projection = camera.projection();
        let pixel_ratio = effective_pixel_ratio(self.gpu.scale_factor, self.max_pixel_ratio);
        let logical_height = self.gpu.size.height as f32 / self.gpu.scale_factor.max(0.1) as f32;
        let min_ndc = min_diameter(logical_height, pixel_ratio);

        for id in &self.scene {
            if let Some(mesh) = self.meshes.get(id) {
                let model = matrix::rotate_y(mesh.rotation_y);
                mesh.update_uniforms(
                    &self.gpu.queue,
                    &PointsUniforms {
                        model_view: matrix::mul(&camera_view, &model),
                        projection,
                        point_size: mesh.point_size,
                        aspect: self.gpu.size.aspect(),
                        min_diameter: min_ndc,
                        _pad: 0.0,
                    },
                );
            }
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("galaxy frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("galaxy points pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for id in &self.scene {
                if let Some(mesh) = self.meshes.get(id) {
                    self.points.draw(&mut pass, mesh);
                }
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
