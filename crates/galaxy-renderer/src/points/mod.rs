mod mesh;
mod pipeline;
mod types;

pub use mesh::PointsMesh;
pub use pipeline::{PointsPipeline, ADDITIVE_BLENDING};
pub use types::*;

/// Names one uploaded cloud on a [`crate::RenderState`].
///
/// Deliberately not `Clone`: releasing consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PointsHandle(pub(crate) u64);

impl PointsHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{generate, ParameterSet, RandomSource};

    #[test]
    fn point_instance_is_24_bytes() {
        assert_eq!(std::mem::size_of::<PointInstance>(), 24);
        assert_eq!(PointInstance::LAYOUT.array_stride, 24);
        assert_eq!(PointInstance::LAYOUT.step_mode, wgpu::VertexStepMode::Instance);
    }

    #[test]
    fn uniforms_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<PointsUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<PointsUniforms>(), 144);
    }

    #[test]
    fn srgb_to_linear_endpoints_and_midpoint() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((srgb_to_linear(0.5) - 0.214).abs() < 1e-3);
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
    }

    #[test]
    fn build_instances_keeps_order_and_positions() {
        let params = ParameterSet {
            count: 50,
            ..ParameterSet::default()
        };
        let cloud = generate(&params, &mut RandomSource::seeded(3)).unwrap();

        let raw = build_instances(&cloud, false);
        assert_eq!(raw.len(), 50);
        for (instance, (position, color)) in raw.iter().zip(cloud.iter()) {
            assert_eq!(&instance.position, position);
            assert_eq!(&instance.color, color);
        }

        let linear = build_instances(&cloud, true);
        for (instance, (_, color)) in linear.iter().zip(cloud.iter()) {
            for c in 0..3 {
                assert!(instance.color[c] <= color[c] + 1e-6);
            }
        }
    }

    #[test]
    fn build_instances_empty_cloud() {
        let params = ParameterSet {
            count: 0,
            ..ParameterSet::default()
        };
        let cloud = generate(&params, &mut RandomSource::seeded(3)).unwrap();
        assert!(build_instances(&cloud, true).is_empty());
    }

    #[test]
    fn min_diameter_is_one_device_pixel() {
        assert!((min_diameter(800.0, 2.0) - 2.0 / 1600.0).abs() < 1e-9);
        assert!((min_diameter(0.0, 1.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn handle_exposes_id() {
        assert_eq!(PointsHandle(7).id(), 7);
    }
}
