use super::helpers;
use folio_core::ParticleInstance;
use wgpu;
use wgpu::util::DeviceExt;

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Instanced billboards, one quad per particle, blended additively.
pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instances: Option<wgpu::Buffer>,
    pub(crate) count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
) -> ParticleResources {
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBUTES,
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        "particles_pipeline",
        layout,
        shader,
        ("vs_particles", "fs_particles"),
        &buffers,
        wgpu::PrimitiveTopology::TriangleList,
        format,
        helpers::ADDITIVE,
    );
    ParticleResources {
        pipeline,
        instances: None,
        count: 0,
    }
}

impl ParticleResources {
    pub(crate) fn upload(&mut self, device: &wgpu::Device, instances: &[ParticleInstance]) {
        if let Some(old) = self.instances.take() {
            old.destroy();
        }
        self.instances = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_instances"),
            contents: bytemuck::cast_slice(instances),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.count = instances.len() as u32;
    }

    pub(crate) fn destroy(&mut self) {
        if let Some(b) = self.instances.take() {
            b.destroy();
        }
        self.count = 0;
    }
}
