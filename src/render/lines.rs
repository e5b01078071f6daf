use super::helpers;
use folio_core::constants::MAX_MESHES;
use folio_core::{geometry, MeshSet};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineVertex {
    pub(crate) position: [f32; 3],
    pub(crate) mesh: u32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    pub(crate) models: [[[f32; 4]; 4]; MAX_MESHES],
    // opacity of mesh i lives at [i / 4][i % 4]
    pub(crate) opacity: [[f32; 4]; MAX_MESHES / 4],
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Uint32];

/// Wireframe meshes: every mesh's edges in one line list, tagged with the
/// mesh index so a single draw picks the right model matrix.
pub(crate) struct LineResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertices: Option<wgpu::Buffer>,
    pub(crate) count: u32,
}

pub(crate) fn create_line_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
) -> LineResources {
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        "lines_pipeline",
        layout,
        shader,
        ("vs_lines", "fs_lines"),
        &buffers,
        wgpu::PrimitiveTopology::LineList,
        format,
        wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
    );
    LineResources {
        pipeline,
        vertices: None,
        count: 0,
    }
}

pub(crate) fn build_line_vertices(meshes: &MeshSet) -> Vec<LineVertex> {
    meshes
        .iter()
        .take(MAX_MESHES)
        .enumerate()
        .flat_map(|(i, m)| {
            geometry::wireframe(m.kind)
                .into_iter()
                .map(move |p| LineVertex {
                    position: p.to_array(),
                    mesh: i as u32,
                })
        })
        .collect()
}

pub(crate) fn pack_mesh_uniforms(models: &[glam::Mat4], opacity: &[f32]) -> MeshUniforms {
    let mut u = MeshUniforms {
        models: [glam::Mat4::IDENTITY.to_cols_array_2d(); MAX_MESHES],
        opacity: [[0.0; 4]; MAX_MESHES / 4],
    };
    for (i, m) in models.iter().take(MAX_MESHES).enumerate() {
        u.models[i] = m.to_cols_array_2d();
    }
    for (i, o) in opacity.iter().take(MAX_MESHES).enumerate() {
        u.opacity[i / 4][i % 4] = *o;
    }
    u
}

impl LineResources {
    pub(crate) fn upload(&mut self, device: &wgpu::Device, vertices: &[LineVertex]) {
        if let Some(old) = self.vertices.take() {
            old.destroy();
        }
        self.vertices = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_lines"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.count = vertices.len() as u32;
    }

    pub(crate) fn destroy(&mut self) {
        if let Some(b) = self.vertices.take() {
            b.destroy();
        }
        self.count = 0;
    }
}
