use crate::constants::{CLEAR_COLOR, PARTICLE_VERTICES};
use crate::dom;
use folio_core::{CoreError, FrameSnapshot, RenderSurface, SceneModel, Viewport};
use web_sys as web;

mod helpers;
mod lines;
mod particles;

use lines::{LineResources, MeshUniforms};
use particles::ParticleResources;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    particle_model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_a: [f32; 4],
    light_b: [f32; 4],
    light_a_color: [f32; 4],
    light_b_color: [f32; 4],
    mesh_color: [f32; 4],
    mesh_emissive: [f32; 4],
    params: [f32; 4],
}

/// Material values fixed at upload time.
#[derive(Clone, Copy, Default)]
struct Looks {
    particle_size: f32,
    particle_opacity: f32,
    mesh_color: [f32; 3],
    mesh_emissive: [f32; 3],
    emissive_intensity: f32,
}

/// WebGPU surface on the background canvas. Owns the canvas element: the
/// canvas is removed from the page when the surface is dropped.
pub struct GpuSurface {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    globals_buffer: wgpu::Buffer,
    meshes_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    particles: ParticleResources,
    lines: LineResources,
    looks: Looks,
}

impl GpuSurface {
    pub async fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // transparent canvas over the page background
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                helpers::uniform_entry(1, wgpu::ShaderStages::VERTEX_FRAGMENT),
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let globals_buffer = helpers::create_uniform_buffer::<Globals>(&device, "scene_globals");
        let meshes_buffer = helpers::create_uniform_buffer::<MeshUniforms>(&device, "mesh_uniforms");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: meshes_buffer.as_entire_binding(),
                },
            ],
        });
        let particles = particles::create_particle_resources(&device, &pl, &shader, format);
        let lines = lines::create_line_resources(&device, &pl, &shader, format);
        log::info!("[gpu] surface ready {}x{} {:?}", width, height, format);

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            globals_buffer,
            meshes_buffer,
            bind_group,
            particles,
            lines,
            looks: Looks::default(),
        })
    }

    fn globals(&self, frame: &FrameSnapshot) -> Globals {
        let l = &frame.lights;
        let pos_int = |p: glam::Vec3, i: f32| [p.x, p.y, p.z, i];
        let rgb_w = |c: [f32; 3], w: f32| [c[0], c[1], c[2], w];
        Globals {
            view: frame.view.to_cols_array_2d(),
            proj: frame.projection.to_cols_array_2d(),
            particle_model: frame.particle_model.to_cols_array_2d(),
            camera_pos: frame.camera_position.extend(1.0).to_array(),
            light_a: pos_int(l.a.position, l.a.intensity),
            light_b: pos_int(l.b.position, l.b.intensity),
            light_a_color: rgb_w(l.a.color, l.range),
            light_b_color: rgb_w(l.b.color, l.range),
            mesh_color: rgb_w(self.looks.mesh_color, 1.0),
            mesh_emissive: rgb_w(self.looks.mesh_emissive, self.looks.emissive_intensity),
            params: [
                l.ambient,
                self.looks.particle_size,
                self.looks.particle_opacity,
                frame.elapsed_sec,
            ],
        }
    }
}

impl RenderSurface for GpuSurface {
    fn upload(&mut self, model: &SceneModel) -> Result<(), CoreError> {
        let config = model.config();
        self.looks = Looks {
            particle_size: config.particles.size,
            particle_opacity: config.particles.opacity,
            mesh_color: config.meshes.color,
            mesh_emissive: config.meshes.emissive,
            emissive_intensity: config.meshes.emissive_intensity,
        };
        let instances = model.particles.cloud.instances();
        if instances.is_empty() {
            return Err(CoreError::Surface("no particles to upload".into()));
        }
        self.particles.upload(&self.device, &instances);
        let vertices = lines::build_line_vertices(&model.meshes);
        self.lines.upload(&self.device, &vertices);
        log::info!(
            "[gpu] uploaded {} particles, {} line vertices",
            self.particles.count,
            self.lines.count
        );
        Ok(())
    }

    fn resize(&mut self, viewport: &Viewport, max_pixel_ratio: f64) {
        let (width, height) = dom::sync_canvas_backing_size(&self.canvas, viewport, max_pixel_ratio);
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), CoreError> {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(CoreError::Surface(e.to_string()));
            }
            Err(e) => return Err(CoreError::Surface(e.to_string())),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&self.globals(frame)));
        let mesh_uniforms = lines::pack_mesh_uniforms(&frame.mesh_models, &frame.mesh_opacity);
        self.queue
            .write_buffer(&self.meshes_buffer, 0, bytemuck::bytes_of(&mesh_uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let [r, g, b, a] = CLEAR_COLOR;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if let Some(vb) = &self.lines.vertices {
                rpass.set_pipeline(&self.lines.pipeline);
                rpass.set_vertex_buffer(0, vb.slice(..));
                rpass.draw(0..self.lines.count, 0..1);
            }
            if let Some(ib) = &self.particles.instances {
                rpass.set_pipeline(&self.particles.pipeline);
                rpass.set_vertex_buffer(0, ib.slice(..));
                rpass.draw(0..PARTICLE_VERTICES, 0..self.particles.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl Drop for GpuSurface {
    fn drop(&mut self) {
        self.particles.destroy();
        self.lines.destroy();
        self.globals_buffer.destroy();
        self.meshes_buffer.destroy();
        self.device.destroy();
        self.canvas.remove();
        log::info!("[gpu] surface released");
    }
}
