use globe_core::constants::*;
use globe_core::Camera;
use glam::{Mat4, Quat};
use web_sys as web;

mod atmosphere;
mod globe;
mod helpers;
mod markers;

use atmosphere::{create_atmosphere_resources, AtmosphereResources};
use globe::{create_globe_resources, GlobeResources};
pub use markers::MarkerInstance;
use markers::{create_marker_resources, MarkerResources};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    globe_model: [[f32; 4]; 4],
    marker_model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    sun_dir: [f32; 4],
    point_pos: [f32; 4],
    point_color: [f32; 4],
    params: [f32; 4],
}

/// What the frame loop wants drawn this frame.
pub struct SceneView<'s> {
    pub camera: Camera,
    pub globe_rotation: Quat,
    /// Whether markers are carried by the globe rotation or stay in the
    /// scene frame.
    pub markers_follow_globe: bool,
    pub time_sec: f32,
    pub markers: &'s [MarkerInstance],
}

fn scaled(rgb: [f32; 3], k: f32) -> [f32; 3] {
    [rgb[0] * k, rgb[1] * k, rgb[2] * k]
}

impl Globals {
    fn from_view(scene: &SceneView) -> Self {
        let globe_model = Mat4::from_quat(scene.globe_rotation);
        let marker_model = if scene.markers_follow_globe {
            globe_model
        } else {
            Mat4::IDENTITY
        };
        let ambient = scaled(helpers::srgb3_to_linear(AMBIENT_LIGHT_RGB), AMBIENT_LIGHT_INTENSITY);
        let point = scaled(helpers::srgb3_to_linear(POINT_LIGHT_RGB), POINT_LIGHT_INTENSITY);
        let eye = scene.camera.eye;
        Self {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
            view: scene.camera.view_matrix().to_cols_array_2d(),
            globe_model: globe_model.to_cols_array_2d(),
            marker_model: marker_model.to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            ambient: [ambient[0], ambient[1], ambient[2], 0.0],
            sun_dir: [SUN_DIRECTION[0], SUN_DIRECTION[1], SUN_DIRECTION[2], SUN_INTENSITY],
            point_pos: [
                POINT_LIGHT_POSITION[0],
                POINT_LIGHT_POSITION[1],
                POINT_LIGHT_POSITION[2],
                POINT_LIGHT_RANGE,
            ],
            point_color: [point[0], point[1], point[2], GLOBE_SHININESS],
            params: [GLOBE_OPACITY, scene.time_sec, 0.0, 0.0],
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // kept alive alongside its view
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    globe: GlobeResources,
    atmosphere: AtmosphereResources,
    markers: MarkerResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
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
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
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
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let globe = create_globe_resources(&device, &queue, &globals_bgl, format);
        let atmosphere = create_atmosphere_resources(&device, &globals_bgl, format);
        let markers = create_marker_resources(&device, &globals_bgl, format);

        let bg = helpers::srgb3_to_linear(BACKGROUND_RGB);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            globals_buffer,
            globals_bg,
            globe,
            atmosphere,
            markers,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_tex = tex;
            self.depth_view = view;
        }
    }

    pub fn render(&mut self, scene: &SceneView) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals::from_view(scene);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        self.markers
            .write_instances(&self.device, &self.queue, scene.markers);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            // globe
            rpass.set_pipeline(&self.globe.pipeline);
            rpass.set_bind_group(1, &self.globe.texture_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.globe.mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(
                self.globe.mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.draw_indexed(0..self.globe.mesh.index_count, 0, 0..1);

            // markers
            if self.markers.count > 0 {
                rpass.set_pipeline(&self.markers.pipeline);
                rpass.set_vertex_buffer(0, self.markers.mesh.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, self.markers.instance_buffer.slice(..));
                rpass.set_index_buffer(
                    self.markers.mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(0..self.markers.mesh.index_count, 0, 0..self.markers.count);
            }

            // atmosphere last: additive and no depth writes
            rpass.set_pipeline(&self.atmosphere.pipeline);
            rpass.set_vertex_buffer(0, self.atmosphere.mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(
                self.atmosphere.mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.draw_indexed(0..self.atmosphere.mesh.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
