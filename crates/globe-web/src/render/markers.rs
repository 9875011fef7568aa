use super::helpers::{self, MeshBuffers, PipelineDesc};
use globe_core::constants::{MARKER_HEIGHT_SEGMENTS, MARKER_WIDTH_SEGMENTS};
use globe_core::{mesh, Marker};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerInstance {
    pub center_size: [f32; 4],
    pub color: [f32; 4],
}

impl MarkerInstance {
    /// Instance with full opacity; the frame loop animates `color[3]`.
    pub fn from_marker(m: &Marker) -> Self {
        let p = m.unit_position();
        let c = helpers::srgb3_to_linear(m.category().color_rgb());
        Self {
            center_size: [p.x, p.y, p.z, m.category().marker_size()],
            color: [c[0], c[1], c[2], 1.0],
        }
    }
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![3 => Float32x4, 4 => Float32x4];

pub(crate) struct MarkerResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) mesh: MeshBuffers,
    pub(crate) instance_buffer: wgpu::Buffer,
    capacity: usize,
    pub(crate) count: u32,
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (capacity.max(1) * std::mem::size_of::<MarkerInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl MarkerResources {
    /// Upload this frame's instances, growing the buffer when needed.
    pub(crate) fn write_instances(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[MarkerInstance],
    ) {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.capacity);
            log::info!("[gpu] marker instance buffer grown to {}", self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
        self.count = instances.len() as u32;
    }
}

pub(crate) fn create_marker_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> MarkerResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("marker_shader"),
        source: wgpu::ShaderSource::Wgsl(globe_core::MARKER_WGSL.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("marker_pl"),
        bind_group_layouts: &[globals_bgl],
        push_constant_ranges: &[],
    });
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MarkerInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    };
    let pipeline = helpers::make_mesh_pipeline(
        device,
        &PipelineDesc {
            label: "marker_pipeline",
            layout: &layout,
            shader: &shader,
            buffers: &[helpers::vertex_layout(), instance_layout],
            color_format,
            blend: wgpu::BlendState::ALPHA_BLENDING,
            cull_mode: Some(wgpu::Face::Back),
            depth_write: true,
        },
    );
    let sphere = mesh::uv_sphere(1.0, MARKER_WIDTH_SEGMENTS, MARKER_HEIGHT_SEGMENTS);
    let capacity = 128;
    MarkerResources {
        pipeline,
        mesh: helpers::upload_mesh(device, "marker_mesh", &sphere),
        instance_buffer: create_instance_buffer(device, capacity),
        capacity,
        count: 0,
    }
}
