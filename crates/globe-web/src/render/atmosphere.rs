use super::helpers::{self, MeshBuffers, PipelineDesc};
use globe_core::constants::{ATMOSPHERE_RADIUS, SPHERE_HEIGHT_SEGMENTS, SPHERE_WIDTH_SEGMENTS};
use globe_core::mesh;

pub(crate) struct AtmosphereResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) mesh: MeshBuffers,
}

/// Slightly larger shell drawn inside-out with additive blending.
pub(crate) fn create_atmosphere_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> AtmosphereResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("atmosphere_shader"),
        source: wgpu::ShaderSource::Wgsl(globe_core::ATMOSPHERE_WGSL.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("atmosphere_pl"),
        bind_group_layouts: &[globals_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_mesh_pipeline(
        device,
        &PipelineDesc {
            label: "atmosphere_pipeline",
            layout: &layout,
            shader: &shader,
            buffers: &[helpers::vertex_layout()],
            color_format,
            blend: helpers::ADDITIVE_BLENDING,
            cull_mode: Some(wgpu::Face::Front),
            depth_write: false,
        },
    );
    let shell = mesh::uv_sphere(ATMOSPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
    AtmosphereResources {
        pipeline,
        mesh: helpers::upload_mesh(device, "atmosphere_mesh", &shell),
    }
}
