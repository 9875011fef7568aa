use super::helpers::{self, MeshBuffers, PipelineDesc};
use globe_core::constants::{
    EARTH_TEXTURE_HEIGHT, EARTH_TEXTURE_WIDTH, GLOBE_RADIUS, SPHERE_HEIGHT_SEGMENTS,
    SPHERE_WIDTH_SEGMENTS,
};
use globe_core::{mesh, texture};

pub(crate) struct GlobeResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) mesh: MeshBuffers,
    pub(crate) texture_bind_group: wgpu::BindGroup,
}

fn upload_earth_texture(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    let (width, height) = (EARTH_TEXTURE_WIDTH, EARTH_TEXTURE_HEIGHT);
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("earth_tex"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    let pixels = texture::earth_texture(width, height);
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

pub(crate) fn create_globe_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> GlobeResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("globe_shader"),
        source: wgpu::ShaderSource::Wgsl(globe_core::GLOBE_WGSL.into()),
    });
    let tex_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("globe_tex_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let view = upload_earth_texture(device, queue);
    // wrap around the seam, clamp at the poles
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("earth_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("globe_tex_bg"),
        layout: &tex_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("globe_pl"),
        bind_group_layouts: &[globals_bgl, &tex_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_mesh_pipeline(
        device,
        &PipelineDesc {
            label: "globe_pipeline",
            layout: &layout,
            shader: &shader,
            buffers: &[helpers::vertex_layout()],
            color_format,
            blend: wgpu::BlendState::ALPHA_BLENDING,
            cull_mode: Some(wgpu::Face::Back),
            depth_write: true,
        },
    );
    let sphere = mesh::uv_sphere(GLOBE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
    GlobeResources {
        pipeline,
        mesh: helpers::upload_mesh(device, "globe_mesh", &sphere),
        texture_bind_group,
    }
}
