//! Offscreen renderer for the morphing scene.
//!
//! Owns the immutable datasets, one morph animator per category, and the
//! GPU buffers the per-frame updater writes into. Ornaments render as
//! depth-tested instanced meshes; the ambient particle field renders last
//! as additive billboards whose morph runs in the vertex shader.

use super::camera::Camera;
use super::context::{GpuContext, GpuError};
use super::mesh::{self, Mesh, MeshVertex};
use crate::scene::{
    colors, fill_balls, fill_gifts, fill_lights, fill_stars, Instance, MorphAnimator, MorphState,
    OrnamentRecord, SceneData, SceneParams, ORNAMENT_MORPH_RATE, PARTICLE_MORPH_RATE,
};
use bytemuck::Zeroable;
use wgpu::{BindGroup, Buffer, RenderPipeline, Texture, TextureView};

/// Uniform data for the ornament shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
}

/// Uniform data for the particle shader. The host writes exactly two
/// animated scalars per frame: elapsed time and morph progress.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    color_emerald: [f32; 4],
    color_gold: [f32; 4],
    time: f32,
    morph_progress: f32,
    _padding: [f32; 2],
}

/// Static per-particle attributes, uploaded once at construction.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleAttribute {
    scatter_pos: [f32; 3],
    phase: f32,
    tree_pos: [f32; 3],
    size: f32,
}

/// Configuration for scene rendering.
#[derive(Debug, Clone)]
pub struct SceneRenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: [f32; 3],
    pub params: SceneParams,
}

impl Default for SceneRenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            background: colors::BACKGROUND,
            params: SceneParams::default(),
        }
    }
}

/// Which per-frame updater fills an ornament batch.
#[derive(Debug, Clone, Copy)]
enum OrnamentKind {
    Balls,
    Gifts,
    Stars,
    Lights,
}

/// GPU buffers plus the staging vector for one ornament category.
struct OrnamentBatch {
    kind: OrnamentKind,
    morph: MorphAnimator,
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
    instance_buffer: Buffer,
    staging: Vec<Instance>,
}

impl OrnamentBatch {
    fn new(ctx: &GpuContext, kind: OrnamentKind, mesh: &Mesh, count: usize) -> Self {
        let label = match kind {
            OrnamentKind::Balls => "balls",
            OrnamentKind::Gifts => "gifts",
            OrnamentKind::Stars => "stars",
            OrnamentKind::Lights => "lights",
        };

        let vertex_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (std::mem::size_of::<MeshVertex>() * mesh.vertices.len()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        ctx.queue
            .write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&mesh.vertices));

        let index_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (std::mem::size_of::<u16>() * mesh.indices.len()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        ctx.queue
            .write_buffer(&index_buffer, 0, bytemuck::cast_slice(&mesh.indices));

        let instance_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (std::mem::size_of::<Instance>() * count) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            kind,
            morph: MorphAnimator::new(ORNAMENT_MORPH_RATE),
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            instance_buffer,
            staging: vec![Instance::zeroed(); count],
        }
    }

    fn records<'a>(&self, data: &'a SceneData) -> &'a [OrnamentRecord] {
        match self.kind {
            OrnamentKind::Balls => &data.balls,
            OrnamentKind::Gifts => &data.gifts,
            OrnamentKind::Stars => &data.stars,
            OrnamentKind::Lights => &data.lights,
        }
    }

    /// Recompute every instance slot and upload the whole buffer once.
    fn update(&mut self, ctx: &GpuContext, data: &SceneData, state: MorphState, time: f32) {
        let progress = self.morph.advance(state);
        let records = self.records(data);
        match self.kind {
            OrnamentKind::Balls => fill_balls(records, progress, time, &mut self.staging),
            OrnamentKind::Gifts => fill_gifts(records, progress, time, &mut self.staging),
            OrnamentKind::Stars => fill_stars(records, progress, time, &mut self.staging),
            OrnamentKind::Lights => fill_lights(records, progress, time, &mut self.staging),
        }
        ctx.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.staging));
    }
}

/// Headless renderer producing RGBA8 frames of the morphing scene.
pub struct SceneRenderer {
    ctx: GpuContext,
    config: SceneRenderConfig,
    data: SceneData,
    pub camera: Camera,

    ornament_pipeline: RenderPipeline,
    ornament_bind_group: BindGroup,
    scene_uniform_buffer: Buffer,
    batches: Vec<OrnamentBatch>,

    particle_pipeline: RenderPipeline,
    particle_bind_group: BindGroup,
    particle_uniform_buffer: Buffer,
    particle_attribute_buffer: Buffer,
    particle_count: u32,
    particle_morph: MorphAnimator,

    render_texture: Texture,
    render_view: TextureView,
    depth_view: TextureView,
}

impl SceneRenderer {
    /// Build the datasets, allocate all GPU resources and upload the
    /// one-time attributes. Everything per-frame happens in `render_frame`.
    pub async fn new(config: SceneRenderConfig) -> Result<Self, GpuError> {
        let ctx = GpuContext::new().await?;
        log::info!("rendering on {}", ctx.adapter_info().name);

        let format = wgpu::TextureFormat::Rgba8Unorm;
        let data = SceneData::build(&config.params);
        let camera = Camera::framing(config.width, config.height);

        // --- Ornament pipeline -------------------------------------------

        let ornament_shader = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("ornament_shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("shaders/ornaments.wgsl").into()),
            });

        let uniform_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("scene_uniform_layout"),
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

        let scene_uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let ornament_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ornament_bind_group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        let ornament_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("ornament_pipeline_layout"),
                bind_group_layouts: &[&uniform_layout],
                immediate_size: 0,
            });

        let mesh_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        };

        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 32,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 48,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 64,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        };

        let depth_format = wgpu::TextureFormat::Depth32Float;

        let ornament_pipeline =
            ctx.device
                .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some("ornament_pipeline"),
                    layout: Some(&ornament_layout),
                    vertex: wgpu::VertexState {
                        module: &ornament_shader,
                        entry_point: Some("vs_main"),
                        buffers: &[mesh_layout, instance_layout],
                        compilation_options: Default::default(),
                    },
                    fragment: Some(wgpu::FragmentState {
                        module: &ornament_shader,
                        entry_point: Some("fs_main"),
                        targets: &[Some(wgpu::ColorTargetState {
                            format,
                            blend: Some(wgpu::BlendState::REPLACE),
                            write_mask: wgpu::ColorWrites::ALL,
                        })],
                        compilation_options: Default::default(),
                    }),
                    primitive: wgpu::PrimitiveState {
                        topology: wgpu::PrimitiveTopology::TriangleList,
                        front_face: wgpu::FrontFace::Ccw,
                        cull_mode: None,
                        ..Default::default()
                    },
                    depth_stencil: Some(wgpu::DepthStencilState {
                        format: depth_format,
                        depth_write_enabled: true,
                        depth_compare: wgpu::CompareFunction::Less,
                        stencil: wgpu::StencilState::default(),
                        bias: wgpu::DepthBiasState::default(),
                    }),
                    multisample: wgpu::MultisampleState::default(),
                    multiview_mask: None,
                    cache: None,
                });

        let batches = vec![
            OrnamentBatch::new(
                &ctx,
                OrnamentKind::Balls,
                &mesh::uv_sphere(16, 16),
                data.balls.len(),
            ),
            OrnamentBatch::new(&ctx, OrnamentKind::Gifts, &mesh::cube(), data.gifts.len()),
            OrnamentBatch::new(
                &ctx,
                OrnamentKind::Stars,
                &mesh::uv_sphere(8, 8),
                data.stars.len(),
            ),
            OrnamentBatch::new(
                &ctx,
                OrnamentKind::Lights,
                &mesh::uv_sphere(6, 6),
                data.lights.len(),
            ),
        ];

        // --- Particle pipeline -------------------------------------------

        let particle_shader = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("particle_shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("shaders/particles.wgsl").into()),
            });

        let particle_uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_uniforms"),
            size: std::mem::size_of::<ParticleUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let particle_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particle_bind_group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: particle_uniform_buffer.as_entire_binding(),
            }],
        });

        let attributes: Vec<ParticleAttribute> = data
            .particles
            .iter()
            .map(|p| ParticleAttribute {
                scatter_pos: p.scatter_pos.to_array(),
                phase: p.phase,
                tree_pos: p.tree_pos.to_array(),
                size: p.size,
            })
            .collect();

        let particle_attribute_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_attributes"),
            size: (std::mem::size_of::<ParticleAttribute>() * attributes.len()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        ctx.queue
            .write_buffer(&particle_attribute_buffer, 0, bytemuck::cast_slice(&attributes));

        let particle_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("particle_pipeline_layout"),
                bind_group_layouts: &[&uniform_layout],
                immediate_size: 0,
            });

        let particle_attribute_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleAttribute>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32,
                },
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 28,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        };

        // Additive glow compositing: no depth writes, order-independent.
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let particle_pipeline =
            ctx.device
                .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some("particle_pipeline"),
                    layout: Some(&particle_layout),
                    vertex: wgpu::VertexState {
                        module: &particle_shader,
                        entry_point: Some("vs_main"),
                        buffers: &[particle_attribute_layout],
                        compilation_options: Default::default(),
                    },
                    fragment: Some(wgpu::FragmentState {
                        module: &particle_shader,
                        entry_point: Some("fs_main"),
                        targets: &[Some(wgpu::ColorTargetState {
                            format,
                            blend: Some(additive),
                            write_mask: wgpu::ColorWrites::ALL,
                        })],
                        compilation_options: Default::default(),
                    }),
                    primitive: wgpu::PrimitiveState {
                        topology: wgpu::PrimitiveTopology::TriangleList,
                        ..Default::default()
                    },
                    depth_stencil: Some(wgpu::DepthStencilState {
                        format: depth_format,
                        depth_write_enabled: false,
                        depth_compare: wgpu::CompareFunction::LessEqual,
                        stencil: wgpu::StencilState::default(),
                        bias: wgpu::DepthBiasState::default(),
                    }),
                    multisample: wgpu::MultisampleState::default(),
                    multiview_mask: None,
                    cache: None,
                });

        // --- Render targets ----------------------------------------------

        let render_texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene_render_target"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let render_view = render_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let depth_texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene_depth"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: depth_format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let particle_count = data.particles.len() as u32;

        Ok(Self {
            ctx,
            config,
            data,
            camera,
            ornament_pipeline,
            ornament_bind_group,
            scene_uniform_buffer,
            batches,
            particle_pipeline,
            particle_bind_group,
            particle_uniform_buffer,
            particle_attribute_buffer,
            particle_count,
            particle_morph: MorphAnimator::new(PARTICLE_MORPH_RATE),
            render_texture,
            render_view,
            depth_view,
        })
    }

    /// Render one frame at the given elapsed time, easing every category
    /// toward the state's arrangement. Returns tightly packed RGBA8 pixels.
    pub fn render_frame(&mut self, time: f32, state: MorphState) -> Vec<u8> {
        for batch in &mut self.batches {
            batch.update(&self.ctx, &self.data, state, time);
        }
        let particle_progress = self.particle_morph.advance(state);

        let view_proj = self.camera.view_proj().to_cols_array_2d();
        let uniforms = SceneUniforms {
            view_proj,
            light_dir: [0.4, 0.8, 0.45, 0.0],
            light_color: [
                colors::SOFT_GOLD[0] * 1.6,
                colors::SOFT_GOLD[1] * 1.6,
                colors::SOFT_GOLD[2] * 1.6,
                0.0,
            ],
            ambient: [0.2, 0.2, 0.2, 0.0],
        };
        self.ctx
            .queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let proj = glam::Mat4::perspective_rh(
            self.camera.fov_y,
            self.camera.aspect,
            self.camera.near,
            self.camera.far,
        );
        let view = glam::Mat4::look_at_rh(self.camera.eye, self.camera.target, self.camera.up);
        let particle_uniforms = ParticleUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            color_emerald: [
                colors::DEEP_GREEN[0],
                colors::DEEP_GREEN[1],
                colors::DEEP_GREEN[2],
                1.0,
            ],
            color_gold: [colors::GOLD[0], colors::GOLD[1], colors::GOLD[2], 1.0],
            time,
            morph_progress: particle_progress,
            _padding: [0.0; 2],
        };
        self.ctx.queue.write_buffer(
            &self.particle_uniform_buffer,
            0,
            bytemuck::bytes_of(&particle_uniforms),
        );

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.render_view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.config.background[0] as f64,
                            g: self.config.background[1] as f64,
                            b: self.config.background[2] as f64,
                            a: 1.0,
                        }),
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
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.ornament_pipeline);
            render_pass.set_bind_group(0, &self.ornament_bind_group, &[]);
            for batch in &self.batches {
                render_pass.set_vertex_buffer(0, batch.vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, batch.instance_buffer.slice(..));
                render_pass.set_index_buffer(batch.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..batch.index_count, 0, 0..batch.staging.len() as u32);
            }

            render_pass.set_pipeline(&self.particle_pipeline);
            render_pass.set_bind_group(0, &self.particle_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.particle_attribute_buffer.slice(..));
            render_pass.draw(0..6, 0..self.particle_count);
        }

        // Copy texture to buffer for readback
        let bytes_per_pixel = 4u32;
        let unpadded_row_bytes = self.config.width * bytes_per_pixel;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let padded_row_bytes = unpadded_row_bytes.div_ceil(align) * align;
        let buffer_size = (padded_row_bytes * self.config.height) as u64;

        let readback_buffer = self.ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_readback_buffer"),
            size: buffer_size,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.render_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &readback_buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row_bytes),
                    rows_per_image: Some(self.config.height),
                },
            },
            wgpu::Extent3d {
                width: self.config.width,
                height: self.config.height,
                depth_or_array_layers: 1,
            },
        );

        self.ctx.queue.submit(std::iter::once(encoder.finish()));

        // Read back pixels
        let buffer_slice = readback_buffer.slice(..);
        let (sender, receiver) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            sender.send(result).unwrap();
        });
        self.ctx
            .device
            .poll(wgpu::PollType::wait_indefinitely())
            .unwrap();
        receiver.recv().unwrap().unwrap();

        let mapped = buffer_slice.get_mapped_range();

        // Remove row padding if present
        let mut pixels =
            Vec::with_capacity((self.config.width * self.config.height * 4) as usize);
        for row in 0..self.config.height {
            let start = (row * padded_row_bytes) as usize;
            let end = start + unpadded_row_bytes as usize;
            pixels.extend_from_slice(&mapped[start..end]);
        }

        pixels
    }

    /// Morph progress of the ornament categories (all share the same rate,
    /// so any batch is representative).
    pub fn ornament_progress(&self) -> f32 {
        self.batches
            .first()
            .map(|b| b.morph.progress())
            .unwrap_or(0.0)
    }

    /// Morph progress of the shader-driven particle field.
    pub fn particle_progress(&self) -> f32 {
        self.particle_morph.progress()
    }

    /// The immutable datasets backing this renderer.
    pub fn data(&self) -> &SceneData {
        &self.data
    }

    /// Get the render configuration.
    pub fn config(&self) -> &SceneRenderConfig {
        &self.config
    }

    /// Get GPU adapter info.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.ctx.adapter_info()
    }
}
