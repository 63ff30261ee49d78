//! SDF-based WebGPU render pipeline
//!
//! Paints the whole frame in the fragment shader. The draw list is flattened
//! into a storage buffer of circles and glyphs that the shader walks in
//! order, so later commands cover earlier ones.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::color::Color;
use super::draw_list::{DrawCommand, DrawList};
use super::font::{self, GLYPH_HEIGHT};
use crate::error::{Error, Result};

/// Maximum number of flattened commands per frame (circles + glyphs)
pub const MAX_COMMANDS: usize = 256;

/// Shader command kinds
const KIND_CIRCLE: u32 = 0;
const KIND_GLYPH: u32 = 1;

/// Background when the list never clears
const DEFAULT_CLEAR: Color = Color::rgba(0, 0, 0, 255);

// ============================================================================
// GPU DATA STRUCTURES (must match shader)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct Globals {
    scale: f32,            // offset 0, physical per logical
    command_count: u32,    // offset 4
    _pad: [u32; 2],        // offset 8 - align clear_color to 16 bytes
    clear_color: [f32; 4], // offset 16
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct CommandData {
    /// circle: center.xy, radius; glyph: origin.xy, font pixel size
    shape: [f32; 4],
    color: [f32; 4],
    kind: u32,
    glyph: u32,
    _pad: [u32; 2], // Pad to 48 bytes (16-byte struct alignment)
}

/// Flatten a draw list into shader commands plus the effective clear color.
///
/// A `Clear` discards everything recorded before it. Output is capped at
/// [`MAX_COMMANDS`]; the returned flag is true if anything was dropped.
pub(crate) fn flatten(list: &DrawList, srgb_target: bool) -> ([f32; 4], Vec<CommandData>, bool) {
    let clear = list.clear_color().unwrap_or(DEFAULT_CLEAR);
    let mut out: Vec<CommandData> = Vec::with_capacity(64);

    for command in list.commands() {
        match command {
            DrawCommand::Clear(_) => out.clear(),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => out.push(CommandData {
                shape: [center.x, center.y, *radius, 0.0],
                color: color.for_target(srgb_target),
                kind: KIND_CIRCLE,
                glyph: 0,
                _pad: [0; 2],
            }),
            DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } => {
                let color = color.for_target(srgb_target);
                out.extend(font::layout_text(text, *pos, *size).into_iter().map(|q| {
                    CommandData {
                        shape: [q.origin.x, q.origin.y, q.pixel, 0.0],
                        color,
                        kind: KIND_GLYPH,
                        glyph: q.index,
                        _pad: [0; 2],
                    }
                }));
            }
        }
    }

    let truncated = out.len() > MAX_COMMANDS;
    out.truncate(MAX_COMMANDS);
    (clear.for_target(srgb_target), out, truncated)
}

// ============================================================================
// SDF RENDER STATE
// ============================================================================

pub struct SdfRenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,

    globals_buffer: wgpu::Buffer,
    commands_buffer: wgpu::Buffer,
    // Bound once, never rewritten
    _glyphs_buffer: wgpu::Buffer,

    bind_group: wgpu::BindGroup,

    /// Physical surface size
    pub size: (u32, u32),
    /// Physical pixels per logical pixel
    scale: f32,
    srgb_target: bool,
    warned_truncation: bool,
}

impl SdfRenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        scale: f32,
    ) -> Result<Self> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("sdf-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        log::debug!("Surface formats: {:?}", surface_caps.formats);
        log::debug!("Surface present modes: {:?}", surface_caps.present_modes);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(Error::UnsupportedSurface)?;
        let srgb_target = surface_format.is_srgb();

        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sdf_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("sdf_shader.wgsl").into()),
        });

        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&Globals {
                scale,
                command_count: 0,
                _pad: [0; 2],
                clear_color: DEFAULT_CLEAR.for_target(srgb_target),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let commands_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("commands"),
            size: (std::mem::size_of::<CommandData>() * MAX_COMMANDS) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let glyph_table = font::glyph_table();
        debug_assert_eq!(glyph_table.len(), (font::GLYPH_COUNT * GLYPH_HEIGHT) as usize);
        let glyphs_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glyphs"),
            contents: bytemuck::cast_slice(&glyph_table),
            usage: wgpu::BufferUsages::STORAGE,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sdf_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sdf_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: commands_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: glyphs_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sdf_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sdf_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[], // No vertex buffers - fullscreen triangle
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_buffer,
            commands_buffer,
            _glyphs_buffer: glyphs_buffer,
            bind_group,
            size: (width, height),
            scale,
            srgb_target,
            warned_truncation: false,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn set_scale(&mut self, scale: f32) {
        if scale > 0.0 {
            self.scale = scale;
        }
    }

    /// Reconfigure with the current size (after `Lost`/`Outdated`)
    pub fn reconfigure(&mut self) {
        self.resize(self.size.0, self.size.1);
    }

    /// Upload the frame's commands and present it
    pub fn render(&mut self, list: &DrawList) -> std::result::Result<(), wgpu::SurfaceError> {
        let (clear_color, commands, truncated) = flatten(list, self.srgb_target);
        if truncated && !self.warned_truncation {
            log::warn!(
                "Draw list exceeds {} commands; extra glyphs/shapes are dropped",
                MAX_COMMANDS
            );
            self.warned_truncation = true;
        }

        let globals = Globals {
            scale: self.scale,
            command_count: commands.len() as u32,
            _pad: [0; 2],
            clear_color,
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        if !commands.is_empty() {
            self.queue
                .write_buffer(&self.commands_buffer, 0, bytemuck::cast_slice(&commands));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sdf_encoder"),
            });

        {
            let [r, g, b, a] = clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sdf_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..3, 0..1); // Fullscreen triangle
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
