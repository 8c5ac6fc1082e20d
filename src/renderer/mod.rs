pub mod atlas;
pub mod builtin_font;
pub mod pipeline;
pub mod text;

use std::sync::Arc;

use image::RgbaImage;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use atlas::Atlas;
use pipeline::{QuadPipeline, QuadVertex, create_quad_pipeline, orthographic_projection};

use crate::error::Error;

/// Smallest persistent GPU buffer allocation, in bytes.
pub const MIN_BUFFER_BYTES: u64 = 4096;

/// The projection is written once at creation and never updated.
pub const PROJECTION_USAGE: wgpu::BufferUsages = wgpu::BufferUsages::UNIFORM;

/// FNV-1a 64-bit hash, used to skip uploads of unchanged frame geometry.
pub fn fnv1a_64(data: &[u8]) -> u64 {
    data.iter().fold(14695981039346656037u64, |h, &b| {
        (h ^ b as u64).wrapping_mul(1099511628211)
    })
}

/// Capacity to allocate for `len` bytes: next power of two, at least
/// [`MIN_BUFFER_BYTES`].
pub fn grown_capacity(len: u64) -> u64 {
    len.next_power_of_two().max(MIN_BUFFER_BYTES)
}

// ── StreamBuffer ──────────────────────────────────────────────────────────────

/// A GPU buffer rewritten every frame. Reallocated only when the data
/// outgrows it; the upload is skipped when the bytes hash the same as last
/// frame.
struct StreamBuffer {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: Option<wgpu::Buffer>,
    capacity: u64,
    hash: u64,
}

impl StreamBuffer {
    fn new(label: &'static str, usage: wgpu::BufferUsages) -> Self {
        Self { label, usage, buffer: None, capacity: 0, hash: 0 }
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, bytes: &[u8]) {
        let len = bytes.len() as u64;
        let new_hash = fnv1a_64(bytes);

        if self.buffer.is_none() || len > self.capacity {
            let capacity = grown_capacity(len);
            log::debug!("{}: growing to {capacity} bytes", self.label);
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: capacity,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = capacity;
            self.hash = !new_hash; // Force upload into the fresh buffer.
        }

        if new_hash != self.hash {
            if let Some(buffer) = &self.buffer {
                queue.write_buffer(buffer, 0, bytes);
            }
            self.hash = new_hash;
        }
    }

    fn slice(&self, len: u64) -> Option<wgpu::BufferSlice<'_>> {
        self.buffer.as_ref().map(|b| b.slice(..len))
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    quad_pipeline: QuadPipeline,
    /// Maps logical game pixels to clip space; independent of the physical
    /// window size. Owns the projection uniform buffer.
    projection_bind_group: wgpu::BindGroup,
    atlas_bind_group: wgpu::BindGroup,
    vertex_buffer: StreamBuffer,
    index_buffer: StreamBuffer,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        atlas_image: &RgbaImage,
        logical_width: u32,
        logical_height: u32,
    ) -> Result<Self, Error> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let caps = surface.get_capabilities(&adapter);
        // Colours are authored in sRGB already; a linear target keeps them as-is.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(Error::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let atlas = Atlas::from_image(&device, &queue, atlas_image);
        let quad_pipeline = create_quad_pipeline(&device, format);

        let proj = orthographic_projection(logical_width as f32, logical_height as f32);
        let projection_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("projection_buffer"),
            contents: bytemuck::cast_slice(&proj),
            usage: PROJECTION_USAGE,
        });

        let projection_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("projection_bg"),
            layout: &quad_pipeline.projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        let atlas_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("atlas_bg"),
            layout: &quad_pipeline.atlas_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&atlas.texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&atlas.sampler),
                },
            ],
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            quad_pipeline,
            projection_bind_group,
            atlas_bind_group,
            vertex_buffer: StreamBuffer::new("quad_vertex_buffer", wgpu::BufferUsages::VERTEX),
            index_buffer: StreamBuffer::new("quad_index_buffer", wgpu::BufferUsages::INDEX),
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Render one frame: clear to `clear`, then draw the whole quad batch in
    /// submission order.
    pub fn render(
        &mut self,
        vertices: &[QuadVertex],
        indices: &[u32],
        clear: [f32; 4],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if !indices.is_empty() {
            self.vertex_buffer
                .upload(&self.device, &self.queue, bytemuck::cast_slice(vertices));
            self.index_buffer
                .upload(&self.device, &self.queue, bytemuck::cast_slice(indices));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0] as f64,
                            g: clear[1] as f64,
                            b: clear[2] as f64,
                            a: clear[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            let vertex_bytes = std::mem::size_of_val(vertices) as u64;
            let index_bytes = std::mem::size_of_val(indices) as u64;

            // wgpu rejects empty buffer slices, so an empty frame only clears.
            if !indices.is_empty() {
                if let (Some(vslice), Some(islice)) = (
                    self.vertex_buffer.slice(vertex_bytes),
                    self.index_buffer.slice(index_bytes),
                ) {
                    pass.set_pipeline(&self.quad_pipeline.render_pipeline);
                    pass.set_bind_group(0, &self.projection_bind_group, &[]);
                    pass.set_bind_group(1, &self.atlas_bind_group, &[]);
                    pass.set_vertex_buffer(0, vslice);
                    pass.set_index_buffer(islice, wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(0..indices.len() as u32, 0, 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
