pub mod draw_list;
pub mod pipeline;
pub mod texture;
pub mod viewport;

use std::ops::Range;
use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

pub use draw_list::{Canvas, DrawCommand, DrawList, TextureId};
pub use texture::{AssetError, ImageData};

use pipeline::{SpritePipeline, SpriteVertex, create_sprite_pipeline, orthographic_projection, quad};
use texture::GpuTexture;
use viewport::letterbox_viewport;

use crate::window::WindowConfig;

/// Background fill behind the map (`#80a0c0`).
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0x80 as f64 / 255.0,
    g: 0xa0 as f64 / 255.0,
    b: 0xc0 as f64 / 255.0,
    a: 1.0,
};

/// One GPU draw call: a contiguous vertex range sampled from one texture.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    pub texture: TextureId,
    pub vertices: Range<u32>,
}

/// Turn a frame's draw list into quad vertices plus per-texture batches.
///
/// `dims` reports the pixel size of a registered texture; commands whose
/// texture it does not know are skipped. A command without a source rect is
/// drawn at the full image size.
pub fn build_vertices(
    list: &DrawList,
    dims: impl Fn(TextureId) -> Option<(u32, u32)>,
) -> (Vec<SpriteVertex>, Vec<Batch>) {
    let mut verts: Vec<SpriteVertex> = Vec::with_capacity(list.len() * 6);
    let mut batches: Vec<Batch> = Vec::new();

    for cmd in list.commands() {
        let Some((tw, th)) = dims(cmd.texture) else { continue };
        let (uv_min, uv_max) = texture::uv_for(tw, th, cmd.src);
        let (w, h) = match cmd.src {
            Some(r) => (r.w as f32, r.h as f32),
            None => (tw as f32, th as f32),
        };

        let start = verts.len() as u32;
        verts.extend_from_slice(&quad(cmd.dest.0 as f32, cmd.dest.1 as f32, w, h, uv_min, uv_max));
        let end = verts.len() as u32;

        match batches.last_mut() {
            Some(b) if b.texture == cmd.texture => b.vertices.end = end,
            _ => batches.push(Batch { texture: cmd.texture, vertices: start..end }),
        }
    }

    (verts, batches)
}

pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: SpritePipeline,
    /// Projection for the fixed logical resolution; written once.
    projection_bind_group: wgpu::BindGroup,
    /// Indexed by `TextureId`.
    textures: Vec<GpuTexture>,
    window_config: WindowConfig,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, images: &[ImageData], mut window_config: WindowConfig) -> Self {
        let size = window.inner_size();
        window_config.resize(size);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&window)).unwrap();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .expect("no suitable GPU adapter found");

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .expect("failed to create device");

        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];

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

        let pipeline = create_sprite_pipeline(&device, format);

        let proj = orthographic_projection(
            window_config.logical_width as f32,
            window_config.logical_height as f32,
        );
        let projection_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("projection_buffer"),
            contents: bytemuck::cast_slice(&proj),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let projection_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("projection_bg"),
            layout: &pipeline.projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        let textures = images
            .iter()
            .enumerate()
            .map(|(i, img)| {
                GpuTexture::upload(
                    &device,
                    &queue,
                    &pipeline.texture_bind_group_layout,
                    img,
                    &format!("texture_{i}"),
                )
            })
            .collect();

        Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            projection_bind_group,
            textures,
            window_config,
        }
    }

    pub fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(id.index()).map(|t| (t.width, t.height))
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.window_config.resize(new_size);
    }

    /// Render one frame: clear to `CLEAR_COLOR`, then every command of
    /// `list` in order inside the letterboxed viewport.
    pub fn render(&mut self, list: &DrawList) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (verts, batches) = build_vertices(list, |id| self.texture_size(id));
        let viewport = letterbox_viewport(&self.window_config);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if !verts.is_empty() && !viewport.is_empty() {
                let vbuf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sprite_vertex_buffer"),
                    contents: bytemuck::cast_slice(&verts),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                pass.set_viewport(viewport.x, viewport.y, viewport.width, viewport.height, 0.0, 1.0);
                pass.set_pipeline(&self.pipeline.render_pipeline);
                pass.set_bind_group(0, &self.projection_bind_group, &[]);
                pass.set_vertex_buffer(0, vbuf.slice(..));
                for batch in &batches {
                    // build_vertices only emits batches for known textures.
                    let texture = &self.textures[batch.texture.index()];
                    pass.set_bind_group(1, &texture.bind_group, &[]);
                    pass.draw(batch.vertices.clone(), 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
