use std::fmt;
use std::path::{Path, PathBuf};

use wgpu::util::DeviceExt;

use crate::geometry::Rect;

// ── AssetError ────────────────────────────────────────────────────────────────

/// An image could not be read or decoded.
#[derive(Debug)]
pub struct AssetError {
    pub path: PathBuf,
    pub source: image::ImageError,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load image {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

// ── ImageData ─────────────────────────────────────────────────────────────────

/// Decoded RGBA8 pixels, ready to be uploaded to the GPU.
#[derive(Debug)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: image::RgbaImage,
}

impl ImageData {
    /// Decode an image file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| AssetError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_rgba(img.to_rgba8()))
    }

    pub fn from_rgba(pixels: image::RgbaImage) -> Self {
        let (width, height) = pixels.dimensions();
        Self { width, height, pixels }
    }

    /// Normalised `(uv_min, uv_max)` for `src`, or the full image when `None`.
    ///
    /// Regions are not clipped: a cell past the image edge maps to UVs
    /// outside `[0, 1]` and the sampler's clamp mode decides what shows.
    pub fn uv_for(&self, src: Option<Rect>) -> ([f32; 2], [f32; 2]) {
        uv_for(self.width, self.height, src)
    }
}

/// Normalised UV corners of `src` inside a `width × height` image.
pub fn uv_for(width: u32, height: u32, src: Option<Rect>) -> ([f32; 2], [f32; 2]) {
    let Some(r) = src else {
        return ([0.0, 0.0], [1.0, 1.0]);
    };
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    (
        [r.x as f32 / w, r.y as f32 / h],
        [r.right() as f32 / w, r.bottom() as f32 / h],
    )
}

// ── GpuTexture ────────────────────────────────────────────────────────────────

/// A registered image after upload, with the bind group the sprite pipeline
/// samples it through.
pub struct GpuTexture {
    pub width: u32,
    pub height: u32,
    pub bind_group: wgpu::BindGroup,
}

impl GpuTexture {
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        image: &ImageData,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: image.width.max(1),
            height: image.height.max(1),
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &image.pixels,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
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

        Self { width: image.width, height: image.height, bind_group }
    }
}
