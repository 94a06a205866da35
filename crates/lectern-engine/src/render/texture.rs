use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops::FilterType;

/// Pixel layout of a decoded image, picked from its channel count.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelLayout {
    Rgb8,
    Rgba8,
}

impl PixelLayout {
    /// 3 → RGB, 4 → RGBA. Anything else is unsupported.
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(PixelLayout::Rgb8),
            4 => Some(PixelLayout::Rgba8),
            _ => None,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 => 4,
        }
    }
}

/// Why an image could not become a texture.
#[derive(Debug)]
pub enum TextureError {
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    UnsupportedChannels {
        path: Option<PathBuf>,
        channels: u8,
    },
    BadDimensions {
        width: u32,
        height: u32,
        len: usize,
    },
}

impl TextureError {
    fn with_path(self, path: &Path) -> Self {
        match self {
            TextureError::UnsupportedChannels { channels, .. } => TextureError::UnsupportedChannels {
                path: Some(path.to_path_buf()),
                channels,
            },
            other => other,
        }
    }
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Decode { path, .. } => {
                write!(f, "failed to load texture: {}", path.display())
            }
            TextureError::UnsupportedChannels { path: Some(path), channels } => write!(
                f,
                "failed to load texture: {} (images with {channels} channels are not supported)",
                path.display()
            ),
            TextureError::UnsupportedChannels { path: None, channels } => {
                write!(f, "images with {channels} channels are not supported")
            }
            TextureError::BadDimensions { width, height, len } => write!(
                f,
                "pixel buffer of {len} bytes does not match a {width}x{height} image"
            ),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Raw decoded pixels, rows stored top to bottom until flipped.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Wraps raw 8-bit pixels. Fails on unsupported channel counts or a
    /// buffer whose length disagrees with the dimensions.
    pub fn from_raw(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self, TextureError> {
        let layout = PixelLayout::from_channels(channels)
            .ok_or(TextureError::UnsupportedChannels { path: None, channels })?;

        let expected = width as usize * height as usize * layout.channels();
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(TextureError::BadDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Decodes an image file. The channel count decides the layout; 16-bit
    /// and float sources are narrowed to 8 bits per channel.
    pub fn decode(path: &Path) -> Result<Self, TextureError> {
        let img = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let channels = img.color().channel_count();
        let (width, height) = (img.width(), img.height());
        let pixels = match PixelLayout::from_channels(channels) {
            Some(PixelLayout::Rgb8) => img.into_rgb8().into_raw(),
            Some(PixelLayout::Rgba8) => img.into_rgba8().into_raw(),
            None => {
                return Err(TextureError::UnsupportedChannels {
                    path: Some(path.to_path_buf()),
                    channels,
                });
            }
        };

        Self::from_raw(width, height, channels, pixels).map_err(|e| e.with_path(path))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reverses row order in place. Applying it twice restores the image.
    pub fn flip_vertical(&mut self) {
        let row = self.width as usize * self.layout.channels();
        let rows = self.height as usize;

        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let (head, tail) = self.pixels.split_at_mut(bottom * row);
            head[top * row..(top + 1) * row].swap_with_slice(&mut tail[..row]);
        }
    }

    /// Expands to RGBA8; wgpu has no three-channel 8-bit format.
    pub fn to_rgba8(&self) -> RgbaImage {
        let rgba = match self.layout {
            PixelLayout::Rgba8 => self.pixels.clone(),
            PixelLayout::Rgb8 => self
                .pixels
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
                .collect(),
        };
        // Length was validated in from_raw.
        RgbaImage::from_raw(self.width, self.height, rgba).unwrap_or_default()
    }

    /// Number of levels in a full mip chain down to 1x1.
    pub fn mip_level_count(&self) -> u32 {
        u32::BITS - self.width.max(self.height).leading_zeros()
    }

    /// Level 0 followed by successive half-size downsamples.
    pub fn mip_chain(&self) -> Vec<RgbaImage> {
        let mut levels = Vec::with_capacity(self.mip_level_count() as usize);
        let mut current = self.to_rgba8();

        for _ in 1..self.mip_level_count() {
            let w = (current.width() / 2).max(1);
            let h = (current.height() / 2).max(1);
            let next = image::imageops::resize(&current, w, h, FilterType::Triangle);
            levels.push(current);
            current = next;
        }
        levels.push(current);

        levels
    }
}

/// Decodes `path` and flips it so the first stored row is the bottom of the
/// picture, which is where `v = 0` samples.
///
/// Nothing touches the GPU here; a failure leaves no partial resource behind.
pub fn load_image(path: &Path) -> Result<DecodedImage, TextureError> {
    let mut image = DecodedImage::decode(path)?;
    image.flip_vertical();
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width,
        image.height,
        image.layout
    );
    Ok(image)
}

/// Sampled 2D texture with a full mip chain, REPEAT wrapping and linear filtering.
pub struct GpuTexture {
    label: String,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl GpuTexture {
    /// Plain unorm: shaders see the stored bytes, with no sRGB decode.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// REPEAT on every axis, linear min/mag.
    ///
    /// `lod_max_clamp` pins minification to level 0; the rest of the chain is
    /// uploaded but never sampled.
    pub fn sampler_descriptor(label: &str) -> wgpu::SamplerDescriptor<'_> {
        wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            lod_min_clamp: 0.0,
            lod_max_clamp: 0.0,
            ..Default::default()
        }
    }

    /// Uploads every mip level of `image` and builds its material bind group.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        material_layout: &wgpu::BindGroupLayout,
        image: &DecodedImage,
        label: &str,
    ) -> Self {
        let levels = image.mip_chain();

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in levels.iter().enumerate() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                level.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * level.width()),
                    rows_per_image: Some(level.height()),
                },
                wgpu::Extent3d {
                    width: level.width(),
                    height: level.height(),
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&Self::sampler_descriptor(label));

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: material_layout,
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

        log::debug!(
            "uploaded texture {label} ({}x{}, {} mips)",
            image.width,
            image.height,
            levels.len()
        );

        Self {
            label: label.to_string(),
            texture,
            bind_group,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size(&self) -> wgpu::Extent3d {
        self.texture.size()
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32, channels: u8) -> Vec<u8> {
        (0..width * height * channels as u32).map(|i| (i % 251) as u8).collect()
    }

    // ── channel selection ─────────────────────────────────────────────────

    #[test]
    fn three_channels_select_rgb() {
        let img = DecodedImage::from_raw(2, 2, 3, gradient(2, 2, 3)).unwrap();
        assert_eq!(img.layout(), PixelLayout::Rgb8);
    }

    #[test]
    fn four_channels_select_rgba() {
        let img = DecodedImage::from_raw(2, 2, 4, gradient(2, 2, 4)).unwrap();
        assert_eq!(img.layout(), PixelLayout::Rgba8);
    }

    #[test]
    fn other_channel_counts_fail() {
        for channels in [0u8, 1, 2, 5] {
            let err = DecodedImage::from_raw(2, 2, channels, vec![0; 4 * channels as usize]).unwrap_err();
            assert!(matches!(err, TextureError::UnsupportedChannels { channels: c, .. } if c == channels));
        }
    }

    #[test]
    fn mismatched_buffer_length_fails() {
        let err = DecodedImage::from_raw(4, 4, 3, vec![0; 10]).unwrap_err();
        assert!(matches!(err, TextureError::BadDimensions { len: 10, .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("does/not/exist.png");
        let err = load_image(path).unwrap_err();
        assert!(matches!(err, TextureError::Decode { .. }));
        assert!(err.to_string().contains("does/not/exist.png"));
    }

    // ── flip ──────────────────────────────────────────────────────────────

    #[test]
    fn flip_reverses_rows() {
        let pixels = vec![
            1, 1, 1, 2, 2, 2, //
            3, 3, 3, 4, 4, 4, //
            5, 5, 5, 6, 6, 6,
        ];
        let mut img = DecodedImage::from_raw(2, 3, 3, pixels).unwrap();
        img.flip_vertical();
        assert_eq!(img.pixels(), &[5, 5, 5, 6, 6, 6, 3, 3, 3, 4, 4, 4, 1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn flip_twice_is_identity() {
        for (w, h, c) in [(1, 1, 3), (3, 4, 3), (5, 7, 4), (8, 2, 4)] {
            let original = DecodedImage::from_raw(w, h, c, gradient(w, h, c)).unwrap();
            let mut img = original.clone();
            img.flip_vertical();
            img.flip_vertical();
            assert_eq!(img, original);
        }
    }

    // ── upload preparation ────────────────────────────────────────────────

    #[test]
    fn rgb_expands_with_opaque_alpha() {
        let img = DecodedImage::from_raw(1, 1, 3, vec![10, 20, 30]).unwrap();
        assert_eq!(img.to_rgba8().into_raw(), vec![10, 20, 30, 255]);
    }

    #[test]
    fn mip_chain_reaches_one_pixel() {
        let img = DecodedImage::from_raw(8, 2, 4, gradient(8, 2, 4)).unwrap();
        assert_eq!(img.mip_level_count(), 4);

        let chain = img.mip_chain();
        let sizes: Vec<(u32, u32)> = chain.iter().map(|l| l.dimensions()).collect();
        assert_eq!(sizes, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn texture_format_is_plain_unorm() {
        assert_eq!(GpuTexture::FORMAT, wgpu::TextureFormat::Rgba8Unorm);
        assert!(!GpuTexture::FORMAT.is_srgb());
    }

    #[test]
    fn sampler_repeats_and_stays_on_base_level() {
        let desc = GpuTexture::sampler_descriptor("t");
        assert_eq!(desc.address_mode_u, wgpu::AddressMode::Repeat);
        assert_eq!(desc.address_mode_v, wgpu::AddressMode::Repeat);
        assert_eq!(desc.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.mag_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.lod_max_clamp, 0.0);
    }

    // ── decode from disk ──────────────────────────────────────────────────

    fn temp_png(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lectern-{}-{name}.png", std::process::id()))
    }

    #[test]
    fn grayscale_file_is_rejected_with_its_path() {
        let path = temp_png("gray");
        image::GrayImage::from_pixel(2, 2, image::Luma([128])).save(&path).unwrap();

        let err = load_image(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        match &err {
            TextureError::UnsupportedChannels { path: Some(p), channels } => {
                assert_eq!(p, &path);
                assert_eq!(*channels, 1);
            }
            other => panic!("expected unsupported channels, got {other:?}"),
        }
        assert!(err.to_string().contains(&*path.to_string_lossy()));
    }

    #[test]
    fn rgb_file_loads_as_rgb_and_flipped() {
        let path = temp_png("rgb");
        // Top row red, bottom row blue.
        let img = image::RgbImage::from_raw(1, 2, vec![255, 0, 0, 0, 0, 255]).unwrap();
        img.save(&path).unwrap();

        let loaded = load_image(&path);
        let _ = std::fs::remove_file(&path);
        let loaded = loaded.unwrap();

        assert_eq!(loaded.layout(), PixelLayout::Rgb8);
        assert_eq!((loaded.width(), loaded.height()), (1, 2));
        assert_eq!(loaded.pixels(), &[0, 0, 255, 255, 0, 0]);
    }
}
