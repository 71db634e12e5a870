use std::fmt;
use std::path::Path;

/// Errors from texture file loading or decoding.
#[derive(Debug)]
pub enum TextureError {
    /// Failed to read the image file.
    Io(std::io::Error),
    /// The bytes could not be decoded as PNG or JPEG.
    Decode(image::ImageError),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read texture: {e}"),
            Self::Decode(e) => write!(f, "failed to decode texture: {e}"),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e)
    }
}

/// Decode PNG/JPEG bytes to RGBA8, optionally flipping vertically.
///
/// Image files store the first row at the top, while the tutorial UVs put
/// v=0 at the bottom; `flip_vertically` reconciles the two for assets
/// authored that way.
///
/// # Errors
///
/// Returns [`TextureError::Decode`] for undecodable bytes.
pub fn decode_rgba(
    bytes: &[u8],
    flip_vertically: bool,
) -> Result<image::RgbaImage, TextureError> {
    let mut decoded = image::load_from_memory(bytes)?;
    if flip_vertically {
        decoded = decoded.flipv();
    }
    Ok(decoded.to_rgba8())
}

/// RGBA8 pixels for a two-tone checkerboard of `size`×`size` texels with
/// `cell`-texel squares. Used as the fallback when a texture file is
/// missing or undecodable.
#[must_use]
pub fn checkerboard_pixels(size: u32, cell: u32) -> Vec<u8> {
    let cell = cell.max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let on = ((x / cell) + (y / cell)) % 2 == 0;
            let rgba: [u8; 4] =
                if on { [200, 60, 200, 255] } else { [30, 30, 30, 255] };
            pixels.extend_from_slice(&rgba);
        }
    }
    pixels
}

/// A sampled 2D color texture: GPU texture, view, and sampler.
///
/// Uploaded as `Rgba8UnormSrgb` with a repeat-addressing linear sampler,
/// the wgpu analog of the GL texture defaults the tutorials rely on.
/// Single mip level.
pub struct Texture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    /// Repeat + linear sampler.
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Decode image bytes and upload them.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError`] if decoding fails.
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        bytes: &[u8],
        flip_vertically: bool,
    ) -> Result<Self, TextureError> {
        let rgba = decode_rgba(bytes, flip_vertically)?;
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba_pixels(
            device,
            queue,
            label,
            &rgba,
            width,
            height,
        ))
    }

    /// Read an image file and upload it.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError`] if the file cannot be read or decoded.
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        flip_vertically: bool,
    ) -> Result<Self, TextureError> {
        let bytes = std::fs::read(path)?;
        let label = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("texture");
        Self::from_bytes(device, queue, label, &bytes, flip_vertically)
    }

    /// Built-in checkerboard fallback for missing texture files.
    #[must_use]
    pub fn checkerboard(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        const SIZE: u32 = 64;
        let pixels = checkerboard_pixels(SIZE, 8);
        Self::from_rgba_pixels(
            device,
            queue,
            "checkerboard",
            &pixels,
            SIZE,
            SIZE,
        )
    }

    fn from_rgba_pixels(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Depth attachment used in place of `GL_DEPTH_TEST`.
pub struct DepthTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Format of all depth attachments in the demos.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create a depth texture matching the surface dimensions.
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

#[cfg(test)]
mod tests {
    use super::{checkerboard_pixels, decode_rgba};

    /// Encode a tiny RGBA image to PNG bytes in memory.
    fn png_bytes(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
        use image::ImageEncoder;
        let mut bytes = Vec::new();
        image::codecs::png::PngEncoder::new(&mut bytes)
            .write_image(
                pixels,
                width,
                height,
                image::ExtendedColorType::Rgba8,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_dimensions_and_pixels() {
        let pixels: Vec<u8> = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
        ];
        let bytes = png_bytes(&pixels, 2, 1);
        let rgba = decode_rgba(&bytes, false).unwrap();
        assert_eq!(rgba.dimensions(), (2, 1));
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(rgba.get_pixel(1, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn vertical_flip_reverses_rows() {
        let pixels: Vec<u8> = vec![
            255, 0, 0, 255, // top row: red
            0, 0, 255, 255, // bottom row: blue
        ];
        let bytes = png_bytes(&pixels, 1, 2);
        let rgba = decode_rgba(&bytes, true).unwrap();
        assert_eq!(rgba.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(rgba.get_pixel(0, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(decode_rgba(b"not an image", false).is_err());
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let pixels = checkerboard_pixels(4, 2);
        assert_eq!(pixels.len(), 4 * 4 * 4);
        let texel =
            |x: usize, y: usize| &pixels[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
        // Same cell, same color; adjacent cell differs.
        assert_eq!(texel(0, 0), texel(1, 1));
        assert_ne!(texel(0, 0), texel(2, 0));
        assert_ne!(texel(0, 0), texel(0, 2));
        // Diagonal cells match again.
        assert_eq!(texel(0, 0), texel(2, 2));
    }
}
