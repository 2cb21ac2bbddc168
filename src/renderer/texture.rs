use std::path::Path;

use anyhow::{Context, Result};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Texture plus its default view
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

/// Decode an image file into RGBA8
pub fn load_image(path: impl AsRef<Path>) -> Result<image::RgbaImage> {
    let path = path.as_ref();
    let image = image::open(path).with_context(|| format!("Failed to load texture: {:?}", path))?;
    let rgba = image.to_rgba8();
    log::info!("Loaded texture {:?} ({}x{})", path, rgba.width(), rgba.height());
    Ok(rgba)
}

/// Upload RGBA8 pixels as an sRGB color texture
pub fn create_color_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> GpuTexture {
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
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        texture.as_image_copy(),
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    GpuTexture { texture, view }
}

/// Load `path` onto the GPU, or `None` (with a warning) if it cannot be decoded
pub fn load_color_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: &Path,
) -> Option<GpuTexture> {
    match load_image(path) {
        Ok(rgba) => Some(create_color_texture(
            device,
            queue,
            "Color Map",
            rgba.width(),
            rgba.height(),
            rgba.as_raw(),
        )),
        Err(e) => {
            log::warn!("{:#}; drawing untextured", e);
            None
        }
    }
}

/// 1x1 white texture bound for untextured materials
pub fn create_white_texture(device: &wgpu::Device, queue: &wgpu::Queue) -> GpuTexture {
    create_color_texture(device, queue, "White Texture", 1, 1, &[255, 255, 255, 255])
}

/// Depth target; `sampled` also allows binding it in shaders
pub fn create_depth_texture(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    sampled: bool,
) -> GpuTexture {
    let mut usage = wgpu::TextureUsages::RENDER_ATTACHMENT;
    if sampled {
        usage |= wgpu::TextureUsages::TEXTURE_BINDING;
    }

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage,
        view_formats: &[],
    });

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    GpuTexture { texture, view }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_reports_path() {
        let err = load_image("does/not/exist.jpg").unwrap_err();
        assert!(format!("{:#}", err).contains("exist.jpg"));
    }

    #[test]
    fn test_load_png_from_disk() {
        let path = std::env::temp_dir().join(format!("scene-viewer-tex-{}.png", std::process::id()));
        let mut image = image::RgbaImage::new(2, 3);
        image.put_pixel(1, 2, image::Rgba([10, 20, 30, 255]));
        image.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (2, 3));
        assert_eq!(loaded.get_pixel(1, 2).0, [10, 20, 30, 255]);
    }
}
