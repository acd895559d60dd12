//! Texture registry
//!
//! Loads image files into GPU texture objects, tags each with a caller-chosen
//! string, and binds the loaded textures to sequential texture units. The
//! registry exclusively owns the GPU handles it creates: no other component
//! may release them, and `release_all` frees each handle exactly once.

use image::GenericImageView;
use thiserror::Error;

use crate::gfx::device::{FilterMode, PixelFormat, TextureDevice, TextureHandle, TextureUpload, WrapMode};

/// Conservative ceiling on simultaneously bound textures. Registration past
/// this count fails loudly instead of overflowing the unit range the target
/// GPU guarantees.
pub const MAX_TEXTURE_UNITS: usize = 16;

/// Non-fatal resource loading failures.
///
/// None of these abort scene preparation; the caller logs and continues,
/// and later lookups for the skipped tag simply miss.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to decode image `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("image `{path}` has {channels} color channels, only 3 or 4 are supported")]
    UnsupportedChannels { path: String, channels: u8 },

    #[error("texture unit capacity ({max}) exhausted")]
    CapacityExhausted { max: usize },
}

struct TextureEntry {
    tag: String,
    handle: TextureHandle,
}

/// Ordered registry of loaded textures.
///
/// Each entry's texture unit index equals its registration position, so the
/// unit assignment is stable for the lifetime of the registry. Duplicate
/// tags are permitted; lookups resolve to the first registered entry, but
/// every entry stays GPU-resident.
#[derive(Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Decodes the image at `path` and registers it under `tag`.
    ///
    /// Images are flipped vertically on load. Only 3-channel (RGB8) and
    /// 4-channel (RGBA8) images are accepted; anything else is rejected
    /// with no registration side effect. The created texture uses repeat
    /// wrapping on both axes, linear min/mag filtering, and mipmaps.
    ///
    /// Returns the texture unit index assigned to the new entry. The
    /// decoded pixel buffer is dropped once the upload has been issued.
    pub fn register(
        &mut self,
        device: &mut dyn TextureDevice,
        path: &str,
        tag: &str,
    ) -> Result<u32, ResourceError> {
        if self.entries.len() >= MAX_TEXTURE_UNITS {
            return Err(ResourceError::CapacityExhausted {
                max: MAX_TEXTURE_UNITS,
            });
        }

        let decoded = image::open(path)
            .map_err(|source| ResourceError::Decode {
                path: path.to_string(),
                source,
            })?
            .flipv();

        let (width, height) = decoded.dimensions();
        let (format, pixels) = match decoded.color().channel_count() {
            3 => (PixelFormat::Rgb8, decoded.into_rgb8().into_raw()),
            4 => (PixelFormat::Rgba8, decoded.into_rgba8().into_raw()),
            channels => {
                return Err(ResourceError::UnsupportedChannels {
                    path: path.to_string(),
                    channels,
                })
            }
        };

        let handle = device.create_texture(&TextureUpload {
            pixels: &pixels,
            width,
            height,
            format,
            wrap: WrapMode::Repeat,
            filter: FilterMode::Linear,
            generate_mipmaps: true,
        });

        let unit = self.entries.len() as u32;
        log::info!("loaded texture `{tag}` from {path} ({width}x{height}, unit {unit})");

        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });

        Ok(unit)
    }

    /// Binds every registered texture to the unit matching its index.
    ///
    /// Idempotent; call once after all registrations, and again whenever
    /// external state changes could have unbound the textures.
    pub fn bind_all(&self, device: &mut dyn TextureDevice) {
        for (unit, entry) in self.entries.iter().enumerate() {
            device.bind_to_unit(entry.handle, unit as u32);
        }
    }

    /// Resolves a tag to its texture unit index.
    ///
    /// Exact, case-sensitive, first-match linear scan.
    pub fn find_unit(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|index| index as u32)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Releases every registered texture's GPU storage.
    ///
    /// Teardown only: drawing after this call is invalid. Entries are
    /// drained, so a repeated call releases nothing a second time.
    pub fn release_all(&mut self, device: &mut dyn TextureDevice) {
        for entry in self.entries.drain(..) {
            device.release(entry.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Default)]
    struct FakeDevice {
        next_handle: u64,
        created: Vec<(u32, u32, PixelFormat)>,
        bound: Vec<(TextureHandle, u32)>,
        released: Vec<TextureHandle>,
    }

    impl TextureDevice for FakeDevice {
        fn create_texture(&mut self, upload: &TextureUpload<'_>) -> TextureHandle {
            assert_eq!(
                upload.pixels.len() as u32,
                upload.width * upload.height * upload.format.bytes_per_pixel()
            );
            assert_eq!(upload.wrap, WrapMode::Repeat);
            assert_eq!(upload.filter, FilterMode::Linear);
            assert!(upload.generate_mipmaps);
            self.created.push((upload.width, upload.height, upload.format));
            self.next_handle += 1;
            TextureHandle::new(self.next_handle)
        }

        fn bind_to_unit(&mut self, handle: TextureHandle, unit: u32) {
            self.bound.push((handle, unit));
        }

        fn release(&mut self, handle: TextureHandle) {
            assert!(
                !self.released.contains(&handle),
                "double release of {handle:?}"
            );
            self.released.push(handle);
        }
    }

    fn fixture_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lochan_{}_{name}.png", std::process::id()))
    }

    fn write_rgb_png(name: &str) -> PathBuf {
        let path = fixture_path(name);
        image::RgbImage::from_pixel(4, 2, image::Rgb([40, 80, 120]))
            .save(&path)
            .unwrap();
        path
    }

    fn write_rgba_png(name: &str) -> PathBuf {
        let path = fixture_path(name);
        image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn write_gray_png(name: &str) -> PathBuf {
        let path = fixture_path(name);
        image::GrayImage::from_pixel(2, 2, image::Luma([128]))
            .save(&path)
            .unwrap();
        path
    }

    fn write_gray_alpha_png(name: &str) -> PathBuf {
        let path = fixture_path(name);
        image::GrayAlphaImage::from_pixel(2, 2, image::LumaA([128, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_register_assigns_sequential_units() {
        let mut device = FakeDevice::default();
        let mut registry = TextureRegistry::new();
        let rgb = write_rgb_png("seq_rgb");
        let rgba = write_rgba_png("seq_rgba");

        let first = registry
            .register(&mut device, rgb.to_str().unwrap(), "stone")
            .unwrap();
        let second = registry
            .register(&mut device, rgba.to_str().unwrap(), "water")
            .unwrap();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_unit("stone"), Some(0));
        assert_eq!(registry.find_unit("water"), Some(1));
        assert_eq!(device.created[0].2, PixelFormat::Rgb8);
        assert_eq!(device.created[1].2, PixelFormat::Rgba8);
    }

    #[test]
    fn test_register_unreadable_path_fails_without_side_effect() {
        let mut device = FakeDevice::default();
        let mut registry = TextureRegistry::new();

        let result = registry.register(&mut device, "/nonexistent/missing.png", "ghost");

        assert!(matches!(result, Err(ResourceError::Decode { .. })));
        assert!(registry.is_empty());
        assert!(device.created.is_empty());
        assert_eq!(registry.find_unit("ghost"), None);
    }

    #[test]
    fn test_register_rejects_single_channel_image() {
        let mut device = FakeDevice::default();
        let mut registry = TextureRegistry::new();
        let gray = write_gray_png("gray");

        let result = registry.register(&mut device, gray.to_str().unwrap(), "gray");

        assert!(matches!(
            result,
            Err(ResourceError::UnsupportedChannels { channels: 1, .. })
        ));
        assert!(registry.is_empty());
        assert!(device.created.is_empty());
    }

    #[test]
    fn test_register_rejects_gray_alpha_image() {
        let mut device = FakeDevice::default();
        let mut registry = TextureRegistry::new();
        let gray_alpha = write_gray_alpha_png("gray_alpha");

        let result = registry.register(&mut device, gray_alpha.to_str().unwrap(), "gray_alpha");

        assert!(matches!(
            result,
            Err(ResourceError::UnsupportedChannels { channels: 2, .. })
        ));
        assert!(registry.is_empty());
        assert!(device.created.is_empty());
        assert_eq!(registry.find_unit("gray_alpha"), None);
    }

    #[test]
    fn test_register_past_capacity_fails_loudly() {
        let mut device = FakeDevice::default();
        let mut registry = TextureRegistry::new();
        let rgb = write_rgb_png("cap");
        let path = rgb.to_str().unwrap();

        for i in 0..MAX_TEXTURE_UNITS {
            registry
                .register(&mut device, path, &format!("tex{i}"))
                .unwrap();
        }

        let result = registry.register(&mut device, path, "overflow");
        assert!(matches!(
            result,
            Err(ResourceError::CapacityExhausted { max: MAX_TEXTURE_UNITS })
        ));
        assert_eq!(registry.len(), MAX_TEXTURE_UNITS);
    }

    #[test]
    fn test_duplicate_tags_resolve_to_first_registered() {
        let mut device = FakeDevice::default();
        let mut registry = TextureRegistry::new();
        let rgb = write_rgb_png("dup");
        let path = rgb.to_str().unwrap();

        registry.register(&mut device, path, "stone").unwrap();
        registry.register(&mut device, path, "stone").unwrap();

        assert_eq!(registry.find_unit("stone"), Some(0));
        // Both entries stay resident even though the second is shadowed.
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_bind_all_binds_units_in_registration_order() {
        let mut device = FakeDevice::default();
        let mut registry = TextureRegistry::new();
        let rgb = write_rgb_png("bind");
        let path = rgb.to_str().unwrap();

        registry.register(&mut device, path, "a").unwrap();
        registry.register(&mut device, path, "b").unwrap();
        registry.bind_all(&mut device);
        registry.bind_all(&mut device);

        let units: Vec<u32> = device.bound.iter().map(|(_, unit)| *unit).collect();
        assert_eq!(units, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_release_all_releases_each_handle_once() {
        let mut device = FakeDevice::default();
        let mut registry = TextureRegistry::new();
        let rgb = write_rgb_png("release");
        let path = rgb.to_str().unwrap();

        registry.register(&mut device, path, "a").unwrap();
        registry.register(&mut device, path, "b").unwrap();

        registry.release_all(&mut device);
        registry.release_all(&mut device);

        assert_eq!(device.released.len(), 2);
        assert!(registry.is_empty());
    }
}
