//! GPU texture device interface
//!
//! The graphics API is an external collaborator; this module defines the
//! small surface the texture registry needs from it: create a texture object
//! from decoded pixels, bind it to a numbered texture unit, and release it
//! at teardown. The upload descriptor carries the sampling parameters as
//! plain data so the contract (repeat wrap, linear filtering, mipmaps) is
//! visible at the call site rather than implied.

/// Opaque reference to a GPU-side texture object.
///
/// Handles are produced and consumed only by a [`TextureDevice`]; the
/// texture registry owns them exclusively and is the only component allowed
/// to release them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u64);

impl TextureHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Pixel layout of uploaded texture data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Texture coordinate addressing outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

/// Minification/magnification filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Linear,
    Nearest,
}

/// Everything a device needs to create one 2D texture object.
#[derive(Debug)]
pub struct TextureUpload<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Applied to both texture axes.
    pub wrap: WrapMode,
    /// Applied to both min and mag filtering.
    pub filter: FilterMode,
    pub generate_mipmaps: bool,
}

/// GPU texture object lifecycle, implemented by the graphics backend.
pub trait TextureDevice {
    /// Creates a texture object and uploads the pixel data.
    fn create_texture(&mut self, upload: &TextureUpload<'_>) -> TextureHandle;

    /// Binds the texture to the numbered texture unit for sampling.
    fn bind_to_unit(&mut self, handle: TextureHandle, unit: u32);

    /// Releases the GPU-side storage. The handle must not be used afterwards.
    fn release(&mut self, handle: TextureHandle);
}
