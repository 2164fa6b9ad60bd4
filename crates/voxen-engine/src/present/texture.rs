use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

/// Slot of a texture inside its scene's texture list.
pub type TextureId = usize;

#[derive(Debug, PartialEq, Eq)]
struct TextureInfo {
    path: PathBuf,
    width: u32,
    height: u32,
}

/// Opaque handle to a loaded texture.
///
/// Cheap to clone; cloning a scene shares the underlying records, which is
/// fine because handles are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureHandle(Arc<TextureInfo>);

impl TextureHandle {
    pub fn path(&self) -> &Path {
        &self.0.path
    }

    /// Pixel dimensions as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.0.width, self.0.height)
    }
}

/// Texture-loading collaborator attached to a window.
///
/// The engine never rasterizes; it only needs enough metadata to hand a
/// stable handle to objects and the presenter.
pub trait TextureLoader {
    fn load(&mut self, path: &Path) -> anyhow::Result<TextureHandle>;
}

/// Default loader: decodes image headers from disk via the `image` crate.
#[derive(Debug, Default)]
pub struct ImageTextureLoader;

impl TextureLoader for ImageTextureLoader {
    fn load(&mut self, path: &Path) -> anyhow::Result<TextureHandle> {
        let (width, height) = image::image_dimensions(path)
            .with_context(|| format!("failed to read texture {}", path.display()))?;
        log::debug!("loaded texture {} ({width}x{height})", path.display());
        Ok(TextureHandle(Arc::new(TextureInfo {
            path: path.to_path_buf(),
            width,
            height,
        })))
    }
}
