//! Presentation layer: window surface, view projection, textures.
//!
//! Rasterization and platform windowing are external collaborators; this
//! module only carries the configuration the core hands to them through
//! [`ScenePresenter`].

mod presenter;
mod screen;
mod texture;
mod window;

pub use presenter::ScenePresenter;
#[cfg(test)]
pub(crate) use texture::test_support::StubLoader;
pub use screen::{Screen, ScreenHandle};
pub use texture::{ImageTextureLoader, TextureHandle, TextureId, TextureLoader};
pub use window::{Window, WindowHandle};
