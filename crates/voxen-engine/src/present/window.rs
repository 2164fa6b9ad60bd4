use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;
use std::rc::Rc;

use super::{ImageTextureLoader, TextureHandle, TextureLoader};

/// Opaque presentation surface with a fixed resolution.
///
/// Created once; screens and event loops reference it without owning it.
/// The actual platform surface lives behind the presenter seam, the window
/// only carries its metadata and the texture-loading collaborator.
pub struct Window {
    res_x: u32,
    res_y: u32,
    loader: Box<dyn TextureLoader>,
}

impl Window {
    pub fn new(res_x: u32, res_y: u32) -> Self {
        Self::with_loader(res_x, res_y, Box::new(ImageTextureLoader))
    }

    pub fn with_loader(res_x: u32, res_y: u32, loader: Box<dyn TextureLoader>) -> Self {
        Self {
            res_x,
            res_y,
            loader,
        }
    }

    #[inline]
    pub fn resolution(&self) -> (u32, u32) {
        (self.res_x, self.res_y)
    }

    /// Loads a texture through the window's collaborator.
    pub fn load_texture(&mut self, path: &Path) -> anyhow::Result<TextureHandle> {
        self.loader.load(path)
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("res_x", &self.res_x)
            .field("res_y", &self.res_y)
            .finish_non_exhaustive()
    }
}

/// Shared, non-owning reference to a window.
#[derive(Debug, Clone)]
pub struct WindowHandle(Rc<RefCell<Window>>);

impl WindowHandle {
    pub fn new(res_x: u32, res_y: u32) -> Self {
        Self(Rc::new(RefCell::new(Window::new(res_x, res_y))))
    }

    pub fn with_loader(res_x: u32, res_y: u32, loader: Box<dyn TextureLoader>) -> Self {
        Self(Rc::new(RefCell::new(Window::with_loader(
            res_x, res_y, loader,
        ))))
    }

    pub fn borrow(&self) -> Ref<'_, Window> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Window> {
        self.0.borrow_mut()
    }
}
