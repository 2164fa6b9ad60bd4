use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::error::{EngineError, Result};

/// 2D projection configuration over a window.
///
/// Purely declarative: the presenter reads it on the next pass, nothing
/// here touches pixels. Default projection is identity (scale 1, no
/// offset).
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    view_scale: f32,
    view_offset: (i32, i32),
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            view_scale: 1.0,
            view_offset: (0, 0),
        }
    }
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn view_scale(&self) -> f32 {
        self.view_scale
    }

    #[inline]
    pub fn view_offset(&self) -> (i32, i32) {
        self.view_offset
    }

    /// Sets the projection scale. Anything that is not a positive finite
    /// number is rejected with `InvalidParameter`.
    pub fn set_view_size(&mut self, scale: f32) -> Result<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(EngineError::InvalidParameter("view scale must be positive"));
        }
        self.view_scale = scale;
        Ok(())
    }

    pub fn set_view_pos(&mut self, dx: i32, dy: i32) {
        self.view_offset = (dx, dy);
    }

    /// Older combined form, kept for callers that set both at once.
    pub fn change_view(&mut self, scale: f32, dx: i32, dy: i32) -> Result<()> {
        self.set_view_size(scale)?;
        self.set_view_pos(dx, dy);
        Ok(())
    }

    /// Maps a scene-space point into display space.
    #[inline]
    pub fn project(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * self.view_scale + self.view_offset.0 as f32,
            y * self.view_scale + self.view_offset.1 as f32,
        )
    }
}

/// Shared handle to a screen, owned independently of the scene.
#[derive(Debug, Clone)]
pub struct ScreenHandle(Rc<RefCell<Screen>>);

impl ScreenHandle {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Screen::new())))
    }

    pub fn borrow(&self) -> Ref<'_, Screen> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Screen> {
        self.0.borrow_mut()
    }
}

impl Default for ScreenHandle {
    fn default() -> Self {
        Self::new()
    }
}
