use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::error::Result;
use crate::geometry::{Dimensions, Position};
use crate::present::{TextureHandle, TextureId};

use super::{Object, ObjectId, ObjectTable};

/// A mutable 3D space of typed objects plus the textures they reference.
///
/// Thin façade over [`ObjectTable`]: object lifecycle calls delegate
/// directly, resize variants additionally redefine the scene's bounds.
#[derive(Debug, Clone)]
pub struct Scene {
    table: ObjectTable,
    textures: Vec<TextureHandle>,
}

impl Scene {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            table: ObjectTable::new(dims),
            textures: Vec::new(),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.table.dimensions()
    }

    pub fn create_object(&mut self, pos: Position, kind: i32) -> Result<ObjectId> {
        self.table.insert(pos, kind)
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Result<()> {
        self.table.remove(id)
    }

    pub fn change_type(&mut self, id: ObjectId, new_kind: i32) -> Result<()> {
        self.table.change_type(id, new_kind)
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.table.get(id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.table.get_mut(id)
    }

    pub fn object_at(&self, pos: Position) -> Option<&Object> {
        self.table.object_at(pos)
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.table.iter()
    }

    pub fn object_count(&self) -> usize {
        self.table.len()
    }

    /// Hard resize: out-of-bounds objects are dropped.
    pub fn resize(&mut self, dims: Dimensions) {
        self.table.resize(dims)
    }

    /// Smart resize: out-of-bounds objects are clamped back in.
    pub fn smart_resize(&mut self, dims: Dimensions) {
        self.table.smart_resize(dims)
    }

    /// Registers a loaded texture and returns its slot for object tagging.
    pub fn add_texture(&mut self, texture: TextureHandle) -> TextureId {
        self.textures.push(texture);
        self.textures.len() - 1
    }

    pub fn texture(&self, id: TextureId) -> Option<&TextureHandle> {
        self.textures.get(id)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

/// Shared handle to a scene.
///
/// The engine is single-threaded around dispatch, so the handle is a plain
/// `Rc<RefCell<_>>`. By convention a scene is driven by at most one event
/// loop at a time; nothing enforces that, the same as the rest of the
/// handle surface.
#[derive(Debug, Clone)]
pub struct SceneHandle(Rc<RefCell<Scene>>);

impl SceneHandle {
    pub fn new(dims: Dimensions) -> Self {
        Self(Rc::new(RefCell::new(Scene::new(dims))))
    }

    /// Deep copy: the returned handle owns an independent scene. Mutating
    /// either side never affects the other. The id counter is copied, so
    /// pre-clone ids stay unambiguous in both copies.
    pub fn clone_scene(&self) -> SceneHandle {
        Self(Rc::new(RefCell::new(self.0.borrow().clone())))
    }

    pub fn borrow(&self) -> Ref<'_, Scene> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Scene> {
        self.0.borrow_mut()
    }
}
