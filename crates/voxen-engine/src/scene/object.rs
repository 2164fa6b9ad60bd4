use std::fmt;

use crate::geometry::Position;
use crate::present::TextureId;

/// Identity of one object within one `ObjectTable`.
///
/// Ids are allocated from a monotonic counter and never reused after
/// removal, so a stale id can only ever miss, never alias a newer object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObjectId(u32);

impl ObjectId {
    #[inline]
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A typed object occupying one cell of a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    id: ObjectId,
    position: Position,
    kind: i32,
    texture: Option<TextureId>,
}

impl Object {
    pub(crate) fn new(id: ObjectId, position: Position, kind: i32) -> Self {
        Self {
            id,
            position,
            kind,
            texture: None,
        }
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Always within the owning scene's current bounds.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Application-defined type tag.
    #[inline]
    pub fn kind(&self) -> i32 {
        self.kind
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn set_texture(&mut self, texture: Option<TextureId>) {
        self.texture = texture;
    }

    pub(crate) fn set_kind(&mut self, kind: i32) {
        self.kind = kind;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
