use std::collections::HashMap;

use crate::error::{EngineError, Result};
use crate::geometry::{Dimensions, Position};

use super::{Object, ObjectId};

/// Identity + position index backing a scene.
///
/// The grid is dense: each cell holds at most one object, and every live
/// object occupies exactly one cell. Cells store ids; object data lives in
/// a side map so resizing never moves object records.
///
/// Id allocation is monotonic for the lifetime of the table. Removal
/// retires an id permanently.
#[derive(Debug, Clone)]
pub struct ObjectTable {
    dims: Dimensions,
    cells: Vec<Option<ObjectId>>,
    objects: HashMap<ObjectId, Object>,
    next_id: u32,
}

impl ObjectTable {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cell_count()],
            objects: HashMap::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Inserts a new object at `pos` and returns its freshly allocated id.
    ///
    /// Fails with `OutOfBounds` outside the current dimensions and with
    /// `SlotOccupied` if the cell already holds a live object. Neither
    /// failure mutates the table.
    pub fn insert(&mut self, pos: Position, kind: i32) -> Result<ObjectId> {
        if !self.dims.contains(pos) {
            return Err(EngineError::OutOfBounds {
                pos,
                dims: self.dims,
            });
        }
        let cell = self.dims.cell_index(pos);
        if let Some(occupant) = self.cells[cell] {
            return Err(EngineError::SlotOccupied { pos, occupant });
        }

        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        self.cells[cell] = Some(id);
        self.objects.insert(id, Object::new(id, pos, kind));
        Ok(id)
    }

    /// Removes the object, freeing its cell. The id stays retired.
    pub fn remove(&mut self, id: ObjectId) -> Result<()> {
        let obj = self.objects.remove(&id).ok_or(EngineError::NotFound(id))?;
        self.cells[self.dims.cell_index(obj.position())] = None;
        Ok(())
    }

    /// Mutates the type tag in place; identity and position are unchanged.
    pub fn change_type(&mut self, id: ObjectId, new_kind: i32) -> Result<()> {
        let obj = self.objects.get_mut(&id).ok_or(EngineError::NotFound(id))?;
        obj.set_kind(new_kind);
        Ok(())
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(&id)
    }

    pub fn object_at(&self, pos: Position) -> Option<&Object> {
        if !self.dims.contains(pos) {
            return None;
        }
        self.cells[self.dims.cell_index(pos)]
            .and_then(|id| self.objects.get(&id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    /// Hard resize: objects outside `new_dims` are dropped. Data loss is
    /// the contract here; use [`smart_resize`] to relocate instead.
    ///
    /// Retained objects keep their ids, types and positions.
    ///
    /// Dimension validation happens when the [`Dimensions`] value is
    /// constructed, so the resize itself cannot fail.
    ///
    /// [`smart_resize`]: ObjectTable::smart_resize
    pub fn resize(&mut self, new_dims: Dimensions) {
        self.rebuild(new_dims, false)
    }

    /// Smart resize: out-of-bounds objects are relocated by clamping each
    /// out-of-range coordinate to the new maximum along that axis.
    ///
    /// When a clamp lands on an occupied cell the lowest id keeps the
    /// cell and the displaced object is dropped. Replay is in ascending
    /// id order, so the outcome is deterministic.
    pub fn smart_resize(&mut self, new_dims: Dimensions) {
        self.rebuild(new_dims, true)
    }

    fn rebuild(&mut self, new_dims: Dimensions, clamp: bool) {
        let mut cells = vec![None; new_dims.cell_count()];

        let mut ids: Vec<ObjectId> = self.objects.keys().copied().collect();
        ids.sort_unstable();

        let mut dropped: Vec<ObjectId> = Vec::new();
        for id in ids {
            let pos = self.objects[&id].position();
            let target = if new_dims.contains(pos) {
                pos
            } else if clamp {
                pos.clamped_to(new_dims)
            } else {
                dropped.push(id);
                continue;
            };

            let cell = new_dims.cell_index(target);
            match cells[cell] {
                None => {
                    cells[cell] = Some(id);
                    if target != pos {
                        if let Some(obj) = self.objects.get_mut(&id) {
                            obj.set_position(target);
                        }
                    }
                }
                // Ascending replay: the occupant always has the lower id.
                Some(winner) => {
                    log::debug!("resize collision at {target}: {winner} keeps the cell, dropping {id}");
                    dropped.push(id);
                }
            }
        }

        for id in &dropped {
            self.objects.remove(id);
        }
        if !dropped.is_empty() {
            log::debug!("resize to {new_dims} dropped {} object(s)", dropped.len());
        }

        self.dims = new_dims;
        self.cells = cells;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(x: u32, y: u32, z: u32) -> Dimensions {
        Dimensions::new(x, y, z).unwrap()
    }

    fn pos(x: u32, y: u32, z: u32) -> Position {
        Position::new(x, y, z)
    }

    // ── insert / identity ─────────────────────────────────────────────────

    #[test]
    fn ids_are_distinct_and_monotonic() {
        let mut table = ObjectTable::new(dims(3, 3, 3));
        let mut last = None;
        for i in 0..3 {
            let id = table.insert(pos(i, 0, 0), 7).unwrap();
            if let Some(prev) = last {
                assert!(id > prev);
            }
            last = Some(id);
        }
    }

    #[test]
    fn insert_out_of_bounds_fails() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let err = table.insert(pos(2, 0, 0), 1).unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { .. }));
        assert!(table.is_empty());
    }

    #[test]
    fn insert_occupied_cell_fails_without_mutation() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let first = table.insert(pos(0, 0, 0), 1).unwrap();
        let err = table.insert(pos(0, 0, 0), 2).unwrap_err();
        assert_eq!(
            err,
            EngineError::SlotOccupied {
                pos: pos(0, 0, 0),
                occupant: first,
            }
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.object_at(pos(0, 0, 0)).unwrap().kind(), 1);
    }

    #[test]
    fn removed_ids_are_never_reused() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let first = table.insert(pos(0, 0, 0), 1).unwrap();
        table.remove(first).unwrap();
        let second = table.insert(pos(0, 0, 0), 1).unwrap();
        assert!(second > first);
    }

    #[test]
    fn remove_unknown_id_fails() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let id = table.insert(pos(0, 0, 0), 1).unwrap();
        table.remove(id).unwrap();
        assert_eq!(table.remove(id), Err(EngineError::NotFound(id)));
    }

    // ── type mutation ─────────────────────────────────────────────────────

    #[test]
    fn change_type_keeps_identity_and_position() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let id = table.insert(pos(1, 0, 1), 1).unwrap();
        table.change_type(id, 9).unwrap();
        let obj = table.get(id).unwrap();
        assert_eq!(obj.kind(), 9);
        assert_eq!(obj.position(), pos(1, 0, 1));
        assert_eq!(obj.id(), id);
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn hard_resize_drops_exactly_the_out_of_bounds_objects() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let kept = table.insert(pos(0, 0, 0), 1).unwrap();
        let gone = table.insert(pos(1, 1, 1), 2).unwrap();
        table.resize(dims(1, 1, 1));
        assert!(table.get(kept).is_some());
        assert!(table.get(gone).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn smart_resize_clamps_to_the_new_boundary() {
        let mut table = ObjectTable::new(dims(4, 4, 4));
        let id = table.insert(pos(3, 3, 3), 1).unwrap();
        table.smart_resize(dims(2, 2, 2));
        assert_eq!(table.get(id).unwrap().position(), pos(1, 1, 1));
        assert_eq!(table.object_at(pos(1, 1, 1)).unwrap().id(), id);
    }

    #[test]
    fn smart_resize_collision_keeps_the_lowest_id() {
        let mut table = ObjectTable::new(dims(4, 1, 1));
        let low = table.insert(pos(2, 0, 0), 1).unwrap();
        let high = table.insert(pos(3, 0, 0), 2).unwrap();
        // Both clamp to x = 1.
        table.smart_resize(dims(2, 1, 1));
        assert_eq!(table.get(low).unwrap().position(), pos(1, 0, 0));
        assert!(table.get(high).is_none());
    }

    #[test]
    fn smart_resize_in_bounds_loser_is_displaced_by_a_lower_id_clamp() {
        let mut table = ObjectTable::new(dims(4, 1, 1));
        let low = table.insert(pos(3, 0, 0), 1).unwrap();
        let high = table.insert(pos(1, 0, 0), 2).unwrap();
        table.smart_resize(dims(2, 1, 1));
        // The lower id clamps onto (1,0,0) first; the in-bounds higher id loses.
        assert_eq!(table.get(low).unwrap().position(), pos(1, 0, 0));
        assert!(table.get(high).is_none());
    }

    #[test]
    fn resize_allows_reinsertion_in_freed_cells() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let gone = table.insert(pos(1, 1, 1), 2).unwrap();
        table.resize(dims(1, 1, 1));
        table.resize(dims(2, 2, 2));
        let fresh = table.insert(pos(1, 1, 1), 3).unwrap();
        assert!(fresh > gone);
    }

    // ── clone ─────────────────────────────────────────────────────────────

    #[test]
    fn clone_shares_no_state_with_the_source() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let id = table.insert(pos(0, 0, 0), 1).unwrap();
        let mut copy = table.clone();

        copy.remove(id).unwrap();
        copy.insert(pos(1, 1, 1), 5).unwrap();

        assert!(table.get(id).is_some());
        assert!(table.object_at(pos(1, 1, 1)).is_none());
        assert_eq!(table.len(), 1);
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn clone_copies_the_id_counter() {
        let mut table = ObjectTable::new(dims(2, 2, 2));
        let pre = table.insert(pos(0, 0, 0), 1).unwrap();
        let mut copy = table.clone();
        let next = copy.insert(pos(1, 0, 0), 1).unwrap();
        assert!(next > pre);
    }
}
