// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena storage with allocation, topology, and settings management.

use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{ControlId, INVALID};
use super::node::Control;
use super::traverse::Children;
use crate::dirty;
use crate::error::LayoutError;
use crate::geometry::{AnchoredPosition, Bounds, Position, Size, Surface};

/// Arena storage for a forest of controls.
///
/// Controls are addressed by [`ControlId`] handles. Topology lives in
/// parallel index arrays beside the per-control [`Control`] settings.
/// Destroyed controls are recycled via a free list, and generation counters
/// prevent stale handle access.
///
/// Absolute bounds are cached per control and recomputed lazily by
/// [`bounds`](Self::bounds). Any change to a control's position or size, its
/// ancestry, an ancestor's geometry, or the surface invalidates the affected
/// cache entries.
#[derive(Debug)]
pub struct ControlTree {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Settings (set by callers and the resolver) --
    pub(crate) controls: Vec<Control>,

    // -- Bounds cache (written by `bounds`) --
    pub(crate) absolute_bounds: Vec<Bounds>,
    pub(crate) dirty: Vec<bool>,
    pub(crate) recomputations: u64,
    pub(crate) surface: Surface,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) alive: Vec<bool>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Change reporting --
    pub(crate) changes: DirtyTracker<u32>,
}

impl Default for ControlTree {
    fn default() -> Self {
        Self::new(Surface::default())
    }
}

impl ControlTree {
    /// Creates an empty tree laid out against `surface`.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            controls: Vec::new(),
            absolute_bounds: Vec::new(),
            dirty: Vec::new(),
            recomputations: 0,
            surface,
            generation: Vec::new(),
            alive: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            changes: DirtyTracker::with_cycle_handling(CycleHandling::Error),
        }
    }

    // -- Allocation API --

    /// Adds `control` as a new root and returns its handle.
    pub fn create_control(&mut self, control: Control) -> ControlId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let i = idx as usize;
            self.parent[i] = INVALID;
            self.first_child[i] = INVALID;
            self.next_sibling[i] = INVALID;
            self.prev_sibling[i] = INVALID;
            self.controls[i] = control;
            self.absolute_bounds[i] = Bounds::default();
            self.dirty[i] = true;
            self.alive[i] = true;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.controls.push(control);
            self.absolute_bounds.push(Bounds::default());
            self.dirty.push(true);
            self.generation.push(0);
            self.alive.push(true);
            idx
        };

        self.changes.mark(idx, dirty::TOPOLOGY);
        self.changes.mark(idx, dirty::BOUNDS);

        ControlId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a control and every control it owns.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_subtree(&mut self, id: ControlId) {
        self.validate(id);
        let root = id.idx;
        let parent = self.parent[root as usize];
        if parent != INVALID {
            self.unlink_from_parent(root);
            self.changes.remove_dependency(root, parent, dirty::BOUNDS);
            self.changes.mark(parent, dirty::TOPOLOGY);
        }

        let mut doomed = Vec::new();
        self.collect_subtree(root, &mut doomed);
        // Children before parents so dependency edges are gone first.
        for &idx in doomed.iter().rev() {
            let i = idx as usize;
            self.changes.remove_key(idx);
            self.parent[i] = INVALID;
            self.first_child[i] = INVALID;
            self.next_sibling[i] = INVALID;
            self.prev_sibling[i] = INVALID;
            // Bump generation so old handles immediately fail validation.
            self.generation[i] += 1;
            self.alive[i] = false;
            self.free_list.push(idx);
        }
        tracing::trace!(root = ?id, destroyed = doomed.len(), "destroyed subtree");
    }

    /// Returns whether the given handle refers to a live control.
    #[must_use]
    pub fn is_alive(&self, id: ControlId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && self.alive[id.idx as usize]
    }

    /// Number of live controls.
    #[must_use]
    pub fn control_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Topology API --

    /// Moves `child` to the end of `new_parent`'s child list.
    ///
    /// Does nothing if `new_parent` already is the parent. Otherwise the
    /// child leaves its previous parent's list (the remaining siblings keep
    /// their order) and its whole subtree is invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::WouldCycle`] if `new_parent` is `child` or one
    /// of its descendants.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn set_parent(&mut self, child: ControlId, new_parent: ControlId) -> Result<(), LayoutError> {
        self.validate(child);
        self.validate(new_parent);
        let c = child.idx;
        let p = new_parent.idx;

        if self.parent[c as usize] == p {
            return Ok(());
        }
        if self.is_ancestor_or_self(c, p) {
            return Err(LayoutError::WouldCycle {
                child,
                parent: new_parent,
            });
        }

        if self.parent[c as usize] != INVALID {
            self.detach_idx(c);
        }

        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        // Child bounds depend on the parent's bounds.
        let _ = self.changes.add_dependency(c, p, dirty::BOUNDS);

        self.invalidate_subtree(c);
        self.changes.mark(p, dirty::TOPOLOGY);
        Ok(())
    }

    /// Makes `child` a root. Does nothing if it already is one.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn detach(&mut self, child: ControlId) {
        self.validate(child);
        if self.parent[child.idx as usize] != INVALID {
            self.detach_idx(child.idx);
            self.invalidate_subtree(child.idx);
        }
    }

    /// Returns the parent of a control, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn parent(&self, id: ControlId) -> Option<ControlId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        (p != INVALID).then(|| self.handle(p))
    }

    /// Returns an iterator over the direct children of a control in
    /// insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn children(&self, id: ControlId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the live controls that have no parent, in slot order.
    #[must_use]
    pub fn roots(&self) -> Vec<ControlId> {
        (0..self.len)
            .filter(|&idx| self.alive[idx as usize] && self.parent[idx as usize] == INVALID)
            .map(|idx| self.handle(idx))
            .collect()
    }

    /// Finds the shallowest control in `root`'s subtree (including `root`)
    /// named `name`. Names compare case-insensitively.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn find_by_name(&self, root: ControlId, name: &str) -> Option<ControlId> {
        self.validate(root);
        let mut subtree = Vec::new();
        self.collect_subtree(root.idx, &mut subtree);
        subtree
            .into_iter()
            .find(|&idx| self.controls[idx as usize].name.eq_ignore_ascii_case(name))
            .map(|idx| self.handle(idx))
    }

    // -- Settings API --

    /// Returns the settings of a control.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn control(&self, id: ControlId) -> &Control {
        self.validate(id);
        &self.controls[id.idx as usize]
    }

    /// Mutable access for settings that do not affect geometry.
    pub(crate) fn control_mut(&mut self, id: ControlId) -> &mut Control {
        self.validate(id);
        &mut self.controls[id.idx as usize]
    }

    /// The surface root controls lay out against.
    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Replaces the surface, invalidating every cached bounds.
    pub fn set_surface(&mut self, surface: Surface) {
        if self.surface == surface {
            return;
        }
        self.surface = surface;
        for idx in 0..self.len {
            if self.alive[idx as usize] && self.parent[idx as usize] == INVALID {
                self.invalidate_subtree(idx);
            }
        }
    }

    /// Sets the position relative to the near edges of the parent.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn set_position(&mut self, id: ControlId, position: Position) {
        self.set_anchored_position(id, AnchoredPosition::near(position));
    }

    /// Sets the anchored position. Invalidates the control's subtree.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn set_anchored_position(&mut self, id: ControlId, position: AnchoredPosition) {
        self.validate(id);
        let control = &mut self.controls[id.idx as usize];
        if control.position != position {
            control.position = position;
            self.invalidate_subtree(id.idx);
        }
    }

    /// Sets the size. Invalidates the control's subtree.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn set_size(&mut self, id: ControlId, size: Size) {
        self.validate(id);
        let control = &mut self.controls[id.idx as usize];
        if control.size != size {
            control.size = size;
            self.invalidate_subtree(id.idx);
        }
    }

    /// Sets the paint order among siblings. Bounds are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn set_z_order(&mut self, id: ControlId, z_order: i16) {
        self.validate(id);
        self.controls[id.idx as usize].z_order = z_order;
        if let Some(parent) = self.parent(id) {
            self.changes.mark(parent.idx, dirty::TOPOLOGY);
        }
    }

    /// Enables or disables keyboard input for a control and all its
    /// descendants.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn set_keyboard_input_enabled(&mut self, id: ControlId, enabled: bool) {
        self.validate(id);
        let mut subtree = Vec::new();
        self.collect_subtree(id.idx, &mut subtree);
        for idx in subtree {
            self.controls[idx as usize].keyboard_input = enabled;
        }
    }

    /// Whether the cached bounds of a control need recomputing.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn is_dirty(&self, id: ControlId) -> bool {
        self.validate(id);
        self.dirty[id.idx as usize]
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: ControlId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale ControlId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Builds the current handle for a live slot.
    pub(crate) fn handle(&self, idx: u32) -> ControlId {
        ControlId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Whether `ancestor` is `idx` or one of its ancestors.
    fn is_ancestor_or_self(&self, ancestor: u32, mut idx: u32) -> bool {
        while idx != INVALID {
            if idx == ancestor {
                return true;
            }
            idx = self.parent[idx as usize];
        }
        false
    }

    /// Unlinks `idx` from its parent and drops the dependency edge.
    fn detach_idx(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        self.unlink_from_parent(idx);
        self.changes.remove_dependency(idx, p, dirty::BOUNDS);
        self.changes.mark(p, dirty::TOPOLOGY);
    }

    /// Removes `idx` from its parent's child list without touching dirty state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }

    /// Appends `idx` and all its descendants level by level, so every parent
    /// precedes its children.
    pub(crate) fn collect_subtree(&self, idx: u32, out: &mut Vec<u32>) {
        let mut cursor = out.len();
        out.push(idx);
        while cursor < out.len() {
            let mut child = self.first_child[out[cursor] as usize];
            while child != INVALID {
                out.push(child);
                child = self.next_sibling[child as usize];
            }
            cursor += 1;
        }
    }

    /// Marks the cached bounds of `idx` and its descendants stale.
    fn invalidate_subtree(&mut self, idx: u32) {
        let mut subtree = Vec::new();
        self.collect_subtree(idx, &mut subtree);
        for &i in &subtree {
            self.dirty[i as usize] = true;
        }
        self.changes.mark_with(idx, dirty::BOUNDS, &EagerPolicy);
    }
}
