// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy absolute bounds and change reporting.
//!
//! A control's absolute bounds are its anchored position resolved against
//! its viewport, expanded by its size. The viewport of a root is the surface
//! at the origin; any other control's viewport is its parent's absolute
//! bounds. Results are cached per control and only recomputed while the
//! control is marked dirty.
//!
//! Because every geometry mutation dirties the whole affected subtree, a
//! clean control always has clean ancestors. [`ControlTree::bounds`] relies
//! on that: it walks up only as far as the topmost dirty ancestor and
//! recomputes from there downwards.

use super::id::{ControlId, INVALID};
use super::store::ControlTree;
use crate::dirty;
use crate::geometry::Bounds;

/// What changed between two [`ControlTree::take_changes`] calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutChanges {
    /// Live controls whose bounds may differ, parents before children.
    pub bounds: Vec<ControlId>,
    /// Whether controls were created, destroyed, moved between parents, or
    /// reordered.
    pub topology_changed: bool,
}

impl LayoutChanges {
    /// Whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty() && !self.topology_changed
    }
}

impl ControlTree {
    /// Returns the absolute bounds of a control in layout space, recomputing
    /// them if they are stale.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn bounds(&mut self, id: ControlId) -> Bounds {
        self.validate(id);
        self.bounds_at(id.idx)
    }

    /// Returns the absolute bounds shrunk by the control's inset.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn client_bounds(&mut self, id: ControlId) -> Bounds {
        let inset = self.control(id).inset();
        self.bounds(id).inset_by(inset)
    }

    /// Total number of bounds recomputations since the tree was created.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recomputations
    }

    /// Drains change tracking and reports what changed since the last call.
    pub fn take_changes(&mut self) -> LayoutChanges {
        let moved: Vec<u32> = self
            .changes
            .drain(dirty::BOUNDS)
            .affected()
            .deterministic()
            .run()
            .collect();
        let bounds = moved
            .into_iter()
            .filter(|&idx| idx < self.len && self.alive[idx as usize])
            .map(|idx| self.handle(idx))
            .collect();
        let topology_changed = self
            .changes
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .count()
            > 0;
        LayoutChanges {
            bounds,
            topology_changed,
        }
    }

    pub(crate) fn bounds_at(&mut self, idx: u32) -> Bounds {
        if !self.dirty[idx as usize] {
            return self.absolute_bounds[idx as usize];
        }

        // Collect the dirty chain up to the first clean ancestor.
        let mut chain = vec![idx];
        let mut up = self.parent[idx as usize];
        while up != INVALID && self.dirty[up as usize] {
            chain.push(up);
            up = self.parent[up as usize];
        }

        for &i in chain.iter().rev() {
            self.recompute(i);
        }
        self.absolute_bounds[idx as usize]
    }

    /// Recomputes one control whose parent (if any) is clean.
    fn recompute(&mut self, idx: u32) {
        let parent = self.parent[idx as usize];
        let viewport = if parent == INVALID {
            self.surface.viewport()
        } else {
            debug_assert!(!self.dirty[parent as usize], "parent recomputed first");
            self.absolute_bounds[parent as usize]
        };
        let control = &self.controls[idx as usize];
        let bounds = Bounds::new(control.position.resolve(viewport), control.size);
        self.absolute_bounds[idx as usize] = bounds;
        self.dirty[idx as usize] = false;
        self.recomputations += 1;
        tracing::trace!(idx, ?bounds, "recomputed bounds");
    }
}
