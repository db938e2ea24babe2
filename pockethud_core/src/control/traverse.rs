// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal and paint order.

use super::id::{ControlId, INVALID};
use super::store::ControlTree;
use crate::error::LayoutError;
use crate::paint::{DrawItem, Painter};

/// An iterator over the direct children of a control.
///
/// Created by [`ControlTree::children`].
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a ControlTree,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a ControlTree, first: u32) -> Self {
        Self {
            tree,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = ControlId;

    fn next(&mut self) -> Option<ControlId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.tree.next_sibling[idx as usize];
        Some(self.tree.handle(idx))
    }
}

impl ControlTree {
    /// Direct children of `id` in paint order: ascending z-order, ties kept
    /// in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn paint_order(&self, id: ControlId) -> Vec<ControlId> {
        let mut children: Vec<_> = self.children(id).collect();
        // `sort_by_key` is stable.
        children.sort_by_key(|child| self.controls[child.idx as usize].z_order);
        children
    }

    /// Draws one control, ignoring its children.
    ///
    /// Invisible controls issue no calls.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unsupported`] for controls of an unsupported kind.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn draw(&mut self, id: ControlId, painter: &mut dyn Painter) -> Result<(), LayoutError> {
        self.draw_at_depth(id, 0, painter)
    }

    /// Draws the subtree below `id` in paint order.
    ///
    /// Children are visited in [`paint_order`](Self::paint_order); each is
    /// drawn and then its own children are drawn before the next sibling.
    /// Invisible controls are skipped together with their subtrees. `id`
    /// itself is not drawn.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first [`LayoutError::Unsupported`].
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn draw_children(
        &mut self,
        id: ControlId,
        painter: &mut dyn Painter,
    ) -> Result<(), LayoutError> {
        self.draw_children_at_depth(id, 1, painter)
    }

    fn draw_children_at_depth(
        &mut self,
        id: ControlId,
        depth: u32,
        painter: &mut dyn Painter,
    ) -> Result<(), LayoutError> {
        for child in self.paint_order(id) {
            if !self.controls[child.idx as usize].visible {
                continue;
            }
            self.draw_at_depth(child, depth, painter)?;
            self.draw_children_at_depth(child, depth + 1, painter)?;
        }
        Ok(())
    }

    fn draw_at_depth(
        &mut self,
        id: ControlId,
        depth: u32,
        painter: &mut dyn Painter,
    ) -> Result<(), LayoutError> {
        let bounds = self.bounds(id);
        let control = &self.controls[id.idx as usize];
        if !control.visible {
            return Ok(());
        }
        let item = DrawItem {
            id,
            bounds,
            client_bounds: bounds.inset_by(control.inset),
            depth,
            control,
        };
        control.kind.draw(painter, &item)
    }
}
