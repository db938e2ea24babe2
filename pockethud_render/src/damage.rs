// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial damage tracking for partial re-rendering.

use std::collections::HashMap;

use kurbo::Rect;
use pockethud_core::control::{ControlId, ControlTree};

use crate::plan::to_surface_rect;

/// A region of the surface that needs re-rendering.
///
/// Backends can use this to only redraw areas that changed since the last
/// frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DamageRegion {
    /// The entire surface needs redrawing.
    #[default]
    Full,
    /// Rectangles in surface space that need redrawing.
    Rects(Vec<Rect>),
    /// Nothing changed; the previous frame can be reused.
    None,
}

impl DamageRegion {
    /// Returns `true` if no region needs redrawing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Merges another damage region into this one.
    pub fn merge(&mut self, other: &Self) {
        match (&*self, other) {
            (Self::Full, _) | (_, Self::Full) => *self = Self::Full,
            (Self::None, _) => *self = other.clone(),
            (_, Self::None) => {}
            (Self::Rects(a), Self::Rects(b)) => {
                let mut merged = a.clone();
                merged.extend_from_slice(b);
                *self = Self::Rects(merged);
            }
        }
    }

    /// The smallest rectangle covering the damage, clamped to `surface`.
    ///
    /// Returns `None` when nothing is damaged.
    #[must_use]
    pub fn bounding_box(&self, surface: Rect) -> Option<Rect> {
        match self {
            Self::Full => Some(surface),
            Self::None => None,
            Self::Rects(rects) => rects
                .iter()
                .copied()
                .reduce(|acc, rect| acc.union(rect))
                .map(|rect| rect.intersect(surface)),
        }
    }
}

/// Turns [`ControlTree::take_changes`] into [`DamageRegion`]s.
///
/// Remembers the last reported surface rectangle of every control so that a
/// move damages both where the control was and where it is now.
#[derive(Clone, Debug, Default)]
pub struct DamageTracker {
    previous: HashMap<ControlId, Rect>,
}

impl DamageTracker {
    /// Creates a tracker that has not seen any frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the tree's changes and returns the damage since the last call.
    ///
    /// Any topology change damages the full surface and re-records every
    /// control.
    pub fn update(&mut self, tree: &mut ControlTree) -> DamageRegion {
        let changes = tree.take_changes();
        if changes.topology_changed {
            self.refresh(tree);
            tracing::trace!(controls = self.previous.len(), "topology changed, full damage");
            return DamageRegion::Full;
        }

        let mut rects = Vec::new();
        for id in changes.bounds {
            let now = to_surface_rect(tree.bounds(id));
            match self.previous.insert(id, now) {
                Some(before) if before == now => {}
                Some(before) => {
                    rects.push(before);
                    rects.push(now);
                }
                None => rects.push(now),
            }
        }
        if rects.is_empty() {
            DamageRegion::None
        } else {
            DamageRegion::Rects(rects)
        }
    }

    fn refresh(&mut self, tree: &mut ControlTree) {
        self.previous.clear();
        let mut stack = tree.roots();
        while let Some(id) = stack.pop() {
            let rect = to_surface_rect(tree.bounds(id));
            self.previous.insert(id, rect);
            stack.extend(tree.children(id));
        }
    }
}
