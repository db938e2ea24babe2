// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing contract.
//!
//! The core crate never rasterizes anything. During
//! [`ControlTree::draw_children`](crate::control::ControlTree::draw_children)
//! it walks the tree in paint order and hands every visible control to a
//! [`Painter`], which may record, render, or inspect the calls.
//!
//! Each control kind issues its calls in a fixed order: [`Painter::panel`]
//! first for background and border, then the kind-specific call if any.
//!
//! ```rust,ignore
//! let mut plan = RenderPlan::new(tree.surface());
//! tree.draw_children(root, &mut plan)?;
//! backend.submit(&plan);
//! ```

use crate::control::{Control, ControlId};
use crate::geometry::Bounds;
use crate::kind::{ImageSettings, LabelSettings};

/// One control as seen by a [`Painter`].
#[derive(Clone, Copy, Debug)]
pub struct DrawItem<'a> {
    /// The control's handle.
    pub id: ControlId,
    /// Absolute bounds in layout space.
    pub bounds: Bounds,
    /// Bounds shrunk by the control's inset.
    pub client_bounds: Bounds,
    /// Nesting depth below the control `draw_children` started from; direct
    /// children are at depth `1`.
    pub depth: u32,
    /// The control's settings.
    pub control: &'a Control,
}

/// Receives draw calls in paint order.
pub trait Painter {
    /// Background and border of any control.
    fn panel(&mut self, item: &DrawItem<'_>);

    /// Text of a label.
    fn label(&mut self, item: &DrawItem<'_>, label: &LabelSettings);

    /// Image of an image panel.
    fn image(&mut self, item: &DrawItem<'_>, image: &ImageSettings);
}
