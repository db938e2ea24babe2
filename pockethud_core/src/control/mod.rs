// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control tree data model.
//!
//! A *control* is a node in a layout forest. Each control has:
//!
//! - An identity ([`ControlId`]), a generational handle that becomes stale
//!   when the control is destroyed, preventing use-after-free bugs at the API
//!   level.
//! - Topology: parent, first-child, and sibling links forming an ordered
//!   tree. Children are owned; destroying a control destroys its subtree.
//! - **Settings** ([`Control`]): name, kind, anchored position, size,
//!   z-order, flags, and the non-geometric state written by the resolver.
//! - **Cached absolute bounds** produced lazily by
//!   [`bounds`](ControlTree::bounds).
//!
//! Controls are stored in struct-of-arrays layout with index-based handles.
//!
//! # Invalidation
//!
//! Mutating a control's position or size, reparenting it, or changing the
//! surface marks the cached bounds of the whole affected subtree stale.
//! Descendants resolve against their ancestors, so an ancestor change must
//! reach them. The same mutations feed the channels in [`dirty`](crate::dirty)
//! for [`take_changes`](ControlTree::take_changes).

mod bounds;
mod id;
mod node;
mod store;
mod traverse;

pub use bounds::LayoutChanges;
pub use id::{ControlId, INVALID};
pub use node::Control;
pub use store::ControlTree;
pub use traverse::Children;
