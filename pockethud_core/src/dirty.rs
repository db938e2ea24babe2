// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invalidation channel constants.
//!
//! The control tree records what changed between two
//! [`take_changes`](crate::control::ControlTree::take_changes) calls with
//! [`understory_dirty`]. Each channel is an independent category of change.
//!
//! - **Propagating**: [`BOUNDS`] is marked with
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) and has a dependency edge
//!   from every child to its parent. Moving or resizing a control therefore
//!   reports its whole subtree, since descendants resolve against it.
//!
//! - **Structural**: [`TOPOLOGY`] is marked on the parent when a control is
//!   created, destroyed, attached or detached. It does not propagate.
//!
//! The bounds cache itself is invalidated eagerly in the store; these
//! channels only feed change reporting for damage tracking.

use understory_dirty::Channel;

/// Position, size, or ancestry changed. Propagates to descendants.
pub const BOUNDS: Channel = Channel::new(0);

/// Tree structure changed.
pub const TOPOLOGY: Channel = Channel::new(1);
