// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw plans and damage tracking for pockethud.
//!
//! This crate sits between [`pockethud_core`]'s resolved control tree and a
//! drawing backend. Layout space has its origin at the top-left; surface
//! space, which every rectangle in this crate uses, has its origin at the
//! bottom-left of the 480-unit-high surface.
//!
//! - [`RenderPlan`]: an ordered list of draw commands for one frame,
//!   recorded as a [`Painter`](pockethud_core::paint::Painter)
//! - [`RenderItem`] and [`DrawCommand`]: one entry of a plan
//! - [`DamageTracker`] and [`DamageRegion`]: which parts of the surface
//!   need redrawing after a layout change
//! - [`to_surface_rect`]: the layout-to-surface conversion

mod damage;
mod plan;

pub use damage::{DamageRegion, DamageTracker};
pub use plan::{DrawCommand, RenderItem, RenderPlan, to_surface_rect};
