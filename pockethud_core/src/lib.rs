// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout resolution for VGUI-style HUD resource files.
//!
//! `pockethud_core` turns declarative resource trees (nested key/value
//! objects with `xpos`, `wide`, `ControlName` and friends) into a tree of
//! controls with concrete integer geometry.
//!
//! # Architecture
//!
//! ```text
//!   PropertyObject tree
//!       │
//!       ▼
//!   ControlRegistry::build ──► ControlTree ◄── LayoutResolver::apply_settings
//!                                  │
//!                 ┌────────────────┴─────────────────┐
//!                 ▼                                  ▼
//!   ControlTree::bounds (lazy cache)     ControlTree::take_changes
//!                 │                                  │
//!                 ▼                                  ▼
//!   ControlTree::draw_children ──► Painter   damage tracking
//! ```
//!
//! **[`specifier`]**: the position and size mini-language. Parses strings
//! such as `"rs1"`, `"c-50+10"` or `"f0"`.
//!
//! **[`resolve`]**: [`LayoutResolver`](resolve::LayoutResolver) applies one
//! property object to one control: width, then height, then position, then
//! the non-geometric settings. Scheme, [`config`] and the proportional
//! scaling hook are held by the resolver; there are no globals.
//!
//! **[`control`]**: arena-backed control forest with generational handles,
//! z-ordered paint traversal and a dirty-flag bounds cache.
//!
//! **[`registry`]**: maps `ControlName` classes to constructors and builds a
//! control tree shaped like a resource tree.
//!
//! **[`dirty`]**: change-reporting channels via `understory_dirty`.
//!
//! **[`paint`]**: the [`Painter`](paint::Painter) trait that drawing
//! backends implement.
//!
//! **[`geometry`]**, **[`flags`]**, **[`property`]**, **[`scheme`]**,
//! **[`kind`]**: the data types the above operate on.
//!
//! # Logging
//!
//! Soft problems are reported through `tracing` (`warn`) and resolution steps
//! at `debug`/`trace`. The crate never installs a subscriber.
//!
//! # Example
//!
//! ```
//! use pockethud_core::control::ControlTree;
//! use pockethud_core::geometry::{Position, Size};
//! use pockethud_core::property::KeyValues;
//! use pockethud_core::registry::ControlRegistry;
//! use pockethud_core::resolve::LayoutResolver;
//! use pockethud_core::scheme::Scheme;
//!
//! let file = KeyValues::object("Resource/UI/Example.res").with_object(
//!     KeyValues::object("Background")
//!         .with("ControlName", "ImagePanel")
//!         .with("xpos", "c-100")
//!         .with("ypos", "r60")
//!         .with("wide", "200")
//!         .with("tall", "50"),
//! );
//!
//! let mut tree = ControlTree::default();
//! let resolver = LayoutResolver::new(Scheme::new("ClientScheme"));
//! let roots = ControlRegistry::with_defaults()
//!     .build_file(&mut tree, &resolver, &file)
//!     .unwrap();
//!
//! let bounds = tree.bounds(roots[0]);
//! assert_eq!(bounds.position, Position::new(326, 420));
//! assert_eq!(bounds.size, Size::new(200, 50));
//! ```

pub mod config;
pub mod control;
pub mod dirty;
pub mod error;
pub mod flags;
pub mod geometry;
pub mod kind;
pub mod paint;
pub mod property;
pub mod registry;
pub mod resolve;
pub mod scheme;
pub mod specifier;

pub use error::{LayoutError, RegistryError, Result, SpecifierError};
