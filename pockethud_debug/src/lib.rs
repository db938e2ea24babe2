// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for resolved pockethud control trees.
//!
//! - [`pretty::TreePrinter`]: human-readable one-line-per-control output.
//! - [`snapshot`]: JSON snapshots of a tree for golden tests and tooling.

pub mod pretty;
pub mod snapshot;
