// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver configuration.
//!
//! The two presets differ in how faithfully they reproduce quirks of
//! historical resource files. [`ResolverConfig::strict`] is the default;
//! [`ResolverConfig::legacy`] matches files authored against the quirks.

use crate::specifier::{DEFAULT_CHAIN_LIMIT, MarkerMode};

/// Which rectangle alignment, fill and proportional specifiers measure
/// against when a control has a parent.
///
/// Root controls always use the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewportPolicy {
    /// The parent's resolved bounds.
    #[default]
    Parent,
    /// The surface, unless the control sets `proportionalToParent`.
    Surface,
}

/// Configuration for the [`LayoutResolver`](crate::resolve::LayoutResolver).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolverConfig {
    /// How position proportionality markers are read.
    pub marker_mode: MarkerMode,
    /// Alignment viewport for controls with a parent.
    pub viewport: ViewportPolicy,
    /// Maximum number of chained `+`/`-` position terms.
    pub chain_limit: u8,
}

impl ResolverConfig {
    /// Only `s` and `p` are position markers and children align against
    /// their parent.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            marker_mode: MarkerMode::Strict,
            viewport: ViewportPolicy::Parent,
            chain_limit: DEFAULT_CHAIN_LIMIT,
        }
    }

    /// The character after the optional alignment prefix is always taken as
    /// a marker, and children align against the surface unless
    /// `proportionalToParent` is set.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            marker_mode: MarkerMode::Legacy,
            viewport: ViewportPolicy::Surface,
            chain_limit: DEFAULT_CHAIN_LIMIT,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::strict()
    }
}
