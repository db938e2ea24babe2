// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-control bit-sets.
//!
//! Every control carries two independent flag spaces: [`PanelState`] for
//! runtime state markers and [`BuildMode`] for how its geometry was derived.
//! A third set, [`RoundCorners`], holds the rounded-corner mask.
//!
//! The classic set/clear/toggle/has vocabulary maps onto the `bitflags`
//! methods `insert`, `remove`, `toggle` and `contains`.

use bitflags::bitflags;

use crate::geometry::Axis;

bitflags! {
    /// Runtime state markers of a control.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PanelState: u32 {
        /// The control is scheduled for destruction.
        const MARKED_FOR_DELETION = 1 << 0;
        /// The control must be repainted.
        const NEEDS_REPAINT = 1 << 1;
        /// The border is painted.
        const PAINT_BORDER_ENABLED = 1 << 2;
        /// The background is painted.
        const PAINT_BACKGROUND_ENABLED = 1 << 3;
        /// The control paints at all.
        const PAINT_ENABLED = 1 << 4;
        /// A paint pass runs after the children have painted.
        const POST_CHILD_PAINT_ENABLED = 1 << 5;
        /// The control is destroyed together with its owner.
        const AUTO_DELETE_ENABLED = 1 << 6;
        /// The control must lay itself out again.
        const NEEDS_LAYOUT = 1 << 7;
        /// Scheme-derived settings must be reapplied.
        const NEEDS_SCHEME_UPDATE = 1 << 8;
        /// Default settings have not been applied yet.
        const NEEDS_DEFAULT_SETTINGS_APPLIED = 1 << 9;
        /// Unhandled key bindings are forwarded to the parent.
        const ALLOW_CHAIN_KEYBINDING_TO_PARENT = 1 << 10;
        /// The control is inside its own layout pass.
        const IN_PERFORM_LAYOUT = 1 << 11;
        /// Plain and fill sizes are scaled to the surface resolution.
        const IS_PROPORTIONAL = 1 << 12;
        /// Triple presses are reported.
        const TRIPLE_PRESS_ALLOWED = 1 << 13;
        /// Dragging starts only once the cursor leaves the control.
        const DRAG_REQUIRES_PANEL_EXIT = 1 << 14;
        /// Mouse input is disabled for this control but not its children.
        const MOUSE_DISABLED_FOR_THIS_PANEL_ONLY = 1 << 15;
    }
}

impl PanelState {
    /// State every freshly constructed control starts with.
    pub const INITIAL: Self = Self::PAINT_ENABLED
        .union(Self::PAINT_BACKGROUND_ENABLED)
        .union(Self::PAINT_BORDER_ENABLED);
}

bitflags! {
    /// Records how each coordinate of a control was derived.
    ///
    /// Everything except [`EDITABLE`](Self::EDITABLE) and
    /// [`DELETABLE`](Self::DELETABLE) is a "save" bit describing the
    /// specifier a value came from; see [`BuildMode::SAVE_BITS`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BuildMode: u32 {
        /// The control may be edited in a layout editor.
        const EDITABLE = 1 << 0;
        /// The control may be deleted in a layout editor.
        const DELETABLE = 1 << 1;
        /// `xpos` is measured from the right edge.
        const XPOS_RIGHT_ALIGNED = 1 << 2;
        /// `xpos` is measured from the horizontal center.
        const XPOS_CENTER_ALIGNED = 1 << 3;
        /// `ypos` is measured from the bottom edge.
        const YPOS_BOTTOM_ALIGNED = 1 << 4;
        /// `ypos` is measured from the vertical center.
        const YPOS_CENTER_ALIGNED = 1 << 5;
        /// `wide` fills the parent minus a margin.
        const WIDE_FULL = 1 << 6;
        /// `tall` fills the parent minus a margin.
        const TALL_FULL = 1 << 7;
        /// The control aligns against its parent rather than the surface.
        const PROPORTIONAL_TO_PARENT = 1 << 8;
        /// `wide` is scaled proportionally.
        const WIDE_PROPORTIONAL = 1 << 9;
        /// `tall` is scaled proportionally.
        const TALL_PROPORTIONAL = 1 << 10;
        /// `xpos` is a multiple of the control's own width.
        const XPOS_PROPORTIONAL_SELF = 1 << 11;
        /// `ypos` is a multiple of the control's own height.
        const YPOS_PROPORTIONAL_SELF = 1 << 12;
        /// `wide` is derived from `tall`.
        const WIDE_PROPORTIONAL_TALL = 1 << 13;
        /// `tall` is derived from `wide`.
        const TALL_PROPORTIONAL_WIDE = 1 << 14;
        /// `xpos` is a multiple of the parent's width.
        const XPOS_PROPORTIONAL_PARENT = 1 << 15;
        /// `ypos` is a multiple of the parent's height.
        const YPOS_PROPORTIONAL_PARENT = 1 << 16;
        /// `wide` is a multiple of the control's current width.
        const WIDE_PROPORTIONAL_SELF = 1 << 17;
        /// `tall` is a multiple of the control's current height.
        const TALL_PROPORTIONAL_SELF = 1 << 18;
    }
}

impl BuildMode {
    /// Every bit recording how a coordinate was derived.
    ///
    /// These are cleared before settings are applied again.
    pub const SAVE_BITS: Self = Self::all().difference(Self::EDITABLE.union(Self::DELETABLE));

    /// Far-edge alignment bit for `axis`.
    #[must_use]
    pub const fn far_aligned(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::XPOS_RIGHT_ALIGNED,
            Axis::Vertical => Self::YPOS_BOTTOM_ALIGNED,
        }
    }

    /// Center alignment bit for `axis`.
    #[must_use]
    pub const fn center_aligned(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::XPOS_CENTER_ALIGNED,
            Axis::Vertical => Self::YPOS_CENTER_ALIGNED,
        }
    }

    /// Position-relative-to-own-size bit for `axis`.
    #[must_use]
    pub const fn position_proportional_self(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::XPOS_PROPORTIONAL_SELF,
            Axis::Vertical => Self::YPOS_PROPORTIONAL_SELF,
        }
    }

    /// Position-relative-to-parent-size bit for `axis`.
    #[must_use]
    pub const fn position_proportional_parent(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::XPOS_PROPORTIONAL_PARENT,
            Axis::Vertical => Self::YPOS_PROPORTIONAL_PARENT,
        }
    }

    /// Fill bit for the size along `axis`.
    #[must_use]
    pub const fn size_full(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::WIDE_FULL,
            Axis::Vertical => Self::TALL_FULL,
        }
    }

    /// Proportional-scaling bit for the size along `axis`.
    #[must_use]
    pub const fn size_proportional(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::WIDE_PROPORTIONAL,
            Axis::Vertical => Self::TALL_PROPORTIONAL,
        }
    }

    /// Own-size multiple bit for the size along `axis`.
    #[must_use]
    pub const fn size_proportional_self(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::WIDE_PROPORTIONAL_SELF,
            Axis::Vertical => Self::TALL_PROPORTIONAL_SELF,
        }
    }

    /// Derived-from-the-other-axis bit for the size along `axis`.
    #[must_use]
    pub const fn size_from_other(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::WIDE_PROPORTIONAL_TALL,
            Axis::Vertical => Self::TALL_PROPORTIONAL_WIDE,
        }
    }
}

bitflags! {
    /// Which corners of a control's background are rounded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RoundCorners: u8 {
        /// Top-left corner.
        const TOP_LEFT = 1 << 0;
        /// Top-right corner.
        const TOP_RIGHT = 1 << 1;
        /// Bottom-left corner.
        const BOTTOM_LEFT = 1 << 2;
        /// Bottom-right corner.
        const BOTTOM_RIGHT = 1 << 3;
        /// All four corners.
        const ALL = Self::TOP_LEFT.bits()
            | Self::TOP_RIGHT.bits()
            | Self::BOTTOM_LEFT.bits()
            | Self::BOTTOM_RIGHT.bits();
    }
}
