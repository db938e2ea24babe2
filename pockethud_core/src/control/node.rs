// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-control settings.

use crate::flags::{BuildMode, PanelState, RoundCorners};
use crate::geometry::{AnchoredPosition, Inset, Size};
use crate::kind::ControlKind;
use crate::scheme::{BackgroundType, Color};

/// The settings of one control.
///
/// Geometry inputs are changed through [`ControlTree`](super::ControlTree)
/// setters so the bounds cache stays coherent; everything else is written by
/// the [`LayoutResolver`](crate::resolve::LayoutResolver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub(crate) name: String,
    pub(crate) kind: ControlKind,
    pub(crate) position: AnchoredPosition,
    pub(crate) size: Size,
    pub(crate) z_order: i16,
    pub(crate) state: PanelState,
    pub(crate) build_mode: BuildMode,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) mouse_input: bool,
    pub(crate) keyboard_input: bool,
    pub(crate) tab_position: i32,
    pub(crate) border: Option<String>,
    pub(crate) inset: Inset,
    pub(crate) background: BackgroundType,
    pub(crate) rounded_corners: RoundCorners,
    pub(crate) fg_color: Option<Color>,
    pub(crate) bg_color: Option<Color>,
}

impl Control {
    /// Creates a visible, enabled control at the origin with zero size.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: AnchoredPosition::default(),
            size: Size::ZERO,
            z_order: 0,
            state: PanelState::INITIAL,
            build_mode: BuildMode::empty(),
            visible: true,
            enabled: true,
            mouse_input: true,
            keyboard_input: true,
            tab_position: 0,
            border: None,
            inset: Inset::ZERO,
            background: BackgroundType::Filled,
            rounded_corners: RoundCorners::ALL,
            fg_color: None,
            bg_color: None,
        }
    }

    /// Sets the initial size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the initial position.
    #[must_use]
    pub fn with_position(mut self, position: AnchoredPosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the initial z-order.
    #[must_use]
    pub fn with_z_order(mut self, z_order: i16) -> Self {
        self.z_order = z_order;
        self
    }

    /// The control's name (`fieldName`, or its resource-file key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The widget kind.
    #[must_use]
    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    /// Position relative to the parent's viewport.
    #[must_use]
    pub fn position(&self) -> AnchoredPosition {
        self.position
    }

    /// Current size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Paint order among siblings; lower draws first.
    #[must_use]
    pub fn z_order(&self) -> i16 {
        self.z_order
    }

    /// Runtime state flags.
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// How the geometry was derived.
    #[must_use]
    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    /// Whether the control (and so its subtree) is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the control accepts interaction.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether mouse input reaches the control.
    #[must_use]
    pub fn mouse_input_enabled(&self) -> bool {
        self.mouse_input
    }

    /// Whether keyboard input reaches the control.
    #[must_use]
    pub fn keyboard_input_enabled(&self) -> bool {
        self.keyboard_input
    }

    /// Keyboard focus order.
    #[must_use]
    pub fn tab_position(&self) -> i32 {
        self.tab_position
    }

    /// Name of the scheme border in use.
    #[must_use]
    pub fn border(&self) -> Option<&str> {
        self.border.as_deref()
    }

    /// Client-area inset.
    #[must_use]
    pub fn inset(&self) -> Inset {
        self.inset
    }

    /// Background style.
    #[must_use]
    pub fn background(&self) -> BackgroundType {
        self.background
    }

    /// Rounded-corner mask for [`BackgroundType::RoundedCorners`].
    #[must_use]
    pub fn rounded_corners(&self) -> RoundCorners {
        self.rounded_corners
    }

    /// Foreground color resolved from the scheme.
    #[must_use]
    pub fn fg_color(&self) -> Option<Color> {
        self.fg_color
    }

    /// Background color resolved from the scheme.
    #[must_use]
    pub fn bg_color(&self) -> Option<Color> {
        self.bg_color
    }

    /// Whether the background should be painted.
    #[must_use]
    pub fn paints_background(&self) -> bool {
        self.state
            .contains(PanelState::PAINT_ENABLED | PanelState::PAINT_BACKGROUND_ENABLED)
    }

    /// Whether the border should be painted.
    #[must_use]
    pub fn paints_border(&self) -> bool {
        self.border.is_some()
            && self
                .state
                .contains(PanelState::PAINT_ENABLED | PanelState::PAINT_BORDER_ENABLED)
    }
}
