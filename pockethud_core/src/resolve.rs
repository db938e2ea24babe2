// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying resource settings to a control.
//!
//! [`LayoutResolver::apply_settings`] reads one property object and writes
//! the result into a control of a [`ControlTree`]:
//!
//! 1. The alignment viewport is chosen (see [`ViewportPolicy`]).
//! 2. `wide` then `tall` are resolved, then `xpos` and `ypos` against the
//!    new size.
//! 3. Persisted [`BuildMode::SAVE_BITS`] are cleared and the new size,
//!    position and bits are written.
//! 4. `zpos` and the non-geometric settings are applied, followed by the
//!    kind-specific settings.
//!
//! Steps 1 and 2 only read the control, so a failing call leaves it as it
//! was.
//!
//! Problems that have a sensible fallback never fail the call. They are
//! logged with `tracing::warn!` and returned in [`Resolution::warnings`].

use core::fmt;

use crate::config::{ResolverConfig, ViewportPolicy};
use crate::control::{ControlId, ControlTree};
use crate::error::{LayoutError, Result};
use crate::flags::{BuildMode, PanelState, RoundCorners};
use crate::geometry::{AnchoredCoord, Axis, Inset, Position, Size, saturate};
use crate::property::PropertyObject;
use crate::scheme::Scheme;
use crate::specifier::{PositionSpec, SizeSpec};

/// Scales values authored against the reference resolution to the current
/// output resolution.
///
/// Closures `Fn(i16, Axis) -> i16` implement this trait.
pub trait ProportionalScaler {
    /// Scales `value` measured along `axis`.
    fn scale(&self, value: i16, axis: Axis) -> i16;
}

impl<F: Fn(i16, Axis) -> i16> ProportionalScaler for F {
    fn scale(&self, value: i16, axis: Axis) -> i16 {
        self(value, axis)
    }
}

/// A recoverable problem found while applying settings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutWarning {
    /// `wide` and `tall` both derive from the other axis; the nested one
    /// resolved to `0`.
    MutualOtherAxis {
        /// The axis that resolved to `0`.
        axis: Axis,
    },
    /// A value needed proportional scaling but no scaler is installed; the
    /// unscaled value was used.
    ScalingUnavailable {
        /// The axis of the unscaled value.
        axis: Axis,
    },
    /// `border` named a border the scheme does not have and there is no
    /// base border.
    UnknownBorder {
        /// The requested border name.
        name: String,
    },
    /// `fgcolor` or `bgcolor` named a color the scheme does not have.
    UnknownColor {
        /// The requested color name.
        name: String,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MutualOtherAxis { axis } => {
                write!(f, "`{}` and its other axis both use `o`", axis.size_key())
            }
            Self::ScalingUnavailable { axis } => {
                write!(f, "no proportional scaler for {axis:?} value, using it unscaled")
            }
            Self::UnknownBorder { name } => write!(f, "scheme has no border `{name}`"),
            Self::UnknownColor { name } => write!(f, "scheme has no color `{name}`"),
        }
    }
}

/// The outcome of [`LayoutResolver::apply_settings`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved size.
    pub size: Size,
    /// The resolved offset from the parent's near edges.
    pub position: Position,
    /// Every `BuildMode` bit recorded by this resolution.
    pub build_mode: BuildMode,
    /// Soft problems, in the order they were found.
    pub warnings: Vec<LayoutWarning>,
}

/// Applies property objects to controls.
///
/// Holds everything resolution depends on besides the tree itself: the
/// scheme, the configuration, and the optional scaling hook.
pub struct LayoutResolver {
    scheme: Scheme,
    config: ResolverConfig,
    scaler: Option<Box<dyn ProportionalScaler>>,
}

impl fmt::Debug for LayoutResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutResolver")
            .field("scheme", &self.scheme.name())
            .field("config", &self.config)
            .field("scaler", &self.scaler.is_some())
            .finish()
    }
}

impl LayoutResolver {
    /// Creates a resolver with the default configuration and no scaler.
    #[must_use]
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            config: ResolverConfig::default(),
            scaler: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Installs a proportional scaler.
    #[must_use]
    pub fn with_scaler(mut self, scaler: impl ProportionalScaler + 'static) -> Self {
        self.scaler = Some(Box::new(scaler));
        self
    }

    /// The scheme borders and colors are looked up in.
    #[must_use]
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Applies `object` to the control `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Specifier`] if a position specifier chains more
    /// terms than [`ResolverConfig::chain_limit`]. The control is left
    /// untouched in that case, including its state and `BuildMode` bits.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn apply_settings(
        &self,
        tree: &mut ControlTree,
        id: ControlId,
        object: &dyn PropertyObject,
    ) -> Result<Resolution> {
        let control = tree.control(id);
        let proportional = if object.property("proportional").is_some() {
            object.get_bool_or("proportional", false)
        } else {
            control.state.contains(PanelState::IS_PROPORTIONAL)
        };
        let current_size = control.size();
        let current_position = control.position();

        let mut build = BuildMode::empty();
        let proportional_to_parent = object.get_bool_or("proportionalToParent", false);
        if proportional_to_parent {
            build |= BuildMode::PROPORTIONAL_TO_PARENT;
        }
        let parent_size = tree.parent(id).map(|parent| tree.bounds(parent).size);
        let viewport = match (parent_size, self.config.viewport) {
            (Some(size), ViewportPolicy::Parent) => size,
            (Some(size), ViewportPolicy::Surface) if proportional_to_parent => size,
            _ => tree.surface().size(),
        };

        let mut sizes = SizePass {
            resolver: self,
            object,
            current: current_size,
            viewport,
            proportional,
            build: BuildMode::empty(),
            warnings: Vec::new(),
            other_depth: 0,
        };
        let width = sizes.resolve(Axis::Horizontal);
        let height = sizes.resolve(Axis::Vertical);
        let size = Size::new(width, height);
        build |= sizes.build;
        let mut warnings = sizes.warnings;

        let mut position = current_position;
        let mut resolved = Position::new(current_position.x.offset, current_position.y.offset);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let Some((offset, bits)) =
                self.resolve_position(object, axis, size, viewport, proportional, &mut warnings)?
            else {
                continue;
            };
            build |= bits;
            match axis {
                Axis::Horizontal => {
                    position.x = AnchoredCoord::near(offset);
                    resolved.x = offset;
                }
                Axis::Vertical => {
                    position.y = AnchoredCoord::near(offset);
                    resolved.y = offset;
                }
            }
        }

        // Nothing is written to the control before this point.
        let control = tree.control_mut(id);
        control.build_mode.remove(BuildMode::SAVE_BITS);
        control.state.set(PanelState::IS_PROPORTIONAL, proportional);

        tree.set_anchored_position(id, position);
        if let Some(z) = object.get_int("zpos") {
            tree.set_z_order(id, saturate(z));
        }
        tree.set_size(id, size);

        self.apply_state(tree, id, object, &mut warnings);
        let control = tree.control_mut(id);
        control.kind.apply_settings(object);
        control.build_mode |= build;
        tree.set_keyboard_input_enabled(id, object.get_bool_or("keyboardinputenabled", true));

        tracing::debug!(
            control = object.name(),
            width,
            height,
            x = resolved.x,
            y = resolved.y,
            build_mode = ?build,
            "applied settings"
        );
        Ok(Resolution {
            size,
            position: resolved,
            build_mode: build,
            warnings,
        })
    }

    /// Resolves `xpos`/`ypos`. `None` when the property is absent.
    fn resolve_position(
        &self,
        object: &dyn PropertyObject,
        axis: Axis,
        size: Size,
        viewport: Size,
        proportional: bool,
        warnings: &mut Vec<LayoutWarning>,
    ) -> Result<Option<(i16, BuildMode)>> {
        let key = axis.position_key();
        let Some(raw) = object.get_string(key) else {
            return Ok(None);
        };
        let mut spec = PositionSpec::parse(raw, self.config.marker_mode, self.config.chain_limit)
            .map_err(|source| LayoutError::Specifier {
                property: key,
                source,
            })?;
        if proportional {
            spec.map_pixel_literals(|v| self.scale(v, axis, warnings));
        }
        let offset = spec.resolve(size.along(axis), viewport.along(axis));
        Ok(Some((offset, spec.build_mode(axis))))
    }

    fn scale(&self, value: i16, axis: Axis, warnings: &mut Vec<LayoutWarning>) -> i16 {
        match &self.scaler {
            Some(scaler) => scaler.scale(value, axis),
            None => {
                push_warning(warnings, LayoutWarning::ScalingUnavailable { axis });
                value
            }
        }
    }

    /// Visibility, input, paint flags, border, colors, name and corners.
    fn apply_state(
        &self,
        tree: &mut ControlTree,
        id: ControlId,
        object: &dyn PropertyObject,
        warnings: &mut Vec<LayoutWarning>,
    ) {
        let control = tree.control_mut(id);
        control.visible = object.get_bool_or("visible", true);
        control.enabled = object.get_bool_or("enabled", true);
        control.mouse_input = object.get_bool_or("mouseinputenabled", true);
        control.tab_position = object.get_int_or("tabPosition", 0);

        let paint_background = object.get_int_or("paintbackground", -1);
        if paint_background >= 0 {
            control
                .state
                .set(PanelState::PAINT_BACKGROUND_ENABLED, paint_background != 0);
        }
        let paint_border = object.get_int_or("paintborder", -1);
        if paint_border >= 0 {
            control
                .state
                .set(PanelState::PAINT_BORDER_ENABLED, paint_border != 0);
        }

        if let Some(name) = object.get_string("border") {
            match self.scheme.border(name) {
                Some(border) => {
                    control.border = Some(border.name.clone());
                    control.inset = border.inset;
                    control.background = border.background;
                }
                None => {
                    control.border = None;
                    control.inset = Inset::ZERO;
                    push_warning(
                        warnings,
                        LayoutWarning::UnknownBorder {
                            name: name.to_owned(),
                        },
                    );
                }
            }
        }

        for (key, slot) in [("fgcolor", &mut control.fg_color), ("bgcolor", &mut control.bg_color)] {
            if let Some(name) = object.get_string(key) {
                *slot = self.scheme.color(name);
                if slot.is_none() {
                    push_warning(
                        warnings,
                        LayoutWarning::UnknownColor {
                            name: name.to_owned(),
                        },
                    );
                }
            }
        }

        if let Some(name) = object.get_string("fieldName") {
            control.name = name.to_owned();
        }

        if let Some(mask) = object.get_int("RoundedCorners") {
            // Only the four corner bits are meaningful.
            let mask = u8::try_from(mask & 0xf).unwrap_or_default();
            control.rounded_corners = RoundCorners::from_bits_truncate(mask);
        }
    }
}

fn push_warning(warnings: &mut Vec<LayoutWarning>, warning: LayoutWarning) {
    if warnings.contains(&warning) {
        return;
    }
    tracing::warn!(%warning, "soft layout problem");
    warnings.push(warning);
}

/// Width and height resolution for one control.
struct SizePass<'a> {
    resolver: &'a LayoutResolver,
    object: &'a dyn PropertyObject,
    current: Size,
    viewport: Size,
    proportional: bool,
    build: BuildMode,
    warnings: Vec<LayoutWarning>,
    /// Number of `o` sizes currently being resolved.
    other_depth: u8,
}

impl SizePass<'_> {
    fn resolve(&mut self, axis: Axis) -> i16 {
        let current = self.current.along(axis);
        let Some(raw) = self.object.get_string(axis.size_key()) else {
            return current;
        };
        let spec = SizeSpec::parse(raw);
        self.build |= spec.build_mode(axis);
        let parent = self.viewport.along(axis);
        match spec {
            SizeSpec::FromOther(_) => {
                if self.other_depth > 0 {
                    push_warning(&mut self.warnings, LayoutWarning::MutualOtherAxis { axis });
                    return 0;
                }
                self.other_depth += 1;
                let other = self.resolve(axis.other());
                self.other_depth -= 1;
                spec.resolve(current, parent, other)
            }
            SizeSpec::ParentScaled(value) => self.scale(value, axis),
            SizeSpec::Literal(value) if self.proportional => self.scale(value, axis),
            SizeSpec::Fill(margin) if self.proportional => {
                let margin = self.scale(margin, axis);
                SizeSpec::Fill(margin).resolve(current, parent, 0)
            }
            SizeSpec::Literal(_) | SizeSpec::Fill(_) | SizeSpec::SelfScaled(_) => {
                spec.resolve(current, parent, 0)
            }
        }
    }

    fn scale(&mut self, value: i16, axis: Axis) -> i16 {
        self.resolver.scale(value, axis, &mut self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Control;
    use crate::geometry::{AspectRatio, Surface};
    use crate::kind::ControlKind;
    use crate::property::KeyValues;
    use crate::scheme::{BackgroundType, Color, SchemeBorder};

    fn setup() -> (ControlTree, ControlId) {
        let mut tree = ControlTree::new(Surface::new(AspectRatio::Standard4x3));
        let id = tree.create_control(Control::new("Panel", ControlKind::Panel));
        (tree, id)
    }

    fn resolver() -> LayoutResolver {
        LayoutResolver::new(Scheme::new("ClientScheme"))
    }

    #[test]
    fn width_height_then_position() {
        let (mut tree, id) = setup();
        let kv = KeyValues::object("Panel")
            .with("wide", "100")
            .with("tall", "50")
            .with("xpos", "r0")
            .with("ypos", "c-25");
        let res = resolver().apply_settings(&mut tree, id, &kv).unwrap();
        assert_eq!(res.size, Size::new(100, 50));
        assert_eq!(res.position, Position::new(640, 215));
        assert_eq!(
            res.build_mode,
            BuildMode::XPOS_RIGHT_ALIGNED | BuildMode::YPOS_CENTER_ALIGNED
        );
        assert!(res.warnings.is_empty());
        assert_eq!(tree.control(id).size(), Size::new(100, 50));
        assert_eq!(tree.bounds(id).position, Position::new(640, 215));
    }

    #[test]
    fn self_proportional_position_uses_the_new_width() {
        let (mut tree, id) = setup();
        let kv = KeyValues::object("Panel").with("wide", "40").with("xpos", "rs1");
        let res = resolver().apply_settings(&mut tree, id, &kv).unwrap();
        assert_eq!(res.position.x, 600);
    }

    #[test]
    fn absent_properties_keep_current_values() {
        let (mut tree, id) = setup();
        tree.set_size(id, Size::new(7, 9));
        tree.set_position(id, Position::new(3, 4));
        let res = resolver()
            .apply_settings(&mut tree, id, &KeyValues::object("Panel"))
            .unwrap();
        assert_eq!(res.size, Size::new(7, 9));
        assert_eq!(res.position, Position::new(3, 4));
        assert_eq!(res.build_mode, BuildMode::empty());
    }

    #[test]
    fn fill_uses_the_parent_in_strict_mode() {
        let (mut tree, root) = setup();
        tree.set_size(root, Size::new(300, 200));
        let child = tree.create_control(Control::new("Child", ControlKind::Panel));
        tree.set_parent(child, root).unwrap();

        let kv = KeyValues::object("Child").with("wide", "f10").with("tall", "f0");
        let res = resolver().apply_settings(&mut tree, child, &kv).unwrap();
        assert_eq!(res.size, Size::new(290, 200));
        assert_eq!(res.build_mode, BuildMode::WIDE_FULL | BuildMode::TALL_FULL);
    }

    #[test]
    fn legacy_viewport_uses_the_surface_unless_proportional_to_parent() {
        let (mut tree, root) = setup();
        tree.set_size(root, Size::new(300, 200));
        let child = tree.create_control(Control::new("Child", ControlKind::Panel));
        tree.set_parent(child, root).unwrap();
        let legacy = resolver().with_config(ResolverConfig::legacy());

        let kv = KeyValues::object("Child").with("wide", "f0");
        let res = legacy.apply_settings(&mut tree, child, &kv).unwrap();
        assert_eq!(res.size.width, 640);

        let kv = kv.with("proportionalToParent", "1");
        let res = legacy.apply_settings(&mut tree, child, &kv).unwrap();
        assert_eq!(res.size.width, 300);
        assert!(res.build_mode.contains(BuildMode::PROPORTIONAL_TO_PARENT));
    }

    #[test]
    fn other_axis_derives_from_the_resolved_axis() {
        let (mut tree, id) = setup();
        let kv = KeyValues::object("Panel").with("wide", "o2").with("tall", "30");
        let res = resolver().apply_settings(&mut tree, id, &kv).unwrap();
        assert_eq!(res.size, Size::new(60, 30));
        assert!(res.build_mode.contains(BuildMode::WIDE_PROPORTIONAL_TALL));
    }

    #[test]
    fn mutual_other_axis_is_a_warning() {
        let (mut tree, id) = setup();
        let kv = KeyValues::object("Panel").with("wide", "o1").with("tall", "o1");
        let res = resolver().apply_settings(&mut tree, id, &kv).unwrap();
        assert_eq!(res.size, Size::ZERO);
        assert!(matches!(
            res.warnings.first(),
            Some(LayoutWarning::MutualOtherAxis { .. })
        ));
    }

    #[test]
    fn proportional_sizes_go_through_the_scaler() {
        let (mut tree, id) = setup();
        let kv = KeyValues::object("Panel").with("wide", "p50").with("tall", "10");

        let res = resolver().apply_settings(&mut tree, id, &kv).unwrap();
        assert_eq!(res.size.width, 50);
        assert_eq!(
            res.warnings,
            vec![LayoutWarning::ScalingUnavailable {
                axis: Axis::Horizontal
            }]
        );

        let doubled = resolver().with_scaler(|v: i16, _axis: Axis| v * 2);
        let res = doubled.apply_settings(&mut tree, id, &kv).unwrap();
        assert_eq!(res.size, Size::new(100, 10));
        assert!(res.warnings.is_empty());
        assert!(res.build_mode.contains(BuildMode::WIDE_PROPORTIONAL));
    }

    #[test]
    fn is_proportional_scales_plain_values() {
        let (mut tree, id) = setup();
        let doubled = resolver().with_scaler(|v: i16, _axis: Axis| v * 2);
        let kv = KeyValues::object("Panel")
            .with("proportional", "1")
            .with("wide", "10")
            .with("tall", "f20")
            .with("xpos", "5");
        let res = doubled.apply_settings(&mut tree, id, &kv).unwrap();
        assert_eq!(res.size, Size::new(20, 440));
        assert_eq!(res.position.x, 10);
        assert!(tree.control(id).state().contains(PanelState::IS_PROPORTIONAL));
    }

    #[test]
    fn save_bits_are_cleared_before_resolving() {
        let (mut tree, id) = setup();
        let resolver = resolver();
        let first = KeyValues::object("Panel").with("xpos", "r0").with("wide", "f0");
        let _ = resolver.apply_settings(&mut tree, id, &first).unwrap();
        tree.control_mut(id).build_mode.insert(BuildMode::EDITABLE);

        let second = KeyValues::object("Panel").with("ypos", "c0");
        let _ = resolver.apply_settings(&mut tree, id, &second).unwrap();
        assert_eq!(
            tree.control(id).build_mode(),
            BuildMode::EDITABLE | BuildMode::YPOS_CENTER_ALIGNED
        );
    }

    #[test]
    fn overlong_position_chain_fails() {
        let (mut tree, id) = setup();
        let kv = KeyValues::object("Panel").with("xpos", "0+1+1+1").with("wide", "5");
        let strict = resolver().with_config(ResolverConfig {
            chain_limit: 2,
            ..ResolverConfig::strict()
        });
        let err = strict.apply_settings(&mut tree, id, &kv).unwrap_err();
        assert!(matches!(err, LayoutError::Specifier { property: "xpos", .. }));
        assert_eq!(tree.control(id).size(), Size::ZERO);
    }

    #[test]
    fn failed_resolution_keeps_state_and_build_mode() {
        let (mut tree, id) = setup();
        let resolver = resolver();
        let first = KeyValues::object("Panel").with("xpos", "r0").with("wide", "f0");
        let _ = resolver.apply_settings(&mut tree, id, &first).unwrap();
        let before = tree.control(id).clone();
        assert_eq!(
            before.build_mode(),
            BuildMode::XPOS_RIGHT_ALIGNED | BuildMode::WIDE_FULL
        );

        let deep = format!("0{}", "+1".repeat(20));
        let second = KeyValues::object("Panel")
            .with("proportional", "1")
            .with("wide", "10")
            .with("xpos", deep);
        let _ = resolver.apply_settings(&mut tree, id, &second).unwrap_err();

        let after = tree.control(id);
        assert_eq!(after.build_mode(), before.build_mode());
        assert_eq!(after.state(), before.state());
        assert!(!after.state().contains(PanelState::IS_PROPORTIONAL));
        assert_eq!(after.size(), before.size());
        assert_eq!(after.position(), before.position());
    }

    #[test]
    fn state_settings_and_defaults() {
        let (mut tree, id) = setup();
        let kv = KeyValues::object("Panel")
            .with("visible", "0")
            .with("mouseinputenabled", "0")
            .with("tabPosition", "3")
            .with("paintbackground", "0")
            .with("zpos", "-2")
            .with("fieldName", "Renamed")
            .with("RoundedCorners", "5");
        let _ = resolver().apply_settings(&mut tree, id, &kv).unwrap();
        let control = tree.control(id);
        assert!(!control.is_visible());
        assert!(control.is_enabled());
        assert!(!control.mouse_input_enabled());
        assert!(control.keyboard_input_enabled());
        assert_eq!(control.tab_position(), 3);
        assert!(!control.state().contains(PanelState::PAINT_BACKGROUND_ENABLED));
        assert!(control.state().contains(PanelState::PAINT_BORDER_ENABLED));
        assert_eq!(control.z_order(), -2);
        assert_eq!(control.name(), "Renamed");
        assert_eq!(
            control.rounded_corners(),
            RoundCorners::TOP_LEFT | RoundCorners::BOTTOM_LEFT
        );
    }

    #[test]
    fn border_sets_inset_and_background() {
        let (mut tree, id) = setup();
        let scheme = Scheme::new("s")
            .with_border(SchemeBorder {
                name: "MainMenuBGBorder".into(),
                inset: Inset::new(4, 4, 4, 4),
                background: BackgroundType::RoundedCorners,
            })
            .with_color("TanLight", Color::rgba(1, 2, 3, 255));
        let resolver = LayoutResolver::new(scheme);
        let kv = KeyValues::object("Panel")
            .with("border", "MainMenuBGBorder")
            .with("fgcolor", "TanLight")
            .with("bgcolor", "Nope");
        let res = resolver.apply_settings(&mut tree, id, &kv).unwrap();
        let control = tree.control(id);
        assert_eq!(control.border(), Some("MainMenuBGBorder"));
        assert_eq!(control.inset(), Inset::new(4, 4, 4, 4));
        assert_eq!(control.background(), BackgroundType::RoundedCorners);
        assert_eq!(control.fg_color(), Some(Color::rgba(1, 2, 3, 255)));
        assert_eq!(
            res.warnings,
            vec![LayoutWarning::UnknownColor {
                name: "Nope".into()
            }]
        );

        let kv = KeyValues::object("Panel").with("border", "Missing");
        let res = resolver.apply_settings(&mut tree, id, &kv).unwrap();
        assert_eq!(tree.control(id).border(), None);
        assert_eq!(tree.control(id).inset(), Inset::ZERO);
        assert_eq!(res.warnings.len(), 1);
    }

    #[test]
    fn unknown_border_falls_back_to_base_border() {
        let (mut tree, id) = setup();
        let scheme = Scheme::new("s").with_base_border(SchemeBorder {
            name: "BaseBorder".into(),
            inset: Inset::new(1, 2, 3, 4),
            background: BackgroundType::Textured,
        });
        let kv = KeyValues::object("Panel").with("border", "Missing");
        let res = LayoutResolver::new(scheme)
            .apply_settings(&mut tree, id, &kv)
            .unwrap();
        let control = tree.control(id);
        assert_eq!(control.border(), Some("BaseBorder"));
        assert_eq!(control.inset(), Inset::new(1, 2, 3, 4));
        assert_eq!(control.background(), BackgroundType::Textured);
        assert!(res.warnings.is_empty());
        assert_eq!(tree.client_bounds(id).position, Position::new(1, 2));
    }

    #[test]
    fn keyboard_input_propagates_to_descendants() {
        let (mut tree, root) = setup();
        let child = tree.create_control(Control::new("Child", ControlKind::Panel));
        tree.set_parent(child, root).unwrap();
        let kv = KeyValues::object("Panel").with("keyboardinputenabled", "0");
        let _ = resolver().apply_settings(&mut tree, root, &kv).unwrap();
        assert!(!tree.control(child).keyboard_input_enabled());
    }
}
