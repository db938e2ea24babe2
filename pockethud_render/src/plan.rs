// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plan: an ordered sequence of draw items for one frame.

use kurbo::Rect;
use pockethud_core::LayoutError;
use pockethud_core::control::{ControlId, ControlTree};
use pockethud_core::flags::RoundCorners;
use pockethud_core::geometry::{Bounds, SURFACE_HEIGHT, Surface};
use pockethud_core::kind::{ImageSettings, LabelSettings, TextAlignment};
use pockethud_core::paint::{DrawItem, Painter};
use pockethud_core::scheme::{BackgroundType, Color};

/// Converts layout-space bounds (top-left origin) into a surface-space
/// rectangle (bottom-left origin).
#[must_use]
pub fn to_surface_rect(bounds: Bounds) -> Rect {
    let height = f64::from(SURFACE_HEIGHT);
    let rect = bounds.to_rect();
    Rect::new(rect.x0, height - rect.y1, rect.x1, height - rect.y0)
}

/// What to draw for one item.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Background and border of a control.
    Panel {
        /// Fill color, if the background is painted.
        background: Option<Color>,
        /// How the background is filled.
        background_type: BackgroundType,
        /// Border name, if the border is painted.
        border: Option<String>,
        /// Corners rounded when `background_type` is
        /// [`BackgroundType::RoundedCorners`].
        rounded_corners: RoundCorners,
    },
    /// Text of a label, placed inside the client rectangle.
    Text {
        /// The text.
        text: String,
        /// Placement inside the client rectangle.
        alignment: TextAlignment,
        /// Scheme font name.
        font: Option<String>,
        /// Text color.
        color: Option<Color>,
    },
    /// An image stretched, tiled, or placed inside the client rectangle.
    Image {
        /// Image resource name.
        image: String,
        /// Stretch to the client rectangle.
        scale: bool,
        /// Repeat over the client rectangle.
        tile: bool,
    },
}

/// A single draw command in the render plan.
///
/// Items are produced in back-to-front order, matching the control tree's
/// paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    /// The control this item originates from.
    pub id: ControlId,
    /// Nesting depth as reported by the tree traversal.
    pub depth: u32,
    /// Control bounds in surface space.
    pub rect: Rect,
    /// Client bounds in surface space.
    pub client_rect: Rect,
    /// What to draw.
    pub command: DrawCommand,
}

/// An ordered list of draw commands for a single frame.
#[derive(Clone, Debug, Default)]
pub struct RenderPlan {
    /// Surface the plan targets.
    pub surface: Surface,
    /// Draw items in back-to-front order.
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    /// Creates an empty render plan for the given surface.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            items: Vec::new(),
        }
    }

    /// Records every visible root and its subtree.
    ///
    /// Roots are drawn in ascending z-order, ties in slot order.
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutError::Unsupported`] met during traversal.
    /// Items recorded before it are discarded.
    pub fn record(tree: &mut ControlTree) -> Result<Self, LayoutError> {
        let mut plan = Self::new(tree.surface());
        let mut roots = tree.roots();
        roots.sort_by_key(|&root| tree.control(root).z_order());
        for root in roots {
            if !tree.control(root).is_visible() {
                continue;
            }
            tree.draw(root, &mut plan)?;
            tree.draw_children(root, &mut plan)?;
        }
        tracing::debug!(items = plan.items.len(), "recorded render plan");
        Ok(plan)
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn push(&mut self, item: &DrawItem<'_>, command: DrawCommand) {
        self.items.push(RenderItem {
            id: item.id,
            depth: item.depth,
            rect: to_surface_rect(item.bounds),
            client_rect: to_surface_rect(item.client_bounds),
            command,
        });
    }
}

impl Painter for RenderPlan {
    fn panel(&mut self, item: &DrawItem<'_>) {
        let control = item.control;
        let background = control.paints_background().then(|| control.bg_color()).flatten();
        let border = control
            .paints_border()
            .then(|| control.border().map(str::to_owned))
            .flatten();
        if background.is_none() && border.is_none() {
            return;
        }
        self.push(
            item,
            DrawCommand::Panel {
                background,
                background_type: control.background(),
                border,
                rounded_corners: control.rounded_corners(),
            },
        );
    }

    fn label(&mut self, item: &DrawItem<'_>, label: &LabelSettings) {
        if label.text.is_empty() {
            return;
        }
        self.push(
            item,
            DrawCommand::Text {
                text: label.text.clone(),
                alignment: label.alignment,
                font: label.font.clone(),
                color: item.control.fg_color(),
            },
        );
    }

    fn image(&mut self, item: &DrawItem<'_>, image: &ImageSettings) {
        let Some(name) = &image.image else {
            tracing::trace!(control = item.control.name(), "image panel without image");
            return;
        };
        self.push(
            item,
            DrawCommand::Image {
                image: name.clone(),
                scale: image.scale_image,
                tile: image.tile_image,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pockethud_core::control::Control;
    use pockethud_core::geometry::{AnchoredPosition, Position, Size};
    use pockethud_core::kind::ControlKind;
    use pockethud_core::property::KeyValues;
    use pockethud_core::resolve::LayoutResolver;
    use pockethud_core::scheme::Scheme;

    fn placed(name: &str, kind: ControlKind, x: i16, y: i16, w: i16, h: i16) -> Control {
        Control::new(name, kind)
            .with_position(AnchoredPosition::near(Position::new(x, y)))
            .with_size(Size::new(w, h))
    }

    #[test]
    fn surface_rect_flips_y() {
        let bounds = Bounds::new(Position::new(10, 20), Size::new(100, 50));
        assert_eq!(to_surface_rect(bounds), Rect::new(10.0, 410.0, 110.0, 460.0));
    }

    #[test]
    fn surface_rect_keeps_extent_and_mirrors_layout_rect() {
        let bounds = Bounds::new(Position::new(-5, 400), Size::new(30, 100));
        let layout = bounds.to_rect();
        let surface = to_surface_rect(bounds);
        assert_eq!(surface.size(), layout.size());
        assert_eq!((surface.x0, surface.x1), (layout.x0, layout.x1));
        assert_eq!(surface.y0, f64::from(SURFACE_HEIGHT) - layout.y1);
        assert_eq!(surface, Rect::new(-5.0, -20.0, 25.0, 80.0));
    }

    #[test]
    fn full_surface_maps_onto_itself() {
        let surface = Surface::default();
        let rect = to_surface_rect(surface.viewport());
        assert_eq!(rect, Rect::new(0.0, 0.0, 852.0, 480.0));
    }

    #[test]
    fn panel_without_colors_or_border_records_nothing() {
        let mut tree = ControlTree::default();
        let _ = tree.create_control(placed("a", ControlKind::Panel, 0, 0, 10, 10));
        let plan = RenderPlan::record(&mut tree).unwrap();
        assert!(plan.items.is_empty());
    }

    #[test]
    fn records_labels_and_images_in_paint_order() {
        let scheme = Scheme::new("test").with_color("Bg", Color::rgba(1, 2, 3, 255));
        let resolver = LayoutResolver::new(scheme);
        let mut tree = ControlTree::default();
        let root = tree.create_control(placed("root", ControlKind::Panel, 0, 0, 200, 100));
        let label = tree.create_control(Control::new("label", ControlKind::label()));
        let image = tree.create_control(Control::new("image", ControlKind::image_panel()));
        tree.set_parent(label, root).unwrap();
        tree.set_parent(image, root).unwrap();
        let _ = resolver
            .apply_settings(
                &mut tree,
                root,
                &KeyValues::object("root")
                    .with("wide", "200")
                    .with("tall", "100")
                    .with("bgcolor", "Bg"),
            )
            .unwrap();
        let _ = resolver
            .apply_settings(
                &mut tree,
                label,
                &KeyValues::object("label")
                    .with("zpos", "2")
                    .with("wide", "50")
                    .with("tall", "20")
                    .with("labelText", "Hello"),
            )
            .unwrap();
        let _ = resolver
            .apply_settings(
                &mut tree,
                image,
                &KeyValues::object("image")
                    .with("zpos", "1")
                    .with("xpos", "10")
                    .with("ypos", "10")
                    .with("wide", "20")
                    .with("tall", "20")
                    .with("image", "logo"),
            )
            .unwrap();

        let plan = RenderPlan::record(&mut tree).unwrap();
        let ids: Vec<_> = plan.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, [root, image, label]);
        assert_eq!(plan.items[0].depth, 0);
        assert_eq!(plan.items[1].depth, 1);
        assert_eq!(
            plan.items[1].command,
            DrawCommand::Image {
                image: "logo".into(),
                scale: false,
                tile: false,
            }
        );
        assert_eq!(plan.items[1].rect, Rect::new(10.0, 450.0, 30.0, 470.0));
        assert!(matches!(
            &plan.items[2].command,
            DrawCommand::Text { text, .. } if text == "Hello"
        ));
    }

    #[test]
    fn invisible_roots_are_skipped_with_their_subtrees() {
        let mut tree = ControlTree::default();
        let root = tree.create_control(placed("root", ControlKind::Panel, 0, 0, 10, 10));
        let child = tree.create_control(placed("child", ControlKind::label(), 0, 0, 5, 5));
        tree.set_parent(child, root).unwrap();
        let resolver = LayoutResolver::new(Scheme::new("test"));
        let _ = resolver
            .apply_settings(&mut tree, root, &KeyValues::object("root").with("visible", "0"))
            .unwrap();
        let _ = resolver
            .apply_settings(&mut tree, child, &KeyValues::object("child").with("labelText", "x"))
            .unwrap();
        let plan = RenderPlan::record(&mut tree).unwrap();
        assert!(plan.items.is_empty());
    }

    #[test]
    fn unsupported_kind_fails_the_plan() {
        let mut tree = ControlTree::default();
        let _ = tree.create_control(Control::new(
            "button",
            ControlKind::Unsupported {
                class: "CExButton".into(),
            },
        ));
        let err = RenderPlan::record(&mut tree).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Unsupported {
                class: "CExButton".into()
            }
        );
    }
}
