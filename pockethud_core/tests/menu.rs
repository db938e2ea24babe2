// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end layout of a main-menu style resource file.

use pockethud_core::RegistryError;
use pockethud_core::config::ResolverConfig;
use pockethud_core::control::{ControlId, ControlTree};
use pockethud_core::flags::BuildMode;
use pockethud_core::geometry::{Bounds, Inset, Position, Size};
use pockethud_core::kind::{ImageSettings, LabelSettings};
use pockethud_core::paint::{DrawItem, Painter};
use pockethud_core::property::KeyValues;
use pockethud_core::registry::ControlRegistry;
use pockethud_core::resolve::LayoutResolver;
use pockethud_core::scheme::{BackgroundType, Color, Scheme, SchemeBorder};

#[derive(Default)]
struct Recorder {
    calls: Vec<(String, &'static str, u32)>,
}

impl Painter for Recorder {
    fn panel(&mut self, item: &DrawItem<'_>) {
        self.calls
            .push((item.control.name().to_owned(), "panel", item.depth));
    }

    fn label(&mut self, item: &DrawItem<'_>, _label: &LabelSettings) {
        self.calls
            .push((item.control.name().to_owned(), "label", item.depth));
    }

    fn image(&mut self, item: &DrawItem<'_>, _image: &ImageSettings) {
        self.calls
            .push((item.control.name().to_owned(), "image", item.depth));
    }
}

fn scheme() -> Scheme {
    Scheme::new("ClientScheme")
        .with_color("TanLight", Color::rgba(235, 226, 202, 255))
        .with_border(SchemeBorder {
            name: "MainMenuBGBorder".into(),
            inset: Inset::new(4, 4, 4, 4),
            background: BackgroundType::RoundedCorners,
        })
}

fn main_menu() -> KeyValues {
    KeyValues::object("Resource/UI/MainMenuOverride.res").with_object(
        KeyValues::object("MainMenuOverride")
            .with("ControlName", "EditablePanel")
            .with("wide", "f0")
            .with("tall", "f0")
            .with_object(
                KeyValues::object("Logo")
                    .with("ControlName", "ImagePanel")
                    .with("xpos", "c-150")
                    .with("ypos", "20")
                    .with("zpos", "3")
                    .with("wide", "300")
                    .with("tall", "60")
                    .with("image", "replay/thumbnails/logo"),
            )
            .with_object(
                KeyValues::object("Background")
                    .with("ControlName", "Panel")
                    .with("zpos", "1")
                    .with("wide", "f0")
                    .with("tall", "f0")
                    .with("border", "MainMenuBGBorder"),
            )
            .with_object(
                KeyValues::object("Version")
                    .with("ControlName", "Label")
                    .with("xpos", "r0")
                    .with("ypos", "rs1")
                    .with("zpos", "1")
                    .with("wide", "100")
                    .with("tall", "15")
                    .with("labelText", "#MMenu_Version")
                    .with("fgcolor", "TanLight"),
            )
            .with_object(
                KeyValues::object("Status")
                    .with("ControlName", "Label")
                    .with("xpos", "c0+10")
                    .with("ypos", "c0")
                    .with("zpos", "2")
                    .with("wide", "p0")
                    .with("tall", "10"),
            ),
    )
}

fn build(config: ResolverConfig) -> (ControlTree, ControlId) {
    let resolver = LayoutResolver::new(scheme()).with_config(config);
    let mut tree = ControlTree::default();
    let roots = ControlRegistry::with_defaults()
        .build_file(&mut tree, &resolver, &main_menu())
        .unwrap();
    assert_eq!(roots.len(), 1, "one top-level control");
    (tree, roots[0])
}

fn named(tree: &ControlTree, root: ControlId, name: &str) -> ControlId {
    tree.find_by_name(root, name)
        .unwrap_or_else(|| panic!("no control named {name}"))
}

#[test]
fn resolves_the_whole_menu() {
    let (mut tree, root) = build(ResolverConfig::strict());
    assert_eq!(
        tree.bounds(root),
        Bounds::new(Position::ZERO, Size::new(852, 480))
    );

    let logo = named(&tree, root, "Logo");
    assert_eq!(
        tree.bounds(logo),
        Bounds::new(Position::new(276, 20), Size::new(300, 60))
    );

    let version = named(&tree, root, "Version");
    // Flush against the right edge and one own height above the bottom.
    assert_eq!(
        tree.bounds(version),
        Bounds::new(Position::new(852, 465), Size::new(100, 15))
    );
    assert_eq!(
        tree.control(version).build_mode(),
        BuildMode::XPOS_RIGHT_ALIGNED
            | BuildMode::YPOS_BOTTOM_ALIGNED
            | BuildMode::YPOS_PROPORTIONAL_SELF
    );
    assert_eq!(
        tree.control(version).fg_color(),
        Some(Color::rgba(235, 226, 202, 255))
    );

    let status = named(&tree, root, "Status");
    assert_eq!(tree.bounds(status).position, Position::new(436, 240));

    let background = named(&tree, root, "Background");
    assert_eq!(
        tree.client_bounds(background),
        Bounds::new(Position::new(4, 4), Size::new(844, 472))
    );
    assert_eq!(
        tree.control(background).background(),
        BackgroundType::RoundedCorners
    );
}

#[test]
fn draws_in_z_order() {
    let (mut tree, root) = build(ResolverConfig::strict());
    let mut recorder = Recorder::default();
    tree.draw_children(root, &mut recorder).unwrap();

    let order: Vec<_> = recorder
        .calls
        .iter()
        .map(|(name, call, depth)| (name.as_str(), *call, *depth))
        .collect();
    assert_eq!(
        order,
        [
            ("Background", "panel", 1),
            ("Version", "panel", 1),
            ("Version", "label", 1),
            ("Status", "panel", 1),
            ("Status", "label", 1),
            ("Logo", "panel", 1),
            ("Logo", "image", 1),
        ]
    );
}

#[test]
fn bounds_are_cached_until_mutation() {
    let (mut tree, root) = build(ResolverConfig::strict());
    let logo = named(&tree, root, "Logo");

    let first = tree.bounds(logo);
    let count = tree.recompute_count();
    assert_eq!(tree.bounds(logo), first);
    assert_eq!(tree.recompute_count(), count, "second read is cached");

    tree.set_position(root, Position::new(0, 10));
    assert!(tree.is_dirty(logo), "ancestor move dirties descendants");
    assert_eq!(tree.bounds(logo).position, Position::new(276, 30));
    assert!(tree.recompute_count() > count);
}

#[test]
fn legacy_config_measures_children_against_the_surface() {
    let file = KeyValues::object("file").with_object(
        KeyValues::object("Small")
            .with("ControlName", "Panel")
            .with("wide", "100")
            .with("tall", "100")
            .with_object(
                KeyValues::object("Filled")
                    .with("ControlName", "Panel")
                    .with("wide", "f0")
                    .with("tall", "f0"),
            )
            .with_object(
                KeyValues::object("Scoped")
                    .with("ControlName", "Panel")
                    .with("proportionalToParent", "1")
                    .with("wide", "f0"),
            ),
    );

    let resolver = LayoutResolver::new(scheme()).with_config(ResolverConfig::legacy());
    let mut tree = ControlTree::default();
    let roots = ControlRegistry::with_defaults()
        .build_file(&mut tree, &resolver, &file)
        .unwrap();

    let filled = named(&tree, roots[0], "Filled");
    assert_eq!(tree.control(filled).size(), Size::new(852, 480));
    let scoped = named(&tree, roots[0], "Scoped");
    assert_eq!(tree.control(scoped).size().width, 100);
}

#[test]
fn rebuilding_with_an_unknown_class_reports_it() {
    let file = KeyValues::object("file")
        .with_object(KeyValues::object("Fancy").with("ControlName", "CTFFancyPanel"));
    let mut tree = ControlTree::default();
    let err = ControlRegistry::with_defaults()
        .build_file(&mut tree, &LayoutResolver::new(scheme()), &file)
        .unwrap_err();
    assert_eq!(err, RegistryError::UnknownControlName("CTFFancyPanel".into()));
    assert_eq!(tree.control_count(), 0);
}

#[test]
fn unsupported_classes_build_but_do_not_draw() {
    let file = KeyValues::object("file").with_object(
        KeyValues::object("Menu")
            .with("ControlName", "EditablePanel")
            .with_object(KeyValues::object("Quit").with("ControlName", "CExButton")),
    );
    let mut tree = ControlTree::default();
    let roots = ControlRegistry::with_defaults()
        .build_file(&mut tree, &LayoutResolver::new(scheme()), &file)
        .unwrap();
    let err = tree
        .draw_children(roots[0], &mut Recorder::default())
        .unwrap_err();
    assert!(err.to_string().contains("CExButton"), "got: {err}");
}
