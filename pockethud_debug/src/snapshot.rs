// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshots of a control tree.
//!
//! [`tree`] captures the surface and every root with its subtree, children
//! in paint order. [`export`] writes the same value as pretty-printed JSON.

use std::io::{self, Write};

use pockethud_core::control::{ControlId, ControlTree};
use pockethud_core::scheme::Color;
use serde_json::{Value, json};

use crate::pretty::mode_names;

/// Snapshot of the whole tree.
#[must_use]
pub fn tree(tree: &mut ControlTree) -> Value {
    let surface = tree.surface().size();
    let roots: Vec<Value> = tree
        .roots()
        .into_iter()
        .map(|root| control(tree, root))
        .collect();
    json!({
        "surface": {
            "aspect_ratio": tree.surface().aspect_ratio.to_string(),
            "width": surface.width,
            "height": surface.height,
        },
        "roots": roots,
    })
}

/// Snapshot of `id` and its subtree.
///
/// # Panics
///
/// Panics if the handle is stale.
#[must_use]
pub fn control(tree: &mut ControlTree, id: ControlId) -> Value {
    let bounds = tree.bounds(id);
    let client = tree.client_bounds(id);
    let children: Vec<Value> = tree
        .paint_order(id)
        .into_iter()
        .map(|child| control(tree, child))
        .collect();
    let c = tree.control(id);
    json!({
        "name": c.name(),
        "class": c.kind().class_name(),
        "bounds": [bounds.position.x, bounds.position.y, bounds.size.width, bounds.size.height],
        "client": [client.position.x, client.position.y, client.size.width, client.size.height],
        "z": c.z_order(),
        "visible": c.is_visible(),
        "enabled": c.is_enabled(),
        "build_mode": mode_names(c.build_mode()),
        "border": c.border(),
        "fg_color": c.fg_color().map(color),
        "bg_color": c.bg_color().map(color),
        "children": children,
    })
}

/// Writes a pretty-printed snapshot of the whole tree.
///
/// # Errors
///
/// Returns the first write error.
pub fn export(source: &mut ControlTree, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &tree(source))?;
    Ok(())
}

fn color(c: Color) -> Value {
    json!([c.r, c.g, c.b, c.a])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pockethud_core::property::KeyValues;
    use pockethud_core::registry::ControlRegistry;
    use pockethud_core::resolve::LayoutResolver;
    use pockethud_core::scheme::Scheme;

    fn menu() -> ControlTree {
        let file = KeyValues::object("Resource/UI/Menu.res").with_object(
            KeyValues::object("Menu")
                .with("ControlName", "EditablePanel")
                .with("wide", "f0")
                .with("tall", "f0")
                .with("fgcolor", "Text")
                .with_object(
                    KeyValues::object("Title")
                        .with("ControlName", "Label")
                        .with("xpos", "c-50")
                        .with("wide", "100")
                        .with("tall", "20"),
                ),
        );
        let resolver =
            LayoutResolver::new(Scheme::new("test").with_color("Text", Color::rgba(9, 8, 7, 255)));
        let mut tree = ControlTree::default();
        let _ = ControlRegistry::with_defaults()
            .build_file(&mut tree, &resolver, &file)
            .unwrap();
        tree
    }

    #[test]
    fn snapshot_captures_geometry_and_hierarchy() {
        let mut tree = menu();
        let value = super::tree(&mut tree);
        assert_eq!(value["surface"]["width"], 852);
        assert_eq!(value["surface"]["aspect_ratio"], "16:9");

        let menu = &value["roots"][0];
        assert_eq!(menu["name"], "Menu");
        assert_eq!(menu["class"], "EditablePanel");
        assert_eq!(menu["bounds"], json!([0, 0, 852, 480]));
        assert_eq!(menu["build_mode"], "WIDE_FULL|TALL_FULL");
        assert_eq!(menu["fg_color"], json!([9, 8, 7, 255]));
        assert_eq!(menu["bg_color"], Value::Null);

        let title = &menu["children"][0];
        assert_eq!(title["name"], "Title");
        assert_eq!(title["bounds"], json!([376, 0, 100, 20]));
        assert_eq!(title["build_mode"], "XPOS_CENTER_ALIGNED");
    }

    #[test]
    fn export_produces_valid_json() {
        let mut tree = menu();
        let mut out = Vec::new();
        export(&mut tree, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Value = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed["roots"].as_array().map(Vec::len), Some(1));
    }
}
