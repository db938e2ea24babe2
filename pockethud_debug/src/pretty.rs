// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable tree output.
//!
//! [`TreePrinter`] writes one line per control to a
//! [`Write`](std::io::Write) destination (default: stderr), indented by
//! depth, in paint order.

use std::io::{self, Write};

use pockethud_core::control::{ControlId, ControlTree};
use pockethud_core::flags::BuildMode;

/// Writes an indented control listing to a [`Write`](std::io::Write)
/// destination.
pub struct TreePrinter<W: Write = Box<dyn Write>> {
    writer: W,
    indent: usize,
}

impl<W: Write> std::fmt::Debug for TreePrinter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreePrinter")
            .field("indent", &self.indent)
            .finish_non_exhaustive()
    }
}

impl TreePrinter {
    /// Creates a printer that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// Creates a printer that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, indent: 2 }
    }
}

impl<W: Write> TreePrinter<W> {
    /// Creates a printer that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, indent: 2 }
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Prints every root and its subtree. Roots come in slot order.
    ///
    /// # Errors
    ///
    /// Returns the first write error.
    pub fn print_tree(&mut self, tree: &mut ControlTree) -> io::Result<()> {
        for root in tree.roots() {
            self.print(tree, root)?;
        }
        Ok(())
    }

    /// Prints `id` and its subtree.
    ///
    /// # Errors
    ///
    /// Returns the first write error.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn print(&mut self, tree: &mut ControlTree, id: ControlId) -> io::Result<()> {
        self.print_at(tree, id, 0)
    }

    fn print_at(&mut self, tree: &mut ControlTree, id: ControlId, depth: usize) -> io::Result<()> {
        let bounds = tree.bounds(id);
        let control = tree.control(id);
        let pad = depth * self.indent;
        write!(
            self.writer,
            "{:pad$}{} [{}] at ({}, {}) size {}x{} z={}",
            "",
            control.name(),
            control.kind().class_name(),
            bounds.position.x,
            bounds.position.y,
            bounds.size.width,
            bounds.size.height,
            control.z_order(),
        )?;
        if !control.is_visible() {
            write!(self.writer, " hidden")?;
        }
        if !control.is_enabled() {
            write!(self.writer, " disabled")?;
        }
        let mode = control.build_mode();
        if !mode.is_empty() {
            write!(self.writer, " mode={}", mode_names(mode))?;
        }
        writeln!(self.writer)?;

        for child in tree.paint_order(id) {
            self.print_at(tree, child, depth + 1)?;
        }
        Ok(())
    }
}

/// `BuildMode` bit names joined with `|`.
pub(crate) fn mode_names(mode: BuildMode) -> String {
    mode.iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pockethud_core::control::Control;
    use pockethud_core::geometry::Size;
    use pockethud_core::kind::ControlKind;
    use pockethud_core::property::KeyValues;
    use pockethud_core::resolve::LayoutResolver;
    use pockethud_core::scheme::Scheme;

    #[test]
    fn prints_indented_paint_order() {
        let mut tree = ControlTree::default();
        let root = tree.create_control(
            Control::new("Root", ControlKind::EditablePanel).with_size(Size::new(100, 50)),
        );
        let back = tree.create_control(Control::new("Back", ControlKind::Panel).with_z_order(5));
        let front = tree.create_control(Control::new("Front", ControlKind::label()));
        tree.set_parent(back, root).unwrap();
        tree.set_parent(front, root).unwrap();

        let mut printer = TreePrinter::with_writer(Vec::<u8>::new());
        printer.print_tree(&mut tree).unwrap();
        let output = String::from_utf8(printer.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "Root [EditablePanel] at (0, 0) size 100x50 z=0",
                "  Front [Label] at (0, 0) size 0x0 z=0",
                "  Back [Panel] at (0, 0) size 0x0 z=5",
            ],
            "got: {output}"
        );
    }

    #[test]
    fn prints_flags_and_build_mode() {
        let mut tree = ControlTree::default();
        let id = tree.create_control(Control::new("Panel", ControlKind::Panel));
        let _ = LayoutResolver::new(Scheme::new("test"))
            .apply_settings(
                &mut tree,
                id,
                &KeyValues::object("Panel")
                    .with("xpos", "r10")
                    .with("visible", "0"),
            )
            .unwrap();

        let mut printer = TreePrinter::with_writer(Vec::<u8>::new()).indent(4);
        printer.print(&mut tree, id).unwrap();
        let output = String::from_utf8(printer.into_inner()).unwrap();
        assert!(output.contains(" hidden"), "got: {output}");
        assert!(output.contains("mode=XPOS_RIGHT_ALIGNED"), "got: {output}");
    }
}
