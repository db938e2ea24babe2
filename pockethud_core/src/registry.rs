// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building control trees from resource trees.
//!
//! Every nested object of a resource file declares its class through a
//! `ControlName` property. The [`ControlRegistry`] maps class names to
//! constructors and builds a [`ControlTree`] shaped like the resource tree.

use core::fmt;
use std::collections::HashMap;

use crate::control::{Control, ControlId, ControlTree};
use crate::error::RegistryError;
use crate::kind::ControlKind;
use crate::property::PropertyObject;
use crate::resolve::LayoutResolver;

/// Constructs a control from its resource entry.
pub type ControlBuilder = Box<dyn Fn(&dyn PropertyObject) -> Control>;

/// Classes that appear in stock resource files but have no implementation.
pub const UNSUPPORTED_CLASSES: &[&str] = &[
    "CExImageButton",
    "CExButton",
    "CExLabel",
    "CPvPRankPanel",
    "CSteamFriendsListPanel",
    "ScrollBar",
    "ScrollableEditablePanel",
    "CMainMenuNotificationsControl",
    "CTFStreamListPanel",
    "CItemModelPanel",
    "MainMenuOverride",
    "SaxxySettings",
    "KvButton",
    "CameraFlashSettings",
];

/// Maps `ControlName` values to constructors.
#[derive(Default)]
pub struct ControlRegistry {
    builders: HashMap<String, ControlBuilder>,
}

impl fmt::Debug for ControlRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.builders.keys().collect();
        names.sort();
        f.debug_struct("ControlRegistry")
            .field("builders", &names)
            .finish()
    }
}

impl ControlRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in kinds.
    ///
    /// `Panel`, `EditablePanel`, `Label` and `ImagePanel` build their
    /// matching [`ControlKind`]; every class in [`UNSUPPORTED_CLASSES`]
    /// builds [`ControlKind::Unsupported`].
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("Panel", |o| Control::new(o.name(), ControlKind::Panel));
        registry.register("EditablePanel", |o| {
            Control::new(o.name(), ControlKind::EditablePanel)
        });
        registry.register("Label", |o| Control::new(o.name(), ControlKind::label()));
        registry.register("ImagePanel", |o| {
            Control::new(o.name(), ControlKind::image_panel())
        });
        for &class in UNSUPPORTED_CLASSES {
            registry.register(class, move |o| {
                Control::new(
                    o.name(),
                    ControlKind::Unsupported {
                        class: class.to_owned(),
                    },
                )
            });
        }
        registry
    }

    /// Registers or replaces the constructor for `name`.
    ///
    /// Class names are matched exactly.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        builder: impl Fn(&dyn PropertyObject) -> Control + 'static,
    ) {
        self.builders.insert(name.into(), Box::new(builder));
    }

    /// Whether a constructor is registered for `name`.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Constructs the control declared by `object`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::MissingControlName`] if `object` has no
    ///   `ControlName`.
    /// - [`RegistryError::ControlNameNotScalar`] if it is a nested object.
    /// - [`RegistryError::UnknownControlName`] if nothing is registered
    ///   for it.
    pub fn resolve(&self, object: &dyn PropertyObject) -> Result<Control, RegistryError> {
        let declared = object
            .property("ControlName")
            .ok_or_else(|| RegistryError::MissingControlName {
                entry: object.name().to_owned(),
            })?;
        let class = declared
            .scalar()
            .ok_or_else(|| RegistryError::ControlNameNotScalar {
                entry: object.name().to_owned(),
            })?;
        let builder = self
            .builders
            .get(class)
            .ok_or_else(|| RegistryError::UnknownControlName(class.to_owned()))?;
        Ok(builder(object))
    }

    /// Builds a control for every nested object of `object`, attaches it to
    /// `parent` (or leaves it a root), applies its settings, and recurses
    /// into its own nested objects.
    ///
    /// Returns the handles of the controls built directly from `object`.
    ///
    /// # Errors
    ///
    /// Stops at the first failing entry. The control built for that entry
    /// and everything below it is destroyed; siblings built before it are
    /// kept.
    pub fn build(
        &self,
        tree: &mut ControlTree,
        resolver: &LayoutResolver,
        object: &dyn PropertyObject,
        parent: Option<ControlId>,
    ) -> Result<Vec<ControlId>, RegistryError> {
        let mut built = Vec::new();
        for entry in object.nested_objects() {
            let control = self.resolve(entry)?;
            let id = tree.create_control(control);
            if let Err(err) = self.populate(tree, resolver, entry, id, parent) {
                tracing::warn!(entry = entry.name(), error = %err, "failed to build control");
                tree.destroy_subtree(id);
                return Err(err);
            }
            built.push(id);
        }
        Ok(built)
    }

    /// Builds a resource file whose top-level object holds the controls.
    ///
    /// The file object itself does not become a control; its entries are
    /// built as roots.
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn build_file(
        &self,
        tree: &mut ControlTree,
        resolver: &LayoutResolver,
        file: &dyn PropertyObject,
    ) -> Result<Vec<ControlId>, RegistryError> {
        let roots = self.build(tree, resolver, file, None)?;
        tracing::debug!(file = file.name(), roots = roots.len(), "built resource file");
        Ok(roots)
    }

    fn populate(
        &self,
        tree: &mut ControlTree,
        resolver: &LayoutResolver,
        entry: &dyn PropertyObject,
        id: ControlId,
        parent: Option<ControlId>,
    ) -> Result<(), RegistryError> {
        if let Some(parent) = parent {
            tree.set_parent(id, parent)?;
        }
        let _ = resolver.apply_settings(tree, id, entry)?;
        let _ = self.build(tree, resolver, entry, Some(id))?;
        Ok(())
    }
}
