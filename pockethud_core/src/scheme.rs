// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named style resources: colors, fonts and borders.
//!
//! Lookups are case-insensitive. A border lookup that misses falls back to
//! the scheme's base border, if one is set.

use std::collections::HashMap;

use crate::geometry::Inset;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// An opaque handle to a font face loaded outside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u32);

/// A named font entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemeFont {
    /// Scheme name of the font.
    pub name: String,
    /// Handle of the loaded face.
    pub handle: FontHandle,
}

/// How a control's background is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundType {
    /// Solid fill.
    #[default]
    Filled,
    /// Image fill.
    Textured,
    /// Solid fill with rounded corners.
    RoundedCorners,
}

/// A named border: an inset plus the background style it implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemeBorder {
    /// Scheme name of the border.
    pub name: String,
    /// Client-area inset applied to controls using this border.
    pub inset: Inset,
    /// Background style applied to controls using this border.
    pub background: BackgroundType,
}

/// A set of named style resources.
#[derive(Clone, Debug, Default)]
pub struct Scheme {
    name: String,
    colors: HashMap<String, Color>,
    fonts: HashMap<String, SchemeFont>,
    borders: HashMap<String, SchemeBorder>,
    base_border: Option<SchemeBorder>,
}

impl Scheme {
    /// Creates an empty scheme.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The scheme's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a named color.
    #[must_use]
    pub fn with_color(mut self, name: &str, color: Color) -> Self {
        self.colors.insert(name.to_ascii_lowercase(), color);
        self
    }

    /// Adds a font.
    #[must_use]
    pub fn with_font(mut self, font: SchemeFont) -> Self {
        self.fonts.insert(font.name.to_ascii_lowercase(), font);
        self
    }

    /// Adds a border.
    #[must_use]
    pub fn with_border(mut self, border: SchemeBorder) -> Self {
        self.borders.insert(border.name.to_ascii_lowercase(), border);
        self
    }

    /// Sets the border returned when a lookup misses.
    #[must_use]
    pub fn with_base_border(mut self, border: SchemeBorder) -> Self {
        self.base_border = Some(border);
        self
    }

    /// Looks up a color.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(&name.to_ascii_lowercase()).copied()
    }

    /// Looks up a font.
    #[must_use]
    pub fn font(&self, name: &str) -> Option<&SchemeFont> {
        self.fonts.get(&name.to_ascii_lowercase())
    }

    /// Looks up a border, falling back to the base border.
    #[must_use]
    pub fn border(&self, name: &str) -> Option<&SchemeBorder> {
        self.borders
            .get(&name.to_ascii_lowercase())
            .or(self.base_border.as_ref())
    }
}
