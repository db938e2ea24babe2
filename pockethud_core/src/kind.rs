// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget kinds and their kind-specific settings.

use crate::error::LayoutError;
use crate::geometry::{Position, saturate};
use crate::paint::{DrawItem, Painter};
use crate::property::PropertyObject;

/// Where text sits inside a label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Top-left.
    NorthWest,
    /// Top-center.
    North,
    /// Top-right.
    NorthEast,
    /// Middle-left.
    #[default]
    West,
    /// Middle.
    Center,
    /// Middle-right.
    East,
    /// Bottom-left.
    SouthWest,
    /// Bottom-center.
    South,
    /// Bottom-right.
    SouthEast,
}

impl TextAlignment {
    /// Parses a resource-file alignment name such as `north-west`.
    ///
    /// Matching is case-insensitive; `left` and `right` are accepted as
    /// aliases of `west` and `east`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Some(match name.as_str() {
            "north-west" => Self::NorthWest,
            "north" => Self::North,
            "north-east" => Self::NorthEast,
            "west" | "left" => Self::West,
            "center" => Self::Center,
            "east" | "right" => Self::East,
            "south-west" => Self::SouthWest,
            "south" => Self::South,
            "south-east" => Self::SouthEast,
            _ => return None,
        })
    }
}

/// Settings read by [`ControlKind::Label`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSettings {
    /// Text to display. `#`-prefixed localization tokens are kept verbatim.
    pub text: String,
    /// Placement of the text inside the client area.
    pub alignment: TextAlignment,
    /// Scheme font name.
    pub font: Option<String>,
    /// Extra offset of the text from its aligned position.
    pub text_inset: Position,
    /// Draw with the dimmed text color.
    pub dull_text: bool,
    /// Draw with the highlighted text color.
    pub bright_text: bool,
}

impl LabelSettings {
    fn apply(&mut self, object: &dyn PropertyObject) {
        if let Some(text) = object.get_string("labelText") {
            self.text = text.to_owned();
        }
        if let Some(raw) = object.get_string("textAlignment") {
            match TextAlignment::parse(raw) {
                Some(alignment) => self.alignment = alignment,
                None => tracing::warn!(
                    control = object.name(),
                    value = raw,
                    "unknown textAlignment, keeping previous"
                ),
            }
        }
        if let Some(font) = object.get_string("font") {
            self.font = Some(font.to_owned());
        }
        self.text_inset = Position::new(
            saturate(object.get_int_or("textinsetx", self.text_inset.x.into())),
            saturate(object.get_int_or("textinsety", self.text_inset.y.into())),
        );
        self.dull_text = object.get_bool_or("dulltext", self.dull_text);
        self.bright_text = object.get_bool_or("brighttext", self.bright_text);
    }
}

/// Settings read by [`ControlKind::ImagePanel`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSettings {
    /// Image resource name, relative to the materials root.
    pub image: Option<String>,
    /// Stretch the image over the client area.
    pub scale_image: bool,
    /// Repeat the image over the client area.
    pub tile_image: bool,
}

impl ImageSettings {
    fn apply(&mut self, object: &dyn PropertyObject) {
        if let Some(image) = object.get_string("image") {
            self.image = (!image.is_empty()).then(|| image.to_owned());
        }
        self.scale_image = object.get_bool_or("scaleImage", self.scale_image);
        self.tile_image = object.get_bool_or("tileImage", self.tile_image);
    }
}

/// What a control is and how it draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// A plain rectangle with optional background and border.
    Panel,
    /// A panel that hosts child controls loaded from a resource file.
    EditablePanel,
    /// A panel drawing a line of text.
    Label(LabelSettings),
    /// A panel drawing an image.
    ImagePanel(ImageSettings),
    /// A recognised class with no implementation.
    Unsupported {
        /// The declared class name.
        class: String,
    },
}

impl ControlKind {
    /// A label with default settings.
    #[must_use]
    pub fn label() -> Self {
        Self::Label(LabelSettings::default())
    }

    /// An image panel with default settings.
    #[must_use]
    pub fn image_panel() -> Self {
        Self::ImagePanel(ImageSettings::default())
    }

    /// Short name used in diagnostics.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            Self::Panel => "Panel",
            Self::EditablePanel => "EditablePanel",
            Self::Label(_) => "Label",
            Self::ImagePanel(_) => "ImagePanel",
            Self::Unsupported { class } => class,
        }
    }

    /// Reads the settings specific to this kind from `object`.
    pub fn apply_settings(&mut self, object: &dyn PropertyObject) {
        match self {
            Self::Label(label) => label.apply(object),
            Self::ImagePanel(image) => image.apply(object),
            Self::Panel | Self::EditablePanel | Self::Unsupported { .. } => {}
        }
    }

    /// Issues the draw calls for one control.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unsupported`] for [`ControlKind::Unsupported`].
    pub fn draw(&self, painter: &mut dyn Painter, item: &DrawItem<'_>) -> Result<(), LayoutError> {
        match self {
            Self::Panel | Self::EditablePanel => painter.panel(item),
            Self::Label(label) => {
                painter.panel(item);
                painter.label(item, label);
            }
            Self::ImagePanel(image) => {
                painter.panel(item);
                painter.image(item, image);
            }
            Self::Unsupported { class } => {
                return Err(LayoutError::Unsupported {
                    class: class.clone(),
                });
            }
        }
        Ok(())
    }
}
