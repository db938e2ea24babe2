// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer layout geometry.
//!
//! Layout space has its origin at the top-left corner with y growing
//! downwards. All stored coordinates are `i16`; arithmetic happens in `i32`
//! and is saturated back with [`saturate`].

use core::fmt;

/// Height of the layout surface in layout units, independent of aspect ratio.
pub const SURFACE_HEIGHT: i16 = 480;

/// Clamps an `i32` into the `i16` range.
#[inline]
#[must_use]
pub fn saturate(value: i32) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}

/// One of the two layout axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (`xpos`, `wide`).
    Horizontal,
    /// The y axis (`ypos`, `tall`).
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Property key holding the position specifier for this axis.
    #[must_use]
    pub const fn position_key(self) -> &'static str {
        match self {
            Self::Horizontal => "xpos",
            Self::Vertical => "ypos",
        }
    }

    /// Property key holding the size specifier for this axis.
    #[must_use]
    pub const fn size_key(self) -> &'static str {
        match self {
            Self::Horizontal => "wide",
            Self::Vertical => "tall",
        }
    }
}

/// A point in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i16,
    /// Vertical coordinate.
    pub y: i16,
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a position.
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i16 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Width and height of a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent.
    pub width: i16,
    /// Vertical extent.
    pub height: i16,
}

impl Size {
    /// An empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a size.
    #[must_use]
    pub const fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    /// Returns the extent along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i16 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Edge distances shrinking a control's bounds into its client area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Inset {
    /// Distance from the left edge.
    pub left: i16,
    /// Distance from the top edge.
    pub top: i16,
    /// Distance from the right edge.
    pub right: i16,
    /// Distance from the bottom edge.
    pub bottom: i16,
}

impl Inset {
    /// No inset on any edge.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates an inset.
    #[must_use]
    pub const fn new(left: i16, top: i16, right: i16, bottom: i16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// An axis-aligned rectangle in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Top-left corner.
    pub position: Position,
    /// Extent from the corner.
    pub size: Size,
}

impl Bounds {
    /// Creates bounds from a corner and a size.
    #[must_use]
    pub const fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> i16 {
        saturate(i32::from(self.position.x) + i32::from(self.size.width))
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> i16 {
        saturate(i32::from(self.position.y) + i32::from(self.size.height))
    }

    /// Shrinks the bounds by `inset`. The resulting size never goes negative.
    #[must_use]
    pub fn inset_by(&self, inset: Inset) -> Self {
        let width = i32::from(self.size.width) - i32::from(inset.left) - i32::from(inset.right);
        let height = i32::from(self.size.height) - i32::from(inset.top) - i32::from(inset.bottom);
        Self::new(
            Position::new(
                saturate(i32::from(self.position.x) + i32::from(inset.left)),
                saturate(i32::from(self.position.y) + i32::from(inset.top)),
            ),
            Size::new(saturate(width.max(0)), saturate(height.max(0))),
        )
    }

    /// Converts to a [`kurbo::Rect`] in the same top-left-origin space.
    #[must_use]
    pub fn to_rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.position.x),
            f64::from(self.position.y),
            f64::from(self.right()),
            f64::from(self.bottom()),
        )
    }
}

/// Supported surface aspect ratios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    /// 16:9, 852 units wide.
    #[default]
    Wide16x9,
    /// 4:3, 640 units wide.
    Standard4x3,
    /// 5:4, 600 units wide.
    Square5x4,
}

impl AspectRatio {
    /// Surface width for this aspect ratio at [`SURFACE_HEIGHT`].
    #[must_use]
    pub const fn width(self) -> i16 {
        match self {
            Self::Wide16x9 => 852,
            Self::Standard4x3 => 640,
            Self::Square5x4 => 600,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wide16x9 => "16:9",
            Self::Standard4x3 => "4:3",
            Self::Square5x4 => "5:4",
        })
    }
}

/// The virtual drawing surface the root controls lay out against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Surface {
    /// Aspect ratio selecting the surface width.
    pub aspect_ratio: AspectRatio,
}

impl Surface {
    /// Creates a surface with the given aspect ratio.
    #[must_use]
    pub const fn new(aspect_ratio: AspectRatio) -> Self {
        Self { aspect_ratio }
    }

    /// Surface size in layout units.
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.aspect_ratio.width(), SURFACE_HEIGHT)
    }

    /// The full surface rectangle at the origin.
    #[must_use]
    pub const fn viewport(self) -> Bounds {
        Bounds::new(Position::ZERO, self.size())
    }
}

/// Which edge of the viewport an anchored coordinate is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Left or top edge.
    #[default]
    Near,
    /// Horizontal or vertical center.
    Center,
    /// Right or bottom edge.
    Far,
}

/// One axis of a stored control position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnchoredCoord {
    /// Reference point inside the viewport.
    pub anchor: Anchor,
    /// Signed offset from the reference point.
    pub offset: i16,
}

impl AnchoredCoord {
    /// A coordinate measured from the near edge.
    #[must_use]
    pub const fn near(offset: i16) -> Self {
        Self {
            anchor: Anchor::Near,
            offset,
        }
    }

    /// Resolves against a viewport span starting at `start` with length `len`.
    #[must_use]
    pub fn resolve(self, start: i16, len: i16) -> i16 {
        let start = i32::from(start);
        let len = i32::from(len);
        let reference = match self.anchor {
            Anchor::Near => start,
            Anchor::Center => start + len / 2,
            Anchor::Far => start + len,
        };
        saturate(reference + i32::from(self.offset))
    }
}

/// A control's stored position: one anchored coordinate per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnchoredPosition {
    /// Horizontal coordinate.
    pub x: AnchoredCoord,
    /// Vertical coordinate.
    pub y: AnchoredCoord,
}

impl AnchoredPosition {
    /// Both axes measured from the near edges.
    #[must_use]
    pub const fn near(position: Position) -> Self {
        Self {
            x: AnchoredCoord::near(position.x),
            y: AnchoredCoord::near(position.y),
        }
    }

    /// Returns the coordinate along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> AnchoredCoord {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Absolute corner inside `viewport`.
    #[must_use]
    pub fn resolve(self, viewport: Bounds) -> Position {
        Position::new(
            self.x.resolve(viewport.position.x, viewport.size.width),
            self.y.resolve(viewport.position.y, viewport.size.height),
        )
    }
}
