// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinate specifier mini-language.
//!
//! Positions (`xpos`, `ypos`) are written as an optional alignment prefix
//! (`r` far edge, `c` center), an optional proportionality marker (`s` own
//! size, `p` parent size) and an integer literal. Terms may be chained with
//! `+` and `-`:
//!
//! ```text
//! "r10"       10 units in from the far edge
//! "c-50"      50 units before the center
//! "s1"        one own-width from the near edge
//! "c0+10"     10 units past the center
//! ```
//!
//! Sizes (`wide`, `tall`) take one leading mode character, case-insensitive:
//! `f` fill the parent minus the literal, `o` a multiple of the other axis,
//! `p` scaled proportionally, `s` a multiple of the current size. Anything
//! else is a plain literal.
//!
//! Numeric literals are read leniently: an optional sign and the leading
//! digits. Missing digits or a value outside the `i16` range read as `0`.

use crate::error::SpecifierError;
use crate::flags::BuildMode;
use crate::geometry::{Anchor, Axis, saturate};

/// Default maximum number of chained `+`/`-` terms in a position specifier.
pub const DEFAULT_CHAIN_LIMIT: u8 = 16;

/// Reads an optional sign and leading ASCII digits.
///
/// Returns the value (saturated to `i32`, `None` when there are no digits)
/// and the unconsumed remainder. Without digits nothing is consumed.
pub(crate) fn split_leading_int(input: &str) -> (Option<i32>, &str) {
    let bytes = input.as_bytes();
    let (negative, sign_len) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return (None, input);
    }
    let magnitude = bytes[sign_len..sign_len + digits]
        .iter()
        .fold(0_i32, |acc, b| {
            acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
        });
    let value = if negative { -magnitude } else { magnitude };
    (Some(value), &input[sign_len + digits..])
}

/// Narrows a literal to `i16`; out-of-range values read as `0`.
fn literal_i16(value: Option<i32>) -> Option<i16> {
    value.map(|v| i16::try_from(v).unwrap_or(0))
}

/// How the character after a position's alignment prefix is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerMode {
    /// Only `s` and `p` are markers; any other character starts the literal
    /// and the term is measured in plain units.
    #[default]
    Strict,
    /// The character is always consumed: `s` selects the control's own
    /// size, anything else the parent's. Matches historical resource files
    /// that rely on this quirk.
    Legacy,
}

/// What a position term's literal is multiplied by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Proportion {
    /// Plain layout units.
    Pixels,
    /// The control's own size on the axis.
    OfSelf,
    /// The parent's size on the axis.
    OfParent,
}

/// How a term combines with the value accumulated so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Replace the accumulated value.
    Set,
    /// Add to the accumulated value.
    Add,
    /// Subtract from the accumulated value.
    Subtract,
}

impl Operator {
    /// Combines `value` into `acc`.
    #[must_use]
    pub fn apply(self, acc: i32, value: i32) -> i32 {
        match self {
            Self::Set => value,
            Self::Add => acc.saturating_add(value),
            Self::Subtract => acc.saturating_sub(value),
        }
    }
}

/// One aligned, possibly proportional position term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionTerm {
    /// Edge the term is measured from.
    pub alignment: Anchor,
    /// What the literal is a multiple of.
    pub proportion: Proportion,
    /// The parsed integer literal.
    pub literal: i16,
}

impl PositionTerm {
    fn parse(input: &str, mode: MarkerMode) -> (Self, &str) {
        let (alignment, rest) = match input.as_bytes().first() {
            Some(b'r' | b'R') => (Anchor::Far, &input[1..]),
            Some(b'c' | b'C') => (Anchor::Center, &input[1..]),
            _ => (Anchor::Near, input),
        };
        let (proportion, rest) = match (mode, rest.chars().next()) {
            (_, Some('s')) => (Proportion::OfSelf, &rest[1..]),
            (MarkerMode::Strict, Some('p')) => (Proportion::OfParent, &rest[1..]),
            (MarkerMode::Strict, _) => (Proportion::Pixels, rest),
            (MarkerMode::Legacy, Some(c)) => (Proportion::OfParent, &rest[c.len_utf8()..]),
            (MarkerMode::Legacy, None) => (Proportion::OfParent, rest),
        };
        let (literal, rest) = split_leading_int(rest);
        let term = Self {
            alignment,
            proportion,
            literal: literal_i16(literal).unwrap_or(0),
        };
        (term, rest)
    }

    /// Offset of this term from the near edge of a parent of `parent_size`.
    #[must_use]
    pub fn evaluate(&self, self_size: i16, parent_size: i16) -> i32 {
        let base = match self.proportion {
            Proportion::Pixels => 1,
            Proportion::OfSelf => i32::from(self_size),
            Proportion::OfParent => i32::from(parent_size),
        };
        let delta = i32::from(self.literal) * base;
        let parent = i32::from(parent_size);
        match self.alignment {
            Anchor::Far => parent - delta,
            Anchor::Center => parent / 2 + delta,
            Anchor::Near => delta,
        }
    }

    /// `BuildMode` bits describing this term on `axis`.
    #[must_use]
    pub fn build_mode(&self, axis: Axis) -> BuildMode {
        let alignment = match self.alignment {
            Anchor::Far => BuildMode::far_aligned(axis),
            Anchor::Center => BuildMode::center_aligned(axis),
            Anchor::Near => BuildMode::empty(),
        };
        let proportion = match self.proportion {
            Proportion::OfSelf => BuildMode::position_proportional_self(axis),
            Proportion::OfParent => BuildMode::position_proportional_parent(axis),
            Proportion::Pixels => BuildMode::empty(),
        };
        alignment | proportion
    }
}

/// A chained term and the operator joining it to the previous ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChainedTerm {
    /// `Add` or `Subtract`.
    pub operator: Operator,
    /// The term itself.
    pub term: PositionTerm,
}

/// A parsed `xpos`/`ypos` specifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionSpec {
    head: PositionTerm,
    chain: Vec<ChainedTerm>,
}

impl PositionSpec {
    /// Parses a position specifier.
    ///
    /// # Errors
    ///
    /// Returns [`SpecifierError::ChainTooDeep`] when more than `chain_limit`
    /// `+`/`-` terms follow the head term.
    pub fn parse(input: &str, mode: MarkerMode, chain_limit: u8) -> Result<Self, SpecifierError> {
        let (head, rest) = PositionTerm::parse(input, mode);
        let mut chain = Vec::new();
        parse_chain(input, rest, mode, chain_limit, &mut chain)?;
        Ok(Self { head, chain })
    }

    /// The leading term.
    #[must_use]
    pub fn head(&self) -> &PositionTerm {
        &self.head
    }

    /// The `+`/`-` terms following the head, in order.
    #[must_use]
    pub fn chain(&self) -> &[ChainedTerm] {
        &self.chain
    }

    /// Rewrites the literal of every plain-unit term.
    ///
    /// Used to push pixel values through a resolution scaler.
    pub fn map_pixel_literals(&mut self, mut f: impl FnMut(i16) -> i16) {
        let terms = core::iter::once(&mut self.head).chain(self.chain.iter_mut().map(|c| &mut c.term));
        for term in terms {
            if term.proportion == Proportion::Pixels {
                term.literal = f(term.literal);
            }
        }
    }

    /// Resolves to an offset from the near edge of the parent.
    #[must_use]
    pub fn resolve(&self, self_size: i16, parent_size: i16) -> i16 {
        let head = Operator::Set.apply(0, self.head.evaluate(self_size, parent_size));
        let value = self.chain.iter().fold(head, |acc, link| {
            link.operator
                .apply(acc, link.term.evaluate(self_size, parent_size))
        });
        saturate(value)
    }

    /// `BuildMode` bits for `axis`. Only the head term is recorded.
    #[must_use]
    pub fn build_mode(&self, axis: Axis) -> BuildMode {
        self.head.build_mode(axis)
    }
}

fn parse_chain(
    input: &str,
    rest: &str,
    mode: MarkerMode,
    limit: u8,
    chain: &mut Vec<ChainedTerm>,
) -> Result<(), SpecifierError> {
    let operator = match rest.as_bytes().first() {
        Some(b'+') => Operator::Add,
        Some(b'-') => Operator::Subtract,
        _ => return Ok(()),
    };
    if chain.len() >= usize::from(limit) {
        return Err(SpecifierError::ChainTooDeep {
            input: input.to_owned(),
            limit,
        });
    }
    let (term, rest) = PositionTerm::parse(&rest[1..], mode);
    chain.push(ChainedTerm { operator, term });
    parse_chain(input, rest, mode, limit, chain)
}

/// Parses and resolves a position specifier in one step.
///
/// Returns the offset from the parent's near edge together with the
/// `BuildMode` bits it implies.
///
/// # Errors
///
/// See [`PositionSpec::parse`].
pub fn parse_position(
    input: &str,
    axis: Axis,
    self_size: i16,
    parent_size: i16,
    mode: MarkerMode,
) -> Result<(i16, BuildMode), SpecifierError> {
    let spec = PositionSpec::parse(input, mode, DEFAULT_CHAIN_LIMIT)?;
    Ok((spec.resolve(self_size, parent_size), spec.build_mode(axis)))
}

/// A parsed `wide`/`tall` specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeSpec {
    /// A plain value.
    Literal(i16),
    /// Parent size minus the value.
    Fill(i16),
    /// The other axis times the value.
    FromOther(i16),
    /// A value scaled to the surface resolution.
    ParentScaled(i16),
    /// The current size times the value.
    SelfScaled(i16),
}

impl SizeSpec {
    /// Parses a size specifier. Never fails; malformed literals read as `0`.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut chars = input.chars();
        let mode = chars.next().map(|c| c.to_ascii_lowercase());
        let after_mode = chars.as_str();
        let literal = |s: &str| literal_i16(split_leading_int(s).0);
        match mode {
            Some('f') => Self::Fill(literal(after_mode).unwrap_or(0)),
            Some('o') => Self::FromOther(literal(after_mode).unwrap_or(1)),
            Some('p') => Self::ParentScaled(literal(after_mode).unwrap_or(0)),
            Some('s') => Self::SelfScaled(literal(after_mode).unwrap_or(0)),
            _ => Self::Literal(literal(input).unwrap_or(0)),
        }
    }

    /// The numeric part of the specifier.
    #[must_use]
    pub fn literal(self) -> i16 {
        match self {
            Self::Literal(v)
            | Self::Fill(v)
            | Self::FromOther(v)
            | Self::ParentScaled(v)
            | Self::SelfScaled(v) => v,
        }
    }

    /// Resolves without a scaler: `ParentScaled` keeps its literal.
    #[must_use]
    pub fn resolve(self, current: i16, parent: i16, other: i16) -> i16 {
        match self {
            Self::Literal(v) | Self::ParentScaled(v) => v,
            Self::Fill(v) => saturate(i32::from(parent) - i32::from(v)),
            Self::FromOther(v) => saturate(i32::from(other) * i32::from(v)),
            Self::SelfScaled(v) => saturate(i32::from(current) * i32::from(v)),
        }
    }

    /// `BuildMode` bits recorded for this specifier on `axis`.
    #[must_use]
    pub fn build_mode(self, axis: Axis) -> BuildMode {
        match self {
            Self::Literal(_) => BuildMode::empty(),
            Self::Fill(_) => BuildMode::size_full(axis),
            Self::FromOther(_) => BuildMode::size_from_other(axis),
            Self::ParentScaled(_) => BuildMode::size_proportional(axis),
            Self::SelfScaled(_) => BuildMode::size_proportional_self(axis),
        }
    }
}

/// Parses a size specifier. Shorthand for [`SizeSpec::parse`].
#[must_use]
pub fn parse_size(input: &str) -> SizeSpec {
    SizeSpec::parse(input)
}
