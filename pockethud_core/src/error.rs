// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Malformed numbers, missing scaling hooks and mutually dependent sizes are
//! soft: they resolve to a fallback value and surface as
//! [`LayoutWarning`](crate::resolve::LayoutWarning)s. Everything here aborts
//! the operation that produced it.

use thiserror::Error;

use crate::control::ControlId;

/// Result alias defaulting to [`LayoutError`].
pub type Result<T, E = LayoutError> = core::result::Result<T, E>;

/// A specifier string that cannot be resolved at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecifierError {
    /// More `+`/`-` terms were chained than the configured limit allows.
    #[error("specifier `{input}` chains more than {limit} terms")]
    ChainTooDeep {
        /// The full specifier text.
        input: String,
        /// The configured chain limit.
        limit: u8,
    },
}

/// Failures while resolving or drawing controls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A position specifier could not be parsed.
    #[error("invalid `{property}` specifier")]
    Specifier {
        /// The property key the specifier was read from.
        property: &'static str,
        /// The parser failure.
        #[source]
        source: SpecifierError,
    },
    /// Reparenting would make a control its own ancestor.
    #[error("cannot attach {child:?} under its own descendant {parent:?}")]
    WouldCycle {
        /// The control being moved.
        child: ControlId,
        /// The requested parent.
        parent: ControlId,
    },
    /// The control class is recognised but has no implementation.
    #[error("control class `{class}` is not supported")]
    Unsupported {
        /// The declared class name.
        class: String,
    },
}

/// Failures while building controls from property objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No constructor is registered for the declared class.
    #[error("there is no builder associated with the control name `{0}`")]
    UnknownControlName(String),
    /// The entry has no `ControlName` property.
    #[error("entry `{entry}` has no `ControlName`")]
    MissingControlName {
        /// Name of the offending entry.
        entry: String,
    },
    /// The entry's `ControlName` is a nested object instead of a value.
    #[error("`ControlName` of entry `{entry}` must be a value, not an object")]
    ControlNameNotScalar {
        /// Name of the offending entry.
        entry: String,
    },
    /// Resolving the built control failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl RegistryError {
    /// Whether the input violated the resource-file contract.
    ///
    /// An unknown class is an ordinary, recoverable condition; a malformed
    /// `ControlName` means the property tree itself is broken.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingControlName { .. } | Self::ControlNameNotScalar { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_control_name_message_names_the_class() {
        let err = RegistryError::UnknownControlName("Foo".into());
        assert_eq!(
            err.to_string(),
            "there is no builder associated with the control name `Foo`"
        );
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn malformed_control_names_are_contract_violations() {
        let missing = RegistryError::MissingControlName {
            entry: "Bg".into(),
        };
        let nested = RegistryError::ControlNameNotScalar {
            entry: "Bg".into(),
        };
        assert!(missing.is_contract_violation());
        assert!(nested.is_contract_violation());
    }

    #[test]
    fn layout_errors_convert_into_registry_errors() {
        let err: RegistryError = LayoutError::Unsupported {
            class: "ScrollBar".into(),
        }
        .into();
        assert_eq!(err.to_string(), "control class `ScrollBar` is not supported");
    }
}
