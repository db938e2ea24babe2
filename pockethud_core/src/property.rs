// Copyright 2026 the PocketHud Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only access to parsed resource trees.
//!
//! Layout resolution never touches resource files directly. It reads through
//! [`PropertyObject`], a named node that is either a scalar value or an
//! ordered list of nested properties. Key lookup is case-insensitive and
//! returns the first match, the way resource files behave when a key is
//! repeated.
//!
//! [`KeyValues`] is a small owned implementation for callers that build trees
//! in memory (tests, tooling, or a parser front end).

use crate::specifier::split_leading_int;

/// A node of a parsed resource tree.
pub trait PropertyObject {
    /// The node's key.
    fn name(&self) -> &str;

    /// The node's value, or `None` when it holds nested properties.
    fn scalar(&self) -> Option<&str>;

    /// First nested property whose key matches `key` case-insensitively.
    fn property(&self, key: &str) -> Option<&dyn PropertyObject>;

    /// All nested properties in declaration order.
    fn properties(&self) -> Box<dyn Iterator<Item = &dyn PropertyObject> + '_>;

    /// Whether this node holds a value rather than nested properties.
    fn is_scalar(&self) -> bool {
        self.scalar().is_some()
    }

    /// Nested properties that are themselves objects.
    fn nested_objects(&self) -> Box<dyn Iterator<Item = &dyn PropertyObject> + '_> {
        Box::new(self.properties().filter(|p| !p.is_scalar()))
    }

    /// Value of the scalar property `key`.
    fn get_string(&self, key: &str) -> Option<&str> {
        self.property(key)?.scalar()
    }

    /// Integer value of the scalar property `key`.
    ///
    /// Parsing is lenient: leading whitespace and trailing garbage are
    /// ignored, and a value without leading digits reads as `0`.
    fn get_int(&self, key: &str) -> Option<i32> {
        let raw = self.get_string(key)?;
        Some(split_leading_int(raw.trim_start()).0.unwrap_or(0))
    }

    /// Like [`get_int`](Self::get_int), falling back to `default`.
    fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key).unwrap_or(default)
    }

    /// Boolean value of `key`: `true`/`false` or any integer (non-zero is
    /// true), falling back to `default` when absent.
    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        match self.get_string(key) {
            None => default,
            Some(raw) if raw.trim().eq_ignore_ascii_case("true") => true,
            Some(raw) if raw.trim().eq_ignore_ascii_case("false") => false,
            Some(_) => self.get_int_or(key, 0) != 0,
        }
    }
}

/// An owned resource tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValues {
    name: String,
    value: Value,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Value {
    Scalar(String),
    Object(Vec<KeyValues>),
}

impl KeyValues {
    /// Creates a scalar node.
    #[must_use]
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Value::Scalar(value.into()),
        }
    }

    /// Creates an empty object node.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Value::Object(Vec::new()),
        }
    }

    /// Appends a scalar property and returns `self`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Self::value(key, value));
        self
    }

    /// Appends a nested node and returns `self`.
    #[must_use]
    pub fn with_object(mut self, child: Self) -> Self {
        self.push(child);
        self
    }

    /// Appends a nested node. A scalar node becomes an object first, losing
    /// its value.
    pub fn push(&mut self, child: Self) {
        match &mut self.value {
            Value::Object(children) => children.push(child),
            Value::Scalar(_) => self.value = Value::Object(vec![child]),
        }
    }
}

impl PropertyObject for KeyValues {
    fn name(&self) -> &str {
        &self.name
    }

    fn scalar(&self) -> Option<&str> {
        match &self.value {
            Value::Scalar(s) => Some(s.as_str()),
            Value::Object(_) => None,
        }
    }

    fn property(&self, key: &str) -> Option<&dyn PropertyObject> {
        match &self.value {
            Value::Object(children) => children
                .iter()
                .find(|child| child.name.eq_ignore_ascii_case(key))
                .map(|child| child as &dyn PropertyObject),
            Value::Scalar(_) => None,
        }
    }

    fn properties(&self) -> Box<dyn Iterator<Item = &dyn PropertyObject> + '_> {
        match &self.value {
            Value::Object(children) => {
                Box::new(children.iter().map(|child| child as &dyn PropertyObject))
            }
            Value::Scalar(_) => Box::new(core::iter::empty()),
        }
    }
}
