use std::{fmt, str::FromStr};

use non_empty_string::NonEmptyString;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::Specification;

/// The colour of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Color {
    /// All colours, in declaration order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAttributeError::new("color", s))
    }
}

/// The size of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Small.
    Small,
    /// Medium.
    Medium,
    /// Large.
    Large,
    /// Huge.
    Huge,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Huge];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Huge => "huge",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAttributeError::new("size", s))
    }
}

/// Error returned when a string is not a known colour or size.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown {attribute} '{value}'")]
pub struct ParseAttributeError {
    attribute: &'static str,
    value: String,
}

impl ParseAttributeError {
    fn new(attribute: &'static str, value: &str) -> Self {
        Self {
            attribute,
            value: value.to_string(),
        }
    }
}

/// Error returned when a product is given an empty name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("product name must not be empty")]
pub struct InvalidProductName;

/// An immutable product record.
///
/// Products are created once and never modified; every field is read through
/// an accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: NonEmptyString,
    color: Color,
    size: Size,
}

impl Product {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidProductName`] if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        size: Size,
    ) -> Result<Self, InvalidProductName> {
        let name = NonEmptyString::new(name.into()).map_err(|_| InvalidProductName)?;
        Ok(Self { name, color, size })
    }

    /// The product's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The product's colour.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The product's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name(), self.color, self.size)
    }
}

/// Satisfied by products of one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    /// Matches products whose colour is `color`.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Satisfied by products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    /// Matches products whose size is `size`.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Satisfied by products whose name matches a regular expression.
#[derive(Debug, Clone)]
pub struct NameSpecification {
    pattern: Regex,
}

impl NameSpecification {
    /// Compiles `pattern` into a name matcher.
    ///
    /// The match is unanchored; use `^` and `$` to match the whole name.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        self.pattern.is_match(item.name())
    }
}
