//! Segment model: the literal-or-value units of an interpolated string.

use std::fmt::Display;

/// One unit of an interpolated string, in source order.
///
/// The variants are tagged explicitly; consumers branch on the tag and
/// never rely on literal/value alternation by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A fixed fragment, contributed verbatim to the lookup key.
    Literal(String),
    /// A dynamic fragment, rendered to text at construction time.
    ///
    /// The rendered text doubles as the substitution argument and as the
    /// fallback concatenation text.
    Value(String),
}

impl Segment {
    /// Create a literal segment.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Create a value segment from anything that renders to text.
    ///
    /// Rendering happens exactly once, here. The capability required of a
    /// value is [`Display`]; no runtime introspection is involved.
    #[must_use]
    pub fn value(value: impl Display) -> Self {
        Self::Value(value.to_string())
    }

    /// The text this segment contributes when no translation applies:
    /// literal text for literals, rendered text for values.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Value(text) => text,
        }
    }
}

/// Build a `Vec<Segment>` from alternating string literals and `{value}`
/// expressions.
///
/// String literals become [`Segment::Literal`]; brace-wrapped expressions
/// become [`Segment::Value`] (rendered immediately, borrowing the value).
///
/// ```
/// use i18n_format::{Segment, segments};
///
/// let name = "Alice";
/// let count = 3;
/// let segs = segments!["Hello, " {name} ", you have " {count} " items"];
/// assert_eq!(segs.len(), 5);
/// assert_eq!(segs.first(), Some(&Segment::literal("Hello, ")));
/// ```
#[macro_export]
macro_rules! segments {
    (@seg { $value:expr }) => {
        $crate::segment::Segment::value(&$value)
    };
    (@seg $text:literal) => {
        $crate::segment::Segment::literal($text)
    };
    [$($part:tt)*] => {
        vec![$($crate::segments!(@seg $part)),*]
    };
}
