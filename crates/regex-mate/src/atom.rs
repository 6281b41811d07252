//! Fixed pattern fragments appended by the zero-argument builder calls.
//!
//! Each [`Atom`] maps to exactly one fragment of pattern text. The builder
//! exposes a named method per variant, and [`PatternBuilder::atom`] accepts
//! the variant directly.
//!
//! [`PatternBuilder::atom`]: crate::PatternBuilder::atom

use std::fmt;

/// A zero-argument token with a fixed textual fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atom {
    /// One ASCII letter or digit.
    AlphaNumeric,
    /// Any character except a line terminator.
    Any,
    /// A decimal digit.
    Digit,
    /// Anything but a decimal digit.
    NonDigit,
    /// A word-constituent character.
    Word,
    /// Anything but a word-constituent character.
    NonWord,
    /// A whitespace character.
    Space,
    /// Anything but whitespace.
    NonSpace,
    /// Zero-width word boundary.
    Boundary,
    /// Zero-width position that is not a word boundary.
    NonBoundary,
    /// Literal carriage return.
    CarriageReturn,
    /// Literal form feed.
    FormFeed,
    /// Literal line feed.
    NewLine,
    /// Literal horizontal tab.
    Tab,
    /// Literal vertical tab.
    VerticalTab,
    /// One or more repetitions of the preceding item.
    OneOrMore,
    /// Zero or more repetitions of the preceding item.
    ZeroOrMore,
    /// Zero or one repetition of the preceding item.
    Optional,
    /// Start of line.
    BeginLine,
    /// End of line.
    EndLine,
    /// Start of the input.
    BeginString,
    /// End of the input, or before a final line feed.
    EndString,
}

impl Atom {
    /// Every atom, in table order.
    pub const ALL: [Self; 22] = [
        Self::AlphaNumeric,
        Self::Any,
        Self::Digit,
        Self::NonDigit,
        Self::Word,
        Self::NonWord,
        Self::Space,
        Self::NonSpace,
        Self::Boundary,
        Self::NonBoundary,
        Self::CarriageReturn,
        Self::FormFeed,
        Self::NewLine,
        Self::Tab,
        Self::VerticalTab,
        Self::OneOrMore,
        Self::ZeroOrMore,
        Self::Optional,
        Self::BeginLine,
        Self::EndLine,
        Self::BeginString,
        Self::EndString,
    ];

    /// Return the pattern fragment for this atom.
    ///
    /// # Examples
    ///
    /// ```
    /// use regex_mate::Atom;
    ///
    /// assert_eq!(Atom::Digit.as_str(), r"\d");
    /// assert_eq!(Atom::AlphaNumeric.as_str(), "[A-Za-z0-9]");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlphaNumeric => "[A-Za-z0-9]",
            Self::Any => ".",
            Self::Digit => r"\d",
            Self::NonDigit => r"\D",
            Self::Word => r"\w",
            Self::NonWord => r"\W",
            Self::Space => r"\s",
            Self::NonSpace => r"\S",
            Self::Boundary => r"\b",
            Self::NonBoundary => r"\B",
            Self::CarriageReturn => r"\r",
            Self::FormFeed => r"\f",
            Self::NewLine => r"\n",
            Self::Tab => r"\t",
            Self::VerticalTab => r"\v",
            Self::OneOrMore => "+",
            Self::ZeroOrMore => "*",
            Self::Optional => "?",
            Self::BeginLine => "^",
            Self::EndLine => "$",
            Self::BeginString => r"\A",
            Self::EndString => r"\Z",
        }
    }

    /// Whether the atom repeats the preceding item rather than matching on
    /// its own.
    #[must_use]
    pub const fn is_quantifier(&self) -> bool {
        matches!(self, Self::OneOrMore | Self::ZeroOrMore | Self::Optional)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
