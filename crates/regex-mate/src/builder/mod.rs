//! The fluent pattern builder.
//!
//! [`PatternBuilder`] owns the pattern text under construction and the
//! option set. Every call appends to the text or adds to the options and
//! hands back the same builder, so calls chain. Validated calls return
//! `Result<&mut Self, _>` and never append when they fail.

mod class;
mod escape;
mod quantifier;

use std::fmt;

use crate::atom::Atom;
use crate::engine::{Engine, RegexEngine, RegexMatcher};
use crate::errors::{PatternError, syntax_error};
use crate::options::RegexOptions;

pub use class::Sanitize;
pub use quantifier::Quantifier;

/// Accumulates pattern text and options through chained calls.
///
/// The builder is append-only: nothing already written is ever rewritten.
/// [`build`](Self::build) borrows the builder, so it stays usable afterwards
/// and later calls keep appending to the same text.
///
/// Mutation goes through `&mut self`; share a builder between threads only
/// behind a lock.
///
/// # Examples
/// ```
/// use regex_mate::{Matcher, PatternBuilder};
///
/// # fn main() -> Result<(), regex_mate::PatternError> {
/// let mut builder = PatternBuilder::new();
/// builder.begin_line().digit().at_least(6)?.end_line();
/// assert_eq!(builder.as_str(), r"^\d{6,}$");
///
/// let matcher = builder.build()?;
/// assert!(matcher.is_match("1234567"));
/// assert!(!matcher.is_match("1234"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PatternBuilder {
    pattern: String,
    options: RegexOptions,
}

macro_rules! atom_methods {
    ($($(#[$doc:meta])* $name:ident => $atom:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&mut self) -> &mut Self {
                self.atom(Atom::$atom)
            }
        )*
    };
}

impl PatternBuilder {
    /// Create an empty builder with no options set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern text accumulated so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The options accumulated so far.
    #[must_use]
    pub fn options(&self) -> RegexOptions {
        self.options
    }

    /// Length of the accumulated pattern text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Append the fixed fragment for `atom`.
    pub fn atom(&mut self, atom: Atom) -> &mut Self {
        self.push(atom.as_str())
    }

    atom_methods! {
        /// Append `[A-Za-z0-9]`.
        alphanumeric => AlphaNumeric;
        /// Append `.`.
        any => Any;
        /// Append `\d`.
        digit => Digit;
        /// Append `\D`.
        non_digit => NonDigit;
        /// Append `\w`.
        word => Word;
        /// Append `\W`.
        non_word => NonWord;
        /// Append `\s`.
        space => Space;
        /// Append `\S`.
        non_space => NonSpace;
        /// Append `\b`.
        boundary => Boundary;
        /// Append `\B`.
        non_boundary => NonBoundary;
        /// Append `\r`.
        carriage_return => CarriageReturn;
        /// Append `\f`.
        form_feed => FormFeed;
        /// Append `\n`.
        new_line => NewLine;
        /// Append `\t`.
        tab => Tab;
        /// Append `\v`.
        vertical_tab => VerticalTab;
        /// Append `+`.
        one_or_more => OneOrMore;
        /// Append `*`.
        zero_or_more => ZeroOrMore;
        /// Append `?`.
        optional => Optional;
        /// Append `^`.
        begin_line => BeginLine;
        /// Append `$`.
        end_line => EndLine;
        /// Append `\A`.
        begin_string => BeginString;
        /// Append `\Z`.
        end_string => EndString;
    }

    /// Add `options` to the option set.
    pub fn with_options(&mut self, options: RegexOptions) -> &mut Self {
        self.options |= options;
        self
    }

    /// Set [`RegexOptions::COMPILED`].
    pub fn compiled(&mut self) -> &mut Self {
        self.with_options(RegexOptions::COMPILED)
    }

    /// Set [`RegexOptions::EXPLICIT_CAPTURE`].
    pub fn explicit_capture(&mut self) -> &mut Self {
        self.with_options(RegexOptions::EXPLICIT_CAPTURE)
    }

    /// Set [`RegexOptions::IGNORE_CASE`].
    pub fn ignore_case(&mut self) -> &mut Self {
        self.with_options(RegexOptions::IGNORE_CASE)
    }

    /// Set [`RegexOptions::IGNORE_PATTERN_WHITESPACE`].
    pub fn ignore_pattern_whitespace(&mut self) -> &mut Self {
        self.with_options(RegexOptions::IGNORE_PATTERN_WHITESPACE)
    }

    /// Set [`RegexOptions::MULTILINE`].
    pub fn multi_line(&mut self) -> &mut Self {
        self.with_options(RegexOptions::MULTILINE)
    }

    /// Set [`RegexOptions::SINGLELINE`].
    pub fn single_line(&mut self) -> &mut Self {
        self.with_options(RegexOptions::SINGLELINE)
    }

    /// Compile the accumulated pattern with the default [`RegexEngine`].
    ///
    /// # Errors
    /// Returns [`PatternError::Syntax`] when the engine rejects the pattern.
    pub fn build(&self) -> Result<RegexMatcher, PatternError> {
        self.build_with(&RegexEngine::default())
    }

    /// Compile the accumulated pattern with `engine`.
    ///
    /// The builder performs no validation of its own here; whether the
    /// accumulated fragments compose into a valid pattern is for the engine
    /// to decide.
    ///
    /// # Errors
    /// Returns [`PatternError::Syntax`] wrapping the engine's error when the
    /// engine rejects the pattern.
    pub fn build_with<E: Engine>(&self, engine: &E) -> Result<E::Matcher, PatternError> {
        log::debug!(
            "compiling pattern `{}` with options {:?}",
            self.pattern,
            self.options
        );
        engine
            .compile(&self.pattern, self.options)
            .map_err(|err| syntax_error(&self.pattern, err))
    }

    fn push(&mut self, fragment: &str) -> &mut Self {
        self.pattern.push_str(fragment);
        self
    }
}

impl fmt::Display for PatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
