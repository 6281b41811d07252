//! Character-class calls and the sanitizer applied to their contents.

use std::borrow::Cow;

use super::PatternBuilder;
use crate::errors::{PatternError, invalid_argument};

/// Whether character-class contents are escaped before insertion.
///
/// Escaping covers `[`, `]`, `(` and `)` only. It is not a general
/// metacharacter escape: `-`, `^` and `\` keep their class meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sanitize {
    /// Prefix each bracket and parenthesis with a backslash.
    #[default]
    Escape,
    /// Insert the characters verbatim.
    Verbatim,
}

/// Escape brackets, then parentheses.
fn escape_class_characters(characters: &str) -> Cow<'_, str> {
    if !characters.contains(['[', ']', '(', ')']) {
        return Cow::Borrowed(characters);
    }
    let mut out = String::with_capacity(characters.len().saturating_mul(2));
    for ch in characters.chars() {
        if matches!(ch, '[' | ']' | '(' | ')') {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

impl PatternBuilder {
    /// Append a class matching any one of `characters`, escaping brackets
    /// and parentheses.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `characters` is empty
    /// or only whitespace.
    ///
    /// # Examples
    /// ```
    /// use regex_mate::PatternBuilder;
    ///
    /// # fn main() -> Result<(), regex_mate::PatternError> {
    /// let mut builder = PatternBuilder::new();
    /// builder.match_any("[a]")?;
    /// assert_eq!(builder.as_str(), r"[\[a\]]");
    /// # Ok(())
    /// # }
    /// ```
    pub fn match_any(&mut self, characters: &str) -> Result<&mut Self, PatternError> {
        self.match_any_with(characters, Sanitize::Escape)
    }

    /// Like [`match_any`](Self::match_any) but inserts `characters` verbatim.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `characters` is empty
    /// or only whitespace.
    pub fn match_any_raw(&mut self, characters: &str) -> Result<&mut Self, PatternError> {
        self.match_any_with(characters, Sanitize::Verbatim)
    }

    /// Append `[<characters>]`, sanitizing according to `sanitize`.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `characters` is empty
    /// or only whitespace.
    pub fn match_any_with(
        &mut self,
        characters: &str,
        sanitize: Sanitize,
    ) -> Result<&mut Self, PatternError> {
        self.class("[", characters, sanitize)
    }

    /// Append a negated class matching anything but `characters`, escaping
    /// brackets and parentheses.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `characters` is empty
    /// or only whitespace.
    pub fn none_of(&mut self, characters: &str) -> Result<&mut Self, PatternError> {
        self.none_of_with(characters, Sanitize::Escape)
    }

    /// Like [`none_of`](Self::none_of) but inserts `characters` verbatim.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `characters` is empty
    /// or only whitespace.
    pub fn none_of_raw(&mut self, characters: &str) -> Result<&mut Self, PatternError> {
        self.none_of_with(characters, Sanitize::Verbatim)
    }

    /// Append `[^<characters>]`, sanitizing according to `sanitize`.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `characters` is empty
    /// or only whitespace.
    pub fn none_of_with(
        &mut self,
        characters: &str,
        sanitize: Sanitize,
    ) -> Result<&mut Self, PatternError> {
        self.class("[^", characters, sanitize)
    }

    fn class(
        &mut self,
        open: &str,
        characters: &str,
        sanitize: Sanitize,
    ) -> Result<&mut Self, PatternError> {
        if characters.trim().is_empty() {
            return Err(invalid_argument(
                "characters",
                "character class must contain at least one non-whitespace character",
                characters,
            ));
        }
        let body = match sanitize {
            Sanitize::Escape => escape_class_characters(characters),
            Sanitize::Verbatim => Cow::Borrowed(characters),
        };
        self.pattern.reserve(open.len() + body.len() + 1);
        self.pattern.push_str(open);
        self.pattern.push_str(&body);
        self.pattern.push(']');
        Ok(self)
    }
}
