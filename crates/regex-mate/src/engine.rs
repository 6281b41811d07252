//! The compile boundary between the builder and a regular-expression engine.
//!
//! The builder only assembles text. Turning that text into something that
//! can test input is delegated to an [`Engine`], so the builder can be
//! exercised against a stub and shipped against the `regex` crate through
//! [`RegexEngine`].

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::config::EngineConfig;
use crate::options::RegexOptions;

/// Compiles pattern text and options into a [`Matcher`].
pub trait Engine {
    /// The compiled form produced by this engine.
    type Matcher: Matcher;
    /// Raised when the pattern text is not valid for this engine.
    type Error: StdError + Send + Sync + 'static;

    /// Compile `source` with `options`.
    ///
    /// # Errors
    /// Returns [`Self::Error`] when `source` is not a valid pattern for the
    /// engine's dialect.
    fn compile(&self, source: &str, options: RegexOptions) -> Result<Self::Matcher, Self::Error>;
}

/// A compiled pattern able to test input.
pub trait Matcher {
    /// Report whether `input` contains a match.
    fn is_match(&self, input: &str) -> bool;

    /// Return the pattern text exactly as the builder produced it.
    fn as_str(&self) -> &str;
}

/// [`Engine`] backed by the `regex` crate.
///
/// Option mapping: `IGNORE_CASE`, `MULTILINE`, `SINGLELINE` and
/// `IGNORE_PATTERN_WHITESPACE` map onto the matching [`RegexBuilder`]
/// switches. `COMPILED` is implied because the crate always compiles to
/// automata, and `EXPLICIT_CAPTURE` has no counterpart and is ignored.
///
/// # Examples
/// ```
/// use regex_mate::{Engine, Matcher, RegexEngine, RegexOptions};
///
/// # fn main() -> Result<(), regex::Error> {
/// let matcher = RegexEngine::default().compile(r"^\d+$", RegexOptions::empty())?;
/// assert!(matcher.is_match("2024"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegexEngine {
    config: EngineConfig,
}

impl RegexEngine {
    /// Create an engine that applies the limits in `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The limits applied to every compilation.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Engine for RegexEngine {
    type Matcher = RegexMatcher;
    type Error = regex::Error;

    fn compile(&self, source: &str, options: RegexOptions) -> Result<RegexMatcher, regex::Error> {
        let translated = translate_dialect(source);
        let mut builder = RegexBuilder::new(&translated);
        builder
            .octal(true)
            .case_insensitive(options.contains(RegexOptions::IGNORE_CASE))
            .multi_line(options.contains(RegexOptions::MULTILINE))
            .dot_matches_new_line(options.contains(RegexOptions::SINGLELINE))
            .ignore_whitespace(options.contains(RegexOptions::IGNORE_PATTERN_WHITESPACE));
        if let Some(bytes) = self.config.size_limit {
            builder.size_limit(bytes);
        }
        if let Some(bytes) = self.config.dfa_size_limit {
            builder.dfa_size_limit(bytes);
        }
        if let Some(depth) = self.config.nest_limit {
            builder.nest_limit(depth);
        }
        if options.contains(RegexOptions::EXPLICIT_CAPTURE) {
            log::debug!("explicit capture is not supported by the regex engine; ignoring");
        }

        let regex = builder.build()?;
        Ok(RegexMatcher {
            source: source.to_string(),
            regex,
        })
    }
}

/// Matcher produced by [`RegexEngine`].
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    source: String,
    regex: Regex,
}

impl RegexMatcher {
    /// Return the leftmost-first match in `input`, if any.
    #[must_use]
    pub fn find<'h>(&self, input: &'h str) -> Option<regex::Match<'h>> {
        self.regex.find(input)
    }

    /// Borrow the underlying compiled regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The text actually handed to the `regex` crate after dialect
    /// translation. Equal to [`Matcher::as_str`] unless the pattern uses the
    /// end-of-string atom.
    #[must_use]
    pub fn compiled_source(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for RegexMatcher {
    fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for RegexMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// `\Z` rendered in syntax the `regex` crate accepts.
const END_OF_STRING: &str = r"(?:\n?\z)";

/// Rewrite escapes the `regex` crate does not understand.
///
/// Only `\Z` outside a character class needs rewriting; everything else is
/// passed through untouched.
fn translate_dialect(source: &str) -> Cow<'_, str> {
    if !source.contains(r"\Z") {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len() + END_OF_STRING.len());
    let mut in_class = false;
    let mut chars = source.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('Z') if !in_class => out.push_str(END_OF_STRING),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            '[' => {
                in_class = true;
                out.push(ch);
            }
            ']' => {
                in_class = false;
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
    fn compile(source: &str, options: RegexOptions) -> RegexMatcher {
        RegexEngine::default()
            .compile(source, options)
            .expect("test pattern should compile")
    }

    #[rstest]
    #[case(r"\d+", r"\d+")]
    #[case(r"^\w\Z", r"^\w(?:\n?\z)")]
    #[case(r"\\Z", r"\\Z")]
    #[case(r"[\Z]\Z", r"[\Z](?:\n?\z)")]
    fn translates_end_of_string_outside_classes(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(translate_dialect(source), expected);
    }

    #[test]
    fn borrows_when_no_translation_is_needed() {
        assert!(matches!(translate_dialect(r"\A\d"), Cow::Borrowed(_)));
    }

    #[test]
    fn end_of_string_allows_one_trailing_newline() {
        let matcher = compile(r"\Aab\Z", RegexOptions::empty());
        assert!(matcher.is_match("ab"));
        assert!(matcher.is_match("ab\n"));
        assert!(!matcher.is_match("ab\n\n"));
        assert_eq!(matcher.as_str(), r"\Aab\Z");
        assert_eq!(matcher.compiled_source(), r"\Aab(?:\n?\z)");
    }

    #[test]
    fn maps_ignore_case() {
        assert!(!compile("^abc$", RegexOptions::empty()).is_match("ABC"));
        assert!(compile("^abc$", RegexOptions::IGNORE_CASE).is_match("ABC"));
    }

    #[test]
    fn maps_multiline_and_singleline() {
        assert!(compile("^b$", RegexOptions::MULTILINE).is_match("a\nb\nc"));
        assert!(!compile("^b$", RegexOptions::empty()).is_match("a\nb\nc"));
        assert!(compile("a.b", RegexOptions::SINGLELINE).is_match("a\nb"));
        assert!(!compile("a.b", RegexOptions::empty()).is_match("a\nb"));
    }

    #[test]
    fn maps_ignore_pattern_whitespace() {
        let matcher = compile(r"^\d \d$", RegexOptions::IGNORE_PATTERN_WHITESPACE);
        assert!(matcher.is_match("12"));
    }

    #[test]
    fn accepts_options_without_engine_counterpart() {
        let options = RegexOptions::COMPILED | RegexOptions::EXPLICIT_CAPTURE;
        assert!(compile("a", options).is_match("a"));
    }

    #[test]
    fn enables_octal_escapes() {
        assert!(compile(r"\101", RegexOptions::empty()).is_match("A"));
    }

    #[test]
    fn applies_size_limit() {
        let engine = RegexEngine::new(EngineConfig::default().with_size_limit(16));
        let result = engine.compile(r"\w{100}", RegexOptions::empty());
        assert!(matches!(result, Err(regex::Error::CompiledTooBig(_))));
    }

    #[test]
    fn surfaces_syntax_errors() {
        let result = RegexEngine::default().compile("(", RegexOptions::empty());
        assert!(matches!(result, Err(regex::Error::Syntax(_))));
    }

    #[test]
    fn find_reports_match_span() {
        let matcher = compile(r"\d+", RegexOptions::empty());
        let found = matcher.find("abc 123 def").map(|m| m.range());
        assert_eq!(found, Some(4..7));
        assert_eq!(matcher.regex().as_str(), r"\d+");
    }
}
