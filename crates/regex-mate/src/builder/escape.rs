//! Character-code escapes.
//!
//! Only the length of each code is checked. Digits outside the expected
//! radix pass through and are left for the engine to reject.

use super::PatternBuilder;
use crate::errors::{PatternError, invalid_argument};

impl PatternBuilder {
    /// Append the octal escape `\<code>`.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] unless `code` has two or
    /// three characters.
    pub fn with_octal(&mut self, code: &str) -> Result<&mut Self, PatternError> {
        if !(2..=3).contains(&code.chars().count()) {
            return Err(invalid_argument(
                "code",
                "octal code must contain 2 or 3 characters",
                code,
            ));
        }
        Ok(self.escape("\\", code))
    }

    /// Append the hexadecimal escape `\x<code>`.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] unless `code` has exactly
    /// two characters.
    pub fn with_hex(&mut self, code: &str) -> Result<&mut Self, PatternError> {
        if code.chars().count() != 2 {
            return Err(invalid_argument(
                "code",
                "hexadecimal code must contain exactly 2 characters",
                code,
            ));
        }
        Ok(self.escape(r"\x", code))
    }

    /// Append the Unicode escape `\u<code>`.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] unless `code` has exactly
    /// four characters.
    ///
    /// # Examples
    /// ```
    /// use regex_mate::{Matcher, PatternBuilder};
    ///
    /// # fn main() -> Result<(), regex_mate::PatternError> {
    /// let matcher = PatternBuilder::new().with_unicode("00e9")?.build()?;
    /// assert_eq!(matcher.as_str(), r"\u00e9");
    /// assert!(matcher.is_match("café"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_unicode(&mut self, code: &str) -> Result<&mut Self, PatternError> {
        if code.chars().count() != 4 {
            return Err(invalid_argument(
                "code",
                "unicode code must contain exactly 4 characters",
                code,
            ));
        }
        Ok(self.escape(r"\u", code))
    }

    fn escape(&mut self, prefix: &str, code: &str) -> &mut Self {
        self.pattern.push_str(prefix);
        self.pattern.push_str(code);
        self
    }
}
