//! Compilation options accumulated by the builder.

use bitflags::bitflags;

bitflags! {
    /// Flags handed to the engine alongside the pattern text.
    ///
    /// Setting a flag twice is a no-op and the order in which flags are set
    /// does not matter.
    ///
    /// # Examples
    /// ```
    /// use regex_mate::RegexOptions;
    ///
    /// let opts = RegexOptions::IGNORE_CASE | RegexOptions::MULTILINE;
    /// assert_eq!(opts | RegexOptions::IGNORE_CASE, opts);
    /// ```
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct RegexOptions: u8 {
        /// Ask the engine to optimise for repeated execution.
        const COMPILED = 1 << 0;
        /// Only named groups capture.
        const EXPLICIT_CAPTURE = 1 << 1;
        /// Letters match regardless of case.
        const IGNORE_CASE = 1 << 2;
        /// Unescaped whitespace and `#` comments in the pattern are ignored.
        const IGNORE_PATTERN_WHITESPACE = 1 << 3;
        /// `^` and `$` match at line boundaries.
        const MULTILINE = 1 << 4;
        /// `.` also matches a line feed.
        const SINGLELINE = 1 << 5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(RegexOptions::default().is_empty());
    }

    #[test]
    fn union_is_order_independent() {
        let left = RegexOptions::SINGLELINE | RegexOptions::COMPILED;
        let right = RegexOptions::COMPILED | RegexOptions::SINGLELINE;
        assert_eq!(left, right);
        assert!(left.contains(RegexOptions::COMPILED));
        assert!(!left.contains(RegexOptions::MULTILINE));
    }
}
