//! Counted repetition suffixes.

use std::fmt;

use super::PatternBuilder;
use crate::errors::{PatternError, invalid_argument};

/// A counted repetition of the preceding item.
///
/// # Examples
/// ```
/// use regex_mate::Quantifier;
///
/// assert_eq!(Quantifier::Exactly(5).to_string(), "{5}");
/// assert_eq!(Quantifier::AtMost(3).to_string(), "{1,3}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// Exactly `n` repetitions, rendered `{n}`.
    Exactly(u32),
    /// At least `n` repetitions, rendered `{n,}`.
    AtLeast(u32),
    /// Between one and `n` repetitions, rendered `{1,n}`.
    AtMost(u32),
    /// Between `low` and `high` repetitions, rendered `{low,high}`.
    Between(u32, u32),
}

impl Quantifier {
    /// Check the counts and return the quantifier unchanged when they are
    /// usable.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when a single count is zero
    /// or when `high` is below `low`.
    pub fn validate(self) -> Result<Self, PatternError> {
        match self {
            Self::Exactly(0) | Self::AtLeast(0) | Self::AtMost(0) => Err(invalid_argument(
                "times",
                "repetition count must be positive",
                "0",
            )),
            Self::Between(low, high) if high < low => Err(invalid_argument(
                "high",
                "upper bound must not be less than lower bound",
                format!("{low},{high}"),
            )),
            _ => Ok(self),
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{{{n}}}"),
            Self::AtLeast(n) => write!(f, "{{{n},}}"),
            Self::AtMost(n) => write!(f, "{{1,{n}}}"),
            Self::Between(low, high) => write!(f, "{{{low},{high}}}"),
        }
    }
}

impl PatternBuilder {
    /// Append a validated [`Quantifier`].
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when
    /// [`Quantifier::validate`] rejects the counts.
    pub fn quantify(&mut self, quantifier: Quantifier) -> Result<&mut Self, PatternError> {
        let quantifier = quantifier.validate()?;
        Ok(self.push(&quantifier.to_string()))
    }

    /// Append `{times}`.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `times` is zero.
    pub fn exactly(&mut self, times: u32) -> Result<&mut Self, PatternError> {
        self.quantify(Quantifier::Exactly(times))
    }

    /// Append `{times,}`.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `times` is zero.
    pub fn at_least(&mut self, times: u32) -> Result<&mut Self, PatternError> {
        self.quantify(Quantifier::AtLeast(times))
    }

    /// Append `{1,times}`.
    ///
    /// The lower bound is one, not zero: the preceding item must appear at
    /// least once.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `times` is zero.
    pub fn at_most(&mut self, times: u32) -> Result<&mut Self, PatternError> {
        self.quantify(Quantifier::AtMost(times))
    }

    /// Append `{low,high}`.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidArgument`] when `high` is less than
    /// `low`.
    pub fn between(&mut self, low: u32, high: u32) -> Result<&mut Self, PatternError> {
        self.quantify(Quantifier::Between(low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Quantifier::Exactly(5), "{5}")]
    #[case(Quantifier::AtLeast(6), "{6,}")]
    #[case(Quantifier::AtMost(3), "{1,3}")]
    #[case(Quantifier::Between(2, 4), "{2,4}")]
    #[case(Quantifier::Between(0, 0), "{0,0}")]
    fn appends_rendered_quantifier(#[case] quantifier: Quantifier, #[case] expected: &str) {
        let mut builder = PatternBuilder::new();
        assert!(builder.quantify(quantifier).is_ok());
        assert_eq!(builder.as_str(), expected);
    }

    #[rstest]
    #[case(Quantifier::Exactly(0))]
    #[case(Quantifier::AtLeast(0))]
    #[case(Quantifier::AtMost(0))]
    #[case(Quantifier::Between(3, 2))]
    fn rejects_unusable_counts(#[case] quantifier: Quantifier) {
        let mut builder = PatternBuilder::new();
        builder.digit();
        assert!(matches!(
            builder.quantify(quantifier),
            Err(PatternError::InvalidArgument(_))
        ));
        assert_eq!(builder.as_str(), r"\d");
    }

    #[test]
    fn between_accepts_equal_bounds() {
        let mut builder = PatternBuilder::new();
        assert!(builder.between(3, 3).is_ok());
        assert_eq!(builder.as_str(), "{3,3}");
    }

    #[test]
    fn between_reports_both_bounds() {
        let mut builder = PatternBuilder::new();
        let Err(err) = builder.between(5, 1) else {
            panic!("expected inverted range to be rejected");
        };
        assert_eq!(err.argument_info().map(|info| info.value.as_str()), Some("5,1"));
    }
}
