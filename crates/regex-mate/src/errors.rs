//! Error types surfaced while assembling and compiling patterns.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Context for an argument rejected by a validated builder call.
///
/// # Examples
/// ```
/// use regex_mate::ArgumentErrorInfo;
/// let info = ArgumentErrorInfo::new("times", "repetition count must be positive", "0");
/// assert_eq!(info.argument, "times");
/// assert_eq!(info.value, "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentErrorInfo {
    /// Name of the offending parameter.
    pub argument: &'static str,
    /// Why the value was rejected.
    pub message: &'static str,
    /// The rejected value, rendered as text.
    pub value: String,
}

impl ArgumentErrorInfo {
    /// Create a new description of a rejected argument.
    ///
    /// # Examples
    /// ```
    /// use regex_mate::ArgumentErrorInfo;
    /// let info = ArgumentErrorInfo::new("code", "invalid", "abc");
    /// assert_eq!(info.message, "invalid");
    /// ```
    #[must_use]
    pub fn new(argument: &'static str, message: &'static str, value: impl Into<String>) -> Self {
        Self {
            argument,
            message,
            value: value.into(),
        }
    }
}

impl fmt::Display for ArgumentErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for argument `{}` (got `{}`)",
            self.message, self.argument, self.value
        )
    }
}

/// Errors surfaced while building a pattern.
///
/// Argument errors are raised by the offending builder call. Syntax errors
/// come from the engine at [`build`](crate::PatternBuilder::build) time.
///
/// # Examples
/// ```
/// use regex_mate::{ArgumentErrorInfo, PatternError};
/// let info = ArgumentErrorInfo::new("code", "invalid", "abc");
/// let err = PatternError::InvalidArgument(info.clone());
/// assert_eq!(err.to_string(), info.to_string());
/// ```
#[derive(Debug, Error)]
pub enum PatternError {
    /// A builder call received an argument it cannot encode.
    #[error("{0}")]
    InvalidArgument(ArgumentErrorInfo),
    /// The engine refused the accumulated pattern text.
    #[error("invalid pattern `{pattern}`: {source}")]
    Syntax {
        /// The pattern text handed to the engine.
        pattern: String,
        /// The engine's own error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl PatternError {
    /// Return the argument details when this is an argument error.
    #[must_use]
    pub fn argument_info(&self) -> Option<&ArgumentErrorInfo> {
        match self {
            Self::InvalidArgument(info) => Some(info),
            Self::Syntax { .. } => None,
        }
    }
}

pub(crate) fn invalid_argument(
    argument: &'static str,
    message: &'static str,
    value: impl Into<String>,
) -> PatternError {
    let info = ArgumentErrorInfo::new(argument, message, value);
    log::debug!("rejected builder call: {info}");
    PatternError::InvalidArgument(info)
}

pub(crate) fn syntax_error<E>(pattern: &str, source: E) -> PatternError
where
    E: StdError + Send + Sync + 'static,
{
    PatternError::Syntax {
        pattern: pattern.to_string(),
        source: Box::new(source),
    }
}
