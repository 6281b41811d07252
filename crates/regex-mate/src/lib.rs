//! Fluent construction of regular expressions from named operations.
//!
//! [`PatternBuilder`] accumulates pattern text through chained calls such as
//! [`digit`](PatternBuilder::digit) or [`exactly`](PatternBuilder::exactly)
//! and hands the result to an [`Engine`] when [`build`](PatternBuilder::build)
//! is called. Text is only ever appended; a call that fails validation leaves
//! the pattern untouched.
//!
//! # Examples
//! ```
//! use regex_mate::{Matcher, PatternBuilder};
//!
//! # fn main() -> Result<(), regex_mate::PatternError> {
//! let matcher = PatternBuilder::new()
//!     .begin_line()
//!     .word()
//!     .exactly(5)?
//!     .end_line()
//!     .build()?;
//! assert_eq!(matcher.as_str(), r"^\w{5}$");
//! assert!(matcher.is_match("abcde"));
//! assert!(!matcher.is_match("1234"));
//! # Ok(())
//! # }
//! ```

mod atom;
mod builder;
mod config;
mod engine;
mod errors;
mod options;
#[cfg(test)]
pub(crate) mod test_support;

pub use atom::Atom;
pub use builder::{PatternBuilder, Quantifier, Sanitize};
pub use config::EngineConfig;
pub use engine::{Engine, Matcher, RegexEngine, RegexMatcher};
pub use errors::{ArgumentErrorInfo, PatternError};
pub use options::RegexOptions;
