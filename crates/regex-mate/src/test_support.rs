//! Stub engine used to test the builder without compiling real patterns.

use std::cell::RefCell;
use std::fmt;

use crate::engine::{Engine, Matcher};
use crate::options::RegexOptions;

#[derive(Debug)]
pub(crate) struct StubError(pub(crate) String);

impl fmt::Display for StubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stub rejected `{}`", self.0)
    }
}

impl std::error::Error for StubError {}

/// Records every compile request and answers matches by substring search.
#[derive(Debug, Default)]
pub(crate) struct StubEngine {
    reject: bool,
    calls: RefCell<Vec<(String, RegexOptions)>>,
}

impl StubEngine {
    pub(crate) fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, RegexOptions)> {
        self.calls.borrow().clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StubMatcher {
    pub(crate) source: String,
    pub(crate) options: RegexOptions,
}

impl Matcher for StubMatcher {
    fn is_match(&self, input: &str) -> bool {
        input.contains(self.source.as_str())
    }

    fn as_str(&self) -> &str {
        &self.source
    }
}

impl Engine for StubEngine {
    type Matcher = StubMatcher;
    type Error = StubError;

    fn compile(&self, source: &str, options: RegexOptions) -> Result<StubMatcher, StubError> {
        self.calls.borrow_mut().push((source.to_string(), options));
        if self.reject {
            return Err(StubError(source.to_string()));
        }
        Ok(StubMatcher {
            source: source.to_string(),
            options,
        })
    }
}
