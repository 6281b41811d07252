//! Resource limits for the default regex engine.
//!
//! Every limit is optional; an unset limit leaves the `regex` crate's own
//! default in place.

/// Limits applied when [`RegexEngine`](crate::RegexEngine) compiles a pattern.
///
/// # Examples
/// ```
/// use regex_mate::EngineConfig;
///
/// let config = EngineConfig::default().with_size_limit(1 << 20);
/// assert_eq!(config.size_limit, Some(1 << 20));
/// assert_eq!(config.nest_limit, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Approximate upper bound, in bytes, on the compiled program.
    pub size_limit: Option<usize>,
    /// Approximate upper bound, in bytes, on the lazy DFA cache.
    pub dfa_size_limit: Option<usize>,
    /// Maximum nesting depth of the parsed pattern.
    pub nest_limit: Option<u32>,
}

impl EngineConfig {
    /// Set the compiled program size limit.
    #[must_use]
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Set the lazy DFA cache size limit.
    #[must_use]
    pub fn with_dfa_size_limit(mut self, bytes: usize) -> Self {
        self.dfa_size_limit = Some(bytes);
        self
    }

    /// Set the nesting depth limit.
    #[must_use]
    pub fn with_nest_limit(mut self, depth: u32) -> Self {
        self.nest_limit = Some(depth);
        self
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// Fields set in `overrides` replace the corresponding fields of `self`;
    /// unset fields keep their current values.
    #[must_use]
    pub fn apply_overrides(self, overrides: Self) -> Self {
        Self {
            size_limit: overrides.size_limit.or(self.size_limit),
            dfa_size_limit: overrides.dfa_size_limit.or(self.dfa_size_limit),
            nest_limit: overrides.nest_limit.or(self.nest_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_leaves_every_limit_unset() {
        let config = EngineConfig::default();
        assert_eq!(config.size_limit, None);
        assert_eq!(config.dfa_size_limit, None);
        assert_eq!(config.nest_limit, None);
    }

    #[test]
    fn builder_methods_set_limits() {
        let config = EngineConfig::default()
            .with_size_limit(10)
            .with_dfa_size_limit(20)
            .with_nest_limit(3);
        assert_eq!(config.size_limit, Some(10));
        assert_eq!(config.dfa_size_limit, Some(20));
        assert_eq!(config.nest_limit, Some(3));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let base = EngineConfig::default().with_size_limit(10).with_nest_limit(3);
        let config = base.apply_overrides(EngineConfig::default().with_nest_limit(7));
        assert_eq!(config.size_limit, Some(10));
        assert_eq!(config.nest_limit, Some(7));

        let config = base.apply_overrides(EngineConfig::default());
        assert_eq!(config, base);
    }
}
