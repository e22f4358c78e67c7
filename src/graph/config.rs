//! Shortest-path configuration
//!
//! This module provides the options shared by the weighted traversals,
//! [`ShortestPathFaster`](crate::graph::ShortestPathFaster) and
//! [`BellmanFord`](crate::graph::BellmanFord).

/// Configuration for weighted shortest-path traversals
///
/// The defaults detect negative cycles in both algorithms and let Bellman-Ford
/// stop as soon as a pass changes nothing. Neither option changes the computed
/// distances on graphs without a reachable negative cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathConfig {
    /// Track the edge count of each tentative shortest path in SPFA
    /// A path reaching `|V|` edges proves a negative cycle and fails the traversal.
    /// When disabled, SPFA does not terminate on a reachable negative cycle
    /// unless `max_relaxations` is set.
    pub detect_negative_cycles: bool,

    /// Stop Bellman-Ford relaxation passes after a pass without updates
    pub early_termination: bool,

    /// Maximum number of successful relaxations before giving up (default: unlimited)
    pub max_relaxations: Option<usize>,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ShortestPathConfig {
    /// Creates the default configuration
    ///
    /// Negative cycles are detected and Bellman-Ford exits early.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            detect_negative_cycles: true,
            early_termination: true,
            max_relaxations: None,
        }
    }

    /// Creates a configuration mirroring the textbook algorithms
    ///
    /// SPFA runs without cycle detection and Bellman-Ford always performs
    /// `|V| - 1` full passes.
    /// **Warning**: SPFA loops forever on a reachable negative cycle in this mode.
    /// Pair it with [`with_max_relaxations`](Self::with_max_relaxations) for untrusted input.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            detect_negative_cycles: false,
            early_termination: false,
            max_relaxations: None,
        }
    }

    /// Returns a copy of this configuration with a relaxation budget
    #[must_use]
    pub fn with_max_relaxations(mut self, limit: usize) -> Self {
        self.max_relaxations = Some(limit);
        self
    }

    /// Checks the configuration for values that cannot produce a result
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `max_relaxations` is `Some(0)`.
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_relaxations == Some(0) {
            return Err(invalid_argument!("max_relaxations must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_shortest_path_config_presets() {
        let strict = ShortestPathConfig::strict();
        assert!(strict.detect_negative_cycles);
        assert!(strict.early_termination);
        assert_eq!(strict.max_relaxations, None);

        let classic = ShortestPathConfig::classic();
        assert!(!classic.detect_negative_cycles);
        assert!(!classic.early_termination);
        assert_eq!(classic.max_relaxations, None);

        let capped = ShortestPathConfig::classic().with_max_relaxations(500);
        assert_eq!(capped.max_relaxations, Some(500));
    }

    #[test]
    fn test_default_config() {
        assert_eq!(ShortestPathConfig::default(), ShortestPathConfig::strict());
    }

    #[test]
    fn test_validate() {
        assert!(ShortestPathConfig::default().validate().is_ok());
        assert!(ShortestPathConfig::default()
            .with_max_relaxations(1)
            .validate()
            .is_ok());
        assert!(matches!(
            ShortestPathConfig::default().with_max_relaxations(0).validate(),
            Err(Error::InvalidArgument { .. })
        ));
    }
}
