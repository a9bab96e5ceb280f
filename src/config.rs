//! Search configuration.

use crate::error::SolveError;

/// Knobs for one search. The default is an unbounded search with the blank
/// counted in the heuristic and an up-front solvability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Ceiling on nodes created, root included. `None` is unbounded.
    pub max_nodes: Option<usize>,
    /// Include the blank's own distance in the Manhattan sum.
    pub count_blank: bool,
    /// Reject parity-unsolvable instances before searching.
    pub check_solvability: bool,
}

impl SearchConfig {
    pub fn with_max_nodes(mut self, limit: usize) -> Self {
        self.max_nodes = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<(), SolveError> {
        if self.max_nodes == Some(0) {
            return Err(SolveError::InvalidConfig(
                "max_nodes must allow at least the root node".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes: None,
            count_blank: true,
            check_solvability: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchConfig::default().with_max_nodes(1).validate().is_ok());
    }

    #[test]
    fn zero_budget_rejected() {
        let err = SearchConfig::default().with_max_nodes(0).validate().unwrap_err();
        assert!(
            matches!(err, SolveError::InvalidConfig(_)),
            "expected InvalidConfig, got {err:?}"
        );
    }
}
