use thiserror::Error;

/// Errors raised while deriving a traversable topology from a skill graph.
///
/// The graph operations themselves never fail; only the derived view does.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("cycle detected involving skill '{0}'")]
    CycleDetected(String),

    #[error("skill '{skill_id}' references unknown parent '{parent_id}'")]
    DanglingParent { skill_id: String, parent_id: String },
}

/// Errors related to configuration decoding.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_display() {
        let err = TopologyError::CycleDetected("a".to_string());
        assert_eq!(err.to_string(), "cycle detected involving skill 'a'");
    }

    #[test]
    fn test_dangling_parent_error_display() {
        let err = TopologyError::DanglingParent {
            skill_id: "b".to_string(),
            parent_id: "ghost".to_string(),
        };
        assert!(err.to_string().contains("'b'"));
        assert!(err.to_string().contains("'ghost'"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse("expected `=`".to_string());
        assert_eq!(err.to_string(), "failed to parse config: expected `=`");
    }
}
