use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::export::OfflineManifest;
use crate::reference::ReferenceLists;

/// Rows added by one press of a table's append control
pub const DEFAULT_ROWS_PER_APPEND: usize = 5;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Rows added per append action
    pub rows_per_append: usize,
    /// Header label to autocomplete candidates
    pub reference_lists: ReferenceLists,
    /// Assets the host caches for offline viewing
    pub offline: OfflineManifest,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows_per_append: DEFAULT_ROWS_PER_APPEND,
            reference_lists: ReferenceLists::builtin(),
            offline: OfflineManifest::default(),
        }
    }
}

impl EditorConfig {
    /// Load configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows_per_append == 0 {
            tracing::warn!("rows_per_append must be at least 1");
            return Err(TableError::InvalidConfig(
                "rows_per_append must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.rows_per_append, 5);
        assert_eq!(config.reference_lists, ReferenceLists::builtin());
        assert_eq!(config.offline.cache_name, "aircraft-table-v1");
    }

    #[test]
    fn test_from_json_partial() {
        let config = EditorConfig::from_json(r#"{"rows_per_append": 10}"#).unwrap();
        assert_eq!(config.rows_per_append, 10);
        assert_eq!(config.reference_lists, ReferenceLists::builtin());
    }

    #[test]
    fn test_from_json_custom_lists() {
        let json = r#"{"reference_lists": {"SVC": ["ATC100"]}}"#;
        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.reference_lists.len(), 1);
        assert_eq!(config.reference_lists.for_header("SVC"), ["ATC100"]);
    }

    #[test]
    fn test_from_json_rejects_zero_rows() {
        let err = EditorConfig::from_json(r#"{"rows_per_append": 0}"#).unwrap_err();
        assert_eq!(err.code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = EditorConfig::from_json("{").unwrap_err();
        assert!(matches!(err, TableError::Json(_)));
    }
}
