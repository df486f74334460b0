//! Focus configuration

use serde::Deserialize;

use crate::A11yError;

/// Options for [`FocusSetter`](crate::FocusSetter)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Apply focus on a later event-loop turn instead of inline.
    /// Hosts that redraw focus rings eagerly need the deferral.
    pub defer_focus: bool,

    /// Put the caller's text selection back after moving focus
    pub restore_selection: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            defer_focus: true,
            restore_selection: true,
        }
    }
}

impl FocusConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, A11yError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_defer_focus(mut self, defer: bool) -> Self {
        self.defer_focus = defer;
        self
    }

    pub fn with_restore_selection(mut self, restore: bool) -> Self {
        self.restore_selection = restore;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FocusConfig::default();
        assert!(config.defer_focus);
        assert!(config.restore_selection);
    }

    #[test]
    fn test_partial_json() {
        let config = FocusConfig::from_json(r#"{ "defer_focus": false }"#).unwrap();
        assert_eq!(config, FocusConfig::default().with_defer_focus(false));

        let config = FocusConfig::from_json("{}").unwrap();
        assert_eq!(config, FocusConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = FocusConfig::from_json(r#"{ "defer_focus": "yes" }"#).unwrap_err();
        assert!(matches!(err, A11yError::Config(_)));
        assert!(FocusConfig::from_json("not json").is_err());
    }
}
