use serde::{Deserialize, Serialize};

/// nbstrip configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NbStripConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Remove prompt numbers even without `--strip-prompt`
    #[serde(default)]
    pub strip_prompt: bool,
    /// Spaces per indentation level in written notebooks
    #[serde(default = "default_indent")]
    pub indent: usize,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_indent() -> usize {
    1
}

impl Default for NbStripConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            strip_prompt: false,
            indent: default_indent(),
        }
    }
}

/// Partial configuration read from a project file.
///
/// Every key that appears in the file replaces the value underneath it, even
/// when it equals the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NbStripConfigOverlay {
    pub log_level: Option<String>,
    pub strip_prompt: Option<bool>,
    pub indent: Option<usize>,
}

impl NbStripConfig {
    /// Overlay a project configuration on top of this one.
    pub fn merge(&mut self, project: NbStripConfigOverlay) {
        if let Some(log_level) = project.log_level {
            self.log_level = log_level;
        }
        if let Some(strip_prompt) = project.strip_prompt {
            self.strip_prompt = strip_prompt;
        }
        if let Some(indent) = project.indent {
            self.indent = indent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = NbStripConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: NbStripConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: NbStripConfig = toml::from_str("strip_prompt = true").unwrap();
        assert!(config.strip_prompt);
        assert_eq!(config.indent, 1);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_empty_config() {
        let config: NbStripConfig = toml::from_str("").unwrap();
        assert_eq!(config, NbStripConfig::default());
    }

    #[test]
    fn test_merge_project_over_global() {
        let mut global = NbStripConfig {
            log_level: "info".to_string(),
            strip_prompt: false,
            indent: 2,
        };
        let project: NbStripConfigOverlay = toml::from_str("strip_prompt = true").unwrap();
        global.merge(project);

        assert_eq!(global.log_level, "info");
        assert!(global.strip_prompt);
        assert_eq!(global.indent, 2);
    }

    #[test]
    fn test_merge_resets_values_to_defaults() {
        let mut global = NbStripConfig {
            log_level: "info".to_string(),
            strip_prompt: true,
            indent: 2,
        };
        let project: NbStripConfigOverlay =
            toml::from_str("log_level = \"warn\"\nstrip_prompt = false\nindent = 1").unwrap();
        global.merge(project);

        assert_eq!(global, NbStripConfig::default());
    }

    #[test]
    fn test_empty_overlay_changes_nothing() {
        let mut config = NbStripConfig {
            log_level: "debug".to_string(),
            strip_prompt: true,
            indent: 4,
        };
        let before = config.clone();
        let project: NbStripConfigOverlay = toml::from_str("").unwrap();
        config.merge(project);

        assert_eq!(config, before);
    }
}
