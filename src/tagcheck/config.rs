use crate::error::{Result, TagCheckError};
use crate::filter::{FileFilter, DEFAULT_EXTENSION};
use crate::registry::TagRegistry;
use crate::walker::VisitOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Scan configuration, optionally read from a JSON file.
///
/// ```json
/// {
///   "extensions": [".dcm", ".ima"],
///   "case_sensitive": false,
///   "sorted": true,
///   "extra_tags": ["(0008,0060)"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TagCheckConfig {
    /// Extensions of candidate files (e.g. ".dcm")
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Match extensions exactly instead of ignoring case
    #[serde(default)]
    pub case_sensitive: bool,

    /// Visit directory entries sorted by name
    #[serde(default = "default_sorted")]
    pub sorted: bool,

    /// Replaces the built-in tag list when set
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Appended after the tag list
    #[serde(default)]
    pub extra_tags: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

fn default_sorted() -> bool {
    true
}

impl Default for TagCheckConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            case_sensitive: false,
            sorted: default_sorted(),
            tags: None,
            extra_tags: Vec::new(),
        }
    }
}

impl TagCheckConfig {
    /// Load config from an explicit path. The file must exist and parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |reason: String| TagCheckError::Config {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let config: TagCheckConfig =
            serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))?;
        if config.extensions.is_empty() {
            return Err(config_error("no file extensions configured".to_string()));
        }
        Ok(config)
    }

    pub fn registry(&self) -> Result<TagRegistry> {
        let base = match &self.tags {
            Some(tags) => TagRegistry::from_entries(tags)?,
            None => TagRegistry::standard()?,
        };
        base.extended(&self.extra_tags)
    }

    pub fn file_filter(&self) -> FileFilter {
        FileFilter::new(&self.extensions, self.case_sensitive)
    }

    pub fn visit_order(&self) -> VisitOrder {
        if self.sorted {
            VisitOrder::Sorted
        } else {
            VisitOrder::Native
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagId;
    use crate::registry::STANDARD_TAGS;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = TagCheckConfig::default();
        assert_eq!(config.extensions, vec![".dcm".to_string()]);
        assert!(!config.case_sensitive);
        assert_eq!(config.visit_order(), VisitOrder::Sorted);
        assert_eq!(config.registry().unwrap().len(), STANDARD_TAGS.len());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tagcheck.json");
        fs::write(&path, r#"{ "sorted": false }"#).unwrap();

        let config = TagCheckConfig::load(&path).unwrap();
        assert_eq!(config.visit_order(), VisitOrder::Native);
        assert_eq!(config.extensions, vec![".dcm".to_string()]);
    }

    #[test]
    fn tags_replace_and_extra_tags_extend() {
        let config = TagCheckConfig {
            tags: Some(vec!["(0010,0010)".to_string()]),
            extra_tags: vec!["(0008,0060)".to_string()],
            ..TagCheckConfig::default()
        };
        let registry = config.registry().unwrap();
        assert_eq!(
            registry.identities(),
            &[TagId::new(0x0010, 0x0010), TagId::new(0x0008, 0x0060)]
        );
    }

    #[test]
    fn malformed_tag_in_config_is_fatal() {
        let config = TagCheckConfig {
            extra_tags: vec!["0008,0060".to_string()],
            ..TagCheckConfig::default()
        };
        assert!(matches!(
            config.registry().unwrap_err(),
            TagCheckError::MalformedIdentity(_)
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let err = TagCheckConfig::load(temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TagCheckError::Config { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{ extensions: ").unwrap();
        assert!(matches!(
            TagCheckConfig::load(&path).unwrap_err(),
            TagCheckError::Config { .. }
        ));
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("none.json");
        fs::write(&path, r#"{ "extensions": [] }"#).unwrap();
        assert!(TagCheckConfig::load(&path).is_err());
    }

    #[test]
    fn file_filter_uses_configured_extensions() {
        let config = TagCheckConfig {
            extensions: vec!["ima".to_string()],
            case_sensitive: true,
            ..TagCheckConfig::default()
        };
        let filter = config.file_filter();
        assert!(filter.matches(Path::new("x.ima")));
        assert!(!filter.matches(Path::new("x.IMA")));
        assert!(!filter.matches(Path::new("x.dcm")));
    }
}
