// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML-backed configuration adapters.
//!
//! [`YamlConfiguration`] exposes a YAML document as a hierarchical
//! [`Configuration`]; [`YamlSectionSource`] treats each top-level key of a
//! YAML document as a named section.

use crate::domain::{Result, TransactClientConfigurationSection, TransactError};
use crate::ports::{Configuration, ConfigurationSectionSource};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML configuration files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Separator between path segments of flattened keys.
pub const PATH_SEPARATOR: char = ':';

/// Flattens a YAML value into colon-separated paths.
fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, result: &mut HashMap<String, String>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{}{}{}", prefix, PATH_SEPARATOR, segment)
        }
    };

    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, val) in map {
                let segment = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    _ => continue,
                };
                flatten_yaml(val, &join(&segment), result);
            }
        }
        serde_yaml::Value::Sequence(seq) => {
            for (i, val) in seq.iter().enumerate() {
                flatten_yaml(val, &join(&i.to_string()), result);
            }
        }
        serde_yaml::Value::String(s) => {
            result.insert(prefix.to_string(), s.clone());
        }
        serde_yaml::Value::Number(n) => {
            result.insert(prefix.to_string(), n.to_string());
        }
        serde_yaml::Value::Bool(b) => {
            result.insert(prefix.to_string(), b.to_string());
        }
        serde_yaml::Value::Null => {
            result.insert(prefix.to_string(), String::new());
        }
        serde_yaml::Value::Tagged(tagged) => {
            flatten_yaml(&tagged.value, prefix, result);
        }
    }
}

/// Renders numeric and boolean fields of a section as strings.
///
/// Credential fields are strings in the section schema, but YAML reads an
/// unquoted `12345` as a number. `podNumber` keeps its typed value.
fn stringify_scalars(section: &serde_yaml::Value) -> serde_yaml::Value {
    let serde_yaml::Value::Mapping(map) = section else {
        return section.clone();
    };

    let fields = map
        .iter()
        .map(|(key, value)| {
            let value = match value {
                _ if key.as_str() == Some("podNumber") => value.clone(),
                serde_yaml::Value::Number(n) => serde_yaml::Value::String(n.to_string()),
                serde_yaml::Value::Bool(b) => serde_yaml::Value::String(b.to_string()),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect();

    serde_yaml::Value::Mapping(fields)
}

fn parse_document(content: &str) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(content).map_err(|e| TransactError::ParseError {
        message: format!("Failed to parse YAML: {}", e),
        source: Some(Box::new(e)),
    })
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

/// Reads a configuration file, refusing files over the size limit.
fn read_config_file(path: &Path) -> Result<(PathBuf, String)> {
    let canonical_path = path.canonicalize().map_err(|e| TransactError::SourceError {
        source_name: "yaml-file".to_string(),
        message: format!("Invalid or inaccessible path: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    let metadata = fs::metadata(&canonical_path).map_err(|e| TransactError::SourceError {
        source_name: "yaml-file".to_string(),
        message: format!(
            "Failed to read file metadata: {}",
            display_name(&canonical_path)
        ),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(TransactError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    let content = fs::read_to_string(&canonical_path)?;

    tracing::debug!("Read configuration file {}", canonical_path.display());

    Ok((canonical_path, content))
}

/// Hierarchical configuration backed by a YAML document.
///
/// Nested mappings are addressed with `:`-separated paths and sequence items
/// by their index. Null leaves read as empty strings. Paths are matched
/// case-insensitively, so `PodNumber` and `podNumber` name the same key.
///
/// # Examples
///
/// ```rust
/// use transact_client::adapters::YamlConfiguration;
/// use transact_client::ports::Configuration;
///
/// let yaml = "silverpop-dotnet-api:\n  podNumber: 5\n  username: alice\n";
/// let config = YamlConfiguration::from_str(yaml).unwrap();
/// assert_eq!(config.get("silverpop-dotnet-api:podNumber").as_deref(), Some("5"));
/// ```
#[derive(Debug, Clone)]
pub struct YamlConfiguration {
    /// Path to the YAML file, when loaded from disk
    file_path: Option<PathBuf>,
    /// Flattened values
    values: HashMap<String, String>,
}

impl YamlConfiguration {
    /// Parses a YAML document.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let document = parse_document(content)?;
        let mut values = HashMap::new();
        flatten_yaml(&document, "", &mut values);
        let values = values
            .into_iter()
            .map(|(path, value)| (path.to_lowercase(), value))
            .collect();

        Ok(Self {
            file_path: None,
            values,
        })
    }

    /// Loads a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (file_path, content) = read_config_file(path.as_ref())?;
        let mut config = Self::from_str(&content)?;
        config.file_path = Some(file_path);
        Ok(config)
    }

    /// Loads `config.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| TransactError::SourceError {
                source_name: "yaml-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Returns the path of the loaded file, if the document came from disk.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl Configuration for YamlConfiguration {
    fn get(&self, path: &str) -> Option<String> {
        self.values.get(&path.to_lowercase()).cloned()
    }
}

/// Named configuration sections backed by a YAML document.
///
/// Each top-level key names a section. Sections are deserialized on lookup;
/// a section that does not match the expected schema is reported as absent.
///
/// # Examples
///
/// ```rust
/// use transact_client::adapters::YamlSectionSource;
/// use transact_client::ports::ConfigurationSectionSource;
///
/// let yaml = "transactClientConfiguration:\n  podNumber: 1\n  username: alice\n";
/// let sections = YamlSectionSource::from_str(yaml).unwrap();
/// let section = sections.get_section("transactClientConfiguration").unwrap();
/// assert_eq!(section.pod_number, 1);
/// ```
#[derive(Debug, Clone)]
pub struct YamlSectionSource {
    sections: serde_yaml::Mapping,
}

impl YamlSectionSource {
    /// Parses a YAML document whose top level is a mapping of sections.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let sections = match parse_document(content)? {
            serde_yaml::Value::Mapping(map) => map,
            serde_yaml::Value::Null => serde_yaml::Mapping::new(),
            _ => {
                return Err(TransactError::ParseError {
                    message: "Expected a mapping of configuration sections".to_string(),
                    source: None,
                })
            }
        };

        Ok(Self { sections })
    }

    /// Loads a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (_, content) = read_config_file(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Returns the names of the defined sections.
    pub fn section_names(&self) -> Vec<String> {
        self.sections
            .keys()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect()
    }
}

impl ConfigurationSectionSource for YamlSectionSource {
    fn get_section(&self, name: &str) -> Option<TransactClientConfigurationSection> {
        let value = self.sections.get(name)?;
        if value.is_null() {
            return Some(TransactClientConfigurationSection::default());
        }

        match serde_yaml::from_value(stringify_scalars(value)) {
            Ok(section) => Some(section),
            Err(e) => {
                tracing::debug!("Section '{}' does not match the expected schema: {}", name, e);
                None
            }
        }
    }
}
