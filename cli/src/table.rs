//! Option table files.
//!
//! A table file is JSON or YAML (chosen by extension) with an optional
//! `config` section for syntax markers, an optional `layout` section for
//! help output, and the list of `options`:
//!
//! ```yaml
//! config:
//!   equals: ":"
//! options:
//!   - short_name: v
//!     long_name: verbose
//!     description: verbose mode
//!   - long_name: level
//!     argument_name: N
//!     argument_required: true
//!     argument_type: uint
//! ```

use std::fs;
use std::path::Path;

use optline_core::{HelpLayout, OptionRegistry, OptionSpec, Parser, ParserConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serialization format of a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
}

impl TableFormat {
    /// `.yaml` and `.yml` files are YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Contents of an option table file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionTable {
    #[serde(default)]
    pub config: ParserConfig,
    #[serde(default)]
    pub layout: HelpLayout,
    #[serde(default)]
    pub options: Vec<OptionSpec<'static>>,
}

impl OptionTable {
    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
        let table = Self::from_text(&raw, TableFormat::from_path(path))
            .map_err(|err| format!("Invalid option table '{}': {err}", path.display()))?;
        debug!(
            path = %path.display(),
            options = table.options.len(),
            "loaded option table"
        );
        Ok(table)
    }

    pub fn from_text(raw: &str, format: TableFormat) -> Result<Self, String> {
        match format {
            TableFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
            TableFormat::Yaml => serde_yaml::from_str(raw).map_err(|e| e.to_string()),
        }
    }

    /// Builds a registry from the table's options, in file order.
    pub fn registry(&self) -> OptionRegistry<'static> {
        self.options.iter().cloned().collect()
    }

    pub fn parser(&self) -> Parser {
        Parser::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use optline_core::ArgType;

    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(TableFormat::from_path(Path::new("t.yaml")), TableFormat::Yaml);
        assert_eq!(TableFormat::from_path(Path::new("t.YML")), TableFormat::Yaml);
        assert_eq!(TableFormat::from_path(Path::new("t.json")), TableFormat::Json);
        assert_eq!(TableFormat::from_path(Path::new("table")), TableFormat::Json);
    }

    #[test]
    fn test_yaml_table_with_defaults() {
        let raw = r#"
options:
  - short_name: v
    long_name: verbose
    description: verbose mode
  - long_name: level
    argument_name: N
    argument_required: true
    argument_type: uint
    group: Tuning
"#;
        let table = OptionTable::from_text(raw, TableFormat::Yaml).unwrap();
        assert_eq!(table.config, ParserConfig::default());
        assert_eq!(table.layout, HelpLayout::default());

        let registry = table.registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.groups().len(), 2);
        let level = registry.find_long("level").unwrap();
        assert_eq!(level.argument_type, ArgType::Uint);
        assert!(level.argument_required);
        assert_eq!(registry.find_short('v').unwrap().long_name, "verbose");
    }

    #[test]
    fn test_json_table_with_config() {
        let raw = r#"{
            "config": { "short_prefix": "/", "long_prefix": "//" },
            "layout": { "max_line_length": 60 },
            "options": [ { "short_name": "q", "long_name": "quiet" } ]
        }"#;
        let table = OptionTable::from_text(raw, TableFormat::Json).unwrap();
        assert_eq!(table.config.short_prefix, "/");
        assert_eq!(table.config.equals, "=");
        assert_eq!(table.layout.max_line_length, 60);
        assert_eq!(table.layout.description_column, 30);

        let registry = table.registry();
        let result = table
            .parser()
            .parse_args(&registry, ["/q", "-q"], false)
            .unwrap();
        assert!(result.contains_long("quiet"));
        assert_eq!(result.positional(), ["-q"]);
    }

    #[test]
    fn test_malformed_table_is_rejected() {
        let err = OptionTable::from_text(r#"{"options": 3}"#, TableFormat::Json).unwrap_err();
        assert!(!err.is_empty());
    }
}
