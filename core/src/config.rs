//! Parser syntax configuration.
//!
//! Every syntactic marker the tokenizer recognizes is configurable. The
//! defaults follow GNU conventions:
//!
//! | Setting          | Default        |
//! |------------------|----------------|
//! | short prefix     | `-`            |
//! | long prefix      | `--`           |
//! | assignment       | `=`            |
//! | end of options   | `--`           |
//! | delimiters       | space, tab, CR, LF |
//! | quotes           | `"` and `'`    |
//! | escape           | `\`            |
//!
//! # Example YAML
//!
//! ```yaml
//! short_prefix: "/"
//! long_prefix: "//"
//! equals: ":"
//! ```

use serde::{Deserialize, Serialize};

/// Syntax markers used when splitting and classifying arguments.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use optline_core::ParserConfig;
///
/// let config = ParserConfig::default().with_custom_strings("", "+", "", "", ":");
/// assert_eq!(config.short_prefix, "+");
/// assert_eq!(config.long_prefix, "--");
/// assert_eq!(config.equals, ":");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Prefix introducing a cluster of short options.
    pub short_prefix: String,
    /// Prefix introducing a long option.
    pub long_prefix: String,
    /// Separator between an option and an attached argument.
    pub equals: String,
    /// Token after which everything is positional.
    pub end_indicator: String,
    /// Characters separating tokens in a command-line string.
    pub delimiters: String,
    /// Characters that open and close a quoted section.
    pub quotes: String,
    /// Character that makes the next character literal.
    pub escape: Option<char>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            short_prefix: "-".to_string(),
            long_prefix: "--".to_string(),
            equals: "=".to_string(),
            end_indicator: "--".to_string(),
            delimiters: " \t\r\n".to_string(),
            quotes: "\"'".to_string(),
            escape: Some('\\'),
        }
    }
}

impl ParserConfig {
    /// Overrides syntax strings; an empty argument keeps the current value.
    pub fn with_custom_strings(
        mut self,
        delimiters: &str,
        short_prefix: &str,
        long_prefix: &str,
        end_indicator: &str,
        equals: &str,
    ) -> Self {
        let overrides = [
            (&mut self.delimiters, delimiters),
            (&mut self.short_prefix, short_prefix),
            (&mut self.long_prefix, long_prefix),
            (&mut self.end_indicator, end_indicator),
            (&mut self.equals, equals),
        ];
        for (field, value) in overrides {
            if !value.is_empty() {
                *field = value.to_string();
            }
        }
        self
    }

    pub fn is_end_indicator(&self, token: &str) -> bool {
        token == self.end_indicator
    }

    /// Returns `true` for `--name` style specifiers.
    pub fn is_long_option(&self, specifier: &str) -> bool {
        !self.long_prefix.is_empty()
            && specifier.len() > self.long_prefix.len()
            && specifier.starts_with(&self.long_prefix)
    }

    /// Returns `true` for `-abc` style specifiers that are not long options.
    pub fn is_short_cluster(&self, specifier: &str) -> bool {
        !self.short_prefix.is_empty()
            && specifier.len() > self.short_prefix.len()
            && specifier.starts_with(&self.short_prefix)
            && !self.is_long_option(specifier)
    }

    /// Splits `token` at the first assignment separator.
    pub fn split_assignment<'a>(&self, token: &'a str) -> (&'a str, Option<&'a str>) {
        if self.equals.is_empty() {
            return (token, None);
        }
        match token.split_once(self.equals.as_str()) {
            Some((specifier, argument)) => (specifier, Some(argument)),
            None => (token, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_strings_keep_defaults_for_empty_values() {
        let config = ParserConfig::default().with_custom_strings("", "", "", "", "");
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_custom_strings_override() {
        let config = ParserConfig::default().with_custom_strings(",", "/", "//", "///", ":");
        assert_eq!(config.delimiters, ",");
        assert_eq!(config.short_prefix, "/");
        assert_eq!(config.long_prefix, "//");
        assert_eq!(config.end_indicator, "///");
        assert_eq!(config.equals, ":");
    }

    #[test]
    fn test_split_assignment_uses_first_separator() {
        let config = ParserConfig::default();
        assert_eq!(config.split_assignment("--a=b=c"), ("--a", Some("b=c")));
        assert_eq!(config.split_assignment("--a="), ("--a", Some("")));
        assert_eq!(config.split_assignment("--a"), ("--a", None));
    }

    #[test]
    fn test_prefix_classification() {
        let config = ParserConfig::default();
        assert!(config.is_long_option("--all"));
        assert!(!config.is_long_option("--"));
        assert!(config.is_short_cluster("-al"));
        assert!(!config.is_short_cluster("--all"));
        assert!(!config.is_short_cluster("-"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ParserConfig = serde_json::from_str(r#"{"equals": ":"}"#).unwrap();
        assert_eq!(config.equals, ":");
        assert_eq!(config.short_prefix, "-");
        assert_eq!(config.escape, Some('\\'));
    }
}
