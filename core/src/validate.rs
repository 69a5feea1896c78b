//! Option table validation.
//!
//! Checks structural problems in an [`OptionRegistry`] that the parser would
//! otherwise silently tolerate: options with no name, names that can never
//! be matched under the active [`ParserConfig`], and duplicate names (only
//! the first registration is reachable through lookup).
//!
//! # Examples
//!
//! ```
//! use optline_core::*;
//!
//! let mut registry = OptionRegistry::new();
//! registry.add(OptionSpec::new("verbose", 'v'));
//! assert!(validate_registry(&registry, &ParserConfig::default()).is_empty());
//!
//! // Invalid: long name contains the assignment separator
//! registry.add(OptionSpec::new("level=2", None));
//! assert!(!validate_registry(&registry, &ParserConfig::default()).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::config::ParserConfig;
use crate::registry::OptionRegistry;
use crate::types::OptionSpec;

/// Registry validation errors.
///
/// Each variant describes one structural problem. The `Display` impl gives
/// a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An option has neither a short nor a long name.
    #[error("option must define a short or long name")]
    MissingOptionName,
    /// Short name is whitespace, a delimiter, or part of the option syntax.
    #[error("invalid short option name: '{0}'")]
    InvalidShortName(char),
    /// Long name contains whitespace or the assignment separator, or starts
    /// with the short prefix.
    #[error("invalid long option name: '{0}'")]
    InvalidLongName(String),
    /// A later option reuses a short name; it can never be matched.
    #[error("duplicate short option: '{0}'")]
    DuplicateShortName(char),
    /// A later option reuses a long name; it can never be matched.
    #[error("duplicate long option: '{0}'")]
    DuplicateLongName(String),
    /// `argument_required` is set but no argument name is given, so the
    /// option takes no argument.
    #[error("option '{0}' requires an argument but has no argument name")]
    RequiredWithoutArgumentName(String),
}

/// Validates every option in `registry` against `config`.
///
/// Every finding is reported, in registry order.
///
/// # Examples
///
/// ```
/// use optline_core::*;
///
/// let registry: OptionRegistry = [
///     OptionSpec::new("file", 'f'),
///     OptionSpec::new("force", 'f'),
/// ]
/// .into_iter()
/// .collect();
///
/// let errors = validate_registry(&registry, &ParserConfig::default());
/// assert_eq!(errors, vec![ValidationError::DuplicateShortName('f')]);
/// ```
pub fn validate_registry(
    registry: &OptionRegistry<'_>,
    config: &ParserConfig,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_short: HashSet<char> = HashSet::new();
    let mut seen_long: HashSet<&str> = HashSet::new();

    for spec in registry.iter() {
        errors.extend(validate_option(spec, config));

        if let Some(short) = spec.short_name {
            if !seen_short.insert(short) {
                errors.push(ValidationError::DuplicateShortName(short));
            }
        }
        if !spec.long_name.is_empty() && !seen_long.insert(spec.long_name.as_str()) {
            errors.push(ValidationError::DuplicateLongName(spec.long_name.clone()));
        }
    }

    if !errors.is_empty() {
        debug!(count = errors.len(), errors = ?errors, "option table has problems");
    }
    errors
}

fn validate_option(spec: &OptionSpec<'_>, config: &ParserConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if spec.short_name.is_none() && spec.long_name.is_empty() {
        errors.push(ValidationError::MissingOptionName);
        return errors;
    }

    if let Some(short) = spec.short_name {
        if !valid_short_name(short, config) {
            errors.push(ValidationError::InvalidShortName(short));
        }
    }

    if !spec.long_name.is_empty() && !valid_long_name(&spec.long_name, config) {
        errors.push(ValidationError::InvalidLongName(spec.long_name.clone()));
    }

    if spec.argument_required && !spec.takes_argument() {
        errors.push(ValidationError::RequiredWithoutArgumentName(spec.name()));
    }

    errors
}

fn valid_short_name(short: char, config: &ParserConfig) -> bool {
    !short.is_whitespace()
        && !short.is_control()
        && !config.delimiters.contains(short)
        && !config.equals.contains(short)
}

fn valid_long_name(long: &str, config: &ParserConfig) -> bool {
    if long.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if long.chars().any(|c| config.delimiters.contains(c)) {
        return false;
    }
    if !config.equals.is_empty() && long.contains(config.equals.as_str()) {
        return false;
    }
    config.short_prefix.is_empty() || !long.starts_with(&config.short_prefix)
}
