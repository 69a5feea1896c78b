//! Parse results.
//!
//! A [`ParserResult`] is the ordered record of one parse: an entry per
//! recognized option occurrence or non-option token, the positional
//! arguments, and the program name when it was skipped.

use std::ops::Index;

use serde::Serialize;

use crate::error::IndexOutOfRange;
use crate::types::{ArgValue, OptionSpec};

/// One classified command-line token.
///
/// For options, `original_text` is the text that produced the entry: the
/// whole token for long options (`--color=red`), the prefix plus the option
/// character for cluster members (`-e` out of `-ep`), and the option and
/// argument joined by a space when the argument came from the next token
/// (`--pattern foo`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedEntry<'r> {
    pub original_text: String,
    /// `original_text` without any attached or following argument
    pub original_without_argument: String,
    pub is_option: bool,
    /// Long name of the matched option (empty if none)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub long_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<char>,
    /// Raw argument text (empty if none)
    pub argument: String,
    /// Converted argument, when one was bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ArgValue>,
    /// Descriptor this entry was matched against; `None` for non-options
    #[serde(skip)]
    pub option: Option<&'r OptionSpec<'r>>,
}

impl<'r> ParsedEntry<'r> {
    /// Creates an entry for a token that is not an option.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::ParsedEntry;
    ///
    /// let entry = ParsedEntry::non_option("file.txt");
    /// assert!(!entry.is_option);
    /// assert_eq!(entry.original_text, "file.txt");
    /// assert!(entry.option.is_none());
    /// ```
    pub fn non_option(text: &str) -> Self {
        Self {
            original_text: text.to_string(),
            original_without_argument: text.to_string(),
            ..Default::default()
        }
    }

    /// Creates an option entry matched against `spec`, without argument.
    pub fn option(original_text: &str, spec: &'r OptionSpec<'r>) -> Self {
        Self {
            original_text: original_text.to_string(),
            original_without_argument: original_text.to_string(),
            is_option: true,
            long_name: spec.long_name.clone(),
            short_name: spec.short_name,
            option: Some(spec),
            ..Default::default()
        }
    }

    /// Attaches an argument. `original_text` is left unchanged.
    pub fn with_argument(mut self, argument: &str, value: Option<ArgValue>) -> Self {
        self.argument = argument.to_string();
        self.value = value;
        self
    }

    /// Returns `true` if the entry carries a non-empty argument.
    pub fn has_argument(&self) -> bool {
        !self.argument.is_empty()
    }
}

// Descriptors compare by identity, the rest by value.
impl PartialEq for ParsedEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        let same_option = match (self.option, other.option) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_option
            && self.original_text == other.original_text
            && self.original_without_argument == other.original_without_argument
            && self.is_option == other.is_option
            && self.long_name == other.long_name
            && self.short_name == other.short_name
            && self.argument == other.argument
            && self.value == other.value
    }
}

/// Ordered result of a parse.
///
/// Entries appear in left-to-right scan order. Lookups return the first
/// matching entry, or `None` when there is none.
///
/// # Examples
///
/// ```
/// use optline_core::{OptionRegistry, OptionSpec, Parser};
///
/// let mut registry = OptionRegistry::new();
/// registry.add(OptionSpec::new("all", 'a'));
/// registry.add(OptionSpec::new("width", 'w').with_argument("COLS", true));
///
/// let result = Parser::default()
///     .parse_args(&registry, ["ls", "-a", "--width", "80", "src"], true)
///     .unwrap();
///
/// assert_eq!(result.program(), Some("ls"));
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.find_long("width").unwrap().argument, "80");
/// assert!(result.contains_short('a'));
/// assert_eq!(result.positional(), ["src"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParserResult<'r> {
    #[serde(skip_serializing_if = "Option::is_none")]
    program: Option<String>,
    entries: Vec<ParsedEntry<'r>>,
    positional: Vec<String>,
}

impl<'r> ParserResult<'r> {
    pub fn new() -> Self {
        Self {
            program: None,
            entries: Vec::new(),
            positional: Vec::new(),
        }
    }

    /// Appends an entry.
    ///
    /// Option entries must carry the descriptor they matched.
    pub fn push(&mut self, entry: ParsedEntry<'r>) {
        debug_assert!(
            !entry.is_option || entry.option.is_some(),
            "option entry '{}' has no descriptor",
            entry.original_text
        );
        self.entries.push(entry);
    }

    /// Appends a positional argument.
    pub fn push_positional(&mut self, argument: &str) {
        self.positional.push(argument.to_string());
    }

    pub(crate) fn set_program(&mut self, program: &str) {
        self.program = Some(program.to_string());
    }

    /// Number of entries, options and non-options alike.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedEntry<'r>> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ParsedEntry<'r>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ParsedEntry<'r>> {
        self.entries.get(index)
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&ParsedEntry<'r>, IndexOutOfRange> {
        self.entries.get(index).ok_or(IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Iterates option entries only.
    pub fn options(&self) -> impl Iterator<Item = &ParsedEntry<'r>> {
        self.entries.iter().filter(|e| e.is_option)
    }

    /// Returns `true` if any option was recognized.
    pub fn has_options(&self) -> bool {
        self.entries.iter().any(|e| e.is_option)
    }

    /// First option entry with the given long name.
    pub fn find_long(&self, long_name: &str) -> Option<&ParsedEntry<'r>> {
        if long_name.is_empty() {
            return None;
        }
        self.options().find(|e| e.long_name == long_name)
    }

    /// First option entry with the given short name.
    pub fn find_short(&self, short_name: char) -> Option<&ParsedEntry<'r>> {
        self.options().find(|e| e.short_name == Some(short_name))
    }

    pub fn contains_long(&self, long_name: &str) -> bool {
        self.find_long(long_name).is_some()
    }

    pub fn contains_short(&self, short_name: char) -> bool {
        self.find_short(short_name).is_some()
    }

    /// Arguments that were not consumed as options or option arguments,
    /// in input order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Program name, when the first argument was skipped.
    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// Removes all entries, positional arguments and the program name.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positional.clear();
        self.program = None;
    }
}

impl<'r> Index<usize> for ParserResult<'r> {
    type Output = ParsedEntry<'r>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a, 'r> IntoIterator for &'a ParserResult<'r> {
    type Item = &'a ParsedEntry<'r>;
    type IntoIter = std::slice::Iter<'a, ParsedEntry<'r>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'r> FromIterator<ParsedEntry<'r>> for ParserResult<'r> {
    fn from_iter<I: IntoIterator<Item = ParsedEntry<'r>>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<'r> Extend<ParsedEntry<'r>> for ParserResult<'r> {
    fn extend<I: IntoIterator<Item = ParsedEntry<'r>>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}
