//! Option registry: the ordered, grouped table of recognized options.
//!
//! Options are stored in groups (by their `group` label) in the order they
//! are added. Lookups scan groups and options in that order and return the
//! first match, so when two options share a name the first registration
//! wins. [`validate_registry`](crate::validate_registry) reports such
//! duplicates.

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::types::OptionSpec;
use crate::validate::{ValidationError, validate_registry};

/// A named group of options, shown together in help output.
///
/// # Examples
///
/// ```
/// use optline_core::{OptionGroup, OptionSpec};
///
/// let mut group = OptionGroup::new("Output control");
/// group.add(OptionSpec::new("color", None).with_argument("WHEN", false));
/// assert_eq!(group.len(), 1);
/// assert_eq!(group.options[0].group, "Output control");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionGroup<'t> {
    /// Group label (empty for the default group)
    pub name: String,
    /// Options in insertion order
    pub options: Vec<OptionSpec<'t>>,
}

impl<'t> OptionGroup<'t> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: Vec::new(),
        }
    }

    /// Adds an option to this group, relabelling it with the group name.
    pub fn add(&mut self, mut spec: OptionSpec<'t>) -> &mut OptionSpec<'t> {
        spec.group = self.name.clone();
        self.options.push(spec);
        let last = self.options.len() - 1;
        &mut self.options[last]
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec<'t>> {
        self.options.iter()
    }

    pub fn find_long(&self, long_name: &str) -> Option<&OptionSpec<'t>> {
        if long_name.is_empty() {
            return None;
        }
        self.options.iter().find(|o| o.long_name == long_name)
    }

    pub fn find_short(&self, short_name: char) -> Option<&OptionSpec<'t>> {
        self.options
            .iter()
            .find(|o| o.short_name == Some(short_name))
    }

    /// Sorts options by name, short-only options by their character.
    pub fn sort(&mut self) {
        self.options.sort_by_key(|o| o.name());
    }
}

/// Ordered collection of option groups.
///
/// The registry is a plain value owned by the caller and passed to each
/// parse call. The lifetime `'t` bounds any caller-owned
/// [`Slot`](crate::Slot)s that options write to.
///
/// # Examples
///
/// ```
/// use optline_core::{OptionRegistry, OptionSpec};
///
/// let mut registry = OptionRegistry::new();
/// registry.add(OptionSpec::new("all", 'a').with_description("list all files"));
/// registry.add(OptionSpec::new("color", None).with_argument("WHEN", false).with_group("Output"));
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.groups().len(), 2);
/// assert_eq!(registry.find_short('a').unwrap().long_name, "all");
/// assert!(registry.find_long("colour").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry<'t> {
    groups: Vec<OptionGroup<'t>>,
}

impl<'t> OptionRegistry<'t> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Adds an option to the group named by its `group` field, creating the
    /// group if needed.
    pub fn add(&mut self, spec: OptionSpec<'t>) -> &mut OptionSpec<'t> {
        let name = spec.group.clone();
        self.group(&name).add(spec)
    }

    /// Returns the group with the given name, appending a new empty group
    /// if there is none.
    pub fn group(&mut self, name: &str) -> &mut OptionGroup<'t> {
        let index = match self.groups.iter().position(|g| g.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(OptionGroup::new(name));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    pub fn find_group(&self, name: &str) -> Option<&OptionGroup<'t>> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn groups(&self) -> &[OptionGroup<'t>] {
        &self.groups
    }

    /// Iterates every option, group by group.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec<'t>> {
        self.groups.iter().flat_map(|g| g.options.iter())
    }

    /// Total number of options across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(OptionGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(OptionGroup::is_empty)
    }

    /// Looks up an option by long name (without prefix).
    pub fn find_long(&self, long_name: &str) -> Option<&OptionSpec<'t>> {
        self.groups.iter().find_map(|g| g.find_long(long_name))
    }

    /// Looks up an option by short name.
    pub fn find_short(&self, short_name: char) -> Option<&OptionSpec<'t>> {
        self.groups.iter().find_map(|g| g.find_short(short_name))
    }

    /// Returns the option with the given long name, registering a new one in
    /// the default group if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::OptionRegistry;
    ///
    /// let mut registry = OptionRegistry::new();
    /// registry.option_mut_long("verbose").short_name = Some('v');
    /// registry.option_mut_long("verbose").description = "verbose mode".into();
    ///
    /// assert_eq!(registry.len(), 1);
    /// assert_eq!(registry.find_short('v').unwrap().description, "verbose mode");
    /// ```
    pub fn option_mut_long(&mut self, long_name: &str) -> &mut OptionSpec<'t> {
        let found = self.position(|o| !long_name.is_empty() && o.long_name == long_name);
        match found {
            Some((g, o)) => &mut self.groups[g].options[o],
            None => self.add(OptionSpec::new(long_name, None)),
        }
    }

    /// Returns the option with the given short name, registering a new one
    /// in the default group if there is none.
    pub fn option_mut_short(&mut self, short_name: char) -> &mut OptionSpec<'t> {
        let found = self.position(|o| o.short_name == Some(short_name));
        match found {
            Some((g, o)) => &mut self.groups[g].options[o],
            None => self.add(OptionSpec::new("", short_name)),
        }
    }

    /// Sorts groups by name.
    pub fn sort_groups(&mut self) {
        self.groups.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Sorts the options inside every group.
    pub fn sort_options(&mut self) {
        self.groups.iter_mut().for_each(OptionGroup::sort);
    }

    /// Reports structural problems; see [`validate_registry`].
    pub fn validate(&self, config: &ParserConfig) -> Vec<ValidationError> {
        validate_registry(self, config)
    }

    fn position(&self, predicate: impl Fn(&OptionSpec<'t>) -> bool) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(g, group)| {
            group
                .options
                .iter()
                .position(|o| predicate(o))
                .map(|o| (g, o))
        })
    }
}

impl<'t> FromIterator<OptionSpec<'t>> for OptionRegistry<'t> {
    fn from_iter<I: IntoIterator<Item = OptionSpec<'t>>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<'t> Extend<OptionSpec<'t>> for OptionRegistry<'t> {
    fn extend<I: IntoIterator<Item = OptionSpec<'t>>>(&mut self, iter: I) {
        for spec in iter {
            self.add(spec);
        }
    }
}
