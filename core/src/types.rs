//! Option descriptor type definitions.
//!
//! This module defines the data model for a single recognized option: its
//! names, argument shape, help metadata and the optional caller-owned
//! destination that receives the parsed value. Descriptors serialize with
//! [`serde`] so option tables can be stored as JSON or YAML; the bound
//! destination is never serialized.

use std::cell::{Cell, RefCell};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of an option argument.
///
/// The binder converts raw argument text to this type, failing the parse
/// when the text does not fit.
///
/// # Examples
///
/// ```
/// use optline_core::ArgType;
///
/// assert_eq!(ArgType::default(), ArgType::String);
/// assert_eq!(ArgType::Uint.to_string(), "unsigned integer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    /// Stored verbatim (the default).
    #[default]
    String,
    /// Signed 64-bit integer.
    Int,
    /// Unsigned 64-bit integer; negative input is rejected.
    Uint,
    /// 64-bit floating point.
    Float,
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArgType::String => "string",
            ArgType::Int => "integer",
            ArgType::Uint => "unsigned integer",
            ArgType::Float => "number",
        };
        f.write_str(label)
    }
}

/// A converted option argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl ArgValue {
    /// Returns the string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            ArgValue::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ArgValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the [`ArgType`] this value was converted to.
    pub fn arg_type(&self) -> ArgType {
        match self {
            ArgValue::Str(_) => ArgType::String,
            ArgValue::Int(_) => ArgType::Int,
            ArgValue::Uint(_) => ArgType::Uint,
            ArgValue::Float(_) => ArgType::Float,
        }
    }
}

/// Caller-owned destination for a parsed option value.
///
/// A slot records whether its option was seen on the command line and, once
/// an argument is bound, the converted value. Slots are written through
/// shared references while parsing, so they must outlive the registry that
/// borrows them and must not be touched from another thread meanwhile.
///
/// # Examples
///
/// ```
/// use optline_core::{OptionRegistry, OptionSpec, Parser, Slot};
///
/// let count = Slot::new();
/// let mut registry = OptionRegistry::new();
/// registry.add(OptionSpec::new("count", 'n').with_argument("N", true).bind_uint(&count));
///
/// Parser::default().parse_args(&registry, ["prog", "--count=3"], true).unwrap();
/// assert!(count.is_present());
/// assert_eq!(count.get(), Some(3));
/// ```
#[derive(Debug, Default)]
pub struct Slot<T> {
    value: RefCell<Option<T>>,
    present: Cell<bool>,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self {
            value: RefCell::new(None),
            present: Cell::new(false),
        }
    }

    /// Returns `true` once the option has been recognized, even when it
    /// carried no argument.
    pub fn is_present(&self) -> bool {
        self.present.get()
    }

    /// Takes the stored value out, leaving the slot empty but still present.
    pub fn take(&self) -> Option<T> {
        self.value.borrow_mut().take()
    }

    pub fn into_inner(self) -> Option<T> {
        self.value.into_inner()
    }

    /// Clears both the value and the presence flag.
    pub fn reset(&self) {
        self.value.borrow_mut().take();
        self.present.set(false);
    }

    pub(crate) fn mark_present(&self) {
        self.present.set(true);
    }

    pub(crate) fn store(&self, value: T) {
        *self.value.borrow_mut() = Some(value);
        self.present.set(true);
    }
}

impl<T: Clone> Slot<T> {
    /// Returns a copy of the stored value.
    pub fn get(&self) -> Option<T> {
        self.value.borrow().clone()
    }
}

/// Where a recognized option writes its result.
///
/// `None` is the default: the parsed entry is the only record of the
/// occurrence. The other variants borrow caller-owned storage for `'t`.
#[derive(Debug, Clone, Copy, Default)]
pub enum Target<'t> {
    #[default]
    None,
    /// Set to `true` whenever the option is recognized.
    Flag(&'t Cell<bool>),
    Str(&'t Slot<String>),
    Int(&'t Slot<i64>),
    Uint(&'t Slot<u64>),
    Float(&'t Slot<f64>),
}

impl Target<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Target::None)
    }

    pub(crate) fn mark_present(&self) {
        match self {
            Target::None => {}
            Target::Flag(flag) => flag.set(true),
            Target::Str(slot) => slot.mark_present(),
            Target::Int(slot) => slot.mark_present(),
            Target::Uint(slot) => slot.mark_present(),
            Target::Float(slot) => slot.mark_present(),
        }
    }

    /// Writes `value` when its type matches the destination; mismatched
    /// pairs are left untouched.
    pub(crate) fn store(&self, value: &ArgValue) {
        match (self, value) {
            (Target::Str(slot), ArgValue::Str(v)) => slot.store(v.clone()),
            (Target::Int(slot), ArgValue::Int(v)) => slot.store(*v),
            (Target::Uint(slot), ArgValue::Uint(v)) => slot.store(*v),
            (Target::Float(slot), ArgValue::Float(v)) => slot.store(*v),
            _ => {}
        }
    }
}

/// Descriptor for one recognized option.
///
/// An option has an optional short name (e.g. `v` for `-v`) and/or a long
/// name (e.g. `verbose` for `--verbose`). A non-empty `argument_name` means
/// the option takes an argument; `argument_required` decides whether the
/// argument may be omitted.
///
/// Use [`new`](OptionSpec::new) and chain builder methods like
/// [`with_argument`](OptionSpec::with_argument).
///
/// # Examples
///
/// ```
/// use optline_core::{ArgType, OptionSpec};
///
/// let verbose = OptionSpec::new("verbose", 'v').with_description("verbose mode");
/// assert_eq!(verbose.name(), "verbose");
/// assert!(!verbose.takes_argument());
///
/// let size = OptionSpec::new("block-size", None)
///     .with_argument("SIZE", true)
///     .with_type(ArgType::Uint);
/// assert!(size.takes_argument());
/// assert_eq!(size.short_name, None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionSpec<'t> {
    /// Single-character name used after the short prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<char>,
    /// Name used after the long prefix (empty if none)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub long_name: String,
    /// Help text
    #[serde(default)]
    pub description: String,
    /// Argument label shown in help; empty means no argument
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub argument_name: String,
    #[serde(default)]
    pub argument_required: bool,
    #[serde(default)]
    pub argument_type: ArgType,
    /// Help group label
    #[serde(default)]
    pub group: String,
    #[serde(skip)]
    pub target: Target<'t>,
}

impl<'t> OptionSpec<'t> {
    /// Creates an option with the given long name (may be empty) and short
    /// name.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::OptionSpec;
    ///
    /// let both = OptionSpec::new("all", 'a');
    /// assert_eq!(both.short_name, Some('a'));
    ///
    /// let short_only = OptionSpec::new("", 'S');
    /// assert_eq!(short_only.name(), "S");
    /// ```
    pub fn new(long_name: &str, short_name: impl Into<Option<char>>) -> Self {
        Self {
            short_name: short_name.into(),
            long_name: long_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Declares an argument. An empty `name` turns the argument off.
    pub fn with_argument(mut self, name: &str, required: bool) -> Self {
        self.argument_name = name.to_string();
        self.argument_required = required;
        self
    }

    pub fn with_type(mut self, argument_type: ArgType) -> Self {
        self.argument_type = argument_type;
        self
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = group.to_string();
        self
    }

    /// Sets `flag` to `true` whenever the option is recognized.
    pub fn bind_flag(mut self, flag: &'t Cell<bool>) -> Self {
        self.target = Target::Flag(flag);
        self
    }

    /// Binds a string destination; the argument type becomes
    /// [`ArgType::String`].
    pub fn bind_str(mut self, slot: &'t Slot<String>) -> Self {
        self.argument_type = ArgType::String;
        self.target = Target::Str(slot);
        self
    }

    pub fn bind_int(mut self, slot: &'t Slot<i64>) -> Self {
        self.argument_type = ArgType::Int;
        self.target = Target::Int(slot);
        self
    }

    pub fn bind_uint(mut self, slot: &'t Slot<u64>) -> Self {
        self.argument_type = ArgType::Uint;
        self.target = Target::Uint(slot);
        self
    }

    pub fn bind_float(mut self, slot: &'t Slot<f64>) -> Self {
        self.argument_type = ArgType::Float;
        self.target = Target::Float(slot);
        self
    }

    /// Returns the long name, or the short name when there is no long name.
    pub fn name(&self) -> String {
        if !self.long_name.is_empty() {
            return self.long_name.clone();
        }
        self.short_name.map(String::from).unwrap_or_default()
    }

    /// Returns `true` if the option accepts an argument.
    pub fn takes_argument(&self) -> bool {
        !self.argument_name.is_empty()
    }

    pub fn has_target(&self) -> bool {
        !self.target.is_none()
    }
}
