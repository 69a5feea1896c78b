//! Error types for parsing and result access.
//!
//! Every parse failure is one [`ParseError`] variant. Each carries a
//! human-readable message (its `Display`), the name of the operation that
//! detected it, and the offending option text.

use thiserror::Error;

/// Coarse classification of a [`ParseError`], convenient for `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOption,
    ArgumentNotAccepted,
    MissingArgument,
    InvalidArgument,
    OutOfRange,
}

/// Errors that abort a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unrecognized short or long option.
    #[error("invalid option: '{option}'")]
    InvalidOption {
        option: String,
        operation: &'static str,
    },

    /// An argument was attached to an option that takes none.
    #[error("option '{option}' does not accept arguments")]
    ArgumentNotAccepted {
        option: String,
        operation: &'static str,
    },

    /// A required argument was not supplied before the end of input or the
    /// end-of-options indicator.
    #[error("option '{option}' requires an argument")]
    MissingArgument {
        option: String,
        operation: &'static str,
    },

    /// The argument failed conversion, or the option syntax is malformed.
    #[error("{message}")]
    InvalidArgument {
        option: String,
        message: String,
        operation: &'static str,
    },

    /// A numeric argument does not fit its target type.
    #[error("{message}")]
    OutOfRange {
        option: String,
        message: String,
        operation: &'static str,
    },
}

impl ParseError {
    pub(crate) fn invalid_option(option: &str, operation: &'static str) -> Self {
        Self::InvalidOption {
            option: option.to_string(),
            operation,
        }
    }

    pub(crate) fn argument_not_accepted(option: &str, operation: &'static str) -> Self {
        Self::ArgumentNotAccepted {
            option: option.to_string(),
            operation,
        }
    }

    pub(crate) fn missing_argument(option: &str, operation: &'static str) -> Self {
        Self::MissingArgument {
            option: option.to_string(),
            operation,
        }
    }

    pub(crate) fn invalid_argument(
        option: &str,
        message: String,
        operation: &'static str,
    ) -> Self {
        Self::InvalidArgument {
            option: option.to_string(),
            message,
            operation,
        }
    }

    pub(crate) fn out_of_range(option: &str, message: String, operation: &'static str) -> Self {
        Self::OutOfRange {
            option: option.to_string(),
            message,
            operation,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOption { .. } => ErrorKind::InvalidOption,
            Self::ArgumentNotAccepted { .. } => ErrorKind::ArgumentNotAccepted,
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    /// The option text as it appeared on the command line (e.g. `--count`
    /// or `-x`).
    pub fn option(&self) -> &str {
        match self {
            Self::InvalidOption { option, .. }
            | Self::ArgumentNotAccepted { option, .. }
            | Self::MissingArgument { option, .. }
            | Self::InvalidArgument { option, .. }
            | Self::OutOfRange { option, .. } => option,
        }
    }

    /// Name of the operation that raised the error.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::InvalidOption { operation, .. }
            | Self::ArgumentNotAccepted { operation, .. }
            | Self::MissingArgument { operation, .. }
            | Self::InvalidArgument { operation, .. }
            | Self::OutOfRange { operation, .. } => *operation,
        }
    }
}

/// Bounds-checked access past the end of a [`ParserResult`](crate::ParserResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for {len} parsed entries")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
