//! Command-line tokenizer and classifier.
//!
//! The [`Parser`] walks the argument list left to right with one token of
//! lookahead. Each token is classified as a long option, a short option
//! cluster, the end-of-options indicator, or a non-option, and option
//! tokens are resolved against an [`OptionRegistry`]. Arguments come either
//! attached (`--name=value`, `-nvalue`) or from the following token
//! (`--name value`).
//!
//! Parsing stops at the first error.

use tracing::{debug, trace};

use crate::binder::bind;
use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use crate::help::{HelpFormatter, HelpLayout};
use crate::registry::OptionRegistry;
use crate::result::{ParsedEntry, ParserResult};
use crate::text::split;
use crate::types::OptionSpec;

/// An option that still needs to decide whether the next token is its
/// argument.
#[derive(Debug)]
struct Pending<'r> {
    spec: &'r OptionSpec<'r>,
    /// Option text as written, e.g. `--pattern` or `-p`
    option_text: String,
}

impl<'r> Pending<'r> {
    fn with_next_token(self, argument: &str) -> Result<ParsedEntry<'r>> {
        let value = bind(self.spec, &self.option_text, argument)?;
        let mut entry = ParsedEntry::option(&self.option_text, self.spec)
            .with_argument(argument, Some(value));
        entry.original_text = format!("{} {}", self.option_text, argument);
        Ok(entry)
    }

    fn without_argument(self) -> ParsedEntry<'r> {
        self.spec.target.mark_present();
        ParsedEntry::option(&self.option_text, self.spec)
    }
}

/// Outcome of classifying one token.
#[derive(Debug)]
enum Classification<'r> {
    /// Fully handled; nothing more to read.
    NoArgument,
    NonOption,
    EndOfOptions,
    /// The next token must be the argument.
    ArgumentRequired(Pending<'r>),
    /// The next token is the argument unless it is a recognized option.
    ArgumentOptional(Pending<'r>),
}

/// Parses argument lists against an [`OptionRegistry`].
///
/// The parser holds only syntax configuration; the registry is passed to
/// every call, so one parser can serve several option tables.
///
/// # Examples
///
/// ```
/// use optline_core::{ErrorKind, OptionRegistry, OptionSpec, Parser};
///
/// let mut registry = OptionRegistry::new();
/// registry.add(OptionSpec::new("verbose", 'v'));
/// registry.add(OptionSpec::new("output", 'o').with_argument("FILE", true));
///
/// let parser = Parser::default();
/// let result = parser
///     .parse_str(&registry, "prog -vo out.txt input.txt", true)
///     .unwrap();
/// assert!(result.contains_long("verbose"));
/// assert_eq!(result.find_short('o').unwrap().argument, "out.txt");
/// assert_eq!(result.positional(), ["input.txt"]);
///
/// let err = parser.parse_args(&registry, ["--bogus"], false).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidOption);
/// assert_eq!(err.option(), "--bogus");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a list of arguments.
    ///
    /// When `ignore_first` is set, the first element is recorded as the
    /// program name and is neither classified nor positional.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered. Values bound to
    /// targets before the error stay written.
    pub fn parse_args<'r, I, S>(
        &self,
        registry: &'r OptionRegistry<'r>,
        args: I,
        ignore_first: bool,
    ) -> Result<ParserResult<'r>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = ParserResult::new();
        self.parse_into(registry, args, ignore_first, &mut result)?;
        Ok(result)
    }

    /// Splits `command_line` with the configured delimiters, quotes and
    /// escape character, then parses the tokens.
    pub fn parse_str<'r>(
        &self,
        registry: &'r OptionRegistry<'r>,
        command_line: &str,
        ignore_first: bool,
    ) -> Result<ParserResult<'r>> {
        let tokens = split(
            command_line,
            &self.config.delimiters,
            &self.config.quotes,
            self.config.escape,
        );
        self.parse_args(registry, tokens, ignore_first)
    }

    /// Parses the arguments of the current process, skipping the program
    /// name.
    pub fn parse_env<'r>(&self, registry: &'r OptionRegistry<'r>) -> Result<ParserResult<'r>> {
        self.parse_args(registry, std::env::args(), true)
    }

    /// Parses into an existing result.
    ///
    /// Entries are appended to `result`; on error, entries appended before
    /// the failing token are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::{OptionRegistry, OptionSpec, Parser, ParserResult};
    ///
    /// let mut registry = OptionRegistry::new();
    /// registry.add(OptionSpec::new("all", 'a'));
    ///
    /// let mut result = ParserResult::new();
    /// let err = Parser::default().parse_into(&registry, ["-a", "-x"], false, &mut result);
    /// assert!(err.is_err());
    /// assert_eq!(result.len(), 1);
    /// assert_eq!(result[0].long_name, "all");
    /// ```
    pub fn parse_into<'r, I, S>(
        &self,
        registry: &'r OptionRegistry<'r>,
        args: I,
        ignore_first: bool,
        result: &mut ParserResult<'r>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = args.into_iter().peekable();

        if ignore_first {
            if let Some(program) = tokens.next() {
                result.set_program(program.as_ref());
            }
        }

        while let Some(token) = tokens.next() {
            let token = token.as_ref();
            let classification = self.classify(registry, token, result)?;
            trace!(token, classification = ?classification, "classified token");

            match classification {
                Classification::NoArgument => {}
                Classification::NonOption => {
                    result.push(ParsedEntry::non_option(token));
                    result.push_positional(token);
                }
                Classification::EndOfOptions => {
                    for rest in tokens.by_ref() {
                        result.push_positional(rest.as_ref());
                    }
                    break;
                }
                Classification::ArgumentRequired(pending) => {
                    let next =
                        tokens.next_if(|next| !self.config.is_end_indicator(next.as_ref()));
                    match next {
                        Some(next) => result.push(pending.with_next_token(next.as_ref())?),
                        None => {
                            return Err(ParseError::missing_argument(
                                &pending.option_text,
                                "Parser::parse_into",
                            ));
                        }
                    }
                }
                Classification::ArgumentOptional(pending) => {
                    let next =
                        tokens.next_if(|next| !self.is_recognized_option(registry, next.as_ref()));
                    let entry = match next {
                        Some(next) => pending.with_next_token(next.as_ref())?,
                        None => pending.without_argument(),
                    };
                    result.push(entry);
                }
            }
        }

        debug!(
            entries = result.len(),
            positional = result.positional().len(),
            "parse complete"
        );
        Ok(())
    }

    /// Renders help text for `registry` with the default layout.
    pub fn help(&self, registry: &OptionRegistry<'_>) -> String {
        HelpFormatter::new(&self.config, HelpLayout::default()).render(registry)
    }

    /// Returns `true` if `token` is the end indicator or names a registered
    /// option. Clusters count when their first character resolves.
    fn is_recognized_option(&self, registry: &OptionRegistry<'_>, token: &str) -> bool {
        let config = &self.config;
        if config.is_end_indicator(token) {
            return true;
        }
        let (specifier, _) = config.split_assignment(token);
        if config.is_long_option(specifier) {
            registry
                .find_long(&specifier[config.long_prefix.len()..])
                .is_some()
        } else if config.is_short_cluster(specifier) && specifier != config.long_prefix {
            specifier[config.short_prefix.len()..]
                .chars()
                .next()
                .is_some_and(|short| registry.find_short(short).is_some())
        } else {
            false
        }
    }

    fn classify<'r>(
        &self,
        registry: &'r OptionRegistry<'r>,
        token: &str,
        result: &mut ParserResult<'r>,
    ) -> Result<Classification<'r>> {
        let config = &self.config;
        if config.is_end_indicator(token) {
            return Ok(Classification::EndOfOptions);
        }

        let (specifier, attached) = config.split_assignment(token);
        if attached.is_some()
            && (specifier == config.short_prefix || specifier == config.long_prefix)
        {
            let syntax = format!("{specifier}{}", config.equals);
            return Err(ParseError::invalid_argument(
                &syntax,
                format!("invalid option syntax: '{syntax}'"),
                "Parser::classify",
            ));
        }

        if config.is_long_option(specifier) {
            self.classify_long(registry, token, specifier, attached, result)
        } else if config.is_short_cluster(specifier) && specifier != config.long_prefix {
            self.classify_short_cluster(registry, specifier, attached, result)
        } else {
            Ok(Classification::NonOption)
        }
    }

    fn classify_long<'r>(
        &self,
        registry: &'r OptionRegistry<'r>,
        token: &str,
        specifier: &str,
        attached: Option<&str>,
        result: &mut ParserResult<'r>,
    ) -> Result<Classification<'r>> {
        const OPERATION: &str = "Parser::classify_long";

        let name = &specifier[self.config.long_prefix.len()..];
        let spec = registry
            .find_long(name)
            .ok_or_else(|| ParseError::invalid_option(specifier, OPERATION))?;

        match (spec.takes_argument(), attached) {
            (false, Some(_)) => Err(ParseError::argument_not_accepted(specifier, OPERATION)),
            (false, None) => {
                spec.target.mark_present();
                result.push(ParsedEntry::option(token, spec));
                Ok(Classification::NoArgument)
            }
            (true, Some(argument)) => {
                let value = bind(spec, specifier, argument)?;
                let mut entry =
                    ParsedEntry::option(specifier, spec).with_argument(argument, Some(value));
                entry.original_text = token.to_string();
                result.push(entry);
                Ok(Classification::NoArgument)
            }
            (true, None) => Ok(Self::pending(spec, specifier)),
        }
    }

    fn classify_short_cluster<'r>(
        &self,
        registry: &'r OptionRegistry<'r>,
        specifier: &str,
        attached: Option<&str>,
        result: &mut ParserResult<'r>,
    ) -> Result<Classification<'r>> {
        const OPERATION: &str = "Parser::classify_short_cluster";

        let prefix = &self.config.short_prefix;
        let names = &specifier[prefix.len()..];

        for (offset, short) in names.char_indices() {
            let option_text = format!("{prefix}{short}");
            let spec = registry
                .find_short(short)
                .ok_or_else(|| ParseError::invalid_option(&option_text, OPERATION))?;

            let rest = &names[offset + short.len_utf8()..];
            let is_last = rest.is_empty();

            if !spec.takes_argument() {
                if is_last && attached.is_some() {
                    return Err(ParseError::argument_not_accepted(&option_text, OPERATION));
                }
                spec.target.mark_present();
                result.push(ParsedEntry::option(&option_text, spec));
                continue;
            }

            // The rest of the cluster, plus any assignment, is the argument.
            if !is_last {
                let argument = match attached {
                    Some(attached) => format!("{rest}{}{attached}", self.config.equals),
                    None => rest.to_string(),
                };
                let value = bind(spec, &option_text, &argument)?;
                let mut entry =
                    ParsedEntry::option(&option_text, spec).with_argument(&argument, Some(value));
                entry.original_text = format!("{option_text}{argument}");
                result.push(entry);
                return Ok(Classification::NoArgument);
            }

            return match attached {
                Some(argument) => {
                    let value = bind(spec, &option_text, argument)?;
                    let mut entry = ParsedEntry::option(&option_text, spec)
                        .with_argument(argument, Some(value));
                    entry.original_text =
                        format!("{option_text}{}{argument}", self.config.equals);
                    result.push(entry);
                    Ok(Classification::NoArgument)
                }
                None => Ok(Self::pending(spec, &option_text)),
            };
        }

        Ok(Classification::NoArgument)
    }

    fn pending<'r>(spec: &'r OptionSpec<'r>, option_text: &str) -> Classification<'r> {
        let pending = Pending {
            spec,
            option_text: option_text.to_string(),
        };
        if spec.argument_required {
            Classification::ArgumentRequired(pending)
        } else {
            Classification::ArgumentOptional(pending)
        }
    }
}
