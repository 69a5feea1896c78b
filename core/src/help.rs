//! Help text rendering.
//!
//! Renders an [`OptionRegistry`] as a GNU-style option listing:
//!
//! ```text
//! Output control
//!   -a, --all                   list all files
//!       --block-size=SIZE       scale sizes by SIZE
//!       --color[=WHEN]          colorize the output
//! ```
//!
//! Groups appear in registry order separated by a blank line; empty groups
//! are skipped. Descriptions start at a fixed column and wrap to a
//! continuation indent. When the usage text reaches the column, the
//! description starts on the next line instead.

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::registry::{OptionGroup, OptionRegistry};
use crate::text::wrap_text;
use crate::types::OptionSpec;

/// Column layout for help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpLayout {
    pub max_line_length: usize,
    /// Indent of group names
    pub group_indent: usize,
    /// Indent of option usage text
    pub option_indent: usize,
    /// Column where descriptions start
    pub description_column: usize,
    /// Indent of wrapped description lines
    pub description_indent: usize,
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self {
            max_line_length: 78,
            group_indent: 0,
            option_indent: 2,
            description_column: 30,
            description_indent: 32,
        }
    }
}

impl HelpLayout {
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }
}

/// Renders help text using a parser's syntax configuration.
///
/// # Examples
///
/// ```
/// use optline_core::{HelpFormatter, HelpLayout, OptionRegistry, OptionSpec, ParserConfig};
///
/// let mut registry = OptionRegistry::new();
/// registry.add(OptionSpec::new("all", 'a').with_description("list all files"));
/// registry.add(OptionSpec::new("width", None).with_argument("COLS", true));
///
/// let config = ParserConfig::default();
/// let help = HelpFormatter::new(&config, HelpLayout::default()).render(&registry);
/// assert_eq!(
///     help,
///     "  -a, --all                   list all files\n      --width=COLS"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HelpFormatter<'c> {
    config: &'c ParserConfig,
    layout: HelpLayout,
}

impl<'c> HelpFormatter<'c> {
    pub fn new(config: &'c ParserConfig, layout: HelpLayout) -> Self {
        Self { config, layout }
    }

    pub fn layout(&self) -> &HelpLayout {
        &self.layout
    }

    /// Renders every non-empty group. The output has no trailing newline.
    pub fn render(&self, registry: &OptionRegistry<'_>) -> String {
        registry
            .groups()
            .iter()
            .filter(|group| !group.is_empty())
            .map(|group| self.render_group(group))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn render_group(&self, group: &OptionGroup<'_>) -> String {
        let layout = &self.layout;
        let mut lines = Vec::with_capacity(group.len() + 1);
        if !group.name.is_empty() {
            lines.push(wrap_text(
                &group.name,
                layout.max_line_length,
                layout.group_indent,
                layout.group_indent,
            ));
        }
        lines.extend(group.iter().map(|spec| self.render_option(spec)));
        lines.join("\n")
    }

    /// Renders one option: usage text plus its aligned, wrapped
    /// description.
    pub fn render_option(&self, spec: &OptionSpec<'_>) -> String {
        let layout = &self.layout;
        let usage = self.usage(spec);
        if spec.description.is_empty() {
            return usage;
        }

        let column = layout.description_column;
        let description = wrap_text(
            &spec.description,
            layout.max_line_length,
            layout.description_indent,
            column,
        );

        let usage_len = usage.chars().count();
        if usage_len + 1 >= column {
            return format!("{usage}\n{description}");
        }

        let pad = " ".repeat(column);
        match description.strip_prefix(pad.as_str()) {
            Some(rest) => format!("{usage}{}{rest}", " ".repeat(column - usage_len)),
            None => format!("{usage}\n{description}"),
        }
    }

    /// Usage text for one option, e.g. `  -c, --color[=WHEN]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::{HelpFormatter, HelpLayout, OptionSpec, ParserConfig};
    ///
    /// let config = ParserConfig::default();
    /// let formatter = HelpFormatter::new(&config, HelpLayout::default());
    ///
    /// let color = OptionSpec::new("color", 'c').with_argument("WHEN", false);
    /// assert_eq!(formatter.usage(&color), "  -c, --color[=WHEN]");
    ///
    /// let size = OptionSpec::new("block-size", None).with_argument("SIZE", true);
    /// assert_eq!(formatter.usage(&size), "      --block-size=SIZE");
    ///
    /// let prompt = OptionSpec::new("", 'P').with_argument("PROMPT", true);
    /// assert_eq!(formatter.usage(&prompt), "  -P=PROMPT");
    /// ```
    pub fn usage(&self, spec: &OptionSpec<'_>) -> String {
        let config = self.config;
        let mut usage = " ".repeat(self.layout.option_indent);

        match spec.short_name {
            Some(short) => {
                usage.push_str(&config.short_prefix);
                usage.push(short);
                if !spec.long_name.is_empty() {
                    usage.push_str(", ");
                }
            }
            None => usage.push_str(&" ".repeat(config.short_prefix.chars().count() + 3)),
        }

        if !spec.long_name.is_empty() {
            usage.push_str(&config.long_prefix);
            usage.push_str(&spec.long_name);
        }

        if spec.takes_argument() {
            if spec.argument_required {
                usage.push_str(&format!("{}{}", config.equals, spec.argument_name));
            } else {
                usage.push_str(&format!("[{}{}]", config.equals, spec.argument_name));
            }
        }

        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(registry: &OptionRegistry<'_>, layout: HelpLayout) -> String {
        let config = ParserConfig::default();
        HelpFormatter::new(&config, layout).render(registry)
    }

    #[test]
    fn test_groups_are_separated_by_blank_line() {
        let registry: OptionRegistry = [
            OptionSpec::new("help", '?').with_description("display help text"),
            OptionSpec::new("all", 'a')
                .with_description("list all files")
                .with_group("Listing"),
        ]
        .into_iter()
        .collect();

        let expected = [
            "  -?, --help                  display help text",
            "",
            "Listing",
            "  -a, --all                   list all files",
        ]
        .join("\n");
        assert_eq!(render(&registry, HelpLayout::default()), expected);
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let mut registry = OptionRegistry::new();
        registry.group("Empty");
        registry.add(OptionSpec::new("all", 'a'));
        assert_eq!(render(&registry, HelpLayout::default()), "  -a, --all");
    }

    #[test]
    fn test_long_usage_moves_description_to_next_line() {
        let registry: OptionRegistry = [OptionSpec::new("max-back-scroll", 'h')
            .with_argument("N", true)
            .with_description("maximum lines")]
        .into_iter()
        .collect();

        // "  -h, --max-back-scroll=N" is 25 columns; the layout column is 20
        let layout = HelpLayout {
            description_column: 20,
            description_indent: 22,
            ..HelpLayout::default()
        };
        assert_eq!(
            render(&registry, layout),
            format!("  -h, --max-back-scroll=N\n{}maximum lines", " ".repeat(20))
        );
    }

    #[test]
    fn test_usage_one_short_of_column_moves_description() {
        let config = ParserConfig::default();
        let layout = HelpLayout {
            description_column: 12,
            ..HelpLayout::default()
        };
        let formatter = HelpFormatter::new(&config, layout);

        // "  -a, --all" is 11 columns, leaving a single space
        let spec = OptionSpec::new("all", 'a').with_description("x");
        assert_eq!(
            formatter.render_option(&spec),
            format!("  -a, --all\n{}x", " ".repeat(12))
        );
    }

    #[test]
    fn test_description_wraps_to_continuation_indent() {
        let registry: OptionRegistry = [OptionSpec::new("quit-at-eof", 'e')
            .with_description("automatically exit when end-of-file is reached")]
        .into_iter()
        .collect();

        let layout = HelpLayout::default().with_max_line_length(60);
        let expected = format!(
            "  -e, --quit-at-eof           automatically exit when\n{}end-of-file is reached",
            " ".repeat(32)
        );
        assert_eq!(render(&registry, layout), expected);
    }

    #[test]
    fn test_group_name_indent() {
        let registry: OptionRegistry = [OptionSpec::new("dumb", 'd').with_group("Terminal")]
            .into_iter()
            .collect();
        let layout = HelpLayout {
            group_indent: 1,
            ..HelpLayout::default()
        };
        assert_eq!(render(&registry, layout), " Terminal\n  -d, --dumb");
    }

    #[test]
    fn test_custom_prefixes() {
        let config = ParserConfig::default().with_custom_strings("", "/", "//", "", ":");
        let formatter = HelpFormatter::new(&config, HelpLayout::default());
        let spec = OptionSpec::new("out", 'o').with_argument("FILE", true);
        assert_eq!(formatter.usage(&spec), "  /o, //out:FILE");

        let long_only = OptionSpec::new("quiet", None);
        assert_eq!(formatter.usage(&long_only), "      //quiet");
    }
}
