use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use optline_core::{HelpFormatter, ParserResult};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod table;

use table::OptionTable;

/// Output format for parse results.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "optline")]
#[command(about = "Parse command lines against declarative option tables")]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Log parser decisions to stderr (overrides RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a command line against an option table and print the result.
    Parse(ParseArgs),
    /// Render help text for an option table.
    Help(HelpArgs),
    /// Check an option table for missing, invalid or duplicate names.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Option table file (JSON, or YAML by .yaml/.yml extension).
    #[arg(long)]
    table: PathBuf,
    /// Whole command line as one string, split with the table's quoting rules.
    #[arg(long, conflicts_with = "args")]
    line: Option<String>,
    /// Treat the first argument as the program name.
    #[arg(long)]
    ignore_first: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Arguments to parse; put them after `--`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct HelpArgs {
    /// Option table file.
    #[arg(long)]
    table: PathBuf,
    /// Maximum line length (overrides the table's layout).
    #[arg(long)]
    width: Option<usize>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Option table file.
    #[arg(long)]
    table: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Help(args) => run_help(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// parse command
// ---------------------------------------------------------------------------

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let table = OptionTable::load(&args.table)?;
    let registry = table.registry();
    let parser = table.parser();

    let result = match &args.line {
        Some(line) => parser.parse_str(&registry, line, args.ignore_first),
        None => parser.parse_args(&registry, &args.args, args.ignore_first),
    }
    .map_err(|err| err.to_string())?;

    debug!(
        entries = result.len(),
        positional = result.positional().len(),
        "parsed command line"
    );

    let output = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize output: {e}"))?,
        CliOutputFormat::Yaml => serde_yaml::to_string(&result)
            .map_err(|e| format!("Failed to serialize output: {e}"))?,
        CliOutputFormat::Table => format_result_table(&result),
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Renders a result as aligned `kind name argument` rows.
fn format_result_table(result: &ParserResult<'_>) -> String {
    let mut out = String::new();
    if let Some(program) = result.program() {
        let _ = writeln!(out, "{:<12}{program}", "program");
    }
    for entry in result.options() {
        let row = format!(
            "{:<12}{:<24}{}",
            "option", entry.original_without_argument, entry.argument
        );
        let _ = writeln!(out, "{}", row.trim_end());
    }
    for argument in result.positional() {
        let _ = writeln!(out, "{:<12}{argument}", "positional");
    }
    out
}

// ---------------------------------------------------------------------------
// help command
// ---------------------------------------------------------------------------

fn run_help(args: HelpArgs) -> Result<(), String> {
    let table = OptionTable::load(&args.table)?;
    let registry = table.registry();

    let mut layout = table.layout;
    if let Some(width) = args.width {
        layout = layout.with_max_line_length(width);
    }

    let help = HelpFormatter::new(&table.config, layout).render(&registry);
    println!("{help}");
    Ok(())
}

// ---------------------------------------------------------------------------
// validate command
// ---------------------------------------------------------------------------

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let table = OptionTable::load(&args.table)?;
    let registry = table.registry();

    let errors = registry.validate(&table.config);
    if !errors.is_empty() {
        let details = errors
            .iter()
            .map(|err| format!("  {err}"))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(format!(
            "'{}' has {} problem(s):\n{details}",
            args.table.display(),
            errors.len()
        ));
    }

    println!(
        "Validated {} option(s) in {} group(s).",
        registry.len(),
        registry.groups().len()
    );
    Ok(())
}
