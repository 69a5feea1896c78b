//! `ls`-style option handling.
//!
//! Declares a small option table with bound destinations, parses the
//! process arguments, and prints what was recognized.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optline-demos --example ls_like -- -la --block-size=1024 src docs
//! cargo run -p optline-demos --example ls_like -- --help
//! ```

use std::cell::Cell;
use std::process::ExitCode;

use optline_core::{OptionRegistry, OptionSpec, Parser, Slot};

fn main() -> ExitCode {
    let all = Cell::new(false);
    let long_listing = Cell::new(false);
    let help = Cell::new(false);
    let block_size = Slot::new();
    let color = Slot::new();
    let width = Slot::new();

    let mut registry = OptionRegistry::new();
    registry.add(
        OptionSpec::new("all", 'a')
            .with_description("do not ignore entries starting with .")
            .bind_flag(&all),
    );
    registry.add(
        OptionSpec::new("block-size", None)
            .with_argument("SIZE", true)
            .with_description("scale sizes by SIZE before printing them")
            .bind_uint(&block_size),
    );
    registry.add(
        OptionSpec::new("color", None)
            .with_argument("WHEN", false)
            .with_description("colorize the output; WHEN can be 'always', 'auto' or 'never'")
            .bind_str(&color),
    );
    registry.add(
        OptionSpec::new("", 'l')
            .with_description("use a long listing format")
            .bind_flag(&long_listing),
    );
    registry.add(
        OptionSpec::new("width", 'w')
            .with_argument("COLS", true)
            .with_description("set output width to COLS; 0 means no limit")
            .with_group("Formatting")
            .bind_int(&width),
    );
    registry.add(
        OptionSpec::new("help", None)
            .with_description("display this help and exit")
            .with_group("Other")
            .bind_flag(&help),
    );

    let parser = Parser::default();
    let result = match parser.parse_env(&registry) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("ls_like: {err}");
            eprintln!("Try '--help' for more information.");
            return ExitCode::from(2);
        }
    };

    if help.get() {
        println!("Usage: ls_like [OPTION]... [FILE]...\n");
        println!("{}", parser.help(&registry));
        return ExitCode::SUCCESS;
    }

    println!("all:         {}", all.get());
    println!("long:        {}", long_listing.get());
    println!("block size:  {:?}", block_size.get());
    // `--color` without WHEN is present but carries no value
    match (color.is_present(), color.get()) {
        (true, Some(when)) => println!("color:       {when}"),
        (true, None) => println!("color:       always"),
        (false, _) => println!("color:       never"),
    }
    println!("width:       {:?}", width.get());
    println!("files:       {:?}", result.positional());

    for entry in result.options() {
        println!("  {:<24} {}", entry.original_text, entry.argument);
    }
    ExitCode::SUCCESS
}
