//! Parsing a whole command-line string with custom syntax.
//!
//! Uses DOS-style `/x` and `//name:value` markers, splits a quoted
//! command line, and prints the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optline-demos --example command_string
//! ```

use optline_core::{ArgType, OptionRegistry, OptionSpec, Parser, ParserConfig};

fn main() {
    // Backslashes are path separators here, not escapes
    let config = ParserConfig {
        escape: None,
        ..ParserConfig::default().with_custom_strings("", "/", "//", "///", ":")
    };

    let registry: OptionRegistry = [
        OptionSpec::new("quiet", 'q').with_description("suppress output"),
        OptionSpec::new("recursive", 's').with_description("include subdirectories"),
        OptionSpec::new("title", 't')
            .with_argument("TEXT", true)
            .with_description("window title"),
        OptionSpec::new("retries", None)
            .with_argument("N", true)
            .with_type(ArgType::Uint)
            .with_description("number of retries"),
    ]
    .into_iter()
    .collect();

    let parser = Parser::new(config);
    let line = r#"copy /qs //title:"Nightly backup" //retries:3 C:\data "D:\backup set" /// /notes.txt"#;

    match parser.parse_str(&registry, line, true) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to serialize result: {err}"),
        },
        Err(err) => eprintln!("error: {err}"),
    }

    println!();
    println!("{}", parser.help(&registry));
}
