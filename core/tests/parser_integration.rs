use std::cell::Cell;

use optline_core::*;

/// Option table modelled on `less(1)`.
fn less_options() -> OptionRegistry<'static> {
    [
        OptionSpec::new("help", '?').with_description("display help text"),
        OptionSpec::new("version", None).with_description("display program version"),
        OptionSpec::new("verbose", 'v').with_description("verbose mode"),
        OptionSpec::new("force", 'f').with_description("write file even if it exists"),
        OptionSpec::new("all", 'a').with_description("list all files"),
        OptionSpec::new("almost-all", 'A').with_description("do not list . and .."),
        OptionSpec::new("block-size", None)
            .with_argument("SIZE", true)
            .with_description("scale sizes by SIZE"),
        OptionSpec::new("buffer", 'b')
            .with_argument("N", true)
            .with_type(ArgType::Int)
            .with_description("buffer size for each file"),
        OptionSpec::new("auto-buffers", 'B').with_description("buffers allocated automatically"),
        OptionSpec::new("clear-screen", 'c').with_description("clear screen on each repaint"),
        OptionSpec::new("dumb", 'd').with_description("suppress error message if terminal is dumb"),
        OptionSpec::new("color", None)
            .with_argument("COLOR", true)
            .with_description("set color of text displayed"),
        OptionSpec::new("quit-at-eof", 'e')
            .with_description("automatically exit when end-of-file is reached"),
        OptionSpec::new("max-back-scroll", 'h')
            .with_argument("N", true)
            .with_type(ArgType::Uint)
            .with_description("maximum number of lines to scroll backward"),
        OptionSpec::new("ignore-case", 'i').with_description("searches ignore case"),
        OptionSpec::new("IGNORE-CASE", 'I').with_description("really really ignores case"),
        OptionSpec::new("line-numbers", 'n').with_description("show line numbers"),
        OptionSpec::new("pattern", 'p')
            .with_argument("PATTERN", true)
            .with_description("start at first occurrence of PATTERN"),
        OptionSpec::new("", 'P')
            .with_argument("PROMPT", false)
            .with_description("use custom prompt"),
        OptionSpec::new("quiet", 'q').with_description("quiet mode, do not ring terminal bell"),
        OptionSpec::new("", 's').with_description("squeeze consecutive blank lines into one"),
        OptionSpec::new("", 'S').with_description("chop long lines"),
        OptionSpec::new("tag", 't')
            .with_argument("TAG", false)
            .with_description("edit file containing tag TAG"),
        OptionSpec::new("underline-special", 'u')
            .with_description("underline special characters"),
        OptionSpec::new("window", 'z')
            .with_argument("N", true)
            .with_type(ArgType::Float)
            .with_description("change default scrolling window to N lines"),
    ]
    .into_iter()
    .collect()
}

fn parse<'r>(registry: &'r OptionRegistry<'r>, args: &[&str]) -> ParserResult<'r> {
    Parser::default()
        .parse_args(registry, args, true)
        .expect("parse should succeed")
}

fn parse_err(args: &[&str]) -> ParseError {
    let registry = less_options();
    Parser::default()
        .parse_args(&registry, args, true)
        .expect_err("parse should fail")
}

fn long_names(result: &ParserResult<'_>) -> Vec<String> {
    result.options().map(|e| e.long_name.clone()).collect()
}

// ---------------------------------------------------------------------------
// Positional handling
// ---------------------------------------------------------------------------

#[test]
fn no_arguments_yield_empty_result() {
    let registry = less_options();
    let result = parse(&registry, &["prog"]);
    assert!(result.is_empty());
    assert!(result.positional().is_empty());
    assert_eq!(result.program(), Some("prog"));
}

#[test]
fn plain_words_are_positional_in_order() {
    let registry = less_options();
    let result = parse(&registry, &["prog", "arg1", "arg2", "arg3", "arg4"]);

    assert!(!result.has_options());
    assert_eq!(result.positional(), ["arg1", "arg2", "arg3", "arg4"]);
    assert!(result.iter().all(|e| !e.is_option && e.option.is_none()));
}

#[test]
fn lone_hyphen_is_positional() {
    let registry = less_options();
    let result = parse(&registry, &["prog", "-", "blank"]);
    assert!(!result.has_options());
    assert_eq!(result.positional(), ["-", "blank"]);
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn clusters_and_long_options_in_order() {
    let registry = less_options();
    let result = parse(
        &registry,
        &["prog", "-BiuqS", "--line-numbers", "clear-screen", "-I"],
    );

    assert_eq!(
        long_names(&result),
        vec![
            "auto-buffers",
            "ignore-case",
            "underline-special",
            "quiet",
            "",
            "line-numbers",
            "IGNORE-CASE",
        ]
    );
    assert_eq!(result.options().nth(4).unwrap().short_name, Some('S'));
    assert_eq!(result.positional(), ["clear-screen"]);
    assert_eq!(result.len(), 8);
}

#[test]
fn arguments_attached_with_assignment() {
    let registry = less_options();
    let result = parse(
        &registry,
        &[
            "prog",
            "--max-back-scroll=12",
            "-ep=42",
            "-P=custom prompt",
            "--buffer=10",
            "--color=red",
        ],
    );

    let arguments: Vec<(&str, &str)> = result
        .iter()
        .map(|e| (e.original_without_argument.as_str(), e.argument.as_str()))
        .collect();
    assert_eq!(
        arguments,
        vec![
            ("--max-back-scroll", "12"),
            ("-e", ""),
            ("-p", "42"),
            ("-P", "custom prompt"),
            ("--buffer", "10"),
            ("--color", "red"),
        ]
    );

    assert_eq!(result.find_long("buffer").unwrap().value, Some(ArgValue::Int(10)));
    assert_eq!(
        result.find_short('h').unwrap().value,
        Some(ArgValue::Uint(12))
    );
    assert!(result.find_long("boffer").is_none());
    assert_eq!(result.find_short('e').unwrap().long_name, "quit-at-eof");
    assert!(result.find_short('i').is_none());
}

#[test]
fn arguments_in_separate_tokens() {
    let registry = less_options();
    let result = parse(
        &registry,
        &[
            "prog",
            "--max-back-scroll",
            "12",
            "-ep",
            "42",
            "-P",
            "custom prompt",
            "--buffer",
            "10",
            "--color",
            "red",
        ],
    );

    let arguments: Vec<(&str, &str)> = result
        .iter()
        .map(|e| (e.original_text.as_str(), e.argument.as_str()))
        .collect();
    assert_eq!(
        arguments,
        vec![
            ("--max-back-scroll 12", "12"),
            ("-e", ""),
            ("-p 42", "42"),
            ("-P custom prompt", "custom prompt"),
            ("--buffer 10", "10"),
            ("--color red", "red"),
        ]
    );
    assert!(result.positional().is_empty());
}

#[test]
fn required_argument_accepts_hyphen_tokens() {
    let registry = less_options();
    let result = parse(&registry, &["prog", "-p", "-"]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].long_name, "pattern");
    assert_eq!(result[0].argument, "-");

    let result = parse(&registry, &["prog", "--pattern", "-", "-e"]);
    assert_eq!(long_names(&result), vec!["pattern", "quit-at-eof"]);
    assert_eq!(result[0].argument, "-");
}

#[test]
fn optional_arguments_skip_recognized_options() {
    let registry = less_options();
    let result = parse(
        &registry,
        &[
            "prog",
            "--max-back-scroll",
            "12",
            "-ep",
            "42",
            "-P",
            "--buffer",
            "10",
            "--tag",
            "--color",
            "red",
        ],
    );

    let arguments: Vec<(String, &str)> = result
        .iter()
        .map(|e| {
            let name = e.short_name.map(String::from).unwrap_or_default();
            (format!("{}/{name}", e.long_name), e.argument.as_str())
        })
        .collect();
    assert_eq!(
        arguments,
        vec![
            ("max-back-scroll/h".to_string(), "12"),
            ("quit-at-eof/e".to_string(), ""),
            ("pattern/p".to_string(), "42"),
            ("/P".to_string(), ""),
            ("buffer/b".to_string(), "10"),
            ("tag/t".to_string(), ""),
            ("color/".to_string(), "red"),
        ]
    );
}

#[test]
fn cluster_tail_becomes_argument() {
    let registry = less_options();
    let result = parse(&registry, &["prog", "-qpfoo=bar", "x"]);

    assert_eq!(long_names(&result), vec!["quiet", "pattern"]);
    assert_eq!(result[1].argument, "foo=bar");
    assert_eq!(result[1].original_text, "-pfoo=bar");
    assert_eq!(result.positional(), ["x"]);
}

#[test]
fn end_of_options_makes_rest_positional() {
    let registry = less_options();
    let result = parse(
        &registry,
        &[
            "prog",
            "--max-back-scroll",
            "12",
            "--",
            "-ep",
            "42",
            "-P",
            "--buffer",
            "10",
            "--tag",
            "--color",
            "red",
        ],
    );

    assert_eq!(long_names(&result), vec!["max-back-scroll"]);
    assert_eq!(result[0].argument, "12");
    assert_eq!(
        result.positional(),
        ["-ep", "42", "-P", "--buffer", "10", "--tag", "--color", "red"]
    );
}

#[test]
fn end_marker_alone_produces_no_entries() {
    let registry = less_options();
    let result = Parser::default()
        .parse_args(&registry, ["--", "-x", "--y"], false)
        .unwrap();
    assert!(result.is_empty());
    assert_eq!(result.positional(), ["-x", "--y"]);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_options_are_rejected() {
    let err = parse_err(&["prog", "-Bcdjei"]);
    assert_eq!(err.kind(), ErrorKind::InvalidOption);
    assert_eq!(err.option(), "-j");
    assert_eq!(err.to_string(), "invalid option: '-j'");

    let err = parse_err(&["prog", "--error"]);
    assert_eq!(err.option(), "--error");

    let err = parse_err(&["prog", "-eid", "--color=red", "--throw", "--window=16"]);
    assert_eq!(err.kind(), ErrorKind::InvalidOption);
    assert_eq!(err.option(), "--throw");
}

#[test]
fn bogus_long_option_always_fails() {
    for args in [
        &["prog", "--bogus"][..],
        &["prog", "-a", "--bogus"][..],
        &["prog", "--bogus=1", "x"][..],
    ] {
        let err = parse_err(args);
        assert_eq!(err.kind(), ErrorKind::InvalidOption);
        assert_eq!(err.option(), "--bogus");
    }
}

#[test]
fn argument_errors() {
    let err = parse_err(&["prog", "-c=red", "--pattern", "-q"]);
    assert_eq!(err.kind(), ErrorKind::ArgumentNotAccepted);
    assert_eq!(err.to_string(), "option '-c' does not accept arguments");

    let err = parse_err(&["prog", "--pattern"]);
    assert_eq!(err.kind(), ErrorKind::MissingArgument);
    assert_eq!(err.to_string(), "option '--pattern' requires an argument");

    let err = parse_err(&["prog", "-cinp", "--", "hello"]);
    assert_eq!(err.kind(), ErrorKind::MissingArgument);
    assert_eq!(err.option(), "-p");

    assert!(Parser::default()
        .parse_args(&less_options(), ["prog", "--tag"], true)
        .is_ok());
}

#[test]
fn typed_argument_errors() {
    let err = parse_err(&["prog", "--buffer=abc"]);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "argument for option '--buffer' must be an integer"
    );

    let err = parse_err(&["prog", "--buffer=99999999999999999999"]);
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    let err = parse_err(&["prog", "-h", "-3"]);
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(err.to_string(), "argument for option '-h' must not be negative");

    let err = parse_err(&["prog", "-z1.5x"]);
    assert_eq!(err.to_string(), "argument for option '-z' must be a number");
}

#[test]
fn partial_results_survive_errors_with_parse_into() {
    let registry = less_options();
    let mut result = ParserResult::new();
    let err = Parser::default()
        .parse_into(&registry, ["prog", "-a", "word", "--nope", "-q"], true, &mut result)
        .unwrap_err();

    assert_eq!(err.option(), "--nope");
    assert_eq!(result.len(), 2);
    assert!(result.contains_short('a'));
    assert_eq!(result.positional(), ["word"]);
    assert!(!result.contains_short('q'));
}

// ---------------------------------------------------------------------------
// Binding and re-use
// ---------------------------------------------------------------------------

#[test]
fn bound_targets_receive_values() {
    let quiet = Cell::new(false);
    let count = Slot::new();
    let ratio = Slot::new();
    let mut registry = less_options();
    registry.add(OptionSpec::new("silent", None).bind_flag(&quiet));
    registry.add(
        OptionSpec::new("count", 'N')
            .with_argument("COUNT", true)
            .bind_int(&count),
    );
    registry.add(
        OptionSpec::new("ratio", 'R')
            .with_argument("R", false)
            .bind_float(&ratio),
    );

    Parser::default()
        .parse_args(&registry, ["prog", "--silent", "-N-7", "--ratio=0.25"], true)
        .unwrap();

    assert!(quiet.get());
    assert_eq!(count.get(), Some(-7));
    assert_eq!(ratio.get(), Some(0.25));
}

#[test]
fn failed_conversion_does_not_write_target() {
    let count = Slot::new();
    let mut registry = OptionRegistry::new();
    registry.add(
        OptionSpec::new("count", None)
            .with_argument("N", true)
            .bind_int(&count),
    );

    let err = Parser::default()
        .parse_args(&registry, ["--count=abc"], false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(count.get(), None);
    assert!(!count.is_present());

    Parser::default()
        .parse_args(&registry, ["--count=42"], false)
        .unwrap();
    assert_eq!(count.get(), Some(42));
    assert!(count.is_present());
}

#[test]
fn rejected_argument_does_not_set_flag() {
    let all = Cell::new(false);
    let mut registry = OptionRegistry::new();
    registry.add(OptionSpec::new("all", 'a').bind_flag(&all));

    let err = Parser::default()
        .parse_args(&registry, ["--all=yes"], false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentNotAccepted);
    assert!(!all.get());

    Parser::default().parse_args(&registry, ["--all"], false).unwrap();
    assert!(all.get());
}

#[test]
fn optional_argument_takes_unregistered_negative_number() {
    let level = Slot::new();
    let mut registry = OptionRegistry::new();
    registry.add(OptionSpec::new("verbose", 'v'));
    registry.add(
        OptionSpec::new("level", None)
            .with_argument("N", false)
            .bind_int(&level),
    );
    let parser = Parser::default();

    let result = parser.parse_args(&registry, ["--level", "-5"], false).unwrap();
    assert_eq!(result[0].original_text, "--level -5");
    assert_eq!(level.get(), Some(-5));

    let result = parser.parse_args(&registry, ["--level", "-v"], false).unwrap();
    assert_eq!(result.len(), 2);
    assert!(!result[0].has_argument());
    assert!(result.contains_short('v'));
}

#[test]
fn clear_then_reparse_matches_fresh_parse() {
    let registry = less_options();
    let parser = Parser::default();
    let args = ["prog", "-aA", "--pattern", "x", "file", "--", "-q"];

    let mut reused = parser.parse_args(&registry, ["prog", "-e", "old"], true).unwrap();
    reused.clear();
    parser
        .parse_into(&registry, args, true, &mut reused)
        .unwrap();

    let fresh = parser.parse_args(&registry, args, true).unwrap();
    assert_eq!(reused, fresh);
}

#[test]
fn assignment_and_separate_forms_agree() {
    let registry = less_options();
    let joined = parse(&registry, &["prog", "--pattern=abc"]);
    let split = parse(&registry, &["prog", "--pattern", "abc"]);

    assert_eq!(joined[0].long_name, split[0].long_name);
    assert_eq!(joined[0].argument, split[0].argument);
    assert!(std::ptr::eq(
        joined[0].option.unwrap(),
        split[0].option.unwrap()
    ));
}

#[test]
fn command_line_strings_are_split_with_quotes() {
    let registry = less_options();
    let result = Parser::default()
        .parse_str(
            &registry,
            r#"less -P "custom prompt" --pattern='a b' notes\ 1.txt"#,
            true,
        )
        .unwrap();

    assert_eq!(result.program(), Some("less"));
    assert_eq!(result.find_short('P').unwrap().argument, "custom prompt");
    assert_eq!(result.find_long("pattern").unwrap().argument, "a b");
    assert_eq!(result.positional(), ["notes 1.txt"]);
}

// ---------------------------------------------------------------------------
// Help and validation
// ---------------------------------------------------------------------------

#[test]
fn help_lists_every_option() {
    let registry = less_options();
    let help = Parser::default().help(&registry);

    assert!(help.starts_with("  -?, --help                  display help text\n"));
    assert!(help.contains("\n      --block-size=SIZE       scale sizes by SIZE\n"));
    assert!(help.contains("\n  -P[=PROMPT]                 use custom prompt\n"));
    assert!(help.contains("\n  -S                          chop long lines\n"));
    assert_eq!(help.lines().count(), registry.len());
    assert!(help.lines().all(|line| line.chars().count() <= 78));
}

#[test]
fn less_table_is_valid() {
    let registry = less_options();
    assert!(registry.validate(&ParserConfig::default()).is_empty());
}
