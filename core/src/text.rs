//! Text helpers: word wrapping for help output and quote-aware splitting of
//! command-line strings.

/// Word-wraps `text` to `width` columns.
///
/// The first line is indented by `first_line_indent` spaces and every
/// following line by `indent` spaces. Embedded newlines start a new
/// paragraph at `indent`. A word longer than the available width is placed
/// on a line of its own rather than broken. No trailing newline is added.
///
/// # Examples
///
/// ```
/// use optline_core::text::wrap_text;
///
/// let wrapped = wrap_text("the quick brown fox jumps", 12, 2, 0);
/// assert_eq!(wrapped, "the quick\n  brown fox\n  jumps");
/// ```
pub fn wrap_text(text: &str, width: usize, indent: usize, first_line_indent: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (index, paragraph) in text.split('\n').enumerate() {
        let lead = if index == 0 { first_line_indent } else { indent };
        let mut line = " ".repeat(lead);
        let mut line_len = lead;
        let mut has_words = false;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if has_words && line_len + 1 + word_len > width {
                lines.push(line);
                line = " ".repeat(indent);
                line_len = indent;
                has_words = false;
            }
            if has_words {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += word_len;
            has_words = true;
        }

        if has_words {
            lines.push(line);
        } else {
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Splits a command-line string into tokens.
///
/// Any character in `delimiters` separates tokens; runs of delimiters never
/// produce empty tokens. A character in `quotes` opens a section that runs
/// to the next occurrence of the same character; delimiters inside it are
/// literal and the quotes themselves are dropped, so `""` yields an empty
/// token. The `escape` character makes the following character literal. An
/// unterminated quote extends to the end of the input, and a trailing
/// escape character is kept as-is.
///
/// # Examples
///
/// ```
/// use optline_core::text::split;
///
/// let tokens = split(r#"prog -P "custom prompt" it\'s ''"#, " ", "\"'", Some('\\'));
/// assert_eq!(tokens, vec!["prog", "-P", "custom prompt", "it's", ""]);
/// ```
pub fn split(text: &str, delimiters: &str, quotes: &str, escape: Option<char>) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut open_quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if Some(ch) == escape {
            current.push(chars.next().unwrap_or(ch));
            in_token = true;
            continue;
        }

        match open_quote {
            Some(quote) if ch == quote => open_quote = None,
            Some(_) => current.push(ch),
            None if quotes.contains(ch) => {
                open_quote = Some(ch);
                in_token = true;
            }
            None if delimiters.contains(ch) => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}
