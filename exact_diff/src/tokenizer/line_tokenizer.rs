use super::token::Token;

/// Splits text into lines, keeping each line's terminator attached so the
/// original formatting round-trips through the token spans. `\r\n` endings
/// are preserved as part of the line they terminate.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld" -> ["Hello\n" @ 0..6, "World" @ 6..11]
/// ```
#[must_use]
pub fn line_tokenizer(text: &str) -> Vec<Token<'_>> {
    let mut start = 0;
    text.split_inclusive('\n')
        .map(|line| {
            let token = Token::new(line, start);
            start += line.len();
            token
        })
        .collect()
}

/// The line's text without its `\n` or `\r\n` terminator.
#[must_use]
pub fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |stripped| stripped.strip_suffix('\r').unwrap_or(stripped))
}
