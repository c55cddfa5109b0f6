use super::token::Token;

/// Splits text on word boundaries, emitting a token for every maximal run of
/// non-whitespace characters. Whitespace runs are skipped; their spans remain
/// recoverable as the gaps between consecutive tokens.
///
/// ## Example
///
/// ```not_rust
/// "Hi there!" -> ["Hi" @ 0..2, "there!" @ 3..9]
/// ```
#[must_use]
pub fn word_tokenizer(text: &str) -> Vec<Token<'_>> {
    let mut result = Vec::new();

    let mut run_start = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_none_or(char::is_whitespace);

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            if !previous_char_is_whitespace {
                result.push(Token::new(&text[run_start..i], run_start));
            }
            run_start = i;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if run_start < text.len() && !previous_char_is_whitespace {
        result.push(Token::new(&text[run_start..], run_start));
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spans(text: &str) -> Vec<(&str, usize, usize)> {
        word_tokenizer(text)
            .iter()
            .map(|token| (token.text(), token.start(), token.end()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(spans(""), vec![]);
    }

    #[test]
    fn test_only_whitespace() {
        assert_eq!(spans("  \t\n "), vec![]);
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(spans("Hi there!"), vec![("Hi", 0, 2), ("there!", 3, 9)]);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(spans(" what? "), vec![("what?", 1, 6)]);
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(
            spans(" hello, \nwhere are you?"),
            vec![
                ("hello,", 1, 7),
                ("where", 9, 14),
                ("are", 15, 18),
                ("you?", 19, 23)
            ]
        );
    }

    #[test]
    fn test_no_whitespace_is_a_single_token() {
        assert_eq!(spans("supercalifragilistic"), vec![
            ("supercalifragilistic", 0, 20)
        ]);
    }

    #[test]
    fn test_multi_byte_characters() {
        // offsets are byte offsets, so the spans stay valid slices
        let text = "héllo wörld";
        let tokens = word_tokenizer(text);
        assert_eq!(tokens.len(), 2);
        for token in tokens {
            assert_eq!(&text[token.start()..token.end()], token.text());
        }
    }
}
