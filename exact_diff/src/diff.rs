use crate::{
    Change, Granularity,
    tokenizer::{token::Token, word_tokenizer::word_tokenizer},
    utils::sequence_matcher::{DiffTag, diff_opcodes},
};

/// Computes the ordered list of exact changes between two documents at word
/// or character granularity.
///
/// Equal runs produce no change; a replaced run is reported as one coalesced
/// [`Change::Replace`]. Identical documents yield an empty list. The function
/// is total over any pair of strings.
///
/// ```
/// use exact_diff::{Change, Granularity, compute_exact_diff};
///
/// let changes = compute_exact_diff("The cat sat", "The dog sat", Granularity::Word);
/// assert_eq!(changes, vec![Change::Replace {
///     start_pos: 4,
///     end_pos: 7,
///     old_text: "cat".to_owned(),
///     new_text: "dog".to_owned(),
///     line_number: 1,
///     word_index: Some(1),
/// }]);
/// ```
#[must_use]
pub fn compute_exact_diff(old: &str, new: &str, granularity: Granularity) -> Vec<Change> {
    match granularity {
        Granularity::Word => word_diff(old, new),
        Granularity::Character => character_diff(old, new),
    }
}

fn word_diff(old: &str, new: &str) -> Vec<Change> {
    let old_tokens = word_tokenizer(old);
    let new_tokens = word_tokenizer(new);

    let old_words: Vec<&str> = old_tokens.iter().map(Token::text).collect();
    let new_words: Vec<&str> = new_tokens.iter().map(Token::text).collect();

    let mut changes = Vec::new();

    for opcode in diff_opcodes(&old_words, &new_words) {
        match opcode.tag {
            DiffTag::Equal => {}

            DiffTag::Delete => {
                let start_pos = old_tokens[opcode.old.start].start();
                let end_pos = old_tokens[opcode.old.end - 1].end();

                changes.push(Change::Delete {
                    start_pos,
                    end_pos,
                    old_text: old[start_pos..end_pos].to_owned(),
                    line_number: line_number_at(old, start_pos),
                    word_index: Some(opcode.old.start),
                });
            }

            DiffTag::Insert => {
                let new_start = new_tokens[opcode.new.start].start();
                let new_end = new_tokens[opcode.new.end - 1].end();
                let insert_pos = insertion_point(&old_tokens, opcode.old.start, old.len());

                changes.push(Change::Insert {
                    start_pos: insert_pos,
                    end_pos: insert_pos,
                    new_text: new[new_start..new_end].to_owned(),
                    line_number: line_number_at(old, insert_pos),
                    word_index: Some(opcode.old.start),
                });
            }

            DiffTag::Replace => {
                let start_pos = old_tokens[opcode.old.start].start();
                let end_pos = old_tokens[opcode.old.end - 1].end();
                let new_start = new_tokens[opcode.new.start].start();
                let new_end = new_tokens[opcode.new.end - 1].end();

                changes.push(Change::Replace {
                    start_pos,
                    end_pos,
                    old_text: old[start_pos..end_pos].to_owned(),
                    new_text: new[new_start..new_end].to_owned(),
                    line_number: line_number_at(old, start_pos),
                    word_index: Some(opcode.old.start),
                });
            }
        }
    }

    changes
}

fn character_diff(old: &str, new: &str) -> Vec<Change> {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();

    // maps char indices back to byte offsets, so spans stay valid slices
    // under multi-byte UTF-8
    let old_boundaries = char_boundaries(old);
    let new_boundaries = char_boundaries(new);

    let mut changes = Vec::new();

    for opcode in diff_opcodes(&old_chars, &new_chars) {
        match opcode.tag {
            DiffTag::Equal => {}

            DiffTag::Delete => {
                let start_pos = old_boundaries[opcode.old.start];
                let end_pos = old_boundaries[opcode.old.end];

                changes.push(Change::Delete {
                    start_pos,
                    end_pos,
                    old_text: old[start_pos..end_pos].to_owned(),
                    line_number: line_number_at(old, start_pos),
                    word_index: None,
                });
            }

            DiffTag::Insert => {
                let insert_pos = old_boundaries[opcode.old.start];
                let new_start = new_boundaries[opcode.new.start];
                let new_end = new_boundaries[opcode.new.end];

                changes.push(Change::Insert {
                    start_pos: insert_pos,
                    end_pos: insert_pos,
                    new_text: new[new_start..new_end].to_owned(),
                    line_number: line_number_at(old, insert_pos),
                    word_index: None,
                });
            }

            DiffTag::Replace => {
                let start_pos = old_boundaries[opcode.old.start];
                let end_pos = old_boundaries[opcode.old.end];
                let new_start = new_boundaries[opcode.new.start];
                let new_end = new_boundaries[opcode.new.end];

                changes.push(Change::Replace {
                    start_pos,
                    end_pos,
                    old_text: old[start_pos..end_pos].to_owned(),
                    new_text: new[new_start..new_end].to_owned(),
                    line_number: line_number_at(old, start_pos),
                    word_index: None,
                });
            }
        }
    }

    changes
}

/// Where an insertion before old token `index` lands in old-document
/// coordinates: the end of the preceding token, 0 at the very start, the
/// document length past the end.
pub(crate) fn insertion_point(old_tokens: &[Token<'_>], index: usize, old_len: usize) -> usize {
    if index == 0 {
        0
    } else if index <= old_tokens.len() {
        old_tokens[index - 1].end()
    } else {
        old_len
    }
}

/// 1-based line number of `position` in `text`: the number of newlines
/// strictly before it, plus one.
pub(crate) fn line_number_at(text: &str, position: usize) -> usize {
    text.as_bytes()[..position]
        .iter()
        .filter(|&&byte| byte == b'\n')
        .count()
        + 1
}

fn char_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
    boundaries.push(text.len());
    boundaries
}
