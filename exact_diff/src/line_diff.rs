use crate::{
    Change,
    diff::insertion_point,
    tokenizer::{
        line_tokenizer::{line_tokenizer, strip_line_terminator},
        token::Token,
        word_tokenizer::word_tokenizer,
    },
    utils::sequence_matcher::{DiffTag, Opcode, diff_opcodes},
};

/// Computes changes line by line, reporting only the exact in-line edits
/// within modified lines.
///
/// Lines are aligned first; each pair of replaced lines is then re-diffed at
/// word granularity, so a one-word edit inside a long line yields one small
/// change rather than a whole-line replace. Unpaired lines of an
/// unequal-length replace are reported as whole-line deletes or inserts, as
/// are lines covered by plain delete/insert opcodes.
///
/// Offsets are tracked by two running cursors over the old and new documents,
/// advanced after every opcode. Every change's `line_number` is the 1-based
/// old-document index of the line it was derived from; inserted lines with no
/// old counterpart use the line following the last aligned old line.
///
/// ```
/// use exact_diff::{Change, compute_line_based_exact_diff};
///
/// let changes = compute_line_based_exact_diff("line1\nline2\n", "line1\nlineTWO\n");
/// assert_eq!(changes, vec![Change::Replace {
///     start_pos: 6,
///     end_pos: 11,
///     old_text: "line2".to_owned(),
///     new_text: "lineTWO".to_owned(),
///     line_number: 2,
///     word_index: None,
/// }]);
/// ```
#[must_use]
pub fn compute_line_based_exact_diff(old: &str, new: &str) -> Vec<Change> {
    let old_lines = line_tokenizer(old);
    let new_lines = line_tokenizer(new);

    let old_texts: Vec<&str> = old_lines.iter().map(Token::text).collect();
    let new_texts: Vec<&str> = new_lines.iter().map(Token::text).collect();

    let mut changes = Vec::new();
    let mut old_pos = 0;
    let mut new_pos = 0;

    for opcode in diff_opcodes(&old_texts, &new_texts) {
        match opcode.tag {
            DiffTag::Equal => {
                for line in &old_lines[opcode.old.clone()] {
                    old_pos += line.len();
                }
                for line in &new_lines[opcode.new.clone()] {
                    new_pos += line.len();
                }
            }

            DiffTag::Delete => {
                for index in opcode.old.clone() {
                    changes.push(whole_line_delete(&old_lines[index], old_pos, index + 1));
                    old_pos += old_lines[index].len();
                }
            }

            DiffTag::Insert => {
                for index in opcode.new.clone() {
                    changes.push(whole_line_insert(
                        &new_lines[index],
                        old_pos,
                        opcode.old.start + 1,
                    ));
                    new_pos += new_lines[index].len();
                }
            }

            DiffTag::Replace => {
                replace_lines(
                    &opcode,
                    &old_lines,
                    &new_lines,
                    &mut old_pos,
                    &mut new_pos,
                    &mut changes,
                );
            }
        }
    }

    changes
}

/// Pairs up replaced lines positionally and emits fine-grained in-line
/// changes for each pair; leftover lines of the longer range become
/// whole-line deletes or inserts.
fn replace_lines(
    opcode: &Opcode,
    old_lines: &[Token<'_>],
    new_lines: &[Token<'_>],
    old_pos: &mut usize,
    new_pos: &mut usize,
    changes: &mut Vec<Change>,
) {
    let paired = opcode.old.len().min(opcode.new.len());

    for offset in 0..paired {
        let old_index = opcode.old.start + offset;
        let new_index = opcode.new.start + offset;

        let old_line = strip_line_terminator(old_lines[old_index].text());
        let new_line = strip_line_terminator(new_lines[new_index].text());

        changes.extend(inline_changes(old_line, new_line, *old_pos, old_index + 1));

        *old_pos += old_lines[old_index].len();
        *new_pos += new_lines[new_index].len();
    }

    for old_index in opcode.old.start + paired..opcode.old.end {
        changes.push(whole_line_delete(&old_lines[old_index], *old_pos, old_index + 1));
        *old_pos += old_lines[old_index].len();
    }

    for new_index in opcode.new.start + paired..opcode.new.end {
        changes.push(whole_line_insert(
            &new_lines[new_index],
            *old_pos,
            opcode.old.end + 1,
        ));
        *new_pos += new_lines[new_index].len();
    }
}

/// Word-level changes within one pair of replaced lines, with offsets shifted
/// into old-document coordinates.
fn inline_changes(
    old_line: &str,
    new_line: &str,
    line_start: usize,
    line_number: usize,
) -> Vec<Change> {
    let old_tokens = word_tokenizer(old_line);
    let new_tokens = word_tokenizer(new_line);

    let old_words: Vec<&str> = old_tokens.iter().map(Token::text).collect();
    let new_words: Vec<&str> = new_tokens.iter().map(Token::text).collect();

    let mut changes = Vec::new();

    for opcode in diff_opcodes(&old_words, &new_words) {
        match opcode.tag {
            DiffTag::Equal => {}

            DiffTag::Delete => {
                let start = old_tokens[opcode.old.start].start();
                let end = old_tokens[opcode.old.end - 1].end();

                changes.push(Change::Delete {
                    start_pos: line_start + start,
                    end_pos: line_start + end,
                    old_text: old_line[start..end].to_owned(),
                    line_number,
                    word_index: None,
                });
            }

            DiffTag::Insert => {
                let new_start = new_tokens[opcode.new.start].start();
                let new_end = new_tokens[opcode.new.end - 1].end();
                let insert_pos = line_start
                    + insertion_point(&old_tokens, opcode.old.start, old_line.len());

                changes.push(Change::Insert {
                    start_pos: insert_pos,
                    end_pos: insert_pos,
                    new_text: new_line[new_start..new_end].to_owned(),
                    line_number,
                    word_index: None,
                });
            }

            DiffTag::Replace => {
                let start = old_tokens[opcode.old.start].start();
                let end = old_tokens[opcode.old.end - 1].end();
                let new_start = new_tokens[opcode.new.start].start();
                let new_end = new_tokens[opcode.new.end - 1].end();

                changes.push(Change::Replace {
                    start_pos: line_start + start,
                    end_pos: line_start + end,
                    old_text: old_line[start..end].to_owned(),
                    new_text: new_line[new_start..new_end].to_owned(),
                    line_number,
                    word_index: None,
                });
            }
        }
    }

    changes
}

fn whole_line_delete(line: &Token<'_>, position: usize, line_number: usize) -> Change {
    let stripped = strip_line_terminator(line.text());
    Change::Delete {
        start_pos: position,
        end_pos: position + stripped.len(),
        old_text: stripped.to_owned(),
        line_number,
        word_index: None,
    }
}

fn whole_line_insert(line: &Token<'_>, position: usize, line_number: usize) -> Change {
    let stripped = strip_line_terminator(line.text());
    Change::Insert {
        start_pos: position,
        end_pos: position,
        new_text: stripped.to_owned(),
        line_number,
        word_index: None,
    }
}
