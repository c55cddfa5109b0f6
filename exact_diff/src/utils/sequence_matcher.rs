//! Ratcliff–Obershelp sequence alignment, following the classic
//! longest-matching-block-first recursion popularised by Python's
//! [`difflib.SequenceMatcher`](https://docs.python.org/3/library/difflib.html).
//!
//! * time: `O(N * M)` worst case, near-linear on sequences with substantial
//!   overlap
//! * space: `O(N + M)`
//!
//! No element is ever treated as junk and no popularity heuristic is applied,
//! so every element participates in matching and the opcode list is fully
//! deterministic for a given pair of inputs: the earliest longest matching
//! block always wins.

use std::{collections::HashMap, hash::Hash, ops::Range};

/// One alignment step over index ranges of both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    /// `old[old_range] == new[new_range]`
    Equal,
    /// `old_range` is non-empty, `new_range` is empty
    Delete,
    /// `old_range` is empty, `new_range` is non-empty
    Insert,
    /// both ranges are non-empty
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: DiffTag,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

#[derive(Debug, Clone, Copy)]
struct MatchingBlock {
    old_start: usize,
    new_start: usize,
    len: usize,
}

/// Aligns `old` and `new`, returning opcodes in order. Adjacent ranges cover
/// both sequences without gaps; `Equal` runs are included.
pub fn diff_opcodes<T>(old: &[T], new: &[T]) -> Vec<Opcode>
where
    T: Eq + Hash,
{
    let mut opcodes = Vec::new();
    let mut old_index = 0;
    let mut new_index = 0;

    for block in matching_blocks(old, new) {
        let tag = match (old_index < block.old_start, new_index < block.new_start) {
            (true, true) => Some(DiffTag::Replace),
            (true, false) => Some(DiffTag::Delete),
            (false, true) => Some(DiffTag::Insert),
            (false, false) => None,
        };

        if let Some(tag) = tag {
            opcodes.push(Opcode {
                tag,
                old: old_index..block.old_start,
                new: new_index..block.new_start,
            });
        }

        old_index = block.old_start + block.len;
        new_index = block.new_start + block.len;

        if block.len > 0 {
            opcodes.push(Opcode {
                tag: DiffTag::Equal,
                old: block.old_start..old_index,
                new: block.new_start..new_index,
            });
        }
    }

    opcodes
}

/// Finds all maximal matching blocks by recursing on both sides of the
/// longest one, then coalesces adjacent blocks. The returned list is sorted
/// and terminated by a zero-length sentinel at `(old.len(), new.len())`.
fn matching_blocks<T>(old: &[T], new: &[T]) -> Vec<MatchingBlock>
where
    T: Eq + Hash,
{
    let mut new_indices: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, element) in new.iter().enumerate() {
        new_indices.entry(element).or_default().push(j);
    }

    let mut queue = vec![(0, old.len(), 0, new.len())];
    let mut matches = Vec::new();

    while let Some((old_lo, old_hi, new_lo, new_hi)) = queue.pop() {
        let block = longest_matching_block(old, &new_indices, old_lo, old_hi, new_lo, new_hi);
        if block.len == 0 {
            continue;
        }

        if old_lo < block.old_start && new_lo < block.new_start {
            queue.push((old_lo, block.old_start, new_lo, block.new_start));
        }
        if block.old_start + block.len < old_hi && block.new_start + block.len < new_hi {
            queue.push((
                block.old_start + block.len,
                old_hi,
                block.new_start + block.len,
                new_hi,
            ));
        }
        matches.push(block);
    }

    matches.sort_by_key(|block| (block.old_start, block.new_start));

    let mut blocks: Vec<MatchingBlock> = Vec::new();
    for block in matches {
        if let Some(last) = blocks.last_mut() {
            if last.old_start + last.len == block.old_start
                && last.new_start + last.len == block.new_start
            {
                last.len += block.len;
                continue;
            }
        }
        blocks.push(block);
    }

    blocks.push(MatchingBlock {
        old_start: old.len(),
        new_start: new.len(),
        len: 0,
    });

    blocks
}

/// The longest block of equal elements within
/// `old[old_lo..old_hi] x new[new_lo..new_hi]`. Ties are broken towards the
/// earliest start in `old`, then in `new`.
fn longest_matching_block<T>(
    old: &[T],
    new_indices: &HashMap<&T, Vec<usize>>,
    old_lo: usize,
    old_hi: usize,
    new_lo: usize,
    new_hi: usize,
) -> MatchingBlock
where
    T: Eq + Hash,
{
    let mut best = MatchingBlock {
        old_start: old_lo,
        new_start: new_lo,
        len: 0,
    };

    // lengths of matches ending at each `new` index for the previous `old` index
    let mut match_lengths: HashMap<usize, usize> = HashMap::new();

    for i in old_lo..old_hi {
        let mut next_match_lengths = HashMap::new();

        if let Some(indices) = new_indices.get(&old[i]) {
            for &j in indices {
                if j < new_lo {
                    continue;
                }
                if j >= new_hi {
                    break;
                }

                let len = j
                    .checked_sub(1)
                    .and_then(|previous| match_lengths.get(&previous))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_match_lengths.insert(j, len);

                if len > best.len {
                    best = MatchingBlock {
                        old_start: i + 1 - len,
                        new_start: j + 1 - len,
                        len,
                    };
                }
            }
        }

        match_lengths = next_match_lengths;
    }

    best
}
