//! Positionally-exact text diffing for driving change-tracking UIs.
//!
//! Given two versions of a document, [`compute_exact_diff`] returns a
//! minimal, ordered list of [`Change`]s — insertions, deletions and coalesced
//! replacements — with byte-exact offsets into the old document, at word or
//! character granularity. [`compute_line_based_exact_diff`] aligns lines
//! first and re-diffs each pair of replaced lines at word granularity, which
//! keeps changes scoped to the line they occur in.
//!
//! Both entry points are pure, deterministic and total over any pair of
//! strings, so they are safe to call concurrently without coordination.

mod change;
mod diff;
mod granularity;
mod line_diff;
mod tokenizer;
mod utils;

pub use change::Change;
pub use diff::compute_exact_diff;
pub use granularity::{Granularity, ParseGranularityError};
pub use line_diff::compute_line_based_exact_diff;
pub use tokenizer::{
    line_tokenizer::line_tokenizer, token::Token, word_tokenizer::word_tokenizer,
};
