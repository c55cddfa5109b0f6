use exact_diff::{Change, Granularity, compute_exact_diff, compute_line_based_exact_diff};
use pretty_assertions::assert_eq;
use test_case::test_case;

const DOCUMENT_PAIRS: &[(&str, &str)] = &[
    ("", ""),
    ("", "hello"),
    ("hello", ""),
    ("The cat sat.", "The cat sat."),
    ("The cat sat on the mat.", "The dog sat on a mat!"),
    (
        "The Smart City Initiative aims to transform urban living through technology.",
        "The City Initiative aims to revolutionize urban living through cutting-edge technology.",
    ),
    ("line1\nline2\n", "line1\nlineTWO\n"),
    ("a\nb\nc\n", "a\nc\n"),
    ("no newline", "no newline at all"),
    ("  leading and trailing  ", "leading and trailing"),
    ("caffè látte ☕", "caffè mòcha ☕"),
    ("\n\n\n", "\n"),
];

fn apply_changes(old: &str, changes: &[Change]) -> String {
    let mut result = old.to_owned();

    // changes arrive in non-decreasing start order, so applying them back to
    // front keeps earlier offsets valid
    for change in changes.iter().rev() {
        result.replace_range(
            change.start_pos()..change.end_pos(),
            change.new_text().unwrap_or(""),
        );
    }

    result
}

#[test_case(Granularity::Word; "word")]
#[test_case(Granularity::Character; "character")]
fn test_identity(granularity: Granularity) {
    for &(old, new) in DOCUMENT_PAIRS {
        assert_eq!(compute_exact_diff(old, old, granularity), vec![]);
        assert_eq!(compute_exact_diff(new, new, granularity), vec![]);
    }
}

#[test_case(Granularity::Word; "word")]
#[test_case(Granularity::Character; "character")]
fn test_offset_validity(granularity: Granularity) {
    for &(old, new) in DOCUMENT_PAIRS {
        for change in compute_exact_diff(old, new, granularity) {
            if let Some(old_text) = change.old_text() {
                assert_eq!(
                    &old[change.start_pos()..change.end_pos()],
                    old_text,
                    "old span mismatch for {old:?} -> {new:?}"
                );
            }
            if let Some(new_text) = change.new_text() {
                assert!(
                    new.contains(new_text),
                    "inserted text {new_text:?} is not a slice of {new:?}"
                );
            }
        }
    }
}

#[test_case(Granularity::Word; "word")]
#[test_case(Granularity::Character; "character")]
fn test_changes_are_ordered_and_disjoint(granularity: Granularity) {
    for &(old, new) in DOCUMENT_PAIRS {
        let changes = compute_exact_diff(old, new, granularity);

        for window in changes.windows(2) {
            assert!(
                window[0].start_pos() <= window[1].start_pos(),
                "changes out of order for {old:?} -> {new:?}"
            );
            assert!(
                window[0].end_pos() <= window[1].start_pos(),
                "changes overlap for {old:?} -> {new:?}"
            );
        }
    }
}

#[test]
fn test_reconstruction_at_character_granularity() {
    for &(old, new) in DOCUMENT_PAIRS {
        let changes = compute_exact_diff(old, new, Granularity::Character);
        assert_eq!(
            apply_changes(old, &changes),
            new,
            "reconstruction failed for {old:?} -> {new:?}"
        );
    }
}

#[test]
fn test_reconstruction_at_word_granularity_for_replacements() {
    // replace-shaped edits span whole token runs on both sides, so applying
    // them round-trips exactly
    let old = "the quick brown fox jumps";
    let new = "the slow brown cat jumps";

    let changes = compute_exact_diff(old, new, Granularity::Word);
    assert!(
        changes
            .iter()
            .all(|change| matches!(change, Change::Replace { .. }))
    );
    assert_eq!(apply_changes(old, &changes), new);
}

#[test]
fn test_word_index_presence_follows_granularity() {
    for &(old, new) in DOCUMENT_PAIRS {
        for change in compute_exact_diff(old, new, Granularity::Word) {
            assert!(change.word_index().is_some());
        }
        for change in compute_exact_diff(old, new, Granularity::Character) {
            assert!(change.word_index().is_none());
        }
        for change in compute_line_based_exact_diff(old, new) {
            assert!(change.word_index().is_none());
        }
    }
}

#[test]
fn test_line_based_changes_never_touch_unmodified_lines() {
    let changes = compute_line_based_exact_diff("line1\nline2\n", "line1\nlineTWO\n");

    assert!(!changes.is_empty());
    for change in &changes {
        assert_eq!(change.line_number(), 2);
        assert!(change.start_pos() >= "line1\n".len());
    }
}

#[test]
fn test_line_based_offsets_are_valid_slices() {
    for &(old, new) in DOCUMENT_PAIRS {
        for change in compute_line_based_exact_diff(old, new) {
            if let Some(old_text) = change.old_text() {
                assert_eq!(
                    &old[change.start_pos()..change.end_pos()],
                    old_text,
                    "old span mismatch for {old:?} -> {new:?}"
                );
            }
        }
    }
}

#[test]
fn test_line_numbers_are_computed_against_the_old_document() {
    let old = "one\ntwo\nthree";
    let new = "one\ntwo\nTHREE and more";

    for granularity in [Granularity::Word, Granularity::Character] {
        for change in compute_exact_diff(old, new, granularity) {
            assert_eq!(change.line_number(), 3);
        }
    }
}
