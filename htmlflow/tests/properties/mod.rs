//! Property-based tests for whitespace normalization and section output
//!
//! These tests check the invariants that hold for any input:
//! - Normalized text never contains a whitespace run longer than one space
//! - Normalizing already-normalized text changes nothing
//! - A conversion never yields an empty section
//! - Only sections produced inside an anchor carry a link

use htmlflow::convert;
use htmlflow::whitespace::{is_space, normalize};
use proptest::prelude::*;

/// Raw text mixing words with assorted whitespace
fn raw_text_strategy() -> impl Strategy<Value = String> {
    "[a-z \t\n\r]{0,40}"
}

/// Text that is already in normalized form: single spaces, optional
/// trailing space, no leading space
fn normalized_text_strategy() -> impl Strategy<Value = String> {
    ("([a-z]{1,5} ){0,6}[a-z]{1,5}", any::<bool>())
        .prop_map(|(words, trailing)| if trailing { format!("{words} ") } else { words })
}

/// Small markup fragments that exercise every recognized construct
const FRAGMENTS: &[&str] = &[
    "<p>",
    "</p>",
    "<h2>",
    "</h2>",
    "<a href=\"u\">",
    "<a>",
    "</a>",
    "<br>",
    "<hr>",
    "<b>",
    "</b>",
    " ",
    "\n",
    "word",
    "two words ",
];

fn markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..30).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn normalized_text_has_no_double_spaces(raw in raw_text_strategy(), trim in any::<bool>()) {
        let out = normalize(&raw, trim);
        prop_assert!(!out.contains("  "));
        prop_assert!(out.chars().all(|c| c == ' ' || !is_space(c)));
    }

    #[test]
    fn trimmed_text_never_starts_with_space(raw in raw_text_strategy()) {
        let out = normalize(&raw, true);
        prop_assert!(!out.starts_with(' '));
    }

    #[test]
    fn words_are_preserved(raw in raw_text_strategy(), trim in any::<bool>()) {
        let out = normalize(&raw, trim);
        let expected: Vec<&str> = raw.split(is_space).filter(|w| !w.is_empty()).collect();
        let actual: Vec<&str> = out.split(' ').filter(|w| !w.is_empty()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn normalizing_is_idempotent(text in normalized_text_strategy()) {
        prop_assert_eq!(normalize(&text, true), text.clone());
        prop_assert_eq!(normalize(&text, false), text);
    }

    #[test]
    fn sections_are_never_empty(markup in markup_strategy()) {
        let sections = convert(&markup).unwrap();
        prop_assert!(sections.iter().all(|s| !s.text.is_empty()));
    }

    #[test]
    fn links_only_come_from_anchors(markup in markup_strategy()) {
        let sections = convert(&markup).unwrap();
        if !markup.contains("href") {
            prop_assert!(sections.iter().all(|s| s.link.is_none()));
        }
        for section in sections.iter().filter(|s| s.is_link()) {
            prop_assert_eq!(section.link.as_deref(), Some("u"));
        }
    }
}
