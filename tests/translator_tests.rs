//! Rule file loading and query translation tests.
//!
//! The fixture dictionary mirrors the rule file shape: triggers are coarse
//! substrings of their own alternates, and one trigger accumulates groups
//! across two rule lines.

use cardex::{translate, DictionaryError, SynonymDictionary};
use proptest::prelude::*;

const RULES: &str = "\
Anything before the sentinel line is commentary and is ignored,
even lines that would not split into three fields.
@@@
FLY@FLYING,FLIES@FLYING
TRAMPLE@TRAMPLE,TRAMPLING@TRAMPLE
FLY@AERIAL@FLYING
RED@RED@RED
";

fn dictionary() -> SynonymDictionary {
    SynonymDictionary::load(RULES.as_bytes(), "rules.txt").expect("fixture rules load")
}

#[test]
fn test_load_accumulates_repeated_triggers() {
    let dictionary = dictionary();

    assert_eq!(dictionary.len(), 3);
    let fly = dictionary.get("FLY").expect("FLY registered");
    assert_eq!(fly.groups.len(), 2);
    assert_eq!(fly.groups[0].keyword, "FLYING");
    assert_eq!(fly.groups[1].alternates.as_slice(), ["AERIAL"]);
}

#[test]
fn test_malformed_rule_line_aborts_with_record_index() {
    let text = "@@@\nFLY@FLYING,FLIES@FLYING\nTRAMPLE@TRAMPLE\n";
    let err = SynonymDictionary::load(text.as_bytes(), "rules.txt").unwrap_err();

    assert!(matches!(
        err,
        DictionaryError::FieldCount {
            record: 2,
            found: 2,
            ..
        }
    ));
    assert!(err.to_string().contains("rules.txt"));
}

#[test]
fn test_translate_empty_input_is_empty_everything() {
    let query = translate("", &dictionary());

    assert!(query.keywords.is_empty());
    assert!(query.exclusions.is_empty());
    assert_eq!(query.residual, "");
}

#[test]
fn test_translate_spec_phrase() {
    let query = translate("creatures that can FLYING please", &dictionary());

    assert_eq!(query.keywords, ["FLYING"]);
    assert!(!query.residual.contains("FLYING"));
    assert!(!query.residual.contains("FLIES"));
    assert_eq!(query.residual, "CREATURES THAT CAN PLEASE");
}

#[test]
fn test_translate_keeps_rule_file_order() {
    // TRAMPLE precedes RED in the rule file, whatever the input order.
    let query = translate("red cards that trample", &dictionary());
    assert_eq!(query.keywords, ["TRAMPLE", "RED"]);
    assert_eq!(query.residual, "CARDS THAT");
}

#[test]
fn test_greedy_removal_takes_every_occurrence() {
    let query = translate("FLYING high, FLYING low, FLYING fast", &dictionary());

    assert_eq!(query.keywords, ["FLYING"]);
    assert_eq!(query.residual, "HIGH LOW FAST");
}

#[test]
fn test_second_group_still_fires_after_first() {
    // AERIAL lives in FLY's second group; both groups resolve independently.
    let query = translate("aerial flying wurms", &dictionary());

    assert_eq!(query.keywords, ["FLYING", "FLYING"]);
    assert_eq!(query.residual, "WURMS");
}

#[test]
fn test_exclusion_marker_splits_translation() {
    let query = translate("red creatures excludes flying and trampling", &dictionary());

    assert_eq!(query.keywords, ["RED"]);
    assert_eq!(query.residual, "CREATURES");
    assert_eq!(query.exclusions, ["FLYING", "TRAMPLE", "AND"]);
}

#[test]
fn test_exclude_word_alone_has_no_criteria() {
    let query = translate("excludes", &dictionary());
    assert!(!query.has_criteria());
}

proptest! {
    /// Re-translating a residual never resolves anything new: once a phrase
    /// has been consumed, its leftover cannot trigger the same rule again.
    #[test]
    fn prop_residual_retranslation_is_inert(
        words in proptest::collection::vec(
            prop::sample::select(vec![
                "CREATURES", "THAT", "CAN", "FLYING", "TRAMPLE", "RED",
                "PLEASE", "THE", "GOBLIN", "FAST",
            ]),
            0..8,
        )
    ) {
        let dictionary = dictionary();
        let input = words.join(" ");

        let first = translate(&input, &dictionary);
        let second = translate(&first.residual, &dictionary);

        prop_assert!(second.keywords.is_empty(),
            "residual {:?} resolved {:?}", first.residual, second.keywords);
    }

    /// Translation never invents text: every residual word is a fragment of
    /// the normalized input.
    #[test]
    fn prop_residual_words_come_from_the_input(raw in "[a-zA-Z ,.!?]{0,40}") {
        let dictionary = dictionary();
        let query = translate(&raw, &dictionary);
        let normalized = cardex::text::keep_alphanumeric(&raw).to_uppercase();

        for word in query.residual.split_whitespace() {
            prop_assert!(normalized.contains(word),
                "residual word {word:?} absent from input {raw:?}");
        }
    }
}
