//! End-to-end tests for the localization pipeline against in-memory
//! bundles.
//!
//! The process default bundle is deliberately never installed here, so the
//! default call forms exercise the fallback-to-key path; the default-bundle
//! behavior lives in its own test binary.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use googletest::prelude::*;
use i18n_format::{
    Bundle,
    DEFAULT_TABLE,
    FormatError,
    LocalizedString,
    Mode,
    Segment,
    StringTable,
    SubstituteError,
    segments,
    substitute,
    synthesize,
};
use rstest::rstest;

/// Builds a bundle whose default table translates the sorting example and
/// whose `Alternative` table reorders it.
fn sorting_bundle() -> Bundle {
    let mut default_table = StringTable::new();
    default_table
        .insert("With sorting %@, %@, and %@.", "start: %@, mid: %@, end: %@");

    let mut alternative = StringTable::new();
    alternative.insert("With sorting %@, %@, and %@.", "end: %@, mid: %@, start: %@");

    let mut bundle = Bundle::new();
    bundle.add_table(DEFAULT_TABLE, default_table);
    bundle.add_table("Alternative", alternative);
    bundle
}

/// Segments for `"With sorting {x}, {y}, and {z}."`.
fn sorting_segments() -> Vec<Segment> {
    let x = "String1";
    let y = "String2";
    let z = 42;
    segments!["With sorting " {x} ", " {y} ", and " {z} "."]
}

// --- Property 1: all-literal sequences -------------------------------

#[rstest]
#[case(Mode::Sequential)]
#[case(Mode::Positional)]
fn all_literal_synthesis_and_identity_substitution(#[case] mode: Mode) {
    let segs = vec![Segment::literal("Simple "), Segment::literal(""), Segment::literal("String")];

    let synthesized = synthesize(&segs, mode);

    assert_eq!(synthesized.key, "Simple String");
    assert_eq!(synthesized.args, Vec::<String>::new());
    // The key used as its own template reproduces the literal text.
    assert_eq!(
        substitute(&synthesized.key, &synthesized.args, mode),
        Ok("Simple String".to_string())
    );
}

#[rstest]
#[case(Mode::Sequential)]
#[case(Mode::Positional)]
fn all_literal_text_with_token_shaped_characters_passes_through(#[case] mode: Mode) {
    // Pure-literal strings are plain lookups; the text is never scanned
    // for placeholder tokens.
    let string = LocalizedString::from_segments(
        vec![Segment::literal("Progress: 100%@ done")],
        mode,
    );

    let result = string.localize_in(&Bundle::new());

    assert_eq!(result, Ok("Progress: 100%@ done".to_string()));
}

// --- Property 2: argument order is mode-independent -------------------

#[rstest]
#[case(Mode::Sequential)]
#[case(Mode::Positional)]
fn args_match_value_segments_in_source_order(#[case] mode: Mode) {
    let synthesized = synthesize(&sorting_segments(), mode);

    assert_eq!(synthesized.args, vec!["String1", "String2", "42"]);
}

// --- Property 3: fallback-to-key round trip ---------------------------

#[rstest]
#[case(Mode::Sequential)]
#[case(Mode::Positional)]
fn untranslated_call_equals_substituting_the_key_itself(#[case] mode: Mode) {
    let string = LocalizedString::from_segments(sorting_segments(), mode);

    let formatted = string.localize_in(&Bundle::new()).unwrap();

    let synthesized = synthesize(string.segments(), mode);
    let expected = substitute(&synthesized.key, &synthesized.args, mode).unwrap();
    assert_eq!(formatted, expected);
    assert_eq!(formatted, "With sorting String1, String2, and 42.");
}

// --- Property 4: positional reordering --------------------------------

#[googletest::test]
fn positional_template_reorders_arguments() {
    let segs = segments!["A " {"1"} " B " {"2"} ""];

    let sequential = synthesize(&segs, Mode::Sequential);
    expect_that!(sequential.key, eq("A %@ B %@"));
    expect_that!(sequential.args, elements_are![eq("1"), eq("2")]);

    let positional = synthesize(&segs, Mode::Positional);
    expect_that!(positional.key, eq("A %1$@ B %2$@"));

    // A translator moved both placeholders and the literal text around.
    let reordered = substitute("%2$@ B %1$@ A", &positional.args, Mode::Positional);
    expect_that!(reordered, ok(eq("2 B 1 A")));
}

// --- Property 5: sequential consumption order --------------------------

#[googletest::test]
fn sequential_substitution_follows_template_order() {
    let string = LocalizedString::from_segments(sorting_segments(), Mode::Sequential);

    let result = string.localize_with("Alternative", &sorting_bundle());

    // Order of appearance in the template, not source semantic order.
    expect_that!(result, ok(eq("end: String1, mid: String2, start: 42")));
}

// --- Property 6: arity mismatch is an error ----------------------------

#[googletest::test]
fn out_of_range_ordinal_fails_loudly() {
    let mut table = StringTable::new();
    table.insert("%1$@ and %2$@", "%1$@, %2$@, and %3$@");
    let mut bundle = Bundle::new();
    bundle.add_table(DEFAULT_TABLE, table);

    let result = LocalizedString::positional()
        .literal("")
        .value("a")
        .literal(" and ")
        .value("b")
        .literal("")
        .localize_in(&bundle);

    expect_that!(
        result,
        err(matches_pattern!(FormatError::Substitution {
            key: eq("%1$@ and %2$@"),
            source: eq(&SubstituteError::ArityMismatch { index: 3, available: 2 }),
        }))
    );
}

// --- Call forms -------------------------------------------------------

#[googletest::test]
fn default_table_and_alternative_table_resolve_differently() {
    let string = LocalizedString::from_segments(sorting_segments(), Mode::Sequential);
    let bundle = sorting_bundle();

    expect_that!(
        string.localize_in(&bundle),
        ok(eq("start: String1, mid: String2, end: 42"))
    );
    expect_that!(
        string.localize_with("Alternative", &bundle),
        ok(eq("end: String1, mid: String2, start: 42"))
    );
}

#[googletest::test]
fn simple_string_resolves_per_table_and_bundle() {
    let mut main_table = StringTable::new();
    main_table.insert("Simple String", "This is a translation of a simple string");
    let mut alternative = StringTable::new();
    alternative.insert("Simple String", "Translation of simple string (alternative file)");
    let mut main_bundle = Bundle::new();
    main_bundle.add_table(DEFAULT_TABLE, main_table);
    main_bundle.add_table("Alternative", alternative);

    let mut other_table = StringTable::new();
    other_table.insert("Simple String", "Translation in Alternative Bundle");
    let mut other_bundle = Bundle::new();
    other_bundle.add_table(DEFAULT_TABLE, other_table);

    let string = LocalizedString::sequential().literal("Simple String");

    expect_that!(
        string.localize_in(&main_bundle),
        ok(eq("This is a translation of a simple string"))
    );
    expect_that!(
        string.localize_with("Alternative", &main_bundle),
        ok(eq("Translation of simple string (alternative file)"))
    );
    expect_that!(
        string.localize_in(&other_bundle),
        ok(eq("Translation in Alternative Bundle"))
    );
}

#[googletest::test]
fn default_forms_fall_back_when_no_default_bundle_is_installed() {
    let string = LocalizedString::sequential().literal("Hello, ").value("Eve").literal("!");

    expect_that!(string.localize(), ok(eq("Hello, Eve!")));
    expect_that!(string.localize_table("Anything"), ok(eq("Hello, Eve!")));
}

// --- Mode separation --------------------------------------------------

#[googletest::test]
fn sequential_key_never_matches_positional_entries() {
    // The table was authored for positional keys only.
    let mut table = StringTable::new();
    table.insert("Hi %1$@", "Servus %1$@");
    let mut bundle = Bundle::new();
    bundle.add_table(DEFAULT_TABLE, table);

    let sequential = LocalizedString::sequential().literal("Hi ").value("Ann");

    // Sequential key is "Hi %@": no entry, falls back to the key.
    expect_that!(sequential.localize_in(&bundle), ok(eq("Hi Ann")));

    let positional = LocalizedString::positional().literal("Hi ").value("Ann");
    expect_that!(positional.localize_in(&bundle), ok(eq("Servus Ann")));
}
