use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use crate::transformer::{Pass, italic::ItalicPass};

#[test]
fn converts_single_span() {
    assert_eq!(ItalicPass.apply("*test*"), "<i>test</i>");
}

#[test]
fn doubled_delimiters_convert_innermost_pair_only() {
    assert_eq!(ItalicPass.apply("**test**"), "*<i>test</i>*");
}

#[test]
fn converts_independent_spans() {
    assert_eq!(ItalicPass.apply("*two* at *once*"), "<i>two</i> at <i>once</i>");
}

#[test]
fn bare_delimiter_runs_pass_through() {
    assert_eq!(ItalicPass.apply("******"), "******");
}

#[test]
fn multiplication_is_not_italics() {
    assert_eq!(
        ItalicPass.apply("This is 1*1 and 2*2"),
        "This is 1*1 and 2*2"
    );
    assert_eq!(
        ItalicPass.apply("This is 3 * 3 and 4 * 4"),
        "This is 3 * 3 and 4 * 4"
    );
}

#[test]
fn surrounding_brackets_stay_outside_the_span() {
    assert_eq!(ItalicPass.apply("(*test*)"), "(<i>test</i>)");
    assert_eq!(ItalicPass.apply("[*test*]"), "[<i>test</i>]");
    assert_eq!(ItalicPass.apply("{*test*}"), "{<i>test</i>}");
}

#[test]
fn leaves_markup_tags_alone() {
    let input = r#"<a href="a*b" class="linkified">x</a> *real*"#;
    assert_eq!(
        ItalicPass.apply(input),
        r#"<a href="a*b" class="linkified">x</a> <i>real</i>"#
    );
}

#[test]
fn does_not_rematch_own_output() {
    let once = ItalicPass.apply("*two* at *once*");
    assert_eq!(ItalicPass.apply(&once), once);
}

#[test]
fn asterisk_free_text_passes_through() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[^*<>]{0,40}", |s| {
            prop_assert_eq!(ItalicPass.apply(&s), s.clone());
            Ok(())
        })
        .unwrap();
}

#[test]
fn span_content_round_trips() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[a-zA-Zî][a-zA-Z î]{0,20}[a-zA-Zî]", |word| {
            let out = ItalicPass.apply(&format!("*{word}*"));
            prop_assert_eq!(out, format!("<i>{word}</i>"));
            Ok(())
        })
        .unwrap();
}
