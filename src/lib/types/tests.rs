use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{CommentBody, Paragraph};

#[test]
fn splits_on_blank_lines() {
    let body = CommentBody::new("first paragraph\n\nsecond one\nstill second\n\n\nthird");
    assert_eq!(
        body.paragraphs(),
        vec![
            Paragraph::new("first paragraph"),
            Paragraph::new("second one\nstill second"),
            Paragraph::new("third"),
        ]
    );
}

#[test]
fn crlf_boundaries_split_too() {
    let body = CommentBody::new("one\r\n\r\ntwo\r\n");
    assert_eq!(
        body.paragraphs(),
        vec![Paragraph::new("one"), Paragraph::new("two")]
    );
}

#[test]
fn whitespace_only_body_has_no_paragraphs() {
    assert!(CommentBody::new("  \n\n \t\n").paragraphs().is_empty());
}

#[test]
fn single_paragraph_round_trips() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[a-zA-Z0-9 .,*>\\[\\]()]{1,40}", |line| {
            let trimmed_is_empty = line.trim().is_empty();
            let paragraphs = CommentBody::new(line.clone()).paragraphs();
            if trimmed_is_empty {
                prop_assert!(paragraphs.is_empty());
            } else {
                prop_assert_eq!(paragraphs, vec![Paragraph::new(line.clone())]);
            }
            Ok(())
        })
        .unwrap();
}
