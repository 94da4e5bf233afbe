use alloc::string::String;

use rstest::rstest;

use crate::{StrLineSource, StreamError, SuffixedLineStream};

fn transform(text: &str, suffix: &str, first: Option<&str>) -> String {
    let mut stream =
        SuffixedLineStream::new(StrLineSource::new(text), suffix, first.map(String::from))
            .unwrap();
    stream.chars().map(Result::unwrap).collect()
}

#[test]
fn empty_suffix_is_rejected_at_construction() {
    let err = SuffixedLineStream::new(StrLineSource::new("a\n"), "", None).unwrap_err();
    assert_eq!(err, StreamError::EmptySuffix);
}

#[rstest]
#[case::fully_terminated("A,B,C\n1,2,3\n4,5,6\n")]
#[case::missing_last_terminator("A,B,C\n1,2,3\n4,5,6")]
#[case::trailing_empty_lines("A,B,C\n1,2,3\n4,5,6\n\n\n\n")]
fn csv_rows_get_header_and_row_suffixes(#[case] input: &str) {
    assert_eq!(
        transform(input, ",x\n", Some(",D\n")),
        "A,B,C,D\n1,2,3,x\n4,5,6,x\n"
    );
}

#[test]
fn without_a_first_line_suffix_every_row_uses_the_ordinary_one() {
    assert_eq!(
        transform("A,B,C\n1,2,3\n4,5,6\n", ",x\n", None),
        "A,B,C,x\n1,2,3,x\n4,5,6,x\n"
    );
}

#[test]
fn interior_empty_lines_contribute_no_suffix() {
    assert_eq!(transform("a\n\nb\n", "+", None), "a+b+");
}

#[test]
fn empty_first_line_still_gets_the_dedicated_suffix() {
    assert_eq!(transform("\nb\n", "+", Some("#")), "#b+");
}

#[test]
fn empty_first_line_without_dedicated_suffix_gets_nothing() {
    // The empty first line still consumes the first-line designation.
    assert_eq!(transform("\nb\n", "+", None), "b+");
}

#[test]
fn crlf_and_bare_cr_terminators_are_stripped() {
    assert_eq!(transform("a\r\nb\rc\n", "+", None), "a+b+c+");
}

#[rstest]
#[case::no_first(None)]
#[case::with_first(Some("#"))]
fn empty_input_yields_empty_output(#[case] first: Option<&'static str>) {
    // No line is ever pulled, so not even the first-line suffix appears.
    assert_eq!(transform("", "+", first), "");
}

#[test]
fn multibyte_characters_round_trip() {
    assert_eq!(
        transform("héllo\nwörld\n", "→\n", Some("✓\n")),
        "héllo✓\nwörld→\n"
    );
}
