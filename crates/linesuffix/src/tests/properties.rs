use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::QuickCheck;

use crate::{StrLineSource, SuffixedLineStream};

/// Straight-line reference transform over the whole input at once.
///
/// Splits with `str::lines` rather than the crate's own source, so the two
/// implementations only agree if the suffix policy itself agrees.
fn oracle(text: &str, suffix: &str, first: Option<&str>) -> String {
    let mut out = String::new();
    let mut lines = text.lines();
    if let Some(line) = lines.next() {
        out.push_str(line);
        match first {
            Some(f) => out.push_str(f),
            None if !line.is_empty() => out.push_str(suffix),
            None => {}
        }
    }
    for line in lines {
        out.push_str(line);
        if !line.is_empty() {
            out.push_str(suffix);
        }
    }
    out
}

// `str::lines` only understands LF and CRLF; keep generated input LF-only so
// the oracle and the stream agree on line boundaries.
fn lf_only(text: &str) -> String {
    text.chars().filter(|&c| c != '\r').collect()
}

#[test]
fn stream_matches_reference_transform() {
    fn prop(text: String, suffix: String, first: Option<String>) -> bool {
        let text = lf_only(&text);
        let suffix = if suffix.is_empty() {
            ";".to_string()
        } else {
            suffix
        };
        let mut stream = SuffixedLineStream::new(
            StrLineSource::new(&text),
            suffix.as_str(),
            first.clone(),
        )
        .unwrap();
        let out: String = stream.chars().map(Result::unwrap).collect();
        out == oracle(&text, &suffix, first.as_deref())
    }
    QuickCheck::new().quickcheck(prop as fn(String, String, Option<String>) -> bool);
}

#[test]
fn chunked_bulk_reads_match_char_at_a_time_reads() {
    fn prop(text: String, chunk_sizes: Vec<usize>) -> bool {
        let text = lf_only(&text);

        let mut by_char =
            SuffixedLineStream::new(StrLineSource::new(&text), ";", None).unwrap();
        let expected: String = by_char.chars().map(Result::unwrap).collect();

        let mut bulk = SuffixedLineStream::new(StrLineSource::new(&text), ";", None).unwrap();
        let mut out = String::new();
        let mut dst = ['\0'; 64];
        let mut i = 0;
        loop {
            let size = 1 + chunk_sizes.get(i).copied().unwrap_or(0) % dst.len();
            i += 1;
            match bulk.read_into(&mut dst, 0, size).unwrap() {
                Some(n) => out.extend(&dst[..n]),
                None => break,
            }
        }
        out == expected
    }
    QuickCheck::new().quickcheck(prop as fn(String, Vec<usize>) -> bool);
}
