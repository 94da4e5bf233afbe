#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linesuffix::{StrLineSource, SuffixedLineStream};

#[derive(Arbitrary, Debug)]
struct Case {
    text: String,
    suffix: String,
    first_line_suffix: Option<String>,
    chunk_sizes: Vec<u8>,
}

// Reading the stream in arbitrary bulk-read chunk sizes must reproduce the
// char-at-a-time output exactly, for any input text and suffix pair.
fuzz_target!(|case: Case| {
    if case.suffix.is_empty() {
        return;
    }

    let mut by_char = SuffixedLineStream::new(
        StrLineSource::new(&case.text),
        case.suffix.as_str(),
        case.first_line_suffix.clone(),
    )
    .unwrap();
    let mut expected = String::new();
    while let Ok(Some(c)) = by_char.read_one() {
        expected.push(c);
    }

    let mut bulk = SuffixedLineStream::new(
        StrLineSource::new(&case.text),
        case.suffix.as_str(),
        case.first_line_suffix,
    )
    .unwrap();
    let mut out = String::new();
    let mut dst = ['\0'; 128];
    let mut sizes = case.chunk_sizes.into_iter();
    loop {
        let size = 1 + usize::from(sizes.next().unwrap_or(0)) % dst.len();
        match bulk.read_into(&mut dst, 0, size).unwrap() {
            Some(n) => out.extend(&dst[..n]),
            None => break,
        }
    }

    assert_eq!(out, expected);
});
