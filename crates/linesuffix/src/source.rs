use alloc::string::String;
use core::convert::Infallible;

/// A collaborator that yields terminator-stripped text segments one at a
/// time, signalling end-of-input with `None`.
///
/// Terminator conventions (LF, CRLF, bare CR) are the source's
/// responsibility; the stream never sees them. A pull may block on whatever
/// I/O backs the source, and a returned error is final from the stream's
/// point of view.
pub trait LineSource {
    /// Error produced by a failed pull.
    type Error;

    /// Pull the next line with its terminators stripped, or `None` once the
    /// input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>, Self::Error>;
}

/// Infallible in-memory source over a borrowed string.
///
/// Splits on LF, CRLF, and bare CR. A trailing terminator does not produce a
/// final empty line, matching reader semantics rather than `str::split`.
#[derive(Debug)]
pub struct StrLineSource<'a> {
    rest: &'a str,
}

impl<'a> StrLineSource<'a> {
    /// Wrap `text` as a line source.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl LineSource for StrLineSource<'_> {
    type Error = Infallible;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        if self.rest.is_empty() {
            return Ok(None);
        }
        let (line, rest) = match self.rest.find(['\n', '\r']) {
            Some(i) => {
                let after = if self.rest[i..].starts_with("\r\n") {
                    i + 2
                } else {
                    i + 1
                };
                (&self.rest[..i], &self.rest[after..])
            }
            None => (self.rest, ""),
        };
        self.rest = rest;
        Ok(Some(String::from(line)))
    }
}
