use alloc::string::String;
use std::io::BufRead;

use crate::source::LineSource;

/// Pulls lines from any [`BufRead`], reusing one scratch buffer across pulls.
///
/// A trailing LF is stripped, then a trailing CR, so both LF- and
/// CRLF-terminated input normalize to the same line text. A bare CR inside a
/// line is left intact, matching the reader's own notion of a line.
#[derive(Debug)]
pub struct BufReadLineSource<R> {
    inner: R,
    line: String,
}

impl<R: BufRead> BufReadLineSource<R> {
    /// Wrap `inner` as a line source.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
        }
    }

    /// Consume the adapter and return the underlying reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> LineSource for BufReadLineSource<R> {
    type Error = std::io::Error;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        self.line.clear();
        if self.inner.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        Ok(Some(self.line.clone()))
    }
}
