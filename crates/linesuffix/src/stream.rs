use alloc::string::String;

use crate::{
    buffer::ReassemblyBuffer,
    error::{Operation, StreamError},
    source::LineSource,
};

/// Pull-based character stream that re-serializes a line source with a
/// suffix injected after every non-empty line.
///
/// The stream pulls lines lazily: a read asks the refill loop for at least
/// as many characters as it wants to serve, and the loop pulls whole lines
/// (attaching suffixes as it goes) until the request is covered or the
/// source runs out. Two states follow from that: *active*, while the source
/// may still yield lines, and *drained*, once the source has signalled
/// end-of-input and the buffer is empty. Drained is terminal; every read
/// from then on reports end-of-stream.
///
/// Suffix policy, per pulled line:
///
/// - the first line gets `first_line_suffix` unconditionally when one is
///   configured, even if the line is empty;
/// - every other line (and the first, when no dedicated suffix is
///   configured) gets `suffix` only if its text is non-empty.
///
/// Empty lines therefore contribute nothing to the output, which collapses
/// trailing runs of empty lines at end-of-input into nothing.
///
/// All reads take `&mut self`; exclusive access replaces the runtime lock a
/// shared-state design would need.
#[derive(Debug)]
pub struct SuffixedLineStream<S: LineSource> {
    source: S,
    buffer: ReassemblyBuffer,
    source_exhausted: bool,
    first_line_pending: bool,
    suffix: String,
    first_line_suffix: Option<String>,
}

impl<S: LineSource> SuffixedLineStream<S> {
    /// Create a stream over `source`.
    ///
    /// `suffix` follows every non-empty line. `first_line_suffix`, when
    /// `Some`, replaces it for the first line only; `None` means the first
    /// line is treated like any other.
    ///
    /// # Errors
    ///
    /// [`StreamError::EmptySuffix`] when `suffix` is empty.
    pub fn new(
        source: S,
        suffix: impl Into<String>,
        first_line_suffix: Option<String>,
    ) -> Result<Self, StreamError<S::Error>> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(StreamError::EmptySuffix);
        }
        Ok(Self {
            source,
            buffer: ReassemblyBuffer::new(),
            source_exhausted: false,
            first_line_pending: true,
            suffix,
            first_line_suffix,
        })
    }

    /// Read the next character, or `None` at end-of-stream.
    ///
    /// Refills with a request size of 1 when the buffer is empty, so it
    /// never observes stale or duplicate data regardless of how reads are
    /// interleaved with [`read_into`](Self::read_into).
    ///
    /// # Errors
    ///
    /// [`StreamError::Source`] when the underlying pull fails.
    pub fn read_one(&mut self) -> Result<Option<char>, StreamError<S::Error>> {
        self.refill(1)?;
        Ok(self.buffer.pop())
    }

    /// Read up to `len` characters into `dst` starting at `offset`.
    ///
    /// Returns the number of characters copied, or `None` at end-of-stream.
    /// A zero-length request returns `Some(0)` without touching the source.
    /// Otherwise the stream refills until it can cover the request or the
    /// source is exhausted, then serves `min(len, available)`; a short count
    /// only happens when the source has no more immediately available data.
    ///
    /// # Errors
    ///
    /// [`StreamError::OutOfBounds`] when `offset + len` overflows or does
    /// not fit `dst`; [`StreamError::Source`] when the underlying pull
    /// fails.
    pub fn read_into(
        &mut self,
        dst: &mut [char],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, StreamError<S::Error>> {
        let capacity = dst.len();
        match offset.checked_add(len) {
            Some(end) if end <= capacity => {}
            _ => return Err(StreamError::OutOfBounds { offset, len, capacity }),
        }
        if len == 0 {
            return Ok(Some(0));
        }

        self.refill(len)?;
        if self.source_exhausted && self.buffer.is_drained() {
            return Ok(None);
        }
        Ok(Some(self.buffer.copy_into(dst, offset, len)))
    }

    /// Ensure the buffer holds at least `requested` unconsumed characters,
    /// or the source is marked exhausted.
    ///
    /// The buffer is rebuilt, not appended to: the unconsumed tail seeds an
    /// accumulator, whole lines are pulled and suffixed into it until it
    /// covers the request, and the result replaces the buffer with the
    /// cursor back at the front.
    fn refill(&mut self, requested: usize) -> Result<(), StreamError<S::Error>> {
        if self.source_exhausted || self.buffer.available() >= requested {
            return Ok(());
        }

        let mut acc = String::new();
        self.buffer.copy_tail_into(&mut acc);
        let mut accumulated = self.buffer.available();

        while !self.source_exhausted && accumulated < requested {
            match self.source.next_line().map_err(StreamError::Source)? {
                Some(line) => {
                    accumulated += line.chars().count();
                    acc.push_str(&line);
                    accumulated += self.attach_suffix(&mut acc, &line);
                }
                None => self.source_exhausted = true,
            }
        }

        self.buffer.rebuild(&acc);
        Ok(())
    }

    /// Apply the suffix-attachment policy for one pulled line; returns the
    /// number of suffix characters appended.
    fn attach_suffix(&mut self, acc: &mut String, line: &str) -> usize {
        if self.first_line_pending {
            // The first line consumes its designation exactly once, whether
            // or not a dedicated suffix is configured.
            self.first_line_pending = false;
            if let Some(first) = &self.first_line_suffix {
                // Unconditional: applies even to an empty first line.
                acc.push_str(first);
                return first.chars().count();
            }
        }
        if line.is_empty() {
            return 0;
        }
        acc.push_str(&self.suffix);
        self.suffix.chars().count()
    }

    /// Iterate over the remaining characters of the stream.
    pub fn chars(&mut self) -> Chars<'_, S> {
        Chars { stream: self }
    }

    /// Borrow the underlying line source.
    #[must_use]
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Consume the stream and return the underlying line source. Any
    /// buffered but unread characters are discarded.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Whole-line reads are refused: output lines are not stable once
    /// suffixes have been spliced into the stream.
    ///
    /// # Errors
    ///
    /// Always [`StreamError::Unsupported`].
    pub fn read_line(&mut self) -> Result<Option<String>, StreamError<S::Error>> {
        Err(StreamError::Unsupported(Operation::ReadLine))
    }

    /// Whether [`mark`](Self::mark) is supported. Always `false`: the
    /// stream is strictly forward-only.
    #[must_use]
    pub fn mark_supported(&self) -> bool {
        false
    }

    /// Marking a position is refused: the transformed stream has no
    /// seekable position to return to.
    ///
    /// # Errors
    ///
    /// Always [`StreamError::Unsupported`].
    pub fn mark(&mut self, _read_ahead_limit: usize) -> Result<(), StreamError<S::Error>> {
        Err(StreamError::Unsupported(Operation::Mark))
    }

    /// Resetting is refused; see [`mark`](Self::mark).
    ///
    /// # Errors
    ///
    /// Always [`StreamError::Unsupported`].
    pub fn reset(&mut self) -> Result<(), StreamError<S::Error>> {
        Err(StreamError::Unsupported(Operation::Reset))
    }

    /// Skipping is refused: skipped characters could never be recovered on
    /// a single-pass stream.
    ///
    /// # Errors
    ///
    /// Always [`StreamError::Unsupported`].
    pub fn skip(&mut self, _n: u64) -> Result<u64, StreamError<S::Error>> {
        Err(StreamError::Unsupported(Operation::Skip))
    }
}

/// Iterator adapter driving [`SuffixedLineStream::read_one`].
#[derive(Debug)]
pub struct Chars<'a, S: LineSource> {
    stream: &'a mut SuffixedLineStream<S>,
}

impl<S: LineSource> Iterator for Chars<'_, S> {
    type Item = Result<char, StreamError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stream.read_one() {
            Ok(Some(c)) => Some(Ok(c)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
